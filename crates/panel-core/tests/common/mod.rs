#![allow(dead_code)]

use chrono::NaiveDateTime;

use panel_model::Event;

pub fn event(org: &str, prof: &str, cohort: &str, ts: &str, event_type: &str) -> Event {
    Event {
        organization_id: org.to_string(),
        professional_id: prof.to_string(),
        professional_cohort: cohort.to_string(),
        ts: NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S").expect("fixture timestamp"),
        event_type: event_type.to_string(),
    }
}

/// Synthetic event log: 4 organizations x 2 cohorts x 10 professionals,
/// 80 professionals total, each with 1 to 5 events inside March 2023.
pub fn fixture_events() -> Vec<Event> {
    let mut events = Vec::new();
    for org_index in 0..4 {
        let org = format!("org-{org_index}");
        for cohort in ["2019", "2020"] {
            for prof_index in 0..10 {
                let prof = format!("prof-{org_index}-{cohort}-{prof_index}");
                for event_index in 0..(prof_index % 5) + 1 {
                    let day = (prof_index + event_index) % 27 + 1;
                    events.push(event(
                        &org,
                        &prof,
                        cohort,
                        &format!("2023-03-{day:02}T10:00:00"),
                        "login",
                    ));
                }
            }
        }
    }
    events
}
