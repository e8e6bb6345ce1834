use chrono::{Datelike, NaiveDate};

use crate::error::{Result, SamplerError};

/// Maps a raw cohort date (`YYYY-MM-DD`) to its discrete cohort bucket label.
///
/// Buckets are yearly: every date of the same calendar year maps to the same
/// label (`"2019-06-14"` becomes `"2019"`), and distinct labels cover
/// non-overlapping date ranges. Pure function: same input, same label.
///
/// # Errors
///
/// Returns [`SamplerError::ColumnType`] when the input is not a
/// calendar-valid `YYYY-MM-DD` date.
pub fn bucketize_cohort(raw: &str) -> Result<String> {
    let date = parse_strict_date(raw).ok_or_else(|| SamplerError::ColumnType {
        column: "professional_cohort".to_string(),
        message: format!("expected YYYY-MM-DD, got {raw:?}"),
    })?;
    Ok(format!("{:04}", date.year()))
}

/// Parses `YYYY-MM-DD` without chrono's lenient single-digit acceptance.
pub(crate) fn parse_strict_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit())
    {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_to_year() {
        assert_eq!(bucketize_cohort("2019-01-01").expect("valid"), "2019");
        assert_eq!(bucketize_cohort("2019-12-31").expect("valid"), "2019");
        assert_eq!(bucketize_cohort("2020-01-01").expect("valid"), "2020");
    }

    #[test]
    fn is_deterministic() {
        let first = bucketize_cohort("2021-07-15").expect("valid");
        let second = bucketize_cohort("2021-07-15").expect("valid");
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_malformed_dates() {
        for raw in ["2019", "2019-1-1", "not-a-date", "2019/01/01", "2019-02-30"] {
            let error = bucketize_cohort(raw).expect_err("should reject");
            assert!(matches!(
                error,
                SamplerError::ColumnType { ref column, .. } if column == "professional_cohort"
            ));
        }
    }
}
