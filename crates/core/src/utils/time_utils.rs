use chrono::{Local, NaiveDate};

use crate::errors::{Result, ValidationError};

/// Far-future date used to push undated records to the end of date-ordered views.
pub fn undated_sentinel() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Inclusive day count between two dates: `(end - start).days + 1`.
///
/// Returns 0 when either bound is missing. Inverted ranges are not clamped,
/// so callers that validate ordering never see a negative value.
pub fn inclusive_day_count(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (end - start).num_days() + 1,
        _ => 0,
    }
}

/// Number of nights between check-in and check-out.
///
/// Missing dates or an inverted range count as zero nights.
pub fn nights_between(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> i64 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => (check_out - check_in).num_days().max(0),
        _ => 0,
    }
}

/// Rejects ranges whose end precedes their start. Open ranges are accepted.
pub fn ensure_date_order(
    label: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<()> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(ValidationError::invalid(format!(
                "{label}: end date {end} precedes start date {start}"
            ))
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inclusive_day_count_counts_both_endpoints() {
        assert_eq!(
            inclusive_day_count(Some(date(2024, 11, 8)), Some(date(2024, 12, 28))),
            51
        );
        assert_eq!(
            inclusive_day_count(Some(date(2024, 11, 8)), Some(date(2024, 11, 8))),
            1
        );
    }

    #[test]
    fn test_inclusive_day_count_missing_dates() {
        assert_eq!(inclusive_day_count(None, Some(date(2024, 1, 1))), 0);
        assert_eq!(inclusive_day_count(Some(date(2024, 1, 1)), None), 0);
        assert_eq!(inclusive_day_count(None, None), 0);
    }

    #[test]
    fn test_nights_between() {
        assert_eq!(
            nights_between(Some(date(2024, 11, 9)), Some(date(2024, 11, 12))),
            3
        );
        assert_eq!(
            nights_between(Some(date(2024, 11, 12)), Some(date(2024, 11, 9))),
            0
        );
        assert_eq!(nights_between(None, Some(date(2024, 11, 9))), 0);
    }

    #[test]
    fn test_ensure_date_order() {
        assert!(ensure_date_order("trip", Some(date(2024, 1, 1)), Some(date(2024, 1, 1))).is_ok());
        assert!(ensure_date_order("trip", None, Some(date(2024, 1, 1))).is_ok());
        assert!(ensure_date_order("trip", Some(date(2024, 1, 2)), Some(date(2024, 1, 1))).is_err());
    }

    #[test]
    fn test_undated_sentinel_sorts_after_real_dates() {
        assert!(undated_sentinel() > date(2999, 1, 1));
        assert_eq!(undated_sentinel(), date(9999, 12, 31));
    }
}
