// Period resolution tests.
//
// The invariant under test: the prior range always spans a FULL period
// (day, 7-day week, calendar month) even when the current range is cut off
// at "now" mid-period, and the two ranges are adjacent.

use chrono::{Datelike, Duration, TimeZone, Utc, Weekday};
use comanda::{PeriodResolver, PeriodType};

#[test]
fn test_prior_spans_full_day_when_current_is_partial() {
    let now = Utc.with_ymd_and_hms(2025, 7, 3, 9, 15, 0).unwrap();
    let pair = PeriodResolver::resolve(now, PeriodType::Daily);

    assert!(pair.current.duration() < Duration::days(1));
    assert_eq!(pair.prior.duration(), Duration::days(1));
    assert_eq!(pair.prior.end, pair.current.start);
}

#[test]
fn test_prior_spans_full_week_when_current_is_partial() {
    // Wednesday mid-week
    let now = Utc.with_ymd_and_hms(2025, 7, 2, 18, 0, 0).unwrap();
    let pair = PeriodResolver::resolve(now, PeriodType::Weekly);

    assert!(pair.current.duration() < Duration::days(7));
    assert_eq!(pair.prior.duration(), Duration::days(7));
    assert_eq!(pair.prior.end, pair.current.start);
    assert_eq!(pair.current.start.weekday(), Weekday::Sun);
    assert_eq!(pair.prior.start.weekday(), Weekday::Sun);
}

#[test]
fn test_prior_spans_full_previous_month() {
    // Mid-March: prior must be all of February
    let now = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
    let pair = PeriodResolver::resolve(now, PeriodType::Monthly);

    assert_eq!(
        pair.prior.start,
        Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
        pair.prior.end,
        Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(pair.prior.duration(), Duration::days(28));
}

#[test]
fn test_current_end_is_now_for_every_period() {
    let now = Utc.with_ymd_and_hms(2025, 7, 2, 18, 30, 45).unwrap();
    for period_type in [PeriodType::Daily, PeriodType::Weekly, PeriodType::Monthly] {
        let pair = PeriodResolver::resolve(now, period_type);
        assert_eq!(pair.current.end, now, "{period_type} current must end at now");
        assert!(pair.current.start <= now);
    }
}

#[test]
fn test_saturday_belongs_to_week_started_six_days_earlier() {
    // Saturday 2025-03-15; the week began Sunday 2025-03-09
    let now = Utc.with_ymd_and_hms(2025, 3, 15, 20, 0, 0).unwrap();
    let pair = PeriodResolver::resolve(now, PeriodType::Weekly);

    assert_eq!(
        pair.current.start,
        Utc.with_ymd_and_hms(2025, 3, 9, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_first_of_month_has_empty_current_but_full_prior() {
    let now = Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();
    let pair = PeriodResolver::resolve(now, PeriodType::Monthly);

    assert_eq!(pair.current.duration(), Duration::zero());
    // July has 31 days
    assert_eq!(pair.prior.duration(), Duration::days(31));
}

#[test]
fn test_unrecognized_period_param_defaults_to_weekly() {
    assert_eq!(PeriodType::from_param("yearly"), PeriodType::Weekly);
    assert_eq!(PeriodType::from_param("  Daily "), PeriodType::Daily);
    assert_eq!(PeriodType::from_param("Weekly"), PeriodType::Weekly);
    assert_eq!(PeriodType::default(), PeriodType::Weekly);
}
