use chrono::{DateTime, Local, Utc};

/// Describe how long ago `at` was relative to `now`: `5m ago`, `3h ago`, `2d ago`,
/// or the local calendar date once it is a week or older.
/// Timestamps in the future produce negative minutes.
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    let days = elapsed.num_days();
    if days < 7 {
        return format!("{}d ago", days);
    }
    at.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}

pub fn time_ago_now(at: DateTime<Utc>) -> String {
    time_ago(at, Utc::now())
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_minutes() {
        assert_eq!(time_ago(now() - Duration::minutes(5), now()), "5m ago");
        assert_eq!(time_ago(now(), now()), "0m ago");
        assert_eq!(time_ago(now() - Duration::seconds(59 * 60 + 59), now()), "59m ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(time_ago(now() - Duration::hours(3), now()), "3h ago");
        assert_eq!(time_ago(now() - Duration::minutes(60), now()), "1h ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(time_ago(now() - Duration::days(2), now()), "2d ago");
        assert_eq!(time_ago(now() - Duration::hours(24 * 7 - 1), now()), "6d ago");
    }

    #[test]
    fn test_calendar_date_after_a_week() {
        let at = now() - Duration::days(10);
        let rendered = time_ago(at, now());
        assert!(!rendered.ends_with("ago"));
        assert_eq!(rendered, at.with_timezone(&Local).format("%-m/%-d/%Y").to_string());
    }

    #[test]
    fn test_future_timestamp_does_not_panic() {
        assert_eq!(time_ago(now() + Duration::minutes(3), now()), "-3m ago");
    }
}
