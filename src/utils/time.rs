use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Millisecond timestamp of `now`, bumped past `last` when the clock has not advanced.
pub fn next_timestamp_id(now: DateTime<Utc>, last: i64) -> i64 {
    now.timestamp_millis().max(last + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn uses_clock_when_it_moved_forward() {
        let t = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(next_timestamp_id(t, 5), 1_700_000_000_000);
    }

    #[test]
    fn never_repeats_within_the_same_millisecond() {
        let t = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let first = next_timestamp_id(t, 0);
        let second = next_timestamp_id(t, first);
        let third = next_timestamp_id(t, second);
        assert!(first < second && second < third);
    }
}
