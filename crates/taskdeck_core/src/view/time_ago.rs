//! Relative age labels ("3 minutes ago").
//!
//! Buckets floor each unit and are inclusive at their lower bound, so
//! exactly 60 seconds reads "1 minute ago".

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
const JUST_NOW_MAX_SECS: i64 = 5;

/// Formats the label for a task created at `created_ms` as seen at `now_ms`.
pub fn time_ago(created_ms: i64, now_ms: i64) -> String {
    let delta_secs = now_ms.saturating_sub(created_ms).div_euclid(1000);
    time_ago_secs(delta_secs)
}

/// Formats the label for an age of `delta_secs` seconds.
///
/// Negative ages (clock skew) read "just now".
pub fn time_ago_secs(delta_secs: i64) -> String {
    if delta_secs >= SECS_PER_DAY {
        return plural(delta_secs / SECS_PER_DAY, "day");
    }
    if delta_secs >= SECS_PER_HOUR {
        return plural(delta_secs / SECS_PER_HOUR, "hour");
    }
    if delta_secs >= SECS_PER_MINUTE {
        return plural(delta_secs / SECS_PER_MINUTE, "minute");
    }
    if delta_secs <= JUST_NOW_MAX_SECS {
        return "just now".to_string();
    }
    format!("{delta_secs} seconds ago")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::{time_ago, time_ago_secs};

    #[test]
    fn bucket_boundaries() {
        assert_eq!(time_ago_secs(0), "just now");
        assert_eq!(time_ago_secs(4), "just now");
        assert_eq!(time_ago_secs(5), "just now");
        assert_eq!(time_ago_secs(6), "6 seconds ago");
        assert_eq!(time_ago_secs(59), "59 seconds ago");
        assert_eq!(time_ago_secs(60), "1 minute ago");
        assert_eq!(time_ago_secs(119), "1 minute ago");
        assert_eq!(time_ago_secs(120), "2 minutes ago");
        assert_eq!(time_ago_secs(3599), "59 minutes ago");
        assert_eq!(time_ago_secs(3600), "1 hour ago");
        assert_eq!(time_ago_secs(86_399), "23 hours ago");
        assert_eq!(time_ago_secs(86_400), "1 day ago");
        assert_eq!(time_ago_secs(3 * 86_400 + 5), "3 days ago");
    }

    #[test]
    fn negative_age_is_just_now() {
        assert_eq!(time_ago_secs(-30), "just now");
        assert_eq!(time_ago(10_000, 9_500), "just now");
    }

    #[test]
    fn millisecond_deltas_floor_to_seconds() {
        assert_eq!(time_ago(0, 6_999), "6 seconds ago");
        assert_eq!(time_ago(1_000, 61_000), "1 minute ago");
    }
}
