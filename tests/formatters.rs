#[cfg(test)]
mod tests {
    use fartlek::libs::formatter::{format_minutes, format_seconds};

    #[test]
    fn test_format_seconds_zero() {
        assert_eq!(format_seconds(0), "0s");
    }

    #[test]
    fn test_format_seconds_up_to_one_minute() {
        assert_eq!(format_seconds(1), "1s");
        assert_eq!(format_seconds(30), "30s");
        assert_eq!(format_seconds(59), "59s");
        // exactly one minute is still printed in seconds
        assert_eq!(format_seconds(60), "60s");
    }

    #[test]
    fn test_format_seconds_over_one_minute() {
        assert_eq!(format_seconds(61), "1m1s");
        assert_eq!(format_seconds(90), "1m30s");
        assert_eq!(format_seconds(120), "2m0s");
        assert_eq!(format_seconds(125), "2m5s");
    }

    #[test]
    fn test_format_seconds_hiit_activity_bounds() {
        // shortest and longest moderate activity parts
        assert_eq!(format_seconds(90), "1m30s");
        assert_eq!(format_seconds(109), "1m49s");
    }

    #[test]
    fn test_format_seconds_large_values() {
        assert_eq!(format_seconds(3600), "60m0s");
        assert_eq!(format_seconds(3661), "61m1s");
        // session totals are u64 and may pass u32::MAX
        assert_eq!(format_seconds(u64::from(u32::MAX) + 1), "71582788m16s");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0min");
        assert_eq!(format_minutes(4), "4min");
        assert_eq!(format_minutes(21), "21min");
    }
}
