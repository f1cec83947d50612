// src/utils/format.rs
use chrono::{DateTime, Local, TimeZone, Utc};

// Format a duration for display
pub fn format_time_ago(time: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(time);

    let seconds = duration.num_seconds();

    if seconds < 60 {
        format!("{} seconds ago", seconds.max(0))
    } else if seconds < 3600 {
        format!("{} minutes ago", duration.num_minutes())
    } else if seconds < 86400 {
        format!("{} hours ago", duration.num_hours())
    } else if seconds < 2592000 {
        format!("{} days ago", duration.num_days())
    } else if seconds < 31536000 {
        format!("{} months ago", duration.num_days() / 30)
    } else {
        format!("{} years ago", duration.num_days() / 365)
    }
}

/// Human-readable local time, e.g. `3/1/2024, 12:30:00 PM`.
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    format_timestamp_in(time, &Local)
}

pub fn format_timestamp_in<Tz: TimeZone>(time: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

// Mask all but the last few characters of a secret
pub fn mask_password(password: &str, visible: usize) -> String {
    let count = password.chars().count();
    if count <= visible {
        return "*".repeat(count);
    }
    let tail: String = password.chars().skip(count - visible).collect();
    format!("{}{}", "*".repeat(count - visible), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn timestamp_uses_twelve_hour_clock() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 15, 4, 9).unwrap();
        assert_eq!(format_timestamp_in(time, &Utc), "3/1/2024, 3:04:09 PM");
    }

    #[test]
    fn time_ago_buckets() {
        assert_eq!(format_time_ago(Utc::now() - Duration::minutes(5)), "5 minutes ago");
        assert_eq!(format_time_ago(Utc::now() - Duration::hours(3)), "3 hours ago");
        assert_eq!(format_time_ago(Utc::now() - Duration::days(2)), "2 days ago");
    }

    #[test]
    fn mask_keeps_tail() {
        assert_eq!(mask_password("secret", 2), "****et");
        assert_eq!(mask_password("ab", 4), "**");
    }
}
