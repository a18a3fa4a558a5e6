//! Date and time formatting shared by all pages

use chrono::{DateTime, Utc};

/// "15.03.2024 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// "15.03.2024"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// Formats an optional timestamp, "—" when absent
pub fn format_datetime_opt(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

/// "1h 05m", "45m"
pub fn format_duration_minutes(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}
