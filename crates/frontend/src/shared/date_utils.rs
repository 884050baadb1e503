//! Date and time formatting used across pages
use chrono::{DateTime, Local, Utc};

/// Scan time in the browser's local zone, "HH:MM:SS"
pub fn format_scan_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Scan time for exports, local zone, "YYYY-MM-DD HH:MM:SS"
pub fn format_export_time(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Format an ISO datetime string to "DD.MM.YYYY HH:MM:SS".
/// Unparseable input is returned unchanged.
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once(&['T', ' '][..]) {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part
                    .split(&['.', 'Z', '+'][..])
                    .next()
                    .unwrap_or(time_part);
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn test_export_time_is_local() {
        let utc = Utc.with_ymd_and_hms(2024, 5, 6, 12, 30, 15).unwrap();
        let text = format_export_time(&utc);
        let naive = NaiveDateTime::parse_from_str(&text, "%Y-%m-%d %H:%M:%S").unwrap();
        let back = Local.from_local_datetime(&naive).earliest().unwrap();
        assert_eq!(back.with_timezone(&Utc), utc);
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59:59");
        assert_eq!(format_datetime("2024-12-31 08:00:00"), "31.12.2024 08:00:00");
        assert_eq!(
            format_datetime("2024-12-31T08:00:00+07:00"),
            "31.12.2024 08:00:00"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_datetime(""), "");
    }
}
