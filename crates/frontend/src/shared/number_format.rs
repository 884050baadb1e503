//! Number formatting for cards and tables

/// Integer with a space as thousands separator: 1234567 -> "1 234 567"
pub fn format_count(value: u64) -> String {
    let s = value.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Percentage with the given decimals, "—" when there is nothing to show
pub fn format_percent(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.prec$}%", v, prec = decimals),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1 000");
        assert_eq!(format_count(1234567), "1 234 567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(87.456), 1), "87.5%");
        assert_eq!(format_percent(Some(100.0), 0), "100%");
        assert_eq!(format_percent(None, 1), "—");
        assert_eq!(format_percent(Some(f64::NAN), 1), "—");
    }
}
