//! Cell formatting helpers shared by the record types.

use chrono::{DateTime, NaiveDate};

/// Render a server date as `YYYY-MM-DD`.
///
/// Accepts RFC 3339 timestamps and bare dates; anything else is shown as-is.
pub fn format_date(raw: &Option<String>) -> String {
    let Some(raw) = raw.as_deref() else {
        return String::new();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Render an amount with two decimals and thousands separators.
pub fn format_amount(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return String::new();
    };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Render an optional number, empty when absent.
pub fn format_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_variants() {
        assert_eq!(
            format_date(&Some("2024-03-05T10:00:00Z".to_string())),
            "2024-03-05"
        );
        assert_eq!(format_date(&Some("2024-03-05".to_string())), "2024-03-05");
        assert_eq!(format_date(&Some("next week".to_string())), "next week");
        assert_eq!(format_date(&None), "");
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(Some(1234567.5)), "1,234,567.50");
        assert_eq!(format_amount(Some(12.0)), "12.00");
        assert_eq!(format_amount(Some(-1000.0)), "-1,000.00");
        assert_eq!(format_amount(None), "");
    }
}
