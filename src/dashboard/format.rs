//! Number and timestamp formatting for table cells

use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike};

/// Thousands-separated number with at most three fraction digits,
/// e.g. `17000` -> `17,000`, `-1234.5678` -> `-1,234.568`
pub fn format_locale(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Small losses that round to zero still show as `-0`
    let sign = if value < 0.0 { "-" } else { "" };

    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// `+` prefix for zero and gains; losses already carry `-`
pub fn format_signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_locale(value))
    } else {
        format_locale(value)
    }
}

/// `"<qty>口 @ <price>"` when something filled, `"-"` otherwise
pub fn fill_info(fill_quantity: Option<f64>, fill_price: Option<f64>) -> String {
    match fill_quantity {
        Some(qty) if qty != 0.0 => {
            let price = fill_price.map_or_else(|| "-".to_string(), format_locale);
            format!("{qty}口 @ {price}")
        }
        _ => "-".to_string(),
    }
}

/// `M/D HH:MM` in local time. Naive timestamps are taken as local;
/// unparseable input is shown as-is.
pub fn format_order_time(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local).naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));

    match parsed {
        Ok(dt) => format!(
            "{}/{} {:02}:{:02}",
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute()
        ),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_locale() {
        assert_eq!(format_locale(0.0), "0");
        assert_eq!(format_locale(50.0), "50");
        assert_eq!(format_locale(105.5), "105.5");
        assert_eq!(format_locale(17000.0), "17,000");
        assert_eq!(format_locale(1_234_567.0), "1,234,567");
        assert_eq!(format_locale(-1234.5678), "-1,234.568");
        assert_eq!(format_locale(-0.0), "0");
    }

    #[test]
    fn test_rounded_loss_keeps_sign() {
        assert_eq!(format_locale(-0.0001), "-0");
        assert_eq!(format_signed(-0.0001), "-0");
        assert_eq!(format_signed(0.0001), "+0");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(50.0), "+50");
        assert_eq!(format_signed(0.0), "+0");
        assert_eq!(format_signed(-200.0), "-200");
        assert_eq!(format_signed(12500.25), "+12,500.25");
    }

    #[test]
    fn test_fill_info() {
        assert_eq!(fill_info(Some(2.0), Some(105.5)), "2口 @ 105.5");
        assert_eq!(fill_info(Some(1.0), None), "1口 @ -");
        assert_eq!(fill_info(Some(0.0), Some(100.0)), "-");
        assert_eq!(fill_info(None, None), "-");
    }

    #[test]
    fn test_format_order_time() {
        assert_eq!(format_order_time("2024-01-01T09:30:00"), "1/1 09:30");
        assert_eq!(format_order_time("2024-12-25T14:05:59.123456"), "12/25 14:05");
        assert_eq!(format_order_time("2024-03-08 08:00:00"), "3/8 08:00");
        assert_eq!(format_order_time("yesterday"), "yesterday");
    }
}
