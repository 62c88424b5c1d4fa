//! Display formatting utilities: money, chart date labels, and outbound
//! message links.
//!
//! Money format: currency symbol + number with thousands separator, two
//! decimal places (en-US style, USD).

use chrono::NaiveDate;

/// Format cents as a USD amount, e.g. `1234567` -> `"$12,345.67"`.
pub fn format_usd(cents: i64) -> String {
    let is_negative = cents < 0;
    let abs_cents = cents.abs();
    let whole = format_with_thousands(abs_cents / 100);
    let fractional = abs_cents % 100;

    if is_negative {
        format!("-${}.{:02}", whole, fractional)
    } else {
        format!("${}.{:02}", whole, fractional)
    }
}

/// On-chart date label, two-digit year: `DD/MM/YY`.
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%d/%m/%y").to_string()
}

/// Parse a `DD/MM/YY` label back into a date.
pub fn parse_day_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(label, "%d/%m/%y").ok()
}

/// Date format used inside outbound message text, four-digit year.
pub fn format_message_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Build the chat deep link for one payment block: the base messaging
/// URL with a prefilled, url-encoded message text.
pub fn payment_message_link(
    base_url: &str,
    team: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> String {
    let message = format!(
        "Payment details for {} - Period: {} to {}",
        team,
        format_message_date(start),
        format_message_date(end)
    );
    format!("{}?text={}", base_url, urlencoding::encode(&message))
}

/// Format a number with comma thousands separators.
fn format_with_thousands(n: i64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let s = n.to_string();
    let chars: Vec<char> = s.chars().rev().collect();
    let mut result = Vec::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_usd_whole_amount() {
        assert_eq!(format_usd(10000), "$100.00");
        assert_eq!(format_usd(5000), "$50.00");
    }

    #[test]
    fn test_format_usd_zero() {
        assert_eq!(format_usd(0), "$0.00");
    }

    #[test]
    fn test_format_usd_thousands_separator() {
        assert_eq!(format_usd(123456789), "$1,234,567.89");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(-12345), "-$123.45");
    }

    #[test]
    fn test_day_label_format() {
        assert_eq!(format_day_label(date(2025, 8, 2)), "02/08/25");
    }

    #[test]
    fn test_day_label_round_trip() {
        let original = date(2025, 7, 30);
        let reparsed = parse_day_label(&format_day_label(original)).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_message_date_has_four_digit_year() {
        assert_eq!(format_message_date(date(2025, 8, 2)), "02/08/2025");
    }

    #[test]
    fn test_payment_message_link() {
        let link = payment_message_link(
            "https://wa.me/04162069479",
            "TeamA",
            date(2025, 7, 31),
            date(2025, 8, 2),
        );
        assert_eq!(
            link,
            "https://wa.me/04162069479?text=Payment%20details%20for%20TeamA%20-%20Period%3A%2031%2F07%2F2025%20to%2002%2F08%2F2025"
        );
    }
}
