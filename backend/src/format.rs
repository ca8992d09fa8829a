//! Display formatting
//!
//! Currency amounts are rounded to 2 decimal places here and nowhere else;
//! all engine arithmetic keeps full precision.

/// Format a currency amount for display, e.g. `$1,234.57`
///
/// `USD` renders with `$`, `CAD` with `CA$`; any other code is written as a
/// prefix (`EUR 1,234.57`).
pub fn format_currency(value: f64, currency_code: &str) -> String {
    let rounded = format!("{:.2}", value.abs());
    let negative = value < 0.0 && rounded != "0.00";
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let symbol = match currency_code {
        "USD" => "$".to_string(),
        "CAD" => "CA$".to_string(),
        other => format!("{other} "),
    };

    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        symbol,
        group_thousands(whole),
        cents
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_rounding() {
        assert_eq!(format_currency(1.8, "USD"), "$1.80");
        assert_eq!(format_currency(3.206, "USD"), "$3.21");
        assert_eq!(format_currency(0.0, "USD"), "$0.00");
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(format_currency(1234.567, "USD"), "$1,234.57");
        assert_eq!(format_currency(1_000_000.0, "USD"), "$1,000,000.00");
        assert_eq!(format_currency(999.999, "USD"), "$1,000.00");
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(format_currency(12.5, "CAD"), "CA$12.50");
        assert_eq!(format_currency(12.5, "EUR"), "EUR 12.50");
    }

    #[test]
    fn test_negative_and_negative_zero() {
        assert_eq!(format_currency(-5.0, "USD"), "-$5.00");
        assert_eq!(format_currency(-0.001, "USD"), "$0.00");
    }
}
