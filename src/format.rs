//! Display formatting for prices and card copy

use crate::region::Currency;

/// Format an amount the way the site's locale-aware currency formatter does
///
/// USD uses en-US rules and AUD uses en-AU rules. Both locales print the
/// bare `$` symbol, group thousands with commas and show two decimals.
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let symbol = match currency {
        Currency::Usd | Currency::Aud => "$",
    };
    if amount.is_nan() {
        return format!("{}NaN", symbol);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, symbol);
    }

    // Digits come from the float formatter so large amounts keep every digit
    let digits = format!("{:.2}", amount.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let sign = if amount < 0.0 && digits != "0.00" { "-" } else { "" };

    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), fraction)
}

/// Format against a raw ISO code, falling back to USD rules for unknown codes
pub fn format_currency_code(amount: f64, code: &str) -> String {
    let currency = match code.parse::<Currency>() {
        Ok(currency) => currency,
        Err(_) => {
            log::warn!("Unsupported currency code {:?}, formatting as USD", code);
            Currency::Usd
        }
    };
    format_currency(amount, currency)
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

/// Shorten card copy to `max_chars` characters followed by an ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_currency(1234.5, Currency::Usd), "$1,234.50");
        assert_eq!(format_currency(0.0, Currency::Usd), "$0.00");
        assert_eq!(format_currency(59.99, Currency::Usd), "$59.99");
        assert_eq!(format_currency(1_000_000.0, Currency::Usd), "$1,000,000.00");
    }

    #[test]
    fn test_format_aud() {
        assert_eq!(format_currency(1234.5, Currency::Aud), "$1,234.50");
        assert_eq!(format_currency(249.99, Currency::Aud), "$249.99");
    }

    #[test]
    fn test_format_rounding_and_sign() {
        assert_eq!(format_currency(262.21533193406094, Currency::Usd), "$262.22");
        assert_eq!(format_currency(999.999, Currency::Usd), "$1,000.00");
        assert_eq!(format_currency(-1234.5, Currency::Usd), "-$1,234.50");
        assert_eq!(format_currency(-0.0, Currency::Usd), "$0.00");
        assert_eq!(format_currency(-0.001, Currency::Usd), "$0.00");
    }

    #[test]
    fn test_format_large_amounts_keep_every_digit() {
        assert_eq!(format_currency(1e20, Currency::Usd), "$100,000,000,000,000,000,000.00");
        assert_eq!(format_currency(18_446_744_073_709_551_616.0, Currency::Aud), "$18,446,744,073,709,551,616.00");
        assert_eq!(format_currency(70_000_000_000_000.25, Currency::Usd), "$70,000,000,000,000.25");
        assert_eq!(format_currency(f64::NEG_INFINITY, Currency::Usd), "-$∞");
    }

    #[test]
    fn test_unknown_code_falls_back_to_usd() {
        assert_eq!(format_currency_code(1234.5, "EUR"), "$1,234.50");
        assert_eq!(format_currency_code(10.0, "AUD"), "$10.00");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("Cloud Architect", 5), "Cloud...");
        assert_eq!(truncate_text("", 0), "");
    }
}
