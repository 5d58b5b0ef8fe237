pub const GENERIC_RESERVE_FAILURE: &str = "Failed to reserve";
pub const RESERVATION_FAILED: &str = "Reservation failed";
pub const RESERVATION_CONFIRMED: &str = "Reservation confirmed ✔";
pub const LISTING_LOAD_FAILED: &str = "Could not load cars";

/// "1 car found" / "3 cars found"
pub fn count_text(count: usize) -> String {
    format!("{} car{} found", count, if count == 1 { "" } else { "s" })
}

/// Formats a number the way `Number.toLocaleString()` does in `en-US`:
/// thousands separators and at most three fraction digits.
pub fn format_price(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let text = format!("{:.3}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_text_pluralizes() {
        assert_eq!(count_text(1), "1 car found");
        assert_eq!(count_text(2), "2 cars found");
        assert_eq!(count_text(12), "12 cars found");
    }

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(150.0), "150");
        assert_eq!(format_price(1500.0), "1,500");
        assert_eq!(format_price(1234567.0), "1,234,567");
        assert_eq!(format_price(999.5), "999.5");
    }

    #[test]
    fn test_format_price_rounds_to_three_digits() {
        assert_eq!(format_price(12.34567), "12.346");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(-2500.25), "-2,500.25");
    }
}
