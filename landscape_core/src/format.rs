//! Display formatting for money, areas and dimensions.

/// Format pounds the en-GB way with no pence: `£2,118`, `-£5`.
///
/// Rounds half away from zero. Non-finite values show as `£0`.
pub fn format_gbp(amount: f64) -> String {
    if !amount.is_finite() {
        return "£0".to_string();
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}£{}", sign, group_thousands(rounded.abs() as u64))
}

/// `low–high` range as shown under the total
pub fn format_gbp_range(low: f64, high: f64) -> String {
    format!("{}–{}", format_gbp(low), format_gbp(high))
}

/// Area to one decimal place, e.g. `12.0 m²`.
///
/// Ties round up (`2.25` shows as `2.3`), not to even.
pub fn format_area(area_m2: f64) -> String {
    let tenths = (area_m2 * 10.0).round() / 10.0;
    format!("{:.1} m²", tenths)
}

/// Dimension without trailing zeros: `4`, `3.5`
pub fn format_dimension(metres: f64) -> String {
    format!("{}", metres)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
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
    fn test_format_gbp() {
        assert_eq!(format_gbp(0.0), "£0");
        assert_eq!(format_gbp(50.0), "£50");
        assert_eq!(format_gbp(999.5), "£1,000");
        assert_eq!(format_gbp(2118.75), "£2,119");
        assert_eq!(format_gbp(1234567.4), "£1,234,567");
        assert_eq!(format_gbp(-5.0), "-£5");
        assert_eq!(format_gbp(f64::NAN), "£0");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_gbp_range(1906.875, 2330.625), "£1,907–£2,331");
    }

    #[test]
    fn test_format_area_and_dimension() {
        assert_eq!(format_area(12.0), "12.0 m²");
        assert_eq!(format_area(7.875), "7.9 m²");
        assert_eq!(format_area(0.25), "0.3 m²");
        assert_eq!(format_area(2.25), "2.3 m²");
        assert_eq!(format_area(6.25), "6.3 m²");
        assert_eq!(format_area(12.25), "12.3 m²");
        assert_eq!(format_dimension(4.0), "4");
        assert_eq!(format_dimension(3.25), "3.25");
    }
}
