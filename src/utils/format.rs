//! Display helpers shared by the dashboard and the CLI.

/// Formats a number for display using en-US digit grouping.
///
/// Integers get thousands separators (`1234567` → `"1,234,567"`); fractions
/// are rounded to at most three digits with trailing zeros dropped.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    // Three fraction digits, ties away from zero. Past 1e15 no fraction survives in an f64.
    let (int_part, frac_digits) = if n.abs() >= 1e15 {
        (format!("{:.0}", n.abs().round()), String::new())
    } else {
        let scaled = (n.abs() * 1000.0).round();
        let whole = (scaled / 1000.0).trunc();
        let frac = (scaled - whole * 1000.0) as u16;
        (format!("{:.0}", whole), format!("{:03}", frac))
    };
    let frac_part = frac_digits.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let mut out = String::new();
    if n < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// `round(part / total * 100)`, or `0` when `total` is zero.
///
/// Halves round toward positive infinity, so `-0.5` becomes `0`.
pub fn calculate_percentage(part: f64, total: f64) -> i64 {
    if total == 0.0 {
        return 0;
    }
    let ratio = part / total * 100.0;
    if !ratio.is_finite() {
        return 0;
    }
    (ratio + 0.5).floor() as i64
}

/// Rounds to `decimals` places, the way the dashboard reports averages.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(300.0), "300");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(-98765.0), "-98,765");
    }

    #[test]
    fn test_format_number_fractions() {
        assert_eq!(format_number(187.5), "187.5");
        assert_eq!(format_number(1234.5678), "1,234.568");
        assert_eq!(format_number(2.10), "2.1");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(0.05), "0.05");
    }

    #[test]
    fn test_format_number_rounds_ties_away_from_zero() {
        assert_eq!(format_number(1.0625), "1.063");
        assert_eq!(format_number(1234.5625), "1,234.563");
        assert_eq!(format_number(-1.0625), "-1.063");
        assert_eq!(format_number(999.9996), "1,000");
    }

    #[test]
    fn test_format_number_large_values() {
        assert_eq!(format_number(1e15), "1,000,000,000,000,000");
        assert_eq!(format_number(f64::MAX).len(), 309 + 102);
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_calculate_percentage() {
        assert_eq!(calculate_percentage(0.0, 0.0), 0);
        assert_eq!(calculate_percentage(7.0, 0.0), 0);
        assert_eq!(calculate_percentage(5.0, 10.0), 50);
        assert_eq!(calculate_percentage(1.0, 3.0), 33);
        assert_eq!(calculate_percentage(2.0, 3.0), 67);
        assert_eq!(calculate_percentage(1.0, 8.0), 13);
        assert_eq!(calculate_percentage(-1.0, 200.0), 0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(187.46, 1), 187.5);
        assert_eq!(round_to(33.333, 1), 33.3);
        assert_eq!(round_to(10.0, 0), 10.0);
    }
}
