//! Number formatting for displayed metrics.

/// Shown in place of a value that overflowed to infinity or NaN.
pub const OVERFLOW: &str = "overflow";

/// Format with `decimals` fractional digits and comma thousands separators.
///
/// `1234567.891` with 2 decimals becomes `1,234,567.89`.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return OVERFLOW.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    // Skip the sign when rounding produced zero ("-0.00")
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Format with fixed decimals and no grouping (used for magnitudes).
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", decimals, value)
    } else {
        OVERFLOW.to_string()
    }
}
