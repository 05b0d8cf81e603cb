//! Display Formatting
//!
//! Renders footprint values to fixed-precision display strings. Formatting
//! is presentation-only: the numeric values used for classification are
//! never altered, and anything unrepresentable (unavailable, NaN, infinite)
//! degrades to the literal string "N/A" instead of erroring.

/// Sentinel display string for unavailable or malformed values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a value to 3 significant figures in fixed notation.
///
/// Decimal places: for |v| ≥ 1, `max(0, 3 − (floor(log10 |v|) + 1))`;
/// for |v| < 1, `−floor(log10 |v|) + 2`. Zero renders as "0.00".
pub fn format_sig3(value: Option<f64>) -> String {
    let Some(v) = value else {
        return NOT_AVAILABLE.to_string();
    };
    if !v.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    if v == 0.0 {
        return "0.00".to_string();
    }

    let magnitude = v.abs().log10().floor();
    let decimals = if v.abs() >= 1.0 {
        (3 - (magnitude as i32 + 1)).max(0)
    } else {
        -(magnitude as i32) + 2
    };

    format!("{:.*}", decimals as usize, v)
}

/// Format a value in scientific notation with a 2-decimal mantissa and a
/// signed two-digit exponent ("4.38e+05"). Zero renders as "0.00e+00".
pub fn format_sci(value: Option<f64>) -> String {
    let Some(v) = value else {
        return NOT_AVAILABLE.to_string();
    };
    if !v.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    if v == 0.0 {
        return "0.00e+00".to_string();
    }

    let mut exponent = v.abs().log10().floor() as i32;
    let mut mantissa = v / 10f64.powi(exponent);

    // Rounding the mantissa to 2 decimals can carry it into the next decade
    // (9.999 → "10.00"); renormalize so the mantissa stays in [1, 10).
    if (mantissa.abs() * 100.0).round() >= 1000.0 {
        mantissa /= 10.0;
        exponent += 1;
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{:.2}e{}{:02}", mantissa, sign, exponent.abs())
}
