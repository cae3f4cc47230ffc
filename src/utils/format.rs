/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Fixed-format number rendering for the plain-text report files

/// Format a float in C-style scientific notation (`%.{precision}e`)
///
/// Rust's `{:e}` writes exponents as `e4` or `e-5`; the report files use the
/// `e+04` / `e-05` form with a sign and at least two exponent digits.
pub fn format_scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }

    let rendered = format!("{:.*e}", precision, value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => rendered,
    }
}

/// Integer cast used for spectrum abscissae (truncation toward zero)
pub fn truncate_to_integer(value: f64) -> i64 {
    value.trunc() as i64
}
