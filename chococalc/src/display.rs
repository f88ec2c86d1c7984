//! Display formatting
//!
//! The readout always shows whole numbers. Fractional results are rounded
//! half away from zero, so `5 / 2` shows `3`. Anything that rounds to
//! zero shows `0`, never `-0`.

/// Render a value with zero decimal places.
pub fn format_display(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let rounded = value.round();
    // -0.4 rounds to -0.0, which should not show a sign
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{:.0}", rounded)
}
