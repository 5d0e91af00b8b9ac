//! Compact value formatting for axis labels and tooltips

/// Render a magnitude as a short display string.
///
/// Millions and thousands are abbreviated with one decimal (`2.5M`, `1.5K`),
/// whole numbers print without a decimal point, anything else with exactly
/// one decimal. No grouping separators are used.
pub fn format_value(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{}M", to_fixed_1(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{}K", to_fixed_1(value / 1_000.0))
    } else if value.fract() == 0.0 {
        // Display drops the fraction for integral floats and never uses an exponent
        format!("{}", value)
    } else {
        to_fixed_1(value)
    }
}

/// One decimal place, rounded from the exact binary value.
///
/// `{:.1}` already rounds from the exact value but breaks exact ties to even;
/// those are rounded away from zero instead.
fn to_fixed_1(value: f64) -> String {
    let scaled = value * 10.0;
    // Exact when the product lost nothing to rounding
    let exact = value.mul_add(10.0, -scaled) == 0.0;
    if exact && scaled.fract().abs() == 0.5 {
        format!("{:.1}", scaled.round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
