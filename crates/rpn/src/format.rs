/// Format a real number for display.
///
/// Whole numbers print without a fractional part.
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let label = if value > 0.0 { "Inf" } else { "-Inf" };
        label.to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
