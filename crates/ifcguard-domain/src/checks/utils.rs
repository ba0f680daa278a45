/// Format a millimeter quantity the way the source extraction tooling prints
/// floats: integral values keep a trailing `.0` (`900.0`, `1000.0`),
/// non-integral values use the shortest representation (`850.5`).
///
/// Report strings are contractual, so this must stay byte-stable.
pub fn format_mm(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
