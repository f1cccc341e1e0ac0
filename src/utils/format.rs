/// Render a value the way every derivation string renders it.
///
/// Solution deduplication compares derivations by exact string equality, so
/// all numeric text in all steps must come from this one rule. `f64`'s
/// `Display` prints integer-valued results without a decimal point and
/// fractional results with shortest round-trip precision.
pub fn format_value(value: f64) -> String {
    value.to_string()
}
