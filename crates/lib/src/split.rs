//! Delimiter splitting shared by every decomposition level.

/// Splits `value` on `delimiter`, keeping empty pieces and their order.
///
/// Joining the result with `delimiter` gives back `value` exactly, so
/// leading, trailing and adjacent delimiters all produce empty pieces. An
/// empty input yields a single empty piece.
pub fn split_string(value: &str, delimiter: char) -> Vec<&str> {
    value.split(delimiter).collect()
}
