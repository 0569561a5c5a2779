/// Numeric helpers.
///
/// Checked conversion of evaluated unit degrees into integers, and the
/// fixed-precision formatting used when printing results.
pub mod num;
