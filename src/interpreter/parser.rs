/// Core parsing routine.
///
/// Splits token windows recursively at their loosest-binding token and
/// builds the expression tree.
pub mod core;

/// Context-sensitive precedence.
///
/// Decides what role each token plays in a window (binary minus or
/// negation, division or unit division, leading number, adjacent unit) and
/// which token becomes the root of the window.
pub mod precedence;

pub use self::core::parse;
