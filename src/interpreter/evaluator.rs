/// Core evaluation logic.
///
/// Contains the evaluation engine and its result type. Mixed-unit addition,
/// subtraction and division rescale the right operand into the left
/// operand's unit; conversion rescales the left operand into the target.
pub mod core;

pub use self::core::{EvalResult, Evaluator};
