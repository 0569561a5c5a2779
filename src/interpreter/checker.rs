/// Structural validity.
///
/// Checks that every operator received operands of a shape it accepts,
/// before any unit is inferred.
pub mod validity;

/// Unit inference.
///
/// Computes the unit of every node bottom-up and reports dimensional
/// mismatches. Unit degrees are reduced to numbers through the
/// [`unit::ConstantEvaluator`] capability.
pub mod unit;

pub use self::{
    unit::{ConstantEvaluator, UnitChecker},
    validity::check_valid,
};
