use crate::{ast::ExprKind, interpreter::unit::Unit};

/// Represents all errors that can occur during unit inference and
/// evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// A variable was used before being assigned.
    #[error("Variable '{name}' is not defined.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Two units that had to be convertible were not.
    #[error("Cannot convert {from:#} to {to:#}: {reason}.")]
    Inconvertible {
        /// The unit being converted.
        from:   Unit,
        /// The unit it should have converted into.
        to:     Unit,
        /// What did not match.
        reason: String,
    },
    /// Units written next to each other measure the same thing with
    /// different units (`km m`).
    #[error("Cannot compose {left:#} with {right:#}; write the conversion explicitly.")]
    SameCategoryComposition {
        /// The unit on the left.
        left:  Unit,
        /// The unit on the right.
        right: Unit,
    },
    /// The left side of `^` is not a single base unit or the right side is
    /// not dimensionless.
    #[error("Expected single degree unit ^ constant: {unit:#} ^ {degree:#}.")]
    InvalidDegree {
        /// The unit being raised.
        unit:   Unit,
        /// The unit of the degree expression.
        degree: Unit,
    },
    /// A unit degree evaluated, or combined, to something other than a
    /// representable integer.
    #[error("Unit degree must be a 32-bit integer, found {degree}.")]
    UnsupportedDegree {
        /// The evaluated degree.
        degree: f64,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A result left the range of finite numbers.
    #[error("Overflow while trying to compute result.")]
    Overflow,
    /// An expression kind that carries no value reached the evaluator.
    #[error("Cannot evaluate {kind}.")]
    UnsupportedExpression {
        /// The kind encountered.
        kind: ExprKind,
    },
}
