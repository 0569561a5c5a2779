/// Parsing errors.
///
/// Defines the errors raised before any unit is inferred: input that could
/// not be tokenized or parsed, and operands whose shape does not fit their
/// operator.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while inferring units and evaluating:
/// dimensional mismatches, division by zero and undefined variables.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error a single input line can produce.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A syntactic or structural problem.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A dimensional, arithmetic or lookup problem.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Holds at most one error per line; the first recorded error wins.
///
/// Every stage of the pipeline records into the same slot, so a failure
/// that is noticed again further up the tree is not reported twice.
///
/// ## Example
/// ```
/// use unitcalc::error::{Error, ErrorSlot, ParseError, RuntimeError};
///
/// let mut slot = ErrorSlot::default();
/// slot.record(RuntimeError::DivisionByZero);
/// slot.record(ParseError::InvalidExpression);
///
/// assert_eq!(slot.get(), Some(&Error::from(RuntimeError::DivisionByZero)));
/// ```
#[derive(Debug, Default)]
pub struct ErrorSlot {
    error: Option<Error>,
}

impl ErrorSlot {
    /// Records `error` unless an error is already present.
    pub fn record(&mut self, error: impl Into<Error>) {
        if self.error.is_none() {
            let error = error.into();
            tracing::debug!(%error, "error recorded");
            self.error = Some(error);
        }
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.error.is_some()
    }

    #[must_use]
    pub const fn get(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Consumes the slot, returning the recorded error if any.
    #[must_use]
    pub fn into_error(self) -> Option<Error> {
        self.error
    }
}
