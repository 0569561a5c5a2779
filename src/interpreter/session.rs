use std::fmt;

use crate::{
    ast::{BinaryOperator, Expr},
    error::{Error, ErrorSlot, ParseError},
    interpreter::{
        checker::{UnitChecker, check_valid},
        evaluator::Evaluator,
        lexer::tokenize,
        parser::parse,
        store::{StoredValue, VariableStore},
        unit::Unit,
    },
    util::num::format_number,
};

/// Text printed for `help`.
pub const HELP: &str = "\
Math:
  Evaluate expressions with + - * / and parentheses-free precedence.
    >>> 1 + 2 * 3
    7
Units:
  Distance: cm m km in ft mi
  Time:     s min h
  Mass:     g kg lb oz
  Write a number followed by its units; use ^ for degrees and / to divide.
    >>> 10 m / s ^ 2
    10 m s^-2
Conversion:
  Convert with ->, the degrees of each category must match.
    >>> 10 m / s ^ 2 -> km / h ^ 2
    129600 km h^-2
  Addition and subtraction convert into the unit of the left operand.
    >>> 10 km - 2 m + 12 mi
    29.3101 km
Variables:
  Assign numbers or units with =.
    >>> x = 9 + 10
    x = 19
    >>> n = kg m s^-2
    n = kg m s^-2
    >>> 3 n
    3 kg m s^-2
Type quit or exit to leave.";

/// The result of one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A blank line; prints nothing.
    Empty,
    /// A number with its unit.
    Value {
        /// The magnitude.
        value: f64,
        /// The unit of the magnitude, [`Unit::None`] when dimensionless.
        unit:  Unit,
    },
    /// A bare unit expression such as `km / h`.
    Unit(Unit),
    /// A variable was bound.
    Assigned {
        /// The variable name.
        name:  String,
        /// The value it now holds.
        value: StoredValue,
    },
    /// `help`
    Help,
    /// `quit` or `exit`; the driver stops reading.
    Quit,
    /// The line was rejected.
    Error(Error),
}

impl Outcome {
    /// Whether the outcome should end the session.
    #[must_use]
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

fn write_quantity(f: &mut fmt::Formatter<'_>, value: f64, unit: &Unit) -> fmt::Result {
    f.write_str(&format_number(value))?;
    if !unit.is_none() {
        write!(f, " {unit}")?;
    }
    Ok(())
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty | Self::Quit => Ok(()),
            Self::Value { value, unit } => write_quantity(f, *value, unit),
            Self::Unit(unit) => write!(f, "{unit:#}"),
            Self::Assigned { name, value } => {
                write!(f, "{name} = ")?;
                match value {
                    StoredValue::Quantity { value, unit } => write_quantity(f, *value, unit),
                    StoredValue::Unit(unit) => write!(f, "{unit:#}"),
                }
            },
            Self::Help => f.write_str(HELP),
            Self::Error(error) => write!(f, "Error: {error}"),
        }
    }
}

/// One interactive session.
///
/// Owns the variable bindings, which persist across lines. Everything else
/// (tokens, the expression tree, the error slot) lives only for the line
/// being evaluated.
///
/// ## Example
/// ```
/// use unitcalc::interpreter::session::Session;
///
/// let mut session = Session::new();
/// assert_eq!(session.execute_line("x = 7").to_string(), "x = 7");
/// assert_eq!(session.execute_line("x km -> m").to_string(), "7000 m");
/// assert_eq!(session.execute_line("1 km * 3 -> in").to_string(), "118110.2361 in");
/// ```
#[derive(Debug, Default)]
pub struct Session {
    vars:      VariableStore,
    evaluator: Evaluator,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn vars(&self) -> &VariableStore {
        &self.vars
    }

    /// Runs one line through the whole pipeline.
    ///
    /// The line is tokenized, parsed against the current bindings, has its
    /// bound variables substituted, and is then checked for validity and
    /// units before being evaluated. Assignments update the bindings; no
    /// other line changes the session.
    ///
    /// # Parameters
    /// - `line`: One line of input, without its terminator.
    ///
    /// # Returns
    /// What should be shown for the line. Errors are returned as
    /// [`Outcome::Error`] and leave the session untouched.
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        let tokens = tokenize(line);
        let mut expr = parse(&tokens, &self.vars);
        tracing::debug!(%expr, "parsed");
        self.vars.substitute(&mut expr);

        let mut errors = ErrorSlot::default();
        if !check_valid(&expr, &mut errors) {
            return Self::failed(errors);
        }

        match expr {
            Expr::Empty => Outcome::Empty,
            Expr::Help => Outcome::Help,
            Expr::Quit => Outcome::Quit,
            Expr::Binary { op: BinaryOperator::Assign,
                           left,
                           right, } => match *left {
                Expr::Var(name) => self.assign(name, &right, errors),
                _ => Self::failed(errors),
            },
            expr => self.evaluate(&expr, errors),
        }
    }

    fn assign(&mut self, name: String, value: &Expr, mut errors: ErrorSlot) -> Outcome {
        let unit = UnitChecker::new(&self.evaluator, &mut errors).infer(value);
        if unit.is_unknown() {
            return Self::failed(errors);
        }

        let stored = if value.produces_number() {
            match self.evaluator.eval(value) {
                Ok(value) => StoredValue::Quantity { value,
                                                     unit },
                Err(error) => return Outcome::Error(error.into()),
            }
        } else {
            StoredValue::Unit(unit)
        };

        self.vars.insert(name.clone(), stored.clone());
        Outcome::Assigned { name,
                            value: stored }
    }

    fn evaluate(&self, expr: &Expr, mut errors: ErrorSlot) -> Outcome {
        let unit = UnitChecker::new(&self.evaluator, &mut errors).infer(expr);
        tracing::debug!(%unit, "unit inferred");
        if unit.is_unknown() {
            return Self::failed(errors);
        }

        if !expr.produces_number() {
            return Outcome::Unit(unit);
        }

        match self.evaluator.eval(expr) {
            Ok(value) => {
                tracing::debug!(value, "evaluated");
                Outcome::Value { value, unit }
            },
            Err(error) => Outcome::Error(error.into()),
        }
    }

    /// Turns the recorded error into an outcome. An empty slot here means a
    /// stage gave up without saying why, which is reported as an invalid
    /// expression.
    fn failed(errors: ErrorSlot) -> Outcome {
        Outcome::Error(errors.into_error()
                             .unwrap_or_else(|| ParseError::InvalidExpression.into()))
    }
}
