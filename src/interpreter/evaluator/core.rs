use crate::{
    ast::{BinaryOperator, Expr},
    error::{Error, ErrorSlot, RuntimeError},
    interpreter::{
        checker::unit::{ConstantEvaluator, UnitChecker},
        unit::Unit,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Computes the numeric value of validated, unit-checked expressions.
///
/// The evaluator is stateless: variables have already been substituted by
/// the time a tree reaches it. Operand units are re-derived where a
/// conversion factor is needed, so mixed units such as `10 km - 2 m` are
/// rescaled into the left operand's unit before combining.
#[derive(Debug, Default, Copy, Clone)]
pub struct Evaluator;

impl Evaluator {
    /// Evaluates an expression and returns its number.
    ///
    /// Nodes that only describe a unit (`km`, `km s`, `m / s`, `s ^ 2`)
    /// evaluate to `0`. The caller decides whether the number is meaningful
    /// through [`Expr::produces_number`].
    ///
    /// # Parameters
    /// - `expr`: A tree that passed the validity and unit checks.
    ///
    /// # Returns
    /// The magnitude of the result, expressed in the inferred unit.
    ///
    /// ## Example
    /// ```
    /// use unitcalc::interpreter::{
    ///     evaluator::Evaluator,
    ///     lexer::tokenize,
    ///     parser::parse,
    ///     store::VariableStore,
    /// };
    ///
    /// let expr = parse(&tokenize("1 km + 500 m"), &VariableStore::new());
    /// assert_eq!(Evaluator.eval(&expr).unwrap(), 1.5);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Constant(value) => Ok(*value),
            Expr::Unit(_) => Ok(0.0),
            Expr::Negate(operand) => Ok(-self.eval(operand)?),
            Expr::Var(name) => Err(RuntimeError::UndefinedVariable { name: name.clone() }),
            Expr::Binary { op, left, right } => self.eval_binary(*op, left, right).and_then(finite),
            Expr::Empty | Expr::Quit | Expr::Help | Expr::Invalid => {
                Err(RuntimeError::UnsupportedExpression { kind: expr.kind() })
            },
        }
    }

    fn eval_binary(&self, op: BinaryOperator, left: &Expr, right: &Expr) -> EvalResult<f64> {
        match op {
            BinaryOperator::ConstWithUnit => self.eval(left),
            BinaryOperator::CompositeUnit | BinaryOperator::DivUnit | BinaryOperator::Pow => Ok(0.0),
            BinaryOperator::Add => {
                let (l, r) = self.eval_aligned(left, right)?;
                Ok(l + r)
            },
            BinaryOperator::Sub => {
                let (l, r) = self.eval_aligned(left, right)?;
                Ok(l - r)
            },
            // Units of a product are composed, never converted.
            BinaryOperator::Mul => Ok(self.eval(left)? * self.eval(right)?),
            BinaryOperator::Div => {
                if !left.produces_number() {
                    return Ok(0.0);
                }
                let (l, r) = self.eval_aligned(left, right)?;
                if r == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(l / r)
            },
            BinaryOperator::Convert => {
                let factor = self.unit_of(left)?.conversion_factor(&self.unit_of(right)?);
                Ok(self.eval(left)? * factor)
            },
            BinaryOperator::Assign => self.eval(right),
        }
    }

    /// Evaluates both operands with the right one rescaled into the units of
    /// the left one.
    fn eval_aligned(&self, left: &Expr, right: &Expr) -> EvalResult<(f64, f64)> {
        let factor = self.unit_of(right)?.conversion_factor(&self.unit_of(left)?);
        Ok((self.eval(left)?, self.eval(right)? * factor))
    }

    /// Re-derives the unit of a subtree that already passed unit checking.
    fn unit_of(&self, expr: &Expr) -> EvalResult<Unit> {
        let mut errors = ErrorSlot::default();
        let unit = UnitChecker::new(self, &mut errors).infer(expr);
        match errors.into_error() {
            Some(Error::Runtime(error)) => Err(error),
            Some(Error::Parse(_)) | None => Ok(unit),
        }
    }
}

/// Rejects infinite and NaN results before they reach the output or a
/// variable.
fn finite(value: f64) -> EvalResult<f64> {
    if value.is_finite() { Ok(value) } else { Err(RuntimeError::Overflow) }
}

impl ConstantEvaluator for Evaluator {
    fn eval_constant(&self, expr: &Expr) -> EvalResult<f64> {
        self.eval(expr)
    }
}
