use crate::{
    ast::{BinaryOperator, Expr},
    error::{ErrorSlot, RuntimeError},
    interpreter::unit::Unit,
    util::num::f64_to_i32_checked,
};

/// Capability the unit checker needs from the evaluator: reducing a degree
/// expression such as `-2` or `1 + 1` to a number.
pub trait ConstantEvaluator {
    /// Evaluates `expr` to a plain number.
    fn eval_constant(&self, expr: &Expr) -> Result<f64, RuntimeError>;
}

/// Infers the unit of every node of a validated expression tree.
///
/// Problems are recorded into the borrowed [`ErrorSlot`] and the failing
/// node infers [`Unit::Unknown`], which then propagates silently up to the
/// root.
pub struct UnitChecker<'a, E: ConstantEvaluator + ?Sized> {
    evaluator: &'a E,
    errors:    &'a mut ErrorSlot,
}

impl<'a, E> UnitChecker<'a, E> where E: ConstantEvaluator + ?Sized
{
    #[must_use]
    pub const fn new(evaluator: &'a E, errors: &'a mut ErrorSlot) -> Self {
        Self { evaluator,
               errors }
    }

    /// Returns the unit of `expr`.
    ///
    /// # Returns
    /// The inferred unit, or [`Unit::Unknown`] when a dimensional problem was
    /// found anywhere in the tree.
    ///
    /// ## Example
    /// ```
    /// use unitcalc::{
    ///     error::ErrorSlot,
    ///     interpreter::{
    ///         checker::unit::UnitChecker,
    ///         evaluator::Evaluator,
    ///         lexer::tokenize,
    ///         parser::parse,
    ///         store::VariableStore,
    ///         unit::{Unit, UnitPower, UnitType},
    ///     },
    /// };
    ///
    /// let expr = parse(&tokenize("10 m / s ^ 2"), &VariableStore::new());
    /// let mut errors = ErrorSlot::default();
    /// let unit = UnitChecker::new(&Evaluator, &mut errors).infer(&expr);
    ///
    /// assert_eq!(unit,
    ///            Unit::from_powers([UnitPower::new(UnitType::Meter, 1),
    ///                               UnitPower::new(UnitType::Second, -2)]));
    /// ```
    pub fn infer(&mut self, expr: &Expr) -> Unit {
        match expr {
            Expr::Constant(_) => Unit::None,
            Expr::Unit(unit) => unit.clone(),
            Expr::Negate(operand) => self.infer(operand),
            Expr::Var(name) => {
                self.errors.record(RuntimeError::UndefinedVariable { name: name.clone() });
                Unit::Unknown
            },
            Expr::Binary { op, left, right } => self.infer_binary(*op, left, right),
            Expr::Empty | Expr::Quit | Expr::Help | Expr::Invalid => Unit::Unknown,
        }
    }

    fn infer_binary(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) -> Unit {
        if op == BinaryOperator::Assign {
            return self.infer(right);
        }

        let left_unit = self.infer(left);
        let right_unit = self.infer(right);
        if left_unit.is_unknown() || right_unit.is_unknown() {
            return Unit::Unknown;
        }

        match op {
            BinaryOperator::Add | BinaryOperator::Sub => {
                match right_unit.convertible(&left_unit) {
                    Ok(()) => left_unit,
                    Err(error) => self.fail(error),
                }
            },
            BinaryOperator::Mul => self.settle(left_unit.combine(&right_unit, false)),
            BinaryOperator::Div | BinaryOperator::DivUnit => {
                let combined = right_unit.inverted().and_then(|inverse| left_unit.combine(&inverse, false));
                self.settle(combined)
            },
            BinaryOperator::ConstWithUnit | BinaryOperator::CompositeUnit => {
                self.settle(left_unit.combine(&right_unit, true))
            },
            BinaryOperator::Pow => self.infer_degree(left_unit, right_unit, right),
            BinaryOperator::Convert => match left_unit.convertible(&right_unit) {
                Ok(()) => right_unit,
                Err(error) => self.fail(error),
            },
            BinaryOperator::Assign => right_unit,
        }
    }

    /// `unit ^ degree`: only a single base unit can be raised, and only by a
    /// dimensionless integer.
    fn infer_degree(&mut self, unit: Unit, degree_unit: Unit, degree: &Expr) -> Unit {
        if unit.powers().len() != 1 || !degree_unit.is_none() {
            return self.fail(RuntimeError::InvalidDegree { unit,
                                                           degree: degree_unit });
        }

        let value = match self.evaluator.eval_constant(degree) {
            Ok(value) => value,
            Err(error) => return self.fail(error),
        };
        let Some(factor) = f64_to_i32_checked(value) else {
            return self.fail(RuntimeError::UnsupportedDegree { degree: value });
        };

        match unit.raised(factor) {
            Some(raised) => raised,
            None => self.fail(RuntimeError::UnsupportedDegree { degree: value }),
        }
    }

    fn settle(&mut self, unit: Result<Unit, RuntimeError>) -> Unit {
        unit.unwrap_or_else(|error| self.fail(error))
    }

    fn fail(&mut self, error: RuntimeError) -> Unit {
        self.errors.record(error);
        Unit::Unknown
    }
}
