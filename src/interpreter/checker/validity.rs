use crate::{
    ast::{BinaryOperator, Expr, ExprKind},
    error::{ErrorSlot, ParseError, RuntimeError},
};

/// Checks the structural grammar of an expression tree.
///
/// Children are checked before their parent and the first failure stops
/// the walk. Each operator accepts a fixed set of operand kinds:
///
/// | operator        | left                              | right             |
/// |-----------------|-----------------------------------|-------------------|
/// | `+ - *`         | number                            | number            |
/// | `/`             | number (or unit)                  | number (or unit)  |
/// | `^`             | unit                              | number            |
/// | `->`            | number                            | unit              |
/// | `=`             | variable                          | number or unit    |
/// | number glue     | constant, negation or number glue | unit              |
/// | unit x unit     | unit                              | unit              |
/// | unit division   | unit                              | unit              |
///
/// Leaves are always valid except [`Expr::Invalid`]. A variable that is
/// still unresolved in operand position is reported as undefined.
///
/// # Returns
/// `true` when the tree is valid; otherwise `false` with the first problem
/// recorded in `errors`.
///
/// ## Example
/// ```
/// use unitcalc::{
///     ast::{BinaryOperator, Expr},
///     error::ErrorSlot,
///     interpreter::{
///         checker::validity::check_valid,
///         unit::{Unit, UnitType},
///     },
/// };
///
/// let mut errors = ErrorSlot::default();
/// let expr = Expr::binary(BinaryOperator::Add,
///                         Expr::Constant(1.0),
///                         Expr::Unit(Unit::single(UnitType::Meter)));
///
/// assert!(!check_valid(&expr, &mut errors));
/// assert_eq!(errors.get().unwrap().to_string(), "Invalid operands for +: const and unit.");
/// ```
pub fn check_valid(expr: &Expr, errors: &mut ErrorSlot) -> bool {
    if errors.is_set() {
        return false;
    }

    match expr {
        Expr::Constant(_)
        | Expr::Unit(_)
        | Expr::Var(_)
        | Expr::Empty
        | Expr::Quit
        | Expr::Help => true,
        Expr::Invalid => {
            errors.record(ParseError::InvalidExpression);
            false
        },
        Expr::Negate(operand) => check_valid(operand, errors) && check_negation(operand, errors),
        Expr::Binary { op, left, right } => {
            check_valid(left, errors)
            && check_valid(right, errors)
            && check_operands(*op, left, right, errors)
        },
    }
}

fn check_negation(operand: &Expr, errors: &mut ErrorSlot) -> bool {
    if report_undefined(operand, errors) {
        return false;
    }
    if operand.produces_number() {
        return true;
    }
    errors.record(ParseError::InvalidOperand { op:      ExprKind::Negate,
                                               operand: operand.kind(), });
    false
}

fn check_operands(op: BinaryOperator, left: &Expr, right: &Expr, errors: &mut ErrorSlot) -> bool {
    if op != BinaryOperator::Assign && report_undefined(left, errors) {
        return false;
    }
    if report_undefined(right, errors) {
        return false;
    }

    let number = |expr: &Expr| expr.produces_number();
    let unit = |expr: &Expr| expr.produces_unit();

    let allowed = match op {
        BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul => {
            number(left) && number(right)
        },
        BinaryOperator::Div => (number(left) && number(right)) || (unit(left) && unit(right)),
        BinaryOperator::ConstWithUnit => {
            matches!(left.kind(),
                     ExprKind::Constant | ExprKind::Negate | ExprKind::ConstWithUnit)
            && unit(right)
        },
        BinaryOperator::CompositeUnit | BinaryOperator::DivUnit => unit(left) && unit(right),
        BinaryOperator::Pow => unit(left) && number(right),
        BinaryOperator::Convert => number(left) && unit(right),
        BinaryOperator::Assign => {
            matches!(left, Expr::Var(_)) && (number(right) || unit(right))
        },
    };

    if !allowed {
        errors.record(ParseError::InvalidOperands { op:    op.kind(),
                                                    left:  left.kind(),
                                                    right: right.kind(), });
    }
    allowed
}

/// Records an undefined-variable error if `operand` is a variable the
/// substitution pass could not resolve.
fn report_undefined(operand: &Expr, errors: &mut ErrorSlot) -> bool {
    if let Expr::Var(name) = operand {
        errors.record(RuntimeError::UndefinedVariable { name: name.clone() });
        return true;
    }
    false
}
