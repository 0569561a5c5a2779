use std::fmt;

use crate::interpreter::unit::Unit;

/// Operators that own a left and a right operand.
///
/// Besides the arithmetic operators this covers the nodes that build units
/// out of adjacent tokens (`2 km`, `km s`, `m / s`) and assignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// A leading number glued to the unit tokens after it (`2 km`).
    ConstWithUnit,
    /// Two units written next to each other (`km s`).
    CompositeUnit,
    /// A unit divided by a unit (`m / s`).
    DivUnit,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Conversion (`->`)
    Convert,
    /// Unit degree (`^`)
    Pow,
    /// Assignment (`=`)
    Assign,
}

/// An abstract syntax tree node for one input line.
///
/// Every binary node exclusively owns both operands; trees are built fresh
/// for each line and dropped when the line is done.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Constant(f64),
    /// A unit literal, or a unit-valued variable after substitution.
    Unit(Unit),
    /// Arithmetic negation.
    Negate(Box<Self>),
    /// A variable reference not yet replaced by its bound value.
    Var(String),
    /// A binary operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A blank line.
    Empty,
    /// `quit` or `exit`.
    Quit,
    /// `help`.
    Help,
    /// Input that could not be parsed.
    Invalid,
}

/// The flat shape of an [`Expr`], used by the validity checker and in
/// diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExprKind {
    Constant,
    Unit,
    Negate,
    Var,
    SetVar,
    ConstWithUnit,
    CompositeUnit,
    DivUnit,
    Add,
    Sub,
    Mul,
    Div,
    Convert,
    Pow,
    Empty,
    Quit,
    Help,
    Invalid,
}

impl Expr {
    /// Builds a binary node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Builds a negation node.
    #[must_use]
    pub fn negate(expr: Self) -> Self {
        Self::Negate(Box::new(expr))
    }

    /// The number glued to a unit, as produced for `value unit`.
    #[must_use]
    pub fn quantity(value: f64, unit: Unit) -> Self {
        Self::binary(BinaryOperator::ConstWithUnit, Self::Constant(value), Self::Unit(unit))
    }

    /// Returns the flat kind of this node.
    ///
    /// ## Example
    /// ```
    /// use unitcalc::ast::{BinaryOperator, Expr, ExprKind};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add, Expr::Constant(1.0), Expr::Constant(2.0));
    /// assert_eq!(expr.kind(), ExprKind::Add);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ExprKind {
        match self {
            Self::Constant(_) => ExprKind::Constant,
            Self::Unit(_) => ExprKind::Unit,
            Self::Negate(_) => ExprKind::Negate,
            Self::Var(_) => ExprKind::Var,
            Self::Binary { op, .. } => op.kind(),
            Self::Empty => ExprKind::Empty,
            Self::Quit => ExprKind::Quit,
            Self::Help => ExprKind::Help,
            Self::Invalid => ExprKind::Invalid,
        }
    }

    /// Whether evaluating this node yields a meaningful number.
    ///
    /// A division only carries a number when its operands do; `km ^ 2 / s`
    /// style divisions exist purely for their unit.
    #[must_use]
    pub fn produces_number(&self) -> bool {
        match self {
            Self::Binary { op: BinaryOperator::Div,
                           left,
                           .. } => left.produces_number(),
            _ => self.kind().is_number(),
        }
    }

    /// Whether this node exists for its unit rather than a number.
    #[must_use]
    pub fn produces_unit(&self) -> bool {
        match self {
            Self::Binary { op: BinaryOperator::Div,
                           left,
                           right, } => left.produces_unit() && right.produces_unit(),
            _ => self.kind().is_unit(),
        }
    }
}

impl BinaryOperator {
    /// The [`ExprKind`] of a node built with this operator.
    #[must_use]
    pub const fn kind(self) -> ExprKind {
        match self {
            Self::ConstWithUnit => ExprKind::ConstWithUnit,
            Self::CompositeUnit => ExprKind::CompositeUnit,
            Self::DivUnit => ExprKind::DivUnit,
            Self::Add => ExprKind::Add,
            Self::Sub => ExprKind::Sub,
            Self::Mul => ExprKind::Mul,
            Self::Div => ExprKind::Div,
            Self::Convert => ExprKind::Convert,
            Self::Pow => ExprKind::Pow,
            Self::Assign => ExprKind::SetVar,
        }
    }
}

impl ExprKind {
    /// Kinds whose value is a number (with or without a unit).
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self,
                 Self::Constant
                 | Self::Negate
                 | Self::ConstWithUnit
                 | Self::Add
                 | Self::Sub
                 | Self::Mul
                 | Self::Div
                 | Self::Convert)
    }

    /// Kinds that denote a unit without a number.
    #[must_use]
    pub const fn is_unit(self) -> bool {
        matches!(self, Self::Unit | Self::CompositeUnit | Self::DivUnit | Self::Pow)
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Constant => "const",
            Self::Unit => "unit",
            Self::Negate => "negation",
            Self::Var => "var",
            Self::SetVar => "set var",
            Self::ConstWithUnit => "const x unit",
            Self::CompositeUnit => "unit x unit",
            Self::DivUnit => "div unit",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Convert => "->",
            Self::Pow => "^",
            Self::Empty => "empty",
            Self::Quit => "quit",
            Self::Help => "help",
            Self::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// Compact prefix rendering used in debug logs, e.g. `(- (neg 2) 3)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Unit(unit) => write!(f, "[{unit:#}]"),
            Self::Negate(expr) => write!(f, "(neg {expr})"),
            Self::Var(name) => write!(f, "{name}"),
            Self::Binary { left, right, .. } => write!(f, "({} {left} {right})", self.kind()),
            Self::Empty | Self::Quit | Self::Help | Self::Invalid => write!(f, "{}", self.kind()),
        }
    }
}
