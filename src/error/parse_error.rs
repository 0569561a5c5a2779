use crate::ast::ExprKind;

/// Represents all errors detected from the shape of a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line contained an invalid token or a misplaced operator.
    #[error("Invalid expression.")]
    InvalidExpression,
    /// A unary operator was applied to an operand of the wrong kind.
    #[error("Invalid operand for {op}: {operand}.")]
    InvalidOperand {
        /// The operator node.
        op:      ExprKind,
        /// The kind found as its operand.
        operand: ExprKind,
    },
    /// A binary operator was applied to operands of the wrong kinds.
    #[error("Invalid operands for {op}: {left} and {right}.")]
    InvalidOperands {
        /// The operator node.
        op:    ExprKind,
        /// The kind found on the left.
        left:  ExprKind,
        /// The kind found on the right.
        right: ExprKind,
    },
}
