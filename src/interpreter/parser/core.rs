use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::precedence::{Role, find_pivot},
        store::VariableStore,
    },
};

/// Parses a token window into an expression.
///
/// This is the entry point for parsing one line. Windows of at most one token
/// map directly onto leaves. Longer windows are split at the token chosen by
/// [`find_pivot`], and both halves are parsed recursively. Variables are
/// looked up in `vars` to decide whether they behave like numbers or units.
///
/// Parsing never fails; malformed input produces [`Expr::Invalid`] somewhere
/// in the tree, which the validity checker rejects.
///
/// ## Example
/// ```
/// use unitcalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse, store::VariableStore},
/// };
///
/// let expr = parse(&tokenize("1 + 2 * 3"), &VariableStore::new());
/// let expected = Expr::binary(BinaryOperator::Add,
///                             Expr::Constant(1.0),
///                             Expr::binary(BinaryOperator::Mul,
///                                          Expr::Constant(2.0),
///                                          Expr::Constant(3.0)));
/// assert_eq!(expr, expected);
/// ```
#[must_use]
pub fn parse(tokens: &[Token], vars: &VariableStore) -> Expr {
    if let [rest @ .., Token::End] = tokens {
        return parse(rest, vars);
    }

    match tokens {
        [] => return Expr::Empty,
        [token] => return parse_leaf(token),
        _ => {},
    }

    let (idx, role) = find_pivot(tokens, vars);

    if role == Role::Negate {
        return Expr::negate(parse_operand(&tokens[1..], vars));
    }

    let Some(op) = binary_operator(role) else {
        return Expr::Invalid;
    };

    // Glue and adjacency keep the pivot token: it belongs to the unit
    // literal being built rather than separating two operands.
    let (left_end, right_start) = match op {
        BinaryOperator::ConstWithUnit => (idx + 1, idx + 1),
        BinaryOperator::CompositeUnit => (idx, idx),
        _ => (idx, idx + 1),
    };

    let left = parse_operand(&tokens[..left_end], vars);
    let right = parse_operand(&tokens[right_start..], vars);
    Expr::binary(op, left, right)
}

/// Parses the operand of an operator; a missing operand is invalid rather
/// than an empty line.
fn parse_operand(tokens: &[Token], vars: &VariableStore) -> Expr {
    match parse(tokens, vars) {
        Expr::Empty => Expr::Invalid,
        expr => expr,
    }
}

fn parse_leaf(token: &Token) -> Expr {
    match token {
        Token::Quit => Expr::Quit,
        Token::Help => Expr::Help,
        Token::Unit(unit) => Expr::Unit((*unit).into()),
        Token::Number(value) => Expr::Constant(*value),
        Token::Variable(name) => Expr::Var(name.clone()),
        _ => Expr::Invalid,
    }
}

const fn binary_operator(role: Role) -> Option<BinaryOperator> {
    match role {
        Role::Assign => Some(BinaryOperator::Assign),
        Role::Convert => Some(BinaryOperator::Convert),
        Role::Add => Some(BinaryOperator::Add),
        Role::Subtract => Some(BinaryOperator::Sub),
        Role::Multiply => Some(BinaryOperator::Mul),
        Role::Divide => Some(BinaryOperator::Div),
        Role::LeadingNumber => Some(BinaryOperator::ConstWithUnit),
        Role::DivideUnit => Some(BinaryOperator::DivUnit),
        Role::AdjacentUnit => Some(BinaryOperator::CompositeUnit),
        Role::Degree => Some(BinaryOperator::Pow),
        Role::Negate | Role::NestedNegate | Role::Operand => None,
    }
}
