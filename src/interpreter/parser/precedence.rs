use crate::interpreter::{
    lexer::Token,
    store::{ValueKind, VariableStore},
};

/// The role a token plays at a particular position of a token window.
///
/// Roles are resolved from the token, its index, its neighbours and the
/// current variable bindings, so the same `-` or `/` can end up in different
/// roles depending on where it sits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Role {
    /// `=`
    Assign,
    /// `->`
    Convert,
    /// `+`
    Add,
    /// `-` between two operands.
    Subtract,
    /// `*`
    Multiply,
    /// `/` followed by something other than a unit.
    Divide,
    /// `-` at the start of the window.
    Negate,
    /// A number (or numeric variable) leading the window, glued to the unit
    /// tokens after it.
    LeadingNumber,
    /// `/` followed by a unit.
    DivideUnit,
    /// A unit (or unit variable) after the first position, composed with
    /// the units before it.
    AdjacentUnit,
    /// `^`
    Degree,
    /// `-` right after another operator, e.g. the sign of a degree.
    NestedNegate,
    /// Anything that never becomes a node on its own.
    Operand,
}

impl Role {
    /// Binding score: the highest-scoring token of a window becomes the root
    /// of that window, so a higher score means it binds more loosely.
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Assign => 10,
            Self::Convert => 9,
            Self::Add | Self::Subtract => 8,
            Self::Multiply | Self::Divide => 7,
            Self::Negate => 6,
            Self::LeadingNumber => 5,
            Self::DivideUnit => 4,
            Self::AdjacentUnit => 3,
            Self::Degree => 2,
            Self::NestedNegate => 1,
            Self::Operand => 0,
        }
    }

    /// Left-associative roles keep the last of several equally scored
    /// tokens, the others keep the first.
    #[must_use]
    pub const fn is_left_associative(self) -> bool {
        matches!(self,
                 Self::Add
                 | Self::Subtract
                 | Self::Multiply
                 | Self::Divide
                 | Self::DivideUnit
                 | Self::AdjacentUnit
                 | Self::Degree)
    }
}

/// Token classification that depends on the variable store.
struct Shape {
    is_number: bool,
    is_unit:   bool,
}

fn shape(token: &Token, vars: &VariableStore) -> Shape {
    match token {
        Token::Number(_) => Shape { is_number: true,
                                    is_unit:   false, },
        Token::Unit(_) => Shape { is_number: false,
                                  is_unit:   true, },
        Token::Variable(name) => {
            let kind = vars.kind_of(name);
            Shape { is_number: kind == Some(ValueKind::Number),
                    is_unit:   kind == Some(ValueKind::Unit), }
        },
        _ => Shape { is_number: false,
                     is_unit:   false, },
    }
}

/// Resolves the role of `tokens[idx]` within the window `tokens`.
///
/// ## Example
/// ```
/// use unitcalc::interpreter::{
///     lexer::tokenize,
///     parser::precedence::{Role, role_at},
///     store::VariableStore,
/// };
///
/// let vars = VariableStore::new();
/// let tokens = tokenize("2 * - 3");
///
/// assert_eq!(role_at(&tokens, 0, &vars), Role::LeadingNumber);
/// assert_eq!(role_at(&tokens, 1, &vars), Role::Multiply);
/// assert_eq!(role_at(&tokens, 2, &vars), Role::NestedNegate);
/// ```
#[must_use]
pub fn role_at(tokens: &[Token], idx: usize, vars: &VariableStore) -> Role {
    let prev_is_binary_operator = idx > 0 && tokens[idx - 1].is_binary_operator();
    let next_is_unit = tokens.get(idx + 1).is_some_and(|next| shape(next, vars).is_unit);
    let current = shape(&tokens[idx], vars);

    match &tokens[idx] {
        Token::Equals => Role::Assign,
        Token::Convert => Role::Convert,
        Token::Add => Role::Add,
        Token::Sub if idx != 0 && !prev_is_binary_operator => Role::Subtract,
        Token::Sub if idx == 0 => Role::Negate,
        Token::Sub => Role::NestedNegate,
        Token::Mul => Role::Multiply,
        Token::Div if next_is_unit => Role::DivideUnit,
        Token::Div => Role::Divide,
        Token::Caret => Role::Degree,
        _ if current.is_number && idx == 0 => Role::LeadingNumber,
        _ if current.is_unit && idx != 0 => Role::AdjacentUnit,
        _ => Role::Operand,
    }
}

/// Picks the token that becomes the root of the window.
///
/// Scans left to right; a higher score always wins, and an equal score wins
/// only for left-associative roles. Falls back to index 0 when nothing
/// scores.
#[must_use]
pub fn find_pivot(tokens: &[Token], vars: &VariableStore) -> (usize, Role) {
    let mut best = (0, Role::Operand);

    for idx in 0..tokens.len() {
        let role = role_at(tokens, idx, vars);
        let (_, best_role) = best;
        if role.score() > best_role.score()
           || (role.score() == best_role.score() && role.is_left_associative())
        {
            best = (idx, role);
        }
    }

    tracing::trace!(pivot = best.0, role = ?best.1, "pivot selected");
    best
}
