/// The checker module validates expression trees before evaluation.
///
/// Two passes run over every parsed line. The validity pass checks that each
/// operator received operands of an acceptable shape. The unit pass infers
/// the unit of every node and rejects dimensionally inconsistent
/// expressions such as `1 km + 2 s`.
///
/// # Responsibilities
/// - Rejects malformed trees with a message naming the operator and its
///   operand kinds.
/// - Infers composite units and reports inconvertible or incompatible ones.
/// - Reports each problem once; later stages see an unknown unit and stay
///   quiet.
pub mod checker;
/// The evaluator module computes the numeric value of checked expressions.
///
/// Addition, subtraction and division rescale the right operand into the
/// unit of the left one, and conversion rescales into the target unit.
pub mod evaluator;
/// The lexer module tokenizes one input line.
///
/// Produces numbers, unit symbols, variable names, operators and the `help`
/// and `quit` keywords. Malformed input ends the token stream with an
/// invalid token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Precedence is decided per token from its position, its neighbours and
/// the current variable bindings rather than from a static table.
pub mod parser;
/// The session module runs lines through the whole pipeline.
pub mod session;
/// Session-wide variable bindings and their substitution into expression
/// trees.
pub mod store;
/// The unit module defines base units, their categories and conversion
/// factors, and the composite-unit algebra built on top of them.
///
/// # Responsibilities
/// - Recognizes unit symbols and classifies them into categories.
/// - Combines, inverts and raises composite units, cancelling opposite
///   degrees.
/// - Decides convertibility and computes conversion factors.
pub mod unit;
