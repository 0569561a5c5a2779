use logos::Logos;

use crate::interpreter::unit::UnitType;

/// Longest line, in bytes, the tokenizer accepts.
pub const MAX_INPUT: usize = 256;

/// Represents a lexical token in one input line.
///
/// The tokenizer produces a flat sequence of these for every line. The
/// sequence always ends with [`Token::End`], unless an invalid character
/// stopped tokenizing, in which case it ends with [`Token::Invalid`].
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `2.5` or `1e3`.
    Number(f64),
    /// A unit symbol such as `km`.
    Unit(UnitType),
    /// Any other word; a variable name.
    Variable(String),
    /// `=`
    Equals,
    /// `->`
    Convert,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Caret,
    /// A run of spaces, tabs or newlines.
    Whitespace,
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
    /// End of the line.
    End,
    /// Unrecognized or malformed input; nothing after it is scanned.
    Invalid,
}

impl Token {
    /// Whether the token is an operator taking two operands.
    #[must_use]
    pub const fn is_binary_operator(&self) -> bool {
        matches!(self,
                 Self::Add
                 | Self::Sub
                 | Self::Mul
                 | Self::Div
                 | Self::Caret
                 | Self::Convert
                 | Self::Equals)
    }
}

/// Raw lexemes recognized by the state machine before words are classified.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme<'s> {
    /// Numbers with an optional fraction and a non-negative exponent.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][0-9]+)?", parse_number)]
    Number(f64),
    /// A mantissa followed by `e` without exponent digits, e.g. `1e-5`.
    /// Negative exponents are not part of the number syntax.
    #[regex(r"[0-9]+(\.[0-9]*)?[eE]")]
    MalformedNumber,
    /// Letters followed by letters, digits or underscores.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice())]
    Word(&'s str),
    /// Spaces, tabs and newlines.
    #[regex(r"[ \t\r\n]+")]
    Whitespace,
    /// `->`
    #[token("->")]
    Arrow,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if it is finite.
/// - `None`: If the slice does not parse or overflows to infinity.
fn parse_number<'s>(lex: &logos::Lexer<'s, Lexeme<'s>>) -> Option<f64> {
    lex.slice().parse().ok().filter(|n: &f64| n.is_finite())
}

/// Classifies a word: keywords first, then unit symbols, then variables.
fn classify_word(word: &str) -> Token {
    match word {
        "quit" | "exit" => Token::Quit,
        "help" => Token::Help,
        _ => UnitType::from_symbol(word).map_or_else(|| Token::Variable(word.to_string()),
                                                     Token::Unit),
    }
}

fn classify(lexeme: Lexeme<'_>) -> Token {
    match lexeme {
        Lexeme::Number(n) => Token::Number(n),
        Lexeme::MalformedNumber => Token::Invalid,
        Lexeme::Word(word) => classify_word(word),
        Lexeme::Whitespace => Token::Whitespace,
        Lexeme::Arrow => Token::Convert,
        Lexeme::Equals => Token::Equals,
        Lexeme::Plus => Token::Add,
        Lexeme::Minus => Token::Sub,
        Lexeme::Star => Token::Mul,
        Lexeme::Slash => Token::Div,
        Lexeme::Caret => Token::Caret,
    }
}

/// Tokenizes one line, keeping whitespace tokens.
///
/// Input longer than [`MAX_INPUT`] yields a single [`Token::Invalid`]
/// without being scanned. The first invalid token ends the sequence.
///
/// ## Example
/// ```
/// use unitcalc::interpreter::lexer::{Token, lex};
///
/// assert_eq!(lex("1 +2"),
///            vec![Token::Number(1.0), Token::Whitespace, Token::Add, Token::Number(2.0), Token::End]);
/// ```
#[must_use]
pub fn lex(input: &str) -> Vec<Token> {
    if input.len() > MAX_INPUT {
        tracing::debug!(length = input.len(), "input exceeds maximum line length");
        return vec![Token::Invalid];
    }

    let mut tokens = Vec::new();
    for lexeme in Lexeme::lexer(input) {
        let token = lexeme.map_or(Token::Invalid, classify);
        let done = token == Token::Invalid;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
    tokens.push(Token::End);
    tokens
}

/// Tokenizes one line for the parser, eliding whitespace.
///
/// ## Example
/// ```
/// use unitcalc::interpreter::{
///     lexer::{Token, tokenize},
///     unit::UnitType,
/// };
///
/// assert_eq!(tokenize("2 km -> mi"),
///            vec![Token::Number(2.0),
///                 Token::Unit(UnitType::Kilometer),
///                 Token::Convert,
///                 Token::Unit(UnitType::Mile),
///                 Token::End]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let tokens: Vec<Token> = lex(input).into_iter()
                                       .filter(|token| *token != Token::Whitespace)
                                       .collect();
    tracing::debug!(?tokens, "tokenized");
    tokens
}
