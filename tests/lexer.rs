use unitcalc::interpreter::{
    lexer::{MAX_INPUT, Token, lex, tokenize},
    unit::UnitType,
};

#[test]
fn numbers() {
    assert_eq!(tokenize("42"), vec![Token::Number(42.0), Token::End]);
    assert_eq!(tokenize("2.5"), vec![Token::Number(2.5), Token::End]);
    assert_eq!(tokenize("3."), vec![Token::Number(3.0), Token::End]);
    assert_eq!(tokenize("1e3"), vec![Token::Number(1000.0), Token::End]);
    assert_eq!(tokenize("1.5E2"), vec![Token::Number(150.0), Token::End]);
}

#[test]
fn negative_exponents_are_invalid() {
    assert_eq!(tokenize("1e-5"), vec![Token::Invalid]);
    assert_eq!(tokenize("2 + 1e"), vec![Token::Number(2.0), Token::Add, Token::Invalid]);
}

#[test]
fn words_are_classified() {
    assert_eq!(tokenize("km"), vec![Token::Unit(UnitType::Kilometer), Token::End]);
    assert_eq!(tokenize("min"), vec![Token::Unit(UnitType::Minute), Token::End]);
    assert_eq!(tokenize("Km"), vec![Token::Variable("Km".to_string()), Token::End]);
    assert_eq!(tokenize("kms"), vec![Token::Variable("kms".to_string()), Token::End]);
    assert_eq!(tokenize("x_1"), vec![Token::Variable("x_1".to_string()), Token::End]);
    assert_eq!(tokenize("help"), vec![Token::Help, Token::End]);
    assert_eq!(tokenize("quit"), vec![Token::Quit, Token::End]);
    assert_eq!(tokenize("exit"), vec![Token::Quit, Token::End]);
}

#[test]
fn operators() {
    assert_eq!(tokenize("= -> + - * / ^"),
               vec![Token::Equals,
                    Token::Convert,
                    Token::Add,
                    Token::Sub,
                    Token::Mul,
                    Token::Div,
                    Token::Caret,
                    Token::End]);
    assert_eq!(tokenize("s^-2"),
               vec![Token::Unit(UnitType::Second),
                    Token::Caret,
                    Token::Sub,
                    Token::Number(2.0),
                    Token::End]);
}

#[test]
fn whitespace_is_kept_by_lex_only() {
    assert_eq!(lex(" \t1"), vec![Token::Whitespace, Token::Number(1.0), Token::End]);
    assert_eq!(tokenize(" \t1"), vec![Token::Number(1.0), Token::End]);
    assert_eq!(tokenize(""), vec![Token::End]);
}

#[test]
fn invalid_character_stops_scanning() {
    assert_eq!(tokenize("1 $ 2 km"), vec![Token::Number(1.0), Token::Invalid]);
    assert_eq!(tokenize("(1)"), vec![Token::Invalid]);
}

#[test]
fn overlong_input_is_a_single_invalid_token() {
    let line = "1".repeat(MAX_INPUT + 1);
    assert_eq!(lex(&line), vec![Token::Invalid]);

    let line = "1".repeat(MAX_INPUT);
    assert_eq!(lex(&line).last(), Some(&Token::End));
}
