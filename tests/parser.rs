use unitcalc::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::tokenize,
        parser::{
            parse,
            precedence::{Role, find_pivot},
        },
        store::{StoredValue, VariableStore},
        unit::{Unit, UnitPower, UnitType},
    },
};

fn parse_str(src: &str) -> Expr {
    parse(&tokenize(src), &VariableStore::new())
}

fn num(value: f64) -> Expr {
    Expr::Constant(value)
}

fn unit(unit: UnitType) -> Expr {
    Expr::Unit(Unit::single(unit))
}

fn bin(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right)
}

#[test]
fn leaves() {
    assert_eq!(parse_str(""), Expr::Empty);
    assert_eq!(parse_str("help"), Expr::Help);
    assert_eq!(parse_str("exit"), Expr::Quit);
    assert_eq!(parse_str("3"), num(3.0));
    assert_eq!(parse_str("h"), unit(UnitType::Hour));
    assert_eq!(parse_str("speed"), Expr::Var("speed".to_string()));
    assert_eq!(parse_str("+"), Expr::Invalid);
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_eq!(parse_str("1 + 2 * 3"),
               bin(BinaryOperator::Add,
                   num(1.0),
                   bin(BinaryOperator::Mul, num(2.0), num(3.0))));
    assert_eq!(parse_str("1 - 2 + 3"),
               bin(BinaryOperator::Add,
                   bin(BinaryOperator::Sub, num(1.0), num(2.0)),
                   num(3.0)));
    assert_eq!(parse_str("2 * - 3"),
               bin(BinaryOperator::Mul, num(2.0), Expr::negate(num(3.0))));
}

#[test]
fn negated_quantity_with_negative_degree() {
    let km_inv2 = bin(BinaryOperator::Pow,
                      unit(UnitType::Kilometer),
                      Expr::negate(num(2.0)));
    let expected = bin(BinaryOperator::Sub,
                       Expr::negate(bin(BinaryOperator::ConstWithUnit, num(50.0), km_inv2)),
                       num(3.0));

    assert_eq!(parse_str("- 50 km ^ -2 - 3"), expected);
}

#[test]
fn unit_literals() {
    assert_eq!(parse_str("2 km s"),
               bin(BinaryOperator::ConstWithUnit,
                   num(2.0),
                   bin(BinaryOperator::CompositeUnit,
                       unit(UnitType::Kilometer),
                       unit(UnitType::Second))));
    assert_eq!(parse_str("m / s ^ 2"),
               bin(BinaryOperator::DivUnit,
                   unit(UnitType::Meter),
                   bin(BinaryOperator::Pow, unit(UnitType::Second), num(2.0))));
    assert_eq!(parse_str("6 / 2 h"),
               bin(BinaryOperator::Div,
                   num(6.0),
                   bin(BinaryOperator::ConstWithUnit, num(2.0), unit(UnitType::Hour))));
}

#[test]
fn conversion_and_assignment_bind_loosest() {
    assert_eq!(parse_str("1 km * 3 -> in"),
               bin(BinaryOperator::Convert,
                   bin(BinaryOperator::Mul,
                       bin(BinaryOperator::ConstWithUnit, num(1.0), unit(UnitType::Kilometer)),
                       num(3.0)),
                   unit(UnitType::Inch)));
    assert_eq!(parse_str("x = 1 + 2"),
               bin(BinaryOperator::Assign,
                   Expr::Var("x".to_string()),
                   bin(BinaryOperator::Add, num(1.0), num(2.0))));
}

#[test]
fn missing_operands_are_invalid() {
    assert_eq!(parse_str("1 +"), bin(BinaryOperator::Add, num(1.0), Expr::Invalid));
    assert_eq!(parse_str("* 2"), bin(BinaryOperator::Mul, Expr::Invalid, num(2.0)));
}

#[test]
fn variables_take_part_in_precedence() {
    let mut vars = VariableStore::new();
    vars.insert("u", StoredValue::Unit(Unit::single(UnitType::Kilometer)));
    vars.insert("n", StoredValue::Quantity { value: 2.0,
                                             unit:  Unit::None, });

    let tokens = tokenize("s / u");
    assert_eq!(find_pivot(&tokens, &vars), (1, Role::DivideUnit));
    assert_eq!(parse(&tokens, &vars),
               bin(BinaryOperator::DivUnit,
                   unit(UnitType::Second),
                   Expr::Var("u".to_string())));

    let tokens = tokenize("n km");
    assert_eq!(find_pivot(&tokens, &vars), (0, Role::LeadingNumber));

    // Unbound variables are neither numbers nor units.
    let tokens = tokenize("s / w");
    assert_eq!(find_pivot(&tokens, &vars), (1, Role::Divide));
}

#[test]
fn substitution_expands_bound_values() {
    let mut vars = VariableStore::new();
    vars.insert("d", StoredValue::Quantity { value: 3.0,
                                             unit:  Unit::single(UnitType::Meter), });

    let mut expr = parse(&tokenize("d = d + w"), &vars);
    vars.substitute(&mut expr);

    assert_eq!(expr,
               bin(BinaryOperator::Assign,
                   Expr::Var("d".to_string()),
                   bin(BinaryOperator::Add,
                       Expr::quantity(3.0, Unit::single(UnitType::Meter)),
                       Expr::Var("w".to_string()))));
}

#[test]
fn stored_units_keep_their_powers() {
    let accel = Unit::from_powers([UnitPower::new(UnitType::Meter, 1),
                                   UnitPower::new(UnitType::Second, -2)]);
    let mut vars = VariableStore::new();
    vars.insert("a", StoredValue::Unit(accel.clone()));

    let mut expr = parse(&tokenize("a"), &vars);
    vars.substitute(&mut expr);
    assert_eq!(expr, Expr::Unit(accel));
}
