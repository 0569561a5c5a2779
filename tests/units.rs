use proptest::prelude::*;
use unitcalc::{
    error::RuntimeError,
    interpreter::unit::{
        Unit, UnitPower, UnitType,
        core::{ALL_UNITS, Category},
    },
};

fn unit_type() -> impl Strategy<Value = UnitType> {
    proptest::sample::select(ALL_UNITS.to_vec())
}

/// Pairs of units measuring the same category.
fn same_category_pair() -> impl Strategy<Value = (UnitType, UnitType)> {
    proptest::sample::select(vec![ALL_UNITS[..6].to_vec(),
                                  ALL_UNITS[6..9].to_vec(),
                                  ALL_UNITS[9..].to_vec()])
        .prop_flat_map(|units| (proptest::sample::select(units.clone()), proptest::sample::select(units)))
}

fn unit_power(units: Vec<UnitType>) -> impl Strategy<Value = UnitPower> {
    (proptest::sample::select(units), -4i32..=4).prop_map(|(unit, degree)| UnitPower::new(unit, degree))
}

/// Composite units with at most one entry per category, as produced by the
/// unit checker.
fn composite() -> impl Strategy<Value = Unit> {
    (unit_power(ALL_UNITS[..6].to_vec()),
     unit_power(ALL_UNITS[6..9].to_vec()),
     unit_power(ALL_UNITS[9..].to_vec())).prop_map(|(distance, time, mass)| {
                                             Unit::from_powers([distance, time, mass])
                                         })
}

fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

proptest! {
    #[test]
    fn conversion_round_trips((a, b) in same_category_pair(), x in 1e-3f64..1e6) {
        let there = x * a.factor_to(b);
        let back = there * b.factor_to(a);
        prop_assert!(relative_error(back, x) < 1e-5, "{a} -> {b} -> {a}: {x} became {back}");
    }

    #[test]
    fn conversion_table_is_symmetric(a in unit_type(), b in unit_type()) {
        let forward = a.factor_to(b);
        let backward = b.factor_to(a);
        prop_assert_eq!(forward == 0.0, backward == 0.0);
        if forward != 0.0 {
            prop_assert!(relative_error(forward * backward, 1.0) < 1e-5);
        }
    }

    #[test]
    fn combining_with_the_inverse_cancels(unit in composite()) {
        let inverse = unit.inverted().unwrap();
        prop_assert_eq!(unit.combine(&inverse, false), Ok(Unit::None));
    }

    #[test]
    fn composite_units_convert_between_their_categories(unit in composite()) {
        prop_assert!(unit.convertible(&unit).is_ok());
        prop_assert!((unit.conversion_factor(&unit) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn table_zero_exactly_across_categories() {
    for a in ALL_UNITS {
        for b in ALL_UNITS {
            let factor = a.factor_to(b);
            if a.category() == b.category() {
                assert!(factor > 0.0, "{a} -> {b} should be convertible");
            } else {
                assert_eq!(factor, 0.0, "{a} -> {b} crosses categories");
            }
        }
    }
}

#[test]
fn categories() {
    assert_eq!(UnitType::Inch.category(), Category::Distance);
    assert_eq!(UnitType::Minute.category(), Category::Time);
    assert_eq!(UnitType::Ounce.category(), Category::Mass);
}

#[test]
fn mass_factors() {
    assert_eq!(UnitType::Kilogram.factor_to(UnitType::Gram), 1000.0);
    assert_eq!(UnitType::Pound.factor_to(UnitType::Ounce), 16.0);
    assert!(relative_error(UnitType::Kilogram.factor_to(UnitType::Pound), 2.204_622_62) < 1e-9);
}

#[test]
fn combine_identity_and_poison() {
    let km = Unit::single(UnitType::Kilometer);
    assert_eq!(Unit::None.combine(&km, true), Ok(km.clone()));
    assert_eq!(km.combine(&Unit::None, true), Ok(km.clone()));
    assert_eq!(km.combine(&Unit::Unknown, false), Ok(Unit::Unknown));
    assert_eq!(Unit::Unknown.combine(&Unit::None, false), Ok(Unit::Unknown));
}

#[test]
fn combine_sums_into_the_left_unit() {
    let km = Unit::single(UnitType::Kilometer);
    let m = Unit::single(UnitType::Meter);
    assert_eq!(km.combine(&m, false),
               Ok(Unit::from_powers([UnitPower::new(UnitType::Kilometer, 2)])));
    assert_eq!(km.combine(&m, true),
               Err(RuntimeError::SameCategoryComposition { left:  km.clone(),
                                                           right: m, }));
    assert_eq!(km.combine(&km, true),
               Ok(Unit::from_powers([UnitPower::new(UnitType::Kilometer, 2)])));
}

#[test]
fn combine_keeps_other_categories() {
    let speed = Unit::from_powers([UnitPower::new(UnitType::Meter, 1),
                                   UnitPower::new(UnitType::Second, -1)]);
    let mass = Unit::single(UnitType::Kilogram);
    let combined = speed.combine(&mass, true).unwrap();

    assert_eq!(combined.len(), 3);
    assert_eq!(combined.to_string(), "m s^-1 kg");
}

#[test]
fn equality_ignores_entry_order() {
    let a = Unit::from_powers([UnitPower::new(UnitType::Meter, 1),
                               UnitPower::new(UnitType::Second, -1)]);
    let b = Unit::from_powers([UnitPower::new(UnitType::Second, -1),
                               UnitPower::new(UnitType::Meter, 1)]);
    assert_eq!(a, b);
}

#[test]
fn raised_multiplies_degrees() {
    let s = Unit::single(UnitType::Second);
    assert_eq!(s.raised(-2), Some(Unit::from_powers([UnitPower::new(UnitType::Second, -2)])));
    assert_eq!(s.raised(0), Some(Unit::None));
    assert_eq!(Unit::from_powers([UnitPower::new(UnitType::Second, i32::MAX)]).raised(2), None);
}

#[test]
fn degree_overflow_is_reported() {
    let huge = Unit::from_powers([UnitPower::new(UnitType::Kilometer, i32::MAX)]);
    let km = Unit::single(UnitType::Kilometer);
    assert_eq!(huge.combine(&km, false),
               Err(RuntimeError::UnsupportedDegree { degree: 2_147_483_648.0 }));

    let tiny = Unit::from_powers([UnitPower::new(UnitType::Second, i32::MIN)]);
    assert_eq!(tiny.inverted(),
               Err(RuntimeError::UnsupportedDegree { degree: 2_147_483_648.0 }));
    assert_eq!(huge.inverted(),
               Ok(Unit::from_powers([UnitPower::new(UnitType::Kilometer, -i32::MAX)])));
}

#[test]
fn convertible_checks_shape() {
    let km = Unit::single(UnitType::Kilometer);
    let mi = Unit::single(UnitType::Mile);
    let km2 = Unit::from_powers([UnitPower::new(UnitType::Kilometer, 2)]);
    let h = Unit::single(UnitType::Hour);

    assert!(km.convertible(&mi).is_ok());
    assert!(km2.convertible(&mi).is_err());
    assert!(km.convertible(&h).is_err());
    assert!(km.convertible(&Unit::None).is_err());
    assert!(Unit::None.convertible(&Unit::None).is_ok());
}

#[test]
fn conversion_factor_of_composites() {
    let kmh = Unit::from_powers([UnitPower::new(UnitType::Kilometer, 1),
                                 UnitPower::new(UnitType::Hour, -1)]);
    let ms = Unit::from_powers([UnitPower::new(UnitType::Meter, 1),
                                UnitPower::new(UnitType::Second, -1)]);
    assert!(relative_error(kmh.conversion_factor(&ms), 1.0 / 3.6) < 1e-12);
}

#[test]
fn display() {
    let unit = Unit::from_powers([UnitPower::new(UnitType::Kilogram, 1),
                                  UnitPower::new(UnitType::Meter, 1),
                                  UnitPower::new(UnitType::Second, -2)]);
    assert_eq!(unit.to_string(), "kg m s^-2");
    assert_eq!(Unit::None.to_string(), "");
    assert_eq!(format!("{:#}", Unit::None), "none");
    assert_eq!(Unit::Unknown.to_string(), "unknown");
}
