/// The base dimension a [`UnitType`] measures.
///
/// Two unit types can only be converted into each other when they share a
/// category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Lengths (`cm`, `m`, `km`, `in`, `ft`, `mi`).
    Distance,
    /// Durations (`s`, `min`, `h`).
    Time,
    /// Masses (`g`, `kg`, `lb`, `oz`).
    Mass,
}

/// A base unit understood by the calculator.
///
/// The discriminants index into the conversion table, so the order of the
/// variants is significant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnitType {
    /// `cm`
    Centimeter,
    /// `m`
    Meter,
    /// `km`
    Kilometer,
    /// `in`
    Inch,
    /// `ft`
    Foot,
    /// `mi`
    Mile,
    /// `s`
    Second,
    /// `min`
    Minute,
    /// `h`
    Hour,
    /// `g`
    Gram,
    /// `kg`
    Kilogram,
    /// `lb`
    Pound,
    /// `oz`
    Ounce,
}

/// Number of base units.
pub const UNIT_COUNT: usize = 13;

/// Every base unit, in table order.
pub const ALL_UNITS: [UnitType; UNIT_COUNT] = [UnitType::Centimeter,
                                               UnitType::Meter,
                                               UnitType::Kilometer,
                                               UnitType::Inch,
                                               UnitType::Foot,
                                               UnitType::Mile,
                                               UnitType::Second,
                                               UnitType::Minute,
                                               UnitType::Hour,
                                               UnitType::Gram,
                                               UnitType::Kilogram,
                                               UnitType::Pound,
                                               UnitType::Ounce];

// Row = from, column = to. Cross-category cells are zero and must never be
// consulted.
#[rustfmt::skip]
const CONVERSION: [[f64; UNIT_COUNT]; UNIT_COUNT] = [
    //      cm          m               km          in              ft                  mi                      s       min         h           g           kg              lb              oz
    /*cm*/ [1.0,        0.01,           0.000_01,   1.0 / 2.54,     1.0 / (2.54 * 12.0), 1.0 / (2.54 * 12.0 * 5280.0), 0.0, 0.0,   0.0,        0.0,        0.0,            0.0,            0.0],
    /*m */ [100.0,      1.0,            0.001,      39.370_078_7,   3.280_839_9,        3.280_839_9 / 5280.0,   0.0,    0.0,        0.0,        0.0,        0.0,            0.0,            0.0],
    /*km*/ [100_000.0,  1000.0,         1.0,        39_370.078_7,   3280.839_9,         0.621_371_19,           0.0,    0.0,        0.0,        0.0,        0.0,            0.0,            0.0],
    /*in*/ [2.54,       0.0254,         0.000_025_4, 1.0,           1.0 / 12.0,         1.0 / (12.0 * 5280.0),  0.0,    0.0,        0.0,        0.0,        0.0,            0.0,            0.0],
    /*ft*/ [30.48,      0.3048,         0.000_304_8, 12.0,          1.0,                1.0 / 5280.0,           0.0,    0.0,        0.0,        0.0,        0.0,            0.0,            0.0],
    /*mi*/ [160_934.4,  1609.344,       1.609_344,  63_360.0,       5280.0,             1.0,                    0.0,    0.0,        0.0,        0.0,        0.0,            0.0,            0.0],
    /*s */ [0.0,        0.0,            0.0,        0.0,            0.0,                0.0,                    1.0,    1.0 / 60.0, 1.0 / 3600.0, 0.0,      0.0,            0.0,            0.0],
    /*min*/[0.0,        0.0,            0.0,        0.0,            0.0,                0.0,                    60.0,   1.0,        1.0 / 60.0, 0.0,        0.0,            0.0,            0.0],
    /*h */ [0.0,        0.0,            0.0,        0.0,            0.0,                0.0,                    3600.0, 60.0,       1.0,        0.0,        0.0,            0.0,            0.0],
    /*g */ [0.0,        0.0,            0.0,        0.0,            0.0,                0.0,                    0.0,    0.0,        0.0,        1.0,        0.001,          0.002_204_622_62, 0.035_273_961_9],
    /*kg*/ [0.0,        0.0,            0.0,        0.0,            0.0,                0.0,                    0.0,    0.0,        0.0,        1000.0,     1.0,            2.204_622_62,   35.273_961_9],
    /*lb*/ [0.0,        0.0,            0.0,        0.0,            0.0,                0.0,                    0.0,    0.0,        0.0,        453.592_37, 0.453_592_37,   1.0,            16.0],
    /*oz*/ [0.0,        0.0,            0.0,        0.0,            0.0,                0.0,                    0.0,    0.0,        0.0,        28.349_523_1, 0.028_349_523_1, 1.0 / 16.0,  1.0],
];

impl UnitType {
    /// Looks up a unit by its exact, case-sensitive symbol.
    ///
    /// ## Example
    /// ```
    /// use unitcalc::interpreter::unit::core::UnitType;
    ///
    /// assert_eq!(UnitType::from_symbol("km"), Some(UnitType::Kilometer));
    /// assert_eq!(UnitType::from_symbol("KM"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        ALL_UNITS.into_iter().find(|unit| unit.symbol() == symbol)
    }

    /// The symbol used to write this unit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Centimeter => "cm",
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::Inch => "in",
            Self::Foot => "ft",
            Self::Mile => "mi",
            Self::Second => "s",
            Self::Minute => "min",
            Self::Hour => "h",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Pound => "lb",
            Self::Ounce => "oz",
        }
    }

    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Centimeter
            | Self::Meter
            | Self::Kilometer
            | Self::Inch
            | Self::Foot
            | Self::Mile => Category::Distance,
            Self::Second | Self::Minute | Self::Hour => Category::Time,
            Self::Gram | Self::Kilogram | Self::Pound | Self::Ounce => Category::Mass,
        }
    }

    /// Multiplicative factor taking a magnitude in `self` to a magnitude in
    /// `to`.
    ///
    /// Returns `0.0` when the units belong to different categories; callers
    /// only ask for factors between units of the same category.
    ///
    /// ## Example
    /// ```
    /// use unitcalc::interpreter::unit::core::UnitType;
    ///
    /// assert_eq!(UnitType::Hour.factor_to(UnitType::Second), 3600.0);
    /// assert_eq!(UnitType::Hour.factor_to(UnitType::Meter), 0.0);
    /// ```
    #[must_use]
    pub const fn factor_to(self, to: Self) -> f64 {
        CONVERSION[self as usize][to as usize]
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
