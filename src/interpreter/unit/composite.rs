use std::fmt;

use crate::{error::RuntimeError, interpreter::unit::core::UnitType};

/// One factor of a composite unit: a base unit raised to an integer degree.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UnitPower {
    /// The base unit.
    pub unit:   UnitType,
    /// The exponent; never zero inside a [`Unit`].
    pub degree: i32,
}

impl UnitPower {
    #[must_use]
    pub const fn new(unit: UnitType, degree: i32) -> Self {
        Self { unit, degree }
    }
}

/// A composite dimensional quantity such as `km s^-1`.
///
/// `Composite` entries never share a category and never carry a zero degree:
/// every combination collapses same-category entries and drops cancelled
/// ones. Entry order is insertion order and only matters for display, which
/// is why equality compares entries as a set.
#[derive(Debug, Clone)]
pub enum Unit {
    /// Dimensionless.
    None,
    /// Unit checking already failed somewhere below; propagate silently.
    Unknown,
    /// One or more base units with non-zero degrees.
    Composite(Vec<UnitPower>),
}

impl Unit {
    /// A single base unit with degree 1.
    #[must_use]
    pub fn single(unit: UnitType) -> Self {
        Self::Composite(vec![UnitPower::new(unit, 1)])
    }

    /// Builds a unit from raw entries, normalizing the empty case to
    /// [`Unit::None`] and dropping zero degrees.
    #[must_use]
    pub fn from_powers(powers: impl IntoIterator<Item = UnitPower>) -> Self {
        let powers: Vec<UnitPower> = powers.into_iter().filter(|p| p.degree != 0).collect();
        if powers.is_empty() { Self::None } else { Self::Composite(powers) }
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// The entries of a composite unit; empty for the sentinels.
    #[must_use]
    pub fn powers(&self) -> &[UnitPower] {
        match self {
            Self::Composite(powers) => powers,
            Self::None | Self::Unknown => &[],
        }
    }

    /// Number of entries. The sentinels count as a single entry.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Composite(powers) => powers.len(),
            Self::None | Self::Unknown => 1,
        }
    }

    /// A unit is never empty; see [`Unit::len`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Negates every degree, turning `km s^-1` into `km^-1 s`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnsupportedDegree`] when a degree has no
    /// `i32` negation.
    pub fn inverted(&self) -> Result<Self, RuntimeError> {
        match self {
            Self::Composite(powers) => {
                let powers = powers.iter()
                                   .map(|p| {
                                       p.degree
                                        .checked_neg()
                                        .map(|d| UnitPower::new(p.unit, d))
                                        .ok_or(RuntimeError::UnsupportedDegree { degree: -f64::from(p.degree) })
                                   })
                                   .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Composite(powers))
            },
            other => Ok(other.clone()),
        }
    }

    /// Multiplies every degree by `factor`, or returns `None` if a degree
    /// overflows.
    #[must_use]
    pub fn raised(&self, factor: i32) -> Option<Self> {
        match self {
            Self::Composite(powers) => {
                let powers = powers.iter()
                                   .map(|p| p.degree.checked_mul(factor).map(|d| UnitPower::new(p.unit, d)))
                                   .collect::<Option<Vec<_>>>()?;
                Some(Self::from_powers(powers))
            },
            other => Some(other.clone()),
        }
    }

    /// Merges the degree vectors of two units.
    ///
    /// [`Unit::None`] is the identity and [`Unit::Unknown`] poisons the
    /// result. For each pair of entries sharing a category:
    /// - with `reject_same_category`, differing unit types are an error
    ///   (`km m` cannot be composed by adjacency);
    /// - opposite degrees cancel and both entries disappear;
    /// - otherwise the degrees are summed into the left entry's unit type.
    ///
    /// # Errors
    /// - [`RuntimeError::SameCategoryComposition`] for rejected pairs.
    /// - [`RuntimeError::UnsupportedDegree`] when a summed degree overflows.
    ///
    /// ## Example
    /// ```
    /// use unitcalc::interpreter::unit::{
    ///     composite::{Unit, UnitPower},
    ///     core::UnitType,
    /// };
    ///
    /// let speed = Unit::from_powers([UnitPower::new(UnitType::Kilometer, 1),
    ///                                UnitPower::new(UnitType::Hour, -1)]);
    /// let hour = Unit::single(UnitType::Hour);
    ///
    /// assert_eq!(speed.combine(&hour, false), Ok(Unit::single(UnitType::Kilometer)));
    /// assert!(Unit::single(UnitType::Meter).combine(&Unit::single(UnitType::Foot), true)
    ///                                      .is_err());
    /// ```
    pub fn combine(&self, other: &Self, reject_same_category: bool) -> Result<Self, RuntimeError> {
        let (left, right) = match (self, other) {
            (Self::Unknown, _) | (_, Self::Unknown) => return Ok(Self::Unknown),
            (Self::None, unit) | (unit, Self::None) => return Ok(unit.clone()),
            (Self::Composite(left), Self::Composite(right)) => (left, right),
        };

        let mut merged: Vec<Option<UnitPower>> = left.iter().copied().map(Some).collect();
        let mut extra = Vec::new();

        for power in right {
            let category = power.unit.category();
            let slot = merged.iter_mut()
                             .find(|slot| slot.is_some_and(|p| p.unit.category() == category));

            let Some(slot) = slot else {
                extra.push(*power);
                continue;
            };

            if let Some(existing) = *slot {
                if reject_same_category && existing.unit != power.unit {
                    return Err(RuntimeError::SameCategoryComposition { left:  self.clone(),
                                                                       right: other.clone(), });
                }
                let Some(degree) = existing.degree.checked_add(power.degree) else {
                    let degree = f64::from(existing.degree) + f64::from(power.degree);
                    return Err(RuntimeError::UnsupportedDegree { degree });
                };
                *slot = (degree != 0).then_some(UnitPower::new(existing.unit, degree));
            }
        }

        Ok(Self::from_powers(merged.into_iter().flatten().chain(extra)))
    }

    /// Checks that `self` can be converted into `target`.
    ///
    /// Both units need the same number of entries, and every entry of `self`
    /// needs a same-category entry of `target` with exactly the same degree.
    /// Unit types themselves may differ: `km` converts to `mi`, but `km^2`
    /// does not convert to `mi`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::Inconvertible`] describing the mismatch.
    pub fn convertible(&self, target: &Self) -> Result<(), RuntimeError> {
        let inconvertible = |reason: &str| {
            Err(RuntimeError::Inconvertible { from:   self.clone(),
                                              to:     target.clone(),
                                              reason: reason.to_string(), })
        };

        match (self, target) {
            (Self::None, Self::None) => Ok(()),
            (Self::Unknown, _) | (_, Self::Unknown) => inconvertible("unit is unknown"),
            (Self::None, _) | (_, Self::None) => inconvertible("one side has no unit"),
            (Self::Composite(from), Self::Composite(to)) => {
                if from.len() != to.len() {
                    return inconvertible("different number of units");
                }
                for power in from {
                    match to.iter().find(|p| p.unit.category() == power.unit.category()) {
                        Some(p) if p.degree == power.degree => {},
                        Some(_) => return inconvertible("degrees differ"),
                        None => return inconvertible("categories differ"),
                    }
                }
                Ok(())
            },
        }
    }

    /// Factor that converts a magnitude expressed in `self` into `target`.
    ///
    /// For every entry of `self` with a same-category entry in `target`, the
    /// base factor is raised to the entry's degree and all of them are
    /// multiplied together. Entries without a counterpart contribute `1`, so
    /// the factor only rescales the categories both units share.
    ///
    /// ## Example
    /// ```
    /// use unitcalc::interpreter::unit::{composite::Unit, core::UnitType};
    ///
    /// let factor = Unit::single(UnitType::Minute).conversion_factor(&Unit::single(UnitType::Second));
    /// assert_eq!(factor, 60.0);
    /// ```
    #[must_use]
    pub fn conversion_factor(&self, target: &Self) -> f64 {
        self.powers()
            .iter()
            .filter_map(|power| {
                target.powers()
                      .iter()
                      .find(|p| p.unit.category() == power.unit.category())
                      .map(|p| power.unit.factor_to(p.unit).powi(power.degree))
            })
            .product()
    }
}

impl From<UnitType> for Unit {
    fn from(unit: UnitType) -> Self {
        Self::single(unit)
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) | (Self::Unknown, Self::Unknown) => true,
            (Self::Composite(left), Self::Composite(right)) => {
                left.len() == right.len() && left.iter().all(|p| right.contains(p))
            },
            _ => false,
        }
    }
}

/// Renders `km s^-1`. [`Unit::None`] renders as nothing, or as `none` with
/// the alternate flag (`{:#}`) used by diagnostics.
impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None if f.alternate() => f.write_str("none"),
            Self::None => Ok(()),
            Self::Unknown => f.write_str("unknown"),
            Self::Composite(powers) => {
                for (i, power) in powers.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    if power.degree == 1 {
                        write!(f, "{}", power.unit)?;
                    } else {
                        write!(f, "{}^{}", power.unit, power.degree)?;
                    }
                }
                Ok(())
            },
        }
    }
}
