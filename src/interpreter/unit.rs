/// Base units, their categories, and the pairwise conversion table.
pub mod core;

/// Composite units and the algebra over them: combination, cancellation,
/// convertibility and conversion factors.
pub mod composite;

pub use self::composite::{Unit, UnitPower};
pub use self::core::{Category, UnitType};
