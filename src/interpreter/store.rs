use std::collections::HashMap;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::unit::Unit,
};

/// What a variable currently holds, as far as the parser is concerned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// A number with a (possibly absent) unit.
    Number,
    /// A bare unit, usable wherever a unit symbol is.
    Unit,
}

/// A fully evaluated variable value.
///
/// Only evaluated values are ever stored, never expressions, so a stored
/// value cannot refer to another variable.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    /// A number together with its unit, e.g. `19 km`.
    Quantity {
        /// The magnitude.
        value: f64,
        /// The unit the magnitude is expressed in.
        unit:  Unit,
    },
    /// A unit alias, e.g. `n = kg m s^-2`.
    Unit(Unit),
}

impl StoredValue {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Quantity { .. } => ValueKind::Number,
            Self::Unit(_) => ValueKind::Unit,
        }
    }

    /// Expands the value back into an expression node: a `ConstWithUnit`
    /// for quantities and a unit literal for units.
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        match self {
            Self::Quantity { value, unit } => Expr::quantity(*value, unit.clone()),
            Self::Unit(unit) => Expr::Unit(unit.clone()),
        }
    }
}

/// Session-wide variable bindings.
///
/// Created once per session. Entries are inserted or overwritten by
/// assignments and never removed.
#[derive(Debug, Default, Clone)]
pub struct VariableStore {
    vars: HashMap<String, StoredValue>,
}

impl VariableStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn insert(&mut self, name: impl Into<String>, value: StoredValue) {
        let name = name.into();
        tracing::debug!(%name, ?value, "variable bound");
        self.vars.insert(name, value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StoredValue> {
        self.vars.get(name)
    }

    /// The kind of value `name` is bound to, or `None` when unbound.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<ValueKind> {
        self.get(name).map(StoredValue::kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Replaces every bound `Var` in `expr` with a copy of its value.
    ///
    /// Unbound variables are left in place so that later stages can report
    /// them. The target of an assignment is never substituted, and the
    /// substituted values are not visited again.
    ///
    /// ## Example
    /// ```
    /// use unitcalc::{
    ///     ast::Expr,
    ///     interpreter::{
    ///         store::{StoredValue, VariableStore},
    ///         unit::{Unit, UnitType},
    ///     },
    /// };
    ///
    /// let mut store = VariableStore::new();
    /// store.insert("speed", StoredValue::Unit(Unit::single(UnitType::Kilometer)));
    ///
    /// let mut expr = Expr::Var("speed".to_string());
    /// store.substitute(&mut expr);
    /// assert_eq!(expr, Expr::Unit(Unit::single(UnitType::Kilometer)));
    /// ```
    pub fn substitute(&self, expr: &mut Expr) {
        match expr {
            Expr::Var(name) => {
                if let Some(value) = self.get(name) {
                    *expr = value.to_expr();
                }
            },
            Expr::Negate(inner) => self.substitute(inner),
            Expr::Binary { op: BinaryOperator::Assign,
                           right,
                           .. } => self.substitute(right),
            Expr::Binary { left, right, .. } => {
                self.substitute(left);
                self.substitute(right);
            },
            Expr::Constant(_)
            | Expr::Unit(_)
            | Expr::Empty
            | Expr::Quit
            | Expr::Help
            | Expr::Invalid => {},
        }
    }
}
