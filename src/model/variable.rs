//! Decision variables.

/// The declared type of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariableKind {
    /// Continuous value within `[lower, upper]`.
    #[default]
    Real,
    /// Discrete value within `[lower, upper]`, both ends inclusive.
    Integer,
}

/// One decision value held by a [`Solution`](super::Solution).
///
/// Variables are plain values: cloning a solution clones its variables.
/// Variation operators work on the `f64` view returned by
/// [`value`](Self::value) and write back through
/// [`set_value`](Self::set_value), which rounds for integer variables.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variable {
    /// A continuous value.
    Real(f64),
    /// A discrete value.
    Integer(i64),
}

impl Variable {
    /// Creates a variable of the given kind from an `f64`, rounding for
    /// integer variables.
    pub fn from_value(kind: VariableKind, value: f64) -> Self {
        match kind {
            VariableKind::Real => Variable::Real(value),
            VariableKind::Integer => Variable::Integer(value.round() as i64),
        }
    }

    /// Returns the declared kind.
    pub fn kind(&self) -> VariableKind {
        match self {
            Variable::Real(_) => VariableKind::Real,
            Variable::Integer(_) => VariableKind::Integer,
        }
    }

    /// Returns the value as `f64`.
    pub fn value(&self) -> f64 {
        match *self {
            Variable::Real(v) => v,
            Variable::Integer(v) => v as f64,
        }
    }

    /// Overwrites the value, keeping the kind.
    pub fn set_value(&mut self, value: f64) {
        *self = Variable::from_value(self.kind(), value);
    }
}
