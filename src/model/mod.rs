//! Solution and population model.
//!
//! # Key Types
//!
//! - [`Variable`]: One typed decision value (continuous or integer)
//! - [`Solution`]: Variables, objective vector and a [`Properties`] map
//!   for per-generation metadata
//! - [`Population`]: Insertion-ordered collection with
//!   [`reduce_to_non_dominated`](Population::reduce_to_non_dominated)
//! - [`Problem`]: The objective-function boundary
//! - [`VariableBounds`]: Bounds snapshot used by variation operators

mod population;
mod problem;
mod solution;
mod variable;

pub use population::Population;
pub use problem::{Problem, VariableBounds};
pub use solution::{
    Properties, Solution, CROWDING_DISTANCE, DENSITY, FITNESS, RANK, RAW_FITNESS, STRENGTH,
};
pub use variable::{Variable, VariableKind};
