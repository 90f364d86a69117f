//! Domain-agnostic multi-objective evolutionary optimization.
//!
//! Searches a decision space for the trade-off set (Pareto front) of
//! several conflicting objectives:
//!
//! - **Pareto machinery**: dominance comparison, non-dominated front
//!   extraction, and crowding distance.
//! - **NSGA-II**: Elitist generational loop with rank + crowding
//!   truncation.
//! - **SPEA2**: Strength/density fitness over a fixed-size archive with
//!   nearest-neighbor truncation.
//! - **Operators**: Pluggable crossover, mutation and selection; SBX,
//!   polynomial and uniform mutation for real-coded problems.
//! - **Front files**: Plain-text interchange of objective vectors.
//!
//! # Architecture
//!
//! Users describe a problem by implementing [`model::Problem`]. The
//! algorithms share one lifecycle contract, [`algorithm::Algorithm`]:
//! `initialize` → `step`* → `result`. Every random decision draws from one
//! seeded generator per run, so runs are reproducible given a seed. The
//! only parallel section is population evaluation (feature `parallel`).
//!
//! # Example
//!
//! ```
//! use u_moea::algorithm::Algorithm;
//! use u_moea::model::{Problem, Solution};
//! use u_moea::nsga2::{Nsga2, Nsga2Config};
//!
//! struct Tradeoff;
//!
//! impl Problem for Tradeoff {
//!     fn number_of_variables(&self) -> usize { 1 }
//!     fn number_of_objectives(&self) -> usize { 2 }
//!     fn lower_bound(&self, _: usize) -> f64 { 0.0 }
//!     fn upper_bound(&self, _: usize) -> f64 { 1.0 }
//!     fn evaluate(&self, s: &Solution) -> Vec<f64> {
//!         let x = s.variables()[0].value();
//!         vec![x, 1.0 - x]
//!     }
//! }
//!
//! let config = Nsga2Config::fast().with_max_generations(5).with_seed(1);
//! let result = Nsga2::real_coded(&Tradeoff, config)
//!     .unwrap()
//!     .execute()
//!     .unwrap();
//! assert_eq!(result.generations, 5);
//! ```

pub mod algorithm;
pub mod error;
pub mod evaluation;
pub mod front_file;
pub mod model;
pub mod nsga2;
pub mod operators;
pub mod pareto;
pub mod random;
pub mod spea2;

#[cfg(test)]
mod testing;

pub use error::{MoeaError, Result};
