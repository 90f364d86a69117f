//! Pareto dominance, front extraction and crowding distance.
//!
//! Domain-agnostic building blocks shared by [`Nsga2`](crate::nsga2::Nsga2)
//! and [`Spea2`](crate::spea2::Spea2).
//!
//! # Algorithms
//!
//! - [`dominance`] / [`DominanceComparator`]: Three-way Pareto comparison
//! - [`rank_fronts`]: Iterative non-dominated peeling into ranked fronts
//! - [`crowding_distance`]: Crowding distance for diversity preservation
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

mod crowding;
mod dominance;
mod ranking;

pub use crowding::{assign_crowding_distance, crowding_distance};
pub use dominance::{dominance, DominanceComparator, ParetoDominance, SingleObjectiveDominance};
pub use ranking::rank_fronts;
