//! Non-dominated Sorting Genetic Algorithm II.
//!
//! Elitist generational loop: parents and offspring are merged, ranked
//! into Pareto fronts and truncated back to the population size using
//! crowding distance as the diversity measure.
//!
//! # Key Types
//!
//! - [`Nsga2Config`]: Algorithm parameters (population size, rates, presets)
//! - [`Nsga2`]: Executes the generational loop, implements
//!   [`Algorithm`](crate::algorithm::Algorithm)
//! - [`crowded_truncation`]: The rank + crowding environmental selection
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
mod runner;

pub use config::Nsga2Config;
pub use runner::{crowded_truncation, Nsga2};
