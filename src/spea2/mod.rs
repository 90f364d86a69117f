//! Strength Pareto Evolutionary Algorithm 2.
//!
//! A fixed-size archive carries the elite across generations. Every
//! solution in the union of population and archive is scored by the summed
//! strength of its dominators plus a k-th nearest neighbor density term;
//! overflowing archives are truncated by iterative nearest-neighbor removal.
//!
//! # Key Types
//!
//! - [`Spea2Config`] / [`KNeighbor`]: Algorithm parameters
//! - [`Spea2`]: Executes the generational loop
//! - [`assign_fitness`], [`environmental_selection`], [`truncate_archive`]:
//!   The scoring and archive update, usable on their own
//!
//! # References
//!
//! - Zitzler, Laumanns & Thiele (2001), *SPEA2: Improving the Strength
//!   Pareto Evolutionary Algorithm*

mod config;
mod fitness;
mod runner;

pub use config::{KNeighbor, Spea2Config};
pub use fitness::{
    assign_density, assign_fitness, assign_raw_fitness, environmental_selection,
    truncate_archive,
};
pub use runner::Spea2;
