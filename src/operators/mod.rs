//! Variation and selection operators.
//!
//! The algorithms depend only on the three traits below; concrete
//! operators are interchangeable. Closures with the matching shape
//! implement [`Crossover`] and [`Mutation`] directly.
//!
//! # Submodules
//!
//! - [`variation`]: Real-coded crossover (SBX) and mutation (polynomial,
//!   uniform) operators
//! - [`selection`]: Binary tournament with pluggable preference
//! - [`reproduction`]: The offspring loop combining all three operators
//!
//! # References
//!
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous Search Space"
//! - Deb & Goyal (1996), "A Combined Genetic Adaptive Search (GeneAS)"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

pub mod reproduction;
pub mod selection;
pub mod variation;

use crate::error::Result;
use crate::model::Solution;
use rand::{Rng, RngCore};

pub use reproduction::Reproduction;
pub use selection::{BinaryTournament, CrowdedComparison, FitnessComparison, Preference};
pub use variation::{PolynomialMutation, SimulatedBinaryCrossover, UniformMutation};

/// Recombines two parents into exactly two offspring.
pub trait Crossover {
    /// Produces two children. Parents are left untouched.
    fn crossover<R: Rng>(
        &self,
        parent1: &Solution,
        parent2: &Solution,
        rng: &mut R,
    ) -> (Solution, Solution);
}

/// Perturbs a solution's variables in place.
pub trait Mutation {
    /// Mutates `solution`. Must not touch its objective vector.
    fn mutate<R: Rng>(&self, solution: &mut Solution, rng: &mut R);
}

/// Chooses one solution from a population.
pub trait Selection {
    /// Returns the index of the chosen solution.
    fn select<R: Rng>(&self, population: &[Solution], rng: &mut R) -> Result<usize>;
}

impl<F> Crossover for F
where
    F: Fn(&Solution, &Solution, &mut dyn RngCore) -> (Solution, Solution),
{
    fn crossover<R: Rng>(
        &self,
        parent1: &Solution,
        parent2: &Solution,
        rng: &mut R,
    ) -> (Solution, Solution) {
        self(parent1, parent2, rng)
    }
}

impl<F> Mutation for F
where
    F: Fn(&mut Solution, &mut dyn RngCore),
{
    fn mutate<R: Rng>(&self, solution: &mut Solution, rng: &mut R) {
        self(solution, rng)
    }
}
