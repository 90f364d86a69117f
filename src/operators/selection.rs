//! Tournament selection.
//!
//! A binary tournament draws two distinct solutions uniformly at random and
//! keeps the preferred one. What "preferred" means is supplied by a
//! [`Preference`]: NSGA-II uses [`CrowdedComparison`], SPEA2 uses
//! [`FitnessComparison`].

use super::Selection;
use crate::error::{MoeaError, Result};
use crate::model::Solution;
use rand::Rng;
use std::cmp::Ordering;

/// A total preorder over solutions used to decide tournaments.
///
/// `Less` means `a` is preferred over `b`; `Equal` is a tie.
pub trait Preference {
    /// Compares `a` against `b`.
    fn prefer(&self, a: &Solution, b: &Solution) -> Ordering;
}

/// NSGA-II crowded comparison: lower rank wins, then higher crowding
/// distance.
///
/// Solutions without a rank are treated as worst; solutions without a
/// crowding distance as `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrowdedComparison;

impl Preference for CrowdedComparison {
    fn prefer(&self, a: &Solution, b: &Solution) -> Ordering {
        let rank_a = a.rank().unwrap_or(usize::MAX);
        let rank_b = b.rank().unwrap_or(usize::MAX);
        rank_a.cmp(&rank_b).then_with(|| {
            let cd_a = a.crowding_distance().unwrap_or(0.0);
            let cd_b = b.crowding_distance().unwrap_or(0.0);
            cd_b.total_cmp(&cd_a)
        })
    }
}

/// SPEA2 fitness comparison: lower fitness wins.
///
/// Solutions without a fitness are treated as worst.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitnessComparison;

impl Preference for FitnessComparison {
    fn prefer(&self, a: &Solution, b: &Solution) -> Ordering {
        let fa = a.fitness().unwrap_or(f64::INFINITY);
        let fb = b.fitness().unwrap_or(f64::INFINITY);
        fa.total_cmp(&fb)
    }
}

/// Binary tournament selection.
///
/// Picks two **distinct** solutions at random; the preferred one wins and
/// ties are broken uniformly at random.
///
/// # Errors
///
/// [`MoeaError::PopulationTooSmall`] when fewer than two solutions are
/// available.
///
/// # Complexity
/// O(1) per selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryTournament<C> {
    preference: C,
}

impl<C: Preference> BinaryTournament<C> {
    /// Creates a binary tournament deciding by `preference`.
    pub fn new(preference: C) -> Self {
        Self { preference }
    }
}

impl<C: Preference> Selection for BinaryTournament<C> {
    fn select<R: Rng>(&self, population: &[Solution], rng: &mut R) -> Result<usize> {
        let n = population.len();
        if n < 2 {
            return Err(MoeaError::PopulationTooSmall { size: n });
        }

        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n - 1);
        if j >= i {
            j += 1;
        }

        Ok(match self.preference.prefer(&population[i], &population[j]) {
            Ordering::Less => i,
            Ordering::Greater => j,
            Ordering::Equal => {
                if rng.random_bool(0.5) {
                    i
                } else {
                    j
                }
            }
        })
    }
}
