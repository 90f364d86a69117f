//! Front extraction by iterative non-dominated peeling.

use super::dominance::DominanceComparator;
use crate::model::{Population, RANK};

/// Splits a population into successive Pareto fronts.
///
/// Repeatedly applies
/// [`reduce_to_non_dominated`](Population::reduce_to_non_dominated) to the
/// remaining solutions; each peeled layer becomes the next front. Every
/// solution receives a [`RANK`] property equal to its 1-based front index.
///
/// Exact duplicates are kept once per front, so surplus copies land in
/// later fronts.
///
/// # Complexity
///
/// O(F * m * n²) where F is the number of fronts, m the number of
/// objectives and n the population size.
///
/// # Example
///
/// ```
/// use u_moea::model::{Population, Solution};
/// use u_moea::pareto::{rank_fronts, ParetoDominance};
///
/// let population: Population = [[1.0, 5.0], [3.0, 3.0], [5.0, 1.0], [4.0, 4.0]]
///     .iter()
///     .map(|o| Solution::from_objectives(o.to_vec()))
///     .collect();
///
/// let fronts = rank_fronts(population, &ParetoDominance);
///
/// assert_eq!(fronts.len(), 2);
/// assert_eq!(fronts[0].len(), 3);
/// assert_eq!(fronts[1][0].rank(), Some(2)); // (4, 4) is dominated by (3, 3)
/// ```
pub fn rank_fronts<C>(mut population: Population, comparator: &C) -> Vec<Population>
where
    C: DominanceComparator + ?Sized,
{
    let mut fronts = Vec::new();

    while !population.is_empty() {
        let rest = population.reduce_to_non_dominated(comparator);
        let rank = (fronts.len() + 1) as f64;
        for solution in population.iter_mut() {
            solution.set_property(RANK, rank);
        }
        fronts.push(population);
        population = rest;
    }

    fronts
}
