//! Population evaluation.
//!
//! Evaluation is the only parallel part of a run. With the `parallel`
//! feature, disjoint solutions are handed to rayon's worker pool and all
//! workers are joined before this function returns, so the generational
//! loop never observes a partially evaluated population.

use crate::error::Result;
use crate::model::{Problem, Solution};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluates every solution in place.
///
/// `parallel` is ignored when the crate is built without the `parallel`
/// feature.
///
/// # Errors
///
/// The first objective/variable count mismatch reported by
/// [`Problem::evaluate_in_place`].
pub fn evaluate_population<P: Problem + ?Sized>(
    problem: &P,
    population: &mut [Solution],
    parallel: bool,
) -> Result<()> {
    #[cfg(feature = "parallel")]
    if parallel {
        return population
            .par_iter_mut()
            .try_for_each(|solution| problem.evaluate_in_place(solution));
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population
        .iter_mut()
        .try_for_each(|solution| problem.evaluate_in_place(solution))
}
