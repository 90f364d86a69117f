//! Offspring generation: selection → crossover → mutation.

use super::{Crossover, Mutation, Selection};
use crate::error::Result;
use crate::model::{Population, Solution};
use rand::Rng;

/// Bundles the three operators and their application rates.
///
/// [`breed`](Reproduction::breed) fills an offspring population by
/// repeatedly selecting two parents, recombining them with probability
/// `crossover_rate` and mutating each child with probability
/// `mutation_rate`. Children start with empty metadata; their objective
/// vectors hold stale parent values until evaluated.
#[derive(Debug, Clone)]
pub struct Reproduction<S, X, M> {
    /// Parent selection operator.
    pub selection: S,
    /// Crossover operator.
    pub crossover: X,
    /// Mutation operator.
    pub mutation: M,
    /// Probability of recombining a selected pair.
    pub crossover_rate: f64,
    /// Probability of mutating a child.
    pub mutation_rate: f64,
}

impl<S: Selection, X: Crossover, M: Mutation> Reproduction<S, X, M> {
    /// Creates offspring until exactly `size` children exist.
    ///
    /// # Errors
    ///
    /// Propagates selection failures, e.g.
    /// [`PopulationTooSmall`](crate::error::MoeaError::PopulationTooSmall)
    /// when `parents` holds fewer than two solutions.
    pub fn breed<R: Rng>(
        &self,
        parents: &[Solution],
        size: usize,
        rng: &mut R,
    ) -> Result<Population> {
        let mut offspring = Population::with_capacity(size);

        while offspring.len() < size {
            let p1 = self.selection.select(parents, rng)?;
            let p2 = self.selection.select(parents, rng)?;

            let (c1, c2) = if rng.random_bool(self.crossover_rate) {
                self.crossover.crossover(&parents[p1], &parents[p2], rng)
            } else {
                (parents[p1].clone(), parents[p2].clone())
            };

            for mut child in [c1, c2] {
                if offspring.len() >= size {
                    break;
                }
                if rng.random_bool(self.mutation_rate) {
                    self.mutation.mutate(&mut child, rng);
                }
                child.clear_properties();
                offspring.push(child);
            }
        }

        Ok(offspring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoeaError;
    use crate::model::{Variable, RANK};
    use crate::operators::{BinaryTournament, CrowdedComparison};
    use crate::random::create_rng;
    use rand::RngCore;

    type Op = fn(&Solution, &Solution, &mut dyn RngCore) -> (Solution, Solution);
    type Mu = fn(&mut Solution, &mut dyn RngCore);

    fn keep(a: &Solution, b: &Solution, _: &mut dyn RngCore) -> (Solution, Solution) {
        (a.clone(), b.clone())
    }

    fn bump(s: &mut Solution, _: &mut dyn RngCore) {
        let v = s.variables()[0].value();
        s.variables_mut()[0].set_value(v + 100.0);
    }

    fn parents() -> Vec<Solution> {
        (0..4)
            .map(|i| {
                let mut s = Solution::new(vec![Variable::Real(i as f64)], 2);
                s.set_property(RANK, 1.0);
                s
            })
            .collect()
    }

    fn reproduction(
        crossover_rate: f64,
        mutation_rate: f64,
    ) -> Reproduction<BinaryTournament<CrowdedComparison>, Op, Mu> {
        Reproduction {
            selection: BinaryTournament::new(CrowdedComparison),
            crossover: keep as Op,
            mutation: bump as Mu,
            crossover_rate,
            mutation_rate,
        }
    }

    #[test]
    fn test_exact_size_odd() {
        let mut rng = create_rng(42);
        let offspring = reproduction(1.0, 0.0).breed(&parents(), 5, &mut rng).unwrap();
        assert_eq!(offspring.len(), 5);
        assert!(offspring.iter().all(|c| c.properties().is_empty()));
    }

    #[test]
    fn test_mutation_rate_one_mutates_all() {
        let mut rng = create_rng(42);
        let offspring = reproduction(0.0, 1.0).breed(&parents(), 6, &mut rng).unwrap();
        assert!(offspring.iter().all(|c| c.variables()[0].value() >= 100.0));
    }

    #[test]
    fn test_mutation_rate_zero_keeps_parents() {
        let mut rng = create_rng(42);
        let offspring = reproduction(0.5, 0.0).breed(&parents(), 6, &mut rng).unwrap();
        assert!(offspring.iter().all(|c| c.variables()[0].value() < 4.0));
    }

    #[test]
    fn test_too_few_parents() {
        let mut rng = create_rng(42);
        let one = vec![parents().remove(0)];
        let err = reproduction(1.0, 1.0).breed(&one, 4, &mut rng).unwrap_err();
        assert!(matches!(err, MoeaError::PopulationTooSmall { size: 1 }));
    }
}
