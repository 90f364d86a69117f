//! The problem boundary.
//!
//! [`Problem`] is the contract between the generic multi-objective engine
//! and a concrete objective function. The engine never looks inside
//! `evaluate`; it only relies on the declared dimensions and bounds.

use super::population::Population;
use super::solution::Solution;
use super::variable::{Variable, VariableKind};
use crate::error::{MoeaError, Result};
use rand::Rng;

/// Defines a multi-objective optimization problem.
///
/// All objectives are **minimized**. For maximization, negate the
/// objective inside [`evaluate`](Problem::evaluate).
///
/// # Implementing
///
/// ```
/// use u_moea::model::{Problem, Solution};
///
/// /// Schaffer N1: f1 = x², f2 = (x - 2)².
/// struct Schaffer;
///
/// impl Problem for Schaffer {
///     fn number_of_variables(&self) -> usize { 1 }
///     fn number_of_objectives(&self) -> usize { 2 }
///     fn lower_bound(&self, _index: usize) -> f64 { -10.0 }
///     fn upper_bound(&self, _index: usize) -> f64 { 10.0 }
///
///     fn evaluate(&self, solution: &Solution) -> Vec<f64> {
///         let x = solution.variables()[0].value();
///         vec![x * x, (x - 2.0) * (x - 2.0)]
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// `Problem` must be `Send + Sync` because populations may be evaluated
/// in parallel using rayon.
pub trait Problem: Send + Sync {
    /// Number of decision variables of every solution.
    fn number_of_variables(&self) -> usize;

    /// Number of objectives written by [`evaluate`](Problem::evaluate).
    fn number_of_objectives(&self) -> usize;

    /// Lower bound of variable `index`.
    fn lower_bound(&self, index: usize) -> f64;

    /// Upper bound of variable `index`.
    fn upper_bound(&self, index: usize) -> f64;

    /// Declared type of variable `index`. Defaults to continuous.
    fn variable_kind(&self, _index: usize) -> VariableKind {
        VariableKind::Real
    }

    /// Computes the objective vector of a solution.
    ///
    /// This is typically the most expensive operation and may be called in
    /// parallel across a population. It must return exactly
    /// [`number_of_objectives`](Problem::number_of_objectives) values.
    fn evaluate(&self, solution: &Solution) -> Vec<f64>;

    /// Creates one unevaluated solution with every variable drawn uniformly
    /// within its bounds.
    fn new_random_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        let variables = (0..self.number_of_variables())
            .map(|i| {
                let (lo, hi) = (self.lower_bound(i), self.upper_bound(i));
                match self.variable_kind(i) {
                    VariableKind::Real => {
                        if hi > lo {
                            Variable::Real(rng.random_range(lo..=hi))
                        } else {
                            Variable::Real(lo)
                        }
                    }
                    VariableKind::Integer => {
                        let (lo, hi) = (lo.ceil() as i64, hi.floor() as i64);
                        if hi > lo {
                            Variable::Integer(rng.random_range(lo..=hi))
                        } else {
                            Variable::Integer(lo)
                        }
                    }
                }
            })
            .collect();
        Solution::new(variables, self.number_of_objectives())
    }

    /// Creates `n` unevaluated random solutions.
    fn new_random_solutions<R: Rng>(&self, n: usize, rng: &mut R) -> Population {
        (0..n).map(|_| self.new_random_solution(rng)).collect()
    }

    /// Evaluates `solution` and writes the result into its objective vector.
    ///
    /// Fails if the solution's shape disagrees with the declared variable or
    /// objective counts.
    fn evaluate_in_place(&self, solution: &mut Solution) -> Result<()> {
        if solution.number_of_variables() != self.number_of_variables() {
            return Err(MoeaError::VariableCountMismatch {
                expected: self.number_of_variables(),
                actual: solution.number_of_variables(),
            });
        }
        let objectives = self.evaluate(solution);
        if objectives.len() != self.number_of_objectives() {
            return Err(MoeaError::ObjectiveCountMismatch {
                expected: self.number_of_objectives(),
                actual: objectives.len(),
            });
        }
        solution.set_objectives(objectives)
    }
}

/// Per-variable `[lower, upper]` bounds and kinds, detached from a problem.
///
/// Variation operators hold a copy so they can repair offspring without
/// borrowing the problem.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableBounds {
    bounds: Vec<(f64, f64)>,
    kinds: Vec<VariableKind>,
}

impl VariableBounds {
    /// Continuous bounds.
    pub fn new(bounds: Vec<(f64, f64)>) -> Self {
        let kinds = vec![VariableKind::Real; bounds.len()];
        Self { bounds, kinds }
    }

    /// Copies bounds and kinds from a problem.
    pub fn from_problem<P: Problem + ?Sized>(problem: &P) -> Self {
        let n = problem.number_of_variables();
        Self {
            bounds: (0..n)
                .map(|i| (problem.lower_bound(i), problem.upper_bound(i)))
                .collect(),
            kinds: (0..n).map(|i| problem.variable_kind(i)).collect(),
        }
    }

    /// Number of variables covered.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Whether no variables are covered.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Lower bound of variable `index`.
    pub fn lower(&self, index: usize) -> f64 {
        self.bounds[index].0
    }

    /// Upper bound of variable `index`.
    pub fn upper(&self, index: usize) -> f64 {
        self.bounds[index].1
    }

    /// Declared kind of variable `index`.
    pub fn kind(&self, index: usize) -> VariableKind {
        self.kinds[index]
    }

    /// Clamps `value` into the bounds of variable `index`.
    pub fn clamp(&self, index: usize, value: f64) -> f64 {
        let (lo, hi) = self.bounds[index];
        value.max(lo).min(hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::testing::{LinearTradeoff, MixedProblem};

    struct ShortObjectives;

    impl Problem for ShortObjectives {
        fn number_of_variables(&self) -> usize {
            1
        }
        fn number_of_objectives(&self) -> usize {
            2
        }
        fn lower_bound(&self, _index: usize) -> f64 {
            0.0
        }
        fn upper_bound(&self, _index: usize) -> f64 {
            1.0
        }
        fn evaluate(&self, solution: &Solution) -> Vec<f64> {
            vec![solution.variables()[0].value()]
        }
    }

    #[test]
    fn test_random_solutions_within_bounds() {
        let problem = MixedProblem;
        let mut rng = create_rng(42);
        let pop = problem.new_random_solutions(200, &mut rng);

        assert_eq!(pop.len(), 200);
        for s in &pop {
            assert_eq!(s.number_of_variables(), 2);
            assert_eq!(s.number_of_objectives(), 2);
            let x = s.variables()[0];
            let k = s.variables()[1];
            assert!(matches!(x, Variable::Real(v) if (-1.0..=1.0).contains(&v)));
            assert!(matches!(k, Variable::Integer(v) if (0..=5).contains(&v)));
        }
    }

    #[test]
    fn test_evaluate_in_place_writes_objectives() {
        let problem = LinearTradeoff;
        let mut s = LinearTradeoff::at(0.25);
        problem.evaluate_in_place(&mut s).unwrap();
        assert_eq!(s.objectives(), &[0.25, 0.75]);
        assert_eq!(s.variables()[0], Variable::Real(0.25));
    }

    #[test]
    fn test_evaluate_in_place_rejects_short_vector() {
        let problem = ShortObjectives;
        let mut s = Solution::new(vec![Variable::Real(0.5)], 2);
        let err = problem.evaluate_in_place(&mut s).unwrap_err();
        assert!(matches!(
            err,
            MoeaError::ObjectiveCountMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_evaluate_in_place_rejects_wrong_variable_count() {
        let problem = LinearTradeoff;
        let mut s = Solution::new(vec![], 2);
        assert!(matches!(
            problem.evaluate_in_place(&mut s),
            Err(MoeaError::VariableCountMismatch { .. })
        ));
    }

    #[test]
    fn test_bounds_from_problem() {
        let bounds = VariableBounds::from_problem(&MixedProblem);
        assert_eq!(bounds.len(), 2);
        assert_eq!(bounds.kind(1), VariableKind::Integer);
        assert!((bounds.clamp(0, 3.0) - 1.0).abs() < 1e-15);
        assert!((bounds.clamp(0, -3.0) + 1.0).abs() < 1e-15);
    }
}
