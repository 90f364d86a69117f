//! Small benchmark problems shared by unit tests.

use crate::model::{Population, Problem, Solution, Variable, VariableKind};

/// Builds a population of variable-less solutions from objective vectors.
pub(crate) fn population_of(objectives: &[&[f64]]) -> Population {
    objectives
        .iter()
        .map(|o| Solution::from_objectives(o.to_vec()))
        .collect()
}

/// f1 = x, f2 = 1 - x on x ∈ [0, 1]: every point is Pareto-optimal.
pub(crate) struct LinearTradeoff;

impl LinearTradeoff {
    pub(crate) fn at(x: f64) -> Solution {
        Solution::new(vec![Variable::Real(x)], 2)
    }
}

impl Problem for LinearTradeoff {
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
        let x = solution.variables()[0].value();
        vec![x, 1.0 - x]
    }
}

/// Schaffer N1: f1 = x², f2 = (x - 2)², optimal set x ∈ [0, 2].
pub(crate) struct Schaffer;

impl Problem for Schaffer {
    fn number_of_variables(&self) -> usize {
        1
    }
    fn number_of_objectives(&self) -> usize {
        2
    }
    fn lower_bound(&self, _index: usize) -> f64 {
        -10.0
    }
    fn upper_bound(&self, _index: usize) -> f64 {
        10.0
    }
    fn evaluate(&self, solution: &Solution) -> Vec<f64> {
        let x = solution.variables()[0].value();
        vec![x * x, (x - 2.0) * (x - 2.0)]
    }
}

/// ZDT1 with `n` variables in [0, 1]. Optimal front: f2 = 1 - sqrt(f1).
pub(crate) struct Zdt1 {
    pub(crate) n: usize,
}

impl Problem for Zdt1 {
    fn number_of_variables(&self) -> usize {
        self.n
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
        let x: Vec<f64> = solution.variables().iter().map(Variable::value).collect();
        let f1 = x[0];
        let g = 1.0 + 9.0 * x[1..].iter().sum::<f64>() / (self.n - 1) as f64;
        let f2 = g * (1.0 - (f1 / g).sqrt());
        vec![f1, f2]
    }
}

/// One real variable in [-1, 1] and one integer variable in [0, 5].
pub(crate) struct MixedProblem;

impl Problem for MixedProblem {
    fn number_of_variables(&self) -> usize {
        2
    }
    fn number_of_objectives(&self) -> usize {
        2
    }
    fn lower_bound(&self, index: usize) -> f64 {
        if index == 0 {
            -1.0
        } else {
            0.0
        }
    }
    fn upper_bound(&self, index: usize) -> f64 {
        if index == 0 {
            1.0
        } else {
            5.0
        }
    }
    fn variable_kind(&self, index: usize) -> VariableKind {
        if index == 0 {
            VariableKind::Real
        } else {
            VariableKind::Integer
        }
    }
    fn evaluate(&self, solution: &Solution) -> Vec<f64> {
        let x = solution.variables()[0].value();
        let k = solution.variables()[1].value();
        vec![x * x + k, (x - 1.0).powi(2) + (5.0 - k)]
    }
}
