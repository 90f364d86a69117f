//! Real-coded variation operators.
//!
//! All operators work on the `f64` view of each [`Variable`] and write back
//! through [`Variable::set_value`], so integer variables are rounded.
//! Offspring are always repaired into the variable bounds.
//!
//! # Crossover Operators
//!
//! - [`SimulatedBinaryCrossover`] (SBX): Deb & Agrawal (1995)
//!
//! # Mutation Operators
//!
//! - [`PolynomialMutation`]: Deb & Goyal (1996)
//! - [`UniformMutation`]: Uniform perturbation scaled by the variable range
//!
//! [`Variable`]: crate::model::Variable
//! [`Variable::set_value`]: crate::model::Variable::set_value

use super::{Crossover, Mutation};
use crate::model::{Solution, VariableBounds};
use rand::Rng;

/// Parents closer than this in a variable are not recombined.
const EPSILON: f64 = 1.0e-14;

/// Clamps a probability into `[0, 1]`; NaN disables the operator.
fn probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Simulated Binary Crossover (SBX).
///
/// Emulates single-point binary crossover on real values: children are
/// spread around the parents with a polynomial probability distribution
/// whose concentration is set by `distribution_index` (larger = children
/// closer to parents).
///
/// # Algorithm (Deb & Agrawal, 1995)
///
/// For every variable, with probability `variable_probability`:
/// 1. Order the parent values `y1 <= y2`
/// 2. Draw `u ~ U(0, 1)` and compute the bounded spread factor `βq`
///    on each side
/// 3. `c1 = ½((y1 + y2) − βq₁(y2 − y1))`, `c2 = ½((y1 + y2) + βq₂(y2 − y1))`
/// 4. Clamp into bounds and assign to the children in random order
///
/// # Complexity
/// O(n) per pair
#[derive(Debug, Clone)]
pub struct SimulatedBinaryCrossover {
    bounds: VariableBounds,
    distribution_index: f64,
    variable_probability: f64,
}

impl SimulatedBinaryCrossover {
    /// Creates SBX with distribution index 15 and per-variable
    /// probability 0.5.
    pub fn new(bounds: VariableBounds) -> Self {
        Self {
            bounds,
            distribution_index: 15.0,
            variable_probability: 0.5,
        }
    }

    /// Sets the distribution index (must be non-negative).
    pub fn with_distribution_index(mut self, eta: f64) -> Self {
        self.distribution_index = eta.max(0.0);
        self
    }

    /// Sets the probability of recombining each variable.
    pub fn with_variable_probability(mut self, p: f64) -> Self {
        self.variable_probability = probability(p);
        self
    }

    /// Spread factor for one side of the parent interval.
    fn beta_q(&self, u: f64, distance_to_bound: f64, spread: f64) -> f64 {
        let exponent = self.distribution_index + 1.0;
        let beta = 1.0 + 2.0 * distance_to_bound / spread;
        let alpha = 2.0 - beta.powf(-exponent);
        if u <= 1.0 / alpha {
            (u * alpha).powf(1.0 / exponent)
        } else {
            (1.0 / (2.0 - u * alpha)).powf(1.0 / exponent)
        }
    }
}

impl Crossover for SimulatedBinaryCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Solution,
        parent2: &Solution,
        rng: &mut R,
    ) -> (Solution, Solution) {
        let mut child1 = parent1.clone();
        let mut child2 = parent2.clone();
        child1.clear_properties();
        child2.clear_properties();

        let n = parent1
            .number_of_variables()
            .min(parent2.number_of_variables())
            .min(self.bounds.len());

        for i in 0..n {
            if !rng.random_bool(self.variable_probability) {
                continue;
            }
            let x1 = parent1.variables()[i].value();
            let x2 = parent2.variables()[i].value();
            if (x1 - x2).abs() <= EPSILON {
                continue;
            }

            let (y1, y2) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
            let (lower, upper) = (self.bounds.lower(i), self.bounds.upper(i));
            let spread = y2 - y1;
            let u: f64 = rng.random();

            let bq1 = self.beta_q(u, y1 - lower, spread);
            let c1 = self.bounds.clamp(i, 0.5 * ((y1 + y2) - bq1 * spread));
            let bq2 = self.beta_q(u, upper - y2, spread);
            let c2 = self.bounds.clamp(i, 0.5 * ((y1 + y2) + bq2 * spread));

            let (v1, v2) = if rng.random_bool(0.5) { (c2, c1) } else { (c1, c2) };
            child1.variables_mut()[i].set_value(v1);
            child2.variables_mut()[i].set_value(v2);
        }

        (child1, child2)
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Polynomial mutation.
///
/// Perturbs each variable with probability `variable_probability` using a
/// polynomial distribution bounded by the variable range. The perturbation
/// never leaves `[lower, upper]`.
///
/// # Algorithm (Deb & Goyal, 1996)
///
/// With `δ1 = (y − lo)/(hi − lo)`, `δ2 = (hi − y)/(hi − lo)`, `u ~ U(0, 1)`:
/// - `u < 0.5`: `δq = (2u + (1 − 2u)(1 − δ1)^(η+1))^(1/(η+1)) − 1`
/// - otherwise: `δq = 1 − (2(1 − u) + 2(u − 0.5)(1 − δ2)^(η+1))^(1/(η+1))`
///
/// and `y' = y + δq (hi − lo)`.
#[derive(Debug, Clone)]
pub struct PolynomialMutation {
    bounds: VariableBounds,
    distribution_index: f64,
    variable_probability: f64,
}

impl PolynomialMutation {
    /// Creates polynomial mutation with distribution index 20 and
    /// per-variable probability `1 / n`.
    pub fn new(bounds: VariableBounds) -> Self {
        let variable_probability = if bounds.is_empty() {
            0.0
        } else {
            1.0 / bounds.len() as f64
        };
        Self {
            bounds,
            distribution_index: 20.0,
            variable_probability,
        }
    }

    /// Sets the distribution index (must be non-negative).
    pub fn with_distribution_index(mut self, eta: f64) -> Self {
        self.distribution_index = eta.max(0.0);
        self
    }

    /// Sets the probability of mutating each variable.
    pub fn with_variable_probability(mut self, p: f64) -> Self {
        self.variable_probability = probability(p);
        self
    }
}

impl Mutation for PolynomialMutation {
    fn mutate<R: Rng>(&self, solution: &mut Solution, rng: &mut R) {
        let n = solution.number_of_variables().min(self.bounds.len());
        let exponent = self.distribution_index + 1.0;

        for i in 0..n {
            if !rng.random_bool(self.variable_probability) {
                continue;
            }
            let (lower, upper) = (self.bounds.lower(i), self.bounds.upper(i));
            let range = upper - lower;
            if range <= 0.0 {
                continue;
            }

            let y = solution.variables()[i].value();
            let delta1 = (y - lower) / range;
            let delta2 = (upper - y) / range;
            let u: f64 = rng.random();

            let delta_q = if u < 0.5 {
                let xy = 1.0 - delta1;
                let val = 2.0 * u + (1.0 - 2.0 * u) * xy.powf(exponent);
                val.powf(1.0 / exponent) - 1.0
            } else {
                let xy = 1.0 - delta2;
                let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * xy.powf(exponent);
                1.0 - val.powf(1.0 / exponent)
            };

            let mutated = self.bounds.clamp(i, y + delta_q * range);
            solution.variables_mut()[i].set_value(mutated);
        }
    }
}

/// Uniform mutation.
///
/// Each variable, with probability `variable_probability`, is shifted by
/// `U(−0.5, 0.5) · perturbation · (hi − lo)` and clamped into bounds.
#[derive(Debug, Clone)]
pub struct UniformMutation {
    bounds: VariableBounds,
    perturbation: f64,
    variable_probability: f64,
}

impl UniformMutation {
    /// Creates uniform mutation with perturbation 0.5 and per-variable
    /// probability `1 / n`.
    pub fn new(bounds: VariableBounds) -> Self {
        let variable_probability = if bounds.is_empty() {
            0.0
        } else {
            1.0 / bounds.len() as f64
        };
        Self {
            bounds,
            perturbation: 0.5,
            variable_probability,
        }
    }

    /// Sets the perturbation, as a fraction of each variable's range.
    pub fn with_perturbation(mut self, perturbation: f64) -> Self {
        self.perturbation = perturbation.max(0.0);
        self
    }

    /// Sets the probability of mutating each variable.
    pub fn with_variable_probability(mut self, p: f64) -> Self {
        self.variable_probability = probability(p);
        self
    }
}

impl Mutation for UniformMutation {
    fn mutate<R: Rng>(&self, solution: &mut Solution, rng: &mut R) {
        let n = solution.number_of_variables().min(self.bounds.len());
        for i in 0..n {
            if !rng.random_bool(self.variable_probability) {
                continue;
            }
            let range = self.bounds.upper(i) - self.bounds.lower(i);
            let y = solution.variables()[i].value();
            let shift = rng.random_range(-0.5..0.5) * self.perturbation * range;
            solution.variables_mut()[i].set_value(self.bounds.clamp(i, y + shift));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
