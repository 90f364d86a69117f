//! Dominance comparators.

use crate::model::Solution;
use std::cmp::Ordering;

/// Compares two objective vectors for Pareto dominance (minimization).
///
/// - `Less`: `a` dominates `b` (no objective worse, at least one better)
/// - `Greater`: `b` dominates `a`
/// - `Equal`: neither dominates (incomparable or identical)
///
/// This is a **partial** order: `Equal` is not transitive, so the result
/// must not be fed to a sort routine.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use u_moea::pareto::dominance;
///
/// assert_eq!(dominance(&[1.0, 4.0], &[5.0, 5.0]), Ordering::Less);
/// assert_eq!(dominance(&[1.0, 4.0], &[2.0, 3.0]), Ordering::Equal);
/// ```
pub fn dominance(a: &[f64], b: &[f64]) -> Ordering {
    debug_assert_eq!(a.len(), b.len(), "objective vectors must have equal length");

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
        if a_better_in_some && b_better_in_some {
            return Ordering::Equal;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Three-way dominance test between two solutions.
///
/// `Less` means the first argument dominates the second. Implementations
/// need not be total orders.
pub trait DominanceComparator {
    /// Compares `a` against `b`.
    fn compare(&self, a: &Solution, b: &Solution) -> Ordering;

    /// Whether `a` dominates `b`.
    fn dominates(&self, a: &Solution, b: &Solution) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Strict Pareto dominance over the full objective vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParetoDominance;

impl DominanceComparator for ParetoDominance {
    fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        dominance(a.objectives(), b.objectives())
    }
}

/// Compares objective 0 only. A total order, for single-objective search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleObjectiveDominance;

impl DominanceComparator for SingleObjectiveDominance {
    fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        a.objective(0).total_cmp(&b.objective(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sol(objs: &[f64]) -> Solution {
        Solution::from_objectives(objs.to_vec())
    }

    #[test]
    fn test_reference_triple() {
        let a = sol(&[1.0, 4.0]);
        let b = sol(&[2.0, 3.0]);
        let c = sol(&[5.0, 5.0]);
        let cmp = ParetoDominance;

        assert_eq!(cmp.compare(&a, &b), Ordering::Equal);
        assert_eq!(cmp.compare(&b, &a), Ordering::Equal);
        assert_eq!(cmp.compare(&a, &c), Ordering::Less);
        assert_eq!(cmp.compare(&b, &c), Ordering::Less);
        assert_eq!(cmp.compare(&c, &a), Ordering::Greater);
        assert!(cmp.dominates(&b, &c));
        assert!(!cmp.dominates(&c, &b));
    }

    #[test]
    fn test_equal_vectors_are_incomparable() {
        assert_eq!(dominance(&[2.0, 2.0], &[2.0, 2.0]), Ordering::Equal);
    }

    #[test]
    fn test_weak_improvement_dominates() {
        // Equal in one objective, better in the other
        assert_eq!(dominance(&[1.0, 2.0], &[1.0, 3.0]), Ordering::Less);
    }

    #[test]
    fn test_three_objectives() {
        assert_eq!(dominance(&[1.0, 5.0, 3.0], &[4.0, 4.0, 4.0]), Ordering::Equal);
        assert_eq!(dominance(&[1.0, 1.0, 1.0], &[1.0, 1.0, 2.0]), Ordering::Less);
    }

    #[test]
    fn test_single_objective_is_total() {
        let a = sol(&[1.0, 9.0]);
        let b = sol(&[2.0, 0.0]);
        let cmp = SingleObjectiveDominance;
        assert_eq!(cmp.compare(&a, &b), Ordering::Less);
        assert_eq!(cmp.compare(&b, &a), Ordering::Greater);
        assert_eq!(cmp.compare(&a, &a), Ordering::Equal);
    }

    proptest! {
        #[test]
        fn prop_dominance_antisymmetric(
            a in prop::collection::vec(-100.0f64..100.0, 3),
            b in prop::collection::vec(-100.0f64..100.0, 3),
        ) {
            let ab = dominance(&a, &b);
            let ba = dominance(&b, &a);
            prop_assert_eq!(ab, ba.reverse());
            prop_assert!(!(ab == Ordering::Less && ba == Ordering::Less));
        }

        #[test]
        fn prop_nothing_dominates_itself(a in prop::collection::vec(-100.0f64..100.0, 1..5)) {
            prop_assert_eq!(dominance(&a, &a), Ordering::Equal);
        }
    }
}
