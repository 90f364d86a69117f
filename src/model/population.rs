//! Ordered collections of solutions.

use super::solution::Solution;
use crate::pareto::DominanceComparator;
use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

/// An insertion-ordered multiset of [`Solution`]s.
///
/// Dereferences to `[Solution]`, so slice methods (`len`, `iter`,
/// `sort_by`, indexing, ...) are available directly.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    solutions: Vec<Solution>,
}

impl Population {
    /// Creates an empty population.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty population with room for `capacity` solutions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            solutions: Vec::with_capacity(capacity),
        }
    }

    /// Appends a solution.
    pub fn push(&mut self, solution: Solution) {
        self.solutions.push(solution);
    }

    /// Moves every solution of `other` to the end of `self`.
    pub fn append(&mut self, other: &mut Population) {
        self.solutions.append(&mut other.solutions);
    }

    /// Keeps only the first `len` solutions.
    pub fn truncate(&mut self, len: usize) {
        self.solutions.truncate(len);
    }

    /// Removes every solution, returning them in order.
    pub fn take(&mut self) -> Population {
        std::mem::take(self)
    }

    /// Consumes the population into its solutions.
    pub fn into_vec(self) -> Vec<Solution> {
        self.solutions
    }

    /// Collects the objective vectors, in population order.
    pub fn objectives(&self) -> Vec<Vec<f64>> {
        self.solutions
            .iter()
            .map(|s| s.objectives().to_vec())
            .collect()
    }

    /// Partitions the population in place into its non-dominated subset.
    ///
    /// Afterwards `self` holds the solutions no other solution dominates,
    /// in their original order, with exact duplicates (equal variables and
    /// equal objectives) kept once: the first occurrence survives. Dominated
    /// solutions and surplus duplicates are returned in original order, so
    /// no solution is lost.
    ///
    /// Applying the reduction to an already reduced population returns an
    /// empty population.
    ///
    /// # Complexity
    /// O(m * n²) comparisons.
    pub fn reduce_to_non_dominated<C>(&mut self, comparator: &C) -> Population
    where
        C: DominanceComparator + ?Sized,
    {
        let n = self.solutions.len();
        let mut keep = vec![true; n];

        for i in 0..n {
            for j in (i + 1)..n {
                if !keep[i] && !keep[j] {
                    continue;
                }
                let (a, b) = (&self.solutions[i], &self.solutions[j]);
                match comparator.compare(a, b) {
                    Ordering::Less => keep[j] = false,
                    Ordering::Greater => keep[i] = false,
                    Ordering::Equal => {
                        if keep[i] && keep[j] && a.is_duplicate_of(b) {
                            keep[j] = false;
                        }
                    }
                }
            }
        }

        let mut retained = Vec::with_capacity(n);
        let mut removed = Vec::new();
        for (solution, keep) in self.solutions.drain(..).zip(keep) {
            if keep {
                retained.push(solution);
            } else {
                removed.push(solution);
            }
        }
        self.solutions = retained;
        Population { solutions: removed }
    }
}

impl Deref for Population {
    type Target = [Solution];

    fn deref(&self) -> &[Solution] {
        &self.solutions
    }
}

impl DerefMut for Population {
    fn deref_mut(&mut self) -> &mut [Solution] {
        &mut self.solutions
    }
}

impl From<Vec<Solution>> for Population {
    fn from(solutions: Vec<Solution>) -> Self {
        Self { solutions }
    }
}

impl FromIterator<Solution> for Population {
    fn from_iter<T: IntoIterator<Item = Solution>>(iter: T) -> Self {
        Self {
            solutions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Solution> for Population {
    fn extend<T: IntoIterator<Item = Solution>>(&mut self, iter: T) {
        self.solutions.extend(iter);
    }
}

impl IntoIterator for Population {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}
