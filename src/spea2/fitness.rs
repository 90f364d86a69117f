//! SPEA2 strength, density and archive truncation.
//!
//! All functions work on the union of population and archive and store
//! their results in the solution property map under [`STRENGTH`],
//! [`RAW_FITNESS`], [`DENSITY`] and [`FITNESS`].
//!
//! # References
//!
//! Zitzler, Laumanns & Thiele (2001), "SPEA2: Improving the Strength Pareto
//! Evolutionary Algorithm", TIK-Report 103, ETH Zürich

use crate::model::{Population, Solution, DENSITY, FITNESS, RAW_FITNESS, STRENGTH};
use crate::pareto::dominance;
use log::trace;
use std::cmp::Ordering;

/// Euclidean distance in objective space.
fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Assigns strength and raw fitness.
///
/// Strength of `i` is the number of solutions `i` dominates. Raw fitness of
/// `i` is the summed strength of every solution dominating `i`, hence
/// exactly 0 for non-dominated solutions.
///
/// # Complexity
/// O(m * n²)
pub fn assign_raw_fitness(union: &mut [Solution]) {
    let n = union.len();
    // dominated_by[i] lists the solutions dominating i
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut strength = vec![0usize; n];

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance(union[i].objectives(), union[j].objectives()) {
                Ordering::Less => {
                    strength[i] += 1;
                    dominated_by[j].push(i);
                }
                Ordering::Greater => {
                    strength[j] += 1;
                    dominated_by[i].push(j);
                }
                Ordering::Equal => {}
            }
        }
    }

    for (i, solution) in union.iter_mut().enumerate() {
        let raw: usize = dominated_by[i].iter().map(|&d| strength[d]).sum();
        solution.set_property(STRENGTH, strength[i] as f64);
        solution.set_property(RAW_FITNESS, raw as f64);
    }
}

/// Assigns density `1 / (σₖ + 2)`.
///
/// σₖ is the Euclidean distance to the k-th nearest other solution in
/// objective space. When fewer than `k` others exist the farthest one is
/// used; a lone solution gets density 0.
///
/// # Complexity
/// O(m * n² + n² log n)
pub fn assign_density(union: &mut [Solution], k: usize) {
    let k = k.max(1);
    let n = union.len();
    let mut densities = Vec::with_capacity(n);

    for i in 0..n {
        let mut distances: Vec<f64> = (0..n)
            .filter(|&j| j != i)
            .map(|j| distance(union[i].objectives(), union[j].objectives()))
            .collect();
        distances.sort_by(f64::total_cmp);

        let density = match distances.get(k - 1).or(distances.last()) {
            Some(&sigma) => 1.0 / (sigma + 2.0),
            None => 0.0,
        };
        densities.push(density);
    }

    for (solution, density) in union.iter_mut().zip(densities) {
        solution.set_property(DENSITY, density);
    }
}

/// Assigns raw fitness, density and their sum as [`FITNESS`].
///
/// Lower fitness is better. Non-dominated solutions have fitness below 1
/// because density never exceeds 0.5.
pub fn assign_fitness(union: &mut [Solution], k: usize) {
    assign_raw_fitness(union);
    assign_density(union, k);
    for solution in union.iter_mut() {
        let raw = solution.property(RAW_FITNESS).unwrap_or(0.0);
        let density = solution.property(DENSITY).unwrap_or(0.0);
        solution.set_property(FITNESS, raw + density);
    }
}

/// Builds the next archive of exactly `archive_size` solutions.
///
/// Expects [`assign_fitness`] to have run on `union`.
///
/// 1. Every solution with fitness < 1 enters the archive.
/// 2. If the archive is short, the best remaining solutions by ascending
///    fitness fill it.
/// 3. If it overflows, [`truncate_archive`] removes the most crowded
///    solutions one at a time.
///
/// Returns all of `union` when it holds fewer than `archive_size`
/// solutions.
pub fn environmental_selection(union: Population, archive_size: usize) -> Population {
    let (mut archive, mut rest): (Vec<Solution>, Vec<Solution>) = union
        .into_iter()
        .partition(|s| s.fitness().is_some_and(|f| f < 1.0));

    match archive.len().cmp(&archive_size) {
        Ordering::Less => {
            rest.sort_by(|a, b| {
                let fa = a.fitness().unwrap_or(f64::INFINITY);
                let fb = b.fitness().unwrap_or(f64::INFINITY);
                fa.total_cmp(&fb)
            });
            let missing = archive_size - archive.len();
            archive.extend(rest.into_iter().take(missing));
            archive.into()
        }
        Ordering::Greater => {
            let mut archive = Population::from(archive);
            truncate_archive(&mut archive, archive_size);
            archive
        }
        Ordering::Equal => archive.into(),
    }
}

/// Compares two ascending neighbor-distance lists lexicographically.
fn compare_neighbors(a: &[(f64, usize)], b: &[(f64, usize)]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.0.total_cmp(&y.0))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Iteratively removes the most crowded solution until `size` remain.
///
/// The most crowded solution has the smallest distance to its nearest
/// neighbor; ties are broken by the second nearest, then the third, and
/// so on. Distances are recomputed over the remaining solutions after
/// every removal. Among exact ties the earliest solution is removed.
/// Boundary solutions of the front therefore survive.
///
/// # Complexity
/// O(n² log n) to set up, then O(n²) per removal
pub fn truncate_archive(archive: &mut Population, size: usize) {
    let n = archive.len();
    if n <= size {
        return;
    }

    // neighbors[i]: (distance, index) of every other solution, nearest first
    let mut neighbors: Vec<Vec<(f64, usize)>> = (0..n)
        .map(|i| {
            let mut list: Vec<(f64, usize)> = (0..n)
                .filter(|&j| j != i)
                .map(|j| (distance(archive[i].objectives(), archive[j].objectives()), j))
                .collect();
            list.sort_by(|a, b| a.0.total_cmp(&b.0));
            list
        })
        .collect();
    let mut alive = vec![true; n];

    for _ in size..n {
        let mut victim: Option<usize> = None;
        for i in (0..n).filter(|&i| alive[i]) {
            let crowded = match victim {
                None => true,
                Some(v) => compare_neighbors(&neighbors[i], &neighbors[v]) == Ordering::Less,
            };
            if crowded {
                victim = Some(i);
            }
        }

        let Some(v) = victim else { break };
        trace!(
            "truncating archive: removing {} (nearest neighbor at {:?})",
            v,
            neighbors[v].first().map(|p| p.0)
        );
        alive[v] = false;
        for (i, list) in neighbors.iter_mut().enumerate() {
            if alive[i] {
                list.retain(|&(_, j)| j != v);
            }
        }
    }

    *archive = archive
        .take()
        .into_iter()
        .zip(alive)
        .filter_map(|(s, keep)| keep.then_some(s))
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pareto::rank_fronts;
    use crate::pareto::ParetoDominance;
    use crate::testing::population_of;
    use proptest::prelude::*;

    // ---- Raw fitness ----

    #[test]
    fn test_raw_fitness_three_points() {
        let mut pop = population_of(&[&[1.0, 4.0], &[2.0, 3.0], &[5.0, 5.0]]);
        assign_raw_fitness(&mut pop);

        assert_eq!(pop[0].property(STRENGTH), Some(1.0));
        assert_eq!(pop[1].property(STRENGTH), Some(1.0));
        assert_eq!(pop[2].property(STRENGTH), Some(0.0));

        assert_eq!(pop[0].property(RAW_FITNESS), Some(0.0));
        assert_eq!(pop[1].property(RAW_FITNESS), Some(0.0));
        assert_eq!(pop[2].property(RAW_FITNESS), Some(2.0));
    }

    #[test]
    fn test_raw_fitness_chain() {
        // a dominates b and c, b dominates c
        let mut pop = population_of(&[&[1.0, 1.0], &[2.0, 2.0], &[3.0, 3.0]]);
        assign_raw_fitness(&mut pop);
        assert_eq!(pop[0].property(STRENGTH), Some(2.0));
        assert_eq!(pop[1].property(RAW_FITNESS), Some(2.0));
        assert_eq!(pop[2].property(RAW_FITNESS), Some(3.0));
    }

    #[test]
    fn test_raw_fitness_duplicates_do_not_dominate() {
        let mut pop = population_of(&[&[1.0, 1.0], &[1.0, 1.0]]);
        assign_raw_fitness(&mut pop);
        assert!(pop
            .iter()
            .all(|s| s.property(RAW_FITNESS) == Some(0.0) && s.property(STRENGTH) == Some(0.0)));
    }

    // ---- Density ----

    #[test]
    fn test_density_kth_neighbor() {
        let mut pop = population_of(&[&[0.0, 0.0], &[3.0, 4.0], &[6.0, 8.0]]);
        assign_density(&mut pop, 1);
        // nearest neighbor of the middle point is 5 away
        assert!((pop[1].property(DENSITY).unwrap() - 1.0 / 7.0).abs() < 1e-12);

        assign_density(&mut pop, 2);
        // second nearest of the first point is 10 away
        assert!((pop[0].property(DENSITY).unwrap() - 1.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_density_k_beyond_union_uses_farthest() {
        let mut pop = population_of(&[&[0.0, 0.0], &[3.0, 4.0]]);
        assign_density(&mut pop, 10);
        assert!((pop[0].property(DENSITY).unwrap() - 1.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_density_single_solution() {
        let mut pop = population_of(&[&[1.0, 1.0]]);
        assign_density(&mut pop, 1);
        assert_eq!(pop[0].property(DENSITY), Some(0.0));
    }

    #[test]
    fn test_fitness_is_raw_plus_density() {
        let mut pop = population_of(&[&[1.0, 4.0], &[2.0, 3.0], &[5.0, 5.0]]);
        assign_fitness(&mut pop, 1);
        for s in pop.iter() {
            let sum = s.property(RAW_FITNESS).unwrap() + s.property(DENSITY).unwrap();
            assert!((s.fitness().unwrap() - sum).abs() < 1e-12);
        }
        assert!(pop[0].fitness().unwrap() < 1.0);
        assert!(pop[2].fitness().unwrap() >= 2.0);
    }

    // ---- Environmental selection ----

    #[test]
    fn test_selection_fills_with_dominated() {
        let mut pop = population_of(&[&[1.0, 4.0], &[9.0, 9.0], &[2.0, 3.0], &[5.0, 5.0]]);
        assign_fitness(&mut pop, 1);
        let archive = environmental_selection(pop, 3);
        assert_eq!(archive.len(), 3);
        let objs = archive.objectives();
        assert!(objs.contains(&vec![1.0, 4.0]));
        assert!(objs.contains(&vec![2.0, 3.0]));
        assert!(objs.contains(&vec![5.0, 5.0]));
    }

    #[test]
    fn test_selection_exact_fit() {
        let mut pop = population_of(&[&[1.0, 4.0], &[2.0, 3.0], &[5.0, 5.0]]);
        assign_fitness(&mut pop, 1);
        let archive = environmental_selection(pop, 2);
        assert_eq!(archive.objectives(), vec![vec![1.0, 4.0], vec![2.0, 3.0]]);
    }

    #[test]
    fn test_selection_truncates_front() {
        let mut pop = population_of(&[
            &[0.0, 10.0],
            &[1.0, 9.0],
            &[1.1, 8.9],
            &[5.0, 5.0],
            &[10.0, 0.0],
        ]);
        assign_fitness(&mut pop, 2);
        let archive = environmental_selection(pop, 4);
        assert_eq!(archive.len(), 4);
        // one of the two close points goes
        let objs = archive.objectives();
        assert!(!(objs.contains(&vec![1.0, 9.0]) && objs.contains(&vec![1.1, 8.9])));
    }

    #[test]
    fn test_selection_smaller_union() {
        let mut pop = population_of(&[&[1.0, 1.0]]);
        assign_fitness(&mut pop, 1);
        assert_eq!(environmental_selection(pop, 5).len(), 1);
    }

    // ---- Truncation ----

    #[test]
    fn test_truncate_keeps_extremes() {
        let mut pop = population_of(&[
            &[0.0, 4.0],
            &[1.0, 3.0],
            &[1.5, 2.5],
            &[3.0, 1.0],
            &[4.0, 0.0],
        ]);
        truncate_archive(&mut pop, 3);
        let objs = pop.objectives();
        assert_eq!(objs.len(), 3);
        assert!(objs.contains(&vec![0.0, 4.0]));
        assert!(objs.contains(&vec![4.0, 0.0]));
    }

    #[test]
    fn test_truncate_tie_broken_by_second_neighbor() {
        // b and c are mutual nearest neighbors at 1.0; c's second nearest
        // (d at 2.0) is closer than b's (a at 3.0), so c is removed.
        let mut pop = population_of(&[&[0.0, 0.0], &[3.0, 0.0], &[4.0, 0.0], &[6.0, 0.0]]);
        truncate_archive(&mut pop, 3);
        assert_eq!(
            pop.objectives(),
            vec![vec![0.0, 0.0], vec![3.0, 0.0], vec![6.0, 0.0]]
        );
    }

    #[test]
    fn test_truncate_exact_duplicates_first_removed() {
        let mut pop = population_of(&[&[1.0, 1.0], &[1.0, 1.0], &[5.0, 5.0]]);
        truncate_archive(&mut pop, 2);
        assert_eq!(pop.objectives(), vec![vec![1.0, 1.0], vec![5.0, 5.0]]);
    }

    #[test]
    fn test_truncate_noop_when_small() {
        let mut pop = population_of(&[&[1.0, 1.0], &[2.0, 2.0]]);
        truncate_archive(&mut pop, 5);
        assert_eq!(pop.len(), 2);
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn prop_raw_fitness_zero_iff_first_front(
            objs in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..25)
        ) {
            let refs: Vec<&[f64]> = objs.iter().map(|o| o.as_slice()).collect();
            let mut pop = population_of(&refs);
            assign_raw_fitness(&mut pop);

            // rank 1 holds every non-dominated solution (plus none dominated)
            let first = rank_fronts(pop.clone(), &ParetoDominance).remove(0);
            for s in pop.iter() {
                let non_dominated = first.iter().any(|f| f.objectives() == s.objectives());
                prop_assert_eq!(s.property(RAW_FITNESS) == Some(0.0), non_dominated);
            }
        }

        #[test]
        fn prop_selection_exact_size(
            objs in prop::collection::vec(prop::collection::vec(0.0f64..1.0, 2), 4..30),
            size in 1usize..4
        ) {
            let refs: Vec<&[f64]> = objs.iter().map(|o| o.as_slice()).collect();
            let mut pop = population_of(&refs);
            assign_fitness(&mut pop, 2);
            prop_assert_eq!(environmental_selection(pop, size).len(), size);
        }
    }
}
