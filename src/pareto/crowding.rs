//! Crowding distance (NSGA-II diversity estimator).

use crate::model::{Solution, CROWDING_DISTANCE};

/// Crowding distance for each objective vector of a single front.
///
/// Measures how spread out solutions are in objective space. Higher
/// distance means the solution is more isolated (more valuable for
/// diversity).
///
/// - Fronts of one or two solutions: every solution gets `f64::INFINITY`.
/// - Otherwise, for each objective: sort by that objective, give the two
///   boundary solutions `f64::INFINITY`, and add
///   `(next - prev) / (max - min)` to every interior solution. An objective
///   with `max == min` contributes nothing.
///
/// # Algorithm (Deb et al., 2002)
///
/// The final value is the sum of the per-objective contributions.
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = number of solutions
///
/// # Example
///
/// ```
/// use u_moea::pareto::crowding_distance;
///
/// let objectives = vec![
///     vec![1.0, 5.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
/// ];
///
/// let distances = crowding_distance(&objectives);
///
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!((distances[1] - 2.0).abs() < 1e-12);
/// ```
pub fn crowding_distance<O: AsRef<[f64]>>(objectives: &[O]) -> Vec<f64> {
    let n = objectives.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = objectives[0].as_ref().len();
    let value = |i: usize, obj: usize| objectives[i].as_ref()[obj];
    let mut distances = vec![0.0f64; n];
    let mut indices: Vec<usize> = (0..n).collect();

    for obj in 0..m {
        indices.sort_by(|&a, &b| value(a, obj).total_cmp(&value(b, obj)));

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let range = value(indices[n - 1], obj) - value(indices[0], obj);
        if range > 0.0 && range.is_finite() {
            for w in indices.windows(3) {
                let (prev, mid, next) = (w[0], w[1], w[2]);
                distances[mid] += (value(next, obj) - value(prev, obj)) / range;
            }
        }
    }

    distances
}

/// Computes [`crowding_distance`] for a front and stores it on each
/// solution under [`CROWDING_DISTANCE`].
pub fn assign_crowding_distance(front: &mut [Solution]) {
    let distances = {
        let objectives: Vec<&[f64]> = front.iter().map(Solution::objectives).collect();
        crowding_distance(&objectives)
    };
    for (solution, distance) in front.iter_mut().zip(distances) {
        solution.set_property(CROWDING_DISTANCE, distance);
    }
}
