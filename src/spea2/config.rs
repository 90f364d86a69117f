//! SPEA2 configuration.

use crate::algorithm::Termination;
use crate::error::{MoeaError, Result};

/// How the neighbor index `k` of the density estimate is chosen.
///
/// Density is `1 / (σₖ + 2)` where σₖ is the distance to the k-th nearest
/// neighbor in objective space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KNeighbor {
    /// `k = floor(sqrt(2 * archive_size))`.
    #[default]
    ArchiveBased,
    /// `k = floor(sqrt(union_size))`, as in Zitzler et al. (2001).
    UnionBased,
    /// A fixed `k`.
    Fixed(usize),
}

impl KNeighbor {
    /// Resolves `k` for an archive and a union of the given sizes.
    ///
    /// Always at least 1.
    pub fn resolve(&self, archive_size: usize, union_size: usize) -> usize {
        let k = match *self {
            KNeighbor::ArchiveBased => ((2 * archive_size) as f64).sqrt().floor() as usize,
            KNeighbor::UnionBased => (union_size as f64).sqrt().floor() as usize,
            KNeighbor::Fixed(k) => k,
        };
        k.max(1)
    }
}

/// Configuration for SPEA2.
///
/// # Examples
///
/// ```
/// use u_moea::spea2::{KNeighbor, Spea2Config};
///
/// let config = Spea2Config::default()
///     .with_population_size(80)
///     .with_archive_size(40)
///     .with_k_neighbor(KNeighbor::UnionBased)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spea2Config {
    /// Number of offspring bred from the archive every generation.
    pub population_size: usize,

    /// Number of solutions kept in the archive.
    ///
    /// Must not exceed `population_size`, so the first archive can be
    /// filled from the initial population.
    pub archive_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of applying the mutation operator to a child (0.0–1.0).
    pub mutation_rate: f64,

    /// Neighbor index used by the density estimate.
    pub k_neighbor: KNeighbor,

    /// Whether to evaluate offspring in parallel using rayon.
    pub parallel: bool,

    /// Random seed. `None` draws a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    pub time_limit_ms: Option<u64>,

    /// Optional objective vector whose attainment stops the run early.
    pub target: Option<Vec<f64>>,
}

impl Default for Spea2Config {
    fn default() -> Self {
        Self {
            population_size: 100,
            archive_size: 100,
            max_generations: 250,
            crossover_rate: 0.9,
            mutation_rate: 1.0,
            k_neighbor: KNeighbor::default(),
            parallel: true,
            seed: None,
            time_limit_ms: None,
            target: None,
        }
    }
}

impl Spea2Config {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the archive size.
    pub fn with_archive_size(mut self, n: usize) -> Self {
        self.archive_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the density neighbor rule.
    pub fn with_k_neighbor(mut self, k_neighbor: KNeighbor) -> Self {
        self.k_neighbor = k_neighbor;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the target objective vector.
    pub fn with_target(mut self, target: Vec<f64>) -> Self {
        self.target = Some(target);
        self
    }

    /// Preset for quick runs.
    ///
    /// - Population: 40, Archive: 40, Generations: 100, Time limit: 10s
    pub fn fast() -> Self {
        Self {
            population_size: 40,
            archive_size: 40,
            max_generations: 100,
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Preset balancing front quality and run time.
    ///
    /// - Population: 100, Archive: 100, Generations: 250, Time limit: 30s
    pub fn balanced() -> Self {
        Self {
            population_size: 100,
            archive_size: 100,
            max_generations: 250,
            time_limit_ms: Some(30_000),
            ..Self::default()
        }
    }

    /// Preset for dense, well-converged fronts.
    ///
    /// - Population: 200, Archive: 200, Generations: 500, Time limit: 120s
    pub fn quality() -> Self {
        Self {
            population_size: 200,
            archive_size: 200,
            max_generations: 500,
            time_limit_ms: Some(120_000),
            ..Self::default()
        }
    }

    /// The stopping conditions described by this configuration.
    pub fn termination(&self) -> Termination {
        Termination {
            max_generations: self.max_generations,
            time_limit_ms: self.time_limit_ms,
            target: self.target.clone(),
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(MoeaError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.archive_size < 2 {
            return Err(MoeaError::InvalidConfig(
                "archive_size must be at least 2".into(),
            ));
        }
        if self.archive_size > self.population_size {
            return Err(MoeaError::InvalidConfig(format!(
                "archive_size ({}) must not exceed population_size ({})",
                self.archive_size, self.population_size
            )));
        }
        if self.max_generations == 0 {
            return Err(MoeaError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) || !(0.0..=1.0).contains(&self.mutation_rate)
        {
            return Err(MoeaError::InvalidConfig(
                "crossover_rate and mutation_rate must lie in [0, 1]".into(),
            ));
        }
        if self.k_neighbor == KNeighbor::Fixed(0) {
            return Err(MoeaError::InvalidConfig("k_neighbor must be positive".into()));
        }
        if self.time_limit_ms == Some(0) {
            return Err(MoeaError::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        if matches!(&self.target, Some(t) if t.is_empty()) {
            return Err(MoeaError::InvalidConfig("target must not be empty".into()));
        }
        Ok(())
    }
}
