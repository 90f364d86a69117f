//! NSGA-II configuration.
//!
//! [`Nsga2Config`] holds all parameters that control the generational loop.

use crate::algorithm::Termination;
use crate::error::{MoeaError, Result};

/// Configuration for NSGA-II.
///
/// # Defaults
///
/// ```
/// use u_moea::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 250);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_moea::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.8)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Config {
    /// Number of solutions kept after every generation.
    ///
    /// The offspring population has the same size.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, the children are clones of the parents.
    pub crossover_rate: f64,

    /// Probability of applying the mutation operator to a child (0.0–1.0).
    ///
    /// Operators such as polynomial mutation carry their own per-variable
    /// probability, hence the default of 1.0.
    pub mutation_rate: f64,

    /// Whether to evaluate offspring in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    pub time_limit_ms: Option<u64>,

    /// Optional objective vector whose attainment stops the run early.
    pub target: Option<Vec<f64>>,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 250,
            crossover_rate: 0.9,
            mutation_rate: 1.0,
            parallel: true,
            seed: None,
            time_limit_ms: None,
            target: None,
        }
    }
}

impl Nsga2Config {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
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
    /// - Population: 40, Generations: 100, Time limit: 10s
    pub fn fast() -> Self {
        Self {
            population_size: 40,
            max_generations: 100,
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Preset balancing front quality and run time.
    ///
    /// - Population: 100, Generations: 250, Time limit: 30s
    pub fn balanced() -> Self {
        Self {
            population_size: 100,
            max_generations: 250,
            time_limit_ms: Some(30_000),
            ..Self::default()
        }
    }

    /// Preset for dense, well-converged fronts.
    ///
    /// - Population: 200, Generations: 500, Time limit: 120s
    pub fn quality() -> Self {
        Self {
            population_size: 200,
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
