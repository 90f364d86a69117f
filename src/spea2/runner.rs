//! SPEA2 generational loop.
//!
//! [`Spea2`] alternates between breeding a population from the archive and
//! rebuilding the archive from the union of both:
//! offspring creation → evaluation → union → fitness → environmental selection.

use super::config::Spea2Config;
use super::fitness::{assign_fitness, environmental_selection};
use crate::algorithm::{Algorithm, Termination};
use crate::error::{MoeaError, Result};
use crate::evaluation::evaluate_population;
use crate::model::{Population, Problem, VariableBounds};
use crate::operators::{
    BinaryTournament, Crossover, FitnessComparison, Mutation, PolynomialMutation, Reproduction,
    Selection, SimulatedBinaryCrossover,
};
use crate::pareto::ParetoDominance;
use crate::random::rng_from_option;
use log::{debug, info};
use rand::rngs::StdRng;

/// The Strength Pareto Evolutionary Algorithm 2.
///
/// The archive is the algorithm's state: [`population`](Algorithm::population)
/// returns it, and the result is the archive reduced to its non-dominated
/// members. Parents are drawn from the archive by binary tournament on
/// SPEA2 fitness unless another [`Selection`] is supplied.
///
/// # Usage
///
/// ```
/// use u_moea::algorithm::Algorithm;
/// use u_moea::model::{Problem, Solution};
/// use u_moea::spea2::{Spea2, Spea2Config};
///
/// struct Schaffer;
///
/// impl Problem for Schaffer {
///     fn number_of_variables(&self) -> usize { 1 }
///     fn number_of_objectives(&self) -> usize { 2 }
///     fn lower_bound(&self, _: usize) -> f64 { -10.0 }
///     fn upper_bound(&self, _: usize) -> f64 { 10.0 }
///     fn evaluate(&self, s: &Solution) -> Vec<f64> {
///         let x = s.variables()[0].value();
///         vec![x * x, (x - 2.0) * (x - 2.0)]
///     }
/// }
///
/// let config = Spea2Config::default()
///     .with_population_size(20)
///     .with_archive_size(10)
///     .with_max_generations(10)
///     .with_seed(42);
/// let mut spea2 = Spea2::real_coded(&Schaffer, config).unwrap();
/// let result = spea2.execute().unwrap();
/// assert!(!result.front.is_empty());
/// ```
///
/// # References
///
/// Zitzler, Laumanns & Thiele (2001), "SPEA2: Improving the Strength Pareto
/// Evolutionary Algorithm"
pub struct Spea2<'a, P, X, M, S = BinaryTournament<FitnessComparison>> {
    problem: &'a P,
    config: Spea2Config,
    termination: Termination,
    reproduction: Reproduction<S, X, M>,
    archive: Population,
    generation: usize,
    evaluations: usize,
    initialized: bool,
    rng: StdRng,
    seed: u64,
}

impl<'a, P, X, M> Spea2<'a, P, X, M>
where
    P: Problem,
    X: Crossover,
    M: Mutation,
{
    /// Creates SPEA2 with the given variation operators.
    ///
    /// # Errors
    /// [`MoeaError::InvalidConfig`] if the configuration is invalid.
    pub fn new(problem: &'a P, config: Spea2Config, crossover: X, mutation: M) -> Result<Self> {
        config.validate()?;
        let (rng, seed) = rng_from_option(config.seed);
        Ok(Self {
            problem,
            termination: config.termination(),
            reproduction: Reproduction {
                selection: BinaryTournament::new(FitnessComparison),
                crossover,
                mutation,
                crossover_rate: config.crossover_rate,
                mutation_rate: config.mutation_rate,
            },
            config,
            archive: Population::new(),
            generation: 0,
            evaluations: 0,
            initialized: false,
            rng,
            seed,
        })
    }
}

impl<'a, P: Problem> Spea2<'a, P, SimulatedBinaryCrossover, PolynomialMutation> {
    /// Creates SPEA2 with SBX crossover and polynomial mutation over the
    /// problem's bounds.
    pub fn real_coded(problem: &'a P, config: Spea2Config) -> Result<Self> {
        let bounds = VariableBounds::from_problem(problem);
        Self::new(
            problem,
            config,
            SimulatedBinaryCrossover::new(bounds.clone()),
            PolynomialMutation::new(bounds),
        )
    }
}

impl<'a, P, X, M, S> Spea2<'a, P, X, M, S>
where
    P: Problem,
    X: Crossover,
    M: Mutation,
    S: Selection,
{
    /// Replaces the parent selection operator.
    pub fn with_selection<S2: Selection>(self, selection: S2) -> Spea2<'a, P, X, M, S2> {
        let Reproduction {
            crossover,
            mutation,
            crossover_rate,
            mutation_rate,
            ..
        } = self.reproduction;
        Spea2 {
            problem: self.problem,
            config: self.config,
            termination: self.termination,
            reproduction: Reproduction {
                selection,
                crossover,
                mutation,
                crossover_rate,
                mutation_rate,
            },
            archive: self.archive,
            generation: self.generation,
            evaluations: self.evaluations,
            initialized: self.initialized,
            rng: self.rng,
            seed: self.seed,
        }
    }

    /// The configuration this instance was built with.
    pub fn config(&self) -> &Spea2Config {
        &self.config
    }

    /// The seed actually used by the random source.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The current archive.
    pub fn archive(&self) -> &Population {
        &self.archive
    }

    /// Scores the union and keeps the archive.
    fn select_archive(&mut self, mut union: Population) {
        let k = self
            .config
            .k_neighbor
            .resolve(self.config.archive_size, union.len());
        assign_fitness(&mut union, k);
        self.archive = environmental_selection(union, self.config.archive_size);
    }
}

impl<'a, P, X, M, S> Algorithm for Spea2<'a, P, X, M, S>
where
    P: Problem,
    X: Crossover,
    M: Mutation,
    S: Selection,
{
    fn name(&self) -> &'static str {
        "SPEA2"
    }

    fn initialize(&mut self, seed: Option<Population>) -> Result<()> {
        let mut population = match seed {
            Some(mut seeded) => {
                seeded.iter_mut().for_each(|s| s.clear_properties());
                seeded
            }
            None => self
                .problem
                .new_random_solutions(self.config.population_size, &mut self.rng),
        };
        if population.len() < 2 {
            return Err(MoeaError::PopulationTooSmall {
                size: population.len(),
            });
        }

        evaluate_population(self.problem, &mut population, self.config.parallel)?;
        self.evaluations = population.len();
        self.select_archive(population);
        self.generation = 0;
        self.initialized = true;

        info!(
            "SPEA2 initialized: archive {}/{}, {} objectives, seed {}",
            self.archive.len(),
            self.config.archive_size,
            self.problem.number_of_objectives(),
            self.seed
        );
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn step(&mut self) -> Result<()> {
        if !self.initialized {
            return Err(MoeaError::NotInitialized);
        }

        let mut union = self.reproduction.breed(
            &self.archive,
            self.config.population_size,
            &mut self.rng,
        )?;
        evaluate_population(self.problem, &mut union, self.config.parallel)?;
        self.evaluations += union.len();

        let mut archive = self.archive.take();
        union.append(&mut archive);
        self.select_archive(union);
        self.generation += 1;

        debug!(
            "SPEA2 generation {}: archive {}, {} with fitness < 1",
            self.generation,
            self.archive.len(),
            self.archive
                .iter()
                .filter(|s| s.fitness().is_some_and(|f| f < 1.0))
                .count()
        );
        Ok(())
    }

    fn generation(&self) -> usize {
        self.generation
    }

    fn evaluations(&self) -> usize {
        self.evaluations
    }

    fn population(&self) -> &Population {
        &self.archive
    }

    fn termination(&self) -> &Termination {
        &self.termination
    }

    fn result(&self) -> Population {
        let mut front = self.archive.clone();
        front.reduce_to_non_dominated(&ParetoDominance);
        front
    }
}

// ============================================================================
// Tests
// ============================================================================
