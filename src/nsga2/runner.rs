//! NSGA-II generational loop.
//!
//! [`Nsga2`] orchestrates the elitist loop:
//! offspring creation → evaluation → merge → ranking → crowding truncation.

use super::config::Nsga2Config;
use crate::algorithm::{Algorithm, Termination};
use crate::error::{MoeaError, Result};
use crate::evaluation::evaluate_population;
use crate::model::{Population, Problem, VariableBounds};
use crate::operators::{
    BinaryTournament, Crossover, CrowdedComparison, Mutation, PolynomialMutation, Preference,
    Reproduction, Selection, SimulatedBinaryCrossover,
};
use crate::pareto::{assign_crowding_distance, rank_fronts, ParetoDominance};
use crate::random::rng_from_option;
use log::{debug, info};
use rand::rngs::StdRng;

/// Reduces a merged population to `size` solutions by rank and crowding.
///
/// Fronts are taken whole in rank order while they fit. The first front
/// that does not fit is sorted by crowded comparison (rank, then crowding
/// distance descending) and only its best members fill the remaining
/// slots. Every kept solution carries fresh [`RANK`] and
/// [`CROWDING_DISTANCE`] properties.
///
/// Returns the whole population when it holds `size` or fewer solutions.
///
/// [`RANK`]: crate::model::RANK
/// [`CROWDING_DISTANCE`]: crate::model::CROWDING_DISTANCE
pub fn crowded_truncation(population: Population, size: usize) -> Population {
    let mut next = Population::with_capacity(size);

    for mut front in rank_fronts(population, &ParetoDominance) {
        if next.len() >= size {
            break;
        }
        assign_crowding_distance(&mut front);

        let remaining = size - next.len();
        if front.len() > remaining {
            front.sort_by(|a, b| CrowdedComparison.prefer(a, b));
            front.truncate(remaining);
        }
        next.append(&mut front);
    }

    next
}

/// The NSGA-II algorithm.
///
/// Operators are pluggable: any [`Crossover`], [`Mutation`] and
/// [`Selection`] can be supplied. The default selection is a binary
/// tournament on [`CrowdedComparison`].
///
/// # Usage
///
/// ```
/// use u_moea::algorithm::Algorithm;
/// use u_moea::model::{Problem, Solution};
/// use u_moea::nsga2::{Nsga2, Nsga2Config};
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
/// let config = Nsga2Config::default()
///     .with_population_size(20)
///     .with_max_generations(10)
///     .with_seed(42);
/// let mut nsga2 = Nsga2::real_coded(&Schaffer, config).unwrap();
/// let result = nsga2.execute().unwrap();
/// assert!(!result.front.is_empty());
/// ```
///
/// # References
///
/// Deb, Pratap, Agarwal & Meyarivan (2002), "A Fast and Elitist
/// Multiobjective Genetic Algorithm: NSGA-II"
pub struct Nsga2<'a, P, X, M, S = BinaryTournament<CrowdedComparison>> {
    problem: &'a P,
    config: Nsga2Config,
    termination: Termination,
    reproduction: Reproduction<S, X, M>,
    population: Population,
    generation: usize,
    evaluations: usize,
    initialized: bool,
    rng: StdRng,
    seed: u64,
}

impl<'a, P, X, M> Nsga2<'a, P, X, M>
where
    P: Problem,
    X: Crossover,
    M: Mutation,
{
    /// Creates NSGA-II with the given variation operators.
    ///
    /// # Errors
    /// [`MoeaError::InvalidConfig`] if the configuration is invalid.
    pub fn new(problem: &'a P, config: Nsga2Config, crossover: X, mutation: M) -> Result<Self> {
        config.validate()?;
        let (rng, seed) = rng_from_option(config.seed);
        Ok(Self {
            problem,
            termination: config.termination(),
            reproduction: Reproduction {
                selection: BinaryTournament::new(CrowdedComparison),
                crossover,
                mutation,
                crossover_rate: config.crossover_rate,
                mutation_rate: config.mutation_rate,
            },
            config,
            population: Population::new(),
            generation: 0,
            evaluations: 0,
            initialized: false,
            rng,
            seed,
        })
    }
}

impl<'a, P: Problem> Nsga2<'a, P, SimulatedBinaryCrossover, PolynomialMutation> {
    /// Creates NSGA-II with SBX crossover and polynomial mutation over the
    /// problem's bounds.
    pub fn real_coded(problem: &'a P, config: Nsga2Config) -> Result<Self> {
        let bounds = VariableBounds::from_problem(problem);
        Self::new(
            problem,
            config,
            SimulatedBinaryCrossover::new(bounds.clone()),
            PolynomialMutation::new(bounds),
        )
    }
}

impl<'a, P, X, M, S> Nsga2<'a, P, X, M, S>
where
    P: Problem,
    X: Crossover,
    M: Mutation,
    S: Selection,
{
    /// Replaces the parent selection operator.
    pub fn with_selection<S2: Selection>(self, selection: S2) -> Nsga2<'a, P, X, M, S2> {
        let Reproduction {
            crossover,
            mutation,
            crossover_rate,
            mutation_rate,
            ..
        } = self.reproduction;
        Nsga2 {
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
            population: self.population,
            generation: self.generation,
            evaluations: self.evaluations,
            initialized: self.initialized,
            rng: self.rng,
            seed: self.seed,
        }
    }

    /// The configuration this instance was built with.
    pub fn config(&self) -> &Nsga2Config {
        &self.config
    }

    /// The seed actually used by the random source.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<'a, P, X, M, S> Algorithm for Nsga2<'a, P, X, M, S>
where
    P: Problem,
    X: Crossover,
    M: Mutation,
    S: Selection,
{
    fn name(&self) -> &'static str {
        "NSGA-II"
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

        let size = population.len();
        self.population = crowded_truncation(population, size);
        self.generation = 0;
        self.initialized = true;

        info!(
            "NSGA-II initialized: {} solutions, {} objectives, seed {}",
            self.population.len(),
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
        let size = self.config.population_size;

        let mut offspring = self
            .reproduction
            .breed(&self.population, size, &mut self.rng)?;
        evaluate_population(self.problem, &mut offspring, self.config.parallel)?;
        self.evaluations += offspring.len();

        let mut merged = self.population.take();
        merged.append(&mut offspring);
        self.population = crowded_truncation(merged, size);
        self.generation += 1;

        debug!(
            "NSGA-II generation {}: {} solutions in first front",
            self.generation,
            self.population.iter().filter(|s| s.rank() == Some(1)).count()
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
        &self.population
    }

    fn termination(&self) -> &Termination {
        &self.termination
    }

    fn result(&self) -> Population {
        let mut front = self.population.clone();
        front.reduce_to_non_dominated(&ParetoDominance);
        front
    }
}

// ============================================================================
// Tests
// ============================================================================
