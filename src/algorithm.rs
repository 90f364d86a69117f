//! Algorithm lifecycle contract.
//!
//! Every search strategy follows the same lifecycle:
//! `initialize` → `step`* → result. [`Algorithm::execute`] drives the loop
//! and checks the stopping conditions between steps only; a running
//! generation always completes.

use crate::error::Result;
use crate::model::{Population, Solution};
use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Stopping conditions checked between steps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Termination {
    /// Number of generations after which the run stops.
    pub max_generations: usize,

    /// Optional wall-clock limit in milliseconds.
    ///
    /// Checked before each step, so the run may exceed the limit by one
    /// generation's worth of work.
    pub time_limit_ms: Option<u64>,

    /// Optional objective vector to reach.
    ///
    /// The run stops early once some solution of the current population is
    /// no worse than the target in every objective.
    pub target: Option<Vec<f64>>,
}

impl Termination {
    /// Stop after `max_generations`, no other condition.
    pub fn generations(max_generations: usize) -> Self {
        Self {
            max_generations,
            time_limit_ms: None,
            target: None,
        }
    }

    /// Whether some solution is component-wise `<=` the target.
    pub fn target_reached(&self, population: &[Solution]) -> bool {
        match &self.target {
            Some(target) => population.iter().any(|s| {
                s.objectives().len() == target.len()
                    && s.objectives().iter().zip(target).all(|(o, t)| o <= t)
            }),
            None => false,
        }
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The generation budget was exhausted.
    MaxGenerations,
    /// The wall-clock limit elapsed.
    TimeLimit,
    /// A solution reached the target objective vector.
    TargetReached,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a multi-objective run.
#[derive(Debug, Clone)]
pub struct MoeaResult {
    /// The non-dominated solutions of the final population (or archive).
    pub front: Population,

    /// Total number of generations executed.
    pub generations: usize,

    /// Total number of objective evaluations.
    pub evaluations: usize,

    /// What ended the run.
    pub stop_reason: StopReason,
}

/// Generic lifecycle shared by all search strategies.
///
/// Implementors provide `initialize`, `step` and accessors; `execute`
/// drives them.
pub trait Algorithm {
    /// Short algorithm name for logging.
    fn name(&self) -> &'static str;

    /// Builds (or accepts) the starting population and evaluates it.
    ///
    /// `seed` replaces the random initial population; its size is
    /// respected exactly.
    fn initialize(&mut self, seed: Option<Population>) -> Result<()>;

    /// Whether [`initialize`](Algorithm::initialize) has run.
    fn is_initialized(&self) -> bool;

    /// Advances exactly one generation.
    fn step(&mut self) -> Result<()>;

    /// Number of completed generations since initialization.
    fn generation(&self) -> usize;

    /// Number of objective evaluations since initialization.
    fn evaluations(&self) -> usize;

    /// The solutions the algorithm currently carries forward.
    fn population(&self) -> &Population;

    /// The stopping conditions of this run.
    fn termination(&self) -> &Termination;

    /// The current result: [`population`](Algorithm::population) reduced
    /// to its non-dominated solutions.
    fn result(&self) -> Population;

    /// Runs until a stopping condition holds.
    ///
    /// Initializes with a random population first if needed.
    fn execute(&mut self) -> Result<MoeaResult> {
        self.execute_with_cancel(None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If the flag is set to `true`, the run stops before the next step
    /// and returns the current result.
    fn execute_with_cancel(&mut self, cancel: Option<Arc<AtomicBool>>) -> Result<MoeaResult> {
        if !self.is_initialized() {
            self.initialize(None)?;
        }

        let termination = self.termination().clone();
        let start = Instant::now();

        let stop_reason = loop {
            if termination.target_reached(self.population()) {
                break StopReason::TargetReached;
            }
            if self.generation() >= termination.max_generations {
                break StopReason::MaxGenerations;
            }
            if let Some(limit) = termination.time_limit_ms {
                if start.elapsed().as_millis() >= u128::from(limit) {
                    break StopReason::TimeLimit;
                }
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break StopReason::Cancelled;
                }
            }
            self.step()?;
        };

        let front = self.result();
        info!(
            "{} stopped after {} generations ({:?}), {} evaluations, front of {}",
            self.name(),
            self.generation(),
            stop_reason,
            self.evaluations(),
            front.len()
        );

        Ok(MoeaResult {
            front,
            generations: self.generation(),
            evaluations: self.evaluations(),
            stop_reason,
        })
    }
}
