use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

use crate::crossover::CrossoverOperator;
use crate::engine::settings::AlgorithmSettings;
use crate::error::{GeneticError, Result};
use crate::fitness::FitnessOperator;
use crate::mutation::MutationOperator;
use crate::params::Params;
use crate::selection::SelectionOperator;
use crate::termination::TerminationOperator;

/// The best chromosome found by a run, with its fitness.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<C> {
    /// The best chromosome observed across all generations.
    pub chromosome: C,
    /// Its fitness score.
    pub fitness: f64,
}

/// Per-generation statistics handed to the iteration callback.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationStats<C> {
    /// Best result observed so far.
    pub current_best: EvolutionResult<C>,
    /// Number of completed generations, starting at 1.
    pub current_generation_count: u64,
    /// Size of the population after this generation.
    pub population_size: u64,
}

/// The generational evolutionary search driver.
///
/// One thread runs the generation loop; within each generation the crossover
/// jobs fan out onto a work-stealing pool owned by the driver. Construction
/// validates the settings before any work happens.
///
/// # Examples
///
/// ```rust
/// use evosolve::engine::{AlgorithmSettings, GeneticAlgorithm};
/// use evosolve::params::Params;
/// use evosolve::termination::GenerationsTermination;
///
/// let initial: Vec<Vec<f64>> = (0..16).map(|i| vec![i as f64, 1.0]).collect();
/// let params = Params::builder()
///     .with_termination_operator(GenerationsTermination::new(5))
///     .build();
///
/// let solver = GeneticAlgorithm::new(AlgorithmSettings::default()).unwrap();
/// let best = solver.solve(&initial, params, |_stats| {}).unwrap();
/// assert!(best.fitness >= 15.0);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm {
    settings: AlgorithmSettings,
    threads: usize,
}

impl GeneticAlgorithm {
    /// Creates a solver with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidRate`] when any rate falls outside
    /// `[0.0, 1.0]`.
    pub fn new(settings: AlgorithmSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            threads: 0,
        })
    }

    /// Caps the worker pool at `threads` threads.
    ///
    /// `0` (the default) uses one worker per available core. `1` runs the
    /// offspring jobs on a single worker, which together with
    /// [`ThreadLocalRng::reseed`](crate::rng::ThreadLocalRng::reseed) gives
    /// reproducible runs.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Evolves `initial_population` until the termination operator fires and
    /// returns the best chromosome observed.
    ///
    /// `on_iteration` runs once per generation, after best tracking and
    /// before the termination check.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::EmptyPopulation`] for an empty initial
    /// population and [`GeneticError::Executor`] when the worker pool cannot
    /// be built. Panics from caller-supplied operators propagate unchanged.
    pub fn solve<C, F, S, X, M, T, CB>(
        &self,
        initial_population: &[C],
        params: Params<F, S, X, M, T>,
        mut on_iteration: CB,
    ) -> Result<EvolutionResult<C>>
    where
        C: Clone + PartialEq + Default + Send + Sync,
        F: FitnessOperator<C>,
        S: SelectionOperator<C>,
        X: CrossoverOperator<C>,
        M: MutationOperator<C>,
        T: TerminationOperator<C>,
        CB: FnMut(&IterationStats<C>),
    {
        if initial_population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|error| GeneticError::Executor(error.to_string()))?;

        let (fitness, selection, crossover, mutation, termination) = params.into_parts();

        // generation 0: annotate every member and sort ascending by fitness
        let mut population: Vec<(C, f64)> = initial_population
            .iter()
            .map(|chromosome| {
                let score = fitness.evaluate(chromosome);
                (chromosome.clone(), score)
            })
            .collect();
        population.sort_by(|a, b| a.1.total_cmp(&b.1));

        let tail = population.len() - 1;
        let mut best = EvolutionResult {
            chromosome: population[tail].0.clone(),
            fitness: population[tail].1,
        };

        info!(
            population_size = population.len(),
            best_fitness = best.fitness,
            "starting evolutionary search"
        );

        let mut generation: u64 = 0;
        loop {
            let elite_count = self.elite_count(population.len());
            let crossover_count = self.crossover_count(population.len());

            // order the elites to the front; workers see this best-first view
            population.sort_by(|a, b| b.1.total_cmp(&a.1));
            let elites: Vec<(C, f64)> = population.iter().take(elite_count).cloned().collect();

            let parent_view: Vec<C> = population
                .iter()
                .map(|(chromosome, _)| chromosome.clone())
                .collect();

            // fan the crossover jobs out; collection is in submission order
            let offspring: Vec<[(C, f64); 2]> = pool.install(|| {
                (0..crossover_count)
                    .into_par_iter()
                    .map(|_| {
                        let (parent1, parent2) = selection.select_parents(&parent_view, &fitness);

                        let child1 = mutation.apply(crossover.combine(&parent1, &parent2));
                        let child2 = mutation.apply(crossover.combine(&parent2, &parent1));

                        let score1 = fitness.evaluate(&child1);
                        let score2 = fitness.evaluate(&child2);
                        [(child1, score1), (child2, score2)]
                    })
                    .collect()
            });

            let mut next = Vec::with_capacity(2 * crossover_count + elites.len());
            for pair in offspring {
                next.extend(pair);
            }
            next.extend(elites);
            next.sort_by(|a, b| a.1.total_cmp(&b.1));
            population = next;

            // best tracking: keep any strict improvement, otherwise write the
            // previous best over the worst slot so it survives the generation
            let tail = population.len() - 1;
            if population[tail].1 > best.fitness {
                best = EvolutionResult {
                    chromosome: population[tail].0.clone(),
                    fitness: population[tail].1,
                };
            } else {
                population[0] = (best.chromosome.clone(), best.fitness);
            }

            generation += 1;
            debug!(
                generation,
                best_fitness = best.fitness,
                population_size = population.len(),
                "generation complete"
            );

            let stats = IterationStats {
                current_best: best.clone(),
                current_generation_count: generation,
                population_size: population.len() as u64,
            };
            on_iteration(&stats);

            if termination.should_terminate(&best.chromosome, best.fitness) {
                info!(
                    generation,
                    best_fitness = best.fitness,
                    "termination criterion met"
                );
                return Ok(best);
            }
        }
    }

    /// Elite count for the current population size. A non-zero elitism rate
    /// always preserves at least two individuals.
    fn elite_count(&self, population_size: usize) -> usize {
        let count = (population_size as f64 * self.settings.elitism_rate).round() as usize;
        if count == 0 && self.settings.elitism_rate > 0.0 {
            2
        } else {
            count
        }
    }

    /// Crossover-job count for the current population size, with a floor of
    /// four jobs to keep a minimum of mixing.
    fn crossover_count(&self, population_size: usize) -> usize {
        let count = (population_size as f64 * self.settings.crossover_rate).round() as usize;
        if count <= 1 {
            4
        } else {
            count
        }
    }
}

/// One-call entry point: validates `settings`, builds a solver and runs it.
///
/// # Errors
///
/// See [`GeneticAlgorithm::new`] and [`GeneticAlgorithm::solve`].
pub fn solve<C, F, S, X, M, T, CB>(
    initial_population: &[C],
    settings: AlgorithmSettings,
    params: Params<F, S, X, M, T>,
    on_iteration: CB,
) -> Result<EvolutionResult<C>>
where
    C: Clone + PartialEq + Default + Send + Sync,
    F: FitnessOperator<C>,
    S: SelectionOperator<C>,
    X: CrossoverOperator<C>,
    M: MutationOperator<C>,
    T: TerminationOperator<C>,
    CB: FnMut(&IterationStats<C>),
{
    GeneticAlgorithm::new(settings)?.solve(initial_population, params, on_iteration)
}
