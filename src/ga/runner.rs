//! Evolutionary loop execution.
//!
//! [`EvolutionRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → (selection → variation → evaluation →
//! elitism → record) × generations.

use super::config::EvolutionConfig;
use super::elite::EliteSet;
use super::evaluator::BatchEvaluator;
use super::logbook::{GenerationRecord, Logbook};
use super::selection::select_pool;
use super::types::{Encoding, Genome, Violations};
use crate::error::{Error, Result};
use crate::random::create_rng;
use rand::Rng;
use std::cmp::Reverse;

/// Result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<T> {
    /// Population after the last generation, every genome evaluated.
    pub population: Vec<Genome<T>>,

    /// The best genome found during the entire run (first found on ties).
    pub best: Genome<T>,

    /// Fitness of `best`.
    pub best_fitness: Violations,

    /// Final elite set, best first.
    pub elites: Vec<Genome<T>>,

    /// One record per generation, starting with generation 0.
    pub logbook: Logbook,
}

impl<T> EvolutionResult<T> {
    /// Whether a board with no attacking pairs was found.
    pub fn solved(&self) -> bool {
        self.best_fitness == 0
    }
}

/// Executes the generational loop for one encoding.
///
/// # Usage
///
/// ```
/// use nqueens_ga::ga::{EvolutionConfig, EvolutionRunner, SerialEvaluator};
/// use nqueens_ga::queens::PermutationEncoding;
///
/// let config = EvolutionConfig::new(6)
///     .with_population_size(40)
///     .with_generations(20)
///     .with_elite_count(4)
///     .with_seed(1);
/// let runner = EvolutionRunner::new(PermutationEncoding::new(6), config, SerialEvaluator)?;
/// let result = runner.run()?;
/// assert_eq!(result.logbook.len(), 21);
/// # Ok::<(), nqueens_ga::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionRunner<E, B> {
    encoding: E,
    config: EvolutionConfig,
    evaluator: B,
}

impl<E: Encoding, B: BatchEvaluator> EvolutionRunner<E, B> {
    /// Builds a runner after validating `config` against itself and
    /// against the board size `encoding` was built for.
    pub fn new(encoding: E, config: EvolutionConfig, evaluator: B) -> Result<Self> {
        config.validate()?;
        if encoding.queens_amount() != config.queens_amount {
            return Err(Error::QueensAmountMismatch {
                config: config.queens_amount,
                encoding: encoding.queens_amount(),
            });
        }
        Ok(Self {
            encoding,
            config,
            evaluator,
        })
    }

    pub fn encoding(&self) -> &E {
        &self.encoding
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Runs all configured generations.
    ///
    /// Each call starts from a fresh population; with a fixed seed the
    /// result is identical across calls.
    ///
    /// # Errors
    /// Returns [`Error::MalformedGenome`] and aborts if any genome produced
    /// by creation or an operator is not a valid genome of the encoding.
    pub fn run(&self) -> Result<EvolutionResult<E::Gene>> {
        let config = &self.config;
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);

        log::info!(
            "evolving {} queens: population {}, {} generations, cxpb {}, mutpb {}, elites {}, seed {}",
            config.queens_amount,
            config.population_size,
            config.generations,
            config.crossover_probability,
            config.mutation_probability,
            config.elite_count,
            seed
        );

        // 1. Initialize population
        let mut population: Vec<Genome<E::Gene>> = (0..config.population_size)
            .map(|_| self.encoding.create_random(&mut rng))
            .collect();

        // 2. Evaluate initial population
        let nevals = self.evaluate(&mut population)?;

        // The elite set always tracks at least the best-ever genome
        let mut elites = EliteSet::new(config.elite_count.max(1));
        elites.update(&population);

        let mut logbook = Logbook::with_capacity(config.generations + 1);
        record(&mut logbook, 0, nevals, &population);

        // 3. Evolutionary loop
        for gen in 1..=config.generations {
            let mut offspring = select_pool(
                &population,
                config.population_size,
                config.tournament_size,
                &mut rng,
            );

            self.vary(&mut offspring, &mut rng);

            let nevals = self.evaluate(&mut offspring)?;

            let injected = elect(&mut offspring, &mut elites, config.elitist());
            if injected > 0 {
                log::trace!("gen {gen}: injected {injected} elites");
            }

            population = offspring;
            record(&mut logbook, gen, nevals, &population);
        }

        let best = elites
            .best()
            .cloned()
            .expect("elite set holds at least one genome of a non-empty population");
        let best_fitness = best.rank_key();

        log::info!(
            "finished after {} generations: best fitness {}",
            config.generations,
            best_fitness
        );

        Ok(EvolutionResult {
            population,
            best,
            best_fitness,
            elites: elites.into_members(),
            logbook,
        })
    }

    /// Validates and evaluates every stale genome, returning how many
    /// were evaluated.
    fn evaluate(&self, population: &mut [Genome<E::Gene>]) -> Result<usize> {
        let mut stale = 0;
        for (index, genome) in population.iter().enumerate() {
            if !genome.is_evaluated() {
                self.encoding.check(index, genome)?;
                stale += 1;
            }
        }
        self.evaluator.evaluate_batch(&self.encoding, population);
        Ok(stale)
    }

    /// Crossover on adjacent pairs, then independent mutation of every
    /// individual. A trailing unpaired individual is only eligible for
    /// mutation.
    fn vary<R: Rng>(&self, offspring: &mut [Genome<E::Gene>], rng: &mut R) {
        for pair in offspring.chunks_exact_mut(2) {
            if rng.random_range(0.0..1.0) < self.config.crossover_probability {
                let (first, second) = pair.split_at_mut(1);
                self.encoding.crossover(&mut first[0], &mut second[0], rng);
            }
        }

        for genome in offspring.iter_mut() {
            if rng.random_range(0.0..1.0) < self.config.mutation_probability {
                self.encoding.mutate(genome, rng);
            }
        }
    }
}

/// Updates `elites` from the evaluated offspring, then, if `inject`,
/// replaces the worst offspring with the elites held before the update.
///
/// Every offspring is offered to the elite set before any is overwritten.
/// Returns the number of injected genomes.
fn elect<T: Clone + PartialEq>(
    offspring: &mut [Genome<T>],
    elites: &mut EliteSet<T>,
    inject: bool,
) -> usize {
    let previous = if inject {
        elites.members().to_vec()
    } else {
        Vec::new()
    };
    elites.update(offspring);
    inject_elites(offspring, &previous);
    previous.len()
}

/// Replaces the worst individuals of `population` with clones of `elites`.
///
/// Among equally bad individuals the earliest is replaced first.
fn inject_elites<T: Clone>(population: &mut [Genome<T>], elites: &[Genome<T>]) {
    let mut worst_first: Vec<usize> = (0..population.len()).collect();
    worst_first.sort_by_key(|&i| Reverse(population[i].rank_key()));
    for (slot, elite) in worst_first.into_iter().zip(elites) {
        population[slot] = elite.clone();
    }
}

fn record<T>(logbook: &mut Logbook, generation: usize, nevals: usize, population: &[Genome<T>]) {
    let record = GenerationRecord::from_population(generation, nevals, population)
        .expect("population is non-empty and fully evaluated");
    log::debug!(
        "gen {:>4}  nevals {:>5}  min {:>6}  avg {:>10.3}",
        record.generation,
        record.nevals,
        record.min,
        record.mean
    );
    logbook.push(record);
}

// ============================================================================
// Tests
// ============================================================================
