//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Error, Result};

/// Configuration for an N-Queens evolution run.
///
/// # Defaults
///
/// ```
/// use nqueens_ga::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 400);
/// assert_eq!(config.generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nqueens_ga::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::new(16)
///     .with_population_size(100)
///     .with_elite_count(10)
///     .with_seed(1);
/// assert!(config.validate().is_ok());
/// ```
///
/// Setters store values as given. Out-of-range values are rejected by
/// [`validate`](Self::validate), never clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Board size and number of queens. At least 1.
    pub queens_amount: usize,

    /// Number of individuals in the population. At least 1.
    pub population_size: usize,

    /// Probability of recombining an adjacent pair in the mating pool (0.0–1.0).
    pub crossover_probability: f64,

    /// Probability of mutating an individual after crossover (0.0–1.0).
    pub mutation_probability: f64,

    /// Number of generations after the initial population. May be 0.
    pub generations: usize,

    /// Number of best-ever genomes injected into every new population.
    ///
    /// 0 disables elitism: each generation then replaces the previous one
    /// wholesale and the best fitness may regress.
    pub elite_count: usize,

    /// Number of individuals drawn per tournament.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            queens_amount: 8,
            population_size: 400,
            crossover_probability: 0.9,
            mutation_probability: 0.1,
            generations: 200,
            elite_count: 0,
            tournament_size: 2,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Default configuration for a board of `queens_amount` queens.
    pub fn new(queens_amount: usize) -> Self {
        Self {
            queens_amount,
            ..Self::default()
        }
    }

    pub fn with_queens_amount(mut self, n: usize) -> Self {
        self.queens_amount = n;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p;
        self
    }

    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the elite count (0 disables elitism).
    pub fn with_elite_count(mut self, k: usize) -> Self {
        self.elite_count = k;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Whether elite injection is enabled.
    pub fn elitist(&self) -> bool {
        self.elite_count > 0
    }

    /// Validates the configuration.
    ///
    /// Returns the first violated constraint as an [`Error`].
    pub fn validate(&self) -> Result<()> {
        if self.queens_amount < 1 {
            return Err(Error::InvalidQueensAmount(self.queens_amount));
        }
        if self.population_size < 1 {
            return Err(Error::InvalidPopulationSize(self.population_size));
        }
        check_probability("crossover_probability", self.crossover_probability)?;
        check_probability("mutation_probability", self.mutation_probability)?;
        if self.tournament_size < 1 {
            return Err(Error::InvalidTournamentSize(self.tournament_size));
        }
        if self.elite_count > self.population_size {
            return Err(Error::EliteCountTooLarge {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<()> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidProbability { name, value })
    }
}
