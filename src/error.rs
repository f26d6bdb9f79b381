//! Error types.
//!
//! Configuration problems are reported before any evolution starts.
//! A malformed genome found during a run is an operator bug and aborts it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("queens_amount must be at least 1, got {0}")]
    InvalidQueensAmount(usize),

    #[error("population_size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("tournament_size must be at least 1, got {0}")]
    InvalidTournamentSize(usize),

    #[error("elite_count {elite_count} exceeds population_size {population_size}")]
    EliteCountTooLarge {
        elite_count: usize,
        population_size: usize,
    },

    #[error("config declares {config} queens but the encoding was built for {encoding}")]
    QueensAmountMismatch { config: usize, encoding: usize },

    #[error("malformed genome at population index {index}: {reason}")]
    MalformedGenome { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
