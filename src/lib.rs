//! Genetic algorithm search for N-Queens boards.
//!
//! Minimizes the number of mutually attacking queen pairs on an `n × n`
//! board through a generational evolutionary loop, under three genotypes:
//!
//! - **Binary-packed**: each row's column stored as a fixed-width bit group
//! - **Integer**: one column per row, repetition allowed
//! - **Permutation**: one distinct column per row, with elitism
//!
//! # Architecture
//!
//! [`ga`] holds the encoding-agnostic machinery: genome container,
//! selection, operators, batch evaluators, elite set, logbook, and the
//! runner. [`queens`] holds the board fitness model and the three
//! encodings that plug into it.
//!
//! ```
//! use nqueens_ga::ga::{EvolutionConfig, SerialEvaluator};
//! use nqueens_ga::queens::{run_variant, Variant};
//!
//! let config = EvolutionConfig::new(8).with_population_size(100).with_generations(50).with_seed(1);
//! let outcome = run_variant(Variant::PermutationElitist, config, SerialEvaluator)?;
//! assert_eq!(outcome.best_columns.len(), 8);
//! # Ok::<(), nqueens_ga::Error>(())
//! ```

pub mod error;
pub mod ga;
pub mod queens;
pub mod random;

pub use error::{Error, Result};
