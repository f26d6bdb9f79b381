//! Genetic Algorithm framework.
//!
//! A generational GA built on trait-based abstractions. A genotype plugs in
//! by implementing [`Encoding`], which specifies how to create, evaluate,
//! crossover, mutate, and validate genomes.
//!
//! # Core Traits
//!
//! - [`Encoding`]: genotype definition: creation, decoding, evaluation, operators
//! - [`BatchEvaluator`]: batch fitness evaluation, serial or parallel
//!
//! # Key Types
//!
//! - [`Genome`]: gene sequence with a cached fitness
//! - [`EvolutionConfig`]: algorithm parameters
//! - [`EvolutionRunner`]: executes the evolutionary loop
//! - [`EvolutionResult`]: final population, best genome, and [`Logbook`]
//! - [`EliteSet`]: best genomes seen so far, injected back when elitism is on
//!
//! # Submodules
//!
//! - [`operators`]: one-point and uniform PMX crossover; bit-flip, uniform
//!   integer, and index-shuffle mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod elite;
mod evaluator;
mod logbook;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::EvolutionConfig;
pub use elite::EliteSet;
#[cfg(feature = "parallel")]
pub use evaluator::ParallelEvaluator;
pub use evaluator::{BatchEvaluator, SerialEvaluator};
pub use logbook::{GenerationRecord, Logbook};
pub use runner::{EvolutionResult, EvolutionRunner};
pub use selection::{select_pool, tournament};
pub use types::{Encoding, Genome, Violations};
