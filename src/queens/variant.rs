//! Ready-made variants pairing an encoding with its elitism policy.
//!
//! Each variant runs through the same [`EvolutionRunner`]; the outcome is
//! decoded to columns so variants with different genotypes can be compared
//! side by side.

use super::{BinaryEncoding, IntegerEncoding, PermutationEncoding};
use crate::error::Result;
use crate::ga::{BatchEvaluator, Encoding, EvolutionConfig, EvolutionRunner, Logbook, Violations};
use std::fmt;

/// Hall-of-fame size of the elitist permutation variant.
pub const PERMUTATION_ELITE_COUNT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Bit-packed columns, one-point crossover, bit flips, no elitism.
    BinarySimple,
    /// Integer columns with repetition, one-point crossover, uniform
    /// resets, no elitism.
    IntegerSimple,
    /// Permutation columns, uniform PMX, index shuffling, and the best
    /// [`PERMUTATION_ELITE_COUNT`] genomes carried into every generation.
    PermutationElitist,
}

impl Variant {
    pub const ALL: [Variant; 3] = [
        Variant::BinarySimple,
        Variant::IntegerSimple,
        Variant::PermutationElitist,
    ];

    /// Applies the variant's elitism policy to `config`.
    ///
    /// An explicit, non-zero `elite_count` is always kept as given and left
    /// to [`EvolutionConfig::validate`]. When it is 0 the simple variants
    /// stay non-elitist and the elitist variant fills in
    /// [`PERMUTATION_ELITE_COUNT`], reduced to the population size (with a
    /// warning) when the population is smaller.
    pub fn configure(self, config: EvolutionConfig) -> EvolutionConfig {
        if config.elite_count > 0 {
            return config;
        }
        match self {
            Variant::BinarySimple | Variant::IntegerSimple => config,
            Variant::PermutationElitist => {
                let population = config.population_size;
                if population < PERMUTATION_ELITE_COUNT {
                    log::warn!(
                        "population {population} is smaller than the default elite count {PERMUTATION_ELITE_COUNT}; using {population}"
                    );
                }
                config.with_elite_count(PERMUTATION_ELITE_COUNT.min(population))
            }
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::BinarySimple => "binary-simple",
            Variant::IntegerSimple => "integer-simple",
            Variant::PermutationElitist => "permutation-elitist",
        };
        f.write_str(name)
    }
}

/// Decoded result of one variant run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantOutcome {
    pub variant: Variant,

    /// Column of each row on the best board found.
    pub best_columns: Vec<usize>,

    pub best_fitness: Violations,

    pub logbook: Logbook,
}

/// Runs `variant` with its elitism policy applied to `config`.
pub fn run_variant<B: BatchEvaluator>(
    variant: Variant,
    config: EvolutionConfig,
    evaluator: B,
) -> Result<VariantOutcome> {
    let config = variant.configure(config);
    let n = config.queens_amount;
    log::info!("running {variant} for {n} queens");

    match variant {
        Variant::BinarySimple => run_encoding(variant, BinaryEncoding::new(n), config, evaluator),
        Variant::IntegerSimple => run_encoding(variant, IntegerEncoding::new(n), config, evaluator),
        Variant::PermutationElitist => {
            run_encoding(variant, PermutationEncoding::new(n), config, evaluator)
        }
    }
}

fn run_encoding<E: Encoding, B: BatchEvaluator>(
    variant: Variant,
    encoding: E,
    config: EvolutionConfig,
    evaluator: B,
) -> Result<VariantOutcome> {
    let runner = EvolutionRunner::new(encoding, config, evaluator)?;
    let result = runner.run()?;
    Ok(VariantOutcome {
        variant,
        best_columns: runner.encoding().decode(result.best.genes()),
        best_fitness: result.best_fitness,
        logbook: result.logbook,
    })
}
