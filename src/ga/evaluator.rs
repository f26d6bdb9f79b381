//! Batch fitness evaluation.
//!
//! Every genome's fitness depends only on its own genes, so a batch is
//! embarrassingly parallel. [`SerialEvaluator`] walks the batch on the
//! calling thread; [`ParallelEvaluator`] (feature `parallel`) fans it out
//! over the rayon thread pool. Both satisfy the same contract.

use super::types::{Encoding, Genome, Violations};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluates a batch of genomes.
///
/// Implementations compute fitness only for genomes without a cached value,
/// write it back onto each genome, and return the fitness of every genome
/// in input order.
pub trait BatchEvaluator: Send + Sync {
    fn evaluate_batch<E: Encoding>(
        &self,
        encoding: &E,
        genomes: &mut [Genome<E::Gene>],
    ) -> Vec<Violations>;
}

/// Evaluates on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialEvaluator;

impl BatchEvaluator for SerialEvaluator {
    fn evaluate_batch<E: Encoding>(
        &self,
        encoding: &E,
        genomes: &mut [Genome<E::Gene>],
    ) -> Vec<Violations> {
        genomes
            .iter_mut()
            .map(|genome| evaluate_cached(encoding, genome))
            .collect()
    }
}

/// Evaluates across the rayon global thread pool.
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelEvaluator;

#[cfg(feature = "parallel")]
impl BatchEvaluator for ParallelEvaluator {
    fn evaluate_batch<E: Encoding>(
        &self,
        encoding: &E,
        genomes: &mut [Genome<E::Gene>],
    ) -> Vec<Violations> {
        genomes
            .par_iter_mut()
            .map(|genome| evaluate_cached(encoding, genome))
            .collect()
    }
}

fn evaluate_cached<E: Encoding>(encoding: &E, genome: &mut Genome<E::Gene>) -> Violations {
    match genome.fitness() {
        Some(fitness) => fitness,
        None => {
            let fitness = encoding.evaluate(genome.genes());
            genome.set_fitness(fitness);
            fitness
        }
    }
}
