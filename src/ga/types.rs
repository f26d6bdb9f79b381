//! Core type definitions for the GA framework.
//!
//! [`Genome`] is the candidate solution container shared by every encoding,
//! and [`Encoding`] is the contract between the generic evolutionary loop
//! and an encoding-specific genotype: how to create, evaluate, recombine,
//! mutate, and validate genomes.

use crate::error::{Error, Result};
use rand::Rng;

/// Number of mutually attacking queen pairs. Lower is better, 0 is optimal.
pub type Violations = usize;

/// A fixed-length gene sequence with a cached fitness value.
///
/// The cache is filled by a [`BatchEvaluator`](super::BatchEvaluator) and
/// cleared whenever the genes are handed out mutably, so a genome touched
/// by an operator is always re-evaluated before it is ranked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome<T> {
    genes: Vec<T>,
    fitness: Option<Violations>,
}

impl<T> Genome<T> {
    /// Wraps a gene sequence. The fitness starts out stale.
    pub fn new(genes: Vec<T>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    pub fn genes(&self) -> &[T] {
        &self.genes
    }

    /// Mutable access to the genes. Invalidates the cached fitness.
    pub fn genes_mut(&mut self) -> &mut [T] {
        self.fitness = None;
        &mut self.genes
    }

    pub fn into_genes(self) -> Vec<T> {
        self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The cached fitness, or `None` if the genome has not been evaluated
    /// since its last change.
    pub fn fitness(&self) -> Option<Violations> {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: Violations) {
        self.fitness = Some(fitness);
    }

    pub fn invalidate(&mut self) {
        self.fitness = None;
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Ranking key: the cached fitness, with stale genomes ranked worst.
    pub(crate) fn rank_key(&self) -> Violations {
        self.fitness.unwrap_or(Violations::MAX)
    }
}

/// Defines one genotype for the N-Queens board.
///
/// This is the trait each encoding implements to plug into
/// [`EvolutionRunner`](super::EvolutionRunner). It covers:
///
/// 1. **Creation**: how to build a random genome
/// 2. **Evaluation**: how to decode a genome and count violations
/// 3. **Crossover**: how to recombine two genomes in place
/// 4. **Mutation**: how to perturb one genome in place
/// 5. **Validation**: how to recognize a genome no operator should produce
///
/// # Thread Safety
///
/// `Encoding` must be `Send + Sync` because a batch evaluator may call
/// [`evaluate`](Encoding::evaluate) from several worker threads at once.
pub trait Encoding: Send + Sync {
    /// The symbol type of one gene.
    type Gene: Copy + PartialEq + Send + Sync + std::fmt::Debug;

    /// Board size the encoding was built for.
    fn queens_amount(&self) -> usize;

    /// Number of genes in every genome of this encoding.
    fn genome_length(&self) -> usize;

    /// Creates a random, well-formed genome.
    fn create_random<R: Rng>(&self, rng: &mut R) -> Genome<Self::Gene>;

    /// Maps genes to one column per row.
    fn decode(&self, genes: &[Self::Gene]) -> Vec<usize>;

    /// Counts violating queen pairs. Pure and total over valid genomes.
    fn evaluate(&self, genes: &[Self::Gene]) -> Violations;

    /// Recombines two genomes in place, replacing both with offspring.
    fn crossover<R: Rng>(
        &self,
        first: &mut Genome<Self::Gene>,
        second: &mut Genome<Self::Gene>,
        rng: &mut R,
    );

    /// Mutates a genome in place.
    fn mutate<R: Rng>(&self, genome: &mut Genome<Self::Gene>, rng: &mut R);

    /// Describes why `genes` is not a valid genome of this encoding, if it
    /// is not. Only the length is checked by default.
    fn malformation(&self, genes: &[Self::Gene]) -> Option<String> {
        if genes.len() != self.genome_length() {
            return Some(format!(
                "expected {} genes, found {}",
                self.genome_length(),
                genes.len()
            ));
        }
        None
    }

    /// Checks `genome` and reports it as malformed at population `index`.
    fn check(&self, index: usize, genome: &Genome<Self::Gene>) -> Result<()> {
        match self.malformation(genome.genes()) {
            Some(reason) => Err(Error::MalformedGenome { index, reason }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_genome_is_stale() {
        let genome = Genome::new(vec![0usize, 1, 2]);
        assert!(!genome.is_evaluated());
        assert_eq!(genome.rank_key(), Violations::MAX);
        assert_eq!(genome.len(), 3);
    }

    #[test]
    fn test_genes_mut_invalidates_fitness() {
        let mut genome = Genome::new(vec![0usize, 1, 2]);
        genome.set_fitness(2);
        assert_eq!(genome.fitness(), Some(2));

        genome.genes_mut()[0] = 2;
        assert_eq!(genome.fitness(), None);
        assert_eq!(genome.genes(), &[2, 1, 2]);
        assert_eq!(genome.into_genes(), vec![2, 1, 2]);
    }

    #[test]
    fn test_read_access_keeps_fitness() {
        let mut genome = Genome::new(vec![true, false]);
        genome.set_fitness(0);
        let _ = genome.genes();
        let _ = genome.clone();
        assert_eq!(genome.fitness(), Some(0));
    }
}
