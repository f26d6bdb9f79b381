//! Integer encoding with repetition: one column per row, columns may repeat.

use super::board::count_violations;
use crate::ga::operators::{one_point_crossover, uniform_int_mutation};
use crate::ga::{Encoding, Genome, Violations};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct IntegerEncoding {
    queens_amount: usize,
    mutation_indpb: f64,
}

impl IntegerEncoding {
    pub fn new(queens_amount: usize) -> Self {
        Self {
            queens_amount,
            mutation_indpb: 1.0 / queens_amount.max(1) as f64,
        }
    }

    /// Overrides the per-gene reset probability (default `1/n`).
    pub fn with_mutation_indpb(mut self, indpb: f64) -> Self {
        self.mutation_indpb = indpb;
        self
    }
}

impl Encoding for IntegerEncoding {
    type Gene = usize;

    fn queens_amount(&self) -> usize {
        self.queens_amount
    }

    fn genome_length(&self) -> usize {
        self.queens_amount
    }

    fn create_random<R: Rng>(&self, rng: &mut R) -> Genome<usize> {
        let n = self.queens_amount;
        Genome::new((0..n).map(|_| rng.random_range(0..n)).collect())
    }

    fn decode(&self, genes: &[usize]) -> Vec<usize> {
        genes.to_vec()
    }

    fn evaluate(&self, genes: &[usize]) -> Violations {
        count_violations(genes, true)
    }

    fn crossover<R: Rng>(&self, first: &mut Genome<usize>, second: &mut Genome<usize>, rng: &mut R) {
        one_point_crossover(first.genes_mut(), second.genes_mut(), rng);
    }

    fn mutate<R: Rng>(&self, genome: &mut Genome<usize>, rng: &mut R) {
        let high = self.queens_amount.saturating_sub(1);
        uniform_int_mutation(genome.genes_mut(), 0, high, self.mutation_indpb, rng);
    }

    fn malformation(&self, genes: &[usize]) -> Option<String> {
        if genes.len() != self.queens_amount {
            return Some(format!(
                "expected {} genes, found {}",
                self.queens_amount,
                genes.len()
            ));
        }
        genes
            .iter()
            .position(|&c| c >= self.queens_amount)
            .map(|row| format!("column {} at row {row} is off the board", genes[row]))
    }
}
