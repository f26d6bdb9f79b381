//! Permutation encoding: every row holds a distinct column.
//!
//! Column clashes are impossible by construction, so only diagonals are
//! counted. Crossover (uniform PMX) and mutation (index shuffling) both
//! preserve the permutation property.

use super::board::count_violations;
use crate::ga::operators::{shuffle_indexes_mutation, uniform_pmx_crossover};
use crate::ga::{Encoding, Genome, Violations};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct PermutationEncoding {
    queens_amount: usize,
    crossover_indpb: f64,
    mutation_indpb: f64,
}

impl PermutationEncoding {
    /// Swap probability `2/n` for crossover and `1/n` for mutation.
    pub fn new(queens_amount: usize) -> Self {
        let n = queens_amount.max(1) as f64;
        Self {
            queens_amount,
            crossover_indpb: (2.0 / n).min(1.0),
            mutation_indpb: 1.0 / n,
        }
    }

    pub fn with_crossover_indpb(mut self, indpb: f64) -> Self {
        self.crossover_indpb = indpb;
        self
    }

    pub fn with_mutation_indpb(mut self, indpb: f64) -> Self {
        self.mutation_indpb = indpb;
        self
    }

    pub fn crossover_indpb(&self) -> f64 {
        self.crossover_indpb
    }

    pub fn mutation_indpb(&self) -> f64 {
        self.mutation_indpb
    }
}

impl Encoding for PermutationEncoding {
    type Gene = usize;

    fn queens_amount(&self) -> usize {
        self.queens_amount
    }

    fn genome_length(&self) -> usize {
        self.queens_amount
    }

    fn create_random<R: Rng>(&self, rng: &mut R) -> Genome<usize> {
        let mut columns: Vec<usize> = (0..self.queens_amount).collect();
        columns.shuffle(rng);
        Genome::new(columns)
    }

    fn decode(&self, genes: &[usize]) -> Vec<usize> {
        genes.to_vec()
    }

    fn evaluate(&self, genes: &[usize]) -> Violations {
        count_violations(genes, false)
    }

    fn crossover<R: Rng>(&self, first: &mut Genome<usize>, second: &mut Genome<usize>, rng: &mut R) {
        uniform_pmx_crossover(first.genes_mut(), second.genes_mut(), self.crossover_indpb, rng);
    }

    fn mutate<R: Rng>(&self, genome: &mut Genome<usize>, rng: &mut R) {
        shuffle_indexes_mutation(genome.genes_mut(), self.mutation_indpb, rng);
    }

    fn malformation(&self, genes: &[usize]) -> Option<String> {
        let n = self.queens_amount;
        if genes.len() != n {
            return Some(format!("expected {n} genes, found {}", genes.len()));
        }
        let mut seen = vec![false; n];
        for (row, &column) in genes.iter().enumerate() {
            if column >= n {
                return Some(format!("column {column} at row {row} is off the board"));
            }
            if seen[column] {
                return Some(format!("column {column} repeated at row {row}"));
            }
            seen[column] = true;
        }
        None
    }
}
