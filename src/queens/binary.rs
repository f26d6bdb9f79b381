//! Binary-packed encoding: each row's column is a fixed-width bit group.

use super::board::{bits_per_queen, count_violations, decode_packed_column};
use crate::ga::operators::{flip_bit_mutation, one_point_crossover};
use crate::ga::{Encoding, Genome, Violations};
use rand::Rng;

/// Bit-string genotype of `n * ceil(log2(n))` bits.
///
/// Columns may repeat. Recombination cuts the raw bit string, not the
/// decoded columns, and mutation flips bits with probability `1/n` each.
#[derive(Debug, Clone)]
pub struct BinaryEncoding {
    queens_amount: usize,
    bits_per_queen: usize,
    mutation_indpb: f64,
}

impl BinaryEncoding {
    pub fn new(queens_amount: usize) -> Self {
        Self {
            queens_amount,
            bits_per_queen: bits_per_queen(queens_amount),
            mutation_indpb: 1.0 / queens_amount.max(1) as f64,
        }
    }

    pub fn bits_per_queen(&self) -> usize {
        self.bits_per_queen
    }

    /// Overrides the per-bit flip probability.
    pub fn with_mutation_indpb(mut self, indpb: f64) -> Self {
        self.mutation_indpb = indpb;
        self
    }

    /// Column of a single row.
    pub fn column(&self, bits: &[bool], row: usize) -> usize {
        decode_packed_column(bits, row, self.queens_amount, self.bits_per_queen)
    }
}

impl Encoding for BinaryEncoding {
    type Gene = bool;

    fn queens_amount(&self) -> usize {
        self.queens_amount
    }

    fn genome_length(&self) -> usize {
        self.queens_amount * self.bits_per_queen
    }

    fn create_random<R: Rng>(&self, rng: &mut R) -> Genome<bool> {
        Genome::new((0..self.genome_length()).map(|_| rng.random_bool(0.5)).collect())
    }

    fn decode(&self, genes: &[bool]) -> Vec<usize> {
        (0..self.queens_amount)
            .map(|row| self.column(genes, row))
            .collect()
    }

    fn evaluate(&self, genes: &[bool]) -> Violations {
        count_violations(&self.decode(genes), true)
    }

    fn crossover<R: Rng>(&self, first: &mut Genome<bool>, second: &mut Genome<bool>, rng: &mut R) {
        one_point_crossover(first.genes_mut(), second.genes_mut(), rng);
    }

    fn mutate<R: Rng>(&self, genome: &mut Genome<bool>, rng: &mut R) {
        flip_bit_mutation(genome.genes_mut(), self.mutation_indpb, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_genome_length() {
        for (n, width) in [(1, 0), (4, 2), (5, 3), (100, 7)] {
            let encoding = BinaryEncoding::new(n);
            assert_eq!(encoding.bits_per_queen(), width);
            assert_eq!(encoding.genome_length(), n * width);
        }
        assert_eq!(BinaryEncoding::new(1).genome_length(), 0);
        assert_eq!(BinaryEncoding::new(4).genome_length(), 8);
        assert_eq!(BinaryEncoding::new(8).genome_length(), 24);
        assert_eq!(BinaryEncoding::new(100).genome_length(), 700);
    }

    #[test]
    fn test_create_random_is_well_formed() {
        let encoding = BinaryEncoding::new(10);
        let mut rng = create_rng(5);
        for _ in 0..20 {
            let genome = encoding.create_random(&mut rng);
            assert_eq!(genome.len(), 40);
            assert!(encoding.malformation(genome.genes()).is_none());
        }
    }

    #[test]
    fn test_evaluate_known_board() {
        // n = 4, columns [1, 3, 0, 2]: LSB first, 2 bits each.
        let encoding = BinaryEncoding::new(4);
        let bits = [
            true, false, // 1
            true, true, // 3
            false, false, // 0
            false, true, // 2
        ];
        assert_eq!(encoding.decode(&bits), vec![1, 3, 0, 2]);
        assert_eq!(encoding.evaluate(&bits), 0);
    }

    #[test]
    fn test_evaluate_counts_shared_columns() {
        let encoding = BinaryEncoding::new(4);
        let bits = [false; 8];
        assert_eq!(encoding.decode(&bits), vec![0; 4]);
        assert_eq!(encoding.evaluate(&bits), 6);
    }

    #[test]
    fn test_wrong_length_is_malformed() {
        let encoding = BinaryEncoding::new(4);
        assert!(encoding.malformation(&[true; 7]).is_some());
        assert!(encoding.check(3, &Genome::new(vec![true; 9])).is_err());
    }

    #[test]
    fn test_operators_invalidate_fitness() {
        let encoding = BinaryEncoding::new(8).with_mutation_indpb(0.0);
        let mut rng = create_rng(9);
        let mut a = encoding.create_random(&mut rng);
        let mut b = encoding.create_random(&mut rng);
        a.set_fitness(3);
        b.set_fitness(4);

        encoding.crossover(&mut a, &mut b, &mut rng);
        assert!(!a.is_evaluated() && !b.is_evaluated());

        a.set_fitness(3);
        encoding.mutate(&mut a, &mut rng);
        assert!(!a.is_evaluated());
    }

    proptest! {
        #[test]
        fn prop_decoded_columns_in_range(
            n in 1usize..64,
            seed in any::<u64>(),
        ) {
            let encoding = BinaryEncoding::new(n);
            let mut rng = create_rng(seed);
            let genome = encoding.create_random(&mut rng);

            let columns = encoding.decode(genome.genes());
            prop_assert_eq!(columns.len(), n);
            prop_assert!(columns.iter().all(|&c| c < n));
            prop_assert_eq!(columns, encoding.decode(genome.genes()));
        }
    }
}
