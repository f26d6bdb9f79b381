//! Genetic operators on raw gene slices.
//!
//! These operate on `&mut [T]` sequences and know nothing about queens or
//! boards; the encodings in [`crate::queens`] wire them up with their
//! per-gene probabilities.
//!
//! # Crossover Operators
//!
//! - [`one_point_crossover`]: swap tails after a single cut
//! - [`uniform_pmx_crossover`]: uniform partially matched crossover for
//!   permutations (Cicirello & Smith, 2000)
//!
//! # Mutation Operators
//!
//! - [`flip_bit_mutation`]: independent per-bit flips
//! - [`uniform_int_mutation`]: independent per-gene resets
//! - [`shuffle_indexes_mutation`]: independent per-position swaps
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Cicirello & Smith (2000), "Modeling GA performance for control parameter
//!   optimization"

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover: pick a cut in `[1, n-1]` and exchange the tails.
///
/// Afterwards `a = a[..cut] + b[cut..]` and `b = b[..cut] + a[cut..]`.
/// Sequences shorter than 2 have no valid cut and are left untouched.
///
/// # Panics
/// Panics if the sequences have different lengths.
pub fn one_point_crossover<T, R: Rng>(a: &mut [T], b: &mut [T], rng: &mut R) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");
    if n < 2 {
        return;
    }
    let cut = rng.random_range(1..n);
    a[cut..].swap_with_slice(&mut b[cut..]);
}

/// Uniform Partially Matched Crossover (UPMX) for permutations of `0..n`.
///
/// Each position is independently selected with probability `indpb`. At a
/// selected position the two values are exchanged in both parents, and the
/// value that was overwritten is moved to where the incoming value used to
/// be. Both sequences stay permutations after every step.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths or are not permutations
/// of `0..n`.
pub fn uniform_pmx_crossover<R: Rng>(a: &mut [usize], b: &mut [usize], indpb: f64, rng: &mut R) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");

    // pos_a[v] is the index of value v in `a`
    let mut pos_a = vec![0usize; n];
    let mut pos_b = vec![0usize; n];
    for i in 0..n {
        pos_a[a[i]] = i;
        pos_b[b[i]] = i;
    }

    for i in 0..n {
        if rng.random_range(0.0..1.0) < indpb {
            let va = a[i];
            let vb = b[i];

            a.swap(i, pos_a[vb]);
            b.swap(i, pos_b[va]);

            pos_a.swap(va, vb);
            pos_b.swap(va, vb);
        }
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips each bit independently with probability `indpb`.
///
/// Returns the number of flipped bits.
pub fn flip_bit_mutation<R: Rng>(bits: &mut [bool], indpb: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for bit in bits.iter_mut() {
        if rng.random_range(0.0..1.0) < indpb {
            *bit = !*bit;
            flipped += 1;
        }
    }
    flipped
}

/// Resets each gene independently, with probability `indpb`, to a uniform
/// value in `low..=high`.
pub fn uniform_int_mutation<R: Rng>(
    genes: &mut [usize],
    low: usize,
    high: usize,
    indpb: f64,
    rng: &mut R,
) {
    for gene in genes.iter_mut() {
        if rng.random_range(0.0..1.0) < indpb {
            *gene = rng.random_range(low..=high);
        }
    }
}

/// Swaps each position, with probability `indpb`, with a different
/// uniformly chosen position. Preserves permutation validity.
///
/// Sequences shorter than 2 are left untouched.
pub fn shuffle_indexes_mutation<T, R: Rng>(genes: &mut [T], indpb: f64, rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        if rng.random_range(0.0..1.0) < indpb {
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            genes.swap(i, j);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use rand::seq::SliceRandom;
    use std::collections::HashSet;

    /// Check that a slice is a valid permutation of 0..n.
    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let set: HashSet<usize> = perm.iter().copied().collect();
        set.len() == n && perm.iter().all(|&v| v < n)
    }

    // ---- One-point crossover ----

    #[test]
    fn test_one_point_exchanges_tails() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut a = vec![0u8; 6];
            let mut b = vec![1u8; 6];
            one_point_crossover(&mut a, &mut b, &mut rng);

            let cut = a.iter().position(|&v| v == 1).expect("cut must be < n");
            assert!((1..6).contains(&cut), "cut {cut} out of [1, 5]");
            assert!(a[..cut].iter().all(|&v| v == 0));
            assert!(a[cut..].iter().all(|&v| v == 1));
            assert!(b[..cut].iter().all(|&v| v == 1));
            assert!(b[cut..].iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn test_one_point_short_sequences_untouched() {
        let mut rng = create_rng(42);
        let mut a = vec![3usize];
        let mut b = vec![7usize];
        one_point_crossover(&mut a, &mut b, &mut rng);
        assert_eq!((a, b), (vec![3], vec![7]));

        let mut a: Vec<bool> = vec![];
        let mut b: Vec<bool> = vec![];
        one_point_crossover(&mut a, &mut b, &mut rng);
        assert!(a.is_empty() && b.is_empty());
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_one_point_length_mismatch_panics() {
        let mut rng = create_rng(42);
        one_point_crossover(&mut [0, 1, 2], &mut [0, 1], &mut rng);
    }

    // ---- Uniform PMX ----

    #[test]
    fn test_upmx_produces_valid_permutations() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut a = vec![0, 1, 2, 3, 4, 5, 6, 7];
            let mut b = vec![3, 7, 5, 1, 6, 0, 2, 4];
            uniform_pmx_crossover(&mut a, &mut b, 0.5, &mut rng);
            assert!(is_valid_permutation(&a, 8), "UPMX child a not valid: {a:?}");
            assert!(is_valid_permutation(&b, 8), "UPMX child b not valid: {b:?}");
        }
    }

    #[test]
    fn test_upmx_zero_probability_is_identity() {
        let mut rng = create_rng(42);
        let mut a = vec![0, 1, 2, 3];
        let mut b = vec![3, 2, 1, 0];
        uniform_pmx_crossover(&mut a, &mut b, 0.0, &mut rng);
        assert_eq!(a, vec![0, 1, 2, 3]);
        assert_eq!(b, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_upmx_full_probability_follows_mapping() {
        // Every position selected, so the result is deterministic.
        let mut rng = create_rng(42);
        let mut a = vec![0, 1, 2];
        let mut b = vec![1, 2, 0];
        uniform_pmx_crossover(&mut a, &mut b, 1.0, &mut rng);
        // i=0: va=0 vb=1 -> a=[1,0,2], b=[0,2,1]
        // i=1: va=0 vb=2 -> a=[1,2,0], b=[2,0,1]
        // i=2: va=0 vb=1 -> a=[0,2,1], b=[2,1,0]
        assert_eq!(a, vec![0, 2, 1]);
        assert_eq!(b, vec![2, 1, 0]);
    }

    #[test]
    fn test_upmx_identical_parents() {
        let mut rng = create_rng(42);
        let mut a = vec![2, 0, 3, 1];
        let mut b = a.clone();
        uniform_pmx_crossover(&mut a, &mut b, 1.0, &mut rng);
        assert_eq!(a, vec![2, 0, 3, 1]);
        assert_eq!(b, vec![2, 0, 3, 1]);
    }

    proptest! {
        #[test]
        fn prop_upmx_preserves_permutations(
            n in 1usize..40,
            seed in any::<u64>(),
            indpb in 0.0f64..=1.0,
        ) {
            let mut rng = create_rng(seed);
            let mut a: Vec<usize> = (0..n).collect();
            let mut b: Vec<usize> = (0..n).collect();
            a.shuffle(&mut rng);
            b.shuffle(&mut rng);

            uniform_pmx_crossover(&mut a, &mut b, indpb, &mut rng);

            prop_assert!(is_valid_permutation(&a, n));
            prop_assert!(is_valid_permutation(&b, n));
        }

        #[test]
        fn prop_shuffle_preserves_permutation(
            n in 0usize..40,
            seed in any::<u64>(),
            indpb in 0.0f64..=1.0,
        ) {
            let mut rng = create_rng(seed);
            let mut perm: Vec<usize> = (0..n).collect();
            perm.shuffle(&mut rng);
            shuffle_indexes_mutation(&mut perm, indpb, &mut rng);
            prop_assert!(is_valid_permutation(&perm, n));
        }
    }

    // ---- Flip bit ----

    #[test]
    fn test_flip_bit_extremes() {
        let mut rng = create_rng(42);
        let mut bits = vec![true, false, true];
        assert_eq!(flip_bit_mutation(&mut bits, 0.0, &mut rng), 0);
        assert_eq!(bits, vec![true, false, true]);

        assert_eq!(flip_bit_mutation(&mut bits, 1.0, &mut rng), 3);
        assert_eq!(bits, vec![false, true, false]);
    }

    #[test]
    fn test_flip_bit_rate() {
        let mut rng = create_rng(7);
        let mut bits = vec![false; 10_000];
        let flipped = flip_bit_mutation(&mut bits, 0.1, &mut rng);
        assert!((800..1200).contains(&flipped), "flipped {flipped}");
        assert_eq!(bits.iter().filter(|&&b| b).count(), flipped);
    }

    // ---- Uniform int ----

    #[test]
    fn test_uniform_int_stays_in_range() {
        let mut rng = create_rng(42);
        let mut genes = vec![0usize; 200];
        uniform_int_mutation(&mut genes, 0, 4, 1.0, &mut rng);
        assert!(genes.iter().all(|&g| g <= 4));
        assert!(genes.iter().any(|&g| g != 0));
    }

    #[test]
    fn test_uniform_int_zero_probability() {
        let mut rng = create_rng(42);
        let mut genes = vec![1usize, 2, 3];
        uniform_int_mutation(&mut genes, 0, 9, 0.0, &mut rng);
        assert_eq!(genes, vec![1, 2, 3]);
    }

    // ---- Shuffle indexes ----

    #[test]
    fn test_shuffle_never_swaps_with_itself() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut genes = vec![0usize, 1];
            shuffle_indexes_mutation(&mut genes, 1.0, &mut rng);
            // Two forced swaps on two positions restore the starting order.
            assert_eq!(genes, vec![0, 1]);
        }
    }

    #[test]
    fn test_shuffle_single_element() {
        let mut rng = create_rng(42);
        let mut genes = vec![0usize];
        shuffle_indexes_mutation(&mut genes, 1.0, &mut rng);
        assert_eq!(genes, vec![0]);
    }
}
