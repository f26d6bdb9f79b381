//! Tournament selection.
//!
//! Selection builds the mating pool for each generation. All comparisons
//! assume **minimization** (fewer violations = better).
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Genome;
use rand::Rng;

/// Tournament selection: draw `size` individuals uniformly with
/// replacement and return the index of the best.
///
/// Ties keep the earliest drawn individual.
///
/// # Panics
/// Panics if `population` is empty. `size` must be at least 1, which
/// [`EvolutionConfig::validate`](super::EvolutionConfig::validate) enforces.
pub fn tournament<T, R: Rng>(population: &[Genome<T>], size: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    debug_assert!(size >= 1, "tournament size must be at least 1");
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..size {
        let idx = rng.random_range(0..n);
        if population[idx].rank_key() < population[best_idx].rank_key() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Builds a mating pool of `count` clones, each the winner of an
/// independent tournament. The same individual may be picked many times.
pub fn select_pool<T: Clone, R: Rng>(
    population: &[Genome<T>],
    count: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Vec<Genome<T>> {
    (0..count)
        .map(|_| population[tournament(population, tournament_size, rng)].clone())
        .collect()
}
