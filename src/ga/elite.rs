//! Hall of fame of the best genomes seen during a run.

use super::types::{Genome, Violations};

/// The top-K distinct genomes observed so far, best first.
///
/// Ordering is by fitness, with ties kept in the order they were recorded.
/// A genome equal to a current member is never stored twice. Members are
/// clones and never change after insertion.
#[derive(Debug, Clone)]
pub struct EliteSet<T> {
    capacity: usize,
    members: Vec<Genome<T>>,
}

impl<T: Clone + PartialEq> EliteSet<T> {
    /// Creates an empty set holding at most `capacity` genomes.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            members: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Genome<T>] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Genome<T>> {
        self.members
    }

    /// The best genome recorded so far.
    pub fn best(&self) -> Option<&Genome<T>> {
        self.members.first()
    }

    fn worst_fitness(&self) -> Option<Violations> {
        self.members.last().and_then(|g| g.fitness())
    }

    /// Offers every evaluated genome of `population` in order.
    ///
    /// A candidate enters if the set has room, or if it is strictly better
    /// than the current worst member, which it then evicts.
    pub fn update(&mut self, population: &[Genome<T>]) {
        if self.capacity == 0 {
            return;
        }
        for candidate in population {
            let Some(fitness) = candidate.fitness() else {
                continue;
            };
            let full = self.members.len() >= self.capacity;
            if full && self.worst_fitness().is_some_and(|worst| fitness >= worst) {
                continue;
            }
            if self.members.iter().any(|m| m.genes() == candidate.genes()) {
                continue;
            }
            if full {
                self.members.pop();
            }
            let pos = self
                .members
                .partition_point(|m| m.rank_key() <= fitness);
            self.members.insert(pos, candidate.clone());
        }
    }
}
