//! Per-generation statistics.

use super::types::Genome;

/// Statistics of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord {
    /// Generation index; 0 is the initial population.
    pub generation: usize,

    /// Number of fitness evaluations performed in this generation.
    pub nevals: usize,

    /// Lowest fitness in the population.
    pub min: usize,

    /// Mean fitness of the population.
    pub mean: f64,
}

impl GenerationRecord {
    /// Summarizes an evaluated population.
    ///
    /// Returns `None` for an empty population or one with stale genomes.
    pub fn from_population<T>(
        generation: usize,
        nevals: usize,
        population: &[Genome<T>],
    ) -> Option<Self> {
        let fitness: Vec<usize> = population
            .iter()
            .map(|g| g.fitness())
            .collect::<Option<_>>()?;
        let min = *fitness.iter().min()?;
        let mean = fitness.iter().sum::<usize>() as f64 / fitness.len() as f64;
        Some(Self {
            generation,
            nevals,
            min,
            mean,
        })
    }
}

/// Append-only sequence of [`GenerationRecord`]s, one per generation
/// including generation 0.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Logbook {
    records: Vec<GenerationRecord>,
}

impl Logbook {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, record: GenerationRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&GenerationRecord> {
        self.records.last()
    }

    /// The `min` column.
    pub fn min_values(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.min).collect()
    }

    /// The `mean` column.
    pub fn mean_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.mean).collect()
    }

    /// Total fitness evaluations across the run.
    pub fn total_evaluations(&self) -> usize {
        self.records.iter().map(|r| r.nevals).sum()
    }
}
