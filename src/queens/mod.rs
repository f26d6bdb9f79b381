//! N-Queens genotypes.
//!
//! Three encodings of the same board, each implementing [`Encoding`]:
//!
//! - [`BinaryEncoding`]: columns packed as `ceil(log2(n))`-bit groups
//! - [`IntegerEncoding`]: one column per row, repetition allowed
//! - [`PermutationEncoding`]: one distinct column per row
//!
//! Fitness is the number of attacking queen pairs; see [`count_violations`].
//! [`Variant`] bundles each encoding with its elitism policy.
//!
//! [`Encoding`]: crate::ga::Encoding

mod binary;
mod board;
mod integer;
mod permutation;
mod variant;

pub use binary::BinaryEncoding;
pub use board::{bits_per_queen, count_violations, decode_packed_column};
pub use integer::IntegerEncoding;
pub use permutation::PermutationEncoding;
pub use variant::{run_variant, Variant, VariantOutcome, PERMUTATION_ELITE_COUNT};
