//! Board fitness model shared by all encodings.

use crate::ga::Violations;

/// Counts attacking pairs on a board given as one column per row.
///
/// A pair of rows `i < j` attacks diagonally when
/// `|i - j| == |col_i - col_j|`. With `count_columns`, two queens in the
/// same column also count; encodings that cannot repeat a column skip that
/// check.
pub fn count_violations(columns: &[usize], count_columns: bool) -> Violations {
    let n = columns.len();
    let mut violations = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let (ci, cj) = (columns[i], columns[j]);
            if (count_columns && ci == cj) || j - i == ci.abs_diff(cj) {
                violations += 1;
            }
        }
    }
    violations
}

/// Number of bits needed per queen: `ceil(log2(n))`, 0 for a single queen.
pub fn bits_per_queen(queens_amount: usize) -> usize {
    match queens_amount {
        0 | 1 => 0,
        n => (usize::BITS - (n - 1).leading_zeros()) as usize,
    }
}

/// Decodes the column of `row` from a packed bit string.
///
/// Bits are read least significant first, `bits[row * width + k]` weighing
/// `2^k`. Accumulation stops once the value reaches `queens_amount`, and the
/// term that made it reach it is taken back out. The result is therefore
/// always in `0..queens_amount`.
pub fn decode_packed_column(bits: &[bool], row: usize, queens_amount: usize, width: usize) -> usize {
    let start = row * width;
    let mut value = 0usize;
    let mut e = 0;

    while e < width && value < queens_amount {
        value += usize::from(bits[start + e]) << e;
        e += 1;
    }

    // `value` starts below `queens_amount`, so at least one term was added
    if value >= queens_amount {
        value -= usize::from(bits[start + e - 1]) << (e - 1);
    }

    value
}
