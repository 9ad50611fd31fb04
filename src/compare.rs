//! Ordinal and case-folded comparison of whole and partial byte strings.
//!
//! Every function returns the signed difference of the first differing byte
//! (after optional case folding), or zero when the inputs are equal up to the
//! compared length. A slice that ends before the other contributes a zero
//! byte at the missing position, so a proper prefix always compares less
//! than the longer string. No allocation is performed.

use crate::ascii;

fn no_fold(b: u8) -> u8 {
    b
}

fn byte_at(s: &[u8], i: usize) -> u8 {
    s.get(i).copied().unwrap_or(0)
}

fn compare_with(a: &[u8], b: &[u8], fold: fn(u8) -> u8) -> i32 {
    let mut i = 0;
    while i < a.len() && i < b.len() && fold(a[i]) == fold(b[i]) {
        i += 1;
    }
    i32::from(fold(byte_at(a, i))) - i32::from(fold(byte_at(b, i)))
}

fn compare_n_with(a: &[u8], b: &[u8], n: usize, fold: fn(u8) -> u8) -> i32 {
    // n == 0 compares exactly the first byte, same as n == 1
    let limit = n.max(1);
    let mut i = 0;
    while i + 1 < limit && i < a.len() && i < b.len() && fold(a[i]) == fold(b[i]) {
        i += 1;
    }
    i32::from(fold(byte_at(a, i))) - i32::from(fold(byte_at(b, i)))
}

/// Compares two byte strings.
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> i32 {
    compare_with(a, b, no_fold)
}

/// Compares two byte strings, folding ASCII case before each comparison.
#[must_use]
pub fn compare_ignore_case(a: &[u8], b: &[u8]) -> i32 {
    compare_with(a, b, ascii::to_lower)
}

/// Compares the first `n` bytes of two byte strings.
///
/// `n == 0` compares exactly the first byte; this is an explicit edge-case
/// policy, not a no-op.
#[must_use]
pub fn compare_n(a: &[u8], b: &[u8], n: usize) -> i32 {
    compare_n_with(a, b, n, no_fold)
}

/// Compares the first `n` bytes of two byte strings, folding ASCII case.
///
/// `n == 0` compares exactly the first byte, as in [`compare_n`].
#[must_use]
pub fn compare_n_ignore_case(a: &[u8], b: &[u8], n: usize) -> i32 {
    compare_n_with(a, b, n, ascii::to_lower)
}
