//! Sorting and analysis primitives: frequency tables, counting and
//! comparison sorts, duplicate and anagram detection, reversal and the
//! palindrome test.

use std::io::Write;

use crate::ascii;
use crate::compare;
use crate::error::{Error, Result};

const BYTE_RANGE: usize = 256;

fn no_fold(b: u8) -> u8 {
    b
}

/// Occurrence counts for every possible byte value.
///
/// The sum of all counts equals the length of the counted input.
#[derive(Clone, PartialEq, Eq)]
pub struct FreqTable {
    counts: [usize; BYTE_RANGE],
}

impl FreqTable {
    fn with_fold(s: &[u8], fold: fn(u8) -> u8) -> Self {
        let mut counts = [0; BYTE_RANGE];
        for &b in s {
            counts[usize::from(fold(b))] += 1;
        }
        Self { counts }
    }

    /// Counts every byte of `s`.
    #[must_use]
    pub fn from_bytes(s: &[u8]) -> Self {
        Self::with_fold(s, no_fold)
    }

    /// Counts every byte of `s`, folding ASCII case first.
    #[must_use]
    pub fn from_bytes_folded(s: &[u8]) -> Self {
        Self::with_fold(s, ascii::to_lower)
    }

    /// Occurrence count for `byte`.
    #[must_use]
    pub fn count(&self, byte: u8) -> usize {
        self.counts[usize::from(byte)]
    }

    /// Iterates `(byte, count)` pairs for the non-zero buckets in ascending
    /// byte-value order.
    pub fn non_zero(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(value, &count)| {
                #[allow(clippy::cast_possible_truncation)]
                let byte = value as u8;
                (byte, count)
            })
    }
}

impl std::fmt::Debug for FreqTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.non_zero()).finish()
    }
}

/// Sorts the buffer in ascending byte order with a 256-bucket counting sort.
///
/// O(n + 256), idempotent. Bytes of equal value are indistinguishable, so
/// this is a value sort, not a stable record sort.
pub fn count_sort(buf: &mut [u8]) {
    let table = FreqTable::from_bytes(buf);
    let mut at = 0;
    for (byte, count) in table.non_zero() {
        buf[at..at + count].fill(byte);
        at += count;
    }
}

/// Sorts the buffer in ascending byte order with an adjacent-swap sort.
///
/// A pass that performs no swaps ends the sort, so already-sorted input is
/// read but never written. O(n) best case, O(n^2) worst case.
pub fn sort(buf: &mut [u8]) {
    let n = buf.len();
    for pass in 1..n {
        let mut swapped = false;
        for i in 0..n - pass {
            if buf[i] > buf[i + 1] {
                buf.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Writes one `"<char>: <count>\n"` line per non-zero bucket of `s`, in
/// ascending byte-value order.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `s` is empty, and `Error::Io` if a
/// sink write fails.
pub fn write_char_counts(s: &[u8], sink: &mut dyn Write) -> Result<()> {
    if s.is_empty() {
        return Err(Error::InvalidArgument {
            reason: "character report input is empty",
        });
    }
    let table = FreqTable::from_bytes(s);
    for (byte, count) in table.non_zero() {
        sink.write_all(&[byte])?;
        writeln!(sink, ": {count}")?;
    }
    Ok(())
}

fn has_duplicates_with(s: &[u8], fold: fn(u8) -> u8) -> bool {
    // 256-bit occurrence set, one word per 64 byte values
    let mut seen = [0u64; BYTE_RANGE / 64];
    for &b in s {
        let value = usize::from(fold(b));
        let mask = 1u64 << (value % 64);
        if seen[value / 64] & mask != 0 {
            return true;
        }
        seen[value / 64] |= mask;
    }
    false
}

/// Whether any byte value occurs more than once, short-circuiting at the
/// first repeat found scanning left to right.
#[must_use]
pub fn has_duplicates(s: &[u8]) -> bool {
    has_duplicates_with(s, no_fold)
}

/// Case-folded variant of [`has_duplicates`].
#[must_use]
pub fn has_duplicates_ignore_case(s: &[u8]) -> bool {
    has_duplicates_with(s, ascii::to_lower)
}

/// Whether `a` and `b` contain the same multiset of bytes.
///
/// A length mismatch is rejected before any counting.
#[must_use]
pub fn is_permutation(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && FreqTable::from_bytes(a) == FreqTable::from_bytes(b)
}

/// Case-folded variant of [`is_permutation`].
#[must_use]
pub fn is_permutation_ignore_case(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && FreqTable::from_bytes_folded(a) == FreqTable::from_bytes_folded(b)
}

/// Reverses the buffer in place.
pub fn reverse(buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }
    let mut i = 0;
    let mut j = buf.len() - 1;
    while i < j {
        buf.swap(i, j);
        i += 1;
        j -= 1;
    }
}

fn is_palindrome_with(s: &[u8], compare_n: fn(&[u8], &[u8], usize) -> i32) -> bool {
    if s.len() < 2 {
        return true;
    }
    let half = s.len() / 2;
    // Reverse the second half into scratch and compare against the first half
    let mut end = s[s.len() - half..].to_vec();
    reverse(&mut end);
    compare_n(&end, s, half) == 0
}

/// Whether the string reads the same forwards and backwards.
///
/// Length-0 and length-1 strings are always palindromes.
#[must_use]
pub fn is_palindrome(s: &[u8]) -> bool {
    is_palindrome_with(s, compare::compare_n)
}

/// Case-folded variant of [`is_palindrome`].
#[must_use]
pub fn is_palindrome_ignore_case(s: &[u8]) -> bool {
    is_palindrome_with(s, compare::compare_n_ignore_case)
}
