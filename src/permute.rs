//! Exhaustive permutation enumeration.
//!
//! [`permutate_all`] writes every distinct permutation of the input to a
//! sink, one per line, and returns the count. Two algorithms are selected
//! once, by a duplicate-detection pass: a swap/recurse/unswap enumeration
//! for inputs with all-distinct bytes (`n!` lines), and a pivot-based
//! enumeration for inputs with repeated bytes, which emits each multiset
//! permutation exactly once (`n!/prod(m_i!)` lines) without deduplication.
//!
//! Recursion depth is bounded by the input length.

use std::io::Write;

use crate::analyze;
use crate::error::{Error, Result};

/// Writes every distinct permutation of `input` to `sink` as
/// `"<permutation>\n"` and returns the number of lines written.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `input` is empty, and `Error::Io` if
/// a sink write fails.
pub fn permutate_all(input: &[u8], sink: &mut dyn Write) -> Result<usize> {
    if input.is_empty() {
        return Err(Error::InvalidArgument {
            reason: "permutation input is empty",
        });
    }
    let mut work = input.to_vec();
    let mut count = 0;
    if analyze::has_duplicates(input) {
        permutate_with_repeats(&mut work, 0, sink, &mut count)?;
    } else {
        let n = work.len();
        permutate_distinct(&mut work, n, sink, &mut count)?;
    }
    Ok(count)
}

fn emit(buf: &[u8], sink: &mut dyn Write, count: &mut usize) -> Result<()> {
    sink.write_all(buf)?;
    sink.write_all(b"\n")?;
    *count += 1;
    Ok(())
}

/// Enumeration for all-distinct inputs: fix the last position of the active
/// range to each byte in turn, recurse on the shortened range, and restore
/// the swap on every exit path.
fn permutate_distinct(
    buf: &mut [u8],
    n: usize,
    sink: &mut dyn Write,
    count: &mut usize,
) -> Result<()> {
    if n == 1 {
        return emit(buf, sink, count);
    }
    for i in 0..n {
        buf.swap(i, n - 1);
        let emitted = permutate_distinct(buf, n - 1, sink, count);
        buf.swap(i, n - 1);
        emitted?;
    }
    Ok(())
}

/// Position of the smallest byte in `range`.
fn min_pos(range: &[u8]) -> usize {
    let mut best = 0;
    for (i, &b) in range.iter().enumerate() {
        if b < range[best] {
            best = i;
        }
    }
    best
}

/// Position of the smallest byte in `range` strictly greater than `current`.
fn next_larger_pos(range: &[u8], current: u8) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &b) in range.iter().enumerate() {
        if b > current && best.map_or(true, |j| b < range[j]) {
            best = Some(i);
        }
    }
    best
}

/// Enumeration for inputs with repeated bytes. At each level only distinct
/// byte values become pivots, in increasing order: the smallest byte of the
/// active range `buf[start..]` is swapped to the front, the rest is
/// recursed, the swap is undone, and the next strictly larger value takes
/// over until none is left. Each multiset permutation is therefore visited
/// exactly once.
fn permutate_with_repeats(
    buf: &mut [u8],
    start: usize,
    sink: &mut dyn Write,
    count: &mut usize,
) -> Result<()> {
    if start == buf.len() {
        return emit(buf, sink, count);
    }
    let mut pivot_pos = start + min_pos(&buf[start..]);
    loop {
        let pivot = buf[pivot_pos];
        buf.swap(start, pivot_pos);
        let emitted = permutate_with_repeats(buf, start + 1, sink, count);
        buf.swap(start, pivot_pos);
        emitted?;
        match next_larger_pos(&buf[start..], pivot) {
            Some(rel) => pivot_pos = start + rel,
            None => break,
        }
    }
    Ok(())
}
