//! Substring search driven by a 3-state automaton.
//!
//! The matcher restarts the pattern pointer to zero on a failed attempt and
//! resumes the scan one past where the attempt began, so the worst case is
//! O(n*m) rather than the O(n+m) of a failure-function matcher. Complexity,
//! not correctness, is the limitation: all occurrences are found, including
//! overlapping ones.

use crate::ascii;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    Matching,
    Mismatch,
}

fn no_fold(b: u8) -> u8 {
    b
}

/// The first match of `pattern` at or after `from`, or `None`.
fn next_match(subject: &[u8], from: usize, pattern: &[u8], fold: fn(u8) -> u8) -> Option<usize> {
    if pattern.is_empty() {
        return None;
    }
    let mut state = State::Initial;
    let mut matched = 0;
    let mut idx = from;
    while idx < subject.len() && matched < pattern.len() {
        let hit = fold(subject[idx]) == fold(pattern[matched]);
        match state {
            State::Initial | State::Mismatch => {
                if hit {
                    matched += 1;
                    state = State::Matching;
                } else {
                    state = State::Mismatch;
                }
            }
            State::Matching => {
                if hit {
                    matched += 1;
                } else {
                    // Restart the attempt one position past where it began
                    idx -= matched;
                    matched = 0;
                    state = State::Mismatch;
                }
            }
        }
        idx += 1;
    }
    if matched == pattern.len() {
        Some(idx - matched)
    } else {
        None
    }
}

fn find_all_with(subject: &[u8], pattern: &[u8], fold: fn(u8) -> u8) -> Result<Vec<usize>> {
    let mut locations: Vec<usize> = Vec::new();
    let mut from = 0;
    while let Some(at) = next_match(subject, from, pattern, fold) {
        if locations.len() == locations.capacity() {
            // Amortized doubling, surfacing growth failure to the caller
            let additional = locations.capacity().max(5);
            locations
                .try_reserve(additional)
                .map_err(|_| Error::AllocationFailure {
                    requested: additional,
                })?;
        }
        locations.push(at);
        // Resume one past the match start so overlapping matches are found
        from = at + 1;
    }
    Ok(locations)
}

/// Finds the first occurrence of `pattern` in `subject`.
///
/// Returns the start offset, or `None` when `pattern` is empty or absent.
#[must_use]
pub fn find(subject: &[u8], pattern: &[u8]) -> Option<usize> {
    next_match(subject, 0, pattern, no_fold)
}

/// Finds the first occurrence of `pattern` in `subject`, folding ASCII case.
#[must_use]
pub fn find_ignore_case(subject: &[u8], pattern: &[u8]) -> Option<usize> {
    next_match(subject, 0, pattern, ascii::to_lower)
}

/// Finds every occurrence of `pattern` in `subject`, overlapping included.
///
/// Offsets are returned in left-to-right order. An empty pattern yields an
/// empty list.
///
/// # Errors
///
/// Returns `Error::AllocationFailure` if the location list cannot grow.
pub fn find_all(subject: &[u8], pattern: &[u8]) -> Result<Vec<usize>> {
    find_all_with(subject, pattern, no_fold)
}

/// Finds every occurrence of `pattern` in `subject`, folding ASCII case.
///
/// # Errors
///
/// Returns `Error::AllocationFailure` if the location list cannot grow.
pub fn find_all_ignore_case(subject: &[u8], pattern: &[u8]) -> Result<Vec<usize>> {
    find_all_with(subject, pattern, ascii::to_lower)
}

/// Finds the first occurrence of a single byte in `subject`.
#[must_use]
pub fn find_byte(subject: &[u8], byte: u8) -> Option<usize> {
    subject.iter().position(|&b| b == byte)
}

/// Finds the first occurrence of a single byte, folding ASCII case.
#[must_use]
pub fn find_byte_ignore_case(subject: &[u8], byte: u8) -> Option<usize> {
    let folded = ascii::to_lower(byte);
    subject.iter().position(|&b| ascii::to_lower(b) == folded)
}
