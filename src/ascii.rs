//! ASCII case folding and classification.
//!
//! Only the single-byte ASCII letter ranges `a..=z` and `A..=Z` participate
//! in folding; every other byte value passes through unchanged. Unicode case
//! folding and collation are out of scope.

/// Folds an ASCII uppercase letter to lowercase; other bytes pass through.
#[must_use]
pub fn to_lower(b: u8) -> u8 {
    if b.is_ascii_uppercase() {
        b | 0x20
    } else {
        b
    }
}

/// Folds an ASCII lowercase letter to uppercase; other bytes pass through.
#[must_use]
pub fn to_upper(b: u8) -> u8 {
    if b.is_ascii_lowercase() {
        b & !0x20
    } else {
        b
    }
}

#[must_use]
pub fn is_upper(b: u8) -> bool {
    b.is_ascii_uppercase()
}

#[must_use]
pub fn is_lower(b: u8) -> bool {
    b.is_ascii_lowercase()
}

#[must_use]
pub fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Uppercases every ASCII letter in the buffer in place.
pub fn make_upper(buf: &mut [u8]) {
    for b in buf {
        *b = to_upper(*b);
    }
}

/// Lowercases every ASCII letter in the buffer in place.
pub fn make_lower(buf: &mut [u8]) {
    for b in buf {
        *b = to_lower(*b);
    }
}
