//! `stralgo`: byte-string algorithms over explicit-length buffers.
//!
//! The crate covers case conversion, comparison, bounded copy and
//! concatenation, substring search, exhaustive permutation generation, and
//! sorting/analysis primitives (counting sort, frequency tables, duplicate,
//! anagram and palindrome tests). Text is plain `&[u8]` / `&mut [u8]`; every
//! walk is bounds-checked, there are no sentinel terminators.
//!
//! All operations are synchronous and single-threaded. Each call owns its
//! working buffers exclusively for its duration; nothing is shared between
//! calls.
//!
//! # Buffer ownership
//!
//! The copy/concat family works on [`StrBuf`], a length-tracked view over a
//! buffer the caller provides and keeps ownership of. The crate never
//! allocates on the caller's behalf for these operations; a write that does
//! not fit fails with [`Error::BufferFull`]:
//!
//! ```
//! use stralgo::StrBuf;
//!
//! let mut storage = [0u8; 16];
//! let mut buf = StrBuf::new(&mut storage);
//!
//! buf.copy_from(b"hello").unwrap();
//! buf.concat(b", world").unwrap();
//! buf.push(b'!').unwrap();
//! assert_eq!(buf.as_slice(), b"hello, world!");
//!
//! assert!(buf.concat(b"this does not fit").is_err());
//! ```
//!
//! The search and permutation entry points manage their own output: the
//! match-location list is returned to the caller, and permutations are
//! written to any [`std::io::Write`] sink.
//!
//! # Search
//!
//! Substring search runs a small finite-state matcher per character. It
//! restarts on mismatch instead of using a failure function, so it is
//! O(n*m) in the worst case, but it finds every occurrence, overlapping
//! ones included:
//!
//! ```
//! use stralgo::search;
//!
//! assert_eq!(search::find(b"abcde", b"cd"), Some(2));
//! assert_eq!(search::find(b"abcde", b"xyz"), None);
//! assert_eq!(search::find_all(b"aaa", b"aa").unwrap(), vec![0, 1]);
//! ```
//!
//! # Permutations
//!
//! [`permute::permutate_all`] writes one permutation per line and returns
//! the count. Inputs with repeated bytes still produce each distinct
//! permutation exactly once:
//!
//! ```
//! use stralgo::permute;
//!
//! let mut out: Vec<u8> = Vec::new();
//! let count = permute::permutate_all(b"aab", &mut out).unwrap();
//! assert_eq!(count, 3);
//! ```

pub mod analyze;
pub mod ascii;
pub mod buf;
pub mod compare;
pub mod error;
pub mod permute;
pub mod search;

pub use analyze::FreqTable;
pub use buf::StrBuf;
pub use error::{Error, Result};
