use stralgo::analyze::{
    count_sort, has_duplicates, has_duplicates_ignore_case, is_palindrome,
    is_palindrome_ignore_case, is_permutation, is_permutation_ignore_case, reverse, sort,
    write_char_counts, FreqTable,
};
use stralgo::Error;

#[test]
fn test_freq_table_counts() {
    let table = FreqTable::from_bytes(b"hello");
    assert_eq!(table.count(b'l'), 2);
    assert_eq!(table.count(b'h'), 1);
    assert_eq!(table.count(b'z'), 0);
}

#[test]
fn test_freq_table_sum_equals_length() {
    let input = b"the quick brown fox";
    let table = FreqTable::from_bytes(input);
    let total: usize = table.non_zero().map(|(_, count)| count).sum();
    assert_eq!(total, input.len());
}

#[test]
fn test_freq_table_non_zero_ascending() {
    let table = FreqTable::from_bytes(b"cba");
    let pairs: Vec<(u8, usize)> = table.non_zero().collect();
    assert_eq!(pairs, vec![(b'a', 1), (b'b', 1), (b'c', 1)]);
}

#[test]
fn test_freq_table_folded() {
    let table = FreqTable::from_bytes_folded(b"AaBb");
    assert_eq!(table.count(b'a'), 2);
    assert_eq!(table.count(b'b'), 2);
    assert_eq!(table.count(b'A'), 0);
}

#[test]
fn test_count_sort_orders_ascending() {
    let mut buf = *b"dcba";
    count_sort(&mut buf);
    assert_eq!(&buf, b"abcd");
}

#[test]
fn test_count_sort_idempotent() {
    let mut once = *b"mississippi";
    count_sort(&mut once);
    let mut twice = once;
    count_sort(&mut twice);
    assert_eq!(once, twice);
    assert!(once.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_count_sort_empty_and_single() {
    let mut empty: [u8; 0] = [];
    count_sort(&mut empty);
    let mut single = *b"x";
    count_sort(&mut single);
    assert_eq!(&single, b"x");
}

#[test]
fn test_sort_matches_count_sort() {
    let mut a = *b"the quick brown fox";
    let mut b = a;
    sort(&mut a);
    count_sort(&mut b);
    assert_eq!(a, b);
}

#[test]
fn test_sort_already_sorted() {
    let mut buf = *b"abcde";
    sort(&mut buf);
    assert_eq!(&buf, b"abcde");
}

#[test]
fn test_write_char_counts_format() {
    let mut out: Vec<u8> = Vec::new();
    write_char_counts(b"aba", &mut out).unwrap();
    assert_eq!(out, b"a: 2\nb: 1\n");
}

#[test]
fn test_write_char_counts_empty_input() {
    let mut out: Vec<u8> = Vec::new();
    let err = write_char_counts(b"", &mut out).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_has_duplicates() {
    assert!(has_duplicates(b"hello"));
    assert!(!has_duplicates(b"world"));
    assert!(!has_duplicates(b""));
    assert!(!has_duplicates(b"a"));
}

#[test]
fn test_has_duplicates_ignore_case() {
    assert!(!has_duplicates(b"Aa"));
    assert!(has_duplicates_ignore_case(b"Aa"));
}

#[test]
fn test_is_permutation() {
    assert!(is_permutation(b"listen", b"silent"));
    assert!(is_permutation(b"", b""));
    assert!(!is_permutation(b"abc", b"abd"));
}

#[test]
fn test_is_permutation_length_mismatch() {
    assert!(!is_permutation(b"abc", b"abcd"));
    assert!(!is_permutation(b"abcd", b"abc"));
}

#[test]
fn test_is_permutation_multiset_not_set() {
    // Same distinct bytes, different multiplicities
    assert!(!is_permutation(b"aab", b"abb"));
}

#[test]
fn test_is_permutation_ignore_case() {
    assert!(!is_permutation(b"Listen", b"Silent"));
    assert!(is_permutation_ignore_case(b"Listen", b"Silent"));
}

#[test]
fn test_reverse() {
    let mut buf = *b"abcde";
    reverse(&mut buf);
    assert_eq!(&buf, b"edcba");
}

#[test]
fn test_double_reverse_is_identity() {
    let original = *b"some text here";
    let mut buf = original;
    reverse(&mut buf);
    reverse(&mut buf);
    assert_eq!(buf, original);
}

#[test]
fn test_reverse_degenerate_lengths() {
    let mut empty: [u8; 0] = [];
    reverse(&mut empty);
    let mut single = *b"x";
    reverse(&mut single);
    assert_eq!(&single, b"x");
}

#[test]
fn test_is_palindrome() {
    assert!(is_palindrome(b"racecar"));
    assert!(is_palindrome(b"abba"));
    assert!(!is_palindrome(b"hello"));
}

#[test]
fn test_is_palindrome_degenerate_lengths() {
    assert!(is_palindrome(b""));
    assert!(is_palindrome(b"x"));
}

#[test]
fn test_is_palindrome_ignore_case() {
    assert!(!is_palindrome(b"Abba"));
    assert!(is_palindrome_ignore_case(b"Abba"));
    assert!(is_palindrome_ignore_case(b"RaceCar"));
}
