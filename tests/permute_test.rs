use std::collections::HashSet;

use stralgo::analyze::is_permutation;
use stralgo::permute::permutate_all;
use stralgo::Error;

fn collect_lines(input: &[u8]) -> (usize, Vec<Vec<u8>>) {
    let mut out: Vec<u8> = Vec::new();
    let count = permutate_all(input, &mut out).unwrap();
    let lines: Vec<Vec<u8>> = out
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .map(|line| line.to_vec())
        .collect();
    (count, lines)
}

#[test]
fn test_single_byte() {
    let (count, lines) = collect_lines(b"a");
    assert_eq!(count, 1);
    assert_eq!(lines, vec![b"a".to_vec()]);
}

#[test]
fn test_distinct_bytes_count_is_factorial() {
    let (count, lines) = collect_lines(b"abc");
    assert_eq!(count, 6);
    assert_eq!(lines.len(), 6);

    let unique: HashSet<&Vec<u8>> = lines.iter().collect();
    assert_eq!(unique.len(), 6);
    for line in &lines {
        assert!(is_permutation(line, b"abc"));
    }
}

#[test]
fn test_distinct_four_bytes() {
    let (count, lines) = collect_lines(b"abcd");
    assert_eq!(count, 24);
    let unique: HashSet<&Vec<u8>> = lines.iter().collect();
    assert_eq!(unique.len(), 24);
}

#[test]
fn test_repeated_bytes_exact_set() {
    // 3!/2! = 3 distinct arrangements, each exactly once
    let (count, lines) = collect_lines(b"aab");
    assert_eq!(count, 3);

    let got: HashSet<Vec<u8>> = lines.into_iter().collect();
    let want: HashSet<Vec<u8>> = [b"aab".to_vec(), b"aba".to_vec(), b"baa".to_vec()]
        .into_iter()
        .collect();
    assert_eq!(got, want);
}

#[test]
fn test_repeated_bytes_multinomial_count() {
    // "aabb": 4!/(2!*2!) = 6
    let (count, lines) = collect_lines(b"aabb");
    assert_eq!(count, 6);
    let unique: HashSet<&Vec<u8>> = lines.iter().collect();
    assert_eq!(unique.len(), 6);
    for line in &lines {
        assert!(is_permutation(line, b"aabb"));
    }
}

#[test]
fn test_all_bytes_equal() {
    let (count, lines) = collect_lines(b"aaaa");
    assert_eq!(count, 1);
    assert_eq!(lines, vec![b"aaaa".to_vec()]);
}

#[test]
fn test_empty_input_is_invalid() {
    let mut out: Vec<u8> = Vec::new();
    let err = permutate_all(b"", &mut out).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(out.is_empty());
}

#[test]
fn test_count_matches_emitted_lines() {
    let (count, lines) = collect_lines(b"abab");
    assert_eq!(count, lines.len());
}

#[test]
fn test_sink_write_failure_is_reported() {
    struct FailingSink;

    impl std::io::Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "sink broke"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = permutate_all(b"abc", &mut FailingSink).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
