use std::fmt::Debug;

use eyre::{eyre, Result};
use itertools::Itertools;

use fuzzydiff_alignment_rs::pairwise::scoring::{CaseInsensitive, Comparator, Equality};
use fuzzydiff_alignment_rs::pairwise::{self, Alignment, Config, Engine, Op, Segment};
use fuzzydiff_alignment_rs::Alignable;

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Check every property a fuzzy alignment must hold for the given inputs.
fn ensure_invariants<T: PartialEq + Debug>(seq1: &[T], seq2: &[T], alignment: &Alignment<f64>) {
    // Segments reconstruct both sequences
    let mut restored1 = Vec::new();
    let mut restored2 = Vec::new();
    for segment in alignment {
        restored1.extend(segment.slice1(seq1));
        restored2.extend(segment.slice2(seq2));
    }
    assert_eq!(restored1, seq1.iter().collect::<Vec<_>>());
    assert_eq!(restored2, seq2.iter().collect::<Vec<_>>());
    assert_eq!(alignment.seq1_len(), seq1.len());
    assert_eq!(alignment.seq2_len(), seq2.len());

    // Runs are maximal and valid
    for (prev, next) in alignment.iter().tuple_windows() {
        assert_ne!(prev.q(), next.q(), "{alignment:?}");
    }
    for segment in alignment {
        assert!(*segment.q() >= 0.0 && *segment.q() <= 1.0);
        assert_eq!(segment.op().is_diagonal(), *segment.q() > 0.0);
        if *segment.q() > 0.0 {
            assert_eq!(segment.seq1().len(), segment.seq2().len());
        }
    }
    assert_eq!(parse_rle(&alignment.rle()), expected_rle(alignment));
    // Round-trip through the validating constructor
    let copy = Alignment::new(*alignment.score(), alignment.segments().clone()).unwrap();
    assert_eq!(&copy, alignment);

    // Score is exactly the sum of similarities along the path
    assert_eq!(alignment.accumulated(), *alignment.score());
    assert!(*alignment.score() >= 0.0);
    assert!(*alignment.score() <= seq1.len().min(seq2.len()) as f64);
}

fn parse_rle(rle: &str) -> Vec<(usize, Op)> {
    let mut result = Vec::new();
    let mut digits = String::new();
    for symbol in rle.chars() {
        if symbol.is_ascii_digit() {
            digits.push(symbol);
        } else {
            let op = Op::try_from(symbol).unwrap_or_else(|_| panic!("Unknown op {symbol} in {rle}"));
            result.push((digits.parse().unwrap(), op));
            digits.clear();
        }
    }
    assert!(digits.is_empty(), "Dangling length in {rle}");
    result
}

fn expected_rle(alignment: &Alignment<f64>) -> Vec<(usize, Op)> {
    alignment
        .iter()
        .flat_map(|segment| match segment.op() {
            Op::Mismatch if segment.seq1().len() != segment.seq2().len() => vec![
                (segment.seq2().len(), Op::GapFirst),
                (segment.seq1().len(), Op::GapSecond),
            ],
            op => vec![(segment.len(), op)],
        })
        .collect()
}

/// Exhaustive search over all monotonic paths.
fn brute_force(seq1: &[char], seq2: &[char], cmp: &CaseInsensitive<f64>) -> f64 {
    if seq1.is_empty() || seq2.is_empty() {
        return 0.0;
    }
    let (last1, last2) = (seq1.len() - 1, seq2.len() - 1);

    let mut best = brute_force(&seq1[..last1], seq2, cmp).max(brute_force(seq1, &seq2[..last2], cmp));
    let q = cmp.compare(&seq1[last1], &seq2[last2]);
    if q > 0.0 {
        best = best.max(brute_force(&seq1[..last1], &seq2[..last2], cmp) + q);
    }
    best
}

struct Workload<'a> {
    seq1: &'a str,
    seq2: &'a str,
    fuzziness: f64,
    score: f64,
    segments: Vec<(f64, &'a str, &'a str)>,
    rle: &'a str,
}

fn ensure(w: Workload<'_>) {
    let (seq1, seq2) = (chars(w.seq1), chars(w.seq2));
    let alignment = pairwise::align(&seq1, &seq2, CaseInsensitive::new(w.fuzziness));

    ensure_invariants(&seq1, &seq2, &alignment);
    assert_eq!(*alignment.score(), w.score);
    assert_eq!(alignment.rle(), w.rle);

    let segments = alignment
        .iter()
        .map(|x| {
            (
                *x.q(),
                x.slice1(&seq1).iter().collect::<String>(),
                x.slice2(&seq2).iter().collect::<String>(),
            )
        })
        .collect_vec();
    let expected = w
        .segments
        .iter()
        .map(|(q, a, b)| (*q, a.to_string(), b.to_string()))
        .collect_vec();
    assert_eq!(segments, expected);

    assert_eq!(pairwise::score(&seq1, &seq2, CaseInsensitive::new(w.fuzziness)), w.score);
}

#[test]
fn test_empty() {
    ensure(Workload {
        seq1: "",
        seq2: "",
        fuzziness: 0.0,
        score: 0.0,
        segments: vec![],
        rle: "",
    });
    ensure(Workload {
        seq1: "abc",
        seq2: "",
        fuzziness: 0.5,
        score: 0.0,
        segments: vec![(0.0, "abc", "")],
        rle: "3^",
    });
    ensure(Workload {
        seq1: "",
        seq2: "abc",
        fuzziness: 0.5,
        score: 0.0,
        segments: vec![(0.0, "", "abc")],
        rle: "3v",
    });
}

#[test]
fn test_binary() {
    // Case mismatch is not a match at all
    ensure(Workload {
        seq1: "z",
        seq2: "Z",
        fuzziness: 0.0,
        score: 0.0,
        segments: vec![(0.0, "z", "Z")],
        rle: "1X",
    });
    // Nothing in common: one run that consumes both sides
    ensure(Workload {
        seq1: "ab",
        seq2: "xyz",
        fuzziness: 0.0,
        score: 0.0,
        segments: vec![(0.0, "ab", "xyz")],
        rle: "3v2^",
    });
    ensure(Workload {
        seq1: "kitten",
        seq2: "sitting",
        fuzziness: 0.0,
        score: 4.0,
        segments: vec![
            (0.0, "k", "s"),
            (1.0, "itt", "itt"),
            (0.0, "e", "i"),
            (1.0, "n", "n"),
            (0.0, "", "g"),
        ],
        rle: "1X3=1X1=1v",
    });
    ensure(Workload {
        seq1: "ACGTTA",
        seq2: "AGTA",
        fuzziness: 0.0,
        score: 4.0,
        segments: vec![
            (1.0, "A", "A"),
            (0.0, "C", ""),
            (1.0, "GT", "GT"),
            (0.0, "T", ""),
            (1.0, "A", "A"),
        ],
        rle: "1=1^2=1^1=",
    });
}

#[test]
fn test_fuzziness() {
    // A single exact match beats two weak fuzzy matches
    for fuzziness in [0.25, 0.5] {
        ensure(Workload {
            seq1: "zZ",
            seq2: "Zz",
            fuzziness,
            score: 1.0,
            segments: vec![(0.0, "", "Z"), (1.0, "z", "z"), (0.0, "Z", "")],
            rle: "1v1=1^",
        });
    }

    // ...but not two strong ones
    ensure(Workload {
        seq1: "zZ",
        seq2: "Zz",
        fuzziness: 0.75,
        score: 1.5,
        segments: vec![(0.75, "zZ", "Zz")],
        rle: "2~",
    });
}

#[test]
fn test_sentence() {
    ensure(Workload {
        seq1: "Hello, hello, world!",
        seq2: "HELLO WORLD",
        fuzziness: 0.75,
        score: 8.75,
        segments: vec![
            (1.0, "H", "H"),
            (0.75, "ello", "ELLO"),
            (0.0, ",", ""),
            (1.0, " ", " "),
            (0.0, "hello, ", ""),
            (0.75, "world", "WORLD"),
            (0.0, "!", ""),
        ],
        rle: "1=4~1^1=7^5~1^",
    });
}

#[test]
fn test_min_similarity() {
    let (seq1, seq2) = (chars("abc"), chars("ABC"));

    let mut engine = Engine::new(CaseInsensitive::new(0.5));
    let alignment = engine.align(&seq1, &seq2);
    assert_eq!(*alignment.score(), 1.5);
    assert_eq!(alignment.rle(), "3~");

    // Similarity must be strictly above the threshold to form a match
    engine.with_config(Config::new(0.5).unwrap());
    let alignment = engine.align(&seq1, &seq2);
    ensure_invariants(&seq1, &seq2, &alignment);
    assert_eq!(*alignment.score(), 0.0);
    assert_eq!(
        alignment.segments(),
        &vec![Segment::new(0.0, 0..3, 0..3).unwrap()]
    );
    assert_eq!(alignment.segments()[0].op(), Op::Mismatch);

    assert!(Config::new(1.0).is_err());
    assert!(Config::new(-0.1).is_err());
}

#[test]
fn test_closure_comparator() {
    // Digits are similar if they are close to each other
    let seq1: &[u8] = &[1, 5, 9, 3];
    let seq2: &[u8] = &[2, 5, 3];
    let cmp = |a: &u8, b: &u8| -> f64 {
        match a.abs_diff(*b) {
            0 => 1.0,
            1 => 0.5,
            _ => 0.0,
        }
    };

    let alignment = pairwise::align(&seq1, &seq2, cmp);
    ensure_invariants(seq1, seq2, &alignment);
    assert_eq!(*alignment.score(), 2.5);
    assert_eq!(alignment.rle(), "1~1=1^1=");
    assert_eq!(pairwise::score(&seq1, &seq2, cmp), 2.5);
}

#[test]
fn test_try_align() -> Result<()> {
    let seq1 = chars("abcd");
    let seq2 = chars("abd");

    let exact = |a: &char, b: &char| -> Result<f64> { Ok(if a == b { 1.0 } else { 0.0 }) };
    let alignment = pairwise::try_align(&seq1, &seq2, exact)?;
    ensure_invariants(&seq1, &seq2, &alignment);
    assert_eq!(alignment.rle(), "2=1^1=");
    assert_eq!(
        alignment,
        pairwise::align(&seq1, &seq2, Equality::<f64>::default())
    );

    let failing = |a: &char, _: &char| -> Result<f64> {
        if *a == 'c' {
            Err(eyre!("Symbol {a} can't be compared"))
        } else {
            Ok(0.0)
        }
    };
    let error = pairwise::try_align(&seq1, &seq2, failing).unwrap_err();
    assert_eq!(error.to_string(), "Symbol c can't be compared");
    Ok(())
}

#[test]
fn test_symmetry() {
    let cmp = CaseInsensitive::new(0.5);
    let workload = [
        ("Hello, hello, world!", "HELLO WORLD"),
        ("kitten", "sitting"),
        ("aAbBa", "BabA"),
        ("zZ", "Zz"),
    ];

    for (seq1, seq2) in workload {
        let (seq1, seq2) = (chars(seq1), chars(seq2));
        let forward = pairwise::score(&seq1, &seq2, cmp);

        // Swapped arguments
        let swapped = pairwise::align(&seq2, &seq1, cmp);
        ensure_invariants(&seq2, &seq1, &swapped);
        assert_eq!(*swapped.score(), forward);

        // Both sequences read backwards
        let reversed = pairwise::align(&seq1.reversed(), &seq2.reversed(), cmp);
        assert_eq!(*reversed.score(), forward);
        assert_eq!(reversed.seq1_len(), seq1.len());
        assert_eq!(reversed.seq2_len(), seq2.len());
    }
}

#[test]
fn test_exhaustive() {
    let alphabet = ['a', 'A', 'b'];
    let mut engine = Engine::new(CaseInsensitive::new(0.5));

    let mut sequences = vec![vec![]];
    for len in 1..=3 {
        sequences.extend((0..len).map(|_| alphabet).multi_cartesian_product());
    }
    assert_eq!(sequences.len(), 1 + 3 + 9 + 27);

    for seq1 in &sequences {
        for seq2 in &sequences {
            let alignment = engine.align(seq1, seq2);
            ensure_invariants(seq1, seq2, &alignment);

            let expected = brute_force(seq1, seq2, engine.comparator());
            assert_eq!(*alignment.score(), expected, "{seq1:?} vs {seq2:?}");
            assert_eq!(engine.score(seq1, seq2), expected);
        }
    }
}
