use indoc::indoc;
use text_index::{IndexError, SuffixTree};

#[test]
fn build_rejects_empty_input() {
    assert!(matches!(
        SuffixTree::build(b"", b'$'),
        Err(IndexError::InvalidInput { .. })
    ));
}

#[test]
fn build_rejects_sentinel_collision() {
    assert!(matches!(
        SuffixTree::build(b"mississippi", b'i'),
        Err(IndexError::InvalidInput { .. })
    ));
}

#[test]
fn sentinel_is_appended_to_the_text() {
    let tree = SuffixTree::build(b"banana", 0).unwrap();
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.input(), b"banana");
    assert_eq!(tree.text(), b"banana\0");
    assert_eq!(tree.sentinel(), 0);
}

#[test]
fn longest_tandem_repeat_scenarios() {
    let cases: [(&[u8], (usize, usize)); 6] = [
        (b"banana", (1, 4)),      // anan, beats nana on start position
        (b"mississippi", (1, 6)), // ississ
        (b"abcabc", (0, 6)),
        (b"aaaa", (0, 4)),
        (b"a", (0, 0)),
        (b"ab", (0, 0)),
    ];
    for &(text, expected) in cases.iter() {
        let tree = SuffixTree::build(text, b'$').unwrap();
        assert_eq!(
            tree.longest_tandem_repeat(),
            expected,
            "text {:?}",
            std::str::from_utf8(text).unwrap()
        );
    }
}

#[test]
fn tandem_repeat_of_uniform_text() {
    for m in 1..=32 {
        let text = vec![b'a'; m];
        let tree = SuffixTree::build(&text, b'$').unwrap();
        assert_eq!(
            tree.longest_tandem_repeat(),
            (0, 2 * (m / 2)),
            "length {}",
            m
        );
    }
}

#[test]
fn tandem_repeat_result_is_a_repeat() {
    let tree = SuffixTree::build(b"xabcabcabcy", b'$').unwrap();
    let (start, length) = tree.longest_tandem_repeat();
    assert_eq!((start, length), (1, 6));
    let half = length / 2;
    assert_eq!(
        tree.substring(start, half),
        tree.substring(start + half, half)
    );
}

#[test]
fn top_k_of_abracadabra() {
    let tree = SuffixTree::build(b"abracadabra", b'$').unwrap();

    // `a` occurs five times; no byte occurs more often.
    assert_eq!(tree.top_k(1, 1).unwrap(), 0);
    assert_eq!(tree.substring(tree.top_k(1, 1).unwrap(), 1), b"a");

    // `abra` twice, every other length-4 substring once.
    assert_eq!(tree.top_k(4, 1).unwrap(), 0);
    assert_eq!(tree.substring(tree.top_k(4, 1).unwrap(), 4), b"abra");
}

#[test]
fn top_k_ranks_follow_count_then_lexicographic_order() {
    let tree = SuffixTree::build(b"abracadabra", b'$').unwrap();

    // Length-2 substrings: ab, br, ra occur twice; ac, ad, ca, da once.
    let expected: [&[u8]; 7] = [b"ab", b"br", b"ra", b"ac", b"ad", b"ca", b"da"];
    for (rank, substring) in expected.iter().enumerate() {
        let start = tree.top_k(2, rank + 1).unwrap();
        assert_eq!(tree.substring(start, 2), *substring, "rank {}", rank + 1);
    }

    // The last rank succeeds, one past it does not.
    assert!(tree.top_k(2, expected.len()).is_ok());
    assert_eq!(
        tree.top_k(2, expected.len() + 1),
        Err(IndexError::NotFound {
            k: 8,
            count: expected.len()
        })
    );
}

#[test]
fn top_k_length_bounds() {
    let tree = SuffixTree::build(b"banana", b'$').unwrap();
    assert_eq!(
        tree.top_k(0, 1),
        Err(IndexError::OutOfRange { len: 0, max: 7 })
    );
    assert_eq!(
        tree.top_k(7, 1),
        Err(IndexError::OutOfRange { len: 7, max: 7 })
    );
    assert_eq!(
        tree.top_k(42, 1),
        Err(IndexError::OutOfRange { len: 42, max: 7 })
    );
    // n - 1 is the longest valid query.
    assert_eq!(tree.top_k(6, 1).unwrap(), 0);
}

#[test]
fn queries_are_independent_and_repeatable() {
    let tree = SuffixTree::build(b"mississippi", b'$').unwrap();
    let first = tree.top_k(2, 1).unwrap();
    assert!(tree.top_k(200, 1).is_err());
    assert_eq!(tree.top_k(2, 1).unwrap(), first);
    assert_eq!(tree.longest_tandem_repeat(), (1, 6));
    assert_eq!(tree.longest_tandem_repeat(), (1, 6));
}

#[test]
fn suffix_array_is_in_lexicographic_order() {
    let tree = SuffixTree::build(b"mississippi", b'$').unwrap();
    let order = tree.suffix_array();
    assert_eq!(order.len(), tree.len());

    let text = tree.text();
    for pair in order.windows(2) {
        assert!(text[pair[0]..] < text[pair[1]..]);
    }
}

#[test]
fn pattern_lookup() {
    let tree = SuffixTree::build(b"mississippi", b'$').unwrap();
    assert!(tree.contains(b"issi"));
    assert!(tree.contains(b"ppi"));
    assert!(!tree.contains(b"sissy"));

    let start = tree.find(b"ssi").unwrap();
    assert_eq!(tree.substring(start, 3), b"ssi");
}

#[test]
fn pretty_print_small_tree() {
    let expected = indoc!(
        "┳$
         ┣ab┳$
         ┃  ┗ab$
         ┗b┳$
           ┗ab$"
    );

    let tree = SuffixTree::build(b"abab", b'$').unwrap();
    assert_eq!(tree.pretty_print(), expected);
}
