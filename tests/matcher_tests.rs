use rstest::rstest;
use std::sync::Arc;
use steno_drill::matcher::{LiteralPrefixMatcher, MatchWord, Matcher, PrefixSetMatcher};

mod common;
use common::word_map;

fn lapwing_matcher() -> PrefixSetMatcher {
    PrefixSetMatcher::new(Arc::new(word_map(&[
        ("cats", &["cat", "cats"]),
        ("goodbye", &["good", "goodbye", "good by"]),
    ])))
}

#[rstest]
#[case("cats", "cat", true)]
#[case("cats", "cats", true)]
#[case("cats", "ca", false)] // Membership, not prefix
#[case("cats", "c", false)]
#[case("cats", "", false)]
#[case("goodbye", "good by", true)] // Ambiguous partial translation
#[case("goodbye", "good b", false)]
#[case("goodbye", "cat", false)] // Another word's entry doesn't leak
#[case("dogs", "dog", false)] // Missing from the word map
#[case("dogs", "dogs", false)]
fn test_prefix_set_matcher(#[case] expected: &str, #[case] typed: &str, #[case] ok: bool) {
    let m = lapwing_matcher();
    assert_eq!(
        m.match_word(expected, typed),
        ok,
        "expected='{}' typed='{}'",
        expected,
        typed
    );
}

#[rstest]
#[case("すし", "", true)]
#[case("すし", "す", true)]
#[case("すし", "すし", true)]
#[case("すし", "し", false)]
#[case("すし", "すしや", false)]
#[case("steno", "ste", true)]
#[case("steno", "Ste", false)] // Case-sensitive
#[case("steno", " ste", false)] // No trimming here
fn test_literal_prefix_matcher(#[case] expected: &str, #[case] typed: &str, #[case] ok: bool) {
    assert_eq!(LiteralPrefixMatcher.match_word(expected, typed), ok);
}

#[test]
fn test_prefix_set_is_exact_about_whitespace() {
    let m = lapwing_matcher();
    assert!(!m.match_word("cats", "cat "));
    assert!(!m.match_word("cats ", "cat"));
}

#[test]
fn test_matcher_enum_dispatches_to_strategy() {
    let prefix_set = Matcher::PrefixSet(lapwing_matcher());
    let literal = Matcher::LiteralPrefix(LiteralPrefixMatcher);

    // Same input, different verdicts
    assert!(!prefix_set.match_word("cats", "ca"));
    assert!(literal.match_word("cats", "ca"));

    assert!(prefix_set.match_word("goodbye", "good by"));
    assert!(!literal.match_word("goodbye", "good by"));
}

#[test]
fn test_matcher_as_trait_object() {
    let strategies: Vec<Box<dyn MatchWord>> =
        vec![Box::new(lapwing_matcher()), Box::new(LiteralPrefixMatcher)];
    let verdicts: Vec<bool> = strategies
        .iter()
        .map(|m| m.match_word("cats", "cat"))
        .collect();
    assert_eq!(verdicts, vec![true, true]);
}

#[test]
fn test_small_word_map_and_prefix_examples() {
    let lapwing = PrefixSetMatcher::new(Arc::new(word_map(&[("cat", &["ca", "c"])])));
    assert!(lapwing.match_word("cat", "c"));
    assert!(lapwing.match_word("cat", "ca"));
    assert!(!lapwing.match_word("cat", "x"));
    assert!(!lapwing.match_word("dog", "d"));

    assert!(LiteralPrefixMatcher.match_word("steno", "st"));
    assert!(!LiteralPrefixMatcher.match_word("steno", "sx"));
    assert!(LiteralPrefixMatcher.match_word("steno", ""));
}
