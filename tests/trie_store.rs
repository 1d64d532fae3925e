use pattern_trie_rs::{CountTrie, IdTrie, Trie};
use std::collections::BTreeSet;

const WORDS: [&str; 4] = ["apple", "apply", "ape", "ample"];

fn as_set<I: IntoIterator<Item = String>>(words: I) -> BTreeSet<String> {
    words.into_iter().collect()
}

#[test]
fn trie_when_word_inserted_then_contains_it() {
    let trie = Trie::new();
    for word in WORDS {
        let next = trie.insert(word);
        assert!(next.contains(word));
        assert!(!trie.contains(word));
    }
}

#[test]
fn trie_when_word_only_a_path_then_does_not_contain_it() {
    let trie = Trie::from_words(WORDS);
    assert!(!trie.contains("ap"));
    assert!(!trie.contains("appl"));
    assert!(!trie.contains("apples"));
    assert!(!trie.contains("banana"));
    assert!(!trie.contains(""));
}

#[test]
fn trie_when_enumerated_then_returns_exactly_inserted_words() {
    let trie = Trie::from_words(WORDS);
    let expected: BTreeSet<String> = WORDS.iter().map(|w| w.to_string()).collect();

    assert_eq!(as_set(trie.words()), expected);
    assert_eq!(trie.words().count(), 4);
    assert_eq!(as_set(trie.prefix("")), expected);
}

#[test]
fn trie_when_enumerated_twice_then_order_is_stable() {
    let first: Vec<String> = Trie::from_words(WORDS).words().collect();
    let second: Vec<String> = Trie::from_words(WORDS.iter().rev()).words().collect();
    assert_eq!(first, second);
    assert_eq!(first, vec!["ample", "ape", "apple", "apply"]);
}

#[test]
fn trie_when_prefix_queried_then_returns_continuations() {
    let trie = Trie::from_words(WORDS);
    assert_eq!(
        as_set(trie.prefix("app")),
        as_set(["apple".to_string(), "apply".to_string()])
    );
    assert_eq!(trie.prefix("ape").collect::<Vec<_>>(), vec!["ape"]);
    assert_eq!(trie.prefix("b").count(), 0);
    assert_eq!(trie.prefix("apples").count(), 0);
}

#[test]
fn trie_when_word_inserted_into_old_version_then_versions_stay_independent() {
    let base = Trie::from_words(["root"]);
    let left = base.insert("left");
    let right = base.insert("right");

    assert!(left.contains("left") && !left.contains("right"));
    assert!(right.contains("right") && !right.contains("left"));
    assert_eq!(base.len(), 1);
    assert!(!base.same_version(&left));
    assert!(base.same_version(&base.clone()));
}

#[test]
fn trie_when_collected_from_iterator_then_behaves_like_from_words() {
    let trie: Trie = WORDS.iter().collect();
    assert_eq!(trie.len(), 4);
    assert!(trie.contains("ape"));
}

#[test]
fn count_trie_when_prefix_counted_then_matches_prefix_length() {
    let trie = CountTrie::from_words(["apple", "apply", "ape", "ample", "ap", "b", "apple"]);

    for prefix in ["", "a", "ap", "app", "appl", "apple", "am", "b", "c", "apples"] {
        assert_eq!(
            trie.prefix_count(prefix),
            trie.prefix(prefix).count(),
            "prefix {prefix:?}"
        );
    }
    assert_eq!(trie.prefix_count(""), 6);
    assert_eq!(trie.prefix_count("ap"), 4);
    assert_eq!(trie.prefix_count("zzz"), 0);
}

#[test]
fn count_trie_when_empty_then_counts_zero() {
    assert_eq!(CountTrie::new().prefix_count(""), 0);
}

#[test]
fn id_trie_when_word_inserted_then_lookup_returns_id() {
    let trie = IdTrie::new()
        .insert_with_id("apple", 0u32)
        .insert_with_id("ape", 2);

    assert_eq!(trie.lookup("apple"), Some(&0));
    assert_eq!(trie.lookup("ape"), Some(&2));
    assert_eq!(trie.lookup("ap"), None);
    assert_eq!(trie.lookup("missing"), None);
    assert!(trie.contains("apple"));
}

#[test]
fn id_trie_when_word_reinserted_then_last_id_wins() {
    let first = IdTrie::new().insert_with_id("word", "first");
    let second = first.insert_with_id("word", "second");

    assert_eq!(first.lookup("word"), Some(&"first"));
    assert_eq!(second.lookup("word"), Some(&"second"));
    assert_eq!(second.len(), 1);
}

#[test]
fn count_trie_when_every_prefix_counted_then_matches_prefix_length() {
    let words = [
        "apple", "apply", "ape", "ample", "ap", "b", "apple", "", "日本語", "日本", "banana",
    ];
    let trie = CountTrie::from_words(words);

    let mut prefixes: BTreeSet<String> = ["", "x", "apq", "日x", "bananas", "本"]
        .iter()
        .map(|p| p.to_string())
        .collect();
    for word in words {
        for (end, _) in word.char_indices().chain([(word.len(), ' ')]) {
            prefixes.insert(word[..end].to_string());
        }
    }

    for prefix in &prefixes {
        assert_eq!(
            trie.prefix_count(prefix),
            trie.prefix(prefix).count(),
            "prefix {prefix:?}"
        );
    }
    assert_eq!(trie.prefix_count(""), 10);
}

#[test]
fn trie_when_words_are_very_long_then_operations_complete() {
    let long = "ω".repeat(100_000);
    let longer = format!("{long}x");
    let trie = CountTrie::from_words([long.as_str(), longer.as_str(), "ω"]);

    assert!(trie.contains(&long));
    assert!(trie.contains(&longer));
    assert!(!trie.contains(&long[..long.len() - 2]));
    assert_eq!(trie.prefix_count(&long), 2);
    assert_eq!(trie.prefix(&long).count(), 2);
    assert_eq!(trie.words().count(), 3);

    let tagged = IdTrie::new().insert_with_id(&long, 11u16);
    assert_eq!(tagged.lookup(&long), Some(&11));
}
