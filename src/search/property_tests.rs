use proptest::prelude::*;
use std::collections::HashSet;

use super::distance::edit_distance;
use super::fuzzy::is_fuzzy_match;
use super::spelling::{generate_spelling_variants, get_top_spelling_corrections};
use super::stemmer::stem;
use super::tokenizer::{tokenize, MIN_TERM_LENGTH};

// Property test: stemming a stem changes nothing
proptest! {
    #[test]
    fn stem_is_idempotent(word in "[a-z]{0,14}") {
        let once = stem(&word);
        prop_assert_eq!(stem(&once), once);
    }

    #[test]
    fn stem_never_empties_a_word(word in "[a-z]{1,14}") {
        prop_assert!(!stem(&word).is_empty());
    }
}

// Property test: distance is a symmetric metric with the documented base cases
proptest! {
    #[test]
    fn distance_is_symmetric(a in "[a-zA-Z]{0,10}", b in "[a-zA-Z]{0,10}") {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn distance_to_self_is_zero(a in "\\PC{0,12}") {
        prop_assert_eq!(edit_distance(&a, &a), 0);
    }

    #[test]
    fn distance_from_empty_is_length(a in "\\PC{0,12}") {
        prop_assert_eq!(edit_distance("", &a), a.chars().count());
        prop_assert_eq!(edit_distance(&a, ""), a.chars().count());
    }

    #[test]
    fn distance_bounded_by_longer_length(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        let d = edit_distance(&a, &b);
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert!(d >= a.len().abs_diff(b.len()));
    }
}

// Property test: fuzzy matching is reflexive and symmetric
proptest! {
    #[test]
    fn fuzzy_match_reflexive(word in "[a-z]{1,10}") {
        prop_assert!(is_fuzzy_match(&word, &word));
    }

    #[test]
    fn fuzzy_match_symmetric(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        prop_assert_eq!(is_fuzzy_match(&a, &b), is_fuzzy_match(&b, &a));
    }

    #[test]
    fn three_letter_words_need_zero_edits(a in "[a-z]{3}", b in "[a-z]{3}") {
        if edit_distance(&a, &b) == 1 && !a.starts_with(&b) && stem(&a) != stem(&b) {
            prop_assert!(!is_fuzzy_match(&a, &b));
        }
    }
}

// Property test: tokens are clean and long enough
proptest! {
    #[test]
    fn tokens_are_normalized(query in "\\PC{0,40}") {
        for term in tokenize(Some(&query)) {
            prop_assert!(term.chars().count() >= MIN_TERM_LENGTH);
            prop_assert!(term.chars().all(char::is_alphanumeric));
        }
    }
}

// Property test: variants are unique, one edit away, and skip short words
proptest! {
    #[test]
    fn variants_unique_and_one_edit_away(word in "[a-z]{3,7}") {
        let variants = generate_spelling_variants(&word);
        let unique: HashSet<&String> = variants.iter().collect();
        prop_assert_eq!(unique.len(), variants.len());
        for variant in &variants {
            // an adjacent swap costs two in plain Levenshtein
            let d = edit_distance(&word, variant);
            prop_assert!(d == 1 || d == 2, "{} -> {} has distance {}", word, variant, d);
        }
    }

    #[test]
    fn short_words_have_no_variants(word in "[a-z]{0,2}") {
        prop_assert!(generate_spelling_variants(&word).is_empty());
    }

    #[test]
    fn one_edit_corruption_round_trips(
        word in "[a-z]{4,8}",
        pos in 0usize..8,
        letter in proptest::char::range('a', 'z'),
    ) {
        let mut corrupted: Vec<char> = word.chars().collect();
        let pos = pos % corrupted.len();
        corrupted[pos] = letter;
        let corrupted: String = corrupted.into_iter().collect();
        prop_assume!(corrupted != word);

        prop_assert!(generate_spelling_variants(&corrupted).contains(&word));
    }

    #[test]
    fn corrections_never_exceed_limit(word in "[a-z]{0,8}", limit in 0usize..20) {
        prop_assert!(get_top_spelling_corrections(&word, limit).len() <= limit);
    }
}
