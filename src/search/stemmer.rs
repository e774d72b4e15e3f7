//! Suffix-stripping stemmer
//!
//! A deliberately crude English stemmer: a short ordered rule table where the
//! first matching rule wins. It is not a linguistic stemmer; `running` becomes
//! `runn` and that is fine for matching purposes.

/// Words at or below this length are returned unchanged
const MIN_STEMMABLE_LENGTH: usize = 3;

/// One suffix rewrite. Fires when the word ends with `suffix`, is longer than
/// `longer_than` characters, and `guard` accepts the part before the suffix.
struct SuffixRule {
    suffix: &'static str,
    longer_than: usize,
    replacement: &'static str,
    guard: fn(&str) -> bool,
}

/// Rule order matters: overlapping suffixes (`-ies`/`-es`/`-s`) rely on it.
const RULES: &[SuffixRule] = &[
    // batteries -> battery
    SuffixRule {
        suffix: "ies",
        longer_than: 4,
        replacement: "y",
        guard: any_stem,
    },
    // peaches -> peach, boxes -> box
    SuffixRule {
        suffix: "es",
        longer_than: 3,
        replacement: "",
        guard: ends_in_sibilant,
    },
    // running -> runn
    SuffixRule {
        suffix: "ing",
        longer_than: 5,
        replacement: "",
        guard: any_stem,
    },
    // played -> play
    SuffixRule {
        suffix: "ed",
        longer_than: 4,
        replacement: "",
        guard: any_stem,
    },
    // pumps -> pump, but glass stays glass
    SuffixRule {
        suffix: "s",
        longer_than: 3,
        replacement: "",
        guard: not_ending_in_s,
    },
];

fn any_stem(_: &str) -> bool {
    true
}

fn ends_in_sibilant(stem: &str) -> bool {
    ["ch", "sh", "x", "s", "z"].iter().any(|s| stem.ends_with(s))
}

fn not_ending_in_s(stem: &str) -> bool {
    !stem.ends_with('s')
}

/// Apply the first matching rule once, or `None` when no rule fires
fn stem_once(word: &str) -> Option<String> {
    let len = word.chars().count();
    if len <= MIN_STEMMABLE_LENGTH {
        return None;
    }

    RULES.iter().find_map(|rule| {
        let stem = word.strip_suffix(rule.suffix)?;
        if len > rule.longer_than && (rule.guard)(stem) {
            Some(format!("{}{}", stem, rule.replacement))
        } else {
            None
        }
    })
}

/// Reduce a lowercase word to its approximate root form.
///
/// Rules are reapplied until none fires, so the result is always a fixed
/// point: `stem(&stem(w)) == stem(w)`. Every rule shortens the word, which
/// bounds the loop. Never returns an empty string for non-empty input.
pub fn stem(word: &str) -> String {
    let mut current = word.to_string();
    while let Some(next) = stem_once(&current) {
        current = next;
    }
    current
}
