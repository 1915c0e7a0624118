pub mod dictionary;
pub mod tokenizer;

pub use dictionary::DictionaryStore;

use crate::lookup::{LookupResult, RemoteLookup};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Eligible words are ASCII letters, hyphens, and apostrophes only.
    static ref IS_WORD: Regex = Regex::new(r"^[A-Za-z'-]+$").unwrap();
}

/// Outcome of classifying one word. Unknown carries the lowercase form the
/// resolution protocol presents to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Unknown(String),
}

/// Ordered short-circuit decision rules for a single word. Anything the rules
/// exempt is Valid without a lookup; only the final rule touches the
/// dictionary union and the remote authority.
pub struct WordClassifier {
    strict: bool,
}

impl WordClassifier {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn classify(
        &self,
        word: &str,
        dictionary: &DictionaryStore,
        lookup: &dyn RemoteLookup,
    ) -> Verdict {
        if word.is_empty() {
            return Verdict::Valid;
        }
        // Single letters ("a", "I") are never flagged.
        if word.chars().count() == 1 {
            return Verdict::Valid;
        }
        // "dog's" is checked as "dog".
        if let Some(stem) = word.strip_suffix("'s") {
            return self.classify(stem, dictionary, lookup);
        }
        if !IS_WORD.is_match(word) {
            return Verdict::Valid;
        }
        // Uppercase-initial words are assumed proper nouns unless strict mode
        // is on. Applies mid-sentence too; documented behavior.
        if !self.strict && word.chars().next().is_some_and(|c| c.is_uppercase()) {
            return Verdict::Valid;
        }

        let lower = word.to_lowercase();
        if dictionary.contains(&lower) {
            return Verdict::Valid;
        }
        match lookup.lookup(&lower) {
            LookupResult::Recognized => Verdict::Valid,
            // Unreachable degrades to asking the human, never a failure.
            LookupResult::NotRecognized | LookupResult::Unreachable => Verdict::Unknown(lower),
        }
    }
}
