//! Free-text service classification.
//!
//! Maps an arbitrary customer message ("my car needs an oil change and new
//! brake pads") to zero-or-one best-matching catalog service id, using the
//! keyword lexicon and a weighted scoring rule.
//!
//! ## Scoring
//!
//! For each lexicon entry, the service score is the sum over its phrases of
//!
//! ```text
//! (non-overlapping whole-phrase occurrences in the message) × (phrase word count)
//! ```
//!
//! Phrases match on word boundaries only — "oil" never matches inside
//! "foiled" — and multi-word phrases require all words contiguous and in
//! order.  The word-count weighting biases toward specificity: "brake pad
//! replacement" (3 words) outweighs "brake" (1 word) when each occurs once.
//!
//! ## Tie-break
//!
//! The strictly highest score wins.  On a tie, the service declared
//! *earliest in the lexicon* wins.  This is an explicit, tested contract —
//! tie-breaking must never depend on map iteration order.
//!
//! ## Totality
//!
//! `classify` is a total function: empty messages, mixed case, punctuation,
//! and messages with no automotive vocabulary at all are normal inputs that
//! produce [`Classification::NoMatch`], never an error.

use tracing::{debug, instrument, trace};

use crate::domain::{catalog::ServiceId, lexicon::Lexicon};

/// Outcome of classifying one message.
///
/// Immutable, produced per call; no state is retained between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No keyword phrase from any service occurred in the message.
    NoMatch,

    /// Best-scoring service, with its weighted score.
    Match { service_id: ServiceId, score: u32 },
}

impl Classification {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    /// The winning service id, if any.
    pub fn service_id(&self) -> Option<&ServiceId> {
        match self {
            Self::Match { service_id, .. } => Some(service_id),
            Self::NoMatch => None,
        }
    }

    /// The winning score; zero for `NoMatch`.
    pub fn score(&self) -> u32 {
        match self {
            Self::Match { score, .. } => *score,
            Self::NoMatch => 0,
        }
    }
}

/// Message-to-service classifier over an immutable lexicon.
///
/// Phrases are tokenised once at construction; each `classify` call is then
/// a pure function of the message.  Any number of calls may run concurrently
/// against the same classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    /// `(service id, tokenised phrases)` in lexicon declaration order.
    services: Vec<(ServiceId, Vec<Vec<String>>)>,
}

impl Classifier {
    pub fn new(lexicon: &Lexicon) -> Self {
        let services = lexicon
            .iter()
            .map(|entry| {
                let phrases = entry
                    .phrases
                    .iter()
                    .map(|p| tokenize(p))
                    .filter(|words| !words.is_empty())
                    .collect();
                (entry.service_id.clone(), phrases)
            })
            .collect();

        Self { services }
    }

    /// Classify a free-text message.
    ///
    /// Returns the highest-scoring service, ties broken by lexicon
    /// declaration order, or [`Classification::NoMatch`] when no phrase
    /// occurs in the message.
    #[instrument(skip_all, fields(message_len = message.len()))]
    pub fn classify(&self, message: &str) -> Classification {
        let words = tokenize(message);
        if words.is_empty() {
            return Classification::NoMatch;
        }

        let mut best: Option<(&ServiceId, u32)> = None;

        for (service_id, phrases) in &self.services {
            let score = phrases
                .iter()
                .map(|phrase| count_occurrences(&words, phrase) * phrase.len() as u32)
                .sum::<u32>();

            trace!(service = %service_id, score, "service scored");

            if score == 0 {
                continue;
            }

            // Strictly-greater keeps the earliest-declared winner on ties.
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((service_id, score)),
            }
        }

        match best {
            Some((service_id, score)) => {
                debug!(service = %service_id, score, "message classified");
                Classification::Match {
                    service_id: service_id.clone(),
                    score,
                }
            }
            None => {
                debug!("no keyword matched");
                Classification::NoMatch
            }
        }
    }
}

/// Lower-case and split a string into words on non-alphanumeric boundaries.
///
/// This is what makes matching whole-word: "refoiled" tokenises to
/// `["refoiled"]`, which can never equal the token `"oil"`.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Count non-overlapping occurrences of `phrase` as a contiguous word
/// sequence inside `words`.
fn count_occurrences(words: &[String], phrase: &[String]) -> u32 {
    if phrase.is_empty() || phrase.len() > words.len() {
        return 0;
    }

    let mut count = 0;
    let mut i = 0;
    while i + phrase.len() <= words.len() {
        if words[i..i + phrase.len()] == phrase[..] {
            count += 1;
            i += phrase.len(); // non-overlapping
        } else {
            i += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_punctuation_and_case() {
        assert_eq!(tokenize("Brake-pads, NOW!"), vec!["brake", "pads", "now"]);
    }

    #[test]
    fn tokenize_empty_and_symbol_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("!!! ... ???").is_empty());
    }

    #[test]
    fn count_single_word() {
        let words = tokenize("oil and more oil");
        let phrase = tokenize("oil");
        assert_eq!(count_occurrences(&words, &phrase), 2);
    }

    #[test]
    fn count_is_non_overlapping() {
        // "a a a" contains the phrase "a a" once non-overlapping, not twice.
        let words = tokenize("a a a");
        let phrase = tokenize("a a");
        assert_eq!(count_occurrences(&words, &phrase), 1);
    }

    #[test]
    fn count_requires_contiguous_order() {
        let words = tokenize("change the oil");
        let phrase = tokenize("oil change");
        assert_eq!(count_occurrences(&words, &phrase), 0);
    }
}
