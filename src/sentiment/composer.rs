//! Turns an interpreted sentiment category into user-facing copy.

use rand::Rng;

use super::SentimentCategory;

// The tables are process-wide immutable configuration; the RNG is supplied
// by the caller so phrase selection stays testable.

const POSITIVE_PHRASES: &[&str] = &[
    "Sounds like this was a moment worth remembering.",
    "There seems to be a little spark of joy in here.",
];
const NEGATIVE_PHRASES: &[&str] = &[
    "This feels like a rather heavy emotion.",
    "It sounds like you are not having the best of days.",
];
const MIXED_PHRASES: &[&str] = &[
    "There seem to be a lot of mixed feelings in here.",
    "This reads like quite a complicated emotion.",
];
const NEUTRAL_PHRASES: &[&str] = &[
    "It sounds like you are reflecting on something.",
    "A calm and quiet moment.",
];

const DEFAULT_PHRASE: &str = "We have noted down how you felt.";

const POSITIVE_TAGS: &[&str] = &["#joyful", "#grateful", "#happy"];
const NEGATIVE_TAGS: &[&str] = &["#sad", "#tired", "#angry"];
const MIXED_TAGS: &[&str] = &["#hard_to_describe", "#bittersweet", "#confused"];
const NEUTRAL_TAGS: &[&str] = &["#reflective", "#peaceful", "#empty"];

pub(crate) fn phrases_for(category: SentimentCategory) -> &'static [&'static str] {
    match category {
        SentimentCategory::Positive => POSITIVE_PHRASES,
        SentimentCategory::Negative => NEGATIVE_PHRASES,
        SentimentCategory::Mixed => MIXED_PHRASES,
        SentimentCategory::Neutral => NEUTRAL_PHRASES,
    }
}

/// Picks a guess phrase for the category, uniformly at random from its
/// candidate list. An empty candidate list falls back to a generic phrase.
pub fn guess_phrase<R: Rng + ?Sized>(category: SentimentCategory, rng: &mut R) -> &'static str {
    let phrases = phrases_for(category);
    if phrases.is_empty() {
        return DEFAULT_PHRASE;
    }
    phrases[rng.random_range(0..phrases.len())]
}

/// Fixed tag suggestions for the category.
pub fn suggested_tags(category: SentimentCategory) -> &'static [&'static str] {
    match category {
        SentimentCategory::Positive => POSITIVE_TAGS,
        SentimentCategory::Negative => NEGATIVE_TAGS,
        SentimentCategory::Mixed => MIXED_TAGS,
        SentimentCategory::Neutral => NEUTRAL_TAGS,
    }
}
