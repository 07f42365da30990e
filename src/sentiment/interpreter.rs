//! Maps a confidence triple to one sentiment category.

use super::{SentimentCategory, SentimentScores};

const SIGNIFICANT_THRESHOLD: f64 = 0.25;

/// Interprets raw confidence scores as a discrete category.
///
/// Rule 1: if both the positive and the negative signal are significant,
/// the entry is mixed, regardless of the neutral score. Rule 2: otherwise
/// the category whose score is strictly greater than both others wins, with
/// neutral as the tie-break.
pub fn interpret(scores: &SentimentScores) -> SentimentCategory {
    let SentimentScores {
        positive,
        negative,
        neutral,
    } = *scores;

    if positive >= SIGNIFICANT_THRESHOLD && negative >= SIGNIFICANT_THRESHOLD {
        return SentimentCategory::Mixed;
    }

    if positive > negative && positive > neutral {
        SentimentCategory::Positive
    } else if negative > positive && negative > neutral {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(positive: f64, negative: f64, neutral: f64) -> SentimentScores {
        SentimentScores {
            positive,
            negative,
            neutral,
        }
    }

    #[test]
    fn clear_majorities() {
        assert_eq!(interpret(&scores(0.8, 0.1, 0.1)), SentimentCategory::Positive);
        assert_eq!(interpret(&scores(0.1, 0.8, 0.1)), SentimentCategory::Negative);
        assert_eq!(interpret(&scores(0.1, 0.1, 0.8)), SentimentCategory::Neutral);
    }

    #[test]
    fn significant_positive_and_negative_is_mixed() {
        assert_eq!(interpret(&scores(0.4, 0.4, 0.2)), SentimentCategory::Mixed);
        assert_eq!(interpret(&scores(0.3, 0.3, 0.4)), SentimentCategory::Mixed);
        // The mixed rule outranks the max-score rule even when neutral is
        // numerically highest.
        assert_eq!(interpret(&scores(0.25, 0.25, 0.5)), SentimentCategory::Mixed);
    }

    #[test]
    fn fallback_scores_read_as_neutral() {
        assert_eq!(interpret(&scores(0.33, 0.33, 0.34)), SentimentCategory::Neutral);
    }

    #[test]
    fn narrow_margin_still_wins() {
        assert_eq!(interpret(&scores(0.34, 0.33, 0.33)), SentimentCategory::Positive);
    }

    #[test]
    fn exact_ties_resolve_to_neutral() {
        assert_eq!(interpret(&scores(0.2, 0.2, 0.2)), SentimentCategory::Neutral);
        // positive == neutral as the shared maximum: neither is strictly
        // greater than both others, so neutral wins.
        assert_eq!(interpret(&scores(0.4, 0.2, 0.4)), SentimentCategory::Neutral);
        assert_eq!(interpret(&scores(0.2, 0.4, 0.4)), SentimentCategory::Neutral);
    }

    #[test]
    fn interpretation_is_deterministic() {
        let input = scores(0.31, 0.29, 0.4);
        let first = interpret(&input);
        for _ in 0..10 {
            assert_eq!(interpret(&input), first);
        }
    }
}
