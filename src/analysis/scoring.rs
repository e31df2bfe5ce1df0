//*** START FILE: src/analysis/scoring.rs ***//
use crate::types::audit_data::{CategoryCounts, RichnessStatus};

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;
/// Width of the YELLOW band below the threshold.
pub const YELLOW_BAND: f64 = 2.0;

/// Whitespace-separated token count. Blank text has zero words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sensory references per 500 words, clamped to [1, 10].
///
/// The per-500-words rate is used as the score directly (the `/ 10 * 10`
/// scaling is an identity). Zero words scores 0, outside the clamp range.
pub fn richness_score(counts: &CategoryCounts, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    let total_refs = counts.total() as f64;
    let refs_per_500_words = total_refs / word_count as f64 * 500.0;
    (refs_per_500_words / 10.0 * 10.0).clamp(MIN_SCORE, MAX_SCORE)
}

pub fn classify(score: f64, threshold: f64) -> RichnessStatus {
    if score >= threshold {
        RichnessStatus::Green
    } else if score >= threshold - YELLOW_BAND {
        RichnessStatus::Yellow
    } else {
        RichnessStatus::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(total: usize) -> CategoryCounts {
        CategoryCounts(vec![("touch".to_string(), total), ("sound".to_string(), 0)])
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words(" \n\t  "), 0);
        assert_eq!(count_words("  one two\n\nthree\tfour "), 4);
    }

    #[test]
    fn test_zero_words_scores_zero() {
        assert_eq!(richness_score(&counts(0), 0), 0.0);
        assert_eq!(richness_score(&counts(7), 0), 0.0);
    }

    #[test]
    fn test_ten_hits_in_500_words_scores_ten() {
        assert!((richness_score(&counts(10), 500) - 10.0).abs() < 1e-9);
        assert_eq!(richness_score(&counts(40), 500), 10.0);
    }

    #[test]
    fn test_rate_is_the_score() {
        // 8 references per 500 words scores 8, not 0.8
        assert!((richness_score(&counts(8), 500) - 8.0).abs() < 1e-9);
        assert!((richness_score(&counts(5), 1000) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_floor_of_one() {
        assert_eq!(richness_score(&counts(0), 500), 1.0);
        assert_eq!(richness_score(&counts(1), 5000), 1.0);
    }

    #[test]
    fn test_monotonic_in_hits() {
        let mut previous = 0.0;
        for hits in 0..30 {
            let score = richness_score(&counts(hits), 700);
            assert!(score >= previous, "score dropped at {} hits", hits);
            previous = score;
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(7.5, 7.5), RichnessStatus::Green);
        assert_eq!(classify(9.0, 7.5), RichnessStatus::Green);
        assert_eq!(classify(5.5, 7.5), RichnessStatus::Yellow);
        assert_eq!(classify(7.4, 7.5), RichnessStatus::Yellow);
        assert_eq!(classify(5.4, 7.5), RichnessStatus::Red);
        assert_eq!(classify(6.0, 8.0), RichnessStatus::Yellow);
        assert_eq!(classify(8.0 - 2.1, 8.0), RichnessStatus::Red);
    }

    #[test]
    fn test_zero_score_is_red_for_high_thresholds() {
        assert_eq!(classify(0.0, 7.5), RichnessStatus::Red);
        assert_eq!(classify(0.0, 1.0), RichnessStatus::Yellow);
    }
}
//*** END FILE: src/analysis/scoring.rs ***//
