//*** START FILE: src/analysis/richness.rs ***//
use super::scanner::LexemeScanner;
use super::scoring::{classify, count_words, richness_score};
use crate::parsing::split_into_windows;
use crate::types::audit_data::{AuditSummary, Chapter, Phase2Result, RichnessScorecardRow};
use log::debug;
use std::collections::BTreeSet;

pub const NO_WEAK_POINTS: &str = "None identified";

/// Phase 2: scores every window of every chapter against the threshold.
pub fn audit_richness(
    chapters: &[Chapter],
    threshold: f64,
    scanner: &LexemeScanner,
    section_length: usize,
) -> Phase2Result {
    let mut scorecard: Vec<RichnessScorecardRow> = Vec::new();

    for chapter in chapters {
        for (index, section) in split_into_windows(&chapter.content, section_length)
            .into_iter()
            .enumerate()
        {
            let counts = scanner.scan(section);
            let score = richness_score(&counts, count_words(section));
            scorecard.push(RichnessScorecardRow {
                chapter: chapter.number,
                section: format!("Section {}", index + 1),
                baseline: threshold,
                your_score: score,
                status: classify(score, threshold),
                key_sensory_gaps: counts.zero_categories(),
            });
        }
    }

    let summary = summarize(&scorecard);
    debug!(
        "Phase 2: {} window(s) over {} chapter(s), {} chapter number(s) below baseline",
        scorecard.len(),
        chapters.len(),
        summary.chapters_below_baseline.len()
    );

    Phase2Result {
        richness_scorecard: scorecard,
        summary,
    }
}

/// Chapters are counted by declared number, so repeated numbers merge here.
pub fn summarize(scorecard: &[RichnessScorecardRow]) -> AuditSummary {
    let all_chapters: BTreeSet<u32> = scorecard.iter().map(|row| row.chapter).collect();
    let below: BTreeSet<u32> = scorecard
        .iter()
        .filter(|row| !row.status.is_green())
        .map(|row| row.chapter)
        .collect();

    let weak_points: Vec<String> = gap_frequencies(scorecard)
        .into_iter()
        .take(2)
        .map(|(sense, _)| sense)
        .collect();
    let consistent_weak_points = if weak_points.is_empty() {
        NO_WEAK_POINTS.to_string()
    } else {
        weak_points.join(" and ")
    };

    AuditSummary {
        chapters_at_baseline: all_chapters.len() - below.len(),
        chapters_below_baseline: below.into_iter().collect(),
        consistent_weak_points,
    }
}

/// How many windows lack each sense, most frequent first. Ties keep the
/// order in which the gaps were first seen.
pub fn gap_frequencies(scorecard: &[RichnessScorecardRow]) -> Vec<(String, usize)> {
    let mut tallies: Vec<(String, usize)> = Vec::new();
    for gap in scorecard.iter().flat_map(|row| row.key_sensory_gaps.iter()) {
        match tallies.iter_mut().find(|(sense, _)| sense == gap) {
            Some((_, count)) => *count += 1,
            None => tallies.push((gap.clone(), 1)),
        }
    }
    tallies.sort_by(|(_, a), (_, b)| b.cmp(a));
    tallies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lexicon::default_sensory_table;
    use crate::parsing::split_into_chapters;
    use crate::types::audit_data::RichnessStatus;

    fn scanner() -> LexemeScanner {
        LexemeScanner::new(&default_sensory_table())
    }

    fn row(chapter: u32, status: RichnessStatus, gaps: &[&str]) -> RichnessScorecardRow {
        RichnessScorecardRow {
            chapter,
            section: "Section 1".to_string(),
            baseline: 5.0,
            your_score: 5.0,
            status,
            key_sensory_gaps: gaps.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn test_one_window_per_short_chapter() {
        let chapters = split_into_chapters("Chapter 1\nwarm light\nChapter 2\nplain words here");
        let result = audit_richness(&chapters, 7.5, &scanner(), 2500);
        assert_eq!(result.richness_scorecard.len(), 2);
        let first = &result.richness_scorecard[0];
        assert_eq!(first.chapter, 1);
        assert_eq!(first.section, "Section 1");
        assert_eq!(first.baseline, 7.5);
        assert_eq!(first.your_score, 10.0);
        assert_eq!(first.status, RichnessStatus::Green);
        assert_eq!(first.key_sensory_gaps, vec!["touch", "sound", "smell"]);
        let second = &result.richness_scorecard[1];
        assert_eq!(second.your_score, 1.0);
        assert_eq!(second.status, RichnessStatus::Red);
        assert_eq!(second.key_sensory_gaps.len(), 5);
    }

    #[test]
    fn test_long_chapter_splits_into_sections() {
        let body = "a".repeat(6000);
        let chapters = split_into_chapters(&body);
        let result = audit_richness(&chapters, 5.0, &scanner(), 2500);
        let sections: Vec<&str> = result
            .richness_scorecard
            .iter()
            .map(|r| r.section.as_str())
            .collect();
        assert_eq!(sections, vec!["Section 1", "Section 2", "Section 3"]);
    }

    #[test]
    fn test_empty_chapter_scores_zero() {
        let chapters = split_into_chapters("Chapter 3\n");
        let result = audit_richness(&chapters, 7.5, &scanner(), 2500);
        assert_eq!(result.richness_scorecard.len(), 1);
        assert_eq!(result.richness_scorecard[0].your_score, 0.0);
        assert_eq!(result.richness_scorecard[0].status, RichnessStatus::Red);
    }

    #[test]
    fn test_summary_counts_distinct_chapters() {
        let scorecard = vec![
            row(1, RichnessStatus::Green, &[]),
            row(1, RichnessStatus::Green, &[]),
            row(3, RichnessStatus::Yellow, &["smell"]),
            row(2, RichnessStatus::Green, &["smell", "touch"]),
            row(2, RichnessStatus::Red, &["touch", "smell"]),
            row(3, RichnessStatus::Green, &["sound"]),
        ];
        let summary = summarize(&scorecard);
        assert_eq!(summary.chapters_at_baseline, 1);
        assert_eq!(summary.chapters_below_baseline, vec![2, 3]);
        assert_eq!(summary.consistent_weak_points, "smell and touch");
    }

    #[test]
    fn test_summary_without_gaps() {
        let summary = summarize(&[row(1, RichnessStatus::Green, &[])]);
        assert_eq!(summary.chapters_at_baseline, 1);
        assert!(summary.chapters_below_baseline.is_empty());
        assert_eq!(summary.consistent_weak_points, NO_WEAK_POINTS);
    }

    #[test]
    fn test_gap_frequency_ties_keep_first_seen_order() {
        let scorecard = vec![
            row(1, RichnessStatus::Green, &["sight", "smell"]),
            row(2, RichnessStatus::Green, &["touch", "smell"]),
            row(3, RichnessStatus::Green, &["touch"]),
        ];
        let gaps = gap_frequencies(&scorecard);
        assert_eq!(
            gaps,
            vec![
                ("smell".to_string(), 2),
                ("touch".to_string(), 2),
                ("sight".to_string(), 1)
            ]
        );
    }
}
//*** END FILE: src/analysis/richness.rs ***//
