//*** START FILE: src/analysis/baseline.rs ***//
use super::resolve_or_default;
use super::scanner::LexemeScanner;
use super::scoring::{count_words, richness_score};
use crate::config::AuditConfig;
use crate::parsing::{leading_chars, parse_chapter_number};
use crate::types::audit_data::{Chapter, ExemplaryPassage, Phase1Result, SensoryFingerprint};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref FIRST_NUMBER: Regex = Regex::new(r"[0-9]+").expect("number pattern compiles");
}

// Qualitative descriptors. Not derived from the text.
const SYNTAX_SIGNATURE: &str = "Declarative with sensory escalation";
const VOCABULARY_PREFERENCE: &str = "Precise and visceral";
const METAPHOR_TYPE: &str = "Physical grounding";
const SENSORY_DENSITY_PER_PAGE: &str = "8-12 references";

/// Finds the chapter an exemplary identifier such as "Chandra (Ch. 4-8)" points at.
///
/// The first integer in the identifier selects the first chapter declaring
/// that number. Identifiers without digits match the first chapter whose
/// content contains them, ignoring case. Blank identifiers match nothing.
pub fn locate_exemplary_chapter<'a>(chapters: &'a [Chapter], identifier: &str) -> Option<&'a Chapter> {
    let normalized = identifier.trim();
    if normalized.is_empty() {
        return None;
    }

    match FIRST_NUMBER.find(normalized) {
        Some(digits) => {
            let target = parse_chapter_number(digits.as_str());
            chapters.iter().find(|c| c.number == target)
        }
        None => {
            let needle = normalized.to_lowercase();
            chapters
                .iter()
                .find(|c| c.content.to_lowercase().contains(&needle))
        }
    }
}

/// Phase 1: derives the sensory fingerprint from the writer's exemplary chapters.
pub fn establish_sensory_baseline(
    chapters: &[Chapter],
    exemplary_chapters: &[String],
    scanner: &LexemeScanner,
    config: &AuditConfig,
) -> Phase1Result {
    let mut passages: Vec<ExemplaryPassage> = Vec::new();

    for identifier in exemplary_chapters {
        let located = locate_exemplary_chapter(chapters, identifier)
            .filter(|chapter| !chapter.content.is_empty())
            .map(|chapter| vec![analyze_passage(identifier, chapter, scanner, config)]);
        passages.extend(resolve_or_default(located, "exemplary chapter", identifier));
    }

    let favored_senses = rank_favored_senses(&passages);
    let baseline_richness_score = if passages.is_empty() {
        config.default_baseline_score
    } else {
        passages.iter().map(|p| p.richness_score).sum::<f64>() / passages.len() as f64
    };
    debug!(
        "Phase 1: {} of {} exemplary chapter(s) resolved, baseline {:.2}",
        passages.len(),
        exemplary_chapters.len(),
        baseline_richness_score
    );

    Phase1Result {
        sensory_fingerprint: SensoryFingerprint {
            favored_senses,
            syntax_signature: SYNTAX_SIGNATURE.to_string(),
            vocabulary_preference: VOCABULARY_PREFERENCE.to_string(),
            metaphor_type: METAPHOR_TYPE.to_string(),
            sensory_density_per_page: SENSORY_DENSITY_PER_PAGE.to_string(),
            baseline_richness_score,
        },
        exemplary_passages_analyzed: passages,
    }
}

fn analyze_passage(
    identifier: &str,
    chapter: &Chapter,
    scanner: &LexemeScanner,
    config: &AuditConfig,
) -> ExemplaryPassage {
    let counts = scanner.scan(&chapter.content);
    let score = richness_score(&counts, count_words(&chapter.content));
    ExemplaryPassage {
        source: identifier.to_string(),
        quote: format!("{}...", leading_chars(&chapter.content, config.quote_length)),
        sensory_breakdown: counts,
        richness_score: score,
    }
}

/// Categories by total count across passages, highest first. The sort is
/// stable, so ties keep declaration order. No passages, no ranking.
fn rank_favored_senses(passages: &[ExemplaryPassage]) -> Vec<String> {
    let mut totals: Vec<(String, usize)> = Vec::new();
    for passage in passages {
        for (sense, count) in passage.sensory_breakdown.iter() {
            match totals.iter_mut().find(|(name, _)| name == sense) {
                Some((_, total)) => *total += count,
                None => totals.push((sense.to_string(), count)),
            }
        }
    }
    totals.sort_by(|(_, a), (_, b)| b.cmp(a));
    totals.into_iter().map(|(sense, _)| sense).collect()
}

//*** END FILE: src/analysis/baseline.rs ***//
