//*** START FILE: src/analysis/show_dont_tell.rs ***//
use super::scanner::LexemeScanner;
use crate::config::AuditConfig;
use crate::parsing::{collapse_whitespace, leading_chars};
use crate::types::audit_data::{AlternativeRevision, Chapter, Phase4Result, ShowDontTellResult};
use log::debug;

/// Chapters with strictly more tell words than this are flagged.
pub const TELL_THRESHOLD: usize = 2;

const WHAT_IS_CONVEYED: &str = "Emotional state or realization";
const PROBLEM_TAG: &str = "Abstract emotion narration";
const REVISION_APPROACH: &str = "Sensory/Action-Based";
const WHY_IT_WORKS: &str = "Connects emotion to concrete physical cues";

/// Phase 4: flags chapters that name emotions instead of showing them.
///
/// `tell_scanner` counts the abstract "telling" words; a chapter with more
/// than [`TELL_THRESHOLD`] of them gets one finding.
pub fn detect_show_dont_tell(
    chapters: &[Chapter],
    tell_scanner: &LexemeScanner,
    config: &AuditConfig,
) -> Phase4Result {
    let mut per_passage = Vec::new();

    for chapter in chapters {
        let tell_count = tell_scanner.count_all(&chapter.content);
        if tell_count <= TELL_THRESHOLD {
            continue;
        }
        debug!("Chapter {} has {} telling words", chapter.number, tell_count);

        let excerpt = collapse_whitespace(leading_chars(&chapter.content, config.revision_excerpt_length));
        per_passage.push(ShowDontTellResult {
            source: format!("Chapter {}", chapter.number),
            current_telling_text: format!(
                "{}...",
                leading_chars(&chapter.content, config.telling_excerpt_length)
            ),
            what_is_conveyed: WHAT_IS_CONVEYED.to_string(),
            problems: vec![PROBLEM_TAG.to_string()],
            alternative_revisions: vec![AlternativeRevision {
                alternative_number: 1,
                approach: REVISION_APPROACH.to_string(),
                revised_text: format!(
                    "Replace abstract emotion verbs with observable actions or sensations in this passage: \"{}...\"",
                    excerpt
                ),
                why_this_works: vec![WHY_IT_WORKS.to_string()],
            }],
        });
    }

    Phase4Result { per_passage }
}

//*** END FILE: src/analysis/show_dont_tell.rs ***//
