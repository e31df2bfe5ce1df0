use crate::analysis::richness::gap_frequencies;
use crate::types::audit_data::{MotifPresence, Phase1Result, Phase2Result, Phase3Result, Phase4Result};

pub const NO_REVISIONS_MESSAGE: &str =
    "# Revisions\n\nNo show-don't-tell issues detected at current thresholds.";

const TOOLKIT_FOCUS_AREAS: usize = 5;

const TOOLKIT_TECHNIQUES: &[&str] = &[
    "Layer sensory cues into action beats.",
    "Add concrete textures, temperatures, or sounds to dialogue-heavy scenes.",
    "Use motif repetition to strengthen thematic continuity.",
];

/// Summary and scorecard, plus a motif section when a palette was mapped.
pub fn build_audit_report(
    baseline: &Phase1Result,
    richness: &Phase2Result,
    motifs: &Phase3Result,
) -> String {
    let summary = &richness.summary;
    let below = if summary.chapters_below_baseline.is_empty() {
        "None".to_string()
    } else {
        summary
            .chapters_below_baseline
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut lines = vec![
        "# Sensory Audit Report".to_string(),
        String::new(),
        "## Summary".to_string(),
        format!(
            "- Baseline richness score: {:.1}",
            baseline.sensory_fingerprint.baseline_richness_score
        ),
        format!("- Chapters at baseline: {}", summary.chapters_at_baseline),
        format!("- Chapters below baseline: {}", below),
        format!("- Consistent weak points: {}", summary.consistent_weak_points),
        String::new(),
        "## Scorecard".to_string(),
    ];
    lines.extend(richness.richness_scorecard.iter().map(|row| {
        format!(
            "- Chapter {} {}: {:.1} ({})",
            row.chapter,
            row.section,
            row.your_score,
            row.status.as_str()
        )
    }));

    if !motifs.motif_mapping.is_empty() {
        lines.push(String::new());
        lines.push("## Motifs".to_string());
        for (motif, mapping) in &motifs.motif_mapping {
            let present: Vec<String> = mapping
                .chapters_present
                .iter()
                .filter(|c| c.presence != MotifPresence::Absent)
                .map(|c| format!("Ch.{} {:?} ({})", c.chapter, c.presence, c.occurrences))
                .collect();
            let line = if present.is_empty() {
                format!("- {}: Absent", motif)
            } else {
                format!("- {}: {}", motif, present.join(", "))
            };
            lines.push(line);
        }
    }
    lines.join("\n")
}

pub fn build_enrichment_toolkit(richness: &Phase2Result) -> String {
    let mut lines = vec![
        "# Enrichment Toolkit".to_string(),
        String::new(),
        "## Focus Areas".to_string(),
    ];
    lines.extend(
        gap_frequencies(&richness.richness_scorecard)
            .into_iter()
            .take(TOOLKIT_FOCUS_AREAS)
            .map(|(gap, count)| format!("- {}: missing in {} sections", gap, count)),
    );
    lines.push(String::new());
    lines.push("## Suggested Techniques".to_string());
    lines.extend(TOOLKIT_TECHNIQUES.iter().map(|t| format!("- {}", t)));
    lines.join("\n")
}

pub fn build_revisions(show_dont_tell: &Phase4Result) -> String {
    if show_dont_tell.per_passage.is_empty() {
        return NO_REVISIONS_MESSAGE.to_string();
    }

    let blocks: Vec<String> = show_dont_tell
        .per_passage
        .iter()
        .map(|passage| {
            let mut lines = vec![
                format!("## {}", passage.source),
                format!("Current: {}", passage.current_telling_text),
                format!("Issue: {}", passage.what_is_conveyed),
                format!("Problems: {}", passage.problems.join(", ")),
            ];
            lines.extend(passage.alternative_revisions.iter().map(|rev| {
                format!(
                    "- Option {} ({}): {} Why: {}",
                    rev.alternative_number,
                    rev.approach,
                    rev.revised_text,
                    rev.why_this_works.join("; ")
                )
            }));
            lines.join("\n")
        })
        .collect();

    format!("# Revisions\n\n{}", blocks.join("\n\n"))
}
