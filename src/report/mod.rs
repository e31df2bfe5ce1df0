//*** START FILE: src/report/mod.rs ***//
pub mod html;
pub mod markdown;
pub mod roadmap;

use crate::types::audit_data::{
    FlaggedChapter, Phase1Result, Phase2Result, Phase3Result, Phase4Result, ReportArtifacts,
};

pub use markdown::NO_REVISIONS_MESSAGE;
pub use roadmap::ROADMAP_HEADER;

/// Builds the five text artifacts from the phase outputs. Pure: nothing here
/// feeds back into scoring.
pub fn synthesize_reports(
    baseline: &Phase1Result,
    richness: &Phase2Result,
    motifs: &Phase3Result,
    show_dont_tell: &Phase4Result,
    flagged: &[FlaggedChapter],
) -> ReportArtifacts {
    ReportArtifacts {
        interactive_map_html: html::build_interactive_map(richness),
        audit_report_md: markdown::build_audit_report(baseline, richness, motifs),
        enrichment_toolkit_md: markdown::build_enrichment_toolkit(richness),
        revisions_md: markdown::build_revisions(show_dont_tell),
        roadmap_csv: roadmap::build_roadmap_csv(richness, flagged),
    }
}

//*** END FILE: src/report/mod.rs ***//
