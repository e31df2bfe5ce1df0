//*** START FILE: src/lib.rs ***//

// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod types {
    pub mod audit_data;
}
pub mod parsing;
pub mod analysis;
pub mod report;
pub mod audit_io;

pub use config::AuditConfig;
pub use error::AuditError;
pub use types::audit_data::{AuditInput, AuditResult};

use analysis::LexemeScanner;
use log::info;

/// Runs all four phases over one segmentation of the manuscript, then
/// synthesizes the report artifacts.
///
/// The input is assumed to have passed [`AuditInput::validate`]. Nothing here
/// fails: unresolved references degrade to empty contributions. Output
/// depends only on `input` and `config`.
pub fn run_audit(input: &AuditInput, config: &AuditConfig) -> AuditResult {
    let lexicon = config.lexicon();
    let sensory_scanner = LexemeScanner::new(&lexicon.sensory);
    let motif_scanner = LexemeScanner::new(&lexicon.motifs);
    let tell_scanner = LexemeScanner::new(&lexicon.tell_table());

    let chapters = parsing::split_into_chapters(&input.manuscript_text);
    let baseline_config = &input.sensory_baseline;

    let baseline = analysis::establish_sensory_baseline(
        &chapters,
        &baseline_config.exemplary_chapters,
        &sensory_scanner,
        config,
    );
    let richness = analysis::audit_richness(
        &chapters,
        baseline_config.richness_threshold,
        &sensory_scanner,
        config.section_length,
    );
    let motifs = analysis::map_motifs(
        &chapters,
        baseline_config.target_sensory_palette.as_ref(),
        &motif_scanner,
    );
    let show_dont_tell = analysis::detect_show_dont_tell(&chapters, &tell_scanner, config);

    let artifacts = report::synthesize_reports(
        &baseline,
        &richness,
        &motifs,
        &show_dont_tell,
        input.flagged_chapters(),
    );

    info!(
        "Audit complete: {} chapter(s), {} scorecard row(s), {} motif(s), {} show-don't-tell finding(s)",
        chapters.len(),
        richness.richness_scorecard.len(),
        motifs.motif_mapping.len(),
        show_dont_tell.per_passage.len()
    );

    AuditResult {
        baseline,
        richness,
        motifs,
        show_dont_tell,
        artifacts,
    }
}

//*** END FILE: src/lib.rs ***//
