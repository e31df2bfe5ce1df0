//*** START FILE: src/analysis/mod.rs ***//
pub mod lexicon;
pub mod scanner;
pub mod scoring;
pub mod baseline;
pub mod richness;
pub mod motifs;
pub mod show_dont_tell;

use log::debug;

// Re-export the phase entry points the pipeline in lib.rs drives
pub use baseline::establish_sensory_baseline;
pub use lexicon::{KeywordCategory, KeywordTable, Lexicon};
pub use motifs::map_motifs;
pub use richness::audit_richness;
pub use scanner::LexemeScanner;
pub use scoring::{classify, count_words, richness_score};
pub use show_dont_tell::detect_show_dont_tell;

/// Single place where a lookup miss turns into an empty contribution.
///
/// Unresolved exemplary chapters and unknown motif names are not errors:
/// they contribute `T::default()` (nothing, zero, empty) and are only
/// reported at debug level. A stricter policy would change this function
/// and nothing else.
pub fn resolve_or_default<T: Default>(found: Option<T>, kind: &str, key: &str) -> T {
    match found {
        Some(value) => value,
        None => {
            debug!("No {} resolved for '{}'; contributing nothing", kind, key);
            T::default()
        }
    }
}

//*** END FILE: src/analysis/mod.rs ***//
