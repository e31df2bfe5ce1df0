//*** START FILE: src/analysis/motifs.rs ***//
use super::scanner::LexemeScanner;
use crate::types::audit_data::{
    Chapter, MotifIncarnation, MotifMapping, MotifPresence, Phase3Result, SensoryPalette,
};
use log::debug;

/// More hits than this makes a motif central to a chapter.
pub const CENTRAL_MIN_EXCLUSIVE: usize = 2;

pub fn presence_for(count: usize) -> MotifPresence {
    if count > CENTRAL_MIN_EXCLUSIVE {
        MotifPresence::Central
    } else if count > 0 {
        MotifPresence::Secondary
    } else {
        MotifPresence::Absent
    }
}

/// Phase 3: per-chapter presence of every motif named in the palette.
///
/// Only the palette's keys matter. A name with no keyword list still gets an
/// entry, with every chapter `Absent`.
pub fn map_motifs(
    chapters: &[Chapter],
    palette: Option<&SensoryPalette>,
    motif_scanner: &LexemeScanner,
) -> Phase3Result {
    let mut result = Phase3Result::default();
    let Some(palette) = palette else {
        return result;
    };

    for motif in palette.keys() {
        if !motif_scanner.has_category(motif) {
            debug!("Motif '{}' has no keyword list; every chapter will read Absent", motif);
        }
        let chapters_present = chapters
            .iter()
            .map(|chapter| {
                let count = motif_scanner.count_category(&chapter.content, motif);
                let presence = presence_for(count);
                MotifIncarnation {
                    incarnation: format!("{} in Ch.{}", motif, chapter.number),
                    chapter: chapter.number,
                    presence,
                    occurrences: count,
                    description: match presence {
                        MotifPresence::Absent => "Not present".to_string(),
                        _ => format!("Appears {} times", count),
                    },
                }
            })
            .collect();

        result.motif_mapping.insert(
            motif.clone(),
            MotifMapping {
                chapters_present,
                // Reserved for echo-planting heuristics; nothing populates it yet.
                echo_planting_opportunities: Vec::new(),
            },
        );
    }
    result
}

//*** END FILE: src/analysis/motifs.rs ***//
