//*** START FILE: src/types/audit_data.rs ***//
use crate::error::AuditError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Upper bound on manuscript size accepted at the boundary, in characters.
pub const MAX_MANUSCRIPT_CHARS: usize = 1_000_000;
pub const MIN_RICHNESS_THRESHOLD: f64 = 1.0;
pub const MAX_RICHNESS_THRESHOLD: f64 = 20.0;

// --- Input side ---

/// Motif name -> free-text description. Only the keys are analysed.
pub type SensoryPalette = BTreeMap<String, Option<String>>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SensoryBaseline {
    #[serde(default)]
    pub exemplary_chapters: Vec<String>,
    pub richness_threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_sensory_palette: Option<SensoryPalette>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagType {
    #[serde(rename = "Underwritten sensory detail")]
    UnderwrittenSensoryDetail,
    #[serde(rename = "Show-don't-tell")]
    ShowDontTell,
    #[serde(rename = "Sensory foreshadowing opportunity")]
    SensoryForeshadowingOpportunity,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlaggedChapter {
    pub chapter: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub issue: String,
    #[serde(rename = "type")]
    pub flag_type: FlagType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AuditInput {
    pub manuscript_text: String,
    pub sensory_baseline: SensoryBaseline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters_flagged_for_enrichment: Option<Vec<FlaggedChapter>>,
}

impl AuditInput {
    /// Rejects input the analysis phases are not meant to see.
    pub fn validate(&self) -> Result<(), AuditError> {
        let manuscript_chars = self.manuscript_text.chars().count();
        if manuscript_chars > MAX_MANUSCRIPT_CHARS {
            return Err(AuditError::InvalidInput(format!(
                "manuscript_text has {} characters, limit is {}",
                manuscript_chars, MAX_MANUSCRIPT_CHARS
            )));
        }

        let threshold = self.sensory_baseline.richness_threshold;
        if !threshold.is_finite()
            || !(MIN_RICHNESS_THRESHOLD..=MAX_RICHNESS_THRESHOLD).contains(&threshold)
        {
            return Err(AuditError::InvalidInput(format!(
                "richness_threshold must be between {} and {}, got {}",
                MIN_RICHNESS_THRESHOLD, MAX_RICHNESS_THRESHOLD, threshold
            )));
        }

        for flag in self.flagged_chapters() {
            if flag.issue.trim().is_empty() {
                return Err(AuditError::InvalidInput(format!(
                    "flagged chapter {} has an empty issue",
                    flag.chapter
                )));
            }
        }
        Ok(())
    }

    pub fn flagged_chapters(&self) -> &[FlaggedChapter] {
        self.chapters_flagged_for_enrichment.as_deref().unwrap_or(&[])
    }
}

// --- Segmented manuscript ---

/// One segmented chapter. `number` is whatever the heading declared, so two
/// chapters can share it; `position` is the chapter's index in text order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub position: usize,
    pub number: u32,
    pub content: String,
}

// --- Output side ---

/// Per-category counts kept in category declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts(pub Vec<(String, usize)>);

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, count)| count).sum()
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
    }

    /// Categories with no hits, in declaration order.
    pub fn zero_categories(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|(_, count)| *count == 0)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, count) in &self.0 {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SensoryFingerprint {
    pub favored_senses: Vec<String>,
    pub syntax_signature: String,
    pub vocabulary_preference: String,
    pub metaphor_type: String,
    pub sensory_density_per_page: String,
    pub baseline_richness_score: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExemplaryPassage {
    pub source: String,
    pub quote: String,
    pub sensory_breakdown: CategoryCounts,
    pub richness_score: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Phase1Result {
    pub sensory_fingerprint: SensoryFingerprint,
    pub exemplary_passages_analyzed: Vec<ExemplaryPassage>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RichnessStatus {
    Green,
    Yellow,
    Red,
}

impl RichnessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RichnessStatus::Green => "GREEN",
            RichnessStatus::Yellow => "YELLOW",
            RichnessStatus::Red => "RED",
        }
    }

    pub fn is_green(&self) -> bool {
        *self == RichnessStatus::Green
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RichnessScorecardRow {
    pub chapter: u32,
    pub section: String,
    pub baseline: f64,
    pub your_score: f64,
    pub status: RichnessStatus,
    pub key_sensory_gaps: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AuditSummary {
    pub chapters_at_baseline: usize,
    pub chapters_below_baseline: Vec<u32>,
    pub consistent_weak_points: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Phase2Result {
    pub richness_scorecard: Vec<RichnessScorecardRow>,
    pub summary: AuditSummary,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotifPresence {
    Central,
    Secondary,
    Absent,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MotifIncarnation {
    pub incarnation: String,
    pub chapter: u32,
    pub presence: MotifPresence,
    pub occurrences: usize,
    pub description: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EchoOpportunity {
    pub chapter: u32,
    pub reason: String,
    pub suggested_revision: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct MotifMapping {
    pub chapters_present: Vec<MotifIncarnation>,
    pub echo_planting_opportunities: Vec<EchoOpportunity>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Phase3Result {
    pub motif_mapping: BTreeMap<String, MotifMapping>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AlternativeRevision {
    pub alternative_number: u32,
    pub approach: String,
    pub revised_text: String,
    pub why_this_works: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ShowDontTellResult {
    pub source: String,
    pub current_telling_text: String,
    pub what_is_conveyed: String,
    pub problems: Vec<String>,
    pub alternative_revisions: Vec<AlternativeRevision>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Phase4Result {
    pub per_passage: Vec<ShowDontTellResult>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct ReportArtifacts {
    pub interactive_map_html: String,
    pub audit_report_md: String,
    pub enrichment_toolkit_md: String,
    pub revisions_md: String,
    pub roadmap_csv: String,
}

/// Everything one audit produces, serialized as a single flat object.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AuditResult {
    #[serde(flatten)]
    pub baseline: Phase1Result,
    #[serde(flatten)]
    pub richness: Phase2Result,
    #[serde(flatten)]
    pub motifs: Phase3Result,
    #[serde(flatten)]
    pub show_dont_tell: Phase4Result,
    #[serde(flatten)]
    pub artifacts: ReportArtifacts,
}

//*** END FILE: src/types/audit_data.rs ***//
