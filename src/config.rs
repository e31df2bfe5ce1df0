use crate::analysis::lexicon::{
    default_motif_table, default_sensory_table, default_tell_words, KeywordCategory, KeywordTable,
    Lexicon,
};
use crate::error::AuditError;
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "sensory_audit.toml";

/// Keyword tables as configured. Any table left out falls back to the built-in one.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct LexiconConfig {
    pub sensory: Option<Vec<KeywordCategory>>,
    pub motifs: Option<Vec<KeywordCategory>>,
    pub tell_words: Option<Vec<String>>,
}

impl LexiconConfig {
    pub fn build(&self) -> Lexicon {
        Lexicon {
            sensory: self
                .sensory
                .clone()
                .map(KeywordTable::new)
                .unwrap_or_else(default_sensory_table),
            motifs: self
                .motifs
                .clone()
                .map(KeywordTable::new)
                .unwrap_or_else(default_motif_table),
            tell_words: self.tell_words.clone().unwrap_or_else(default_tell_words),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AuditConfig {
    /// Richness Auditor window length, in characters.
    pub section_length: usize,
    /// Phase 1 baseline when no exemplary passage resolves.
    pub default_baseline_score: f64,
    pub quote_length: usize,
    pub telling_excerpt_length: usize,
    pub revision_excerpt_length: usize,
    pub lexicon: LexiconConfig,
}

impl Default for AuditConfig {
    fn default() -> Self {
        AuditConfig {
            section_length: 2500,
            default_baseline_score: 7.5,
            quote_length: 200,
            telling_excerpt_length: 100,
            revision_excerpt_length: 140,
            lexicon: LexiconConfig::default(),
        }
    }
}

impl AuditConfig {
    pub fn validate(&self) -> Result<(), AuditError> {
        if self.section_length == 0 {
            return Err(AuditError::Config("section_length must be at least 1".to_string()));
        }
        if !self.default_baseline_score.is_finite() {
            return Err(AuditError::Config(
                "default_baseline_score must be a finite number".to_string(),
            ));
        }
        Ok(())
    }

    pub fn lexicon(&self) -> Lexicon {
        self.lexicon.build()
    }
}

pub fn parse_config(contents: &str) -> Result<AuditConfig, AuditError> {
    let config = toml::from_str::<AuditConfig>(contents)
        .map_err(|e| AuditError::Config(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config_from_file(file_path: &Path) -> Result<AuditConfig, AuditError> {
    match fs::read_to_string(file_path) {
        Ok(contents) => parse_config(&contents).map_err(|e| match e {
            AuditError::Config(msg) => {
                AuditError::Config(format!("{} ({})", msg, file_path.display()))
            }
            other => other,
        }),
        Err(e) => Err(AuditError::io(file_path, e)),
    }
}

/// An explicit path must load; otherwise the default file is used if present,
/// and built-in defaults if not.
pub fn resolve_config(explicit: Option<&Path>) -> Result<AuditConfig, AuditError> {
    if let Some(path) = explicit {
        let config = load_config_from_file(path)?;
        info!("Loaded audit configuration from {}", path.display());
        return Ok(config);
    }

    let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if default_path.is_file() {
        let config = load_config_from_file(&default_path)?;
        info!("Loaded audit configuration from {}", default_path.display());
        Ok(config)
    } else {
        info!("Using built-in audit configuration");
        Ok(AuditConfig::default())
    }
}
