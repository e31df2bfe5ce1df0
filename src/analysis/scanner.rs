//*** START FILE: src/analysis/scanner.rs ***//
use super::lexicon::KeywordTable;
use super::resolve_or_default;
use crate::types::audit_data::CategoryCounts;
use log::warn;
use regex::Regex;

#[derive(Debug, Clone)]
struct CompiledCategory {
    name: String,
    patterns: Vec<Regex>,
}

/// Counts whole-word, case-insensitive keyword hits per category.
///
/// Patterns are compiled once per table; a scanner is then reused for every
/// span of the manuscript.
#[derive(Debug, Clone)]
pub struct LexemeScanner {
    categories: Vec<CompiledCategory>,
}

impl LexemeScanner {
    pub fn new(table: &KeywordTable) -> Self {
        let categories = table
            .categories()
            .iter()
            .map(|category| CompiledCategory {
                name: category.name.clone(),
                patterns: category
                    .keywords
                    .iter()
                    .filter_map(|keyword| whole_word_pattern(keyword))
                    .collect(),
            })
            .collect();
        LexemeScanner { categories }
    }

    /// Hit count for every category, in declaration order.
    pub fn scan(&self, text: &str) -> CategoryCounts {
        CategoryCounts(
            self.categories
                .iter()
                .map(|c| (c.name.clone(), count_matches(&c.patterns, text)))
                .collect(),
        )
    }

    /// Hit count for one category. Unknown categories count zero.
    pub fn count_category(&self, text: &str, name: &str) -> usize {
        let patterns: &[Regex] = resolve_or_default(
            self.categories
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.patterns.as_slice()),
            "keyword category",
            name,
        );
        count_matches(patterns, text)
    }

    /// Hits across all categories together.
    pub fn count_all(&self, text: &str) -> usize {
        self.categories
            .iter()
            .map(|c| count_matches(&c.patterns, text))
            .sum()
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }
}

fn whole_word_pattern(keyword: &str) -> Option<Regex> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return None;
    }
    match Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword))) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Skipping keyword '{}': {}", keyword, e);
            None
        }
    }
}

fn count_matches(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}

//*** END FILE: src/analysis/scanner.rs ***//
