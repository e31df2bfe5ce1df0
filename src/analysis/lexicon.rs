//*** START FILE: src/analysis/lexicon.rs ***//
use serde::{Deserialize, Serialize};

/// A named bucket of keywords. Matching is whole-word and case-insensitive.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeywordCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

impl KeywordCategory {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        KeywordCategory {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Ordered category table. Declaration order is significant: counts are
/// reported in it and ranking ties fall back to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    categories: Vec<KeywordCategory>,
}

impl KeywordTable {
    pub fn new(categories: Vec<KeywordCategory>) -> Self {
        KeywordTable { categories }
    }

    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Self {
        KeywordTable::new(
            pairs
                .iter()
                .map(|(name, keywords)| KeywordCategory::new(name, keywords))
                .collect(),
        )
    }

    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&KeywordCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

pub const TELL_CATEGORY: &str = "telling";

const SENSORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("touch", &["touch", "feel", "texture", "skin", "hand", "finger", "pressure", "smooth", "rough", "soft", "hard", "warmth", "contact"]),
    ("sound", &["hear", "sound", "noise", "voice", "whisper", "echo", "ring", "hum", "crackle", "silence", "music", "tone"]),
    ("sight", &["see", "look", "view", "color", "light", "dark", "shadow", "bright", "dim", "glimpse", "stare", "visual"]),
    ("temperature", &["hot", "cold", "warm", "cool", "heat", "chill", "freeze", "burn", "temperature", "fever"]),
    ("smell", &["smell", "scent", "odor", "aroma", "perfume", "stench", "fragrance", "whiff", "nose"]),
];

const MOTIF_KEYWORDS: &[(&str, &[&str])] = &[
    ("fire", &["fire", "flame", "burn", "heat", "ash", "smoke", "ember", "ignite", "blaze"]),
    ("cold", &["cold", "ice", "freeze", "frost", "chill", "snow", "winter", "freezing"]),
    ("documentation", &["record", "document", "ledger", "scroll", "note", "write", "paper", "book", "archive"]),
    ("touch", &["touch", "contact", "skin", "hand", "feel", "caress", "grip", "hold"]),
    ("light", &["light", "bright", "glow", "shine", "illuminate", "clarity", "vision", "beam"]),
];

const TELL_WORDS: &[&str] = &[
    "feel", "think", "believe", "know", "understand", "realize", "emotion", "sad", "happy", "angry",
];

pub fn default_sensory_table() -> KeywordTable {
    KeywordTable::from_pairs(SENSORY_KEYWORDS)
}

pub fn default_motif_table() -> KeywordTable {
    KeywordTable::from_pairs(MOTIF_KEYWORDS)
}

pub fn default_tell_words() -> Vec<String> {
    TELL_WORDS.iter().map(|w| w.to_string()).collect()
}

/// The three keyword sources every audit scans with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    pub sensory: KeywordTable,
    pub motifs: KeywordTable,
    pub tell_words: Vec<String>,
}

impl Lexicon {
    /// Tell words wrapped as a single-category table so the scanner can count them.
    pub fn tell_table(&self) -> KeywordTable {
        KeywordTable::new(vec![KeywordCategory {
            name: TELL_CATEGORY.to_string(),
            keywords: self.tell_words.clone(),
        }])
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            sensory: default_sensory_table(),
            motifs: default_motif_table(),
            tell_words: default_tell_words(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sensory_categories_in_order() {
        let table = default_sensory_table();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["touch", "sound", "sight", "temperature", "smell"]);
        for category in table.categories() {
            assert!((9..=13).contains(&category.keywords.len()), "{}", category.name);
        }
    }

    #[test]
    fn test_default_motif_categories() {
        let table = default_motif_table();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["fire", "cold", "documentation", "touch", "light"]);
        for category in table.categories() {
            assert!((8..=9).contains(&category.keywords.len()), "{}", category.name);
        }
    }

    #[test]
    fn test_unknown_category_lookup() {
        assert!(default_motif_table().category("water").is_none());
    }

    #[test]
    fn test_tell_table_wraps_words() {
        let lexicon = Lexicon::default();
        let table = lexicon.tell_table();
        assert_eq!(table.len(), 1);
        assert_eq!(table.categories()[0].keywords.len(), 10);
    }
}
//*** END FILE: src/analysis/lexicon.rs ***//
