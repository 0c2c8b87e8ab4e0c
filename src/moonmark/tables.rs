//! Configuration tables consulted by the pipeline
//!
//! The tables are plain data: they deserialize from the `moonmark-config` TOML and are
//! handed to [`NarrativeFormatter`](crate::moonmark::formatter::NarrativeFormatter) at
//! construction. Nothing mutates them afterwards.

use crate::moonmark::ast::ClassificationTag;
use serde::{Deserialize, Serialize};

/// Icon used when no keyword matches a section title.
pub const DEFAULT_ICON: &str = "🌟";

/// All tables the engine needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatterTables {
    #[serde(default)]
    pub icons: IconTable,
    #[serde(default)]
    pub highlight: HighlightVocabulary,
    #[serde(default)]
    pub classification: ClassificationTables,
}

/// Ordered keyword → icon pairs for section headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconTable {
    #[serde(default = "default_icon")]
    pub default: String,
    #[serde(default)]
    pub entries: Vec<IconEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconEntry {
    pub keyword: String,
    pub icon: String,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl Default for IconTable {
    fn default() -> Self {
        Self {
            default: default_icon(),
            entries: Vec::new(),
        }
    }
}

impl IconTable {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry; entries are consulted in insertion order.
    pub fn with_entry(mut self, keyword: impl Into<String>, icon: impl Into<String>) -> Self {
        self.entries.push(IconEntry {
            keyword: keyword.into(),
            icon: icon.into(),
        });
        self
    }

    /// Icon for a section title: the first entry whose keyword occurs in the lowercased,
    /// trimmed title, else the default.
    pub fn icon_for(&self, title: &str) -> &str {
        let lowered = title.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(&entry.keyword.to_lowercase()))
            .map(|entry| entry.icon.as_str())
            .unwrap_or(self.default.as_str())
    }
}

/// Words wrapped in highlight spans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightVocabulary {
    #[serde(default)]
    pub words: Vec<String>,
}

/// One ordered keyword list per [`ClassificationTag`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationTables {
    pub importance: Vec<String>,
    pub caution: Vec<String>,
    pub success: Vec<String>,
    pub romance: Vec<String>,
    pub career: Vec<String>,
    pub finance: Vec<String>,
    pub health: Vec<String>,
    pub family: Vec<String>,
    pub travel: Vec<String>,
}

impl ClassificationTables {
    pub fn keywords(&self, tag: ClassificationTag) -> &[String] {
        match tag {
            ClassificationTag::Importance => &self.importance,
            ClassificationTag::Caution => &self.caution,
            ClassificationTag::Success => &self.success,
            ClassificationTag::Romance => &self.romance,
            ClassificationTag::Career => &self.career,
            ClassificationTag::Finance => &self.finance,
            ClassificationTag::Health => &self.health,
            ClassificationTag::Family => &self.family,
            ClassificationTag::Travel => &self.travel,
        }
    }

    pub fn keywords_mut(&mut self, tag: ClassificationTag) -> &mut Vec<String> {
        match tag {
            ClassificationTag::Importance => &mut self.importance,
            ClassificationTag::Caution => &mut self.caution,
            ClassificationTag::Success => &mut self.success,
            ClassificationTag::Romance => &mut self.romance,
            ClassificationTag::Career => &mut self.career,
            ClassificationTag::Finance => &mut self.finance,
            ClassificationTag::Health => &mut self.health,
            ClassificationTag::Family => &mut self.family,
            ClassificationTag::Travel => &mut self.travel,
        }
    }

    /// Groups in priority order with their keyword lists.
    pub fn groups(&self) -> impl Iterator<Item = (ClassificationTag, &[String])> {
        ClassificationTag::PRIORITY
            .into_iter()
            .map(move |tag| (tag, self.keywords(tag)))
    }
}
