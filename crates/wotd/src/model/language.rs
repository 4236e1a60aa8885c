//! Language names and the fixed per-language rendering tables.

use crate::error::WotdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages whose phonetic line is a Latin romanization rather than a
/// native-script reading.
const ROMANIZED_LANGUAGES: &[&str] = &[
    "arabic", "dari", "farsi", "hebrew", "hindi", "korean", "pashto", "russian", "urdu",
];

/// Languages where emphasizing the headword inside a sentence is unreliable:
/// no word boundaries, or letter shapes that change when joined.
const NO_BOLD_LANGUAGES: &[&str] = &[
    "arabic", "chinese", "dari", "farsi", "hebrew", "japanese", "mandarin", "pashto", "urdu",
];

/// Script family of a language, selecting which widget parser applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageFamily {
    /// Word, translation, optional romanization.
    Generic,
    /// Kanji/kana with a kana reading and romaji.
    Japanese,
    /// Han characters with pinyin and a traditional form.
    Chinese,
}

impl LanguageFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Japanese => "japanese",
            Self::Chinese => "chinese",
        }
    }
}

/// A requested language, normalized to a trimmed lower-case name
/// (e.g. `"spanish"`, `"japanese"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language(String);

impl Language {
    /// Build from a known-good lower-case name.
    pub(crate) fn from_static(name: &'static str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parser family for this language.
    pub fn family(&self) -> LanguageFamily {
        match self.0.as_str() {
            "japanese" => LanguageFamily::Japanese,
            "chinese" | "mandarin" => LanguageFamily::Chinese,
            _ => LanguageFamily::Generic,
        }
    }

    /// Whether the romanization field is shown in titles.
    pub fn uses_romanization(&self) -> bool {
        ROMANIZED_LANGUAGES.contains(&self.0.as_str())
    }

    /// Whether the headword is emphasized inside example sentences.
    pub fn bold_core_word(&self) -> bool {
        !NO_BOLD_LANGUAGES.contains(&self.0.as_str())
    }
}

impl FromStr for Language {
    type Err = WotdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        if name.is_empty() {
            return Err(WotdError::Config("language name is empty".into()));
        }
        if !name.chars().all(|c| c.is_alphabetic() || c == '-' || c == '_') {
            return Err(WotdError::Config(format!("invalid language name: {s:?}")));
        }
        Ok(Self(name))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
