//! Normalized word-of-the-day record shared by every source.
//!
//! Each source produces exactly one [`WordOfDay`]; the formatter and the
//! duplicate check only ever see this shape, whatever the page looked like.

pub mod language;

pub use language::{Language, LanguageFamily};

use crate::error::{Result, WotdError};
use serde::Serialize;

/// Name of an optional script annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationField {
    /// Kana reading (Japanese).
    Kana,
    /// Latin-letter reading of the kana (Japanese).
    Romaji,
    /// Traditional character form (Chinese).
    Traditional,
    /// Phonetic spelling (Chinese pinyin).
    Pinyin,
    /// Generic romanization for non-Latin scripts.
    Romanization,
}

/// Optional per-script readings attached to a word or an example.
///
/// Empty strings are never stored; a blank value reads back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptAnnotations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub romaji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traditional: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub romanization: Option<String>,
}

impl ScriptAnnotations {
    pub fn get(&self, field: AnnotationField) -> Option<&str> {
        match field {
            AnnotationField::Kana => self.kana.as_deref(),
            AnnotationField::Romaji => self.romaji.as_deref(),
            AnnotationField::Traditional => self.traditional.as_deref(),
            AnnotationField::Pinyin => self.pinyin.as_deref(),
            AnnotationField::Romanization => self.romanization.as_deref(),
        }
    }

    /// Store `value` under `field`, dropping blank values.
    pub fn set(&mut self, field: AnnotationField, value: impl Into<String>) {
        let value = non_blank(value.into());
        match field {
            AnnotationField::Kana => self.kana = value,
            AnnotationField::Romaji => self.romaji = value,
            AnnotationField::Traditional => self.traditional = value,
            AnnotationField::Pinyin => self.pinyin = value,
            AnnotationField::Romanization => self.romanization = value,
        }
    }
}

/// One usage sentence with its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    sentence: String,
    translation: String,
    annotations: ScriptAnnotations,
}

impl Example {
    /// Build an example; returns `None` when both sides are blank.
    pub fn new(sentence: impl Into<String>, translation: impl Into<String>) -> Option<Self> {
        let sentence = sentence.into().trim().to_string();
        let translation = translation.into().trim().to_string();
        if sentence.is_empty() && translation.is_empty() {
            return None;
        }
        Some(Self {
            sentence,
            translation,
            annotations: ScriptAnnotations::default(),
        })
    }

    pub fn with_annotations(mut self, annotations: ScriptAnnotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn annotations(&self) -> &ScriptAnnotations {
        &self.annotations
    }
}

/// The normalized daily record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordOfDay {
    headword: String,
    translation: String,
    url: String,
    examples: Vec<Example>,
    core_headword: Option<String>,
    core_translation: Option<String>,
    annotations: ScriptAnnotations,
    use_romanization: bool,
    bold_core_word: bool,
}

impl WordOfDay {
    /// Start a record. Fails when the headword is blank.
    pub fn new(headword: impl Into<String>, translation: impl Into<String>) -> Result<Self> {
        let headword = headword.into().trim().to_string();
        if headword.is_empty() {
            return Err(WotdError::Parse("headword is empty".into()));
        }
        Ok(Self {
            headword,
            translation: translation.into().trim().to_string(),
            url: String::new(),
            examples: Vec::new(),
            core_headword: None,
            core_translation: None,
            annotations: ScriptAnnotations::default(),
            use_romanization: false,
            bold_core_word: true,
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_examples(mut self, examples: Vec<Example>) -> Self {
        self.examples = examples;
        self
    }

    /// Set the article-stripped headword. Ignored when blank or identical
    /// to the headword.
    pub fn with_core_headword(mut self, core: impl Into<String>) -> Self {
        self.core_headword = distinct_core(core.into(), &self.headword);
        self
    }

    pub fn with_core_translation(mut self, core: impl Into<String>) -> Self {
        self.core_translation = distinct_core(core.into(), &self.translation);
        self
    }

    pub fn with_annotations(mut self, annotations: ScriptAnnotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_rendering(mut self, use_romanization: bool, bold_core_word: bool) -> Self {
        self.use_romanization = use_romanization;
        self.bold_core_word = bold_core_word;
        self
    }

    pub fn headword(&self) -> &str {
        &self.headword
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn primary_example(&self) -> Option<&Example> {
        self.examples.first()
    }

    pub fn core_headword(&self) -> Option<&str> {
        self.core_headword.as_deref()
    }

    pub fn core_translation(&self) -> Option<&str> {
        self.core_translation.as_deref()
    }

    pub fn annotations(&self) -> &ScriptAnnotations {
        &self.annotations
    }

    pub fn use_romanization(&self) -> bool {
        self.use_romanization
    }

    pub fn bold_core_word(&self) -> bool {
        self.bold_core_word
    }

    /// Headword used for emphasis: the core form when known.
    pub fn emphasis_word(&self) -> &str {
        self.core_headword.as_deref().unwrap_or(&self.headword)
    }

    pub fn emphasis_translation(&self) -> &str {
        self.core_translation.as_deref().unwrap_or(&self.translation)
    }

    /// Identity across runs: the core headword if present, else the headword.
    pub fn dedup_key(&self) -> &str {
        self.emphasis_word()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

fn distinct_core(core: String, full: &str) -> Option<String> {
    non_blank(core).filter(|c| c != full)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_headword_is_rejected() {
        assert!(WordOfDay::new("   ", "house").is_err());
        assert!(WordOfDay::new("casa", "").is_ok());
    }

    #[test]
    fn test_dedup_key_prefers_core() {
        let plain = WordOfDay::new("la casa", "the house").unwrap();
        assert_eq!(plain.dedup_key(), "la casa");

        let cored = plain.clone().with_core_headword("casa");
        assert_eq!(cored.dedup_key(), "casa");

        let again = WordOfDay::new("la casa", "a home")
            .unwrap()
            .with_core_headword("casa");
        assert_eq!(cored.dedup_key(), again.dedup_key());
    }

    #[test]
    fn test_core_identical_to_headword_is_dropped() {
        let word = WordOfDay::new("perro", "dog")
            .unwrap()
            .with_core_headword("perro")
            .with_core_translation(" ");
        assert_eq!(word.core_headword(), None);
        assert_eq!(word.core_translation(), None);
        assert_eq!(word.emphasis_translation(), "dog");
    }

    #[test]
    fn test_example_requires_some_text() {
        assert!(Example::new("", "  ").is_none());
        let ex = Example::new("El perro corre", "").unwrap();
        assert_eq!(ex.sentence(), "El perro corre");
        assert_eq!(ex.translation(), "");
    }

    #[test]
    fn test_annotations_drop_blank_values() {
        let mut ann = ScriptAnnotations::default();
        ann.set(AnnotationField::Kana, "  ");
        ann.set(AnnotationField::Pinyin, " gǒu ");
        assert!(ann.kana.is_none());
        assert_eq!(ann.get(AnnotationField::Pinyin), Some("gǒu"));
        assert_ne!(ann, ScriptAnnotations::default());
    }
}
