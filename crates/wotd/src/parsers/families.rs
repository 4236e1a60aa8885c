//! Per-family extraction tables for the widget markup.
//!
//! The traversal is the same for every family; what differs is which
//! annotation classes are read and where examples keep their details.

use crate::model::{AnnotationField, LanguageFamily};

/// Class of the headword element.
pub const WORD_CLASS: &str = "wotd-widget-word";
/// Class of the word translation, a sibling of the headword.
pub const TRANSLATION_CLASS: &str = "wotd-widget-translation";
/// Class of each example sentence.
pub const SENTENCE_CLASS: &str = "wotd-widget-sentence";
/// Class of each example translation.
pub const SENTENCE_TRANSLATION_CLASS: &str = "wotd-widget-sentence-translation";

/// Reads one annotation from elements carrying `class`.
#[derive(Debug, Clone, Copy)]
pub struct FieldExtractor {
    pub field: AnnotationField,
    pub class: &'static str,
}

/// Where an example's translation and annotations are found.
#[derive(Debug, Clone, Copy)]
pub enum ExampleLayout {
    /// Sentences and translations are flat lists paired by position. An
    /// annotation is the element directly before the translation, when it
    /// carries one of these classes.
    Positional {
        before_translation: &'static [FieldExtractor],
    },
    /// Each sentence sits in its own block; the block right after it holds
    /// the translation and these annotations.
    SiblingBlock {
        details: &'static [FieldExtractor],
    },
}

/// Extraction rules for one language family.
#[derive(Debug, Clone, Copy)]
pub struct FamilyProfile {
    pub family: LanguageFamily,
    /// Word-level annotations, read from siblings of the headword.
    pub word_fields: &'static [FieldExtractor],
    pub example_layout: ExampleLayout,
}

const ROMANIZATION: FieldExtractor = FieldExtractor {
    field: AnnotationField::Romanization,
    class: "wotd-widget-romanization",
};

const KANA: FieldExtractor = FieldExtractor {
    field: AnnotationField::Kana,
    class: "wotd-widget-kana",
};

const ROMAJI: FieldExtractor = FieldExtractor {
    field: AnnotationField::Romaji,
    class: "wotd-widget-romaji",
};

const PINYIN: FieldExtractor = FieldExtractor {
    field: AnnotationField::Pinyin,
    class: "wotd-widget-pinyin",
};

const TRADITIONAL: FieldExtractor = FieldExtractor {
    field: AnnotationField::Traditional,
    class: "wotd-widget-traditional",
};

pub const GENERIC: FamilyProfile = FamilyProfile {
    family: LanguageFamily::Generic,
    word_fields: &[ROMANIZATION],
    example_layout: ExampleLayout::Positional {
        before_translation: &[ROMANIZATION],
    },
};

pub const JAPANESE: FamilyProfile = FamilyProfile {
    family: LanguageFamily::Japanese,
    word_fields: &[KANA, ROMAJI],
    example_layout: ExampleLayout::SiblingBlock {
        details: &[KANA, ROMAJI],
    },
};

pub const CHINESE: FamilyProfile = FamilyProfile {
    family: LanguageFamily::Chinese,
    word_fields: &[PINYIN, TRADITIONAL],
    example_layout: ExampleLayout::SiblingBlock {
        details: &[PINYIN, TRADITIONAL],
    },
};

impl FamilyProfile {
    pub fn for_family(family: LanguageFamily) -> &'static FamilyProfile {
        match family {
            LanguageFamily::Generic => &GENERIC,
            LanguageFamily::Japanese => &JAPANESE,
            LanguageFamily::Chinese => &CHINESE,
        }
    }
}
