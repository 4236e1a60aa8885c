//! Widget markup parsers.
//!
//! One traversal ([`traversal::extract`]) driven by a per-family table
//! ([`families::FamilyProfile`]), followed by a uniform normalization step
//! that sets the canonical URL and the rendering flags.

pub mod families;
pub mod traversal;

use crate::error::Result;
use crate::model::{Language, WordOfDay};
use families::FamilyProfile;

/// Canonical page for a widget language; `{language}` is the lower-case name.
pub const CANONICAL_URL_TEMPLATE: &str =
    "https://www.transparent.com/word-of-the-day/today/{language}.html";

/// Parse rendered widget markup for `language`.
pub fn parse_widget(html: &str, language: &Language) -> Result<WordOfDay> {
    let profile = FamilyProfile::for_family(language.family());
    let word = traversal::extract(html, profile)?;
    Ok(normalize(word, language))
}

/// Canonical URL for a widget-sourced record.
pub fn canonical_url(language: &Language) -> String {
    CANONICAL_URL_TEMPLATE.replace("{language}", language.as_str())
}

fn normalize(word: WordOfDay, language: &Language) -> WordOfDay {
    word.with_url(canonical_url(language))
        .with_rendering(language.uses_romanization(), language.bold_core_word())
}
