//! Static-page adapter: one plain HTML fetch, selector and regex extraction.
//!
//! The page carries the word in a known element, the definition in the
//! element right after it, and a single example after an "EXAMPLES" heading,
//! written as `sentence — translation`.

use super::http_client::HttpClient;
use crate::error::{Result, WotdError};
use crate::markup::{element_text, next_element_sibling, selector};
use crate::model::{Example, Language, WordOfDay};
use regex::{Regex, RegexBuilder};
use scraper::node::Node;
use scraper::{ElementRef, Html};
use tracing::{debug, info};
use url::Url;

/// Marker text preceding the example block (matched case-insensitively).
const EXAMPLES_MARKER: &str = "examples";

/// Separator between the example sentence and its translation.
const EXAMPLE_SEPARATOR: char = '—';

/// Fixed per-language description of a static word-of-the-day page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPageConfig {
    pub language: Language,
    /// Page holding today's word.
    pub page_url: String,
    /// Link fallback; `{word}` is replaced by the encoded headword.
    pub translate_url_template: String,
    /// CSS selectors of the headword element, tried in order.
    pub word_selectors: Vec<String>,
    /// Leading grammatical article to strip for the core headword.
    pub article_pattern: String,
}

impl StaticPageConfig {

    /// Translate-endpoint URL for a word.
    pub fn translate_url(&self, word: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(word.as_bytes())
            .collect::<String>()
            .replace('+', "%20");
        self.translate_url_template.replace("{word}", &encoded)
    }
}

/// All languages served by a static page.
pub fn builtin_static_pages() -> Vec<StaticPageConfig> {
    vec![StaticPageConfig {
        language: Language::from_static("spanish"),
        page_url: "https://www.spanishdict.com/wordoftheday".to_string(),
        translate_url_template: "https://www.spanishdict.com/translate/{word}".to_string(),
        word_selectors: vec![
            "a[class*='wotdWord']".to_string(),
            "div[class*='wotdWord']".to_string(),
            "h3".to_string(),
        ],
        article_pattern: r"^(el|la|los|las|un|una|unos|unas)\s+".to_string(),
    }]
}

/// Leading English article stripped from the definition.
const ENGLISH_ARTICLES: &str = r"^(the|a|an)\s+";

fn article_regex(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| WotdError::Config(format!("invalid article pattern {pattern:?}: {e}")))
}

// ── Public API ──────────────────────────────────────────────────────────────

/// Fetch the configured page and extract today's word.
pub async fn fetch(client: &HttpClient, config: &StaticPageConfig) -> Result<WordOfDay> {
    info!(
        "fetching static word page for {}: {}",
        config.language, config.page_url
    );
    let resp = client.get_document(&config.page_url).await?;
    extract_word(&resp.body, &resp.final_url, config)
}

/// Extract a [`WordOfDay`] from an already fetched page.
///
/// `base_url` resolves relative links found inside the headword element.
pub fn extract_word(html: &str, base_url: &str, config: &StaticPageConfig) -> Result<WordOfDay> {
    let document = Html::parse_document(html);
    let word_el = find_word_element(&document, &config.word_selectors)?.ok_or_else(|| {
        WotdError::Parse(format!(
            "word element `{}` not found on {}",
            config.word_selectors.join(" | "),
            base_url
        ))
    })?;

    let headword = element_text(&word_el);
    let core_headword = article_regex(&config.article_pattern)?
        .replace(&headword, "")
        .trim()
        .to_string();

    let translation = next_element_sibling(&word_el)
        .map(|el| element_text(&el))
        .unwrap_or_default();
    let core_translation = article_regex(ENGLISH_ARTICLES)?
        .replace(&translation, "")
        .trim()
        .to_string();

    let url = anchor_url(&word_el, base_url).unwrap_or_else(|| config.translate_url(&headword));

    let examples: Vec<Example> = example_block(&document)
        .and_then(|block| split_example(&element_text(&block)))
        .into_iter()
        .collect();
    debug!("static page yielded {} example(s)", examples.len());

    Ok(WordOfDay::new(headword, translation)?
        .with_core_headword(core_headword)
        .with_core_translation(core_translation)
        .with_url(url)
        .with_examples(examples)
        .with_rendering(
            config.language.uses_romanization(),
            config.language.bold_core_word(),
        ))
}

// ── Private helpers ──────────────────────────────────────────────────────────

/// First match of the earliest selector that matches anything.
fn find_word_element<'a>(document: &'a Html, selectors: &[String]) -> Result<Option<ElementRef<'a>>> {
    for css in selectors {
        if let Some(el) = document.select(&selector(css)?).next() {
            return Ok(Some(el));
        }
    }
    Ok(None)
}

/// Absolute URL of the first anchor inside the headword element.
fn anchor_url(word_el: &ElementRef<'_>, base_url: &str) -> Option<String> {
    let anchor_sel = selector("a[href]").ok()?;
    let href = match word_el.value().attr("href") {
        Some(href) if word_el.value().name() == "a" => href,
        _ => word_el
            .select(&anchor_sel)
            .next()
            .and_then(|a| a.value().attr("href"))?,
    };
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    match Url::parse(base_url) {
        Ok(base) => base.join(href).ok().map(|u| u.to_string()),
        Err(_) => Url::parse(href).ok().map(|u| u.to_string()),
    }
}

/// The element following the container of the first "EXAMPLES" text node.
fn example_block(document: &Html) -> Option<ElementRef<'_>> {
    document.tree.nodes().find_map(|node| {
        let Node::Text(text) = node.value() else {
            return None;
        };
        if !text.to_lowercase().contains(EXAMPLES_MARKER) {
            return None;
        }
        let container = node.parent().and_then(ElementRef::wrap)?;
        if matches!(container.value().name(), "script" | "style" | "title") {
            return None;
        }
        next_element_sibling(&container)
    })
}

/// Split `sentence — translation` once; without a dash the whole text is
/// the sentence.
fn split_example(text: &str) -> Option<Example> {
    match text.split_once(EXAMPLE_SEPARATOR) {
        Some((sentence, translation)) => Example::new(sentence.trim(), translation.trim()),
        None => Example::new(text.trim(), ""),
    }
}
