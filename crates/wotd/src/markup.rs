//! Small DOM helpers over `scraper` shared by the adapters and parsers.

use crate::error::{Result, WotdError};
use scraper::{ElementRef, Selector};

/// Collect all text content from an element, trimmed and whitespace-collapsed.
pub fn element_text(el: &ElementRef<'_>) -> String {
    el.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The element sibling immediately after `el`, skipping text and comments.
pub fn next_element_sibling<'a>(el: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// The element sibling immediately before `el`, skipping text and comments.
pub fn prev_element_sibling<'a>(el: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.prev_siblings().find_map(ElementRef::wrap)
}

/// Whether `el` carries the given class.
pub fn has_class(el: &ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Parse a CSS selector, reporting bad selectors as configuration errors.
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| WotdError::Config(format!("invalid selector {css:?}: {e}")))
}
