//! The one traversal shared by every language family.

use super::families::{
    ExampleLayout, FamilyProfile, FieldExtractor, SENTENCE_CLASS, SENTENCE_TRANSLATION_CLASS,
    TRANSLATION_CLASS, WORD_CLASS,
};
use crate::error::{Result, WotdError};
use crate::markup::{element_text, has_class, next_element_sibling, prev_element_sibling, selector};
use crate::model::{Example, ScriptAnnotations, WordOfDay};
use scraper::{ElementRef, Html};
use tracing::debug;

/// Extract headword, translation, word annotations and examples.
///
/// The returned record carries no URL or rendering flags; those are applied
/// by the caller's normalization step.
pub fn extract(html: &str, profile: &FamilyProfile) -> Result<WordOfDay> {
    let document = Html::parse_document(html);

    let word_el = first(&document, &format!(".{WORD_CLASS}"))?
        .ok_or_else(|| WotdError::Parse(format!("no `.{WORD_CLASS}` element in widget")))?;
    let translation_el = first(&document, &format!(".{WORD_CLASS} ~ .{TRANSLATION_CLASS}"))?
        .ok_or_else(|| WotdError::Parse(format!("no `.{TRANSLATION_CLASS}` element in widget")))?;

    let head = head_siblings(&word_el);
    let mut annotations = ScriptAnnotations::default();
    for extractor in profile.word_fields {
        if let Some(el) = head.iter().find(|el| has_class(el, extractor.class)) {
            annotations.set(extractor.field, element_text(el));
        }
    }

    let examples = match profile.example_layout {
        ExampleLayout::Positional { before_translation } => {
            positional_examples(&document, before_translation)?
        }
        ExampleLayout::SiblingBlock { details } => sibling_block_examples(&document, details)?,
    };
    debug!(
        "{} widget parsed: {} example(s)",
        profile.family.as_str(),
        examples.len()
    );

    Ok(WordOfDay::new(element_text(&word_el), element_text(&translation_el))?
        .with_annotations(annotations)
        .with_examples(examples))
}

// ── Example layouts ──────────────────────────────────────────────────────────

/// Pair the i-th sentence with the i-th translation.
fn positional_examples(document: &Html, before_translation: &[FieldExtractor]) -> Result<Vec<Example>> {
    let sentences = selector(&format!(".{SENTENCE_CLASS}"))?;
    let translations = selector(&format!(".{SENTENCE_TRANSLATION_CLASS}"))?;

    let examples = document
        .select(&sentences)
        .zip(document.select(&translations))
        .filter_map(|(sentence_el, translation_el)| {
            let mut annotations = ScriptAnnotations::default();
            if let Some(prev) = prev_element_sibling(&translation_el) {
                for extractor in before_translation {
                    if has_class(&prev, extractor.class) {
                        annotations.set(extractor.field, element_text(&prev));
                    }
                }
            }
            Example::new(element_text(&sentence_el), element_text(&translation_el))
                .map(|ex| ex.with_annotations(annotations))
        })
        .collect();
    Ok(examples)
}

/// Read each example's details from the block following its sentence block.
fn sibling_block_examples(document: &Html, details: &[FieldExtractor]) -> Result<Vec<Example>> {
    let sentences = selector(&format!(".{SENTENCE_CLASS}"))?;
    let translation = selector(&format!(".{SENTENCE_TRANSLATION_CLASS}"))?;
    let detail_selectors = details
        .iter()
        .map(|d| -> Result<_> { Ok((d.field, selector(&format!(".{}", d.class))?)) })
        .collect::<Result<Vec<_>>>()?;

    let mut examples = Vec::new();
    for sentence_el in document.select(&sentences) {
        let block = sentence_el.parent().and_then(ElementRef::wrap);
        let detail_block = block.as_ref().and_then(next_element_sibling);

        let mut annotations = ScriptAnnotations::default();
        let mut translation_text = String::new();
        if let Some(detail_block) = detail_block {
            if let Some(el) = detail_block.select(&translation).next() {
                translation_text = element_text(&el);
            }
            for (field, sel) in &detail_selectors {
                if let Some(el) = detail_block.select(sel).next() {
                    annotations.set(*field, element_text(&el));
                }
            }
        }

        if let Some(example) = Example::new(element_text(&sentence_el), translation_text) {
            examples.push(example.with_annotations(annotations));
        }
    }
    Ok(examples)
}

/// Element siblings after the headword, up to the first example sentence.
fn head_siblings<'a>(word_el: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    word_el
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|el| !has_class(el, SENTENCE_CLASS))
        .collect()
}

fn first<'a>(document: &'a Html, css: &str) -> Result<Option<ElementRef<'a>>> {
    Ok(document.select(&selector(css)?).next())
}

#[cfg(test)]
mod tests {
    use super::super::families::{CHINESE, GENERIC, JAPANESE};
    use super::*;

    const GENERIC_WIDGET: &str = r#"<html><body><div class="wotd-widget">
        <p class="wotd-widget-word">собака</p>
        <p class="wotd-widget-romanization">sobaka</p>
        <p class="wotd-widget-translation">dog</p>
        <p class="wotd-widget-sentence">Собака бежит.</p>
        <p class="wotd-widget-romanization">Sobaka bezhit.</p>
        <p class="wotd-widget-sentence-translation">The dog runs.</p>
        <p class="wotd-widget-sentence">Моя собака.</p>
        <p class="wotd-widget-sentence-translation">My dog.</p>
    </div></body></html>"#;

    const JAPANESE_WIDGET: &str = r#"<html><body><div class="wotd-widget">
        <div class="wotd-widget-head">
          <p class="wotd-widget-word">犬</p>
          <p class="wotd-widget-kana">いぬ</p>
          <p class="wotd-widget-romaji">inu</p>
          <p class="wotd-widget-translation">dog</p>
        </div>
        <div class="wotd-widget-example"><p class="wotd-widget-sentence">犬が走る。</p></div>
        <div class="wotd-widget-example-details">
          <p class="wotd-widget-kana">いぬがはしる。</p>
          <p class="wotd-widget-romaji">Inu ga hashiru.</p>
          <p class="wotd-widget-sentence-translation">The dog runs.</p>
        </div>
    </div></body></html>"#;

    const CHINESE_WIDGET: &str = r#"<html><body><div class="wotd-widget">
        <div class="wotd-widget-head">
          <p class="wotd-widget-word">马</p>
          <p class="wotd-widget-pinyin">mǎ</p>
          <p class="wotd-widget-traditional">馬</p>
          <p class="wotd-widget-translation">horse</p>
        </div>
        <div class="wotd-widget-example"><p class="wotd-widget-sentence">马跑得很快。</p></div>
        <div class="wotd-widget-example-details">
          <p class="wotd-widget-pinyin">Mǎ pǎo de hěn kuài.</p>
          <p class="wotd-widget-traditional">馬跑得很快。</p>
          <p class="wotd-widget-sentence-translation">The horse runs fast.</p>
        </div>
    </div></body></html>"#;

    #[test]
    fn test_generic_pairs_examples_by_position() {
        let word = extract(GENERIC_WIDGET, &GENERIC).unwrap();
        assert_eq!(word.headword(), "собака");
        assert_eq!(word.translation(), "dog");
        assert_eq!(word.annotations().romanization.as_deref(), Some("sobaka"));

        let examples = word.examples();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].sentence(), "Собака бежит.");
        assert_eq!(examples[0].translation(), "The dog runs.");
        assert_eq!(
            examples[0].annotations().romanization.as_deref(),
            Some("Sobaka bezhit.")
        );
        assert_eq!(examples[1].translation(), "My dog.");
        assert_eq!(examples[1].annotations(), &ScriptAnnotations::default());
    }

    #[test]
    fn test_example_romanization_is_not_taken_for_the_word() {
        let html = r#"<div class="wotd-widget">
            <p class="wotd-widget-word">사과</p>
            <p class="wotd-widget-translation">apple</p>
            <p class="wotd-widget-sentence">사과를 먹어요.</p>
            <p class="wotd-widget-romanization">sagwareul meogeoyo.</p>
            <p class="wotd-widget-sentence-translation">I eat an apple.</p>
        </div>"#;
        let word = extract(html, &GENERIC).unwrap();
        assert_eq!(word.annotations().romanization, None);
        assert_eq!(
            word.primary_example().unwrap().annotations().romanization.as_deref(),
            Some("sagwareul meogeoyo.")
        );
    }

    #[test]
    fn test_japanese_reads_kana_and_romaji() {
        let word = extract(JAPANESE_WIDGET, &JAPANESE).unwrap();
        assert_eq!(word.headword(), "犬");
        assert_eq!(word.annotations().kana.as_deref(), Some("いぬ"));
        assert_eq!(word.annotations().romaji.as_deref(), Some("inu"));

        let ex = word.primary_example().unwrap();
        assert_eq!(ex.sentence(), "犬が走る。");
        assert_eq!(ex.translation(), "The dog runs.");
        assert_eq!(ex.annotations().kana.as_deref(), Some("いぬがはしる。"));
        assert_eq!(ex.annotations().romaji.as_deref(), Some("Inu ga hashiru."));
    }

    #[test]
    fn test_chinese_reads_pinyin_and_traditional() {
        let word = extract(CHINESE_WIDGET, &CHINESE).unwrap();
        assert_eq!(word.annotations().pinyin.as_deref(), Some("mǎ"));
        assert_eq!(word.annotations().traditional.as_deref(), Some("馬"));

        let ex = word.primary_example().unwrap();
        assert_eq!(ex.translation(), "The horse runs fast.");
        assert_eq!(ex.annotations().pinyin.as_deref(), Some("Mǎ pǎo de hěn kuài."));
        assert_eq!(ex.annotations().traditional.as_deref(), Some("馬跑得很快。"));
    }

    #[test]
    fn test_missing_translation_is_parse_error() {
        let html = r#"<div><p class="wotd-widget-word">犬</p></div>"#;
        assert!(matches!(extract(html, &JAPANESE), Err(WotdError::Parse(_))));
    }

    #[test]
    fn test_missing_word_is_parse_error() {
        let html = r#"<div><p class="wotd-widget-translation">dog</p></div>"#;
        assert!(matches!(extract(html, &GENERIC), Err(WotdError::Parse(_))));
    }

    #[test]
    fn test_sentence_without_detail_block_keeps_sentence() {
        let html = r#"<div>
            <div><p class="wotd-widget-word">马</p><p class="wotd-widget-translation">horse</p></div>
            <div><p class="wotd-widget-sentence">马。</p></div>
        </div>"#;
        let word = extract(html, &CHINESE).unwrap();
        let ex = word.primary_example().unwrap();
        assert_eq!(ex.sentence(), "马。");
        assert_eq!(ex.translation(), "");
    }
}
