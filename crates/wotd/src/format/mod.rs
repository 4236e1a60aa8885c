//! Message formatting: title, highlighted example, per-destination payloads.
//!
//! Both destinations share [`format_message`]; they differ only in the
//! emphasis token and in how the resulting [`FormattedMessage`] is laid out
//! (`rich` builds an embed, `plain` builds text lines).

pub mod plain;
pub mod rich;

use crate::error::WotdError;
use crate::model::{AnnotationField, WordOfDay};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Placeholder shown when a word has no translation.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Order of reading lines under the example sentence.
const READING_ORDER: [AnnotationField; 5] = [
    AnnotationField::Kana,
    AnnotationField::Romaji,
    AnnotationField::Traditional,
    AnnotationField::Pinyin,
    AnnotationField::Romanization,
];

/// Where a message is posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// Rich embed webhook (`{"embeds": [...]}`), `**bold**`.
    Discord,
    /// Plain markup webhook (`{"text": "..."}`), `*bold*`, `<url|text>` links.
    Slack,
}

impl Destination {
    /// Token wrapped around emphasized text.
    pub fn emphasis(&self) -> &'static str {
        match self {
            Self::Discord => "**",
            Self::Slack => "*",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discord => "discord",
            Self::Slack => "slack",
        }
    }
}

impl FromStr for Destination {
    type Err = WotdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "discord" => Ok(Self::Discord),
            "slack" => Ok(Self::Slack),
            other => Err(WotdError::Config(format!(
                "unknown destination {other:?} (expected discord or slack)"
            ))),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination-neutral content of one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedMessage {
    pub title: String,
    /// Link target; `None` when the source gave no URL.
    pub url: Option<String>,
    /// Raw translation, or [`EMPTY_PLACEHOLDER`].
    pub description: String,
    /// Rendered primary example, one entry per line.
    pub example_lines: Vec<String>,
}

impl FormattedMessage {
    pub fn example_text(&self) -> Option<String> {
        if self.example_lines.is_empty() {
            None
        } else {
            Some(self.example_lines.join("\n"))
        }
    }
}

/// A webhook body ready to be serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Embed(rich::EmbedPayload),
    Markup(plain::MarkupPayload),
}

/// Build the webhook body for `destination`.
pub fn build_payload(word: &WordOfDay, destination: Destination) -> Payload {
    let message = format_message(word, destination.emphasis());
    match destination {
        Destination::Discord => Payload::Embed(rich::render(&message)),
        Destination::Slack => Payload::Markup(plain::render(&message, destination.emphasis())),
    }
}

/// Format `word` with the given emphasis token.
pub fn format_message(word: &WordOfDay, emphasis: &str) -> FormattedMessage {
    let description = if word.translation().is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        word.translation().to_string()
    };

    FormattedMessage {
        title: title(word),
        url: Some(word.url().to_string()).filter(|u| !u.is_empty()),
        description,
        example_lines: example_lines(word, emphasis),
    }
}

/// Headword plus a parenthesized reading chosen by script.
pub fn title(word: &WordOfDay) -> String {
    let ann = word.annotations();
    let suffix = match (
        ann.traditional.as_deref().filter(|t| *t != word.headword()),
        ann.pinyin.as_deref(),
        ann.kana.as_deref(),
        ann.romanization.as_deref().filter(|_| word.use_romanization()),
    ) {
        (Some(traditional), pinyin, _, _) => {
            Some(format!("{traditional} - {}", pinyin.unwrap_or_default()))
        }
        (None, Some(pinyin), _, _) => Some(pinyin.to_string()),
        (None, None, Some(kana), _) => Some(format!(
            "{kana} - {}",
            ann.romaji.as_deref().unwrap_or_default()
        )),
        (None, None, None, Some(romanization)) => Some(romanization.to_string()),
        (None, None, None, None) => None,
    };

    match suffix {
        Some(suffix) => format!("{} ({suffix})", word.headword()),
        None => word.headword().to_string(),
    }
}

/// Lines of the primary example: sentence, readings, translation.
///
/// Kana and traditional lines identical to the sentence are skipped.
pub fn example_lines(word: &WordOfDay, emphasis: &str) -> Vec<String> {
    let Some(example) = word.primary_example() else {
        return Vec::new();
    };
    let sentence = example.sentence();
    let ann = example.annotations();

    let mut lines = Vec::new();
    if !sentence.is_empty() {
        if word.bold_core_word() {
            lines.push(highlight(sentence, word.emphasis_word(), emphasis));
        } else {
            lines.push(sentence.to_string());
        }
    }

    for field in READING_ORDER {
        let Some(reading) = ann.get(field) else {
            continue;
        };
        let repeats_sentence = matches!(field, AnnotationField::Kana | AnnotationField::Traditional)
            && reading == sentence;
        if !repeats_sentence {
            lines.push(reading.to_string());
        }
    }

    if !example.translation().is_empty() {
        lines.push(highlight(
            example.translation(),
            word.emphasis_translation(),
            emphasis,
        ));
    }
    lines
}

/// Wrap every literal occurrence of `target` in `token`.
pub fn highlight(text: &str, target: &str, token: &str) -> String {
    if target.is_empty() || token.is_empty() {
        return text.to_string();
    }
    text.replace(target, &format!("{token}{target}{token}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Example, ScriptAnnotations};

    fn spanish_word() -> WordOfDay {
        WordOfDay::new("el perro", "the dog")
            .unwrap()
            .with_core_headword("perro")
            .with_core_translation("dog")
            .with_url("https://dict.example/translate/perro")
            .with_examples(vec![Example::new("El perro corre", "The dog runs").unwrap()])
    }

    #[test]
    fn test_highlight_wraps_core_word_once() {
        let out = highlight("El perro corre", "perro", "**");
        assert_eq!(out, "El **perro** corre");
        assert_eq!(out.matches("**perro**").count(), 1);
        assert_eq!(highlight("El perro corre", "", "**"), "El perro corre");
        assert_eq!(highlight("El gato corre", "perro", "*"), "El gato corre");
    }

    #[test]
    fn test_example_lines_emphasize_core_forms() {
        let lines = example_lines(&spanish_word(), "**");
        assert_eq!(lines, vec!["El **perro** corre", "The **dog** runs"]);

        let slack = example_lines(&spanish_word(), "*");
        assert_eq!(slack, vec!["El *perro* corre", "The *dog* runs"]);
    }

    #[test]
    fn test_bold_disabled_still_emphasizes_translation() {
        let word = WordOfDay::new("犬", "dog")
            .unwrap()
            .with_rendering(false, false)
            .with_examples(vec![Example::new("犬が走る。", "The dog runs.").unwrap()]);
        let lines = example_lines(&word, "**");
        assert_eq!(lines, vec!["犬が走る。", "The **dog** runs."]);
    }

    #[test]
    fn test_kana_equal_to_sentence_is_skipped() {
        let ann = ScriptAnnotations {
            kana: Some("いぬがはしる。".into()),
            romaji: Some("Inu ga hashiru.".into()),
            ..Default::default()
        };
        let word = WordOfDay::new("いぬ", "dog")
            .unwrap()
            .with_rendering(false, false)
            .with_examples(vec![Example::new("いぬがはしる。", "The dog runs.")
                .unwrap()
                .with_annotations(ann)]);
        let text = format_message(&word, "**").example_text().unwrap();
        assert_eq!(text.matches("いぬがはしる。").count(), 1);
        assert_eq!(
            text,
            "いぬがはしる。\nInu ga hashiru.\nThe **dog** runs."
        );
    }

    #[test]
    fn test_reading_lines_follow_fixed_order() {
        let ann = ScriptAnnotations {
            kana: Some("K".into()),
            romaji: Some("R".into()),
            traditional: Some("T".into()),
            pinyin: Some("P".into()),
            romanization: Some("Z".into()),
        };
        let word = WordOfDay::new("w", "")
            .unwrap()
            .with_examples(vec![Example::new("S", "").unwrap().with_annotations(ann)]);
        assert_eq!(example_lines(&word, "*"), vec!["S", "K", "R", "T", "P", "Z"]);
    }

    #[test]
    fn test_traditional_equal_to_sentence_is_skipped() {
        let ann = ScriptAnnotations {
            traditional: Some("我愛你。".into()),
            pinyin: Some("Wǒ ài nǐ.".into()),
            ..Default::default()
        };
        let word = WordOfDay::new("爱", "love")
            .unwrap()
            .with_examples(vec![Example::new("我愛你。", "I love you.")
                .unwrap()
                .with_annotations(ann)]);
        let lines = example_lines(&word, "**");
        assert_eq!(lines.iter().filter(|l| *l == "我愛你。").count(), 1);
        assert_eq!(lines[1], "Wǒ ài nǐ.");
    }

    #[test]
    fn test_title_prefers_traditional_over_pinyin() {
        let word = WordOfDay::new("马", "horse").unwrap().with_annotations(ScriptAnnotations {
            traditional: Some("馬".into()),
            pinyin: Some("mǎ".into()),
            ..Default::default()
        });
        assert_eq!(title(&word), "马 (馬 - mǎ)");
    }

    #[test]
    fn test_title_uses_pinyin_when_forms_match() {
        let word = WordOfDay::new("人", "person").unwrap().with_annotations(ScriptAnnotations {
            traditional: Some("人".into()),
            pinyin: Some("rén".into()),
            ..Default::default()
        });
        assert_eq!(title(&word), "人 (rén)");
    }

    #[test]
    fn test_title_kana_and_romanization() {
        let kana = WordOfDay::new("犬", "dog").unwrap().with_annotations(ScriptAnnotations {
            kana: Some("いぬ".into()),
            romaji: Some("inu".into()),
            ..Default::default()
        });
        assert_eq!(title(&kana), "犬 (いぬ - inu)");

        let ann = ScriptAnnotations {
            romanization: Some("sagwa".into()),
            ..Default::default()
        };
        let hidden = WordOfDay::new("사과", "apple").unwrap().with_annotations(ann.clone());
        assert_eq!(title(&hidden), "사과");
        let shown = hidden.with_rendering(true, true);
        assert_eq!(title(&shown), "사과 (sagwa)");
    }

    #[test]
    fn test_message_placeholder_and_missing_url() {
        let word = WordOfDay::new("hygge", "").unwrap();
        let message = format_message(&word, "**");
        assert_eq!(message.description, EMPTY_PLACEHOLDER);
        assert!(message.url.is_none());
        assert!(message.example_text().is_none());
    }

    #[test]
    fn test_destination_parsing() {
        assert_eq!("Discord".parse::<Destination>().unwrap(), Destination::Discord);
        assert_eq!(" slack ".parse::<Destination>().unwrap(), Destination::Slack);
        assert!("email".parse::<Destination>().is_err());
        assert_eq!(Destination::Discord.emphasis(), "**");
        assert_eq!(Destination::Slack.emphasis(), "*");
    }
}
