//! Rich-embed layout (Discord webhook `embeds`).

use super::{Destination, FormattedMessage};
use serde::Serialize;

/// Embed title limit.
const MAX_TITLE_CHARS: usize = 256;
/// Embed field value limit.
const MAX_FIELD_CHARS: usize = 1024;
/// Embed description limit.
const MAX_DESCRIPTION_CHARS: usize = 4096;

/// Name of the field holding the example.
pub const EXAMPLE_FIELD_NAME: &str = "Example";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedPayload {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Lay a message out as a single embed.
pub fn render(message: &FormattedMessage) -> EmbedPayload {
    let fields = message
        .example_text()
        .map(|text| EmbedField {
            name: EXAMPLE_FIELD_NAME.to_string(),
            value: truncate_emphasized(&text, MAX_FIELD_CHARS, Destination::Discord.emphasis()),
            inline: false,
        })
        .into_iter()
        .collect();

    EmbedPayload {
        embeds: vec![Embed {
            title: truncate(&message.title, MAX_TITLE_CHARS),
            url: message.url.clone(),
            description: truncate(&message.description, MAX_DESCRIPTION_CHARS),
            fields,
        }],
    }
}

/// Cut `text` to at most `max` characters, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Like [`truncate`], but never leaves an emphasis `token` unpaired: a cut
/// through a token or between a pair backs off to before the opening token.
fn truncate_emphasized(text: &str, max: usize, token: &str) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();

    // Token split by the cut: drop the half that made it in.
    let rest = &text[out.len()..];
    for k in (1..token.len()).rev() {
        if out.ends_with(&token[..k]) && rest.starts_with(&token[k..]) {
            out.truncate(out.len() - k);
            break;
        }
    }

    if out.matches(token).count() % 2 == 1 {
        if let Some(open) = out.rfind(token) {
            out.truncate(open);
        }
    }
    out.push('…');
    out
}
