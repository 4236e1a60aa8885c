//! Plain-markup layout (Slack webhook `text`).

use super::FormattedMessage;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkupPayload {
    pub text: String,
}

/// Lay a message out as text lines: linked title, translation, quoted example.
pub fn render(message: &FormattedMessage, emphasis: &str) -> MarkupPayload {
    let title = escape(&message.title);
    let mut lines = Vec::with_capacity(message.example_lines.len() + 2);

    match &message.url {
        Some(url) => lines.push(format!("{emphasis}<{url}|{title}>{emphasis}")),
        None => lines.push(format!("{emphasis}{title}{emphasis}")),
    }
    lines.push(escape(&message.description));
    lines.extend(
        message
            .example_lines
            .iter()
            .map(|line| format!("> {}", escape(line))),
    );

    MarkupPayload {
        text: lines.join("\n"),
    }
}

/// Escape the three characters the markup reserves for links and mentions.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_lines() {
        let message = FormattedMessage {
            title: "la casa".to_string(),
            url: Some("https://dict.example/translate/la%20casa".to_string()),
            description: "the house".to_string(),
            example_lines: vec!["Mi *casa*.".to_string(), "My *house*.".to_string()],
        };
        let payload = render(&message, "*");
        assert_eq!(
            payload.text,
            "*<https://dict.example/translate/la%20casa|la casa>*\nthe house\n> Mi *casa*.\n> My *house*."
        );
    }

    #[test]
    fn test_missing_url_renders_plain_title() {
        let message = FormattedMessage {
            title: "a < b".to_string(),
            url: None,
            description: "—".to_string(),
            example_lines: Vec::new(),
        };
        assert_eq!(render(&message, "*").text, "*a &lt; b*\n—");
    }
}
