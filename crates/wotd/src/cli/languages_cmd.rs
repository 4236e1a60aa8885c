//! `wotd languages`: show how each language is sourced.

use crate::acquisition::static_page::builtin_static_pages;
use crate::cli::output;
use crate::model::LanguageFamily;
use anyhow::Result;

/// Example widget languages per parser family.
const WIDGET_FAMILIES: &[(&str, LanguageFamily)] = &[
    ("japanese", LanguageFamily::Japanese),
    ("chinese", LanguageFamily::Chinese),
    ("mandarin", LanguageFamily::Chinese),
    ("any other", LanguageFamily::Generic),
];

/// Run the languages command.
pub async fn run() -> Result<()> {
    let static_pages = builtin_static_pages();

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "static_page": static_pages
                .iter()
                .map(|c| serde_json::json!({ "language": c.language.as_str(), "url": c.page_url }))
                .collect::<Vec<_>>(),
            "widget": WIDGET_FAMILIES
                .iter()
                .map(|(name, family)| serde_json::json!({ "language": name, "parser": family.as_str() }))
                .collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    println!("Static page:");
    for c in &static_pages {
        println!("  {:<12} {}", c.language.as_str(), c.page_url);
    }
    println!();
    println!("Rendered widget (needs Chromium):");
    for (name, family) in WIDGET_FAMILIES {
        println!("  {:<12} {} parser", name, family.as_str());
    }
    Ok(())
}
