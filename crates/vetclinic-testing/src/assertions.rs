//! Custom assertions over the CLI's `--format json` output.
//!
//! A painted view is `{"section": ..., "containers": {name: view_model}}`;
//! a notice is `{"notice": {"level": ..., "message": ...}}`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a painted document shows the expected section.
pub fn assert_section(json: &Value, expected: &str) -> Result<()> {
    let section = json["section"]
        .as_str()
        .context("Expected 'section' string in JSON")?;

    if section != expected {
        anyhow::bail!("Expected section {}, got {}", expected, section);
    }

    Ok(())
}

/// The view model painted into one container.
pub fn container<'a>(json: &'a Value, name: &str) -> Result<&'a Value> {
    json["containers"]
        .get(name)
        .with_context(|| format!("Expected container '{}' in JSON", name))
}

/// Card titles of a card-list container, in painted order.
pub fn card_titles(json: &Value, container_name: &str) -> Result<Vec<String>> {
    let cards = container(json, container_name)?["cards"]
        .as_array()
        .with_context(|| format!("Expected 'cards' array in '{}'", container_name))?;

    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            card["title"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Card {} missing title", i))
        })
        .collect()
}

/// Assert the exact card titles of a card-list container.
pub fn assert_card_titles(json: &Value, container_name: &str, expected: &[&str]) -> Result<()> {
    let titles = card_titles(json, container_name)?;
    if titles != expected {
        anyhow::bail!("Expected cards {:?}, got {:?}", expected, titles);
    }
    Ok(())
}

/// Find the first notice among several documents and check it.
pub fn assert_notice(documents: &[Value], level: &str, message: &str) -> Result<()> {
    let notice = documents
        .iter()
        .find_map(|doc| doc.get("notice"))
        .context("Expected a notice document")?;

    if notice["level"] != level || notice["message"] != message {
        anyhow::bail!(
            "Expected {} notice '{}', got {}",
            level,
            message,
            notice
        );
    }

    Ok(())
}
