//! Handle `inspect` command

use anyhow::{Context, Result};
use leysync::{AccountData, Character};
use serde_json::Value;
use std::path::Path;

use crate::file_io::read_json;

pub fn inspect(input: &Path) -> Result<()> {
    let raw: Value = read_json(input)?;
    let account = leysync::parse(&raw).context("Failed to parse HoYoLAB response")?;
    print!("{}", render(&account));
    Ok(())
}

fn render(account: &AccountData) -> String {
    let mut out = String::new();

    if let Some(uid) = &account.user.uid {
        let server = account.user.server.as_deref().unwrap_or("?");
        out.push_str(&format!("UID {} ({})\n", uid, server));
    }

    let summary = account.summary();
    out.push_str(&format!(
        "{} characters, {} at max level\n\n",
        summary.total_characters, summary.max_level_characters
    ));

    for character in &account.characters {
        out.push_str(&render_character(character));
    }

    out
}

fn render_character(character: &Character) -> String {
    let talents: Vec<String> = character
        .combat_talents()
        .map(|t| {
            if t.base_level == t.level {
                t.level.to_string()
            } else {
                format!("{}(+{})", t.base_level, t.level - t.base_level)
            }
        })
        .collect();

    let weapon = character
        .weapon
        .as_ref()
        .map(|w| format!("{} Lv{} R{}", w.name, w.level, w.refinement))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:<24} {:<8} Lv{:<3} A{} C{}  talents {:<12} artifacts {}  {}\n",
        character.name,
        character.element,
        character.level,
        character.ascension,
        character.active_constellations,
        talents.join("/"),
        character.artifacts.len(),
        weapon
    )
}
