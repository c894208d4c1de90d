//! Conversion command handlers
//!
//! `convert` runs both pipeline stages; `parse` and `format` run one each so
//! the intermediate model can be stored and re-exported with other options.

use anyhow::{Context, Result};
use leysync::{AccountData, ExportOptions, GoodDocument};
use serde_json::Value;
use std::path::Path;

use crate::cli::ExportArgs;
use crate::config::Config;
use crate::file_io::{read_json, write_json};

/// Handle `convert` command
pub fn convert(input: &Path, output: Option<&Path>, args: &ExportArgs) -> Result<()> {
    let options = Config::load()?.export_options(args);
    let raw: Value = read_json(input)?;

    let account = parse_account(&raw, args.skip_invalid)?;
    let good = export_account(&account, &options, args.skip_invalid)?;

    write_json(output, &good, args.compact)
}

/// Handle `parse` command
pub fn parse(input: &Path, output: Option<&Path>, skip_invalid: bool, compact: bool) -> Result<()> {
    let raw: Value = read_json(input)?;
    let account = parse_account(&raw, skip_invalid)?;
    write_json(output, &account, compact)
}

/// Handle `format` command
pub fn format(input: &Path, output: Option<&Path>, args: &ExportArgs) -> Result<()> {
    let options = Config::load()?.export_options(args);
    let account: AccountData = read_json(input)?;
    let good = export_account(&account, &options, args.skip_invalid)?;
    write_json(output, &good, args.compact)
}

/// Parse a response, optionally skipping characters that fail
pub fn parse_account(raw: &Value, skip_invalid: bool) -> Result<AccountData> {
    if !skip_invalid {
        let account = leysync::parse(raw).context("Failed to parse HoYoLAB response")?;
        tracing::info!("Parsed {} characters", account.characters.len());
        return Ok(account);
    }

    let records = leysync::character_records(raw).context("Invalid HoYoLAB response")?;
    let mut characters = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match leysync::parse_character(record) {
            Ok(character) => characters.push(character),
            Err(e) => tracing::warn!("Skipping character #{}: {}", index, e),
        }
    }
    tracing::info!(
        "Parsed {} of {} characters",
        characters.len(),
        records.len()
    );

    Ok(AccountData::new(leysync::parse_user(raw), characters))
}

/// Export an account, optionally skipping characters and artifacts that fail
pub fn export_account(
    account: &AccountData,
    options: &ExportOptions,
    skip_invalid: bool,
) -> Result<GoodDocument> {
    let good = if skip_invalid {
        export_lenient(account, options)
    } else {
        leysync::format_good(account, options).context("Failed to export GOOD")?
    };

    tracing::info!(
        "Exported {} characters, {} weapons, {} artifacts",
        good.characters.len(),
        good.weapons.len(),
        good.artifacts.len()
    );
    Ok(good)
}

fn export_lenient(account: &AccountData, options: &ExportOptions) -> GoodDocument {
    let mut characters = Vec::new();
    let mut artifacts = Vec::new();
    let mut weapons = Vec::new();

    for character in account
        .characters
        .iter()
        .filter(|c| leysync::is_exported(c, options))
    {
        match leysync::format_character(character, options) {
            Ok(good) => characters.push(good),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", character.name, e);
                continue;
            }
        }

        let location = leysync::location_key(character);
        if let Some(weapon) = &character.weapon {
            weapons.push(leysync::format_weapon(weapon, &location));
        }
        for artifact in &character.artifacts {
            match leysync::format_artifact(artifact, &location) {
                Ok(good) => artifacts.push(good),
                Err(e) => tracing::warn!(
                    "Skipping artifact {} of {}: {}",
                    artifact.id,
                    character.name,
                    e
                ),
            }
        }
    }

    GoodDocument::new(characters, artifacts, weapons)
}
