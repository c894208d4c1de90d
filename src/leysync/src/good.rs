//! GOOD v3 export
//!
//! Projects [`AccountData`] onto the Genshin Open Object Description
//! format used by Genshin Optimizer and similar tools. Characters are
//! filtered first; each surviving character contributes one character
//! record, its weapon, and its artifacts.
//!
//! HoYoLAB carries no lock state, so every weapon and artifact is exported
//! unlocked.

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};
use crate::keys::to_good_key;
use crate::model::{AccountData, Artifact, Character, Substat, Weapon};
use crate::reference::{slot_by_position, stat_key_by_code, SlotKey, StatKey};
use crate::value::parse_stat_value;

/// Format tag required by GOOD consumers
pub const GOOD_FORMAT: &str = "GOOD";

/// GOOD schema version produced
pub const GOOD_VERSION: u32 = 3;

/// Value of the `source` field
pub const GOOD_SOURCE: &str = "LeySync";

/// Placeholder characters from the Manekin questline
pub const PLACEHOLDER_NAMES: [&str; 2] = ["Manekin", "Manekina"];

/// Key shared by every elemental variant of the Traveler
pub const TRAVELER_KEY: &str = "Traveler";

/// Export-time filters and key adjustments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Drop Manekin/Manekina along with their gear
    pub remove_manekin: bool,
    /// Export the Traveler as `Traveler<Element>` instead of `Traveler`
    pub add_traveler_element_to_key: bool,
    /// Drop characters (and their gear) below this level; 0 keeps everyone
    pub min_character_level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodDocument {
    pub format: String,
    pub version: u32,
    pub source: String,
    pub characters: Vec<GoodCharacter>,
    pub artifacts: Vec<GoodArtifact>,
    pub weapons: Vec<GoodWeapon>,
}

impl GoodDocument {
    pub fn new(
        characters: Vec<GoodCharacter>,
        artifacts: Vec<GoodArtifact>,
        weapons: Vec<GoodWeapon>,
    ) -> Self {
        Self {
            format: GOOD_FORMAT.to_string(),
            version: GOOD_VERSION,
            source: GOOD_SOURCE.to_string(),
            characters,
            artifacts,
            weapons,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodCharacter {
    pub key: String,
    pub level: u32,
    pub constellation: u8,
    pub ascension: u8,
    pub talent: GoodTalent,
}

/// Talent levels without constellation bonuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodTalent {
    pub auto: u32,
    pub skill: u32,
    pub burst: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodWeapon {
    pub key: String,
    pub level: u32,
    pub ascension: u8,
    pub refinement: u8,
    pub location: String,
    pub lock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoodArtifact {
    pub set_key: String,
    pub slot_key: SlotKey,
    pub level: u32,
    pub rarity: u8,
    pub main_stat_key: StatKey,
    pub location: String,
    pub lock: bool,
    pub substats: Vec<GoodSubstat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoodSubstat {
    pub key: StatKey,
    pub value: f64,
}

/// Export an account as a GOOD document, failing on the first bad entity
pub fn format_good(account: &AccountData, options: &ExportOptions) -> Result<GoodDocument> {
    let mut characters = Vec::new();
    let mut artifacts = Vec::new();
    let mut weapons = Vec::new();

    for character in account
        .characters
        .iter()
        .filter(|c| is_exported(c, options))
    {
        characters.push(format_character(character, options)?);

        let location = location_key(character);
        if let Some(weapon) = &character.weapon {
            weapons.push(format_weapon(weapon, &location));
        }
        for artifact in &character.artifacts {
            artifacts.push(format_artifact(artifact, &location)?);
        }
    }

    tracing::debug!(
        "Exported {} characters, {} weapons, {} artifacts",
        characters.len(),
        weapons.len(),
        artifacts.len()
    );

    Ok(GoodDocument::new(characters, artifacts, weapons))
}

/// Whether a character survives the export filters
pub fn is_exported(character: &Character, options: &ExportOptions) -> bool {
    if options.remove_manekin
        && PLACEHOLDER_NAMES.contains(&to_good_key(character.name.as_str()).as_str())
    {
        tracing::debug!("Skipping placeholder character {}", character.name);
        return false;
    }

    if options.min_character_level > 0 && character.level < options.min_character_level {
        tracing::debug!(
            "Skipping {} (level {} < {})",
            character.name,
            character.level,
            options.min_character_level
        );
        return false;
    }

    true
}

/// GOOD character key, with the Traveler's element appended when requested
pub fn character_key(character: &Character, options: &ExportOptions) -> String {
    let mut key = to_good_key(character.name.as_str());
    if options.add_traveler_element_to_key && key == TRAVELER_KEY {
        key.push_str(&character.element);
    }
    key
}

/// Key used in the `location` field of gear equipped by this character.
///
/// GOOD locations name the Traveler without an element, so this ignores
/// [`ExportOptions::add_traveler_element_to_key`].
pub fn location_key(character: &Character) -> String {
    to_good_key(character.name.as_str())
}

pub fn format_character(character: &Character, options: &ExportOptions) -> Result<GoodCharacter> {
    let mut talents = character.combat_talents().map(|t| t.base_level);
    let mut next_talent = |slot: &'static str| {
        talents.next().ok_or_else(|| ConvertError::MissingTalent {
            character: character.name.clone(),
            slot,
        })
    };

    let talent = GoodTalent {
        auto: next_talent("auto")?,
        skill: next_talent("skill")?,
        burst: next_talent("burst")?,
    };

    Ok(GoodCharacter {
        key: character_key(character, options),
        level: character.level,
        constellation: character.active_constellations,
        ascension: character.ascension,
        talent,
    })
}

pub fn format_weapon(weapon: &Weapon, location: &str) -> GoodWeapon {
    GoodWeapon {
        key: to_good_key(weapon.name.as_str()),
        level: weapon.level,
        ascension: weapon.ascension,
        refinement: weapon.refinement,
        location: location.to_string(),
        lock: false,
    }
}

pub fn format_artifact(artifact: &Artifact, location: &str) -> Result<GoodArtifact> {
    Ok(GoodArtifact {
        set_key: to_good_key(artifact.set_name.as_str()),
        slot_key: slot_by_position(artifact.position)?,
        level: artifact.level,
        rarity: artifact.rarity,
        main_stat_key: stat_key_by_code(artifact.main_stat_type)?,
        location: location.to_string(),
        lock: false,
        substats: artifact
            .sub_stats
            .iter()
            .map(format_substat)
            .collect::<Result<Vec<_>>>()?,
    })
}

pub fn format_substat(substat: &Substat) -> Result<GoodSubstat> {
    Ok(GoodSubstat {
        key: stat_key_by_code(substat.stat_type)?,
        value: parse_stat_value(substat.value.as_deref())?,
    })
}
