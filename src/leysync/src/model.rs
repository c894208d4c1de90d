//! Internal account model
//!
//! The normalized form of a HoYoLAB character detail response. Field names
//! follow HoYoLAB's own vocabulary so a stored model stays readable next to
//! the raw payload it came from; nothing here is canonicalized or filtered.

use serde::{Deserialize, Serialize};

/// Version of the internal model layout
pub const INTERNAL_DATA_VERSION: u32 = 1;

/// Game tag stored in every model
pub const GAME: &str = "genshin";

/// Level cap used by [`AccountData::summary`]
pub const MAX_CHARACTER_LEVEL: u32 = 90;

/// A parsed HoYoLAB account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountData {
    pub version: u32,
    pub game: String,
    #[serde(default)]
    pub user: UserInfo,
    pub characters: Vec<Character>,
}

impl AccountData {
    /// Wrap parsed characters with the current model version
    pub fn new(user: UserInfo, characters: Vec<Character>) -> Self {
        Self {
            version: INTERNAL_DATA_VERSION,
            game: GAME.to_string(),
            user,
            characters,
        }
    }

    /// Character counts for display
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            total_characters: self.characters.len(),
            max_level_characters: self
                .characters
                .iter()
                .filter(|c| c.level >= MAX_CHARACTER_LEVEL)
                .count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub total_characters: usize,
    pub max_level_characters: usize,
}

/// Account owner metadata, when the response carries it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    /// English display name, later canonicalized into the GOOD key
    pub name: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub side_icon_url: String,
    #[serde(default)]
    pub image_url: String,
    /// Element name as reported ("Anemo", "Pyro", ...)
    pub element: String,
    pub friendship: u8,
    pub level: u32,
    /// Approximated from level, see [`crate::ascension`]
    pub ascension: u8,
    pub active_constellations: u8,
    pub weapon: Option<Weapon>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub constellations: Vec<Constellation>,
    #[serde(default)]
    pub outfits: Vec<Outfit>,
    #[serde(default)]
    pub talents: Vec<Talent>,
}

impl Character {
    /// Talents without the alternate sprint, in API order (auto, skill, burst)
    pub fn combat_talents(&self) -> impl Iterator<Item = &Talent> {
        self.talents.iter().filter(|t| !t.is_alternate_sprint)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub icon_url: String,
    pub level: u32,
    /// Source-provided promote level
    pub ascension: u8,
    pub refinement: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: u64,
    pub set_id: u64,
    pub set_name: String,
    #[serde(default)]
    pub icon_url: String,
    /// Equip position, 1 (flower) through 5 (circlet)
    pub position: u8,
    pub rarity: u8,
    pub level: u32,
    pub main_stat_type: u32,
    #[serde(default)]
    pub sub_stats: Vec<Substat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substat {
    #[serde(rename = "type")]
    pub stat_type: u32,
    /// Display string, e.g. `"12.8%"` or `"299"`
    pub value: Option<String>,
    /// Number of upgrade rolls
    pub times: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constellation {
    pub id: u64,
    #[serde(default)]
    pub icon_url: String,
    pub position: u8,
    pub is_active: bool,
    pub is_enhanced: bool,
    #[serde(default)]
    pub effect: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon_url: String,
    pub is_unlocked: bool,
    pub is_enhanced: bool,
    pub is_alternate_sprint: bool,
    /// Displayed level, including any constellation bonus
    pub level: u32,
    /// Level before constellation bonus
    pub base_level: u32,
}
