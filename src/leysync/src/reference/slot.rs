//! Artifact slot definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Artifact equip slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKey {
    Flower,
    Plume,
    Sands,
    Goblet,
    Circlet,
}

/// All slots in equip position order (position 1 first)
pub const SLOT_KEYS: &[SlotKey] = &[
    SlotKey::Flower,
    SlotKey::Plume,
    SlotKey::Sands,
    SlotKey::Goblet,
    SlotKey::Circlet,
];

impl SlotKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flower => "flower",
            Self::Plume => "plume",
            Self::Sands => "sands",
            Self::Goblet => "goblet",
            Self::Circlet => "circlet",
        }
    }

    /// Equip position as reported by HoYoLAB (`pos`, 1-5)
    pub fn position(&self) -> u8 {
        match self {
            Self::Flower => 1,
            Self::Plume => 2,
            Self::Sands => 3,
            Self::Goblet => 4,
            Self::Circlet => 5,
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SLOT_KEYS
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Unknown slot key: {}", s))
    }
}

/// Map an artifact position to its slot
pub fn slot_by_position(position: u8) -> Result<SlotKey> {
    match position {
        1 => Ok(SlotKey::Flower),
        2 => Ok(SlotKey::Plume),
        3 => Ok(SlotKey::Sands),
        4 => Ok(SlotKey::Goblet),
        5 => Ok(SlotKey::Circlet),
        other => Err(ConvertError::InvalidSlotPosition(other)),
    }
}
