//! Stat key definitions and the property code table

use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Stat keys understood by GOOD consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKey {
    #[serde(rename = "hp")]
    Hp,
    #[serde(rename = "hp_")]
    HpPercent,
    #[serde(rename = "atk")]
    Atk,
    #[serde(rename = "atk_")]
    AtkPercent,
    #[serde(rename = "def")]
    Def,
    #[serde(rename = "def_")]
    DefPercent,
    #[serde(rename = "eleMas")]
    ElementalMastery,
    #[serde(rename = "enerRech_")]
    EnergyRecharge,
    #[serde(rename = "heal_")]
    HealingBonus,
    #[serde(rename = "critRate_")]
    CritRate,
    #[serde(rename = "critDMG_")]
    CritDamage,
    #[serde(rename = "physical_dmg_")]
    PhysicalDamage,
    #[serde(rename = "anemo_dmg_")]
    AnemoDamage,
    #[serde(rename = "geo_dmg_")]
    GeoDamage,
    #[serde(rename = "electro_dmg_")]
    ElectroDamage,
    #[serde(rename = "hydro_dmg_")]
    HydroDamage,
    #[serde(rename = "pyro_dmg_")]
    PyroDamage,
    #[serde(rename = "cryo_dmg_")]
    CryoDamage,
    #[serde(rename = "dendro_dmg_")]
    DendroDamage,
}

/// Every stat key, in GOOD declaration order
pub const STAT_KEYS: &[StatKey] = &[
    StatKey::Hp,
    StatKey::HpPercent,
    StatKey::Atk,
    StatKey::AtkPercent,
    StatKey::Def,
    StatKey::DefPercent,
    StatKey::ElementalMastery,
    StatKey::EnergyRecharge,
    StatKey::HealingBonus,
    StatKey::CritRate,
    StatKey::CritDamage,
    StatKey::PhysicalDamage,
    StatKey::AnemoDamage,
    StatKey::GeoDamage,
    StatKey::ElectroDamage,
    StatKey::HydroDamage,
    StatKey::PyroDamage,
    StatKey::CryoDamage,
    StatKey::DendroDamage,
];

impl StatKey {
    /// GOOD wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::HpPercent => "hp_",
            Self::Atk => "atk",
            Self::AtkPercent => "atk_",
            Self::Def => "def",
            Self::DefPercent => "def_",
            Self::ElementalMastery => "eleMas",
            Self::EnergyRecharge => "enerRech_",
            Self::HealingBonus => "heal_",
            Self::CritRate => "critRate_",
            Self::CritDamage => "critDMG_",
            Self::PhysicalDamage => "physical_dmg_",
            Self::AnemoDamage => "anemo_dmg_",
            Self::GeoDamage => "geo_dmg_",
            Self::ElectroDamage => "electro_dmg_",
            Self::HydroDamage => "hydro_dmg_",
            Self::PyroDamage => "pyro_dmg_",
            Self::CryoDamage => "cryo_dmg_",
            Self::DendroDamage => "dendro_dmg_",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        STAT_KEYS
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Unknown stat key: {}", s))
    }
}

/// HoYoLAB property_type code to stat key.
///
/// Several codes share a key: 1/2/2000 are all flat HP (base, flat, and
/// character-panel "Max HP"), likewise for ATK and DEF.
static STAT_CODES: phf::Map<u32, StatKey> = phf_map! {
    // Flat panel stats
    2000u32 => StatKey::Hp,
    2001u32 => StatKey::Atk,
    2002u32 => StatKey::Def,
    // HP / ATK / DEF
    1u32 => StatKey::Hp,
    2u32 => StatKey::Hp,
    3u32 => StatKey::HpPercent,
    4u32 => StatKey::Atk,
    5u32 => StatKey::Atk,
    6u32 => StatKey::AtkPercent,
    7u32 => StatKey::Def,
    8u32 => StatKey::Def,
    9u32 => StatKey::DefPercent,
    // Crit
    20u32 => StatKey::CritRate,
    22u32 => StatKey::CritDamage,
    // Energy & healing
    23u32 => StatKey::EnergyRecharge,
    26u32 => StatKey::HealingBonus,
    28u32 => StatKey::ElementalMastery,
    // DMG bonuses
    30u32 => StatKey::PhysicalDamage,
    40u32 => StatKey::PyroDamage,
    41u32 => StatKey::ElectroDamage,
    42u32 => StatKey::HydroDamage,
    43u32 => StatKey::DendroDamage,
    44u32 => StatKey::AnemoDamage,
    45u32 => StatKey::GeoDamage,
    46u32 => StatKey::CryoDamage,
};

/// Translate a property_type code into its stat key
pub fn stat_key_by_code(code: u32) -> Result<StatKey> {
    STAT_CODES
        .get(&code)
        .copied()
        .ok_or(ConvertError::UnmappedStatCode(code))
}

/// All known property codes (unordered)
pub fn known_stat_codes() -> impl Iterator<Item = u32> {
    STAT_CODES.keys().copied()
}
