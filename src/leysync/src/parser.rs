//! HoYoLAB response parsing
//!
//! Reads the `character/detail` response of the HoYoLAB battle chronicle
//! into [`AccountData`]. Nothing is filtered or renamed here; key
//! canonicalization and export options are applied by [`crate::good`].
//!
//! Each character is parsed independently. [`parse`] stops at the first bad
//! character; callers that prefer to skip bad records can drive
//! [`character_records`] and [`parse_character`] themselves.

use serde::Deserialize;
use serde_json::Value;

use crate::ascension::ascension_from_level;
use crate::error::{ConvertError, Result};
use crate::model::{
    AccountData, Artifact, Character, Constellation, Outfit, Substat, Talent, UserInfo, Weapon,
};
use crate::talent::{base_level, is_alternate_sprint};

/// Parse a HoYoLAB response
///
/// Only `data.list` is required. `retcode`/`message` are not checked here;
/// callers that hold a raw response should run [`validate_envelope`] first.
pub fn parse(payload: &Value) -> Result<AccountData> {
    let records = character_records(payload)?;
    tracing::debug!("Parsing {} character records", records.len());

    let characters = records
        .iter()
        .map(parse_character)
        .collect::<Result<Vec<_>>>()?;

    Ok(AccountData::new(parse_user(payload), characters))
}

/// Check `retcode`/`message` and return the `data` object
pub fn validate_envelope(payload: &Value) -> Result<&Value> {
    let retcode = payload
        .get("retcode")
        .and_then(Value::as_i64)
        .ok_or_else(|| missing("retcode"))?;
    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default();

    if retcode != 0 || message != "OK" {
        return Err(ConvertError::InvalidEnvelope {
            retcode,
            message: message.to_string(),
        });
    }

    match payload.get("data") {
        Some(data) if !data.is_null() => Ok(data),
        _ => Err(missing("data")),
    }
}

/// Whether a payload looks like a successful character detail response
pub fn is_valid_payload(payload: &Value) -> bool {
    validate_envelope(payload).is_ok() && character_records(payload).is_ok()
}

/// The raw per-character records (`data.list`)
pub fn character_records(payload: &Value) -> Result<&[Value]> {
    payload
        .get("data")
        .and_then(|data| data.get("list"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| missing("data.list"))
}

/// Account owner fields, when present next to `list`
pub fn parse_user(payload: &Value) -> UserInfo {
    let Some(data) = payload.get("data") else {
        return UserInfo::default();
    };

    UserInfo {
        uid: data.get("uid").and_then(scalar_to_string),
        server: data.get("server").and_then(scalar_to_string),
        nickname: data.get("nickname").and_then(scalar_to_string),
        level: data
            .get("level")
            .and_then(Value::as_u64)
            .and_then(|l| u32::try_from(l).ok()),
    }
}

/// Parse one entry of `data.list`
pub fn parse_character(record: &Value) -> Result<Character> {
    let raw = RawCharacter::deserialize(record)?;
    let base = required(raw.base, "base")?;

    let name = required(base.name, "base.name")?;
    let level = required(base.level, "base.level")?;
    tracing::debug!("Parsing character {} (level {})", name, level);

    let constellations = raw
        .constellations
        .unwrap_or_default()
        .into_iter()
        .map(parse_constellation)
        .collect::<Result<Vec<_>>>()?;

    let talents = raw
        .skills
        .unwrap_or_default()
        .into_iter()
        .map(|skill| parse_talent(skill, &constellations))
        .collect::<Result<Vec<_>>>()?;

    Ok(Character {
        id: required(base.id, "base.id")?,
        name,
        icon_url: base.icon.unwrap_or_default(),
        side_icon_url: base.side_icon.unwrap_or_default(),
        image_url: base.image.unwrap_or_default(),
        element: base.element.unwrap_or_default(),
        friendship: base.fetter.unwrap_or_default(),
        level,
        ascension: ascension_from_level(level),
        active_constellations: base.actived_constellation_num.unwrap_or_default(),
        weapon: raw.weapon.map(parse_weapon).transpose()?,
        artifacts: raw
            .relics
            .unwrap_or_default()
            .into_iter()
            .map(parse_artifact)
            .collect::<Result<Vec<_>>>()?,
        constellations,
        outfits: raw
            .costumes
            .unwrap_or_default()
            .into_iter()
            .map(parse_outfit)
            .collect::<Result<Vec<_>>>()?,
        talents,
    })
}

fn parse_weapon(raw: RawWeapon) -> Result<Weapon> {
    Ok(Weapon {
        id: required(raw.id, "weapon.id")?,
        name: required(raw.name, "weapon.name")?,
        icon_url: raw.icon.unwrap_or_default(),
        level: required(raw.level, "weapon.level")?,
        ascension: required(raw.promote_level, "weapon.promote_level")?,
        refinement: required(raw.affix_level, "weapon.affix_level")?,
    })
}

fn parse_artifact(raw: RawRelic) -> Result<Artifact> {
    let set = required(raw.set, "relics.set")?;
    let main_property = required(raw.main_property, "relics.main_property")?;

    let sub_stats = raw
        .sub_property_list
        .unwrap_or_default()
        .into_iter()
        .map(|sub| {
            Ok(Substat {
                stat_type: required(
                    sub.property_type,
                    "relics.sub_property_list.property_type",
                )?,
                value: sub.value,
                times: sub.times.unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Artifact {
        id: required(raw.id, "relics.id")?,
        set_id: required(set.id, "relics.set.id")?,
        set_name: required(set.name, "relics.set.name")?,
        icon_url: raw.icon.unwrap_or_default(),
        position: required(raw.pos, "relics.pos")?,
        rarity: required(raw.rarity, "relics.rarity")?,
        level: required(raw.level, "relics.level")?,
        main_stat_type: required(
            main_property.property_type,
            "relics.main_property.property_type",
        )?,
        sub_stats,
    })
}

fn parse_constellation(raw: RawConstellation) -> Result<Constellation> {
    Ok(Constellation {
        id: required(raw.id, "constellations.id")?,
        icon_url: raw.icon.unwrap_or_default(),
        position: required(raw.pos, "constellations.pos")?,
        is_active: raw.is_actived.unwrap_or_default(),
        is_enhanced: raw.is_enhanced.unwrap_or_default(),
        effect: raw.effect.unwrap_or_default(),
    })
}

fn parse_outfit(raw: RawCostume) -> Result<Outfit> {
    Ok(Outfit {
        id: required(raw.id, "costumes.id")?,
        name: raw.name.unwrap_or_default(),
        icon_url: raw.icon.unwrap_or_default(),
    })
}

fn parse_talent(raw: RawSkill, constellations: &[Constellation]) -> Result<Talent> {
    let name = raw.name.unwrap_or_default();
    let level = required(raw.level, "skills.level")?;

    Ok(Talent {
        id: required(raw.skill_id, "skills.skill_id")?,
        base_level: base_level(&name, level, constellations),
        name,
        icon_url: raw.icon.unwrap_or_default(),
        is_unlocked: raw.is_unlock.unwrap_or_default(),
        is_enhanced: raw.is_enhanced.unwrap_or_default(),
        is_alternate_sprint: is_alternate_sprint(raw.desc.as_deref()),
        level,
    })
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| missing(field))
}

fn missing(field: &str) -> ConvertError {
    ConvertError::MissingField(field.to_string())
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// Raw HoYoLAB shapes. Everything is optional at this layer so a missing
// field is reported as MissingField rather than a serde message.

#[derive(Deserialize)]
struct RawCharacter {
    base: Option<RawBase>,
    weapon: Option<RawWeapon>,
    relics: Option<Vec<RawRelic>>,
    constellations: Option<Vec<RawConstellation>>,
    costumes: Option<Vec<RawCostume>>,
    skills: Option<Vec<RawSkill>>,
}

#[derive(Deserialize)]
struct RawBase {
    id: Option<u64>,
    name: Option<String>,
    icon: Option<String>,
    side_icon: Option<String>,
    image: Option<String>,
    element: Option<String>,
    fetter: Option<u8>,
    level: Option<u32>,
    actived_constellation_num: Option<u8>,
}

#[derive(Deserialize)]
struct RawWeapon {
    id: Option<u64>,
    name: Option<String>,
    icon: Option<String>,
    level: Option<u32>,
    promote_level: Option<u8>,
    affix_level: Option<u8>,
}

#[derive(Deserialize)]
struct RawRelic {
    id: Option<u64>,
    set: Option<RawRelicSet>,
    icon: Option<String>,
    pos: Option<u8>,
    rarity: Option<u8>,
    level: Option<u32>,
    main_property: Option<RawProperty>,
    sub_property_list: Option<Vec<RawSubProperty>>,
}

#[derive(Deserialize)]
struct RawRelicSet {
    id: Option<u64>,
    name: Option<String>,
}

#[derive(Deserialize)]
struct RawProperty {
    property_type: Option<u32>,
}

#[derive(Deserialize)]
struct RawSubProperty {
    property_type: Option<u32>,
    value: Option<String>,
    times: Option<u8>,
}

#[derive(Deserialize)]
struct RawConstellation {
    id: Option<u64>,
    icon: Option<String>,
    pos: Option<u8>,
    is_actived: Option<bool>,
    is_enhanced: Option<bool>,
    effect: Option<String>,
}

#[derive(Deserialize)]
struct RawCostume {
    id: Option<u64>,
    name: Option<String>,
    icon: Option<String>,
}

#[derive(Deserialize)]
struct RawSkill {
    skill_id: Option<u64>,
    name: Option<String>,
    icon: Option<String>,
    is_unlock: Option<bool>,
    is_enhanced: Option<bool>,
    level: Option<u32>,
    desc: Option<String>,
}
