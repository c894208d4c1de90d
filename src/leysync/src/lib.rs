//! # leysync
//!
//! HoYoLAB to GOOD converter library.
//!
//! This library provides functionality to:
//! - Validate and parse HoYoLAB `character/detail` responses into an internal model
//! - Derive values HoYoLAB leaves out (ascension phase, unboosted talent levels)
//! - Export the model as a GOOD v3 document for Genshin Optimizer and friends
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string("detail.json")?)?;
//!
//! let account = leysync::parse(&raw)?;
//! println!("Characters: {}", account.summary().total_characters);
//!
//! let options = leysync::ExportOptions {
//!     remove_manekin: true,
//!     add_traveler_element_to_key: true,
//!     min_character_level: 50,
//! };
//! let good = leysync::format_good(&account, &options)?;
//! fs::write("good.json", serde_json::to_string_pretty(&good)?)?;
//! # Ok(())
//! # }
//! ```

pub mod ascension;
pub mod error;
pub mod good;
pub mod keys;
pub mod model;
pub mod parser;
pub mod reference;
pub mod talent;
pub mod value;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(test)]
mod test_fixtures;

// Re-export commonly used items
#[doc(inline)]
pub use ascension::ascension_from_level;
#[doc(inline)]
pub use error::{ConvertError, Result};
#[doc(inline)]
pub use good::{
    character_key, format_artifact, format_character, format_good, format_weapon, is_exported,
    location_key, ExportOptions, GoodArtifact, GoodCharacter, GoodDocument, GoodSubstat,
    GoodTalent, GoodWeapon, GOOD_FORMAT, GOOD_VERSION,
};
#[doc(inline)]
pub use keys::to_good_key;
#[doc(inline)]
pub use model::{
    AccountData, AccountSummary, Artifact, Character, Constellation, Outfit, Substat, Talent,
    UserInfo, Weapon, INTERNAL_DATA_VERSION,
};
#[doc(inline)]
pub use parser::{
    character_records, is_valid_payload, parse, parse_character, parse_user, validate_envelope,
};
#[doc(inline)]
pub use reference::{slot_by_position, stat_key_by_code, SlotKey, StatKey};
#[doc(inline)]
pub use talent::base_level;
#[doc(inline)]
pub use value::parse_stat_value;

/// Parse a HoYoLAB response and export it as GOOD in one step
pub fn convert(payload: &serde_json::Value, options: &ExportOptions) -> Result<GoodDocument> {
    let account = parse(payload)?;
    format_good(&account, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{ayaka_record, basic_record, envelope, raiden_record};

    #[test]
    fn test_convert_end_to_end() -> anyhow::Result<()> {
        let payload = envelope(vec![
            basic_record(10000007, "Traveler", "Anemo", 55),
            basic_record(10000117, "Manekin", "Anemo", 70),
            basic_record(10000021, "Amber", "Pyro", 40),
            ayaka_record(),
            raiden_record(),
        ]);
        let options = ExportOptions {
            remove_manekin: true,
            add_traveler_element_to_key: true,
            min_character_level: 50,
        };

        let good = convert(&payload, &options)?;
        let keys: Vec<&str> = good.characters.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["TravelerAnemo", "KamisatoAyaka", "RaidenShogun"]);
        assert_eq!(good.weapons.len(), 3);
        assert_eq!(good.artifacts.len(), 1 + 2 + 1);

        let json = serde_json::to_value(&good)?;
        assert_eq!(json["format"], GOOD_FORMAT);
        assert_eq!(json["version"], GOOD_VERSION);
        Ok(())
    }

    #[test]
    fn test_model_survives_json_storage() -> anyhow::Result<()> {
        let account = parse(&envelope(vec![ayaka_record(), raiden_record()]))?;
        let stored = serde_json::to_string(&account)?;
        let restored: AccountData = serde_json::from_str(&stored)?;
        assert_eq!(restored, account);

        let options = ExportOptions::default();
        assert_eq!(
            format_good(&restored, &options)?,
            format_good(&account, &options)?
        );
        Ok(())
    }
}
