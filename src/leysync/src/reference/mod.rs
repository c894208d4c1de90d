//! Reference data for GOOD export
//!
//! Closed enumerations for artifact slots and stat keys, and the tables
//! mapping HoYoLAB's numeric codes onto them.

pub mod slot;
pub mod stats;

pub use slot::{slot_by_position, SlotKey, SLOT_KEYS};
pub use stats::{known_stat_codes, stat_key_by_code, StatKey, STAT_KEYS};
