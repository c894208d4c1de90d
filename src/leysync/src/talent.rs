//! Talent level correction
//!
//! HoYoLAB reports talent levels with constellation bonuses applied, while
//! GOOD wants the unboosted level. The API has no link between a
//! constellation and the talent it boosts, so the link is inferred from the
//! constellation's effect text: the C3 and C5 nodes of every character read
//! "Increases the Level of <talent name> by 3".
//!
//! This misfires when a talent name happens to appear in an unrelated C3/C5
//! description, and misses when the effect text is localized differently
//! from the talent name.

use crate::model::Constellation;

/// Levels added by a C3/C5 talent boost
pub const TALENT_BOOST_LEVELS: u32 = 3;

/// Constellation positions that can boost a talent
pub const BOOSTING_POSITIONS: [u8; 2] = [3, 5];

/// Description marker of an alternate sprint (Ayaka, Mona, ...)
const ALTERNATE_SPRINT_MARKER: &str = "Alternate Sprint";

/// Find the active constellation that boosts the named talent, if any
pub fn boosting_constellation<'a>(
    talent_name: &str,
    constellations: &'a [Constellation],
) -> Option<&'a Constellation> {
    // An empty name is a substring of everything
    if talent_name.is_empty() {
        return None;
    }

    constellations.iter().find(|c| {
        c.is_active && BOOSTING_POSITIONS.contains(&c.position) && c.effect.contains(talent_name)
    })
}

/// Talent level with any constellation bonus removed
pub fn base_level(talent_name: &str, level: u32, constellations: &[Constellation]) -> u32 {
    match boosting_constellation(talent_name, constellations) {
        Some(_) => level.saturating_sub(TALENT_BOOST_LEVELS),
        None => level,
    }
}

/// Whether a skill description marks an alternate sprint.
///
/// HoYoLAB lists the sprint among the skills with nothing but its
/// description to tell it apart, so this falls back to matching text.
pub fn is_alternate_sprint(desc: Option<&str>) -> bool {
    desc.is_some_and(|d| d.contains(ALTERNATE_SPRINT_MARKER))
}
