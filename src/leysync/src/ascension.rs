//! Ascension approximation
//!
//! HoYoLAB does not report a character's ascension phase, only the level.
//! The phase is recovered from the level caps (20/40/50/60/70/80/90).
//!
//! A character sitting exactly on a cap is ambiguous: level 80 may be a
//! phase 5 character that has not ascended yet or a phase 6 character that
//! has not levelled yet. Both are reported as the lower phase.

/// Upper level bound of each ascension phase, indexed by phase
const PHASE_CAPS: [u32; 6] = [20, 40, 50, 60, 70, 80];

/// Approximate ascension phase (0-6) from a level
pub fn ascension_from_level(level: u32) -> u8 {
    PHASE_CAPS
        .iter()
        .position(|&cap| level <= cap)
        .unwrap_or(PHASE_CAPS.len()) as u8
}
