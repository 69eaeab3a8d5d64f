//! Per-card mastery: accumulated usage XP mapped onto a discrete level curve.
//!
//! Only the current level's bonus is active; it replaces lower levels rather
//! than stacking with them. Usage XP itself comes from an external stats
//! collaborator (`usage_xp_of`), the curve from the validated
//! [`MasteryTable`](crate::economy::catalog::MasteryTable).

use super::catalog::MasteryTable;
use super::types::{MasteryBonus, MasteryLevel};

/// The highest level whose XP threshold is met. Level 0 is the floor.
pub fn level_of(table: &MasteryTable, xp: u64) -> &MasteryLevel {
    table
        .levels()
        .iter()
        .rev()
        .find(|level| level.xp_required <= xp)
        // Level 0 requires 0 XP by table validation.
        .unwrap_or(&table.levels()[0])
}

/// The level directly above the current one, or `None` at the cap.
pub fn next_level_of(table: &MasteryTable, xp: u64) -> Option<&MasteryLevel> {
    let current = level_of(table, xp);
    table.levels().get(current.level as usize + 1)
}

/// Progress toward the next level, 0-100. Returns 100 at the cap.
pub fn progress_percent(table: &MasteryTable, xp: u64) -> u8 {
    let current = level_of(table, xp);
    let Some(next) = next_level_of(table, xp) else {
        return 100;
    };
    let span = (next.xp_required - current.xp_required) as f64;
    let into = (xp - current.xp_required) as f64;
    let percent = (100.0 * into / span).round() as u64;
    percent.min(100) as u8
}

/// The total stat bonus in effect at the given XP.
pub fn active_bonus(table: &MasteryTable, xp: u64) -> MasteryBonus {
    level_of(table, xp).bonus
}
