//! Account rank: claimed achievement tiers aggregated into points and a
//! position on the rank ladder.

use super::catalog::RankTable;
use super::types::{ClaimedAchievement, RankTier, TierPoints};

/// Total points across every claimed tier, independent of which achievement
/// each tier came from.
pub fn total_points(points: &TierPoints, claims: &[ClaimedAchievement]) -> u32 {
    claims
        .iter()
        .flat_map(|record| record.claimed_tiers())
        .map(|tier| points.for_tier(tier))
        .sum()
}

/// The highest rank whose threshold is met, scanning the table ascending and
/// keeping the last tier that still qualifies. Thresholds are inclusive:
/// exactly `points_required` points grants that rank. Below every threshold
/// the lowest rank applies.
pub fn current_rank<'a>(table: &'a RankTable, points: u32) -> &'a RankTier {
    table
        .tiers()
        .iter()
        .take_while(|tier| tier.points_required <= points)
        .last()
        .unwrap_or_else(|| table.lowest())
}

/// The first rank above the current points, or `None` at the top of the
/// ladder.
pub fn next_rank<'a>(table: &'a RankTable, points: u32) -> Option<&'a RankTier> {
    table
        .tiers()
        .iter()
        .find(|tier| tier.points_required > points)
}

/// Progress toward the next rank as a rounded percentage. Returns 100 when
/// no higher rank exists. Unlike mastery progress this is not clamped;
/// monotonic point accrual keeps it within range on its own.
pub fn progress_percent(table: &RankTable, points: u32) -> u8 {
    let current = current_rank(table, points);
    let Some(next) = next_rank(table, points) else {
        return 100;
    };
    if next.points_required <= current.points_required {
        // Points sit below the bottom of a ladder that does not anchor at 0.
        return 0;
    }
    let span = (next.points_required - current.points_required) as f64;
    let into = points.saturating_sub(current.points_required) as f64;
    (100.0 * into / span).round() as u8
}
