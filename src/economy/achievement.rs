//! Tiered achievement tracking: eligibility checks and one-time reward claims.
//!
//! Raw progress counters (battles won, cards collected, coins earned) come
//! from an external stats collaborator; the tracker only compares them against
//! the static tier targets and the player's append-only claim record. Claims
//! are idempotent - claiming an already-claimed or not-yet-eligible tier fails
//! without side effect, and reward crediting stays with the caller.
//!
//! Tiers may be claimed out of order: a player whose progress already exceeds
//! the gold target can claim gold before bronze. Each tier's reward is
//! independent, so nothing is lost or double-granted either way.

use super::catalog::AchievementCatalog;
use super::errors::{ClaimError, EconomyError};
use super::types::{Achievement, AchievementTier, ClaimedAchievement, TierReward};

/// True when the tier's target is met and it has not been claimed yet.
/// `record` is the player's claim record for this achievement; `None` means
/// nothing claimed so far.
pub fn can_claim(
    achievement: &Achievement,
    tier: AchievementTier,
    progress: u64,
    record: Option<&ClaimedAchievement>,
) -> bool {
    let already = record.map(|r| r.has(tier)).unwrap_or(false);
    !already && progress >= achievement.tiers.get(tier).target
}

/// Claim a tier, re-validating eligibility.
///
/// On success the tier is appended to the claim record and the static reward
/// payload returned for the caller to credit. On failure nothing is mutated.
pub fn claim<'a>(
    achievement: &'a Achievement,
    tier: AchievementTier,
    progress: u64,
    record: &mut ClaimedAchievement,
) -> Result<&'a TierReward, ClaimError> {
    if record.has(tier) {
        return Err(ClaimError::AlreadyClaimed);
    }
    let tier_def = achievement.tiers.get(tier);
    if progress < tier_def.target {
        return Err(ClaimError::NotEligible);
    }
    record.mark_claimed(tier);
    Ok(&tier_def.reward)
}

/// Every tier of one achievement currently claimable at the given progress.
pub fn claimable_tiers(
    achievement: &Achievement,
    progress: u64,
    record: Option<&ClaimedAchievement>,
) -> Vec<AchievementTier> {
    AchievementTier::ALL
        .iter()
        .copied()
        .filter(|&tier| can_claim(achievement, tier, progress, record))
        .collect()
}

/// Find the player's claim record for an achievement, if any.
pub fn record_for<'a>(
    claims: &'a [ClaimedAchievement],
    achievement_id: &str,
) -> Option<&'a ClaimedAchievement> {
    claims.iter().find(|c| c.achievement_id == achievement_id)
}

/// Claim a tier against the player's full claim list, creating the per-
/// achievement record on first claim.
///
/// Validates before touching the list, so a rejected claim leaves it
/// byte-for-byte unchanged (no empty record is created).
pub fn claim_for_player<'a>(
    catalog: &'a AchievementCatalog,
    claims: &mut Vec<ClaimedAchievement>,
    achievement_id: &str,
    tier: AchievementTier,
    progress: u64,
) -> Result<&'a TierReward, EconomyError> {
    let achievement = catalog
        .get(achievement_id)
        .ok_or_else(|| EconomyError::UnknownAchievement(achievement_id.to_string()))?;

    if !can_claim(achievement, tier, progress, record_for(claims, achievement_id)) {
        let already = record_for(claims, achievement_id)
            .map(|r| r.has(tier))
            .unwrap_or(false);
        let err = if already {
            ClaimError::AlreadyClaimed
        } else {
            ClaimError::NotEligible
        };
        return Err(err.into());
    }

    let record = match claims.iter().position(|c| c.achievement_id == achievement_id) {
        Some(index) => &mut claims[index],
        None => {
            claims.push(ClaimedAchievement::new(achievement_id));
            let last = claims.len() - 1;
            &mut claims[last]
        }
    };
    record.mark_claimed(tier);
    Ok(&achievement.tiers.get(tier).reward)
}

/// Sweep the whole catalog for claimable tiers, reading each achievement's
/// raw progress through the supplied stats accessor.
pub fn claimable(
    catalog: &AchievementCatalog,
    claims: &[ClaimedAchievement],
    progress_of: impl Fn(&str) -> u64,
) -> Vec<(String, AchievementTier)> {
    let mut out = Vec::new();
    for achievement in catalog.all() {
        let progress = progress_of(&achievement.id);
        let record = record_for(claims, &achievement.id);
        for tier in claimable_tiers(achievement, progress, record) {
            out.push((achievement.id.clone(), tier));
        }
    }
    out
}
