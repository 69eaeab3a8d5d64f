//! Data model for the reward economy.
//! Catalog records (cards, achievements, mastery levels, rank tiers) are
//! process-wide immutable configuration; collection entries and claim records
//! are per-player snapshots owned by the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Rarity
// ============================================================================

/// Drop rarity, ordered rarest to commonest.
///
/// The declaration order is load-bearing: [`Rarity::ALL`] and the weighted
/// roll in [`crate::economy::rarity`] scan tiers rarest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Legendary,
    Epic,
    Rare,
    Uncommon,
    Common,
}

impl Rarity {
    /// All rarities, rarest first.
    pub const ALL: [Rarity; 5] = [
        Rarity::Legendary,
        Rarity::Epic,
        Rarity::Rare,
        Rarity::Uncommon,
        Rarity::Common,
    ];

    /// Base drop probability. The five tiers sum to 1.0.
    pub fn base_probability(self) -> f64 {
        match self {
            Rarity::Legendary => 0.01,
            Rarity::Epic => 0.04,
            Rarity::Rare => 0.10,
            Rarity::Uncommon => 0.25,
            Rarity::Common => 0.60,
        }
    }

    /// Position in the rarest-first order (Legendary = 0, Common = 4).
    pub fn index(self) -> usize {
        match self {
            Rarity::Legendary => 0,
            Rarity::Epic => 1,
            Rarity::Rare => 2,
            Rarity::Uncommon => 3,
            Rarity::Common => 4,
        }
    }

    /// True when `self` is the same tier as `other` or a rarer one.
    pub fn at_least(self, other: Rarity) -> bool {
        self.index() <= other.index()
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rarity::Legendary => "legendary",
            Rarity::Epic => "epic",
            Rarity::Rare => "rare",
            Rarity::Uncommon => "uncommon",
            Rarity::Common => "common",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legendary" => Ok(Rarity::Legendary),
            "epic" => Ok(Rarity::Epic),
            "rare" => Ok(Rarity::Rare),
            "uncommon" => Ok(Rarity::Uncommon),
            "common" => Ok(Rarity::Common),
            other => Err(format!("unknown rarity: {}", other)),
        }
    }
}

// ============================================================================
// Cards & Collection
// ============================================================================

/// A card in the static reward catalog. Read-only at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDef {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
}

impl CardDef {
    pub fn new(id: &str, name: &str, rarity: Rarity) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rarity,
        }
    }
}

/// One owned-card line in a player's collection.
///
/// Invariant: `quantity >= 1`. An entry that would drop to zero is removed
/// from the collection, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub card_id: String,
    pub quantity: u32,
    /// When the first copy entered the collection.
    pub first_acquired_at: DateTime<Utc>,
}

impl CollectionEntry {
    pub fn new(card_id: &str, quantity: u32) -> Self {
        Self {
            card_id: card_id.to_string(),
            quantity,
            first_acquired_at: Utc::now(),
        }
    }
}

// ============================================================================
// Achievements
// ============================================================================

/// Broad grouping used for display and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Battles,
    Collection,
    Economy,
    Mastery,
    Special,
}

/// One of the three claimable thresholds on an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementTier {
    Bronze,
    Silver,
    Gold,
}

impl AchievementTier {
    /// All tiers, lowest target first.
    pub const ALL: [AchievementTier; 3] = [
        AchievementTier::Bronze,
        AchievementTier::Silver,
        AchievementTier::Gold,
    ];
}

impl fmt::Display for AchievementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AchievementTier::Bronze => "bronze",
            AchievementTier::Silver => "silver",
            AchievementTier::Gold => "gold",
        };
        write!(f, "{}", name)
    }
}

/// Static payout attached to an achievement tier. Crediting coins/dust and
/// unlocking titles is the caller's job; the tracker only authorizes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierReward {
    #[serde(default)]
    pub coins: u32,
    #[serde(default)]
    pub dust: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TierReward {
    pub fn coins(amount: u32) -> Self {
        Self {
            coins: amount,
            ..Default::default()
        }
    }

    pub fn with_dust(mut self, amount: u32) -> Self {
        self.dust = amount;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }
}

/// A single tier threshold: reach `target` progress, claim `reward` once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementTierDef {
    pub target: u64,
    pub reward: TierReward,
}

/// The bronze/silver/gold ladder of one achievement.
/// Targets must be strictly increasing bronze < silver < gold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementTiers {
    pub bronze: AchievementTierDef,
    pub silver: AchievementTierDef,
    pub gold: AchievementTierDef,
}

impl AchievementTiers {
    pub fn get(&self, tier: AchievementTier) -> &AchievementTierDef {
        match tier {
            AchievementTier::Bronze => &self.bronze,
            AchievementTier::Silver => &self.silver,
            AchievementTier::Gold => &self.gold,
        }
    }
}

/// A static achievement definition with its three tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: AchievementCategory,
    pub tiers: AchievementTiers,
}

impl Achievement {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        category: AchievementCategory,
        tiers: AchievementTiers,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            tiers,
        }
    }
}

/// One claimed tier on a player's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierClaim {
    pub tier: AchievementTier,
    pub claimed_at: DateTime<Utc>,
}

/// Per-player claim record for one achievement. Append-only: a tier once
/// claimed is never removed. An absent record means nothing claimed yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimedAchievement {
    pub achievement_id: String,
    pub claimed: Vec<TierClaim>,
}

impl ClaimedAchievement {
    pub fn new(achievement_id: &str) -> Self {
        Self {
            achievement_id: achievement_id.to_string(),
            claimed: Vec::new(),
        }
    }

    pub fn has(&self, tier: AchievementTier) -> bool {
        self.claimed.iter().any(|c| c.tier == tier)
    }

    /// Record a tier as claimed. No-op if already present.
    pub fn mark_claimed(&mut self, tier: AchievementTier) {
        if !self.has(tier) {
            self.claimed.push(TierClaim {
                tier,
                claimed_at: Utc::now(),
            });
        }
    }

    pub fn claimed_tiers(&self) -> impl Iterator<Item = AchievementTier> + '_ {
        self.claimed.iter().map(|c| c.tier)
    }
}

// ============================================================================
// Mastery
// ============================================================================

/// Stat bonus active at a mastery level. Each level's bonus is the TOTAL in
/// effect at that level - it replaces lower levels, it does not stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryBonus {
    #[serde(default)]
    pub attack_bonus: u32,
    #[serde(default)]
    pub hp_bonus: u32,
    #[serde(default)]
    pub cost_reduction: u32,
}

/// One row of the mastery curve: reach `xp_required` usage XP to hold `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasteryLevel {
    pub level: u8,
    pub xp_required: u64,
    pub title: String,
    #[serde(default)]
    pub bonus: MasteryBonus,
}

impl MasteryLevel {
    pub fn new(level: u8, xp_required: u64, title: &str, bonus: MasteryBonus) -> Self {
        Self {
            level,
            xp_required,
            title: title.to_string(),
            bonus,
        }
    }
}

// ============================================================================
// Rank
// ============================================================================

/// One account-rank threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankTier {
    pub name: String,
    pub points_required: u32,
}

impl RankTier {
    pub fn new(name: &str, points_required: u32) -> Self {
        Self {
            name: name.to_string(),
            points_required,
        }
    }
}

/// Points granted per claimed achievement tier, independent of which
/// achievement the tier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPoints {
    pub bronze: u32,
    pub silver: u32,
    pub gold: u32,
}

impl Default for TierPoints {
    fn default() -> Self {
        Self {
            bronze: 10,
            silver: 30,
            gold: 60,
        }
    }
}

impl TierPoints {
    pub fn for_tier(&self, tier: AchievementTier) -> u32 {
        match tier {
            AchievementTier::Bronze => self.bronze,
            AchievementTier::Silver => self.silver,
            AchievementTier::Gold => self.gold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_order_is_rarest_first() {
        assert_eq!(Rarity::ALL[0], Rarity::Legendary);
        assert_eq!(Rarity::ALL[4], Rarity::Common);
        for (i, r) in Rarity::ALL.iter().enumerate() {
            assert_eq!(r.index(), i);
        }
    }

    #[test]
    fn rarity_probabilities_sum_to_one() {
        let sum: f64 = Rarity::ALL.iter().map(|r| r.base_probability()).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rarity_at_least() {
        assert!(Rarity::Legendary.at_least(Rarity::Epic));
        assert!(Rarity::Epic.at_least(Rarity::Epic));
        assert!(!Rarity::Rare.at_least(Rarity::Epic));
    }

    #[test]
    fn rarity_parses_case_insensitive() {
        assert_eq!("Epic".parse::<Rarity>().unwrap(), Rarity::Epic);
        assert!("mythic".parse::<Rarity>().is_err());
    }

    #[test]
    fn claim_record_is_append_only() {
        let mut record = ClaimedAchievement::new("collector");
        assert!(!record.has(AchievementTier::Gold));

        record.mark_claimed(AchievementTier::Gold);
        record.mark_claimed(AchievementTier::Gold);
        assert!(record.has(AchievementTier::Gold));
        assert_eq!(record.claimed.len(), 1);
    }

    #[test]
    fn tier_points_defaults() {
        let points = TierPoints::default();
        assert_eq!(points.for_tier(AchievementTier::Bronze), 10);
        assert_eq!(points.for_tier(AchievementTier::Silver), 30);
        assert_eq!(points.for_tier(AchievementTier::Gold), 60);
    }
}
