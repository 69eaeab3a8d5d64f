//! Validated, immutable catalog containers.
//!
//! All static configuration (cards, achievements, mastery curve, rank table,
//! tier points) is validated once at load and then passed by reference into
//! every economy operation. Validation failures are fatal to startup; the
//! per-call operations rely on the invariants established here.

use std::collections::HashSet;
use std::path::Path;

use log::info;

use super::errors::EconomyError;
use super::seed_loader;
use super::state;
use super::types::{Achievement, CardDef, MasteryLevel, Rarity, RankTier, TierPoints};

// ============================================================================
// Card catalog
// ============================================================================

/// The static card pool, indexed by rarity for uniform picks.
#[derive(Debug, Clone)]
pub struct CardCatalog {
    cards: Vec<CardDef>,
}

impl CardCatalog {
    /// Build and validate a card catalog.
    ///
    /// Invariants enforced: at least one card overall, at least one `common`
    /// card (the fallback pool for picks), and unique card ids.
    pub fn new(cards: Vec<CardDef>) -> Result<Self, EconomyError> {
        if cards.is_empty() {
            return Err(EconomyError::Catalog("card catalog is empty".to_string()));
        }
        if !cards.iter().any(|c| c.rarity == Rarity::Common) {
            return Err(EconomyError::Catalog(
                "card catalog has no common cards (fallback pool would be empty)".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id.as_str()) {
                return Err(EconomyError::Catalog(format!(
                    "duplicate card id: {}",
                    card.id
                )));
            }
        }
        Ok(Self { cards })
    }

    pub fn get(&self, card_id: &str) -> Option<&CardDef> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub fn all(&self) -> &[CardDef] {
        &self.cards
    }

    /// Every card of the given rarity, in catalog order.
    pub fn of_rarity(&self, rarity: Rarity) -> Vec<&CardDef> {
        self.cards.iter().filter(|c| c.rarity == rarity).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// ============================================================================
// Achievement catalog
// ============================================================================

/// The static achievement set with per-achievement tier ladders.
#[derive(Debug, Clone)]
pub struct AchievementCatalog {
    achievements: Vec<Achievement>,
}

impl AchievementCatalog {
    /// Build and validate the achievement catalog.
    ///
    /// Invariants enforced: unique ids and strictly increasing tier targets
    /// (bronze < silver < gold) on every achievement.
    pub fn new(achievements: Vec<Achievement>) -> Result<Self, EconomyError> {
        let mut seen = HashSet::new();
        for achievement in &achievements {
            if !seen.insert(achievement.id.as_str()) {
                return Err(EconomyError::Catalog(format!(
                    "duplicate achievement id: {}",
                    achievement.id
                )));
            }
            let tiers = &achievement.tiers;
            if tiers.bronze.target >= tiers.silver.target
                || tiers.silver.target >= tiers.gold.target
            {
                return Err(EconomyError::Catalog(format!(
                    "achievement {} tier targets must strictly increase bronze < silver < gold",
                    achievement.id
                )));
            }
        }
        Ok(Self { achievements })
    }

    pub fn get(&self, achievement_id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == achievement_id)
    }

    pub fn all(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }
}

// ============================================================================
// Mastery table
// ============================================================================

/// The ordered mastery curve, level 0 upward.
#[derive(Debug, Clone)]
pub struct MasteryTable {
    levels: Vec<MasteryLevel>,
}

impl MasteryTable {
    /// Build and validate the mastery table.
    ///
    /// Invariants enforced: non-empty, levels numbered 0..N contiguously,
    /// level 0 at 0 XP (the guaranteed floor), and strictly increasing
    /// `xp_required`.
    pub fn new(mut levels: Vec<MasteryLevel>) -> Result<Self, EconomyError> {
        if levels.is_empty() {
            return Err(EconomyError::Catalog("mastery table is empty".to_string()));
        }
        levels.sort_by_key(|l| l.level);
        for (i, level) in levels.iter().enumerate() {
            if level.level as usize != i {
                return Err(EconomyError::Catalog(format!(
                    "mastery levels must be numbered contiguously from 0, found {} at position {}",
                    level.level, i
                )));
            }
        }
        if levels[0].xp_required != 0 {
            return Err(EconomyError::Catalog(
                "mastery level 0 must require 0 xp".to_string(),
            ));
        }
        for pair in levels.windows(2) {
            if pair[0].xp_required >= pair[1].xp_required {
                return Err(EconomyError::Catalog(format!(
                    "mastery xp thresholds must strictly increase (level {} -> {})",
                    pair[0].level, pair[1].level
                )));
            }
        }
        Ok(Self { levels })
    }

    pub fn levels(&self) -> &[MasteryLevel] {
        &self.levels
    }

    pub fn max_level(&self) -> &MasteryLevel {
        // Non-empty by construction.
        &self.levels[self.levels.len() - 1]
    }
}

// ============================================================================
// Rank table
// ============================================================================

/// The ordered account-rank ladder, lowest first.
#[derive(Debug, Clone)]
pub struct RankTable {
    tiers: Vec<RankTier>,
}

impl RankTable {
    /// Build and validate the rank table.
    ///
    /// Invariants enforced: non-empty and strictly increasing
    /// `points_required` in table order.
    pub fn new(tiers: Vec<RankTier>) -> Result<Self, EconomyError> {
        if tiers.is_empty() {
            return Err(EconomyError::Catalog("rank table is empty".to_string()));
        }
        for pair in tiers.windows(2) {
            if pair[0].points_required >= pair[1].points_required {
                return Err(EconomyError::Catalog(format!(
                    "rank point thresholds must strictly increase ({} -> {})",
                    pair[0].name, pair[1].name
                )));
            }
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[RankTier] {
        &self.tiers
    }

    /// The default rank held before any threshold is met.
    pub fn lowest(&self) -> &RankTier {
        &self.tiers[0]
    }
}

// ============================================================================
// Aggregate catalog
// ============================================================================

/// Everything static the economy needs, validated and loaded once.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub cards: CardCatalog,
    pub achievements: AchievementCatalog,
    pub mastery: MasteryTable,
    pub ranks: RankTable,
    pub tier_points: TierPoints,
}

impl Catalog {
    /// Assemble a catalog from raw parts, running all validation.
    pub fn from_parts(
        cards: Vec<CardDef>,
        achievements: Vec<Achievement>,
        mastery: Vec<MasteryLevel>,
        ranks: Vec<RankTier>,
        tier_points: TierPoints,
    ) -> Result<Self, EconomyError> {
        Ok(Self {
            cards: CardCatalog::new(cards)?,
            achievements: AchievementCatalog::new(achievements)?,
            mastery: MasteryTable::new(mastery)?,
            ranks: RankTable::new(ranks)?,
            tier_points,
        })
    }

    /// The built-in starter content (see [`super::state`]).
    pub fn builtin() -> Result<Self, EconomyError> {
        Self::from_parts(
            state::seed_starter_cards(),
            state::seed_starter_achievements(),
            state::default_mastery_levels(),
            state::default_rank_tiers(),
            TierPoints::default(),
        )
    }

    /// Load catalogs from JSON seed files under `dir`, falling back to the
    /// built-in content for any file that is absent. A file that exists but
    /// fails to parse or validate is an error, not a fallback.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, EconomyError> {
        let dir = dir.as_ref();

        let cards_path = dir.join("cards.json");
        let cards = if cards_path.exists() {
            seed_loader::load_cards_from_json(&cards_path)?
        } else {
            state::seed_starter_cards()
        };

        let achievements_path = dir.join("achievements.json");
        let achievements = if achievements_path.exists() {
            seed_loader::load_achievements_from_json(&achievements_path)?
        } else {
            state::seed_starter_achievements()
        };

        let mastery_path = dir.join("mastery.json");
        let mastery = if mastery_path.exists() {
            seed_loader::load_mastery_from_json(&mastery_path)?
        } else {
            state::default_mastery_levels()
        };

        let ranks_path = dir.join("ranks.json");
        let ranks = if ranks_path.exists() {
            seed_loader::load_ranks_from_json(&ranks_path)?
        } else {
            state::default_rank_tiers()
        };

        let catalog = Self::from_parts(
            cards,
            achievements,
            mastery,
            ranks,
            TierPoints::default(),
        )?;
        info!(
            "Loaded catalogs from {}: {} cards, {} achievements, {} mastery levels, {} ranks",
            dir.display(),
            catalog.cards.len(),
            catalog.achievements.len(),
            catalog.mastery.levels().len(),
            catalog.ranks.tiers().len(),
        );
        Ok(catalog)
    }
}
