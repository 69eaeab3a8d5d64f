//! Test utilities & fixtures.
//! Builds small deterministic catalogs so integration tests control content
//! instead of depending on the built-in starter set.

use packforge::economy::catalog::Catalog;
use packforge::economy::types::{
    Achievement, AchievementCategory, AchievementTierDef, AchievementTiers, CardDef,
    MasteryBonus, MasteryLevel, Rarity, RankTier, TierPoints, TierReward,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A deterministic RNG; tests share seeds so failures reproduce.
#[allow(dead_code)] // Not every test binary draws randomness.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[allow(dead_code)]
fn ladder(targets: [u64; 3]) -> AchievementTiers {
    AchievementTiers {
        bronze: AchievementTierDef {
            target: targets[0],
            reward: TierReward::coins(25),
        },
        silver: AchievementTierDef {
            target: targets[1],
            reward: TierReward::coins(100).with_dust(20),
        },
        gold: AchievementTierDef {
            target: targets[2],
            reward: TierReward::coins(400).with_title("the Proven"),
        },
    }
}

/// A compact catalog: two commons, one of each higher rarity, two
/// achievements, the canonical [0,5,15,30,50,100] mastery curve, and a
/// four-step rank ladder.
#[allow(dead_code)] // Shared across test binaries; not all use every helper.
pub fn test_catalog() -> Catalog {
    let cards = vec![
        CardDef::new("spark", "Spark", Rarity::Common),
        CardDef::new("pebble", "Pebble Golem", Rarity::Common),
        CardDef::new("wisp", "Wisp", Rarity::Uncommon),
        CardDef::new("drake", "Drake", Rarity::Rare),
        CardDef::new("titan", "Titan", Rarity::Epic),
        CardDef::new("phoenix", "Phoenix", Rarity::Legendary),
    ];

    let achievements = vec![
        Achievement::new(
            "battle_tested",
            "Battle Tested",
            "Win ranked battles",
            AchievementCategory::Battles,
            ladder([10, 50, 200]),
        ),
        Achievement::new(
            "card_hoarder",
            "Card Hoarder",
            "Collect unique cards",
            AchievementCategory::Collection,
            ladder([3, 5, 6]),
        ),
    ];

    let mastery = [0u64, 5, 15, 30, 50, 100]
        .iter()
        .enumerate()
        .map(|(i, &xp)| {
            MasteryLevel::new(
                i as u8,
                xp,
                &format!("Rank {}", i),
                MasteryBonus {
                    attack_bonus: i as u32,
                    ..Default::default()
                },
            )
        })
        .collect();

    let ranks = vec![
        RankTier::new("Novice", 0),
        RankTier::new("Apprentice", 50),
        RankTier::new("Journeyman", 150),
        RankTier::new("Master", 400),
    ];

    Catalog::from_parts(cards, achievements, mastery, ranks, TierPoints::default()).unwrap()
}
