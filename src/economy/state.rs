//! Built-in starter content: the card set, achievement ladder, mastery curve,
//! rank table, and pack products used when no seed files are present.
//! Admins override any of these with JSON files under `data/seeds/` (see
//! [`super::seed_loader`]).

use super::packs::PackSpec;
use super::types::{
    Achievement, AchievementCategory, AchievementTierDef, AchievementTiers, CardDef,
    MasteryBonus, MasteryLevel, Rarity, RankTier, TierReward,
};

fn ladder(
    targets: [u64; 3],
    bronze: TierReward,
    silver: TierReward,
    gold: TierReward,
) -> AchievementTiers {
    AchievementTiers {
        bronze: AchievementTierDef {
            target: targets[0],
            reward: bronze,
        },
        silver: AchievementTierDef {
            target: targets[1],
            reward: silver,
        },
        gold: AchievementTierDef {
            target: targets[2],
            reward: gold,
        },
    }
}

/// The starter card set. Every rarity is represented and commons dominate,
/// so the fallback pool for picks is always well stocked.
pub fn seed_starter_cards() -> Vec<CardDef> {
    use Rarity::*;

    vec![
        CardDef::new("ember_sprite", "Ember Sprite", Common),
        CardDef::new("pebble_golem", "Pebble Golem", Common),
        CardDef::new("marsh_toad", "Marsh Toad", Common),
        CardDef::new("gutter_rat", "Gutter Rat", Common),
        CardDef::new("hedge_knight", "Hedge Knight", Common),
        CardDef::new("tide_crab", "Tide Crab", Common),
        CardDef::new("lantern_moth", "Lantern Moth", Common),
        CardDef::new("bramble_wolf", "Bramble Wolf", Uncommon),
        CardDef::new("frost_adder", "Frost Adder", Uncommon),
        CardDef::new("dune_striker", "Dune Striker", Uncommon),
        CardDef::new("storm_herald", "Storm Herald", Uncommon),
        CardDef::new("cinder_drake", "Cinder Drake", Rare),
        CardDef::new("grave_warden", "Grave Warden", Rare),
        CardDef::new("mirror_mage", "Mirror Mage", Rare),
        CardDef::new("obsidian_titan", "Obsidian Titan", Epic),
        CardDef::new("void_siren", "Void Siren", Epic),
        CardDef::new("dawn_phoenix", "Dawn Phoenix", Legendary),
        CardDef::new("world_serpent", "World Serpent", Legendary),
    ]
}

/// The starter achievement set. Progress for each comes from the stats
/// collaborator keyed by achievement id.
pub fn seed_starter_achievements() -> Vec<Achievement> {
    use AchievementCategory::*;

    vec![
        Achievement::new(
            "battle_tested",
            "Battle Tested",
            "Win ranked battles",
            Battles,
            ladder(
                [10, 50, 200],
                TierReward::coins(25),
                TierReward::coins(100).with_dust(20),
                TierReward::coins(400).with_dust(100).with_title("the Battle-Tested"),
            ),
        ),
        Achievement::new(
            "card_hoarder",
            "Card Hoarder",
            "Collect unique cards",
            Collection,
            ladder(
                [10, 30, 100],
                TierReward::coins(25),
                TierReward::coins(100).with_dust(20),
                TierReward::coins(400).with_dust(100).with_title("the Hoarder"),
            ),
        ),
        Achievement::new(
            "pack_breaker",
            "Pack Breaker",
            "Open card packs",
            Economy,
            ladder(
                [5, 25, 100],
                TierReward::coins(20),
                TierReward::coins(80).with_dust(10),
                TierReward::coins(300).with_dust(60),
            ),
        ),
        Achievement::new(
            "big_spender",
            "Big Spender",
            "Spend coins in the shop",
            Economy,
            ladder(
                [1_000, 10_000, 50_000],
                TierReward::default().with_dust(15),
                TierReward::coins(150).with_dust(40),
                TierReward::coins(500).with_dust(150).with_title("the Extravagant"),
            ),
        ),
        Achievement::new(
            "card_scholar",
            "Card Scholar",
            "Reach max mastery on cards",
            Mastery,
            ladder(
                [1, 5, 20],
                TierReward::coins(50),
                TierReward::coins(200).with_dust(50),
                TierReward::coins(600).with_dust(200).with_title("the Scholar"),
            ),
        ),
        Achievement::new(
            "damage_dealer",
            "Damage Dealer",
            "Deal total battle damage",
            Battles,
            ladder(
                [10_000, 100_000, 1_000_000],
                TierReward::coins(30),
                TierReward::coins(120).with_dust(25),
                TierReward::coins(450).with_dust(120),
            ),
        ),
    ]
}

/// The default mastery curve. Each level's bonus is the total in effect at
/// that level.
pub fn default_mastery_levels() -> Vec<MasteryLevel> {
    vec![
        MasteryLevel::new(0, 0, "Unfamiliar", MasteryBonus::default()),
        MasteryLevel::new(
            1,
            5,
            "Practiced",
            MasteryBonus {
                attack_bonus: 1,
                ..Default::default()
            },
        ),
        MasteryLevel::new(
            2,
            15,
            "Skilled",
            MasteryBonus {
                attack_bonus: 2,
                hp_bonus: 1,
                ..Default::default()
            },
        ),
        MasteryLevel::new(
            3,
            30,
            "Adept",
            MasteryBonus {
                attack_bonus: 3,
                hp_bonus: 2,
                ..Default::default()
            },
        ),
        MasteryLevel::new(
            4,
            50,
            "Expert",
            MasteryBonus {
                attack_bonus: 4,
                hp_bonus: 3,
                cost_reduction: 1,
            },
        ),
        MasteryLevel::new(
            5,
            100,
            "Virtuoso",
            MasteryBonus {
                attack_bonus: 6,
                hp_bonus: 4,
                cost_reduction: 1,
            },
        ),
    ]
}

/// The default account-rank ladder.
pub fn default_rank_tiers() -> Vec<RankTier> {
    vec![
        RankTier::new("Novice", 0),
        RankTier::new("Apprentice", 50),
        RankTier::new("Journeyman", 150),
        RankTier::new("Expert", 300),
        RankTier::new("Master", 500),
        RankTier::new("Grandmaster", 800),
    ]
}

/// The default pack products.
pub fn default_pack_specs() -> Vec<PackSpec> {
    vec![
        PackSpec::new("Standard Pack", 5, 100, None),
        PackSpec::new("Premium Pack", 5, 250, Some(Rarity::Rare)),
        PackSpec::new("Collector Pack", 5, 600, Some(Rarity::Epic)),
    ]
}
