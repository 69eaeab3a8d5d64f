//! The reward-economy core: pure computations that turn player actions into
//! collection, achievement, mastery, and rank state changes.
//!
//! Every operation takes an immutable catalog reference plus caller-owned
//! snapshots of per-player state and performs no I/O. Serializing the
//! read-compute-persist cycle per player is the caller's job.

pub mod achievement;
pub mod catalog;
pub mod collection;
pub mod errors;
pub mod mastery;
pub mod packs;
pub mod rarity;
pub mod rank;
pub mod seed_loader;
pub mod state;
pub mod types;

pub use achievement::{
    can_claim, claim, claim_for_player, claimable, claimable_tiers, record_for,
};
pub use catalog::{AchievementCatalog, CardCatalog, Catalog, MasteryTable, RankTable};
pub use collection::{
    add_card, has_card, quantity_of, remove_card, total_cards, unique_cards,
};
pub use errors::{ClaimError, EconomyError};
pub use packs::{open_pack, PackSpec};
pub use rarity::{pick_card, roll_rarity};
pub use seed_loader::{
    load_achievements_from_json, load_cards_from_json, load_mastery_from_json,
    load_ranks_from_json, write_default_seeds,
};
pub use state::{
    default_mastery_levels, default_pack_specs, default_rank_tiers, seed_starter_achievements,
    seed_starter_cards,
};
pub use types::*;
