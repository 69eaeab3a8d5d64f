//! # Packforge - Progression & Reward Economy for a Collectible Card Game
//!
//! Packforge is the economy and progression engine behind a card-collecting game:
//! it turns player actions (buying a pack, winning a battle, playing a card) into
//! randomized or deterministic state changes - new collection entries,
//! achievement-tier claims, mastery levels, and account rank.
//!
//! ## Features
//!
//! - **Weighted Rarity Rolls**: Five-tier drop distribution with an optional
//!   guaranteed floor and raw (non-renormalized) upgrade odds - the classic
//!   "pack guarantee" mechanic.
//! - **Collection Ledger**: Quantity-merging add/remove over a player's card
//!   collection with strict no-zero-entry bookkeeping.
//! - **Tiered Achievements**: Bronze/silver/gold thresholds with one-time,
//!   idempotent reward claims.
//! - **Card Mastery**: Per-card usage XP mapped onto a discrete level curve with
//!   replacing (non-stacking) stat bonuses.
//! - **Account Rank**: Claimed achievement tiers aggregated into points, rank,
//!   and progress toward the next rank.
//! - **Data-Driven Catalogs**: Cards, achievements, mastery levels, and rank
//!   tiers load from JSON seed files with validated built-in defaults.
//!
//! ## Quick Start
//!
//! ```rust
//! use packforge::economy::{catalog::Catalog, collection, packs, state};
//! use rand::SeedableRng;
//!
//! # fn main() -> Result<(), packforge::economy::EconomyError> {
//! let catalog = Catalog::builtin()?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut owned = Vec::new();
//!
//! let specs = state::default_pack_specs();
//! let spec = &specs[0];
//! let drawn = packs::open_pack(&catalog.cards, &mut rng, &mut owned, spec);
//! assert_eq!(drawn.len(), spec.cards as usize);
//! assert!(collection::total_cards(&owned) > 0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`economy`] - The core engine: rarity rolls, card picks, collection
//!   ledger, achievements, mastery, rank, and pack opening
//! - [`config`] - TOML configuration management and validation
//!
//! ## Architecture
//!
//! Every operation in [`economy`] is a pure computation over explicit inputs:
//! an immutable [`economy::catalog::Catalog`] plus caller-owned snapshots of
//! per-player state. The engine performs no I/O and retains nothing between
//! calls, so it is safe to drive from any number of concurrent request
//! handlers. Reading a player snapshot, computing, and persisting the result
//! is the caller's read-modify-write sequence and must be serialized per
//! player at the persistence boundary.

pub mod config;
pub mod economy;
