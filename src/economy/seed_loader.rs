//! Seed data loaders for data-driven catalog content.
//!
//! Each loader reads one JSON file under `data/seeds/`, letting admins
//! customize the card pool, achievement ladder, mastery curve, and rank table
//! without recompiling. The loaders only parse; structural validation happens
//! when the parts are assembled into a
//! [`Catalog`](crate::economy::catalog::Catalog).

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::errors::EconomyError;
use super::types::{Achievement, CardDef, MasteryLevel, RankTier};

fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>, EconomyError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        EconomyError::Catalog(format!("failed to parse {}: {}", path.display(), e))
    })
}

/// Load cards from `data/seeds/cards.json`.
pub fn load_cards_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<CardDef>, EconomyError> {
    load_json(path)
}

/// Load achievements from `data/seeds/achievements.json`.
pub fn load_achievements_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<Achievement>, EconomyError> {
    load_json(path)
}

/// Load the mastery curve from `data/seeds/mastery.json`.
pub fn load_mastery_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<MasteryLevel>, EconomyError> {
    load_json(path)
}

/// Load the rank ladder from `data/seeds/ranks.json`.
pub fn load_ranks_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<RankTier>, EconomyError> {
    load_json(path)
}

/// Serialize the built-in starter content into `dir` so a fresh install has
/// editable seed files. Existing files are left alone.
pub fn write_default_seeds<P: AsRef<Path>>(dir: P) -> Result<(), EconomyError> {
    use super::state;

    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    write_if_absent(&dir.join("cards.json"), &state::seed_starter_cards())?;
    write_if_absent(
        &dir.join("achievements.json"),
        &state::seed_starter_achievements(),
    )?;
    write_if_absent(&dir.join("mastery.json"), &state::default_mastery_levels())?;
    write_if_absent(&dir.join("ranks.json"), &state::default_rank_tiers())?;
    Ok(())
}

fn write_if_absent<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), EconomyError> {
    if path.exists() {
        return Ok(());
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| EconomyError::Catalog(format!("failed to serialize seed data: {}", e)))?;
    fs::write(path, json)?;
    Ok(())
}
