//! # Configuration Management Module
//!
//! Centralized configuration for the packforge binary: type-safe TOML with
//! validation, sensible defaults, and a generator for fresh installs.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - Game identity and the purchasable pack products
//! - [`CatalogConfig`] - Where catalog seed files live
//! - [`LoggingConfig`] - Log level and optional log file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! name = "Packforge Arena"
//! starting_coins = 500
//! starting_dust = 0
//!
//! [[game.packs]]
//! name = "Standard Pack"
//! cards = 5
//! cost_coins = 100
//!
//! [[game.packs]]
//! name = "Premium Pack"
//! cards = 5
//! cost_coins = 250
//! guaranteed = "rare"
//!
//! [catalogs]
//! seed_dir = "data/seeds"
//!
//! [logging]
//! level = "info"
//! file = "packforge.log"
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::economy::packs::PackSpec;
use crate::economy::state;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    #[serde(default)]
    pub catalogs: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Game identity and economy knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub name: String,
    /// Coins a fresh profile starts with.
    pub starting_coins: u32,
    /// Dust a fresh profile starts with.
    #[serde(default)]
    pub starting_dust: u32,
    /// Purchasable pack products.
    #[serde(default = "state::default_pack_specs")]
    pub packs: Vec<PackSpec>,
}

/// Where catalog seed files live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub seed_dir: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_dir: "data/seeds".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some("packforge.log".to_string()),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.game.name.trim().is_empty() {
            return Err(anyhow!("game.name must not be empty"));
        }
        if self.game.packs.is_empty() {
            return Err(anyhow!("game.packs must define at least one pack"));
        }
        for pack in &self.game.packs {
            if pack.cards == 0 {
                return Err(anyhow!("pack {} must contain at least one card", pack.name));
            }
            if pack.cost_coins == 0 {
                return Err(anyhow!("pack {} must have a non-zero price", pack.name));
            }
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            other => return Err(anyhow!("unknown logging.level: {}", other)),
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            game: GameConfig {
                name: "Packforge Arena".to_string(),
                starting_coins: 500,
                starting_dust: 0,
                packs: state::default_pack_specs(),
            },
            catalogs: CatalogConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
