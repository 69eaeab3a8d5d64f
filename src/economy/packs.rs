//! Pack opening: the purchase path composed end to end.
//!
//! A pack is a fixed number of rarity rolls, each resolved to a concrete card
//! and merged into the buyer's collection. The final slot carries the pack's
//! guaranteed floor, so every pack of a "rare or better" product delivers at
//! least one rare. Coin deduction stays with the caller; a [`PackSpec`] only
//! describes the product.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::CardCatalog;
use super::collection;
use super::rarity::{pick_card, roll_rarity};
use super::types::{CardDef, CollectionEntry, Rarity};

/// A purchasable pack product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackSpec {
    pub name: String,
    /// Cards per pack.
    pub cards: u8,
    /// Price in coins; deducted by the caller before opening.
    pub cost_coins: u32,
    /// Guaranteed minimum rarity applied to the final slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guaranteed: Option<Rarity>,
}

impl PackSpec {
    pub fn new(name: &str, cards: u8, cost_coins: u32, guaranteed: Option<Rarity>) -> Self {
        Self {
            name: name.to_string(),
            cards,
            cost_coins,
            guaranteed,
        }
    }
}

/// Open one pack: roll a rarity per slot, pick a card of that rarity, and
/// merge it into the collection. Returns the drawn cards in slot order.
pub fn open_pack<'a>(
    catalog: &'a CardCatalog,
    rng: &mut impl Rng,
    entries: &mut Vec<CollectionEntry>,
    spec: &PackSpec,
) -> Vec<&'a CardDef> {
    let mut drawn = Vec::with_capacity(spec.cards as usize);
    for slot in 0..spec.cards {
        let floor = if slot + 1 == spec.cards {
            spec.guaranteed
        } else {
            None
        };
        let rarity = roll_rarity(rng, floor);
        let card = pick_card(catalog, rng, rarity);
        collection::add_card(entries, &card.id, 1);
        drawn.push(card);
    }
    debug!(
        "Opened {}: {}",
        spec.name,
        drawn
            .iter()
            .map(|c| format!("{} ({})", c.name, c.rarity))
            .collect::<Vec<_>>()
            .join(", ")
    );
    drawn
}
