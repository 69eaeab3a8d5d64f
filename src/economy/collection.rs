//! Collection ledger: quantity-merging add/remove over a player's owned cards.
//!
//! The entry list is a caller-owned snapshot; every function here mutates it
//! in place or reads it, nothing is retained between calls. The ledger keeps
//! one entry per card id and never holds a zero-quantity entry.

use super::types::CollectionEntry;

/// Add copies of a card to the collection.
///
/// Increments the existing entry or appends a new one; the order of other
/// entries is preserved. Adding zero copies is a no-op.
pub fn add_card(entries: &mut Vec<CollectionEntry>, card_id: &str, quantity: u32) {
    if quantity == 0 {
        return;
    }
    if let Some(entry) = entries.iter_mut().find(|e| e.card_id == card_id) {
        entry.quantity += quantity;
    } else {
        entries.push(CollectionEntry::new(card_id, quantity));
    }
}

/// Withdraw copies of a card from the collection.
///
/// Returns `false` and leaves the entries untouched when the card is absent
/// or held in insufficient quantity. On success the quantity is decremented;
/// an entry that reaches exactly zero is deleted, not kept.
pub fn remove_card(entries: &mut Vec<CollectionEntry>, card_id: &str, quantity: u32) -> bool {
    let Some(index) = entries.iter().position(|e| e.card_id == card_id) else {
        return false;
    };
    if entries[index].quantity < quantity {
        return false;
    }
    entries[index].quantity -= quantity;
    if entries[index].quantity == 0 {
        entries.remove(index);
    }
    true
}

/// Copies of one card currently held (0 when absent).
pub fn quantity_of(entries: &[CollectionEntry], card_id: &str) -> u32 {
    entries
        .iter()
        .find(|e| e.card_id == card_id)
        .map(|e| e.quantity)
        .unwrap_or(0)
}

/// True when at least `quantity` copies of the card are held.
pub fn has_card(entries: &[CollectionEntry], card_id: &str, quantity: u32) -> bool {
    quantity_of(entries, card_id) >= quantity
}

/// Number of distinct cards held.
pub fn unique_cards(entries: &[CollectionEntry]) -> usize {
    entries.len()
}

/// Total copies held across all cards.
pub fn total_cards(entries: &[CollectionEntry]) -> u32 {
    entries.iter().map(|e| e.quantity).sum()
}
