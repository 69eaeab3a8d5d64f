//! Weighted rarity rolls and card picks.
//!
//! The roll is the "pack guarantee" mechanic: with a floor rarity set, the
//! result is always at least as rare as the floor, and the chance of landing
//! on a rarer tier is that tier's RAW base probability - the scanned subset is
//! deliberately not renormalized, so the leftover probability mass collapses
//! onto the floor itself.

use rand::Rng;

use super::catalog::CardCatalog;
use super::types::{CardDef, Rarity};

/// Roll a reward rarity, optionally guaranteeing a floor.
///
/// Draws `r` uniformly from `[0, 1)` and scans tiers rarest-first through the
/// floor (default: common, i.e. the full distribution), accumulating base
/// probabilities; the first tier whose running total exceeds `r` wins. When
/// the scanned mass never exceeds `r` - which happens whenever the floor is
/// rarer than common, since the scanned probabilities sum to less than 1 -
/// the floor itself is returned.
pub fn roll_rarity(rng: &mut impl Rng, floor: Option<Rarity>) -> Rarity {
    let floor = floor.unwrap_or(Rarity::Common);
    let r: f64 = rng.gen();

    let mut accumulated = 0.0;
    for &tier in Rarity::ALL.iter().take(floor.index() + 1) {
        accumulated += tier.base_probability();
        if r < accumulated {
            return tier;
        }
    }
    floor
}

/// Pick a card of the given rarity uniformly from the catalog.
///
/// An empty pool falls back to a uniform pick among common cards; catalog
/// validation guarantees that pool is never empty.
pub fn pick_card<'a>(catalog: &'a CardCatalog, rng: &mut impl Rng, rarity: Rarity) -> &'a CardDef {
    let mut pool = catalog.of_rarity(rarity);
    if pool.is_empty() {
        pool = catalog.of_rarity(Rarity::Common);
    }
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::catalog::CardCatalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_catalog() -> CardCatalog {
        CardCatalog::new(vec![
            CardDef::new("spark", "Spark", Rarity::Common),
            CardDef::new("pebble", "Pebble Golem", Rarity::Common),
            CardDef::new("wisp", "Wisp", Rarity::Uncommon),
            CardDef::new("drake", "Drake", Rarity::Rare),
            CardDef::new("titan", "Titan", Rarity::Epic),
        ])
        .unwrap()
    }

    #[test]
    fn roll_never_breaks_the_floor() {
        let mut rng = StdRng::seed_from_u64(42);
        for &floor in &Rarity::ALL {
            for _ in 0..20_000 {
                let rolled = roll_rarity(&mut rng, Some(floor));
                assert!(
                    rolled.at_least(floor),
                    "rolled {} below floor {}",
                    rolled,
                    floor
                );
            }
        }
    }

    #[test]
    fn unfloored_roll_tracks_base_distribution() {
        let mut rng = StdRng::seed_from_u64(7);
        let samples = 200_000usize;
        let mut counts = [0usize; 5];
        for _ in 0..samples {
            counts[roll_rarity(&mut rng, None).index()] += 1;
        }
        for &tier in &Rarity::ALL {
            let observed = counts[tier.index()] as f64 / samples as f64;
            let expected = tier.base_probability();
            assert!(
                (observed - expected).abs() < 0.01,
                "{}: observed {:.4}, expected {:.4}",
                tier,
                observed,
                expected
            );
        }
    }

    #[test]
    fn epic_floor_keeps_raw_upgrade_odds() {
        let mut rng = StdRng::seed_from_u64(99);
        let samples = 200_000usize;
        let mut legendary = 0usize;
        let mut epic = 0usize;
        for _ in 0..samples {
            match roll_rarity(&mut rng, Some(Rarity::Epic)) {
                Rarity::Legendary => legendary += 1,
                Rarity::Epic => epic += 1,
                other => panic!("epic floor produced {}", other),
            }
        }
        let legendary_rate = legendary as f64 / samples as f64;
        let epic_rate = epic as f64 / samples as f64;
        // Legendary stays at its raw 1%; the other 99% collapses onto the floor
        // (4% won outright plus the 95% leftover mass).
        assert!((legendary_rate - 0.01).abs() < 0.005);
        assert!((epic_rate - 0.99).abs() < 0.005);
    }

    #[test]
    fn pick_respects_rarity() {
        let catalog = test_catalog();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let card = pick_card(&catalog, &mut rng, Rarity::Common);
            assert_eq!(card.rarity, Rarity::Common);
        }
    }

    #[test]
    fn pick_falls_back_to_common_for_empty_pool() {
        let catalog = test_catalog();
        let mut rng = StdRng::seed_from_u64(4);
        // The test catalog holds no legendary cards.
        for _ in 0..200 {
            let card = pick_card(&catalog, &mut rng, Rarity::Legendary);
            assert_eq!(card.rarity, Rarity::Common);
        }
    }

    #[test]
    fn pick_is_roughly_uniform_within_a_pool() {
        let catalog = test_catalog();
        let mut rng = StdRng::seed_from_u64(5);
        let samples = 50_000usize;
        let mut spark = 0usize;
        for _ in 0..samples {
            if pick_card(&catalog, &mut rng, Rarity::Common).id == "spark" {
                spark += 1;
            }
        }
        let rate = spark as f64 / samples as f64;
        assert!((rate - 0.5).abs() < 0.02, "observed {:.4}", rate);
    }
}
