//! Deterministic synthetic catalog.
//!
//! The generator is an explicit Park-Miller style LCG so that every process
//! start produces byte-identical data for the same seed.

use crate::models::{Item, round_cents};

pub const LCG_MULTIPLIER: u64 = 48_271;
pub const LCG_MODULUS: u64 = 2_147_483_647;
pub const DEFAULT_SEED: u64 = 42;

/// Number of items the server seeds when not configured otherwise.
pub const DEFAULT_SEED_SIZE: usize = 600;

const TAG_SETS: [[&str; 3]; 5] = [
    ["nature", "outdoor", "scenic"],
    ["city", "architecture", "buildings"],
    ["people", "portrait", "lifestyle"],
    ["food", "cuisine", "meal"],
    ["animals", "wildlife", "pet"],
];

/// Linear congruential generator yielding floats in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % LCG_MODULUS,
        }
    }

    /// Advances the state and returns it scaled into `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        // state < 2^31 and the multiplier < 2^16, so the product fits in u64
        self.state = self.state * LCG_MULTIPLIER % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Iterator for Lcg {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Generates `count` items with ids `"1"..="count"`, drawing one price per
/// item from `rng`.
pub fn generate(count: usize, rng: &mut Lcg) -> Vec<Item> {
    (1..=count)
        .map(|i| {
            let price = (rng.next_f64() * 9000.0).floor() / 100.0 + 10.0;
            let tags = TAG_SETS[i % TAG_SETS.len()];

            Item {
                id: i.to_string(),
                name: format!("Item {i}"),
                description: format!("This is a sample description for item {i}."),
                price: round_cents(price),
                image: format!("https://picsum.photos/seed/item-{i}/400/250"),
                image_alt: Some(format!("Sample photo for item {i}")),
                image_tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            }
        })
        .collect()
}
