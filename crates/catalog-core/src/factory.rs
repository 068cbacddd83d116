//! # Product Factory
//!
//! Fake products for tests and the `seed` binary (feature `fake`).
//!
//! ## Generated Attributes
//! ```text
//! name         one of: Hat, Pants, Shirt, Apple, Banana, Pots, Towels,
//!                      Ford, Chevy, Hammer, Wrench
//! description  six-word sentence, e.g. "Sturdy blue everyday useful
//!              classic design."
//! price        $0.50 - $2000.00, exact cents
//! available    true / false
//! category     any Category
//! id           None (the store assigns ids)
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::ProductFactory;
//!
//! let mut factory = ProductFactory::seeded(42);
//! let products = factory.build_batch(5);
//! assert_eq!(products.len(), 5);
//! assert!(products.iter().all(|p| p.id.is_none()));
//! ```

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::money::Money;
use crate::types::{Category, Product};

/// Names the factory picks from.
pub const PRODUCT_NAMES: &[&str] = &[
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];

/// Lowest generated price: $0.50
pub const MIN_PRICE: Money = Money::from_cents(50);

/// Highest generated price: $2000.00
pub const MAX_PRICE: Money = Money::from_cents(200_000);

/// Words used to build fake descriptions.
const WORDS: &[&str] = &[
    "sturdy", "blue", "everyday", "useful", "classic", "design", "fresh", "organic", "durable",
    "compact", "premium", "lightweight", "family", "size", "handmade", "cotton", "steel",
    "reliable", "soft", "bright", "value", "pack", "kitchen", "garage", "outdoor", "season",
];

/// Number of words in a fake description.
const DESCRIPTION_WORDS: usize = 6;

/// Builds transient products with fuzzy attributes.
#[derive(Debug)]
pub struct ProductFactory<R = ThreadRng> {
    rng: R,
}

impl ProductFactory<ThreadRng> {
    /// Creates a factory backed by the thread-local RNG.
    pub fn new() -> Self {
        ProductFactory {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ProductFactory<ThreadRng> {
    fn default() -> Self {
        ProductFactory::new()
    }
}

impl ProductFactory<StdRng> {
    /// Creates a reproducible factory: the same seed yields the same products.
    pub fn seeded(seed: u64) -> Self {
        ProductFactory {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> ProductFactory<R> {
    /// Builds one transient product.
    pub fn build(&mut self) -> Product {
        let name = PRODUCT_NAMES.choose(&mut self.rng).copied().unwrap_or("Hat");
        let description = self.sentence();
        let price = Money::from_cents(self.rng.gen_range(MIN_PRICE.cents()..=MAX_PRICE.cents()));
        let available = self.rng.gen_bool(0.5);
        let category = Category::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();

        Product::new(name, description, price, available, category)
    }

    /// Builds `count` transient products.
    pub fn build_batch(&mut self, count: usize) -> Vec<Product> {
        (0..count).map(|_| self.build()).collect()
    }

    fn sentence(&mut self) -> String {
        let words: Vec<&str> = (0..DESCRIPTION_WORDS)
            .filter_map(|_| WORDS.choose(&mut self.rng).copied())
            .collect();

        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
