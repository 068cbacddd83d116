//! # catalog-core: Pure Domain Types for the Product Catalog
//!
//! This crate holds the product model as plain data with zero I/O
//! dependencies. Persistence lives in `catalog-db`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Catalog Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │  factory  │  │   │
//! │  │   │  Product  │  │   Money   │  │   rules   │  │  (fake)   │  │   │
//! │  │   │ Category  │  │ IntoMoney │  │  checks   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    catalog-db (Database Layer)                  │   │
//! │  │        SQLite pool, migrations, ProductRepository               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, ProductData)
//! - [`money`] - Money type with integer cents (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Attribute validation
//! - `factory` - Fake products for tests (feature `fake`)
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::{Category, Money, Product};
//!
//! let price: Money = "12.50".parse().unwrap();
//! let hat = Product::new("Fedora", "A red hat", price, true, Category::Cloths);
//!
//! assert!(hat.id.is_none());
//! assert_eq!(hat.to_string(), "<Product Fedora id=[None]>");
//! assert_eq!(hat.price, Money::from_cents(1250));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

#[cfg(feature = "fake")]
pub mod factory;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::{IntoMoney, Money};
pub use types::*;

#[cfg(feature = "fake")]
pub use factory::ProductFactory;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name (matches the `products.name` column).
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a product description.
pub const MAX_DESCRIPTION_LEN: usize = 250;
