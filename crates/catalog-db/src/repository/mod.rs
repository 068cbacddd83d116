//! # Repository Module
//!
//! Database repository implementations for the product catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Caller (binary, test, future HTTP layer)                              │
//! │       │                                                                 │
//! │       │  db.products().find_by_category(Category::Tools)               │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create(&self, &mut product)                                       │
//! │  ├── update(&self, &product)                                           │
//! │  ├── delete(&self, &product)                                           │
//! │  ├── find(&self, id) / all(&self)                                      │
//! │  └── find_by_{name,availability,category,price}                        │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  SQL is isolated in one place; callers only see `Product`.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and lookups

pub mod product;
