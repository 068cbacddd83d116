//! # Domain Types
//!
//! Core domain types of the product catalog.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │   ProductData   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID?)     │   │  Unknown (dflt) │   │  wire form      │       │
//! │  │  name           │   │  Cloths         │   │  price: "12.50" │       │
//! │  │  description    │   │  Food           │   │  category:      │       │
//! │  │  price (Money)  │   │  Housewares     │   │    "CLOTHS"     │       │
//! │  │  available      │   │  Automotive     │   └─────────────────┘       │
//! │  │  category       │   │  Tools          │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Product Lifecycle
//! ```text
//!   Product::new(..)          repo.create(&mut p)         repo.delete(&p)
//!  ──────────────────► Transient ─────────────────► Persisted ─────────────► Deleted
//!                      id = None                    id = Some(uuid)          row gone,
//!                                                   │      ▲                 handle stale
//!                                                   └──────┘
//!                                                 repo.update(&p)
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_description, validate_price, validate_product_name};

// =============================================================================
// Category
// =============================================================================

/// The fixed set of product categories.
///
/// Stored and serialized by upper-case name (`"CLOTHS"`). A product with no
/// category given is [`Category::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Unknown,
    Cloths,
    Food,
    Housewares,
    Automotive,
    Tools,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Unknown,
        Category::Cloths,
        Category::Food,
        Category::Housewares,
        Category::Automotive,
        Category::Tools,
    ];

    /// The stored name of this category.
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a category by its exact stored name.
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.name().to_string()).collect(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Build one with [`Product::new`]; it stays transient (`id == None`) until
/// the repository's `create` assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier (UUID v4), assigned on create.
    pub id: Option<String>,

    /// Display name. Lookups by name are exact and case-sensitive.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Price, exact to the cent.
    pub price: Money,

    /// Whether the product can currently be ordered.
    pub available: bool,

    pub category: Category,
}

impl Product {
    /// Creates a transient product (no id).
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        available: bool,
        category: Category,
    ) -> Self {
        Product {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        }
    }

    /// Whether the product has been assigned an id by the store.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks every attribute against the catalog's rules.
    ///
    /// Called by the repository before any write.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_product_name(&self.name)?;
        validate_description(&self.description)?;
        validate_price(self.price)?;
        Ok(())
    }

    /// Converts the product to its wire form.
    pub fn to_data(&self) -> ProductData {
        ProductData {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.to_decimal_string(),
            available: self.available,
            category: self.category,
        }
    }

    /// Builds a transient product from its wire form.
    ///
    /// The id in `data` is ignored: ids only come from the store. The price
    /// text is parsed exactly and the attributes are validated.
    pub fn from_data(data: ProductData) -> Result<Self, ValidationError> {
        let product = Product {
            id: None,
            name: data.name,
            description: data.description,
            price: data.price.parse()?,
            available: data.available,
            category: data.category,
        };
        product.validate()?;
        Ok(product)
    }

    /// Builds a transient product from a JSON document.
    ///
    /// ## Errors
    /// - Missing attribute → `InvalidFormat { field: "product", .. }`
    /// - Wrong type (e.g. `"available": "yes"`) → `InvalidFormat`
    /// - Unknown category name → `InvalidFormat`
    /// - Bad price text or attribute values → see [`Product::from_data`]
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::{Category, Product};
    ///
    /// let json = serde_json::json!({
    ///     "name": "Hammer",
    ///     "description": "Claw hammer",
    ///     "price": "24.99",
    ///     "available": true,
    ///     "category": "TOOLS"
    /// });
    /// let product = Product::from_json(&json).unwrap();
    /// assert_eq!(product.category, Category::Tools);
    /// assert_eq!(product.price.cents(), 2499);
    /// ```
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let data = ProductData::deserialize(value)
            .map_err(|e| ValidationError::invalid_format("product", e.to_string()))?;
        Product::from_data(data)
    }
}

/// Debug-friendly representation: `<Product Fedora id=[None]>`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

// =============================================================================
// Wire Form
// =============================================================================

/// Serialized form of a [`Product`].
///
/// ```json
/// {
///   "id": "5b0d…",
///   "name": "Fedora",
///   "description": "A red hat",
///   "price": "12.50",
///   "available": true,
///   "category": "CLOTHS"
/// }
/// ```
///
/// `price` is decimal text so no float ever touches it; a JSON number is
/// also accepted on input. A missing `category` means `UNKNOWN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "price_text")]
    pub price: String,
    pub available: bool,
    #[serde(default)]
    pub category: Category,
}

/// Accepts a price given as a JSON string or a JSON number.
fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "invalid type for price: {}",
            other
        ))),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fedora() -> Product {
        Product::new(
            "Fedora",
            "A red hat",
            Money::from_cents(1250),
            true,
            Category::Cloths,
        )
    }

    #[test]
    fn test_new_product_is_transient() {
        let product = fedora();
        assert_eq!(product.id, None);
        assert!(!product.is_persisted());
        assert_eq!(product.name, "Fedora");
        assert_eq!(product.description, "A red hat");
        assert!(product.available);
        assert_eq!(product.price, "12.50".parse().unwrap());
        assert_eq!(product.category, Category::Cloths);
    }

    #[test]
    fn test_product_display() {
        let mut product = fedora();
        assert_eq!(product.to_string(), "<Product Fedora id=[None]>");

        product.id = Some("abc".to_string());
        assert_eq!(product.to_string(), "<Product Fedora id=[abc]>");
    }

    #[test]
    fn test_category_default() {
        assert_eq!(Category::default(), Category::Unknown);
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
        assert!("cloths".parse::<Category>().is_err());
        assert!("SHOES".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_uses_names() {
        assert_eq!(serde_json::to_value(Category::Housewares).unwrap(), json!("HOUSEWARES"));
    }

    #[test]
    fn test_to_data_shape() {
        let value = serde_json::to_value(fedora().to_data()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": null,
                "name": "Fedora",
                "description": "A red hat",
                "price": "12.50",
                "available": true,
                "category": "CLOTHS"
            })
        );
    }

    #[test]
    fn test_from_data_ignores_id() {
        let mut data = fedora().to_data();
        data.id = Some("spoofed".to_string());

        let product = Product::from_data(data).unwrap();
        assert_eq!(product.id, None);
        assert_eq!(product, fedora());
    }

    #[test]
    fn test_from_json_accepts_numeric_price() {
        let product = Product::from_json(&json!({
            "name": "Apple",
            "description": "Crisp",
            "price": 0.5,
            "available": false,
            "category": "FOOD"
        }))
        .unwrap();
        assert_eq!(product.price.cents(), 50);
    }

    #[test]
    fn test_from_json_missing_category_is_unknown() {
        let product = Product::from_json(&json!({
            "name": "Towels",
            "description": "Bath towels",
            "price": "9.99",
            "available": true
        }))
        .unwrap();
        assert_eq!(product.category, Category::Unknown);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        // missing name
        let err = Product::from_json(&json!({
            "description": "x", "price": "1.00", "available": true
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));

        // non-boolean availability
        assert!(Product::from_json(&json!({
            "name": "Hat", "description": "x", "price": "1.00", "available": "yes"
        }))
        .is_err());

        // unknown category
        assert!(Product::from_json(&json!({
            "name": "Hat", "description": "x", "price": "1.00", "available": true,
            "category": "SHOES"
        }))
        .is_err());

        // bad price
        assert!(Product::from_json(&json!({
            "name": "Hat", "description": "x", "price": "cheap", "available": true
        }))
        .is_err());

        // not an object at all
        assert!(Product::from_json(&json!("Hat")).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut product = fedora();
        product.name = "   ".to_string();
        assert_eq!(product.validate(), Err(ValidationError::required("name")));
    }
}
