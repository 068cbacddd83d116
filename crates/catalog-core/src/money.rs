//! # Money Module
//!
//! Provides the `Money` type for handling product prices exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A price stored as 19.99 and queried as "19.99" may not compare        │
//! │  equal once either side has been through a float.                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "19.99" → 1999 cents → stored as INTEGER → reloaded as 1999 cents   │
//! │    Equality is plain integer equality.                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::money::{IntoMoney, Money};
//!
//! // Create from cents
//! let price = Money::from_cents(1999); // $19.99
//!
//! // Or parse text; both forms denote the same value
//! let parsed: Money = "19.99".parse().unwrap();
//! assert_eq!(price, parsed);
//!
//! // Anything that can become Money can be used as a price query
//! assert_eq!("19.99".into_money().unwrap(), price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Number of minor units (cents) in one major unit.
const CENTS_PER_UNIT: i64 = 100;

/// Number of fractional digits a price carries.
const SCALE: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Parsing accepts negative values; validation rejects
///   them for product prices
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **sqlx transparent**: Stored as a plain INTEGER column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// let price = Money::from_major_minor(12, 50); // $12.50
    /// assert_eq!(price.cents(), 1250);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * CENTS_PER_UNIT - minor)
        } else {
            Money(major * CENTS_PER_UNIT + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Renders the amount as a plain decimal with two fractional digits.
    ///
    /// This is the textual form used on the wire and accepted back by
    /// [`FromStr`], so `s.parse::<Money>()?.to_decimal_string()` is stable.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1999).to_decimal_string(), "19.99");
    /// assert_eq!(Money::from_cents(50).to_decimal_string(), "0.50");
    /// assert_eq!(Money::from_cents(-550).to_decimal_string(), "-5.50");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal price text into exact cents.
///
/// ## Accepted Forms
/// ```text
/// "19.99"    → 1999      "  19.99 "  → 1999   (whitespace stripped)
/// "12.5"     → 1250      "\"19.99\"" → 1999   (quotes stripped)
/// "7"        → 700       "$3.00"     → 300
/// ".5"       → 50        "19.990"    → 1999   (trailing zeros are exact)
/// "-5.50"    → -550
///
/// "19.999"   → error     (not representable in cents)
/// "abc", "", "1.2.3" → error
/// ```
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim_matches(|c: char| c.is_whitespace() || c == '"');

        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let text = text.strip_prefix('$').unwrap_or(text);

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(ValidationError::invalid_format(
                "price",
                format!("'{}' is not a decimal amount", s),
            ));
        }

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(ValidationError::invalid_format(
                "price",
                format!("'{}' is not a decimal amount", s),
            ));
        }

        // Digits past the cents position must all be zero
        let (cents_digits, excess) = fraction.split_at(fraction.len().min(SCALE));
        if excess.chars().any(|c| c != '0') {
            return Err(ValidationError::invalid_format(
                "price",
                format!("'{}' has more than {} decimal places", s, SCALE),
            ));
        }

        let too_large = || ValidationError::invalid_format("price", format!("'{}' is too large", s));

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };
        let minor: i64 = format!("{:0<width$}", cents_digits, width = SCALE)
            .parse()
            .map_err(|_| too_large())?;

        let cents = whole
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(too_large)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// IntoMoney
// =============================================================================

/// Conversion into [`Money`] for price arguments.
///
/// Lets price lookups accept either an exact `Money` or its textual form;
/// text is coerced to `Money` before any comparison is built.
///
/// ```rust
/// use catalog_core::money::{IntoMoney, Money};
///
/// let exact = Money::from_cents(1999);
/// assert_eq!(exact.into_money().unwrap(), exact);
/// assert_eq!("19.99".into_money().unwrap(), exact);
/// assert_eq!(String::from("19.99").into_money().unwrap(), exact);
/// ```
pub trait IntoMoney {
    fn into_money(self) -> Result<Money, ValidationError>;
}

impl IntoMoney for Money {
    fn into_money(self) -> Result<Money, ValidationError> {
        Ok(self)
    }
}

impl IntoMoney for &Money {
    fn into_money(self) -> Result<Money, ValidationError> {
        Ok(*self)
    }
}

impl IntoMoney for &str {
    fn into_money(self) -> Result<Money, ValidationError> {
        self.parse()
    }
}

impl IntoMoney for String {
    fn into_money(self) -> Result<Money, ValidationError> {
        self.parse()
    }
}

impl IntoMoney for &String {
    fn into_money(self) -> Result<Money, ValidationError> {
        self.parse()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with a currency sign, e.g. `$10.99`.
///
/// ## Note
/// For the wire form use [`Money::to_decimal_string`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
