//! # Shopping Cart
//!
//! The shopping cart: an ordered list of catalog items plus a cached total.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shopping Cart Operations                             │
//! │                                                                         │
//! │  Caller Action            Cart Method             State Change          │
//! │  ─────────────            ───────────             ────────────          │
//! │                                                                         │
//! │  Pick a book ────────────► add_item() ──────────► items.push + total   │
//! │                                                                         │
//! │  Put a book back ────────► remove_item() ───────► items.remove + total │
//! │                            (absent book = Err)                          │
//! │                                                                         │
//! │  Replace contents ───────► set_items() ─────────► items = new + total  │
//! │                                                                         │
//! │  Refresh total ──────────► calculate_total() ───► total recomputed     │
//! │                                                                         │
//! │  NOTE: every mutating method above recomputes the cached total.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Caching Decision
//! `total_price` is a cached derived value, recomputed eagerly on every
//! mutating method, because reads are expected to be frequent and cheap.
//! The cost is a staleness hazard: mutating an item's price in place after
//! insertion leaves the cached total unchanged until `calculate_total` is
//! called again. That behavior is kept exactly as-is and exercised by a
//! test below.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::EBook;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Shopping Cart
// =============================================================================

/// A collection of catalog items a customer intends to purchase.
///
/// ## Invariants
/// - `total_price` equals the sum of current item prices after every
///   `add_item` / `remove_item` / `set_items` / `calculate_total` call
/// - Items keep insertion order and need not be unique; removal takes the
///   FIRST structural match
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use folio_core::{EBook, Money, ShoppingCart};
///
/// let mut cart = ShoppingCart::new("CART001");
/// cart.add_item(EBook::digital(
///     "1984",
///     "George Orwell",
///     NaiveDate::from_ymd_opt(1949, 6, 8).unwrap(),
///     "Dystopian",
///     Money::from_cents(899),
/// ));
/// assert_eq!(cart.total_price.cents(), 899);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingCart {
    /// Caller-supplied cart identifier.
    pub cart_id: String,

    /// Items in insertion order. Duplicates are allowed.
    pub items: Vec<EBook>,

    /// Cached total of the current item prices. See module docs for the
    /// staleness hazard around in-place price edits.
    pub total_price: Money,

    /// When the cart was created. Defaults to the construction day.
    pub creation_date: NaiveDate,
}

impl ShoppingCart {
    /// Creates an empty cart dated today.
    pub fn new(cart_id: impl Into<String>) -> Self {
        ShoppingCart::created_on(cart_id, Utc::now().date_naive())
    }

    /// Creates an empty cart with an explicit creation date.
    pub fn created_on(cart_id: impl Into<String>, creation_date: NaiveDate) -> Self {
        ShoppingCart {
            cart_id: cart_id.into(),
            items: Vec::new(),
            total_price: Money::zero(),
            creation_date,
        }
    }

    /// Adds a book to the cart and recomputes the total. Never fails.
    pub fn add_item(&mut self, book: EBook) {
        self.items.push(book);
        self.calculate_total();
    }

    /// Removes the first book structurally equal to `book`, then recomputes
    /// the total.
    ///
    /// ## Errors
    /// Returns [`CoreError::ItemNotInCart`] when no equal book is present.
    /// The cart (items and cached total) is left untouched in that case.
    pub fn remove_item(&mut self, book: &EBook) -> CoreResult<()> {
        match self.items.iter().position(|item| item == book) {
            Some(index) => {
                self.items.remove(index);
                self.calculate_total();
                Ok(())
            }
            None => Err(CoreError::ItemNotInCart {
                cart_id: self.cart_id.clone(),
                title: book.title.clone(),
            }),
        }
    }

    /// Replaces the entire item list wholesale and recomputes the total.
    pub fn set_items(&mut self, items: Vec<EBook>) {
        self.items = items;
        self.calculate_total();
    }

    /// Recomputes the cached total from scratch as the sum of each item's
    /// current price. Idempotent; callers read the result via `total_price`.
    pub fn calculate_total(&mut self) {
        self.total_price = self.items.iter().map(|item| item.price).sum();
    }

    /// Number of items in the cart (duplicates counted).
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for ShoppingCart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShoppingCart(cart_id={}, items=[", self.cart_id)?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(
            f,
            "], total_price={}, creation_date={})",
            self.total_price, self.creation_date
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
