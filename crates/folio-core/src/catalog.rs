//! # Catalog Module
//!
//! Catalog items for the store: e-books, plus the printed copies of them.
//!
//! ## Modeling Choice
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ONE FLAT RECORD, NOT AN INHERITANCE TREE                               │
//! │                                                                         │
//! │  A printed copy is a strict superset of an e-book: the same five base  │
//! │  fields plus three shipping fields. It diverges in NO behavior except  │
//! │  string rendering (base fields first, then the extension fields).      │
//! │                                                                         │
//! │  So: EBook { ..base fields.., print: Option<PrintDetails> }            │
//! │                                                                         │
//! │    print = None          → digital e-book                              │
//! │    print = Some(details) → printed copy                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every field is public and freely mutable. No setter validates anything:
//! a negative price or an empty title is accepted silently, and keeping the
//! data sensible is the caller's responsibility.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Print Details
// =============================================================================

/// The extension fields a printed copy carries on top of the base e-book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintDetails {
    /// Physical format ("Hardcover", "Paperback", ...). Free-form.
    pub print_format: String,

    /// Shipping weight in kilograms.
    pub shipping_weight_kg: f64,

    /// Shipping cost charged on top of the price.
    pub shipping_cost: Money,
}

impl PrintDetails {
    pub fn new(print_format: impl Into<String>, shipping_weight_kg: f64, shipping_cost: Money) -> Self {
        PrintDetails {
            print_format: print_format.into(),
            shipping_weight_kg,
            shipping_cost,
        }
    }
}

// =============================================================================
// EBook
// =============================================================================

/// A purchasable catalog item: an e-book, optionally with a printed copy.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use folio_core::{EBook, Money};
///
/// let book = EBook::digital(
///     "1984",
///     "George Orwell",
///     NaiveDate::from_ymd_opt(1949, 6, 8).unwrap(),
///     "Dystopian",
///     Money::from_cents(899),
/// );
/// assert!(book.is_digital());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EBook {
    pub title: String,
    pub author: String,
    pub publication_date: NaiveDate,
    pub genre: String,
    pub price: Money,

    /// `Some` for a printed copy, `None` for a purely digital one.
    pub print: Option<PrintDetails>,
}

impl EBook {
    /// Creates a digital e-book.
    pub fn digital(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_date: NaiveDate,
        genre: impl Into<String>,
        price: Money,
    ) -> Self {
        EBook {
            title: title.into(),
            author: author.into(),
            publication_date,
            genre: genre.into(),
            price,
            print: None,
        }
    }

    /// Creates a printed copy of an e-book.
    #[allow(clippy::too_many_arguments)]
    pub fn printed(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_date: NaiveDate,
        genre: impl Into<String>,
        price: Money,
        print_format: impl Into<String>,
        shipping_weight_kg: f64,
        shipping_cost: Money,
    ) -> Self {
        EBook {
            title: title.into(),
            author: author.into(),
            publication_date,
            genre: genre.into(),
            price,
            print: Some(PrintDetails::new(print_format, shipping_weight_kg, shipping_cost)),
        }
    }

    /// Whether this is a purely digital item.
    #[inline]
    pub fn is_digital(&self) -> bool {
        self.print.is_none()
    }

    /// Whether this is a printed copy.
    #[inline]
    pub fn is_printed(&self) -> bool {
        self.print.is_some()
    }
}

/// Rendering convention: `TypeName(field=value, ...)`.
///
/// A printed copy renders the base fields first, then appends its own
/// extension fields after them.
impl fmt::Display for EBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EBook(title={}, author={}, publication_date={}, genre={}, price={})",
            self.title, self.author, self.publication_date, self.genre, self.price
        )?;

        if let Some(ref print) = self.print {
            write!(
                f,
                ", PrintedEBook(print_format={}, shipping_weight={}, shipping_cost={})",
                print.print_format, print.shipping_weight_kg, print.shipping_cost
            )?;
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
