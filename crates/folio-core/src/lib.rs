//! # folio-core: Pure Business Logic for the Folio Book Store
//!
//! This crate is the **heart** of Folio. It models a small e-commerce
//! domain for digital and printed books, entirely in memory with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Folio Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/storefront (CLI driver)                   │   │
//! │  │    builds books ──► fills a cart ──► order ──► invoice/payment  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ folio-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │  invoice  │  │   │
//! │  │   │   EBook   │  │   Money   │  │ Shopping  │  │  Invoice  │  │   │
//! │  │   │ PrintDet. │  │  (cents)  │  │   Cart    │  │ ID deriv. │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────────────────────┐  ┌───────────┐                │   │
//! │  │   │   types: Customer, Order, │  │   error   │                │   │
//! │  │   │          Payment          │  │ CoreError │                │   │
//! │  │   └───────────────────────────┘  └───────────┘                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • SINGLE-THREADED          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Catalog items ([`EBook`] with optional [`PrintDetails`])
//! - [`types`] - Inert value holders ([`Customer`], [`Order`], [`Payment`])
//! - [`cart`] - [`ShoppingCart`] with its cached derived total
//! - [`invoice`] - [`Invoice`] with its derived, cached identifier
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic given their inputs; no hidden state
//! 2. **Integer Money**: all monetary values are cents (i64), never floats
//! 3. **Permissive by design**: apart from removing an absent cart item,
//!    every operation is total; invalid-looking values (negative price,
//!    inconsistent invoice ID) are accepted silently and left to the caller
//! 4. **Snapshots over shared ownership**: invoices and payments copy the
//!    order/customer data they reference instead of borrowing it
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use folio_core::{Customer, EBook, Invoice, Money, Order, ShoppingCart};
//!
//! let mut cart = ShoppingCart::new("CART001");
//! cart.add_item(EBook::digital(
//!     "1984",
//!     "George Orwell",
//!     NaiveDate::from_ymd_opt(1949, 6, 8).unwrap(),
//!     "Dystopian",
//!     Money::from_cents(899),
//! ));
//!
//! let order = Order::new(
//!     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
//!     cart.total_price,
//!     "Processing",
//!     "ORDER001",
//! );
//!
//! let customer = Customer::new("Alice", "+123456789", true, "a@example.com", "456 Oak St");
//! let invoice = Invoice::issued_on(
//!     order,
//!     customer,
//!     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
//! );
//! assert_eq!(invoice.invoice_id, "INV-20240315-ORDER001");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod invoice;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use folio_core::Money` instead of
// `use folio_core::money::Money`

pub use cart::ShoppingCart;
pub use catalog::{EBook, PrintDetails};
pub use error::{CoreError, CoreResult};
pub use invoice::Invoice;
pub use money::Money;
pub use types::{Customer, Order, Payment};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix of every derived invoice identifier.
pub const INVOICE_ID_PREFIX: &str = "INV";

/// Date layout inside a derived invoice identifier: an 8-digit numeric
/// year-month-day with zero-padded month and day.
pub const INVOICE_DATE_FORMAT: &str = "%Y%m%d";
