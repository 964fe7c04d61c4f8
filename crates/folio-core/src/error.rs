//! # Error Types
//!
//! Domain-specific error types for folio-core.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError::ItemNotInCart  - removing a book the cart does not hold    │
//! │                                                                         │
//! │  That is the whole taxonomy. Every other operation in this domain is   │
//! │  a total function over its inputs: setters accept any value (including │
//! │  a negative price or an empty title) and constructors cannot fail.     │
//! │  That permissiveness is a deliberate design choice, not an oversight.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (cart ID, book title)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The book asked to be removed is not in the cart.
    ///
    /// ## When This Occurs
    /// - `ShoppingCart::remove_item` finds no structurally equal book
    ///
    /// ## Chosen Policy
    /// Removal of an absent item fails loudly with this recoverable error
    /// and leaves the cart (items and cached total) completely untouched.
    /// It is never a silent no-op.
    #[error("Book '{title}' is not in cart {cart_id}")]
    ItemNotInCart { cart_id: String, title: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
