//! # Invoice Module
//!
//! Invoices issued for customer orders.
//!
//! ## Invoice ID Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Invoice ID Derivation                              │
//! │                                                                         │
//! │  invoice_date: 2024-03-15        order.order_id: "ORDER001"            │
//! │        │                                │                               │
//! │        ▼                                ▼                               │
//! │   "INV" + "-" + "20240315" + "-" + "ORDER001"                          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   "INV-20240315-ORDER001"                                              │
//! │                                                                         │
//! │  Derived ONCE at construction and cached into `invoice_id`.             │
//! │  Later edits to the date or the order do NOT regenerate it.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Customer, Order};
use crate::{INVOICE_DATE_FORMAT, INVOICE_ID_PREFIX};

// =============================================================================
// Invoice
// =============================================================================

/// An invoice for an order, issued to a customer.
///
/// Holds its own snapshots of the order and customer (see the snapshot
/// notes in the `types` module), so the originals remain free to back a
/// payment at the same time.
///
/// ## Caching
/// `invoice_id` is derived once at construction and never recomputed.
/// Because it is a plain public field it can also be overwritten directly,
/// possibly with a value inconsistent with the stored date and order; that
/// permissiveness is intentional and the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Snapshot of the invoiced order.
    pub order: Order,

    /// Snapshot of the billed customer.
    pub customer: Customer,

    /// When the invoice was issued. Defaults to the construction day.
    pub invoice_date: NaiveDate,

    /// Cached identifier, `INV-YYYYMMDD-<order_id>` at construction time.
    pub invoice_id: String,
}

impl Invoice {
    /// Creates an invoice dated today.
    pub fn new(order: Order, customer: Customer) -> Self {
        Invoice::issued_on(order, customer, Utc::now().date_naive())
    }

    /// Creates an invoice with an explicit issue date (deterministic
    /// construction).
    pub fn issued_on(order: Order, customer: Customer, invoice_date: NaiveDate) -> Self {
        let invoice_id = Invoice::generate_invoice_id(invoice_date, &order.order_id);
        Invoice {
            order,
            customer,
            invoice_date,
            invoice_id,
        }
    }

    /// Derives an invoice identifier from an issue date and an order ID.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use folio_core::Invoice;
    ///
    /// let id = Invoice::generate_invoice_id(
    ///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
    ///     "ORDER001",
    /// );
    /// assert_eq!(id, "INV-20240315-ORDER001");
    /// ```
    pub fn generate_invoice_id(invoice_date: NaiveDate, order_id: &str) -> String {
        format!(
            "{}-{}-{}",
            INVOICE_ID_PREFIX,
            invoice_date.format(INVOICE_DATE_FORMAT),
            order_id
        )
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invoice(invoice_id={}, invoice_date={}, order={}, customer={})",
            self.invoice_id, self.invoice_date, self.order, self.customer
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EBook;
    use crate::cart::ShoppingCart;
    use crate::money::Money;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_order(order_id: &str, amount_cents: i64) -> Order {
        Order::new(
            day(2024, 3, 15),
            Money::from_cents(amount_cents),
            "Processing",
            order_id,
        )
    }

    fn test_customer() -> Customer {
        Customer::new(
            "Bob Brown",
            "+123456789",
            false,
            "bob.brown@example.com",
            "789 Pine St",
        )
    }

    #[test]
    fn test_invoice_id_for_fixed_date() {
        let invoice = Invoice::issued_on(
            test_order("ORDER001", 899),
            test_customer(),
            day(2024, 3, 15),
        );
        assert_eq!(invoice.invoice_id, "INV-20240315-ORDER001");
    }

    #[test]
    fn test_invoice_id_zero_pads_month_and_day() {
        let id = Invoice::generate_invoice_id(day(2024, 1, 5), "ORDER009");
        assert_eq!(id, "INV-20240105-ORDER009");
    }

    #[test]
    fn test_id_not_regenerated_after_mutation() {
        let mut invoice = Invoice::issued_on(
            test_order("ORDER001", 899),
            test_customer(),
            day(2024, 3, 15),
        );

        // Mutate both inputs of the derivation; the cached ID must not move.
        invoice.invoice_date = day(2025, 12, 31);
        invoice.order.order_id = "ORDER999".to_string();

        assert_eq!(invoice.invoice_id, "INV-20240315-ORDER001");
    }

    #[test]
    fn test_id_can_be_overwritten_directly() {
        let mut invoice = Invoice::issued_on(
            test_order("ORDER001", 899),
            test_customer(),
            day(2024, 3, 15),
        );

        // Unconstrained overwrite, even with an inconsistent value.
        invoice.invoice_id = "whatever".to_string();
        assert_eq!(invoice.invoice_id, "whatever");
    }

    #[test]
    fn test_invoice_snapshot_is_independent_of_original_order() {
        let mut order = test_order("ORDER001", 899);
        let invoice = Invoice::issued_on(order.clone(), test_customer(), day(2024, 3, 15));

        order.status = "Shipped".to_string();
        assert_eq!(invoice.order.status, "Processing");
    }

    #[test]
    fn test_display() {
        let invoice = Invoice::issued_on(
            test_order("ORDER001", 899),
            test_customer(),
            day(2024, 3, 15),
        );
        let rendered = invoice.to_string();
        assert!(rendered.starts_with("Invoice(invoice_id=INV-20240315-ORDER001"));
        assert!(rendered.contains("invoice_date=2024-03-15"));
        assert!(rendered.contains("order=Order("));
        assert!(rendered.contains("customer=Customer(name=Bob Brown"));
    }

    #[test]
    fn test_invoice_serializes_to_json() {
        let invoice = Invoice::issued_on(
            test_order("ORDER001", 899),
            test_customer(),
            day(2024, 3, 15),
        );

        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["invoice_id"], "INV-20240315-ORDER001");
        assert_eq!(json["invoice_date"], "2024-03-15");
        assert_eq!(json["order"]["order_id"], "ORDER001");
        assert_eq!(json["order"]["amount"], 899);
        assert_eq!(json["customer"]["name"], "Bob Brown");
    }

    /// Full checkout flow: cart total feeds the order, the order feeds both
    /// the invoice and a payment.
    #[test]
    fn test_cart_to_order_to_invoice_flow() {
        let mut cart = ShoppingCart::created_on("CART001", day(2024, 3, 15));
        cart.add_item(EBook::digital(
            "1984",
            "George Orwell",
            day(1949, 6, 8),
            "Dystopian",
            Money::from_cents(899),
        ));
        cart.add_item(EBook::printed(
            "To Kill a Mockingbird",
            "Harper Lee",
            day(1960, 7, 11),
            "Fiction",
            Money::from_cents(1299),
            "Hardcover",
            0.75,
            Money::from_cents(299),
        ));

        let order = Order::new(day(2024, 3, 15), cart.total_price, "Processing", "ORDER001");
        assert_eq!(order.amount.cents(), 2198);

        let invoice = Invoice::issued_on(order.clone(), test_customer(), day(2024, 3, 15));
        assert_eq!(invoice.invoice_id, "INV-20240315-ORDER001");

        let payment = crate::types::Payment::made_on(
            order,
            "Credit Card",
            invoice.order.amount,
            day(2024, 3, 15),
        );
        assert_eq!(payment.amount, invoice.order.amount);
    }
}
