//! # Domain Types
//!
//! Core domain types used throughout Folio.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │      Order      │   │    Payment      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  order_id       │   │  order (copy)   │       │
//! │  │  contact        │   │  order_date     │   │  payment_method │       │
//! │  │  loyalty_member │   │  amount         │   │  amount         │       │
//! │  │  email, address │   │  status (text)  │   │  payment_date   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These are pure value holders: public fields, no validation, no failure
//! modes. An `Order`'s amount is caller-supplied and is never cross-checked
//! against any cart; its status is a free-form string with no state machine.
//!
//! ## Snapshot Pattern
//! `Payment` (like `Invoice` in the `invoice` module) stores its own copy of
//! the `Order` rather than borrowing it, so the same order value can back an
//! invoice and a payment simultaneously with no ownership tangle. Mutating
//! the original order afterwards does not ripple into the snapshot.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A customer of the store: personal details plus loyalty membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub contact: String,
    pub loyalty_member: bool,
    pub email: String,
    pub address: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        loyalty_member: bool,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Customer {
            name: name.into(),
            contact: contact.into(),
            loyalty_member,
            email: email.into(),
            address: address.into(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer(name={}, contact={}, loyalty_member={}, email={}, address={})",
            self.name, self.contact, self.loyalty_member, self.email, self.address
        )
    }
}

// =============================================================================
// Order
// =============================================================================

/// A finalized purchase: order date, total amount, and a free-form status.
///
/// The amount is whatever the caller supplies (typically a cart's total at
/// checkout time); nothing re-derives or verifies it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_date: NaiveDate,
    pub amount: Money,
    pub status: String,
    pub order_id: String,
}

impl Order {
    pub fn new(
        order_date: NaiveDate,
        amount: Money,
        status: impl Into<String>,
        order_id: impl Into<String>,
    ) -> Self {
        Order {
            order_date,
            amount,
            status: status.into(),
            order_id: order_id.into(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order(order_date={}, amount={}, status={}, order_id={})",
            self.order_date, self.amount, self.status, self.order_id
        )
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A payment towards an order.
///
/// The amount is NOT validated against `order.amount`, and there is no
/// pending/settled/failed state machine; a payment is just a record of what
/// was paid, how, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Snapshot of the order being paid (see module docs).
    pub order: Order,

    /// How the payment was made ("Credit Card", "PayPal", ...). Free-form.
    pub payment_method: String,

    /// Amount paid. May legitimately differ from `order.amount`.
    pub amount: Money,

    /// When the payment was made. Defaults to the construction day.
    pub payment_date: NaiveDate,
}

impl Payment {
    /// Creates a payment dated today.
    pub fn new(order: Order, payment_method: impl Into<String>, amount: Money) -> Self {
        Payment::made_on(order, payment_method, amount, Utc::now().date_naive())
    }

    /// Creates a payment with an explicit date (deterministic construction).
    pub fn made_on(
        order: Order,
        payment_method: impl Into<String>,
        amount: Money,
        payment_date: NaiveDate,
    ) -> Self {
        Payment {
            order,
            payment_method: payment_method.into(),
            amount,
            payment_date,
        }
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment(order={}, payment_method={}, amount={}, payment_date={})",
            self.order, self.payment_method, self.amount, self.payment_date
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_customer_display() {
        let customer = Customer::new(
            "Alice Smith",
            "+123456789",
            true,
            "alice.smith@example.com",
            "456 Oak St",
        );
        assert_eq!(
            customer.to_string(),
            "Customer(name=Alice Smith, contact=+123456789, loyalty_member=true, \
             email=alice.smith@example.com, address=456 Oak St)"
        );
    }

    #[test]
    fn test_order_display() {
        let order = Order::new(
            day(2024, 3, 15),
            Money::from_cents(899),
            "Processing",
            "ORDER001",
        );
        assert_eq!(
            order.to_string(),
            "Order(order_date=2024-03-15, amount=$8.99, status=Processing, order_id=ORDER001)"
        );
    }

    #[test]
    fn test_order_status_is_free_form() {
        let mut order = Order::new(
            day(2024, 3, 15),
            Money::from_cents(899),
            "Processing",
            "ORDER001",
        );

        // No enumerated state machine; any string goes.
        order.status = "totally made up status".to_string();
        assert_eq!(order.status, "totally made up status");
    }

    #[test]
    fn test_payment_amount_not_checked_against_order() {
        let order = Order::new(
            day(2024, 3, 15),
            Money::from_cents(899),
            "Processing",
            "ORDER002",
        );

        // Paying a different amount than the order's is accepted silently.
        let payment = Payment::made_on(
            order.clone(),
            "Credit Card",
            Money::from_cents(500),
            day(2024, 3, 16),
        );
        assert_eq!(payment.amount.cents(), 500);
        assert_eq!(payment.order.amount.cents(), 899);
    }

    #[test]
    fn test_payment_snapshot_is_independent_of_original() {
        let mut order = Order::new(
            day(2024, 3, 15),
            Money::from_cents(899),
            "Processing",
            "ORDER002",
        );
        let payment = Payment::made_on(
            order.clone(),
            "Credit Card",
            Money::from_cents(899),
            day(2024, 3, 16),
        );

        order.status = "Shipped".to_string();
        assert_eq!(payment.order.status, "Processing");
    }

    #[test]
    fn test_payment_display() {
        let order = Order::new(
            day(2024, 3, 15),
            Money::from_cents(899),
            "Processing",
            "ORDER002",
        );
        let payment = Payment::made_on(
            order,
            "Credit Card",
            Money::from_cents(899),
            day(2024, 3, 16),
        );
        assert_eq!(
            payment.to_string(),
            "Payment(order=Order(order_date=2024-03-15, amount=$8.99, status=Processing, \
             order_id=ORDER002), payment_method=Credit Card, amount=$8.99, \
             payment_date=2024-03-16)"
        );
    }
}
