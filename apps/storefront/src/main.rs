//! # Folio Storefront Demo Driver
//!
//! Walks the whole domain end to end and prints what happens.
//!
//! ## Usage
//! ```bash
//! # Run all scenarios
//! cargo run -p folio-storefront
//!
//! # Turn up log verbosity
//! RUST_LOG=debug cargo run -p folio-storefront
//! ```
//!
//! ## Scenarios
//! 1. Catalog: create e-books, modify one in place
//! 2. Customers: create a customer record
//! 3. Cart: add digital + printed items, remove one, watch the total
//! 4. Invoice: cart total ──► order ──► invoice with derived ID
//! 5. Payment: pay an invoiced order
//!
//! The driver is an external collaborator of folio-core: it only goes
//! through the public API and never reaches into core internals.

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use folio_core::{Customer, EBook, Invoice, Money, Order, Payment, ShoppingCart};

fn pub_date(y: i32, m: u32, d: u32) -> NaiveDate {
    // All demo publication dates are valid; the expect is confined to the demo.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

/// Scenario 1: create and modify catalog items.
fn demo_catalog() {
    info!("--- Catalog: add and modify e-books ---");

    let mut ebook1 = EBook::digital(
        "1984",
        "George Orwell",
        pub_date(1949, 6, 8),
        "Dystopian",
        Money::from_cents(899),
    );
    let ebook2 = EBook::digital(
        "To Kill a Mockingbird",
        "Harper Lee",
        pub_date(1960, 7, 11),
        "Fiction",
        Money::from_cents(799),
    );

    info!(book = %ebook1, "added e-book");
    info!(book = %ebook2, "added e-book");

    // In-place price change: fields are freely mutable, nothing validates.
    ebook1.price = Money::from_cents(999);
    info!(book = %ebook1, "modified e-book price");
}

/// Scenario 2: create a customer.
fn demo_customer() {
    info!("--- Customers ---");

    let customer = Customer::new(
        "Alice Smith",
        "+123456789",
        true,
        "alice.smith@example.com",
        "456 Oak St",
    );
    info!(customer = %customer, "added customer");
}

/// Scenario 3: cart operations and the derived total.
fn demo_cart() {
    info!("--- Shopping cart operations ---");

    let ebook = EBook::digital(
        "1984",
        "George Orwell",
        pub_date(1949, 6, 8),
        "Dystopian",
        Money::from_cents(899),
    );
    let printed = EBook::printed(
        "To Kill a Mockingbird",
        "Harper Lee",
        pub_date(1960, 7, 11),
        "Fiction",
        Money::from_cents(1299),
        "Hardcover",
        0.75,
        Money::from_cents(299),
    );

    let mut cart = ShoppingCart::new(format!("CART-{}", Uuid::new_v4()));
    cart.add_item(ebook.clone());
    cart.add_item(printed);
    info!(cart_id = %cart.cart_id, total = %cart.total_price, "cart filled");

    match cart.remove_item(&ebook) {
        Ok(()) => info!(total = %cart.total_price, "removed an item"),
        Err(err) => info!(%err, "removal failed"),
    }

    // Removing it twice is the domain's one error condition.
    if let Err(err) = cart.remove_item(&ebook) {
        info!(%err, "second removal rejected, cart left untouched");
    }
}

/// Scenario 4: cart total feeds an order, the order feeds an invoice.
fn demo_invoice() -> Invoice {
    info!("--- Invoice generation ---");

    let mut cart = ShoppingCart::new("CART001");
    cart.add_item(EBook::digital(
        "1984",
        "George Orwell",
        pub_date(1949, 6, 8),
        "Dystopian",
        Money::from_cents(899),
    ));

    let customer = Customer::new(
        "Bob Brown",
        "+123456789",
        false,
        "bob.brown@example.com",
        "789 Pine St",
    );

    let order = Order::new(
        Utc::now().date_naive(),
        cart.total_price,
        "Processing",
        "ORDER001",
    );

    let invoice = Invoice::new(order, customer);
    info!(invoice = %invoice, "invoice issued");
    invoice
}

/// Scenario 5: pay an order.
fn demo_payment() {
    info!("--- Payment processing ---");

    let mut cart = ShoppingCart::new("CART002");
    cart.add_item(EBook::digital(
        "1984",
        "George Orwell",
        pub_date(1949, 6, 8),
        "Dystopian",
        Money::from_cents(899),
    ));

    let order = Order::new(
        Utc::now().date_naive(),
        cart.total_price,
        "Processing",
        "ORDER002",
    );

    // Same order value backs both the invoice and the payment.
    let customer = Customer::new(
        "Charlie Johnson",
        "+987654321",
        true,
        "charlie.johnson@example.com",
        "321 Maple St",
    );
    let invoice = Invoice::new(order.clone(), customer);
    info!(invoice_id = %invoice.invoice_id, "invoice issued");

    let payment = Payment::new(order.clone(), "Credit Card", order.amount);
    info!(payment = %payment, "payment recorded");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Folio storefront demo starting");

    demo_catalog();
    demo_customer();
    demo_cart();
    let invoice = demo_invoice();
    demo_payment();

    // Final dump: the last invoice as pretty JSON, to show the entities
    // serialize cleanly.
    println!("{}", serde_json::to_string_pretty(&invoice)?);

    info!("Folio storefront demo finished");
    Ok(())
}
