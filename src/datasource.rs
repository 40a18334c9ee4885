//! In-memory seed data for the four repositories.
//!
//! An [`InMemoryDataSource`] is a plain value: it is built explicitly, moved into a
//! [`RepositorySystem`](crate::lifecycle::RepositorySystem), and split across the actors
//! that own each collection from then on. Nothing here is global or lazily initialized, so
//! every system starts from the same rows.

use crate::model::{Customer, Order, OrderDetail, Product};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

/// The four collections a [`RepositorySystem`](crate::lifecycle::RepositorySystem) is seeded with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryDataSource {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub products: Vec<Product>,
    pub order_details: Vec<OrderDetail>,
}

impl InMemoryDataSource {
    /// A data source with no rows at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fixed sample rows used by the demo and the handler.
    pub fn sample() -> Self {
        Self {
            customers: vec![
                Customer::new(1, "Alice Smith", "New York"),
                Customer::new(2, "Bob Johnson", "London"),
                Customer::new(3, "Charlie Brown", "New York"),
                Customer::new(4, "Diana Miller", "Paris"),
                Customer::new(5, "Eve Davis", "London"),
            ],
            orders: vec![
                Order::new(101, 1, date(2024, 1, 15), dec!(150.00)),
                Order::new(102, 2, date(2024, 1, 20), dec!(200.50)),
                Order::new(103, 1, date(2024, 2, 10), dec!(75.25)),
                Order::new(104, 3, date(2024, 2, 15), dec!(300.00)),
                Order::new(105, 4, date(2024, 3, 5), dec!(120.00)),
                Order::new(106, 2, date(2024, 3, 10), dec!(50.00)),
            ],
            products: vec![
                Product::new(1, "Laptop", dec!(1200.00)),
                Product::new(2, "Mouse", dec!(25.00)),
                Product::new(3, "Keyboard", dec!(75.00)),
                Product::new(4, "Monitor", dec!(300.00)),
                Product::new(5, "Webcam", dec!(50.00)),
            ],
            order_details: vec![
                OrderDetail::new(1, 101, 1, 1),
                OrderDetail::new(2, 101, 2, 2),
                OrderDetail::new(3, 102, 3, 1),
                OrderDetail::new(4, 102, 4, 1),
                OrderDetail::new(5, 103, 2, 3),
                OrderDetail::new(6, 104, 1, 1),
                OrderDetail::new(7, 104, 5, 2),
                OrderDetail::new(8, 105, 3, 1),
                OrderDetail::new(9, 106, 5, 1),
            ],
        }
    }
}

// Sample dates are literals; an out-of-range one would show up as 1970-01-01 in tests.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
