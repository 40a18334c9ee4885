//! Grouped aggregation queries.

use crate::model::{Customer, CustomerId, Order, OrderDetail, OrderId, Product};
use crate::query::{group_by, inner_join};
use rust_decimal::Decimal;
use std::cmp::Reverse;

/// Sales totals for one customer.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSales {
    pub customer_name: String,
    pub total_sales: Decimal,
    pub number_of_orders: usize,
}

/// A product bought in an order and how many units.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchasedProduct {
    pub product_name: String,
    pub quantity: u32,
}

/// All products bought in one order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderProducts {
    pub order_id: OrderId,
    pub products: Vec<PurchasedProduct>,
}

struct SalesTotal {
    customer_id: CustomerId,
    total: Decimal,
    count: usize,
}

/// Sum and count of order totals per customer, highest total first.
///
/// Groups are formed in first-encounter order and the sort is stable, so customers with
/// equal totals keep that order. Orders of unknown customers are dropped by the name join.
pub fn sales_by_customer(orders: &[Order], customers: &[Customer]) -> Vec<CustomerSales> {
    let totals: Vec<SalesTotal> = group_by(orders, |o| o.customer_id)
        .into_iter()
        .map(|(customer_id, group)| SalesTotal {
            customer_id,
            total: group.iter().map(|o| o.total_amount).sum(),
            count: group.len(),
        })
        .collect();

    let mut rows = inner_join(
        &totals,
        customers,
        |t| t.customer_id,
        |c| c.id,
        |t, c| CustomerSales {
            customer_name: c.name.clone(),
            total_sales: t.total,
            number_of_orders: t.count,
        },
    );
    rows.sort_by_key(|r| Reverse(r.total_sales));
    rows
}

/// Order details grouped by order, each with the names of the purchased products.
///
/// Lines whose product is missing are left out of their group's list.
pub fn products_per_order(details: &[OrderDetail], products: &[Product]) -> Vec<OrderProducts> {
    group_by(details, |d| d.order_id)
        .into_iter()
        .map(|(order_id, lines)| OrderProducts {
            order_id,
            products: inner_join(
                lines,
                products,
                |d| d.product_id,
                |p| p.id,
                |d, p| PurchasedProduct {
                    product_name: p.name.clone(),
                    quantity: d.quantity,
                },
            ),
        })
        .collect()
}
