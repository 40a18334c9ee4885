//! Join queries across customers, orders, products and order details.

use crate::model::{Customer, Order, OrderDetail, OrderId, Product};
use crate::query::{group_join, inner_join};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// An order together with the name of the customer who placed it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderWithCustomer {
    pub order_id: OrderId,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub total_amount: Decimal,
}

/// One purchased product line with its computed total.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub order_id: OrderId,
    pub product_name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// The order half of a [`CustomerOrderRow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub total_amount: Decimal,
}

/// A customer paired with one of their orders, or with none at all.
///
/// `order` is `None` only for customers without any order; an order whose total is zero
/// is still `Some`.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerOrderRow {
    pub customer_name: String,
    pub city: String,
    pub order: Option<OrderSummary>,
}

/// Inner join of orders and customers on the customer id. Orders whose customer is
/// missing are dropped.
pub fn orders_with_customers(orders: &[Order], customers: &[Customer]) -> Vec<OrderWithCustomer> {
    inner_join(
        orders,
        customers,
        |o| o.customer_id,
        |c| c.id,
        |order, customer| OrderWithCustomer {
            order_id: order.id,
            customer_name: customer.name.clone(),
            order_date: order.order_date,
            total_amount: order.total_amount,
        },
    )
}

/// Inner join of order details and products, with `line_total = quantity × price`.
pub fn order_lines(details: &[OrderDetail], products: &[Product]) -> Vec<OrderLine> {
    inner_join(
        details,
        products,
        |d| d.product_id,
        |p| p.id,
        |detail, product| OrderLine {
            order_id: detail.order_id,
            product_name: product.name.clone(),
            price: product.price,
            quantity: detail.quantity,
            line_total: Decimal::from(detail.quantity) * product.price,
        },
    )
}

/// Left join of customers and orders.
///
/// A customer with `k > 0` orders yields exactly `k` rows (in order collection order); a
/// customer with none yields one row with `order: None`.
pub fn customers_with_orders(customers: &[Customer], orders: &[Order]) -> Vec<CustomerOrderRow> {
    group_join(customers, orders, |c| c.id, |o| o.customer_id)
        .into_iter()
        .flat_map(|(customer, matches)| {
            let summaries: Vec<Option<OrderSummary>> = if matches.is_empty() {
                vec![None]
            } else {
                matches
                    .into_iter()
                    .map(|o| {
                        Some(OrderSummary {
                            order_id: o.id,
                            total_amount: o.total_amount,
                        })
                    })
                    .collect()
            };
            summaries.into_iter().map(move |order| CustomerOrderRow {
                customer_name: customer.name.clone(),
                city: customer.city.clone(),
                order,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::InMemoryDataSource;
    use crate::model::CustomerId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_orders_with_customers_has_one_row_per_order() {
        let source = InMemoryDataSource::sample();

        let rows = orders_with_customers(&source.orders, &source.customers);

        let pairs: Vec<(u32, &str)> = rows
            .iter()
            .map(|r| (r.order_id.0, r.customer_name.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (101, "Alice Smith"),
                (102, "Bob Johnson"),
                (103, "Alice Smith"),
                (104, "Charlie Brown"),
                (105, "Diana Miller"),
                (106, "Bob Johnson"),
            ]
        );
    }

    #[test]
    fn test_orders_with_customers_drops_dangling_orders() {
        let source = InMemoryDataSource::sample();
        let customers: Vec<Customer> = source
            .customers
            .into_iter()
            .filter(|c| c.id != CustomerId(2))
            .collect();

        let rows = orders_with_customers(&source.orders, &customers);

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.customer_name != "Bob Johnson"));
    }

    #[test]
    fn test_order_lines_compute_line_total() {
        let source = InMemoryDataSource::sample();

        let lines = order_lines(&source.order_details, &source.products);

        assert_eq!(lines.len(), 9);
        let mice = &lines[4];
        assert_eq!(mice.order_id, OrderId(103));
        assert_eq!(mice.product_name, "Mouse");
        assert_eq!(mice.quantity, 3);
        assert_eq!(mice.line_total, dec!(75.00));
        let webcams = &lines[6];
        assert_eq!(webcams.line_total, dec!(100.00));
    }

    #[test]
    fn test_customers_with_orders_includes_customers_without_orders() {
        let source = InMemoryDataSource::sample();

        let rows = customers_with_orders(&source.customers, &source.orders);

        // 6 orders + Eve, who has none.
        assert_eq!(rows.len(), 7);
        let eve: Vec<&CustomerOrderRow> = rows
            .iter()
            .filter(|r| r.customer_name == "Eve Davis")
            .collect();
        assert_eq!(eve.len(), 1);
        assert_eq!(eve[0].order, None);
    }

    #[test]
    fn test_customers_with_orders_repeats_customer_once_per_order() {
        let source = InMemoryDataSource::sample();

        let rows = customers_with_orders(&source.customers, &source.orders);

        for customer in &source.customers {
            let expected = source
                .orders
                .iter()
                .filter(|o| o.customer_id == customer.id)
                .count()
                .max(1);
            let actual = rows
                .iter()
                .filter(|r| r.customer_name == customer.name)
                .count();
            assert_eq!(actual, expected, "rows for {}", customer.name);
        }

        let alice: Vec<u32> = rows
            .iter()
            .filter(|r| r.customer_name == "Alice Smith")
            .filter_map(|r| r.order.map(|o| o.order_id.0))
            .collect();
        assert_eq!(alice, vec![101, 103]);
    }

    #[test]
    fn test_zero_total_order_is_not_absent() {
        let customers = vec![Customer::new(1, "Zed", "Oslo")];
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let orders = vec![Order::new(1, 1, date, Decimal::ZERO)];

        let rows = customers_with_orders(&customers, &orders);

        assert_eq!(
            rows[0].order,
            Some(OrderSummary {
                order_id: OrderId(1),
                total_amount: Decimal::ZERO,
            })
        );
    }
}
