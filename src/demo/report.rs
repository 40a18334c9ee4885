//! The five sections of the report, each in its own span.

use super::format::{format_currency, format_date};
use super::DemoError;
use crate::framework::Repository;
use crate::lifecycle::RepositorySystem;
use crate::model::{Customer, CustomerId, Order, OrderDetail, Product};
use crate::query;
use rust_decimal_macros::dec;
use std::io::Write;
use tracing::{info, instrument};

/// Customer added by the CRUD section.
pub const NEW_CUSTOMER: (u32, &str, &str) = (6, "Frank Green", "Berlin");

/// Customer removed by the CRUD section.
pub const REMOVED_CUSTOMER: CustomerId = CustomerId(4);

#[instrument(name = "initial_data", skip_all)]
pub(super) async fn initial_data<W: Write>(
    system: &RepositorySystem,
    out: &mut W,
) -> Result<(), DemoError> {
    writeln!(out, "--- Initial Data (retrieved via Repositories) ---")?;

    writeln!(out, "Customers:")?;
    for c in system.customers.get_all().await? {
        writeln!(out, "  Id: {}, Name: {}, City: {}", c.id, c.name, c.city)?;
    }

    writeln!(out, "\nOrders:")?;
    for o in system.orders.get_all().await? {
        writeln!(
            out,
            "  Id: {}, CustomerId: {}, Total: {}",
            o.id,
            o.customer_id,
            format_currency(o.total_amount)
        )?;
    }

    writeln!(out, "\nProducts:")?;
    for p in system.products.get_all().await? {
        writeln!(
            out,
            "  Id: {}, Name: {}, Price: {}",
            p.id,
            p.name,
            format_currency(p.price)
        )?;
    }

    writeln!(out, "\nOrder Details:")?;
    for d in system.order_details.get_all().await? {
        writeln!(
            out,
            "  DetailId: {}, OrderId: {}, ProductId: {}, Quantity: {}",
            d.id, d.order_id, d.product_id, d.quantity
        )?;
    }
    Ok(())
}

#[instrument(name = "filters", skip_all)]
pub(super) async fn filters<W: Write>(
    system: &RepositorySystem,
    out: &mut W,
) -> Result<(), DemoError> {
    writeln!(
        out,
        "\n--- Filtering Examples (LINQ Where with Lambda via Repository.Find) ---"
    )?;

    writeln!(out, "\nCustomers from New York:")?;
    for c in system.customers.customers_in_city("New York").await? {
        writeln!(out, "  {}", c.name)?;
    }

    let large_orders = system
        .orders
        .find(|o: &Order| o.total_amount > dec!(100))
        .await?;
    writeln!(out, "\nOrders with Total Amount > $100:")?;
    for o in large_orders {
        writeln!(
            out,
            "  Order ID: {}, Total: {}",
            o.id,
            format_currency(o.total_amount)
        )?;
    }

    let gadgets = system
        .products
        .find(|p: &Product| p.price < dec!(100) && p.name.contains('o'))
        .await?;
    writeln!(out, "\nAffordable Gadgets (Price < $100 and 'o' in name):")?;
    for p in gadgets {
        writeln!(out, "  {} ({})", p.name, format_currency(p.price))?;
    }
    Ok(())
}

#[instrument(name = "joins", skip_all)]
pub(super) async fn joins<W: Write>(
    system: &RepositorySystem,
    out: &mut W,
) -> Result<(), DemoError> {
    writeln!(
        out,
        "\n--- LINQ Join Examples (using data retrieved from Repositories) ---"
    )?;

    let customers = system.customers.get_all().await?;
    let orders = system.orders.get_all().await?;
    let products = system.products.get_all().await?;
    let details = system.order_details.get_all().await?;

    writeln!(out, "\nOrders with Customer Names:")?;
    for row in query::orders_with_customers(&orders, &customers) {
        writeln!(
            out,
            "  Order ID: {}, Customer: {}, Date: {}, Total: {}",
            row.order_id,
            row.customer_name,
            format_date(row.order_date),
            format_currency(row.total_amount)
        )?;
    }

    writeln!(out, "\nProducts in Orders:")?;
    for line in query::order_lines(&details, &products) {
        writeln!(
            out,
            "  Order ID: {}, Product: {}, Quantity: {}, Line Total: {}",
            line.order_id,
            line.product_name,
            line.quantity,
            format_currency(line.line_total)
        )?;
    }

    writeln!(out, "\nCustomers with their Orders (Left Join Simulation):")?;
    for row in query::customers_with_orders(&customers, &orders) {
        match row.order {
            Some(order) => writeln!(
                out,
                "  Customer: {} ({}), Order ID: {}, Total: {}",
                row.customer_name,
                row.city,
                order.order_id,
                format_currency(order.total_amount)
            )?,
            None => writeln!(
                out,
                "  Customer: {} ({}), No Orders",
                row.customer_name, row.city
            )?,
        }
    }
    Ok(())
}

#[instrument(name = "aggregation", skip_all)]
pub(super) async fn aggregation<W: Write>(
    system: &RepositorySystem,
    out: &mut W,
) -> Result<(), DemoError> {
    writeln!(
        out,
        "\n--- More Advanced LINQ with Grouping and Aggregation (Repository Data) ---"
    )?;

    let customers: Vec<Customer> = system.customers.get_all().await?;
    let orders: Vec<Order> = system.orders.get_all().await?;
    let products: Vec<Product> = system.products.get_all().await?;
    let details: Vec<OrderDetail> = system.order_details.get_all().await?;

    writeln!(out, "\nTotal Sales by Customer:")?;
    for sales in query::sales_by_customer(&orders, &customers) {
        writeln!(
            out,
            "  Customer: {}, Total Sales: {}, Orders: {}",
            sales.customer_name,
            format_currency(sales.total_sales),
            sales.number_of_orders
        )?;
    }

    writeln!(out, "\nProducts Sold Per Order:")?;
    for group in query::products_per_order(&details, &products) {
        writeln!(out, "  Order ID: {}", group.order_id)?;
        for p in group.products {
            writeln!(out, "    - {} (Qty: {})", p.product_name, p.quantity)?;
        }
    }
    Ok(())
}

#[instrument(name = "crud", skip_all)]
pub(super) async fn crud<W: Write>(
    system: &RepositorySystem,
    out: &mut W,
) -> Result<(), DemoError> {
    writeln!(out, "\n--- Repository CRUD Example ---")?;

    let (id, name, city) = NEW_CUSTOMER;
    let customer = Customer::new(id, name, city);
    system.customers.add(customer.clone()).await?;
    writeln!(out, "\nAdded new customer: {}", customer.name)?;
    writeln!(out, "Customers after add:")?;
    list_customer_names(system, out).await?;

    match system.customers.get_by_id(REMOVED_CUSTOMER).await? {
        Some(customer) => {
            let name = customer.name.clone();
            system.customers.remove(customer).await?;
            writeln!(out, "\nRemoved customer: {name}")?;
            writeln!(out, "Customers after remove:")?;
            list_customer_names(system, out).await?;
        }
        None => {
            info!(id = %REMOVED_CUSTOMER, "Nothing to remove");
            writeln!(
                out,
                "\nCustomer with ID {REMOVED_CUSTOMER} not found for removal."
            )?;
        }
    }
    Ok(())
}

async fn list_customer_names<W: Write>(
    system: &RepositorySystem,
    out: &mut W,
) -> Result<(), DemoError> {
    for c in system.customers.get_all().await? {
        writeln!(out, "  {}", c.name)?;
    }
    Ok(())
}
