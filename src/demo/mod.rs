//! # Demo Report
//!
//! A fixed script exercising every repository operation and every query in
//! [`query`](crate::query), rendered as plain text.
//!
//! The sections run in this order, each inside its own `tracing` span:
//!
//! 1. `initial_data`: every collection, as returned by `get_all`
//! 2. `filters`: predicates pushed down to the actors with `find`
//! 3. `joins`: inner joins and the left-join simulation
//! 4. `aggregation`: sales per customer and products per order
//! 5. `crud`: adds customer 6 and removes customer 4
//!
//! The last section mutates the customer collection, so running the report twice
//! against the same [`RepositorySystem`] does not print the same thing.

pub mod format;
mod report;

pub use format::{format_currency, format_date};
pub use report::{NEW_CUSTOMER, REMOVED_CUSTOMER};

use crate::lifecycle::RepositorySystem;
use crate::repositories::RepositoryError;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Repository request failed: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the report against `system`, writing to `out`.
pub async fn run<W: Write>(system: &RepositorySystem, out: &mut W) -> Result<(), DemoError> {
    report::initial_data(system, out).await?;
    report::filters(system, out).await?;
    report::joins(system, out).await?;
    report::aggregation(system, out).await?;
    report::crud(system, out).await?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::InMemoryDataSource;
    use crate::lifecycle::SystemConfig;

    async fn render(source: InMemoryDataSource) -> String {
        let system = RepositorySystem::start(&SystemConfig::default(), source);
        let mut out = Vec::new();
        run(&system, &mut out).await.unwrap();
        system.shutdown().await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_sections_appear_in_order() {
        let report = render(InMemoryDataSource::sample()).await;

        let headings = [
            "--- Initial Data (retrieved via Repositories) ---",
            "--- Filtering Examples (LINQ Where with Lambda via Repository.Find) ---",
            "--- LINQ Join Examples (using data retrieved from Repositories) ---",
            "--- More Advanced LINQ with Grouping and Aggregation (Repository Data) ---",
            "--- Repository CRUD Example ---",
        ];
        let positions: Vec<usize> = headings
            .iter()
            .map(|h| report.find(h).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_filters_and_formatting() {
        let report = render(InMemoryDataSource::sample()).await;

        assert!(report.contains("Customers from New York:\n  Alice Smith\n  Charlie Brown\n"));
        assert!(report.contains("  Id: 1, Name: Laptop, Price: $1,200.00\n"));
        assert!(report.contains(
            "  Order ID: 105, Customer: Diana Miller, Date: 3/5/2024, Total: $120.00\n"
        ));
        assert!(report.contains("  Mouse ($25.00)\n  Keyboard ($75.00)\n"));
        assert!(report.contains("  Customer: Eve Davis (London), No Orders\n"));
        assert!(report.contains(
            "  Customer: Charlie Brown, Total Sales: $300.00, Orders: 1\n"
        ));
        assert!(report.contains("  Order ID: 104\n    - Laptop (Qty: 1)\n    - Webcam (Qty: 2)\n"));
    }

    #[tokio::test]
    async fn test_crud_section_adds_then_removes() {
        let report = render(InMemoryDataSource::sample()).await;

        assert!(report.contains("Added new customer: Frank Green"));
        assert!(report.contains("Removed customer: Diana Miller"));
        let after_remove = report.split("Customers after remove:\n").nth(1).unwrap();
        assert_eq!(
            after_remove.lines().collect::<Vec<_>>(),
            vec![
                "  Alice Smith",
                "  Bob Johnson",
                "  Charlie Brown",
                "  Eve Davis",
                "  Frank Green",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_customer_is_reported() {
        let mut source = InMemoryDataSource::sample();
        source.customers.retain(|c| c.id != REMOVED_CUSTOMER);

        let report = render(source).await;

        assert!(report.contains("Customer with ID 4 not found for removal."));
        assert!(!report.contains("Customers after remove:"));
    }
}
