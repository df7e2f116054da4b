//! # Tracking Report
//!
//! Delivery progress sheet: one row per tracked product with quantities,
//! status, and who delivered last, plus the dashboard status counts.

use serde::Serialize;
use tracing::debug;

use weft_core::format::format_date;
use weft_core::tracking::{TrackedProduct, TrackingStats};

use crate::error::ReportResult;
use crate::report::writer_into_string;

/// One product line of the tracking sheet.
///
/// Quantities stay numeric so spreadsheet columns sum cleanly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRow {
    pub pi_no: String,
    pub product_code: String,
    pub product_name: String,
    /// "N/A" when the product has no colour.
    pub color: String,
    pub initial: i64,
    pub delivered: i64,
    pub remaining: i64,
    pub status: String,
    /// "-" until the first delivery lands.
    pub delivered_by: String,
    pub last_updated: String,
}

/// The full tracking sheet, ready to print.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingReport {
    pub rows: Vec<TrackingRow>,
    pub stats: TrackingStats,
}

impl TrackingReport {
    /// Builds the sheet for a set of tracked products.
    pub fn build(products: &[TrackedProduct]) -> Self {
        debug!(products = %products.len(), "Building tracking report");

        let rows = products
            .iter()
            .map(|product| TrackingRow {
                pi_no: product.pi_no.clone(),
                product_code: product.product_code.clone(),
                product_name: product.product_name.clone(),
                color: product.color.clone().unwrap_or_else(|| "N/A".to_string()),
                initial: product.initial_quantity,
                delivered: product.delivered_quantity,
                remaining: product.remaining(),
                status: product.status().as_str().to_string(),
                delivered_by: if product.delivered_by.is_empty() {
                    "-".to_string()
                } else {
                    product.delivered_by.clone()
                },
                last_updated: format_date(product.last_updated.date_naive()),
            })
            .collect();

        TrackingReport {
            rows,
            stats: TrackingStats::collect(products),
        }
    }

    /// Exports the sheet as CSV.
    pub fn to_csv(&self) -> ReportResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record([
            "PI No",
            "Product Code",
            "Product Name",
            "Colour",
            "Initial Qty",
            "Delivered",
            "Remaining",
            "Status",
            "Delivered By",
            "Last Updated",
        ])?;
        for row in &self.rows {
            wtr.write_record([
                row.pi_no.as_str(),
                row.product_code.as_str(),
                row.product_name.as_str(),
                row.color.as_str(),
                &row.initial.to_string(),
                &row.delivered.to_string(),
                &row.remaining.to_string(),
                row.status.as_str(),
                row.delivered_by.as_str(),
                row.last_updated.as_str(),
            ])?;
        }
        writer_into_string(wtr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_products() -> Vec<TrackedProduct> {
        let t0 = Utc.with_ymd_and_hms(2025, 7, 10, 9, 0, 0).unwrap();

        let untouched = TrackedProduct::new(
            "FR-03/25 (01)",
            "WV-1044",
            "Woven Main Label",
            Some("Black/Gold".to_string()),
            5_000,
            t0,
        );

        let mut partial = TrackedProduct::new(
            "MT-07/25SP (04)",
            "FB-2001",
            "Single Jersey Fabric",
            None,
            12_000,
            t0,
        );
        partial.record_delivery(4_000, "Karim", t0).unwrap();

        vec![untouched, partial]
    }

    #[test]
    fn test_rows_carry_quantities_and_placeholders() {
        let report = TrackingReport::build(&sample_products());

        assert_eq!(report.rows.len(), 2);

        let first = &report.rows[0];
        assert_eq!(first.color, "Black/Gold");
        assert_eq!(first.initial, 5_000);
        assert_eq!(first.remaining, 5_000);
        assert_eq!(first.status, "pending");
        assert_eq!(first.delivered_by, "-");
        assert_eq!(first.last_updated, "10 Jul 2025");

        let second = &report.rows[1];
        assert_eq!(second.color, "N/A");
        assert_eq!(second.delivered, 4_000);
        assert_eq!(second.remaining, 8_000);
        assert_eq!(second.status, "partial");
        assert_eq!(second.delivered_by, "Karim");
    }

    #[test]
    fn test_stats_attached() {
        let report = TrackingReport::build(&sample_products());
        assert_eq!(report.stats.total, 2);
        assert_eq!(report.stats.pending, 1);
        assert_eq!(report.stats.partial, 1);
        assert_eq!(report.stats.completed, 0);
    }

    #[test]
    fn test_csv_export() {
        let report = TrackingReport::build(&sample_products());
        let csv = report.to_csv().unwrap();

        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("PI No,Product Code,Product Name,Colour"));
        assert_eq!(lines.count(), 2);
        assert!(csv.contains("FR-03/25 (01)"));
        assert!(csv.contains("N/A"));
    }
}
