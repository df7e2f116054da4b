//! # Delivery Tracking
//!
//! Tracks how much of each ordered product has been delivered against its
//! proforma invoice, with a dated history of every update.
//!
//! Status is derived from quantities, except "delayed" which is a manual
//! flag raised by the merchandiser and cleared by the next delivery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::format::calculate_percentage;
use crate::types::{new_id, DeliveryStatus};
use crate::validation::validate_quantity;

// =============================================================================
// Delivery Record
// =============================================================================

/// One line of a product's delivery history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliveryRecord {
    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    /// Quantity delivered in this update.
    pub quantity: i64,

    pub delivered_by: String,

    /// Auto-generated note ("Updated delivery quantity from 0 to 500").
    pub remarks: String,
}

// =============================================================================
// Tracked Product
// =============================================================================

/// A product under delivery tracking.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrackedProduct {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Proforma invoice this order belongs to.
    pub pi_no: String,

    pub product_code: String,

    pub product_name: String,

    pub color: Option<String>,

    /// Ordered quantity in pieces.
    pub initial_quantity: i64,

    /// Delivered so far, across all updates.
    pub delivered_quantity: i64,

    /// Who made the most recent delivery.
    pub delivered_by: String,

    #[ts(as = "String")]
    pub last_updated: DateTime<Utc>,

    /// Manual flag: shipment is running late.
    pub delayed: bool,

    /// Every delivery update, oldest first.
    pub history: Vec<DeliveryRecord>,
}

impl TrackedProduct {
    /// Starts tracking a freshly ordered product. Nothing delivered yet.
    pub fn new(
        pi_no: impl Into<String>,
        product_code: impl Into<String>,
        product_name: impl Into<String>,
        color: Option<String>,
        initial_quantity: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_id(),
            pi_no: pi_no.into(),
            product_code: product_code.into(),
            product_name: product_name.into(),
            color,
            initial_quantity,
            delivered_quantity: 0,
            delivered_by: String::new(),
            last_updated: timestamp,
            delayed: false,
            history: Vec::new(),
        }
    }

    /// Pieces still to deliver. Never negative.
    #[inline]
    pub fn remaining(&self) -> i64 {
        (self.initial_quantity - self.delivered_quantity).max(0)
    }

    /// Current status, derived from quantities.
    ///
    /// The delayed flag wins over everything else until a delivery
    /// clears it.
    pub fn status(&self) -> DeliveryStatus {
        if self.delayed {
            DeliveryStatus::Delayed
        } else if self.delivered_quantity >= self.initial_quantity {
            DeliveryStatus::Completed
        } else if self.delivered_quantity > 0 {
            DeliveryStatus::Partial
        } else {
            DeliveryStatus::Pending
        }
    }

    /// Delivery progress for the dashboard bar, 0-100.
    pub fn progress_percent(&self) -> u32 {
        calculate_percentage(self.delivered_quantity, self.initial_quantity)
    }

    /// Flags the shipment as running late.
    pub fn mark_delayed(&mut self) {
        self.delayed = true;
    }

    /// Records a delivery update.
    ///
    /// ## Rules
    /// - quantity must be a valid positive piece count
    /// - the update cannot push delivered past the ordered quantity
    /// - a successful delivery clears the delayed flag
    pub fn record_delivery(
        &mut self,
        quantity: i64,
        delivered_by: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if quantity > self.remaining() {
            return Err(CoreError::OverDelivery {
                product_code: self.product_code.clone(),
                remaining: self.remaining(),
                requested: quantity,
            });
        }

        let delivered_by = delivered_by.into();
        let previous = self.delivered_quantity;
        self.delivered_quantity = previous + quantity;
        self.history.push(DeliveryRecord {
            date: timestamp,
            quantity,
            delivered_by: delivered_by.clone(),
            remarks: format!(
                "Updated delivery quantity from {} to {}",
                previous, self.delivered_quantity
            ),
        });
        self.delivered_by = delivered_by;
        self.last_updated = timestamp;
        self.delayed = false;
        Ok(())
    }
}

// =============================================================================
// Tracking Stats
// =============================================================================

/// Status counts across all tracked products, for the dashboard cards.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrackingStats {
    pub total: usize,
    pub pending: usize,
    pub partial: usize,
    pub completed: usize,
    pub delayed: usize,
}

impl TrackingStats {
    pub fn collect(products: &[TrackedProduct]) -> Self {
        let mut stats = Self {
            total: products.len(),
            ..Self::default()
        };
        for product in products {
            match product.status() {
                DeliveryStatus::Pending => stats.pending += 1,
                DeliveryStatus::Partial => stats.partial += 1,
                DeliveryStatus::Completed => stats.completed += 1,
                DeliveryStatus::Delayed => stats.delayed += 1,
            }
        }
        stats
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(initial: i64) -> TrackedProduct {
        TrackedProduct::new(
            "FR-03/25 (01)",
            "WV-1044",
            "Woven Main Label",
            Some("Black/Gold".to_string()),
            initial,
            Utc::now(),
        )
    }

    #[test]
    fn test_new_product_is_pending() {
        let product = test_product(5_000);
        assert_eq!(product.status(), DeliveryStatus::Pending);
        assert_eq!(product.remaining(), 5_000);
        assert_eq!(product.progress_percent(), 0);
        assert!(product.history.is_empty());
    }

    #[test]
    fn test_partial_delivery() {
        let mut product = test_product(5_000);
        product.record_delivery(2_000, "Karim", Utc::now()).unwrap();

        assert_eq!(product.status(), DeliveryStatus::Partial);
        assert_eq!(product.delivered_quantity, 2_000);
        assert_eq!(product.remaining(), 3_000);
        assert_eq!(product.progress_percent(), 40);
        assert_eq!(product.delivered_by, "Karim");
        assert_eq!(
            product.history[0].remarks,
            "Updated delivery quantity from 0 to 2000"
        );
    }

    #[test]
    fn test_completing_delivery() {
        let mut product = test_product(5_000);
        product.record_delivery(2_000, "Karim", Utc::now()).unwrap();
        product.record_delivery(3_000, "Selina", Utc::now()).unwrap();

        assert_eq!(product.status(), DeliveryStatus::Completed);
        assert_eq!(product.remaining(), 0);
        assert_eq!(product.progress_percent(), 100);
        assert_eq!(product.history.len(), 2);
        assert_eq!(
            product.history[1].remarks,
            "Updated delivery quantity from 2000 to 5000"
        );
    }

    #[test]
    fn test_over_delivery_rejected() {
        let mut product = test_product(5_000);
        product.record_delivery(4_500, "Karim", Utc::now()).unwrap();

        let err = product.record_delivery(1_000, "Karim", Utc::now()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::OverDelivery {
                remaining: 500,
                requested: 1_000,
                ..
            }
        ));
        // Rejected update leaves quantities and history untouched
        assert_eq!(product.delivered_quantity, 4_500);
        assert_eq!(product.history.len(), 1);
    }

    #[test]
    fn test_invalid_quantity_rejected() {
        let mut product = test_product(5_000);
        assert!(product.record_delivery(0, "Karim", Utc::now()).is_err());
        assert!(product.record_delivery(-10, "Karim", Utc::now()).is_err());
        assert_eq!(product.status(), DeliveryStatus::Pending);
    }

    #[test]
    fn test_delayed_flag_overrides_and_clears() {
        let mut product = test_product(5_000);
        product.record_delivery(2_000, "Karim", Utc::now()).unwrap();

        product.mark_delayed();
        assert_eq!(product.status(), DeliveryStatus::Delayed);

        // Next delivery clears the flag
        product.record_delivery(1_000, "Karim", Utc::now()).unwrap();
        assert_eq!(product.status(), DeliveryStatus::Partial);
        assert!(!product.delayed);
    }

    #[test]
    fn test_stats_collect() {
        let mut partial = test_product(100);
        partial.record_delivery(30, "Karim", Utc::now()).unwrap();

        let mut done = test_product(50);
        done.record_delivery(50, "Karim", Utc::now()).unwrap();

        let mut late = test_product(200);
        late.mark_delayed();

        let products = vec![test_product(10), partial, done, late];
        let stats = TrackingStats::collect(&products);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.partial, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.delayed, 1);
    }
}
