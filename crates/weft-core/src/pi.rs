//! # Proforma Invoices
//!
//! The three PI paperwork kinds the house issues, their line math, and
//! the document numbering scheme.
//!
//! ## Document Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Proforma Invoice Flow                              │
//! │                                                                         │
//! │  Items entered            Line math                Derived              │
//! │  ─────────────            ─────────────            ─────────────        │
//! │                                                                         │
//! │  LabelItem (pcs) ───────► pcs × price/dzn ÷ 12 ──► LabelTotals         │
//! │                                                                         │
//! │  FabricItem (yds) ──────► yds × price/yd ────────► FabricTotals        │
//! │                                                                         │
//! │  CartonItem (ctns) ─────► ctns × price ──────────► CartonTotals        │
//! │                                                                         │
//! │  Totals feed the LC amount and the words line on the printed PI.       │
//! │  Totals are always recomputed from items, never trusted from data.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Buyer, PiStatus, Vendor};

// =============================================================================
// PI Kind
// =============================================================================

/// Which of the three paperwork kinds a PI is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PiKind {
    Labels,
    Fabric,
    Cartons,
}

impl PiKind {
    /// The exporting identity each kind is conventionally issued under:
    /// fabric ships as Moon Textile, labels and cartons as Fashion
    /// Republic.
    #[inline]
    pub const fn default_vendor(&self) -> Vendor {
        match self {
            PiKind::Fabric => Vendor::MoonTextile,
            PiKind::Labels | PiKind::Cartons => Vendor::FashionRepublic,
        }
    }

    /// Fabric PI numbers carry an `SP` marker after the year.
    #[inline]
    pub const fn has_sp_marker(&self) -> bool {
        matches!(self, PiKind::Fabric)
    }
}

// =============================================================================
// Numbering
// =============================================================================

/// Generates a PI number in the house format.
///
/// ## Format
/// `<prefix>-<MM>/<YY><SP?> (<NN>)` where the prefix comes from the
/// vendor, `SP` appears only on fabric PIs, and the sequence is
/// zero-padded to two digits.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use weft_core::pi::{generate_pi_no, PiKind};
/// use weft_core::types::Vendor;
///
/// let date = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
/// assert_eq!(
///     generate_pi_no(Vendor::MoonTextile, PiKind::Fabric, date, 4),
///     "MT-07/25SP (04)"
/// );
/// assert_eq!(
///     generate_pi_no(Vendor::FashionRepublic, PiKind::Labels, date, 12),
///     "FR-07/25 (12)"
/// );
/// ```
pub fn generate_pi_no(vendor: Vendor, kind: PiKind, date: NaiveDate, sequence: u32) -> String {
    let marker = if kind.has_sp_marker() { "SP" } else { "" };
    format!(
        "{}-{:02}/{:02}{} ({:02})",
        vendor.prefix(),
        date.month(),
        date.year() % 100,
        marker,
        sequence
    )
}

/// Converts a dozens count to pieces. Label quantities are entered in
/// dozens on the form but stored and tracked in pieces.
#[inline]
pub const fn pieces_from_dozens(dozens: i64) -> i64 {
    dozens * 12
}

// =============================================================================
// Line Items
// =============================================================================

/// A woven/printed label line. Priced per dozen, counted in pieces.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabelItem {
    /// Item description as printed (e.g. "Woven Main Label").
    pub description: String,

    pub color: String,

    pub net_weight_kg: f64,

    pub gross_weight_kg: f64,

    /// Quantity in pieces (entered in dozens, stored in pieces).
    pub quantity_pcs: i64,

    /// Unit price per dozen, in cents.
    pub unit_price_per_dzn_cents: i64,
}

impl LabelItem {
    /// Quantity expressed in dozens, for the printed quantity column.
    #[inline]
    pub fn quantity_dzn(&self) -> f64 {
        self.quantity_pcs as f64 / 12.0
    }

    /// Unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_per_dzn_cents)
    }

    /// Line total: `pieces * price_per_dozen / 12`, rounded half up.
    pub fn line_total(&self) -> Money {
        self.unit_price().price_per_dozen_total(self.quantity_pcs)
    }
}

/// A fabric line. Priced and counted per yard.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FabricItem {
    /// Buyer's style number the fabric is for.
    pub style_no: String,

    /// Composition description (e.g. "96% Polyester 4% Spandex").
    pub description: String,

    /// Fabric weight in grams per square metre.
    pub gsm: i64,

    /// Width as printed, units included (e.g. `60"`).
    pub width: String,

    pub color: String,

    pub net_weight_kg: f64,

    pub gross_weight_kg: f64,

    pub quantity_yds: i64,

    /// Unit price per yard, in cents.
    pub unit_price_per_yd_cents: i64,
}

impl FabricItem {
    /// Unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_per_yd_cents)
    }

    /// Line total: `yards * price_per_yard`.
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity_yds)
    }
}

/// An export carton line. Priced per carton.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartonItem {
    /// Buyer order number the cartons pack.
    pub order_no: String,

    /// Outer measurement as printed (e.g. "60x40x40 cm").
    pub measurement: String,

    /// Board ply (3, 5, 7).
    pub ply: i64,

    /// Number of cartons.
    pub quantity: i64,

    pub net_weight_kg: f64,

    pub gross_weight_kg: f64,

    /// Unit label for the quantity column (usually "pcs").
    pub unit: String,

    /// Unit price per carton, in cents.
    pub unit_price_cents: i64,
}

impl CartonItem {
    /// Unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total: `cartons * price_per_carton`.
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Column totals for a labels PI.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabelTotals {
    pub total_pcs: i64,
    pub total_dzn: f64,
    pub net_weight_kg: f64,
    pub gross_weight_kg: f64,
    pub amount_cents: i64,
}

impl LabelTotals {
    /// Recomputes totals from line items.
    pub fn from_items(items: &[LabelItem]) -> Self {
        LabelTotals {
            total_pcs: items.iter().map(|i| i.quantity_pcs).sum(),
            total_dzn: items.iter().map(|i| i.quantity_dzn()).sum(),
            net_weight_kg: items.iter().map(|i| i.net_weight_kg).sum(),
            gross_weight_kg: items.iter().map(|i| i.gross_weight_kg).sum(),
            amount_cents: items.iter().map(|i| i.line_total().cents()).sum(),
        }
    }

    /// Grand total as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

/// Column totals for a fabric PI.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FabricTotals {
    pub total_yds: i64,
    pub net_weight_kg: f64,
    pub gross_weight_kg: f64,
    pub amount_cents: i64,
}

impl FabricTotals {
    /// Recomputes totals from line items.
    pub fn from_items(items: &[FabricItem]) -> Self {
        FabricTotals {
            total_yds: items.iter().map(|i| i.quantity_yds).sum(),
            net_weight_kg: items.iter().map(|i| i.net_weight_kg).sum(),
            gross_weight_kg: items.iter().map(|i| i.gross_weight_kg).sum(),
            amount_cents: items.iter().map(|i| i.line_total().cents()).sum(),
        }
    }

    /// Grand total as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

/// Column totals for a cartons PI.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartonTotals {
    pub total_cartons: i64,
    pub net_weight_kg: f64,
    pub gross_weight_kg: f64,
    pub amount_cents: i64,
}

impl CartonTotals {
    /// Recomputes totals from line items.
    pub fn from_items(items: &[CartonItem]) -> Self {
        CartonTotals {
            total_cartons: items.iter().map(|i| i.quantity).sum(),
            net_weight_kg: items.iter().map(|i| i.net_weight_kg).sum(),
            gross_weight_kg: items.iter().map(|i| i.gross_weight_kg).sum(),
            amount_cents: items.iter().map(|i| i.line_total().cents()).sum(),
        }
    }

    /// Grand total as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Proforma Invoice
// =============================================================================

/// Header fields shared by all PI kinds.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PiHeader {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Document number in the house format (`MT-07/25SP (04)`).
    pub pi_no: String,

    #[ts(as = "String")]
    pub date: NaiveDate,

    pub buyer: Buyer,

    /// Merchandiser handling the order on the buyer side.
    pub merchandiser: String,

    pub vendor: Vendor,

    /// Payment/delivery terms paragraph as printed.
    pub terms: String,

    pub status: PiStatus,
}

/// A proforma invoice of one of the three kinds.
///
/// The kind decides the line item shape and the pricing rule, so the
/// variants carry their own item vectors rather than a common row type.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ProformaInvoice {
    Labels {
        header: PiHeader,
        /// Buyer style the labels belong to.
        style_no: String,
        items: Vec<LabelItem>,
    },
    Fabric {
        header: PiHeader,
        /// Optional payee line when payment routes through a third party.
        payee: Option<String>,
        items: Vec<FabricItem>,
    },
    Cartons {
        header: PiHeader,
        items: Vec<CartonItem>,
    },
}

impl ProformaInvoice {
    /// Shared header regardless of kind.
    pub fn header(&self) -> &PiHeader {
        match self {
            ProformaInvoice::Labels { header, .. } => header,
            ProformaInvoice::Fabric { header, .. } => header,
            ProformaInvoice::Cartons { header, .. } => header,
        }
    }

    /// Document number.
    #[inline]
    pub fn pi_no(&self) -> &str {
        &self.header().pi_no
    }

    /// Which paperwork kind this is.
    pub fn kind(&self) -> PiKind {
        match self {
            ProformaInvoice::Labels { .. } => PiKind::Labels,
            ProformaInvoice::Fabric { .. } => PiKind::Fabric,
            ProformaInvoice::Cartons { .. } => PiKind::Cartons,
        }
    }

    /// Grand total across line items, recomputed on every call.
    ///
    /// This figure drives the LC amount and the words line on the
    /// printed document.
    pub fn total_amount(&self) -> Money {
        match self {
            ProformaInvoice::Labels { items, .. } => LabelTotals::from_items(items).amount(),
            ProformaInvoice::Fabric { items, .. } => FabricTotals::from_items(items).amount(),
            ProformaInvoice::Cartons { items, .. } => CartonTotals::from_items(items).amount(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::new_id;

    fn test_header(pi_no: &str, vendor: Vendor) -> PiHeader {
        PiHeader {
            id: new_id(),
            pi_no: pi_no.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
            buyer: Buyer::new("NZ Denim Ltd.", "12 Harbour Rd", "Auckland, New Zealand"),
            merchandiser: "S. Rahman".to_string(),
            vendor,
            terms: "At 90 days sight".to_string(),
            status: PiStatus::Draft,
        }
    }

    #[test]
    fn test_generate_pi_no_fabric_carries_sp() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        assert_eq!(
            generate_pi_no(Vendor::MoonTextile, PiKind::Fabric, date, 4),
            "MT-07/25SP (04)"
        );
    }

    #[test]
    fn test_generate_pi_no_labels_and_cartons() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(
            generate_pi_no(Vendor::FashionRepublic, PiKind::Labels, date, 12),
            "FR-03/25 (12)"
        );
        assert_eq!(
            generate_pi_no(Vendor::FashionRepublic, PiKind::Cartons, date, 7),
            "FR-03/25 (07)"
        );
    }

    #[test]
    fn test_default_vendor_per_kind() {
        assert_eq!(PiKind::Fabric.default_vendor(), Vendor::MoonTextile);
        assert_eq!(PiKind::Labels.default_vendor(), Vendor::FashionRepublic);
        assert_eq!(PiKind::Cartons.default_vendor(), Vendor::FashionRepublic);
    }

    #[test]
    fn test_pieces_from_dozens() {
        assert_eq!(pieces_from_dozens(5333), 63_996);
        assert_eq!(pieces_from_dozens(0), 0);
    }

    #[test]
    fn test_label_line_total_per_dozen() {
        // 64,000 pcs at $0.03/dzn = $160.00 exactly
        let item = LabelItem {
            description: "Woven Main Label".to_string(),
            color: "Black/Gold".to_string(),
            net_weight_kg: 12.5,
            gross_weight_kg: 13.1,
            quantity_pcs: 64_000,
            unit_price_per_dzn_cents: 3,
        };
        assert_eq!(item.line_total().cents(), 16_000);
        assert!((item.quantity_dzn() - 5333.333).abs() < 0.001);
    }

    #[test]
    fn test_fabric_line_total_per_yard() {
        let item = FabricItem {
            style_no: "ST-4411".to_string(),
            description: "96% Polyester 4% Spandex".to_string(),
            gsm: 180,
            width: "60\"".to_string(),
            color: "Navy".to_string(),
            net_weight_kg: 420.0,
            gross_weight_kg: 431.5,
            quantity_yds: 2_000,
            unit_price_per_yd_cents: 169,
        };
        assert_eq!(item.line_total().cents(), 338_000); // $3,380.00
    }

    #[test]
    fn test_carton_line_total() {
        let item = CartonItem {
            order_no: "PO-8812".to_string(),
            measurement: "60x40x40 cm".to_string(),
            ply: 5,
            quantity: 1_200,
            net_weight_kg: 780.0,
            gross_weight_kg: 797.9,
            unit: "pcs".to_string(),
            unit_price_cents: 85,
        };
        assert_eq!(item.line_total().cents(), 102_000); // $1,020.00
    }

    #[test]
    fn test_label_totals_sum_columns() {
        let items = vec![
            LabelItem {
                description: "Woven Main Label".to_string(),
                color: "Black".to_string(),
                net_weight_kg: 12.5,
                gross_weight_kg: 13.1,
                quantity_pcs: 64_000,
                unit_price_per_dzn_cents: 3,
            },
            LabelItem {
                description: "Care Label".to_string(),
                color: "White".to_string(),
                net_weight_kg: 4.0,
                gross_weight_kg: 4.4,
                quantity_pcs: 24_000,
                unit_price_per_dzn_cents: 2,
            },
        ];

        let totals = LabelTotals::from_items(&items);
        assert_eq!(totals.total_pcs, 88_000);
        // 16,000 + (24,000 * 2 + 6) / 12 = 16,000 + 4,000
        assert_eq!(totals.amount_cents, 20_000);
        assert!((totals.net_weight_kg - 16.5).abs() < 1e-9);
        assert!((totals.gross_weight_kg - 17.5).abs() < 1e-9);
    }

    #[test]
    fn test_total_amount_over_invoice() {
        let pi = ProformaInvoice::Fabric {
            header: test_header("MT-07/25SP (04)", Vendor::MoonTextile),
            payee: None,
            items: vec![FabricItem {
                style_no: "ST-4411".to_string(),
                description: "Single Jersey".to_string(),
                gsm: 160,
                width: "72\"".to_string(),
                color: "White".to_string(),
                net_weight_kg: 100.0,
                gross_weight_kg: 104.0,
                quantity_yds: 500,
                unit_price_per_yd_cents: 210,
            }],
        };

        assert_eq!(pi.total_amount().cents(), 105_000); // $1,050.00
        assert_eq!(pi.kind(), PiKind::Fabric);
        assert_eq!(pi.pi_no(), "MT-07/25SP (04)");
    }
}
