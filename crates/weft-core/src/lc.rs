//! # Letters of Credit
//!
//! LC records opened against confirmed PIs, and the checklist of trade
//! documents generated for each one.
//!
//! ## Document Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Documents Generated Per LC                              │
//! │                                                                         │
//! │  LetterOfCredit ──┬──► Bill of Exchange      (amount words, UPPERCASE) │
//! │                   ├──► Delivery Challan                                 │
//! │                   ├──► Commercial Invoice    (amount words)            │
//! │                   ├──► Packing List                                     │
//! │                   ├──► Beneficiary Certificate                          │
//! │                   └──► Certificate of Origin                            │
//! │                                                                         │
//! │  Checklist progress = prepared documents / 6                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::WordsError;
use crate::format::calculate_percentage;
use crate::money::Money;
use crate::pi::ProformaInvoice;
use crate::types::LcStatus;
use crate::DEFAULT_SIGHT_DAYS;

// =============================================================================
// Document Checklist
// =============================================================================

/// Preparation state of the six trade documents an LC requires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocumentChecklist {
    pub bill_of_exchange: bool,
    pub delivery_challan: bool,
    pub commercial_invoice: bool,
    pub packing_list: bool,
    pub beneficiary_certificate: bool,
    pub certificate_of_origin: bool,
}

impl DocumentChecklist {
    /// Number of documents in the set.
    pub const fn total(&self) -> usize {
        6
    }

    /// How many documents have been prepared.
    pub fn completed(&self) -> usize {
        [
            self.bill_of_exchange,
            self.delivery_challan,
            self.commercial_invoice,
            self.packing_list,
            self.beneficiary_certificate,
            self.certificate_of_origin,
        ]
        .iter()
        .filter(|prepared| **prepared)
        .count()
    }

    /// Whether the full set is ready for bank presentation.
    pub fn is_complete(&self) -> bool {
        self.completed() == self.total()
    }

    /// Checklist progress for the dashboard bar, 0-100.
    pub fn progress_percent(&self) -> u32 {
        calculate_percentage(self.completed() as i64, self.total() as i64)
    }
}

// =============================================================================
// Letter of Credit
// =============================================================================

/// An export letter of credit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LetterOfCredit {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Bank-issued LC number.
    pub lc_no: String,

    /// Back-to-back LC number, when one was opened against this LC.
    pub btb_lc_no: Option<String>,

    #[ts(as = "String")]
    pub opening_date: NaiveDate,

    pub issuing_bank: String,

    /// PI number this LC was opened against.
    pub pi_reference: String,

    /// Applicant (buyer) as named on the LC.
    pub applicant: String,

    pub applicant_address: String,

    /// Beneficiary (the exporting house identity).
    pub beneficiary: String,

    pub beneficiary_address: String,

    /// LC value in cents.
    pub amount_cents: i64,

    /// ISO currency code, `USD` in practice.
    pub currency: String,

    #[ts(as = "String")]
    pub expiry_date: NaiveDate,

    #[ts(as = "String")]
    pub latest_shipment_date: NaiveDate,

    pub port_of_loading: String,

    pub port_of_discharge: String,

    pub status: LcStatus,

    /// Payment tenor in days, when the LC states one.
    pub sight_days: Option<u32>,

    pub documents: DocumentChecklist,
}

impl LetterOfCredit {
    /// LC value as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }

    /// Stated payment tenor, or the customary 90 days when the LC is
    /// silent.
    #[inline]
    pub fn sight_days_or_default(&self) -> u32 {
        self.sight_days.unwrap_or(DEFAULT_SIGHT_DAYS)
    }

    /// Resolves the PI this LC references, by document number.
    ///
    /// Returns `None` when the referenced PI is not in the caller's set;
    /// document rendering falls back to LC fields alone in that case.
    pub fn find_linked_pi<'a>(&self, pis: &'a [ProformaInvoice]) -> Option<&'a ProformaInvoice> {
        pis.iter().find(|pi| pi.pi_no() == self.pi_reference)
    }

    /// Signed days from `today` until expiry. Negative once expired.
    ///
    /// `today` is a parameter rather than read from a clock so the same
    /// LC renders identically in tests and reports.
    pub fn days_to_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    /// The amount words sentence for the commercial invoice.
    ///
    /// The bill of exchange prints the same sentence upper-cased via
    /// [`str::to_uppercase`].
    pub fn amount_in_words(&self) -> Result<String, WordsError> {
        self.amount().in_words()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pi::{LabelItem, PiHeader};
    use crate::types::{new_id, Buyer, PiStatus, Vendor};

    fn test_lc(lc_no: &str, pi_reference: &str) -> LetterOfCredit {
        LetterOfCredit {
            id: new_id(),
            lc_no: lc_no.to_string(),
            btb_lc_no: None,
            opening_date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            issuing_bank: "National Bank Ltd.".to_string(),
            pi_reference: pi_reference.to_string(),
            applicant: "NZ Denim Ltd.".to_string(),
            applicant_address: "12 Harbour Rd, Auckland".to_string(),
            beneficiary: "Fashion Republic".to_string(),
            beneficiary_address: "Mirpur DOHS, Dhaka".to_string(),
            amount_cents: 3_152_550, // $31,525.50
            currency: "USD".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            latest_shipment_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            port_of_loading: "Chattogram, Bangladesh".to_string(),
            port_of_discharge: "Auckland, New Zealand".to_string(),
            status: LcStatus::Active,
            sight_days: None,
            documents: DocumentChecklist::default(),
        }
    }

    #[test]
    fn test_checklist_progress() {
        let mut docs = DocumentChecklist::default();
        assert_eq!(docs.completed(), 0);
        assert_eq!(docs.progress_percent(), 0);
        assert!(!docs.is_complete());

        docs.bill_of_exchange = true;
        docs.commercial_invoice = true;
        docs.packing_list = true;
        assert_eq!(docs.completed(), 3);
        assert_eq!(docs.progress_percent(), 50);

        docs.delivery_challan = true;
        docs.beneficiary_certificate = true;
        docs.certificate_of_origin = true;
        assert_eq!(docs.completed(), 6);
        assert_eq!(docs.progress_percent(), 100);
        assert!(docs.is_complete());
    }

    #[test]
    fn test_sight_days_default() {
        let mut lc = test_lc("105225010123", "FR-03/25 (12)");
        assert_eq!(lc.sight_days_or_default(), 90);

        lc.sight_days = Some(120);
        assert_eq!(lc.sight_days_or_default(), 120);
    }

    #[test]
    fn test_days_to_expiry() {
        let lc = test_lc("105225010123", "FR-03/25 (12)");

        let before = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        assert_eq!(lc.days_to_expiry(before), 10);

        let after = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
        assert_eq!(lc.days_to_expiry(after), -5);
    }

    #[test]
    fn test_find_linked_pi() {
        let header = PiHeader {
            id: new_id(),
            pi_no: "FR-03/25 (12)".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            buyer: Buyer::new("NZ Denim Ltd.", "12 Harbour Rd", "Auckland, New Zealand"),
            merchandiser: "S. Rahman".to_string(),
            vendor: Vendor::FashionRepublic,
            terms: "At sight".to_string(),
            status: PiStatus::Confirmed,
        };
        let pis = vec![ProformaInvoice::Labels {
            header,
            style_no: "ST-4411".to_string(),
            items: Vec::<LabelItem>::new(),
        }];

        let lc = test_lc("105225010123", "FR-03/25 (12)");
        assert!(lc.find_linked_pi(&pis).is_some());

        let orphan = test_lc("105225010456", "FR-01/25 (01)");
        assert!(orphan.find_linked_pi(&pis).is_none());
    }

    #[test]
    fn test_amount_in_words_for_documents() {
        let lc = test_lc("105225010123", "FR-03/25 (12)");
        let words = lc.amount_in_words().unwrap();
        assert_eq!(
            words,
            "Thirty One Thousand Five Hundred Twenty Five & Cents Fifty Only."
        );

        // Bill of exchange prints the same line upper-cased
        assert!(words.to_uppercase().ends_with("& CENTS FIFTY ONLY."));
    }
}
