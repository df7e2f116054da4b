//! # Ledger Statement
//!
//! Party ledger statement: every entry with a running balance column,
//! column totals, and the closing balance spelled out in words.
//!
//! ## Layout
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Rahim Traders (Customer)                                        │
//! │                                                                  │
//! │  Date         Particulars       Debit      Credit    Balance     │
//! │  02 Jan 2025  Export proceeds   $2,933.33            $2,933.33   │
//! │  15 Jan 2025  TT received                 $1,500.00  $1,433.33   │
//! │  ──────────────────────────────────────────────────────────────  │
//! │  Totals                         $2,933.33 $1,500.00  $1,433.33   │
//! │  One Thousand Four Hundred Thirty Three & Cents ... Only.        │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use weft_core::format::{format_currency, format_date};
use weft_core::ledger::{PartyLedger, PartySide};

use crate::error::ReportResult;
use crate::report::writer_into_string;

/// One formatted line of a ledger statement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRow {
    pub date: String,
    pub particulars: String,
    pub reference: String,
    /// Empty string when the entry has no debit side.
    pub debit: String,
    /// Empty string when the entry has no credit side.
    pub credit: String,
    pub balance: String,
}

/// A party's full statement, ready to print.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStatement {
    pub party_name: String,
    /// "Customer" or "Supplier".
    pub side: String,
    pub rows: Vec<LedgerRow>,
    pub total_debit: String,
    pub total_credit: String,
    pub closing_balance: String,
    /// Closing balance magnitude spelled out for the signature block.
    pub balance_in_words: String,
}

impl LedgerStatement {
    /// Builds the statement for one party ledger.
    ///
    /// Fails only if the closing balance cannot be spelled out.
    pub fn build(ledger: &PartyLedger) -> ReportResult<Self> {
        debug!(
            party = %ledger.party_name,
            entries = %ledger.entries.len(),
            "Building ledger statement"
        );

        let rows = ledger
            .entries
            .iter()
            .zip(ledger.running_balances())
            .map(|(entry, balance)| LedgerRow {
                date: format_date(entry.date),
                particulars: entry.particulars.clone(),
                reference: entry.reference.clone(),
                debit: if entry.debit_cents > 0 {
                    format_currency(entry.debit())
                } else {
                    String::new()
                },
                credit: if entry.credit_cents > 0 {
                    format_currency(entry.credit())
                } else {
                    String::new()
                },
                balance: format_currency(balance),
            })
            .collect();

        let side = match ledger.side {
            PartySide::Customer => "Customer",
            PartySide::Supplier => "Supplier",
        };

        Ok(LedgerStatement {
            party_name: ledger.party_name.clone(),
            side: side.to_string(),
            rows,
            total_debit: format_currency(ledger.total_debit()),
            total_credit: format_currency(ledger.total_credit()),
            closing_balance: format_currency(ledger.balance()),
            balance_in_words: ledger.balance().abs().in_words()?,
        })
    }

    /// Exports the statement as CSV, totals row included.
    pub fn to_csv(&self) -> ReportResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(["Date", "Particulars", "Reference", "Debit", "Credit", "Balance"])?;
        for row in &self.rows {
            wtr.write_record([
                row.date.as_str(),
                row.particulars.as_str(),
                row.reference.as_str(),
                row.debit.as_str(),
                row.credit.as_str(),
                row.balance.as_str(),
            ])?;
        }
        wtr.write_record([
            "",
            "Totals",
            "",
            self.total_debit.as_str(),
            self.total_credit.as_str(),
            self.closing_balance.as_str(),
        ])?;
        writer_into_string(wtr)
    }
}
