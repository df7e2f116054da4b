//! # Bookkeeping
//!
//! Party ledgers, the IOU cash book, and the daily voucher book.
//!
//! ## Sign Convention
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     One Rule Everywhere                                 │
//! │                                                                         │
//! │  running balance = Σ debit − Σ credit                                  │
//! │                                                                         │
//! │  Customer ledger:  invoices post as debit  → balance runs positive     │
//! │                    (what the buyer owes us: a receivable)              │
//! │                                                                         │
//! │  Supplier ledger:  purchases post as credit → balance runs negative    │
//! │                    (what we owe the supplier: a payable)               │
//! │                                                                         │
//! │  IOU book:         cash handed out = debit, returned = credit         │
//! │                                                                         │
//! │  Daily book:       receipts = credit side, payments = debit side,     │
//! │                    net balance for the month = Σ credit − Σ debit     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Balances are always derived from entries, never stored, so a ledger
//! can never disagree with its own rows.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::VoucherType;

// =============================================================================
// Ledger Entries
// =============================================================================

/// One dated posting on a party ledger.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LedgerEntry {
    /// Unique identifier (UUID v4).
    pub id: String,

    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Narrative column ("Being goods supplied vide challan...").
    pub particulars: String,

    /// Cross-reference: invoice, challan or voucher number.
    pub reference: String,

    pub debit_cents: i64,

    pub credit_cents: i64,
}

impl LedgerEntry {
    /// Debit side as Money.
    #[inline]
    pub fn debit(&self) -> Money {
        Money::from_cents(self.debit_cents)
    }

    /// Credit side as Money.
    #[inline]
    pub fn credit(&self) -> Money {
        Money::from_cents(self.credit_cents)
    }
}

/// Which side of the business a party ledger tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PartySide {
    /// A buyer we invoice. Balance runs positive (receivable).
    Customer,
    /// A supplier who invoices us. Balance runs negative (payable).
    Supplier,
}

// =============================================================================
// Party Ledger
// =============================================================================

/// One customer's or supplier's ledger.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PartyLedger {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub party_name: String,

    pub side: PartySide,

    /// Postings in date order. Maintained by [`PartyLedger::append`].
    pub entries: Vec<LedgerEntry>,
}

impl PartyLedger {
    /// Creates an empty ledger for a party.
    pub fn new(party_name: impl Into<String>, side: PartySide) -> Self {
        PartyLedger {
            id: crate::types::new_id(),
            party_name: party_name.into(),
            side,
            entries: Vec::new(),
        }
    }

    /// Inserts an entry keeping the ledger date-ordered.
    ///
    /// Same-date entries keep their insertion order, so a day's postings
    /// read in the order they happened.
    pub fn append(&mut self, entry: LedgerEntry) {
        let pos = self
            .entries
            .iter()
            .rposition(|e| e.date <= entry.date)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.entries.insert(pos, entry);
    }

    /// Sum of the debit column.
    pub fn total_debit(&self) -> Money {
        Money::from_cents(self.entries.iter().map(|e| e.debit_cents).sum())
    }

    /// Sum of the credit column.
    pub fn total_credit(&self) -> Money {
        Money::from_cents(self.entries.iter().map(|e| e.credit_cents).sum())
    }

    /// Closing balance: total debit minus total credit.
    pub fn balance(&self) -> Money {
        self.total_debit() - self.total_credit()
    }

    /// Cumulative balance after each entry, in entry order.
    ///
    /// This is the rightmost column of a printed statement; it always
    /// ends at [`PartyLedger::balance`].
    pub fn running_balances(&self) -> Vec<Money> {
        let mut running = 0i64;
        self.entries
            .iter()
            .map(|e| {
                running += e.debit_cents - e.credit_cents;
                Money::from_cents(running)
            })
            .collect()
    }
}

// =============================================================================
// Book-Level Reducers
// =============================================================================

/// Total receivable across customer ledgers.
pub fn total_receivables(ledgers: &[PartyLedger]) -> Money {
    let cents = ledgers
        .iter()
        .filter(|l| l.side == PartySide::Customer)
        .map(|l| l.balance().cents())
        .sum();
    Money::from_cents(cents)
}

/// Total payable across supplier ledgers.
///
/// Supplier balances run negative; the payable figure is their
/// magnitude.
pub fn total_payables(ledgers: &[PartyLedger]) -> Money {
    let cents: i64 = ledgers
        .iter()
        .filter(|l| l.side == PartySide::Supplier)
        .map(|l| l.balance().cents())
        .sum();
    Money::from_cents(cents).abs()
}

/// Mean closing balance across ledgers (truncating division).
/// Zero for an empty slice.
pub fn average_balance(ledgers: &[PartyLedger]) -> Money {
    if ledgers.is_empty() {
        return Money::zero();
    }
    let total: i64 = ledgers.iter().map(|l| l.balance().cents()).sum();
    Money::from_cents(total / ledgers.len() as i64)
}

// =============================================================================
// IOU Cash Book
// =============================================================================

/// One line of the IOU (MOI) cash book: money handed to a person or
/// returned by them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IouEntry {
    /// Unique identifier (UUID v4).
    pub id: String,

    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Who holds the cash.
    pub person: String,

    /// What the advance was for.
    pub purpose: String,

    /// Cash handed out.
    pub debit_cents: i64,

    /// Cash returned or settled against bills.
    pub credit_cents: i64,
}

/// The IOU cash book across all persons.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IouBook {
    pub entries: Vec<IouEntry>,
}

impl IouBook {
    /// Distinct persons in first-appearance order.
    pub fn persons(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.person.as_str()) {
                seen.push(entry.person.as_str());
            }
        }
        seen
    }

    /// Entries for one person, in book order.
    pub fn entries_for(&self, person: &str) -> Vec<&IouEntry> {
        self.entries.iter().filter(|e| e.person == person).collect()
    }

    /// What a person still holds: their debits minus their credits.
    pub fn balance_for(&self, person: &str) -> Money {
        let cents = self
            .entries
            .iter()
            .filter(|e| e.person == person)
            .map(|e| e.debit_cents - e.credit_cents)
            .sum();
        Money::from_cents(cents)
    }

    /// Cash out with the staff in total.
    pub fn total_outstanding(&self) -> Money {
        let cents = self
            .entries
            .iter()
            .map(|e| e.debit_cents - e.credit_cents)
            .sum();
        Money::from_cents(cents)
    }
}

// =============================================================================
// Daily Book
// =============================================================================

/// One voucher in the daily book.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyEntry {
    /// Unique identifier (UUID v4).
    pub id: String,

    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Voucher number ("RV-0142").
    pub voucher_no: String,

    pub voucher_type: VoucherType,

    pub particulars: String,

    /// Account head the voucher posts to ("Conveyance", "Bank Charges").
    pub account_head: String,

    pub debit_cents: i64,

    pub credit_cents: i64,

    /// Free-text narration on the voucher.
    pub narration: String,

    pub created_by: String,
}

/// A day's worth of vouchers, with its own column totals.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DayGroup {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub entries: Vec<DailyEntry>,
    pub total_debit_cents: i64,
    pub total_credit_cents: i64,
}

/// Per-account-head column totals.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AccountHeadTotal {
    pub account_head: String,
    pub debit_cents: i64,
    pub credit_cents: i64,
}

/// The daily voucher book.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyBook {
    pub entries: Vec<DailyEntry>,
}

impl DailyBook {
    /// Vouchers dated within one calendar month.
    pub fn entries_in_month(&self, year: i32, month: u32) -> Vec<&DailyEntry> {
        self.entries
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .collect()
    }

    /// Vouchers of one type.
    pub fn entries_of_type(&self, voucher_type: VoucherType) -> Vec<&DailyEntry> {
        self.entries
            .iter()
            .filter(|e| e.voucher_type == voucher_type)
            .collect()
    }

    /// Case-insensitive substring search over particulars, account head
    /// and voucher number. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&DailyEntry> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                needle.is_empty()
                    || e.particulars.to_lowercase().contains(&needle)
                    || e.account_head.to_lowercase().contains(&needle)
                    || e.voucher_no.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Sum of the debit column.
    pub fn total_debit(&self) -> Money {
        Money::from_cents(self.entries.iter().map(|e| e.debit_cents).sum())
    }

    /// Sum of the credit column.
    pub fn total_credit(&self) -> Money {
        Money::from_cents(self.entries.iter().map(|e| e.credit_cents).sum())
    }

    /// Receipts minus payments: total credit minus total debit.
    pub fn net_balance(&self) -> Money {
        self.total_credit() - self.total_debit()
    }

    /// Entries grouped per day, chronological, each day with its own
    /// column totals.
    pub fn group_by_date(&self) -> Vec<DayGroup> {
        let mut by_date: BTreeMap<NaiveDate, Vec<DailyEntry>> = BTreeMap::new();
        for entry in &self.entries {
            by_date.entry(entry.date).or_default().push(entry.clone());
        }

        by_date
            .into_iter()
            .map(|(date, entries)| {
                let total_debit_cents = entries.iter().map(|e| e.debit_cents).sum();
                let total_credit_cents = entries.iter().map(|e| e.credit_cents).sum();
                DayGroup {
                    date,
                    entries,
                    total_debit_cents,
                    total_credit_cents,
                }
            })
            .collect()
    }

    /// Debit/credit totals per account head, sorted by head name.
    pub fn account_head_totals(&self) -> Vec<AccountHeadTotal> {
        let mut by_head: BTreeMap<&str, (i64, i64)> = BTreeMap::new();
        for entry in &self.entries {
            let totals = by_head.entry(entry.account_head.as_str()).or_default();
            totals.0 += entry.debit_cents;
            totals.1 += entry.credit_cents;
        }

        by_head
            .into_iter()
            .map(|(account_head, (debit_cents, credit_cents))| AccountHeadTotal {
                account_head: account_head.to_string(),
                debit_cents,
                credit_cents,
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::new_id;

    fn entry(date: (i32, u32, u32), particulars: &str, debit: i64, credit: i64) -> LedgerEntry {
        LedgerEntry {
            id: new_id(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            particulars: particulars.to_string(),
            reference: "CH-001".to_string(),
            debit_cents: debit,
            credit_cents: credit,
        }
    }

    fn voucher(
        date: (i32, u32, u32),
        voucher_no: &str,
        voucher_type: VoucherType,
        account_head: &str,
        debit: i64,
        credit: i64,
    ) -> DailyEntry {
        DailyEntry {
            id: new_id(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            voucher_no: voucher_no.to_string(),
            voucher_type,
            particulars: format!("Voucher {voucher_no}"),
            account_head: account_head.to_string(),
            debit_cents: debit,
            credit_cents: credit,
            narration: String::new(),
            created_by: "accounts".to_string(),
        }
    }

    #[test]
    fn test_customer_running_balance() {
        let mut ledger = PartyLedger::new("NZ Denim Ltd.", PartySide::Customer);
        ledger.append(entry((2025, 1, 5), "Goods supplied", 293_333, 0));
        ledger.append(entry((2025, 1, 20), "Payment received", 0, 150_000));

        let running = ledger.running_balances();
        assert_eq!(running, vec![Money::from_cents(293_333), Money::from_cents(143_333)]);
        assert_eq!(ledger.balance(), Money::from_cents(143_333));
        assert_eq!(ledger.total_debit(), Money::from_cents(293_333));
        assert_eq!(ledger.total_credit(), Money::from_cents(150_000));
    }

    #[test]
    fn test_supplier_balance_runs_negative() {
        let mut ledger = PartyLedger::new("Thread Suppliers Co.", PartySide::Supplier);
        ledger.append(entry((2025, 2, 1), "Yarn purchased", 0, 150_000));
        ledger.append(entry((2025, 2, 15), "Paid on account", 20_000, 0));

        assert_eq!(ledger.balance(), Money::from_cents(-130_000));
        assert!(ledger.balance().is_negative());
    }

    #[test]
    fn test_append_keeps_date_order() {
        let mut ledger = PartyLedger::new("NZ Denim Ltd.", PartySide::Customer);
        ledger.append(entry((2025, 1, 20), "second", 100, 0));
        ledger.append(entry((2025, 1, 5), "first", 100, 0));
        ledger.append(entry((2025, 1, 20), "third same day", 100, 0));

        let order: Vec<&str> = ledger.entries.iter().map(|e| e.particulars.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third same day"]);
    }

    #[test]
    fn test_receivables_and_payables() {
        let mut customer_a = PartyLedger::new("A", PartySide::Customer);
        customer_a.append(entry((2025, 1, 1), "Invoice", 100_000, 0));
        let mut customer_b = PartyLedger::new("B", PartySide::Customer);
        customer_b.append(entry((2025, 1, 1), "Invoice", 50_000, 0));
        let mut supplier = PartyLedger::new("S", PartySide::Supplier);
        supplier.append(entry((2025, 1, 1), "Purchase", 0, 130_000));

        let ledgers = vec![customer_a, customer_b, supplier];
        assert_eq!(total_receivables(&ledgers), Money::from_cents(150_000));
        assert_eq!(total_payables(&ledgers), Money::from_cents(130_000));
        // (100,000 + 50,000 - 130,000) / 3
        assert_eq!(average_balance(&ledgers), Money::from_cents(6_666));
    }

    #[test]
    fn test_average_balance_empty() {
        assert_eq!(average_balance(&[]), Money::zero());
    }

    #[test]
    fn test_iou_book_per_person() {
        let book = IouBook {
            entries: vec![
                IouEntry {
                    id: new_id(),
                    date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                    person: "Karim".to_string(),
                    purpose: "Port fees".to_string(),
                    debit_cents: 50_000,
                    credit_cents: 0,
                },
                IouEntry {
                    id: new_id(),
                    date: NaiveDate::from_ymd_opt(2025, 4, 3).unwrap(),
                    person: "Karim".to_string(),
                    purpose: "Bills settled".to_string(),
                    debit_cents: 0,
                    credit_cents: 34_000,
                },
                IouEntry {
                    id: new_id(),
                    date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
                    person: "Selina".to_string(),
                    purpose: "Courier".to_string(),
                    debit_cents: 70_000,
                    credit_cents: 0,
                },
            ],
        };

        assert_eq!(book.persons(), vec!["Karim", "Selina"]);
        assert_eq!(book.balance_for("Karim"), Money::from_cents(16_000));
        assert_eq!(book.balance_for("Selina"), Money::from_cents(70_000));
        assert_eq!(book.total_outstanding(), Money::from_cents(86_000));
        assert_eq!(book.entries_for("Karim").len(), 2);
    }

    #[test]
    fn test_daily_book_net_balance() {
        let book = DailyBook {
            entries: vec![
                voucher((2025, 5, 2), "RV-001", VoucherType::Receipt, "Sales", 0, 500_000),
                voucher((2025, 5, 2), "PV-001", VoucherType::Payment, "Conveyance", 120_000, 0),
                voucher((2025, 5, 3), "PV-002", VoucherType::Payment, "Bank Charges", 30_000, 0),
            ],
        };

        assert_eq!(book.total_debit(), Money::from_cents(150_000));
        assert_eq!(book.total_credit(), Money::from_cents(500_000));
        // Receipts minus payments
        assert_eq!(book.net_balance(), Money::from_cents(350_000));
    }

    #[test]
    fn test_daily_book_month_filter() {
        let book = DailyBook {
            entries: vec![
                voucher((2025, 5, 2), "RV-001", VoucherType::Receipt, "Sales", 0, 100),
                voucher((2025, 6, 2), "RV-002", VoucherType::Receipt, "Sales", 0, 100),
                voucher((2024, 5, 2), "RV-003", VoucherType::Receipt, "Sales", 0, 100),
            ],
        };

        let may_2025 = book.entries_in_month(2025, 5);
        assert_eq!(may_2025.len(), 1);
        assert_eq!(may_2025[0].voucher_no, "RV-001");
    }

    #[test]
    fn test_daily_book_search() {
        let book = DailyBook {
            entries: vec![
                voucher((2025, 5, 2), "RV-001", VoucherType::Receipt, "Sales", 0, 100),
                voucher((2025, 5, 2), "PV-007", VoucherType::Payment, "Conveyance", 100, 0),
            ],
        };

        // Case-insensitive, matches account head
        assert_eq!(book.search("CONVEY").len(), 1);
        // Matches voucher number
        assert_eq!(book.search("pv-007").len(), 1);
        // Matches particulars ("Voucher RV-001")
        assert_eq!(book.search("voucher rv").len(), 1);
        // Empty query returns everything
        assert_eq!(book.search("").len(), 2);
        // No match
        assert!(book.search("salary").is_empty());
    }

    #[test]
    fn test_daily_book_group_by_date() {
        let book = DailyBook {
            entries: vec![
                voucher((2025, 5, 3), "PV-002", VoucherType::Payment, "Bank Charges", 30, 0),
                voucher((2025, 5, 2), "RV-001", VoucherType::Receipt, "Sales", 0, 500),
                voucher((2025, 5, 2), "PV-001", VoucherType::Payment, "Conveyance", 120, 0),
            ],
        };

        let groups = book.group_by_date();
        assert_eq!(groups.len(), 2);
        // Chronological
        assert_eq!(groups[0].date, NaiveDate::from_ymd_opt(2025, 5, 2).unwrap());
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[0].total_debit_cents, 120);
        assert_eq!(groups[0].total_credit_cents, 500);
        assert_eq!(groups[1].entries.len(), 1);
    }

    #[test]
    fn test_account_head_totals() {
        let book = DailyBook {
            entries: vec![
                voucher((2025, 5, 2), "PV-001", VoucherType::Payment, "Conveyance", 120, 0),
                voucher((2025, 5, 9), "PV-004", VoucherType::Payment, "Conveyance", 80, 0),
                voucher((2025, 5, 2), "RV-001", VoucherType::Receipt, "Sales", 0, 500),
            ],
        };

        let totals = book.account_head_totals();
        assert_eq!(totals.len(), 2);
        // Sorted by head name
        assert_eq!(totals[0].account_head, "Conveyance");
        assert_eq!(totals[0].debit_cents, 200);
        assert_eq!(totals[1].account_head, "Sales");
        assert_eq!(totals[1].credit_cents, 500);
    }

    #[test]
    fn test_entries_of_type() {
        let book = DailyBook {
            entries: vec![
                voucher((2025, 5, 2), "RV-001", VoucherType::Receipt, "Sales", 0, 100),
                voucher((2025, 5, 2), "PV-001", VoucherType::Payment, "Conveyance", 100, 0),
                voucher((2025, 5, 4), "JV-001", VoucherType::Journal, "Depreciation", 50, 0),
            ],
        };

        assert_eq!(book.entries_of_type(VoucherType::Payment).len(), 1);
        assert_eq!(book.entries_of_type(VoucherType::Contra).len(), 0);
    }
}
