//! # Daily Book Report
//!
//! One calendar month of vouchers, grouped by day with day totals, month
//! totals, and the month's net balance (credit minus debit).

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use weft_core::format::{format_currency, format_date};
use weft_core::ledger::DailyBook;
use weft_core::Money;

use crate::error::ReportResult;
use crate::report::writer_into_string;

/// One formatted voucher line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBookRow {
    pub voucher_no: String,
    pub voucher_type: String,
    pub particulars: String,
    pub account_head: String,
    /// Empty string when the voucher has no debit side.
    pub debit: String,
    /// Empty string when the voucher has no credit side.
    pub credit: String,
}

/// One day of the report, with its own column totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySection {
    pub date: String,
    pub rows: Vec<DailyBookRow>,
    pub day_debit: String,
    pub day_credit: String,
}

/// A month of the daily book, ready to print.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBookReport {
    /// "July 2025"
    pub month_label: String,
    pub sections: Vec<DaySection>,
    pub total_debit: String,
    pub total_credit: String,
    /// Credit minus debit for the month. Negative when more went out.
    pub net_balance: String,
}

impl DailyBookReport {
    /// Builds the report for one calendar month of the book.
    pub fn build(book: &DailyBook, year: i32, month: u32) -> Self {
        let groups: Vec<_> = book
            .group_by_date()
            .into_iter()
            .filter(|g| g.date.year() == year && g.date.month() == month)
            .collect();

        debug!(
            year = %year,
            month = %month,
            days = %groups.len(),
            "Building daily book report"
        );

        let mut month_debit = 0i64;
        let mut month_credit = 0i64;

        let sections = groups
            .into_iter()
            .map(|group| {
                month_debit += group.total_debit_cents;
                month_credit += group.total_credit_cents;

                let rows = group
                    .entries
                    .iter()
                    .map(|entry| DailyBookRow {
                        voucher_no: entry.voucher_no.clone(),
                        voucher_type: entry.voucher_type.as_str().to_string(),
                        particulars: entry.particulars.clone(),
                        account_head: entry.account_head.clone(),
                        debit: if entry.debit_cents > 0 {
                            format_currency(Money::from_cents(entry.debit_cents))
                        } else {
                            String::new()
                        },
                        credit: if entry.credit_cents > 0 {
                            format_currency(Money::from_cents(entry.credit_cents))
                        } else {
                            String::new()
                        },
                    })
                    .collect();

                DaySection {
                    date: format_date(group.date),
                    rows,
                    day_debit: format_currency(Money::from_cents(group.total_debit_cents)),
                    day_credit: format_currency(Money::from_cents(group.total_credit_cents)),
                }
            })
            .collect();

        DailyBookReport {
            month_label: month_label(year, month),
            sections,
            total_debit: format_currency(Money::from_cents(month_debit)),
            total_credit: format_currency(Money::from_cents(month_credit)),
            net_balance: format_currency(Money::from_cents(month_credit - month_debit)),
        }
    }

    /// Exports the report as CSV: one line per voucher, day total lines,
    /// then the month totals and net balance.
    pub fn to_csv(&self) -> ReportResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record([
            "Date",
            "Voucher No",
            "Type",
            "Particulars",
            "Account Head",
            "Debit",
            "Credit",
        ])?;
        for section in &self.sections {
            for row in &section.rows {
                wtr.write_record([
                    section.date.as_str(),
                    row.voucher_no.as_str(),
                    row.voucher_type.as_str(),
                    row.particulars.as_str(),
                    row.account_head.as_str(),
                    row.debit.as_str(),
                    row.credit.as_str(),
                ])?;
            }
            wtr.write_record([
                section.date.as_str(),
                "",
                "",
                "Day Total",
                "",
                section.day_debit.as_str(),
                section.day_credit.as_str(),
            ])?;
        }
        wtr.write_record([
            "",
            "",
            "",
            "Month Total",
            "",
            self.total_debit.as_str(),
            self.total_credit.as_str(),
        ])?;
        wtr.write_record(["", "", "", "Net Balance", "", "", self.net_balance.as_str()])?;
        writer_into_string(wtr)
    }
}

/// "July 2025" for a valid month, "07/2025" as a fallback.
fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{:02}/{}", month, year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_core::ledger::DailyEntry;
    use weft_core::{new_id, VoucherType};

    fn voucher(
        date: (i32, u32, u32),
        voucher_no: &str,
        voucher_type: VoucherType,
        debit: i64,
        credit: i64,
    ) -> DailyEntry {
        DailyEntry {
            id: new_id(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            voucher_no: voucher_no.to_string(),
            voucher_type,
            particulars: "Office expenses".to_string(),
            account_head: "Conveyance".to_string(),
            debit_cents: debit,
            credit_cents: credit,
            narration: String::new(),
            created_by: "accounts".to_string(),
        }
    }

    fn sample_book() -> DailyBook {
        DailyBook {
            entries: vec![
                voucher((2025, 7, 3), "PV-0101", VoucherType::Payment, 45_000, 0),
                voucher((2025, 7, 3), "RV-0102", VoucherType::Receipt, 0, 200_000),
                voucher((2025, 7, 10), "PV-0103", VoucherType::Payment, 30_000, 0),
                // Different month, must not appear
                voucher((2025, 8, 1), "PV-0104", VoucherType::Payment, 99_999, 0),
            ],
        }
    }

    #[test]
    fn test_month_scoping_and_day_sections() {
        let report = DailyBookReport::build(&sample_book(), 2025, 7);

        assert_eq!(report.month_label, "July 2025");
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.sections[0].date, "03 Jul 2025");
        assert_eq!(report.sections[0].rows.len(), 2);
        assert_eq!(report.sections[0].day_debit, "$450.00");
        assert_eq!(report.sections[0].day_credit, "$2,000.00");
        assert_eq!(report.sections[1].rows.len(), 1);
    }

    #[test]
    fn test_month_totals_and_net_balance() {
        let report = DailyBookReport::build(&sample_book(), 2025, 7);

        assert_eq!(report.total_debit, "$750.00");
        assert_eq!(report.total_credit, "$2,000.00");
        assert_eq!(report.net_balance, "$1,250.00");
    }

    #[test]
    fn test_net_balance_can_be_negative() {
        let book = DailyBook {
            entries: vec![voucher((2025, 7, 3), "PV-0101", VoucherType::Payment, 45_000, 0)],
        };
        let report = DailyBookReport::build(&book, 2025, 7);
        assert_eq!(report.net_balance, "-$450.00");
    }

    #[test]
    fn test_empty_month() {
        let report = DailyBookReport::build(&sample_book(), 2025, 12);
        assert!(report.sections.is_empty());
        assert_eq!(report.total_debit, "$0.00");
        assert_eq!(report.net_balance, "$0.00");
    }

    #[test]
    fn test_csv_layout() {
        let report = DailyBookReport::build(&sample_book(), 2025, 7);
        let csv = report.to_csv().unwrap();

        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Date,Voucher No,Type,Particulars,Account Head,Debit,Credit")
        );
        // 3 voucher rows + 2 day totals + month total + net balance
        assert_eq!(lines.count(), 7);
        assert!(csv.contains("Day Total"));
        assert!(csv.contains("Month Total"));
        assert!(!csv.contains("PV-0104"));
    }
}
