//! # Loan Schedule
//!
//! Repayment history for one loan account: every instalment split into
//! principal and interest, with the outstanding balance after each.

use serde::Serialize;
use tracing::debug;

use weft_core::format::{format_currency, format_date};
use weft_core::loan::Loan;
use weft_core::Money;

use crate::error::ReportResult;
use crate::report::writer_into_string;

/// One instalment line of the schedule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    pub date: String,
    pub amount: String,
    pub principal: String,
    pub interest: String,
    pub outstanding: String,
}

/// A loan account's printed schedule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSchedule {
    pub loan_no: String,
    pub lender: String,
    pub loan_type: String,
    pub status: String,
    pub principal: String,
    pub emi: String,
    pub rows: Vec<ScheduleRow>,
    pub principal_paid: String,
    pub interest_paid: String,
    pub total_paid: String,
    pub outstanding: String,
    pub progress_percent: u32,
}

impl LoanSchedule {
    /// Builds the schedule for one loan.
    pub fn build(loan: &Loan) -> Self {
        debug!(
            loan_no = %loan.loan_no,
            instalments = %loan.repayments.len(),
            "Building loan schedule"
        );

        let rows = loan
            .repayments
            .iter()
            .zip(loan.running_outstanding())
            .map(|(repayment, outstanding)| ScheduleRow {
                date: format_date(repayment.date),
                amount: format_currency(repayment.amount()),
                principal: format_currency(Money::from_cents(repayment.principal_cents)),
                interest: format_currency(Money::from_cents(repayment.interest_cents)),
                outstanding: format_currency(outstanding),
            })
            .collect();

        LoanSchedule {
            loan_no: loan.loan_no.clone(),
            lender: loan.lender.clone(),
            loan_type: loan.loan_type.as_str().to_string(),
            status: loan.status.as_str().to_string(),
            principal: format_currency(loan.principal()),
            emi: format_currency(loan.emi()),
            rows,
            principal_paid: format_currency(loan.principal_paid()),
            interest_paid: format_currency(loan.interest_paid()),
            total_paid: format_currency(loan.total_paid()),
            outstanding: format_currency(loan.outstanding()),
            progress_percent: loan.progress_percent(),
        }
    }

    /// Exports the schedule as CSV, totals row included.
    pub fn to_csv(&self) -> ReportResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(["Date", "Amount", "Principal", "Interest", "Outstanding"])?;
        for row in &self.rows {
            wtr.write_record([
                row.date.as_str(),
                row.amount.as_str(),
                row.principal.as_str(),
                row.interest.as_str(),
                row.outstanding.as_str(),
            ])?;
        }
        wtr.write_record([
            "Totals",
            self.total_paid.as_str(),
            self.principal_paid.as_str(),
            self.interest_paid.as_str(),
            self.outstanding.as_str(),
        ])?;
        writer_into_string(wtr)
    }
}
