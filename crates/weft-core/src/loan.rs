//! # Loan Management
//!
//! Loan accounts (bank, personal, director) and the figures derived from
//! their repayment history.
//!
//! Outstanding balance is always derived from the repayment rows, never
//! stored, so "total paid" and "outstanding" cannot drift apart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::format::calculate_percentage;
use crate::money::Money;
use crate::types::{LoanStatus, LoanType};

// =============================================================================
// Repayment
// =============================================================================

/// One instalment paid against a loan.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Repayment {
    /// Unique identifier (UUID v4).
    pub id: String,

    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Total paid: principal + interest components.
    pub amount_cents: i64,

    /// Principal component.
    pub principal_cents: i64,

    /// Interest component.
    pub interest_cents: i64,
}

impl Repayment {
    /// Total instalment as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Loan
// =============================================================================

/// A loan extended to the business.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Loan {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Account number ("BL-2023-001").
    pub loan_no: String,

    pub loan_type: LoanType,

    /// Bank or person who extended the loan.
    pub lender: String,

    /// Sanctioned principal in cents.
    pub principal_cents: i64,

    /// Annual interest rate in basis points (1250 = 12.5%).
    pub interest_rate_bps: u32,

    pub tenure_months: u32,

    #[ts(as = "String")]
    pub start_date: NaiveDate,

    #[ts(as = "String")]
    pub end_date: NaiveDate,

    /// Equated monthly instalment in cents.
    pub emi_cents: i64,

    pub status: LoanStatus,

    /// Instalments paid so far, oldest first.
    pub repayments: Vec<Repayment>,
}

impl Loan {
    /// Sanctioned principal as Money.
    #[inline]
    pub fn principal(&self) -> Money {
        Money::from_cents(self.principal_cents)
    }

    /// Monthly instalment as Money.
    #[inline]
    pub fn emi(&self) -> Money {
        Money::from_cents(self.emi_cents)
    }

    /// Principal repaid across all instalments.
    pub fn principal_paid(&self) -> Money {
        Money::from_cents(self.repayments.iter().map(|r| r.principal_cents).sum())
    }

    /// Interest paid across all instalments.
    pub fn interest_paid(&self) -> Money {
        Money::from_cents(self.repayments.iter().map(|r| r.interest_cents).sum())
    }

    /// Everything paid across all instalments, interest included.
    pub fn total_paid(&self) -> Money {
        Money::from_cents(self.repayments.iter().map(|r| r.amount_cents).sum())
    }

    /// Principal still owed: sanctioned principal minus principal repaid.
    pub fn outstanding(&self) -> Money {
        self.principal() - self.principal_paid()
    }

    /// Repayment progress for the dashboard bar: principal repaid over
    /// sanctioned principal, 0-100.
    pub fn progress_percent(&self) -> u32 {
        calculate_percentage(self.principal_paid().cents(), self.principal_cents)
    }

    /// Outstanding balance after each instalment, in instalment order.
    ///
    /// The balance column of the printed repayment schedule.
    pub fn running_outstanding(&self) -> Vec<Money> {
        let mut remaining = self.principal_cents;
        self.repayments
            .iter()
            .map(|r| {
                remaining -= r.principal_cents;
                Money::from_cents(remaining)
            })
            .collect()
    }

    /// Records an instalment after checking it against the account.
    ///
    /// ## Rules
    /// - amount must be positive and equal principal + interest
    /// - components must be non-negative
    /// - the principal component cannot exceed the outstanding balance
    pub fn record_repayment(&mut self, repayment: Repayment) -> CoreResult<()> {
        if repayment.amount_cents <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "repayment amount".to_string(),
            }
            .into());
        }

        if repayment.principal_cents < 0 || repayment.interest_cents < 0 {
            return Err(ValidationError::OutOfRange {
                field: "repayment components".to_string(),
                min: 0,
                max: i64::MAX,
            }
            .into());
        }

        if repayment.amount_cents != repayment.principal_cents + repayment.interest_cents {
            return Err(ValidationError::InvalidFormat {
                field: "repayment".to_string(),
                reason: "amount must equal principal plus interest".to_string(),
            }
            .into());
        }

        let outstanding = self.outstanding().cents();
        if repayment.principal_cents > outstanding {
            return Err(CoreError::RepaymentExceedsOutstanding {
                loan_no: self.loan_no.clone(),
                outstanding_cents: outstanding,
                requested_cents: repayment.principal_cents,
            });
        }

        self.repayments.push(repayment);
        Ok(())
    }
}

// =============================================================================
// Portfolio Reducers
// =============================================================================

/// Sanctioned principal across a set of loans.
pub fn total_principal(loans: &[Loan]) -> Money {
    Money::from_cents(loans.iter().map(|l| l.principal_cents).sum())
}

/// Outstanding principal across a set of loans.
pub fn total_outstanding(loans: &[Loan]) -> Money {
    Money::from_cents(loans.iter().map(|l| l.outstanding().cents()).sum())
}

/// Everything repaid across a set of loans, interest included.
pub fn total_repaid(loans: &[Loan]) -> Money {
    Money::from_cents(loans.iter().map(|l| l.total_paid().cents()).sum())
}

/// How many loans carry a given status.
pub fn count_with_status(loans: &[Loan], status: LoanStatus) -> usize {
    loans.iter().filter(|l| l.status == status).count()
}

// =============================================================================
// Unit Tests
// =============================================================================
