//! # Demo Dataset Printer
//!
//! Prints one month of the Weft back office on stdout: a proforma invoice,
//! its letter of credit, party ledgers, the daily book, delivery tracking,
//! and a loan schedule, each with its CSV export.
//!
//! ## Usage
//! ```bash
//! # Print the sample month (July 2025)
//! cargo run -p weft-reports --bin demo
//!
//! # Pick another daily book month
//! cargo run -p weft-reports --bin demo -- --month 2025-08
//! ```
//!
//! ## Sample Dataset
//! The data mirrors a real export cycle:
//! - A label PI priced per dozen, with its words line
//! - An export LC with a half-complete document checklist
//! - A customer and a supplier ledger
//! - Two months of daily book vouchers
//! - Two products under delivery tracking, one delayed
//! - A bank loan part-way through repayment

use std::env;

use chrono::{NaiveDate, Utc};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use weft_core::format::{format_currency, format_number};
use weft_core::lc::{DocumentChecklist, LetterOfCredit};
use weft_core::ledger::{
    total_payables, total_receivables, DailyBook, DailyEntry, LedgerEntry, PartyLedger, PartySide,
};
use weft_core::loan::{Loan, Repayment};
use weft_core::pi::{generate_pi_no, LabelItem, PiHeader, PiKind, ProformaInvoice};
use weft_core::tracking::TrackedProduct;
use weft_core::{
    amount_in_words, new_id, Buyer, CoreError, LcStatus, LoanStatus, LoanType, PiStatus, Vendor,
    VoucherType,
};
use weft_reports::{
    CompanyConfig, DailyBookReport, LedgerStatement, LoanSchedule, TrackingReport,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut year = 2025i32;
    let mut month = 7u32;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--month" | "-m" => {
                if i + 1 < args.len() {
                    if let Some((y, m)) = parse_month(&args[i + 1]) {
                        year = y;
                        month = m;
                    }
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Weft Demo Dataset Printer");
                println!();
                println!("Usage: demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -m, --month <YYYY-MM>  Daily book month to print (default: 2025-07)");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = CompanyConfig::from_env();
    info!(year, month, company = %config.company_name, "Printing demo dataset");

    println!("🧵 Weft Demo Dataset");
    println!("====================");
    println!("{}", config.letterhead());
    println!();

    // Proforma invoice
    let pi = sample_pi();
    println!("── Proforma Invoice ──");
    println!("PI No:  {}", pi.pi_no());
    println!("Buyer:  {}", pi.header().buyer.name);
    println!("Total:  {}", format_currency(pi.total_amount()));
    println!("Words:  {}", pi.total_amount().in_words()?);
    println!("✓ Proforma invoice priced");
    println!();

    // Letter of credit
    let lc = sample_lc(pi.pi_no());
    let today = ymd(2025, 7, 15);
    println!("── Letter of Credit ──");
    println!("LC No:     {}", lc.lc_no);
    println!("Amount:    {}", format_currency(lc.amount()));
    println!("Tenor:     {} days sight", lc.sight_days_or_default());
    println!("Documents: {}% ready", lc.documents.progress_percent());
    println!("Expiry:    {} days away", lc.days_to_expiry(today));
    println!("Bill of exchange: {}", lc.amount_in_words()?.to_uppercase());
    println!("✓ Letter of credit checked");
    println!();

    // Party ledgers
    let customer = sample_customer_ledger();
    let supplier = sample_supplier_ledger();

    println!("── Party Ledger ──");
    let statement = LedgerStatement::build(&customer)?;
    println!("{} ({})", statement.party_name, statement.side);
    print!("{}", statement.to_csv()?);
    println!("In words: {}", statement.balance_in_words);
    println!();

    let ledgers = vec![customer, supplier];
    println!("Receivables: {}", format_currency(total_receivables(&ledgers)));
    println!("Payables:    {}", format_currency(total_payables(&ledgers)));
    println!("✓ Ledgers balanced");
    println!();

    // Daily book
    let book = sample_daily_book();
    let report = DailyBookReport::build(&book, year, month);
    println!("── Daily Book: {} ──", report.month_label);
    print!("{}", report.to_csv()?);
    println!("✓ Daily book closed");
    println!();

    // Delivery tracking
    let products = sample_tracking()?;
    let tracking = TrackingReport::build(&products);
    println!("── Delivery Tracking ──");
    print!("{}", tracking.to_csv()?);
    println!("Stats: {}", serde_json::to_string_pretty(&tracking.stats)?);
    println!("✓ Tracking sheet printed");
    println!();

    // Loan schedule
    let loan = sample_loan()?;
    let schedule = LoanSchedule::build(&loan);
    println!("── Loan Schedule: {} ──", schedule.loan_no);
    println!("{} ({}, {})", schedule.lender, schedule.loan_type, schedule.status);
    print!("{}", schedule.to_csv()?);
    println!(
        "Outstanding: {} ({}% repaid)",
        schedule.outstanding, schedule.progress_percent
    );
    println!("✓ Loan schedule printed");
    println!();

    // Words showcase
    println!("── Amounts in Words ──");
    for amount in [0.0, 0.5, 1.0, 160.0, 1234.56, 999_999.99] {
        println!("  {:>12}  {}", format_number(amount, 2), amount_in_words(amount)?);
    }
    println!();
    println!("✓ Demo complete!");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=weft=trace` - Show trace for weft crates only
/// - Default: INFO level, DEBUG for weft crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,weft=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

/// Parses "YYYY-MM" into a (year, month) pair.
fn parse_month(value: &str) -> Option<(i32, u32)> {
    let (y, m) = value.split_once('-')?;
    let year = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Known-valid calendar dates for the sample set.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn sample_pi() -> ProformaInvoice {
    let date = ymd(2025, 3, 2);
    ProformaInvoice::Labels {
        header: PiHeader {
            id: new_id(),
            pi_no: generate_pi_no(Vendor::FashionRepublic, PiKind::Labels, date, 1),
            date,
            buyer: Buyer::new("Nordic Outfitters AB", "Sveavagen 10", "Stockholm, Sweden"),
            merchandiser: "S. Rahman".to_string(),
            vendor: Vendor::FashionRepublic,
            terms: "At sight against export LC".to_string(),
            status: PiStatus::Confirmed,
        },
        style_no: "NO-2251".to_string(),
        items: vec![
            LabelItem {
                description: "Woven Main Label".to_string(),
                color: "Black/Gold".to_string(),
                net_weight_kg: 12.5,
                gross_weight_kg: 13.2,
                quantity_pcs: 64_000,
                unit_price_per_dzn_cents: 3,
            },
            LabelItem {
                description: "Care Label".to_string(),
                color: "White".to_string(),
                net_weight_kg: 6.0,
                gross_weight_kg: 6.4,
                quantity_pcs: 24_000,
                unit_price_per_dzn_cents: 5,
            },
        ],
    }
}

fn sample_lc(pi_no: &str) -> LetterOfCredit {
    LetterOfCredit {
        id: new_id(),
        lc_no: "123456789012".to_string(),
        btb_lc_no: Some("BTB-2025-0077".to_string()),
        opening_date: ymd(2025, 3, 20),
        issuing_bank: "Standard Bank, Gulshan Branch".to_string(),
        pi_reference: pi_no.to_string(),
        applicant: "Nordic Outfitters AB".to_string(),
        applicant_address: "Sveavagen 10, Stockholm, Sweden".to_string(),
        beneficiary: "Fashion Republic".to_string(),
        beneficiary_address: "Uttara, Dhaka 1230".to_string(),
        amount_cents: 3_152_550,
        currency: "USD".to_string(),
        expiry_date: ymd(2025, 9, 30),
        latest_shipment_date: ymd(2025, 9, 10),
        port_of_loading: "Chattogram, Bangladesh".to_string(),
        port_of_discharge: "Gothenburg, Sweden".to_string(),
        status: LcStatus::Active,
        sight_days: Some(90),
        documents: DocumentChecklist {
            bill_of_exchange: true,
            delivery_challan: true,
            commercial_invoice: true,
            packing_list: false,
            beneficiary_certificate: false,
            certificate_of_origin: false,
        },
    }
}

fn ledger_entry(
    date: NaiveDate,
    particulars: &str,
    reference: &str,
    debit: i64,
    credit: i64,
) -> LedgerEntry {
    LedgerEntry {
        id: new_id(),
        date,
        particulars: particulars.to_string(),
        reference: reference.to_string(),
        debit_cents: debit,
        credit_cents: credit,
    }
}

fn sample_customer_ledger() -> PartyLedger {
    let mut ledger = PartyLedger::new("Rahim Traders", PartySide::Customer);
    ledger.append(ledger_entry(
        ymd(2025, 1, 2),
        "Export proceeds",
        "PI FR-03/25 (01)",
        293_333,
        0,
    ));
    ledger.append(ledger_entry(ymd(2025, 1, 15), "TT received", "TT-4471", 0, 150_000));
    ledger
}

fn sample_supplier_ledger() -> PartyLedger {
    let mut ledger = PartyLedger::new("Dhaka Yarn House", PartySide::Supplier);
    ledger.append(ledger_entry(ymd(2025, 1, 5), "Yarn purchase", "CH-1108", 0, 130_000));
    ledger.append(ledger_entry(ymd(2025, 1, 28), "Part payment", "CHQ-0042", 50_000, 0));
    ledger
}

fn voucher(
    date: NaiveDate,
    voucher_no: &str,
    voucher_type: VoucherType,
    particulars: &str,
    account_head: &str,
    debit: i64,
    credit: i64,
) -> DailyEntry {
    DailyEntry {
        id: new_id(),
        date,
        voucher_no: voucher_no.to_string(),
        voucher_type,
        particulars: particulars.to_string(),
        account_head: account_head.to_string(),
        debit_cents: debit,
        credit_cents: credit,
        narration: String::new(),
        created_by: "accounts".to_string(),
    }
}

fn sample_daily_book() -> DailyBook {
    DailyBook {
        entries: vec![
            voucher(
                ymd(2025, 7, 3),
                "PV-0101",
                VoucherType::Payment,
                "Factory conveyance",
                "Conveyance",
                45_000,
                0,
            ),
            voucher(
                ymd(2025, 7, 3),
                "RV-0102",
                VoucherType::Receipt,
                "Export proceeds received",
                "Bank",
                0,
                200_000,
            ),
            voucher(
                ymd(2025, 7, 10),
                "PV-0103",
                VoucherType::Payment,
                "Courier charges",
                "Courier",
                30_000,
                0,
            ),
            voucher(
                ymd(2025, 8, 1),
                "PV-0104",
                VoucherType::Payment,
                "Office rent",
                "Rent",
                50_000,
                0,
            ),
        ],
    }
}

fn sample_tracking() -> Result<Vec<TrackedProduct>, CoreError> {
    let now = Utc::now();

    let mut label = TrackedProduct::new(
        "FR-03/25 (01)",
        "WV-1044",
        "Woven Main Label",
        Some("Black/Gold".to_string()),
        64_000,
        now,
    );
    label.record_delivery(24_000, "Karim", now)?;

    let mut fabric = TrackedProduct::new(
        "MT-07/25SP (04)",
        "FB-2001",
        "Single Jersey Fabric",
        None,
        12_000,
        now,
    );
    fabric.mark_delayed();

    Ok(vec![label, fabric])
}

fn sample_loan() -> Result<Loan, CoreError> {
    let mut loan = Loan {
        id: new_id(),
        loan_no: "BL-2023-001".to_string(),
        loan_type: LoanType::Bank,
        lender: "National Bank Ltd.".to_string(),
        principal_cents: 5_000_000_00,
        interest_rate_bps: 1250,
        tenure_months: 36,
        start_date: ymd(2023, 6, 1),
        end_date: ymd(2026, 6, 1),
        emi_cents: 167_500_00,
        status: LoanStatus::Active,
        repayments: Vec::new(),
    };
    loan.record_repayment(Repayment {
        id: new_id(),
        date: ymd(2023, 7, 1),
        amount_cents: 1_302_000_00,
        principal_cents: 1_250_000_00,
        interest_cents: 52_000_00,
    })?;
    loan.record_repayment(Repayment {
        id: new_id(),
        date: ymd(2023, 8, 1),
        amount_cents: 1_298_500_00,
        principal_cents: 1_250_000_00,
        interest_cents: 48_500_00,
    })?;
    Ok(loan)
}
