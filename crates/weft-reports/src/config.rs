//! # Company Configuration
//!
//! Letterhead and currency settings stamped onto every printed report.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`WEFT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use weft_core::Vendor;

/// Company configuration for report headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyConfig {
    /// Company name (printed at the top of every report)
    pub company_name: String,

    /// Address lines under the company name
    pub address: Vec<String>,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Vendor letterhead used when a document names none
    pub default_vendor: Vendor,
}

impl Default for CompanyConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Company: "Weft Apparels Ltd.", Dhaka address
    /// - Currency: USD ($) - export orders are priced in dollars
    /// - Vendor: Fashion Republic
    fn default() -> Self {
        CompanyConfig {
            company_name: "Weft Apparels Ltd.".to_string(),
            address: vec![
                "House 12, Road 5, Sector 10".to_string(),
                "Uttara, Dhaka 1230".to_string(),
            ],
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            default_vendor: Vendor::FashionRepublic,
        }
    }
}

impl CompanyConfig {
    /// Creates a CompanyConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `WEFT_COMPANY_NAME`: Override company name
    /// - `WEFT_CURRENCY_CODE`: Override currency code
    /// - `WEFT_CURRENCY_SYMBOL`: Override currency symbol
    /// - `WEFT_DEFAULT_VENDOR`: "fashion_republic"/"FR" or "moon_textile"/"MT"
    pub fn from_env() -> Self {
        let mut config = CompanyConfig::default();

        if let Ok(name) = std::env::var("WEFT_COMPANY_NAME") {
            config.company_name = name;
        }

        if let Ok(code) = std::env::var("WEFT_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Ok(symbol) = std::env::var("WEFT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(vendor) = std::env::var("WEFT_DEFAULT_VENDOR") {
            if let Some(vendor) = parse_vendor(&vendor) {
                config.default_vendor = vendor;
            }
        }

        config
    }

    /// Letterhead block: company name over its address lines.
    pub fn letterhead(&self) -> String {
        let mut lines = Vec::with_capacity(1 + self.address.len());
        lines.push(self.company_name.as_str());
        lines.extend(self.address.iter().map(|l| l.as_str()));
        lines.join("\n")
    }
}

/// Parses a vendor from an environment variable value.
///
/// Accepts the snake_case wire name or the two-letter invoice prefix.
fn parse_vendor(value: &str) -> Option<Vendor> {
    match value.trim() {
        "fashion_republic" | "FR" => Some(Vendor::FashionRepublic),
        "moon_textile" | "MT" => Some(Vendor::MoonTextile),
        _ => None,
    }
}
