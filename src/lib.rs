//! # einvoice
//!
//! EN 16931 electronic invoices: one in-memory model, parsers for the two
//! XML syntaxes (UN/CEFACT CII as used by ZUGFeRD/Factur-X, OASIS UBL 2.1
//! as used by PEPPOL and XRechnung), a CII writer, a totals calculator and a
//! validator that reports every business rule violation.
//!
//! All monetary values use [`rust_decimal::Decimal`]. Equality is by value,
//! so `370`, `370.00` and `370.000` are the same amount.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use einvoice::*;
//! use rust_decimal_macros::dec;
//!
//! let mut invoice = InvoiceBuilder::new("RE-2024-001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .seller(PartyBuilder::new("ACME GmbH")
//!         .address(AddressBuilder::new("Berlin", "10115", "DE").build())
//!         .vat_id("DE123456789")
//!         .build())
//!     .buyer(PartyBuilder::new("Kunde AG")
//!         .address(AddressBuilder::new("München", "80331", "DE").build())
//!         .build())
//!     .add_line(LineBuilder::new("1", "Beratung", dec!(10), "HUR", dec!(150))
//!         .tax(TaxCategory::StandardRate, dec!(19))
//!         .build())
//!     .payment_terms("Zahlbar innerhalb von 30 Tagen")
//!     .build();
//!
//! assert!(invoice.validate().is_ok());
//! assert_eq!(invoice.totals.grand_total, dec!(1785.00));
//!
//! let xml = invoice.to_cii_string().unwrap();
//! let parsed = einvoice::parse_bytes(xml.as_bytes()).unwrap();
//! assert_eq!(parsed.number, "RE-2024-001");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `xml` (default) | CII/UBL parsing, CII writing, format detection |
//! | `all` | Everything |
//!
//! Without `xml` the model, builders, totals, rule catalogue and validator
//! remain available.

pub mod core;
pub mod rules;
mod validate;

#[cfg(feature = "xml")]
pub mod cii;

#[cfg(feature = "xml")]
mod router;

#[cfg(feature = "xml")]
pub mod ubl;

#[cfg(feature = "xml")]
mod xml;

// Re-export core types at crate root for convenience
pub use crate::core::*;

#[cfg(feature = "xml")]
pub use router::{Format, parse_bytes, parse_reader, parse_xml_file};
