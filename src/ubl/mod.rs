//! OASIS UBL 2.1 `Invoice` and `CreditNote` documents, as used by
//! PEPPOL BIS Billing 3.0 and XRechnung-UBL.
//!
//! Only reading is supported. Write UBL input back out as CII with
//! [`crate::cii::to_cii_xml`].

mod parse;

pub(crate) use parse::parse_document;
pub use parse::from_ubl_xml;

/// UBL namespace URIs.
pub mod ns {
    pub const INVOICE: &str = "urn:oasis:names:specification:ubl:schema:xsd:Invoice-2";
    pub const CREDIT_NOTE: &str = "urn:oasis:names:specification:ubl:schema:xsd:CreditNote-2";
    pub const CAC: &str =
        "urn:oasis:names:specification:ubl:schema:xsd:CommonAggregateComponents-2";
    pub const CBC: &str = "urn:oasis:names:specification:ubl:schema:xsd:CommonBasicComponents-2";
}

pub(crate) static PREFIXES: crate::xml::Bindings = &[
    ("inv", ns::INVOICE),
    ("cn", ns::CREDIT_NOTE),
    ("cac", ns::CAC),
    ("cbc", ns::CBC),
];
