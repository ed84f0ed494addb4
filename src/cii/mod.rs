//! UN/CEFACT Cross Industry Invoice (CII D16B) as used by ZUGFeRD 2.x,
//! Factur-X and XRechnung-CII.
//!
//! ```
//! use einvoice::cii;
//!
//! let xml = r#"<rsm:CrossIndustryInvoice
//!     xmlns:rsm="urn:un:unece:uncefact:data:standard:CrossIndustryInvoice:100"
//!     xmlns:ram="urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:100">
//!   <rsm:ExchangedDocument><ram:ID>471102</ram:ID></rsm:ExchangedDocument>
//! </rsm:CrossIndustryInvoice>"#;
//! let invoice = cii::from_cii_xml(xml).unwrap();
//! assert_eq!(invoice.number, "471102");
//! ```

mod parse;
mod write;

pub(crate) use parse::parse_document;
pub use parse::from_cii_xml;
pub use write::to_cii_xml;
pub(crate) use write::write_cii;

/// CII namespace URIs.
pub mod ns {
    pub const RSM: &str = "urn:un:unece:uncefact:data:standard:CrossIndustryInvoice:100";
    pub const RAM: &str =
        "urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:100";
    pub const QDT: &str = "urn:un:unece:uncefact:data:standard:QualifiedDataType:100";
    pub const UDT: &str = "urn:un:unece:uncefact:data:standard:UnqualifiedDataType:100";
    pub const XS: &str = "http://www.w3.org/2001/XMLSchema";
}

pub(crate) static PREFIXES: crate::xml::Bindings = &[
    ("rsm", ns::RSM),
    ("ram", ns::RAM),
    ("qdt", ns::QDT),
    ("udt", ns::UDT),
];
