//! Syntax detection and the read/write entry points.

use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::core::{Invoice, InvoiceError};
use crate::xml::Document;
use crate::{cii, ubl};

/// Concrete XML syntax of an invoice document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// UN/CEFACT Cross Industry Invoice.
    Cii,
    /// OASIS UBL 2.1 Invoice or CreditNote.
    Ubl,
}

impl Format {
    /// Syntax for a root element namespace URI.
    pub fn from_namespace(uri: &str) -> Option<Self> {
        match uri {
            cii::ns::RSM => Some(Self::Cii),
            ubl::ns::INVOICE | ubl::ns::CREDIT_NOTE => Some(Self::Ubl),
            _ => None,
        }
    }
}

/// Read an invoice from a byte stream, detecting CII or UBL from the root
/// element namespace.
pub fn parse_reader(mut reader: impl Read) -> Result<Invoice, InvoiceError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_bytes(&bytes)
}

/// Read an invoice from an in-memory document.
pub fn parse_bytes(bytes: &[u8]) -> Result<Invoice, InvoiceError> {
    let doc = Document::parse(bytes)?;
    let root = doc.root();
    let namespace = root.namespace();
    let format = Format::from_namespace(namespace)
        .ok_or_else(|| InvoiceError::UnknownNamespace(namespace.to_string()))?;
    debug!(?format, namespace, root = root.local_name(), "detected invoice syntax");
    match format {
        Format::Cii => cii::parse_document(root),
        Format::Ubl => ubl::parse_document(root),
    }
}

/// Read an invoice from an XML file.
pub fn parse_xml_file(path: impl AsRef<Path>) -> Result<Invoice, InvoiceError> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes)
}

impl Invoice {
    /// Write the invoice as CII XML.
    pub fn write(&self, sink: impl Write) -> Result<(), InvoiceError> {
        self.write_as(Format::Cii, sink)
    }

    /// Write the invoice in the given syntax. Only [`Format::Cii`] can be
    /// written; [`Format::Ubl`] yields [`InvoiceError::UnsupportedFormat`].
    pub fn write_as(&self, format: Format, mut sink: impl Write) -> Result<(), InvoiceError> {
        match format {
            Format::Cii => {
                let bytes = cii::write_cii(self)?;
                sink.write_all(&bytes)?;
                sink.flush()?;
                Ok(())
            }
            Format::Ubl => Err(InvoiceError::UnsupportedFormat),
        }
    }

    /// The invoice as a CII XML string.
    pub fn to_cii_string(&self) -> Result<String, InvoiceError> {
        cii::to_cii_xml(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_syntax_by_namespace() {
        assert_eq!(Format::from_namespace(cii::ns::RSM), Some(Format::Cii));
        assert_eq!(Format::from_namespace(ubl::ns::INVOICE), Some(Format::Ubl));
        assert_eq!(Format::from_namespace(ubl::ns::CREDIT_NOTE), Some(Format::Ubl));
        assert_eq!(Format::from_namespace(""), None);
        assert_eq!(Format::from_namespace("urn:example"), None);
    }

    #[test]
    fn unknown_namespace_is_rejected() {
        let err = parse_bytes(b"<Invoice><ID>1</ID></Invoice>").unwrap_err();
        assert_eq!(err.to_string(), "unknown root element namespace \"\"");

        let err = parse_bytes(br#"<a:Doc xmlns:a="urn:example"/>"#).unwrap_err();
        assert!(matches!(err, InvoiceError::UnknownNamespace(ns) if ns == "urn:example"));
    }

    #[test]
    fn ubl_writing_is_refused() {
        let err = Invoice::default()
            .write_as(Format::Ubl, Vec::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "UBL writing is not supported yet");
    }

    #[test]
    fn reader_errors_surface_as_io() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("boom"))
            }
        }
        assert!(matches!(parse_reader(Broken), Err(InvoiceError::Io(_))));
    }
}
