//! Code list lookups: UNTDID 1001 document types and UNCL 4451 text
//! subject qualifiers.
//!
//! The tables hold the subsets EN 16931 permits. Both are sorted by code
//! for binary search.

/// UNTDID 1001 document type codes allowed for BT-3, with their names.
static DOCUMENT_TYPES: &[(u16, &str)] = &[
    (71, "Request for payment"),
    (80, "Debit note related to goods or services"),
    (81, "Credit note related to goods or services"),
    (82, "Metered services invoice"),
    (83, "Credit note related to financial adjustments"),
    (84, "Debit note related to financial adjustments"),
    (102, "Tax notification"),
    (130, "Invoicing data sheet"),
    (202, "Direct payment valuation"),
    (203, "Provisional payment valuation"),
    (204, "Payment valuation"),
    (211, "Interim application for payment"),
    (218, "Final payment request based on completion of work"),
    (219, "Payment request for completed units"),
    (261, "Self billed credit note"),
    (262, "Consolidated credit note - goods and services"),
    (295, "Price variation invoice"),
    (296, "Credit note for price variation"),
    (308, "Delcredere credit note"),
    (325, "Proforma invoice"),
    (326, "Partial invoice"),
    (331, "Commercial invoice which includes a packing list"),
    (380, "Commercial invoice"),
    (381, "Credit note"),
    (382, "Commission note"),
    (383, "Debit note"),
    (384, "Corrected invoice"),
    (385, "Consolidated invoice"),
    (386, "Prepayment invoice"),
    (387, "Hire invoice"),
    (388, "Tax invoice"),
    (389, "Self-billed invoice"),
    (390, "Delcredere invoice"),
    (393, "Factored invoice"),
    (394, "Lease invoice"),
    (395, "Consignment invoice"),
    (396, "Factored credit note"),
    (420, "Optical Character Reading (OCR) payment credit note"),
    (456, "Debit advice"),
    (457, "Reversal of debit"),
    (458, "Reversal of credit"),
    (527, "Self billed debit note"),
    (532, "Forwarder's credit note"),
    (553, "Forwarder's invoice discrepancy report"),
    (575, "Insurer's invoice"),
    (623, "Forwarder's invoice"),
    (633, "Port charges documents"),
    (751, "Invoice information for accounting purposes"),
    (780, "Freight invoice"),
    (817, "Claim notification"),
    (870, "Consular invoice"),
    (875, "Partial construction invoice"),
    (876, "Partial final construction invoice"),
    (877, "Final construction invoice"),
    (935, "Customs invoice"),
];

/// Credit note document types. A UBL document of one of these types is
/// normally a `CreditNote`.
static CREDIT_NOTE_TYPES: &[u16] = &[81, 83, 261, 262, 296, 308, 381, 396, 420, 458, 532];

/// UNCL 4451 text subject qualifiers allowed for BT-21.
static TEXT_SUBJECTS: &[(&str, &str)] = &[
    ("AAA", "Goods item description"),
    ("AAB", "Payment term"),
    ("AAC", "Dangerous goods additional information"),
    ("AAI", "General information"),
    ("AAJ", "Additional conditions of sale/purchase"),
    ("AAK", "Price conditions"),
    ("ACB", "Additional information"),
    ("ADU", "Note"),
    ("PMD", "Payment detail/remittance information"),
    ("PMT", "Payment information"),
    ("REG", "Regulatory information"),
    ("SUR", "Supplier remarks"),
    ("TXD", "Tax declaration"),
    ("ZZZ", "Mutually defined"),
];

/// Name of a UNTDID 1001 document type code.
pub fn document_type_name(code: u16) -> Option<&'static str> {
    DOCUMENT_TYPES
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|i| DOCUMENT_TYPES[i].1)
}

/// Whether `code` is an allowed BT-3 document type.
pub fn is_known_document_type(code: u16) -> bool {
    document_type_name(code).is_some()
}

/// Whether `code` denotes a credit note.
pub fn is_credit_note(code: u16) -> bool {
    CREDIT_NOTE_TYPES.binary_search(&code).is_ok()
}

/// Name of a UNCL 4451 text subject qualifier.
pub fn text_subject_name(code: &str) -> Option<&'static str> {
    TEXT_SUBJECTS
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|i| TEXT_SUBJECTS[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(DOCUMENT_TYPES.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(CREDIT_NOTE_TYPES.windows(2).all(|w| w[0] < w[1]));
        assert!(TEXT_SUBJECTS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn document_types() {
        assert_eq!(document_type_name(380), Some("Commercial invoice"));
        assert_eq!(document_type_name(381), Some("Credit note"));
        assert!(is_known_document_type(389));
        assert!(!is_known_document_type(0));
        assert!(!is_known_document_type(999));
    }

    #[test]
    fn credit_notes() {
        assert!(is_credit_note(381));
        assert!(is_credit_note(261));
        assert!(!is_credit_note(380));
    }

    #[test]
    fn text_subjects() {
        assert_eq!(text_subject_name("REG"), Some("Regulatory information"));
        assert!(text_subject_name("XXX").is_none());
        assert!(text_subject_name("").is_none());
    }
}
