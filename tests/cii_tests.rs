#![cfg(feature = "xml")]

use chrono::NaiveDate;
use einvoice::rules::*;
use einvoice::*;
use rust_decimal_macros::dec;

const MINIMUM: &str = include_str!("fixtures/cii_minimum.xml");
const EN16931: &str = include_str!("fixtures/cii_en16931.xml");

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The EN 16931 fixture with one substring replaced.
fn en16931_with(from: &str, to: &str) -> String {
    let xml = EN16931.replacen(from, to, 1);
    assert_ne!(xml, EN16931, "fixture does not contain {from:?}");
    xml
}

// ---------------------------------------------------------------------------
// Minimum profile
// ---------------------------------------------------------------------------

#[test]
fn minimum_profile_invoice() {
    let inv = cii::from_cii_xml(MINIMUM).unwrap();

    assert_eq!(inv.number, "471102");
    assert_eq!(inv.profile, Profile::Minimum);
    assert_eq!(inv.specification_id, "urn:factur-x.eu:1p0:minimum");
    assert_eq!(inv.business_process.as_deref(), Some("A1"));
    assert_eq!(inv.issue_date, Some(date(2020, 3, 5)));
    assert_eq!(inv.type_code, InvoiceTypeCode::COMMERCIAL);
    assert_eq!(inv.currency, "EUR");
    assert!(inv.lines.is_empty());

    assert_eq!(inv.seller.name, "Lieferant GmbH");
    assert_eq!(inv.seller.country_code(), "DE");
    assert_eq!(inv.seller.vat_id.as_deref(), Some("DE123456789"));
    assert_eq!(inv.seller.tax_registration.as_deref(), Some("201/113/40209"));
    assert_eq!(inv.buyer.name, "Kunden AG Mitte");
    assert!(inv.buyer.postal_address.is_none());

    assert_eq!(inv.totals.tax_basis_total, dec!(198.00));
    assert_eq!(inv.totals.tax_total, dec!(37.62));
    assert_eq!(inv.totals.grand_total, dec!(235.62));
    assert_eq!(inv.totals.due_payable, dec!(235.62));
    assert!(!inv.presence.line_total);
    assert!(inv.presence.grand_total);
}

#[test]
fn minimum_profile_does_not_require_buyer_address_or_line_total() {
    let mut inv = cii::from_cii_xml(MINIMUM).unwrap();
    let err = inv.validate().unwrap_err();
    assert!(!err.has_rule(&BR_10));
    assert!(!err.has_rule(&BR_12));
    assert!(!err.has_rule(&BR_16));
}

// ---------------------------------------------------------------------------
// EN 16931 profile
// ---------------------------------------------------------------------------

#[test]
fn en16931_header_and_references() {
    let inv = cii::from_cii_xml(EN16931).unwrap();

    assert_eq!(inv.profile, Profile::En16931);
    assert_eq!(inv.number, "RE-2024-0815");
    assert_eq!(inv.issue_date, Some(date(2024, 2, 5)));
    assert_eq!(inv.notes.len(), 2);
    assert_eq!(inv.notes[0].subject_code, None);
    assert_eq!(inv.notes[1].subject_code.as_deref(), Some("REG"));
    assert_eq!(inv.buyer_reference.as_deref(), Some("04011000-12345-34"));
    assert_eq!(inv.purchase_order_reference.as_deref(), Some("6171175"));
    assert_eq!(inv.contract_reference.as_deref(), Some("V-2023-17"));
    assert_eq!(inv.delivery_date, Some(date(2024, 1, 31)));
    assert_eq!(inv.billing_period, Period::new(date(2024, 1, 1), date(2024, 1, 31)));
    assert!(inv.presence.billing_period);

    let project = inv.project.as_ref().unwrap();
    assert_eq!(project.id, "P-12");
    assert_eq!(project.name.as_deref(), Some("Büroausstattung"));
}

#[test]
fn en16931_attachment_is_decoded() {
    let inv = cii::from_cii_xml(EN16931).unwrap();

    assert_eq!(inv.supporting_documents.len(), 1);
    let doc = &inv.supporting_documents[0];
    assert_eq!(doc.id, "LS-4711");
    assert_eq!(doc.type_code.as_deref(), Some("916"));
    assert_eq!(doc.description.as_deref(), Some("Lieferschein"));
    let attachment = doc.attachment.as_ref().unwrap();
    assert_eq!(attachment.data, b"Hello");
    assert_eq!(attachment.mime_code, "text/plain");
    assert_eq!(attachment.filename, "lieferschein.txt");
}

#[test]
fn en16931_parties() {
    let inv = cii::from_cii_xml(EN16931).unwrap();

    let seller = &inv.seller;
    assert_eq!(seller.name, "Lieferant GmbH");
    assert_eq!(seller.ids, vec!["549910".to_string()]);
    assert_eq!(seller.global_ids, vec![SchemedId::new("0088", "4000001123452")]);
    let legal = seller.legal_organization.as_ref().unwrap();
    assert_eq!(legal.id.as_deref(), Some("HRB 46"));
    assert_eq!(legal.scheme.as_deref(), Some("0002"));
    assert_eq!(legal.trading_name.as_deref(), Some("Lieferant"));
    assert_eq!(seller.contacts.len(), 1);
    assert_eq!(seller.contacts[0].person_name.as_deref(), Some("Hans Muster"));
    assert_eq!(seller.contacts[0].department.as_deref(), Some("Buchhaltung"));
    assert_eq!(seller.contacts[0].phone.as_deref(), Some("+49 30 1234567"));
    assert_eq!(seller.contacts[0].email.as_deref(), Some("rechnung@lieferant.de"));
    let address = seller.postal_address.as_ref().unwrap();
    assert_eq!(address.line1.as_deref(), Some("Lieferantenstraße 20"));
    assert_eq!(address.city.as_deref(), Some("München"));
    assert_eq!(address.postcode.as_deref(), Some("80333"));
    assert_eq!(address.country_code, "DE");
    let endpoint = seller.electronic_address.as_ref().unwrap();
    assert_eq!(endpoint.scheme, "EM");
    assert_eq!(endpoint.uri, "rechnung@lieferant.de");
    assert_eq!(seller.vat_id.as_deref(), Some("DE123456789"));
    assert_eq!(seller.tax_registration.as_deref(), Some("201/113/40209"));

    let buyer = &inv.buyer;
    assert_eq!(buyer.name, "Kunden AG Mitte");
    assert_eq!(buyer.ids, vec!["GE2020211".to_string()]);
    let address = buyer.postal_address.as_ref().unwrap();
    assert_eq!(address.line1.as_deref(), Some("Hans Muster"));
    assert_eq!(address.line2.as_deref(), Some("Kundenstraße 15"));
    assert_eq!(buyer.vat_id, None);
}

#[test]
fn en16931_lines() {
    let inv = cii::from_cii_xml(EN16931).unwrap();
    assert_eq!(inv.lines.len(), 2);

    let first = &inv.lines[0];
    assert_eq!(first.id, "1");
    assert_eq!(first.note.as_deref(), Some("Aktionsware"));
    assert_eq!(first.item.name, "Trennblätter A4");
    assert_eq!(first.item.description.as_deref(), Some("50er Pack, farbig sortiert"));
    assert_eq!(first.item.seller_id.as_deref(), Some("TB100A4"));
    assert_eq!(first.item.standard_id, Some(SchemedId::new("0160", "4012345001235")));
    assert_eq!(first.item.origin_country.as_deref(), Some("DE"));
    assert_eq!(first.item.attributes[0].name, "Farbe");
    assert_eq!(first.item.attributes[0].value, "sortiert");
    assert_eq!(first.item.classifications[0].code, "44122000");
    assert_eq!(first.item.classifications[0].list_id.as_deref(), Some("TST"));
    assert_eq!(first.item.classifications[0].list_version.as_deref(), Some("1.0"));
    assert_eq!(first.order_line_reference.as_deref(), Some("6171175.1"));
    assert_eq!(first.gross_price, Some(dec!(10.00)));
    assert_eq!(first.price_allowance_charges.len(), 1);
    assert_eq!(first.price_allowance_charges[0].actual_amount, dec!(0.10));
    assert_eq!(first.net_price, dec!(9.90));
    assert_eq!(first.billed_quantity, dec!(20));
    assert_eq!(first.unit_code, "H87");
    assert_eq!(first.tax_type, "VAT");
    assert_eq!(first.tax_category, Some(TaxCategory::StandardRate));
    assert_eq!(first.tax_rate, Some(dec!(19)));
    assert_eq!(first.total, dec!(198.00));
    assert!(!first.period_present);

    let second = &inv.lines[1];
    assert_eq!(second.item.name, "Joghurt Banane");
    assert_eq!(second.billed_quantity, dec!(50));
    assert_eq!(second.unit_code, "C62");
    assert_eq!(second.tax_rate, Some(dec!(7)));
    assert_eq!(second.total, dec!(275.00));
}

#[test]
fn en16931_settlement() {
    let inv = cii::from_cii_xml(EN16931).unwrap();

    assert_eq!(inv.payment_reference.as_deref(), Some("RE-2024-0815"));
    assert_eq!(inv.payment_means.len(), 1);
    let means = &inv.payment_means[0];
    assert_eq!(means.type_code, Some(PaymentMeansCode::SepaCreditTransfer));
    assert_eq!(means.information.as_deref(), Some("SEPA Überweisung"));
    let account = means.payee_account.as_ref().unwrap();
    assert_eq!(account.iban.as_deref(), Some("DE02120300000000202051"));
    assert_eq!(account.name.as_deref(), Some("Lieferant GmbH"));
    assert_eq!(account.bic.as_deref(), Some("BYLADEM1001"));

    assert_eq!(inv.trade_taxes.len(), 2);
    assert_eq!(inv.trade_taxes[0].basis_amount, dec!(188.00));
    assert_eq!(inv.trade_taxes[0].calculated_amount, dec!(35.72));
    assert_eq!(inv.trade_taxes[1].rate, Some(dec!(7)));
    assert_eq!(inv.trade_taxes[1].calculated_amount, dec!(19.25));

    assert_eq!(inv.allowance_charges.len(), 1);
    let allowance = &inv.allowance_charges[0];
    assert!(!allowance.charge_indicator);
    assert_eq!(allowance.actual_amount, dec!(10.00));
    assert_eq!(allowance.reason_code.as_deref(), Some("95"));
    assert_eq!(allowance.tax_category, Some(TaxCategory::StandardRate));
    assert_eq!(allowance.tax_rate, Some(dec!(19)));

    assert_eq!(inv.payment_terms.len(), 1);
    assert_eq!(inv.payment_terms[0].due_date, Some(date(2024, 3, 6)));

    let t = &inv.totals;
    assert_eq!(t.line_total, dec!(473.00));
    assert_eq!(t.allowance_total, dec!(10.00));
    assert_eq!(t.tax_basis_total, dec!(463.00));
    assert_eq!(t.tax_total, dec!(54.97));
    assert_eq!(t.grand_total, dec!(517.97));
    assert_eq!(t.due_payable, dec!(517.97));
    assert!(inv.presence.line_total);
    assert!(inv.presence.tax_basis_total);
    assert!(inv.presence.due_payable);
    assert!(!inv.presence.tax_total_accounting);
    assert!(inv.unexpected_tax_currencies.is_empty());
}

#[test]
fn en16931_fixture_is_valid() {
    let mut inv = cii::from_cii_xml(EN16931).unwrap();
    if let Err(err) = inv.validate() {
        panic!("unexpected violations: {err}");
    }
    assert!(inv.violations.is_empty());
}

#[test]
fn prefixes_are_resolved_by_namespace() {
    let renamed = EN16931
        .replace("ram:", "r:")
        .replace("xmlns:ram=", "xmlns:r=");
    assert!(!renamed.contains("<ram:"));

    let original = cii::from_cii_xml(EN16931).unwrap();
    let parsed = cii::from_cii_xml(&renamed).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn parse_from_file_and_reader() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/cii_en16931.xml");
    let from_file = parse_xml_file(path).unwrap();
    let from_reader = parse_reader(EN16931.as_bytes()).unwrap();
    assert_eq!(from_file, from_reader);
    assert_eq!(from_file.number, "RE-2024-0815");
}

// ---------------------------------------------------------------------------
// Presence
// ---------------------------------------------------------------------------

#[test]
fn missing_buyer_country_reports_br_11() {
    let xml = en16931_with(
        "<ram:CityName>Frankfurt</ram:CityName>\n          <ram:CountryID>DE</ram:CountryID>",
        "<ram:CityName>Frankfurt</ram:CityName>",
    );
    let mut inv = cii::from_cii_xml(&xml).unwrap();
    let err = inv.validate().unwrap_err();

    let violation = err.iter().find(|v| v.rule.code == "BR-11").unwrap();
    assert_eq!(violation.primary_field(), "BT-55");
    assert_eq!(violation.rule.fields[0], "BT-55");
    assert!(!err.has_rule(&BR_10));
}

#[test]
fn empty_billing_period_reports_br_co_19() {
    // Move start and end into an element the parser ignores.
    let xml = en16931_with(
        "<ram:BillingSpecifiedPeriod>",
        "<ram:BillingSpecifiedPeriod/><ram:Ignored>",
    );
    let xml = xml.replacen("</ram:BillingSpecifiedPeriod>", "</ram:Ignored>", 1);
    let mut inv = cii::from_cii_xml(&xml).unwrap();

    assert!(inv.presence.billing_period);
    assert!(inv.billing_period.is_empty());
    let err = inv.validate().unwrap_err();
    assert!(err.has_rule(&BR_CO_19));
    assert_eq!(err.count(), 1);
}

#[test]
fn absent_billing_period_is_not_reported() {
    let xml = en16931_with("<ram:BillingSpecifiedPeriod>", "<ram:Ignored>");
    let xml = xml.replacen("</ram:BillingSpecifiedPeriod>", "</ram:Ignored>", 1);
    let mut inv = cii::from_cii_xml(&xml).unwrap();

    assert!(!inv.presence.billing_period);
    assert!(inv.validate().is_ok());
}

#[test]
fn missing_grand_total_element_reports_br_14() {
    let xml = en16931_with("<ram:GrandTotalAmount>517.97</ram:GrandTotalAmount>", "");
    let mut inv = cii::from_cii_xml(&xml).unwrap();
    assert!(!inv.presence.grand_total);
    let err = inv.validate().unwrap_err();
    assert!(err.has_rule(&BR_14));
}

// ---------------------------------------------------------------------------
// Tax total currencies
// ---------------------------------------------------------------------------

#[test]
fn unexpected_tax_total_currency() {
    let xml = en16931_with(
        r#"<ram:TaxTotalAmount currencyID="EUR">54.97</ram:TaxTotalAmount>"#,
        r#"<ram:TaxTotalAmount currencyID="GBP">47.00</ram:TaxTotalAmount>
        <ram:TaxTotalAmount currencyID="EUR">54.97</ram:TaxTotalAmount>"#,
    );
    let mut inv = cii::from_cii_xml(&xml).unwrap();

    assert_eq!(inv.totals.tax_total, dec!(54.97));
    assert_eq!(inv.unexpected_tax_currencies, vec!["GBP".to_string()]);
    let err = inv.validate().unwrap_err();
    assert!(err.has_rule(&TAX_TOTAL_CURRENCY));
    assert_eq!(err.count(), 1);
}

#[test]
fn repeated_invoice_currency_tax_total_is_not_unexpected() {
    let xml = en16931_with(
        r#"<ram:TaxTotalAmount currencyID="EUR">54.97</ram:TaxTotalAmount>"#,
        r#"<ram:TaxTotalAmount currencyID="EUR">50.00</ram:TaxTotalAmount>
        <ram:TaxTotalAmount currencyID="EUR">54.97</ram:TaxTotalAmount>"#,
    );
    let mut inv = cii::from_cii_xml(&xml).unwrap();

    assert_eq!(inv.totals.tax_total, dec!(54.97));
    assert!(inv.unexpected_tax_currencies.is_empty());
    assert!(inv.validate().is_ok());
}

#[test]
fn tax_totals_are_bound_by_currency() {
    let xml = en16931_with(
        "<ram:InvoiceCurrencyCode>EUR</ram:InvoiceCurrencyCode>",
        "<ram:TaxCurrencyCode>CHF</ram:TaxCurrencyCode>\n      <ram:InvoiceCurrencyCode>EUR</ram:InvoiceCurrencyCode>",
    );
    let xml = xml.replacen(
        r#"<ram:TaxTotalAmount currencyID="EUR">54.97</ram:TaxTotalAmount>"#,
        r#"<ram:TaxTotalAmount currencyID="CHF">52.10</ram:TaxTotalAmount>
        <ram:TaxTotalAmount currencyID="EUR">54.97</ram:TaxTotalAmount>"#,
        1,
    );
    let inv = cii::from_cii_xml(&xml).unwrap();

    assert_eq!(inv.tax_currency.as_deref(), Some("CHF"));
    assert_eq!(inv.totals.tax_total, dec!(54.97));
    assert_eq!(inv.totals.tax_total_accounting, dec!(52.10));
    assert!(inv.presence.tax_total_accounting);
    assert!(inv.unexpected_tax_currencies.is_empty());
}

#[test]
fn huge_quantity_reports_overflow() {
    let xml = en16931_with(
        r#"<ram:BilledQuantity unitCode="H87">20.0000</ram:BilledQuantity>"#,
        r#"<ram:BilledQuantity unitCode="H87">79228162514264337593543950335</ram:BilledQuantity>"#,
    );
    let mut inv = cii::from_cii_xml(&xml).unwrap();
    assert_eq!(inv.lines[0].billed_quantity, rust_decimal::Decimal::MAX);

    let err = inv.validate().unwrap_err();
    assert!(err.has_rule(&CALC_OVERFLOW));
    assert!(!err.has_rule(&CALC_LINE_TOTAL));
}

// ---------------------------------------------------------------------------
// Malformed input
// ---------------------------------------------------------------------------

#[test]
fn invalid_date_names_its_location() {
    let xml = en16931_with(
        r#"<udt:DateTimeString format="102">20240205</udt:DateTimeString>"#,
        r#"<udt:DateTimeString format="102">2024-02-05</udt:DateTimeString>"#,
    );
    match cii::from_cii_xml(&xml) {
        Err(InvoiceError::InvalidDate { value, path }) => {
            assert_eq!(value, "2024-02-05");
            assert_eq!(
                path,
                "/rsm:CrossIndustryInvoice/rsm:ExchangedDocument/ram:IssueDateTime/udt:DateTimeString"
            );
        }
        other => panic!("expected InvalidDate, got {other:?}"),
    }
}

#[test]
fn invalid_decimal_names_its_location() {
    let xml = en16931_with(
        "<ram:LineTotalAmount>473.00</ram:LineTotalAmount>",
        "<ram:LineTotalAmount>4,73</ram:LineTotalAmount>",
    );
    match cii::from_cii_xml(&xml) {
        Err(InvoiceError::InvalidDecimal { value, path }) => {
            assert_eq!(value, "4,73");
            assert!(path.ends_with(
                "/ram:SpecifiedTradeSettlementHeaderMonetarySummation/ram:LineTotalAmount"
            ));
        }
        other => panic!("expected InvalidDecimal, got {other:?}"),
    }
}

#[test]
fn non_numeric_type_code_is_rejected() {
    let xml = en16931_with("<ram:TypeCode>380</ram:TypeCode>", "<ram:TypeCode>X80</ram:TypeCode>");
    let err = cii::from_cii_xml(&xml).unwrap_err();
    assert!(matches!(err, InvoiceError::InvalidCode { ref value, .. } if value == "X80"));
}

#[test]
fn broken_attachment_is_rejected() {
    let xml = en16931_with("bG8=</ram:AttachmentBinaryObject>", "b*8=</ram:AttachmentBinaryObject>");
    let err = cii::from_cii_xml(&xml).unwrap_err();
    match err {
        InvoiceError::InvalidAttachment { path, .. } => {
            assert!(path.ends_with("ram:AdditionalReferencedDocument/ram:AttachmentBinaryObject"));
        }
        other => panic!("expected InvalidAttachment, got {other:?}"),
    }
}

#[test]
fn malformed_xml_is_rejected() {
    let err = cii::from_cii_xml("<rsm:CrossIndustryInvoice").unwrap_err();
    assert!(matches!(err, InvoiceError::Xml(_)));
}

#[test]
fn ubl_root_is_not_cii() {
    let xml = include_str!("fixtures/ubl_invoice.xml");
    let err = cii::from_cii_xml(xml).unwrap_err();
    assert!(matches!(err, InvoiceError::UnknownNamespace(_)));
}
