#![cfg(feature = "xml")]

use chrono::NaiveDate;
use einvoice::*;
use rust_decimal_macros::dec;

const EN16931: &str = include_str!("fixtures/cii_en16931.xml");
const MINIMUM: &str = include_str!("fixtures/cii_minimum.xml");
const UBL_INVOICE: &str = include_str!("fixtures/ubl_invoice.xml");

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn invoice() -> InvoiceBuilder {
    InvoiceBuilder::new("RE-2025-001", date(2025, 12, 31))
        .seller(
            PartyBuilder::new("ACME GmbH")
                .address(
                    AddressBuilder::new("Berlin", "10115", "DE")
                        .street("Friedrichstraße 123")
                        .build(),
                )
                .vat_id("DE123456789")
                .electronic_address("EM", "billing@acme.de")
                .build(),
        )
        .buyer(
            PartyBuilder::new("Kunde AG")
                .address(AddressBuilder::new("München", "80331", "DE").build())
                .electronic_address("EM", "ap@kunde.de")
                .build(),
        )
        .add_line(
            LineBuilder::new("1", "Beratung", dec!(10), "HUR", dec!(150))
                .tax(TaxCategory::StandardRate, dec!(19))
                .build(),
        )
        .payment_terms("Zahlbar innerhalb von 30 Tagen")
}

/// The text between `<tag>` and `</tag>`.
fn section<'a>(xml: &'a str, tag: &str) -> &'a str {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = xml.find(&open).unwrap_or_else(|| panic!("no {open}")) + open.len();
    let end = xml[start..].find(&close).unwrap() + start;
    &xml[start..end]
}

/// Presence is a property of the source document, not of the content.
fn without_presence(mut inv: Invoice) -> Invoice {
    inv.presence = Presence::default();
    for line in &mut inv.lines {
        line.period_present = false;
    }
    inv
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn en16931_fixture_round_trips() {
    let original = cii::from_cii_xml(EN16931).unwrap();
    let xml = cii::to_cii_xml(&original).unwrap();
    let reparsed = cii::from_cii_xml(&xml).unwrap();

    assert_eq!(without_presence(reparsed), without_presence(original));
}

#[test]
fn written_fixture_is_still_valid() {
    let original = cii::from_cii_xml(EN16931).unwrap();
    let xml = original.to_cii_string().unwrap();
    let mut reparsed = parse_bytes(xml.as_bytes()).unwrap();
    assert!(reparsed.validate().is_ok());
}

#[test]
fn builder_invoice_round_trips() {
    let inv = invoice()
        .note_with_subject("AAI", "Vielen Dank")
        .billing_period(date(2025, 12, 1), date(2025, 12, 31))
        .sepa_credit_transfer("DE89370400440532013000", Some("COBADEFFXXX".into()))
        .due_date(date(2026, 1, 30))
        .build();
    let xml = inv.to_cii_string().unwrap();
    let reparsed = parse_bytes(xml.as_bytes()).unwrap();

    assert_eq!(without_presence(reparsed), without_presence(inv));
}

#[test]
fn ubl_input_is_written_as_cii() {
    let ubl = ubl::from_ubl_xml(UBL_INVOICE).unwrap();
    let xml = cii::to_cii_xml(&ubl).unwrap();
    let written = cii::from_cii_xml(&xml).unwrap();

    assert_eq!(written.number, ubl.number);
    assert_eq!(written.specification_id, ubl.specification_id);
    assert_eq!(written.business_process, ubl.business_process);
    assert_eq!(written.seller, ubl.seller);
    assert_eq!(written.lines, ubl.lines);
    assert_eq!(written.trade_taxes, ubl.trade_taxes);
    assert_eq!(written.allowance_charges, ubl.allowance_charges);
    assert_eq!(written.totals, ubl.totals);
    assert_eq!(written.creditor_reference_id.as_deref(), Some("DE98ZZZ09999999999"));
    // The project name is required in CII and defaults to the identifier.
    assert_eq!(written.project.and_then(|p| p.name).as_deref(), Some("PRJ-9"));
}

// ---------------------------------------------------------------------------
// Output shape
// ---------------------------------------------------------------------------

#[test]
fn document_structure() {
    let xml = invoice().build().to_cii_string().unwrap();

    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains("<rsm:CrossIndustryInvoice"));
    assert!(xml.contains(r#"xmlns:ram="urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:100""#));
    assert!(xml.contains("<ram:ID>urn:cen.eu:en16931:2017</ram:ID>"));
    assert!(xml.contains("<ram:TypeCode>380</ram:TypeCode>"));
    assert!(xml.contains(r#"<udt:DateTimeString format="102">20251231</udt:DateTimeString>"#));
    assert!(xml.contains("<ram:LineTotalAmount>1500.00</ram:LineTotalAmount>"));
    assert!(xml.contains(r#"<ram:BilledQuantity unitCode="HUR">10.0000</ram:BilledQuantity>"#));
    assert!(xml.contains("<ram:ChargeAmount>150.0000</ram:ChargeAmount>"));
    assert!(xml.contains("<ram:RateApplicablePercent>19</ram:RateApplicablePercent>"));
    assert!(xml.contains("<ram:GrandTotalAmount>1785.00</ram:GrandTotalAmount>"));
    assert!(xml.contains(r#"<ram:ID schemeID="VA">DE123456789</ram:ID>"#));
    assert!(xml.contains(r#"<ram:URIID schemeID="EM">billing@acme.de</ram:URIID>"#));
}

#[test]
fn fractional_rates_keep_their_digits() {
    let inv = InvoiceBuilder::new("R-1", date(2025, 1, 1))
        .add_line(
            LineBuilder::new("1", "Item", dec!(1), "C62", dec!(100))
                .tax(TaxCategory::StandardRate, dec!(5.5))
                .build(),
        )
        .build();
    let xml = inv.to_cii_string().unwrap();
    assert!(xml.contains("<ram:RateApplicablePercent>5.5</ram:RateApplicablePercent>"));
    assert!(xml.contains("<ram:CalculatedAmount>5.50</ram:CalculatedAmount>"));
}

#[test]
fn dual_currency_writes_two_tax_totals() {
    let mut inv = invoice().currency("USD").tax_currency("EUR").build();
    inv.totals.tax_total_accounting = dec!(262.00);
    let xml = inv.to_cii_string().unwrap();

    assert_eq!(xml.matches("<ram:TaxTotalAmount").count(), 2);
    assert!(xml.contains(r#"<ram:TaxTotalAmount currencyID="USD">285.00</ram:TaxTotalAmount>"#));
    assert!(xml.contains(r#"<ram:TaxTotalAmount currencyID="EUR">262.00</ram:TaxTotalAmount>"#));
    assert!(xml.contains("<ram:TaxCurrencyCode>EUR</ram:TaxCurrencyCode>"));

    let reparsed = parse_bytes(xml.as_bytes()).unwrap();
    assert_eq!(reparsed.totals.tax_total, dec!(285.00));
    assert_eq!(reparsed.totals.tax_total_accounting, dec!(262.00));
    assert!(reparsed.presence.tax_total_accounting);
}

#[test]
fn same_tax_currency_writes_one_tax_total() {
    let inv = invoice().tax_currency("EUR").build();
    let xml = inv.to_cii_string().unwrap();
    assert_eq!(xml.matches("<ram:TaxTotalAmount").count(), 1);
}

#[test]
fn open_start_period_writes_only_the_end() {
    let mut inv = invoice().build();
    inv.billing_period = Period {
        start: None,
        end: Some(date(2025, 12, 31)),
    };
    let xml = inv.to_cii_string().unwrap();

    let period = section(&xml, "ram:BillingSpecifiedPeriod");
    assert!(period.contains("<ram:EndDateTime>"));
    assert!(period.contains("20251231"));
    assert!(!period.contains("StartDateTime"));
    assert!(!xml.contains("00010101"));

    let reparsed = parse_bytes(xml.as_bytes()).unwrap();
    assert_eq!(reparsed.billing_period.start, None);
    assert_eq!(reparsed.billing_period.end, Some(date(2025, 12, 31)));
}

#[test]
fn empty_period_is_omitted() {
    let xml = invoice().build().to_cii_string().unwrap();
    assert!(!xml.contains("BillingSpecifiedPeriod"));
}

#[test]
fn line_allowances_are_written_with_the_line() {
    let inv = invoice()
        .add_line(
            LineBuilder::new("2", "Material", dec!(4), "H87", dec!(25))
                .add_allowance(AllowanceCharge {
                    actual_amount: dec!(10),
                    reason: Some("Mengenrabatt".into()),
                    ..Default::default()
                })
                .build(),
        )
        .build();
    assert_eq!(inv.lines[1].total, dec!(90.00));

    let xml = inv.to_cii_string().unwrap();
    let reparsed = parse_bytes(xml.as_bytes()).unwrap();
    let line = &reparsed.lines[1];
    assert_eq!(line.allowance_charges.len(), 1);
    assert_eq!(line.allowance_charges[0].reason.as_deref(), Some("Mengenrabatt"));
    assert_eq!(line.total, dec!(90.00));
    assert!(reparsed.allowance_charges.is_empty());
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[test]
fn minimum_fixture_round_trips_without_lines() {
    let original = cii::from_cii_xml(MINIMUM).unwrap();
    let xml = original.to_cii_string().unwrap();

    assert!(!xml.contains("IncludedSupplyChainTradeLineItem"));
    assert!(!xml.contains("LineTotalAmount"));
    assert!(xml.contains("<ram:ID>urn:factur-x.eu:1p0:minimum</ram:ID>"));
    assert!(xml.contains("<ram:ID>A1</ram:ID>"));

    let reparsed = cii::from_cii_xml(&xml).unwrap();
    assert_eq!(reparsed, original);
}

#[test]
fn minimum_profile_drops_detail() {
    let inv = invoice()
        .profile(Profile::Minimum)
        .note("not written")
        .build();
    let xml = inv.to_cii_string().unwrap();

    assert!(!xml.contains("IncludedSupplyChainTradeLineItem"));
    assert!(!xml.contains("IncludedNote"));
    assert!(!xml.contains("Friedrichstraße"));
    assert!(!xml.contains("URIUniversalCommunication"));
    assert!(xml.contains("<ram:CountryID>DE</ram:CountryID>"));
}

#[test]
fn xrechnung_profile_writes_its_identifier() {
    let inv = invoice()
        .profile(Profile::XRechnung)
        .buyer_reference("04011000-12345-03")
        .build();
    let xml = inv.to_cii_string().unwrap();
    assert!(xml.contains(&format!("<ram:ID>{XRECHNUNG_URN}</ram:ID>")));
    assert!(xml.contains("<ram:BuyerReference>04011000-12345-03</ram:BuyerReference>"));

    let reparsed = parse_bytes(xml.as_bytes()).unwrap();
    assert_eq!(reparsed.profile, Profile::XRechnung);
}

// ---------------------------------------------------------------------------
// Sinks and formats
// ---------------------------------------------------------------------------

#[test]
fn write_to_a_sink() {
    let inv = invoice().build();
    let mut out = Vec::new();
    inv.write(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), inv.to_cii_string().unwrap());
}

#[test]
fn ubl_output_is_refused() {
    let inv = invoice().build();
    let mut out = Vec::new();
    let err = inv.write_as(Format::Ubl, &mut out).unwrap_err();
    assert!(matches!(err, InvoiceError::UnsupportedFormat));
    assert!(out.is_empty());
}

#[test]
fn writing_does_not_change_the_invoice() {
    let inv = invoice().build();
    let before = inv.clone();
    inv.to_cii_string().unwrap();
    assert_eq!(inv, before);
}
