use std::collections::BTreeMap;

use chrono::NaiveDate;
use einvoice::rules;
use einvoice::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seller() -> Party {
    PartyBuilder::new("ACME GmbH")
        .address(AddressBuilder::new("Berlin", "10115", "DE").build())
        .vat_id("DE123456789")
        .build()
}

fn buyer() -> Party {
    PartyBuilder::new("Kunde AG")
        .address(AddressBuilder::new("München", "80331", "DE").build())
        .vat_id("DE987654321")
        .build()
}

fn allowance(amount: Decimal, rate: Decimal) -> AllowanceCharge {
    AllowanceCharge {
        actual_amount: amount,
        reason: Some("Rabatt".into()),
        tax_category: Some(TaxCategory::StandardRate),
        tax_type: Some("VAT".into()),
        tax_rate: Some(rate),
        ..Default::default()
    }
}

fn line(total: Decimal, category: TaxCategory, rate: Decimal) -> InvoiceLine {
    InvoiceLine {
        id: "1".into(),
        item: Item {
            name: "Item".into(),
            ..Default::default()
        },
        billed_quantity: Decimal::ONE,
        unit_code: "C62".into(),
        net_price: total,
        tax_type: "VAT".into(),
        tax_category: Some(category),
        tax_rate: Some(rate),
        total,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Document totals
// ---------------------------------------------------------------------------

#[test]
fn builder_computes_every_total() {
    let inv = InvoiceBuilder::new("RE-1", date(2025, 3, 1))
        .seller(seller())
        .buyer(buyer())
        .add_line(LineBuilder::new("1", "Beratung", dec!(10), "HUR", dec!(150)).build())
        .add_line(LineBuilder::new("2", "Kabel", dec!(2), "C62", dec!(49.95)).build())
        .add_line(
            LineBuilder::new("3", "Buch", dec!(3), "C62", dec!(9.99))
                .tax(TaxCategory::StandardRate, dec!(7))
                .build(),
        )
        .add_allowance(allowance(dec!(50), dec!(19)))
        .add_charge(allowance(dec!(10), dec!(7)))
        .prepaid(dec!(100))
        .build();

    let t = &inv.totals;
    assert_eq!(t.line_total, dec!(1629.87));
    assert_eq!(t.allowance_total, dec!(50));
    assert_eq!(t.charge_total, dec!(10));
    assert_eq!(t.tax_basis_total, dec!(1589.87));
    assert_eq!(t.tax_total, dec!(297.28));
    assert_eq!(t.grand_total, dec!(1887.15));
    assert_eq!(t.due_payable, dec!(1787.15));

    assert_eq!(inv.trade_taxes.len(), 2);
    assert_eq!(inv.trade_taxes[0].rate, Some(dec!(19)));
    assert_eq!(inv.trade_taxes[0].basis_amount, dec!(1549.90));
    assert_eq!(inv.trade_taxes[0].calculated_amount, dec!(294.48));
    assert_eq!(inv.trade_taxes[1].rate, Some(dec!(7)));
    assert_eq!(inv.trade_taxes[1].basis_amount, dec!(39.97));
    assert_eq!(inv.trade_taxes[1].calculated_amount, dec!(2.80));
}

#[test]
fn builder_sets_summation_presence() {
    let inv = InvoiceBuilder::new("RE-1", date(2025, 3, 1))
        .add_line(LineBuilder::new("1", "Item", dec!(1), "C62", dec!(1)).build())
        .build();
    assert!(inv.presence.line_total);
    assert!(inv.presence.tax_basis_total);
    assert!(inv.presence.grand_total);
    assert!(inv.presence.due_payable);
    assert!(!inv.presence.billing_period);
    assert!(!inv.presence.tax_total_accounting);
}

#[test]
fn rounding_amount_enters_amount_due() {
    let mut inv = InvoiceBuilder::new("RE-1", date(2025, 3, 1))
        .add_line(LineBuilder::new("1", "Item", dec!(1), "C62", dec!(9.99)).build())
        .build();
    assert_eq!(inv.totals.grand_total, dec!(11.89));

    inv.totals.rounding = dec!(0.01);
    inv.update_totals();
    assert_eq!(inv.totals.due_payable, dec!(11.90));
}

#[test]
fn line_amounts_use_basis_quantity_and_line_allowances() {
    let l = LineBuilder::new("1", "Schrauben", dec!(3), "C62", dec!(10))
        .basis_quantity(dec!(2))
        .add_allowance(AllowanceCharge {
            actual_amount: dec!(1),
            reason: Some("Mengenrabatt".into()),
            ..Default::default()
        })
        .add_charge(AllowanceCharge {
            actual_amount: dec!(0.5),
            reason: Some("Verpackung".into()),
            ..Default::default()
        })
        .build();
    assert_eq!(l.computed_total(), Some(dec!(14.50)));
    assert!(!l.allowance_charges[0].charge_indicator);
    assert!(l.allowance_charges[1].charge_indicator);
}

#[test]
fn zero_basis_quantity_is_treated_as_one() {
    let l = LineBuilder::new("1", "Item", dec!(4), "C62", dec!(2.5))
        .basis_quantity(Decimal::ZERO)
        .build();
    assert_eq!(l.computed_total(), Some(dec!(10.00)));
}

#[test]
fn tax_amounts_round_half_away_from_zero() {
    let inv = InvoiceBuilder::new("RE-1", date(2025, 3, 1))
        .add_line(
            LineBuilder::new("1", "Item", dec!(1), "C62", dec!(0.05))
                .tax(TaxCategory::StandardRate, dec!(10))
                .build(),
        )
        .build();
    assert_eq!(inv.trade_taxes[0].calculated_amount, dec!(0.01));
}

#[test]
fn signed_amounts() {
    let a = allowance(dec!(5), dec!(19));
    let c = AllowanceCharge {
        charge_indicator: true,
        ..a.clone()
    };
    assert_eq!(a.signed_amount(), dec!(-5));
    assert_eq!(c.signed_amount(), dec!(5));
}

// ---------------------------------------------------------------------------
// VAT breakdown
// ---------------------------------------------------------------------------

#[test]
fn breakdown_keeps_first_seen_order() {
    let inv = InvoiceBuilder::new("RE-1", date(2025, 3, 1))
        .add_line(LineBuilder::new("1", "A", dec!(1), "C62", dec!(100)).build())
        .add_line(
            LineBuilder::new("2", "B", dec!(1), "C62", dec!(50))
                .tax(TaxCategory::ZeroRated, dec!(0))
                .build(),
        )
        .add_line(LineBuilder::new("3", "C", dec!(1), "C62", dec!(20)).build())
        .build();

    let keys: Vec<_> = inv
        .trade_taxes
        .iter()
        .map(|t| (t.category.clone(), t.rate))
        .collect();
    assert_eq!(
        keys,
        vec![
            (Some(TaxCategory::StandardRate), Some(dec!(19))),
            (Some(TaxCategory::ZeroRated), Some(dec!(0))),
        ]
    );
    assert_eq!(inv.trade_taxes[0].basis_amount, dec!(120));
    assert_eq!(inv.trade_taxes[0].type_code, "VAT");
}

#[test]
fn same_rate_different_categories_are_kept_apart() {
    let mut inv = Invoice {
        lines: vec![
            line(dec!(1000), TaxCategory::StandardRate, dec!(19)),
            line(dec!(500), TaxCategory::ReverseCharge, dec!(19)),
        ],
        ..Default::default()
    };
    inv.update_applicable_trade_tax(&BTreeMap::new());

    assert_eq!(inv.trade_taxes.len(), 2);
    assert_eq!(inv.trade_taxes[0].category, Some(TaxCategory::StandardRate));
    assert_eq!(inv.trade_taxes[0].basis_amount, dec!(1000));
    assert_eq!(inv.trade_taxes[1].category, Some(TaxCategory::ReverseCharge));
    assert_eq!(inv.trade_taxes[1].basis_amount, dec!(500));

    let err = inv.validate().unwrap_err();
    assert!(!err.has_rule(&rules::BR_45));
}

#[test]
fn rates_compare_by_value() {
    let mut inv = Invoice {
        lines: vec![
            line(dec!(100), TaxCategory::StandardRate, dec!(19)),
            line(dec!(100), TaxCategory::StandardRate, dec!(19.00)),
        ],
        ..Default::default()
    };
    inv.update_applicable_trade_tax(&BTreeMap::new());
    assert_eq!(inv.trade_taxes.len(), 1);
    assert_eq!(inv.trade_taxes[0].basis_amount, dec!(200));
}

#[test]
fn not_subject_to_vat_has_no_rate_and_no_tax() {
    let inv = InvoiceBuilder::new("RE-1", date(2025, 3, 1))
        .add_line(
            LineBuilder::new("1", "Spende", dec!(1), "C62", dec!(250))
                .tax_category_only(TaxCategory::NotSubjectToVat)
                .build(),
        )
        .build();
    assert_eq!(inv.trade_taxes.len(), 1);
    assert_eq!(inv.trade_taxes[0].rate, None);
    assert_eq!(inv.trade_taxes[0].calculated_amount, Decimal::ZERO);
    assert_eq!(inv.totals.grand_total, dec!(250));
}

#[test]
fn exemption_reasons_are_attached_by_category() {
    let inv = InvoiceBuilder::new("RE-1", date(2025, 3, 1))
        .seller(seller())
        .buyer(buyer())
        .add_line(
            LineBuilder::new("1", "Montage", dec!(1), "C62", dec!(800))
                .tax(TaxCategory::ReverseCharge, dec!(0))
                .build(),
        )
        .add_line(LineBuilder::new("2", "Material", dec!(1), "C62", dec!(100)).build())
        .exemption_reason(
            TaxCategory::ReverseCharge,
            "Steuerschuldnerschaft des Leistungsempfängers",
        )
        .build();

    let ae = &inv.trade_taxes[0];
    assert_eq!(ae.category, Some(TaxCategory::ReverseCharge));
    assert_eq!(ae.calculated_amount, Decimal::ZERO);
    assert_eq!(
        ae.exemption_reason.as_deref(),
        Some("Steuerschuldnerschaft des Leistungsempfängers")
    );
    assert_eq!(inv.trade_taxes[1].exemption_reason, None);
}

#[test]
fn refresh_keeps_exemption_reason_and_tax_point() {
    let mut inv = InvoiceBuilder::new("RE-1", date(2025, 3, 1))
        .add_line(
            LineBuilder::new("1", "Export", dec!(2), "C62", dec!(100))
                .tax(TaxCategory::Export, dec!(0))
                .build(),
        )
        .exemption_reason(TaxCategory::Export, "Ausfuhrlieferung")
        .build();
    inv.trade_taxes[0].exemption_reason_code = Some("VATEX-EU-G".into());
    inv.trade_taxes[0].tax_point_date = Some(date(2025, 2, 28));

    inv.lines[0].billed_quantity = dec!(5);
    inv.lines[0].total = inv.lines[0].computed_total().unwrap();
    inv.update_totals();

    let g = &inv.trade_taxes[0];
    assert_eq!(g.basis_amount, dec!(500));
    assert_eq!(g.exemption_reason.as_deref(), Some("Ausfuhrlieferung"));
    assert_eq!(g.exemption_reason_code.as_deref(), Some("VATEX-EU-G"));
    assert_eq!(g.tax_point_date, Some(date(2025, 2, 28)));
    assert_eq!(inv.totals.line_total, dec!(500));
}

#[test]
fn refresh_drops_keys_no_longer_used() {
    let mut inv = InvoiceBuilder::new("RE-1", date(2025, 3, 1))
        .add_line(LineBuilder::new("1", "A", dec!(1), "C62", dec!(100)).build())
        .add_line(
            LineBuilder::new("2", "B", dec!(1), "C62", dec!(100))
                .tax(TaxCategory::StandardRate, dec!(7))
                .build(),
        )
        .build();
    assert_eq!(inv.trade_taxes.len(), 2);

    inv.lines[1].tax_rate = Some(dec!(19));
    inv.update_totals();
    assert_eq!(inv.trade_taxes.len(), 1);
    assert_eq!(inv.trade_taxes[0].basis_amount, dec!(200));
    assert_eq!(inv.totals.tax_total, dec!(38.00));
}

// ---------------------------------------------------------------------------
// Invoices without lines
// ---------------------------------------------------------------------------

#[test]
fn invoice_without_lines_keeps_line_total_and_breakdown() {
    let mut inv = Invoice {
        profile: Profile::Minimum,
        totals: MonetarySummation {
            line_total: dec!(500),
            ..Default::default()
        },
        trade_taxes: vec![TradeTax {
            type_code: "VAT".into(),
            category: Some(TaxCategory::StandardRate),
            rate: Some(dec!(19)),
            basis_amount: dec!(500),
            calculated_amount: dec!(95),
            ..Default::default()
        }],
        ..Default::default()
    };
    inv.update_totals();

    assert_eq!(inv.totals.line_total, dec!(500));
    assert_eq!(inv.trade_taxes.len(), 1);
    assert_eq!(inv.totals.tax_basis_total, dec!(500));
    assert_eq!(inv.totals.tax_total, dec!(95));
    assert_eq!(inv.totals.grand_total, dec!(595));
    assert_eq!(inv.totals.due_payable, dec!(595));
}

// ---------------------------------------------------------------------------
// VAT accounting currency
// ---------------------------------------------------------------------------

#[test]
fn exchange_rate_converts_the_tax_total() {
    let mut inv = InvoiceBuilder::new("RE-1", date(2025, 3, 1))
        .currency("USD")
        .tax_currency("EUR")
        .add_line(LineBuilder::new("1", "Beratung", dec!(10), "HUR", dec!(150)).build())
        .build();
    assert!(!inv.presence.tax_total_accounting);

    inv.update_totals_with(&TotalsOptions {
        exchange_rate: Some(dec!(0.9)),
    });
    assert_eq!(inv.totals.tax_total, dec!(285.00));
    assert_eq!(inv.totals.tax_total_accounting, dec!(256.50));
    assert!(inv.presence.tax_total_accounting);
}

#[test]
fn exchange_rate_is_ignored_for_the_same_currency() {
    let mut inv = InvoiceBuilder::new("RE-1", date(2025, 3, 1))
        .tax_currency("EUR")
        .add_line(LineBuilder::new("1", "Beratung", dec!(10), "HUR", dec!(150)).build())
        .build();
    inv.update_totals_with(&TotalsOptions {
        exchange_rate: Some(dec!(1.1)),
    });
    assert_eq!(inv.totals.tax_total_accounting, Decimal::ZERO);
    assert!(!inv.presence.tax_total_accounting);
}
