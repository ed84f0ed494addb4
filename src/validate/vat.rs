//! VAT category family rules.
//!
//! Every category has the same ten rule slots (breakdown present, seller
//! identification for lines/allowances/charges, rate for
//! lines/allowances/charges, taxable amount, tax amount, exemption reason).
//! What each slot demands differs per category and is described by a
//! [`Family`].

use rust_decimal::Decimal;

use super::{blank, overflow, report};
use crate::core::decimal::{checked_sum, round_half_up};
use crate::core::totals::category_tax;
use crate::core::{AllowanceCharge, Invoice, Party, SemanticError, TaxCategory};
use crate::rules::*;

pub(super) fn check(inv: &Invoice, out: &mut Vec<SemanticError>) {
    standard_rated(inv, out);
    reverse_charge(inv, out);
    exempt(inv, out);
    zero_rated(inv, out);
    export(inv, out);
    intra_community(inv, out);
    igic(inv, out);
    ipsi(inv, out);
    not_subject(inv, out);
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RatePolicy {
    Positive,
    Zero,
    NonNegative,
    Absent,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum IdPolicy {
    /// Seller VAT id, seller tax registration or tax representative VAT id.
    Seller,
    /// Seller VAT id or tax representative VAT id.
    SellerVat,
    /// As `Seller`, plus buyer VAT id or buyer legal registration id.
    SellerAndBuyer,
    /// As `SellerVat`, plus buyer VAT id.
    SellerVatAndBuyerVat,
    /// No VAT identifiers at all.
    Forbidden,
}

struct Family {
    category: TaxCategory,
    rules: [&'static Rule; 10],
    ids: IdPolicy,
    rate: RatePolicy,
    /// Basis is matched per rate, not per category only.
    per_rate: bool,
    /// Tax amount must be zero instead of basis x rate.
    zero_tax: bool,
    exemption_required: bool,
    exactly_one_breakdown: bool,
}

fn standard_rated(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let family = Family {
        category: TaxCategory::StandardRate,
        rules: [
            &BR_S_1, &BR_S_2, &BR_S_3, &BR_S_4, &BR_S_5, &BR_S_6, &BR_S_7, &BR_S_8, &BR_S_9,
            &BR_S_10,
        ],
        ids: IdPolicy::Seller,
        rate: RatePolicy::Positive,
        per_rate: true,
        zero_tax: false,
        exemption_required: false,
        exactly_one_breakdown: false,
    };
    check_family(inv, &family, out);
}

fn reverse_charge(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let family = Family {
        category: TaxCategory::ReverseCharge,
        rules: [
            &BR_AE_1, &BR_AE_2, &BR_AE_3, &BR_AE_4, &BR_AE_5, &BR_AE_6, &BR_AE_7, &BR_AE_8,
            &BR_AE_9, &BR_AE_10,
        ],
        ids: IdPolicy::SellerAndBuyer,
        rate: RatePolicy::Zero,
        per_rate: false,
        zero_tax: true,
        exemption_required: true,
        exactly_one_breakdown: true,
    };
    check_family(inv, &family, out);
}

fn exempt(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let family = Family {
        category: TaxCategory::Exempt,
        rules: [
            &BR_E_1, &BR_E_2, &BR_E_3, &BR_E_4, &BR_E_5, &BR_E_6, &BR_E_7, &BR_E_8, &BR_E_9,
            &BR_E_10,
        ],
        ids: IdPolicy::Seller,
        rate: RatePolicy::Zero,
        per_rate: false,
        zero_tax: true,
        exemption_required: true,
        exactly_one_breakdown: true,
    };
    check_family(inv, &family, out);
}

fn zero_rated(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let family = Family {
        category: TaxCategory::ZeroRated,
        rules: [
            &BR_Z_1, &BR_Z_2, &BR_Z_3, &BR_Z_4, &BR_Z_5, &BR_Z_6, &BR_Z_7, &BR_Z_8, &BR_Z_9,
            &BR_Z_10,
        ],
        ids: IdPolicy::Seller,
        rate: RatePolicy::Zero,
        per_rate: false,
        zero_tax: true,
        exemption_required: false,
        exactly_one_breakdown: true,
    };
    check_family(inv, &family, out);
}

fn export(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let family = Family {
        category: TaxCategory::Export,
        rules: [
            &BR_G_1, &BR_G_2, &BR_G_3, &BR_G_4, &BR_G_5, &BR_G_6, &BR_G_7, &BR_G_8, &BR_G_9,
            &BR_G_10,
        ],
        ids: IdPolicy::SellerVat,
        rate: RatePolicy::Zero,
        per_rate: false,
        zero_tax: true,
        exemption_required: true,
        exactly_one_breakdown: true,
    };
    check_family(inv, &family, out);
}

fn intra_community(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let family = Family {
        category: TaxCategory::IntraCommunitySupply,
        rules: [
            &BR_IC_1, &BR_IC_2, &BR_IC_3, &BR_IC_4, &BR_IC_5, &BR_IC_6, &BR_IC_7, &BR_IC_8,
            &BR_IC_9, &BR_IC_10,
        ],
        ids: IdPolicy::SellerVatAndBuyerVat,
        rate: RatePolicy::Zero,
        per_rate: false,
        zero_tax: true,
        exemption_required: true,
        exactly_one_breakdown: true,
    };
    check_family(inv, &family, out);

    if !has_breakdown(inv, &family.category) {
        return;
    }
    if inv.delivery_date.is_none() && inv.billing_period.is_empty() {
        report(
            out,
            &BR_IC_11,
            "intra-community supply without actual delivery date or invoicing period",
        );
    }
    let ship_to_country = inv
        .ship_to
        .as_ref()
        .map(|p| p.country_code())
        .unwrap_or("");
    if ship_to_country.trim().is_empty() {
        report(out, &BR_IC_12, "intra-community supply without deliver to country code");
    }
}

fn igic(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let family = Family {
        category: TaxCategory::Igic,
        rules: [
            &BR_AF_1, &BR_AF_2, &BR_AF_3, &BR_AF_4, &BR_AF_5, &BR_AF_6, &BR_AF_7, &BR_AF_8,
            &BR_AF_9, &BR_AF_10,
        ],
        ids: IdPolicy::Seller,
        rate: RatePolicy::NonNegative,
        per_rate: true,
        zero_tax: false,
        exemption_required: false,
        exactly_one_breakdown: false,
    };
    check_family(inv, &family, out);
}

fn ipsi(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let family = Family {
        category: TaxCategory::Ipsi,
        rules: [
            &BR_AG_1, &BR_AG_2, &BR_AG_3, &BR_AG_4, &BR_AG_5, &BR_AG_6, &BR_AG_7, &BR_AG_8,
            &BR_AG_9, &BR_AG_10,
        ],
        ids: IdPolicy::Seller,
        rate: RatePolicy::NonNegative,
        per_rate: true,
        zero_tax: false,
        exemption_required: false,
        exactly_one_breakdown: false,
    };
    check_family(inv, &family, out);
}

fn not_subject(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let family = Family {
        category: TaxCategory::NotSubjectToVat,
        rules: [
            &BR_O_1, &BR_O_2, &BR_O_3, &BR_O_4, &BR_O_5, &BR_O_6, &BR_O_7, &BR_O_8, &BR_O_9,
            &BR_O_10,
        ],
        ids: IdPolicy::Forbidden,
        rate: RatePolicy::Absent,
        per_rate: false,
        zero_tax: true,
        exemption_required: true,
        exactly_one_breakdown: true,
    };
    check_family(inv, &family, out);

    let o = &family.category;
    if !has_breakdown(inv, o) {
        return;
    }
    if inv.trade_taxes.iter().any(|t| t.category.as_ref() != Some(o)) {
        report(
            out,
            &BR_O_11,
            "VAT breakdown \"not subject to VAT\" combined with other categories",
        );
    }
    for line in &inv.lines {
        if line.tax_category.as_ref() != Some(o) {
            report(
                out,
                &BR_O_12,
                format!(
                    "line {} has VAT category {} in an invoice not subject to VAT",
                    line.id,
                    code(&line.tax_category)
                ),
            );
        }
    }
    for ac in &inv.allowance_charges {
        if ac.tax_category.as_ref() == Some(o) {
            continue;
        }
        let (rule, what) = if ac.charge_indicator {
            (&BR_O_14, "charge")
        } else {
            (&BR_O_13, "allowance")
        };
        report(
            out,
            rule,
            format!(
                "{what} {} has VAT category {} in an invoice not subject to VAT",
                ac.actual_amount,
                code(&ac.tax_category)
            ),
        );
    }
}

fn check_family(inv: &Invoice, f: &Family, out: &mut Vec<SemanticError>) {
    let cat = &f.category;
    let [r1, r2, r3, r4, r5, r6, r7, r8, r9, r10] = f.rules;
    let name = cat.name();

    let lines: Vec<_> = inv
        .lines
        .iter()
        .filter(|l| l.tax_category.as_ref() == Some(cat))
        .collect();
    let allowances: Vec<&AllowanceCharge> = inv
        .allowance_charges
        .iter()
        .filter(|ac| !ac.charge_indicator && ac.tax_category.as_ref() == Some(cat))
        .collect();
    let charges: Vec<&AllowanceCharge> = inv
        .allowance_charges
        .iter()
        .filter(|ac| ac.charge_indicator && ac.tax_category.as_ref() == Some(cat))
        .collect();
    let breakdowns = inv
        .trade_taxes
        .iter()
        .filter(|t| t.category.as_ref() == Some(cat))
        .count();

    // -1
    let used = !lines.is_empty() || !allowances.is_empty() || !charges.is_empty();
    if used && breakdowns == 0 {
        report(out, r1, format!("\"{name}\" is used but has no VAT breakdown"));
    } else if used && f.exactly_one_breakdown && breakdowns > 1 {
        report(
            out,
            r1,
            format!("\"{name}\" has {breakdowns} VAT breakdowns, expected exactly one"),
        );
    }

    // -2 .. -4
    if !lines.is_empty() {
        identification(inv, f.ids, r2, &format!("line with \"{name}\""), out);
    }
    if !allowances.is_empty() {
        identification(inv, f.ids, r3, &format!("allowance with \"{name}\""), out);
    }
    if !charges.is_empty() {
        identification(inv, f.ids, r4, &format!("charge with \"{name}\""), out);
    }

    // -5 .. -7
    for line in &lines {
        if !rate_ok(f.rate, line.tax_rate) {
            report(
                out,
                r5,
                format!(
                    "line {} \"{name}\" has VAT rate {}",
                    line.id,
                    show_rate(line.tax_rate)
                ),
            );
        }
    }
    for ac in &allowances {
        if !rate_ok(f.rate, ac.tax_rate) {
            report(
                out,
                r6,
                format!(
                    "allowance {} \"{name}\" has VAT rate {}",
                    ac.actual_amount,
                    show_rate(ac.tax_rate)
                ),
            );
        }
    }
    for ac in &charges {
        if !rate_ok(f.rate, ac.tax_rate) {
            report(
                out,
                r7,
                format!(
                    "charge {} \"{name}\" has VAT rate {}",
                    ac.actual_amount,
                    show_rate(ac.tax_rate)
                ),
            );
        }
    }

    // -8 .. -10
    for tax in inv
        .trade_taxes
        .iter()
        .filter(|t| t.category.as_ref() == Some(cat))
    {
        if !inv.lines.is_empty() {
            let rate_matches = |rate: Option<Decimal>| !f.per_rate || rate == tax.rate;
            let expected = checked_sum(
                lines
                    .iter()
                    .filter(|l| rate_matches(l.tax_rate))
                    .map(|l| l.total)
                    .chain(
                        allowances
                            .iter()
                            .chain(charges.iter())
                            .filter(|ac| rate_matches(ac.tax_rate))
                            .map(|ac| ac.signed_amount()),
                    ),
            );
            match expected.map(|e| round_half_up(e, 2)) {
                Some(expected) if tax.basis_amount != expected => report(
                    out,
                    r8,
                    format!(
                        "\"{name}\" taxable amount {} but lines, allowances and charges sum to {expected}",
                        tax.basis_amount
                    ),
                ),
                Some(_) => {}
                None => overflow(out, &format!("\"{name}\" taxable amount")),
            }
        }

        let expected_tax = if f.zero_tax {
            Some(Decimal::ZERO)
        } else {
            category_tax(tax.basis_amount, tax.rate)
        };
        match expected_tax {
            Some(expected_tax) if tax.calculated_amount != expected_tax => report(
                out,
                r9,
                format!(
                    "\"{name}\" tax amount {} but expected {expected_tax}",
                    tax.calculated_amount
                ),
            ),
            Some(_) => {}
            None => overflow(out, &format!("\"{name}\" tax amount")),
        }

        let has_exemption = !blank(&tax.exemption_reason) || !blank(&tax.exemption_reason_code);
        if f.exemption_required && !has_exemption {
            report(out, r10, format!("\"{name}\" has no VAT exemption reason"));
        } else if !f.exemption_required && has_exemption {
            report(
                out,
                r10,
                format!(
                    "\"{name}\" must not have a VAT exemption reason, found \"{}{}\"",
                    tax.exemption_reason_code.as_deref().unwrap_or(""),
                    tax.exemption_reason
                        .as_deref()
                        .map(|r| format!(" {r}"))
                        .unwrap_or_default()
                ),
            );
        }
    }
}

fn identification(
    inv: &Invoice,
    policy: IdPolicy,
    rule: &'static Rule,
    what: &str,
    out: &mut Vec<SemanticError>,
) {
    let seller_vat = has_vat(&inv.seller);
    let seller_tax_reg = !blank(&inv.seller.tax_registration);
    let rep_vat = inv.tax_representative.as_ref().is_some_and(has_vat);
    let buyer_vat = has_vat(&inv.buyer);
    let buyer_legal = inv
        .buyer
        .legal_organization
        .as_ref()
        .is_some_and(|lo| !blank(&lo.id));

    let ok = match policy {
        IdPolicy::Seller => seller_vat || seller_tax_reg || rep_vat,
        IdPolicy::SellerVat => seller_vat || rep_vat,
        IdPolicy::SellerAndBuyer => {
            (seller_vat || seller_tax_reg || rep_vat) && (buyer_vat || buyer_legal)
        }
        IdPolicy::SellerVatAndBuyerVat => (seller_vat || rep_vat) && buyer_vat,
        IdPolicy::Forbidden => !seller_vat && !rep_vat && !buyer_vat,
    };
    if ok {
        return;
    }
    let text = match policy {
        IdPolicy::Forbidden => format!("{what} but VAT identifiers are present"),
        IdPolicy::SellerAndBuyer | IdPolicy::SellerVatAndBuyerVat => {
            format!("{what} requires seller and buyer VAT identification")
        }
        _ => format!("{what} requires a seller VAT identifier or tax registration"),
    };
    report(out, rule, text);
}

fn has_vat(party: &Party) -> bool {
    !blank(&party.vat_id)
}

fn rate_ok(policy: RatePolicy, rate: Option<Decimal>) -> bool {
    match (policy, rate) {
        (RatePolicy::Positive, Some(r)) => r > Decimal::ZERO,
        (RatePolicy::Zero, Some(r)) => r.is_zero(),
        (RatePolicy::NonNegative, Some(r)) => r >= Decimal::ZERO,
        (RatePolicy::Absent, rate) => rate.is_none(),
        (_, None) => false,
    }
}

fn has_breakdown(inv: &Invoice, category: &TaxCategory) -> bool {
    inv.trade_taxes
        .iter()
        .any(|t| t.category.as_ref() == Some(category))
}

fn show_rate(rate: Option<Decimal>) -> String {
    rate.map(|r| format!("{}%", r.normalize()))
        .unwrap_or_else(|| "none".to_string())
}

fn code(category: &Option<TaxCategory>) -> &str {
    category.as_ref().map(|c| c.code()).unwrap_or("none")
}
