//! Presence and shape rules `BR-1` to `BR-65`.

use rust_decimal::Decimal;

use super::{blank, overflow, report, show};
use crate::core::decimal::round_half_up;
use crate::core::{Invoice, PaymentCard, Profile, SemanticError, TaxCategory};
use crate::rules::*;

pub(super) fn check(inv: &Invoice, out: &mut Vec<SemanticError>) {
    header(inv, out);
    parties(inv, out);
    summation_presence(inv, out);
    invoice_lines(inv, out);
    periods(inv, out);
    document_allowances(inv, out);
    breakdown(inv, out);
    payment(inv, out);
    references(inv, out);
    electronic_addresses(inv, out);
}

fn header(inv: &Invoice, out: &mut Vec<SemanticError>) {
    if !inv.profile.is_known() {
        report(
            out,
            &BR_1,
            format!(
                "unknown specification identifier \"{}\"",
                inv.specification_id
            ),
        );
    }
    if inv.number.trim().is_empty() {
        report(out, &BR_2, "invoice number is missing");
    }
    if inv.issue_date.is_none() {
        report(out, &BR_3, "invoice issue date is missing");
    }
    if !inv.type_code.is_set() {
        report(out, &BR_4, "invoice type code is missing");
    }
    if inv.currency.trim().is_empty() {
        report(out, &BR_5, "invoice currency code is missing");
    }
}

fn parties(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let profile = inv.profile.effective();

    if inv.seller.name.trim().is_empty() {
        report(out, &BR_6, "seller name is missing");
    }
    if inv.buyer.name.trim().is_empty() {
        report(out, &BR_7, "buyer name is missing");
    }
    match &inv.seller.postal_address {
        None => report(out, &BR_8, "seller postal address is missing"),
        Some(a) if a.country_code.trim().is_empty() => {
            report(out, &BR_9, "seller country code is missing")
        }
        Some(_) => {}
    }
    if profile >= Profile::BasicWl {
        match &inv.buyer.postal_address {
            None => report(out, &BR_10, "buyer postal address is missing"),
            Some(a) if a.country_code.trim().is_empty() => {
                report(out, &BR_11, "buyer country code is missing")
            }
            Some(_) => {}
        }
    }

    if let Some(payee) = &inv.payee {
        if payee.name.trim().is_empty() {
            report(out, &BR_17, "payee name is missing");
        }
    }
    if let Some(rep) = &inv.tax_representative {
        if rep.name.trim().is_empty() {
            report(out, &BR_18, "tax representative name is missing");
        }
        match &rep.postal_address {
            None => report(out, &BR_19, "tax representative postal address is missing"),
            Some(a) if a.country_code.trim().is_empty() => {
                report(out, &BR_20, "tax representative country code is missing")
            }
            Some(_) => {}
        }
        if blank(&rep.vat_id) {
            report(out, &BR_56, "tax representative VAT identifier is missing");
        }
    }
    if let Some(ship_to) = &inv.ship_to {
        if let Some(a) = &ship_to.postal_address {
            if a.country_code.trim().is_empty() {
                report(out, &BR_57, "deliver to country code is missing");
            }
        }
    }
}

/// BR-12 to BR-15 look at whether the summation elements existed, not at
/// their values: a zero total is legal.
fn summation_presence(inv: &Invoice, out: &mut Vec<SemanticError>) {
    if inv.profile.effective() >= Profile::BasicWl && !inv.presence.line_total {
        report(out, &BR_12, "sum of invoice line net amounts is missing");
    }
    if !inv.presence.tax_basis_total {
        report(out, &BR_13, "invoice total amount without VAT is missing");
    }
    if !inv.presence.grand_total {
        report(out, &BR_14, "invoice total amount with VAT is missing");
    }
    if !inv.presence.due_payable {
        report(out, &BR_15, "amount due for payment is missing");
    }
}

fn invoice_lines(inv: &Invoice, out: &mut Vec<SemanticError>) {
    if inv.profile.effective() >= Profile::Basic && inv.lines.is_empty() {
        report(out, &BR_16, "invoice has no lines");
    }

    for (i, line) in inv.lines.iter().enumerate() {
        let n = i + 1;
        if line.id.trim().is_empty() {
            report(out, &BR_21, format!("line {n} has no identifier"));
        }
        if line.unit_code.trim().is_empty() {
            report(out, &BR_23, format!("line {} has no unit code", line.id));
        }
        if line.item.name.trim().is_empty() {
            report(out, &BR_25, format!("line {} has no item name", line.id));
        }
        if line.net_price < Decimal::ZERO {
            report(
                out,
                &BR_27,
                format!("line {} net price {} is negative", line.id, line.net_price),
            );
        }
        if let Some(gross) = line.gross_price.filter(|g| *g < Decimal::ZERO) {
            report(
                out,
                &BR_28,
                format!("line {} gross price {gross} is negative", line.id),
            );
        }
        for ac in &line.allowance_charges {
            let reasonless = blank(&ac.reason) && blank(&ac.reason_code);
            if reasonless && ac.charge_indicator {
                report(
                    out,
                    &BR_44,
                    format!("line {} charge {} has no reason", line.id, ac.actual_amount),
                );
            } else if reasonless {
                report(
                    out,
                    &BR_42,
                    format!("line {} allowance {} has no reason", line.id, ac.actual_amount),
                );
            }
        }
        for attr in &line.item.attributes {
            if attr.name.trim().is_empty() || attr.value.trim().is_empty() {
                report(
                    out,
                    &BR_54,
                    format!(
                        "line {} item attribute \"{}\" = \"{}\" is incomplete",
                        line.id, attr.name, attr.value
                    ),
                );
            }
        }
        if let Some(id) = &line.item.standard_id {
            if blank(&id.scheme) {
                report(
                    out,
                    &BR_64,
                    format!("line {} standard identifier {} has no scheme", line.id, id.value),
                );
            }
        }
        for class in &line.item.classifications {
            if blank(&class.list_id) {
                report(
                    out,
                    &BR_65,
                    format!(
                        "line {} classification {} has no scheme",
                        line.id, class.code
                    ),
                );
            }
        }
    }
}

fn periods(inv: &Invoice, out: &mut Vec<SemanticError>) {
    if let (Some(start), Some(end)) = (inv.billing_period.start, inv.billing_period.end) {
        if end < start {
            report(
                out,
                &BR_29,
                format!("invoicing period ends {end} before it starts {start}"),
            );
        }
    }
    for line in &inv.lines {
        if let (Some(start), Some(end)) = (line.period.start, line.period.end) {
            if end < start {
                report(
                    out,
                    &BR_30,
                    format!("line {} period ends {end} before it starts {start}", line.id),
                );
            }
        }
    }
}

fn document_allowances(inv: &Invoice, out: &mut Vec<SemanticError>) {
    for ac in &inv.allowance_charges {
        let reasonless = blank(&ac.reason) && blank(&ac.reason_code);
        if ac.charge_indicator {
            if ac.tax_category.is_none() {
                report(
                    out,
                    &BR_37,
                    format!("charge {} has no VAT category code", ac.actual_amount),
                );
            }
            if reasonless {
                report(out, &BR_38, format!("charge {} has no reason", ac.actual_amount));
            }
        } else {
            if ac.tax_category.is_none() {
                report(
                    out,
                    &BR_32,
                    format!("allowance {} has no VAT category code", ac.actual_amount),
                );
            }
            if reasonless {
                report(
                    out,
                    &BR_33,
                    format!("allowance {} has no reason", ac.actual_amount),
                );
            }
        }
    }
}

fn breakdown(inv: &Invoice, out: &mut Vec<SemanticError>) {
    // Without lines the breakdown cannot be recomputed.
    let contributions = match inv.lines.is_empty() {
        true => None,
        false => {
            let contributions = inv.tax_contributions();
            if contributions.is_none() {
                overflow(out, "VAT breakdown taxable amounts");
            }
            contributions
        }
    };
    for tax in &inv.trade_taxes {
        let category = tax.category.as_ref().map(|c| c.code()).unwrap_or("");
        let rate = tax.rate.map(|r| r.normalize().to_string()).unwrap_or_default();

        if let Some(contributions) = &contributions {
            let expected = contributions
                .iter()
                .find(|((c, r), _)| *c == tax.category && *r == tax.rate)
                .map(|(_, amount)| *amount)
                .unwrap_or_default();
            if tax.basis_amount != round_half_up(expected, 2) {
                report(
                    out,
                    &BR_45,
                    format!(
                        "VAT breakdown {category} {rate}% has basis {} but lines, allowances and charges sum to {}",
                        tax.basis_amount,
                        round_half_up(expected, 2)
                    ),
                );
            }
        }
        if tax.category.is_none() {
            report(out, &BR_47, "VAT breakdown has no category code");
        }
        if tax.rate.is_none() && tax.category != Some(TaxCategory::NotSubjectToVat) {
            report(
                out,
                &BR_48,
                format!("VAT breakdown {category} has no rate"),
            );
        }
    }
}

fn payment(inv: &Invoice, out: &mut Vec<SemanticError>) {
    for means in &inv.payment_means {
        if means.type_code.is_none() {
            report(out, &BR_49, "payment means type code is missing");
        }
        if let Some(account) = &means.payee_account {
            if account.account_id().is_none() {
                report(out, &BR_50, "credit transfer has no payment account identifier");
            }
        }
        if let Some(card) = &means.card {
            if visible_digits(card) > 10 {
                report(
                    out,
                    &BR_51,
                    format!("card number {} shows more than 10 digits", card.pan),
                );
            }
        }
    }
}

fn visible_digits(card: &PaymentCard) -> usize {
    card.pan.chars().filter(|c| c.is_ascii_digit()).count()
}

fn references(inv: &Invoice, out: &mut Vec<SemanticError>) {
    for doc in &inv.supporting_documents {
        if doc.id.trim().is_empty() {
            report(
                out,
                &BR_52,
                format!(
                    "supporting document \"{}\" has no reference",
                    show(&doc.description)
                ),
            );
        }
    }
    for preceding in &inv.preceding_invoices {
        if preceding.number.trim().is_empty() {
            report(out, &BR_55, "preceding invoice reference has no number");
        }
    }
    if !blank(&inv.tax_currency) && !inv.presence.tax_total_accounting {
        report(
            out,
            &BR_53,
            format!(
                "VAT accounting currency {} given but no VAT total in that currency",
                show(&inv.tax_currency)
            ),
        );
    }
}

fn electronic_addresses(inv: &Invoice, out: &mut Vec<SemanticError>) {
    if let Some(addr) = &inv.seller.electronic_address {
        if addr.scheme.trim().is_empty() {
            report(
                out,
                &BR_62,
                format!("seller electronic address {} has no scheme", addr.uri),
            );
        }
    }
    if let Some(addr) = &inv.buyer.electronic_address {
        if addr.scheme.trim().is_empty() {
            report(
                out,
                &BR_63,
                format!("buyer electronic address {} has no scheme", addr.uri),
            );
        }
    }
}
