//! PEPPOL BIS Billing 3.0 rules.

use rust_decimal::Decimal;

use super::{blank, overflow, report, show};
use crate::core::decimal::{checked_sum, round_half_up};
use crate::core::{
    AllowanceCharge, Invoice, PEPPOL_URN, PaymentMeansCode, SemanticError, is_peppol_process,
};
use crate::rules::*;

pub(super) fn check(inv: &Invoice, out: &mut Vec<SemanticError>) {
    document(inv, out);
    allowance_charges(inv, out);
    payment(inv, out);
    lines(inv, out);
}

fn document(inv: &Invoice, out: &mut Vec<SemanticError>) {
    match inv.business_process.as_deref().map(str::trim) {
        None | Some("") => report(out, &PEPPOL_R001, "business process is missing"),
        Some(process) if !is_peppol_process(process) => report(
            out,
            &PEPPOL_R007,
            format!("business process \"{process}\" is not a PEPPOL billing process"),
        ),
        Some(_) => {}
    }

    let german = inv.seller.country_code() == "DE" && inv.buyer.country_code() == "DE";
    if inv.notes.len() > 1 && !german {
        report(
            out,
            &PEPPOL_R002,
            format!("{} notes on document level", inv.notes.len()),
        );
    }

    if blank(&inv.buyer_reference) && blank(&inv.purchase_order_reference) {
        report(out, &PEPPOL_R003, "neither buyer reference nor purchase order reference given");
    }

    if inv.specification_id.trim() != PEPPOL_URN {
        report(
            out,
            &PEPPOL_R004,
            format!("specification identifier \"{}\"", inv.specification_id),
        );
    }

    if inv.tax_currency.as_deref() == Some(inv.currency.as_str()) {
        report(
            out,
            &PEPPOL_R005,
            format!(
                "VAT accounting currency {} equals invoice currency",
                show(&inv.tax_currency)
            ),
        );
    }

    if inv.buyer.electronic_address.is_none() {
        report(out, &PEPPOL_R010, "buyer electronic address is missing");
    }
    if inv.seller.electronic_address.is_none() {
        report(out, &PEPPOL_R020, "seller electronic address is missing");
    }

    let t = &inv.totals;
    if inv.presence.tax_total_accounting
        && (t.tax_total.is_sign_negative() != t.tax_total_accounting.is_sign_negative())
        && !t.tax_total.is_zero()
        && !t.tax_total_accounting.is_zero()
    {
        report(
            out,
            &PEPPOL_R055,
            format!(
                "VAT total {} and VAT total in accounting currency {} differ in sign",
                t.tax_total, t.tax_total_accounting
            ),
        );
    }
}

fn allowance_charges(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let document = inv.allowance_charges.iter();
    let lines = inv.lines.iter().flat_map(|l| l.allowance_charges.iter());
    for ac in document.chain(lines) {
        percentage(ac, out);
    }
}

fn percentage(ac: &AllowanceCharge, out: &mut Vec<SemanticError>) {
    let what = if ac.charge_indicator { "charge" } else { "allowance" };
    match (ac.basis_amount, ac.calculation_percent) {
        (Some(basis), Some(percent)) => {
            let Some(expected) = basis
                .checked_mul(percent)
                .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
                .map(|v| round_half_up(v, 2))
            else {
                overflow(out, &format!("{what} amount from base amount {basis}"));
                return;
            };
            if ac.actual_amount != expected {
                report(
                    out,
                    &PEPPOL_R040,
                    format!(
                        "{what} amount {} but {basis} x {percent}% = {expected}",
                        ac.actual_amount
                    ),
                );
            }
        }
        (None, Some(percent)) => report(
            out,
            &PEPPOL_R041,
            format!("{what} percentage {percent} without base amount"),
        ),
        (Some(basis), None) => report(
            out,
            &PEPPOL_R042,
            format!("{what} base amount {basis} without percentage"),
        ),
        (None, None) => {}
    }
}

fn payment(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let mandate = inv
        .payment_means
        .iter()
        .filter_map(|m| m.direct_debit.as_ref())
        .any(|d| !blank(&d.mandate_id))
        || inv
            .payment_terms
            .iter()
            .any(|t| !blank(&t.direct_debit_mandate_id));
    let sepa_debit = inv
        .payment_means
        .iter()
        .any(|m| m.type_code == Some(PaymentMeansCode::SepaDirectDebit));
    if sepa_debit && !mandate {
        report(out, &PEPPOL_R061, "SEPA direct debit without mandate reference");
    }
}

fn lines(inv: &Invoice, out: &mut Vec<SemanticError>) {
    for line in &inv.lines {
        if line.price_allowance_charges.iter().any(|ac| ac.charge_indicator) {
            report(
                out,
                &PEPPOL_R044,
                format!("line {} has a charge on price level", line.id),
            );
        }

        if let Some(gross) = line.gross_price {
            let discounted = checked_sum(
                line.price_allowance_charges
                    .iter()
                    .filter(|ac| !ac.charge_indicator)
                    .map(|ac| ac.actual_amount),
            )
            .and_then(|discount| Some((discount, gross.checked_sub(discount)?)));
            match discounted {
                Some((discount, expected))
                    if !discount.is_zero() && line.net_price != expected =>
                {
                    report(
                        out,
                        &PEPPOL_R046,
                        format!(
                            "line {} net price {} but {gross} - {discount} = {expected}",
                            line.id, line.net_price
                        ),
                    )
                }
                Some(_) => {}
                None => overflow(out, &format!("line {} discounted price", line.id)),
            }
        }

        if let Some(start) = line.period.start {
            if inv.billing_period.start.is_some_and(|s| start < s) {
                report(
                    out,
                    &PEPPOL_R110,
                    format!("line {} period starts {start} before the invoice period", line.id),
                );
            }
        }
        if let Some(end) = line.period.end {
            if inv.billing_period.end.is_some_and(|e| end > e) {
                report(
                    out,
                    &PEPPOL_R111,
                    format!("line {} period ends {end} after the invoice period", line.id),
                );
            }
        }

        // An overflowing line amount is reported by the line checks.
        if let Some(expected) = line.computed_total().filter(|e| *e != line.total) {
            report(
                out,
                &PEPPOL_R120,
                format!("line {} net amount {} but expected {expected}", line.id, line.total),
            );
        }

        if let Some(basis) = line.basis_quantity.filter(|q| *q <= Decimal::ZERO) {
            report(
                out,
                &PEPPOL_R121,
                format!("line {} price base quantity {basis} is not positive", line.id),
            );
        }

        if !blank(&line.order_line_reference) && blank(&inv.purchase_order_reference) {
            report(
                out,
                &PEPPOL_R130,
                format!("line {} references an order line without purchase order", line.id),
            );
        }
    }
}
