//! Arithmetic rules `BR-CO-10` to `BR-CO-17` and decimal precision
//! rules `BR-DEC-*`.

use rust_decimal::Decimal;

use super::{overflow, report};
use crate::core::decimal::{checked_sum, fraction_digits};
use crate::core::totals::category_tax;
use crate::core::{Invoice, SemanticError};
use crate::rules::*;

pub(super) fn check(inv: &Invoice, out: &mut Vec<SemanticError>) {
    sums(inv, out);
    category_amounts(inv, out);
    precision(inv, out);
}

fn sums(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let t = &inv.totals;

    if !inv.lines.is_empty() {
        match checked_sum(inv.lines.iter().map(|l| l.total)) {
            Some(lines) if t.line_total != lines => report(
                out,
                &BR_CO_10,
                format!("line total {} but lines sum to {lines}", t.line_total),
            ),
            Some(_) => {}
            None => overflow(out, "sum of line net amounts"),
        }
    }

    let allowances = checked_sum(
        inv.allowance_charges
            .iter()
            .filter(|ac| !ac.charge_indicator)
            .map(|ac| ac.actual_amount),
    );
    match allowances {
        Some(allowances) if t.allowance_total != allowances => report(
            out,
            &BR_CO_11,
            format!(
                "allowance total {} but allowances sum to {allowances}",
                t.allowance_total
            ),
        ),
        Some(_) => {}
        None => overflow(out, "sum of allowances"),
    }

    let charges = checked_sum(
        inv.allowance_charges
            .iter()
            .filter(|ac| ac.charge_indicator)
            .map(|ac| ac.actual_amount),
    );
    match charges {
        Some(charges) if t.charge_total != charges => report(
            out,
            &BR_CO_12,
            format!("charge total {} but charges sum to {charges}", t.charge_total),
        ),
        Some(_) => {}
        None => overflow(out, "sum of charges"),
    }

    let basis = t
        .line_total
        .checked_sub(t.allowance_total)
        .and_then(|v| v.checked_add(t.charge_total));
    match basis {
        Some(basis) if t.tax_basis_total != basis => report(
            out,
            &BR_CO_13,
            format!(
                "total without VAT {} but {} - {} + {} = {basis}",
                t.tax_basis_total, t.line_total, t.allowance_total, t.charge_total
            ),
        ),
        Some(_) => {}
        None => overflow(out, "total without VAT"),
    }

    match checked_sum(inv.trade_taxes.iter().map(|tt| tt.calculated_amount)) {
        Some(taxes) if t.tax_total != taxes => report(
            out,
            &BR_CO_14,
            format!("VAT total {} but VAT breakdown sums to {taxes}", t.tax_total),
        ),
        Some(_) => {}
        None => overflow(out, "sum of VAT category tax amounts"),
    }

    match t.tax_basis_total.checked_add(t.tax_total) {
        Some(grand) if t.grand_total != grand => report(
            out,
            &BR_CO_15,
            format!(
                "total with VAT {} but {} + {} = {grand}",
                t.grand_total, t.tax_basis_total, t.tax_total
            ),
        ),
        Some(_) => {}
        None => overflow(out, "total with VAT"),
    }

    let due = t
        .grand_total
        .checked_sub(t.prepaid)
        .and_then(|v| v.checked_add(t.rounding));
    match due {
        Some(due) if t.due_payable != due => report(
            out,
            &BR_CO_16,
            format!(
                "amount due {} but {} - {} + {} = {due}",
                t.due_payable, t.grand_total, t.prepaid, t.rounding
            ),
        ),
        Some(_) => {}
        None => overflow(out, "amount due"),
    }
}

fn category_amounts(inv: &Invoice, out: &mut Vec<SemanticError>) {
    for tax in &inv.trade_taxes {
        let Some(rate) = tax.rate else { continue };
        let category = tax.category.as_ref().map(|c| c.code()).unwrap_or("");
        let Some(expected) = category_tax(tax.basis_amount, Some(rate)) else {
            overflow(out, &format!("VAT category {category} tax amount"));
            continue;
        };
        if tax.calculated_amount != expected {
            report(
                out,
                &BR_CO_17,
                format!(
                    "VAT category {category} tax {} but {} x {}% = {expected}",
                    tax.calculated_amount,
                    tax.basis_amount,
                    rate.normalize()
                ),
            );
        }
    }
}

fn precision(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let mut dec2 = |rule: &'static crate::rules::Rule, what: &str, value: Decimal| {
        if fraction_digits(value) > 2 {
            report(
                out,
                rule,
                format!("{what} {value} has more than 2 decimals"),
            );
        }
    };

    for ac in &inv.allowance_charges {
        if ac.charge_indicator {
            dec2(&BR_DEC_05, "charge amount", ac.actual_amount);
            if let Some(basis) = ac.basis_amount {
                dec2(&BR_DEC_06, "charge base amount", basis);
            }
        } else {
            dec2(&BR_DEC_01, "allowance amount", ac.actual_amount);
            if let Some(basis) = ac.basis_amount {
                dec2(&BR_DEC_02, "allowance base amount", basis);
            }
        }
    }

    let t = &inv.totals;
    dec2(&BR_DEC_09, "line total", t.line_total);
    dec2(&BR_DEC_10, "allowance total", t.allowance_total);
    dec2(&BR_DEC_11, "charge total", t.charge_total);
    dec2(&BR_DEC_12, "total without VAT", t.tax_basis_total);
    dec2(&BR_DEC_13, "VAT total", t.tax_total);
    dec2(&BR_DEC_14, "total with VAT", t.grand_total);
    dec2(&BR_DEC_15, "VAT total in accounting currency", t.tax_total_accounting);
    dec2(&BR_DEC_16, "paid amount", t.prepaid);
    dec2(&BR_DEC_17, "rounding amount", t.rounding);
    dec2(&BR_DEC_18, "amount due", t.due_payable);

    for tax in &inv.trade_taxes {
        dec2(&BR_DEC_19, "VAT category taxable amount", tax.basis_amount);
        dec2(&BR_DEC_20, "VAT category tax amount", tax.calculated_amount);
    }

    for line in &inv.lines {
        dec2(&BR_DEC_23, "line net amount", line.total);
        for ac in &line.allowance_charges {
            if ac.charge_indicator {
                dec2(&BR_DEC_27, "line charge amount", ac.actual_amount);
                if let Some(basis) = ac.basis_amount {
                    dec2(&BR_DEC_28, "line charge base amount", basis);
                }
            } else {
                dec2(&BR_DEC_24, "line allowance amount", ac.actual_amount);
                if let Some(basis) = ac.basis_amount {
                    dec2(&BR_DEC_25, "line allowance base amount", basis);
                }
            }
        }
    }
}
