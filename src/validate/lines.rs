//! Line net amount and tax total currency checks.

use super::{overflow, report};
use crate::core::{Invoice, SemanticError};
use crate::rules::*;

pub(super) fn check(inv: &Invoice, out: &mut Vec<SemanticError>) {
    for line in &inv.lines {
        let Some(expected) = line.computed_total() else {
            overflow(out, &format!("line {} net amount", line.id));
            continue;
        };
        if line.total != expected {
            report(
                out,
                &CALC_LINE_TOTAL,
                format!(
                    "line {} net amount {} but {} x {} gives {expected}",
                    line.id, line.total, line.billed_quantity, line.net_price
                ),
            );
        }
    }

    for currency in &inv.unexpected_tax_currencies {
        report(
            out,
            &TAX_TOTAL_CURRENCY,
            format!(
                "VAT total given in {currency}, expected {}{}",
                inv.currency,
                inv.tax_currency
                    .as_deref()
                    .map(|c| format!(" or {c}"))
                    .unwrap_or_default()
            ),
        );
    }
}
