//! Cross-field rules `BR-CO-*` that relate several business terms.

use rust_decimal::Decimal;

use super::{blank, report};
use crate::core::{Invoice, Profile, SemanticError};
use crate::rules::*;

pub(super) fn check(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let profile = inv.profile.effective();

    for tax in &inv.trade_taxes {
        if let (Some(date), Some(code)) = (tax.tax_point_date, &tax.due_date_type_code) {
            report(
                out,
                &BR_CO_03,
                format!("VAT tax point date {date} and tax point date code {code} are both given"),
            );
        }
    }

    for line in &inv.lines {
        if line.tax_category.is_none() {
            report(
                out,
                &BR_CO_04,
                format!("line {} has no VAT category code", line.id),
            );
        }
    }

    let vat_ids = [
        ("seller", &inv.seller.vat_id),
        ("buyer", &inv.buyer.vat_id),
        (
            "tax representative",
            inv.tax_representative
                .as_ref()
                .map(|p| &p.vat_id)
                .unwrap_or(&None),
        ),
    ];
    for (who, id) in vat_ids {
        if let Some(id) = id.as_deref().filter(|s| !s.trim().is_empty()) {
            if !has_country_prefix(id) {
                report(
                    out,
                    &BR_CO_09,
                    format!("{who} VAT identifier \"{id}\" has no country prefix"),
                );
            }
        }
    }

    if profile >= Profile::BasicWl && inv.trade_taxes.is_empty() {
        report(out, &BR_CO_18, "invoice has no VAT breakdown");
    }

    if inv.presence.billing_period && inv.billing_period.is_empty() {
        report(out, &BR_CO_19, "invoicing period has neither start nor end date");
    }
    for line in &inv.lines {
        if line.period_present && line.period.is_empty() {
            report(
                out,
                &BR_CO_20,
                format!("line {} period has neither start nor end date", line.id),
            );
        }
    }

    if inv.totals.due_payable > Decimal::ZERO {
        let has_terms = inv
            .payment_terms
            .iter()
            .any(|t| t.due_date.is_some() || !blank(&t.description));
        if !has_terms {
            report(
                out,
                &BR_CO_25,
                format!(
                    "amount due {} but neither payment due date nor payment terms given",
                    inv.totals.due_payable
                ),
            );
        }
    }

    if profile >= Profile::BasicWl {
        let seller = &inv.seller;
        let identified = seller.ids.iter().any(|id| !id.trim().is_empty())
            || seller.global_ids.iter().any(|id| !id.value.trim().is_empty())
            || seller
                .legal_organization
                .as_ref()
                .is_some_and(|lo| !blank(&lo.id))
            || !blank(&seller.vat_id);
        if !identified {
            report(
                out,
                &BR_CO_26,
                "seller has neither identifier, legal registration identifier nor VAT identifier",
            );
        }
    }
}

/// Two upper case letters followed by at least one more character.
fn has_country_prefix(id: &str) -> bool {
    let bytes = id.as_bytes();
    bytes.len() > 2 && bytes[0].is_ascii_uppercase() && bytes[1].is_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_prefix() {
        assert!(has_country_prefix("DE123456789"));
        assert!(has_country_prefix("EL123"));
        assert!(has_country_prefix("ATU1"));
        assert!(!has_country_prefix("DE"));
        assert!(!has_country_prefix("de123"));
        assert!(!has_country_prefix("123456789"));
        assert!(!has_country_prefix(""));
    }
}
