use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::decimal::{checked_sum, round_half_up};
use super::types::*;

/// Options for [`Invoice::update_totals_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsOptions {
    /// Rate from the invoice currency (BT-5) into the VAT accounting
    /// currency (BT-6). When set and the currencies differ, BT-111 is
    /// recomputed as `round(BT-110 × rate, 2)`.
    pub exchange_rate: Option<Decimal>,
}

/// Composite grouping key of the VAT breakdown.
type TaxKey = (Option<TaxCategory>, Option<Decimal>);

impl InvoiceLine {
    /// Net amount from quantity, price and line allowances/charges:
    /// `quantity × net price / basis quantity − allowances + charges`,
    /// rounded to 2 places.
    ///
    /// `None` when an intermediate result does not fit a [`Decimal`].
    pub fn computed_total(&self) -> Option<Decimal> {
        let basis = match self.basis_quantity {
            Some(q) if !q.is_zero() => q,
            _ => Decimal::ONE,
        };
        let mut total = self
            .billed_quantity
            .checked_mul(self.net_price)?
            .checked_div(basis)?;
        for ac in &self.allowance_charges {
            total = total.checked_add(ac.signed_amount())?;
        }
        Some(round_half_up(total, 2))
    }

    fn tax_key(&self) -> TaxKey {
        (self.tax_category.clone(), self.tax_rate)
    }
}

impl AllowanceCharge {
    /// Contribution to a tax basis: `+amount` for charges, `-amount` for allowances.
    pub fn signed_amount(&self) -> Decimal {
        if self.charge_indicator {
            self.actual_amount
        } else {
            -self.actual_amount
        }
    }

    fn tax_key(&self) -> TaxKey {
        (self.tax_category.clone(), self.tax_rate)
    }
}

impl TradeTax {
    fn tax_key(&self) -> TaxKey {
        (self.category.clone(), self.rate)
    }
}

impl Invoice {
    /// Rebuild the VAT breakdown (BG-23) from the lines and the document
    /// level allowances and charges.
    ///
    /// Entries are grouped by `(category, rate)` in first-seen order. The
    /// basis is the sum of line totals plus charges minus allowances for the
    /// key; the tax amount is `round(basis × rate / 100, 2)`.
    /// `exemption_reasons` maps a category code (e.g. `"AE"`) to the BT-120
    /// text for that category.
    ///
    /// On overflow the breakdown is left as it was.
    pub fn update_applicable_trade_tax(&mut self, exemption_reasons: &BTreeMap<String, String>) {
        let Some(taxes) = self.breakdown_from_scratch(exemption_reasons) else {
            warn!(number = %self.number, "VAT breakdown overflows, left unchanged");
            return;
        };
        self.trade_taxes = taxes;
    }

    /// Recompute BT-106 to BT-115 so that BR-CO-10 to BR-CO-16 hold.
    pub fn update_totals(&mut self) {
        self.update_totals_with(&TotalsOptions::default());
    }

    /// [`Invoice::update_totals`] with options.
    ///
    /// Invoices without lines (Minimum, Basic WL) keep their line total and
    /// breakdown; everything derived from them is still recomputed. If any
    /// sum or product overflows, the invoice is left unchanged.
    pub fn update_totals_with(&mut self, options: &TotalsOptions) {
        let Some((trade_taxes, totals)) = self.recomputed_totals(options) else {
            warn!(number = %self.number, "document totals overflow, left unchanged");
            return;
        };
        self.trade_taxes = trade_taxes;
        self.totals = totals;

        if self.accounting_rate(options).is_some() {
            self.presence.tax_total_accounting = true;
        }
        self.presence.line_total = true;
        self.presence.tax_basis_total = true;
        self.presence.grand_total = true;
        self.presence.due_payable = true;
    }

    fn recomputed_totals(
        &self,
        options: &TotalsOptions,
    ) -> Option<(Vec<TradeTax>, MonetarySummation)> {
        let mut totals = self.totals.clone();
        let trade_taxes = if self.lines.is_empty() {
            self.trade_taxes.clone()
        } else {
            totals.line_total = checked_sum(self.lines.iter().map(|l| l.total))?;
            self.refreshed_trade_taxes()?
        };

        totals.allowance_total = checked_sum(
            self.allowance_charges
                .iter()
                .filter(|ac| !ac.charge_indicator)
                .map(|ac| ac.actual_amount),
        )?;
        totals.charge_total = checked_sum(
            self.allowance_charges
                .iter()
                .filter(|ac| ac.charge_indicator)
                .map(|ac| ac.actual_amount),
        )?;
        totals.tax_basis_total = totals
            .line_total
            .checked_sub(totals.allowance_total)?
            .checked_add(totals.charge_total)?;
        totals.tax_total = checked_sum(trade_taxes.iter().map(|t| t.calculated_amount))?;
        totals.grand_total = totals.tax_basis_total.checked_add(totals.tax_total)?;
        totals.due_payable = totals
            .grand_total
            .checked_sub(totals.prepaid)?
            .checked_add(totals.rounding)?;

        if let Some(rate) = self.accounting_rate(options) {
            totals.tax_total_accounting = round_half_up(totals.tax_total.checked_mul(rate)?, 2);
        }
        Some((trade_taxes, totals))
    }

    /// The exchange rate, if BT-111 is to be derived from it.
    fn accounting_rate(&self, options: &TotalsOptions) -> Option<Decimal> {
        let foreign_tax_currency = self
            .tax_currency
            .as_deref()
            .is_some_and(|c| !c.is_empty() && c != self.currency);
        options.exchange_rate.filter(|_| foreign_tax_currency)
    }

    fn breakdown_from_scratch(
        &self,
        exemption_reasons: &BTreeMap<String, String>,
    ) -> Option<Vec<TradeTax>> {
        let mut taxes = Vec::new();
        for ((category, rate), amount) in self.tax_contributions()? {
            let basis = round_half_up(amount, 2);
            let exemption_reason = category
                .as_ref()
                .and_then(|c| exemption_reasons.get(c.code()))
                .cloned();
            taxes.push(TradeTax {
                type_code: "VAT".to_string(),
                calculated_amount: category_tax(basis, rate)?,
                category,
                rate,
                basis_amount: basis,
                exemption_reason,
                ..Default::default()
            });
        }
        Some(taxes)
    }

    /// Basis and tax of every breakdown key, keeping exemption reasons and
    /// tax point data of entries that already exist.
    fn refreshed_trade_taxes(&self) -> Option<Vec<TradeTax>> {
        let mut taxes = Vec::new();
        for (key, amount) in self.tax_contributions()? {
            let basis = round_half_up(amount, 2);
            let mut entry = self
                .trade_taxes
                .iter()
                .find(|t| t.tax_key() == key)
                .cloned()
                .unwrap_or_else(|| TradeTax {
                    type_code: "VAT".to_string(),
                    category: key.0.clone(),
                    rate: key.1,
                    ..Default::default()
                });
            entry.basis_amount = basis;
            entry.calculated_amount = category_tax(basis, key.1)?;
            taxes.push(entry);
        }
        Some(taxes)
    }

    /// Summed basis per composite key, in first-seen order (lines first,
    /// then document allowances and charges). `None` on overflow.
    pub(crate) fn tax_contributions(&self) -> Option<Vec<(TaxKey, Decimal)>> {
        let mut groups: Vec<(TaxKey, Decimal)> = Vec::new();
        let amounts = self
            .lines
            .iter()
            .map(|l| (l.tax_key(), l.total))
            .chain(
                self.allowance_charges
                    .iter()
                    .map(|ac| (ac.tax_key(), ac.signed_amount())),
            );
        for (key, amount) in amounts {
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, sum)) => *sum = sum.checked_add(amount)?,
                None => groups.push((key, amount)),
            }
        }
        Some(groups)
    }
}

/// `round(basis × rate / 100, 2)`; no rate means no tax. `None` on overflow.
pub(crate) fn category_tax(basis: Decimal, rate: Option<Decimal>) -> Option<Decimal> {
    match rate {
        Some(rate) => {
            let tax = basis.checked_mul(rate)?.checked_div(Decimal::ONE_HUNDRED)?;
            Some(round_half_up(tax, 2))
        }
        None => Some(Decimal::ZERO),
    }
}
