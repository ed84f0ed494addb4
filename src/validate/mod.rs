//! Business rule validation.
//!
//! [`Invoice::validate`] runs the phases below in a fixed order so that two
//! runs over the same invoice report the same violations in the same order:
//!
//! 1. structural presence (`BR-1` to `BR-65`)
//! 2. arithmetic (`BR-CO-10` to `BR-CO-17`, `BR-DEC-*`)
//! 3. cross-field (`BR-CO-3`, `BR-CO-4`, `BR-CO-9`, `BR-CO-18` to `BR-CO-26`)
//! 4. VAT category families (`BR-S-*`, `BR-Z-*`, ...)
//! 5. code lists (`BR-CL-*`)
//! 6. line and currency checks of this crate
//! 7. XRechnung (`BR-DE-*`) when the profile is XRechnung
//! 8. PEPPOL (`PEPPOL-EN16931-R*`) for PEPPOL invoices

mod calculation;
mod codelists;
mod cross;
mod lines;
mod peppol;
mod structure;
mod vat;
mod xrechnung;

use tracing::debug;

use crate::core::{Invoice, Profile, SemanticError, ValidationError, is_peppol_process};
use crate::core::{PEPPOL_URN, is_blank};
use crate::rules::Rule;

impl Invoice {
    /// Check every applicable rule.
    ///
    /// Previous violations are discarded first. All violations, including
    /// those of warning severity, are stored in [`Invoice::violations`] and
    /// returned together as a [`ValidationError`].
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.violations.clear();

        let mut out = Vec::new();
        structure::check(self, &mut out);
        calculation::check(self, &mut out);
        cross::check(self, &mut out);
        vat::check(self, &mut out);
        codelists::check(self, &mut out);
        lines::check(self, &mut out);
        if self.profile == Profile::XRechnung {
            xrechnung::check(self, &mut out);
        }
        if self.is_peppol() {
            peppol::check(self, &mut out);
        }

        debug!(
            number = %self.number,
            profile = %self.profile,
            violations = out.len(),
            "validated invoice"
        );

        self.violations = out;
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.violations.clone()))
        }
    }

    /// Whether the invoice follows PEPPOL BIS Billing 3.0, judged by its
    /// business process (BT-23) or specification identifier (BT-24).
    pub fn is_peppol(&self) -> bool {
        self.business_process
            .as_deref()
            .is_some_and(is_peppol_process)
            || self.specification_id == PEPPOL_URN
    }
}

fn report(out: &mut Vec<SemanticError>, rule: &'static Rule, text: impl Into<String>) {
    out.push(SemanticError::new(rule, text));
}

fn overflow(out: &mut Vec<SemanticError>, what: &str) {
    report(
        out,
        &crate::rules::CALC_OVERFLOW,
        format!("{what} exceeds the decimal range"),
    );
}

fn blank(value: &Option<String>) -> bool {
    is_blank(value)
}

fn show(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
