//! Business rule catalogue.
//!
//! Every check the validator performs is identified by a [`Rule`]: a stable
//! code, the BT/BG identifiers it concerns and its description. The tables
//! cover EN 16931 (`BR-*`), the XRechnung CIUS (`BR-DE-*`), PEPPOL BIS
//! Billing 3.0 (`PEPPOL-EN16931-R*`) and a few checks of this crate.
//!
//! IGIC and IPSI rules are published under two names. The catalogue holds
//! them as `BR-AF-n` and `BR-AG-n`; `BR-IG-n` and `BR-IP-n` are accepted as
//! synonyms by [`lookup`] and [`ValidationError::has_rule_code`](crate::ValidationError::has_rule_code).

use serde::Serialize;

/// How binding a rule is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A business rule.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rule {
    /// Rule code, e.g. `BR-CO-14`.
    pub code: &'static str,
    /// Affected business terms and groups, most relevant first.
    pub fields: &'static [&'static str],
    /// Rule text.
    pub description: &'static str,
    /// `None` for rules that are always errors.
    pub severity: Option<Severity>,
}

impl Rule {
    /// Whether a violation of this rule makes the invoice invalid.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, None | Some(Severity::Error))
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

macro_rules! severity {
    () => {
        None
    };
    (error) => {
        Some($crate::rules::Severity::Error)
    };
    (warning) => {
        Some($crate::rules::Severity::Warning)
    };
    (info) => {
        Some($crate::rules::Severity::Info)
    };
}

/// Declares one `pub static` per rule plus a crate-visible slice `$table`
/// of all of them.
macro_rules! rule_table {
    ($table:ident; $(
        $ident:ident = $code:literal $([$sev:ident])?,
        [$($field:literal),* $(,)?],
        $desc:literal;
    )*) => {
        $(
            pub static $ident: $crate::rules::Rule = $crate::rules::Rule {
                code: $code,
                fields: &[$($field),*],
                description: $desc,
                severity: severity!($($sev)?),
            };
        )*

        pub(crate) static $table: &[&$crate::rules::Rule] = &[$(&$ident),*];
    };
}

pub mod custom;
pub mod en16931;
pub mod peppol;
pub mod xrechnung;

pub use custom::*;
pub use en16931::*;
pub use peppol::*;
pub use xrechnung::*;

static CATALOGUES: &[&[&Rule]] = &[
    en16931::EN16931_RULES,
    xrechnung::XRECHNUNG_RULES,
    peppol::PEPPOL_RULES,
    custom::CUSTOM_RULES,
];

/// Every rule, grouped by catalogue (EN 16931, XRechnung, PEPPOL, custom).
pub fn all() -> impl Iterator<Item = &'static Rule> {
    CATALOGUES.iter().flat_map(|t| t.iter().copied())
}

/// Map a synonym code to the code stored in the catalogue:
/// `BR-IG-n` to `BR-AF-n`, `BR-IP-n` to `BR-AG-n`.
pub fn canonical_code(code: &str) -> std::borrow::Cow<'_, str> {
    if let Some(n) = code.strip_prefix("BR-IG-") {
        format!("BR-AF-{n}").into()
    } else if let Some(n) = code.strip_prefix("BR-IP-") {
        format!("BR-AG-{n}").into()
    } else {
        code.into()
    }
}

/// Find a rule by code. Synonym codes are accepted.
pub fn lookup(code: &str) -> Option<&'static Rule> {
    let code = canonical_code(code.trim());
    all().find(|r| r.code == code)
}
