use serde::Serialize;
use thiserror::Error;

use crate::rules::{self, Rule};

/// Errors that abort parsing or writing of an invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// The input stream could not be read or the output sink not written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// Root element namespace is neither CII nor UBL.
    #[error("unknown root element namespace \"{0}\"")]
    UnknownNamespace(String),

    /// A date literal does not match the expected format.
    #[error("invalid date \"{value}\" at {path}")]
    InvalidDate { value: String, path: String },

    /// A decimal literal could not be parsed.
    #[error("invalid decimal \"{value}\" at {path}")]
    InvalidDecimal { value: String, path: String },

    /// A numeric code list value is not a number.
    #[error("invalid code \"{value}\" at {path}")]
    InvalidCode { value: String, path: String },

    /// An embedded attachment is not valid base64.
    #[error("invalid attachment at {path}: {reason}")]
    InvalidAttachment { path: String, reason: String },

    /// The requested output syntax cannot be produced.
    #[error("UBL writing is not supported yet")]
    UnsupportedFormat,

    /// XML serialisation failed.
    #[error("write error: {0}")]
    Write(String),
}

/// A single failed business rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemanticError {
    /// The violated rule.
    pub rule: &'static Rule,
    /// Message embedding the observed values.
    pub text: String,
}

impl SemanticError {
    pub fn new(rule: &'static Rule, text: impl Into<String>) -> Self {
        Self {
            rule,
            text: text.into(),
        }
    }

    /// First affected BT/BG identifier, or `""`.
    pub fn primary_field(&self) -> &'static str {
        self.rule.fields.first().copied().unwrap_or("")
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let field = self.primary_field();
        if field.is_empty() {
            write!(f, "[{}] {}", self.rule.code, self.text)
        } else {
            write!(f, "[{}] {}: {}", self.rule.code, field, self.text)
        }
    }
}

/// Every violation found by one [`Invoice::validate`](crate::Invoice::validate) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<SemanticError>,
}

impl ValidationError {
    pub(crate) fn new(violations: Vec<SemanticError>) -> Self {
        Self { violations }
    }

    /// Number of violations.
    pub fn count(&self) -> usize {
        self.violations.len()
    }

    /// Owned copy of the violations, in detection order.
    pub fn violations(&self) -> Vec<SemanticError> {
        self.violations.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SemanticError> {
        self.violations.iter()
    }

    /// Whether any violation is for `rule`.
    pub fn has_rule(&self, rule: &Rule) -> bool {
        self.violations.iter().any(|v| v.rule.code == rule.code)
    }

    /// Whether any violation carries `code`. `BR-IG-n` matches `BR-AF-n` and
    /// `BR-IP-n` matches `BR-AG-n`.
    pub fn has_rule_code(&self, code: &str) -> bool {
        let wanted = rules::canonical_code(code);
        self.violations
            .iter()
            .any(|v| rules::canonical_code(v.rule.code) == wanted)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} violation(s)", self.violations.len())?;
        for v in &self.violations {
            write!(f, "; {v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl<'a> IntoIterator for &'a ValidationError {
    type Item = &'a SemanticError;
    type IntoIter = std::slice::Iter<'a, SemanticError>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
