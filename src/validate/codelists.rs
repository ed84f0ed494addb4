//! Code list rules `BR-CL-*`.

use super::report;
use crate::core::codes::{is_known_document_type, text_subject_name};
use crate::core::units::is_known_unit_code;
use crate::core::{Invoice, SemanticError};
use crate::rules::*;

pub(super) fn check(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let code = inv.type_code.code();
    if inv.type_code.is_set() && !is_known_document_type(code) {
        report(
            out,
            &BR_CL_01,
            format!("invoice type code {code} is not in UNTDID 1001"),
        );
    }

    for note in &inv.notes {
        let Some(subject) = note.subject_code.as_deref().map(str::trim) else {
            continue;
        };
        if !subject.is_empty() && text_subject_name(subject).is_none() {
            report(
                out,
                &BR_CL_08,
                format!("note subject code \"{subject}\" is not in UNTDID 4451"),
            );
        }
    }

    for line in &inv.lines {
        let unit = line.unit_code.trim();
        if !unit.is_empty() && !is_known_unit_code(unit) {
            report(
                out,
                &BR_CL_23,
                format!("line {} unit code \"{unit}\" is not in UN/ECE Rec 20/21", line.id),
            );
        }
    }
}
