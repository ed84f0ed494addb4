//! XRechnung CIUS rules `BR-DE-*`.

use std::collections::HashSet;

use super::{blank, report};
use crate::core::{
    Invoice, PaymentMeans, PostalAddress, SemanticError, TaxCategory, XRECHNUNG_URN,
};
use crate::rules::*;

/// Invoice type codes XRechnung accepts without a warning.
const TYPE_CODES: [u16; 8] = [326, 380, 381, 384, 389, 875, 876, 877];

pub(super) fn check(inv: &Invoice, out: &mut Vec<SemanticError>) {
    header(inv, out);
    contacts_and_addresses(inv, out);
    taxes(inv, out);
    payment(inv, out);
    attachments(inv, out);
}

fn header(inv: &Invoice, out: &mut Vec<SemanticError>) {
    if blank(&inv.buyer_reference) {
        report(out, &BR_DE_15, "buyer reference (Leitweg-ID) is missing");
    }
    let code = inv.type_code.code();
    if !TYPE_CODES.contains(&code) {
        report(
            out,
            &BR_DE_17,
            format!("invoice type code {code} is not one of {TYPE_CODES:?}"),
        );
    }
    if !inv.specification_id.trim().starts_with(XRECHNUNG_URN) {
        report(
            out,
            &BR_DE_21,
            format!(
                "specification identifier \"{}\" is not \"{XRECHNUNG_URN}\"",
                inv.specification_id
            ),
        );
    }
    if code == 384 && inv.preceding_invoices.is_empty() {
        report(out, &BR_DE_26, "corrected invoice without preceding invoice reference");
    }
}

fn contacts_and_addresses(inv: &Invoice, out: &mut Vec<SemanticError>) {
    match inv.seller.contacts.first() {
        None => report(out, &BR_DE_2, "seller contact is missing"),
        Some(contact) => {
            if blank(&contact.person_name) && blank(&contact.department) {
                report(out, &BR_DE_5, "seller contact point is missing");
            }
            match contact.phone.as_deref().filter(|p| !p.trim().is_empty()) {
                None => report(out, &BR_DE_6, "seller contact telephone number is missing"),
                Some(phone) if phone.chars().filter(char::is_ascii_digit).count() < 3 => report(
                    out,
                    &BR_DE_27,
                    format!("seller telephone number \"{phone}\" has fewer than three digits"),
                ),
                Some(_) => {}
            }
            match contact.email.as_deref().filter(|e| !e.trim().is_empty()) {
                None => report(out, &BR_DE_7, "seller contact email address is missing"),
                Some(email) if !plausible_email(email) => report(
                    out,
                    &BR_DE_28,
                    format!("seller email address \"{email}\" is malformed"),
                ),
                Some(_) => {}
            }
        }
    }

    if let Some(address) = &inv.seller.postal_address {
        if blank(&address.city) {
            report(out, &BR_DE_3, "seller city is missing");
        }
        if blank(&address.postcode) {
            report(out, &BR_DE_4, "seller post code is missing");
        }
    }
    if let Some(address) = &inv.buyer.postal_address {
        if blank(&address.city) {
            report(out, &BR_DE_8, "buyer city is missing");
        }
        if blank(&address.postcode) {
            report(out, &BR_DE_9, "buyer post code is missing");
        }
    }
    if let Some(address) = inv.ship_to.as_ref().and_then(|p| p.postal_address.as_ref()) {
        deliver_to(address, out);
    }
}

fn deliver_to(address: &PostalAddress, out: &mut Vec<SemanticError>) {
    if blank(&address.city) {
        report(out, &BR_DE_10, "deliver to city is missing");
    }
    if blank(&address.postcode) {
        report(out, &BR_DE_11, "deliver to post code is missing");
    }
}

/// Exactly one `@`, neither first nor last.
fn plausible_email(email: &str) -> bool {
    let email = email.trim();
    email.matches('@').count() == 1 && !email.starts_with('@') && !email.ends_with('@')
}

fn taxes(inv: &Invoice, out: &mut Vec<SemanticError>) {
    for tax in &inv.trade_taxes {
        if tax.rate.is_none() {
            report(
                out,
                &BR_DE_14,
                format!(
                    "VAT breakdown {} has no rate",
                    tax.category.as_ref().map(|c| c.code()).unwrap_or("")
                ),
            );
        }
    }

    let needs_id = inv
        .trade_taxes
        .iter()
        .filter_map(|t| t.category.as_ref())
        .chain(inv.lines.iter().filter_map(|l| l.tax_category.as_ref()))
        .any(|c| {
            !matches!(
                c,
                TaxCategory::NotSubjectToVat | TaxCategory::Other(_)
            )
        });
    let identified = !blank(&inv.seller.vat_id)
        || !blank(&inv.seller.tax_registration)
        || inv.tax_representative.is_some();
    if needs_id && !identified {
        report(
            out,
            &BR_DE_16,
            "seller has neither VAT identifier, tax registration nor tax representative",
        );
    }
}

fn payment(inv: &Invoice, out: &mut Vec<SemanticError>) {
    if inv.payment_means.is_empty() {
        report(out, &BR_DE_1, "payment instructions are missing");
    }

    let transfer = inv.payment_means.iter().any(|m| m.payee_account.is_some());
    let card = inv.payment_means.iter().any(|m| m.card.is_some());
    let debit = inv.payment_means.iter().any(|m| m.direct_debit.is_some());
    if [transfer, card, debit].iter().filter(|b| **b).count() > 1 {
        report(
            out,
            &BR_DE_13,
            "more than one of credit transfer, payment card and direct debit is given",
        );
    }

    for means in &inv.payment_means {
        payment_means(inv, means, out);
    }
}

fn payment_means(inv: &Invoice, means: &PaymentMeans, out: &mut Vec<SemanticError>) {
    let code = means.type_code.map(|c| c.code()).unwrap_or(0);
    let has_transfer = means.payee_account.is_some();
    let has_card = means.card.is_some();
    let has_debit = means.direct_debit.is_some();

    match code {
        30 | 58 => {
            if !has_transfer {
                report(
                    out,
                    &BR_DE_23_A,
                    format!("payment means {code} without credit transfer account"),
                );
            }
            if has_card || has_debit {
                report(
                    out,
                    &BR_DE_23_B,
                    format!("payment means {code} with card or direct debit information"),
                );
            }
        }
        48 | 54 | 55 => {
            if !has_card {
                report(
                    out,
                    &BR_DE_24_A,
                    format!("payment means {code} without payment card information"),
                );
            }
            if has_transfer || has_debit {
                report(
                    out,
                    &BR_DE_24_B,
                    format!("payment means {code} with credit transfer or direct debit information"),
                );
            }
        }
        59 => {
            if !has_debit {
                report(
                    out,
                    &BR_DE_25_A,
                    "payment means 59 without direct debit information",
                );
            }
            if has_transfer || has_card {
                report(
                    out,
                    &BR_DE_25_B,
                    "payment means 59 with credit transfer or card information",
                );
            }
        }
        _ => {}
    }

    if code == 58 {
        if let Some(account) = means.payee_account.as_ref().and_then(|a| a.account_id()) {
            if !is_valid_iban(account) {
                report(
                    out,
                    &BR_DE_19,
                    format!("payment account \"{account}\" is not a valid IBAN"),
                );
            }
        }
    }

    if let Some(debit) = &means.direct_debit {
        if blank(&inv.creditor_reference_id) {
            report(out, &BR_DE_30, "direct debit without bank assigned creditor identifier");
        }
        match debit.debited_account.as_deref().filter(|a| !a.trim().is_empty()) {
            None => report(out, &BR_DE_31, "direct debit without debited account"),
            Some(account) if code == 59 && !is_valid_iban(account) => report(
                out,
                &BR_DE_20,
                format!("debited account \"{account}\" is not a valid IBAN"),
            ),
            Some(_) => {}
        }
    }
}

fn attachments(inv: &Invoice, out: &mut Vec<SemanticError>) {
    let mut seen = HashSet::new();
    for doc in &inv.supporting_documents {
        let Some(attachment) = &doc.attachment else {
            continue;
        };
        if !seen.insert(attachment.filename.as_str()) {
            report(
                out,
                &BR_DE_22,
                format!(
                    "attachment filename \"{}\" of document {} is not unique",
                    attachment.filename, doc.id
                ),
            );
        }
    }
}

/// ISO 13616 check: country letters, two check digits, mod 97 == 1.
/// Spaces are ignored.
fn is_valid_iban(iban: &str) -> bool {
    let iban: String = iban
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let bytes = iban.as_bytes();
    if bytes.len() < 15 || bytes.len() > 34 {
        return false;
    }
    if !bytes[..2].iter().all(u8::is_ascii_uppercase)
        || !bytes[2..4].iter().all(u8::is_ascii_digit)
        || !bytes.iter().all(u8::is_ascii_alphanumeric)
    {
        return false;
    }

    let mut remainder = 0u32;
    for c in iban[4..].chars().chain(iban[..4].chars()) {
        let value = match c.to_digit(36) {
            Some(v) => v,
            None => return false,
        };
        remainder = if value < 10 {
            (remainder * 10 + value) % 97
        } else {
            (remainder * 100 + value) % 97
        };
    }
    remainder == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iban_checksum() {
        assert!(is_valid_iban("DE89370400440532013000"));
        assert!(is_valid_iban("DE89 3704 0044 0532 0130 00"));
        assert!(is_valid_iban("GB29NWBK60161331926819"));
        assert!(!is_valid_iban("DE89370400440532013001"));
        assert!(!is_valid_iban("DE8937040044"));
        assert!(!is_valid_iban("1289370400440532013000"));
    }

    #[test]
    fn email_shape() {
        assert!(plausible_email("info@example.de"));
        assert!(!plausible_email("@example.de"));
        assert!(!plausible_email("info@"));
        assert!(!plausible_email("a@b@c"));
        assert!(!plausible_email("nobody"));
    }
}
