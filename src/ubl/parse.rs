use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use tracing::{debug, warn};

use super::{PREFIXES, ns};
use crate::core::*;
use crate::xml::{Document, Element};

/// Parse a UBL 2.1 `Invoice` or `CreditNote` XML string into an [`Invoice`].
pub fn from_ubl_xml(xml: &str) -> Result<Invoice, InvoiceError> {
    let doc = Document::parse(xml.as_bytes())?;
    let root = doc.root();
    if root.namespace() != ns::INVOICE && root.namespace() != ns::CREDIT_NOTE {
        return Err(InvoiceError::UnknownNamespace(root.namespace().to_string()));
    }
    parse_document(root)
}

/// Names that differ between the two UBL document types.
struct Flavour {
    line: &'static str,
    quantity: &'static str,
}

const INVOICE: Flavour = Flavour {
    line: "cac:InvoiceLine",
    quantity: "cbc:InvoicedQuantity",
};

const CREDIT_NOTE: Flavour = Flavour {
    line: "cac:CreditNoteLine",
    quantity: "cbc:CreditedQuantity",
};

/// Read a UBL document whose root namespace has already been checked.
pub(crate) fn parse_document(root: Element<'_>) -> Result<Invoice, InvoiceError> {
    let root = root.bind(PREFIXES);
    let flavour = if root.local_name() == "CreditNote" {
        &CREDIT_NOTE
    } else {
        &INVOICE
    };
    let mut inv = Invoice::default();

    header(root, &mut inv)?;
    references(root, &mut inv)?;
    parties(root, &mut inv);
    delivery(root, &mut inv)?;
    payment(root, &mut inv)?;

    for ac in root.find_all("cac:AllowanceCharge") {
        inv.allowance_charges.push(allowance_charge(ac)?);
    }
    tax_totals(root, &mut inv)?;
    monetary_total(root, &mut inv)?;

    for line in root.find_all(flavour.line) {
        inv.lines.push(invoice_line(line, flavour)?);
    }

    debug!(
        number = %inv.number,
        profile = %inv.profile,
        lines = inv.lines.len(),
        credit_note = root.local_name() == "CreditNote",
        "parsed UBL invoice"
    );
    Ok(inv)
}

fn header(root: Element<'_>, inv: &mut Invoice) -> Result<(), InvoiceError> {
    inv.specification_id = root.string_at("cbc:CustomizationID").unwrap_or_default();
    inv.profile = Profile::from_urn(&inv.specification_id);
    if !inv.profile.is_known() {
        warn!(
            specification_id = %inv.specification_id,
            "unknown specification identifier"
        );
    }
    inv.business_process = root.string_at("cbc:ProfileID");

    inv.number = root.string_at("cbc:ID").unwrap_or_default();
    inv.issue_date = date_at(root, "cbc:IssueDate")?;
    let type_code = root
        .find("cbc:InvoiceTypeCode")
        .or_else(|| root.find("cbc:CreditNoteTypeCode"));
    inv.type_code = InvoiceTypeCode(code(type_code)?.unwrap_or(0));
    for note in root.find_all("cbc:Note") {
        inv.notes.push(split_note(note.text()));
    }
    inv.currency = root.string_at("cbc:DocumentCurrencyCode").unwrap_or_default();
    inv.tax_currency = root.string_at("cbc:TaxCurrencyCode");
    inv.buyer_accounting_reference = root.string_at("cbc:AccountingCost");
    inv.buyer_reference = root.string_at("cbc:BuyerReference");

    if let Some(period) = root.find("cac:InvoicePeriod") {
        inv.billing_period = period_of(period)?;
        inv.presence.billing_period = period_present(period);
    }
    Ok(())
}

fn references(root: Element<'_>, inv: &mut Invoice) -> Result<(), InvoiceError> {
    inv.purchase_order_reference = root.string_at("cac:OrderReference/cbc:ID");
    inv.sales_order_reference = root.string_at("cac:OrderReference/cbc:SalesOrderID");

    for reference in root.find_all("cac:BillingReference/cac:InvoiceDocumentReference") {
        inv.preceding_invoices.push(PrecedingInvoice {
            number: reference.string_at("cbc:ID").unwrap_or_default(),
            issue_date: date_at(reference, "cbc:IssueDate")?,
        });
    }

    inv.despatch_advice_reference = root.string_at("cac:DespatchDocumentReference/cbc:ID");
    inv.receiving_advice_reference = root.string_at("cac:ReceiptDocumentReference/cbc:ID");
    inv.contract_reference = root.string_at("cac:ContractDocumentReference/cbc:ID");

    for doc in root.find_all("cac:AdditionalDocumentReference") {
        inv.supporting_documents.push(document_reference(doc)?);
    }

    inv.project = root
        .find("cac:ProjectReference")
        .map(|p| ProjectReference {
            id: p.string_at("cbc:ID").unwrap_or_default(),
            name: None,
        });
    Ok(())
}

fn document_reference(doc: Element<'_>) -> Result<SupportingDocument, InvoiceError> {
    let attachment = match doc.find("cac:Attachment/cbc:EmbeddedDocumentBinaryObject") {
        Some(object) => {
            let encoded: String = object.text().split_whitespace().collect();
            let data = STANDARD
                .decode(encoded.as_bytes())
                .map_err(|e| InvoiceError::InvalidAttachment {
                    path: object.xpath(),
                    reason: e.to_string(),
                })?;
            Some(Attachment {
                data,
                mime_code: object.attr("mimeCode").unwrap_or_default().to_string(),
                filename: object.attr("filename").unwrap_or_default().to_string(),
            })
        }
        None => None,
    };
    Ok(SupportingDocument {
        id: doc.string_at("cbc:ID").unwrap_or_default(),
        type_code: doc.string_at("cbc:DocumentTypeCode"),
        description: doc.string_at("cbc:DocumentDescription"),
        uri: doc.string_at("cac:Attachment/cac:ExternalReference/cbc:URI"),
        attachment,
    })
}

fn parties(root: Element<'_>, inv: &mut Invoice) {
    if let Some(p) = root.find("cac:AccountingSupplierParty/cac:Party") {
        inv.seller = party(p);
        // BT-90 is carried as a seller identifier with scheme SEPA.
        inv.creditor_reference_id = p
            .find_all("cac:PartyIdentification/cbc:ID")
            .into_iter()
            .find(|id| id.attr("schemeID").is_some_and(|s| s.trim() == "SEPA"))
            .map(|id| id.text().to_string());
    }
    if let Some(p) = root.find("cac:AccountingCustomerParty/cac:Party") {
        inv.buyer = party(p);
    }
    inv.payee = root.find("cac:PayeeParty").map(party);
    inv.tax_representative = root.find("cac:TaxRepresentativeParty").map(party);
}

fn party(p: Element<'_>) -> Party {
    let mut party = Party {
        name: p
            .string_at("cac:PartyName/cbc:Name")
            .or_else(|| p.string_at("cac:PartyLegalEntity/cbc:RegistrationName"))
            .unwrap_or_default(),
        description: p.string_at("cac:PartyLegalEntity/cbc:CompanyLegalForm"),
        ..Default::default()
    };

    party.electronic_address = p.find("cbc:EndpointID").map(|id| ElectronicAddress {
        scheme: id.attr("schemeID").unwrap_or_default().to_string(),
        uri: id.text().to_string(),
    });

    for id in p.find_all("cac:PartyIdentification/cbc:ID") {
        if id.text().is_empty() {
            continue;
        }
        match id.attr("schemeID").map(str::trim) {
            Some("SEPA") => {}
            Some(scheme) if !scheme.is_empty() => party.global_ids.push(SchemedId::new(scheme, id.text())),
            _ => party.ids.push(id.text().to_string()),
        }
    }

    party.postal_address = p.find("cac:PostalAddress").map(postal_address);

    for scheme in p.find_all("cac:PartyTaxScheme") {
        let Some(id) = scheme.string_at("cbc:CompanyID") else {
            continue;
        };
        match scheme.text_at("cac:TaxScheme/cbc:ID") {
            Some("VAT") => party.vat_id = Some(id),
            Some("FC") => party.tax_registration = Some(id),
            other => debug!(scheme = ?other, "ignoring party tax scheme"),
        }
    }

    party.legal_organization = p
        .find("cac:PartyLegalEntity/cbc:CompanyID")
        .map(|id| LegalOrganization {
            id: Some(id.text().to_string()).filter(|v| !v.is_empty()),
            scheme: id.attr("schemeID").map(str::to_string),
            trading_name: None,
        });

    if let Some(contact) = p.find("cac:Contact") {
        party.contacts.push(Contact {
            person_name: contact.string_at("cbc:Name"),
            department: None,
            phone: contact.string_at("cbc:Telephone"),
            email: contact.string_at("cbc:ElectronicMail"),
        });
    }

    party
}

fn postal_address(a: Element<'_>) -> PostalAddress {
    PostalAddress {
        line1: a.string_at("cbc:StreetName"),
        line2: a.string_at("cbc:AdditionalStreetName"),
        line3: a.string_at("cac:AddressLine/cbc:Line"),
        city: a.string_at("cbc:CityName"),
        postcode: a.string_at("cbc:PostalZone"),
        subdivision: a.string_at("cbc:CountrySubentity"),
        country_code: a
            .string_at("cac:Country/cbc:IdentificationCode")
            .unwrap_or_default(),
    }
}

fn delivery(root: Element<'_>, inv: &mut Invoice) -> Result<(), InvoiceError> {
    let Some(delivery) = root.find("cac:Delivery") else {
        return Ok(());
    };
    inv.delivery_date = date_at(delivery, "cbc:ActualDeliveryDate")?;

    let location = delivery.find("cac:DeliveryLocation");
    let name = delivery.string_at("cac:DeliveryParty/cac:PartyName/cbc:Name");
    if location.is_none() && name.is_none() {
        return Ok(());
    }
    let mut ship_to = Party {
        name: name.unwrap_or_default(),
        ..Default::default()
    };
    if let Some(location) = location {
        if let Some(id) = location.find("cbc:ID").filter(|id| !id.text().is_empty()) {
            match id.attr("schemeID").map(str::trim).filter(|s| !s.is_empty()) {
                Some(scheme) => ship_to.global_ids.push(SchemedId::new(scheme, id.text())),
                None => ship_to.ids.push(id.text().to_string()),
            }
        }
        ship_to.postal_address = location.find("cac:Address").map(postal_address);
    }
    inv.ship_to = Some(ship_to);
    Ok(())
}

fn payment(root: Element<'_>, inv: &mut Invoice) -> Result<(), InvoiceError> {
    let mut mandate = None;
    for means in root.find_all("cac:PaymentMeans") {
        let code_element = means.find("cbc:PaymentMeansCode");
        if inv.payment_reference.is_none() {
            inv.payment_reference = means.string_at("cbc:PaymentID");
        }
        let direct_debit = means.find("cac:PaymentMandate").map(|m| DirectDebit {
            debited_account: m.string_at("cac:PayerFinancialAccount/cbc:ID"),
            mandate_id: m.string_at("cbc:ID"),
        });
        if mandate.is_none() {
            mandate = direct_debit.as_ref().and_then(|d| d.mandate_id.clone());
        }
        inv.payment_means.push(PaymentMeans {
            type_code: code(code_element)?.map(PaymentMeansCode::from_code),
            information: code_element
                .and_then(|c| c.attr("name"))
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            payee_account: means
                .find("cac:PayeeFinancialAccount")
                .map(|account| FinancialAccount {
                    iban: account.string_at("cbc:ID"),
                    proprietary_id: None,
                    name: account.string_at("cbc:Name"),
                    bic: account.string_at("cac:FinancialInstitutionBranch/cbc:ID"),
                }),
            card: means.find("cac:CardAccount").map(|card| PaymentCard {
                pan: card.string_at("cbc:PrimaryAccountNumberID").unwrap_or_default(),
                holder: card.string_at("cbc:HolderName"),
            }),
            direct_debit,
        });
    }

    let due_date = date_at(root, "cbc:DueDate")?;
    for terms in root.find_all("cac:PaymentTerms") {
        inv.payment_terms.push(PaymentTerms {
            description: terms.string_at("cbc:Note"),
            due_date: date_at(terms, "cbc:PaymentDueDate")?.or(due_date),
            direct_debit_mandate_id: None,
        });
    }
    if inv.payment_terms.is_empty() && (due_date.is_some() || mandate.is_some()) {
        inv.payment_terms.push(PaymentTerms {
            due_date,
            ..Default::default()
        });
    }
    if let Some(first) = inv.payment_terms.first_mut() {
        first.direct_debit_mandate_id = mandate;
    }
    Ok(())
}

fn tax_totals(root: Element<'_>, inv: &mut Invoice) -> Result<(), InvoiceError> {
    let tax_point_date = date_at(root, "cbc:TaxPointDate")?;
    let due_date_type_code = root.string_at("cac:InvoicePeriod/cbc:DescriptionCode");

    for total in root.find_all("cac:TaxTotal") {
        let Some(amount) = total.find("cbc:TaxAmount") else {
            continue;
        };
        let value = amount.decimal()?;
        let currency = amount.attr("currencyID").map(str::trim).unwrap_or("");

        if currency.is_empty() || currency == inv.currency {
            inv.totals.tax_total = value;
            for subtotal in total.find_all("cac:TaxSubtotal") {
                let category = subtotal.find("cac:TaxCategory");
                inv.trade_taxes.push(TradeTax {
                    type_code: category
                        .and_then(|c| c.string_at("cac:TaxScheme/cbc:ID"))
                        .unwrap_or_default(),
                    category: category
                        .and_then(|c| c.text_at("cbc:ID"))
                        .map(TaxCategory::from_code),
                    rate: match category {
                        Some(c) => c.decimal_at("cbc:Percent")?,
                        None => None,
                    },
                    basis_amount: subtotal.amount_at("cbc:TaxableAmount")?,
                    calculated_amount: subtotal.amount_at("cbc:TaxAmount")?,
                    exemption_reason: category.and_then(|c| c.string_at("cbc:TaxExemptionReason")),
                    exemption_reason_code: category
                        .and_then(|c| c.string_at("cbc:TaxExemptionReasonCode")),
                    tax_point_date,
                    due_date_type_code: due_date_type_code.clone(),
                });
            }
        } else if inv.tax_currency.as_deref() == Some(currency) {
            inv.totals.tax_total_accounting = value;
            inv.presence.tax_total_accounting = true;
        } else {
            warn!(currency, invoice_currency = %inv.currency, "tax total in unexpected currency");
            inv.unexpected_tax_currencies.push(currency.to_string());
        }
    }
    Ok(())
}

fn monetary_total(root: Element<'_>, inv: &mut Invoice) -> Result<(), InvoiceError> {
    let Some(sum) = root.find("cac:LegalMonetaryTotal") else {
        return Ok(());
    };
    let t = &mut inv.totals;
    let p = &mut inv.presence;

    p.line_total = sum.exists("cbc:LineExtensionAmount");
    t.line_total = sum.amount_at("cbc:LineExtensionAmount")?;
    p.tax_basis_total = sum.exists("cbc:TaxExclusiveAmount");
    t.tax_basis_total = sum.amount_at("cbc:TaxExclusiveAmount")?;
    p.grand_total = sum.exists("cbc:TaxInclusiveAmount");
    t.grand_total = sum.amount_at("cbc:TaxInclusiveAmount")?;
    t.allowance_total = sum.amount_at("cbc:AllowanceTotalAmount")?;
    t.charge_total = sum.amount_at("cbc:ChargeTotalAmount")?;
    t.prepaid = sum.amount_at("cbc:PrepaidAmount")?;
    t.rounding = sum.amount_at("cbc:PayableRoundingAmount")?;
    p.due_payable = sum.exists("cbc:PayableAmount");
    t.due_payable = sum.amount_at("cbc:PayableAmount")?;
    Ok(())
}

fn invoice_line(line: Element<'_>, flavour: &Flavour) -> Result<InvoiceLine, InvoiceError> {
    let mut l = InvoiceLine {
        id: line.string_at("cbc:ID").unwrap_or_default(),
        note: line.string_at("cbc:Note"),
        total: line.amount_at("cbc:LineExtensionAmount")?,
        accounting_reference: line.string_at("cbc:AccountingCost"),
        order_line_reference: line.string_at("cac:OrderLineReference/cbc:LineID"),
        ..Default::default()
    };

    if let Some(quantity) = line.find(flavour.quantity) {
        l.billed_quantity = quantity.decimal()?;
        l.unit_code = quantity.attr("unitCode").unwrap_or_default().trim().to_string();
    }

    if let Some(period) = line.find("cac:InvoicePeriod") {
        l.period = period_of(period)?;
        l.period_present = true;
    }

    for ac in line.find_all("cac:AllowanceCharge") {
        l.allowance_charges.push(allowance_charge(ac)?);
    }

    if let Some(item) = line.find("cac:Item") {
        l.item = item_of(item);
        if let Some(tax) = item.find("cac:ClassifiedTaxCategory") {
            l.tax_type = tax.string_at("cac:TaxScheme/cbc:ID").unwrap_or_default();
            l.tax_category = tax.text_at("cbc:ID").map(TaxCategory::from_code);
            l.tax_rate = tax.decimal_at("cbc:Percent")?;
        }
    }

    if let Some(price) = line.find("cac:Price") {
        l.net_price = price.amount_at("cbc:PriceAmount")?;
        l.basis_quantity = price.decimal_at("cbc:BaseQuantity")?;
        for ac in price.find_all("cac:AllowanceCharge") {
            let discount = allowance_charge(ac)?;
            if l.gross_price.is_none() {
                l.gross_price = discount.basis_amount;
            }
            l.price_allowance_charges.push(discount);
        }
    }

    Ok(l)
}

fn item_of(item: Element<'_>) -> Item {
    Item {
        name: item.string_at("cbc:Name").unwrap_or_default(),
        description: item.string_at("cbc:Description"),
        seller_id: item.string_at("cac:SellersItemIdentification/cbc:ID"),
        buyer_id: item.string_at("cac:BuyersItemIdentification/cbc:ID"),
        standard_id: item
            .find("cac:StandardItemIdentification/cbc:ID")
            .map(|id| SchemedId {
                scheme: id.attr("schemeID").map(str::to_string),
                value: id.text().to_string(),
            }),
        origin_country: item.string_at("cac:OriginCountry/cbc:IdentificationCode"),
        classifications: item
            .find_all("cac:CommodityClassification/cbc:ItemClassificationCode")
            .into_iter()
            .map(|class| Classification {
                code: class.text().to_string(),
                list_id: class.attr("listID").map(str::to_string),
                list_version: class.attr("listVersionID").map(str::to_string),
            })
            .collect(),
        attributes: item
            .find_all("cac:AdditionalItemProperty")
            .into_iter()
            .map(|attr| ItemAttribute {
                name: attr.string_at("cbc:Name").unwrap_or_default(),
                value: attr.string_at("cbc:Value").unwrap_or_default(),
            })
            .collect(),
    }
}

fn allowance_charge(ac: Element<'_>) -> Result<AllowanceCharge, InvoiceError> {
    let tax = ac.find("cac:TaxCategory");
    Ok(AllowanceCharge {
        charge_indicator: ac
            .text_at("cbc:ChargeIndicator")
            .is_some_and(|v| v == "true" || v == "1"),
        basis_amount: ac.decimal_at("cbc:BaseAmount")?,
        actual_amount: ac.amount_at("cbc:Amount")?,
        calculation_percent: ac.decimal_at("cbc:MultiplierFactorNumeric")?,
        reason_code: ac.string_at("cbc:AllowanceChargeReasonCode"),
        reason: ac.string_at("cbc:AllowanceChargeReason"),
        tax_category: tax
            .and_then(|t| t.text_at("cbc:ID"))
            .map(TaxCategory::from_code),
        tax_type: tax.and_then(|t| t.string_at("cac:TaxScheme/cbc:ID")),
        tax_rate: match tax {
            Some(t) => t.decimal_at("cbc:Percent")?,
            None => None,
        },
    })
}

fn period_of(period: Element<'_>) -> Result<Period, InvoiceError> {
    Ok(Period {
        start: date_at(period, "cbc:StartDate")?,
        end: date_at(period, "cbc:EndDate")?,
    })
}

/// A document level `cac:InvoicePeriod` that only carries the BT-8
/// description code is not an invoicing period.
fn period_present(period: Element<'_>) -> bool {
    period.exists("cbc:StartDate")
        || period.exists("cbc:EndDate")
        || !period.exists("cbc:DescriptionCode")
}

/// `#SUBJECT#text` notes carry a UNCL 4451 subject code.
fn split_note(raw: &str) -> Note {
    if let Some(rest) = raw.strip_prefix('#') {
        if let Some((subject, text)) = rest.split_once('#') {
            if !subject.is_empty() && subject.len() <= 3 && subject.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Note {
                    text: text.trim().to_string(),
                    subject_code: Some(subject.to_string()),
                };
            }
        }
    }
    Note {
        text: raw.to_string(),
        subject_code: None,
    }
}

fn code(element: Option<Element<'_>>) -> Result<Option<u16>, InvoiceError> {
    let Some(element) = element else {
        return Ok(None);
    };
    let text = element.text();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse().map(Some).map_err(|_| InvoiceError::InvalidCode {
        value: text.to_string(),
        path: element.xpath(),
    })
}

/// An ISO 8601 calendar date (`YYYY-MM-DD`). Absent or empty is `None`.
fn date_at(parent: Element<'_>, path: &str) -> Result<Option<NaiveDate>, InvoiceError> {
    let Some(element) = parent.find(path) else {
        return Ok(None);
    };
    let text = element.text();
    if text.is_empty() {
        return Ok(None);
    }
    parse_iso(text)
        .map(Some)
        .ok_or_else(|| InvoiceError::InvalidDate {
            value: text.to_string(),
            path: element.xpath(),
        })
}

fn parse_iso(text: &str) -> Option<NaiveDate> {
    if text.len() != 10 || !text.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates() {
        assert_eq!(parse_iso("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_iso("2023-02-29"), None);
        assert_eq!(parse_iso("20240229"), None);
        assert_eq!(parse_iso("2024-2-29 "), None);
        assert_eq!(parse_iso("2024-1-029"), None);
        assert_eq!(parse_iso("+024-02-29"), None);
    }

    #[test]
    fn subject_notes() {
        let note = split_note("#ADU#Bitte zahlen");
        assert_eq!(note.subject_code.as_deref(), Some("ADU"));
        assert_eq!(note.text, "Bitte zahlen");

        let plain = split_note("#1 priority customer");
        assert_eq!(plain.subject_code, None);
        assert_eq!(plain.text, "#1 priority customer");
    }

    #[test]
    fn rejects_foreign_root() {
        let xml = r#"<Invoice xmlns="urn:example:other"><ID>1</ID></Invoice>"#;
        assert!(matches!(
            from_ubl_xml(xml),
            Err(InvoiceError::UnknownNamespace(ns)) if ns == "urn:example:other"
        ));
    }
}
