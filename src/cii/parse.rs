use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use tracing::{debug, warn};

use super::{PREFIXES, ns};
use crate::core::*;
use crate::xml::{Document, Element};

/// Parse a CII (Cross Industry Invoice) XML string into an [`Invoice`].
pub fn from_cii_xml(xml: &str) -> Result<Invoice, InvoiceError> {
    let doc = Document::parse(xml.as_bytes())?;
    let root = doc.root();
    if root.namespace() != ns::RSM {
        return Err(InvoiceError::UnknownNamespace(root.namespace().to_string()));
    }
    parse_document(root)
}

/// Read a CII document whose root namespace has already been checked.
pub(crate) fn parse_document(root: Element<'_>) -> Result<Invoice, InvoiceError> {
    let root = root.bind(PREFIXES);
    let mut inv = Invoice::default();

    document_context(root, &mut inv);
    exchanged_document(root, &mut inv)?;

    let tx = root.find("rsm:SupplyChainTradeTransaction");
    if let Some(tx) = tx {
        for item in tx.find_all("ram:IncludedSupplyChainTradeLineItem") {
            inv.lines.push(line_item(item)?);
        }
        if let Some(agreement) = tx.find("ram:ApplicableHeaderTradeAgreement") {
            header_agreement(agreement, &mut inv)?;
        }
        if let Some(delivery) = tx.find("ram:ApplicableHeaderTradeDelivery") {
            header_delivery(delivery, &mut inv)?;
        }
        if let Some(settlement) = tx.find("ram:ApplicableHeaderTradeSettlement") {
            header_settlement(settlement, &mut inv)?;
        }
    }

    debug!(
        number = %inv.number,
        profile = %inv.profile,
        lines = inv.lines.len(),
        "parsed CII invoice"
    );
    Ok(inv)
}

fn document_context(root: Element<'_>, inv: &mut Invoice) {
    let ctx = "rsm:ExchangedDocumentContext";
    inv.business_process = root.string_at(&format!(
        "{ctx}/ram:BusinessProcessSpecifiedDocumentContextParameter/ram:ID"
    ));
    inv.specification_id = root
        .string_at(&format!(
            "{ctx}/ram:GuidelineSpecifiedDocumentContextParameter/ram:ID"
        ))
        .unwrap_or_default();
    inv.profile = Profile::from_urn(&inv.specification_id);
    if !inv.profile.is_known() {
        warn!(
            specification_id = %inv.specification_id,
            "unknown specification identifier"
        );
    }
}

fn exchanged_document(root: Element<'_>, inv: &mut Invoice) -> Result<(), InvoiceError> {
    let Some(doc) = root.find("rsm:ExchangedDocument") else {
        return Ok(());
    };
    inv.number = doc.string_at("ram:ID").unwrap_or_default();
    inv.type_code = InvoiceTypeCode(code(doc.find("ram:TypeCode"))?.unwrap_or(0));
    inv.issue_date = date_at(doc, "ram:IssueDateTime/udt:DateTimeString")?;
    for note in doc.find_all("ram:IncludedNote") {
        inv.notes.push(Note {
            text: note.string_at("ram:Content").unwrap_or_default(),
            subject_code: note.string_at("ram:SubjectCode"),
        });
    }
    Ok(())
}

fn line_item(item: Element<'_>) -> Result<InvoiceLine, InvoiceError> {
    let mut line = InvoiceLine::default();

    if let Some(doc) = item.find("ram:AssociatedDocumentLineDocument") {
        line.id = doc.string_at("ram:LineID").unwrap_or_default();
        line.note = doc.string_at("ram:IncludedNote/ram:Content");
    }

    if let Some(product) = item.find("ram:SpecifiedTradeProduct") {
        line.item = trade_product(product);
    }

    if let Some(agreement) = item.find("ram:SpecifiedLineTradeAgreement") {
        line.order_line_reference =
            agreement.string_at("ram:BuyerOrderReferencedDocument/ram:LineID");
        if let Some(gross) = agreement.find("ram:GrossPriceProductTradePrice") {
            line.gross_price = gross.decimal_at("ram:ChargeAmount")?;
            line.basis_quantity = gross.decimal_at("ram:BasisQuantity")?;
            for ac in gross.find_all("ram:AppliedTradeAllowanceCharge") {
                line.price_allowance_charges.push(allowance_charge(ac)?);
            }
        }
        if let Some(net) = agreement.find("ram:NetPriceProductTradePrice") {
            line.net_price = net.amount_at("ram:ChargeAmount")?;
            if let Some(quantity) = net.decimal_at("ram:BasisQuantity")? {
                line.basis_quantity = Some(quantity);
            }
        }
    }

    if let Some(quantity) = item.find("ram:SpecifiedLineTradeDelivery/ram:BilledQuantity") {
        line.billed_quantity = quantity.decimal()?;
        line.unit_code = quantity.attr("unitCode").unwrap_or_default().trim().to_string();
    }

    if let Some(settlement) = item.find("ram:SpecifiedLineTradeSettlement") {
        if let Some(tax) = settlement.find("ram:ApplicableTradeTax") {
            line.tax_type = tax.string_at("ram:TypeCode").unwrap_or_default();
            line.tax_category = category(tax.text_at("ram:CategoryCode"));
            line.tax_rate = tax.decimal_at("ram:RateApplicablePercent")?;
        }
        if let Some(period) = settlement.find("ram:BillingSpecifiedPeriod") {
            line.period = billing_period(period)?;
            line.period_present = true;
        }
        for ac in settlement.find_all("ram:SpecifiedTradeAllowanceCharge") {
            line.allowance_charges.push(allowance_charge(ac)?);
        }
        line.total = settlement
            .amount_at("ram:SpecifiedTradeSettlementLineMonetarySummation/ram:LineTotalAmount")?;
        line.accounting_reference =
            settlement.string_at("ram:ReceivableSpecifiedTradeAccountingAccount/ram:ID");
    }

    Ok(line)
}

fn trade_product(product: Element<'_>) -> Item {
    Item {
        name: product.string_at("ram:Name").unwrap_or_default(),
        description: product.string_at("ram:Description"),
        seller_id: product.string_at("ram:SellerAssignedID"),
        buyer_id: product.string_at("ram:BuyerAssignedID"),
        standard_id: product.find("ram:GlobalID").map(|id| SchemedId {
            scheme: id.attr("schemeID").map(str::to_string),
            value: id.text().to_string(),
        }),
        origin_country: product.string_at("ram:OriginTradeCountry/ram:ID"),
        classifications: product
            .find_all("ram:DesignatedProductClassification/ram:ClassCode")
            .into_iter()
            .map(|class| Classification {
                code: class.text().to_string(),
                list_id: class.attr("listID").map(str::to_string),
                list_version: class.attr("listVersionID").map(str::to_string),
            })
            .collect(),
        attributes: product
            .find_all("ram:ApplicableProductCharacteristic")
            .into_iter()
            .map(|attr| ItemAttribute {
                name: attr.string_at("ram:Description").unwrap_or_default(),
                value: attr.string_at("ram:Value").unwrap_or_default(),
            })
            .collect(),
    }
}

fn header_agreement(agreement: Element<'_>, inv: &mut Invoice) -> Result<(), InvoiceError> {
    inv.buyer_reference = agreement.string_at("ram:BuyerReference");
    if let Some(p) = agreement.find("ram:SellerTradeParty") {
        inv.seller = trade_party(p);
    }
    if let Some(p) = agreement.find("ram:BuyerTradeParty") {
        inv.buyer = trade_party(p);
    }
    inv.tax_representative = agreement
        .find("ram:SellerTaxRepresentativeTradeParty")
        .map(trade_party);
    inv.sales_order_reference =
        agreement.string_at("ram:SellerOrderReferencedDocument/ram:IssuerAssignedID");
    inv.purchase_order_reference =
        agreement.string_at("ram:BuyerOrderReferencedDocument/ram:IssuerAssignedID");
    inv.contract_reference =
        agreement.string_at("ram:ContractReferencedDocument/ram:IssuerAssignedID");

    for doc in agreement.find_all("ram:AdditionalReferencedDocument") {
        inv.supporting_documents.push(referenced_document(doc)?);
    }

    inv.project = agreement
        .find("ram:SpecifiedProcuringProject")
        .map(|p| ProjectReference {
            id: p.string_at("ram:ID").unwrap_or_default(),
            name: p.string_at("ram:Name"),
        });
    Ok(())
}

fn referenced_document(doc: Element<'_>) -> Result<SupportingDocument, InvoiceError> {
    let attachment = match doc.find("ram:AttachmentBinaryObject") {
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
        id: doc.string_at("ram:IssuerAssignedID").unwrap_or_default(),
        type_code: doc.string_at("ram:TypeCode"),
        description: doc.string_at("ram:Name"),
        uri: doc.string_at("ram:URIID"),
        attachment,
    })
}

fn header_delivery(delivery: Element<'_>, inv: &mut Invoice) -> Result<(), InvoiceError> {
    inv.ship_to = delivery.find("ram:ShipToTradeParty").map(trade_party);
    inv.delivery_date = date_at(
        delivery,
        "ram:ActualDeliverySupplyChainEvent/ram:OccurrenceDateTime/udt:DateTimeString",
    )?;
    inv.despatch_advice_reference =
        delivery.string_at("ram:DespatchAdviceReferencedDocument/ram:IssuerAssignedID");
    inv.receiving_advice_reference =
        delivery.string_at("ram:ReceivingAdviceReferencedDocument/ram:IssuerAssignedID");
    Ok(())
}

fn header_settlement(settlement: Element<'_>, inv: &mut Invoice) -> Result<(), InvoiceError> {
    inv.creditor_reference_id = settlement.string_at("ram:CreditorReferenceID");
    inv.payment_reference = settlement.string_at("ram:PaymentReference");
    inv.tax_currency = settlement.string_at("ram:TaxCurrencyCode");
    inv.currency = settlement
        .string_at("ram:InvoiceCurrencyCode")
        .unwrap_or_default();
    inv.payee = settlement.find("ram:PayeeTradeParty").map(trade_party);

    let mandate = settlement.string_at("ram:SpecifiedTradePaymentTerms/ram:DirectDebitMandateID");
    for means in settlement.find_all("ram:SpecifiedTradeSettlementPaymentMeans") {
        inv.payment_means.push(payment_means(means, &mandate)?);
    }

    for tax in settlement.find_all("ram:ApplicableTradeTax") {
        inv.trade_taxes.push(TradeTax {
            type_code: tax.string_at("ram:TypeCode").unwrap_or_default(),
            category: category(tax.text_at("ram:CategoryCode")),
            rate: tax.decimal_at("ram:RateApplicablePercent")?,
            basis_amount: tax.amount_at("ram:BasisAmount")?,
            calculated_amount: tax.amount_at("ram:CalculatedAmount")?,
            exemption_reason: tax.string_at("ram:ExemptionReason"),
            exemption_reason_code: tax.string_at("ram:ExemptionReasonCode"),
            tax_point_date: date_at(tax, "ram:TaxPointDate/udt:DateString")?,
            due_date_type_code: tax.string_at("ram:DueDateTypeCode"),
        });
    }

    if let Some(period) = settlement.find("ram:BillingSpecifiedPeriod") {
        inv.billing_period = billing_period(period)?;
        inv.presence.billing_period = true;
    }

    for ac in settlement.find_all("ram:SpecifiedTradeAllowanceCharge") {
        inv.allowance_charges.push(allowance_charge(ac)?);
    }

    for terms in settlement.find_all("ram:SpecifiedTradePaymentTerms") {
        inv.payment_terms.push(PaymentTerms {
            description: terms.string_at("ram:Description"),
            due_date: date_at(terms, "ram:DueDateDateTime/udt:DateTimeString")?,
            direct_debit_mandate_id: terms.string_at("ram:DirectDebitMandateID"),
        });
    }

    if let Some(sum) = settlement.find("ram:SpecifiedTradeSettlementHeaderMonetarySummation") {
        monetary_summation(sum, inv)?;
    }

    for doc in settlement.find_all("ram:InvoiceReferencedDocument") {
        inv.preceding_invoices.push(PrecedingInvoice {
            number: doc.string_at("ram:IssuerAssignedID").unwrap_or_default(),
            issue_date: date_at(doc, "ram:FormattedIssueDateTime/qdt:DateTimeString")?,
        });
    }

    inv.buyer_accounting_reference =
        settlement.string_at("ram:ReceivableSpecifiedTradeAccountingAccount/ram:ID");
    Ok(())
}

fn payment_means(
    means: Element<'_>,
    mandate: &Option<String>,
) -> Result<PaymentMeans, InvoiceError> {
    let payee_account = means
        .find("ram:PayeePartyCreditorFinancialAccount")
        .map(|account| FinancialAccount {
            iban: account.string_at("ram:IBANID"),
            proprietary_id: account.string_at("ram:ProprietaryID"),
            name: account.string_at("ram:AccountName"),
            bic: means.string_at("ram:PayeeSpecifiedCreditorFinancialInstitution/ram:BICID"),
        });
    let card = means
        .find("ram:ApplicableTradeSettlementFinancialCard")
        .map(|card| PaymentCard {
            pan: card.string_at("ram:ID").unwrap_or_default(),
            holder: card.string_at("ram:CardholderName"),
        });
    let direct_debit = means
        .find("ram:PayerPartyDebtorFinancialAccount")
        .map(|account| DirectDebit {
            debited_account: account.string_at("ram:IBANID"),
            mandate_id: mandate.clone(),
        });
    Ok(PaymentMeans {
        type_code: code(means.find("ram:TypeCode"))?.map(PaymentMeansCode::from_code),
        information: means.string_at("ram:Information"),
        payee_account,
        card,
        direct_debit,
    })
}

fn monetary_summation(sum: Element<'_>, inv: &mut Invoice) -> Result<(), InvoiceError> {
    let t = &mut inv.totals;
    let p = &mut inv.presence;

    p.line_total = sum.exists("ram:LineTotalAmount");
    t.line_total = sum.amount_at("ram:LineTotalAmount")?;
    t.charge_total = sum.amount_at("ram:ChargeTotalAmount")?;
    t.allowance_total = sum.amount_at("ram:AllowanceTotalAmount")?;
    p.tax_basis_total = sum.exists("ram:TaxBasisTotalAmount");
    t.tax_basis_total = sum.amount_at("ram:TaxBasisTotalAmount")?;
    t.rounding = sum.amount_at("ram:RoundingAmount")?;
    p.grand_total = sum.exists("ram:GrandTotalAmount");
    t.grand_total = sum.amount_at("ram:GrandTotalAmount")?;
    t.prepaid = sum.amount_at("ram:TotalPrepaidAmount")?;
    p.due_payable = sum.exists("ram:DuePayableAmount");
    t.due_payable = sum.amount_at("ram:DuePayableAmount")?;

    let mut seen_document_currency = false;
    for amount in sum.find_all("ram:TaxTotalAmount") {
        let value = amount.decimal()?;
        let currency = amount.attr("currencyID").map(str::trim).unwrap_or("");
        if (currency.is_empty() || currency == inv.currency) && !seen_document_currency {
            t.tax_total = value;
            seen_document_currency = true;
        } else if inv.tax_currency.as_deref() == Some(currency) {
            t.tax_total_accounting = value;
            p.tax_total_accounting = true;
        } else if currency.is_empty() || currency == inv.currency {
            // Repeated in the invoice currency: the last one wins.
            debug!(currency = %inv.currency, "repeated tax total");
            t.tax_total = value;
        } else {
            warn!(currency, invoice_currency = %inv.currency, "tax total in unexpected currency");
            inv.unexpected_tax_currencies.push(currency.to_string());
        }
    }
    Ok(())
}

fn trade_party(party: Element<'_>) -> Party {
    let mut p = Party {
        name: party.string_at("ram:Name").unwrap_or_default(),
        description: party.string_at("ram:Description"),
        ..Default::default()
    };

    for id in party.find_all("ram:ID") {
        if !id.text().is_empty() {
            p.ids.push(id.text().to_string());
        }
    }
    for id in party.find_all("ram:GlobalID") {
        p.global_ids.push(SchemedId {
            scheme: id.attr("schemeID").map(str::to_string),
            value: id.text().to_string(),
        });
    }

    p.legal_organization = party
        .find("ram:SpecifiedLegalOrganization")
        .map(|org| LegalOrganization {
            id: org.string_at("ram:ID"),
            scheme: org.find("ram:ID").and_then(|id| id.attr("schemeID")).map(str::to_string),
            trading_name: org.string_at("ram:TradingBusinessName"),
        });

    for contact in party.find_all("ram:DefinedTradeContact") {
        p.contacts.push(Contact {
            person_name: contact.string_at("ram:PersonName"),
            department: contact.string_at("ram:DepartmentName"),
            phone: contact.string_at("ram:TelephoneUniversalCommunication/ram:CompleteNumber"),
            email: contact.string_at("ram:EmailURIUniversalCommunication/ram:URIID"),
        });
    }

    p.postal_address = party.find("ram:PostalTradeAddress").map(|a| PostalAddress {
        line1: a.string_at("ram:LineOne"),
        line2: a.string_at("ram:LineTwo"),
        line3: a.string_at("ram:LineThree"),
        city: a.string_at("ram:CityName"),
        postcode: a.string_at("ram:PostcodeCode"),
        subdivision: a.string_at("ram:CountrySubDivisionName"),
        country_code: a.string_at("ram:CountryID").unwrap_or_default(),
    });

    p.electronic_address = party
        .find("ram:URIUniversalCommunication/ram:URIID")
        .map(|uri| ElectronicAddress {
            scheme: uri.attr("schemeID").unwrap_or_default().to_string(),
            uri: uri.text().to_string(),
        });

    for registration in party.find_all("ram:SpecifiedTaxRegistration/ram:ID") {
        let value = registration.text();
        if value.is_empty() {
            continue;
        }
        match registration.attr("schemeID").map(str::trim) {
            Some("FC") => p.tax_registration = Some(value.to_string()),
            _ => p.vat_id = Some(value.to_string()),
        }
    }

    p
}

fn allowance_charge(ac: Element<'_>) -> Result<AllowanceCharge, InvoiceError> {
    let tax = ac.find("ram:CategoryTradeTax");
    Ok(AllowanceCharge {
        charge_indicator: ac
            .text_at("ram:ChargeIndicator/udt:Indicator")
            .is_some_and(|v| v == "true" || v == "1"),
        basis_amount: ac.decimal_at("ram:BasisAmount")?,
        actual_amount: ac.amount_at("ram:ActualAmount")?,
        calculation_percent: ac.decimal_at("ram:CalculationPercent")?,
        reason_code: ac.string_at("ram:ReasonCode"),
        reason: ac.string_at("ram:Reason"),
        tax_category: tax.and_then(|t| category(t.text_at("ram:CategoryCode"))),
        tax_type: tax.and_then(|t| t.string_at("ram:TypeCode")),
        tax_rate: match tax {
            Some(t) => t.decimal_at("ram:RateApplicablePercent")?,
            None => None,
        },
    })
}

fn billing_period(period: Element<'_>) -> Result<Period, InvoiceError> {
    Ok(Period {
        start: date_at(period, "ram:StartDateTime/udt:DateTimeString")?,
        end: date_at(period, "ram:EndDateTime/udt:DateTimeString")?,
    })
}

fn category(code: Option<&str>) -> Option<TaxCategory> {
    code.map(TaxCategory::from_code)
}

/// A numeric code such as BT-3 or BT-81. Absent or empty is `None`.
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

/// A UDT/QDT date string in format 102 (`YYYYMMDD`). Absent or empty is
/// `None`.
fn date_at(parent: Element<'_>, path: &str) -> Result<Option<NaiveDate>, InvoiceError> {
    let Some(element) = parent.find(path) else {
        return Ok(None);
    };
    let text = element.text();
    if text.is_empty() {
        return Ok(None);
    }
    let invalid = || InvoiceError::InvalidDate {
        value: text.to_string(),
        path: element.xpath(),
    };
    if element.attr("format").is_some_and(|f| f.trim() != "102") {
        return Err(invalid());
    }
    parse_102(text).map(Some).ok_or_else(invalid)
}

/// Format 102 (`CCYYMMDD`).
fn parse_102(text: &str) -> Option<NaiveDate> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y%m%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_102_dates() {
        assert_eq!(parse_102("20240115"), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(parse_102("20240230"), None);
        assert_eq!(parse_102("2024-01-15"), None);
        assert_eq!(parse_102("2024011"), None);
    }

    #[test]
    fn rejects_other_date_formats() {
        let xml = r#"<rsm:CrossIndustryInvoice
            xmlns:rsm="urn:un:unece:uncefact:data:standard:CrossIndustryInvoice:100"
            xmlns:ram="urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:100"
            xmlns:udt="urn:un:unece:uncefact:data:standard:UnqualifiedDataType:100">
          <rsm:ExchangedDocument>
            <ram:ID>1</ram:ID>
            <ram:IssueDateTime><udt:DateTimeString format="610">202401</udt:DateTimeString></ram:IssueDateTime>
          </rsm:ExchangedDocument>
        </rsm:CrossIndustryInvoice>"#;
        match from_cii_xml(xml) {
            Err(InvoiceError::InvalidDate { value, path }) => {
                assert_eq!(value, "202401");
                assert!(path.ends_with("ram:IssueDateTime/udt:DateTimeString"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
