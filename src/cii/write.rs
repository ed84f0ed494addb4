use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::ns;
use crate::core::decimal::{fixed, percent};
use crate::core::*;
use crate::xml::XmlWriter;

/// Generate CII (Cross Industry Invoice D16B) XML for an invoice.
///
/// Elements are chosen by the invoice profile: a field is written only if
/// it carries a value and the profile includes it. An unknown profile is
/// written as EN 16931.
pub fn to_cii_xml(invoice: &Invoice) -> Result<String, InvoiceError> {
    build(invoice)?.into_string()
}

pub(crate) fn write_cii(invoice: &Invoice) -> Result<Vec<u8>, InvoiceError> {
    Ok(build(invoice)?.into_bytes())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Role {
    Seller,
    Buyer,
    Other,
}

fn build(inv: &Invoice) -> Result<XmlWriter, InvoiceError> {
    let profile = inv.profile.effective();
    let mut w = XmlWriter::new()?;

    w.start_element_with_attrs(
        "rsm:CrossIndustryInvoice",
        &[
            ("xmlns:rsm", ns::RSM),
            ("xmlns:qdt", ns::QDT),
            ("xmlns:ram", ns::RAM),
            ("xmlns:xs", ns::XS),
            ("xmlns:udt", ns::UDT),
        ],
    )?;

    // --- ExchangedDocumentContext ---
    w.start_element("rsm:ExchangedDocumentContext")?;
    if let Some(process) = inv.business_process.as_deref().filter(|p| !p.trim().is_empty()) {
        w.start_element("ram:BusinessProcessSpecifiedDocumentContextParameter")?;
        w.text_element("ram:ID", process)?;
        w.end_element("ram:BusinessProcessSpecifiedDocumentContextParameter")?;
    }
    let guideline = if inv.specification_id.trim().is_empty() {
        profile.urn()
    } else {
        inv.specification_id.as_str()
    };
    w.start_element("ram:GuidelineSpecifiedDocumentContextParameter")?;
    w.text_element("ram:ID", guideline)?;
    w.end_element("ram:GuidelineSpecifiedDocumentContextParameter")?;
    w.end_element("rsm:ExchangedDocumentContext")?;

    // --- ExchangedDocument ---
    w.start_element("rsm:ExchangedDocument")?;
    w.text_element("ram:ID", &inv.number)?;
    if inv.type_code.is_set() {
        w.text_element("ram:TypeCode", &inv.type_code.code().to_string())?;
    }
    if let Some(date) = inv.issue_date {
        date_element(&mut w, "ram:IssueDateTime", date)?;
    }
    if profile >= Profile::BasicWl {
        for note in &inv.notes {
            w.start_element("ram:IncludedNote")?;
            w.text_element("ram:Content", &note.text)?;
            w.opt_text_element("ram:SubjectCode", note.subject_code.as_deref())?;
            w.end_element("ram:IncludedNote")?;
        }
    }
    w.end_element("rsm:ExchangedDocument")?;

    // --- SupplyChainTradeTransaction ---
    w.start_element("rsm:SupplyChainTradeTransaction")?;
    if profile >= Profile::Basic {
        for line in &inv.lines {
            write_line(&mut w, line, profile)?;
        }
    }
    write_agreement(&mut w, inv, profile)?;
    write_delivery(&mut w, inv, profile)?;
    write_settlement(&mut w, inv, profile)?;
    w.end_element("rsm:SupplyChainTradeTransaction")?;

    w.end_element("rsm:CrossIndustryInvoice")?;

    debug!(
        number = %inv.number,
        %profile,
        lines = inv.lines.len(),
        breakdowns = inv.trade_taxes.len(),
        "wrote CII invoice"
    );
    Ok(w)
}

fn write_line(w: &mut XmlWriter, line: &InvoiceLine, profile: Profile) -> Result<(), InvoiceError> {
    let full = profile >= Profile::En16931;
    w.start_element("ram:IncludedSupplyChainTradeLineItem")?;

    w.start_element("ram:AssociatedDocumentLineDocument")?;
    w.text_element("ram:LineID", &line.id)?;
    if let Some(note) = non_blank(&line.note) {
        w.start_element("ram:IncludedNote")?;
        w.text_element("ram:Content", note)?;
        w.end_element("ram:IncludedNote")?;
    }
    w.end_element("ram:AssociatedDocumentLineDocument")?;

    // BG-31: item
    let item = &line.item;
    w.start_element("ram:SpecifiedTradeProduct")?;
    if let Some(id) = item.standard_id.as_ref().filter(|id| !id.value.trim().is_empty()) {
        schemed_element(w, "ram:GlobalID", id)?;
    }
    if full {
        w.opt_text_element("ram:SellerAssignedID", item.seller_id.as_deref())?;
        w.opt_text_element("ram:BuyerAssignedID", item.buyer_id.as_deref())?;
    }
    w.text_element("ram:Name", &item.name)?;
    if full {
        w.opt_text_element("ram:Description", item.description.as_deref())?;
        for attr in &item.attributes {
            w.start_element("ram:ApplicableProductCharacteristic")?;
            w.text_element("ram:Description", &attr.name)?;
            w.text_element("ram:Value", &attr.value)?;
            w.end_element("ram:ApplicableProductCharacteristic")?;
        }
        for class in &item.classifications {
            let mut attrs = Vec::new();
            if let Some(list) = non_blank(&class.list_id) {
                attrs.push(("listID", list));
            }
            if let Some(version) = non_blank(&class.list_version) {
                attrs.push(("listVersionID", version));
            }
            w.start_element("ram:DesignatedProductClassification")?;
            w.text_element_with_attrs("ram:ClassCode", &class.code, &attrs)?;
            w.end_element("ram:DesignatedProductClassification")?;
        }
        if let Some(country) = non_blank(&item.origin_country) {
            w.start_element("ram:OriginTradeCountry")?;
            w.text_element("ram:ID", country)?;
            w.end_element("ram:OriginTradeCountry")?;
        }
    }
    w.end_element("ram:SpecifiedTradeProduct")?;

    // Price
    w.start_element("ram:SpecifiedLineTradeAgreement")?;
    if full {
        if let Some(order_line) = non_blank(&line.order_line_reference) {
            w.start_element("ram:BuyerOrderReferencedDocument")?;
            w.text_element("ram:LineID", order_line)?;
            w.end_element("ram:BuyerOrderReferencedDocument")?;
        }
    }
    if let Some(gross) = line.gross_price {
        w.start_element("ram:GrossPriceProductTradePrice")?;
        w.text_element("ram:ChargeAmount", &fixed(gross, 12))?;
        for ac in &line.price_allowance_charges {
            write_allowance_charge(w, "ram:AppliedTradeAllowanceCharge", ac)?;
        }
        w.end_element("ram:GrossPriceProductTradePrice")?;
    }
    w.start_element("ram:NetPriceProductTradePrice")?;
    w.text_element("ram:ChargeAmount", &fixed(line.net_price, 4))?;
    if let Some(basis) = line.basis_quantity {
        quantity_element(w, "ram:BasisQuantity", basis, &line.unit_code)?;
    }
    w.end_element("ram:NetPriceProductTradePrice")?;
    w.end_element("ram:SpecifiedLineTradeAgreement")?;

    w.start_element("ram:SpecifiedLineTradeDelivery")?;
    quantity_element(w, "ram:BilledQuantity", line.billed_quantity, &line.unit_code)?;
    w.end_element("ram:SpecifiedLineTradeDelivery")?;

    // Line settlement
    w.start_element("ram:SpecifiedLineTradeSettlement")?;
    w.start_element("ram:ApplicableTradeTax")?;
    w.text_element("ram:TypeCode", tax_type(&line.tax_type))?;
    if let Some(category) = &line.tax_category {
        w.text_element("ram:CategoryCode", category.code())?;
    }
    if let Some(rate) = line.tax_rate {
        w.text_element("ram:RateApplicablePercent", &percent(rate))?;
    }
    w.end_element("ram:ApplicableTradeTax")?;
    write_period(w, &line.period)?;
    for ac in &line.allowance_charges {
        write_allowance_charge(w, "ram:SpecifiedTradeAllowanceCharge", ac)?;
    }
    w.start_element("ram:SpecifiedTradeSettlementLineMonetarySummation")?;
    w.text_element("ram:LineTotalAmount", &fixed(line.total, 2))?;
    w.end_element("ram:SpecifiedTradeSettlementLineMonetarySummation")?;
    if full {
        if let Some(account) = non_blank(&line.accounting_reference) {
            w.start_element("ram:ReceivableSpecifiedTradeAccountingAccount")?;
            w.text_element("ram:ID", account)?;
            w.end_element("ram:ReceivableSpecifiedTradeAccountingAccount")?;
        }
    }
    w.end_element("ram:SpecifiedLineTradeSettlement")?;

    w.end_element("ram:IncludedSupplyChainTradeLineItem")?;
    Ok(())
}

fn write_agreement(w: &mut XmlWriter, inv: &Invoice, profile: Profile) -> Result<(), InvoiceError> {
    w.start_element("ram:ApplicableHeaderTradeAgreement")?;
    w.opt_text_element("ram:BuyerReference", inv.buyer_reference.as_deref())?;
    write_party(w, "ram:SellerTradeParty", &inv.seller, Role::Seller, profile)?;
    write_party(w, "ram:BuyerTradeParty", &inv.buyer, Role::Buyer, profile)?;
    if profile >= Profile::BasicWl {
        if let Some(rep) = &inv.tax_representative {
            write_party(w, "ram:SellerTaxRepresentativeTradeParty", rep, Role::Other, profile)?;
        }
    }
    if profile >= Profile::En16931 {
        referenced_document(w, "ram:SellerOrderReferencedDocument", &inv.sales_order_reference)?;
    }
    referenced_document(w, "ram:BuyerOrderReferencedDocument", &inv.purchase_order_reference)?;
    if profile >= Profile::BasicWl {
        referenced_document(w, "ram:ContractReferencedDocument", &inv.contract_reference)?;
    }
    if profile >= Profile::En16931 {
        for doc in &inv.supporting_documents {
            write_supporting_document(w, doc)?;
        }
        if let Some(project) = inv.project.as_ref().filter(|p| !p.id.trim().is_empty()) {
            w.start_element("ram:SpecifiedProcuringProject")?;
            w.text_element("ram:ID", &project.id)?;
            w.text_element("ram:Name", project.name.as_deref().unwrap_or(&project.id))?;
            w.end_element("ram:SpecifiedProcuringProject")?;
        }
    }
    w.end_element("ram:ApplicableHeaderTradeAgreement")?;
    Ok(())
}

fn write_supporting_document(w: &mut XmlWriter, doc: &SupportingDocument) -> Result<(), InvoiceError> {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    w.start_element("ram:AdditionalReferencedDocument")?;
    w.text_element("ram:IssuerAssignedID", &doc.id)?;
    w.opt_text_element("ram:URIID", doc.uri.as_deref())?;
    w.text_element("ram:TypeCode", doc.type_code.as_deref().unwrap_or("916"))?;
    w.opt_text_element("ram:Name", doc.description.as_deref())?;
    if let Some(attachment) = &doc.attachment {
        w.text_element_with_attrs(
            "ram:AttachmentBinaryObject",
            &STANDARD.encode(&attachment.data),
            &[
                ("mimeCode", attachment.mime_code.as_str()),
                ("filename", attachment.filename.as_str()),
            ],
        )?;
    }
    w.end_element("ram:AdditionalReferencedDocument")?;
    Ok(())
}

fn write_delivery(w: &mut XmlWriter, inv: &Invoice, profile: Profile) -> Result<(), InvoiceError> {
    w.start_element("ram:ApplicableHeaderTradeDelivery")?;
    if profile >= Profile::BasicWl {
        if let Some(ship_to) = &inv.ship_to {
            write_party(w, "ram:ShipToTradeParty", ship_to, Role::Other, profile)?;
        }
        if let Some(date) = inv.delivery_date {
            w.start_element("ram:ActualDeliverySupplyChainEvent")?;
            date_element(w, "ram:OccurrenceDateTime", date)?;
            w.end_element("ram:ActualDeliverySupplyChainEvent")?;
        }
        referenced_document(w, "ram:DespatchAdviceReferencedDocument", &inv.despatch_advice_reference)?;
    }
    if profile >= Profile::En16931 {
        referenced_document(w, "ram:ReceivingAdviceReferencedDocument", &inv.receiving_advice_reference)?;
    }
    w.end_element("ram:ApplicableHeaderTradeDelivery")?;
    Ok(())
}

fn write_settlement(w: &mut XmlWriter, inv: &Invoice, profile: Profile) -> Result<(), InvoiceError> {
    let extended = profile >= Profile::BasicWl;
    w.start_element("ram:ApplicableHeaderTradeSettlement")?;

    if extended {
        w.opt_text_element("ram:CreditorReferenceID", inv.creditor_reference_id.as_deref())?;
        w.opt_text_element("ram:PaymentReference", inv.payment_reference.as_deref())?;
        w.opt_text_element("ram:TaxCurrencyCode", inv.tax_currency.as_deref())?;
    }
    w.text_element("ram:InvoiceCurrencyCode", &inv.currency)?;

    if extended {
        if let Some(payee) = &inv.payee {
            write_party(w, "ram:PayeeTradeParty", payee, Role::Other, profile)?;
        }
        for means in &inv.payment_means {
            write_payment_means(w, means)?;
        }
        for tax in &inv.trade_taxes {
            write_trade_tax(w, tax)?;
        }
        write_period(w, &inv.billing_period)?;
        for ac in &inv.allowance_charges {
            write_allowance_charge(w, "ram:SpecifiedTradeAllowanceCharge", ac)?;
        }
        for terms in &inv.payment_terms {
            if is_blank(&terms.description)
                && terms.due_date.is_none()
                && is_blank(&terms.direct_debit_mandate_id)
            {
                continue;
            }
            w.start_element("ram:SpecifiedTradePaymentTerms")?;
            w.opt_text_element("ram:Description", terms.description.as_deref())?;
            if let Some(date) = terms.due_date {
                date_element(w, "ram:DueDateDateTime", date)?;
            }
            w.opt_text_element("ram:DirectDebitMandateID", terms.direct_debit_mandate_id.as_deref())?;
            w.end_element("ram:SpecifiedTradePaymentTerms")?;
        }
    }

    write_summation(w, inv, profile)?;

    if extended {
        for preceding in &inv.preceding_invoices {
            w.start_element("ram:InvoiceReferencedDocument")?;
            w.text_element("ram:IssuerAssignedID", &preceding.number)?;
            if let Some(date) = preceding.issue_date {
                w.start_element("ram:FormattedIssueDateTime")?;
                w.text_element_with_attrs("qdt:DateTimeString", &format_102(date), &[("format", "102")])?;
                w.end_element("ram:FormattedIssueDateTime")?;
            }
            w.end_element("ram:InvoiceReferencedDocument")?;
        }
        if let Some(account) = non_blank(&inv.buyer_accounting_reference) {
            w.start_element("ram:ReceivableSpecifiedTradeAccountingAccount")?;
            w.text_element("ram:ID", account)?;
            w.end_element("ram:ReceivableSpecifiedTradeAccountingAccount")?;
        }
    }

    w.end_element("ram:ApplicableHeaderTradeSettlement")?;
    Ok(())
}

fn write_payment_means(w: &mut XmlWriter, means: &PaymentMeans) -> Result<(), InvoiceError> {
    w.start_element("ram:SpecifiedTradeSettlementPaymentMeans")?;
    if let Some(code) = means.type_code {
        w.text_element("ram:TypeCode", &code.code().to_string())?;
    }
    w.opt_text_element("ram:Information", means.information.as_deref())?;
    if let Some(card) = means.card.as_ref().filter(|c| !c.pan.trim().is_empty()) {
        w.start_element("ram:ApplicableTradeSettlementFinancialCard")?;
        w.text_element("ram:ID", &card.pan)?;
        w.opt_text_element("ram:CardholderName", card.holder.as_deref())?;
        w.end_element("ram:ApplicableTradeSettlementFinancialCard")?;
    }
    if let Some(debit) = &means.direct_debit {
        if let Some(iban) = non_blank(&debit.debited_account) {
            w.start_element("ram:PayerPartyDebtorFinancialAccount")?;
            w.text_element("ram:IBANID", iban)?;
            w.end_element("ram:PayerPartyDebtorFinancialAccount")?;
        }
    }
    if let Some(account) = &means.payee_account {
        w.start_element("ram:PayeePartyCreditorFinancialAccount")?;
        w.opt_text_element("ram:IBANID", account.iban.as_deref())?;
        w.opt_text_element("ram:AccountName", account.name.as_deref())?;
        w.opt_text_element("ram:ProprietaryID", account.proprietary_id.as_deref())?;
        w.end_element("ram:PayeePartyCreditorFinancialAccount")?;
        if let Some(bic) = non_blank(&account.bic) {
            w.start_element("ram:PayeeSpecifiedCreditorFinancialInstitution")?;
            w.text_element("ram:BICID", bic)?;
            w.end_element("ram:PayeeSpecifiedCreditorFinancialInstitution")?;
        }
    }
    w.end_element("ram:SpecifiedTradeSettlementPaymentMeans")?;
    Ok(())
}

fn write_trade_tax(w: &mut XmlWriter, tax: &TradeTax) -> Result<(), InvoiceError> {
    w.start_element("ram:ApplicableTradeTax")?;
    w.text_element("ram:CalculatedAmount", &fixed(tax.calculated_amount, 2))?;
    w.text_element("ram:TypeCode", tax_type(&tax.type_code))?;
    w.opt_text_element("ram:ExemptionReason", tax.exemption_reason.as_deref())?;
    w.text_element("ram:BasisAmount", &fixed(tax.basis_amount, 2))?;
    if let Some(category) = &tax.category {
        w.text_element("ram:CategoryCode", category.code())?;
    }
    w.opt_text_element("ram:ExemptionReasonCode", tax.exemption_reason_code.as_deref())?;
    if let Some(date) = tax.tax_point_date {
        w.start_element("ram:TaxPointDate")?;
        w.text_element_with_attrs("udt:DateString", &format_102(date), &[("format", "102")])?;
        w.end_element("ram:TaxPointDate")?;
    }
    w.opt_text_element("ram:DueDateTypeCode", tax.due_date_type_code.as_deref())?;
    if let Some(rate) = tax.rate {
        w.text_element("ram:RateApplicablePercent", &percent(rate))?;
    }
    w.end_element("ram:ApplicableTradeTax")?;
    Ok(())
}

fn write_summation(w: &mut XmlWriter, inv: &Invoice, profile: Profile) -> Result<(), InvoiceError> {
    let t = &inv.totals;
    let extended = profile >= Profile::BasicWl;

    w.start_element("ram:SpecifiedTradeSettlementHeaderMonetarySummation")?;
    if extended {
        w.text_element("ram:LineTotalAmount", &fixed(t.line_total, 2))?;
        opt_amount(w, "ram:ChargeTotalAmount", t.charge_total)?;
        opt_amount(w, "ram:AllowanceTotalAmount", t.allowance_total)?;
    }
    w.text_element("ram:TaxBasisTotalAmount", &fixed(t.tax_basis_total, 2))?;
    w.text_element_with_attrs(
        "ram:TaxTotalAmount",
        &fixed(t.tax_total, 2),
        &[("currencyID", inv.currency.as_str())],
    )?;
    if let Some(tax_currency) = inv
        .tax_currency
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && *c != inv.currency)
    {
        w.text_element_with_attrs(
            "ram:TaxTotalAmount",
            &fixed(t.tax_total_accounting, 2),
            &[("currencyID", tax_currency)],
        )?;
    }
    if profile >= Profile::En16931 {
        opt_amount(w, "ram:RoundingAmount", t.rounding)?;
    }
    w.text_element("ram:GrandTotalAmount", &fixed(t.grand_total, 2))?;
    if extended {
        opt_amount(w, "ram:TotalPrepaidAmount", t.prepaid)?;
    }
    w.text_element("ram:DuePayableAmount", &fixed(t.due_payable, 2))?;
    w.end_element("ram:SpecifiedTradeSettlementHeaderMonetarySummation")?;
    Ok(())
}

fn write_party(
    w: &mut XmlWriter,
    element: &str,
    party: &Party,
    role: Role,
    profile: Profile,
) -> Result<(), InvoiceError> {
    let extended = profile >= Profile::BasicWl;
    let full = profile >= Profile::En16931;
    w.start_element(element)?;

    if extended {
        for id in party.ids.iter().filter(|id| !id.trim().is_empty()) {
            w.text_element("ram:ID", id)?;
        }
        for id in party.global_ids.iter().filter(|id| !id.value.trim().is_empty()) {
            schemed_element(w, "ram:GlobalID", id)?;
        }
    }
    w.text_element("ram:Name", &party.name)?;
    if full {
        w.opt_text_element("ram:Description", party.description.as_deref())?;
    }

    if let Some(org) = &party.legal_organization {
        let trading_name = if extended { non_blank(&org.trading_name) } else { None };
        let id = non_blank(&org.id);
        if id.is_some() || trading_name.is_some() {
            w.start_element("ram:SpecifiedLegalOrganization")?;
            if let Some(id) = id {
                match non_blank(&org.scheme) {
                    Some(scheme) => w.text_element_with_attrs("ram:ID", id, &[("schemeID", scheme)])?,
                    None => w.text_element("ram:ID", id)?,
                };
            }
            w.opt_text_element("ram:TradingBusinessName", trading_name)?;
            w.end_element("ram:SpecifiedLegalOrganization")?;
        }
    }

    if full {
        for contact in &party.contacts {
            w.start_element("ram:DefinedTradeContact")?;
            w.opt_text_element("ram:PersonName", contact.person_name.as_deref())?;
            w.opt_text_element("ram:DepartmentName", contact.department.as_deref())?;
            if let Some(phone) = non_blank(&contact.phone) {
                w.start_element("ram:TelephoneUniversalCommunication")?;
                w.text_element("ram:CompleteNumber", phone)?;
                w.end_element("ram:TelephoneUniversalCommunication")?;
            }
            if let Some(email) = non_blank(&contact.email) {
                w.start_element("ram:EmailURIUniversalCommunication")?;
                w.text_element("ram:URIID", email)?;
                w.end_element("ram:EmailURIUniversalCommunication")?;
            }
            w.end_element("ram:DefinedTradeContact")?;
        }
    }

    if let Some(address) = &party.postal_address {
        if extended {
            w.start_element("ram:PostalTradeAddress")?;
            w.opt_text_element("ram:PostcodeCode", address.postcode.as_deref())?;
            w.opt_text_element("ram:LineOne", address.line1.as_deref())?;
            w.opt_text_element("ram:LineTwo", address.line2.as_deref())?;
            w.opt_text_element("ram:LineThree", address.line3.as_deref())?;
            w.opt_text_element("ram:CityName", address.city.as_deref())?;
            w.text_element("ram:CountryID", &address.country_code)?;
            w.opt_text_element("ram:CountrySubDivisionName", address.subdivision.as_deref())?;
            w.end_element("ram:PostalTradeAddress")?;
        } else if role == Role::Seller {
            w.start_element("ram:PostalTradeAddress")?;
            w.text_element("ram:CountryID", &address.country_code)?;
            w.end_element("ram:PostalTradeAddress")?;
        }
    }

    if extended {
        if let Some(address) = party
            .electronic_address
            .as_ref()
            .filter(|a| !a.uri.trim().is_empty())
        {
            w.start_element("ram:URIUniversalCommunication")?;
            w.text_element_with_attrs("ram:URIID", &address.uri, &[("schemeID", address.scheme.as_str())])?;
            w.end_element("ram:URIUniversalCommunication")?;
        }
    }

    if extended || role == Role::Seller {
        tax_registration(w, &party.vat_id, "VA")?;
        tax_registration(w, &party.tax_registration, "FC")?;
    }

    w.end_element(element)?;
    Ok(())
}

fn tax_registration(w: &mut XmlWriter, id: &Option<String>, scheme: &str) -> Result<(), InvoiceError> {
    if let Some(id) = non_blank(id) {
        w.start_element("ram:SpecifiedTaxRegistration")?;
        w.text_element_with_attrs("ram:ID", id, &[("schemeID", scheme)])?;
        w.end_element("ram:SpecifiedTaxRegistration")?;
    }
    Ok(())
}

fn write_allowance_charge(
    w: &mut XmlWriter,
    element: &str,
    ac: &AllowanceCharge,
) -> Result<(), InvoiceError> {
    w.start_element(element)?;
    w.start_element("ram:ChargeIndicator")?;
    w.text_element("udt:Indicator", if ac.charge_indicator { "true" } else { "false" })?;
    w.end_element("ram:ChargeIndicator")?;
    if let Some(pct) = ac.calculation_percent {
        w.text_element("ram:CalculationPercent", &percent(pct))?;
    }
    if let Some(basis) = ac.basis_amount {
        w.text_element("ram:BasisAmount", &fixed(basis, 2))?;
    }
    w.text_element("ram:ActualAmount", &fixed(ac.actual_amount, 2))?;
    w.opt_text_element("ram:ReasonCode", ac.reason_code.as_deref())?;
    w.opt_text_element("ram:Reason", ac.reason.as_deref())?;
    if let Some(category) = &ac.tax_category {
        w.start_element("ram:CategoryTradeTax")?;
        w.text_element("ram:TypeCode", ac.tax_type.as_deref().map_or("VAT", tax_type))?;
        w.text_element("ram:CategoryCode", category.code())?;
        if let Some(rate) = ac.tax_rate {
            w.text_element("ram:RateApplicablePercent", &percent(rate))?;
        }
        w.end_element("ram:CategoryTradeTax")?;
    }
    w.end_element(element)?;
    Ok(())
}

/// `BillingSpecifiedPeriod` with only the dates that are set; nothing when
/// both are unset.
fn write_period(w: &mut XmlWriter, period: &Period) -> Result<(), InvoiceError> {
    if period.is_empty() {
        return Ok(());
    }
    w.start_element("ram:BillingSpecifiedPeriod")?;
    if let Some(start) = period.start {
        date_element(w, "ram:StartDateTime", start)?;
    }
    if let Some(end) = period.end {
        date_element(w, "ram:EndDateTime", end)?;
    }
    w.end_element("ram:BillingSpecifiedPeriod")?;
    Ok(())
}

fn referenced_document(w: &mut XmlWriter, element: &str, id: &Option<String>) -> Result<(), InvoiceError> {
    if let Some(id) = non_blank(id) {
        w.start_element(element)?;
        w.text_element("ram:IssuerAssignedID", id)?;
        w.end_element(element)?;
    }
    Ok(())
}

fn schemed_element(w: &mut XmlWriter, element: &str, id: &SchemedId) -> Result<(), InvoiceError> {
    match non_blank(&id.scheme) {
        Some(scheme) => w.text_element_with_attrs(element, &id.value, &[("schemeID", scheme)])?,
        None => w.text_element(element, &id.value)?,
    };
    Ok(())
}

fn quantity_element(w: &mut XmlWriter, element: &str, value: Decimal, unit: &str) -> Result<(), InvoiceError> {
    let unit = unit.trim();
    if unit.is_empty() {
        w.text_element(element, &fixed(value, 4))?;
    } else {
        w.text_element_with_attrs(element, &fixed(value, 4), &[("unitCode", unit)])?;
    }
    Ok(())
}

fn opt_amount(w: &mut XmlWriter, element: &str, value: Decimal) -> Result<(), InvoiceError> {
    if !value.is_zero() {
        w.text_element(element, &fixed(value, 2))?;
    }
    Ok(())
}

fn date_element(w: &mut XmlWriter, element: &str, date: NaiveDate) -> Result<(), InvoiceError> {
    w.start_element(element)?;
    w.text_element_with_attrs("udt:DateTimeString", &format_102(date), &[("format", "102")])?;
    w.end_element(element)?;
    Ok(())
}

fn format_102(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn tax_type(code: &str) -> &str {
    match code.trim() {
        "" => "VAT",
        c => c,
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample(profile: Profile) -> Invoice {
        Invoice {
            profile,
            number: "RE-1".into(),
            issue_date: Some(date(2024, 3, 1)),
            type_code: InvoiceTypeCode::COMMERCIAL,
            currency: "EUR".into(),
            seller: Party {
                name: "Seller".into(),
                vat_id: Some("DE123456789".into()),
                postal_address: Some(PostalAddress {
                    city: Some("Berlin".into()),
                    postcode: Some("10115".into()),
                    country_code: "DE".into(),
                    ..Default::default()
                }),
                ..Default::default()
            },
            buyer: Party {
                name: "Buyer".into(),
                postal_address: Some(PostalAddress {
                    country_code: "FR".into(),
                    ..Default::default()
                }),
                ..Default::default()
            },
            notes: vec![Note {
                text: "Hinweis".into(),
                subject_code: None,
            }],
            lines: vec![InvoiceLine {
                id: "1".into(),
                item: Item {
                    name: "Widget".into(),
                    ..Default::default()
                },
                billed_quantity: dec!(2),
                unit_code: "C62".into(),
                net_price: dec!(10),
                tax_type: "VAT".into(),
                tax_category: Some(TaxCategory::StandardRate),
                tax_rate: Some(dec!(19)),
                total: dec!(20),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn minimum_profile_omits_lines_and_notes() {
        let xml = to_cii_xml(&sample(Profile::Minimum)).unwrap();
        assert!(!xml.contains("IncludedSupplyChainTradeLineItem"));
        assert!(!xml.contains("IncludedNote"));
        assert!(!xml.contains("ram:LineTotalAmount"));
        assert!(xml.contains("<ram:CountryID>DE</ram:CountryID>"));
        assert!(!xml.contains("<ram:CountryID>FR</ram:CountryID>"));
        assert!(!xml.contains("ram:CityName"));
    }

    #[test]
    fn basic_profile_writes_lines() {
        let xml = to_cii_xml(&sample(Profile::Basic)).unwrap();
        assert!(xml.contains("<ram:LineID>1</ram:LineID>"));
        assert!(xml.contains(r#"<ram:BilledQuantity unitCode="C62">2.0000</ram:BilledQuantity>"#));
        assert!(xml.contains("<ram:ChargeAmount>10.0000</ram:ChargeAmount>"));
        assert!(xml.contains("<ram:RateApplicablePercent>19</ram:RateApplicablePercent>"));
        assert!(xml.contains("<ram:LineTotalAmount>20.00</ram:LineTotalAmount>"));
    }

    #[test]
    fn unknown_profile_is_written_as_en16931() {
        let xml = to_cii_xml(&sample(Profile::Unknown)).unwrap();
        assert!(xml.contains("<ram:ID>urn:cen.eu:en16931:2017</ram:ID>"));
        assert!(xml.contains("IncludedSupplyChainTradeLineItem"));
    }

    #[test]
    fn dates_use_format_102() {
        let xml = to_cii_xml(&sample(Profile::En16931)).unwrap();
        assert!(xml.contains(r#"<udt:DateTimeString format="102">20240301</udt:DateTimeString>"#));
    }

    #[test]
    fn empty_period_is_not_written() {
        let xml = to_cii_xml(&sample(Profile::En16931)).unwrap();
        assert!(!xml.contains("BillingSpecifiedPeriod"));
        assert!(!xml.contains("00010101"));
    }
}
