use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::profile::Profile;
use super::types::*;

/// Builder for constructing invoices in code.
///
/// `build()` computes every line net amount, the VAT breakdown and the
/// document totals. It does not validate; call [`Invoice::validate`] on the
/// result.
///
/// ```
/// use einvoice::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let mut invoice = InvoiceBuilder::new("RE-2024-001", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .seller(PartyBuilder::new("ACME GmbH")
///         .address(AddressBuilder::new("Berlin", "10115", "DE").build())
///         .vat_id("DE123456789")
///         .build())
///     .buyer(PartyBuilder::new("Kunde AG")
///         .address(AddressBuilder::new("München", "80331", "DE").build())
///         .build())
///     .add_line(LineBuilder::new("1", "Beratung", dec!(10), "HUR", dec!(150.00))
///         .tax(TaxCategory::StandardRate, dec!(19))
///         .build())
///     .payment_terms("Zahlbar innerhalb von 30 Tagen")
///     .build();
///
/// assert_eq!(invoice.totals.grand_total, dec!(1785.00));
/// assert!(invoice.validate().is_ok());
/// ```
pub struct InvoiceBuilder {
    invoice: Invoice,
    exemption_reasons: BTreeMap<String, String>,
}

impl InvoiceBuilder {
    /// EN 16931 commercial invoice in EUR.
    pub fn new(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        let invoice = Invoice {
            profile: Profile::En16931,
            specification_id: Profile::En16931.urn().to_string(),
            number: number.into(),
            issue_date: Some(issue_date),
            type_code: InvoiceTypeCode::COMMERCIAL,
            currency: "EUR".to_string(),
            ..Default::default()
        };
        Self {
            invoice,
            exemption_reasons: BTreeMap::new(),
        }
    }

    /// Set the profile and its canonical specification identifier.
    pub fn profile(mut self, profile: Profile) -> Self {
        self.invoice.profile = profile;
        self.invoice.specification_id = profile.urn().to_string();
        self
    }

    pub fn business_process(mut self, process: impl Into<String>) -> Self {
        self.invoice.business_process = Some(process.into());
        self
    }

    pub fn type_code(mut self, code: InvoiceTypeCode) -> Self {
        self.invoice.type_code = code;
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.invoice.currency = code.into();
        self
    }

    pub fn tax_currency(mut self, code: impl Into<String>) -> Self {
        self.invoice.tax_currency = Some(code.into());
        self
    }

    pub fn note(mut self, text: impl Into<String>) -> Self {
        self.invoice.notes.push(Note {
            text: text.into(),
            subject_code: None,
        });
        self
    }

    pub fn note_with_subject(mut self, subject: impl Into<String>, text: impl Into<String>) -> Self {
        self.invoice.notes.push(Note {
            text: text.into(),
            subject_code: Some(subject.into()),
        });
        self
    }

    pub fn buyer_reference(mut self, reference: impl Into<String>) -> Self {
        self.invoice.buyer_reference = Some(reference.into());
        self
    }

    pub fn purchase_order_reference(mut self, reference: impl Into<String>) -> Self {
        self.invoice.purchase_order_reference = Some(reference.into());
        self
    }

    pub fn contract_reference(mut self, reference: impl Into<String>) -> Self {
        self.invoice.contract_reference = Some(reference.into());
        self
    }

    pub fn preceding_invoice(mut self, number: impl Into<String>, issue_date: Option<NaiveDate>) -> Self {
        self.invoice.preceding_invoices.push(PrecedingInvoice {
            number: number.into(),
            issue_date,
        });
        self
    }

    pub fn seller(mut self, party: Party) -> Self {
        self.invoice.seller = party;
        self
    }

    pub fn buyer(mut self, party: Party) -> Self {
        self.invoice.buyer = party;
        self
    }

    pub fn payee(mut self, party: Party) -> Self {
        self.invoice.payee = Some(party);
        self
    }

    pub fn tax_representative(mut self, party: Party) -> Self {
        self.invoice.tax_representative = Some(party);
        self
    }

    pub fn ship_to(mut self, party: Party) -> Self {
        self.invoice.ship_to = Some(party);
        self
    }

    pub fn delivery_date(mut self, date: NaiveDate) -> Self {
        self.invoice.delivery_date = Some(date);
        self
    }

    pub fn billing_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.invoice.billing_period = Period::new(start, end);
        self
    }

    pub fn add_line(mut self, line: InvoiceLine) -> Self {
        self.invoice.lines.push(line);
        self
    }

    pub fn add_allowance(mut self, allowance: AllowanceCharge) -> Self {
        self.invoice.allowance_charges.push(AllowanceCharge {
            charge_indicator: false,
            ..allowance
        });
        self
    }

    pub fn add_charge(mut self, charge: AllowanceCharge) -> Self {
        self.invoice.allowance_charges.push(AllowanceCharge {
            charge_indicator: true,
            ..charge
        });
        self
    }

    /// BT-120 text for every breakdown entry of `category`.
    pub fn exemption_reason(mut self, category: TaxCategory, reason: impl Into<String>) -> Self {
        self.exemption_reasons
            .insert(category.code().to_string(), reason.into());
        self
    }

    pub fn payment_means(mut self, means: PaymentMeans) -> Self {
        self.invoice.payment_means.push(means);
        self
    }

    /// SEPA credit transfer (code 58) to `iban`.
    pub fn sepa_credit_transfer(self, iban: impl Into<String>, bic: Option<String>) -> Self {
        self.payment_means(PaymentMeans {
            type_code: Some(PaymentMeansCode::SepaCreditTransfer),
            payee_account: Some(FinancialAccount {
                iban: Some(iban.into()),
                bic,
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    pub fn payment_terms(mut self, description: impl Into<String>) -> Self {
        self.invoice.payment_terms.push(PaymentTerms {
            description: Some(description.into()),
            ..Default::default()
        });
        self
    }

    /// BT-9, attached to the first payment terms entry.
    pub fn due_date(mut self, date: NaiveDate) -> Self {
        match self.invoice.payment_terms.first_mut() {
            Some(terms) => terms.due_date = Some(date),
            None => self.invoice.payment_terms.push(PaymentTerms {
                due_date: Some(date),
                ..Default::default()
            }),
        }
        self
    }

    pub fn payment_reference(mut self, reference: impl Into<String>) -> Self {
        self.invoice.payment_reference = Some(reference.into());
        self
    }

    pub fn prepaid(mut self, amount: Decimal) -> Self {
        self.invoice.totals.prepaid = amount;
        self
    }

    /// Compute line totals, the VAT breakdown and the document totals.
    ///
    /// A line whose amount overflows keeps a zero total; validation then
    /// reports `CALC-OVERFLOW`.
    pub fn build(self) -> Invoice {
        let mut invoice = self.invoice;
        for line in &mut invoice.lines {
            if let Some(total) = line.computed_total() {
                line.total = total;
            }
        }
        invoice.update_applicable_trade_tax(&self.exemption_reasons);
        invoice.update_totals();
        invoice
    }
}

/// Builder for [`Party`].
pub struct PartyBuilder {
    party: Party,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            party: Party {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    pub fn address(mut self, address: PostalAddress) -> Self {
        self.party.postal_address = Some(address);
        self
    }

    pub fn vat_id(mut self, id: impl Into<String>) -> Self {
        self.party.vat_id = Some(id.into());
        self
    }

    pub fn tax_number(mut self, number: impl Into<String>) -> Self {
        self.party.tax_registration = Some(number.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.party.ids.push(id.into());
        self
    }

    pub fn global_id(mut self, scheme: impl Into<String>, value: impl Into<String>) -> Self {
        self.party.global_ids.push(SchemedId::new(scheme, value));
        self
    }

    pub fn registration_id(mut self, id: impl Into<String>) -> Self {
        self.party
            .legal_organization
            .get_or_insert_with(LegalOrganization::default)
            .id = Some(id.into());
        self
    }

    pub fn trading_name(mut self, name: impl Into<String>) -> Self {
        self.party
            .legal_organization
            .get_or_insert_with(LegalOrganization::default)
            .trading_name = Some(name.into());
        self
    }

    pub fn contact(
        mut self,
        person_name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
    ) -> Self {
        self.party.contacts.push(Contact {
            person_name,
            department: None,
            phone,
            email,
        });
        self
    }

    pub fn electronic_address(mut self, scheme: impl Into<String>, uri: impl Into<String>) -> Self {
        self.party.electronic_address = Some(ElectronicAddress {
            scheme: scheme.into(),
            uri: uri.into(),
        });
        self
    }

    pub fn build(self) -> Party {
        self.party
    }
}

/// Builder for [`PostalAddress`].
pub struct AddressBuilder {
    address: PostalAddress,
}

impl AddressBuilder {
    pub fn new(
        city: impl Into<String>,
        postcode: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            address: PostalAddress {
                city: Some(city.into()),
                postcode: Some(postcode.into()),
                country_code: country_code.into(),
                ..Default::default()
            },
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.address.line1 = Some(street.into());
        self
    }

    pub fn additional(mut self, additional: impl Into<String>) -> Self {
        self.address.line2 = Some(additional.into());
        self
    }

    pub fn subdivision(mut self, subdivision: impl Into<String>) -> Self {
        self.address.subdivision = Some(subdivision.into());
        self
    }

    pub fn build(self) -> PostalAddress {
        self.address
    }
}

/// Builder for [`InvoiceLine`]. The net amount is filled in by
/// [`InvoiceBuilder::build`].
pub struct LineBuilder {
    line: InvoiceLine,
}

impl LineBuilder {
    /// Standard rated (19 %) line.
    pub fn new(
        id: impl Into<String>,
        item_name: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        net_price: Decimal,
    ) -> Self {
        Self {
            line: InvoiceLine {
                id: id.into(),
                item: Item {
                    name: item_name.into(),
                    ..Default::default()
                },
                billed_quantity: quantity,
                unit_code: unit.into(),
                net_price,
                tax_type: "VAT".to_string(),
                tax_category: Some(TaxCategory::StandardRate),
                tax_rate: Some(Decimal::new(19, 0)),
                ..Default::default()
            },
        }
    }

    pub fn tax(mut self, category: TaxCategory, rate: Decimal) -> Self {
        self.line.tax_category = Some(category);
        self.line.tax_rate = Some(rate);
        self
    }

    /// Category without a rate (`O`, not subject to VAT).
    pub fn tax_category_only(mut self, category: TaxCategory) -> Self {
        self.line.tax_category = Some(category);
        self.line.tax_rate = None;
        self
    }

    pub fn gross_price(mut self, price: Decimal) -> Self {
        self.line.gross_price = Some(price);
        self
    }

    pub fn basis_quantity(mut self, quantity: Decimal) -> Self {
        self.line.basis_quantity = Some(quantity);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.line.note = Some(note.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.line.item.description = Some(desc.into());
        self
    }

    pub fn seller_item_id(mut self, id: impl Into<String>) -> Self {
        self.line.item.seller_id = Some(id.into());
        self
    }

    pub fn standard_item_id(mut self, scheme: impl Into<String>, id: impl Into<String>) -> Self {
        self.line.item.standard_id = Some(SchemedId::new(scheme, id));
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.line.item.attributes.push(ItemAttribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.line.period = Period::new(start, end);
        self
    }

    pub fn add_allowance(mut self, allowance: AllowanceCharge) -> Self {
        self.line.allowance_charges.push(AllowanceCharge {
            charge_indicator: false,
            ..allowance
        });
        self
    }

    pub fn add_charge(mut self, charge: AllowanceCharge) -> Self {
        self.line.allowance_charges.push(AllowanceCharge {
            charge_indicator: true,
            ..charge
        });
        self
    }

    pub fn build(self) -> InvoiceLine {
        self.line
    }
}
