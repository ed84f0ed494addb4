use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::SemanticError;
use super::profile::Profile;

/// BG-0: Invoice: the aggregate root.
///
/// Every contained entity is owned by value. Optional scalars are `Option`,
/// amounts that EN 16931 treats as mandatory are plain [`Decimal`]s whose
/// presence in the source document is tracked separately in [`Presence`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Profile derived from BT-24.
    pub profile: Profile,
    /// BT-23: Business process type.
    pub business_process: Option<String>,
    /// BT-24: Specification identifier, verbatim.
    pub specification_id: String,

    /// BT-1: Invoice number.
    pub number: String,
    /// BT-2: Issue date.
    pub issue_date: Option<NaiveDate>,
    /// BT-3: Invoice type code (UNTDID 1001).
    pub type_code: InvoiceTypeCode,
    /// BT-5: Invoice currency code (ISO 4217).
    pub currency: String,
    /// BT-6: VAT accounting currency code.
    pub tax_currency: Option<String>,
    /// BG-1: Invoice notes.
    pub notes: Vec<Note>,
    /// BT-10: Buyer reference (Leitweg-ID for XRechnung).
    pub buyer_reference: Option<String>,
    /// BT-19: Buyer accounting reference.
    pub buyer_accounting_reference: Option<String>,

    /// BG-4: Seller.
    pub seller: Party,
    /// BG-7: Buyer.
    pub buyer: Party,
    /// BG-10: Payee.
    pub payee: Option<Party>,
    /// BG-11: Seller tax representative.
    pub tax_representative: Option<Party>,
    /// BG-13/BG-15: Deliver-to party.
    pub ship_to: Option<Party>,

    /// BT-11: Project reference.
    pub project: Option<ProjectReference>,
    /// BT-12: Contract reference.
    pub contract_reference: Option<String>,
    /// BT-13: Purchase order reference.
    pub purchase_order_reference: Option<String>,
    /// BT-14: Sales order reference.
    pub sales_order_reference: Option<String>,
    /// BT-15: Receiving advice reference.
    pub receiving_advice_reference: Option<String>,
    /// BT-16: Despatch advice reference.
    pub despatch_advice_reference: Option<String>,
    /// BG-3: Preceding invoice references.
    pub preceding_invoices: Vec<PrecedingInvoice>,
    /// BG-24: Additional supporting documents.
    pub supporting_documents: Vec<SupportingDocument>,

    /// BT-72: Actual delivery date.
    pub delivery_date: Option<NaiveDate>,
    /// BG-14: Invoicing period.
    pub billing_period: Period,

    /// BG-20/BG-21: Document level allowances and charges.
    pub allowance_charges: Vec<AllowanceCharge>,
    /// BG-23: VAT breakdown.
    pub trade_taxes: Vec<TradeTax>,
    /// BG-22: Document totals.
    pub totals: MonetarySummation,

    /// BG-16: Payment instructions.
    pub payment_means: Vec<PaymentMeans>,
    /// BT-20/BT-9/BT-89: Payment terms.
    pub payment_terms: Vec<PaymentTerms>,
    /// BT-83: Remittance information.
    pub payment_reference: Option<String>,
    /// BT-90: Bank assigned creditor identifier.
    pub creditor_reference_id: Option<String>,

    /// BG-25: Invoice lines, in source order.
    pub lines: Vec<InvoiceLine>,

    /// Source-presence flags for groups whose absence is observable by a rule.
    pub presence: Presence,
    /// Tax total currencies that matched neither BT-5 nor BT-6.
    pub unexpected_tax_currencies: Vec<String>,

    /// Result of the last [`Invoice::validate`] run.
    #[serde(skip)]
    pub violations: Vec<SemanticError>,
}

/// Flags that record whether an element existed in the parsed document,
/// independent of its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    /// Document level `BillingSpecifiedPeriod` / `cac:InvoicePeriod`.
    pub billing_period: bool,
    /// BT-106.
    pub line_total: bool,
    /// BT-109.
    pub tax_basis_total: bool,
    /// BT-112.
    pub grand_total: bool,
    /// BT-115.
    pub due_payable: bool,
    /// BT-111.
    pub tax_total_accounting: bool,
}

/// UNTDID 1001 document type code. `0` means "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceTypeCode(pub u16);

impl InvoiceTypeCode {
    /// 326: Partial invoice.
    pub const PARTIAL: Self = Self(326);
    /// 380: Commercial invoice.
    pub const COMMERCIAL: Self = Self(380);
    /// 381: Credit note.
    pub const CREDIT_NOTE: Self = Self(381);
    /// 384: Corrected invoice.
    pub const CORRECTED: Self = Self(384);
    /// 386: Prepayment invoice.
    pub const PREPAYMENT: Self = Self(386);
    /// 389: Self-billed invoice.
    pub const SELF_BILLED: Self = Self(389);

    pub fn code(&self) -> u16 {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0 != 0
    }

    /// Human-readable UNTDID 1001 name, if the code is known.
    pub fn name(&self) -> Option<&'static str> {
        super::codes::document_type_name(self.0)
    }
}

impl std::fmt::Display for InvoiceTypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// BG-1: Invoice note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// BT-22: Note text.
    pub text: String,
    /// BT-21: Subject code (UNCL 4451).
    pub subject_code: Option<String>,
}

/// BG-4 / BG-7 / BG-10 / BG-11 / BG-13: a trade party.
///
/// One record is used for every position; which fields a position may carry
/// is decided by the writer and validator, not by the type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// BT-27 / BT-44 / BT-59 / BT-62 / BT-70: Name.
    pub name: String,
    /// BT-29 / BT-46 / BT-60 / BT-71: Identifiers without scheme.
    pub ids: Vec<String>,
    /// BT-29 / BT-46 / BT-60 / BT-71: Identifiers with scheme (`GlobalID`).
    pub global_ids: Vec<SchemedId>,
    /// BT-30 / BT-47 / BT-61: Legal registration.
    pub legal_organization: Option<LegalOrganization>,
    /// BT-33: Additional legal information.
    pub description: Option<String>,
    /// BT-31 / BT-48 / BT-63: VAT identifier.
    pub vat_id: Option<String>,
    /// BT-32: Tax registration identifier (`FC`).
    pub tax_registration: Option<String>,
    /// BT-34 / BT-49: Electronic address.
    pub electronic_address: Option<ElectronicAddress>,
    /// BG-5 / BG-8 / BG-12 / BG-15: Postal address.
    pub postal_address: Option<PostalAddress>,
    /// BG-6 / BG-9: Contacts.
    pub contacts: Vec<Contact>,
}

impl Party {
    /// Country code of the postal address, or `""`.
    pub fn country_code(&self) -> &str {
        self.postal_address
            .as_ref()
            .map(|a| a.country_code.as_str())
            .unwrap_or("")
    }
}

/// An identifier with an optional scheme (ISO 6523 ICD, EAS, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemedId {
    pub scheme: Option<String>,
    pub value: String,
}

impl SchemedId {
    pub fn new(scheme: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            scheme: Some(scheme.into()),
            value: value.into(),
        }
    }
}

/// Legal organization block of a party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalOrganization {
    /// BT-30 / BT-47 / BT-61: Legal registration identifier.
    pub id: Option<String>,
    /// Scheme of the registration identifier.
    pub scheme: Option<String>,
    /// BT-28 / BT-45: Trading name.
    pub trading_name: Option<String>,
}

/// BT-34 / BT-49: Electronic address with scheme identifier (EAS).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicAddress {
    pub scheme: String,
    pub uri: String,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    /// BT-35 / BT-50 / BT-64 / BT-75: Address line 1.
    pub line1: Option<String>,
    /// BT-36 / BT-51 / BT-65 / BT-76: Address line 2.
    pub line2: Option<String>,
    /// BT-162 / BT-163 / BT-164 / BT-165: Address line 3.
    pub line3: Option<String>,
    /// BT-37 / BT-52 / BT-66 / BT-77: City.
    pub city: Option<String>,
    /// BT-38 / BT-53 / BT-67 / BT-78: Post code.
    pub postcode: Option<String>,
    /// BT-39 / BT-54 / BT-68 / BT-79: Country subdivision.
    pub subdivision: Option<String>,
    /// BT-40 / BT-55 / BT-69 / BT-80: Country code (ISO 3166-1 alpha-2).
    pub country_code: String,
}

/// BG-6 / BG-9: Contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// BT-41 / BT-56: Contact point.
    pub person_name: Option<String>,
    pub department: Option<String>,
    /// BT-42 / BT-57: Telephone.
    pub phone: Option<String>,
    /// BT-43 / BT-58: Email.
    pub email: Option<String>,
}

/// BT-11: Project reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReference {
    pub id: String,
    pub name: Option<String>,
}

/// BG-3: Preceding invoice reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecedingInvoice {
    /// BT-25.
    pub number: String,
    /// BT-26.
    pub issue_date: Option<NaiveDate>,
}

/// BG-24: Additional supporting document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportingDocument {
    /// BT-122: Supporting document reference.
    pub id: String,
    /// Document type code (`916` for supporting documents, `50`, `130`).
    pub type_code: Option<String>,
    /// BT-123: Description.
    pub description: Option<String>,
    /// BT-124: External document location.
    pub uri: Option<String>,
    /// BT-125: Attached document.
    pub attachment: Option<Attachment>,
}

/// BT-125 with its mime code and filename attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub data: Vec<u8>,
    pub mime_code: String,
    pub filename: String,
}

/// A start/end pair. Either side may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// UNCL 5305: VAT category codes used by EN 16931.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxCategory {
    /// S: Standard rate.
    StandardRate,
    /// Z: Zero rated goods.
    ZeroRated,
    /// E: Exempt from tax.
    Exempt,
    /// AE: VAT reverse charge.
    ReverseCharge,
    /// K: VAT exempt for EEA intra-community supply.
    IntraCommunitySupply,
    /// G: Free export item, tax not charged.
    Export,
    /// O: Services outside scope of tax.
    NotSubjectToVat,
    /// L: Canary Islands general indirect tax (IGIC).
    Igic,
    /// M: Tax for production, services and importation in Ceuta and Melilla (IPSI).
    Ipsi,
    /// Any other code found in a document.
    Other(String),
}

impl TaxCategory {
    /// UNCL 5305 code letter.
    pub fn code(&self) -> &str {
        match self {
            Self::StandardRate => "S",
            Self::ZeroRated => "Z",
            Self::Exempt => "E",
            Self::ReverseCharge => "AE",
            Self::IntraCommunitySupply => "K",
            Self::Export => "G",
            Self::NotSubjectToVat => "O",
            Self::Igic => "L",
            Self::Ipsi => "M",
            Self::Other(code) => code,
        }
    }

    /// Parse from a UNCL 5305 code string. Unknown codes are kept verbatim.
    pub fn from_code(code: &str) -> Self {
        match code {
            "S" => Self::StandardRate,
            "Z" => Self::ZeroRated,
            "E" => Self::Exempt,
            "AE" => Self::ReverseCharge,
            "K" => Self::IntraCommunitySupply,
            "G" => Self::Export,
            "O" => Self::NotSubjectToVat,
            "L" => Self::Igic,
            "M" => Self::Ipsi,
            other => Self::Other(other.to_string()),
        }
    }

    /// Descriptive name as used in rule texts.
    pub fn name(&self) -> &str {
        match self {
            Self::StandardRate => "Standard rated",
            Self::ZeroRated => "Zero rated",
            Self::Exempt => "Exempt from VAT",
            Self::ReverseCharge => "Reverse charge",
            Self::IntraCommunitySupply => "Intra-community supply",
            Self::Export => "Export outside the EU",
            Self::NotSubjectToVat => "Not subject to VAT",
            Self::Igic => "IGIC",
            Self::Ipsi => "IPSI",
            Self::Other(code) => code,
        }
    }
}

impl std::fmt::Display for TaxCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// BG-20 / BG-21 / BG-27 / BG-28 and price discounts (BT-147).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceCharge {
    /// `true` = charge, `false` = allowance.
    pub charge_indicator: bool,
    /// BT-93 / BT-100 / BT-137 / BT-142: Base amount.
    pub basis_amount: Option<Decimal>,
    /// BT-92 / BT-99 / BT-136 / BT-141: Amount.
    pub actual_amount: Decimal,
    /// BT-94 / BT-101 / BT-138 / BT-143: Percentage.
    pub calculation_percent: Option<Decimal>,
    /// BT-98 / BT-105 / BT-140 / BT-145: Reason code (UNTDID 5189 / 7161).
    pub reason_code: Option<String>,
    /// BT-97 / BT-104 / BT-139 / BT-144: Reason.
    pub reason: Option<String>,
    /// BT-95 / BT-102: VAT category (document level only).
    pub tax_category: Option<TaxCategory>,
    /// Tax type code, normally `VAT`.
    pub tax_type: Option<String>,
    /// BT-96 / BT-103: VAT rate (document level only).
    pub tax_rate: Option<Decimal>,
}

/// BG-23: VAT breakdown entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeTax {
    /// Tax type code, normally `VAT`.
    pub type_code: String,
    /// BT-118: VAT category code.
    pub category: Option<TaxCategory>,
    /// BT-119: VAT category rate.
    pub rate: Option<Decimal>,
    /// BT-116: VAT category taxable amount.
    pub basis_amount: Decimal,
    /// BT-117: VAT category tax amount.
    pub calculated_amount: Decimal,
    /// BT-120: Exemption reason text.
    pub exemption_reason: Option<String>,
    /// BT-121: Exemption reason code (VATEX).
    pub exemption_reason_code: Option<String>,
    /// BT-7: Tax point date.
    pub tax_point_date: Option<NaiveDate>,
    /// BT-8: Tax point date code (UNTDID 2005).
    pub due_date_type_code: Option<String>,
}

/// BG-22: Document totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetarySummation {
    /// BT-106: Sum of invoice line net amounts.
    pub line_total: Decimal,
    /// BT-107: Sum of allowances on document level.
    pub allowance_total: Decimal,
    /// BT-108: Sum of charges on document level.
    pub charge_total: Decimal,
    /// BT-109: Invoice total amount without VAT.
    pub tax_basis_total: Decimal,
    /// BT-110: Invoice total VAT amount.
    pub tax_total: Decimal,
    /// BT-111: Invoice total VAT amount in accounting currency.
    pub tax_total_accounting: Decimal,
    /// BT-112: Invoice total amount with VAT.
    pub grand_total: Decimal,
    /// BT-113: Paid amount.
    pub prepaid: Decimal,
    /// BT-114: Rounding amount.
    pub rounding: Decimal,
    /// BT-115: Amount due for payment.
    pub due_payable: Decimal,
}

/// BG-16: Payment instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMeans {
    /// BT-81: Payment means type code (UNTDID 4461).
    pub type_code: Option<PaymentMeansCode>,
    /// BT-82: Payment means text.
    pub information: Option<String>,
    /// BG-17: Credit transfer.
    pub payee_account: Option<FinancialAccount>,
    /// BG-18: Payment card.
    pub card: Option<PaymentCard>,
    /// BG-19: Direct debit.
    pub direct_debit: Option<DirectDebit>,
}

/// Common UNTDID 4461 payment means codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMeansCode {
    /// 1: Instrument not defined.
    NotDefined,
    /// 10: In cash.
    Cash,
    /// 20: Cheque.
    Cheque,
    /// 30: Credit transfer.
    CreditTransfer,
    /// 42: Payment to bank account.
    PaymentToBankAccount,
    /// 48: Bank card.
    BankCard,
    /// 49: Direct debit.
    DirectDebit,
    /// 54: Credit card.
    CreditCard,
    /// 55: Debit card.
    DebitCard,
    /// 57: Standing agreement.
    StandingAgreement,
    /// 58: SEPA credit transfer.
    SepaCreditTransfer,
    /// 59: SEPA direct debit.
    SepaDirectDebit,
    /// 97: Clearing between partners.
    Clearing,
    /// Other code value.
    Other(u16),
}

impl PaymentMeansCode {
    pub fn code(&self) -> u16 {
        match self {
            Self::NotDefined => 1,
            Self::Cash => 10,
            Self::Cheque => 20,
            Self::CreditTransfer => 30,
            Self::PaymentToBankAccount => 42,
            Self::BankCard => 48,
            Self::DirectDebit => 49,
            Self::CreditCard => 54,
            Self::DebitCard => 55,
            Self::StandingAgreement => 57,
            Self::SepaCreditTransfer => 58,
            Self::SepaDirectDebit => 59,
            Self::Clearing => 97,
            Self::Other(c) => *c,
        }
    }

    /// Parse from UNTDID 4461 numeric code.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::NotDefined,
            10 => Self::Cash,
            20 => Self::Cheque,
            30 => Self::CreditTransfer,
            42 => Self::PaymentToBankAccount,
            48 => Self::BankCard,
            49 => Self::DirectDebit,
            54 => Self::CreditCard,
            55 => Self::DebitCard,
            57 => Self::StandingAgreement,
            58 => Self::SepaCreditTransfer,
            59 => Self::SepaDirectDebit,
            97 => Self::Clearing,
            c => Self::Other(c),
        }
    }
}

/// BG-17: Credit transfer account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialAccount {
    /// BT-84: IBAN.
    pub iban: Option<String>,
    /// BT-84: Proprietary account identifier.
    pub proprietary_id: Option<String>,
    /// BT-85: Account name.
    pub name: Option<String>,
    /// BT-86: Service provider identifier (BIC).
    pub bic: Option<String>,
}

impl FinancialAccount {
    /// The BT-84 value, IBAN preferred.
    pub fn account_id(&self) -> Option<&str> {
        self.iban
            .as_deref()
            .or(self.proprietary_id.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// BG-18: Payment card information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCard {
    /// BT-87: Primary account number.
    pub pan: String,
    /// BT-88: Card holder name.
    pub holder: Option<String>,
}

/// BG-19: Direct debit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectDebit {
    /// BT-91: Debited account identifier.
    pub debited_account: Option<String>,
    /// BT-89: Mandate reference identifier.
    pub mandate_id: Option<String>,
}

/// BT-20 / BT-9 / BT-89: Payment terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerms {
    /// BT-20: Payment terms.
    pub description: Option<String>,
    /// BT-9: Payment due date.
    pub due_date: Option<NaiveDate>,
    /// BT-89: Mandate reference identifier.
    pub direct_debit_mandate_id: Option<String>,
}

/// BG-25: Invoice line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// BT-126: Line identifier.
    pub id: String,
    /// BT-127: Line note.
    pub note: Option<String>,
    /// BG-31: Item information.
    pub item: Item,
    /// BT-132: Referenced purchase order line.
    pub order_line_reference: Option<String>,
    /// BT-133: Buyer accounting reference.
    pub accounting_reference: Option<String>,
    /// BT-129: Invoiced quantity.
    pub billed_quantity: Decimal,
    /// BT-130: Unit of measure (UNECE Rec 20/21).
    pub unit_code: String,
    /// BT-146: Item net price.
    pub net_price: Decimal,
    /// BT-148: Item gross price.
    pub gross_price: Option<Decimal>,
    /// BT-149: Item price base quantity.
    pub basis_quantity: Option<Decimal>,
    /// BT-147: Price discounts applied to the gross price.
    pub price_allowance_charges: Vec<AllowanceCharge>,
    /// BG-27 / BG-28: Line allowances and charges.
    pub allowance_charges: Vec<AllowanceCharge>,
    /// Tax type code, normally `VAT`.
    pub tax_type: String,
    /// BT-151: Invoiced item VAT category code.
    pub tax_category: Option<TaxCategory>,
    /// BT-152: Invoiced item VAT rate.
    pub tax_rate: Option<Decimal>,
    /// BT-131: Invoice line net amount.
    pub total: Decimal,
    /// BG-26: Line period.
    pub period: Period,
    /// Whether the line `BillingSpecifiedPeriod` / `cac:InvoicePeriod` existed in the source.
    pub period_present: bool,
}

/// BG-31: Item information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// BT-153: Item name.
    pub name: String,
    /// BT-154: Item description.
    pub description: Option<String>,
    /// BT-155: Seller's item identifier.
    pub seller_id: Option<String>,
    /// BT-156: Buyer's item identifier.
    pub buyer_id: Option<String>,
    /// BT-157: Standard item identifier with scheme.
    pub standard_id: Option<SchemedId>,
    /// BT-159: Country of origin.
    pub origin_country: Option<String>,
    /// BT-158: Classification identifiers.
    pub classifications: Vec<Classification>,
    /// BG-32: Item attributes.
    pub attributes: Vec<ItemAttribute>,
}

/// BT-158 with list id and version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub code: String,
    pub list_id: Option<String>,
    pub list_version: Option<String>,
}

/// BG-32: Item attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttribute {
    /// BT-160.
    pub name: String,
    /// BT-161.
    pub value: String,
}

/// `true` for `None`, empty and whitespace-only strings.
pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|s| s.trim().is_empty())
}
