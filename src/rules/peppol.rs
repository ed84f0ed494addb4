//! PEPPOL BIS Billing 3.0 rules.

rule_table! {
    PEPPOL_RULES;

    PEPPOL_R001 = "PEPPOL-EN16931-R001", ["BT-23"],
        "Business process MUST be provided.";
    PEPPOL_R002 = "PEPPOL-EN16931-R002", ["BT-22"],
        "No more than one note is allowed on document level, unless both the buyer and seller are German organizations.";
    PEPPOL_R003 = "PEPPOL-EN16931-R003", ["BT-10", "BT-13"],
        "A buyer reference or purchase order reference MUST be provided.";
    PEPPOL_R004 = "PEPPOL-EN16931-R004", ["BT-24"],
        "Specification identifier MUST have the value 'urn:cen.eu:en16931:2017#compliant#urn:fdc:peppol.eu:2017:poacc:billing:3.0'.";
    PEPPOL_R005 = "PEPPOL-EN16931-R005", ["BT-6"],
        "VAT accounting currency code MUST be different from invoice currency code when provided.";
    PEPPOL_R007 = "PEPPOL-EN16931-R007", ["BT-23"],
        "Business process MUST be in the format 'urn:fdc:peppol.eu:2017:poacc:billing:NN:1.0' where NN indicates the process number.";
    PEPPOL_R010 = "PEPPOL-EN16931-R010", ["BT-49"],
        "Buyer electronic address MUST be provided.";
    PEPPOL_R020 = "PEPPOL-EN16931-R020", ["BT-34"],
        "Seller electronic address MUST be provided.";
    PEPPOL_R040 = "PEPPOL-EN16931-R040", ["BT-92", "BT-93", "BT-94"],
        "Allowance/charge amount must equal base amount * percentage/100 if base amount and percentage exists.";
    PEPPOL_R041 = "PEPPOL-EN16931-R041", ["BT-93"],
        "Allowance/charge base amount MUST be provided when allowance/charge percentage is provided.";
    PEPPOL_R042 = "PEPPOL-EN16931-R042", ["BT-94"],
        "Allowance/charge percentage MUST be provided when allowance/charge base amount is provided.";
    PEPPOL_R044 = "PEPPOL-EN16931-R044", ["BT-147"],
        "Charge on price level is NOT allowed. Only value 'false' allowed.";
    PEPPOL_R046 = "PEPPOL-EN16931-R046", ["BT-146", "BT-147", "BT-148"],
        "Item net price MUST equal (Gross price - Allowance amount) when gross price is provided.";
    PEPPOL_R055 = "PEPPOL-EN16931-R055", ["BT-111", "BT-110"],
        "Invoice total VAT amount and Invoice total VAT amount in accounting currency MUST have same operational sign.";
    PEPPOL_R061 = "PEPPOL-EN16931-R061", ["BT-89"],
        "Mandate reference MUST be provided for direct debit.";
    PEPPOL_R110 = "PEPPOL-EN16931-R110", ["BT-134", "BT-73"],
        "Start date of line period MUST be within invoice period.";
    PEPPOL_R111 = "PEPPOL-EN16931-R111", ["BT-135", "BT-74"],
        "End date of line period MUST be within invoice period.";
    PEPPOL_R120 = "PEPPOL-EN16931-R120", ["BT-131"],
        "Invoice line net amount MUST equal (Invoiced quantity * (Item net price/item price base quantity) + Sum of invoice line charge amount - sum of invoice line allowance amount.";
    PEPPOL_R121 = "PEPPOL-EN16931-R121", ["BT-149"],
        "Base quantity MUST be a positive number above zero.";
    PEPPOL_R130 = "PEPPOL-EN16931-R130", ["BT-132", "BT-13"],
        "Unless the invoice has a purchase order reference (BT-13), an order line reference (BT-132) MUST NOT be provided.";
}
