//! EN 16931-1 business rules.

use super::Rule;

rule_table! {
    EN16931_RULES;

    BR_1 = "BR-1", ["BT-24"],
        "An Invoice shall have a Specification identifier (BT-24).";
    BR_2 = "BR-2", ["BT-1"],
        "An Invoice shall have an Invoice number (BT-1).";
    BR_3 = "BR-3", ["BT-2"],
        "An Invoice shall have an Invoice issue date (BT-2).";
    BR_4 = "BR-4", ["BT-3"],
        "An Invoice shall have an Invoice type code (BT-3).";
    BR_5 = "BR-5", ["BT-5"],
        "An Invoice shall have an Invoice currency code (BT-5).";
    BR_6 = "BR-6", ["BT-27"],
        "An Invoice shall contain the Seller name (BT-27).";
    BR_7 = "BR-7", ["BT-44"],
        "An Invoice shall contain the Buyer name (BT-44).";
    BR_8 = "BR-8", ["BG-5"],
        "An Invoice shall contain the Seller postal address (BG-5).";
    BR_9 = "BR-9", ["BT-40"],
        "The Seller postal address (BG-5) shall contain a Seller country code (BT-40).";
    BR_10 = "BR-10", ["BG-8"],
        "An Invoice shall contain the Buyer postal address (BG-8).";
    BR_11 = "BR-11", ["BT-55", "BG-8"],
        "The Buyer postal address shall contain a Buyer country code (BT-55).";
    BR_12 = "BR-12", ["BT-106"],
        "An Invoice shall have the Sum of Invoice line net amount (BT-106).";
    BR_13 = "BR-13", ["BT-109"],
        "An Invoice shall have the Invoice total amount without VAT (BT-109).";
    BR_14 = "BR-14", ["BT-112"],
        "An Invoice shall have the Invoice total amount with VAT (BT-112).";
    BR_15 = "BR-15", ["BT-115"],
        "An Invoice shall have the Amount due for payment (BT-115).";
    BR_16 = "BR-16", ["BG-25"],
        "An Invoice shall have at least one Invoice line (BG-25).";
    BR_17 = "BR-17", ["BT-59", "BG-10"],
        "The Payee name (BT-59) shall be provided in the Invoice, if the Payee (BG-10) is different from the Seller (BG-4).";
    BR_18 = "BR-18", ["BT-62", "BG-11"],
        "The Seller tax representative name (BT-62) shall be provided in the Invoice, if the Seller (BG-4) has a Seller tax representative party (BG-11).";
    BR_19 = "BR-19", ["BG-12", "BG-11"],
        "The Seller tax representative postal address (BG-12) shall be provided in the Invoice, if the Seller (BG-4) has a Seller tax representative party (BG-11).";
    BR_20 = "BR-20", ["BT-69", "BG-12"],
        "The Seller tax representative postal address (BG-12) shall contain a Tax representative country code (BT-69), if the Seller (BG-4) has a Seller tax representative party (BG-11).";
    BR_21 = "BR-21", ["BT-126"],
        "Each Invoice line (BG-25) shall have an Invoice line identifier (BT-126).";
    BR_22 = "BR-22", ["BT-129"],
        "Each Invoice line (BG-25) shall have an Invoiced quantity (BT-129).";
    BR_23 = "BR-23", ["BT-130"],
        "An Invoice line (BG-25) shall have an Invoiced quantity unit of measure code (BT-130).";
    BR_24 = "BR-24", ["BT-131"],
        "Each Invoice line (BG-25) shall have an Invoice line net amount (BT-131).";
    BR_25 = "BR-25", ["BT-153"],
        "Each Invoice line (BG-25) shall contain the Item name (BT-153).";
    BR_26 = "BR-26", ["BT-146"],
        "Each Invoice line (BG-25) shall contain the Item net price (BT-146).";
    BR_27 = "BR-27", ["BT-146"],
        "The Item net price (BT-146) shall NOT be negative.";
    BR_28 = "BR-28", ["BT-148"],
        "The Item gross price (BT-148) shall NOT be negative.";
    BR_29 = "BR-29", ["BT-73", "BT-74"],
        "If both Invoicing period start date (BT-73) and Invoicing period end date (BT-74) are given then the Invoicing period end date (BT-74) shall be later or equal to the Invoicing period start date (BT-73).";
    BR_30 = "BR-30", ["BT-134", "BT-135"],
        "If both Invoice line period start date (BT-134) and Invoice line period end date (BT-135) are given then the Invoice line period end date (BT-135) shall be later or equal to the Invoice line period start date (BT-134).";
    BR_31 = "BR-31", ["BT-92"],
        "Each Document level allowance (BG-20) shall have a Document level allowance amount (BT-92).";
    BR_32 = "BR-32", ["BT-95"],
        "Each Document level allowance (BG-20) shall have a Document level allowance VAT category code (BT-95).";
    BR_33 = "BR-33", ["BT-97", "BT-98"],
        "Each Document level allowance (BG-20) shall have a Document level allowance reason (BT-97) or a Document level allowance reason code (BT-98).";
    BR_36 = "BR-36", ["BT-99"],
        "Each Document level charge (BG-21) shall have a Document level charge amount (BT-99).";
    BR_37 = "BR-37", ["BT-102"],
        "Each Document level charge (BG-21) shall have a Document level charge VAT category code (BT-102).";
    BR_38 = "BR-38", ["BT-104", "BT-105"],
        "Each Document level charge (BG-21) shall have a Document level charge reason (BT-104) or a Document level charge reason code (BT-105).";
    BR_41 = "BR-41", ["BT-136"],
        "Each Invoice line allowance (BG-27) shall have an Invoice line allowance amount (BT-136).";
    BR_42 = "BR-42", ["BT-139", "BT-140"],
        "Each Invoice line allowance (BG-27) shall have an Invoice line allowance reason (BT-139) or an Invoice line allowance reason code (BT-140).";
    BR_43 = "BR-43", ["BT-141"],
        "Each Invoice line charge (BG-28) shall have an Invoice line charge amount (BT-141).";
    BR_44 = "BR-44", ["BT-144", "BT-145"],
        "Each Invoice line charge shall have an Invoice line charge reason or an Invoice line charge reason code.";
    BR_45 = "BR-45", ["BT-116"],
        "Each VAT breakdown (BG-23) shall have a VAT category taxable amount (BT-116).";
    BR_46 = "BR-46", ["BT-117"],
        "Each VAT breakdown (BG-23) shall have a VAT category tax amount (BT-117).";
    BR_47 = "BR-47", ["BT-118"],
        "Each VAT breakdown (BG-23) shall be defined through a VAT category code (BT-118).";
    BR_48 = "BR-48", ["BT-119"],
        "Each VAT breakdown (BG-23) shall have a VAT category rate (BT-119), except if the Invoice is not subject to VAT.";
    BR_49 = "BR-49", ["BT-81"],
        "A Payment instruction (BG-16) shall specify the Payment means type code (BT-81).";
    BR_50 = "BR-50", ["BT-84"],
        "A Payment account identifier (BT-84) shall be present if Credit transfer (BG-17) information is provided in the Invoice.";
    BR_51 = "BR-51", ["BT-87"],
        "In accordance with card payments security standards an invoice should never include a full card primary account number (BT-87). At the moment PCI Security Standards Council has defined that the first 6 digits and last 4 digits are the maximum number of digits to be shown.";
    BR_52 = "BR-52", ["BT-122"],
        "Each Additional supporting document (BG-24) shall contain a Supporting document reference (BT-122).";
    BR_53 = "BR-53", ["BT-111", "BT-6"],
        "If the VAT accounting currency code (BT-6) is present, then the Invoice total VAT amount in accounting currency (BT-111) shall be provided.";
    BR_54 = "BR-54", ["BT-160", "BT-161"],
        "Each Item attribute (BG-32) shall contain an Item attribute name (BT-160) and an Item attribute value (BT-161).";
    BR_55 = "BR-55", ["BT-25"],
        "Each Preceding Invoice reference (BG-3) shall contain a Preceding Invoice reference (BT-25).";
    BR_56 = "BR-56", ["BT-63", "BG-11"],
        "Each Seller tax representative party (BG-11) shall have a Seller tax representative VAT identifier (BT-63).";
    BR_57 = "BR-57", ["BT-80", "BG-15"],
        "Each Deliver to address (BG-15) shall contain a Deliver to country code (BT-80).";
    BR_61 = "BR-61", ["BT-84", "BT-81"],
        "If the Payment means type code (BT-81) means SEPA credit transfer, Local credit transfer or Non-SEPA international credit transfer, the Payment account identifier (BT-84) shall be present.";
    BR_62 = "BR-62", ["BT-34"],
        "The Seller electronic address (BT-34) shall have a Scheme identifier.";
    BR_63 = "BR-63", ["BT-49"],
        "The Buyer electronic address (BT-49) shall have a Scheme identifier.";
    BR_64 = "BR-64", ["BT-157"],
        "The Item standard identifier (BT-157) shall have a Scheme identifier.";
    BR_65 = "BR-65", ["BT-158"],
        "The Item classification identifier (BT-158) shall have a Scheme identifier.";

    BR_CO_03 = "BR-CO-03", ["BT-7", "BT-8"],
        "Value added tax point date (BT-7) and Value added tax point date code (BT-8) are mutually exclusive.";
    BR_CO_04 = "BR-CO-04", ["BT-151"],
        "Each Invoice line (BG-25) shall be categorized with an Invoiced item VAT category code (BT-151).";
    BR_CO_05 = "BR-CO-05", ["BT-97", "BT-98"],
        "Document level allowance reason code (BT-98) and Document level allowance reason (BT-97) shall indicate the same type of allowance.";
    BR_CO_06 = "BR-CO-06", ["BT-104", "BT-105"],
        "Document level charge reason code (BT-105) and Document level charge reason (BT-104) shall indicate the same type of charge.";
    BR_CO_07 = "BR-CO-07", ["BT-139", "BT-140"],
        "Invoice line allowance reason code (BT-140) and Invoice line allowance reason (BT-139) shall indicate the same type of allowance reason.";
    BR_CO_08 = "BR-CO-08", ["BT-144", "BT-145"],
        "Invoice line charge reason code (BT-145) and Invoice line charge reason (BT-144) shall indicate the same type of charge reason.";
    BR_CO_09 = "BR-CO-09", ["BT-31", "BT-48", "BT-63"],
        "The Seller VAT identifier (BT-31), the Seller tax representative VAT identifier (BT-63) and the Buyer VAT identifier (BT-48) shall have a prefix in accordance with ISO code ISO 3166-1 alpha-2 by which the country of issue may be identified. Nevertheless, Greece may use the prefix 'EL'.";
    BR_CO_10 = "BR-CO-10", ["BT-106", "BT-131"],
        "Sum of Invoice line net amount (BT-106) = Σ Invoice line net amount (BT-131).";
    BR_CO_11 = "BR-CO-11", ["BT-107", "BT-92"],
        "Sum of allowances on document level (BT-107) = Σ Document level allowance amount (BT-92).";
    BR_CO_12 = "BR-CO-12", ["BT-108", "BT-99"],
        "Sum of charges on document level (BT-108) = Σ Document level charge amount (BT-99).";
    BR_CO_13 = "BR-CO-13", ["BT-109", "BT-106", "BT-107", "BT-108"],
        "Invoice total amount without VAT (BT-109) = Σ Invoice line net amount (BT-131) - Sum of allowances on document level (BT-107) + Sum of charges on document level (BT-108).";
    BR_CO_14 = "BR-CO-14", ["BT-110", "BT-117"],
        "Invoice total VAT amount (BT-110) = Σ VAT category tax amount (BT-117).";
    BR_CO_15 = "BR-CO-15", ["BT-112", "BT-109", "BT-110"],
        "Invoice total amount with VAT (BT-112) = Invoice total amount without VAT (BT-109) + Invoice total VAT amount (BT-110).";
    BR_CO_16 = "BR-CO-16", ["BT-115", "BT-112", "BT-113", "BT-114"],
        "Amount due for payment (BT-115) = Invoice total amount with VAT (BT-112) - Paid amount (BT-113) + Rounding amount (BT-114).";
    BR_CO_17 = "BR-CO-17", ["BT-117", "BT-116", "BT-119"],
        "VAT category tax amount (BT-117) = VAT category taxable amount (BT-116) x (VAT category rate (BT-119) / 100), rounded to two decimals.";
    BR_CO_18 = "BR-CO-18", ["BG-23"],
        "An Invoice shall at least have one VAT breakdown group (BG-23).";
    BR_CO_19 = "BR-CO-19", ["BG-14", "BT-73", "BT-74"],
        "If Invoicing period (BG-14) is used, the Invoicing period start date (BT-73) or the Invoicing period end date (BT-74) shall be filled, or both.";
    BR_CO_20 = "BR-CO-20", ["BG-26", "BT-134", "BT-135"],
        "If Invoice line period (BG-26) is used, the Invoice line period start date (BT-134) or the Invoice line period end date (BT-135) shall be filled, or both.";
    BR_CO_21 = "BR-CO-21", ["BT-97", "BT-98"],
        "Each Document level allowance (BG-20) shall contain a Document level allowance reason (BT-97) or a Document level allowance reason code (BT-98), or both.";
    BR_CO_22 = "BR-CO-22", ["BT-104", "BT-105"],
        "Each Document level charge (BG-21) shall contain a Document level charge reason (BT-104) or a Document level charge reason code (BT-105), or both.";
    BR_CO_23 = "BR-CO-23", ["BT-139", "BT-140"],
        "Each Invoice line allowance (BG-27) shall contain an Invoice line allowance reason (BT-139) or an Invoice line allowance reason code (BT-140), or both.";
    BR_CO_24 = "BR-CO-24", ["BT-144", "BT-145"],
        "Each Invoice line charge (BG-28) shall contain an Invoice line charge reason (BT-144) or an Invoice line charge reason code (BT-145), or both.";
    BR_CO_25 = "BR-CO-25", ["BT-9", "BT-20", "BT-115"],
        "In case the Amount due for payment (BT-115) is positive, either the Payment due date (BT-9) or the Payment terms (BT-20) shall be present.";
    BR_CO_26 = "BR-CO-26", ["BT-29", "BT-30", "BT-31"],
        "In order for the buyer to automatically identify a supplier, the Seller identifier (BT-29), the Seller legal registration identifier (BT-30) and/or the Seller VAT identifier (BT-31) shall be present.";

    BR_DEC_01 = "BR-DEC-01", ["BT-92"],
        "The allowed maximum number of decimals for the Document level allowance amount (BT-92) is 2.";
    BR_DEC_02 = "BR-DEC-02", ["BT-93"],
        "The allowed maximum number of decimals for the Document level allowance base amount (BT-93) is 2.";
    BR_DEC_05 = "BR-DEC-05", ["BT-99"],
        "The allowed maximum number of decimals for the Document level charge amount (BT-99) is 2.";
    BR_DEC_06 = "BR-DEC-06", ["BT-100"],
        "The allowed maximum number of decimals for the Document level charge base amount (BT-100) is 2.";
    BR_DEC_09 = "BR-DEC-09", ["BT-106"],
        "The allowed maximum number of decimals for the Sum of Invoice line net amount (BT-106) is 2.";
    BR_DEC_10 = "BR-DEC-10", ["BT-107"],
        "The allowed maximum number of decimals for the Sum of allowances on document level (BT-107) is 2.";
    BR_DEC_11 = "BR-DEC-11", ["BT-108"],
        "The allowed maximum number of decimals for the Sum of charges on document level (BT-108) is 2.";
    BR_DEC_12 = "BR-DEC-12", ["BT-109"],
        "The allowed maximum number of decimals for the Invoice total amount without VAT (BT-109) is 2.";
    BR_DEC_13 = "BR-DEC-13", ["BT-110"],
        "The allowed maximum number of decimals for the Invoice total VAT amount (BT-110) is 2.";
    BR_DEC_14 = "BR-DEC-14", ["BT-112"],
        "The allowed maximum number of decimals for the Invoice total amount with VAT (BT-112) is 2.";
    BR_DEC_15 = "BR-DEC-15", ["BT-111"],
        "The allowed maximum number of decimals for the Invoice total VAT amount in accounting currency (BT-111) is 2.";
    BR_DEC_16 = "BR-DEC-16", ["BT-113"],
        "The allowed maximum number of decimals for the Paid amount (BT-113) is 2.";
    BR_DEC_17 = "BR-DEC-17", ["BT-114"],
        "The allowed maximum number of decimals for the Rounding amount (BT-114) is 2.";
    BR_DEC_18 = "BR-DEC-18", ["BT-115"],
        "The allowed maximum number of decimals for the Amount due for payment (BT-115) is 2.";
    BR_DEC_19 = "BR-DEC-19", ["BT-116"],
        "The allowed maximum number of decimals for the VAT category taxable amount (BT-116) is 2.";
    BR_DEC_20 = "BR-DEC-20", ["BT-117"],
        "The allowed maximum number of decimals for the VAT category tax amount (BT-117) is 2.";
    BR_DEC_23 = "BR-DEC-23", ["BT-131"],
        "The allowed maximum number of decimals for the Invoice line net amount (BT-131) is 2.";
    BR_DEC_24 = "BR-DEC-24", ["BT-136"],
        "The allowed maximum number of decimals for the Invoice line allowance amount (BT-136) is 2.";
    BR_DEC_25 = "BR-DEC-25", ["BT-137"],
        "The allowed maximum number of decimals for the Invoice line allowance base amount (BT-137) is 2.";
    BR_DEC_27 = "BR-DEC-27", ["BT-141"],
        "The allowed maximum number of decimals for the Invoice line charge amount (BT-141) is 2.";
    BR_DEC_28 = "BR-DEC-28", ["BT-142"],
        "The allowed maximum number of decimals for the Invoice line charge base amount (BT-142) is 2.";

    BR_CL_01 = "BR-CL-01", ["BT-3"],
        "The document type code MUST be coded by the invoice and credit note related code lists of UNTDID 1001.";
    BR_CL_08 = "BR-CL-08" [warning], ["BT-21"],
        "Invoiced note subject code shall be coded using UNCL4451.";
    BR_CL_23 = "BR-CL-23" [warning], ["BT-130"],
        "Unit code MUST be coded according to the UN/ECE Recommendation 20 with Rec 21 extension.";

    // Standard rated
    BR_S_1 = "BR-S-1", ["BG-23", "BT-118"],
        "An Invoice that contains an Invoice line (BG-25), a Document level allowance (BG-20) or a Document level charge (BG-21) where the VAT category code (BT-151, BT-95 or BT-102) is \"Standard rated\" shall contain in the VAT breakdown (BG-23) at least one VAT category code (BT-118) equal with \"Standard rated\".";
    BR_S_2 = "BR-S-2", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"Standard rated\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_S_3 = "BR-S-3", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Standard rated\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_S_4 = "BR-S-4", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Standard rated\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_S_5 = "BR-S-5", ["BT-152"],
        "In an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"Standard rated\" the Invoiced item VAT rate (BT-152) shall be greater than zero.";
    BR_S_6 = "BR-S-6", ["BT-96"],
        "In a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Standard rated\" the Document level allowance VAT rate (BT-96) shall be greater than zero.";
    BR_S_7 = "BR-S-7", ["BT-103"],
        "In a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Standard rated\" the Document level charge VAT rate (BT-103) shall be greater than zero.";
    BR_S_8 = "BR-S-8", ["BT-116"],
        "For each different value of VAT category rate (BT-119) where the VAT category code (BT-118) is \"Standard rated\", the VAT category taxable amount (BT-116) in a VAT breakdown (BG-23) shall equal the sum of Invoice line net amounts (BT-131) plus the sum of document level charge amounts (BT-99) minus the sum of document level allowance amounts (BT-92) where the VAT category code (BT-151, BT-102, BT-95) is \"Standard rated\" and the VAT rate (BT-152, BT-103, BT-96) equals the VAT category rate (BT-119).";
    BR_S_9 = "BR-S-9", ["BT-117"],
        "The VAT category tax amount (BT-117) in a VAT breakdown (BG-23) where VAT category code (BT-118) is \"Standard rated\" shall equal the VAT category taxable amount (BT-116) multiplied by the VAT category rate (BT-119).";
    BR_S_10 = "BR-S-10", ["BT-120", "BT-121"],
        "A VAT breakdown (BG-23) with VAT Category code (BT-118) \"Standard rate\" shall not have a VAT exemption reason code (BT-121) or VAT exemption reason text (BT-120).";

    // Zero rated
    BR_Z_1 = "BR-Z-1", ["BG-23", "BT-118"],
        "An Invoice that contains an Invoice line (BG-25), a Document level allowance (BG-20) or a Document level charge (BG-21) where the VAT category code (BT-151, BT-95 or BT-102) is \"Zero rated\" shall contain in the VAT breakdown (BG-23) exactly one VAT category code (BT-118) equal with \"Zero rated\".";
    BR_Z_2 = "BR-Z-2", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains an Invoice line where the Invoiced item VAT category code (BT-151) is \"Zero rated\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_Z_3 = "BR-Z-3", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Zero rated\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_Z_4 = "BR-Z-4", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Zero rated\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_Z_5 = "BR-Z-5", ["BT-152"],
        "In an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"Zero rated\" the Invoiced item VAT rate (BT-152) shall be 0 (zero).";
    BR_Z_6 = "BR-Z-6", ["BT-96"],
        "In a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Zero rated\" the Document level allowance VAT rate (BT-96) shall be 0 (zero).";
    BR_Z_7 = "BR-Z-7", ["BT-103"],
        "In a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Zero rated\" the Document level charge VAT rate (BT-103) shall be 0 (zero).";
    BR_Z_8 = "BR-Z-8", ["BT-116"],
        "In a VAT breakdown (BG-23) where VAT category code (BT-118) is \"Zero rated\" the VAT category taxable amount (BT-116) shall equal the sum of Invoice line net amount (BT-131) minus the sum of Document level allowance amounts (BT-92) plus the sum of Document level charge amounts (BT-99) where the VAT category codes (BT-151, BT-95, BT-102) are \"Zero rated\".";
    BR_Z_9 = "BR-Z-9", ["BT-117"],
        "The VAT category tax amount (BT-117) in a VAT breakdown (BG-23) where VAT category code (BT-118) is \"Zero rated\" shall equal 0 (zero).";
    BR_Z_10 = "BR-Z-10", ["BT-120", "BT-121"],
        "A VAT breakdown (BG-23) with VAT Category code (BT-118) \"Zero rated\" shall not have a VAT exemption reason code (BT-121) or VAT exemption reason text (BT-120).";

    // Exempt from VAT
    BR_E_1 = "BR-E-1", ["BG-23", "BT-118"],
        "An Invoice that contains an Invoice line (BG-25), a Document level allowance (BG-20) or a Document level charge (BG-21) where the VAT category code (BT-151, BT-95 or BT-102) is \"Exempt from VAT\" shall contain exactly one VAT breakdown (BG-23) with the VAT category code (BT-118) equal to \"Exempt from VAT\".";
    BR_E_2 = "BR-E-2", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"Exempt from VAT\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_E_3 = "BR-E-3", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Exempt from VAT\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_E_4 = "BR-E-4", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Exempt from VAT\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_E_5 = "BR-E-5", ["BT-152"],
        "In an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"Exempt from VAT\", the Invoiced item VAT rate (BT-152) shall be 0 (zero).";
    BR_E_6 = "BR-E-6", ["BT-96"],
        "In a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Exempt from VAT\", the Document level allowance VAT rate (BT-96) shall be 0 (zero).";
    BR_E_7 = "BR-E-7", ["BT-103"],
        "In a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Exempt from VAT\", the Document level charge VAT rate (BT-103) shall be 0 (zero).";
    BR_E_8 = "BR-E-8", ["BT-116"],
        "In a VAT breakdown (BG-23) where the VAT category code (BT-118) is \"Exempt from VAT\" the VAT category taxable amount (BT-116) shall equal the sum of Invoice line net amounts (BT-131) minus the sum of Document level allowance amounts (BT-92) plus the sum of Document level charge amounts (BT-99) where the VAT category codes (BT-151, BT-95, BT-102) are \"Exempt from VAT\".";
    BR_E_9 = "BR-E-9", ["BT-117"],
        "The VAT category tax amount (BT-117) In a VAT breakdown (BG-23) where the VAT category code (BT-118) equals \"Exempt from VAT\" shall equal 0 (zero).";
    BR_E_10 = "BR-E-10", ["BT-120", "BT-121"],
        "A VAT breakdown (BG-23) with VAT Category code (BT-118) \"Exempt from VAT\" shall have a VAT exemption reason code (BT-121) or a VAT exemption reason text (BT-120).";

    // Reverse charge
    BR_AE_1 = "BR-AE-1", ["BG-23", "BT-118"],
        "An Invoice that contains an Invoice line (BG-25), a Document level allowance (BG-20) or a Document level charge (BG-21) where the VAT category code (BT-151, BT-95 or BT-102) is \"Reverse charge\" shall contain in the VAT Breakdown (BG-23) exactly one VAT category code (BT-118) equal with \"VAT reverse charge\".";
    BR_AE_2 = "BR-AE-2", ["BT-31", "BT-32", "BT-63", "BT-48", "BT-47"],
        "An Invoice that contains an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"Reverse charge\" shall contain the Seller VAT Identifier (BT-31), the Seller Tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63) and the Buyer VAT identifier (BT-48) and/or the Buyer legal registration identifier (BT-47).";
    BR_AE_3 = "BR-AE-3", ["BT-31", "BT-32", "BT-63", "BT-48", "BT-47"],
        "An Invoice that contains a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Reverse charge\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63) and the Buyer VAT identifier (BT-48) and/or the Buyer legal registration identifier (BT-47).";
    BR_AE_4 = "BR-AE-4", ["BT-31", "BT-32", "BT-63", "BT-48", "BT-47"],
        "An Invoice that contains a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Reverse charge\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63) and the Buyer VAT identifier (BT-48) and/or the Buyer legal registration identifier (BT-47).";
    BR_AE_5 = "BR-AE-5", ["BT-152"],
        "In an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"Reverse charge\" the Invoiced item VAT rate (BT-152) shall be 0 (zero).";
    BR_AE_6 = "BR-AE-6", ["BT-96"],
        "In a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Reverse charge\" the Document level allowance VAT rate (BT-96) shall be 0 (zero).";
    BR_AE_7 = "BR-AE-7", ["BT-103"],
        "In a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Reverse charge\" the Document level charge VAT rate (BT-103) shall be 0 (zero).";
    BR_AE_8 = "BR-AE-8", ["BT-116"],
        "In a VAT breakdown (BG-23) where the VAT category code (BT-118) is \"Reverse charge\" the VAT category taxable amount (BT-116) shall equal the sum of Invoice line net amounts (BT-131) minus the sum of Document level allowance amounts (BT-92) plus the sum of Document level charge amounts (BT-99) where the VAT category codes (BT-151, BT-95, BT-102) are \"Reverse charge\".";
    BR_AE_9 = "BR-AE-9", ["BT-117"],
        "The VAT category tax amount (BT-117) in a VAT breakdown (BG-23) where the VAT category code (BT-118) is \"Reverse charge\" shall be 0 (zero).";
    BR_AE_10 = "BR-AE-10", ["BT-120", "BT-121"],
        "A VAT breakdown (BG-23) with VAT Category code (BT-118) \"Reverse charge\" shall have a VAT exemption reason code (BT-121), meaning \"Reverse charge\" or the VAT exemption reason text (BT-120) \"Reverse charge\" (or the equivalent standard text in another language).";

    // Intra-community supply
    BR_IC_1 = "BR-IC-1", ["BG-23", "BT-118"],
        "An Invoice that contains an Invoice line (BG-25), a Document level allowance (BG-20) or a Document level charge (BG-21) where the VAT category code (BT-151, BT-95 or BT-102) is \"Intra-community supply\" shall contain in the VAT breakdown (BG-23) exactly one VAT category code (BT-118) equal with \"Intra-community supply\".";
    BR_IC_2 = "BR-IC-2", ["BT-31", "BT-63", "BT-48"],
        "An Invoice that contains an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"Intra-community supply\" shall contain the Seller VAT Identifier (BT-31) or the Seller tax representative VAT identifier (BT-63) and the Buyer VAT identifier (BT-48).";
    BR_IC_3 = "BR-IC-3", ["BT-31", "BT-63", "BT-48"],
        "An Invoice that contains a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Intra-community supply\" shall contain the Seller VAT Identifier (BT-31) or the Seller tax representative VAT identifier (BT-63) and the Buyer VAT identifier (BT-48).";
    BR_IC_4 = "BR-IC-4", ["BT-31", "BT-63", "BT-48"],
        "An Invoice that contains a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Intra-community supply\" shall contain the Seller VAT Identifier (BT-31) or the Seller tax representative VAT identifier (BT-63) and the Buyer VAT identifier (BT-48).";
    BR_IC_5 = "BR-IC-5", ["BT-152"],
        "In an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"Intra-community supply\" the Invoiced item VAT rate (BT-152) shall be 0 (zero).";
    BR_IC_6 = "BR-IC-6", ["BT-96"],
        "In a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Intra-community supply\" the Document level allowance VAT rate (BT-96) shall be 0 (zero).";
    BR_IC_7 = "BR-IC-7", ["BT-103"],
        "In a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Intra-community supply\" the Document level charge VAT rate (BT-103) shall be 0 (zero).";
    BR_IC_8 = "BR-IC-8", ["BT-116"],
        "In a VAT breakdown (BG-23) where the VAT category code (BT-118) is \"Intra-community supply\" the VAT category taxable amount (BT-116) shall equal the sum of Invoice line net amounts (BT-131) minus the sum of Document level allowance amounts (BT-92) plus the sum of Document level charge amounts (BT-99) where the VAT category codes (BT-151, BT-95, BT-102) are \"Intra-community supply\".";
    BR_IC_9 = "BR-IC-9", ["BT-117"],
        "The VAT category tax amount (BT-117) in a VAT breakdown (BG-23) where the VAT category code (BT-118) is \"Intra-community supply\" shall be 0 (zero).";
    BR_IC_10 = "BR-IC-10", ["BT-120", "BT-121"],
        "A VAT breakdown (BG-23) with the VAT Category code (BT-118) \"Intra-community supply\" shall have a VAT exemption reason code (BT-121), meaning \"Intra-community supply\" or the VAT exemption reason text (BT-120) \"Intra-community supply\" (or the equivalent standard text in another language).";
    BR_IC_11 = "BR-IC-11", ["BT-72", "BG-14"],
        "In an Invoice with a VAT breakdown (BG-23) where the VAT category code (BT-118) is \"Intra-community supply\" the Actual delivery date (BT-72) or the Invoicing period (BG-14) shall not be blank.";
    BR_IC_12 = "BR-IC-12", ["BT-80"],
        "In an Invoice with a VAT breakdown (BG-23) where the VAT category code (BT-118) is \"Intra-community supply\" the Deliver to country code (BT-80) shall not be blank.";

    // Export outside the EU
    BR_G_1 = "BR-G-1", ["BG-23", "BT-118"],
        "An Invoice that contains an Invoice line (BG-25), a Document level allowance (BG-20) or a Document level charge (BG-21) where the VAT category code (BT-151, BT-95 or BT-102) is \"Export outside the EU\" shall contain in the VAT breakdown (BG-23) exactly one VAT category code (BT-118) equal with \"Export outside the EU\".";
    BR_G_2 = "BR-G-2", ["BT-31", "BT-63"],
        "An Invoice that contains an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"Export outside the EU\" shall contain the Seller VAT Identifier (BT-31) or the Seller tax representative VAT identifier (BT-63).";
    BR_G_3 = "BR-G-3", ["BT-31", "BT-63"],
        "An Invoice that contains a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Export outside the EU\" shall contain the Seller VAT Identifier (BT-31) or the Seller tax representative VAT identifier (BT-63).";
    BR_G_4 = "BR-G-4", ["BT-31", "BT-63"],
        "An Invoice that contains a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Export outside the EU\" shall contain the Seller VAT Identifier (BT-31) or the Seller tax representative VAT identifier (BT-63).";
    BR_G_5 = "BR-G-5", ["BT-152"],
        "In an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"Export outside the EU\" the Invoiced item VAT rate (BT-152) shall be 0 (zero).";
    BR_G_6 = "BR-G-6", ["BT-96"],
        "In a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Export outside the EU\" the Document level allowance VAT rate (BT-96) shall be 0 (zero).";
    BR_G_7 = "BR-G-7", ["BT-103"],
        "In a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Export outside the EU\" the Document level charge VAT rate (BT-103) shall be 0 (zero).";
    BR_G_8 = "BR-G-8", ["BT-116"],
        "In a VAT breakdown (BG-23) where the VAT category code (BT-118) is \"Export outside the EU\" the VAT category taxable amount (BT-116) shall equal the sum of Invoice line net amounts (BT-131) minus the sum of Document level allowance amounts (BT-92) plus the sum of Document level charge amounts (BT-99) where the VAT category codes (BT-151, BT-95, BT-102) are \"Export outside the EU\".";
    BR_G_9 = "BR-G-9", ["BT-117"],
        "The VAT category tax amount (BT-117) in a VAT breakdown (BG-23) where the VAT category code (BT-118) is \"Export outside the EU\" shall be 0 (zero).";
    BR_G_10 = "BR-G-10", ["BT-120", "BT-121"],
        "A VAT breakdown (BG-23) with the VAT Category code (BT-118) \"Export outside the EU\" shall have a VAT exemption reason code (BT-121), meaning \"Export outside the EU\" or the VAT exemption reason text (BT-120) \"Export outside the EU\" (or the equivalent standard text in another language).";

    // IGIC (Canary Islands)
    BR_AF_1 = "BR-AF-1", ["BG-23", "BT-118"],
        "An Invoice that contains an Invoice line (BG-25), a Document level allowance (BG-20) or a Document level charge (BG-21) where the VAT category code (BT-151, BT-95 or BT-102) is \"IGIC\" shall contain in the VAT breakdown (BG-23) at least one VAT category code (BT-118) equal with \"IGIC\".";
    BR_AF_2 = "BR-AF-2", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"IGIC\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_AF_3 = "BR-AF-3", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"IGIC\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_AF_4 = "BR-AF-4", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"IGIC\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_AF_5 = "BR-AF-5", ["BT-152"],
        "In an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"IGIC\" the invoiced item VAT rate (BT-152) shall be 0 (zero) or greater than zero.";
    BR_AF_6 = "BR-AF-6", ["BT-96"],
        "In a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"IGIC\" the Document level allowance VAT rate (BT-96) shall be 0 (zero) or greater than zero.";
    BR_AF_7 = "BR-AF-7", ["BT-103"],
        "In a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"IGIC\" the Document level charge VAT rate (BT-103) shall be 0 (zero) or greater than zero.";
    BR_AF_8 = "BR-AF-8", ["BT-116"],
        "For each different value of VAT category rate (BT-119) where the VAT category code (BT-118) is \"IGIC\", the VAT category taxable amount (BT-116) in a VAT breakdown (BG-23) shall equal the sum of Invoice line net amounts (BT-131) plus the sum of document level charge amounts (BT-99) minus the sum of document level allowance amounts (BT-92) where the VAT category code (BT-151, BT-102, BT-95) is \"IGIC\" and the VAT rate (BT-152, BT-103, BT-96) equals the VAT category rate (BT-119).";
    BR_AF_9 = "BR-AF-9", ["BT-117"],
        "The VAT category tax amount (BT-117) in a VAT breakdown (BG-23) where VAT category code (BT-118) is \"IGIC\" shall equal the VAT category taxable amount (BT-116) multiplied by the VAT category rate (BT-119).";
    BR_AF_10 = "BR-AF-10", ["BT-120", "BT-121"],
        "A VAT breakdown (BG-23) with VAT Category code (BT-118) \"IGIC\" shall not have a VAT exemption reason code (BT-121) or VAT exemption reason text (BT-120).";

    // IPSI (Ceuta and Melilla)
    BR_AG_1 = "BR-AG-1", ["BG-23", "BT-118"],
        "An Invoice that contains an Invoice line (BG-25), a Document level allowance (BG-20) or a Document level charge (BG-21) where the VAT category code (BT-151, BT-95 or BT-102) is \"IPSI\" shall contain in the VAT breakdown (BG-23) at least one VAT category code (BT-118) equal with \"IPSI\".";
    BR_AG_2 = "BR-AG-2", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"IPSI\" shall contain the Seller VAT Identifier (BT-31), the Seller Tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_AG_3 = "BR-AG-3", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"IPSI\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_AG_4 = "BR-AG-4", ["BT-31", "BT-32", "BT-63"],
        "An Invoice that contains a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"IPSI\" shall contain the Seller VAT Identifier (BT-31), the Seller tax registration identifier (BT-32) and/or the Seller tax representative VAT identifier (BT-63).";
    BR_AG_5 = "BR-AG-5", ["BT-152"],
        "In an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"IPSI\" the Invoiced item VAT rate (BT-152) shall be 0 (zero) or greater than zero.";
    BR_AG_6 = "BR-AG-6", ["BT-96"],
        "In a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"IPSI\" the Document level allowance VAT rate (BT-96) shall be 0 (zero) or greater than zero.";
    BR_AG_7 = "BR-AG-7", ["BT-103"],
        "In a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"IPSI\" the Document level charge VAT rate (BT-103) shall be 0 (zero) or greater than zero.";
    BR_AG_8 = "BR-AG-8", ["BT-116"],
        "For each different value of VAT category rate (BT-119) where the VAT category code (BT-118) is \"IPSI\", the VAT category taxable amount (BT-116) in a VAT breakdown (BG-23) shall equal the sum of Invoice line net amounts (BT-131) plus the sum of document level charge amounts (BT-99) minus the sum of document level allowance amounts (BT-92) where the VAT category code (BT-151, BT-102, BT-95) is \"IPSI\" and the VAT rate (BT-152, BT-103, BT-96) equals the VAT category rate (BT-119).";
    BR_AG_9 = "BR-AG-9", ["BT-117"],
        "The VAT category tax amount (BT-117) in a VAT breakdown (BG-23) where VAT category code (BT-118) is \"IPSI\" shall equal the VAT category taxable amount (BT-116) multiplied by the VAT category rate (BT-119).";
    BR_AG_10 = "BR-AG-10", ["BT-120", "BT-121"],
        "A VAT breakdown (BG-23) with VAT Category code (BT-118) \"IPSI\" shall not have a VAT exemption reason code (BT-121) or VAT exemption reason text (BT-120).";

    // Not subject to VAT
    BR_O_1 = "BR-O-1", ["BG-23", "BT-118"],
        "An Invoice that contains an Invoice line (BG-25), a Document level allowance (BG-20) or a Document level charge (BG-21) where the VAT category code (BT-151, BT-95 or BT-102) is \"Not subject to VAT\" shall contain exactly one VAT breakdown group (BG-23) with the VAT category code (BT-118) equal to \"Not subject to VAT\".";
    BR_O_2 = "BR-O-2", ["BT-31", "BT-63", "BT-48"],
        "An Invoice that contains an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is \"Not subject to VAT\" shall not contain the Seller VAT identifier (BT-31), the Seller tax representative VAT identifier (BT-63) or the Buyer VAT identifier (BT-48).";
    BR_O_3 = "BR-O-3", ["BT-31", "BT-63", "BT-48"],
        "An Invoice that contains a Document level allowance (BG-20) where the Document level allowance VAT category code (BT-95) is \"Not subject to VAT\" shall not contain the Seller VAT identifier (BT-31), the Seller tax representative VAT identifier (BT-63) or the Buyer VAT identifier (BT-48).";
    BR_O_4 = "BR-O-4", ["BT-31", "BT-63", "BT-48"],
        "An Invoice that contains a Document level charge (BG-21) where the Document level charge VAT category code (BT-102) is \"Not subject to VAT\" shall not contain the Seller VAT identifier (BT-31), the Seller tax representative VAT identifier (BT-63) or the Buyer VAT identifier (BT-48).";
    BR_O_5 = "BR-O-5", ["BT-152"],
        "An Invoice line (BG-25) where the VAT category code (BT-151) is \"Not subject to VAT\" shall not contain an Invoiced item VAT rate (BT-152).";
    BR_O_6 = "BR-O-6", ["BT-96"],
        "A Document level allowance (BG-20) where VAT category code (BT-95) is \"Not subject to VAT\" shall not contain a Document level allowance VAT rate (BT-96).";
    BR_O_7 = "BR-O-7", ["BT-103"],
        "A Document level charge (BG-21) where the VAT category code (BT-102) is \"Not subject to VAT\" shall not contain a Document level charge VAT rate (BT-103).";
    BR_O_8 = "BR-O-8", ["BT-116"],
        "In a VAT breakdown (BG-23) where the VAT category code (BT-118) is \"Not subject to VAT\" the VAT category taxable amount (BT-116) shall equal the sum of Invoice line net amounts (BT-131) minus the sum of Document level allowance amounts (BT-92) plus the sum of Document level charge amounts (BT-99) where the VAT category codes (BT-151, BT-95, BT-102) are \"Not subject to VAT\".";
    BR_O_9 = "BR-O-9", ["BT-117"],
        "The VAT category tax amount (BT-117) in a VAT breakdown (BG-23) where the VAT category code (BT-118) is \"Not subject to VAT\" shall be 0 (zero).";
    BR_O_10 = "BR-O-10", ["BT-120", "BT-121"],
        "A VAT breakdown (BG-23) with VAT Category code (BT-118) \"Not subject to VAT\" shall have a VAT exemption reason code (BT-121), meaning \"Not subject to VAT\" or a VAT exemption reason text (BT-120) \"Not subject to VAT\" (or the equivalent standard text in another language).";
    BR_O_11 = "BR-O-11", ["BG-23", "BT-118"],
        "An Invoice that contains a VAT breakdown group (BG-23) with a VAT category code (BT-118) \"Not subject to VAT\" shall not contain other VAT breakdown groups (BG-23).";
    BR_O_12 = "BR-O-12", ["BT-151"],
        "An Invoice that contains a VAT breakdown group (BG-23) with a VAT category code (BT-118) \"Not subject to VAT\" shall not contain an Invoice line (BG-25) where the Invoiced item VAT category code (BT-151) is not \"Not subject to VAT\".";
    BR_O_13 = "BR-O-13", ["BT-95"],
        "An Invoice that contains a VAT breakdown group (BG-23) with a VAT category code (BT-118) \"Not subject to VAT\" shall not contain Document level allowances (BG-20) where Document level allowance VAT category code (BT-95) is not \"Not subject to VAT\".";
    BR_O_14 = "BR-O-14", ["BT-102"],
        "An Invoice that contains a VAT breakdown group (BG-23) with a VAT category code (BT-118) \"Not subject to VAT\" shall not contain Document level charges (BG-21) where Document level charge VAT category code (BT-102) is not \"Not subject to VAT\".";
}

/// `BR-IG-n` synonyms of the IGIC rules.
pub static BR_IG_1: &Rule = &BR_AF_1;
pub static BR_IG_2: &Rule = &BR_AF_2;
pub static BR_IG_3: &Rule = &BR_AF_3;
pub static BR_IG_4: &Rule = &BR_AF_4;
pub static BR_IG_5: &Rule = &BR_AF_5;
pub static BR_IG_6: &Rule = &BR_AF_6;
pub static BR_IG_7: &Rule = &BR_AF_7;
pub static BR_IG_8: &Rule = &BR_AF_8;
pub static BR_IG_9: &Rule = &BR_AF_9;
pub static BR_IG_10: &Rule = &BR_AF_10;

/// `BR-IP-n` synonyms of the IPSI rules.
pub static BR_IP_1: &Rule = &BR_AG_1;
pub static BR_IP_2: &Rule = &BR_AG_2;
pub static BR_IP_3: &Rule = &BR_AG_3;
pub static BR_IP_4: &Rule = &BR_AG_4;
pub static BR_IP_5: &Rule = &BR_AG_5;
pub static BR_IP_6: &Rule = &BR_AG_6;
pub static BR_IP_7: &Rule = &BR_AG_7;
pub static BR_IP_8: &Rule = &BR_AG_8;
pub static BR_IP_9: &Rule = &BR_AG_9;
pub static BR_IP_10: &Rule = &BR_AG_10;
