//! XRechnung 3.0 CIUS rules (`BR-DE-*`).

rule_table! {
    XRECHNUNG_RULES;

    BR_DE_1 = "BR-DE-1" [error], ["BG-16"],
        "An invoice must contain information on \"PAYMENT INSTRUCTIONS\" (BG-16).";
    BR_DE_2 = "BR-DE-2" [error], ["BG-6"],
        "The group \"SELLER CONTACT\" (BG-6) must be transmitted.";
    BR_DE_3 = "BR-DE-3" [error], ["BT-37"],
        "The element \"Seller city\" (BT-37) must be transmitted.";
    BR_DE_4 = "BR-DE-4" [error], ["BT-38"],
        "The element \"Seller post code\" (BT-38) must be transmitted.";
    BR_DE_5 = "BR-DE-5" [error], ["BT-41"],
        "The element \"Seller contact point\" (BT-41) must be transmitted.";
    BR_DE_6 = "BR-DE-6" [error], ["BT-42"],
        "The element \"Seller contact telephone number\" (BT-42) must be transmitted.";
    BR_DE_7 = "BR-DE-7" [error], ["BT-43"],
        "The element \"Seller contact email address\" (BT-43) must be transmitted.";
    BR_DE_8 = "BR-DE-8" [error], ["BT-52"],
        "The element \"Buyer city\" (BT-52) must be transmitted.";
    BR_DE_9 = "BR-DE-9" [error], ["BT-53"],
        "The element \"Buyer post code\" (BT-53) must be transmitted.";
    BR_DE_10 = "BR-DE-10" [error], ["BT-77"],
        "The element \"Deliver to city\" (BT-77) must be transmitted if the group \"DELIVER TO ADDRESS\" (BG-15) is delivered.";
    BR_DE_11 = "BR-DE-11" [error], ["BT-78"],
        "The element \"Deliver to post code\" (BT-78) must be transmitted if the group \"DELIVER TO ADDRESS\" (BG-15) is delivered.";
    BR_DE_13 = "BR-DE-13" [error], ["BG-17", "BG-18", "BG-19"],
        "An invoice must contain only one of the groups \"CREDIT TRANSFER\" (BG-17), \"PAYMENT CARD INFORMATION\" (BG-18) or \"DIRECT DEBIT\" (BG-19).";
    BR_DE_14 = "BR-DE-14" [error], ["BT-119"],
        "The element \"VAT category rate\" (BT-119) must be transmitted.";
    BR_DE_15 = "BR-DE-15" [error], ["BT-10"],
        "The element \"Buyer reference\" (BT-10) must be transmitted.";
    BR_DE_16 = "BR-DE-16" [error], ["BT-31", "BT-32", "BG-11"],
        "If one of the VAT codes S, Z, E, AE, K, G, L or M is used, an invoice must contain at least one of the elements \"Seller VAT identifier\" (BT-31), \"Seller tax registration identifier\" (BT-32) or \"SELLER TAX REPRESENTATIVE PARTY\" (BG-11).";
    BR_DE_17 = "BR-DE-17" [warning], ["BT-3"],
        "The element \"Invoice type code\" (BT-3) should only contain the following values from code list UNTDID 1001: 326 (Partial invoice), 380 (Commercial invoice), 384 (Corrected invoice), 389 (Self-billed invoice), 381 (Credit note), 875 (Partial construction invoice), 876 (Partial final construction invoice), 877 (Final construction invoice).";
    BR_DE_19 = "BR-DE-19" [warning], ["BT-84"],
        "The element \"Payment account identifier\" (BT-84) should contain a valid IBAN if SEPA credit transfer is used.";
    BR_DE_20 = "BR-DE-20" [warning], ["BT-91"],
        "The element \"Debited account identifier\" (BT-91) should contain a valid IBAN if SEPA direct debit is used.";
    BR_DE_21 = "BR-DE-21" [warning], ["BT-24"],
        "The element \"Specification identifier\" (BT-24) should syntactically correspond to the XRechnung standard identifier.";
    BR_DE_22 = "BR-DE-22" [error], ["BT-125"],
        "The \"filename\" attributes of all \"Attached document\" (BT-125) elements must be unique.";
    BR_DE_23_A = "BR-DE-23-a" [error], ["BG-17", "BT-81"],
        "If \"Payment means type code\" (BT-81) contains a code for credit transfer (30, 58), \"CREDIT TRANSFER\" (BG-17) must be provided.";
    BR_DE_23_B = "BR-DE-23-b" [error], ["BG-18", "BG-19", "BT-81"],
        "If \"Payment means type code\" (BT-81) contains a code for credit transfer (30, 58), \"PAYMENT CARD INFORMATION\" (BG-18) and \"DIRECT DEBIT\" (BG-19) must not be provided.";
    BR_DE_24_A = "BR-DE-24-a" [error], ["BG-18", "BT-81"],
        "If \"Payment means type code\" (BT-81) contains a code for payment card (48, 54, 55), \"PAYMENT CARD INFORMATION\" (BG-18) must be provided.";
    BR_DE_24_B = "BR-DE-24-b" [error], ["BG-17", "BG-19", "BT-81"],
        "If \"Payment means type code\" (BT-81) contains a code for payment card (48, 54, 55), \"CREDIT TRANSFER\" (BG-17) and \"DIRECT DEBIT\" (BG-19) must not be provided.";
    BR_DE_25_A = "BR-DE-25-a" [error], ["BG-19", "BT-81"],
        "If \"Payment means type code\" (BT-81) contains a code for direct debit (59), \"DIRECT DEBIT\" (BG-19) must be provided.";
    BR_DE_25_B = "BR-DE-25-b" [error], ["BG-17", "BG-18", "BT-81"],
        "If \"Payment means type code\" (BT-81) contains a code for direct debit (59), \"CREDIT TRANSFER\" (BG-17) and \"PAYMENT CARD INFORMATION\" (BG-18) must not be provided.";
    BR_DE_26 = "BR-DE-26" [warning], ["BG-3", "BT-3"],
        "If \"Invoice type code\" (BT-3) contains the code 384 (Corrected invoice), \"PRECEDING INVOICE REFERENCE\" (BG-3) should be provided at least once.";
    BR_DE_27 = "BR-DE-27" [warning], ["BT-42"],
        "\"Seller contact telephone number\" (BT-42) should contain a valid telephone number with at least three digits.";
    BR_DE_28 = "BR-DE-28" [warning], ["BT-43"],
        "\"Seller contact email address\" (BT-43) should contain exactly one @ sign, which should not be at the beginning or end.";
    BR_DE_30 = "BR-DE-30" [error], ["BT-90"],
        "If \"DIRECT DEBIT\" (BG-19) is provided, \"Bank assigned creditor identifier\" (BT-90) must be provided.";
    BR_DE_31 = "BR-DE-31" [error], ["BT-91"],
        "If \"DIRECT DEBIT\" (BG-19) is provided, \"Debited account identifier\" (BT-91) must be provided.";
}
