//! Checks of this crate that no published rule set covers.

rule_table! {
    CUSTOM_RULES;

    CALC_LINE_TOTAL = "CALC-LINE-TOTAL", ["BT-131", "BT-129", "BT-146"],
        "Invoice line net amount (BT-131) shall equal Invoiced quantity (BT-129) x Item net price (BT-146) / Item price base quantity (BT-149) minus line allowances plus line charges, rounded to two decimals.";
    TAX_TOTAL_CURRENCY = "TAX-TOTAL-CURRENCY", ["BT-110", "BT-111"],
        "Invoice total VAT amounts shall be given in the Invoice currency (BT-5) or the VAT accounting currency (BT-6).";
    CALC_OVERFLOW = "CALC-OVERFLOW", ["BT-131", "BT-106", "BT-116"],
        "Invoice amounts shall be small enough for their sums and products to be computed within the range of a 96-bit decimal.";
}
