//! UN/ECE Recommendation 20 and 21 unit codes.
//!
//! The full Rec 20 list has ~2000 codes and Rec 21 adds the `X`-prefixed
//! package codes; this table covers the subset seen in European
//! e-invoicing (BT-130). Sorted for binary search.

/// Check whether `code` is a known Rec 20/21 unit code.
pub fn is_known_unit_code(code: &str) -> bool {
    unit_name(code).is_some()
}

/// Name of a Rec 20/21 unit code.
pub fn unit_name(code: &str) -> Option<&'static str> {
    UNIT_CODES
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|i| UNIT_CODES[i].1)
}

static UNIT_CODES: &[(&str, &str)] = &[
    ("10", "group"),
    ("11", "outfit"),
    ("13", "ration"),
    ("14", "shot"),
    ("15", "stick, military"),
    ("2N", "decibel"),
    ("4K", "milliampere"),
    ("58", "net kilogram"),
    ("59", "part per million"),
    ("A9", "rate"),
    ("ACR", "acre"),
    ("AMH", "ampere hour"),
    ("AMP", "ampere"),
    ("ANN", "year"),
    ("APZ", "troy ounce or apothecary ounce"),
    ("AS", "assortment"),
    ("B16", "megabyte"),
    ("BAR", "bar [unit of pressure]"),
    ("BFT", "board foot"),
    ("BHP", "brake horse power"),
    ("BLL", "barrel (US)"),
    ("BQL", "becquerel"),
    ("C62", "one"),
    ("CCM", "cubic centimetre"),
    ("CDL", "candela"),
    ("CEL", "degree Celsius"),
    ("CLT", "centilitre"),
    ("CMK", "square centimetre"),
    ("CMQ", "cubic centimetre"),
    ("CMT", "centimetre"),
    ("CNP", "hundred pack"),
    ("CT", "carton"),
    ("D61", "minute [unit of angle]"),
    ("D62", "second [unit of angle]"),
    ("DAY", "day"),
    ("DLT", "decilitre"),
    ("DMK", "square decimetre"),
    ("DMQ", "cubic decimetre"),
    ("DMT", "decimetre"),
    ("DZN", "dozen"),
    ("E4", "gross kilogram"),
    ("E49", "working day"),
    ("EA", "each"),
    ("FOT", "foot"),
    ("FTK", "square foot"),
    ("FTQ", "cubic foot"),
    ("GBQ", "gigabecquerel"),
    ("GLL", "gallon (US)"),
    ("GRM", "gram"),
    ("GRO", "gross"),
    ("GWH", "gigawatt hour"),
    ("H87", "piece"),
    ("HAR", "hectare"),
    ("HLT", "hectolitre"),
    ("HUR", "hour"),
    ("IE", "person"),
    ("INH", "inch"),
    ("INK", "square inch"),
    ("JOU", "joule"),
    ("KBA", "kilobar"),
    ("KEL", "kelvin"),
    ("KGM", "kilogram"),
    ("KHZ", "kilohertz"),
    ("KMH", "kilometre per hour"),
    ("KMK", "square kilometre"),
    ("KMT", "kilometre"),
    ("KNI", "kilogram of nitrogen"),
    ("KPA", "kilogram net"),
    ("KTN", "kilotonne"),
    ("KVA", "kilovolt - ampere"),
    ("KVT", "kilovolt"),
    ("KWH", "kilowatt hour"),
    ("KWT", "kilowatt"),
    ("LBR", "pound"),
    ("LH", "labour hour"),
    ("LM", "linear metre"),
    ("LPA", "litre of pure alcohol"),
    ("LS", "lump sum"),
    ("LTR", "litre"),
    ("MAW", "megawatt"),
    ("MBR", "millibar"),
    ("MGM", "milligram"),
    ("MHZ", "megahertz"),
    ("MIN", "minute [unit of time]"),
    ("MLT", "millilitre"),
    ("MMK", "square millimetre"),
    ("MMQ", "cubic millimetre"),
    ("MMT", "millimetre"),
    ("MON", "month"),
    ("MQH", "cubic metre per hour"),
    ("MTK", "square metre"),
    ("MTQ", "cubic metre"),
    ("MTR", "metre"),
    ("MTS", "metre per second"),
    ("MWH", "megawatt hour (1000 kW.h)"),
    ("NAR", "number of articles"),
    ("NMP", "number of packs"),
    ("NPR", "number of pairs"),
    ("NT", "net ton"),
    ("ONZ", "ounce (avoirdupois)"),
    ("P1", "percent"),
    ("PR", "pair"),
    ("QAN", "quarter (of a year)"),
    ("QTI", "quantity"),
    ("SAN", "half year (6 months)"),
    ("SEC", "second [unit of time]"),
    ("SET", "set"),
    ("SMI", "mile (statute mile)"),
    ("STN", "ton (US) or short ton (UK/US)"),
    ("TNE", "tonne (metric ton)"),
    ("WEE", "week"),
    ("WHR", "watt hour"),
    ("WTT", "watt"),
    ("XBA", "barrel"),
    ("XBE", "bundle"),
    ("XBG", "bag"),
    ("XBO", "bottle, non-protected, cylindrical"),
    ("XBX", "box"),
    ("XCA", "can, rectangular"),
    ("XCR", "crate"),
    ("XCS", "case"),
    ("XCT", "carton"),
    ("XDR", "drum"),
    ("XEN", "envelope"),
    ("XKI", "kit"),
    ("XPA", "packet"),
    ("XPK", "package"),
    ("XPX", "pallet"),
    ("XRO", "roll"),
    ("XSA", "sack"),
    ("XSH", "sachet"),
    ("XST", "sheet"),
    ("XTU", "tube"),
    ("YRD", "yard"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert!(is_known_unit_code("C62"));
        assert!(is_known_unit_code("H87"));
        assert!(is_known_unit_code("HUR"));
        assert!(is_known_unit_code("KGM"));
        assert!(is_known_unit_code("LTR"));
        assert!(is_known_unit_code("DAY"));
        assert!(is_known_unit_code("XPX"));
        assert_eq!(unit_name("MON"), Some("month"));
    }

    #[test]
    fn unknown_codes() {
        assert!(!is_known_unit_code("XYZ"));
        assert!(!is_known_unit_code(""));
        assert!(!is_known_unit_code("PIECE"));
        assert!(!is_known_unit_code("c62"));
    }

    #[test]
    fn list_is_sorted() {
        for window in UNIT_CODES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "unit codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }
}
