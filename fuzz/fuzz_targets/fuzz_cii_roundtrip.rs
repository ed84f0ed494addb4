#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse, write, parse must not panic at any step.
        if let Ok(invoice) = einvoice::cii::from_cii_xml(s) {
            if let Ok(xml) = einvoice::cii::to_cii_xml(&invoice) {
                let _ = einvoice::cii::from_cii_xml(&xml);
            }
        }
    }
});
