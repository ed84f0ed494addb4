#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mut invoice) = einvoice::ubl::from_ubl_xml(s) {
            let _ = invoice.validate();
        }
    }
});
