#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Raw bytes, not only UTF-8: detection must cope with anything.
    let _ = einvoice::parse_bytes(data);
});
