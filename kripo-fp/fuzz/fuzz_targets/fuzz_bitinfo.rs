#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = kripo_fp::BitDictionary::from_bytes(data);
});
