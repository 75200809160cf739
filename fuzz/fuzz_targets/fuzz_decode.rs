#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, in either row policy
    let _ = zenbmpv4::decode_bmp(data, enough::Unstoppable);
    let _ = zenbmpv4::DecodeRequest::new(data)
        .with_permissiveness(zenbmpv4::BmpPermissiveness::Strict)
        .decode(enough::Unstoppable);
    let _ = zenbmpv4::ImageInfo::from_bytes(data);
});
