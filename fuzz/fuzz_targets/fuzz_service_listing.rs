#![no_main]

use libfuzzer_sys::fuzz_target;
use netdisable::adapters::networksetup::parse_service_listing;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let listing = parse_service_listing(&text);

    for entry in listing.entries() {
        assert!(!entry.service_name().as_str().is_empty());
        assert!(!entry.hardware_port().as_str().is_empty());
        assert!(!entry.device().as_str().is_empty());
        assert!(!entry.service_name().as_str().contains('\n'));
    }
    assert_eq!(listing.disable_plan().len(), listing.len());
});
