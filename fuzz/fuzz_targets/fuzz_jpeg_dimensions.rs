#![no_main]

use imgutil::formats::jpeg::{jpeg_dimensions_from_reader, read_dimensions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let scanned = read_dimensions(data).ok();
    assert_eq!(scanned, jpeg_dimensions_from_reader(data));
});
