#![allow(dead_code)]

/// SOI, a JFIF APP0 segment, then a frame header with the given SOF marker.
pub fn jpeg_with_frame(sof: u8, width: u16, height: u16) -> Vec<u8> {
    let mut jpeg = Vec::new();
    jpeg.extend_from_slice(&[0xFF, 0xD8]);
    jpeg.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
    jpeg.extend_from_slice(b"JFIF\x00\x01\x01\x00\x00\x48\x00\x48\x00\x00");
    jpeg.extend_from_slice(&[0xFF, sof, 0x00, 0x11, 0x08]);
    jpeg.extend_from_slice(&height.to_be_bytes());
    jpeg.extend_from_slice(&width.to_be_bytes());
    jpeg.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

pub fn baseline_jpeg(width: u16, height: u16) -> Vec<u8> {
    jpeg_with_frame(0xC0, width, height)
}
