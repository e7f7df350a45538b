//! Streaming JPEG marker-segment scanner.
//!
//! Only the frame size is extracted. The scanner reads strictly forward and
//! never seeks, so any [`Read`] works, including pipes.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::types::Dimensions;

pub const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
pub const MARKER_PREFIX: u8 = 0xFF;
pub const SOF0_BASELINE: u8 = 0xC0;
pub const SOF2_PROGRESSIVE: u8 = 0xC2;

/// Segment length (2 bytes) and sample precision (1 byte) ahead of the frame size.
const SOF_HEADER_SKIP: u64 = 3;
/// The length field counts its own two bytes.
const SEGMENT_LENGTH_SIZE: u16 = 2;

#[inline]
pub fn is_start_of_frame(marker: u8) -> bool {
    matches!(marker, SOF0_BASELINE | SOF2_PROGRESSIVE)
}

/// Walks marker segments until a baseline or progressive frame header.
///
/// The first two bytes are taken as SOI without checking them. Running out
/// of input surfaces as [`CoreError::Io`] with `UnexpectedEof`; a byte where
/// a marker prefix should be, or a segment length below two, surfaces as
/// [`CoreError::MalformedImage`].
pub fn read_dimensions<R: Read>(mut reader: R) -> Result<Dimensions> {
    let mut soi = [0u8; 2];
    reader.read_exact(&mut soi)?;

    loop {
        let mut marker = [0u8; 2];
        reader.read_exact(&mut marker)?;

        if marker[0] != MARKER_PREFIX {
            return Err(CoreError::MalformedImage(format!(
                "expected marker prefix 0xFF, found 0x{:02X}",
                marker[0]
            )));
        }

        if is_start_of_frame(marker[1]) {
            skip(&mut reader, SOF_HEADER_SKIP)?;
            let height = read_u16_be(&mut reader)?;
            let width = read_u16_be(&mut reader)?;
            return Ok(Dimensions::new(width, height));
        }

        let seg_len = read_u16_be(&mut reader)?;
        if seg_len < SEGMENT_LENGTH_SIZE {
            return Err(CoreError::MalformedImage(format!(
                "segment 0x{:02X} declares length {}",
                marker[1], seg_len
            )));
        }
        skip(&mut reader, u64::from(seg_len - SEGMENT_LENGTH_SIZE))?;
    }
}

/// Like [`read_dimensions`], with every failure collapsed into `None`.
///
/// Callers cannot tell a truncated file from a non-JPEG or a JPEG without a
/// supported frame; the reason is only visible in debug logs.
pub fn jpeg_dimensions_from_reader<R: Read>(reader: R) -> Option<Dimensions> {
    match read_dimensions(reader) {
        Ok(dimensions) => {
            debug!(%dimensions, "found start-of-frame");
            Some(dimensions)
        }
        Err(err) => {
            debug!(%err, "dimensions unknown");
            None
        }
    }
}

pub fn jpeg_dimensions(path: &Path) -> Option<Dimensions> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!(path = %path.display(), %err, "cannot open file for dimension scan");
            return None;
        }
    };
    jpeg_dimensions_from_reader(BufReader::new(file))
}

fn read_u16_be<R: Read>(reader: &mut R) -> io::Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

/// Discards `count` bytes without buffering them.
fn skip<R: Read>(reader: &mut R, count: u64) -> io::Result<()> {
    let skipped = io::copy(&mut reader.by_ref().take(count), &mut io::sink())?;
    if skipped < count {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("segment payload ends after {skipped} of {count} bytes"),
        ));
    }
    Ok(())
}
