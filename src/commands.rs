use std::fs::{self, File, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::{debug, warn};

use crate::error::{CoreError, Result};
use crate::formats::jpeg::jpeg_dimensions;
use crate::types::{FileInfo, ImageKind};

/// Size, kind and (for JPEG streams) pixel dimensions of `path`.
///
/// Dimensions are looked up for every regular file regardless of its name;
/// failing to find them never fails the call.
pub fn info(path: &Path) -> Result<FileInfo> {
    let metadata = existing_metadata(path)?;
    let dimensions = if metadata.is_file() {
        jpeg_dimensions(path)
    } else {
        None
    };

    Ok(FileInfo {
        path: path.to_path_buf(),
        size: metadata.len(),
        dimensions,
        kind: ImageKind::from_path(path),
    })
}

/// Standard-alphabet, padded base64 of the whole file.
pub fn encode_base64(path: &Path) -> Result<String> {
    existing_metadata(path)?;
    let data = fs::read(path)?;
    debug!(path = %path.display(), bytes = data.len(), "encoding");
    Ok(STANDARD.encode(&data))
}

/// Copies `src` to `dst` byte for byte. No resizing takes place.
///
/// If `dst` is an existing directory the copy keeps the source file name
/// inside it. Permission bits travel with the copy and the source
/// modification time is applied to the destination when the platform
/// allows it. Returns the number of bytes copied.
pub fn thumbnail(src: &Path, dst: &Path) -> Result<u64> {
    let src_metadata = existing_metadata(src)?;
    let target = copy_target(src, dst)?;

    if is_same_file(src, &src_metadata, &target) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} and {} are the same file",
                src.display(),
                target.display()
            ),
        )
        .into());
    }

    let bytes = fs::copy(src, &target)?;
    if let Err(err) = preserve_modified(src, &target) {
        warn!(path = %target.display(), %err, "could not carry over modification time");
    }

    tracing::info!(src = %src.display(), dst = %target.display(), bytes, "copied");
    Ok(bytes)
}

fn existing_metadata(path: &Path) -> Result<Metadata> {
    fs::metadata(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
        _ => CoreError::Io(err),
    })
}

fn copy_target(src: &Path, dst: &Path) -> Result<PathBuf> {
    if !dst.is_dir() {
        return Ok(dst.to_path_buf());
    }
    match src.file_name() {
        Some(name) => Ok(dst.join(name)),
        None => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", src.display()),
        )
        .into()),
    }
}

/// Hard links and symlinks to the source count as the same file.
#[cfg(unix)]
fn is_same_file(_src: &Path, src_metadata: &Metadata, dst: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match fs::metadata(dst) {
        Ok(dst_metadata) => {
            src_metadata.dev() == dst_metadata.dev() && src_metadata.ino() == dst_metadata.ino()
        }
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(src: &Path, _src_metadata: &Metadata, dst: &Path) -> bool {
    match (fs::canonicalize(src), fs::canonicalize(dst)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn preserve_modified(src: &Path, dst: &Path) -> io::Result<()> {
    let modified = fs::metadata(src)?.modified()?;
    let file = File::options().write(true).open(dst)?;
    file.set_modified(modified)
}
