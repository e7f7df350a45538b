use std::fmt;
use std::path::{Path, PathBuf};

const MB: f64 = 1024.0 * 1024.0;

/// Pixel size declared by a JPEG Start-Of-Frame segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// A frame header may legally declare a zero height (defined later by DNL).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Image,
}

impl ImageKind {
    /// Classifies by name only: `.jpg` / `.jpeg` in any case.
    pub fn from_path(path: &Path) -> Self {
        let name = path.to_string_lossy().to_lowercase();
        if name.ends_with(".jpg") || name.ends_with(".jpeg") {
            ImageKind::Jpeg
        } else {
            ImageKind::Image
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => "JPEG",
            ImageKind::Image => "image",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything `info` reports about a single file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
    pub dimensions: Option<Dimensions>,
    pub kind: ImageKind,
}

impl FileInfo {
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / MB
    }

    /// Dimensions worth printing; zero-sized frames are treated as unknown.
    pub fn known_dimensions(&self) -> Option<Dimensions> {
        self.dimensions.filter(|d| !d.is_empty())
    }
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "path: {}", self.path.display())?;
        writeln!(f, "size: {} bytes ({:.1} MB)", self.size, self.size_mb())?;
        if let Some(dimensions) = self.known_dimensions() {
            writeln!(f, "dimensions: {}", dimensions)?;
        }
        write!(f, "type: {}", self.kind)
    }
}
