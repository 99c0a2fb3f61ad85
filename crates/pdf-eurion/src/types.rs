use thiserror::Error;

#[derive(Error, Debug)]
pub enum EurionError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid color format '{0}'. Use a 6-character hex code (e.g., FFCCDD).")]
    InvalidColorFormat(String),
    #[error("Invalid color '{0}': only hexadecimal digits (0-9, A-F) are allowed")]
    InvalidColorDigit(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("No pages to overlay")]
    NoPages,
}

impl EurionError {
    /// Errors caused by user-supplied parameters rather than by the documents
    /// or the filesystem.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EurionError::InvalidColorFormat(_)
                | EurionError::InvalidColorDigit(_)
                | EurionError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EurionError>;

/// A flat RGB color with each channel in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels as 8-bit values, rounded to the nearest integer
    pub fn to_bytes(self) -> [u8; 3] {
        let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Uppercase 6-digit hex form without a leading `#`
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// A point in PDF user space (origin bottom-left, units in points)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Statistics about an overlay run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayStatistics {
    /// Total number of source pages (equals output pages)
    pub source_pages: usize,
    /// Motifs placed on each page, in page order
    pub motifs_per_page: Vec<usize>,
    /// Motifs placed across the whole document
    pub total_motifs: usize,
    /// Individual dots drawn across the whole document
    pub total_dots: usize,
}
