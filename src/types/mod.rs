//! Core value types shared by the document model and the encoder

pub mod color;
pub mod handle;
pub mod vector;

pub use color::Color;
pub use handle::Handle;
pub use vector::{Vector2, Vector3};

use std::fmt;

/// DWG file format versions, named after the ASCII tag that opens the file.
///
/// Ordering follows release order, so `version >= DxfVersion::AC1015` reads
/// as "R2000 or later".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DxfVersion {
    /// R13
    AC1012,
    /// R14
    AC1014,
    /// R2000
    AC1015,
    /// R2004
    AC1018,
    /// R2007
    AC1021,
    /// R2010
    AC1024,
    /// R2013
    AC1027,
    /// R2018
    AC1032,
}

impl DxfVersion {
    /// All versions in release order.
    pub const ALL: [DxfVersion; 8] = [
        DxfVersion::AC1012,
        DxfVersion::AC1014,
        DxfVersion::AC1015,
        DxfVersion::AC1018,
        DxfVersion::AC1021,
        DxfVersion::AC1024,
        DxfVersion::AC1027,
        DxfVersion::AC1032,
    ];

    /// The 6-byte ASCII tag written at offset 0.
    pub const fn version_string(&self) -> &'static str {
        match self {
            DxfVersion::AC1012 => "AC1012",
            DxfVersion::AC1014 => "AC1014",
            DxfVersion::AC1015 => "AC1015",
            DxfVersion::AC1018 => "AC1018",
            DxfVersion::AC1021 => "AC1021",
            DxfVersion::AC1024 => "AC1024",
            DxfVersion::AC1027 => "AC1027",
            DxfVersion::AC1032 => "AC1032",
        }
    }

    /// Parse an ASCII version tag.
    pub fn from_version_string(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.version_string() == tag)
    }

    /// Release name (`R13`, `R2000`, ...).
    pub const fn release_name(&self) -> &'static str {
        match self {
            DxfVersion::AC1012 => "R13",
            DxfVersion::AC1014 => "R14",
            DxfVersion::AC1015 => "R2000",
            DxfVersion::AC1018 => "R2004",
            DxfVersion::AC1021 => "R2007",
            DxfVersion::AC1024 => "R2010",
            DxfVersion::AC1027 => "R2013",
            DxfVersion::AC1032 => "R2018",
        }
    }

    /// Whether the file uses the sequential R13-R2000 section layout
    /// (file header, locator table, sections one after another).
    pub fn has_sequential_sections(&self) -> bool {
        *self <= DxfVersion::AC1015
    }

    /// Application version byte stored in the file header.
    pub const fn dwg_version_byte(&self) -> u8 {
        match self {
            DxfVersion::AC1012 => 0x13,
            DxfVersion::AC1014 => 0x15,
            DxfVersion::AC1015 => 0x17,
            DxfVersion::AC1018 => 0x19,
            DxfVersion::AC1021 => 0x1B,
            DxfVersion::AC1024 => 0x1D,
            DxfVersion::AC1027 => 0x1F,
            DxfVersion::AC1032 => 0x21,
        }
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version_string(), self.release_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_ordering() {
        assert!(DxfVersion::AC1012 < DxfVersion::AC1014);
        assert!(DxfVersion::AC1015 < DxfVersion::AC1018);
        assert!(DxfVersion::AC1027 < DxfVersion::AC1032);
    }

    #[test]
    fn test_version_string_roundtrip() {
        for v in DxfVersion::ALL {
            assert_eq!(DxfVersion::from_version_string(v.version_string()), Some(v));
            assert_eq!(v.version_string().len(), 6);
        }
        assert_eq!(DxfVersion::from_version_string("AC1009"), None);
    }

    #[test]
    fn test_sequential_layout() {
        assert!(DxfVersion::AC1012.has_sequential_sections());
        assert!(DxfVersion::AC1015.has_sequential_sections());
        assert!(!DxfVersion::AC1018.has_sequential_sections());
    }

    #[test]
    fn test_display() {
        assert_eq!(DxfVersion::AC1015.to_string(), "AC1015 (R2000)");
    }
}
