//! Version gates for the object header.
//!
//! The field tables carry their own version ranges; only the parts of the
//! record that sit outside any table (bitsize placement, thumbnail size
//! width) branch on these flags.

use crate::types::DxfVersion;

/// Flags derived once per object writer, so gates read as
/// `if self.sio.r2000_plus { ... }`.
#[derive(Debug, Clone, Copy)]
pub struct SectionIO {
    version: DxfVersion,

    /// R13 and R14: the bitsize follows the EED
    pub r13_14_only: bool,
    /// R2000 and later: the bitsize follows the type
    pub r2000_plus: bool,
    /// R2007 and later: entity thumbnails carry a 64-bit size
    pub r2007_plus: bool,
}

impl SectionIO {
    pub fn new(version: DxfVersion) -> Self {
        Self {
            r13_14_only: version <= DxfVersion::AC1014,
            r2000_plus: version >= DxfVersion::AC1015,
            r2007_plus: version >= DxfVersion::AC1021,
            version,
        }
    }

    pub fn version(&self) -> DxfVersion {
        self.version
    }

    /// Whether the object carries a bitsize in front of its handle.
    pub fn bitsize_before_handle(&self) -> bool {
        self.r2000_plus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitsize_placement_is_exclusive() {
        for version in [DxfVersion::AC1012, DxfVersion::AC1014, DxfVersion::AC1015, DxfVersion::AC1032] {
            let sio = SectionIO::new(version);
            assert_ne!(sio.r13_14_only, sio.bitsize_before_handle(), "{}", version);
        }
    }

    #[test]
    fn test_r14_and_r2000() {
        let r14 = SectionIO::new(DxfVersion::AC1014);
        assert!(r14.r13_14_only && !r14.r2000_plus && !r14.r2007_plus);

        let r2000 = SectionIO::new(DxfVersion::AC1015);
        assert!(!r2000.r13_14_only && r2000.r2000_plus && !r2000.r2007_plus);
        assert_eq!(r2000.version(), DxfVersion::AC1015);
    }

    #[test]
    fn test_wide_thumbnail_size() {
        assert!(!SectionIO::new(DxfVersion::AC1018).r2007_plus);
        assert!(SectionIO::new(DxfVersion::AC1021).r2007_plus);
    }
}
