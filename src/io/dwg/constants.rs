//! Magic numbers of the R13-R2000 sequential container.

/// Section numbers used in the file-header directory.
pub mod section_locator {
    /// Header variables
    pub const HEADER: u8 = 0;
    /// Class table
    pub const CLASSES: u8 = 1;
    /// Object map
    pub const HANDLES: u8 = 2;
    /// Second header
    pub const SECOND_HEADER: u8 = 3;
    /// Measurement flag
    pub const MEASUREMENT: u8 = 4;
    /// Auxiliary header
    pub const AUX_HEADER: u8 = 5;

    /// Human readable section name, used in log output.
    pub fn name(number: u8) -> &'static str {
        match number {
            HEADER => "AcDb:Header",
            CLASSES => "AcDb:Classes",
            HANDLES => "AcDb:Handles",
            SECOND_HEADER => "AcDb:SecondHeader",
            MEASUREMENT => "AcDb:Template",
            AUX_HEADER => "AcDb:AuxHeader",
            _ => "AcDb:Unknown",
        }
    }
}

/// 16-byte markers framing the sections.
pub mod sentinels {
    pub const HEADER_START: [u8; 16] = [
        0xCF, 0x7B, 0x1F, 0x23, 0xFD, 0xDE, 0x38, 0xA9, 0x5F, 0x7C, 0x68, 0xB8, 0x4E, 0x6D,
        0x33, 0x5F,
    ];
    pub const HEADER_END: [u8; 16] = [
        0x30, 0x84, 0xE0, 0xDC, 0x02, 0x21, 0xC7, 0x56, 0xA0, 0x83, 0x97, 0x47, 0xB1, 0x92,
        0xCC, 0xA0,
    ];
    pub const CLASSES_START: [u8; 16] = [
        0x8D, 0xA1, 0xC4, 0xB8, 0xC4, 0xA9, 0xF8, 0xC5, 0xC0, 0xDC, 0xF4, 0x5F, 0xE7, 0xCF,
        0xB6, 0x8A,
    ];
    pub const CLASSES_END: [u8; 16] = [
        0x72, 0x5E, 0x3B, 0x47, 0x3B, 0x56, 0x07, 0x3A, 0x3F, 0x23, 0x0B, 0xA0, 0x18, 0x30,
        0x49, 0x75,
    ];
    pub const PREVIEW_START: [u8; 16] = [
        0x1F, 0x25, 0x6D, 0x07, 0xD4, 0x36, 0x28, 0x28, 0x9D, 0x57, 0xCA, 0x3F, 0x9D, 0x44,
        0x10, 0x2B,
    ];
    pub const PREVIEW_END: [u8; 16] = [
        0xE0, 0xDA, 0x92, 0xF8, 0x2B, 0xC9, 0xD7, 0xD7, 0x62, 0xA8, 0x35, 0xC0, 0x62, 0xBB,
        0xEF, 0xD4,
    ];
    pub const SECOND_HEADER_START: [u8; 16] = [
        0xD4, 0x7B, 0x21, 0xCE, 0x28, 0x93, 0x9F, 0xBF, 0x53, 0x24, 0x40, 0x09, 0x12, 0x3C,
        0xAA, 0x01,
    ];
    pub const SECOND_HEADER_END: [u8; 16] = [
        0x2B, 0x84, 0xDE, 0x31, 0xD7, 0x6C, 0x60, 0x40, 0xAC, 0xDB, 0xBF, 0xF6, 0xED, 0xC3,
        0x55, 0xFE,
    ];
    /// Closes the file header, right after the directory CRC
    pub const FILE_HEADER_END: [u8; 16] = [
        0x95, 0xA0, 0x4E, 0x28, 0x99, 0x82, 0x1A, 0xE5, 0x5E, 0x41, 0xE0, 0x5F, 0x9D, 0x3A,
        0x4D, 0x00,
    ];
}

/// CRC seed of every section-level checksum.
pub const CRC_SEED: u16 = 0xC0C1;

/// Number of sections written when the document does not say otherwise.
pub const DEFAULT_SECTION_COUNT: u32 = 6;

/// Bytes per directory record: RC number, RL address, RL size.
pub const DIRECTORY_RECORD_SIZE: usize = 9;

/// Offset of the first directory record in the file header.
pub const DIRECTORY_OFFSET: usize = 25;

/// Offset of the preview address in the file header.
pub const PREVIEW_ADDRESS_OFFSET: usize = 13;

/// XOR mask applied to the file-header CRC, by section count.
pub fn header_crc_mask(section_count: u32) -> Option<u16> {
    match section_count {
        3 => Some(0xA598),
        4 => Some(0x8101),
        5 => Some(0x3CC4),
        6 => Some(0x8461),
        _ => None,
    }
}

/// Object-map constants.
pub mod handle_section {
    /// A chunk is sealed once its size, prefix included, exceeds this.
    pub const CHUNK_SEAL_THRESHOLD: usize = 2030;
    /// Size field of the terminating empty chunk.
    pub const TERMINATOR: [u8; 2] = [0x00, 0x02];
}

/// Embedded entity thumbnails this large or larger are treated as corrupt.
pub const MAX_ENTITY_PICTURE_SIZE: u64 = 210_210;

/// Number of handler records a second header carries.
pub const SECOND_HEADER_HANDLERS: usize = 14;

/// Upper bound on handler records before the list is clamped.
pub const SECOND_HEADER_MAX_HANDLERS: usize = 16;

/// First type number of class-defined objects.
pub const FIRST_CLASS_TYPE: u16 = 500;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_crc_masks() {
        assert_eq!(header_crc_mask(3), Some(0xA598));
        assert_eq!(header_crc_mask(6), Some(0x8461));
        assert_eq!(header_crc_mask(2), None);
        assert_eq!(header_crc_mask(7), None);
    }

    #[test]
    fn test_sentinel_pairs_are_complements() {
        let pairs = [
            (sentinels::HEADER_START, sentinels::HEADER_END),
            (sentinels::CLASSES_START, sentinels::CLASSES_END),
            (sentinels::PREVIEW_START, sentinels::PREVIEW_END),
            (sentinels::SECOND_HEADER_START, sentinels::SECOND_HEADER_END),
        ];
        for (start, end) in pairs {
            for (a, b) in start.iter().zip(end.iter()) {
                assert_eq!(a ^ b, 0xFF);
            }
        }
    }

    #[test]
    fn test_section_names() {
        assert_eq!(section_locator::name(section_locator::HANDLES), "AcDb:Handles");
        assert_eq!(section_locator::name(42), "AcDb:Unknown");
    }
}
