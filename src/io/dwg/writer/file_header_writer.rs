//! File header of the R13-R2000 container.
//!
//! Layout:
//! ```text
//! 0x00  version tag (6 bytes)
//! 0x06  5 zero bytes
//! 0x0B  RC maintenance version
//! 0x0C  RC 1
//! 0x0D  RL preview address
//! 0x11  RC dwg version
//! 0x12  RC maintenance release
//! 0x13  RS code page
//! 0x15  RL section count
//! 0x19  directory, 9 bytes per section: RC number, RL address, RL size
//!       RS header CRC
//!       FILE_HEADER_END
//! ```
//!
//! The directory and the CRC are reserved first and filled in once every
//! section has been written. The header CRC is the only little-endian one.

use crate::document::{Document, SectionLocator};
use crate::error::{DxfError, Result};
use crate::io::dwg::constants::{
    sentinels, DEFAULT_SECTION_COUNT, DIRECTORY_OFFSET, DIRECTORY_RECORD_SIZE,
    PREVIEW_ADDRESS_OFFSET,
};
use crate::io::dwg::crc::masked_header_crc;
use crate::io::dwg::writer::stream_writer::IDwgStreamWriter;
use crate::io::dwg::writer::stream_writer_base::DwgStreamWriterBase;
use crate::types::DxfVersion;
use tracing::debug;

/// Section count of `document`, checked against the supported range.
pub fn section_count(document: &Document) -> Result<u32> {
    let count = match document.num_sections {
        0 => DEFAULT_SECTION_COUNT,
        n => n,
    };
    if !(3..=6).contains(&count) {
        return Err(DxfError::InvalidFormat(format!(
            "section count {} is outside 3..=6",
            count
        )));
    }
    Ok(count)
}

/// Writer for the file header, the directory and the picture.
pub struct DwgFileHeaderWriter<'a> {
    document: &'a Document,
    version: DxfVersion,
    section_count: u32,
}

impl<'a> DwgFileHeaderWriter<'a> {
    pub fn new(document: &'a Document, version: DxfVersion, section_count: u32) -> Self {
        Self {
            document,
            version,
            section_count,
        }
    }

    /// Offset just past the directory, where the header CRC goes.
    pub fn directory_end(&self) -> usize {
        DIRECTORY_OFFSET + self.section_count as usize * DIRECTORY_RECORD_SIZE
    }

    /// Write the fixed fields, the reserved directory and CRC, and the end
    /// sentinel. `writer` must be empty.
    pub fn write(&self, writer: &mut DwgStreamWriterBase) -> Result<()> {
        writer.write_bytes(self.version.version_string().as_bytes())?;
        writer.write_bytes(&[0; 5])?;
        writer.write_byte(self.document.maintenance_version)?;
        writer.write_byte(1)?;
        writer.write_raw_long(0)?;
        writer.write_byte(self.version.dwg_version_byte())?;
        writer.write_byte(self.document.maintenance_version)?;
        writer.write_raw_ushort(self.document.codepage)?;
        writer.write_raw_long(self.section_count as i32)?;

        writer.write_bytes(&vec![0; self.section_count as usize * DIRECTORY_RECORD_SIZE])?;
        writer.write_raw_ushort(0)?;
        writer.write_sentinel(&sentinels::FILE_HEADER_END)?;

        debug!(
            version = %self.version,
            sections = self.section_count,
            "wrote file header"
        );
        Ok(())
    }

    /// Write the picture section if the document has one, pointing the
    /// preview address at it. Returns its address.
    pub fn write_picture(&self, writer: &mut DwgStreamWriterBase) -> Result<Option<u32>> {
        let Some(picture) = &self.document.picture else {
            return Ok(None);
        };
        writer.write_spear_shift()?;
        let address = writer.position();
        writer.write_sentinel(&sentinels::PREVIEW_START)?;
        if picture.is_empty() {
            writer.write_raw_long(5)?;
            writer.write_byte(0)?;
        } else {
            writer.write_bytes(picture)?;
        }
        writer.write_sentinel(&sentinels::PREVIEW_END)?;

        writer.with_position((PREVIEW_ADDRESS_OFFSET * 8) as u64, |w| {
            w.write_raw_long(address as i32)
        })?;
        debug!(address, size = picture.len(), "wrote picture");
        Ok(Some(address as u32))
    }

    /// Fill in the directory and the masked header CRC.
    pub fn write_directory(
        &self,
        writer: &mut DwgStreamWriterBase,
        directory: &[SectionLocator],
    ) -> Result<u16> {
        if directory.len() != self.section_count as usize {
            return Err(DxfError::InvalidFormat(format!(
                "directory holds {} records, the header reserves {}",
                directory.len(),
                self.section_count
            )));
        }

        writer.with_position((DIRECTORY_OFFSET * 8) as u64, |w| {
            for record in directory {
                w.write_byte(record.number)?;
                w.write_raw_long(record.address as i32)?;
                w.write_raw_long(record.size as i32)?;
            }
            Ok(())
        })?;

        let end = self.directory_end();
        let crc = masked_header_crc(&writer.data()[..end], self.section_count).ok_or_else(|| {
            DxfError::InvalidFormat(format!("no CRC mask for {} sections", self.section_count))
        })?;
        writer.with_position((end * 8) as u64, |w| w.write_raw_ushort(crc))?;
        Ok(crc)
    }
}
