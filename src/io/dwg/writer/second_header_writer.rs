//! Second header (section 3).
//!
//! A partial copy of the file header kept after the object map:
//!
//! ```text
//! SECOND_HEADER_START | RL size | BL address | 12 version bytes | 4 B | 4 RC
//!   | (RC number, BL address, BL size) per directory record
//!   | BS handler count | (RC size, RC number, RC * size) per handler
//!   | CRC | [R14: RL, RL] | SECOND_HEADER_END
//! ```

use crate::document::{SecondHeader, SectionLocator};
use crate::error::{DxfError, Result};
use crate::io::dwg::constants::{
    section_locator, sentinels, CRC_SEED, SECOND_HEADER_HANDLERS, SECOND_HEADER_MAX_HANDLERS,
};
use crate::io::dwg::writer::stream_writer::IDwgStreamWriter;
use crate::io::dwg::writer::stream_writer_base::DwgStreamWriterBase;
use crate::notification::NotificationCollection;
use crate::types::DxfVersion;
use tracing::debug;

/// Writer for the second header.
pub struct DwgSecondHeaderWriter<'a> {
    version: DxfVersion,
    header: &'a SecondHeader,
}

impl<'a> DwgSecondHeaderWriter<'a> {
    pub fn new(version: DxfVersion, header: &'a SecondHeader) -> Self {
        Self { version, header }
    }

    /// Write the section at the current position of `writer`.
    ///
    /// `directory` is copied as it stands; records of sections that are not
    /// written yet carry zeros.
    pub fn write(
        &self,
        writer: &mut DwgStreamWriterBase,
        directory: &[SectionLocator],
        notifications: &mut NotificationCollection,
    ) -> Result<SectionLocator> {
        writer.write_spear_shift()?;
        let address = writer.position();
        writer.write_sentinel(&sentinels::SECOND_HEADER_START)?;

        let size_field = writer.position();
        writer.write_raw_long(0)?;

        if let Some(recorded) = self.header.address {
            if recorded as usize != address {
                notifications.warn(format!(
                    "second header address {:#X} does not match its offset {:#X}, corrected",
                    recorded, address
                ));
            }
        }
        writer.write_bit_long(address as i32)?;

        writer.write_bytes(&self.version_bytes())?;
        for bit in self.header.null_bits {
            writer.write_bit(bit)?;
        }
        writer.write_bytes(&self.header.unknown_rc4)?;

        for record in directory {
            writer.write_byte(record.number)?;
            writer.write_bit_long(record.address as i32)?;
            writer.write_bit_long(record.size as i32)?;
        }

        self.write_handlers(writer, notifications)?;

        let adjustment = if writer.bit_shift() != 0 { 3 } else { 4 };
        let body = writer.position() - size_field - adjustment;
        writer.with_position((size_field * 8) as u64, |w| w.write_raw_long(body as i32))?;
        writer.write_crc(size_field, CRC_SEED)?;

        if self.version == DxfVersion::AC1014 {
            for junk in self.header.junk_r14 {
                writer.write_raw_ulong(junk)?;
            }
        }
        writer.write_sentinel(&sentinels::SECOND_HEADER_END)?;

        let size = (writer.position() - address) as u32;
        debug!(address, size, "wrote second header");
        Ok(SectionLocator {
            number: section_locator::SECOND_HEADER,
            address: address as u32,
            size,
        })
    }

    /// The version tag, zero padded to 11 bytes, then a newline.
    fn version_bytes(&self) -> [u8; 12] {
        let mut bytes = [0u8; 12];
        let tag = self.version.version_string().as_bytes();
        bytes[..tag.len()].copy_from_slice(tag);
        bytes[11] = b'\n';
        bytes
    }

    fn write_handlers(
        &self,
        writer: &mut DwgStreamWriterBase,
        notifications: &mut NotificationCollection,
    ) -> Result<()> {
        let mut handlers = self.header.handlers.as_slice();
        if handlers.len() != SECOND_HEADER_HANDLERS {
            notifications.error(format!(
                "second header has {} handlers instead of {}",
                handlers.len(),
                SECOND_HEADER_HANDLERS
            ));
            if handlers.len() > SECOND_HEADER_MAX_HANDLERS {
                handlers = &handlers[..SECOND_HEADER_HANDLERS];
            }
        }

        writer.write_bit_short(handlers.len() as i16)?;
        for handler in handlers {
            let size = u8::try_from(handler.data.len()).map_err(|_| {
                DxfError::InvalidFormat(format!(
                    "second header handler {} holds {} bytes, at most 255 fit",
                    handler.number,
                    handler.data.len()
                ))
            })?;
            writer.write_byte(size)?;
            writer.write_byte(handler.number)?;
            writer.write_bytes(&handler.data)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SecondHeaderHandler;
    use crate::io::dwg::crc::crc8;
    use crate::io::dwg::reader::DwgStreamReaderBase;
    use crate::notification::NotificationType;

    fn directory() -> Vec<SectionLocator> {
        (0..6)
            .map(|n| SectionLocator {
                number: n,
                address: 0x100 * n as u32,
                size: 0x10,
            })
            .collect()
    }

    fn write(
        version: DxfVersion,
        header: &SecondHeader,
        offset: usize,
    ) -> (Vec<u8>, SectionLocator, NotificationCollection) {
        let mut writer = DwgStreamWriterBase::new(version);
        writer.write_bytes(&vec![0xEE; offset]).unwrap();
        let mut notes = NotificationCollection::new();
        let locator = DwgSecondHeaderWriter::new(version, header)
            .write(&mut writer, &directory(), &mut notes)
            .unwrap();
        (writer.into_data(), locator, notes)
    }

    #[test]
    fn test_layout_r2000() {
        let (data, locator, notes) = write(DxfVersion::AC1015, &SecondHeader::default(), 0x40);
        assert!(notes.is_empty());
        assert_eq!(locator.address, 0x40);
        assert_eq!(locator.size as usize, data.len() - 0x40);
        assert_eq!(&data[0x40..0x50], &sentinels::SECOND_HEADER_START);
        assert_eq!(&data[data.len() - 16..], &sentinels::SECOND_HEADER_END);

        let mut r = DwgStreamReaderBase::new_at(data.clone(), DxfVersion::AC1015, 0x50);
        let body = r.read_raw_long().unwrap() as usize;
        assert_eq!(r.read_bit_long().unwrap(), 0x40);
        let version = r.read_bytes(12).unwrap();
        assert_eq!(&version[..6], b"AC1015");
        assert_eq!(version[11], b'\n');
        for _ in 0..4 {
            assert!(!r.read_bit().unwrap());
        }
        assert_eq!(r.read_bytes(4).unwrap(), vec![0x18, 0x78, 0x01, 0x04]);
        for n in 0..6u8 {
            assert_eq!(r.read_byte().unwrap(), n);
            assert_eq!(r.read_bit_long().unwrap(), 0x100 * n as i32);
            assert_eq!(r.read_bit_long().unwrap(), 0x10);
        }
        assert_eq!(r.read_bit_short().unwrap(), 14);

        // the CRC follows the body and covers the size field
        let crc_at = 0x54 + body;
        let crc = crc8(CRC_SEED, &data[0x50..crc_at]);
        assert_eq!(&data[crc_at..crc_at + 2], &crc.to_be_bytes());
        assert_eq!(crc_at + 2 + 16, data.len());
    }

    #[test]
    fn test_r14_junk_longs() {
        let mut header = SecondHeader::default();
        header.junk_r14 = [0x11223344, 0x55667788];
        let (data, _, _) = write(DxfVersion::AC1014, &header, 0);
        let junk = &data[data.len() - 24..data.len() - 16];
        assert_eq!(junk, &[0x44, 0x33, 0x22, 0x11, 0x88, 0x77, 0x66, 0x55]);
    }

    #[test]
    fn test_address_mismatch_is_corrected() {
        let mut header = SecondHeader::default();
        header.address = Some(0x999);
        let (data, _, notes) = write(DxfVersion::AC1015, &header, 0x20);
        assert!(notes.has_type(NotificationType::Warning));
        let mut r = DwgStreamReaderBase::new_at(data, DxfVersion::AC1015, 0x34);
        assert_eq!(r.read_bit_long().unwrap(), 0x20);
    }

    #[test]
    fn test_handler_count_clamped() {
        let mut header = SecondHeader::default();
        header.handlers = (0..20)
            .map(|n| SecondHeaderHandler {
                number: n,
                data: vec![n],
            })
            .collect();
        let (data, _, notes) = write(DxfVersion::AC1015, &header, 0);
        assert!(notes.has_type(NotificationType::Error));

        let mut with_14 = SecondHeader::default();
        with_14.handlers = header.handlers[..14].to_vec();
        let (expected, _, _) = write(DxfVersion::AC1015, &with_14, 0);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_fifteen_handlers_are_kept() {
        let mut header = SecondHeader::default();
        header.handlers.push(SecondHeaderHandler {
            number: 14,
            data: vec![0],
        });
        let (data, _, notes) = write(DxfVersion::AC1015, &header, 0);
        assert!(notes.contains("15 handlers"));
        let (fourteen, _, _) = write(DxfVersion::AC1015, &SecondHeader::default(), 0);
        assert_eq!(data.len(), fourteen.len() + 3);
    }
}
