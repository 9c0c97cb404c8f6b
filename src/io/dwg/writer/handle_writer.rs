//! Object map section (section 2).
//!
//! The map is a list of chunks. Each chunk is
//!
//! ```text
//! RS size (big-endian, counts itself) | (MC handle delta, MC address delta)* | CRC
//! ```
//!
//! Deltas restart from zero in every chunk. A chunk is sealed as soon as it
//! grows past `CHUNK_SEAL_THRESHOLD` bytes, and the map ends with an empty
//! chunk of size 2.

use crate::document::SectionLocator;
use crate::error::Result;
use crate::io::dwg::constants::{handle_section, section_locator, CRC_SEED};
use crate::io::dwg::writer::stream_writer::IDwgStreamWriter;
use crate::io::dwg::writer::stream_writer_base::DwgStreamWriterBase;
use tracing::debug;

/// Where one object landed in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectMapEntry {
    /// Handle value of the object
    pub handle: u64,
    /// Byte offset of the object's MS size field
    pub address: u64,
    /// Index of the object in `Document::objects`
    pub index: usize,
}

/// Sort `entries` by handle, keeping document order among equal handles.
pub fn sort_entries(entries: &mut [ObjectMapEntry]) {
    entries.sort_by_key(|e| e.handle);
}

/// Writer for the object map.
pub struct DwgHandleWriter<'a> {
    entries: &'a [ObjectMapEntry],
}

impl<'a> DwgHandleWriter<'a> {
    /// `entries` must already be in ascending handle order.
    pub fn new(entries: &'a [ObjectMapEntry]) -> Self {
        Self { entries }
    }

    /// Write the map at the current position of `writer`.
    pub fn write(&self, writer: &mut DwgStreamWriterBase) -> Result<SectionLocator> {
        writer.write_spear_shift()?;
        let address = writer.position();

        let mut chunk: Option<usize> = None;
        let mut chunks = 0usize;
        let mut last_handle = 0u64;
        let mut last_address = 0i64;

        for entry in self.entries {
            let start = match chunk {
                Some(start) => start,
                None => {
                    let start = writer.position();
                    writer.write_bytes(&[0, 0])?;
                    last_handle = 0;
                    last_address = 0;
                    chunk = Some(start);
                    start
                }
            };

            writer.write_modular_char(entry.handle - last_handle)?;
            writer.write_signed_modular_char(entry.address as i64 - last_address)?;
            last_handle = entry.handle;
            last_address = entry.address as i64;

            if writer.position() - start > handle_section::CHUNK_SEAL_THRESHOLD {
                Self::seal(writer, start)?;
                chunks += 1;
                chunk = None;
            }
        }
        if let Some(start) = chunk {
            Self::seal(writer, start)?;
            chunks += 1;
        }

        let terminator = writer.position();
        writer.write_bytes(&handle_section::TERMINATOR)?;
        writer.write_crc(terminator, CRC_SEED)?;

        let size = (writer.position() - address) as u32;
        debug!(address, size, chunks, entries = self.entries.len(), "wrote object map");
        Ok(SectionLocator {
            number: section_locator::HANDLES,
            address: address as u32,
            size,
        })
    }

    fn seal(writer: &mut DwgStreamWriterBase, start: usize) -> Result<()> {
        let size = (writer.position() - start) as u16;
        writer.with_position((start * 8) as u64, |w| w.write_raw_ushort_be(size))?;
        writer.write_crc(start, CRC_SEED)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dwg::crc::crc8;
    use crate::io::dwg::reader::DwgStreamReaderBase;
    use crate::types::DxfVersion;

    fn entry(handle: u64, address: u64) -> ObjectMapEntry {
        ObjectMapEntry {
            handle,
            address,
            index: 0,
        }
    }

    fn write(entries: &[ObjectMapEntry]) -> Vec<u8> {
        let mut writer = DwgStreamWriterBase::new(DxfVersion::AC1015);
        DwgHandleWriter::new(entries).write(&mut writer).unwrap();
        writer.into_data()
    }

    #[test]
    fn test_stable_sort() {
        let mut entries = vec![
            ObjectMapEntry { handle: 9, address: 0, index: 0 },
            ObjectMapEntry { handle: 3, address: 0, index: 1 },
            ObjectMapEntry { handle: 9, address: 0, index: 2 },
        ];
        sort_entries(&mut entries);
        let order: Vec<_> = entries.iter().map(|e| e.index).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn test_empty_map_is_only_the_terminator() {
        let data = write(&[]);
        let crc = crc8(CRC_SEED, &[0x00, 0x02]);
        assert_eq!(data, vec![0x00, 0x02, (crc >> 8) as u8, crc as u8]);
    }

    #[test]
    fn test_single_chunk() {
        let data = write(&[entry(1, 0x100), entry(2, 0xF0), entry(0x200, 0x300)]);
        // size 2 + (1,2) + (1,1) + (2,2) = 11
        assert_eq!(&data[..2], &[0x00, 0x0B]);
        let mut r = DwgStreamReaderBase::new_at(data.clone(), DxfVersion::AC1015, 2);
        assert_eq!(r.read_modular_char().unwrap(), 1);
        assert_eq!(r.read_signed_modular_char().unwrap(), 0x100);
        assert_eq!(r.read_modular_char().unwrap(), 1);
        assert_eq!(r.read_signed_modular_char().unwrap(), -0x10);
        assert_eq!(r.read_modular_char().unwrap(), 0x1FE);
        assert_eq!(r.read_signed_modular_char().unwrap(), 0x210);
        let crc = crc8(CRC_SEED, &data[..11]);
        assert_eq!(&data[11..13], &crc.to_be_bytes());
        assert_eq!(&data[13..15], &handle_section::TERMINATOR);
    }

    #[test]
    fn test_chunks_seal_past_threshold() {
        // each entry is 1 + 2 bytes
        let entries: Vec<_> = (1..=1000).map(|h| entry(h, h * 100)).collect();
        let data = write(&entries);

        let first = u16::from_be_bytes([data[0], data[1]]) as usize;
        assert!(first > handle_section::CHUNK_SEAL_THRESHOLD);
        assert!(first <= handle_section::CHUNK_SEAL_THRESHOLD + 3);
        let crc = crc8(CRC_SEED, &data[..first]);
        assert_eq!(&data[first..first + 2], &crc.to_be_bytes());

        // the second chunk restarts its deltas from zero
        let mut r = DwgStreamReaderBase::new_at(data, DxfVersion::AC1015, first + 4);
        let handle = r.read_modular_char().unwrap();
        let address = r.read_signed_modular_char().unwrap();
        assert_eq!(address, handle as i64 * 100);
        assert!(handle > 600);
    }
}
