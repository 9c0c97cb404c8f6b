//! DWG container assembler.
//!
//! Writes a whole R13-R2000 file into one buffer, section after section:
//!
//! ```text
//! FILE HEADER | [AUX HEADER] | [PICTURE] | HEADER VARIABLES | CLASSES
//!   | OBJECTS | OBJECT MAP | [SECOND HEADER] | [MEASUREMENT]
//! ```
//!
//! then fills in the directory and the header CRC. Every address in the
//! directory and the object map is a byte offset into the final buffer.

use crate::document::{Document, SectionLocator};
use crate::error::{DxfError, Result};
use crate::io::dwg::constants::{section_locator, CRC_SEED};
use crate::io::dwg::handle_resolver::HandleResolver;
use crate::io::dwg::writer::classes_writer::DwgClassesWriter;
use crate::io::dwg::writer::configuration::EncodeConfiguration;
use crate::io::dwg::writer::file_header_writer::{section_count, DwgFileHeaderWriter};
use crate::io::dwg::writer::handle_writer::{sort_entries, DwgHandleWriter, ObjectMapEntry};
use crate::io::dwg::writer::header_writer::DwgHeaderWriter;
use crate::io::dwg::writer::object_writer::DwgObjectWriter;
use crate::io::dwg::writer::second_header_writer::DwgSecondHeaderWriter;
use crate::io::dwg::writer::stream_writer::IDwgStreamWriter;
use crate::io::dwg::writer::stream_writer_base::DwgStreamWriterBase;
use crate::notification::NotificationCollection;
use std::io::Write;
use tracing::{debug, info};

/// Bytes reserved per object before encoding starts.
const OBJECT_SIZE_ESTIMATE: usize = 64;

/// Result of one encode call.
#[derive(Debug)]
pub struct EncodedDwg {
    /// The complete file
    pub data: Vec<u8>,
    /// The directory as written to the file header
    pub sections: Vec<SectionLocator>,
    /// Objects in file order with their addresses
    pub object_map: Vec<ObjectMapEntry>,
    /// Everything that was recovered from along the way
    pub notifications: NotificationCollection,
}

impl EncodedDwg {
    /// Directory record of section `number`, if the file has one.
    pub fn section(&self, number: u8) -> Option<&SectionLocator> {
        self.sections.iter().find(|s| s.number == number)
    }
}

/// DWG file writer.
///
/// # Usage
/// ```no_run
/// use dwg_encoder::document::Document;
/// use dwg_encoder::io::dwg::writer::{DwgWriter, EncodeConfiguration};
/// use dwg_encoder::types::DxfVersion;
///
/// let doc = Document::new(DxfVersion::AC1015);
/// let encoded = DwgWriter::new(EncodeConfiguration::new(doc.version)).write(&doc).unwrap();
/// std::fs::write("output.dwg", &encoded.data).unwrap();
/// ```
pub struct DwgWriter {
    config: EncodeConfiguration,
}

impl DwgWriter {
    pub fn new(config: EncodeConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncodeConfiguration {
        &self.config
    }

    /// Encode `document` and copy the result into `sink`.
    pub fn write_to<W: Write>(&self, document: &Document, sink: &mut W) -> Result<EncodedDwg> {
        let encoded = self.write(document)?;
        sink.write_all(&encoded.data)?;
        sink.flush()?;
        Ok(encoded)
    }

    /// Encode `document` into a complete file.
    pub fn write(&self, document: &Document) -> Result<EncodedDwg> {
        let version = self.config.version;
        if !version.has_sequential_sections() {
            return Err(DxfError::UnsupportedVersion(version.to_string()));
        }
        let count = section_count(document)?;
        info!(
            version = %version,
            objects = document.objects.len(),
            classes = document.classes.len(),
            "encoding drawing"
        );

        let mut notifications = NotificationCollection::new();
        let resolver = HandleResolver::new(&document.objects);
        let mut writer =
            DwgStreamWriterBase::new(version).with_encoding(self.config.codepage_encoding);
        writer.reserve(Self::size_estimate(document))?;

        let mut directory: Vec<SectionLocator> = (0..count as u8)
            .map(|number| SectionLocator {
                number,
                address: 0,
                size: 0,
            })
            .collect();

        let file_header = DwgFileHeaderWriter::new(document, version, count);
        file_header.write(&mut writer)?;

        let header_writer = DwgHeaderWriter::new(document, &self.config, &resolver);
        if let Some(slot) = directory.get_mut(section_locator::AUX_HEADER as usize) {
            *slot = header_writer.write_aux_header(&mut writer, &mut notifications)?;
        }
        file_header.write_picture(&mut writer)?;

        directory[section_locator::HEADER as usize] =
            header_writer.write(&mut writer, &mut notifications)?;
        directory[section_locator::CLASSES as usize] =
            DwgClassesWriter::new(&document.classes).write(&mut writer)?;

        let object_map = self.write_objects(document, &mut writer, &mut notifications)?;
        directory[section_locator::HANDLES as usize] =
            DwgHandleWriter::new(&object_map).write(&mut writer)?;

        if count > 3 {
            let second_header = DwgSecondHeaderWriter::new(version, &document.second_header)
                .write(&mut writer, &directory, &mut notifications)?;
            directory[section_locator::SECOND_HEADER as usize] = second_header;
        }
        if count > 4 {
            directory[section_locator::MEASUREMENT as usize] =
                Self::write_measurement(&mut writer, document.measurement)?;
        }

        file_header.write_directory(&mut writer, &directory)?;

        let data = writer.into_data();
        info!(
            bytes = data.len(),
            notifications = notifications.len(),
            "drawing encoded"
        );
        Ok(EncodedDwg {
            data,
            sections: directory,
            object_map,
            notifications,
        })
    }

    /// Write every object in handle order as `MS size | body | CRC`,
    /// followed by `RS 0`.
    fn write_objects(
        &self,
        document: &Document,
        writer: &mut DwgStreamWriterBase,
        notifications: &mut NotificationCollection,
    ) -> Result<Vec<ObjectMapEntry>> {
        let mut entries: Vec<ObjectMapEntry> = document
            .objects
            .iter()
            .enumerate()
            .map(|(index, object)| ObjectMapEntry {
                handle: object.handle.value,
                address: 0,
                index,
            })
            .collect();
        sort_entries(&mut entries);

        let mut object_writer = DwgObjectWriter::new(document, &self.config);
        writer.write_spear_shift()?;
        let start = writer.position();

        for entry in &mut entries {
            let object = &document.objects[entry.index];
            let body = object_writer.encode_object(object)?;
            let size = u32::try_from(body.len())
                .map_err(|_| DxfError::InvalidObjectSize(body.len() as i64, object.handle.value))?;

            let address = writer.position();
            entry.address = address as u64;
            writer.write_modular_short(size)?;
            writer.write_bytes(&body)?;
            writer.write_crc(address, CRC_SEED)?;
        }
        writer.write_raw_short(0)?;

        debug!(
            address = start,
            size = writer.position() - start,
            objects = entries.len(),
            "wrote objects"
        );
        notifications.append(&mut object_writer.into_notifications());
        Ok(entries)
    }

    fn write_measurement(writer: &mut DwgStreamWriterBase, measurement: u32) -> Result<SectionLocator> {
        writer.write_spear_shift()?;
        let address = writer.position();
        writer.write_raw_ulong(measurement)?;
        Ok(SectionLocator {
            number: section_locator::MEASUREMENT,
            address: address as u32,
            size: 4,
        })
    }

    fn size_estimate(document: &Document) -> usize {
        let picture = document.picture.as_ref().map_or(0, Vec::len);
        let objects: usize = document
            .objects
            .iter()
            .map(|o| o.raw_len().max(OBJECT_SIZE_ESTIMATE))
            .sum();
        0x1000 + picture + objects
    }
}
