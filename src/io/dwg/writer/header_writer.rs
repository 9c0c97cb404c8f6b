//! Header variables section (section 0) and the auxiliary header
//! (section 5).
//!
//! Both are walked from static layouts over the document's field maps,
//! with a few values derived from the document laid over them: the handle
//! seed and, in the auxiliary header, the version bytes.

use crate::document::{Document, FieldMap, FieldValue, ObjectRef, SectionLocator};
use crate::error::Result;
use crate::io::dwg::constants::{section_locator, sentinels, CRC_SEED};
use crate::io::dwg::handle_resolver::HandleResolver;
use crate::io::dwg::schema::tables::header::{AUX_HEADER, HEADER_VARIABLES};
use crate::io::dwg::schema::{FieldSource, FieldWalker, Pass};
use crate::io::dwg::writer::configuration::EncodeConfiguration;
use crate::io::dwg::writer::stream_writer::IDwgStreamWriter;
use crate::io::dwg::writer::stream_writer_base::DwgStreamWriterBase;
use crate::notification::NotificationCollection;
use std::borrow::Cow;
use tracing::debug;

/// Field map with derived values laid over it.
///
/// `derived` wins for the names in `forced`; for every other name it only
/// fills in what `base` lacks.
pub(crate) struct Overlay<'a> {
    base: &'a FieldMap,
    derived: FieldMap,
    forced: &'static [&'static str],
}

impl<'a> Overlay<'a> {
    pub(crate) fn new(base: &'a FieldMap, derived: FieldMap, forced: &'static [&'static str]) -> Self {
        Self {
            base,
            derived,
            forced,
        }
    }
}

impl FieldSource for Overlay<'_> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        let derived = self.derived.get(name).map(Cow::Borrowed);
        if self.forced.contains(&name) {
            return derived.or_else(|| self.base.get(name).map(Cow::Borrowed));
        }
        self.base.get(name).map(Cow::Borrowed).or(derived)
    }
}

/// First free handle value of `document`.
pub(crate) fn next_handle(document: &Document) -> u64 {
    document.max_handle() + 1
}

/// Write `start`, an RL size placeholder, the body, the CRC and `end`.
///
/// The size counts the body bytes, a trailing partial byte included. The
/// CRC covers the size field and the body. Returns the section address and
/// its length from the start sentinel to the end of the end sentinel.
pub(crate) fn write_framed_section<F>(
    writer: &mut DwgStreamWriterBase,
    start: &[u8; 16],
    end: &[u8; 16],
    body: F,
) -> Result<(u32, u32)>
where
    F: FnOnce(&mut DwgStreamWriterBase) -> Result<()>,
{
    writer.write_spear_shift()?;
    let address = writer.position();
    writer.write_sentinel(start)?;

    let size_field = writer.position();
    writer.write_raw_long(0)?;
    body(writer)?;

    let adjustment = if writer.bit_shift() != 0 { 3 } else { 4 };
    let size = writer.position() - size_field - adjustment;
    writer.with_position((size_field * 8) as u64, |w| w.write_raw_long(size as i32))?;
    writer.write_crc(size_field, CRC_SEED)?;

    writer.write_sentinel(end)?;
    Ok((address as u32, (writer.position() - address) as u32))
}

/// Writes the header variables and auxiliary header sections.
pub struct DwgHeaderWriter<'a> {
    document: &'a Document,
    config: &'a EncodeConfiguration,
    resolver: &'a HandleResolver<'a>,
}

impl<'a> DwgHeaderWriter<'a> {
    pub fn new(
        document: &'a Document,
        config: &'a EncodeConfiguration,
        resolver: &'a HandleResolver<'a>,
    ) -> Self {
        Self {
            document,
            config,
            resolver,
        }
    }

    /// Write the header variables section at the current position.
    pub fn write(
        &self,
        writer: &mut DwgStreamWriterBase,
        notifications: &mut NotificationCollection,
    ) -> Result<SectionLocator> {
        let derived = FieldMap::from_iter([(
            "handseed".to_string(),
            FieldValue::Ref(ObjectRef::handle(0, next_handle(self.document))),
        )]);
        let source = Overlay::new(&self.document.header, derived, &[]);

        let (address, size) = write_framed_section(
            writer,
            &sentinels::HEADER_START,
            &sentinels::HEADER_END,
            |w| {
                let mut walker =
                    FieldWalker::new(w, self.config, self.resolver, notifications, "HEADER", 0);
                walker.walk(HEADER_VARIABLES, &source, Pass::Inline)
            },
        )?;
        debug!(address, size, "wrote header variables");
        Ok(SectionLocator {
            number: section_locator::HEADER,
            address,
            size,
        })
    }

    /// Write the auxiliary header at the current position.
    ///
    /// The version fields always describe the version being written.
    pub fn write_aux_header(
        &self,
        writer: &mut DwgStreamWriterBase,
        notifications: &mut NotificationCollection,
    ) -> Result<SectionLocator> {
        writer.write_spear_shift()?;
        let address = writer.position();

        let dwg_version = FieldValue::Int(self.config.version.dwg_version_byte() as i64);
        let maint_version = FieldValue::Int(self.document.maintenance_version as i64);
        let derived = FieldMap::from_iter([
            ("dwg_version".to_string(), dwg_version.clone()),
            ("dwg_version_1".to_string(), dwg_version.clone()),
            ("dwg_version_2".to_string(), dwg_version),
            ("maint_version".to_string(), maint_version.clone()),
            ("maint_version_1".to_string(), maint_version.clone()),
            ("maint_version_2".to_string(), maint_version),
            (
                "handseed".to_string(),
                FieldValue::Int(next_handle(self.document) as i64),
            ),
        ]);
        let source = Overlay::new(
            &self.document.aux_header,
            derived,
            &[
                "dwg_version",
                "dwg_version_1",
                "dwg_version_2",
                "maint_version",
                "maint_version_1",
                "maint_version_2",
            ],
        );

        let mut walker =
            FieldWalker::new(writer, self.config, self.resolver, notifications, "AUX_HEADER", 0);
        walker.walk(AUX_HEADER, &source, Pass::Inline)?;

        let size = (writer.position() - address) as u32;
        debug!(address, size, "wrote auxiliary header");
        Ok(SectionLocator {
            number: section_locator::AUX_HEADER,
            address: address as u32,
            size,
        })
    }
}
