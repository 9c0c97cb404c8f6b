//! Object writer: encodes one entity or object record.
//!
//! A record is written as
//!
//! ```text
//! type | RL bitsize (R2000+) | H handle | EED | [picture] | RL bitsize (R13-R14)
//!      | common header fields | type fields | common handles | type handles
//! ```
//!
//! The bitsize counts the bits from the type up to the first handle of the
//! handle stream and is backpatched once the data fields are written. The
//! record is padded to a byte boundary. Framing (MS size and CRC) belongs to
//! the container writer.

mod common;
pub mod dispatch;

use crate::document::{Document, DwgObject, ObjectKind, Payload};
use crate::error::{DxfError, Result};
use crate::io::dwg::handle_resolver::HandleResolver;
use crate::io::dwg::schema::tables::{ENTITY_COMMON, OBJECT_COMMON};
use crate::io::dwg::schema::{FieldSource, FieldSpec, FieldWalker, Pass, Supertype, TypeSchema};
use crate::io::dwg::section_io::SectionIO;
use crate::io::dwg::writer::configuration::EncodeConfiguration;
use crate::io::dwg::writer::stream_writer::IDwgStreamWriter;
use crate::io::dwg::writer::stream_writer_base::DwgStreamWriterBase;
use crate::notification::NotificationCollection;
use common::{write_eed, write_entity_picture, EntitySource, ObjectSource};
use dispatch::{resolve, Resolution};
use tracing::{debug, trace};

/// Encodes the objects of one document.
pub struct DwgObjectWriter<'a> {
    document: &'a Document,
    config: &'a EncodeConfiguration,
    sio: SectionIO,
    resolver: HandleResolver<'a>,
    notifications: NotificationCollection,
}

impl<'a> DwgObjectWriter<'a> {
    pub fn new(document: &'a Document, config: &'a EncodeConfiguration) -> Self {
        Self {
            document,
            config,
            sio: SectionIO::new(config.version),
            resolver: HandleResolver::new(&document.objects),
            notifications: NotificationCollection::new(),
        }
    }

    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    pub fn into_notifications(self) -> NotificationCollection {
        self.notifications
    }

    /// Encode `object` into a fresh buffer.
    ///
    /// Fails with [`DxfError::InvalidObjectSize`] when nothing was produced.
    pub fn encode_object(&mut self, object: &DwgObject) -> Result<Vec<u8>> {
        let mut writer = DwgStreamWriterBase::new(self.config.version)
            .with_encoding(self.config.codepage_encoding);
        let written = self.encode(object, &mut writer)?;
        if written == 0 {
            return Err(DxfError::InvalidObjectSize(0, object.handle.value));
        }
        Ok(writer.into_data())
    }

    /// Encode `object` at the current position of `writer`, which must be
    /// byte aligned. Returns the number of bytes written.
    pub fn encode(&mut self, object: &DwgObject, writer: &mut DwgStreamWriterBase) -> Result<usize> {
        let start = writer.position_in_bits();

        match &object.kind {
            ObjectKind::Unknown { raw } => {
                writer.write_bytes(raw)?;
            }
            ObjectKind::Entity { payload, .. } | ObjectKind::Object { payload, .. } => {
                match resolve(object.type_tag, &self.document.classes, &mut self.notifications) {
                    Resolution::Schema(schema) if supertype_matches(schema, object) => {
                        match self.write_record(object, schema, payload, writer, start) {
                            Ok(()) => {}
                            Err(DxfError::InvalidField {
                                type_name,
                                field,
                                message,
                            }) => {
                                self.notifications.warn(format!(
                                    "object {:#X}: {}.{}: {}, written raw",
                                    object.handle.value, type_name, field, message
                                ));
                                writer.rewind_to(start)?;
                                self.write_raw_record(object, payload, writer)?;
                            }
                            Err(e) => return Err(e),
                        }
                    }
                    Resolution::Schema(schema) => {
                        self.notifications.warn(format!(
                            "object {:#X}: {} layout does not fit its supertype, written raw",
                            object.handle.value, schema.name
                        ));
                        self.write_raw_record(object, payload, writer)?;
                    }
                    Resolution::Unknown(reason) => {
                        debug!(
                            handle = object.handle.value,
                            type_tag = object.type_tag,
                            %reason,
                            "writing raw object"
                        );
                        self.write_raw_record(object, payload, writer)?;
                    }
                }
            }
        }

        let end = writer.position_in_bits();
        Ok(((end - start) / 8) as usize)
    }

    fn write_record(
        &mut self,
        object: &DwgObject,
        schema: &'static TypeSchema,
        payload: &Payload,
        writer: &mut DwgStreamWriterBase,
        start: u64,
    ) -> Result<()> {
        writer.write_object_type(object.type_tag)?;
        let bitsize_r2000 = self.bitsize_placeholder(writer, self.sio.bitsize_before_handle())?;
        writer.write_handle(object.handle.with_code(0))?;
        write_eed(writer, object, &self.resolver, &mut self.notifications)?;

        let (common_fields, source): (&'static [FieldSpec], Box<dyn FieldSource + '_>) =
            match &object.kind {
                ObjectKind::Entity { common, .. } => {
                    write_entity_picture(
                        writer,
                        &self.sio,
                        common,
                        object.handle.value,
                        &mut self.notifications,
                    )?;
                    (ENTITY_COMMON, Box::new(EntitySource { object, common }))
                }
                ObjectKind::Object { common, .. } => {
                    (OBJECT_COMMON, Box::new(ObjectSource { object, common }))
                }
                ObjectKind::Unknown { .. } => {
                    return Err(DxfError::InvalidFormat(format!(
                        "object {:#X} has no common data",
                        object.handle.value
                    )))
                }
            };
        let bitsize_r13 = self.bitsize_placeholder(writer, self.sio.r13_14_only)?;

        trace!(handle = object.handle.value, type_name = schema.name, "encoding object");
        let mut walker = FieldWalker::new(
            writer,
            self.config,
            &self.resolver,
            &mut self.notifications,
            schema.name,
            object.handle.value,
        );
        walker.walk(common_fields, source.as_ref(), Pass::Data)?;
        walker.write_schema(schema, &payload.fields, Pass::Data)?;

        let writer = walker.writer();
        let bitsize = writer.position_in_bits() - start;
        for slot in [bitsize_r2000, bitsize_r13].into_iter().flatten() {
            writer.with_position(slot, |w| w.write_raw_long(bitsize as i32))?;
        }

        walker.walk(common_fields, source.as_ref(), Pass::Handles)?;
        walker.write_schema(schema, &payload.fields, Pass::Handles)?;
        walker.writer().write_spear_shift()
    }

    /// Header of an object without a usable layout, followed by the bytes a
    /// decoder captured after the handle.
    fn write_raw_record(
        &mut self,
        object: &DwgObject,
        payload: &Payload,
        writer: &mut DwgStreamWriterBase,
    ) -> Result<()> {
        writer.write_object_type(object.type_tag)?;
        let raw = payload.raw.as_ref();
        if self.sio.r2000_plus {
            writer.write_raw_long(raw.map_or(0, |r| r.bitsize) as i32)?;
        }
        writer.write_handle(object.handle.with_code(0))?;
        match raw {
            Some(raw) => writer.write_bytes(&raw.data)?,
            None => self.notifications.warn(format!(
                "object {:#X} (type {}): no raw data captured, only the header is written",
                object.handle.value, object.type_tag
            )),
        }
        writer.write_spear_shift()
    }

    fn bitsize_placeholder(
        &self,
        writer: &mut DwgStreamWriterBase,
        present: bool,
    ) -> Result<Option<u64>> {
        if !present {
            return Ok(None);
        }
        let slot = writer.position_in_bits();
        writer.write_raw_long(0)?;
        Ok(Some(slot))
    }
}

fn supertype_matches(schema: &TypeSchema, object: &DwgObject) -> bool {
    match schema.supertype {
        Supertype::Entity => object.is_entity(),
        Supertype::Object => matches!(object.kind, ObjectKind::Object { .. }),
    }
}
