//! Data shared by every entity or every object: the field sources that feed
//! the common header layouts, extended entity data and entity thumbnails.

use crate::document::{DwgObject, EedRecord, EntityCommon, FieldValue, ObjectCommon, ObjectRef};
use crate::error::{DxfError, Result};
use crate::io::dwg::constants::MAX_ENTITY_PICTURE_SIZE;
use crate::io::dwg::handle_resolver::HandleResolver;
use crate::io::dwg::section_io::SectionIO;
use crate::io::dwg::schema::FieldSource;
use crate::io::dwg::writer::stream_writer::IDwgStreamWriter;
use crate::io::dwg::writer::stream_writer_base::DwgStreamWriterBase;
use crate::notification::NotificationCollection;
use crate::types::Handle;
use std::borrow::Cow;

/// Reference code of the xdictionary handle.
const XDICTIONARY_CODE: u8 = 3;

fn owned<'a>(value: impl Into<FieldValue>) -> Option<Cow<'a, FieldValue>> {
    Some(Cow::Owned(value.into()))
}

fn reactor_list(object: &DwgObject) -> FieldValue {
    FieldValue::List(object.reactors.iter().map(|r| FieldValue::Ref(*r)).collect())
}

fn xdictionary(object: &DwgObject) -> ObjectRef {
    object
        .xdictionary
        .unwrap_or(ObjectRef::null(XDICTIONARY_CODE))
}

/// Entity header fields, read from [`EntityCommon`] and the object itself.
pub(super) struct EntitySource<'a> {
    pub object: &'a DwgObject,
    pub common: &'a EntityCommon,
}

impl FieldSource for EntitySource<'_> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        let c = self.common;
        match name {
            "entity_mode" => owned(c.entity_mode),
            "reactors" => owned(reactor_list(self.object)),
            "xdic_missing" => owned(self.object.xdictionary.is_none()),
            "xdictionary" => owned(xdictionary(self.object)),
            "has_ds_binary_data" => owned(c.has_ds_binary_data),
            "isbylayerlt" => owned(c.isbylayerlt),
            "nolinks" => owned(c.nolinks),
            "color" => owned(c.color),
            "linetype_scale" => owned(c.linetype_scale),
            "linetype_flags" => owned(c.linetype_flags),
            "plotstyle_flags" => owned(c.plotstyle_flags),
            "material_flags" => owned(c.material_flags),
            "shadow_flags" => owned(c.shadow_flags),
            "has_full_visualstyle" => owned(c.has_full_visualstyle),
            "has_face_visualstyle" => owned(c.has_face_visualstyle),
            "has_edge_visualstyle" => owned(c.has_edge_visualstyle),
            "invisible" => owned(c.invisible),
            "lineweight" => owned(c.lineweight),
            "owner" => owned(c.owner),
            "layer" => owned(c.layer),
            "linetype" => owned(c.linetype),
            "prev_entity" => owned(c.prev_entity),
            "next_entity" => owned(c.next_entity),
            "material" => owned(c.material),
            "plotstyle" => owned(c.plotstyle),
            "full_visualstyle" => owned(c.full_visualstyle),
            "face_visualstyle" => owned(c.face_visualstyle),
            "edge_visualstyle" => owned(c.edge_visualstyle),
            _ => None,
        }
    }
}

/// Object header fields.
pub(super) struct ObjectSource<'a> {
    pub object: &'a DwgObject,
    pub common: &'a ObjectCommon,
}

impl FieldSource for ObjectSource<'_> {
    fn field(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        match name {
            "reactors" => owned(reactor_list(self.object)),
            "xdic_missing" => owned(self.object.xdictionary.is_none()),
            "xdictionary" => owned(xdictionary(self.object)),
            "has_ds_binary_data" => owned(self.common.has_ds_binary_data),
            "owner" => owned(self.common.owner),
            _ => None,
        }
    }
}

/// Size field of an EED record: the code byte plus the data bytes.
fn eed_size(record: &EedRecord, owner: u64) -> Result<i16> {
    i16::try_from(record.data.len() + 1).map_err(|_| {
        DxfError::InvalidFormat(format!(
            "EED record of {} bytes on object {:#X} does not fit a BitShort size",
            record.data.len() + 1,
            owner
        ))
    })
}

/// Write the EED records of `object` followed by the closing `BS 0`.
///
/// Every record size is checked before the first byte is written, so a
/// failure leaves nothing of the EED in the stream.
pub(super) fn write_eed(
    writer: &mut DwgStreamWriterBase,
    object: &DwgObject,
    resolver: &HandleResolver<'_>,
    notifications: &mut NotificationCollection,
) -> Result<()> {
    let owner = object.handle.value;
    let sizes = object
        .eed
        .iter()
        .map(|r| eed_size(r, owner))
        .collect::<Result<Vec<_>>>()?;

    for (record, size) in object.eed.iter().zip(sizes) {
        let app = match resolver.resolve(&record.app) {
            Ok(handle) => handle,
            Err(DxfError::InvalidHandle(index)) => {
                notifications.warn(format!(
                    "EED of {:#X}: application #{} is missing, written as a null handle",
                    owner, index
                ));
                Handle::new(record.app.code, 0)
            }
            Err(e) => return Err(e),
        };
        writer.write_bit_short(size)?;
        writer.write_handle(app)?;
        writer.write_byte(record.code)?;
        writer.write_bytes(&record.data)?;
    }
    writer.write_bit_short(0)
}

/// Write the thumbnail flag, size and bytes of an entity.
///
/// A thumbnail of `MAX_ENTITY_PICTURE_SIZE` bytes or more is treated as
/// corrupt: the stream is rewound to the flag and the entity is written
/// without one.
pub(super) fn write_entity_picture(
    writer: &mut DwgStreamWriterBase,
    sio: &SectionIO,
    common: &EntityCommon,
    owner: u64,
    notifications: &mut NotificationCollection,
) -> Result<()> {
    let Some(picture) = &common.picture else {
        return writer.write_bit(false);
    };

    let flag_position = writer.position_in_bits();
    writer.write_bit(true)?;
    let size = picture.len() as u64;
    if sio.r2007_plus {
        writer.write_bit_long_long(size as i64)?;
    } else {
        writer.write_raw_long(size as i32)?;
    }

    if size >= MAX_ENTITY_PICTURE_SIZE {
        notifications.warn(format!(
            "entity {:#X}: picture of {} kB dropped as corrupt",
            owner,
            size / 1000
        ));
        writer.rewind_to(flag_position)?;
        return writer.write_bit(false);
    }
    writer.write_bytes(picture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::field_map;
    use crate::io::dwg::reader::DwgStreamReaderBase;
    use crate::types::DxfVersion;

    fn entity_with(common: EntityCommon) -> DwgObject {
        DwgObject::entity(0x30, 0x13, common, field_map::<&str, bool, _>([]))
    }

    #[test]
    fn test_entity_source_reads_common() {
        let common = EntityCommon {
            entity_mode: 0,
            linetype_scale: 2.0,
            ..EntityCommon::default()
        };
        let mut object = entity_with(common.clone());
        object.reactors.push(ObjectRef::handle(4, 0x20));
        let source = EntitySource {
            object: &object,
            common: &common,
        };
        assert_eq!(source.field("entity_mode").as_deref(), Some(&FieldValue::Int(0)));
        assert_eq!(source.field("linetype_scale").as_deref(), Some(&FieldValue::Double(2.0)));
        assert_eq!(source.field("xdic_missing").as_deref(), Some(&FieldValue::Bool(true)));
        assert_eq!(
            source.field("xdictionary").as_deref(),
            Some(&FieldValue::Ref(ObjectRef::null(3)))
        );
        assert!(matches!(
            source.field("reactors").as_deref(),
            Some(FieldValue::List(items)) if items.len() == 1
        ));
        assert!(source.field("radius").is_none());
    }

    #[test]
    fn test_object_source_owner() {
        let common = ObjectCommon {
            owner: ObjectRef::handle(4, 0x0C),
            ..ObjectCommon::default()
        };
        let mut object = DwgObject::object(0x31, 0x2A, common.clone(), field_map::<&str, bool, _>([]));
        object.xdictionary = Some(ObjectRef::handle(3, 0x40));
        let source = ObjectSource {
            object: &object,
            common: &common,
        };
        assert_eq!(
            source.field("owner").as_deref(),
            Some(&FieldValue::Ref(ObjectRef::handle(4, 0x0C)))
        );
        assert_eq!(source.field("xdic_missing").as_deref(), Some(&FieldValue::Bool(false)));
    }

    #[test]
    fn test_eed_records() {
        let mut object = entity_with(EntityCommon::default());
        object.eed.push(EedRecord {
            app: ObjectRef::handle(5, 0x12),
            code: 0,
            data: vec![3, 0xAA, 0xBB, 0xCC],
        });
        let mut writer = DwgStreamWriterBase::new(DxfVersion::AC1015);
        let mut notes = NotificationCollection::new();
        write_eed(&mut writer, &object, &HandleResolver::new(&[]), &mut notes).unwrap();

        let mut reader = DwgStreamReaderBase::new(writer.into_data(), DxfVersion::AC1015);
        assert_eq!(reader.read_bit_short().unwrap(), 5);
        assert_eq!(reader.read_handle().unwrap(), Handle::new(5, 0x12));
        assert_eq!(reader.read_byte().unwrap(), 0);
        assert_eq!(reader.read_bytes(4).unwrap(), vec![3, 0xAA, 0xBB, 0xCC]);
        assert_eq!(reader.read_bit_short().unwrap(), 0);
    }

    #[test]
    fn test_oversized_eed_writes_nothing() {
        let mut object = entity_with(EntityCommon::default());
        object.eed.push(EedRecord {
            app: ObjectRef::handle(5, 0x12),
            code: 0,
            data: vec![1, 2],
        });
        object.eed.push(EedRecord {
            app: ObjectRef::handle(5, 0x12),
            code: 0,
            data: vec![0; 40_000],
        });
        let mut writer = DwgStreamWriterBase::new(DxfVersion::AC1015);
        let mut notes = NotificationCollection::new();
        let r = write_eed(&mut writer, &object, &HandleResolver::new(&[]), &mut notes);
        assert!(matches!(r, Err(DxfError::InvalidFormat(_))));
        assert!(writer.is_empty());
    }

    #[test]
    fn test_picture_written() {
        let sio = SectionIO::new(DxfVersion::AC1015);
        let common = EntityCommon {
            picture: Some(vec![9, 8, 7]),
            ..EntityCommon::default()
        };
        let mut writer = DwgStreamWriterBase::new(DxfVersion::AC1015);
        let mut notes = NotificationCollection::new();
        write_entity_picture(&mut writer, &sio, &common, 0x30, &mut notes).unwrap();

        let mut reader = DwgStreamReaderBase::new(writer.into_data(), DxfVersion::AC1015);
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.read_raw_long().unwrap(), 3);
        assert_eq!(reader.read_bytes(3).unwrap(), vec![9, 8, 7]);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_absurd_picture_is_rewound() {
        let sio = SectionIO::new(DxfVersion::AC1015);
        let common = EntityCommon {
            picture: Some(vec![0; MAX_ENTITY_PICTURE_SIZE as usize]),
            ..EntityCommon::default()
        };
        let mut writer = DwgStreamWriterBase::new(DxfVersion::AC1015);
        writer.write_bit(true).unwrap();
        let mut notes = NotificationCollection::new();
        write_entity_picture(&mut writer, &sio, &common, 0x30, &mut notes).unwrap();

        assert!(notes.contains("picture"));
        assert_eq!(writer.position_in_bits(), 2);
        let mut reader = DwgStreamReaderBase::new(writer.into_data(), DxfVersion::AC1015);
        assert!(reader.read_bit().unwrap());
        assert!(!reader.read_bit().unwrap());
    }
}
