//! In-memory document graph handed to the encoder.
//!
//! The document owns every object; objects refer to each other through
//! [`ObjectRef`] values that are turned into handles only while encoding.

use crate::classes::DwgClass;
use crate::types::{Color, DxfVersion, Handle, Vector2, Vector3};
use indexmap::IndexMap;

/// Ordered field name → value map carrying a type-specific payload.
pub type FieldMap = IndexMap<String, FieldValue>;

/// A single payload value. The schema decides how it is bit-encoded.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    /// Any integer field (B, BB, BS, BL, BLL, RC, RS, RL)
    Int(i64),
    /// BD, RD, DD, BT and dates
    Double(f64),
    Text(String),
    Point2(Vector2),
    Point3(Vector3),
    Color(Color),
    Ref(ObjectRef),
    /// Opaque byte vectors (proxy data, binary chunks)
    Bytes(Vec<u8>),
    /// Values of a repeated field
    List(Vec<FieldValue>),
    /// Nested records of a repeated compound field
    Records(Vec<FieldMap>),
}

macro_rules! field_value_from {
    ($($t:ty => |$v:ident| $e:expr),* $(,)?) => {
        $(impl From<$t> for FieldValue {
            fn from($v: $t) -> Self {
                $e
            }
        })*
    };
}

field_value_from! {
    bool => |v| FieldValue::Bool(v),
    i16 => |v| FieldValue::Int(v as i64),
    i32 => |v| FieldValue::Int(v as i64),
    i64 => |v| FieldValue::Int(v),
    u8 => |v| FieldValue::Int(v as i64),
    u16 => |v| FieldValue::Int(v as i64),
    u32 => |v| FieldValue::Int(v as i64),
    f64 => |v| FieldValue::Double(v),
    &str => |v| FieldValue::Text(v.to_string()),
    String => |v| FieldValue::Text(v),
    Vector2 => |v| FieldValue::Point2(v),
    Vector3 => |v| FieldValue::Point3(v),
    Color => |v| FieldValue::Color(v),
    ObjectRef => |v| FieldValue::Ref(v),
    Vec<u8> => |v| FieldValue::Bytes(v),
    Vec<FieldMap> => |v| FieldValue::Records(v),
}

/// Build a [`FieldMap`] from `(name, value)` pairs.
pub fn field_map<K, V, I>(pairs: I) -> FieldMap
where
    K: Into<String>,
    V: Into<FieldValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// What a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefTarget {
    Null,
    /// The object stored at this index of [`Document::objects`]
    Object(usize),
    /// A raw handle value, for targets outside the object list
    Handle(u64),
}

/// A reference from one object to another, resolved to a handle at encode
/// time. `code` is the reference code the handle is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    pub code: u8,
    pub target: RefTarget,
}

impl ObjectRef {
    pub const fn null(code: u8) -> Self {
        ObjectRef {
            code,
            target: RefTarget::Null,
        }
    }

    pub const fn object(code: u8, index: usize) -> Self {
        ObjectRef {
            code,
            target: RefTarget::Object(index),
        }
    }

    pub const fn handle(code: u8, value: u64) -> Self {
        ObjectRef {
            code,
            target: RefTarget::Handle(value),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.target, RefTarget::Null)
    }
}

/// One extended entity data record.
#[derive(Debug, Clone, PartialEq)]
pub struct EedRecord {
    /// Registered application (APPID) the data belongs to
    pub app: ObjectRef,
    /// First data byte (the group code of the first item)
    pub code: u8,
    /// Remaining data bytes, written verbatim
    pub data: Vec<u8>,
}

/// Common fields of graphical entities.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// 0: owner handle follows, 1: paper space, 2: model space
    pub entity_mode: u8,
    pub has_ds_binary_data: bool,
    /// R13-R14: linetype is BYLAYER, no linetype handle
    pub isbylayerlt: bool,
    /// No previous/next entity links
    pub nolinks: bool,
    pub color: Color,
    pub linetype_scale: f64,
    /// 0 BYLAYER, 1 BYBLOCK, 2 CONTINUOUS, 3 handle follows
    pub linetype_flags: u8,
    /// Same encoding as `linetype_flags`
    pub plotstyle_flags: u8,
    pub material_flags: u8,
    pub shadow_flags: u8,
    pub has_full_visualstyle: bool,
    pub has_face_visualstyle: bool,
    pub has_edge_visualstyle: bool,
    pub invisible: i16,
    pub lineweight: u8,
    /// Embedded thumbnail
    pub picture: Option<Vec<u8>>,

    pub owner: ObjectRef,
    pub layer: ObjectRef,
    pub linetype: ObjectRef,
    pub prev_entity: ObjectRef,
    pub next_entity: ObjectRef,
    pub material: ObjectRef,
    pub plotstyle: ObjectRef,
    pub full_visualstyle: ObjectRef,
    pub face_visualstyle: ObjectRef,
    pub edge_visualstyle: ObjectRef,
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self {
            entity_mode: 2,
            has_ds_binary_data: false,
            isbylayerlt: true,
            nolinks: true,
            color: Color::ByLayer,
            linetype_scale: 1.0,
            linetype_flags: 0,
            plotstyle_flags: 0,
            material_flags: 0,
            shadow_flags: 0,
            has_full_visualstyle: false,
            has_face_visualstyle: false,
            has_edge_visualstyle: false,
            invisible: 0,
            lineweight: 0x1D,
            picture: None,
            owner: ObjectRef::null(4),
            layer: ObjectRef::null(5),
            linetype: ObjectRef::null(5),
            prev_entity: ObjectRef::null(4),
            next_entity: ObjectRef::null(4),
            material: ObjectRef::null(5),
            plotstyle: ObjectRef::null(5),
            full_visualstyle: ObjectRef::null(5),
            face_visualstyle: ObjectRef::null(5),
            edge_visualstyle: ObjectRef::null(5),
        }
    }
}

/// Common fields of non-graphical objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectCommon {
    pub owner: ObjectRef,
    pub has_ds_binary_data: bool,
}

impl Default for ObjectCommon {
    fn default() -> Self {
        Self {
            owner: ObjectRef::null(4),
            has_ds_binary_data: false,
        }
    }
}

/// Bytes captured by a decoder after the object's handle, replayed when the
/// type has no usable layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawPayload {
    /// Bit size stored in the object header
    pub bitsize: u32,
    pub data: Vec<u8>,
}

/// Type-specific data of an entity or object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Payload {
    pub fields: FieldMap,
    pub raw: Option<RawPayload>,
}

impl Payload {
    pub fn from_fields(fields: FieldMap) -> Self {
        Self { fields, raw: None }
    }
}

/// Supertype of an object.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Entity {
        common: EntityCommon,
        payload: Payload,
    },
    Object {
        common: ObjectCommon,
        payload: Payload,
    },
    /// A complete object record (type, header, data and handles) kept as an
    /// opaque blob
    Unknown { raw: Vec<u8> },
}

/// One object of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct DwgObject {
    pub handle: Handle,
    /// Fixed type number below 500, class number from 500 on
    pub type_tag: u16,
    pub eed: Vec<EedRecord>,
    pub reactors: Vec<ObjectRef>,
    pub xdictionary: Option<ObjectRef>,
    pub kind: ObjectKind,
}

impl DwgObject {
    pub fn entity(handle: u64, type_tag: u16, common: EntityCommon, fields: FieldMap) -> Self {
        Self {
            handle: Handle::new(0, handle),
            type_tag,
            eed: Vec::new(),
            reactors: Vec::new(),
            xdictionary: None,
            kind: ObjectKind::Entity {
                common,
                payload: Payload::from_fields(fields),
            },
        }
    }

    pub fn object(handle: u64, type_tag: u16, common: ObjectCommon, fields: FieldMap) -> Self {
        Self {
            handle: Handle::new(0, handle),
            type_tag,
            eed: Vec::new(),
            reactors: Vec::new(),
            xdictionary: None,
            kind: ObjectKind::Object {
                common,
                payload: Payload::from_fields(fields),
            },
        }
    }

    pub fn unknown(handle: u64, type_tag: u16, raw: Vec<u8>) -> Self {
        Self {
            handle: Handle::new(0, handle),
            type_tag,
            eed: Vec::new(),
            reactors: Vec::new(),
            xdictionary: None,
            kind: ObjectKind::Unknown { raw },
        }
    }

    pub fn is_entity(&self) -> bool {
        matches!(self.kind, ObjectKind::Entity { .. })
    }

    /// Length of the captured raw bytes, if any.
    pub fn raw_len(&self) -> usize {
        match &self.kind {
            ObjectKind::Unknown { raw } => raw.len(),
            ObjectKind::Entity { payload, .. } | ObjectKind::Object { payload, .. } => {
                payload.raw.as_ref().map_or(0, |r| r.data.len())
            }
        }
    }
}

/// One record of the file-header section directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionLocator {
    pub number: u8,
    pub address: u32,
    pub size: u32,
}

/// A handler record of the second header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondHeaderHandler {
    pub number: u8,
    /// Handle value bytes, most significant first
    pub data: Vec<u8>,
}

/// Contents of the second file header (section 3).
///
/// The 14 handlers are, in order: handle seed, then the block, layer, style,
/// linetype, view, UCS, viewport, appid, dimstyle and viewport entity header
/// control objects, then the ACAD_GROUP, ACAD_MLINESTYLE and named objects
/// dictionaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondHeader {
    /// Address captured by a decoder; corrected when it disagrees with the
    /// position the section is written at
    pub address: Option<u32>,
    pub null_bits: [bool; 4],
    pub unknown_rc4: [u8; 4],
    pub handlers: Vec<SecondHeaderHandler>,
    /// Trailing longs written by R14
    pub junk_r14: [u32; 2],
}

impl Default for SecondHeader {
    fn default() -> Self {
        Self {
            address: None,
            null_bits: [false; 4],
            unknown_rc4: [0x18, 0x78, 0x01, 0x04],
            handlers: (0..14)
                .map(|number| SecondHeaderHandler {
                    number,
                    data: vec![0],
                })
                .collect(),
            junk_r14: [0, 0],
        }
    }
}

/// The whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Version the document was read from or created for
    pub version: DxfVersion,
    pub maintenance_version: u8,
    pub codepage: u16,
    /// Header variables, keyed by system variable name
    pub header: FieldMap,
    pub aux_header: FieldMap,
    pub classes: Vec<DwgClass>,
    pub objects: Vec<DwgObject>,
    pub picture: Option<Vec<u8>>,
    /// 0 English, 1 Metric
    pub measurement: u32,
    /// Number of directory records; 0 means the default of 6
    pub num_sections: u32,
    pub second_header: SecondHeader,
    /// Directory as captured by a decoder. The encoder returns the real one.
    pub sections: Vec<SectionLocator>,
}

impl Document {
    pub fn new(version: DxfVersion) -> Self {
        Self {
            version,
            maintenance_version: 0,
            codepage: 30,
            header: FieldMap::new(),
            aux_header: FieldMap::new(),
            classes: Vec::new(),
            objects: Vec::new(),
            picture: None,
            measurement: 0,
            num_sections: 0,
            second_header: SecondHeader::default(),
            sections: Vec::new(),
        }
    }

    /// Append an object, returning the index that [`ObjectRef::object`] uses.
    pub fn add_object(&mut self, object: DwgObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Append a class, numbering it after the existing ones.
    pub fn add_class(&mut self, mut class: DwgClass) -> u16 {
        let number = crate::io::dwg::constants::FIRST_CLASS_TYPE + self.classes.len() as u16;
        class.number = number as i16;
        self.classes.push(class);
        number
    }

    /// Largest handle value in use.
    pub fn max_handle(&self) -> u64 {
        self.objects
            .iter()
            .map(|o| o.handle.value)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_map_builder() {
        let m = field_map([("radius", FieldValue::from(2.5)), ("flag", true.into())]);
        assert_eq!(m.get("radius"), Some(&FieldValue::Double(2.5)));
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["radius", "flag"]);
    }

    #[test]
    fn test_add_class_numbers_from_500() {
        let mut doc = Document::new(DxfVersion::AC1015);
        let a = doc.add_class(DwgClass::new(0, "XRECORD", "AcDbXrecord", false));
        let b = doc.add_class(DwgClass::new(0, "LWPLINE", "AcDbPolyline", true));
        assert_eq!((a, b), (500, 501));
        assert_eq!(doc.classes[1].number, 501);
    }

    #[test]
    fn test_add_object_and_max_handle() {
        let mut doc = Document::new(DxfVersion::AC1015);
        assert_eq!(doc.max_handle(), 0);
        let i = doc.add_object(DwgObject::unknown(0x2A, 0x13, vec![1, 2, 3]));
        doc.add_object(DwgObject::unknown(0x10, 0x13, vec![1]));
        assert_eq!(i, 0);
        assert_eq!(doc.max_handle(), 0x2A);
    }

    #[test]
    fn test_object_ref_constructors() {
        assert!(ObjectRef::null(5).is_null());
        assert_eq!(ObjectRef::object(3, 7).target, RefTarget::Object(7));
        assert_eq!(ObjectRef::handle(4, 0x1F).code, 4);
    }

    #[test]
    fn test_second_header_default_has_fourteen_handlers() {
        let sh = SecondHeader::default();
        assert_eq!(sh.handlers.len(), 14);
        assert_eq!(sh.handlers[13].number, 13);
    }
}
