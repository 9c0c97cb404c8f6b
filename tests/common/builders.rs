//! Test document builders.
//!
//! `sample_document()` produces a small but complete drawing: a block
//! control object, a layer, a dictionary, a line and a circle referring to
//! each other by index, one class-based object and one opaque object.

#![allow(dead_code)]

use dwg_encoder::classes::DwgClass;
use dwg_encoder::document::{field_map, EntityCommon, FieldMap, ObjectCommon};
use dwg_encoder::io::dwg::object_type::DwgObjectType;
use dwg_encoder::types::{Color, DxfVersion, Vector3};
use dwg_encoder::{Document, DwgObject, FieldValue, ObjectRef};

pub const LAYER_INDEX: usize = 1;

fn no_fields() -> FieldMap {
    FieldMap::new()
}

pub fn line(handle: u64, start: Vector3, end: Vector3) -> DwgObject {
    DwgObject::entity(
        handle,
        DwgObjectType::Line.as_raw(),
        EntityCommon::default(),
        field_map([
            ("start", FieldValue::Point3(start)),
            ("end", FieldValue::Point3(end)),
        ]),
    )
}

pub fn circle(handle: u64, center: Vector3, radius: f64) -> DwgObject {
    DwgObject::entity(
        handle,
        DwgObjectType::Circle.as_raw(),
        EntityCommon::default(),
        field_map([
            ("center", FieldValue::Point3(center)),
            ("radius", FieldValue::Double(radius)),
        ]),
    )
}

pub fn layer(handle: u64, name: &str) -> DwgObject {
    DwgObject::object(
        handle,
        DwgObjectType::Layer.as_raw(),
        ObjectCommon::default(),
        field_map([("name", name)]),
    )
}

pub fn dictionary(handle: u64) -> DwgObject {
    DwgObject::object(
        handle,
        DwgObjectType::Dictionary.as_raw(),
        ObjectCommon::default(),
        no_fields(),
    )
}

/// A `DICTIONARYVAR` instance; the class must be registered first.
pub fn dictionary_var(handle: u64, type_tag: u16, value: &str) -> DwgObject {
    DwgObject::object(
        handle,
        type_tag,
        ObjectCommon::default(),
        field_map([
            ("schema_version", FieldValue::Int(0)),
            ("value", FieldValue::Text(value.to_string())),
        ]),
    )
}

pub fn sample_document(version: DxfVersion) -> Document {
    let mut doc = Document::new(version);
    doc.add_object(DwgObject::object(
        0x01,
        DwgObjectType::BlockControlObj.as_raw(),
        ObjectCommon::default(),
        no_fields(),
    ));
    doc.add_object(layer(0x10, "0"));
    doc.add_object(dictionary(0x0C));

    let mut common = EntityCommon::default();
    common.layer = ObjectRef::object(5, LAYER_INDEX);
    common.color = Color::Index(1);
    let mut l = line(0x2A, Vector3::new(0.0, 0.0, 0.0), Vector3::new(10.0, 5.0, 0.0));
    if let dwg_encoder::document::ObjectKind::Entity { common: c, .. } = &mut l.kind {
        *c = common.clone();
    }
    doc.add_object(l);

    let mut c = circle(0x2B, Vector3::new(3.0, 3.0, 0.0), 1.5);
    if let dwg_encoder::document::ObjectKind::Entity { common: cc, .. } = &mut c.kind {
        *cc = common;
    }
    doc.add_object(c);

    let tag = doc.add_class(DwgClass::new(0, "DICTIONARYVAR", "AcDbDictionaryVar", false));
    doc.add_object(dictionary_var(0x40, tag, "HELLO"));

    doc.add_object(DwgObject::unknown(0x50, 0x4B, vec![0x40, 0x12, 0x34, 0x56]));
    doc
}
