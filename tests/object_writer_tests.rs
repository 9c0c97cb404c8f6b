//! Object records read back field by field.
//!
//!   cargo test --test object_writer_tests

mod common;

use common::builders;
use dwg_encoder::classes::DwgClass;
use dwg_encoder::document::{EedRecord, ObjectKind};
use dwg_encoder::io::dwg::reader::DwgStreamReaderBase;
use dwg_encoder::io::dwg::reference_type::resolve_reference;
use dwg_encoder::io::dwg::writer::DwgObjectWriter;
use dwg_encoder::types::{DxfVersion, Handle};
use dwg_encoder::{Document, EncodeConfiguration, ObjectRef};

struct Record {
    data: DwgStreamReaderBase,
    handles: DwgStreamReaderBase,
    type_tag: u16,
    handle: Handle,
}

/// Encode the object at `index` and read its R2000 header.
fn encode_r2000(doc: &Document, index: usize) -> (Record, Vec<u8>) {
    common::init_tracing();
    let config = EncodeConfiguration::new(DxfVersion::AC1015);
    let mut writer = DwgObjectWriter::new(doc, &config);
    let body = writer.encode_object(&doc.objects[index]).unwrap();

    let mut data = DwgStreamReaderBase::new(body.clone(), DxfVersion::AC1015);
    let type_tag = data.read_object_type().unwrap();
    let bitsize = data.read_raw_long().unwrap() as u64;
    let handle = data.read_handle().unwrap();
    let mut handles = DwgStreamReaderBase::new(body.clone(), DxfVersion::AC1015);
    handles.set_position_in_bits(bitsize);
    (
        Record {
            data,
            handles,
            type_tag,
            handle,
        },
        body,
    )
}

fn dictionary_var_document() -> (Document, usize) {
    let mut doc = Document::new(DxfVersion::AC1015);
    let owner = doc.add_object(builders::dictionary(0x0C));
    let tag = doc.add_class(DwgClass::new(0, "DICTIONARYVAR", "AcDbDictionaryVar", false));
    let mut var = builders::dictionary_var(0x40, tag, "HELLO");
    if let ObjectKind::Object { common, .. } = &mut var.kind {
        common.owner = ObjectRef::object(4, owner);
    }
    let index = doc.add_object(var);
    (doc, index)
}

#[test]
fn test_dictionary_var_record() {
    let (doc, index) = dictionary_var_document();
    let (mut r, _) = encode_r2000(&doc, index);

    assert_eq!(r.type_tag, 500);
    assert_eq!((r.handle.code, r.handle.value), (0, 0x40));
    assert_eq!(r.data.read_bit_short().unwrap(), 0, "no EED");
    assert_eq!(r.data.read_bit_long().unwrap(), 0, "no reactors");
    assert_eq!(r.data.read_byte().unwrap(), 0);
    assert_eq!(r.data.read_variable_text().unwrap(), "HELLO");

    let owner = r.handles.read_handle().unwrap();
    assert_eq!((owner.code, owner.value), (4, 0x0C));
    let xdictionary = r.handles.read_handle().unwrap();
    assert_eq!((xdictionary.code, xdictionary.value), (3, 0));
}

#[test]
fn test_bitsize_points_at_handle_stream() {
    let (doc, index) = dictionary_var_document();
    let (mut r, body) = encode_r2000(&doc, index);
    r.data.read_bit_short().unwrap();
    r.data.read_bit_long().unwrap();
    r.data.read_byte().unwrap();
    r.data.read_variable_text().unwrap();
    assert_eq!(r.data.position_in_bits(), r.handles.position_in_bits());
    assert!(r.handles.position_in_bits() <= body.len() as u64 * 8);
}

#[test]
fn test_eed_records() {
    let (mut doc, index) = dictionary_var_document();
    doc.objects[index].eed = vec![
        EedRecord {
            app: ObjectRef::handle(5, 0x12),
            code: 0,
            data: vec![3, 0, b'a', b'b', b'c'],
        },
        EedRecord {
            app: ObjectRef::handle(5, 0x12),
            code: 70,
            data: vec![0x34, 0x12],
        },
    ];
    let (mut r, _) = encode_r2000(&doc, index);

    assert_eq!(r.data.read_bit_short().unwrap(), 6);
    let app = r.data.read_handle().unwrap();
    assert_eq!((app.code, app.value), (5, 0x12));
    assert_eq!(r.data.read_byte().unwrap(), 0);
    assert_eq!(r.data.read_bytes(5).unwrap(), vec![3, 0, b'a', b'b', b'c']);

    assert_eq!(r.data.read_bit_short().unwrap(), 3);
    r.data.read_handle().unwrap();
    assert_eq!(r.data.read_byte().unwrap(), 70);
    assert_eq!(r.data.read_bytes(2).unwrap(), vec![0x34, 0x12]);

    assert_eq!(r.data.read_bit_short().unwrap(), 0);
}

#[test]
fn test_reactors_and_xdictionary() {
    let (mut doc, index) = dictionary_var_document();
    let reactor = doc.add_object(builders::dictionary(0x50));
    doc.objects[index].reactors = vec![ObjectRef::object(4, reactor), ObjectRef::handle(4, 0x99)];
    doc.objects[index].xdictionary = Some(ObjectRef::object(3, reactor));
    let (mut r, _) = encode_r2000(&doc, index);

    r.data.read_bit_short().unwrap();
    assert_eq!(r.data.read_bit_long().unwrap(), 2);

    r.handles.read_handle().unwrap();
    let first = r.handles.read_handle().unwrap();
    let second = r.handles.read_handle().unwrap();
    assert_eq!((first.code, first.value), (4, 0x50));
    assert_eq!((second.code, second.value), (4, 0x99));
    let xdictionary = r.handles.read_handle().unwrap();
    assert_eq!((xdictionary.code, xdictionary.value), (3, 0x50));
}

#[test]
fn test_offset_codes() {
    let (mut doc, index) = dictionary_var_document();
    let next = doc.add_object(builders::dictionary(0x41));
    let far = doc.add_object(builders::dictionary(0x4A));
    let below = doc.add_object(builders::dictionary(0x3F));
    doc.objects[index].reactors = vec![
        ObjectRef::object(6, next),
        ObjectRef::object(0xA, far),
        ObjectRef::object(8, below),
        ObjectRef::object(0xC, 0),
    ];
    let (mut r, _) = encode_r2000(&doc, index);

    r.handles.read_handle().unwrap();
    let expected = [(6, 0, 0x41), (0xA, 0x0A, 0x4A), (8, 0, 0x3F), (0xC, 0x34, 0x0C)];
    for (code, value, target) in expected {
        let h = r.handles.read_handle().unwrap();
        assert_eq!((h.code, h.value), (code, value));
        assert_eq!(resolve_reference(h, 0x40), target);
    }
}

#[test]
fn test_unreachable_offset_falls_back_to_absolute() {
    let (mut doc, index) = dictionary_var_document();
    let far = doc.add_object(builders::dictionary(0x4A));
    doc.objects[index].reactors = vec![ObjectRef::object(6, far)];

    let config = EncodeConfiguration::new(DxfVersion::AC1015);
    let mut writer = DwgObjectWriter::new(&doc, &config);
    let body = writer.encode_object(&doc.objects[index]).unwrap();
    assert!(writer.notifications().contains("cannot reach"));

    let mut r = DwgStreamReaderBase::new(body, DxfVersion::AC1015);
    r.read_object_type().unwrap();
    let bitsize = r.read_raw_long().unwrap() as u64;
    r.set_position_in_bits(bitsize);
    r.read_handle().unwrap();
    let reactor = r.read_handle().unwrap();
    assert_eq!((reactor.code, reactor.value), (3, 0x4A));
}

#[test]
fn test_r14_bitsize_follows_eed() {
    let mut doc = Document::new(DxfVersion::AC1014);
    let index = doc.add_object(builders::layer(0x10, "WALLS"));
    let config = EncodeConfiguration::new(DxfVersion::AC1014);
    let mut writer = DwgObjectWriter::new(&doc, &config);
    let body = writer.encode_object(&doc.objects[index]).unwrap();

    let mut r = DwgStreamReaderBase::new(body.clone(), DxfVersion::AC1014);
    r.read_object_type().unwrap();
    assert_eq!(r.read_handle().unwrap().value, 0x10);
    assert_eq!(r.read_bit_short().unwrap(), 0);
    let bitsize = r.read_raw_long().unwrap() as u64;
    assert!(bitsize > r.position_in_bits());
    assert!(bitsize <= body.len() as u64 * 8);
}

#[test]
fn test_unregistered_class_written_raw() {
    let mut doc = Document::new(DxfVersion::AC1015);
    let tag = doc.add_class(DwgClass::new(0, "ACME_WIDGET", "AcmeWidget", false));
    let index = doc.add_object(builders::dictionary_var(0x70, tag, "x"));

    let config = EncodeConfiguration::new(DxfVersion::AC1015);
    let mut writer = DwgObjectWriter::new(&doc, &config);
    let body = writer.encode_object(&doc.objects[index]).unwrap();
    assert!(writer.notifications().contains("ACME_WIDGET"));
    assert!(writer.notifications().contains("no raw data"));

    let mut r = DwgStreamReaderBase::new(body, DxfVersion::AC1015);
    assert_eq!(r.read_object_type().unwrap(), tag);
    assert_eq!(r.read_raw_long().unwrap(), 0);
    assert_eq!(r.read_handle().unwrap().value, 0x70);
}
