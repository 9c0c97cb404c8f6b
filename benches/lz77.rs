//! Compressor throughput and whole-file encoding.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dwg_encoder::document::{field_map, EntityCommon};
use dwg_encoder::io::dwg::object_type::DwgObjectType;
use dwg_encoder::{encode_dwg, Compressor, Document, DwgObject, DxfVersion, FieldValue, Lz77Ac18Compressor, Vector3};

fn section_like(len: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(len);
    let mut i = 0u32;
    while data.len() < len {
        data.extend_from_slice(format!("AcDbEntity\0{:08X}\0", i.wrapping_mul(2_654_435_761)).as_bytes());
        data.extend_from_slice(&[0u8; 24]);
        i += 1;
    }
    data.truncate(len);
    data
}

fn compressor_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("lz77_compress");
    let compressor = Lz77Ac18Compressor::new();

    for len in [0x7400usize, 0x40000, 0x200000] {
        let data = section_like(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| compressor.compress(black_box(data), 0, data.len()).unwrap())
        });
    }
    group.finish();
}

fn encode_benchmarks(c: &mut Criterion) {
    let mut doc = Document::new(DxfVersion::AC1015);
    for i in 0..5000u64 {
        doc.add_object(DwgObject::entity(
            0x100 + i,
            DwgObjectType::Line.as_raw(),
            EntityCommon::default(),
            field_map([
                ("start", FieldValue::Point3(Vector3::new(i as f64, 0.0, 0.0))),
                ("end", FieldValue::Point3(Vector3::new(i as f64, 10.0, 0.0))),
            ]),
        ));
    }

    c.bench_function("encode_5000_lines", |b| {
        b.iter(|| encode_dwg(black_box(&doc)).unwrap())
    });
}

criterion_group!(benches, compressor_benchmarks, encode_benchmarks);
criterion_main!(benches);
