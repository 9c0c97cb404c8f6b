//! LZ77 compressor tests against its decompressor.
//!
//!   cargo test --test lz77_tests
//!   PROPTEST_CASES=2000 cargo test --test lz77_tests prop

mod common;

use dwg_encoder::{Compressor, Decompressor, Lz77Ac18Compressor, Lz77Ac18Decompressor};
use proptest::prelude::*;

fn roundtrip(data: &[u8]) -> Vec<u8> {
    let compressed = Lz77Ac18Compressor::new()
        .compress(data, 0, data.len())
        .expect("compress");
    let restored = Lz77Ac18Decompressor
        .decompress(&compressed, data.len())
        .expect("decompress");
    assert_eq!(restored.len(), data.len());
    compressed
}

/// xorshift noise; incompressible for the matcher.
fn noise(len: usize, mut state: u32) -> Vec<u8> {
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

#[test]
fn test_boundary_sizes() {
    common::init_tracing();
    for len in [0usize, 1, 2, 3, 4, 5, 1023, 1024, 1025, 0x4000, 0x4001] {
        let data = noise(len, 0x1234_5678 ^ len as u32);
        let compressed = Lz77Ac18Compressor::new().compress(&data, 0, len).unwrap();
        let restored = Lz77Ac18Decompressor.decompress(&compressed, len).unwrap();
        assert_eq!(restored, data, "length {}", len);
    }
}

#[test]
fn test_compresses_subrange() {
    let data = b"headerAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAtrailer".to_vec();
    let compressor = Lz77Ac18Compressor::new();
    let compressed = compressor.compress(&data, 6, 32).unwrap();
    let restored = Lz77Ac18Decompressor.decompress(&compressed, 32).unwrap();
    assert_eq!(restored, &data[6..38]);
}

#[test]
fn test_text_like_section() {
    let mut data = Vec::new();
    for i in 0..2000 {
        data.extend_from_slice(format!("LAYER_{:04}\0AcDbLayerTableRecord\0", i % 37).as_bytes());
    }
    let compressed = roundtrip(&data);
    assert!(compressed.len() * 4 < data.len());
}

#[test]
fn test_zero_page() {
    let data = vec![0u8; 0x7400];
    let compressed = roundtrip(&data);
    assert!(compressed.len() < 0x400);
}

#[test]
fn test_long_periodic_input_wraps_dictionary() {
    common::init_tracing();
    // larger than the 8 MiB dictionary, period below 256
    let len = (1 << 23) + 0x3000;
    let period: Vec<u8> = (0..251u32).map(|i| (i * 7 + 3) as u8).collect();
    let data: Vec<u8> = period.iter().copied().cycle().take(len).collect();

    let compressed = Lz77Ac18Compressor::new().compress(&data, 0, len).unwrap();
    assert!(compressed.len() < len / 16);
    let restored = Lz77Ac18Decompressor.decompress(&compressed, len).unwrap();
    assert!(restored == data, "wrapped dictionary roundtrip differs");
}

#[test]
fn test_write_to_sink_matches_trait() {
    let data: Vec<u8> = noise(300, 7).into_iter().cycle().take(3000).collect();
    let compressor = Lz77Ac18Compressor::new();
    let mut sink = Vec::new();
    compressor.compress_to(&data, &mut sink).unwrap();
    assert_eq!(sink, compressor.compress(&data, 0, data.len()).unwrap());
}

fn section_like() -> impl Strategy<Value = Vec<u8>> {
    // runs and repeats are what real sections are made of
    prop::collection::vec(
        prop_oneof![
            prop::collection::vec(any::<u8>(), 0..40),
            (any::<u8>(), 1usize..300).prop_map(|(b, n)| vec![b; n]),
            Just(b"AcDbEntity\0".to_vec()),
        ],
        0..60,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_roundtrip_arbitrary(data in prop::collection::vec(any::<u8>(), 0..5000)) {
        let compressed = Lz77Ac18Compressor::new().compress(&data, 0, data.len()).unwrap();
        let restored = Lz77Ac18Decompressor.decompress(&compressed, data.len()).unwrap();
        prop_assert_eq!(restored, data);
    }

    #[test]
    fn prop_roundtrip_section_like(data in section_like()) {
        let compressed = Lz77Ac18Compressor::new().compress(&data, 0, data.len()).unwrap();
        let restored = Lz77Ac18Decompressor.decompress(&compressed, data.len()).unwrap();
        prop_assert_eq!(restored, data);
    }

    #[test]
    fn prop_output_is_deterministic(data in section_like()) {
        let c = Lz77Ac18Compressor::new();
        prop_assert_eq!(
            c.compress(&data, 0, data.len()).unwrap(),
            c.compress(&data, 0, data.len()).unwrap()
        );
    }
}
