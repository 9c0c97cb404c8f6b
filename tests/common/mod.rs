//! Shared test utilities for the dwg-encoder integration tests.
//!
//! Holds the document builders, a tracing initializer, and a small nom
//! parser for the parts of the container the encoder lays out (file header,
//! directory, object map, object framing).

#![allow(dead_code)]

pub mod builders;

use dwg_encoder::io::dwg::constants::{sentinels, CRC_SEED};
use dwg_encoder::io::dwg::crc::crc8;
use nom::bytes::complete::{tag, take};
use nom::multi::{count, many0};
use nom::number::complete::{be_u16, le_u16, le_u32, u8 as byte};
use nom::sequence::tuple;
use nom::IResult;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output to the test harness, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ===========================================================================
// File header
// ===========================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    pub number: u8,
    pub address: u32,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub version: String,
    pub maintenance_version: u8,
    pub preview_address: u32,
    pub dwg_version: u8,
    pub maintenance_release: u8,
    pub codepage: u16,
    pub directory: Vec<DirectoryRecord>,
    pub crc: u16,
    /// Offset of the CRC, which is also the end of the checksummed range
    pub crc_offset: usize,
}

fn directory_record(input: &[u8]) -> IResult<&[u8], DirectoryRecord> {
    let (input, (number, address, size)) = tuple((byte, le_u32, le_u32))(input)?;
    Ok((
        input,
        DirectoryRecord {
            number,
            address,
            size,
        },
    ))
}

/// Parse the file header up to and including its end sentinel.
pub fn file_header(data: &[u8]) -> IResult<&[u8], FileHeader> {
    let (input, version) = take(6usize)(data)?;
    let (input, _) = tag(&[0u8; 5][..])(input)?;
    let (input, (maintenance_version, _one, preview_address)) =
        tuple((byte, tag(&[1u8][..]), le_u32))(input)?;
    let (input, (dwg_version, maintenance_release, codepage, sections)) =
        tuple((byte, byte, le_u16, le_u32))(input)?;
    let (input, directory) = count(directory_record, sections as usize)(input)?;
    let crc_offset = data.len() - input.len();
    let (input, crc) = le_u16(input)?;
    let (input, _) = tag(&sentinels::FILE_HEADER_END[..])(input)?;

    Ok((
        input,
        FileHeader {
            version: String::from_utf8_lossy(version).into_owned(),
            maintenance_version,
            preview_address,
            dwg_version,
            maintenance_release,
            codepage,
            directory,
            crc,
            crc_offset,
        },
    ))
}

pub fn parse_file_header(data: &[u8]) -> FileHeader {
    file_header(data).expect("file header").1
}

// ===========================================================================
// Object map and object framing
// ===========================================================================

/// Unsigned modular char: 7 bits per byte, high bit continues.
pub fn modular_char(mut input: &[u8]) -> IResult<&[u8], u64> {
    let mut value = 0u64;
    let mut shift = 0;
    loop {
        let (rest, b) = byte(input)?;
        input = rest;
        value |= ((b & 0x7F) as u64) << shift;
        if b & 0x80 == 0 {
            return Ok((input, value));
        }
        shift += 7;
    }
}

/// Signed modular char: the last byte holds 6 value bits and the sign.
pub fn signed_modular_char(mut input: &[u8]) -> IResult<&[u8], i64> {
    let mut value = 0u64;
    let mut shift = 0;
    loop {
        let (rest, b) = byte(input)?;
        input = rest;
        if b & 0x80 == 0 {
            value |= ((b & 0x3F) as u64) << shift;
            let value = value as i64;
            return Ok((input, if b & 0x40 != 0 { -value } else { value }));
        }
        value |= ((b & 0x7F) as u64) << shift;
        shift += 7;
    }
}

/// Modular short: 15 bits per little-endian word, high bit continues.
pub fn modular_short(mut input: &[u8]) -> IResult<&[u8], u32> {
    let mut value = 0u32;
    let mut shift = 0;
    loop {
        let (rest, word) = le_u16(input)?;
        input = rest;
        value |= ((word & 0x7FFF) as u32) << shift;
        if word & 0x8000 == 0 {
            return Ok((input, value));
        }
        shift += 15;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapChunk {
    /// Size field, counting itself
    pub size: u16,
    /// (handle delta, address delta) pairs
    pub pairs: Vec<(u64, i64)>,
    pub crc_ok: bool,
}

fn map_chunk(input: &[u8]) -> IResult<&[u8], MapChunk> {
    let (rest, size) = be_u16(input)?;
    let (rest, body) = take(size.saturating_sub(2) as usize)(rest)?;
    let (rest, crc) = be_u16(rest)?;
    let (_, pairs) = many0(tuple((modular_char, signed_modular_char)))(body)?;
    let crc_ok = crc8(CRC_SEED, &input[..size as usize]) == crc;
    Ok((rest, MapChunk { size, pairs, crc_ok }))
}

/// Parse the object map at the start of `input`, terminator included.
pub fn object_map_chunks(mut input: &[u8]) -> IResult<&[u8], Vec<MapChunk>> {
    let mut chunks = Vec::new();
    loop {
        let (rest, chunk) = map_chunk(input)?;
        input = rest;
        let last = chunk.size == 2;
        chunks.push(chunk);
        if last {
            return Ok((input, chunks));
        }
    }
}

/// Absolute (handle, address) pairs of an object map.
pub fn object_map(data: &[u8], address: usize) -> Vec<(u64, u64)> {
    let (_, chunks) = object_map_chunks(&data[address..]).expect("object map");
    let mut out = Vec::new();
    for chunk in chunks {
        assert!(chunk.crc_ok, "object map chunk CRC mismatch");
        let (mut handle, mut addr) = (0u64, 0i64);
        for (dh, da) in chunk.pairs {
            handle += dh;
            addr += da;
            out.push((handle, addr as u64));
        }
    }
    out
}

/// The body of the object framed at `address`, after checking its CRC.
pub fn object_body(data: &[u8], address: usize) -> &[u8] {
    let input = &data[address..];
    let (rest, size) = modular_short(input).expect("object size");
    let header = input.len() - rest.len();
    let (rest, body) = take::<_, _, nom::error::Error<&[u8]>>(size as usize)(rest)
        .expect("object body");
    let (_, crc) = be_u16::<_, nom::error::Error<&[u8]>>(rest).expect("object crc");
    assert_eq!(
        crc8(CRC_SEED, &input[..header + size as usize]),
        crc,
        "object CRC at {:#X}",
        address
    );
    body
}
