//! LZ77 AC18 compression and decompression.
//!
//! The compressor keeps an 8 MiB ring dictionary filled one 1 KiB sector at
//! a time. Every position of a sector is entered in a hash-chain keyed on
//! its next three bytes, and matches are searched lazily: a match found at
//! `i` is dropped for a strictly longer one at `i + 1`.
//!
//! Opcodes, with `offset = distance - 1`:
//!
//! ```text
//! short   length 3..=14, offset <= 0xFF     ((len+1)<<4 | (offset&3)<<2 | lit), offset>>2
//! medium  length 3..=33, offset <= 0x3FFF   0x1E+len, offset<<2 | lit, offset>>6
//! long    length >= 34,  offset <= 0x3FFF   0x20, chain(len-0x21), offset<<2 | lit, offset>>6
//! far     length >= 4,   offset >  0x3FFF   0x10 | pos>>11&8 | len bits, pos<<2 | lit, pos>>6
//! end     0x11
//! ```
//!
//! Literal runs of up to three bytes after a match ride in the low two bits
//! of the match; longer runs and the leading run carry their own count.

use crate::error::{DxfError, Result};
use std::io::{BufWriter, Cursor, Read, Write};
use tracing::{debug, trace};

const THRESHOLD: usize = 2;
const MATCH_BITS: u32 = 18;
const MAX_MATCH: usize = (1 << MATCH_BITS) + 1;
const DICT_BITS: u32 = 23;
const DICT_SIZE: usize = 1 << DICT_BITS;
const HASH_BITS: u32 = 20;
const HASH_SIZE: usize = 1 << HASH_BITS;
const SHIFT_BITS: u32 = 7;
const SECTOR_BITS: u32 = 10;
const SECTOR_LEN: usize = 1 << SECTOR_BITS;
const MAX_COMPARES: usize = 75;
const NIL: u32 = u32::MAX;

/// Farthest distance reachable by a short match.
const NEAR_DISTANCE: usize = 0xFF;
/// Matches between `NEAR_DISTANCE` and this distance are not searched.
const WINDOW_DISTANCE: usize = 0x3FFF;
/// Largest offset a medium or long match can carry.
const MAX_NEAR_OFFSET: usize = 0x3FFF;
/// Farthest distance a far match can carry.
const MAX_DISTANCE: usize = 0xBFFF;
const FAR_BIAS: usize = 0x4000;

const END_OF_STREAM: u8 = 0x11;

// ---------------------------------------------------------------------------
// Decompressor
// ---------------------------------------------------------------------------

/// Decompressor for the LZ77 AC18 variant.
pub struct Lz77Ac18Decompressor;

impl super::Decompressor for Lz77Ac18Decompressor {
    fn decompress(&self, source: &[u8], decompressed_size: usize) -> Result<Vec<u8>> {
        let mut src = Cursor::new(source);
        let mut dst = Vec::with_capacity(decompressed_size);
        decompress_to_dest(&mut src, &mut dst)?;

        // short inputs are padded to a 4-byte literal run
        if dst.len() < decompressed_size {
            return Err(DxfError::Decompression(format!(
                "stream expands to {} bytes, {} expected",
                dst.len(),
                decompressed_size
            )));
        }
        dst.truncate(decompressed_size);
        Ok(dst)
    }
}

/// Expand an LZ77 stream from `src`, appending to `dst`.
pub fn decompress_to_dest<R: Read>(src: &mut R, dst: &mut Vec<u8>) -> Result<()> {
    let mut opcode1 = read_byte(src)?;

    if (opcode1 & 0xF0) == 0 {
        opcode1 = copy(literal_count(opcode1, src)? + 3, src, dst)?;
    }

    while opcode1 != END_OF_STREAM {
        let compressed_bytes: usize;
        let comp_offset: usize;

        if opcode1 >= 0x40 {
            compressed_bytes = (opcode1 >> 4) as usize - 1;
            let opcode2 = read_byte(src)?;
            comp_offset = (((opcode1 >> 2) & 3) as usize | (opcode2 as usize) << 2) + 1;
        } else if opcode1 >= 0x20 {
            compressed_bytes = read_compressed_bytes(opcode1, 0b0001_1111, src)?;
            let (offset, next) = two_byte_offset(0, 1, src)?;
            comp_offset = offset;
            opcode1 = next;
        } else if opcode1 >= 0x10 {
            compressed_bytes = read_compressed_bytes(opcode1, 0b0111, src)?;
            let (offset, next) = two_byte_offset(((opcode1 & 8) as usize) << 11, FAR_BIAS, src)?;
            comp_offset = offset;
            opcode1 = next;
        } else {
            return Err(DxfError::Decompression(format!(
                "literal run {:#04X} where a match was expected",
                opcode1
            )));
        }

        copy_back(dst, comp_offset, compressed_bytes)?;

        let mut lit_count = (opcode1 & 3) as usize;
        if lit_count == 0 {
            opcode1 = read_byte(src)?;
            if (opcode1 & 0xF0) == 0 {
                lit_count = literal_count(opcode1, src)? + 3;
            }
        }

        if lit_count > 0 {
            opcode1 = copy(lit_count, src, dst)?;
        }
    }

    Ok(())
}

fn read_byte<R: Read>(stream: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    stream.read_exact(&mut buf).map_err(|_| {
        DxfError::Decompression("unexpected end of compressed data".to_string())
    })?;
    Ok(buf[0])
}

/// Copy `count` literal bytes from src to dst, return the next opcode byte.
fn copy<R: Read>(count: usize, src: &mut R, dst: &mut Vec<u8>) -> Result<u8> {
    let start = dst.len();
    dst.resize(start + count, 0);
    src.read_exact(&mut dst[start..]).map_err(|_| {
        DxfError::Decompression(format!("literal run of {} bytes is cut short", count))
    })?;
    read_byte(src)
}

/// Repeat `count` bytes found `offset` bytes back; the ranges may overlap.
fn copy_back(dst: &mut Vec<u8>, offset: usize, count: usize) -> Result<()> {
    if offset == 0 || offset > dst.len() {
        return Err(DxfError::Decompression(format!(
            "match offset {} reaches before the start of {} bytes",
            offset,
            dst.len()
        )));
    }
    let start = dst.len() - offset;
    dst.reserve(count);
    for k in 0..count {
        let byte = dst[start + k];
        dst.push(byte);
    }
    Ok(())
}

/// Decode a literal length: the low nibble, or when it is 0 a chain of
/// zero bytes worth 0xFF each ended by a non-zero byte, plus 0x0F.
fn literal_count<R: Read>(code: u8, src: &mut R) -> Result<usize> {
    let mut low_bits = (code & 0x0F) as usize;
    if low_bits == 0 {
        let mut last_byte = read_byte(src)?;
        while last_byte == 0 {
            low_bits += 0xFF;
            last_byte = read_byte(src)?;
        }
        low_bits += 0x0F + last_byte as usize;
    }
    Ok(low_bits)
}

/// Decode a match length held in the `valid_bits` of the opcode, or in a
/// chain when those bits are 0.
fn read_compressed_bytes<R: Read>(opcode1: u8, valid_bits: u8, src: &mut R) -> Result<usize> {
    let mut compressed_bytes = (opcode1 & valid_bits) as usize;

    if compressed_bytes == 0 {
        let mut last_byte = read_byte(src)?;
        while last_byte == 0 {
            compressed_bytes += 0xFF;
            last_byte = read_byte(src)?;
        }
        compressed_bytes += last_byte as usize + valid_bits as usize;
    }

    Ok(compressed_bytes + 2)
}

/// Read a 2-byte offset. Returns the offset and the first byte, whose low
/// bits hold the trailing literal count.
fn two_byte_offset<R: Read>(offset: usize, added_value: usize, src: &mut R) -> Result<(usize, u8)> {
    let first_byte = read_byte(src)?;
    let second_byte = read_byte(src)?;

    let offset = (offset | (first_byte as usize) >> 2 | (second_byte as usize) << 6) + added_value;
    Ok((offset, first_byte))
}

// ---------------------------------------------------------------------------
// Compressor
// ---------------------------------------------------------------------------

/// Compressor for the LZ77 AC18 variant.
///
/// Stateless: every call allocates its own dictionary.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lz77Ac18Compressor;

impl Lz77Ac18Compressor {
    pub fn new() -> Self {
        Self
    }

    /// Compress `source` into `sink`, ending with the `0x11` marker.
    pub fn compress_to<W: Write>(&self, source: &[u8], sink: &mut W) -> Result<()> {
        let mut dict = Dictionary::new(source.len())?;
        let mut encoder = Encoder::new(source, BufWriter::new(sink));

        let mut dictpos = 0usize;
        let mut base = 0usize;
        let mut loaded = 0usize;
        let mut wrapped = false;

        while loaded < source.len() {
            if wrapped {
                dict.evict(dictpos);
            }
            let len = SECTOR_LEN.min(source.len() - loaded);
            dict.load(dictpos, &source[loaded..loaded + len]);
            dict.hash_sector(dictpos, len);
            encoder.search_sector(&dict, base, dictpos, len)?;

            loaded += len;
            dictpos += SECTOR_LEN;
            if dictpos == dict.size {
                trace!(loaded, "dictionary wrapped");
                dictpos = 0;
                base += dict.size;
                wrapped = true;
            }
        }

        let written = encoder.finish()?;
        debug!(input = source.len(), output = written, "lz77 compressed");
        Ok(())
    }
}

impl super::Compressor for Lz77Ac18Compressor {
    fn compress(&self, source: &[u8], offset: usize, total_size: usize) -> Result<Vec<u8>> {
        let end = offset
            .checked_add(total_size)
            .filter(|&end| end <= source.len())
            .ok_or_else(|| {
                DxfError::Compression(format!(
                    "range {}+{} is outside a {} byte buffer",
                    offset,
                    total_size,
                    source.len()
                ))
            })?;

        let mut dest = Vec::new();
        dest.try_reserve(total_size / 2 + 16)
            .map_err(|_| DxfError::OutOfMemory(total_size / 2 + 16))?;
        self.compress_to(&source[offset..end], &mut dest)?;
        Ok(dest)
    }
}

fn allocate<T: Copy>(len: usize, value: T) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| DxfError::OutOfMemory(len * std::mem::size_of::<T>()))?;
    buffer.resize(len, value);
    Ok(buffer)
}

/// Ring dictionary with its hash heads and chain links.
///
/// Inputs smaller than the full ring get a ring just large enough for them,
/// so the ring only wraps for inputs over 8 MiB.
struct Dictionary {
    data: Vec<u8>,
    hash: Vec<u32>,
    next: Vec<u32>,
    size: usize,
}

impl Dictionary {
    fn new(input_len: usize) -> Result<Self> {
        let sectors = input_len.div_ceil(SECTOR_LEN).max(1);
        let size = sectors.saturating_mul(SECTOR_LEN).min(DICT_SIZE);
        Ok(Self {
            data: allocate(size + MAX_MATCH, 0u8)?,
            hash: allocate(HASH_SIZE, NIL)?,
            next: allocate(size, NIL)?,
            size,
        })
    }

    fn load(&mut self, pos: usize, bytes: &[u8]) {
        self.data[pos..pos + bytes.len()].copy_from_slice(bytes);
        if pos == 0 {
            self.data.copy_within(0..MAX_MATCH, self.size);
        }
    }

    /// Drop every link into the sector at `pos` before it is overwritten.
    fn evict(&mut self, pos: usize) {
        let sector = pos >> SECTOR_BITS;
        for link in self.hash.iter_mut().chain(self.next.iter_mut()) {
            if *link != NIL && (*link as usize >> SECTOR_BITS) == sector {
                *link = NIL;
            }
        }
    }

    fn hash_sector(&mut self, pos: usize, len: usize) {
        if len <= THRESHOLD {
            self.next[pos..pos + len].fill(NIL);
            return;
        }

        let end = pos + len - THRESHOLD;
        self.next[end..pos + len].fill(NIL);

        let mut key = ((self.data[pos] as usize) << SHIFT_BITS) ^ self.data[pos + 1] as usize;
        for i in pos..end {
            key = ((key << SHIFT_BITS) & (HASH_SIZE - 1)) ^ self.data[i + 2] as usize;
            self.next[i] = self.hash[key];
            self.hash[key] = i as u32;
        }
    }

    /// Longest match for `pos` strictly longer than `best_len`.
    fn find_match(&self, pos: usize, best_len: usize) -> Option<Match> {
        let mut found = None;
        let mut length = best_len;
        let mut probe = self.data[pos + length];
        let mut candidate = pos;

        for _ in 0..MAX_COMPARES {
            let link = self.next[candidate];
            if link == NIL {
                break;
            }
            candidate = link as usize;
            if candidate >= pos {
                break;
            }
            let distance = pos - candidate;
            if (distance > NEAR_DISTANCE && distance < WINDOW_DISTANCE) || distance > MAX_DISTANCE
            {
                break;
            }
            if self.data[candidate + length] != probe {
                continue;
            }

            let common = self.data[candidate..candidate + MAX_MATCH]
                .iter()
                .zip(&self.data[pos..pos + MAX_MATCH])
                .take_while(|(a, b)| a == b)
                .count();
            if common > length {
                length = common;
                found = Some(Match { length, distance });
                if length == MAX_MATCH {
                    break;
                }
                probe = self.data[pos + length];
            }
        }
        found
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Match {
    length: usize,
    distance: usize,
}

impl Match {
    fn is_far(&self) -> bool {
        self.distance - 1 > MAX_NEAR_OFFSET
    }

    /// Far matches of 3 bytes would collide with the end marker.
    fn is_encodable(&self) -> bool {
        self.length > THRESHOLD && !(self.is_far() && self.length < 4)
    }
}

/// Match selection state. A match is held back until the literal run
/// following it is known.
struct Encoder<'a, W: Write> {
    source: &'a [u8],
    out: OpcodeWriter<W>,
    pending: Option<Match>,
    literal_start: usize,
}

impl<'a, W: Write> Encoder<'a, W> {
    fn new(source: &'a [u8], out: W) -> Self {
        Self {
            source,
            out: OpcodeWriter::new(out),
            pending: None,
            literal_start: 0,
        }
    }

    /// Search the sector of `len` bytes at `start`; `base` is the input
    /// offset of dictionary position 0.
    fn search_sector(&mut self, dict: &Dictionary, base: usize, start: usize, len: usize) -> Result<()> {
        let end = start + len;
        let mut i = start;

        while i < end {
            let leading_done = self.pending.is_some() || base + i - self.literal_start >= 4;
            let found = if leading_done {
                dict.find_match(i, THRESHOLD).filter(Match::is_encodable)
            } else {
                None
            };
            let Some(mut found) = found else {
                i += 1;
                continue;
            };

            while i + 1 < end && found.length < MAX_MATCH {
                match dict.find_match(i + 1, found.length) {
                    Some(better) => {
                        found = better;
                        i += 1;
                    }
                    None => break,
                }
            }

            found.length = found.length.min(end - i);
            if !found.is_encodable() {
                i += 1;
                continue;
            }

            self.emit(base + i, found)?;
            i += found.length;
        }
        Ok(())
    }

    fn emit(&mut self, at: usize, found: Match) -> Result<()> {
        let literals = &self.source[self.literal_start..at];
        match self.pending.take() {
            Some(previous) => self.out.match_with_literals(previous, literals)?,
            None => self.out.leading_literals(literals)?,
        }
        self.pending = Some(found);
        self.literal_start = at + found.length;
        Ok(())
    }

    /// Flush the last match and its literals, then the end marker.
    fn finish(mut self) -> Result<usize> {
        let literals = &self.source[self.literal_start..];
        match self.pending.take() {
            Some(previous) => self.out.match_with_literals(previous, literals)?,
            None if literals.len() < 4 => {
                let mut padded = [0u8; 4];
                padded[..literals.len()].copy_from_slice(literals);
                self.out.leading_literals(&padded)?;
            }
            None => self.out.leading_literals(literals)?,
        }
        self.out.end()
    }
}

/// Opcode serializer.
struct OpcodeWriter<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> OpcodeWriter<W> {
    fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    fn bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.out.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    /// `value` as zero bytes worth 0xFF each, then the non-zero remainder.
    fn length_chain(&mut self, mut value: usize) -> Result<()> {
        debug_assert!(value > 0);
        while value > 0xFF {
            self.bytes(&[0])?;
            value -= 0xFF;
        }
        self.bytes(&[value as u8])
    }

    /// Count byte(s) of a literal run longer than three bytes.
    fn literal_length(&mut self, count: usize) -> Result<()> {
        let n = count - 3;
        if n <= 0x0F {
            self.bytes(&[n as u8])
        } else {
            self.bytes(&[0])?;
            self.length_chain(n - 0x0F)
        }
    }

    /// The run before the first match; at least four bytes long.
    fn leading_literals(&mut self, literals: &[u8]) -> Result<()> {
        self.literal_length(literals.len())?;
        self.bytes(literals)
    }

    fn match_with_literals(&mut self, found: Match, literals: &[u8]) -> Result<()> {
        self.match_op(found.length, found.distance - 1, literals.len())?;
        if literals.len() > 3 {
            self.literal_length(literals.len())?;
        }
        self.bytes(literals)
    }

    fn match_op(&mut self, length: usize, offset: usize, literal_count: usize) -> Result<()> {
        let lit = if literal_count <= 3 { literal_count as u8 } else { 0 };

        if offset > MAX_NEAR_OFFSET {
            let pos = offset + 1 - FAR_BIAS;
            let high = ((pos >> 11) & 8) as u8;
            if length <= 9 {
                self.bytes(&[0x10 | high | (length - 2) as u8])?;
            } else {
                self.bytes(&[0x10 | high])?;
                self.length_chain(length - 9)?;
            }
            self.two_byte_offset(pos, lit)
        } else if length < 15 && offset <= NEAR_DISTANCE {
            let op = ((length + 1) << 4) as u8 | ((offset << 2) & 0x0C) as u8 | lit;
            self.bytes(&[op, (offset >> 2) as u8])
        } else if length < 34 {
            self.bytes(&[(0x1E + length) as u8])?;
            self.two_byte_offset(offset, lit)
        } else {
            self.bytes(&[0x20])?;
            self.length_chain(length - 0x21)?;
            self.two_byte_offset(offset, lit)
        }
    }

    fn two_byte_offset(&mut self, value: usize, lit: u8) -> Result<()> {
        self.bytes(&[((value << 2) & 0xFF) as u8 | lit, (value >> 6) as u8])
    }

    fn end(mut self) -> Result<usize> {
        self.bytes(&[END_OF_STREAM])?;
        self.out.flush()?;
        Ok(self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Compressor, Decompressor};
    use super::*;

    fn compress(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        Lz77Ac18Compressor::new().compress_to(data, &mut out).unwrap();
        out
    }

    fn roundtrip(data: &[u8]) -> Vec<u8> {
        let compressed = compress(data);
        let restored = Lz77Ac18Decompressor
            .decompress(&compressed, data.len())
            .unwrap();
        assert_eq!(restored, data);
        compressed
    }

    fn opcodes(f: impl FnOnce(&mut OpcodeWriter<&mut Vec<u8>>) -> Result<()>) -> Vec<u8> {
        let mut buf = Vec::new();
        let mut writer = OpcodeWriter::new(&mut buf);
        f(&mut writer).unwrap();
        buf
    }

    fn noise(len: usize, mut state: u32) -> Vec<u8> {
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state >> 24) as u8
            })
            .collect()
    }

    #[test]
    fn test_literal_length_chain() {
        assert_eq!(opcodes(|w| w.literal_length(4)), vec![0x01]);
        assert_eq!(opcodes(|w| w.literal_length(18)), vec![0x0F]);
        assert_eq!(opcodes(|w| w.literal_length(19)), vec![0x00, 0x01]);
        assert_eq!(opcodes(|w| w.literal_length(270)), vec![0x00, 0xFC]);
        assert_eq!(opcodes(|w| w.literal_length(283)), vec![0x00, 0x00, 0x0A]);
    }

    #[test]
    fn test_match_tier_boundaries() {
        assert_eq!(opcodes(|w| w.match_op(14, 255, 0)), vec![0xFC, 0x3F]);
        assert_eq!(opcodes(|w| w.match_op(15, 255, 0)), vec![0x2D, 0xFC, 0x03]);
        assert_eq!(opcodes(|w| w.match_op(14, 256, 0)), vec![0x2C, 0x00, 0x04]);
        assert_eq!(opcodes(|w| w.match_op(34, 0x10, 2)), vec![0x20, 0x01, 0x42, 0x00]);
    }

    #[test]
    fn test_short_match_carries_literal_count() {
        assert_eq!(opcodes(|w| w.match_op(3, 0, 3)), vec![0x43, 0x00]);
        assert_eq!(opcodes(|w| w.match_op(3, 0, 4)), vec![0x40, 0x00]);
    }

    #[test]
    fn test_far_match_opcodes() {
        // distance 0x4001 -> pos 1
        assert_eq!(opcodes(|w| w.match_op(4, 0x4000, 0)), vec![0x12, 0x04, 0x00]);
        // distance 0xBFFF -> pos 0x7FFF, bit 14 lands in the opcode
        assert_eq!(
            opcodes(|w| w.match_op(10, 0xBFFE, 1)),
            vec![0x18, 0x01, 0xFD, 0xFF]
        );
    }

    #[test]
    fn test_empty_input_is_padded_literal_run() {
        assert_eq!(compress(&[]), vec![0x01, 0, 0, 0, 0, 0x11]);
        assert!(roundtrip(&[]).len() == 6);
    }

    #[test]
    fn test_short_input_is_padded() {
        assert_eq!(compress(b"abc"), vec![0x01, b'a', b'b', b'c', 0, 0x11]);
        roundtrip(b"abc");
        roundtrip(b"a");
    }

    #[test]
    fn test_no_match_before_four_literals() {
        let compressed = compress(b"aaaaaaaaaa");
        assert_eq!(&compressed[..5], &[0x01, b'a', b'a', b'a', b'a']);
        roundtrip(b"aaaaaaaaaa");
    }

    #[test]
    fn test_repetitive_data_shrinks() {
        let data: Vec<u8> = (0..4096).map(|i| (i % 64) as u8).collect();
        let compressed = roundtrip(&data);
        assert!(compressed.len() < data.len() / 4);
    }

    #[test]
    fn test_matches_stop_at_sector_end() {
        let data = vec![0x55u8; 3 * SECTOR_LEN + 17];
        roundtrip(&data);
    }

    #[test]
    fn test_far_match_roundtrip() {
        // the repeat starts on a sector boundary 0x4400 bytes after its source
        let mut data = noise(0x4400, 0x1234_5678);
        let head = data[..1000].to_vec();
        data.extend_from_slice(&head);
        let compressed = roundtrip(&data);
        assert!(compressed.len() + 500 < data.len());
    }

    #[test]
    fn test_noise_roundtrip() {
        roundtrip(&noise(5000, 7));
    }

    #[test]
    fn test_compress_trait_range() {
        let data: Vec<u8> = (0..300).map(|i| (i % 10) as u8).collect();
        let compressed = Lz77Ac18Compressor::new().compress(&data, 100, 150).unwrap();
        let restored = Lz77Ac18Decompressor.decompress(&compressed, 150).unwrap();
        assert_eq!(restored, &data[100..250]);

        assert!(matches!(
            Lz77Ac18Compressor::new().compress(&data, 200, 150),
            Err(DxfError::Compression(_))
        ));
    }

    #[test]
    fn test_decompress_end_marker_only() {
        let result = Lz77Ac18Decompressor.decompress(&[0x11], 0).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_decompress_rejects_bad_streams() {
        // offset before the start of the output
        let bad = [0x01, 1, 2, 3, 4, 0x40, 0xFF, 0x11];
        assert!(matches!(
            Lz77Ac18Decompressor.decompress(&bad, 7),
            Err(DxfError::Decompression(_))
        ));
        // cut off literal run
        assert!(Lz77Ac18Decompressor.decompress(&[0x05, 1, 2], 8).is_err());
        // too short for the requested size
        assert!(Lz77Ac18Decompressor
            .decompress(&[0x01, 1, 2, 3, 4, 0x11], 10)
            .is_err());
    }
}
