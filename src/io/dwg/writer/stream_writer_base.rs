//! Bit-level DWG stream writer over an in-memory buffer.
//!
//! Positions are logical bit offsets into a growable `Vec<u8>`, so a
//! position recorded before the buffer grows stays valid. Writes overwrite
//! in place: repositioning into already-written data and writing again
//! replaces exactly the bits written, which is what size and CRC backpatching
//! rely on.

use crate::error::{DxfError, Result};
use crate::io::dwg::crc::crc8;
use crate::types::{Color, DxfVersion, Handle, Vector3};

use super::stream_writer::IDwgStreamWriter;

use byteorder::{BigEndian, ByteOrder};
use encoding_rs::Encoding;

/// Bit-level writer used for every section and object.
#[derive(Debug, Clone)]
pub struct DwgStreamWriterBase {
    data: Vec<u8>,
    /// Current position, in bits
    position: u64,
    /// Highest position ever written, in bits
    end: u64,
    encoding: &'static Encoding,
    version: DxfVersion,
}

impl DwgStreamWriterBase {
    /// Create an empty writer.
    pub fn new(version: DxfVersion) -> Self {
        Self {
            data: Vec::new(),
            position: 0,
            end: 0,
            encoding: encoding_rs::WINDOWS_1252,
            version,
        }
    }

    /// Use `encoding` for TV strings written before R2007.
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn version(&self) -> DxfVersion {
        self.version
    }

    /// Written bytes. A trailing partial byte is included, zero padded.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Current byte position (the byte the next bit lands in).
    pub fn position(&self) -> usize {
        (self.position / 8) as usize
    }

    /// Bits already used in the current byte.
    pub fn bit_shift(&self) -> u8 {
        (self.position % 8) as u8
    }

    /// Written length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move to an already-written bit position.
    pub fn set_position_in_bits(&mut self, pos_in_bits: u64) -> Result<()> {
        if pos_in_bits > self.end {
            return Err(DxfError::InvalidFormat(format!(
                "cannot seek to bit {} past the end of the stream ({} bits)",
                pos_in_bits, self.end
            )));
        }
        self.position = pos_in_bits;
        Ok(())
    }

    /// Run `body` at `pos_in_bits`, then return to the current position.
    ///
    /// The previous position is restored whether `body` succeeds or not.
    pub fn with_position<T, F>(&mut self, pos_in_bits: u64, body: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let saved = self.position;
        self.set_position_in_bits(pos_in_bits)?;
        let result = body(self);
        self.position = saved;
        result
    }

    /// Discard everything from `pos_in_bits` on and continue writing there.
    pub fn rewind_to(&mut self, pos_in_bits: u64) -> Result<()> {
        self.set_position_in_bits(pos_in_bits)?;
        self.end = pos_in_bits;
        let bytes = pos_in_bits.div_ceil(8) as usize;
        self.data.truncate(bytes);
        let shift = (pos_in_bits % 8) as u8;
        if shift != 0 {
            if let Some(last) = self.data.last_mut() {
                *last &= !(0xFFu8 >> shift);
            }
        }
        Ok(())
    }

    /// Pad to a byte boundary, then write the checksum of
    /// `[start, current byte)` high byte first.
    pub fn write_crc(&mut self, start: usize, seed: u16) -> Result<u16> {
        self.write_spear_shift()?;
        let crc = self.crc_of(start, self.position(), seed)?;
        self.write_raw_ushort_be(crc)?;
        Ok(crc)
    }

    /// Checksum of an already-written byte range.
    pub fn crc_of(&self, start: usize, end: usize, seed: u16) -> Result<u16> {
        let bytes = self.data.get(start..end).ok_or_else(|| {
            DxfError::InvalidFormat(format!("invalid checksum range {start}..{end}"))
        })?;
        Ok(crc8(seed, bytes))
    }

    /// Write a u16 high byte first.
    pub fn write_raw_ushort_be(&mut self, value: u16) -> Result<()> {
        let mut buf = [0u8; 2];
        BigEndian::write_u16(&mut buf, value);
        self.write_bytes(&buf)
    }

    /// Reserve room for `additional` more bytes up front.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.data
            .try_reserve(additional)
            .map_err(|_| DxfError::OutOfMemory(self.data.len().saturating_add(additional)))
    }

    fn ensure_len(&mut self, bytes: usize) -> Result<()> {
        if bytes > self.data.len() {
            let additional = bytes - self.data.len();
            self.data
                .try_reserve(additional)
                .map_err(|_| DxfError::OutOfMemory(bytes))?;
            self.data.resize(bytes, 0);
        }
        Ok(())
    }

    fn advance(&mut self, bits: u64) {
        self.position += bits;
        if self.position > self.end {
            self.end = self.position;
        }
    }
}

impl IDwgStreamWriter for DwgStreamWriterBase {
    fn position_in_bits(&self) -> u64 {
        self.position
    }

    // ---------------------------------------------------------------
    // Raw writes
    // ---------------------------------------------------------------

    fn write_byte(&mut self, value: u8) -> Result<()> {
        let idx = self.position();
        let shift = self.bit_shift();
        if shift == 0 {
            self.ensure_len(idx + 1)?;
            self.data[idx] = value;
        } else {
            self.ensure_len(idx + 2)?;
            let keep_high = !(0xFFu8 >> shift);
            self.data[idx] = (self.data[idx] & keep_high) | (value >> shift);
            let keep_low = 0xFFu8 >> shift;
            self.data[idx + 1] = (self.data[idx + 1] & keep_low) | (value << (8 - shift));
        }
        self.advance(8);
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let needed = (self.position + 8 * bytes.len() as u64).div_ceil(8) as usize;
        self.ensure_len(needed)?;
        if self.bit_shift() == 0 {
            let idx = self.position();
            self.data[idx..idx + bytes.len()].copy_from_slice(bytes);
            self.advance(8 * bytes.len() as u64);
            return Ok(());
        }
        for &b in bytes {
            self.write_byte(b)?;
        }
        Ok(())
    }

    // ---------------------------------------------------------------
    // Bit-coded writes
    // ---------------------------------------------------------------

    fn write_bit(&mut self, value: bool) -> Result<()> {
        let idx = self.position();
        self.ensure_len(idx + 1)?;
        let mask = 0x80u8 >> self.bit_shift();
        if value {
            self.data[idx] |= mask;
        } else {
            self.data[idx] &= !mask;
        }
        self.advance(1);
        Ok(())
    }

    fn write_2bits(&mut self, value: u8) -> Result<()> {
        self.write_bit(value & 2 != 0)?;
        self.write_bit(value & 1 != 0)
    }

    fn write_3bits(&mut self, value: u8) -> Result<()> {
        self.write_bit(value & 4 != 0)?;
        self.write_bit(value & 2 != 0)?;
        self.write_bit(value & 1 != 0)
    }

    fn write_bit_short(&mut self, value: i16) -> Result<()> {
        if value == 0 {
            self.write_2bits(2)
        } else if value > 0 && value < 256 {
            self.write_2bits(1)?;
            self.write_byte(value as u8)
        } else if value == 256 {
            self.write_2bits(3)
        } else {
            self.write_2bits(0)?;
            self.write_bytes(&value.to_le_bytes())
        }
    }

    fn write_bit_long(&mut self, value: i32) -> Result<()> {
        if value == 0 {
            return self.write_2bits(2);
        }
        if value > 0 && value < 256 {
            self.write_2bits(1)?;
            return self.write_byte(value as u8);
        }
        self.write_2bits(0)?;
        self.write_bytes(&value.to_le_bytes())
    }

    fn write_bit_long_long(&mut self, value: i64) -> Result<()> {
        let bytes = (value as u64).to_le_bytes();
        let size = Handle::byte_count(value as u64);
        self.write_3bits(size)?;
        self.write_bytes(&bytes[..size as usize])
    }

    fn write_bit_double(&mut self, value: f64) -> Result<()> {
        if value == 0.0 {
            return self.write_2bits(2);
        }
        if value == 1.0 {
            return self.write_2bits(1);
        }
        self.write_2bits(0)?;
        self.write_bytes(&value.to_le_bytes())
    }

    fn write_bit_double_with_default(&mut self, def: f64, value: f64) -> Result<()> {
        if def == value {
            return self.write_2bits(0);
        }

        let def_bytes = def.to_le_bytes();
        let value_bytes = value.to_le_bytes();

        // count equal bytes from the most significant end
        let same = def_bytes
            .iter()
            .rev()
            .zip(value_bytes.iter().rev())
            .take_while(|(a, b)| a == b)
            .count();

        if same >= 4 {
            self.write_2bits(1)?;
            self.write_bytes(&value_bytes[..4])
        } else if same >= 2 {
            self.write_2bits(2)?;
            self.write_bytes(&value_bytes[4..6])?;
            self.write_bytes(&value_bytes[..4])
        } else {
            self.write_2bits(3)?;
            self.write_bytes(&value_bytes)
        }
    }

    fn write_modular_char(&mut self, value: u64) -> Result<()> {
        let mut rest = value;
        loop {
            let low = (rest & 0x7F) as u8;
            rest >>= 7;
            if rest == 0 {
                return self.write_byte(low);
            }
            self.write_byte(low | 0x80)?;
        }
    }

    fn write_signed_modular_char(&mut self, value: i64) -> Result<()> {
        let sign = if value < 0 { 0x40u8 } else { 0 };
        let mut rest = value.unsigned_abs();
        while rest >= 0x40 {
            self.write_byte((rest & 0x7F) as u8 | 0x80)?;
            rest >>= 7;
        }
        self.write_byte(rest as u8 | sign)
    }

    fn write_modular_short(&mut self, value: u32) -> Result<()> {
        let mut rest = value;
        while rest >= 0x8000 {
            self.write_raw_ushort((rest & 0x7FFF) as u16 | 0x8000)?;
            rest >>= 15;
        }
        self.write_raw_ushort(rest as u16)
    }

    // ---------------------------------------------------------------
    // Text, handles, colors
    // ---------------------------------------------------------------

    fn write_variable_text(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            return self.write_bit_short(0);
        }

        if self.version >= DxfVersion::AC1021 {
            let utf16: Vec<u16> = value.encode_utf16().collect();
            let len = i16::try_from(utf16.len())
                .map_err(|_| DxfError::Encoding(format!("text of {} chars is too long", utf16.len())))?;
            self.write_bit_short(len)?;
            let bytes: Vec<u8> = utf16.iter().flat_map(|ch| ch.to_le_bytes()).collect();
            self.write_bytes(&bytes)
        } else {
            let (encoded, _, _) = self.encoding.encode(value);
            let len = i16::try_from(encoded.len())
                .map_err(|_| DxfError::Encoding(format!("text of {} bytes is too long", encoded.len())))?;
            self.write_bit_short(len)?;
            self.write_bytes(&encoded)
        }
    }

    fn write_handle(&mut self, handle: Handle) -> Result<()> {
        let size = handle.size.max(Handle::byte_count(handle.value)).min(8);
        self.write_byte((handle.code & 0x0F) << 4 | size)?;
        for i in (0..size).rev() {
            self.write_byte((handle.value >> (8 * i as u32)) as u8)?;
        }
        Ok(())
    }

    fn write_object_type(&mut self, value: u16) -> Result<()> {
        if self.version >= DxfVersion::AC1024 {
            if value <= 0xFF {
                self.write_2bits(0)?;
                self.write_byte(value as u8)
            } else if (0x1F0..=0x2EF).contains(&value) {
                self.write_2bits(1)?;
                self.write_byte((value - 0x1F0) as u8)
            } else {
                self.write_2bits(2)?;
                self.write_bytes(&value.to_le_bytes())
            }
        } else {
            self.write_bit_short(value as i16)
        }
    }

    fn write_cm_color(&mut self, value: Color) -> Result<()> {
        if self.version >= DxfVersion::AC1018 {
            self.write_bit_short(0)?;
            self.write_bit_long(value.rgb_word() as i32)?;
            // color byte: no name, no book
            self.write_byte(0)
        } else {
            self.write_bit_short(value.approximate_index())
        }
    }

    // ---------------------------------------------------------------
    // Special types
    // ---------------------------------------------------------------

    fn write_bit_extrusion(&mut self, normal: Vector3) -> Result<()> {
        if self.version >= DxfVersion::AC1015 {
            if normal == Vector3::UNIT_Z {
                return self.write_bit(true);
            }
            self.write_bit(false)?;
        }
        self.write_3bit_double(normal)
    }

    fn write_bit_thickness(&mut self, thickness: f64) -> Result<()> {
        if self.version >= DxfVersion::AC1015 {
            if thickness == 0.0 {
                return self.write_bit(true);
            }
            self.write_bit(false)?;
        }
        self.write_bit_double(thickness)
    }

    fn write_spear_shift(&mut self) -> Result<()> {
        while self.bit_shift() != 0 {
            self.write_bit(false)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dwg::reader::DwgStreamReaderBase;

    fn make_writer() -> DwgStreamWriterBase {
        DwgStreamWriterBase::new(DxfVersion::AC1015)
    }

    fn reader(w: DwgStreamWriterBase) -> DwgStreamReaderBase {
        let version = w.version();
        DwgStreamReaderBase::new(w.into_data(), version)
    }

    #[test]
    fn test_write_bit_true() {
        let mut w = make_writer();
        w.write_bit(true).unwrap();
        w.write_spear_shift().unwrap();
        assert_eq!(w.data(), &[0x80]);
    }

    #[test]
    fn test_write_2bits() {
        let mut w = make_writer();
        w.write_2bits(3).unwrap();
        assert_eq!(w.position_in_bits(), 2);
        assert_eq!(w.data(), &[0xC0]);
    }

    #[test]
    fn test_write_bit_short_small() {
        let mut w = make_writer();
        w.write_bit_short(42).unwrap();
        // 01 then 0x2A, shifted by two bits
        assert_eq!(w.data(), &[0x4A, 0x80]);
        assert_eq!(w.position_in_bits(), 10);
    }

    #[test]
    fn test_write_bit_short_256() {
        let mut w = make_writer();
        w.write_bit_short(256).unwrap();
        assert_eq!(w.data(), &[0xC0]);
    }

    #[test]
    fn test_modular_char() {
        let mut w = make_writer();
        w.write_modular_char(0x85).unwrap();
        assert_eq!(w.data(), &[0x85, 0x01]);

        let mut w = make_writer();
        w.write_signed_modular_char(-1).unwrap();
        w.write_signed_modular_char(64).unwrap();
        assert_eq!(w.data(), &[0x41, 0xC0, 0x00]);
    }

    #[test]
    fn test_modular_short() {
        let mut w = make_writer();
        w.write_modular_short(0x8000).unwrap();
        assert_eq!(w.data(), &[0x00, 0x80, 0x01, 0x00]);

        let mut w = make_writer();
        w.write_modular_short(0x1234).unwrap();
        assert_eq!(w.data(), &[0x34, 0x12]);
    }

    #[test]
    fn test_write_handle() {
        let mut w = make_writer();
        w.write_handle(Handle::new(5, 0x1234)).unwrap();
        assert_eq!(w.data(), &[0x52, 0x12, 0x34]);

        let mut w = make_writer();
        w.write_handle(Handle::NULL.with_code(4)).unwrap();
        assert_eq!(w.data(), &[0x40]);
    }

    #[test]
    fn test_with_position_overwrites_and_restores() {
        let mut w = make_writer();
        w.write_bit(true).unwrap();
        let slot = w.position_in_bits();
        w.write_raw_long(0).unwrap();
        w.write_bit(true).unwrap();
        let end = w.position_in_bits();

        w.with_position(slot, |w| w.write_raw_long(0x0102_0304)).unwrap();
        assert_eq!(w.position_in_bits(), end);

        let mut r = reader(w);
        assert!(r.read_bit().unwrap());
        assert_eq!(r.read_raw_long().unwrap(), 0x0102_0304);
        assert!(r.read_bit().unwrap());
    }

    #[test]
    fn test_with_position_restores_on_error() {
        let mut w = make_writer();
        w.write_raw_long(7).unwrap();
        let result: Result<()> = w.with_position(8, |w| {
            w.write_byte(0xFF)?;
            Err(DxfError::Custom("boom".into()))
        });
        assert!(result.is_err());
        assert_eq!(w.position_in_bits(), 32);
    }

    #[test]
    fn test_seek_past_end_fails() {
        let mut w = make_writer();
        w.write_byte(1).unwrap();
        assert!(w.set_position_in_bits(9).is_err());
    }

    #[test]
    fn test_rewind_truncates() {
        let mut w = make_writer();
        w.write_bit(true).unwrap();
        let mark = w.position_in_bits();
        w.write_bit(true).unwrap();
        w.write_raw_long(-1).unwrap();
        w.rewind_to(mark).unwrap();
        w.write_bit(false).unwrap();
        assert_eq!(w.data(), &[0x80]);
        assert_eq!(w.position_in_bits(), 2);
    }

    #[test]
    fn test_write_crc_is_big_endian() {
        let mut w = make_writer();
        w.write_bytes(b"abc").unwrap();
        let crc = w.write_crc(0, 0xC0C1).unwrap();
        assert_eq!(crc, crc8(0xC0C1, b"abc"));
        assert_eq!(&w.data()[3..], &[(crc >> 8) as u8, crc as u8]);
    }

    #[test]
    fn test_cm_color_by_version() {
        let mut w = DwgStreamWriterBase::new(DxfVersion::AC1014);
        w.write_cm_color(Color::ByLayer).unwrap();
        let mut r = reader(w);
        assert_eq!(r.read_bit_short().unwrap(), 256);

        let mut w = DwgStreamWriterBase::new(DxfVersion::AC1018);
        w.write_cm_color(Color::Index(3)).unwrap();
        let mut r = reader(w);
        assert_eq!(r.read_bit_short().unwrap(), 0);
        assert_eq!(r.read_bit_long().unwrap() as u32, 0xC300_0003);
        assert_eq!(r.read_byte().unwrap(), 0);
    }

    #[test]
    fn test_roundtrip_bit_short() {
        for value in [0i16, 1, 42, 255, 256, -1, 0x1234, i16::MAX, i16::MIN] {
            let mut w = make_writer();
            w.write_bit(true).unwrap();
            w.write_bit_short(value).unwrap();
            let mut r = reader(w);
            r.read_bit().unwrap();
            assert_eq!(r.read_bit_short().unwrap(), value, "roundtrip failed for {value}");
        }
    }

    #[test]
    fn test_roundtrip_bit_long() {
        for value in [0i32, 1, 42, 255, 0x1234_5678, -1, i32::MAX] {
            let mut w = make_writer();
            w.write_bit_long(value).unwrap();
            let mut r = reader(w);
            assert_eq!(r.read_bit_long().unwrap(), value, "roundtrip failed for {value}");
        }
    }

    #[test]
    fn test_roundtrip_bit_double_with_default() {
        let cases = [(0.0, 0.0), (1.0, 1.5), (10.0, 10.000001), (3.0, -7.25e10)];
        for (def, value) in cases {
            let mut w = make_writer();
            w.write_bit_double_with_default(def, value).unwrap();
            let mut r = reader(w);
            assert_eq!(r.read_bit_double_with_default(def).unwrap(), value);
        }
    }

    #[test]
    fn test_roundtrip_variable_text() {
        let mut w = make_writer();
        w.write_variable_text("Hello").unwrap();
        let mut r = reader(w);
        assert_eq!(r.read_variable_text().unwrap(), "Hello");

        let mut w = DwgStreamWriterBase::new(DxfVersion::AC1021);
        w.write_variable_text("ABC").unwrap();
        let mut r = reader(w);
        assert_eq!(r.read_variable_text().unwrap(), "ABC");
    }

    #[test]
    fn test_extrusion_and_thickness_shortcuts() {
        let mut w = make_writer();
        w.write_bit_extrusion(Vector3::UNIT_Z).unwrap();
        w.write_bit_thickness(0.0).unwrap();
        assert_eq!(w.position_in_bits(), 2);

        let mut w = DwgStreamWriterBase::new(DxfVersion::AC1014);
        w.write_bit_thickness(0.0).unwrap();
        assert_eq!(w.position_in_bits(), 2);
    }

    #[test]
    fn test_roundtrip_object_type_ac24() {
        for value in [1u16, 0x43, 0x1F2, 0x1F3, 0x300] {
            let mut w = DwgStreamWriterBase::new(DxfVersion::AC1024);
            w.write_object_type(value).unwrap();
            let mut r = reader(w);
            assert_eq!(r.read_object_type().unwrap(), value);
        }
    }
}
