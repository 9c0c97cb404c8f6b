//! Bit-level DWG stream reader.
//!
//! The encoder uses it to look inside opaque object blobs, and tests use it
//! to read back what the writer produced.

use crate::error::{DxfError, Result};
use crate::types::{Color, DxfVersion, Handle, Vector2, Vector3};

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use encoding_rs::Encoding;
use std::io;

/// Bit-level reader over an owned buffer.
#[derive(Debug, Clone)]
pub struct DwgStreamReaderBase {
    data: Vec<u8>,
    /// Current position, in bits
    position: u64,
    encoding: &'static Encoding,
    version: DxfVersion,
}

impl DwgStreamReaderBase {
    pub fn new(data: Vec<u8>, version: DxfVersion) -> Self {
        Self {
            data,
            position: 0,
            encoding: encoding_rs::WINDOWS_1252,
            version,
        }
    }

    /// Reader positioned at byte `position`.
    pub fn new_at(data: Vec<u8>, version: DxfVersion, position: usize) -> Self {
        let mut reader = Self::new(data, version);
        reader.position = position as u64 * 8;
        reader
    }

    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = encoding;
    }

    pub fn version(&self) -> DxfVersion {
        self.version
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn position_in_bits(&self) -> u64 {
        self.position
    }

    pub fn set_position_in_bits(&mut self, position: u64) {
        self.position = position;
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        (self.position / 8) as usize
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position as u64 * 8;
    }

    /// Skip to the next byte boundary.
    pub fn align(&mut self) {
        self.position = self.position.div_ceil(8) * 8;
    }

    fn eof() -> DxfError {
        DxfError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "unexpected end of stream",
        ))
    }

    // ---------------------------------------------------------------
    // Raw reads
    // ---------------------------------------------------------------

    pub fn read_bit(&mut self) -> Result<bool> {
        let idx = (self.position / 8) as usize;
        let byte = *self.data.get(idx).ok_or_else(Self::eof)?;
        let bit = byte & (0x80 >> (self.position % 8)) != 0;
        self.position += 1;
        Ok(bit)
    }

    pub fn read_2bits(&mut self) -> Result<u8> {
        let hi = self.read_bit()? as u8;
        let lo = self.read_bit()? as u8;
        Ok(hi << 1 | lo)
    }

    pub fn read_3bits(&mut self) -> Result<u8> {
        let hi = self.read_2bits()?;
        let lo = self.read_bit()? as u8;
        Ok(hi << 1 | lo)
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        let idx = (self.position / 8) as usize;
        let shift = (self.position % 8) as u32;
        let first = *self.data.get(idx).ok_or_else(Self::eof)?;
        let value = if shift == 0 {
            first
        } else {
            let second = *self.data.get(idx + 1).ok_or_else(Self::eof)?;
            (first << shift) | (second >> (8 - shift))
        };
        self.position += 8;
        Ok(value)
    }

    pub fn read_bytes(&mut self, length: usize) -> Result<Vec<u8>> {
        (0..length).map(|_| self.read_byte()).collect()
    }

    pub fn read_raw_short(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(&self.read_bytes(2)?))
    }

    pub fn read_raw_ushort(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(&self.read_bytes(2)?))
    }

    /// A u16 stored high byte first (section checksums, chunk sizes).
    pub fn read_raw_ushort_be(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(&self.read_bytes(2)?))
    }

    pub fn read_raw_long(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(&self.read_bytes(4)?))
    }

    pub fn read_raw_ulong(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(&self.read_bytes(4)?))
    }

    pub fn read_raw_double(&mut self) -> Result<f64> {
        Ok(LittleEndian::read_f64(&self.read_bytes(8)?))
    }

    pub fn read_2raw_double(&mut self) -> Result<Vector2> {
        Ok(Vector2::new(self.read_raw_double()?, self.read_raw_double()?))
    }

    pub fn read_sentinel(&mut self) -> Result<[u8; 16]> {
        let mut sentinel = [0u8; 16];
        sentinel.copy_from_slice(&self.read_bytes(16)?);
        Ok(sentinel)
    }

    // ---------------------------------------------------------------
    // Bit-coded reads
    // ---------------------------------------------------------------

    pub fn read_bit_short(&mut self) -> Result<i16> {
        match self.read_2bits()? {
            0 => self.read_raw_short(),
            1 => Ok(self.read_byte()? as i16),
            2 => Ok(0),
            _ => Ok(256),
        }
    }

    pub fn read_bit_long(&mut self) -> Result<i32> {
        match self.read_2bits()? {
            0 => self.read_raw_long(),
            1 => Ok(self.read_byte()? as i32),
            2 => Ok(0),
            code => Err(DxfError::InvalidFormat(format!(
                "invalid BitLong code {code}"
            ))),
        }
    }

    pub fn read_bit_long_long(&mut self) -> Result<i64> {
        let size = self.read_3bits()?;
        let mut value = 0u64;
        for i in 0..size {
            value |= (self.read_byte()? as u64) << (8 * i as u32);
        }
        Ok(value as i64)
    }

    pub fn read_bit_double(&mut self) -> Result<f64> {
        match self.read_2bits()? {
            0 => self.read_raw_double(),
            1 => Ok(1.0),
            2 => Ok(0.0),
            code => Err(DxfError::InvalidFormat(format!(
                "invalid BitDouble code {code}"
            ))),
        }
    }

    pub fn read_bit_double_with_default(&mut self, def: f64) -> Result<f64> {
        let mut bytes = def.to_le_bytes();
        match self.read_2bits()? {
            0 => {}
            1 => {
                let low = self.read_bytes(4)?;
                bytes[..4].copy_from_slice(&low);
            }
            2 => {
                let mid = self.read_bytes(2)?;
                bytes[4..6].copy_from_slice(&mid);
                let low = self.read_bytes(4)?;
                bytes[..4].copy_from_slice(&low);
            }
            _ => return self.read_raw_double(),
        }
        Ok(f64::from_le_bytes(bytes))
    }

    pub fn read_3bit_double(&mut self) -> Result<Vector3> {
        Ok(Vector3::new(
            self.read_bit_double()?,
            self.read_bit_double()?,
            self.read_bit_double()?,
        ))
    }

    pub fn read_modular_char(&mut self) -> Result<u64> {
        let mut value = 0u64;
        let mut shift = 0u32;
        loop {
            let b = self.read_byte()?;
            value |= ((b & 0x7F) as u64) << shift;
            if b & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
            if shift > 63 {
                return Err(DxfError::InvalidFormat("modular char too long".into()));
            }
        }
    }

    pub fn read_signed_modular_char(&mut self) -> Result<i64> {
        let mut value = 0u64;
        let mut shift = 0u32;
        loop {
            let b = self.read_byte()?;
            if b & 0x80 == 0 {
                value |= ((b & 0x3F) as u64) << shift;
                let value = value as i64;
                return Ok(if b & 0x40 != 0 { -value } else { value });
            }
            value |= ((b & 0x7F) as u64) << shift;
            shift += 7;
            if shift > 63 {
                return Err(DxfError::InvalidFormat("modular char too long".into()));
            }
        }
    }

    pub fn read_modular_short(&mut self) -> Result<u32> {
        let mut value = 0u32;
        let mut shift = 0u32;
        loop {
            let word = self.read_raw_ushort()?;
            value |= ((word & 0x7FFF) as u32) << shift;
            if word & 0x8000 == 0 {
                return Ok(value);
            }
            shift += 15;
            if shift > 30 {
                return Err(DxfError::InvalidFormat("modular short too long".into()));
            }
        }
    }

    // ---------------------------------------------------------------
    // Text, handles, colors
    // ---------------------------------------------------------------

    pub fn read_variable_text(&mut self) -> Result<String> {
        let len = self.read_bit_short()?;
        if len <= 0 {
            return Ok(String::new());
        }
        if self.version >= DxfVersion::AC1021 {
            let bytes = self.read_bytes(len as usize * 2)?;
            let units: Vec<u16> = bytes.chunks_exact(2).map(LittleEndian::read_u16).collect();
            String::from_utf16(&units).map_err(|e| DxfError::Encoding(e.to_string()))
        } else {
            let bytes = self.read_bytes(len as usize)?;
            let (text, _, _) = self.encoding.decode(&bytes);
            Ok(text.into_owned())
        }
    }

    pub fn read_handle(&mut self) -> Result<Handle> {
        let head = self.read_byte()?;
        let code = head >> 4;
        let size = head & 0x0F;
        if size > 8 {
            return Err(DxfError::InvalidFormat(format!(
                "handle with {size} value bytes"
            )));
        }
        let mut value = 0u64;
        for _ in 0..size {
            value = value << 8 | self.read_byte()? as u64;
        }
        Ok(Handle::with_size(code, size, value))
    }

    pub fn read_object_type(&mut self) -> Result<u16> {
        if self.version >= DxfVersion::AC1024 {
            match self.read_2bits()? {
                0 => Ok(self.read_byte()? as u16),
                1 => Ok(self.read_byte()? as u16 + 0x1F0),
                _ => self.read_raw_ushort(),
            }
        } else {
            Ok(self.read_bit_short()? as u16)
        }
    }

    pub fn read_cm_color(&mut self) -> Result<Color> {
        if self.version >= DxfVersion::AC1018 {
            let _index = self.read_bit_short()?;
            let word = self.read_bit_long()? as u32;
            let _flags = self.read_byte()?;
            Ok(match word >> 24 {
                0xC0 => Color::ByLayer,
                0xC1 => Color::ByBlock,
                0xC2 => Color::from_rgb((word >> 16) as u8, (word >> 8) as u8, word as u8),
                _ => Color::from_index((word & 0xFF) as i16),
            })
        } else {
            Ok(Color::from_index(self.read_bit_short()?))
        }
    }

    pub fn read_bit_extrusion(&mut self) -> Result<Vector3> {
        if self.version >= DxfVersion::AC1015 && self.read_bit()? {
            return Ok(Vector3::UNIT_Z);
        }
        self.read_3bit_double()
    }

    pub fn read_bit_thickness(&mut self) -> Result<f64> {
        if self.version >= DxfVersion::AC1015 && self.read_bit()? {
            return Ok(0.0);
        }
        self.read_bit_double()
    }
}
