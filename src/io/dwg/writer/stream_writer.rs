//! DWG bit-level stream writer trait.
//!
//! Every DWG primitive (B, BB, BS, BL, BLL, BD, DD, RC, RS, RL, RD, MC, MS,
//! TV, H, CMC, BE, BT) has one method here. The only implementation is
//! [`DwgStreamWriterBase`](super::stream_writer_base::DwgStreamWriterBase);
//! the trait keeps schema code independent of the buffer handling.

use crate::error::Result;
use crate::types::{Color, Handle, Vector2, Vector3};

/// Trait for bit-level DWG stream writing.
pub trait IDwgStreamWriter {
    /// Current write position in bits from the start of the stream.
    fn position_in_bits(&self) -> u64;

    // ---------------------------------------------------------------
    // Raw writes
    // ---------------------------------------------------------------

    /// **RC**: Write a raw byte.
    fn write_byte(&mut self, value: u8) -> Result<()>;

    /// Write raw bytes at the current bit position.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// **RS**: Write a raw i16 (LE).
    fn write_raw_short(&mut self, value: i16) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// **RS**: Write a raw u16 (LE).
    fn write_raw_ushort(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// **RL**: Write a raw i32 (LE).
    fn write_raw_long(&mut self, value: i32) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// **RL**: Write a raw u32 (LE).
    fn write_raw_ulong(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// **RD**: Write a raw f64 (LE).
    fn write_raw_double(&mut self, value: f64) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// **2RD**: Write a 2D point as two raw doubles.
    fn write_2raw_double(&mut self, value: Vector2) -> Result<()> {
        self.write_raw_double(value.x)?;
        self.write_raw_double(value.y)
    }

    /// **3RD**: Write a 3D point as three raw doubles.
    fn write_3raw_double(&mut self, value: Vector3) -> Result<()> {
        self.write_raw_double(value.x)?;
        self.write_raw_double(value.y)?;
        self.write_raw_double(value.z)
    }

    // ---------------------------------------------------------------
    // Bit-coded writes
    // ---------------------------------------------------------------

    /// **B**: Write a single bit.
    fn write_bit(&mut self, value: bool) -> Result<()>;

    /// **BB**: Write a 2-bit code.
    fn write_2bits(&mut self, value: u8) -> Result<()>;

    /// **3B**: Write a 3-bit code.
    fn write_3bits(&mut self, value: u8) -> Result<()>;

    /// **BS**: Write a BitShort.
    fn write_bit_short(&mut self, value: i16) -> Result<()>;

    /// **BL**: Write a BitLong.
    fn write_bit_long(&mut self, value: i32) -> Result<()>;

    /// **BLL**: Write a BitLongLong.
    fn write_bit_long_long(&mut self, value: i64) -> Result<()>;

    /// **BD**: Write a BitDouble.
    fn write_bit_double(&mut self, value: f64) -> Result<()>;

    /// **DD**: Write a BitDouble relative to a default.
    fn write_bit_double_with_default(&mut self, def: f64, value: f64) -> Result<()>;

    /// **2BD**: Write a 2D point.
    fn write_2bit_double(&mut self, value: Vector2) -> Result<()> {
        self.write_bit_double(value.x)?;
        self.write_bit_double(value.y)
    }

    /// **3BD**: Write a 3D point.
    fn write_3bit_double(&mut self, value: Vector3) -> Result<()> {
        self.write_bit_double(value.x)?;
        self.write_bit_double(value.y)?;
        self.write_bit_double(value.z)
    }

    /// **MC**: Write an unsigned modular char.
    fn write_modular_char(&mut self, value: u64) -> Result<()>;

    /// **MC**: Write a signed modular char (sign in bit 6 of the last byte).
    fn write_signed_modular_char(&mut self, value: i64) -> Result<()>;

    /// **MS**: Write a modular short.
    fn write_modular_short(&mut self, value: u32) -> Result<()>;

    // ---------------------------------------------------------------
    // Text, handles, colors
    // ---------------------------------------------------------------

    /// **TV**: Write variable-length text.
    fn write_variable_text(&mut self, value: &str) -> Result<()>;

    /// **H**: Write a handle as `|code|size|value bytes MSB first|`.
    fn write_handle(&mut self, handle: Handle) -> Result<()>;

    /// **OT**: Write an object type number.
    fn write_object_type(&mut self, value: u16) -> Result<()>;

    /// **CMC**: Write a color.
    fn write_cm_color(&mut self, value: Color) -> Result<()>;

    // ---------------------------------------------------------------
    // Special types
    // ---------------------------------------------------------------

    /// **BE**: Write an extrusion vector.
    fn write_bit_extrusion(&mut self, normal: Vector3) -> Result<()>;

    /// **BT**: Write a thickness.
    fn write_bit_thickness(&mut self, thickness: f64) -> Result<()>;

    /// Write a Julian date as two BL (day, milliseconds).
    fn write_date_time(&mut self, julian: f64) -> Result<()> {
        let day = julian.trunc();
        let ms = ((julian - day) * 86_400_000.0).round();
        self.write_bit_long(day as i32)?;
        self.write_bit_long(ms as i32)
    }

    /// Write a Julian date as two RL (day, milliseconds).
    fn write_raw_date_time(&mut self, julian: f64) -> Result<()> {
        let day = julian.trunc();
        let ms = ((julian - day) * 86_400_000.0).round();
        self.write_raw_long(day as i32)?;
        self.write_raw_long(ms as i32)
    }

    // ---------------------------------------------------------------
    // Stream control
    // ---------------------------------------------------------------

    /// Pad the current byte with zero bits.
    fn write_spear_shift(&mut self) -> Result<()>;

    /// Write a 16-byte section sentinel (the stream must be byte aligned).
    fn write_sentinel(&mut self, sentinel: &[u8; 16]) -> Result<()> {
        self.write_spear_shift()?;
        self.write_bytes(sentinel)
    }
}
