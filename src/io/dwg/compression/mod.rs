//! LZ77 compression for DWG data sections.
//!
//! R2004 and later store their data pages with the AC18 LZ77 variant. The
//! compressor is independent of the container writer; the decompressor is
//! used to verify its output.

pub mod lz77_ac18;

pub use lz77_ac18::{Lz77Ac18Compressor, Lz77Ac18Decompressor};

use crate::error::Result;

/// Trait for compressing data.
pub trait Compressor {
    /// Compress `total_size` bytes of `source` starting at `offset`.
    fn compress(&self, source: &[u8], offset: usize, total_size: usize) -> Result<Vec<u8>>;
}

/// Trait for decompressing data.
pub trait Decompressor {
    /// Decompress a source buffer, returning exactly `decompressed_size` bytes.
    fn decompress(&self, source: &[u8], decompressed_size: usize) -> Result<Vec<u8>>;
}
