//! DWG binary encoding.
//!
//! # Module Structure
//!
//! - [`constants`]: Sentinels, section numbers, CRC masks, version tags
//! - [`crc`]: The 16-bit section checksum and the masked header checksum
//! - [`compression`]: LZ77 AC18 compressor and decompressor
//! - [`reference_type`]: DWG handle reference codes
//! - [`object_type`]: Fixed object type numbers
//! - [`handle_resolver`]: Reference to handle resolution
//! - [`schema`]: Declarative field tables and the walker that writes them
//! - [`section_io`]: Version flags for conditional writes
//! - [`reader`]: Bit-level stream reader
//! - [`writer`]: Section writers and the container assembler

pub mod compression;
pub mod constants;
pub mod crc;
pub mod handle_resolver;
pub mod object_type;
pub mod reader;
pub mod reference_type;
pub mod schema;
pub mod section_io;
pub mod writer;

// Re-export commonly used types
pub use compression::{Compressor, Decompressor, Lz77Ac18Compressor, Lz77Ac18Decompressor};
pub use handle_resolver::HandleResolver;
pub use object_type::DwgObjectType;
pub use reader::DwgStreamReaderBase;
pub use reference_type::DwgReferenceType;
pub use section_io::SectionIO;
pub use writer::{DwgWriter, EncodeConfiguration, EncodedDwg};
