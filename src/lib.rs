//! # dwg-encoder
//!
//! A pure Rust encoder for AutoCAD DWG files in the R13, R14 and R2000
//! sequential container layout, plus the LZ77 compressor used by the data
//! pages of R2004 and later.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dwg_encoder::{encode_dwg, Document, DwgObject, DxfVersion};
//!
//! let mut doc = Document::new(DxfVersion::AC1015);
//! doc.add_object(DwgObject::unknown(0x20, 0x1F4, vec![0xAB, 0xCD]));
//!
//! let encoded = encode_dwg(&doc)?;
//! std::fs::write("out.dwg", &encoded.data)?;
//! for note in encoded.notifications.iter() {
//!     eprintln!("{}", note);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - `Document` - the drawing as an ordered list of objects, header
//!   variables, classes and second-header data
//! - `io::dwg::schema` - declarative per-type field tables, walked once per
//!   record for the data stream and once for the handle stream
//! - `io::dwg::writer` - one writer per section and the `DwgWriter` that
//!   lays them out and backpatches the directory
//! - `io::dwg::compression` - the LZ77 compressor and its decompressor
//!
//! Recoverable problems are collected in a `NotificationCollection` that
//! travels with the output; fatal ones are returned as `DxfError`.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classes;
pub mod document;
pub mod error;
pub mod io;
pub mod notification;
pub mod types;

// Re-export commonly used types
pub use classes::DwgClass;
pub use document::{Document, DwgObject, FieldValue, ObjectRef};
pub use error::{DxfError, Result};
pub use io::dwg::compression::{Compressor, Decompressor, Lz77Ac18Compressor, Lz77Ac18Decompressor};
pub use io::dwg::{DwgWriter, EncodeConfiguration, EncodedDwg};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use types::{Color, DxfVersion, Handle, Vector2, Vector3};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encode `document` in its own version, with options taken from the
/// environment (see [`EncodeConfiguration::from_env`]).
pub fn encode_dwg(document: &document::Document) -> Result<EncodedDwg> {
    DwgWriter::new(EncodeConfiguration::from_env(document.version)).write(document)
}
