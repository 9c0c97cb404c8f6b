//! DWG reader side.
//!
//! Only the bit-level stream reader is provided; it inspects opaque object
//! blobs during encoding and reads back encoder output in tests.

pub mod stream_reader_base;

pub use stream_reader_base::DwgStreamReaderBase;
