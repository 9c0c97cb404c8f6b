//! I/O module for encoding drawings in the DWG format

pub mod dwg;

pub use dwg::{DwgWriter, EncodeConfiguration, EncodedDwg};
