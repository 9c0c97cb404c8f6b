//! DWG writer modules.
//!
//! - [`stream_writer`]: the `IDwgStreamWriter` trait
//! - [`stream_writer_base`]: the bit-level buffer with backpatching
//! - [`object_writer`]: entity and object records
//! - [`header_writer`]: header variables and the AUX header
//! - [`classes_writer`]: class table section
//! - [`handle_writer`]: object map section
//! - [`second_header_writer`]: second header section
//! - [`file_header_writer`]: file header, directory and picture
//! - [`dwg_writer`]: container assembly

pub mod classes_writer;
pub mod configuration;
pub mod dwg_writer;
pub mod file_header_writer;
pub mod handle_writer;
pub mod header_writer;
pub mod object_writer;
pub mod second_header_writer;
pub mod stream_writer;
pub mod stream_writer_base;

pub use classes_writer::DwgClassesWriter;
pub use configuration::EncodeConfiguration;
pub use dwg_writer::{DwgWriter, EncodedDwg};
pub use file_header_writer::DwgFileHeaderWriter;
pub use handle_writer::{DwgHandleWriter, ObjectMapEntry};
pub use header_writer::DwgHeaderWriter;
pub use object_writer::DwgObjectWriter;
pub use second_header_writer::DwgSecondHeaderWriter;
pub use stream_writer::IDwgStreamWriter;
pub use stream_writer_base::DwgStreamWriterBase;
