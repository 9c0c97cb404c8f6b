//! Class table section (section 1).
//!
//! ```text
//! CLASSES_START | RL size | per class: BS number, BS proxy flags, TV app,
//!   TV cpp, TV dxf, B was-zombie, BS item class id | CRC | CLASSES_END | RL 0
//! ```
//!
//! The trailing RL 0 is not part of the section size.

use crate::classes::DwgClass;
use crate::document::SectionLocator;
use crate::error::Result;
use crate::io::dwg::constants::{section_locator, sentinels};
use crate::io::dwg::writer::header_writer::write_framed_section;
use crate::io::dwg::writer::stream_writer::IDwgStreamWriter;
use crate::io::dwg::writer::stream_writer_base::DwgStreamWriterBase;
use tracing::{debug, trace};

/// Writer for the class table.
pub struct DwgClassesWriter<'a> {
    classes: &'a [DwgClass],
}

impl<'a> DwgClassesWriter<'a> {
    pub fn new(classes: &'a [DwgClass]) -> Self {
        Self { classes }
    }

    /// Write the section at the current position of `writer`.
    pub fn write(&self, writer: &mut DwgStreamWriterBase) -> Result<SectionLocator> {
        let (address, size) = write_framed_section(
            writer,
            &sentinels::CLASSES_START,
            &sentinels::CLASSES_END,
            |w| {
                for class in self.classes {
                    Self::write_class(w, class)?;
                }
                Ok(())
            },
        )?;
        writer.write_raw_long(0)?;

        debug!(address, size, classes = self.classes.len(), "wrote class table");
        Ok(SectionLocator {
            number: section_locator::CLASSES,
            address,
            size,
        })
    }

    fn write_class(writer: &mut DwgStreamWriterBase, class: &DwgClass) -> Result<()> {
        trace!(number = class.number, dxf_name = %class.dxf_name, "class");
        writer.write_bit_short(class.number)?;
        writer.write_bit_short(class.proxy_flags.bits() as i16)?;
        writer.write_variable_text(&class.app_name)?;
        writer.write_variable_text(&class.cpp_name)?;
        writer.write_variable_text(&class.dxf_name)?;
        writer.write_bit(class.was_a_zombie)?;
        writer.write_bit_short(class.item_class_id as i16)
    }
}
