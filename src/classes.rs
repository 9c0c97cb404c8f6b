//! Class table entries (the AcDb:Classes section)
//!
//! Objects whose type tag is 500 or above are instances of a class defined
//! here; `type - 500` is the index into the document's class list.

use bitflags::bitflags;

bitflags! {
    /// Operations a proxy of this class permits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ProxyFlags: u16 {
        const ERASE_ALLOWED = 0x0001;
        const TRANSFORM_ALLOWED = 0x0002;
        const COLOR_CHANGE_ALLOWED = 0x0004;
        const LAYER_CHANGE_ALLOWED = 0x0008;
        const LINETYPE_CHANGE_ALLOWED = 0x0010;
        const LINETYPE_SCALE_CHANGE_ALLOWED = 0x0020;
        const VISIBILITY_CHANGE_ALLOWED = 0x0040;
        const CLONING_ALLOWED = 0x0080;
        const LINEWEIGHT_CHANGE_ALLOWED = 0x0100;
        const PLOT_STYLE_NAME_CHANGE_ALLOWED = 0x0200;
        const DISABLES_PROXY_WARNING_DIALOG = 0x0400;
        const IS_R13_FORMAT_PROXY = 0x8000;
    }
}

/// Item class id marking a class whose instances are entities.
pub const ENTITY_CLASS_ID: u16 = 0x1F2;
/// Item class id marking a class whose instances are non-graphical objects.
pub const OBJECT_CLASS_ID: u16 = 0x1F3;

/// One record of the class table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DwgClass {
    /// Class number (500 + index in the table)
    pub number: i16,
    pub proxy_flags: ProxyFlags,
    /// Application that defines the class
    pub app_name: String,
    /// C++ class name
    pub cpp_name: String,
    /// DXF record name, the key of the named-class dispatch
    pub dxf_name: String,
    pub was_a_zombie: bool,
    /// 0x1F2 for entities, 0x1F3 for objects
    pub item_class_id: u16,
}

impl DwgClass {
    /// Create a class record with default flags.
    pub fn new(number: i16, dxf_name: &str, cpp_name: &str, is_entity: bool) -> Self {
        Self {
            number,
            proxy_flags: ProxyFlags::empty(),
            app_name: "ObjectDBX Classes".to_string(),
            cpp_name: cpp_name.to_string(),
            dxf_name: dxf_name.to_string(),
            was_a_zombie: false,
            item_class_id: if is_entity {
                ENTITY_CLASS_ID
            } else {
                OBJECT_CLASS_ID
            },
        }
    }

    /// Whether instances of this class are entities.
    pub fn is_entity(&self) -> bool {
        self.item_class_id == ENTITY_CLASS_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_kind() {
        let c = DwgClass::new(500, "LWPLINE", "AcDbPolyline", true);
        assert!(c.is_entity());
        let c = DwgClass::new(501, "XRECORD", "AcDbXrecord", false);
        assert!(!c.is_entity());
        assert_eq!(c.item_class_id, 0x1F3);
    }

    #[test]
    fn test_proxy_flags_bits() {
        let f = ProxyFlags::ERASE_ALLOWED | ProxyFlags::CLONING_ALLOWED;
        assert_eq!(f.bits(), 0x81);
        assert_eq!(ProxyFlags::from_bits_truncate(0x8400), ProxyFlags::IS_R13_FORMAT_PROXY | ProxyFlags::DISABLES_PROXY_WARNING_DIALOG);
    }
}
