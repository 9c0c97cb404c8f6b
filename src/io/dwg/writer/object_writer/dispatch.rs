//! Type tag → layout resolution.
//!
//! Fixed tags below 500 map straight to a static layout. Tags from 500 on
//! index the class table, and the class DXF name is looked up in the
//! named-class registry. Anything that cannot be resolved is encoded from
//! its captured raw bytes.

use crate::classes::DwgClass;
use crate::io::dwg::constants::FIRST_CLASS_TYPE;
use crate::io::dwg::object_type::DwgObjectType;
use crate::io::dwg::schema::tables::classes::{lookup_class, ClassSupport};
use crate::io::dwg::schema::tables::fixed_schema;
use crate::io::dwg::schema::TypeSchema;
use crate::notification::{NotificationCollection, NotificationType};
use std::fmt;

/// Why an object is written from its raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownReason {
    /// Fixed tag with no layout
    UnmodelledType(u16),
    /// VBA_PROJECT data lives in its own section
    VbaProject,
    /// Class tag past the end of the class table
    ClassIndexOutOfRange { index: usize, classes: usize },
    /// Class known to the registry, without a layout
    UnhandledClass(String),
    /// Class name absent from the registry
    UnregisteredClass(String),
}

impl fmt::Display for UnknownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownReason::UnmodelledType(tag) => write!(f, "type {:#X} has no layout", tag),
            UnknownReason::VbaProject => write!(f, "VBA_PROJECT belongs in its own section"),
            UnknownReason::ClassIndexOutOfRange { index, classes } => write!(
                f,
                "class index {} is out of range ({} classes)",
                index, classes
            ),
            UnknownReason::UnhandledClass(name) => write!(f, "class {} is not handled", name),
            UnknownReason::UnregisteredClass(name) => write!(f, "class {} is not registered", name),
        }
    }
}

/// Outcome of resolving a type tag.
#[derive(Debug, Clone)]
pub enum Resolution {
    Schema(&'static TypeSchema),
    Unknown(UnknownReason),
}

/// Resolve `type_tag`, reporting anything that is not a plain hit.
pub fn resolve(
    type_tag: u16,
    classes: &[DwgClass],
    notifications: &mut NotificationCollection,
) -> Resolution {
    if type_tag < FIRST_CLASS_TYPE {
        return resolve_fixed(type_tag, notifications);
    }

    let index = (type_tag - FIRST_CLASS_TYPE) as usize;
    let Some(class) = classes.get(index) else {
        let reason = UnknownReason::ClassIndexOutOfRange {
            index,
            classes: classes.len(),
        };
        notifications.warn(format!("type {}: {}", type_tag, reason));
        return Resolution::Unknown(reason);
    };

    match lookup_class(&class.dxf_name) {
        Some(ClassSupport::Handled(schema)) => Resolution::Schema(schema),
        Some(ClassSupport::Untested(schema)) => {
            notifications.warn(format!(
                "class {}: layout is untested, encoded anyway",
                class.dxf_name
            ));
            Resolution::Schema(schema)
        }
        Some(ClassSupport::Unhandled) => {
            let reason = UnknownReason::UnhandledClass(class.dxf_name.clone());
            notifications.warn(reason.to_string());
            Resolution::Unknown(reason)
        }
        None => {
            let reason = UnknownReason::UnregisteredClass(class.dxf_name.clone());
            notifications.warn(reason.to_string());
            Resolution::Unknown(reason)
        }
    }
}

fn resolve_fixed(type_tag: u16, notifications: &mut NotificationCollection) -> Resolution {
    let object_type = DwgObjectType::from_raw(type_tag);
    if object_type == Some(DwgObjectType::VbaProject) {
        notifications.error("VBA_PROJECT object found in the object stream");
        return Resolution::Unknown(UnknownReason::VbaProject);
    }
    match object_type.and_then(fixed_schema) {
        Some(schema) => Resolution::Schema(schema),
        None => {
            let reason = UnknownReason::UnmodelledType(type_tag);
            notifications.notify(NotificationType::NotImplemented, reason.to_string());
            Resolution::Unknown(reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> Vec<DwgClass> {
        vec![
            DwgClass::new(500, "XRECORD", "AcDbXrecord", false),
            DwgClass::new(501, "MLEADERSTYLE", "AcDbMLeaderStyle", false),
            DwgClass::new(502, "MATERIAL", "AcDbMaterial", false),
            DwgClass::new(503, "ACME_WIDGET", "AcmeWidget", false),
        ]
    }

    #[test]
    fn test_fixed_tag() {
        let mut notes = NotificationCollection::new();
        let r = resolve(DwgObjectType::Line.as_raw(), &[], &mut notes);
        assert!(matches!(r, Resolution::Schema(s) if s.name == "LINE"));
        assert!(notes.is_empty());
    }

    #[test]
    fn test_vba_project_is_an_error() {
        let mut notes = NotificationCollection::new();
        let r = resolve(0x51, &[], &mut notes);
        assert!(matches!(r, Resolution::Unknown(UnknownReason::VbaProject)));
        assert!(notes.has_type(NotificationType::Error));
    }

    #[test]
    fn test_unmodelled_fixed_tag() {
        let mut notes = NotificationCollection::new();
        let r = resolve(0x36, &[], &mut notes);
        assert!(matches!(r, Resolution::Unknown(UnknownReason::UnmodelledType(0x36))));
    }

    #[test]
    fn test_class_levels() {
        let classes = classes();
        let mut notes = NotificationCollection::new();

        assert!(matches!(resolve(500, &classes, &mut notes), Resolution::Schema(_)));
        assert!(notes.is_empty());

        assert!(matches!(resolve(501, &classes, &mut notes), Resolution::Schema(_)));
        assert!(notes.contains("untested"));

        assert!(matches!(
            resolve(502, &classes, &mut notes),
            Resolution::Unknown(UnknownReason::UnhandledClass(_))
        ));
        assert!(matches!(
            resolve(503, &classes, &mut notes),
            Resolution::Unknown(UnknownReason::UnregisteredClass(_))
        ));
        assert_eq!(notes.of_type(NotificationType::Warning).len(), 3);
    }

    #[test]
    fn test_class_index_out_of_range() {
        let mut notes = NotificationCollection::new();
        let r = resolve(510, &classes(), &mut notes);
        assert!(matches!(
            r,
            Resolution::Unknown(UnknownReason::ClassIndexOutOfRange { index: 10, classes: 4 })
        ));
        assert!(notes.contains("out of range"));
    }
}
