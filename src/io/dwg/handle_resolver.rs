//! Turns document references into the handles written in object streams.

use crate::document::{DwgObject, ObjectRef, RefTarget};
use crate::error::{DxfError, Result};
use crate::io::dwg::reference_type::{encode_reference, ExpectedCode};
use crate::types::Handle;
use ahash::AHashMap;

/// Lookup from reference targets to handle values for one document.
pub struct HandleResolver<'a> {
    objects: &'a [DwgObject],
    by_value: AHashMap<u64, usize>,
}

/// A reference ready to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedRef {
    pub handle: Handle,
    /// The requested offset code could not express the distance and an
    /// absolute code was substituted
    pub fell_back: bool,
}

impl<'a> HandleResolver<'a> {
    pub fn new(objects: &'a [DwgObject]) -> Self {
        let by_value = objects
            .iter()
            .enumerate()
            .map(|(i, o)| (o.handle.value, i))
            .collect();
        Self { objects, by_value }
    }

    /// Absolute handle the reference points at, carrying the reference's
    /// code.
    pub fn resolve(&self, reference: &ObjectRef) -> Result<Handle> {
        let value = match reference.target {
            RefTarget::Null => 0,
            RefTarget::Handle(v) => v,
            RefTarget::Object(index) => self
                .objects
                .get(index)
                .map(|o| o.handle.value)
                .ok_or(DxfError::InvalidHandle(index as u64))?,
        };
        Ok(Handle::new(reference.code, value))
    }

    /// The handle to write for `reference` inside the object `referencing`.
    ///
    /// Offset codes that cannot reach the target are replaced by the
    /// matching absolute code.
    pub fn encode(&self, reference: &ObjectRef, referencing: u64) -> Result<EncodedRef> {
        let absolute = self.resolve(reference)?;
        if absolute.is_null() && !matches!(reference.code, 6 | 8) {
            return Ok(EncodedRef {
                handle: absolute,
                fell_back: false,
            });
        }
        match encode_reference(reference.code, absolute.value, referencing) {
            Some(handle) => Ok(EncodedRef {
                handle,
                fell_back: false,
            }),
            None => Ok(EncodedRef {
                handle: Handle::new(absolute_code(reference.code), absolute.value),
                fell_back: true,
            }),
        }
    }

    /// Whether an object with this handle value exists in the document.
    pub fn contains(&self, value: u64) -> bool {
        self.by_value.contains_key(&value)
    }

    pub fn index_of(&self, value: u64) -> Option<usize> {
        self.by_value.get(&value).copied()
    }

    pub fn objects(&self) -> &'a [DwgObject] {
        self.objects
    }
}

/// Absolute code standing in for an offset code.
fn absolute_code(code: u8) -> u8 {
    match code {
        6 | 8 => 3,
        0xA | 0xC => 4,
        c => c,
    }
}

/// Whether a handle's code satisfies a field's declared expectation.
pub fn expected_code_matches(handle: &Handle, expected: ExpectedCode) -> bool {
    expected.accepts(handle.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{field_map, ObjectCommon};
    use crate::io::dwg::reference_type::DwgReferenceType;

    fn objects() -> Vec<DwgObject> {
        [0x10u64, 0x11, 0x2A]
            .iter()
            .map(|&h| DwgObject::object(h, 0x2A, ObjectCommon::default(), field_map::<&str, bool, _>([])))
            .collect()
    }

    #[test]
    fn test_resolve_by_index() {
        let objs = objects();
        let r = HandleResolver::new(&objs);
        let h = r.resolve(&ObjectRef::object(5, 2)).unwrap();
        assert_eq!(h, Handle::new(5, 0x2A));
    }

    #[test]
    fn test_resolve_dangling_index() {
        let objs = objects();
        let r = HandleResolver::new(&objs);
        assert!(matches!(
            r.resolve(&ObjectRef::object(5, 9)),
            Err(DxfError::InvalidHandle(9))
        ));
    }

    #[test]
    fn test_null_and_raw_targets() {
        let objs = objects();
        let r = HandleResolver::new(&objs);
        assert_eq!(r.resolve(&ObjectRef::null(4)).unwrap(), Handle::new(4, 0));
        assert_eq!(r.resolve(&ObjectRef::handle(3, 0x77)).unwrap(), Handle::new(3, 0x77));
        assert!(!r.contains(0x77));
        assert_eq!(r.index_of(0x11), Some(1));
    }

    #[test]
    fn test_encode_offset_codes() {
        let objs = objects();
        let r = HandleResolver::new(&objs);
        let e = r.encode(&ObjectRef::object(6, 1), 0x10).unwrap();
        assert_eq!(e.handle, Handle::new(6, 0));
        assert!(!e.fell_back);

        let e = r.encode(&ObjectRef::object(0xA, 2), 0x10).unwrap();
        assert_eq!(e.handle, Handle::new(0xA, 0x1A));
    }

    #[test]
    fn test_encode_unreachable_offset_falls_back() {
        let objs = objects();
        let r = HandleResolver::new(&objs);
        let e = r.encode(&ObjectRef::object(6, 2), 0x10).unwrap();
        assert!(e.fell_back);
        assert_eq!(e.handle, Handle::new(3, 0x2A));

        let e = r.encode(&ObjectRef::object(0xC, 2), 0x10).unwrap();
        assert_eq!(e.handle, Handle::new(4, 0x2A));
    }

    #[test]
    fn test_expected_code() {
        let h = Handle::new(4, 1);
        assert!(expected_code_matches(&h, ExpectedCode::Any));
        assert!(expected_code_matches(
            &h,
            ExpectedCode::Code(DwgReferenceType::SoftPointer)
        ));
        assert!(!expected_code_matches(
            &h,
            ExpectedCode::Code(DwgReferenceType::HardOwnership)
        ));
    }
}
