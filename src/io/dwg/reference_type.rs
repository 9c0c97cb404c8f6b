//! Handle reference codes.
//!
//! A handle written inside an object is `|CODE|SIZE|VALUE|`. Codes 2-5 carry
//! an absolute value; codes 6, 8, 0xA and 0xC carry an offset from the handle
//! of the object doing the referencing.

use crate::types::Handle;
use std::fmt;

/// DWG handle reference code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DwgReferenceType {
    /// The object's own handle and untyped references (code 0)
    Undefined = 0,
    /// Soft ownership reference (code 2)
    SoftOwnership = 2,
    /// Hard ownership reference (code 3)
    HardOwnership = 3,
    /// Soft pointer reference (code 4)
    SoftPointer = 4,
    /// Hard pointer reference (code 5)
    HardPointer = 5,
    /// Referencing handle + 1 (code 6)
    HardOwnershipPlus1 = 6,
    /// Referencing handle - 1 (code 8)
    HardOwnershipMinus1 = 8,
    /// Referencing handle + value (code 0xA)
    SoftPointerPlusOffset = 0xA,
    /// Referencing handle - value (code 0xC)
    SoftPointerMinusOffset = 0xC,
}

impl DwgReferenceType {
    /// Map a raw code to a reference type, if it is one DWG defines.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(DwgReferenceType::Undefined),
            2 => Some(DwgReferenceType::SoftOwnership),
            3 => Some(DwgReferenceType::HardOwnership),
            4 => Some(DwgReferenceType::SoftPointer),
            5 => Some(DwgReferenceType::HardPointer),
            6 => Some(DwgReferenceType::HardOwnershipPlus1),
            8 => Some(DwgReferenceType::HardOwnershipMinus1),
            0xA => Some(DwgReferenceType::SoftPointerPlusOffset),
            0xC => Some(DwgReferenceType::SoftPointerMinusOffset),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether the written value is the absolute handle value.
    pub fn is_absolute(&self) -> bool {
        matches!(
            self,
            DwgReferenceType::Undefined
                | DwgReferenceType::SoftOwnership
                | DwgReferenceType::HardOwnership
                | DwgReferenceType::SoftPointer
                | DwgReferenceType::HardPointer
        )
    }
}

/// Reference code a handle field declares it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedCode {
    /// Any code is accepted; no check is made.
    Any,
    Code(DwgReferenceType),
}

impl ExpectedCode {
    /// Whether `code` satisfies this expectation.
    pub fn accepts(&self, code: u8) -> bool {
        match self {
            ExpectedCode::Any => true,
            ExpectedCode::Code(expected) => expected.code() == code,
        }
    }
}

impl fmt::Display for ExpectedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedCode::Any => write!(f, "any"),
            ExpectedCode::Code(t) => write!(f, "{}", t.code()),
        }
    }
}

/// The value to write for a reference to `target` carried with `code` by the
/// object whose handle is `referencing`.
///
/// Returns `None` when an offset code cannot express the distance (for
/// example code 6 for a target that is not `referencing + 1`).
pub fn encode_reference(code: u8, target: u64, referencing: u64) -> Option<Handle> {
    match code {
        6 if referencing.checked_add(1) == Some(target) => Some(Handle::new(6, 0)),
        8 if referencing.checked_sub(1) == Some(target) => Some(Handle::new(8, 0)),
        0xA if target > referencing => Some(Handle::new(0xA, target - referencing)),
        0xC if target < referencing => Some(Handle::new(0xC, referencing - target)),
        6 | 8 | 0xA | 0xC => None,
        _ => Some(Handle::new(code, target)),
    }
}

/// Absolute handle value of a reference read back from a stream.
pub fn resolve_reference(handle: Handle, referencing: u64) -> u64 {
    match handle.code {
        6 => referencing.wrapping_add(1),
        8 => referencing.wrapping_sub(1),
        0xA => referencing.wrapping_add(handle.value),
        0xC => referencing.wrapping_sub(handle.value),
        _ => handle.value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_type_from_code() {
        assert_eq!(
            DwgReferenceType::from_code(2),
            Some(DwgReferenceType::SoftOwnership)
        );
        assert_eq!(DwgReferenceType::from_code(1), None);
        assert_eq!(DwgReferenceType::from_code(7), None);
        assert!(DwgReferenceType::HardPointer.is_absolute());
        assert!(!DwgReferenceType::HardOwnershipPlus1.is_absolute());
    }

    #[test]
    fn test_expected_code() {
        assert!(ExpectedCode::Any.accepts(9));
        assert!(ExpectedCode::Code(DwgReferenceType::HardPointer).accepts(5));
        assert!(!ExpectedCode::Code(DwgReferenceType::HardPointer).accepts(4));
    }

    #[test]
    fn test_encode_absolute() {
        let h = encode_reference(4, 0x1A, 0x50).unwrap();
        assert_eq!((h.code, h.value), (4, 0x1A));
    }

    #[test]
    fn test_encode_offsets_resolve_back() {
        let cases = [(6u8, 0x11u64), (8, 0x0F), (0xA, 0x15), (0xC, 0x0D)];
        for (code, target) in cases {
            let h = encode_reference(code, target, 0x10).unwrap();
            assert_eq!(resolve_reference(h, 0x10), target, "code {code:#X}");
        }
    }

    #[test]
    fn test_encode_offset_out_of_reach() {
        assert!(encode_reference(6, 0x20, 0x10).is_none());
        assert!(encode_reference(0xA, 0x05, 0x10).is_none());
        assert!(encode_reference(0xC, 0x10, 0x10).is_none());
    }
}
