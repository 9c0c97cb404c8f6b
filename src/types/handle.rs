//! Handle type for DWG objects
//!
//! A DWG handle is written as `|CODE (4 bits)|SIZE (4 bits)|VALUE (SIZE bytes, MSB first)|`.
//! The code tells a reader how to interpret the value (absolute, soft/hard
//! owner or pointer, offset from the referencing object); the size is the
//! number of value bytes that follow.

use std::fmt;

/// A (code, size, value) handle triple.
///
/// Objects carry one as their own identity and use them to point at each
/// other. The value is what the object map is sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle {
    /// Reference code (upper nibble of the first byte).
    pub code: u8,
    /// Number of value bytes (lower nibble of the first byte).
    pub size: u8,
    /// Handle value.
    pub value: u64,
}

impl Handle {
    /// The null handle (code 0, no value bytes)
    pub const NULL: Handle = Handle {
        code: 0,
        size: 0,
        value: 0,
    };

    /// Create a handle with the minimal byte size for `value`.
    #[inline]
    pub const fn new(code: u8, value: u64) -> Self {
        Handle {
            code: code & 0x0F,
            size: Self::byte_count(value),
            value,
        }
    }

    /// Create a handle with an explicit byte size, as captured from a file.
    ///
    /// The size is clamped so that it can always hold `value`.
    #[inline]
    pub const fn with_size(code: u8, size: u8, value: u64) -> Self {
        let min = Self::byte_count(value);
        let size = if size < min { min } else if size > 8 { 8 } else { size };
        Handle {
            code: code & 0x0F,
            size,
            value,
        }
    }

    /// The same handle value carried with a different reference code.
    #[inline]
    pub const fn with_code(self, code: u8) -> Self {
        Handle {
            code: code & 0x0F,
            size: self.size,
            value: self.value,
        }
    }

    /// Minimal number of bytes needed to encode `value`.
    pub const fn byte_count(value: u64) -> u8 {
        let bits = 64 - value.leading_zeros();
        ((bits + 7) / 8) as u8
    }

    /// Check if this is the null handle value
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.value == 0
    }
}

impl Default for Handle {
    fn default() -> Self {
        Handle::NULL
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle::new(0, value)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{:X}", self.code, self.size, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_count() {
        assert_eq!(Handle::byte_count(0), 0);
        assert_eq!(Handle::byte_count(1), 1);
        assert_eq!(Handle::byte_count(0xFF), 1);
        assert_eq!(Handle::byte_count(0x100), 2);
        assert_eq!(Handle::byte_count(0xFFFF_FFFF), 4);
        assert_eq!(Handle::byte_count(u64::MAX), 8);
    }

    #[test]
    fn test_new_computes_size() {
        let h = Handle::new(5, 0x1234);
        assert_eq!(h.code, 5);
        assert_eq!(h.size, 2);
        assert_eq!(h.value, 0x1234);
    }

    #[test]
    fn test_with_size_keeps_wider_size() {
        let h = Handle::with_size(0, 3, 0x10);
        assert_eq!(h.size, 3);
        // too narrow for the value: widened
        let h = Handle::with_size(0, 1, 0x1234);
        assert_eq!(h.size, 2);
    }

    #[test]
    fn test_null() {
        assert!(Handle::NULL.is_null());
        assert_eq!(Handle::default(), Handle::NULL);
        assert!(!Handle::new(4, 1).is_null());
    }

    #[test]
    fn test_display() {
        assert_eq!(Handle::new(3, 0x1F).to_string(), "3.1.1F");
    }
}
