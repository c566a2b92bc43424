use std::hash::Hasher;

use fnv::FnvHasher;

/// Distinguishes which kind of value a [`HashKey`] was derived from.
///
/// Keeping the kind in the key means an integer and a string can never
/// collide, even if their 64-bit payloads happen to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// Key derived from an integer value.
    Integer,
    /// Key derived from a boolean value.
    Boolean,
    /// Key derived from a string value.
    String,
}

/// A derived key for storing a value in a hash.
///
/// Hash keys are structural: two equal integers, booleans, or strings always
/// derive the same key. Integers contribute their two's-complement bit
/// pattern, booleans 0 or 1, and strings the 64-bit FNV-1a digest of their
/// bytes.
///
/// # Example
/// ```
/// use monkey::interpreter::value::core::Value;
///
/// let a = Value::String("name".to_string());
/// let b = Value::String("name".to_string());
///
/// assert_eq!(a.hash_key().unwrap(), b.hash_key().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    kind: HashKind,
    raw:  u64,
}

impl HashKey {
    /// Derives the key for an integer value.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self { kind: HashKind::Integer,
               raw:  value.cast_unsigned(), }
    }

    /// Derives the key for a boolean value.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self { kind: HashKind::Boolean,
               raw:  value as u64, }
    }

    /// Derives the key for a string value.
    #[must_use]
    pub fn string(value: &str) -> Self {
        let mut hasher = FnvHasher::default();
        hasher.write(value.as_bytes());
        Self { kind: HashKind::String,
               raw:  hasher.finish(), }
    }
}
