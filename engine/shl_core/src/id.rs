//! Definition-time shape identity.
//!
//! Shapes are compared by identity only. A `ShapeId` is a 64-bit FNV-1a hash
//! of the shape's module path, definition site and name, computed by the
//! compiler. Composite shapes (shape lists) combine their members' ids, so
//! their identity is structural and order-sensitive.

use std::fmt;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Identity of a shape.
///
/// Equality is O(1) and usable in `const` context through [`ShapeId::same`],
/// since `PartialEq` cannot be called there.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ShapeId(u64);

impl ShapeId {
    /// Placeholder for unused slots in fixed-capacity id buffers.
    pub const NONE: Self = Self(0);

    /// Hash a fully-qualified path into an identity.
    pub const fn of(path: &str) -> Self {
        Self(fnv1a(FNV_OFFSET, path.as_bytes()))
    }

    /// Create an id from a raw value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Identity comparison usable in `const` context.
    #[inline]
    pub const fn same(self, other: Self) -> bool {
        self.0 == other.0
    }

    /// Mix `next` into this id.
    ///
    /// Not commutative: `a.combine(b)` and `b.combine(a)` differ, which keeps
    /// list identities order-sensitive.
    pub const fn combine(self, next: Self) -> Self {
        Self(fnv1a(self.0, &next.0.to_le_bytes()))
    }
}

const fn fnv1a(seed: u64, bytes: &[u8]) -> u64 {
    let mut hash = seed;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

impl fmt::Debug for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShapeId({:#018x})", self.0)
    }
}
