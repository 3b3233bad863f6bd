//! Fixed-capacity buffers built in `const` context.
//!
//! Type-level lists cannot produce slices of their members on stable Rust,
//! so every list also folds its members into one of these buffers:
//! - [`Values`]: the constants of a value list.
//! - [`ShapeIds`]: the identities (and names) of a shape list.
//!
//! Both hold at most [`MAX_LEN`] items. Building a longer list is a
//! definition-time error. Unused slots are always zeroed, so the buffers
//! stay comparable by content.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ShapeId;

/// Maximum number of members in a list that is folded into a buffer.
pub const MAX_LEN: usize = 64;

/// The constants of a value list, in list order.
#[derive(Copy, Clone)]
pub struct Values {
    items: [usize; MAX_LEN],
    len: usize,
}

impl Values {
    /// Empty buffer.
    pub const EMPTY: Self = Self {
        items: [0; MAX_LEN],
        len: 0,
    };

    /// Copy a slice into a buffer.
    pub const fn from_slice(values: &[usize]) -> Self {
        if values.len() > MAX_LEN {
            panic!("value list exceeds MAX_LEN constants");
        }
        let mut items = [0; MAX_LEN];
        let mut i = 0;
        while i < values.len() {
            items[i] = values[i];
            i += 1;
        }
        Self {
            items,
            len: values.len(),
        }
    }

    /// Return a new buffer with `value` in front.
    pub const fn prepend(self, value: usize) -> Self {
        if self.len == MAX_LEN {
            panic!("value list exceeds MAX_LEN constants");
        }
        let mut items = [0; MAX_LEN];
        items[0] = value;
        let mut i = 0;
        while i < self.len {
            items[i + 1] = self.items[i];
            i += 1;
        }
        Self {
            items,
            len: self.len + 1,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the constant at `index`, failing the build when out of range.
    pub const fn get(&self, index: usize) -> usize {
        if index >= self.len {
            panic!("value index out of range");
        }
        self.items[index]
    }

    pub const fn front(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.items[0])
        }
    }

    pub const fn back(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.items[self.len - 1])
        }
    }

    /// Sum of all constants, folded left to right.
    ///
    /// The empty sum is 0. Overflow is a definition-time error.
    pub const fn sum(&self) -> usize {
        let mut total: usize = 0;
        let mut i = 0;
        while i < self.len {
            total = match total.checked_add(self.items[i]) {
                Some(next) => next,
                None => panic!("sum of value list overflows usize"),
            };
            i += 1;
        }
        total
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.items[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }
}

impl Default for Values {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for Values {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Values {}

impl<const N: usize> PartialEq<[usize; N]> for Values {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Hash for Values {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// The identities of a shape list, with names for diagnostics.
#[derive(Copy, Clone)]
pub struct ShapeIds {
    ids: [ShapeId; MAX_LEN],
    names: [&'static str; MAX_LEN],
    len: usize,
}

impl ShapeIds {
    /// Empty buffer.
    pub const EMPTY: Self = Self {
        ids: [ShapeId::NONE; MAX_LEN],
        names: [""; MAX_LEN],
        len: 0,
    };

    /// Return a new buffer with `(id, name)` in front.
    pub const fn prepend(self, id: ShapeId, name: &'static str) -> Self {
        if self.len == MAX_LEN {
            panic!("shape list exceeds MAX_LEN shapes");
        }
        let mut ids = [ShapeId::NONE; MAX_LEN];
        let mut names = [""; MAX_LEN];
        ids[0] = id;
        names[0] = name;
        let mut i = 0;
        while i < self.len {
            ids[i + 1] = self.ids[i];
            names[i + 1] = self.names[i];
            i += 1;
        }
        Self {
            ids,
            names,
            len: self.len + 1,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn id(&self, index: usize) -> ShapeId {
        if index >= self.len {
            panic!("shape index out of range");
        }
        self.ids[index]
    }

    pub const fn name(&self, index: usize) -> &'static str {
        if index >= self.len {
            panic!("shape index out of range");
        }
        self.names[index]
    }

    /// Position of the first occurrence of `id`.
    pub const fn position(&self, id: ShapeId) -> Option<usize> {
        let mut i = 0;
        while i < self.len {
            if self.ids[i].same(id) {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    pub const fn contains(&self, id: ShapeId) -> bool {
        self.position(id).is_some()
    }

    /// Positions of the first repeated identity, as `(first, second)`.
    pub const fn first_duplicate(&self) -> Option<(usize, usize)> {
        let mut second = 1;
        while second < self.len {
            let mut first = 0;
            while first < second {
                if self.ids[first].same(self.ids[second]) {
                    return Some((first, second));
                }
                first += 1;
            }
            second += 1;
        }
        None
    }

    /// Fail the build if any identity repeats.
    pub const fn assert_distinct(&self) {
        if self.first_duplicate().is_some() {
            panic!("shape list contains a duplicate shape");
        }
    }

    pub fn ids(&self) -> &[ShapeId] {
        &self.ids[..self.len]
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &'static str)> + '_ {
        self.ids().iter().copied().zip(self.names().iter().copied())
    }
}

impl Default for ShapeIds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for ShapeIds {
    fn eq(&self, other: &Self) -> bool {
        self.ids() == other.ids()
    }
}

impl Eq for ShapeIds {}

impl fmt::Debug for ShapeIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
