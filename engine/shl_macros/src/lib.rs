//! Procedural macros for shape lists.
//!
//! This crate provides the derives that give user types a definition-time
//! identity, so they can be placed in shape lists, keyed tables and records.
//! The generated code refers to `::shl_core`; use the derives through the
//! re-exports in that crate.
//!
//! # Shape Derive
//!
//! ```text
//! #[derive(Shape)]
//! pub struct Position {
//!     pub x: f32,
//!     pub y: f32,
//!     pub z: f32,
//! }
//! ```
//!
//! This generates a `Shape` implementation whose `ID` is hashed from the
//! module path, the definition site (`file!()`, `line!()`, `column!()` of the
//! type name) and the name, and whose `NAME` is the bare type name. The site
//! keeps same-named types local to different functions apart.
//!
//! # Constant Derive
//!
//! ```text
//! #[derive(Constant)]
//! #[constant(1 << 4)]
//! pub struct SegmentBits;
//! ```
//!
//! This generates a `Constant` implementation with the given value.

mod constant;
mod shape;
mod utils;

use proc_macro::TokenStream;

/// Derive macro giving a type a definition-time shape identity.
///
/// Only non-generic structs and enums are supported: every instantiation of a
/// generic type would share one identity. Implement `Shape` by hand for
/// generic types and combine the parameters' ids with `ShapeId::combine`.
#[proc_macro_derive(Shape)]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    shape::derive_shape(input)
}

/// Derive macro for named constants.
///
/// # Attributes
///
/// - `#[constant(expr)]` - Required. A `usize` const expression.
#[proc_macro_derive(Constant, attributes(constant))]
pub fn derive_constant(input: TokenStream) -> TokenStream {
    constant::derive_constant(input)
}
