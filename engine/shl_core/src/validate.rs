//! Validation pass for the assumptions the engine does not enforce.
//!
//! Key sets and table keys are assumed duplicate-free (first match wins
//! otherwise), and table entries are assumed to share the default's arity.
//! Running this pass once at startup, before any consumer logic, reports
//! violations as [`SchemaError`]s instead of silently resolving them.

use crate::{KeyedTable, ShapeIds, ShapeList, ValueList};

/// A schema that resolves but breaks an assumption of its consumers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A key set lists the same shape twice.
    #[error("shape `{name}` appears twice in a key set (positions {first} and {second})")]
    DuplicateShape {
        name: &'static str,
        first: usize,
        second: usize,
    },
    /// A table has two entries for one key; only the first is ever used.
    #[error("table has two entries for `{name}` (positions {first} and {second})")]
    DuplicateKey {
        name: &'static str,
        first: usize,
        second: usize,
    },
    /// A table entry does not have the default's arity.
    #[error("table entry for `{name}` has {found} values, the default has {expected}")]
    ArityMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Check that `L` lists every shape once.
#[tracing::instrument(level = "debug", skip_all, fields(len = L::LEN))]
pub fn validate_key_set<L: ShapeList>() -> Result<(), SchemaError> {
    let ids = L::IDS;
    if let Some((first, second)) = ids.first_duplicate() {
        return Err(SchemaError::DuplicateShape {
            name: ids.name(first),
            first,
            second,
        });
    }
    Ok(())
}

/// Check that table `T` has one entry per key, each with `D`'s arity.
#[tracing::instrument(level = "debug", skip_all, fields(entries = T::LEN, arity = D::LEN))]
pub fn validate_table<T: KeyedTable, D: ValueList>() -> Result<(), SchemaError> {
    let keys = T::KEYS;
    if let Some((first, second)) = keys.first_duplicate() {
        return Err(SchemaError::DuplicateKey {
            name: keys.name(first),
            first,
            second,
        });
    }

    for (index, found) in T::ARITIES.iter().enumerate() {
        if found != D::LEN {
            return Err(SchemaError::ArityMismatch {
                name: keys.name(index),
                expected: D::LEN,
                found,
            });
        }
    }

    Ok(())
}

/// Names of the keys in `Keys` that have no entry in `T` and so resolve to
/// the default.
pub fn defaulted_keys<T: KeyedTable, Keys: ShapeList>() -> impl Iterator<Item = &'static str> {
    let table_keys: ShapeIds = T::KEYS;
    let keys: ShapeIds = Keys::IDS;
    (0..keys.len())
        .filter(move |&index| !table_keys.contains(keys.id(index)))
        .map(move |index| {
            let name = keys.name(index);
            tracing::debug!(key = name, "key resolves to the table default");
            name
        })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
