//! Shapelist Demo - Entity/Component Schema
//!
//! A small entity/component store whose schema is written as shape lists:
//! - Components and entity types (`components`)
//! - Handles and entities with shape-addressed component access (`entity`)
//! - Capacities resolved from a keyed table with a default (`capacity`)
//! - Generation-checked slot storage per entity type (`registry`)
//!
//! # Tracing
//!
//! Set `RUST_LOG=shl_demo=debug` (or `shl_core=debug`) to see schema
//! validation, and `trace` for registry operations.

use std::sync::Once;

mod capacity;
mod components;
mod entity;
mod registry;

pub use capacity::{
    validate_schema, Capacity, CapacityBits, DefaultBits, EntityBits, MAX_TABLE_SIZE,
};
pub use components::{
    component_name, Animated, Animation, ComponentRef, Components, Draw, EntityType, EntityTypes,
    Geometry, Material, Name, Node, Orientation, Position,
};
pub use entity::{type_index, Entity, Handle};
pub use registry::{Registry, RegistryError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Call this once at startup. Safe to call multiple times. Does nothing if
/// `RUST_LOG` is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
