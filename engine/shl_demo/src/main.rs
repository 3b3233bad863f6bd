//! Shapelist demo CLI
//!
//! Validates the entity schema, then prints the resolved capacities.

use shl_core::fields;
use shl_demo::{
    component_name, init_tracing, validate_schema, Animated, Capacity, ComponentRef, Draw,
    EntityType, Name, Node, Orientation, Position, Registry, RegistryError, MAX_TABLE_SIZE,
};

fn main() {
    let mut quiet = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-q" | "--quiet" => quiet = true,
            "-h" | "--help" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("error: unknown argument `{other}`");
                print_usage();
                std::process::exit(1);
            }
        }
    }

    init_tracing();
    shl_core::self_check();

    if let Err(err) = validate_schema() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    let summary = match populate() {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if !quiet {
        println!("{:<10} {:>12} {:>12} {:>12}", "entity", "segment", "max", "capacity");
        print_row::<Node>();
        print_row::<Draw>();
        print_row::<Animated>();
        println!("max table size: {MAX_TABLE_SIZE}");
        println!("{summary}");
    }
}

fn print_usage() {
    eprintln!("Usage: shl-demo [--quiet]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -q, --quiet    Validate the schema without printing the summary");
    eprintln!("  -h, --help     Show this message");
}

fn print_row<E: EntityType>() {
    println!(
        "{:<10} {:>12} {:>12} {:>12}",
        E::NAME,
        Capacity::<E>::SEGMENT_BITS,
        Capacity::<E>::MAX_BITS,
        Capacity::<E>::MAX_SIZE,
    );
}

/// Store one node, move it, and describe it.
fn populate() -> Result<String, RegistryError> {
    let mut nodes = Registry::<Node>::new();
    let handle = nodes.insert(fields![
        Name("camera".to_owned()),
        Position::default(),
        Orientation::default(),
    ])?;

    if let Some(node) = nodes.get_mut(handle) {
        node.update(Position {
            x: 0.0,
            y: 1.5,
            z: -4.0,
        });
    }

    let Some(node) = nodes.get(handle) else {
        return Ok(String::from("node: <erased>"));
    };
    let position = node.data().field::<Position, _>();
    let component: ComponentRef<'_> = shl_core::Coprod::new(position);
    Ok(format!(
        "node {} {}: {:?}",
        handle.entity_index,
        component_name(&component),
        position
    ))
}
