//! One list, three structural forms.

use shl_core::{fields, shapes, Coprod, Record, Shape, ToPointers, ToRecord, ToUnion};

#[derive(Shape, Clone, Debug, PartialEq)]
struct Name(&'static str);

#[derive(Shape, Clone, Debug, PartialEq)]
struct Speed(u32);

type Components = shapes![Name, Speed];

fn main() {
    let layout: ToRecord<Components> = fields![Name("probe"), Speed(3)];
    let record = Record::<Components>::new(layout);

    let pointers = record.pointers();
    let _: &Name = pointers.head;

    let slot: ToUnion<ToPointers<'_, Components>> = Coprod::new(record.field::<Speed, _>());
    assert_eq!(slot.get::<&Speed, _>(), Some(&&Speed(3)));
    assert!(!slot.is::<&Name, _>());
}
