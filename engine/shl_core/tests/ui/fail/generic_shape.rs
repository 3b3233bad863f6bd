use shl_core::Shape;

#[derive(Shape)]
struct Slot<T>(T);

fn main() {
    let slot = Slot(1u8);
    let _ = slot.0;
}
