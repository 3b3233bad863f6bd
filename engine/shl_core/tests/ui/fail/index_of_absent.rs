use shl_core::{values, IndexOf, Value};

const MISSING: usize = IndexOf::<values![1, 2, 3], Value<7>>::VALUE;

fn main() {
    let _ = MISSING;
}
