use shl_core::{back_value, Nil};

fn main() {
    let _ = back_value::<Nil>();
}
