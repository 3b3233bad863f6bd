use shl_core::{Back, Nil};

fn main() {
    let _: Option<Back<Nil>> = None;
}
