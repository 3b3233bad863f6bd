use shl_core::{Front, Nil};

fn main() {
    let _: Option<Front<Nil>> = None;
}
