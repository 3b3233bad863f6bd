use shl_core::{assert_distinct, values};

assert_distinct!(values![1, 2, 1]);

fn main() {}
