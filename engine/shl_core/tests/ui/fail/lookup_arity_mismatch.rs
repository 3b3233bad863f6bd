use shl_core::{table, values, Resolve, Source, Value, Values};

type Sizes = table! { Value<1> => values![12, 20, 4] };

const RESOLVED: Values = <Resolve<Sizes, Value<1>, values![10, 16]> as Source>::VALUES;

fn main() {
    let _ = RESOLVED;
}
