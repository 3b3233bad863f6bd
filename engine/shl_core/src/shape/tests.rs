use super::*;

#[test]
fn test_value_constant() {
    assert_eq!(<Value<0> as Constant>::VALUE, 0);
    assert_eq!(<Value<42> as Constant>::VALUE, 42);
}

#[test]
fn test_value_identity() {
    assert!(<Value<3> as Shape>::ID.same(<Value<3> as Shape>::ID));
    assert!(!<Value<3> as Shape>::ID.same(<Value<4> as Shape>::ID));
    assert_eq!(<Value<3> as Shape>::NAME, "Value");
}

#[test]
fn test_ordinals() {
    assert_eq!(Here::ORDINAL, 0);
    assert_eq!(<There<Here>>::ORDINAL, 1);
    assert_eq!(<There<There<There<Here>>>>::ORDINAL, 3);
}
