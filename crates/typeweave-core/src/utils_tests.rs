use crate::utils::{to_identifier, to_pascal_case};

#[test]
fn pascal_case_from_snake() {
    assert_eq!(to_pascal_case("foo_bar"), "FooBar");
    assert_eq!(to_pascal_case("foo"), "Foo");
    assert_eq!(to_pascal_case("_foo"), "Foo");
}

#[test]
fn pascal_case_idempotent() {
    assert_eq!(to_pascal_case("FooBar"), "FooBar");
    assert_eq!(to_pascal_case("QRow"), "QRow");
}

#[test]
fn pascal_case_from_generic_labels() {
    assert_eq!(to_pascal_case("Box<string>"), "BoxString");
    assert_eq!(to_pascal_case("Map<string, User>"), "MapStringUser");
    assert_eq!(to_pascal_case("Tree<number[]>"), "TreeNumber");
}

#[test]
fn identifier_from_label() {
    assert_eq!(to_identifier("user").as_deref(), Some("User"));
    assert_eq!(to_identifier("2d-point").as_deref(), Some("T2dPoint"));
    assert_eq!(to_identifier("<>"), None);
    assert_eq!(to_identifier(""), None);
}
