use crate::{ObjectType, TypeFlag, TypeIntrospector, TypeStore};

#[test]
fn intrinsics_are_singletons() {
    let mut store = TypeStore::new();
    let a = store.string();
    let b = store.intrinsic(TypeFlag::String);
    assert_eq!(a, b);
    assert_eq!(store.len(), 1);
    assert!(store.has_flag(&a, TypeFlag::String));
    assert!(!store.has_flag(&a, TypeFlag::Number));
}

#[test]
fn render_types() {
    let mut store = TypeStore::new();
    let string = store.string();
    let number = store.number();
    let hello = store.string_literal("hello");
    let yes = store.boolean_literal(true);
    let big = store.bigint_literal(true, "42");
    let list = store.array(string);
    let map = store.map(string, number);
    let record = store.record(string, number);
    let tuple = store.tuple(&[(string, false), (number, true)]);
    let union = store.union(&[string, number]);
    let function = store.function(vec![string, number], list);
    let object = store.object(
        ObjectType::new()
            .property("a", string)
            .optional_property("b", number),
    );
    let user = store.interface("User", ObjectType::new());

    let rendered: Vec<String> = [
        hello, yes, big, list, map, record, tuple, union, function, object, user,
    ]
    .iter()
    .map(|ty| store.type_to_string(ty))
    .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r#"
    "hello"
    true
    -42n
    string[]
    Map<string, number>
    Record<string, number>
    [string, number?]
    string | number
    (args_0: string, args_1: number) => string[]
    { a: string; b?: number; }
    User
    "#);
}

#[test]
fn define_keeps_alias_name() {
    let mut store = TypeStore::new();
    let tree = store.declare_alias("Tree", &[]);
    let body = store.object(ObjectType::new().property("child", tree));
    store.define(tree, body);

    assert_eq!(store.alias_name(&tree).as_deref(), Some("Tree"));
    assert_eq!(store.symbol_name(&tree).as_deref(), Some("__type"));
    assert_eq!(store.properties(&tree).len(), 1);
    assert_eq!(store.type_to_string(&tree), "Tree");
}

#[test]
fn define_keeps_interface_name() {
    let mut store = TypeStore::new();
    let node = store.declare_interface("Node");
    let body = store.object(ObjectType::new().optional_property("next", node));
    store.define(node, body);

    assert_eq!(store.symbol_name(&node).as_deref(), Some("Node"));
    assert_eq!(store.alias_name(&node), None);
    assert!(store.is_object(&node));
    assert!(store.properties(&node)[0].optional);
}

#[test]
fn builtin_references_expose_type_arguments() {
    let mut store = TypeStore::new();
    let number = store.number();
    let set = store.set(number);
    assert_eq!(store.symbol_name(&set).as_deref(), Some("Set"));
    assert_eq!(store.type_arguments(&set), vec![number]);
    assert!(store.alias_type_arguments(&set).is_empty());
}

#[test]
fn self_referencing_interface_renders_by_name() {
    let mut store = TypeStore::new();
    let node = store.declare_interface("Node");
    let string = store.string();
    let body = store.union(&[string, node]);
    store.define(node, body);

    assert_eq!(store.type_to_string(&node), "Node");
    assert_eq!(store.type_to_string(&body), "string | Node");

    let items = store.intersection(&[node, body]);
    assert_eq!(store.type_to_string(&items), "Node & string | Node");
}
