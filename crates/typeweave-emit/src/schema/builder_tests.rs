use typeweave_core::{DefinitionMap, Error, Node};

use super::{Schema, SchemaBuilder, SchemaGraph, SchemaId, to_schema};

fn tree_definitions() -> DefinitionMap {
    let mut definitions = DefinitionMap::new();
    definitions.insert(
        "Tree",
        Node::object([
            ("value", Node::Number),
            ("children", Node::array(Node::reference("Tree", None))),
        ]),
        Some("Tree".to_string()),
    );
    definitions
}

fn object_fields(graph: &SchemaGraph, id: SchemaId) -> Vec<(String, SchemaId)> {
    match graph.get(id) {
        Schema::Object(properties) => properties.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        other => panic!("expected object, got {}", other.kind_name()),
    }
}

#[test]
fn primitives_and_containers() {
    let node = Node::record(Node::String, Node::array(Node::Boolean));
    let (graph, root) = to_schema(&node, &DefinitionMap::new()).unwrap();

    let Schema::Record { key, value } = graph.get(root) else {
        panic!("expected record");
    };
    assert_eq!(graph.get(*key), &Schema::String);
    let Schema::Array(element) = graph.get(*value) else {
        panic!("expected array");
    };
    assert_eq!(graph.get(*element), &Schema::Boolean);
}

#[test]
fn optional_union_becomes_optional_schema() {
    let node = Node::object([("age", Node::optional(Node::Number))]);
    let (graph, root) = to_schema(&node, &DefinitionMap::new()).unwrap();

    let fields = object_fields(&graph, root);
    let Schema::Optional(inner) = graph.get(fields[0].1) else {
        panic!("expected optional");
    };
    assert_eq!(graph.get(*inner), &Schema::Number);
}

#[test]
fn single_member_union_collapses() {
    let node = Node::union(vec![Node::Date]).unwrap();
    let (graph, root) = to_schema(&node, &DefinitionMap::new()).unwrap();
    assert_eq!(graph.get(root), &Schema::Date);
    assert_eq!(graph.len(), 1);
}

#[test]
fn recursive_definition_uses_one_lazy_handle() {
    let definitions = tree_definitions();
    let root = Node::object([
        ("left", Node::reference("Tree", None)),
        ("right", Node::reference("Tree", None)),
    ]);
    let (graph, root) = to_schema(&root, &definitions).unwrap();

    let fields = object_fields(&graph, root);
    assert_eq!(fields[0].1, fields[1].1);
    let Schema::Lazy(lazy) = graph.get(fields[0].1) else {
        panic!("expected lazy");
    };
    assert_eq!(graph.lazy_name(*lazy), "Tree");
    assert_eq!(graph.lazies().count(), 1);

    let tree = graph.resolve(fields[0].1).unwrap();
    let Schema::Object(properties) = tree else {
        panic!("expected object");
    };
    let Schema::Array(element) = graph.get(properties["children"]) else {
        panic!("expected array");
    };
    // the self-reference points back at the same lazy handle
    assert_eq!(*element, fields[0].1);
}

#[test]
fn lazy_is_filled_after_body() {
    let definitions = tree_definitions();
    let mut builder = SchemaBuilder::new(&definitions);
    let handle = builder.build(&Node::reference("Tree", None)).unwrap();
    let Schema::Lazy(lazy) = builder.graph().get(handle) else {
        panic!("expected lazy");
    };
    let target = builder.graph().lazy_target(*lazy).unwrap();
    assert!(target > handle);
}

#[test]
fn unfilled_lazy_is_an_error() {
    let mut graph = SchemaGraph::new();
    let lazy = graph.lazy("Pending");
    let handle = graph.add(Schema::Lazy(lazy));
    assert_eq!(graph.resolve(handle), Err(Error::UnresolvedLazy(0)));
    assert_eq!(
        Error::UnresolvedLazy(0).to_string(),
        "lazy schema #0 is not resolved"
    );
}

#[test]
fn unresolved_reference() {
    let node = Node::reference("Nope", None);
    let err = to_schema(&node, &DefinitionMap::new()).unwrap_err();
    assert_eq!(err, Error::UnresolvedReference("Nope".to_string()));
}
