use indexmap::IndexMap;
use typeweave_core::{DefinitionMap, Error, Node};

use super::{Schema, SchemaGraph, from_schema, to_schema};

#[test]
fn import_plain_schema() {
    let mut graph = SchemaGraph::new();
    let string = graph.add(Schema::String);
    let number = graph.add(Schema::Number);
    let age = graph.add(Schema::Optional(number));
    let tags = graph.add(Schema::Array(string));
    let mut properties = IndexMap::new();
    properties.insert("name".to_string(), string);
    properties.insert("age".to_string(), age);
    properties.insert("tags".to_string(), tags);
    let root = graph.add(Schema::Object(properties));

    let extraction = from_schema(&graph, root).unwrap();

    assert_eq!(
        extraction.root,
        Node::object([
            ("name", Node::String),
            ("age", Node::optional(Node::Number)),
            ("tags", Node::array(Node::String)),
        ])
    );
    assert!(extraction.definitions.is_empty());
}

#[test]
fn import_self_referencing_lazy() {
    let mut graph = SchemaGraph::new();
    let lazy = graph.lazy("Category");
    let handle = graph.add(Schema::Lazy(lazy));
    let children = graph.add(Schema::Array(handle));
    let name = graph.add(Schema::String);
    let mut properties = IndexMap::new();
    properties.insert("name".to_string(), name);
    properties.insert("children".to_string(), children);
    let body = graph.add(Schema::Object(properties));
    graph.fill(lazy, body);

    let extraction = from_schema(&graph, handle).unwrap();

    let reference = Node::reference("Category", Some("Category".to_string()));
    assert_eq!(extraction.root, reference);
    assert_eq!(extraction.definitions.len(), 1);
    assert_eq!(
        extraction.definitions.get_node("Category"),
        Some(&Node::object([
            ("name", Node::String),
            ("children", Node::array(reference.clone())),
        ]))
    );
}

#[test]
fn import_unfilled_lazy_fails() {
    let mut graph = SchemaGraph::new();
    let lazy = graph.lazy("Later");
    let handle = graph.add(Schema::Lazy(lazy));
    assert_eq!(from_schema(&graph, handle), Err(Error::UnresolvedLazy(0)));
}

#[test]
fn round_trip_through_schema() {
    let mut definitions = DefinitionMap::new();
    definitions.insert(
        "List",
        Node::object([
            ("value", Node::map(Node::String, Node::BigInt)),
            ("next", Node::optional(Node::reference("List", None))),
        ]),
        None,
    );
    let root = Node::function(
        vec![Node::reference("List", None)],
        Some(Node::intersection(vec![Node::Date, Node::RegExp]).unwrap()),
    );

    let (graph, handle) = to_schema(&root, &definitions).unwrap();
    let extraction = from_schema(&graph, handle).unwrap();

    let list = Node::reference("List", Some("List".to_string()));
    assert_eq!(
        extraction.root,
        Node::function(
            vec![list.clone()],
            Some(Node::intersection(vec![Node::Date, Node::RegExp]).unwrap()),
        )
    );
    assert_eq!(
        extraction.definitions.get_node("List"),
        Some(&Node::object([
            ("value", Node::map(Node::String, Node::BigInt)),
            ("next", Node::optional(list)),
        ]))
    );
}
