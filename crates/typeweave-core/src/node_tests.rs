use indoc::indoc;

use crate::node::{Members, Node};
use crate::{BigIntLiteral, Error};

#[test]
fn optional_wraps_with_undefined() {
    let node = Node::optional(Node::String);
    assert_eq!(
        node,
        Node::union(vec![Node::String, Node::Undefined]).unwrap()
    );
    assert!(node.is_optional());
}

#[test]
fn optional_is_idempotent() {
    let once = Node::optional(Node::Number);
    let twice = Node::optional(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn is_optional_is_structural() {
    assert!(Node::Undefined.is_optional());
    assert!(!Node::String.is_optional());
    assert!(!Node::Void.is_optional());
    assert!(!Node::nullable(Node::String).is_optional());

    let nested = Node::union(vec![
        Node::Number,
        Node::union(vec![Node::String, Node::Undefined]).unwrap(),
    ])
    .unwrap();
    assert!(nested.is_optional());

    // `undefined` inside a non-union composite does not make the whole optional
    let tuple = Node::tuple(vec![Node::Undefined]).unwrap();
    assert!(!tuple.is_optional());
}

#[test]
fn without_undefined_strips_top_level() {
    assert_eq!(Node::optional(Node::String).without_undefined(), Some(Node::String));
    assert_eq!(Node::Undefined.without_undefined(), None);
    assert_eq!(Node::Boolean.without_undefined(), Some(Node::Boolean));

    let wide = Node::union(vec![Node::String, Node::Number, Node::Undefined]).unwrap();
    assert_eq!(
        wide.without_undefined(),
        Some(Node::union(vec![Node::String, Node::Number]).unwrap())
    );

    let nested = Node::union(vec![
        Node::Number,
        Node::union(vec![Node::String, Node::Undefined]).unwrap(),
    ])
    .unwrap();
    assert_eq!(
        nested.without_undefined(),
        Some(Node::union(vec![Node::Number, Node::String]).unwrap())
    );
}

#[test]
fn empty_composites_are_rejected() {
    assert_eq!(
        Node::union(vec![]),
        Err(Error::EmptyMembers { variant: "union" })
    );
    assert_eq!(
        Node::tuple(vec![]),
        Err(Error::EmptyMembers { variant: "tuple" })
    );
    assert_eq!(
        Node::intersection(vec![]),
        Err(Error::EmptyMembers {
            variant: "intersection"
        })
    );
    assert!(Members::new(vec![]).is_none());
}

#[test]
fn union_if_multiple_collapses_single() {
    assert_eq!(Node::union_if_multiple(vec![Node::String]), Ok(Node::String));
    assert_eq!(
        Node::union_if_multiple(vec![Node::String, Node::Number]),
        Node::union(vec![Node::String, Node::Number])
    );
    assert!(Node::union_if_multiple(vec![]).is_err());
}

#[test]
fn members_single() {
    let one = Members::new(vec![Node::Null]).unwrap();
    assert_eq!(one.single(), Some(&Node::Null));
    assert_eq!(one.first(), &Node::Null);

    let two = Members::new(vec![Node::Null, Node::String]).unwrap();
    assert_eq!(two.single(), None);
    assert_eq!(two.len(), 2);
}

#[test]
fn object_keeps_property_order() {
    let node = Node::object([("zeta", Node::String), ("alpha", Node::Number)]);
    let Node::Object { shape } = &node else {
        panic!("expected object");
    };
    let names: Vec<&str> = shape.keys().map(String::as_str).collect();
    assert_eq!(names, ["zeta", "alpha"]);
}

#[test]
fn children_in_emission_order() {
    let node = Node::function(vec![Node::String, Node::Number], Some(Node::Boolean));
    let kinds: Vec<&str> = node.children().iter().map(|n| n.kind_name()).collect();
    assert_eq!(kinds, ["string", "number", "boolean"]);

    assert!(Node::Date.children().is_empty());
}

#[test]
fn map_children_rebuilds_shape() {
    let node = Node::record(Node::String, Node::array(Node::Number));
    let mapped = node.map_children(&mut |child| Node::optional(child.clone()));
    assert_eq!(
        mapped,
        Node::record(
            Node::optional(Node::String),
            Node::optional(Node::array(Node::Number))
        )
    );
}

#[test]
fn serialized_form() {
    let node = Node::object([
        ("id", Node::literal(BigIntLiteral::from(7))),
        ("name", Node::optional(Node::String)),
        ("self", Node::reference("User", Some("User".to_string()))),
    ]);
    let json = serde_json::to_string_pretty(&node).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "typeName": "object",
      "shape": {
        "id": {
          "typeName": "literal",
          "value": {
            "bigint": "7"
          }
        },
        "name": {
          "typeName": "union",
          "members": [
            {
              "typeName": "string"
            },
            {
              "typeName": "undefined"
            }
          ]
        },
        "self": {
          "typeName": "definitionReference",
          "identifier": "User",
          "displayName": "User"
        }
      }
    }
    "#);
}

#[test]
fn deserialize_rejects_empty_members() {
    let json = indoc! {r#"
        { "typeName": "union", "members": [] }
    "#};
    let err = serde_json::from_str::<Node>(json).unwrap_err();
    assert!(err.to_string().contains("requires at least one member"));
}

#[test]
fn deserialize_round_trip() {
    let node = Node::intersection(vec![
        Node::object([("a", Node::RegExp)]),
        Node::map(Node::String, Node::set(Node::BigInt)),
    ])
    .unwrap();
    let json = serde_json::to_string(&node).unwrap();
    assert_eq!(serde_json::from_str::<Node>(&json).unwrap(), node);
}
