use typeweave_core::{BigIntLiteral, DefinitionMap, Error, Node};

use super::to_schema;

fn json(node: &Node, definitions: &DefinitionMap) -> String {
    let (graph, root) = to_schema(node, definitions).unwrap();
    serde_json::to_string_pretty(&graph.to_json_schema(root).unwrap()).unwrap()
}

fn json_err(node: &Node) -> Error {
    let (graph, root) = to_schema(node, &DefinitionMap::new()).unwrap();
    graph.to_json_schema(root).unwrap_err()
}

#[test]
fn object_with_optional_property() {
    let node = Node::object([
        ("name", Node::String),
        ("age", Node::optional(Node::Number)),
        ("tags", Node::set(Node::String)),
        ("kind", Node::literal("user")),
    ]);
    insta::assert_snapshot!(json(&node, &DefinitionMap::new()), @r#"
    {
      "$schema": "https://json-schema.org/draft/2020-12/schema",
      "type": "object",
      "properties": {
        "name": {
          "type": "string"
        },
        "age": {
          "type": "number"
        },
        "tags": {
          "type": "array",
          "items": {
            "type": "string"
          },
          "uniqueItems": true
        },
        "kind": {
          "const": "user"
        }
      },
      "required": [
        "name",
        "tags",
        "kind"
      ]
    }
    "#);
}

#[test]
fn recursive_definition_uses_defs() {
    let mut definitions = DefinitionMap::new();
    definitions.insert(
        "Tree",
        Node::object([("children", Node::array(Node::reference("Tree", None)))]),
        None,
    );
    insta::assert_snapshot!(json(&Node::reference("Tree", None), &definitions), @r##"
    {
      "$schema": "https://json-schema.org/draft/2020-12/schema",
      "$ref": "#/$defs/Tree",
      "$defs": {
        "Tree": {
          "type": "object",
          "properties": {
            "children": {
              "type": "array",
              "items": {
                "$ref": "#/$defs/Tree"
              }
            }
          },
          "required": [
            "children"
          ]
        }
      }
    }
    "##);
}

#[test]
fn tuple_union_and_record() {
    let node = Node::tuple(vec![
        Node::union(vec![Node::String, Node::Null]).unwrap(),
        Node::record(Node::String, Node::Never),
        Node::optional(Node::Boolean),
    ])
    .unwrap();
    insta::assert_snapshot!(json(&node, &DefinitionMap::new()), @r#"
    {
      "$schema": "https://json-schema.org/draft/2020-12/schema",
      "type": "array",
      "prefixItems": [
        {
          "anyOf": [
            {
              "type": "string"
            },
            {
              "type": "null"
            }
          ]
        },
        {
          "type": "object",
          "additionalProperties": {
            "not": {}
          }
        },
        {
          "type": "boolean"
        }
      ],
      "items": false,
      "minItems": 2
    }
    "#);
}

#[test]
fn record_with_literal_keys_has_property_names() {
    let keys = Node::union(vec![Node::literal("a"), Node::literal("b")]).unwrap();
    let node = Node::record(keys, Node::Any);
    insta::assert_snapshot!(json(&node, &DefinitionMap::new()), @r#"
    {
      "$schema": "https://json-schema.org/draft/2020-12/schema",
      "type": "object",
      "propertyNames": {
        "anyOf": [
          {
            "const": "a"
          },
          {
            "const": "b"
          }
        ]
      },
      "additionalProperties": {}
    }
    "#);
}

#[test]
fn unsupported_features() {
    let cases = [
        (Node::Undefined, "undefined"),
        (Node::Void, "void"),
        (Node::BigInt, "bigint"),
        (Node::Date, "date"),
        (Node::RegExp, "regexp"),
        (Node::map(Node::String, Node::Number), "map"),
        (Node::function(vec![], None), "function"),
        (Node::literal(BigIntLiteral::from(5)), "bigint literal"),
        (Node::literal(f64::NAN), "non-finite number literal"),
    ];
    for (node, feature) in cases {
        assert_eq!(json_err(&node), Error::unsupported("JSON Schema", feature));
    }
}

#[test]
fn optional_outside_properties_is_unsupported() {
    let cases = [
        Node::optional(Node::String),
        Node::array(Node::optional(Node::String)),
        Node::union(vec![Node::String, Node::Number, Node::Undefined]).unwrap(),
        Node::object([("ids", Node::set(Node::optional(Node::Number)))]),
    ];
    for node in cases {
        assert_eq!(json_err(&node), Error::unsupported("JSON Schema", "undefined"));
    }
}
