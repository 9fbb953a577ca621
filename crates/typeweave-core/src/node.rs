//! The type-description graph.
//!
//! # Overview
//!
//! A [`Node`] is an immutable value tree describing one structural type. Named and
//! recursive types do not nest: they live in a [`DefinitionMap`](crate::DefinitionMap)
//! and are referenced with [`Node::DefinitionReference`].
//!
//! # Design Decisions
//!
//! ## Optionality
//!
//! Optionality is not a variant. A node is optional when it admits `undefined`:
//! [`Node::optional`] wraps a node as `union(node, undefined)` and
//! [`Node::is_optional`] checks that structurally. There is no separate flag.
//!
//! ## Non-empty composites
//!
//! Union, tuple, and intersection members are held in [`Members`], which cannot be
//! empty. The invariant is checked once at construction (including
//! deserialization), so emitters never see a zero-member composite.

use std::ops::Deref;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::literal::Literal;
use crate::{Error, Result};

/// Ordered property map of an object node.
pub type Shape = IndexMap<String, Node>;

/// A structural type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "typeName", rename_all = "camelCase")]
pub enum Node {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Void,
    Any,
    Unknown,
    Never,
    #[serde(rename = "bigint")]
    BigInt,
    Date,
    #[serde(rename = "regexp")]
    RegExp,
    Literal {
        value: Literal,
    },
    Array {
        element: Box<Node>,
    },
    Set {
        element: Box<Node>,
    },
    Record {
        key: Box<Node>,
        value: Box<Node>,
    },
    Map {
        key: Box<Node>,
        value: Box<Node>,
    },
    Object {
        shape: Shape,
    },
    Union {
        members: Members,
    },
    Tuple {
        elements: Members,
    },
    Intersection {
        members: Members,
    },
    Function {
        parameters: Vec<Node>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        returns: Option<Box<Node>>,
    },
    #[serde(rename_all = "camelCase")]
    DefinitionReference {
        identifier: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
    },
}

impl Node {
    pub fn literal(value: impl Into<Literal>) -> Self {
        Node::Literal {
            value: value.into(),
        }
    }

    pub fn array(element: Node) -> Self {
        Node::Array {
            element: Box::new(element),
        }
    }

    pub fn set(element: Node) -> Self {
        Node::Set {
            element: Box::new(element),
        }
    }

    pub fn record(key: Node, value: Node) -> Self {
        Node::Record {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn map(key: Node, value: Node) -> Self {
        Node::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Object node from `(name, node)` pairs, keeping their order.
    ///
    /// A repeated name keeps its first position and takes the last node.
    pub fn object<K, I>(properties: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Object {
            shape: properties
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    pub fn union(members: Vec<Node>) -> Result<Self> {
        Ok(Node::Union {
            members: Members::for_variant(members, "union")?,
        })
    }

    pub fn tuple(elements: Vec<Node>) -> Result<Self> {
        Ok(Node::Tuple {
            elements: Members::for_variant(elements, "tuple")?,
        })
    }

    pub fn intersection(members: Vec<Node>) -> Result<Self> {
        Ok(Node::Intersection {
            members: Members::for_variant(members, "intersection")?,
        })
    }

    pub fn function(parameters: Vec<Node>, returns: Option<Node>) -> Self {
        Node::Function {
            parameters,
            returns: returns.map(Box::new),
        }
    }

    pub fn reference(identifier: impl Into<String>, display_name: Option<String>) -> Self {
        Node::DefinitionReference {
            identifier: identifier.into(),
            display_name,
        }
    }

    /// A single member is returned as-is; more become a union.
    pub fn union_if_multiple(mut members: Vec<Node>) -> Result<Self> {
        if members.len() == 1 {
            return Ok(members.remove(0));
        }
        Node::union(members)
    }

    /// Mark a node as not required: `union(node, undefined)`.
    ///
    /// Already-optional nodes are returned unchanged.
    pub fn optional(node: Node) -> Self {
        if node.is_optional() {
            return node;
        }
        Node::Union {
            members: Members(vec![node, Node::Undefined]),
        }
    }

    /// `union(node, null)`.
    pub fn nullable(node: Node) -> Self {
        Node::Union {
            members: Members(vec![node, Node::Null]),
        }
    }

    /// True iff the node is `undefined`, or a union with an optional member.
    pub fn is_optional(&self) -> bool {
        match self {
            Node::Undefined => true,
            Node::Union { members } => members.iter().any(Node::is_optional),
            _ => false,
        }
    }

    /// The node with every optional member removed from its top-level union.
    ///
    /// Returns `None` when nothing is left (the node only admits `undefined`).
    /// Non-optional nodes come back unchanged. A single remaining member is
    /// returned without a union wrapper.
    pub fn without_undefined(&self) -> Option<Node> {
        match self {
            Node::Undefined => None,
            Node::Union { members } if self.is_optional() => {
                let mut rest: Vec<Node> =
                    members.iter().filter_map(Node::without_undefined).collect();
                match rest.len() {
                    0 => None,
                    1 => rest.pop(),
                    _ => Some(Node::Union {
                        members: Members(rest),
                    }),
                }
            }
            _ => Some(self.clone()),
        }
    }

    /// Variant tag in the serialized form, e.g. `definitionReference`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::String => "string",
            Node::Number => "number",
            Node::Boolean => "boolean",
            Node::Null => "null",
            Node::Undefined => "undefined",
            Node::Void => "void",
            Node::Any => "any",
            Node::Unknown => "unknown",
            Node::Never => "never",
            Node::BigInt => "bigint",
            Node::Date => "date",
            Node::RegExp => "regexp",
            Node::Literal { .. } => "literal",
            Node::Array { .. } => "array",
            Node::Set { .. } => "set",
            Node::Record { .. } => "record",
            Node::Map { .. } => "map",
            Node::Object { .. } => "object",
            Node::Union { .. } => "union",
            Node::Tuple { .. } => "tuple",
            Node::Intersection { .. } => "intersection",
            Node::Function { .. } => "function",
            Node::DefinitionReference { .. } => "definitionReference",
        }
    }

    /// Visit every direct child node, in emission order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Array { element } | Node::Set { element } => vec![element.as_ref()],
            Node::Record { key, value } | Node::Map { key, value } => {
                vec![key.as_ref(), value.as_ref()]
            }
            Node::Object { shape } => shape.values().collect(),
            Node::Union { members } | Node::Intersection { members } => members.iter().collect(),
            Node::Tuple { elements } => elements.iter().collect(),
            Node::Function {
                parameters,
                returns,
            } => parameters.iter().chain(returns.as_deref()).collect(),
            _ => Vec::new(),
        }
    }

    /// Rebuild the node with `f` applied to every direct child.
    pub fn map_children(&self, f: &mut impl FnMut(&Node) -> Node) -> Node {
        match self {
            Node::Array { element } => Node::array(f(element)),
            Node::Set { element } => Node::set(f(element)),
            Node::Record { key, value } => Node::record(f(key), f(value)),
            Node::Map { key, value } => Node::map(f(key), f(value)),
            Node::Object { shape } => Node::Object {
                shape: shape.iter().map(|(k, v)| (k.clone(), f(v))).collect(),
            },
            Node::Union { members } => Node::Union {
                members: members.map(f),
            },
            Node::Tuple { elements } => Node::Tuple {
                elements: elements.map(f),
            },
            Node::Intersection { members } => Node::Intersection {
                members: members.map(f),
            },
            Node::Function {
                parameters,
                returns,
            } => Node::Function {
                parameters: parameters.iter().map(&mut *f).collect(),
                returns: returns.as_deref().map(|r| Box::new(f(r))),
            },
            leaf => leaf.clone(),
        }
    }
}

/// Non-empty ordered list of member nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Node>", into = "Vec<Node>")]
pub struct Members(Vec<Node>);

impl Members {
    /// Returns `None` for an empty list.
    pub fn new(nodes: Vec<Node>) -> Option<Self> {
        if nodes.is_empty() {
            None
        } else {
            Some(Self(nodes))
        }
    }

    fn for_variant(nodes: Vec<Node>, variant: &'static str) -> Result<Self> {
        Self::new(nodes).ok_or(Error::EmptyMembers { variant })
    }

    pub fn first(&self) -> &Node {
        &self.0[0]
    }

    /// The only member, if there is exactly one.
    pub fn single(&self) -> Option<&Node> {
        match self.0.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn into_vec(self) -> Vec<Node> {
        self.0
    }

    fn map(&self, f: &mut impl FnMut(&Node) -> Node) -> Self {
        Self(self.0.iter().map(f).collect())
    }
}

impl Deref for Members {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.0
    }
}

impl TryFrom<Vec<Node>> for Members {
    type Error = Error;

    fn try_from(nodes: Vec<Node>) -> Result<Self> {
        Self::for_variant(nodes, "members")
    }
}

impl From<Members> for Vec<Node> {
    fn from(members: Members) -> Self {
        members.0
    }
}
