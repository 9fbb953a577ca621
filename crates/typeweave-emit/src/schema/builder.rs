//! Node to schema conversion.

use std::collections::HashMap;

use tracing::{debug, trace};
use typeweave_core::{DefinitionMap, Error, Node, Result};

use super::graph::{Schema, SchemaGraph, SchemaId};

/// Builds schemas for nodes, sharing one lazy handle per definition.
pub struct SchemaBuilder<'d> {
    definitions: &'d DefinitionMap,
    graph: SchemaGraph,
    /// Definition identifier → its `Schema::Lazy` handle.
    bags: HashMap<String, SchemaId>,
}

impl<'d> SchemaBuilder<'d> {
    pub fn new(definitions: &'d DefinitionMap) -> Self {
        Self {
            definitions,
            graph: SchemaGraph::new(),
            bags: HashMap::new(),
        }
    }

    pub fn graph(&self) -> &SchemaGraph {
        &self.graph
    }

    pub fn finish(self) -> SchemaGraph {
        self.graph
    }

    pub fn build(&mut self, node: &Node) -> Result<SchemaId> {
        let schema = match node {
            Node::DefinitionReference { identifier, .. } => return self.reference(identifier),
            Node::Union { members } if members.single().is_some() => {
                return self.build(members.first());
            }
            Node::Union { .. } if node.is_optional() => match node.without_undefined() {
                Some(inner) => Schema::Optional(self.build(&inner)?),
                None => Schema::Undefined,
            },
            Node::String => Schema::String,
            Node::Number => Schema::Number,
            Node::Boolean => Schema::Boolean,
            Node::Null => Schema::Null,
            Node::Undefined => Schema::Undefined,
            Node::Void => Schema::Void,
            Node::Any => Schema::Any,
            Node::Unknown => Schema::Unknown,
            Node::Never => Schema::Never,
            Node::BigInt => Schema::BigInt,
            Node::Date => Schema::Date,
            Node::RegExp => Schema::RegExp,
            Node::Literal { value } => Schema::Literal(value.clone()),
            Node::Array { element } => Schema::Array(self.build(element)?),
            Node::Set { element } => Schema::Set(self.build(element)?),
            Node::Record { key, value } => Schema::Record {
                key: self.build(key)?,
                value: self.build(value)?,
            },
            Node::Map { key, value } => Schema::Map {
                key: self.build(key)?,
                value: self.build(value)?,
            },
            Node::Object { shape } => {
                let mut properties = indexmap::IndexMap::with_capacity(shape.len());
                for (name, value) in shape {
                    properties.insert(name.clone(), self.build(value)?);
                }
                Schema::Object(properties)
            }
            Node::Union { members } => Schema::Union(self.build_all(members)?),
            Node::Tuple { elements } => Schema::Tuple(self.build_all(elements)?),
            Node::Intersection { members } => Schema::Intersection(self.build_all(members)?),
            Node::Function {
                parameters,
                returns,
            } => Schema::Function {
                parameters: self.build_all(parameters)?,
                returns: match returns {
                    Some(returns) => Some(self.build(returns)?),
                    None => None,
                },
            },
        };
        Ok(self.graph.add(schema))
    }

    fn build_all(&mut self, nodes: &[Node]) -> Result<Vec<SchemaId>> {
        let mut ids = Vec::with_capacity(nodes.len());
        for node in nodes {
            ids.push(self.build(node)?);
        }
        Ok(ids)
    }

    /// The lazy handle for a definition, building its body on first use.
    ///
    /// The handle is recorded before the body is built, so references to the
    /// definition from inside its own body reuse it.
    fn reference(&mut self, identifier: &str) -> Result<SchemaId> {
        if let Some(&handle) = self.bags.get(identifier) {
            trace!(identifier, "reusing lazy schema");
            return Ok(handle);
        }

        let definitions = self.definitions;
        let body = definitions
            .get_node(identifier)
            .ok_or_else(|| Error::UnresolvedReference(identifier.to_string()))?;

        let lazy = self.graph.lazy(identifier);
        let handle = self.graph.add(Schema::Lazy(lazy));
        self.bags.insert(identifier.to_string(), handle);

        let target = self.build(body)?;
        self.graph.fill(lazy, target);
        debug!(identifier, lazy = lazy.index(), "built definition schema");
        Ok(handle)
    }
}
