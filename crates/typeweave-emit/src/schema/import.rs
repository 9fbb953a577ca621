//! Schema to node conversion.

use typeweave_core::{Extraction, Node, Registry, Result};

use super::graph::{LazyId, Schema, SchemaGraph, SchemaId};

/// Import the schema at `root` as a node tree.
///
/// Each lazy handle becomes one definition, named after its slot. Lazies that
/// refer to themselves produce self-referencing definitions.
pub fn from_schema(graph: &SchemaGraph, root: SchemaId) -> Result<Extraction> {
    let importer = Importer { graph };
    let mut registry = Registry::new();
    let root = importer.node(root, &mut registry)?;
    Ok(Extraction {
        root,
        definitions: registry.into_definitions(),
    })
}

struct Importer<'g> {
    graph: &'g SchemaGraph,
}

impl Importer<'_> {
    fn node(&self, id: SchemaId, registry: &mut Registry<LazyId>) -> Result<Node> {
        Ok(match self.graph.get(id) {
            Schema::String => Node::String,
            Schema::Number => Node::Number,
            Schema::Boolean => Node::Boolean,
            Schema::Null => Node::Null,
            Schema::Undefined => Node::Undefined,
            Schema::Void => Node::Void,
            Schema::Any => Node::Any,
            Schema::Unknown => Node::Unknown,
            Schema::Never => Node::Never,
            Schema::BigInt => Node::BigInt,
            Schema::Date => Node::Date,
            Schema::RegExp => Node::RegExp,
            Schema::Literal(value) => Node::literal(value.clone()),
            Schema::Array(element) => Node::array(self.node(*element, registry)?),
            Schema::Set(element) => Node::set(self.node(*element, registry)?),
            Schema::Record { key, value } => {
                Node::record(self.node(*key, registry)?, self.node(*value, registry)?)
            }
            Schema::Map { key, value } => {
                Node::map(self.node(*key, registry)?, self.node(*value, registry)?)
            }
            Schema::Object(properties) => {
                let mut shape = Vec::with_capacity(properties.len());
                for (name, &property) in properties {
                    shape.push((name.clone(), self.node(property, registry)?));
                }
                Node::object(shape)
            }
            Schema::Optional(inner) => Node::optional(self.node(*inner, registry)?),
            Schema::Union(members) => Node::union(self.all(members, registry)?)?,
            Schema::Tuple(elements) => Node::tuple(self.all(elements, registry)?)?,
            Schema::Intersection(members) => Node::intersection(self.all(members, registry)?)?,
            Schema::Function {
                parameters,
                returns,
            } => {
                let parameters = self.all(parameters, registry)?;
                let returns = match returns {
                    Some(returns) => Some(self.node(*returns, registry)?),
                    None => None,
                };
                Node::function(parameters, returns)
            }
            Schema::Lazy(lazy) => {
                let lazy = *lazy;
                let name = self.graph.lazy_name(lazy);
                registry.intern(lazy, Some(name), |registry| {
                    let target = self.graph.lazy_target(lazy)?;
                    self.node(target, registry)
                })?
            }
        })
    }

    fn all(&self, ids: &[SchemaId], registry: &mut Registry<LazyId>) -> Result<Vec<Node>> {
        let mut nodes = Vec::with_capacity(ids.len());
        for &id in ids {
            nodes.push(self.node(id, registry)?);
        }
        Ok(nodes)
    }
}
