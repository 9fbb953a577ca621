//! Runtime-schema emitter.
//!
//! # Overview
//!
//! A [`SchemaGraph`] is an arena of live schema objects, the shape a runtime
//! validation library builds (`object`, `union`, `optional`, ...). Schemas refer
//! to each other by [`SchemaId`]. Recursive definitions go through a
//! [`Schema::Lazy`] handle whose target is filled in once the definition's body
//! has been built, so a definition can reference itself before it exists.
//!
//! [`SchemaBuilder`] turns nodes into schemas, [`SchemaGraph::to_json_schema`]
//! renders a graph as a JSON Schema document, and [`from_schema`] imports a
//! schema graph back into nodes.

mod builder;
mod graph;
mod import;
mod json;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod import_tests;
#[cfg(test)]
mod json_tests;

pub use builder::SchemaBuilder;
pub use graph::{LazyId, Schema, SchemaGraph, SchemaId};
pub use import::from_schema;

use typeweave_core::{DefinitionMap, Node, Result};

/// Build the schema for `node`, returning the graph and the root handle.
pub fn to_schema(node: &Node, definitions: &DefinitionMap) -> Result<(SchemaGraph, SchemaId)> {
    let mut builder = SchemaBuilder::new(definitions);
    let root = builder.build(node)?;
    Ok((builder.finish(), root))
}
