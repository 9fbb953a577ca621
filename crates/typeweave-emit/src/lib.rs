#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Emitters for typeweave type graphs.
//!
//! - [`code`]: source text for a runtime validation library (Zod or TypeBox)
//! - [`schema`]: a live schema graph with lazy handles for recursive definitions,
//!   renderable as JSON Schema and importable back into nodes
//! - [`declaration`]: a TypeScript type syntax tree and its printer
//!
//! All three resolve `definitionReference` nodes against a
//! [`DefinitionMap`](typeweave_core::DefinitionMap) and collapse single-member
//! unions to the member.

pub mod code;
pub mod declaration;
pub mod schema;

mod syntax;


pub use code::{CodeConfig, CodeEmitter, Dialect};
pub use declaration::{DeclarationConfig, DeclarationEmitter, Printer, TypeNode, TypeScriptPrinter};
pub use schema::{LazyId, Schema, SchemaBuilder, SchemaGraph, SchemaId, from_schema, to_schema};
