//! Code-string emitter.
//!
//! Renders a node as source text for a runtime validation library: nested
//! constructor calls such as `z.object({ name: z.string() })`. Definition
//! references render as bare identifiers; [`CodeEmitter::emit_definitions`]
//! produces the `const` declarations they refer to.

mod config;
mod emitter;
mod typebox;
mod zod;


pub use config::{CodeConfig, Dialect};
pub use emitter::CodeEmitter;

use typeweave_core::{DefinitionMap, Node, Result};

/// Render `node` as a Zod expression.
pub fn to_zod(node: &Node, definitions: &DefinitionMap) -> Result<String> {
    CodeEmitter::new(definitions, CodeConfig::default()).emit(node)
}

/// Render `node` as a TypeBox expression.
pub fn to_typebox(node: &Node, definitions: &DefinitionMap) -> Result<String> {
    let config = CodeConfig {
        dialect: Dialect::TypeBox,
        ..CodeConfig::default()
    };
    CodeEmitter::new(definitions, config).emit(node)
}
