//! Type-declaration emitter.
//!
//! Converts nodes into a TypeScript type syntax tree ([`TypeNode`]) and prints
//! it through a [`Printer`].

mod ast;
mod config;
mod emitter;
mod printer;

#[cfg(test)]
mod emitter_tests;

pub use ast::{Keyword, Parameter, PropertySignature, TupleMember, TypeAlias, TypeNode};
pub use config::DeclarationConfig;
pub use emitter::DeclarationEmitter;
pub use printer::{Printer, TypeScriptPrinter};

use typeweave_core::{DefinitionMap, Node, Result};

/// Print every definition followed by `type <root_name> = <root>`.
pub fn print_module(
    root: &Node,
    root_name: &str,
    definitions: &DefinitionMap,
    config: DeclarationConfig,
) -> Result<String> {
    let emitter = DeclarationEmitter::new(definitions);
    let printer = TypeScriptPrinter::new(config);

    let mut aliases = emitter.emit_definitions()?;
    aliases.push(TypeAlias {
        name: root_name.to_string(),
        ty: emitter.emit(root)?,
    });

    let mut out = String::new();
    for alias in &aliases {
        out.push_str(&printer.print_alias(alias));
        out.push('\n');
    }
    Ok(out)
}
