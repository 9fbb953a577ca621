//! Dialect-independent part of code emission.

use tracing::trace;
use typeweave_core::{DefinitionMap, Error, Node, Result};

use super::config::{CodeConfig, Dialect};

/// Renders nodes as validation-library source text.
pub struct CodeEmitter<'d> {
    pub(super) definitions: &'d DefinitionMap,
    pub(super) config: CodeConfig,
}

impl<'d> CodeEmitter<'d> {
    pub fn new(definitions: &'d DefinitionMap, config: CodeConfig) -> Self {
        Self {
            definitions,
            config,
        }
    }

    /// Render one node as an expression.
    pub fn emit(&self, node: &Node) -> Result<String> {
        match node {
            Node::DefinitionReference { identifier, .. } => {
                if !self.definitions.contains(identifier) {
                    return Err(Error::UnresolvedReference(identifier.clone()));
                }
                Ok(identifier.clone())
            }
            Node::Union { members } if members.single().is_some() => {
                self.emit(members.first())
            }
            _ => self.dialect(node),
        }
    }

    fn dialect(&self, node: &Node) -> Result<String> {
        match self.config.dialect {
            Dialect::Zod => self.zod(node),
            Dialect::TypeBox => self.typebox(node),
        }
    }

    /// Render every expression in order, comma-separated.
    pub(super) fn emit_list(&self, nodes: &[Node]) -> Result<String> {
        let mut parts = Vec::with_capacity(nodes.len());
        for node in nodes {
            parts.push(self.emit(node)?);
        }
        Ok(parts.join(", "))
    }

    /// One `const <id> = <expr>` per definition, in registration order.
    pub fn emit_definitions(&self) -> Result<Vec<String>> {
        self.declarations(self.definitions.identifiers())
    }

    fn declarations<'a>(&self, identifiers: impl Iterator<Item = &'a str>) -> Result<Vec<String>> {
        let mut out = Vec::with_capacity(self.definitions.len());
        for identifier in identifiers {
            let node = self
                .definitions
                .get_node(identifier)
                .ok_or_else(|| Error::UnresolvedReference(identifier.to_string()))?;
            trace!(identifier, dialect = self.config.dialect.name(), "emitting definition");
            let expr = self.emit(node)?;
            out.push(self.declaration(identifier, &expr));
        }
        Ok(out)
    }

    /// Definitions followed by `const <root_name> = <root>`, one per line.
    ///
    /// Definitions are written dependencies first, so every `const` a
    /// non-recursive definition uses is declared above it. Definitions on a
    /// reference cycle still refer to each other before declaration.
    pub fn emit_module(&self, root: &Node, root_name: &str) -> Result<String> {
        let mut lines = self.declarations(self.definitions.dependency_order().into_iter())?;
        let expr = self.emit(root)?;
        lines.push(self.declaration(root_name, &expr));

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }

    fn declaration(&self, name: &str, expr: &str) -> String {
        let export = if self.config.export { "export " } else { "" };
        format!("{export}const {name} = {expr}")
    }
}
