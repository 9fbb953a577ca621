//! Printing TypeScript type syntax as source text.

use std::fmt::{self, Write};

use typeweave_core::serialize_primitive;

use super::ast::{TypeAlias, TypeNode};
use super::config::DeclarationConfig;
use crate::syntax::property_key;

/// Renders type syntax to text.
pub trait Printer {
    /// Write a type expression.
    fn write_type(&self, ty: &TypeNode, w: &mut dyn Write) -> fmt::Result;

    /// Write a complete `type` declaration, including the trailing semicolon.
    fn write_alias(&self, alias: &TypeAlias, w: &mut dyn Write) -> fmt::Result;

    fn print_type(&self, ty: &TypeNode) -> String {
        let mut out = String::new();
        self.write_type(ty, &mut out)
            .expect("String write never fails");
        out
    }

    fn print_alias(&self, alias: &TypeAlias) -> String {
        let mut out = String::new();
        self.write_alias(alias, &mut out)
            .expect("String write never fails");
        out
    }
}

/// Where a type appears, for deciding when it needs parentheses.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Position {
    Top,
    ArrayElement,
    UnionMember,
    IntersectionMember,
    OptionalElement,
}

/// Prints type syntax the way a TypeScript formatter would.
#[derive(Clone, Debug, Default)]
pub struct TypeScriptPrinter {
    config: DeclarationConfig,
}

impl TypeScriptPrinter {
    pub fn new(config: DeclarationConfig) -> Self {
        Self { config }
    }

    fn needs_parens(ty: &TypeNode, position: Position) -> bool {
        match position {
            Position::Top => false,
            Position::ArrayElement | Position::OptionalElement => matches!(
                ty,
                TypeNode::Union(_) | TypeNode::Intersection(_) | TypeNode::Function { .. }
            ),
            Position::UnionMember => matches!(ty, TypeNode::Function { .. }),
            Position::IntersectionMember => {
                matches!(ty, TypeNode::Union(_) | TypeNode::Function { .. })
            }
        }
    }

    fn write_at(
        &self,
        ty: &TypeNode,
        position: Position,
        depth: usize,
        w: &mut dyn Write,
    ) -> fmt::Result {
        if Self::needs_parens(ty, position) {
            w.write_char('(')?;
            self.write_node(ty, depth, w)?;
            return w.write_char(')');
        }
        self.write_node(ty, depth, w)
    }

    fn write_node(&self, ty: &TypeNode, depth: usize, w: &mut dyn Write) -> fmt::Result {
        match ty {
            TypeNode::Keyword(keyword) => w.write_str(keyword.as_str()),
            TypeNode::LiteralType(literal) => w.write_str(&serialize_primitive(literal)),
            TypeNode::TypeReference { name, arguments } => {
                w.write_str(name)?;
                if arguments.is_empty() {
                    return Ok(());
                }
                w.write_char('<')?;
                self.write_separated(arguments, ", ", Position::Top, depth, w)?;
                w.write_char('>')
            }
            TypeNode::TypeLiteral(properties) => {
                if properties.is_empty() {
                    return w.write_str("{}");
                }
                let indent = " ".repeat(self.config.indent * (depth + 1));
                w.write_str("{\n")?;
                for property in properties {
                    w.write_str(&indent)?;
                    if self.config.readonly {
                        w.write_str("readonly ")?;
                    }
                    w.write_str(&property_key(&property.name))?;
                    if property.optional {
                        w.write_char('?')?;
                    }
                    w.write_str(": ")?;
                    self.write_at(&property.ty, Position::Top, depth + 1, w)?;
                    w.write_str(";\n")?;
                }
                w.write_str(&" ".repeat(self.config.indent * depth))?;
                w.write_char('}')
            }
            TypeNode::Array(element) => {
                self.write_at(element, Position::ArrayElement, depth, w)?;
                w.write_str("[]")
            }
            TypeNode::Tuple(members) => {
                w.write_char('[')?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        w.write_str(", ")?;
                    }
                    if member.optional {
                        self.write_at(&member.ty, Position::OptionalElement, depth, w)?;
                        w.write_char('?')?;
                    } else {
                        self.write_at(&member.ty, Position::Top, depth, w)?;
                    }
                }
                w.write_char(']')
            }
            TypeNode::Function {
                parameters,
                returns,
            } => {
                w.write_char('(')?;
                for (i, parameter) in parameters.iter().enumerate() {
                    if i > 0 {
                        w.write_str(", ")?;
                    }
                    write!(w, "{}: ", parameter.name)?;
                    self.write_at(&parameter.ty, Position::Top, depth, w)?;
                }
                w.write_str(") => ")?;
                self.write_at(returns, Position::Top, depth, w)
            }
            TypeNode::Union(members) => {
                self.write_separated(members, " | ", Position::UnionMember, depth, w)
            }
            TypeNode::Intersection(members) => {
                self.write_separated(members, " & ", Position::IntersectionMember, depth, w)
            }
            TypeNode::Parenthesized(inner) => {
                w.write_char('(')?;
                self.write_node(inner, depth, w)?;
                w.write_char(')')
            }
        }
    }

    fn write_separated(
        &self,
        types: &[TypeNode],
        separator: &str,
        position: Position,
        depth: usize,
        w: &mut dyn Write,
    ) -> fmt::Result {
        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                w.write_str(separator)?;
            }
            self.write_at(ty, position, depth, w)?;
        }
        Ok(())
    }
}

impl Printer for TypeScriptPrinter {
    fn write_type(&self, ty: &TypeNode, w: &mut dyn Write) -> fmt::Result {
        self.write_at(ty, Position::Top, 0, w)
    }

    fn write_alias(&self, alias: &TypeAlias, w: &mut dyn Write) -> fmt::Result {
        if self.config.export {
            w.write_str("export ")?;
        }
        write!(w, "type {} = ", alias.name)?;
        self.write_at(&alias.ty, Position::Top, 0, w)?;
        w.write_char(';')
    }
}
