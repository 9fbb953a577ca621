//! TypeBox expressions.

use typeweave_core::{Error, Literal, Node, Result, serialize_primitive};

use super::emitter::CodeEmitter;
use crate::syntax::property_key;

const TARGET: &str = "TypeBox";

fn method(name: &str, argument: &str) -> String {
    format!("Type.{name}({argument})")
}

/// `union(.., undefined)`: optional sugar rather than a plain `undefined`.
fn is_optional_union(node: &Node) -> bool {
    matches!(node, Node::Union { .. }) && node.is_optional()
}

impl CodeEmitter<'_> {
    pub(super) fn typebox(&self, node: &Node) -> Result<String> {
        Ok(match node {
            Node::String => method("String", ""),
            Node::Number => method("Number", ""),
            Node::Boolean => method("Boolean", ""),
            Node::Null => method("Null", ""),
            Node::Undefined => method("Undefined", ""),
            Node::Void => method("Void", ""),
            Node::Any => method("Any", ""),
            Node::Unknown => method("Unknown", ""),
            Node::Never => method("Never", ""),
            Node::Date => method("Date", ""),
            Node::RegExp => method("RegExp", ""),
            Node::BigInt | Node::Set { .. } | Node::Map { .. } => {
                return Err(Error::unsupported(TARGET, node.kind_name()));
            }
            Node::Literal { value } => match value {
                Literal::Null => method("Null", ""),
                Literal::BigInt(_) => return Err(Error::unsupported(TARGET, value.kind_name())),
                _ => method("Literal", &serialize_primitive(value)),
            },
            Node::Array { element } => method("Array", &self.emit(element)?),
            Node::Record { key, value } => method(
                "Record",
                &format!("{}, {}", self.emit(key)?, self.emit(value)?),
            ),
            Node::Object { shape } => {
                if shape.is_empty() {
                    return Ok(method("Object", "{}"));
                }
                let mut properties = Vec::with_capacity(shape.len());
                for (name, value) in shape {
                    properties.push(format!("{}: {}", property_key(name), self.property(value)?));
                }
                method("Object", &format!("{{ {} }}", properties.join(", ")))
            }
            Node::Union { members } => method("Union", &format!("[{}]", self.emit_list(members)?)),
            Node::Tuple { elements } => {
                if elements.iter().any(is_optional_union) {
                    return Err(Error::unsupported(TARGET, "optional tuple element"));
                }
                method("Tuple", &format!("[{}]", self.emit_list(elements)?))
            }
            Node::Intersection { members } => {
                method("Intersect", &format!("[{}]", self.emit_list(members)?))
            }
            Node::Function {
                parameters,
                returns,
            } => {
                let returns = match returns {
                    Some(returns) => self.emit(returns)?,
                    None => method("Void", ""),
                };
                method(
                    "Function",
                    &format!("[{}], {returns}", self.emit_list(parameters)?),
                )
            }
            Node::DefinitionReference { .. } => self.emit(node)?,
        })
    }

    /// `Type.Optional` only takes effect on object properties. Elsewhere an
    /// optional union is an ordinary union with `Type.Undefined()`.
    fn property(&self, value: &Node) -> Result<String> {
        if !is_optional_union(value) {
            return self.emit(value);
        }
        let inner = value.without_undefined().unwrap_or(Node::Undefined);
        Ok(method("Optional", &self.emit(&inner)?))
    }
}
