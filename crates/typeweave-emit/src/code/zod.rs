//! Zod expressions.

use typeweave_core::{Node, Result, serialize_primitive};

use super::emitter::CodeEmitter;
use crate::syntax::property_key;

fn method(name: &str, argument: &str) -> String {
    format!("z.{name}({argument})")
}

impl CodeEmitter<'_> {
    pub(super) fn zod(&self, node: &Node) -> Result<String> {
        Ok(match node {
            Node::String => method("string", ""),
            Node::Number => method("number", ""),
            Node::Boolean => method("boolean", ""),
            Node::Null => method("null", ""),
            Node::Undefined => method("undefined", ""),
            Node::Void => method("void", ""),
            Node::Any => method("any", ""),
            Node::Unknown => method("unknown", ""),
            Node::Never => method("never", ""),
            Node::BigInt => method("bigint", ""),
            Node::Date => method("date", ""),
            Node::RegExp => method("instanceof", "RegExp"),
            Node::Literal { value } => method("literal", &serialize_primitive(value)),
            Node::Array { element } => method("array", &self.emit(element)?),
            Node::Set { element } => method("set", &self.emit(element)?),
            Node::Record { key, value } => method(
                "record",
                &format!("{}, {}", self.emit(key)?, self.emit(value)?),
            ),
            Node::Map { key, value } => method(
                "map",
                &format!("{}, {}", self.emit(key)?, self.emit(value)?),
            ),
            Node::Object { shape } => {
                if shape.is_empty() {
                    return Ok(method("object", "{}"));
                }
                let mut properties = Vec::with_capacity(shape.len());
                for (name, value) in shape {
                    properties.push(format!("{}: {}", property_key(name), self.emit(value)?));
                }
                method("object", &format!("{{ {} }}", properties.join(", ")))
            }
            Node::Union { members } => match node.without_undefined() {
                Some(inner) if node.is_optional() => format!("{}.optional()", self.emit(&inner)?),
                _ => method("union", &format!("[{}]", self.emit_list(members)?)),
            },
            Node::Tuple { elements } => {
                method("tuple", &format!("[{}]", self.emit_list(elements)?))
            }
            Node::Intersection { members } => {
                let mut schema = self.emit(members.first())?;
                for member in &members[1..] {
                    schema = format!("{schema}.and({})", self.emit(member)?);
                }
                schema
            }
            Node::Function {
                parameters,
                returns,
            } => {
                if parameters.is_empty() && returns.is_none() {
                    return Ok(method("function", ""));
                }
                let arguments = method("tuple", &format!("[{}]", self.emit_list(parameters)?));
                match returns {
                    Some(returns) => {
                        method("function", &format!("{arguments}, {}", self.emit(returns)?))
                    }
                    None => method("function", &arguments),
                }
            }
            Node::DefinitionReference { .. } => self.emit(node)?,
        })
    }
}
