//! Node to TypeScript syntax conversion.

use tracing::trace;
use typeweave_core::{DefinitionMap, Error, Literal, Node, Result};

use super::ast::{Keyword, Parameter, PropertySignature, TupleMember, TypeAlias, TypeNode};

const TARGET: &str = "TypeScript";

/// Builds TypeScript type syntax for nodes.
pub struct DeclarationEmitter<'d> {
    definitions: &'d DefinitionMap,
}

impl<'d> DeclarationEmitter<'d> {
    pub fn new(definitions: &'d DefinitionMap) -> Self {
        Self { definitions }
    }

    pub fn emit(&self, node: &Node) -> Result<TypeNode> {
        Ok(match node {
            Node::String => TypeNode::Keyword(Keyword::String),
            Node::Number => TypeNode::Keyword(Keyword::Number),
            Node::Boolean => TypeNode::Keyword(Keyword::Boolean),
            Node::Null => TypeNode::LiteralType(Literal::Null),
            Node::Undefined => TypeNode::Keyword(Keyword::Undefined),
            Node::Void => TypeNode::Keyword(Keyword::Void),
            Node::Any => TypeNode::Keyword(Keyword::Any),
            Node::Unknown => TypeNode::Keyword(Keyword::Unknown),
            Node::Never => TypeNode::Keyword(Keyword::Never),
            Node::BigInt => TypeNode::Keyword(Keyword::BigInt),
            Node::Date => TypeNode::reference("Date", Vec::new()),
            Node::RegExp => TypeNode::reference("RegExp", Vec::new()),
            Node::Literal { value } => {
                if let Literal::Number(n) = value
                    && !n.is_finite()
                {
                    return Err(Error::unsupported(TARGET, "non-finite number literal"));
                }
                TypeNode::LiteralType(value.clone())
            }
            Node::Array { element } => TypeNode::Array(Box::new(self.emit(element)?)),
            Node::Set { element } => TypeNode::reference("Set", vec![self.emit(element)?]),
            Node::Record { key, value } => {
                TypeNode::reference("Record", vec![self.emit(key)?, self.emit(value)?])
            }
            Node::Map { key, value } => {
                TypeNode::reference("Map", vec![self.emit(key)?, self.emit(value)?])
            }
            Node::Object { shape } => {
                let mut properties = Vec::with_capacity(shape.len());
                for (name, value) in shape {
                    let (ty, optional) = self.emit_optional(value)?;
                    properties.push(PropertySignature {
                        name: name.clone(),
                        optional,
                        ty,
                    });
                }
                TypeNode::TypeLiteral(properties)
            }
            Node::Union { members } => match members.single() {
                Some(only) => self.emit(only)?,
                None => TypeNode::Union(self.emit_all(members)?),
            },
            Node::Tuple { elements } => {
                let mut members = Vec::with_capacity(elements.len());
                for element in elements.iter() {
                    let (ty, optional) = self.emit_optional(element)?;
                    members.push(TupleMember { optional, ty });
                }
                TypeNode::Tuple(members)
            }
            Node::Intersection { members } => TypeNode::Intersection(self.emit_all(members)?),
            Node::Function {
                parameters,
                returns,
            } => {
                let mut params = Vec::with_capacity(parameters.len());
                for (i, parameter) in parameters.iter().enumerate() {
                    params.push(Parameter {
                        name: format!("args_{i}"),
                        ty: self.emit(parameter)?,
                    });
                }
                let returns = match returns {
                    Some(returns) => self.emit(returns)?,
                    None => TypeNode::Keyword(Keyword::Void),
                };
                TypeNode::Function {
                    parameters: params,
                    returns: Box::new(returns),
                }
            }
            Node::DefinitionReference { identifier, .. } => {
                if !self.definitions.contains(identifier) {
                    return Err(Error::UnresolvedReference(identifier.clone()));
                }
                TypeNode::reference(identifier.clone(), Vec::new())
            }
        })
    }

    fn emit_all(&self, nodes: &[Node]) -> Result<Vec<TypeNode>> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            out.push(self.emit(node)?);
        }
        Ok(out)
    }

    /// The type to print after an optionality marker, and whether the marker applies.
    fn emit_optional(&self, node: &Node) -> Result<(TypeNode, bool)> {
        if !node.is_optional() {
            return Ok((self.emit(node)?, false));
        }
        let ty = match node.without_undefined() {
            Some(inner) => self.emit(&inner)?,
            None => TypeNode::Keyword(Keyword::Undefined),
        };
        Ok((ty, true))
    }

    /// One alias per definition, in registration order.
    pub fn emit_definitions(&self) -> Result<Vec<TypeAlias>> {
        let mut aliases = Vec::with_capacity(self.definitions.len());
        for (identifier, definition) in self.definitions.iter() {
            trace!(identifier, "emitting type alias");
            aliases.push(TypeAlias {
                name: identifier.to_string(),
                ty: self.emit(&definition.node)?,
            });
        }
        Ok(aliases)
    }
}
