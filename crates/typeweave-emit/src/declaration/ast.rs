//! TypeScript type syntax.

use typeweave_core::Literal;

/// Keyword types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keyword {
    String,
    Number,
    Boolean,
    BigInt,
    Undefined,
    Unknown,
    Void,
    Any,
    Never,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::String => "string",
            Keyword::Number => "number",
            Keyword::Boolean => "boolean",
            Keyword::BigInt => "bigint",
            Keyword::Undefined => "undefined",
            Keyword::Unknown => "unknown",
            Keyword::Void => "void",
            Keyword::Any => "any",
            Keyword::Never => "never",
        }
    }
}

/// A TypeScript type expression.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeNode {
    Keyword(Keyword),
    /// `"a"`, `1`, `true`, `1n`, `null`
    LiteralType(Literal),
    /// `Name` or `Name<A, B>`
    TypeReference {
        name: String,
        arguments: Vec<TypeNode>,
    },
    /// `{ a: string; b?: number }`
    TypeLiteral(Vec<PropertySignature>),
    Array(Box<TypeNode>),
    Tuple(Vec<TupleMember>),
    /// `(args_0: A) => R`
    Function {
        parameters: Vec<Parameter>,
        returns: Box<TypeNode>,
    },
    Union(Vec<TypeNode>),
    Intersection(Vec<TypeNode>),
    Parenthesized(Box<TypeNode>),
}

impl TypeNode {
    pub fn reference(name: impl Into<String>, arguments: Vec<TypeNode>) -> Self {
        TypeNode::TypeReference {
            name: name.into(),
            arguments,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertySignature {
    pub name: String,
    pub optional: bool,
    pub ty: TypeNode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TupleMember {
    pub optional: bool,
    pub ty: TypeNode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeNode,
}

/// `type <name> = <ty>;`
#[derive(Clone, Debug, PartialEq)]
pub struct TypeAlias {
    pub name: String,
    pub ty: TypeNode,
}
