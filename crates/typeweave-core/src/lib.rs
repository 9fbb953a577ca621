#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for typeweave type graphs.
//!
//! Three layers:
//! - **Node model** (`Node`, `Members`, `Literal`): the closed set of type variants
//! - **Definitions** (`DefinitionMap`, `Registry`): named and recursive types kept
//!   outside the inline tree, with cycle breaking during construction
//! - **Errors** (`Error`): shared by extraction and every emitter

pub mod definitions;
pub mod literal;
pub mod node;
pub mod utils;

#[cfg(test)]
mod node_tests;
#[cfg(test)]
mod utils_tests;

pub use definitions::{Definition, DefinitionMap, Extraction, Registry};
pub use literal::{BigIntLiteral, Literal, SERIALIZED_UNDEFINED, serialize_primitive};
pub use node::{Members, Node, Shape};

/// Errors raised while building, extracting, or emitting type graphs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The target format has no construct for a node variant.
    #[error("{target} does not support {feature}")]
    UnsupportedFeature {
        target: &'static str,
        feature: String,
    },

    /// An external type matched none of the recognized shapes.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// A union, tuple, or intersection was built without members.
    #[error("{variant} requires at least one member")]
    EmptyMembers { variant: &'static str },

    /// A definition reference names an identifier missing from the definition map.
    #[error("unresolved definition reference `{0}`")]
    UnresolvedReference(String),

    /// A lazy schema handle was read before its definition finished.
    #[error("lazy schema #{0} is not resolved")]
    UnresolvedLazy(u32),
}

impl Error {
    pub fn unsupported(target: &'static str, feature: impl Into<String>) -> Self {
        Self::UnsupportedFeature {
            target,
            feature: feature.into(),
        }
    }
}

/// Result type for typeweave operations.
pub type Result<T> = std::result::Result<T, Error>;
