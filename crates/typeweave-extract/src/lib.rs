#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Type extraction from an external type checker.
//!
//! The checker is seen only through [`TypeIntrospector`]. [`Extractor`] walks
//! its types into a [`Node`](typeweave_core::Node) tree, registering named and
//! recursive types in a [`DefinitionMap`](typeweave_core::DefinitionMap).
//! [`TypeStore`] is an in-memory checker for building types by hand.

mod config;
mod extractor;
mod introspect;
mod memory;

#[cfg(test)]
mod memory_tests;

pub use config::{DefinitionPolicy, ExtractConfig};
pub use extractor::{Extractor, extract};
pub use typeweave_core::Extraction;
pub use introspect::{Property, RawLiteral, Signature, TupleElement, TypeFlag, TypeIntrospector};
pub use memory::{ObjectType, TypeId, TypeStore};
