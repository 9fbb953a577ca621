//! typeweave: structural type graphs between type checkers, schema builders, and
//! type declarations.
//!
//! A type is extracted once into a [`Node`] tree plus a [`DefinitionMap`] of
//! named and recursive types, then emitted as validation-library source text,
//! a live schema graph, or TypeScript declarations.
//!
//! # Example
//!
//! ```
//! use typeweave::{ObjectType, TypeStore, extract, to_zod};
//!
//! let mut store = TypeStore::new();
//! let string = store.string();
//! let number = store.number();
//! let tags = store.array(string);
//! let user = store.object(
//!     ObjectType::new()
//!         .property("name", string)
//!         .optional_property("age", number)
//!         .property("tags", tags),
//! );
//!
//! let extraction = extract(&store, &user)?;
//! let zod = to_zod(&extraction.root, &extraction.definitions)?;
//! assert_eq!(
//!     zod,
//!     "z.object({ name: z.string(), age: z.number().optional(), tags: z.array(z.string()) })"
//! );
//! # Ok::<(), typeweave::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]


pub use typeweave_core::{
    BigIntLiteral, Definition, DefinitionMap, Error, Extraction, Literal, Members, Node, Registry,
    Result, SERIALIZED_UNDEFINED, Shape, serialize_primitive, utils,
};
pub use typeweave_emit::code::{to_typebox, to_zod};
pub use typeweave_emit::declaration::print_module;
pub use typeweave_emit::{
    CodeConfig, CodeEmitter, DeclarationConfig, DeclarationEmitter, Dialect, LazyId, Printer,
    Schema, SchemaBuilder, SchemaGraph, SchemaId, TypeNode, TypeScriptPrinter, code, declaration,
    from_schema, schema, to_schema,
};
pub use typeweave_extract::{
    DefinitionPolicy, ExtractConfig, Extractor, ObjectType, Property, RawLiteral, Signature,
    TupleElement, TypeFlag, TypeId, TypeIntrospector, TypeStore, extract,
};
