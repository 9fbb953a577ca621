//! Schema arena and lazy handles.

use indexmap::IndexMap;
use typeweave_core::{Error, Literal, Result};

/// Handle to a schema in a [`SchemaGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaId(u32);

impl SchemaId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a deferred schema whose target is set after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LazyId(u32);

impl LazyId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A live schema object.
#[derive(Clone, Debug, PartialEq)]
pub enum Schema {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Void,
    Any,
    Unknown,
    Never,
    BigInt,
    Date,
    RegExp,
    Literal(Literal),
    Array(SchemaId),
    Set(SchemaId),
    Record { key: SchemaId, value: SchemaId },
    Map { key: SchemaId, value: SchemaId },
    Object(IndexMap<String, SchemaId>),
    /// Accepts the inner schema or an absent value.
    Optional(SchemaId),
    Union(Vec<SchemaId>),
    Tuple(Vec<SchemaId>),
    Intersection(Vec<SchemaId>),
    Function {
        parameters: Vec<SchemaId>,
        returns: Option<SchemaId>,
    },
    Lazy(LazyId),
}

impl Schema {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Schema::String => "string",
            Schema::Number => "number",
            Schema::Boolean => "boolean",
            Schema::Null => "null",
            Schema::Undefined => "undefined",
            Schema::Void => "void",
            Schema::Any => "any",
            Schema::Unknown => "unknown",
            Schema::Never => "never",
            Schema::BigInt => "bigint",
            Schema::Date => "date",
            Schema::RegExp => "regexp",
            Schema::Literal(_) => "literal",
            Schema::Array(_) => "array",
            Schema::Set(_) => "set",
            Schema::Record { .. } => "record",
            Schema::Map { .. } => "map",
            Schema::Object(_) => "object",
            Schema::Optional(_) => "optional",
            Schema::Union(_) => "union",
            Schema::Tuple(_) => "tuple",
            Schema::Intersection(_) => "intersection",
            Schema::Function { .. } => "function",
            Schema::Lazy(_) => "lazy",
        }
    }
}

#[derive(Clone, Debug)]
struct LazySlot {
    name: String,
    target: Option<SchemaId>,
}

/// Arena of schemas.
#[derive(Clone, Debug, Default)]
pub struct SchemaGraph {
    schemas: Vec<Schema>,
    lazies: Vec<LazySlot>,
}

impl SchemaGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn add(&mut self, schema: Schema) -> SchemaId {
        let id = SchemaId(self.schemas.len() as u32);
        self.schemas.push(schema);
        id
    }

    pub fn get(&self, id: SchemaId) -> &Schema {
        &self.schemas[id.index()]
    }

    /// Create an unfilled lazy slot. `name` identifies the definition it stands for.
    pub fn lazy(&mut self, name: impl Into<String>) -> LazyId {
        let id = LazyId(self.lazies.len() as u32);
        self.lazies.push(LazySlot {
            name: name.into(),
            target: None,
        });
        id
    }

    /// Point a lazy slot at its finished schema.
    pub fn fill(&mut self, lazy: LazyId, target: SchemaId) {
        self.lazies[lazy.index()].target = Some(target);
    }

    pub fn lazy_name(&self, lazy: LazyId) -> &str {
        &self.lazies[lazy.index()].name
    }

    pub fn lazy_target(&self, lazy: LazyId) -> Result<SchemaId> {
        self.lazies[lazy.index()]
            .target
            .ok_or(Error::UnresolvedLazy(lazy.0))
    }

    /// Lazy slots in creation order.
    pub fn lazies(&self) -> impl Iterator<Item = (LazyId, &str)> {
        self.lazies
            .iter()
            .enumerate()
            .map(|(i, slot)| (LazyId(i as u32), slot.name.as_str()))
    }

    /// The schema behind `id`, following lazy handles.
    pub fn resolve(&self, id: SchemaId) -> Result<&Schema> {
        let mut current = id;
        for _ in 0..=self.lazies.len() {
            match self.get(current) {
                Schema::Lazy(lazy) => current = self.lazy_target(*lazy)?,
                schema => return Ok(schema),
            }
        }
        match self.get(current) {
            Schema::Lazy(lazy) => Err(Error::UnresolvedLazy(lazy.0)),
            schema => Ok(schema),
        }
    }
}
