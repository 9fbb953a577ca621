//! Walks checker types into the node model.
//!
//! Dispatch is first-match-wins: intrinsic flags, literal values, built-in
//! container symbols, the `Record` alias, named types (delegated to the
//! registry), object types, then unions and intersections. Anything left is an
//! [`Error::UnknownType`].

use std::cell::RefCell;
use std::collections::HashSet;

use tracing::{debug, trace};
use typeweave_core::{BigIntLiteral, Error, Extraction, Literal, Node, Registry, Result};

use crate::config::{DefinitionPolicy, ExtractConfig};
use crate::introspect::{RawLiteral, TypeFlag, TypeIntrospector};

/// Symbol names the checker gives anonymous object literals.
const ANONYMOUS_SYMBOLS: [&str; 2] = ["__type", "__object"];

/// Intrinsic flags in dispatch order.
const INTRINSICS: [(TypeFlag, Node); 10] = [
    (TypeFlag::String, Node::String),
    (TypeFlag::Number, Node::Number),
    (TypeFlag::Boolean, Node::Boolean),
    (TypeFlag::Null, Node::Null),
    (TypeFlag::Undefined, Node::Undefined),
    (TypeFlag::Unknown, Node::Unknown),
    (TypeFlag::Void, Node::Void),
    (TypeFlag::Any, Node::Any),
    (TypeFlag::Never, Node::Never),
    (TypeFlag::BigInt, Node::BigInt),
];

/// Registry identity: a type plus the type arguments it was instantiated with.
type Key<T> = (T, Vec<T>);

/// Extract with the default configuration.
pub fn extract<C: TypeIntrospector>(checker: &C, ty: &C::Type) -> Result<Extraction> {
    Extractor::new(checker).extract(ty)
}

/// Converts checker types into nodes.
#[derive(Debug)]
pub struct Extractor<'c, C> {
    checker: &'c C,
    config: ExtractConfig,
}

impl<'c, C: TypeIntrospector> Extractor<'c, C> {
    pub fn new(checker: &'c C) -> Self {
        Self {
            checker,
            config: ExtractConfig::default(),
        }
    }

    pub fn config(mut self, config: ExtractConfig) -> Self {
        self.config = config;
        self
    }

    /// Extract `ty` and every type it reaches.
    ///
    /// Each call owns a fresh registry. On error the partial registry is dropped.
    pub fn extract(&self, ty: &C::Type) -> Result<Extraction> {
        let walk = Walk {
            checker: self.checker,
            policy: self.config.policy,
            inlining: RefCell::new(HashSet::new()),
        };
        let mut registry = Registry::new();
        let root = walk.node(ty, Resolve::Reference, &mut registry)?;
        debug!(
            definitions = registry.interned_count(),
            policy = ?self.config.policy,
            "extraction finished"
        );

        let mut definitions = registry.into_definitions();
        let root = match self.config.policy {
            DefinitionPolicy::RecursiveOnly => definitions.inline_acyclic(&root),
            DefinitionPolicy::Named | DefinitionPolicy::AliasesOnly => root,
        };
        Ok(Extraction { root, definitions })
    }
}

/// Whether a named type may be replaced by a definition reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Resolve {
    /// Named types become references.
    Reference,
    /// The type is the body of a definition being registered: extract it structurally.
    Body,
}

struct Walk<'c, C: TypeIntrospector> {
    checker: &'c C,
    policy: DefinitionPolicy,
    /// Declared types being inlined, for recursion detection under `AliasesOnly`.
    inlining: RefCell<HashSet<Key<C::Type>>>,
}

impl<C: TypeIntrospector> Walk<'_, C> {
    fn node(
        &self,
        ty: &C::Type,
        resolve: Resolve,
        registry: &mut Registry<Key<C::Type>>,
    ) -> Result<Node> {
        let c = self.checker;

        for (flag, node) in INTRINSICS {
            if c.has_flag(ty, flag) {
                trace!(kind = node.kind_name(), "intrinsic");
                return Ok(node);
            }
        }

        if let Some(raw) = c.literal_value(ty) {
            return Ok(Node::literal(self.literal(ty, raw)?));
        }

        if c.has_flag(ty, TypeFlag::BooleanLiteral) {
            return Ok(Node::literal(c.type_to_string(ty) == "true"));
        }

        let symbol = c.symbol_name(ty);
        if let Some(node) = self.builtin(ty, symbol.as_deref(), registry)? {
            return Ok(node);
        }

        let alias = c.alias_name(ty);
        if alias.as_deref() == Some("Record") {
            let arguments = c.alias_type_arguments(ty);
            if let [key, value] = arguments.as_slice() {
                trace!("record alias");
                let key = self.node(key, Resolve::Reference, registry)?;
                let value = self.node(value, Resolve::Reference, registry)?;
                return Ok(Node::record(key, value));
            }
        }

        if resolve == Resolve::Reference {
            if alias.is_some() {
                let key = (ty.clone(), c.alias_type_arguments(ty));
                return self.definition(ty, key, registry);
            }
            if let Some(symbol) = symbol.filter(|s| !ANONYMOUS_SYMBOLS.contains(&s.as_str())) {
                let key = (ty.clone(), c.type_arguments(ty));
                return match self.policy {
                    DefinitionPolicy::AliasesOnly => self.inline_declared(ty, key, registry),
                    DefinitionPolicy::Named | DefinitionPolicy::RecursiveOnly => {
                        trace!(symbol = %symbol, "declared type");
                        self.definition(ty, key, registry)
                    }
                };
            }
        }

        if c.is_object(ty) {
            return self.object(ty, registry);
        }

        if let Some(types) = c.union_members(ty) {
            trace!(count = types.len(), "union");
            return Node::union(self.all(&types, registry)?);
        }

        if let Some(types) = c.intersection_members(ty) {
            trace!(count = types.len(), "intersection");
            return Node::intersection(self.all(&types, registry)?);
        }

        Err(Error::UnknownType(c.type_to_string(ty)))
    }

    fn all(&self, types: &[C::Type], registry: &mut Registry<Key<C::Type>>) -> Result<Vec<Node>> {
        let mut nodes = Vec::with_capacity(types.len());
        for ty in types {
            nodes.push(self.node(ty, Resolve::Reference, registry)?);
        }
        Ok(nodes)
    }

    fn literal(&self, ty: &C::Type, raw: RawLiteral) -> Result<Literal> {
        Ok(match raw {
            RawLiteral::String(s) => Literal::String(s),
            RawLiteral::Number(n) => Literal::Number(n),
            RawLiteral::BigInt { negative, base10 } => BigIntLiteral::from_parts(negative, &base10)
                .map(Literal::BigInt)
                .ok_or_else(|| Error::UnknownType(self.checker.type_to_string(ty)))?,
        })
    }

    /// Built-in generic containers and value classes, recognized by symbol name.
    fn builtin(
        &self,
        ty: &C::Type,
        symbol: Option<&str>,
        registry: &mut Registry<Key<C::Type>>,
    ) -> Result<Option<Node>> {
        let Some(symbol) = symbol else {
            return Ok(None);
        };
        let node = match symbol {
            "Array" | "ReadonlyArray" => Node::array(self.type_argument(ty, 0, registry)?),
            "Set" => Node::set(self.type_argument(ty, 0, registry)?),
            "Map" => {
                let key = self.type_argument(ty, 0, registry)?;
                Node::map(key, self.type_argument(ty, 1, registry)?)
            }
            "Date" => Node::Date,
            "RegExp" => Node::RegExp,
            _ => return Ok(None),
        };
        trace!(symbol, "built-in");
        Ok(Some(node))
    }

    fn type_argument(
        &self,
        ty: &C::Type,
        index: usize,
        registry: &mut Registry<Key<C::Type>>,
    ) -> Result<Node> {
        let arguments = self.checker.type_arguments(ty);
        let argument = arguments
            .get(index)
            .ok_or_else(|| Error::UnknownType(self.checker.type_to_string(ty)))?;
        self.node(argument, Resolve::Reference, registry)
    }

    fn definition(
        &self,
        ty: &C::Type,
        key: Key<C::Type>,
        registry: &mut Registry<Key<C::Type>>,
    ) -> Result<Node> {
        let label = self.checker.type_to_string(ty);
        registry.intern(key, Some(label.as_str()), |registry| {
            self.node(ty, Resolve::Body, registry)
        })
    }

    /// Inline a declared type, registering it only if it turns out to recur.
    fn inline_declared(
        &self,
        ty: &C::Type,
        key: Key<C::Type>,
        registry: &mut Registry<Key<C::Type>>,
    ) -> Result<Node> {
        if let Some(reference) = registry.lookup(&key) {
            return Ok(reference);
        }

        let label = self.checker.type_to_string(ty);
        if !self.inlining.borrow_mut().insert(key.clone()) {
            debug!(label = %label, "declared type recurs, registering");
            return Ok(registry.reserve(key, Some(label.as_str())));
        }

        let body = self.node(ty, Resolve::Body, registry);
        self.inlining.borrow_mut().remove(&key);
        let body = body?;

        match registry.identifier(&key).map(str::to_string) {
            Some(identifier) => {
                registry.complete(&identifier, body);
                Ok(Node::reference(identifier, Some(label)))
            }
            None => Ok(body),
        }
    }

    /// Object types: tuples, then index signatures, call signatures, and
    /// properties, combined with an intersection when more than one is present.
    fn object(&self, ty: &C::Type, registry: &mut Registry<Key<C::Type>>) -> Result<Node> {
        let c = self.checker;

        if let Some(elements) = c.tuple_elements(ty) {
            trace!(count = elements.len(), "tuple");
            let mut nodes = Vec::with_capacity(elements.len());
            for element in &elements {
                let node = self.node(&element.ty, Resolve::Reference, registry)?;
                nodes.push(if element.optional {
                    Node::optional(node)
                } else {
                    node
                });
            }
            return Node::tuple(nodes);
        }

        let mut parts = Vec::new();

        let mut keys = Vec::new();
        let mut value = None;
        if let Some(index) = c.string_index_type(ty) {
            keys.push(Node::String);
            value = Some(self.node(&index, Resolve::Reference, registry)?);
        }
        if let Some(index) = c.number_index_type(ty) {
            keys.push(Node::Number);
            if value.is_none() {
                value = Some(self.node(&index, Resolve::Reference, registry)?);
            }
        }
        if let Some(value) = value {
            parts.push(Node::record(Node::union_if_multiple(keys)?, value));
        }

        let signatures = c.call_signatures(ty);
        if !signatures.is_empty() {
            let mut functions = Vec::with_capacity(signatures.len());
            for signature in &signatures {
                let parameters = self.all(&signature.parameters, registry)?;
                let returns = self.node(&signature.returns, Resolve::Reference, registry)?;
                functions.push(Node::function(parameters, Some(returns)));
            }
            parts.push(Node::union_if_multiple(functions)?);
        }

        let properties = c.properties(ty);
        if !properties.is_empty() {
            let mut shape = Vec::with_capacity(properties.len());
            for property in properties {
                let node = self.node(&property.ty, Resolve::Reference, registry)?;
                let node = if property.optional {
                    Node::optional(node)
                } else {
                    node
                };
                shape.push((property.name, node));
            }
            parts.push(Node::object(shape));
        }

        trace!(parts = parts.len(), "object");
        match parts.len() {
            0 => Ok(Node::object(Vec::<(String, Node)>::new())),
            1 => Ok(parts.remove(0)),
            _ => Node::intersection(parts),
        }
    }
}
