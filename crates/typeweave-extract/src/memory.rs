//! An in-memory type checker.
//!
//! [`TypeStore`] holds hand-built types in an arena and answers the
//! [`TypeIntrospector`] queries the way a structural checker does: aliases are
//! an attribute of the aliased type, anonymous object literals carry the
//! `__type` symbol, and built-in generics are references to a named symbol.
//!
//! Recursive types are built by declaring a handle first and defining its body
//! afterwards:
//!
//! ```
//! use typeweave_extract::{ObjectType, TypeStore};
//!
//! let mut store = TypeStore::new();
//! let tree = store.declare_alias("Tree", &[]);
//! let children = store.array(tree);
//! let body = store.object(ObjectType::new().property("children", children));
//! store.define(tree, body);
//! ```

use std::collections::HashMap;

use typeweave_core::{BigIntLiteral, Literal, serialize_primitive};

use crate::introspect::{Property, RawLiteral, Signature, TupleElement, TypeFlag, TypeIntrospector};

const ANONYMOUS: &str = "__type";

/// Handle to a type in a [`TypeStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Members of an object type, built with chained calls.
#[derive(Clone, Debug, Default)]
pub struct ObjectType {
    properties: Vec<Property<TypeId>>,
    string_index: Option<TypeId>,
    number_index: Option<TypeId>,
    signatures: Vec<Signature<TypeId>>,
}

impl ObjectType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(self, name: impl Into<String>, ty: TypeId) -> Self {
        self.with_property(name, ty, false)
    }

    pub fn optional_property(self, name: impl Into<String>, ty: TypeId) -> Self {
        self.with_property(name, ty, true)
    }

    fn with_property(mut self, name: impl Into<String>, ty: TypeId, optional: bool) -> Self {
        self.properties.push(Property {
            name: name.into(),
            ty,
            optional,
        });
        self
    }

    /// `[key: string]: ty`
    pub fn string_index(mut self, ty: TypeId) -> Self {
        self.string_index = Some(ty);
        self
    }

    /// `[key: number]: ty`
    pub fn number_index(mut self, ty: TypeId) -> Self {
        self.number_index = Some(ty);
        self
    }

    pub fn call_signature(mut self, parameters: Vec<TypeId>, returns: TypeId) -> Self {
        self.signatures.push(Signature {
            parameters,
            returns,
        });
        self
    }
}

#[derive(Clone, Debug)]
enum TypeData {
    /// Declared but not defined yet.
    Declared,
    Intrinsic(TypeFlag),
    Literal(RawLiteral),
    BooleanLiteral(bool),
    Object(ObjectType),
    Tuple(Vec<TupleElement<TypeId>>),
    /// Reference to a built-in generic or value class (`Array<T>`, `Date`).
    Reference(Vec<TypeId>),
    Union(Vec<TypeId>),
    Intersection(Vec<TypeId>),
}

#[derive(Clone, Debug)]
struct TypeEntry {
    data: TypeData,
    symbol: Option<String>,
    alias: Option<(String, Vec<TypeId>)>,
}

/// Arena of hand-built types implementing [`TypeIntrospector`].
#[derive(Clone, Debug, Default)]
pub struct TypeStore {
    types: Vec<TypeEntry>,
    intrinsics: HashMap<TypeFlag, TypeId>,
}

impl TypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn push(&mut self, data: TypeData, symbol: Option<&str>) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(TypeEntry {
            data,
            symbol: symbol.map(str::to_string),
            alias: None,
        });
        id
    }

    fn entry(&self, id: TypeId) -> &TypeEntry {
        &self.types[id.index()]
    }

    // ========== Intrinsics ==========

    /// The intrinsic type for `flag`. Intrinsics are singletons.
    ///
    /// `TypeFlag::BooleanLiteral` yields `false`; use [`Self::boolean_literal`].
    pub fn intrinsic(&mut self, flag: TypeFlag) -> TypeId {
        if flag == TypeFlag::BooleanLiteral {
            return self.boolean_literal(false);
        }
        if let Some(&id) = self.intrinsics.get(&flag) {
            return id;
        }
        let id = self.push(TypeData::Intrinsic(flag), None);
        self.intrinsics.insert(flag, id);
        id
    }

    pub fn string(&mut self) -> TypeId {
        self.intrinsic(TypeFlag::String)
    }

    pub fn number(&mut self) -> TypeId {
        self.intrinsic(TypeFlag::Number)
    }

    pub fn boolean(&mut self) -> TypeId {
        self.intrinsic(TypeFlag::Boolean)
    }

    pub fn null(&mut self) -> TypeId {
        self.intrinsic(TypeFlag::Null)
    }

    pub fn undefined(&mut self) -> TypeId {
        self.intrinsic(TypeFlag::Undefined)
    }

    pub fn bigint(&mut self) -> TypeId {
        self.intrinsic(TypeFlag::BigInt)
    }

    // ========== Literals ==========

    pub fn string_literal(&mut self, value: impl Into<String>) -> TypeId {
        self.push(TypeData::Literal(RawLiteral::String(value.into())), None)
    }

    pub fn number_literal(&mut self, value: f64) -> TypeId {
        self.push(TypeData::Literal(RawLiteral::Number(value)), None)
    }

    /// A bigint literal from its sign and base-10 digits.
    pub fn bigint_literal(&mut self, negative: bool, base10: impl Into<String>) -> TypeId {
        let raw = RawLiteral::BigInt {
            negative,
            base10: base10.into(),
        };
        self.push(TypeData::Literal(raw), None)
    }

    pub fn boolean_literal(&mut self, value: bool) -> TypeId {
        self.push(TypeData::BooleanLiteral(value), None)
    }

    // ========== Structural types ==========

    /// An anonymous object literal type.
    pub fn object(&mut self, object: ObjectType) -> TypeId {
        self.push(TypeData::Object(object), Some(ANONYMOUS))
    }

    /// A declared interface.
    pub fn interface(&mut self, name: &str, object: ObjectType) -> TypeId {
        self.push(TypeData::Object(object), Some(name))
    }

    /// A function type literal with one call signature.
    pub fn function(&mut self, parameters: Vec<TypeId>, returns: TypeId) -> TypeId {
        self.object(ObjectType::new().call_signature(parameters, returns))
    }

    /// A tuple; each slot is `(type, optional)`.
    pub fn tuple(&mut self, elements: &[(TypeId, bool)]) -> TypeId {
        let elements = elements
            .iter()
            .map(|&(ty, optional)| TupleElement { ty, optional })
            .collect();
        self.push(TypeData::Tuple(elements), None)
    }

    pub fn union(&mut self, members: &[TypeId]) -> TypeId {
        self.push(TypeData::Union(members.to_vec()), None)
    }

    pub fn intersection(&mut self, members: &[TypeId]) -> TypeId {
        self.push(TypeData::Intersection(members.to_vec()), None)
    }

    // ========== Built-in references ==========

    /// A reference to a named generic, e.g. `reference("Array", &[t])`.
    pub fn reference(&mut self, symbol: &str, arguments: &[TypeId]) -> TypeId {
        self.push(TypeData::Reference(arguments.to_vec()), Some(symbol))
    }

    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.reference("Array", &[element])
    }

    pub fn set(&mut self, element: TypeId) -> TypeId {
        self.reference("Set", &[element])
    }

    pub fn map(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.reference("Map", &[key, value])
    }

    pub fn date(&mut self) -> TypeId {
        self.reference("Date", &[])
    }

    pub fn regexp(&mut self) -> TypeId {
        self.reference("RegExp", &[])
    }

    /// `Record<key, value>`: a mapped object type written through the `Record` alias.
    pub fn record(&mut self, key: TypeId, value: TypeId) -> TypeId {
        let body = self.object(ObjectType::new().string_index(value));
        self.alias("Record", &[key, value], body)
    }

    // ========== Aliases and forward declarations ==========

    /// A copy of `body` written through `type name<arguments> = ...`.
    pub fn alias(&mut self, name: &str, arguments: &[TypeId], body: TypeId) -> TypeId {
        let mut entry = self.entry(body).clone();
        entry.alias = Some((name.to_string(), arguments.to_vec()));
        let id = TypeId(self.types.len() as u32);
        self.types.push(entry);
        id
    }

    /// A type alias whose body is supplied later with [`Self::define`].
    pub fn declare_alias(&mut self, name: &str, arguments: &[TypeId]) -> TypeId {
        let id = self.push(TypeData::Declared, None);
        self.types[id.index()].alias = Some((name.to_string(), arguments.to_vec()));
        id
    }

    /// An interface whose members are supplied later with [`Self::define`].
    pub fn declare_interface(&mut self, name: &str) -> TypeId {
        self.push(TypeData::Declared, Some(name))
    }

    /// Give a declared type the structure of `body`.
    ///
    /// An alias takes over `body`'s symbol; an interface keeps its own name.
    pub fn define(&mut self, declared: TypeId, body: TypeId) {
        let source = self.entry(body).clone();
        let target = &mut self.types[declared.index()];
        target.data = source.data;
        if target.alias.is_some() {
            target.symbol = source.symbol;
        }
    }

    fn render_list(&self, ids: &[TypeId], separator: &str) -> String {
        ids.iter()
            .map(|&id| self.render(id))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn render(&self, id: TypeId) -> String {
        let entry = self.entry(id);
        if let Some((name, arguments)) = &entry.alias {
            if arguments.is_empty() {
                return name.clone();
            }
            return format!("{name}<{}>", self.render_list(arguments, ", "));
        }

        // Named declarations print by name, so self-referencing bodies terminate.
        if let Some(name) = entry.symbol.as_deref()
            && name != ANONYMOUS
            && !matches!(entry.data, TypeData::Reference(_))
        {
            return name.to_string();
        }

        match &entry.data {
            TypeData::Declared => "unknown".to_string(),
            TypeData::Intrinsic(flag) => intrinsic_name(*flag).to_string(),
            TypeData::Literal(RawLiteral::String(s)) => {
                serialize_primitive(&Literal::String(s.clone()))
            }
            TypeData::Literal(RawLiteral::Number(n)) => serialize_primitive(&Literal::Number(*n)),
            TypeData::Literal(RawLiteral::BigInt { negative, base10 }) => {
                match BigIntLiteral::from_parts(*negative, base10) {
                    Some(b) => serialize_primitive(&Literal::BigInt(b)),
                    None => format!("{base10}n"),
                }
            }
            TypeData::BooleanLiteral(value) => value.to_string(),
            TypeData::Object(object) => self.render_object(object),
            TypeData::Tuple(elements) => {
                let slots: Vec<String> = elements
                    .iter()
                    .map(|e| {
                        let marker = if e.optional { "?" } else { "" };
                        format!("{}{marker}", self.render(e.ty))
                    })
                    .collect();
                format!("[{}]", slots.join(", "))
            }
            TypeData::Reference(arguments) => {
                let name = entry.symbol.as_deref().unwrap_or("unknown");
                match (name, arguments.as_slice()) {
                    ("Array", [element]) => format!("{}[]", self.render(*element)),
                    (_, []) => name.to_string(),
                    (_, arguments) => format!("{name}<{}>", self.render_list(arguments, ", ")),
                }
            }
            TypeData::Union(members) => self.render_list(members, " | "),
            TypeData::Intersection(members) => self.render_list(members, " & "),
        }
    }

    fn render_object(&self, object: &ObjectType) -> String {
        let mut members = Vec::new();
        if let Some(index) = object.string_index {
            members.push(format!("[key: string]: {};", self.render(index)));
        }
        if let Some(index) = object.number_index {
            members.push(format!("[key: number]: {};", self.render(index)));
        }
        for signature in &object.signatures {
            members.push(format!("{};", self.render_signature(signature, ":")));
        }
        for property in &object.properties {
            let marker = if property.optional { "?" } else { "" };
            members.push(format!(
                "{}{marker}: {};",
                property.name,
                self.render(property.ty)
            ));
        }

        if let ([], [signature]) = (object.properties.as_slice(), object.signatures.as_slice()) {
            if object.string_index.is_none() && object.number_index.is_none() {
                return self.render_signature(signature, " =>");
            }
        }
        if members.is_empty() {
            return "{}".to_string();
        }
        format!("{{ {} }}", members.join(" "))
    }

    fn render_signature(&self, signature: &Signature<TypeId>, arrow: &str) -> String {
        let parameters: Vec<String> = signature
            .parameters
            .iter()
            .enumerate()
            .map(|(i, &p)| format!("args_{i}: {}", self.render(p)))
            .collect();
        format!(
            "({}){arrow} {}",
            parameters.join(", "),
            self.render(signature.returns)
        )
    }
}

fn intrinsic_name(flag: TypeFlag) -> &'static str {
    match flag {
        TypeFlag::String => "string",
        TypeFlag::Number => "number",
        TypeFlag::Boolean => "boolean",
        TypeFlag::Null => "null",
        TypeFlag::Undefined => "undefined",
        TypeFlag::Unknown => "unknown",
        TypeFlag::Void => "void",
        TypeFlag::Any => "any",
        TypeFlag::Never => "never",
        TypeFlag::BigInt => "bigint",
        TypeFlag::BooleanLiteral => "boolean",
    }
}

impl TypeIntrospector for TypeStore {
    type Type = TypeId;

    fn has_flag(&self, ty: &TypeId, flag: TypeFlag) -> bool {
        match &self.entry(*ty).data {
            TypeData::Intrinsic(f) => *f == flag,
            TypeData::BooleanLiteral(_) => flag == TypeFlag::BooleanLiteral,
            _ => false,
        }
    }

    fn literal_value(&self, ty: &TypeId) -> Option<RawLiteral> {
        match &self.entry(*ty).data {
            TypeData::Literal(raw) => Some(raw.clone()),
            _ => None,
        }
    }

    fn symbol_name(&self, ty: &TypeId) -> Option<String> {
        self.entry(*ty).symbol.clone()
    }

    fn alias_name(&self, ty: &TypeId) -> Option<String> {
        self.entry(*ty).alias.as_ref().map(|(name, _)| name.clone())
    }

    fn alias_type_arguments(&self, ty: &TypeId) -> Vec<TypeId> {
        self.entry(*ty)
            .alias
            .as_ref()
            .map(|(_, arguments)| arguments.clone())
            .unwrap_or_default()
    }

    fn type_arguments(&self, ty: &TypeId) -> Vec<TypeId> {
        match &self.entry(*ty).data {
            TypeData::Reference(arguments) => arguments.clone(),
            _ => Vec::new(),
        }
    }

    fn is_object(&self, ty: &TypeId) -> bool {
        matches!(
            self.entry(*ty).data,
            TypeData::Object(_) | TypeData::Tuple(_) | TypeData::Reference(_)
        )
    }

    fn tuple_elements(&self, ty: &TypeId) -> Option<Vec<TupleElement<TypeId>>> {
        match &self.entry(*ty).data {
            TypeData::Tuple(elements) => Some(elements.clone()),
            _ => None,
        }
    }

    fn properties(&self, ty: &TypeId) -> Vec<Property<TypeId>> {
        match &self.entry(*ty).data {
            TypeData::Object(object) => object.properties.clone(),
            _ => Vec::new(),
        }
    }

    fn string_index_type(&self, ty: &TypeId) -> Option<TypeId> {
        match &self.entry(*ty).data {
            TypeData::Object(object) => object.string_index,
            _ => None,
        }
    }

    fn number_index_type(&self, ty: &TypeId) -> Option<TypeId> {
        match &self.entry(*ty).data {
            TypeData::Object(object) => object.number_index,
            _ => None,
        }
    }

    fn call_signatures(&self, ty: &TypeId) -> Vec<Signature<TypeId>> {
        match &self.entry(*ty).data {
            TypeData::Object(object) => object.signatures.clone(),
            _ => Vec::new(),
        }
    }

    fn union_members(&self, ty: &TypeId) -> Option<Vec<TypeId>> {
        match &self.entry(*ty).data {
            TypeData::Union(members) => Some(members.clone()),
            _ => None,
        }
    }

    fn intersection_members(&self, ty: &TypeId) -> Option<Vec<TypeId>> {
        match &self.entry(*ty).data {
            TypeData::Intersection(members) => Some(members.clone()),
            _ => None,
        }
    }

    fn type_to_string(&self, ty: &TypeId) -> String {
        self.render(*ty)
    }
}
