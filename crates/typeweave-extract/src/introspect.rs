//! The contract an external type checker fulfills for extraction.

use std::fmt::Debug;
use std::hash::Hash;

/// Intrinsic type flags, tested with [`TypeIntrospector::has_flag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeFlag {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Unknown,
    Void,
    Any,
    Never,
    BigInt,
    /// `true` or `false` as a type.
    BooleanLiteral,
}

/// A literal type's value as the checker reports it.
#[derive(Clone, Debug, PartialEq)]
pub enum RawLiteral {
    String(String),
    Number(f64),
    /// Big integers come as a sign plus base-10 digits.
    BigInt { negative: bool, base10: String },
}

/// An own property of an object type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property<T> {
    pub name: String,
    pub ty: T,
    pub optional: bool,
}

/// One call signature. Parameter types are positional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature<T> {
    pub parameters: Vec<T>,
    pub returns: T,
}

/// A positional slot of a tuple type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TupleElement<T> {
    pub ty: T,
    pub optional: bool,
}

/// Read-only access to a type checker's type objects.
///
/// `Type` is a cheap handle whose equality is type identity: two handles are
/// equal iff the checker considers them the same type object.
pub trait TypeIntrospector {
    type Type: Clone + Eq + Hash + Debug;

    fn has_flag(&self, ty: &Self::Type, flag: TypeFlag) -> bool;

    /// Value of a string, number, or bigint literal type.
    fn literal_value(&self, ty: &Self::Type) -> Option<RawLiteral>;

    /// Name of the declared symbol (`Array`, `User`, `__type` for anonymous literals).
    fn symbol_name(&self, ty: &Self::Type) -> Option<String>;

    /// Name of the type alias this type was written through, if any.
    fn alias_name(&self, ty: &Self::Type) -> Option<String>;

    fn alias_type_arguments(&self, ty: &Self::Type) -> Vec<Self::Type>;

    /// Type arguments of a generic reference such as `Array<T>`.
    fn type_arguments(&self, ty: &Self::Type) -> Vec<Self::Type>;

    fn is_object(&self, ty: &Self::Type) -> bool;

    /// Positional slots, if the type is a tuple.
    fn tuple_elements(&self, ty: &Self::Type) -> Option<Vec<TupleElement<Self::Type>>>;

    /// Own properties in declaration order.
    fn properties(&self, ty: &Self::Type) -> Vec<Property<Self::Type>>;

    fn string_index_type(&self, ty: &Self::Type) -> Option<Self::Type>;

    fn number_index_type(&self, ty: &Self::Type) -> Option<Self::Type>;

    fn call_signatures(&self, ty: &Self::Type) -> Vec<Signature<Self::Type>>;

    fn union_members(&self, ty: &Self::Type) -> Option<Vec<Self::Type>>;

    fn intersection_members(&self, ty: &Self::Type) -> Option<Vec<Self::Type>>;

    /// Human-readable rendering, used for labels and error messages.
    fn type_to_string(&self, ty: &Self::Type) -> String;
}
