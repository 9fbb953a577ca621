//! JavaScript identifier and property-key rules shared by the text emitters.

use std::borrow::Cow;

use typeweave_core::{Literal, serialize_primitive};

/// Whether `name` can be written as a bare JavaScript identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// A property name as written in an object literal or type literal.
///
/// Names that are not identifiers are quoted.
pub fn property_key(name: &str) -> Cow<'_, str> {
    if is_identifier(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(serialize_primitive(&Literal::from(name)))
    }
}
