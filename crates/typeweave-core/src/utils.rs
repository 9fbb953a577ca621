/// Convert a type label to PascalCase.
///
/// Every character that cannot appear in an identifier separates words. If the
/// input is already PascalCase (starts uppercase, no separators), it is returned
/// unchanged.
///
/// # Examples
/// ```
/// use typeweave_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("user_profile"), "UserProfile");
/// assert_eq!(to_pascal_case("Box<string>"), "BoxString");
/// assert_eq!(to_pascal_case("UserProfile"), "UserProfile");  // idempotent
/// ```
pub fn to_pascal_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        !c.is_ascii_alphanumeric()
    }

    let has_separator = s.chars().any(is_separator);
    let starts_uppercase = s.chars().next().is_some_and(|c| c.is_ascii_uppercase());

    if starts_uppercase && !has_separator {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Derive an identifier usable in JavaScript and TypeScript from a type label.
///
/// Returns `None` when the label has no identifier characters at all. A leading
/// digit gets a `T` prefix.
pub fn to_identifier(label: &str) -> Option<String> {
    let name = to_pascal_case(label);
    let first = name.chars().next()?;
    if first.is_ascii_digit() {
        return Some(format!("T{name}"));
    }
    Some(name)
}
