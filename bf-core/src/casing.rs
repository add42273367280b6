//! Case conversion for file names and generated identifiers.
//!
//! `to_snake_case` and `to_pascal_case` do not share a tokenizer: snake case
//! splits on lowercase/digit to uppercase transitions and on any non
//! alphanumeric run, while Pascal case only splits on `_`, `-` and whitespace.

/// Convert a string to snake_case (e.g., "CounterPage" -> "counter_page").
///
/// Only ASCII letters and digits survive. Any other run of characters becomes
/// a single underscore, and the result never starts or ends with one.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut boundary = false;
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            let camel_hump = c.is_ascii_uppercase()
                && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
            if (boundary || camel_hump) && !result.is_empty() {
                result.push('_');
            }
            boundary = false;
            result.push(c.to_ascii_lowercase());
        } else {
            boundary = true;
        }
        prev = Some(c);
    }

    result
}

/// Convert a string to PascalCase (e.g., "counter_page" -> "CounterPage").
///
/// Words are separated by runs of `_`, `-` or whitespace only. Each word keeps
/// its first character uppercased and the rest lowercased, so an unbroken
/// "mixedCase" run becomes "Mixedcase".
pub fn to_pascal_case(s: &str) -> String {
    s.split(is_delimiter)
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c
                    .to_uppercase()
                    .chain(chars.as_str().to_lowercase().chars())
                    .collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "counter_page" -> "counterPage").
///
/// Only the first character of the PascalCase form changes. When its
/// lowercase form is not a single character (as for "İ") it is kept as is.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => pascal,
        Some(c) => std::iter::once(lower_single(c)).chain(chars).collect(),
    }
}

fn lower_single(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn is_delimiter(c: char) -> bool {
    c == '_' || c == '-' || c.is_ascii_whitespace()
}
