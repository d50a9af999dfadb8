//! Query text generation for the service's Lucene-like `q` syntax.

use crate::query::Direction;
use crate::query::Predicate;

/// Converts the accumulated filters to the `q` parameter value.
///
/// Entries emit in insertion order and join with a single space. An empty
/// slice produces an empty string, which callers treat as "no `q` parameter".
pub fn filters_to_query(filters: &[(String, Predicate)]) -> String {
    filters
        .iter()
        .map(|(field, predicate)| predicate_to_query(field, predicate))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Converts one field's predicate to query text.
///
/// Scalars emit `field:value`; group values emit quoted and joined by the
/// combinator, `field:"v1" OR field:"v2"`. An empty group emits nothing.
pub fn predicate_to_query(field: &str, predicate: &Predicate) -> String {
    match predicate {
        Predicate::Value(value) => format!("{}:{}", field, escape_scalar(value)),
        Predicate::Group { combinator, values } => {
            let parts: Vec<_> = values
                .iter()
                .map(|value| format!("{}:{}", field, quote(value)))
                .collect();
            parts.join(&format!(" {} ", combinator.as_str()))
        }
    }
}

/// Converts the ordering list to the `orderBy` parameter value.
///
/// Descending fields carry a `-` prefix; fields join with commas.
pub fn order_by_to_param(order_by: &[(String, Direction)]) -> String {
    order_by
        .iter()
        .map(|(field, direction)| {
            if direction.is_descending() {
                format!("-{}", field)
            } else {
                field.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Quotes a value for use inside a group predicate.
///
/// The value is wrapped in double quotes with embedded `"` and `\`
/// backslash-escaped, so caller input cannot break out of the term.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Renders a scalar value, quoting only when the raw form would be ambiguous.
///
/// Plain values like `vmax` or `150` pass through verbatim; anything
/// containing whitespace, a quote, a backslash, or `:` is quoted like a
/// group value.
pub fn escape_scalar(value: &str) -> String {
    let needs_quoting = value
        .chars()
        .any(|c| c.is_whitespace() || c == '"' || c == '\\' || c == ':');
    if needs_quoting { quote(value) } else { value.to_string() }
}
