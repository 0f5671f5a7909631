//! Localized (Spanish) input names and their canonical backend counterparts.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::warn;

/// Localized field → canonical field. Total over the localized set and injective.
pub const LOCALIZED_FIELDS: [(&str, &str); 3] = [
    ("nombre", "first_name"),
    ("apellido", "last_name"),
    ("usuario", "username"),
];

static CANONICAL_BY_LOCALIZED: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LOCALIZED_FIELDS.iter().copied().collect());

/// Canonical name for `field`, or `field` itself when it is not a localized name.
pub fn canonical_field_name(field: &str) -> &str {
    CANONICAL_BY_LOCALIZED.get(field).copied().unwrap_or(field)
}

/// Renames localized keys to their canonical names. Every other key passes through
/// untouched.
///
/// If the caller supplied both a localized key and its canonical target, the explicit
/// canonical value is kept.
pub fn canonicalize_fields(fields: Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::with_capacity(fields.len());
    let mut renamed = Vec::new();

    for (key, value) in fields {
        match CANONICAL_BY_LOCALIZED.get(key.as_str()) {
            Some(canonical) => renamed.push((key, canonical.to_string(), value)),
            None => {
                out.insert(key, value);
            }
        }
    }

    for (localized, canonical, value) in renamed {
        if out.contains_key(&canonical) {
            warn!(%localized, %canonical, "both localized and canonical field supplied, keeping canonical");
            continue;
        }
        out.insert(canonical, value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn mapping_is_one_to_one() {
        let targets: HashSet<_> = LOCALIZED_FIELDS.iter().map(|(_, c)| *c).collect();
        assert_eq!(targets.len(), LOCALIZED_FIELDS.len());
        for (localized, canonical) in LOCALIZED_FIELDS {
            assert_eq!(canonical_field_name(localized), canonical);
        }
        assert_eq!(canonical_field_name("email"), "email");
    }

    #[test]
    fn renames_only_localized_keys() {
        let out = canonicalize_fields(object(json!({
            "nombre": "Ana",
            "apellido": "Diaz",
            "usuario": "adiaz",
            "email": "a@x.com",
            "password": "p"
        })));
        assert_eq!(
            Value::Object(out),
            json!({
                "first_name": "Ana",
                "last_name": "Diaz",
                "username": "adiaz",
                "email": "a@x.com",
                "password": "p"
            })
        );
    }

    #[test]
    fn explicit_canonical_value_wins() {
        let out = canonicalize_fields(object(json!({"nombre": "Ana", "first_name": "Anna"})));
        assert_eq!(Value::Object(out), json!({"first_name": "Anna"}));
    }

    #[test]
    fn canonical_input_is_unchanged() {
        let input = json!({"first_name": "Ana", "username": "adiaz", "role_id": 2});
        assert_eq!(Value::Object(canonicalize_fields(object(input.clone()))), input);
    }
}
