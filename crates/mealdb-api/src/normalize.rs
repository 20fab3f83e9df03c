//! Numbered-field normalization
//!
//! MealDB encodes ingredient lists as a fixed set of independently optional
//! keys (`strIngredient1` .. `strIngredient20`). This module turns such a
//! record back into an ordered list.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Key prefix for ingredient fields in detail records
pub const INGREDIENT_PREFIX: &str = "strIngredient";
/// Key prefix for measure fields in detail records
pub const MEASURE_PREFIX: &str = "strMeasure";
/// Highest numbered field MealDB emits
pub const DEFAULT_MAX_NUMBERED_FIELDS: usize = 20;

/// A string-keyed mapping that numbered fields can be read from
pub trait FieldSource {
    /// Look up `key`, returning `None` when it is absent, null or not a string
    fn field(&self, key: &str) -> Option<&str>;
}

impl FieldSource for Map<String, Value> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl FieldSource for HashMap<String, Option<String>> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_deref())
    }
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Collect `prefix1`, `prefix2`, ... up to `max_index` into an ordered list.
///
/// Probing stops at the first index whose value is absent, null or blank.
/// Later keys are never consulted, so a gap truncates the list.
pub fn probe_numbered_fields<S>(fields: &S, prefix: &str, max_index: usize) -> Vec<String>
where
    S: FieldSource + ?Sized,
{
    let mut values = Vec::new();

    for index in 1..=max_index {
        let key = format!("{prefix}{index}");
        match fields.field(&key).map(str::trim) {
            Some(value) if !value.is_empty() => values.push(value.to_string()),
            _ => break,
        }
    }

    values
}
