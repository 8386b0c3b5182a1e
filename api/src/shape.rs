//! Lenient decoding for loosely-typed API payloads.
//!
//! The CMS behind the API has no stable schema: fields go missing, come back
//! as `null`, or change type between deployments. The field helpers in [`field`]
//! are meant for `#[serde(default, deserialize_with = "...")]` and never fail;
//! the body helpers turn a whole response [`Value`] into a collection or a
//! single record without failing either.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode an array body, skipping elements that don't fit `T`.
/// Anything other than an array yields an empty list.
pub fn list<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Decode an object body. An array contributes its first decodable element,
/// anything else falls back to `T::default()`.
pub fn one<T: DeserializeOwned + Default>(value: Value) -> T {
    match value {
        Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        Value::Array(_) => list::<T>(value).into_iter().next().unwrap_or_default(),
        _ => T::default(),
    }
}

/// Accept either a single object or a list of them.
pub fn one_or_many<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Object(_) => serde_json::from_value(value).ok().into_iter().collect(),
        other => list(other),
    }
}

pub mod field {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Strings pass through, numbers and booleans are stringified, the rest is `None`.
    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    /// Non-negative integers, also accepted when quoted.
    pub fn id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => Some(b),
            _ => None,
        })
    }

    /// Arrays of records; undecodable elements are dropped, non-arrays are empty.
    pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(super::list(Value::deserialize(deserializer)?))
    }

    /// Arrays of records, or `None` when the field isn't an array.
    ///
    /// Distinguishes "absent" from "present but empty" where an alias decides
    /// which of two fields wins.
    pub fn opt_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(deserializer)? {
            value @ Value::Array(_) => Some(super::list(value)),
            _ => None,
        })
    }

    /// A list of strings, or a single string promoted to a one-element list.
    pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
            Value::String(s) if !s.is_empty() => vec![s],
            _ => Vec::new(),
        })
    }

    /// A nested record; anything that isn't an object decodes to `None`.
    pub fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(deserializer)? {
            value @ Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default, deserialize_with = "field::string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "field::id")]
        id: Option<u64>,
        #[serde(default, deserialize_with = "field::strings")]
        tags: Vec<String>,
    }

    #[test]
    fn wrong_field_types_become_defaults() {
        let sample: Sample = serde_json::from_value(json!({
            "name": ["not", "a", "string"],
            "id": {"nested": true},
            "tags": 42
        }))
        .unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn numbers_and_quoted_ids_are_accepted() {
        let sample: Sample = serde_json::from_value(json!({
            "name": 12,
            "id": "7",
            "tags": "solo"
        }))
        .unwrap();
        assert_eq!(sample.name.as_deref(), Some("12"));
        assert_eq!(sample.id, Some(7));
        assert_eq!(sample.tags, vec!["solo".to_string()]);
    }

    #[test]
    fn null_fields_are_absent() {
        let sample: Sample = serde_json::from_value(json!({"name": null, "id": null})).unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn list_skips_garbage_and_rejects_non_arrays() {
        let items: Vec<Sample> = list(json!([{"name": "a"}, "junk", 3, {"name": "b"}]));
        assert_eq!(items.len(), 2);
        assert!(list::<Sample>(json!({"name": "a"})).is_empty());
        assert!(list::<Sample>(json!("nope")).is_empty());
    }

    #[test]
    fn one_accepts_object_or_first_array_element() {
        let single: Sample = one(json!({"name": "x"}));
        assert_eq!(single.name.as_deref(), Some("x"));
        let first: Sample = one(json!([{"name": "y"}, {"name": "z"}]));
        assert_eq!(first.name.as_deref(), Some("y"));
        let fallback: Sample = one(json!(null));
        assert_eq!(fallback, Sample::default());
    }

    #[test]
    fn one_or_many_wraps_single_objects() {
        assert_eq!(one_or_many::<Sample>(json!({"name": "x"})).len(), 1);
        assert_eq!(one_or_many::<Sample>(json!([{}, {}])).len(), 2);
        assert!(one_or_many::<Sample>(json!(5)).is_empty());
    }
}
