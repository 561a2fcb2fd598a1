//! Serde helpers for form-shaped JSON
//!
//! Browser forms submit numbers as strings and unset selects as `""`. The
//! helpers here accept both shapes so payloads can be typed on the way in.

use serde::de::{self, DeserializeOwned, Visitor};
use serde::{Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// Deserialize an optional value that may arrive as a JSON number, a string,
/// an empty string (treated as absent) or null.
///
/// Use with `#[serde(default, deserialize_with = "lenient_option")]`.
pub fn lenient_option<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    struct LenientVisitor<T>(PhantomData<T>);

    impl<T> LenientVisitor<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        fn parse<E: de::Error>(raw: &str) -> std::result::Result<Option<T>, E> {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<T>().map(Some).map_err(E::custom)
        }
    }

    impl<'de, T> Visitor<'de> for LenientVisitor<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        type Value = Option<T>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number, a string or null")
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> std::result::Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
            Self::parse(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Self::Value, E> {
            Self::parse(&value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Self::Value, E> {
            Self::parse(&value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Self::Value, E> {
            Self::parse(&value.to_string())
        }
    }

    deserializer.deserialize_option(LenientVisitor(PhantomData))
}

/// Serialize an optional amount with whole numbers kept integral on the
/// wire (`500`, not `500.0`).
///
/// Use with `#[serde(serialize_with = "compact_number")]`.
pub fn compact_number<S>(
    value: &Option<f64>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    match *value {
        Some(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT => {
            serializer.serialize_some(&(n as i64))
        }
        Some(n) => serializer.serialize_some(&n),
        None => serializer.serialize_none(),
    }
}

/// Shallow-merge a JSON object onto a record: every top-level key of `patch`
/// replaces the record's key of the same name, everything else is kept.
pub fn merge_shallow<T>(target: &str, base: &T, patch: serde_json::Value) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let serde_json::Value::Object(updates) = patch else {
        return Err(CoreError::invalid_patch(target, "expected a JSON object"));
    };

    let mut merged = serde_json::to_value(base).map_err(|e| CoreError::invalid_patch(target, e))?;
    let Some(fields) = merged.as_object_mut() else {
        return Err(CoreError::invalid_patch(target, "record is not an object"));
    };
    for (key, value) in updates {
        fields.insert(key, value);
    }

    serde_json::from_value(merged).map_err(|e| CoreError::invalid_patch(target, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "lenient_option")]
        quantity: Option<f64>,
        #[serde(default, deserialize_with = "lenient_option")]
        id: Option<i64>,
        #[serde(default)]
        label: String,
    }

    #[test]
    fn test_lenient_accepts_numbers_and_strings() {
        let form: Form = serde_json::from_value(json!({"quantity": "12.5", "id": 7})).unwrap();
        assert_eq!(form.quantity, Some(12.5));
        assert_eq!(form.id, Some(7));

        let form: Form = serde_json::from_value(json!({"quantity": 3, "id": "42"})).unwrap();
        assert_eq!(form.quantity, Some(3.0));
        assert_eq!(form.id, Some(42));
    }

    #[test]
    fn test_lenient_treats_blank_and_null_as_absent() {
        let form: Form = serde_json::from_value(json!({"quantity": "", "id": null})).unwrap();
        assert_eq!(form.quantity, None);
        assert_eq!(form.id, None);

        let form: Form = serde_json::from_value(json!({})).unwrap();
        assert_eq!(form.quantity, None);
    }

    #[test]
    fn test_lenient_rejects_garbage() {
        let result: serde_json::Result<Form> = serde_json::from_value(json!({"quantity": "lots"}));
        assert!(result.is_err());
    }

    #[derive(Serialize)]
    struct Amount(#[serde(serialize_with = "compact_number")] Option<f64>);

    #[test]
    fn test_compact_number_keeps_whole_numbers_integral() {
        assert_eq!(serde_json::to_string(&Amount(Some(500.0))).unwrap(), "500");
        assert_eq!(serde_json::to_string(&Amount(Some(-3.0))).unwrap(), "-3");
        assert_eq!(serde_json::to_string(&Amount(Some(12.5))).unwrap(), "12.5");
        assert_eq!(serde_json::to_string(&Amount(None)).unwrap(), "null");
    }

    #[test]
    fn test_merge_shallow_replaces_only_given_keys() {
        let base = Form {
            quantity: Some(1.0),
            id: Some(9),
            label: "old".to_string(),
        };
        let merged = merge_shallow("form", &base, json!({"label": "new"})).unwrap();
        assert_eq!(
            merged,
            Form {
                quantity: Some(1.0),
                id: Some(9),
                label: "new".to_string(),
            }
        );
    }

    #[test]
    fn test_merge_shallow_rejects_non_objects() {
        let base = Form {
            quantity: None,
            id: None,
            label: String::new(),
        };
        let err = merge_shallow("form", &base, json!(["label"])).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPatch { .. }));

        let err = merge_shallow("form", &base, json!({"label": 5})).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPatch { .. }));
    }
}
