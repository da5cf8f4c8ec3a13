//! Field-by-field decoding of generic JSON values.
//!
//! Every entity in this crate is built from a [`serde_json::Value`] tree by
//! reading one field at a time through an [`Object`] view. The view carries
//! the path from the document root, so errors report where they happened
//! (`versions[2].diffs[0].paritySummary`) rather than just what went wrong.
//!
//! Decoding is fail-fast: the first missing required field, wrong-shaped
//! value, or invalid element anywhere in the tree aborts the whole parse.
//! There are no partial sequences and no partially built entities.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A JSON object together with the path that reached it.
#[derive(Debug, Clone, Copy)]
pub struct Object<'a> {
    map: &'a Map<String, Value>,
    path: &'a str,
}

impl<'a> Object<'a> {
    /// View `value` as an object rooted at the document top level.
    pub fn root(value: &'a Value) -> Result<Self> {
        match value.as_object() {
            Some(map) => Ok(Self { map, path: "" }),
            None => Err(Error::TypeMismatch {
                path: String::new(),
                field: "$".to_string(),
                expected: "a JSON object",
            }),
        }
    }

    pub fn path(&self) -> &str {
        self.path
    }

    fn field_path(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.path, field)
        }
    }

    fn get(&self, field: &str) -> Result<&'a Value> {
        self.map.get(field).ok_or_else(|| Error::MissingField {
            path: self.path.to_string(),
            field: field.to_string(),
        })
    }

    fn mismatch(&self, field: &str, expected: &'static str) -> Error {
        Error::TypeMismatch {
            path: self.path.to_string(),
            field: field.to_string(),
            expected,
        }
    }

    /// Build a [`Error::Validation`] for `field`, for callers that run
    /// semantic checks beyond shape (e.g. identifier validation).
    pub fn invalid(&self, field: &str, reason: impl Into<String>) -> Error {
        Error::Validation {
            path: self.path.to_string(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Read a required scalar field.
    pub fn req<T: FromValue>(&self, field: &str) -> Result<T> {
        let value = self.get(field)?;
        T::from_value(value).ok_or_else(|| self.mismatch(field, T::EXPECTED))
    }

    /// Read an optional scalar field. A missing key and an explicit `null`
    /// both yield `None`; a present value of the wrong shape is still an
    /// error.
    pub fn opt<T: FromValue>(&self, field: &str) -> Result<Option<T>> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_value(value)
                .map(Some)
                .ok_or_else(|| self.mismatch(field, T::EXPECTED)),
        }
    }

    /// Decode a required nested entity.
    pub fn req_entity<T: FromObject>(&self, field: &str) -> Result<T> {
        let value = self.get(field)?;
        self.entity_at(value, field)
    }

    /// Decode an optional nested entity (missing or `null` means `None`).
    pub fn opt_entity<T: FromObject>(&self, field: &str) -> Result<Option<T>> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.entity_at(value, field).map(Some),
        }
    }

    /// Decode a required array field into an ordered sequence of entities.
    /// Source order is preserved; any failing element fails the whole
    /// sequence. An empty array is a valid empty sequence.
    pub fn req_seq<T: FromObject>(&self, field: &str) -> Result<Vec<T>> {
        let items = self
            .get(field)?
            .as_array()
            .ok_or_else(|| self.mismatch(field, "an array"))?;

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let path = format!("{}[{}]", self.field_path(field), index);
            let map = item
                .as_object()
                .ok_or_else(|| self.mismatch(field, "an array of objects"))?;
            out.push(T::from_object(Object { map, path: &path })?);
        }
        Ok(out)
    }

    fn entity_at<T: FromObject>(&self, value: &Value, field: &str) -> Result<T> {
        let map = value
            .as_object()
            .ok_or_else(|| self.mismatch(field, "an object"))?;
        let path = self.field_path(field);
        T::from_object(Object { map, path: &path })
    }
}

/// Entities that decode from a JSON object.
pub trait FromObject: Sized {
    fn from_object(obj: Object<'_>) -> Result<Self>;
}

/// Scalars that decode from a single JSON value.
///
/// Implementations return `None` on a wrong-shaped value; [`Object`] turns
/// that into a [`Error::TypeMismatch`] carrying [`FromValue::EXPECTED`].
pub trait FromValue: Sized {
    /// Human-readable shape description used in error messages.
    const EXPECTED: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for String {
    const EXPECTED: &'static str = "a string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for u32 {
    const EXPECTED: &'static str = "a non-negative integer";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_u64().and_then(|n| u32::try_from(n).ok())
    }
}

impl FromValue for i32 {
    const EXPECTED: &'static str = "an integer";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|n| i32::try_from(n).ok())
    }
}

impl FromValue for f32 {
    const EXPECTED: &'static str = "a number";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64().map(|n| n as f32)
    }
}

impl FromValue for DateTime<Utc> {
    const EXPECTED: &'static str = "an RFC 3339 timestamp";

    fn from_value(value: &Value) -> Option<Self> {
        let raw = value.as_str()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
