// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::{Error, Result};
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// The type codes used by Spanner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum TypeCode {
    #[default]
    TypeCodeUnspecified,
    Bool,
    Int64,
    Float64,
    Float32,
    Timestamp,
    Date,
    String,
    Bytes,
    Array,
    Struct,
    Numeric,
    Json,
    Proto,
    Enum,
    Interval,
    Uuid,
    /// A type code unknown to this client.
    #[serde(other)]
    Unknown,
}

/// Refines a [TypeCode], mostly for PostgreSQL-dialect databases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum TypeAnnotation {
    #[default]
    TypeAnnotationCodeUnspecified,
    PgNumeric,
    PgJsonb,
    PgOid,
    #[serde(other)]
    Unknown,
}

impl TypeAnnotation {
    fn is_unspecified(&self) -> bool {
        *self == Self::TypeAnnotationCodeUnspecified
    }
}

/// The type of a column or query parameter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Type {
    pub code: TypeCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_element_type: Option<Box<Type>>,
    #[serde(skip_serializing_if = "TypeAnnotation::is_unspecified")]
    pub type_annotation: TypeAnnotation,
}

impl Type {
    pub fn new(code: TypeCode) -> Self {
        Self {
            code,
            ..Default::default()
        }
    }

    pub fn bool() -> Self {
        Self::new(TypeCode::Bool)
    }
    pub fn int64() -> Self {
        Self::new(TypeCode::Int64)
    }
    pub fn float64() -> Self {
        Self::new(TypeCode::Float64)
    }
    pub fn numeric() -> Self {
        Self::new(TypeCode::Numeric)
    }
    pub fn string() -> Self {
        Self::new(TypeCode::String)
    }
    pub fn bytes() -> Self {
        Self::new(TypeCode::Bytes)
    }
    pub fn json() -> Self {
        Self::new(TypeCode::Json)
    }
    pub fn date() -> Self {
        Self::new(TypeCode::Date)
    }
    pub fn timestamp() -> Self {
        Self::new(TypeCode::Timestamp)
    }

    /// The `NUMERIC` type in PostgreSQL-dialect databases.
    pub fn pg_numeric() -> Self {
        Self::numeric().with_annotation(TypeAnnotation::PgNumeric)
    }

    /// The `JSONB` type in PostgreSQL-dialect databases.
    pub fn pg_jsonb() -> Self {
        Self::json().with_annotation(TypeAnnotation::PgJsonb)
    }

    pub fn array(element: Type) -> Self {
        Self {
            code: TypeCode::Array,
            array_element_type: Some(Box::new(element)),
            ..Default::default()
        }
    }

    fn with_annotation(mut self, annotation: TypeAnnotation) -> Self {
        self.type_annotation = annotation;
        self
    }
}

/// A typed value, used for query parameters, mutations and query results.
///
/// The wire format follows the Spanner REST API: `INT64` and `NUMERIC`
/// values are JSON strings, `BYTES` values are base64-encoded strings, and
/// `FLOAT64` values are JSON numbers except for `NaN` and the infinities,
/// which are sent as strings.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Value {
    /// A `NULL` value of the given type.
    Null(Type),
    Bool(bool),
    Int64(i64),
    Float64(f64),
    /// A `NUMERIC` value, in its decimal text representation.
    Numeric(String),
    /// A PostgreSQL `NUMERIC` value, in its decimal text representation.
    PgNumeric(String),
    String(String),
    Bytes(bytes::Bytes),
    /// A `JSON` value, in its text representation.
    Json(String),
    /// A PostgreSQL `JSONB` value, in its text representation.
    PgJsonb(String),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    /// An array with the given element type.
    Array(Type, Vec<Value>),
}

impl Value {
    /// Creates a `JSON` value.
    pub fn json(value: &serde_json::Value) -> Self {
        Self::Json(value.to_string())
    }

    /// Creates a PostgreSQL `JSONB` value.
    pub fn pg_jsonb(value: &serde_json::Value) -> Self {
        Self::PgJsonb(value.to_string())
    }

    /// Creates a `NUMERIC` value from its decimal representation.
    pub fn numeric<T: Into<String>>(v: T) -> Self {
        Self::Numeric(v.into())
    }

    /// Creates a PostgreSQL `NUMERIC` value from its decimal representation.
    pub fn pg_numeric<T: Into<String>>(v: T) -> Self {
        Self::PgNumeric(v.into())
    }

    /// Creates an array value.
    pub fn array<T, V>(element_type: Type, values: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(element_type, values.into_iter().map(Into::into).collect())
    }

    /// The placeholder for a commit timestamp.
    ///
    /// Only valid in mutations, for `TIMESTAMP` columns with the
    /// `allow_commit_timestamp` option.
    pub fn commit_timestamp() -> Self {
        Self::String("spanner.commit_timestamp()".to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null(_))
    }

    /// The Spanner type of this value.
    pub fn value_type(&self) -> Type {
        match self {
            Self::Null(t) => t.clone(),
            Self::Bool(_) => Type::bool(),
            Self::Int64(_) => Type::int64(),
            Self::Float64(_) => Type::float64(),
            Self::Numeric(_) => Type::numeric(),
            Self::PgNumeric(_) => Type::pg_numeric(),
            Self::String(_) => Type::string(),
            Self::Bytes(_) => Type::bytes(),
            Self::Json(_) => Type::json(),
            Self::PgJsonb(_) => Type::pg_jsonb(),
            Self::Date(_) => Type::date(),
            Self::Timestamp(_) => Type::timestamp(),
            Self::Array(t, _) => Type::array(t.clone()),
        }
    }

    /// Decodes a value received from the service.
    pub(crate) fn decode(value_type: &Type, value: serde_json::Value) -> Result<Self> {
        use serde_json::Value as Json;
        let annotation = value_type.type_annotation;
        let value = match (value_type.code, value) {
            (_, Json::Null) => Self::Null(value_type.clone()),
            (TypeCode::Bool, Json::Bool(b)) => Self::Bool(b),
            (TypeCode::Int64, Json::String(s)) => Self::Int64(
                s.parse()
                    .map_err(|e| Error::decode(format!("invalid INT64 {s:?}: {e}")))?,
            ),
            (TypeCode::Float64 | TypeCode::Float32, v) => Self::Float64(decode_float(v)?),
            (TypeCode::Numeric, Json::String(s)) if annotation == TypeAnnotation::PgNumeric => {
                Self::PgNumeric(s)
            }
            (TypeCode::Numeric, Json::String(s)) => Self::Numeric(s),
            (TypeCode::String, Json::String(s)) => Self::String(s),
            (TypeCode::Bytes, Json::String(s)) => Self::Bytes(
                BASE64_STANDARD
                    .decode(&s)
                    .map_err(|e| Error::decode(format!("invalid BYTES {s:?}: {e}")))?
                    .into(),
            ),
            (TypeCode::Json, Json::String(s)) if annotation == TypeAnnotation::PgJsonb => {
                Self::PgJsonb(s)
            }
            (TypeCode::Json, Json::String(s)) => Self::Json(s),
            (TypeCode::Date, Json::String(s)) => Self::Date(
                NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|e| Error::decode(format!("invalid DATE {s:?}: {e}")))?,
            ),
            (TypeCode::Timestamp, Json::String(s)) => Self::Timestamp(
                DateTime::parse_from_rfc3339(&s)
                    .map_err(|e| Error::decode(format!("invalid TIMESTAMP {s:?}: {e}")))?
                    .with_timezone(&Utc),
            ),
            (TypeCode::Array, Json::Array(values)) => {
                let element_type = value_type
                    .array_element_type
                    .as_deref()
                    .cloned()
                    .ok_or_else(|| Error::decode("ARRAY type without an element type"))?;
                let values = values
                    .into_iter()
                    .map(|v| Self::decode(&element_type, v))
                    .collect::<Result<Vec<_>>>()?;
                Self::Array(element_type, values)
            }
            (code, v) => {
                return Err(Error::decode(format!(
                    "unexpected value {v} for type code {code:?}"
                )));
            }
        };
        Ok(value)
    }
}

fn decode_float(value: serde_json::Value) -> Result<f64> {
    match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| Error::decode(format!("invalid FLOAT64 {n}"))),
        serde_json::Value::String(s) => match s.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            _ => Err(Error::decode(format!("invalid FLOAT64 {s:?}"))),
        },
        v => Err(Error::decode(format!("invalid FLOAT64 {v}"))),
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Null(_) => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int64(i) => serializer.serialize_str(&i.to_string()),
            Self::Float64(f) if f.is_nan() => serializer.serialize_str("NaN"),
            Self::Float64(f) if f.is_infinite() && *f > 0.0 => serializer.serialize_str("Infinity"),
            Self::Float64(f) if f.is_infinite() => serializer.serialize_str("-Infinity"),
            Self::Float64(f) => serializer.serialize_f64(*f),
            Self::Numeric(s)
            | Self::PgNumeric(s)
            | Self::String(s)
            | Self::Json(s)
            | Self::PgJsonb(s) => serializer.serialize_str(s),
            Self::Bytes(b) => serializer.serialize_str(&BASE64_STANDARD.encode(b)),
            Self::Date(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            Self::Timestamp(t) => {
                serializer.serialize_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Self::Array(_, values) => serializer.collect_seq(values),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null(_) => write!(f, "NULL"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int64(i) => write!(f, "{i}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Numeric(s)
            | Self::PgNumeric(s)
            | Self::String(s)
            | Self::Json(s)
            | Self::PgJsonb(s) => write!(f, "{s}"),
            Self::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Self::Date(d) => write!(f, "{d}"),
            Self::Timestamp(t) => write!(f, "{}", t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::Array(_, values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int64(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bytes::Bytes> for Value {
    fn from(value: bytes::Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// Converts a [Value] into a Rust type.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self>;
}

fn mismatch<T>(want: &str, got: &Value) -> Result<T> {
    Err(Error::decode(format!(
        "cannot convert {:?} value to {want}",
        got.value_type().code
    )))
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(*b),
            v => mismatch("bool", v),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Int64(i) => Ok(*i),
            v => mismatch("i64", v),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Float64(f) => Ok(*f),
            v => mismatch("f64", v),
        }
    }
}

/// `STRING` values, and the text representation of `NUMERIC` and `JSON`
/// values.
impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s)
            | Value::Numeric(s)
            | Value::PgNumeric(s)
            | Value::Json(s)
            | Value::PgJsonb(s) => Ok(s.clone()),
            v => mismatch("String", v),
        }
    }
}

impl FromValue for bytes::Bytes {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Bytes(b) => Ok(b.clone()),
            v => mismatch("Bytes", v),
        }
    }
}

impl FromValue for NaiveDate {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Date(d) => Ok(*d),
            v => mismatch("NaiveDate", v),
        }
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Timestamp(t) => Ok(*t),
            v => mismatch("DateTime<Utc>", v),
        }
    }
}

impl FromValue for serde_json::Value {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Json(s) | Value::PgJsonb(s) => Ok(serde_json::from_str(s)?),
            v => mismatch("serde_json::Value", v),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null(_) => Ok(None),
            v => T::from_value(v).map(Some),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(_, values) => values.iter().map(T::from_value).collect(),
            v => mismatch("Vec", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(Value::Null(Type::string()), json!(null))]
    #[test_case(Value::Bool(true), json!(true))]
    #[test_case(Value::Int64(-42), json!("-42"))]
    #[test_case(Value::Float64(2.5), json!(2.5))]
    #[test_case(Value::Float64(f64::NAN), json!("NaN"))]
    #[test_case(Value::Float64(f64::INFINITY), json!("Infinity"))]
    #[test_case(Value::Float64(f64::NEG_INFINITY), json!("-Infinity"))]
    #[test_case(Value::numeric("3.50"), json!("3.50"))]
    #[test_case(Value::Bytes(bytes::Bytes::from_static(b"hello")), json!("aGVsbG8="))]
    #[test_case(Value::json(&json!({"rating": 9})), json!(r#"{"rating":9}"#))]
    #[test_case(Value::Date(NaiveDate::from_ymd_opt(2022, 3, 11).unwrap()), json!("2022-03-11"))]
    #[test_case(Value::array(Type::int64(), [1, 2]), json!(["1", "2"]))]
    fn serialize(input: Value, want: serde_json::Value) -> anyhow::Result<()> {
        let got = serde_json::to_value(&input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn serialize_timestamp() -> anyhow::Result<()> {
        let ts = DateTime::parse_from_rfc3339("2022-03-11T00:00:00Z")?.with_timezone(&Utc);
        let got = serde_json::to_value(Value::from(ts))?;
        assert_eq!(got, json!("2022-03-11T00:00:00Z"));
        Ok(())
    }

    #[test_case(Type::int64(), json!("123"), Value::Int64(123))]
    #[test_case(Type::float64(), json!(1.5), Value::Float64(1.5))]
    #[test_case(Type::float64(), json!("-Infinity"), Value::Float64(f64::NEG_INFINITY))]
    #[test_case(Type::numeric(), json!("1.25"), Value::Numeric("1.25".into()))]
    #[test_case(Type::pg_numeric(), json!("1.25"), Value::PgNumeric("1.25".into()))]
    #[test_case(Type::pg_jsonb(), json!("{}"), Value::PgJsonb("{}".into()))]
    #[test_case(Type::bytes(), json!("aGVsbG8="), Value::Bytes(bytes::Bytes::from_static(b"hello")))]
    #[test_case(Type::string(), json!(null), Value::Null(Type::string()))]
    #[test_case(Type::array(Type::string()), json!(["a", null]), Value::Array(Type::string(), vec![Value::from("a"), Value::Null(Type::string())]))]
    fn decode(value_type: Type, input: serde_json::Value, want: Value) -> anyhow::Result<()> {
        let got = Value::decode(&value_type, input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(Type::int64(), json!("abc"))]
    #[test_case(Type::int64(), json!(123))]
    #[test_case(Type::float64(), json!("infinite"))]
    #[test_case(Type::bytes(), json!("not base64!"))]
    #[test_case(Type::date(), json!("2022-13-45"))]
    #[test_case(Type::new(TypeCode::Array), json!([]))]
    fn decode_errors(value_type: Type, input: serde_json::Value) {
        let got = Value::decode(&value_type, input);
        assert!(matches!(got, Err(Error::Decode(_))), "{got:?}");
    }

    #[test]
    fn type_serialization() -> anyhow::Result<()> {
        let got = serde_json::to_value(Type::array(Type::pg_numeric()))?;
        assert_eq!(
            got,
            json!({
                "code": "ARRAY",
                "arrayElementType": {"code": "NUMERIC", "typeAnnotation": "PG_NUMERIC"},
            })
        );
        let got = serde_json::from_value::<Type>(json!({"code": "SOMETHING_NEW"}))?;
        assert_eq!(got.code, TypeCode::Unknown);
        Ok(())
    }

    #[test]
    fn from_value() -> anyhow::Result<()> {
        assert_eq!(i64::from_value(&Value::Int64(7))?, 7);
        assert_eq!(String::from_value(&Value::pg_numeric("4"))?, "4");
        assert_eq!(Option::<String>::from_value(&Value::Null(Type::string()))?, None);
        assert_eq!(
            Vec::<i64>::from_value(&Value::array(Type::int64(), [1, 2, 3]))?,
            vec![1, 2, 3]
        );
        assert_eq!(
            serde_json::Value::from_value(&Value::json(&json!({"open": true})))?,
            json!({"open": true})
        );
        let got = i64::from_value(&Value::from("abc"));
        assert!(matches!(got, Err(Error::Decode(_))), "{got:?}");
        Ok(())
    }

    #[test]
    fn display() {
        let value = Value::array(Type::string(), ["a", "b"]);
        assert_eq!(value.to_string(), "[a, b]");
        assert_eq!(Value::Null(Type::int64()).to_string(), "NULL");
    }
}
