//! Dynamically typed configuration fields.
//!
//! Configurable resources (download clients, notifications, indexers) carry
//! a `fields` list whose entries are defined by the backend plugin. Each
//! value may be a string, a boolean, a number or a list; [`FieldValue`]
//! keeps whichever kind the backend sent so callers can match on it.
//!
//! # Wire rules
//!
//! - An unset value is left out of the JSON object, never sent as `null`.
//! - Integers stay integers and booleans stay booleans.
//! - `NaN` and infinite floats fail to encode instead of becoming `null`.
//! - An absent `fields` key, `null` and `[]` all decode to an empty list.
//!
//! # Example
//!
//! ```rust
//! use starr::{FieldInput, FieldValue};
//!
//! let fields = vec![
//!     FieldInput::new("host", "transmission"),
//!     FieldInput::new("port", 9091),
//!     FieldInput::new("useSsl", false),
//!     FieldInput::unset("urlBase"),
//! ];
//!
//! let json = serde_json::to_string(&fields).unwrap();
//! assert_eq!(
//!     json,
//!     r#"[{"name":"host","value":"transmission"},{"name":"port","value":9091},{"name":"useSsl","value":false},{"name":"urlBase"}]"#
//! );
//! assert_eq!(fields[1].value, Some(FieldValue::Integer(9091)));
//! ```

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One field value, tagged by the JSON kind it arrived as.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A JSON `true` or `false`.
    Bool(bool),
    /// A JSON number without a fractional part.
    Integer(i64),
    /// Any other JSON number.
    Float(f64),
    /// A JSON string.
    String(String),
    /// A JSON array, e.g. indexer category lists.
    Array(Vec<FieldValue>),
}

impl FieldValue {
    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is one.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the number as a float, for either numeric kind.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, if this is a list.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            // serde_json would write these as `null`
            Self::Float(f) if !f.is_finite() => Err(S::Error::custom(format_args!(
                "field value {f} is not a finite number"
            ))),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => items.serialize(serializer),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

/// A user-settable field sent to the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldInput {
    /// Field name as defined by the backend schema.
    pub name: String,
    /// Value to set; `None` leaves the key out of the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
}

impl FieldInput {
    /// Creates a field with a value.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a field without a value.
    pub fn unset(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// A field as described by the backend, including its display metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldOutput {
    #[serde(skip_serializing_if = "is_false")]
    pub advanced: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub order: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub help_link: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub help_text: String,
    /// Visibility hint such as `hiddenIfNotSet`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hidden: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub select_options_provider_action: String,
    /// Widget type, e.g. `textbox`, `checkbox` or `select`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub field_type: String,
    /// Privacy class, e.g. `apiKey` or `password`.
    pub privacy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub select_options: Vec<SelectOption>,
}

impl FieldOutput {
    /// Copies the name and current value into an input for re-submission.
    #[must_use]
    pub fn to_input(&self) -> FieldInput {
        FieldInput {
            name: self.name.clone(),
            value: self.value.clone(),
        }
    }
}

/// One choice of a `select` field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectOption {
    #[serde(skip_serializing_if = "is_false")]
    pub divider_after: bool,
    pub order: i64,
    pub value: i64,
    pub hint: String,
    pub name: String,
}

/// Finds a field by name.
#[must_use]
pub fn find_field<'a>(fields: &'a [FieldOutput], name: &str) -> Option<&'a FieldOutput> {
    fields.iter().find(|field| field.name == name)
}

/// Deserializes `null` as `T::default()`.
///
/// Pair it with `#[serde(default)]` so an absent key decodes the same way:
///
/// ```rust
/// use serde::Deserialize;
/// use starr::{deserialize_null_default, FieldOutput};
///
/// #[derive(Deserialize)]
/// struct Settings {
///     #[serde(default, deserialize_with = "deserialize_null_default")]
///     fields: Vec<FieldOutput>,
/// }
///
/// let a: Settings = serde_json::from_str(r#"{"fields":null}"#).unwrap();
/// let b: Settings = serde_json::from_str(r#"{}"#).unwrap();
/// assert!(a.fields.is_empty() && b.fields.is_empty());
/// ```
///
/// # Errors
///
/// Returns the deserializer's error if the value is neither `null` nor a `T`.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) const fn is_false(value: &bool) -> bool {
    !*value
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) const fn is_zero(value: &i64) -> bool {
    *value == 0
}
