use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Insertion-ordered record of named option values.
pub type OptionRecord = IndexMap<String, OptionValue>;

/// Tagged option value used for options bags, dataset fields and theme defaults.
///
/// The tag is decided once when data enters the crate (see the
/// `serde_json::Value` conversions), so merge code never has to inspect
/// arbitrary values at runtime.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum OptionValue {
    /// Explicitly absent. Skipped by merges and never serialized.
    #[default]
    Unset,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Ordered sequence. Replaced wholesale by merges, never merged element-wise.
    Sequence(Vec<OptionValue>),
    Record(OptionRecord),
}

impl OptionValue {
    #[must_use]
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    #[must_use]
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Truthiness as chart hosts evaluate style fields: unset, null, `false`,
    /// zero, NaN and the empty string are all "not set".
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Unset | Self::Null => false,
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::Text(value) => !value.is_empty(),
            Self::Sequence(_) | Self::Record(_) => true,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[OptionValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&OptionRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Follows a dotted path through nested records, e.g. `"plugins.legend.position"`.
    #[must_use]
    pub fn pointer(&self, path: &str) -> Option<&OptionValue> {
        path.split('.')
            .try_fold(self, |current, segment| current.as_record()?.get(segment))
            .filter(|value| !value.is_unset())
    }

    /// Converts to JSON. Returns `None` for [`OptionValue::Unset`].
    #[must_use]
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Self::Unset => None,
            Self::Null => Some(Value::Null),
            Self::Bool(value) => Some(Value::Bool(*value)),
            // Non-finite numbers have no JSON form.
            Self::Number(value) => Some(Number::from_f64(*value).map_or(Value::Null, Value::Number)),
            Self::Text(value) => Some(Value::String(value.clone())),
            Self::Sequence(items) => Some(Value::Array(
                items
                    .iter()
                    .map(|item| item.to_json().unwrap_or(Value::Null))
                    .collect(),
            )),
            Self::Record(record) => Some(Value::Object(record_to_json(record))),
        }
    }
}

/// Looks up a dotted path starting from a record.
#[must_use]
pub fn record_pointer<'a>(record: &'a OptionRecord, path: &str) -> Option<&'a OptionValue> {
    let (head, rest) = match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };
    let value = record.get(head).filter(|value| !value.is_unset())?;
    match rest {
        Some(rest) => value.pointer(rest),
        None => Some(value),
    }
}

/// Builds a record from `(key, value)` pairs, preserving their order.
#[must_use]
pub fn option_record<K, V, I>(entries: I) -> OptionRecord
where
    K: Into<String>,
    V: Into<OptionValue>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

#[must_use]
pub fn record_to_json(record: &OptionRecord) -> Map<String, Value> {
    record
        .iter()
        .filter_map(|(key, value)| value.to_json().map(|json| (key.clone(), json)))
        .collect()
}

#[must_use]
pub fn record_from_json(map: Map<String, Value>) -> OptionRecord {
    map.into_iter()
        .map(|(key, value)| (key, OptionValue::from(value)))
        .collect()
}

/// Converts a JSON object into a record; any other JSON shape yields an empty record.
#[must_use]
pub fn record_from_json_value(value: Value) -> OptionRecord {
    match value {
        Value::Object(map) => record_from_json(map),
        _ => OptionRecord::new(),
    }
}

impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(value),
            Value::Number(value) => value.as_f64().map_or(Self::Null, Self::Number),
            Value::String(value) => Self::Text(value),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Record(record_from_json(map)),
        }
    }
}

impl From<OptionValue> for Value {
    fn from(value: OptionValue) -> Self {
        value.to_json().unwrap_or(Value::Null)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<f64>> for OptionValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Sequence(values.into_iter().map(Self::Number).collect())
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        Self::Sequence(values.into_iter().map(Self::Text).collect())
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(values: Vec<OptionValue>) -> Self {
        Self::Sequence(values)
    }
}

impl From<OptionRecord> for OptionValue {
    fn from(record: OptionRecord) -> Self {
        Self::Record(record)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Into::into)
    }
}
