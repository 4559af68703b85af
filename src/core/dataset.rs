use serde::{Deserialize, Serialize};

use super::value::{OptionRecord, OptionValue};

pub const LABEL_FIELD: &str = "label";
pub const DATA_FIELD: &str = "data";
pub const BORDER_COLOR_FIELD: &str = "borderColor";
pub const BACKGROUND_COLOR_FIELD: &str = "backgroundColor";
pub const POINT_BACKGROUND_COLOR_FIELD: &str = "pointBackgroundColor";
pub const POINT_BORDER_COLOR_FIELD: &str = "pointBorderColor";

/// One data series plus its style fields.
///
/// Fields are stored as an ordered record so theme defaults can be layered
/// under caller overrides with the same deep merge used for options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    fields: OptionRecord,
}

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_fields(fields: OptionRecord) -> Self {
        Self { fields }
    }

    /// Dataset with `label` and numeric `data` set.
    #[must_use]
    pub fn series(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self::new().with_label(label).with_data(data)
    }

    #[must_use]
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.with_field(LABEL_FIELD, label.into())
    }

    #[must_use]
    pub fn with_data(self, data: Vec<f64>) -> Self {
        self.with_field(DATA_FIELD, data)
    }

    #[must_use]
    pub fn with_border_color(self, color: impl Into<String>) -> Self {
        self.with_field(BORDER_COLOR_FIELD, color.into())
    }

    #[must_use]
    pub fn with_background_color(self, color: impl Into<String>) -> Self {
        self.with_field(BACKGROUND_COLOR_FIELD, color.into())
    }

    /// Per-point background colors (segment charts).
    #[must_use]
    pub fn with_background_colors(self, colors: Vec<String>) -> Self {
        self.with_field(BACKGROUND_COLOR_FIELD, colors)
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.set_field(key, value);
        self
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Field value, treating [`OptionValue::Unset`] as absent.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&OptionValue> {
        self.fields.get(key).filter(|value| !value.is_unset())
    }

    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    #[must_use]
    pub fn fields(&self) -> &OptionRecord {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> OptionRecord {
        self.fields
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.field(LABEL_FIELD).and_then(OptionValue::as_str)
    }

    /// Numeric data points; non-numeric entries are skipped.
    #[must_use]
    pub fn data(&self) -> Vec<f64> {
        self.field(DATA_FIELD)
            .and_then(OptionValue::as_sequence)
            .map(|items| items.iter().filter_map(OptionValue::as_f64).collect())
            .unwrap_or_default()
    }

    /// Length of `data` when it is a sequence.
    #[must_use]
    pub fn data_len(&self) -> Option<usize> {
        self.field(DATA_FIELD)
            .and_then(OptionValue::as_sequence)
            .map(<[OptionValue]>::len)
    }

    #[must_use]
    pub fn border_color(&self) -> Option<&OptionValue> {
        self.field(BORDER_COLOR_FIELD)
    }

    #[must_use]
    pub fn background_color(&self) -> Option<&OptionValue> {
        self.field(BACKGROUND_COLOR_FIELD)
    }

    #[must_use]
    pub fn point_background_color(&self) -> Option<&OptionValue> {
        self.field(POINT_BACKGROUND_COLOR_FIELD)
    }

    #[must_use]
    pub fn point_border_color(&self) -> Option<&OptionValue> {
        self.field(POINT_BORDER_COLOR_FIELD)
    }
}

impl From<OptionRecord> for Dataset {
    fn from(fields: OptionRecord) -> Self {
        Self::from_fields(fields)
    }
}
