use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::chart_kind::ChartKind;
use super::dataset::Dataset;
use super::value::OptionRecord;

/// Chart description handed to the theme applier and, once themed, to a
/// rendering host.
///
/// Serializes to the `{ "type", "data": { "labels", "datasets" }, "options" }`
/// shape chart hosts consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ChartConfigurationWire", into = "ChartConfigurationWire")]
pub struct ChartConfiguration {
    pub kind: ChartKind,
    /// Category labels. `None` means "unknown", which differs from an empty list
    /// when segment colors need a length. Numeric and boolean labels read from
    /// JSON are kept as their text form.
    pub labels: Option<Vec<String>>,
    pub datasets: Vec<Dataset>,
    pub options: Option<OptionRecord>,
}

impl ChartConfiguration {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            labels: None,
            datasets: Vec::new(),
            options: None,
        }
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn with_datasets(mut self, datasets: Vec<Dataset>) -> Self {
        self.datasets = datasets;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: OptionRecord) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn label_count(&self) -> Option<usize> {
        self.labels.as_ref().map(Vec::len)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ChartDataWire {
    #[serde(
        default,
        deserialize_with = "deserialize_labels",
        skip_serializing_if = "Option::is_none"
    )]
    labels: Option<Vec<String>>,
    #[serde(default)]
    datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChartConfigurationWire {
    #[serde(rename = "type")]
    kind: ChartKind,
    #[serde(default)]
    data: ChartDataWire,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<OptionRecord>,
}

fn deserialize_labels<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(items) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Ok(text),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "chart labels must be strings, numbers or booleans, got `{other}`"
            ))),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

impl From<ChartConfigurationWire> for ChartConfiguration {
    fn from(wire: ChartConfigurationWire) -> Self {
        Self {
            kind: wire.kind,
            labels: wire.data.labels,
            datasets: wire.data.datasets,
            options: wire.options,
        }
    }
}

impl From<ChartConfiguration> for ChartConfigurationWire {
    fn from(config: ChartConfiguration) -> Self {
        Self {
            kind: config.kind,
            data: ChartDataWire {
                labels: config.labels,
                datasets: config.datasets,
            },
            options: config.options,
        }
    }
}
