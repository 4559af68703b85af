use serde_json::json;

use crate::core::{
    ChartConfiguration, ChartKind, Dataset, OptionRecord, merge_records, record_from_json_value,
};

/// Single-series chart inputs turned into a configuration for one of the
/// common chart kinds.
///
/// Each kind gets a default dataset label; dataset overrides are layered on
/// top and always win.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SingleSeriesChart {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub dataset_overrides: Option<Dataset>,
    pub options: Option<OptionRecord>,
}

impl SingleSeriesChart {
    #[must_use]
    pub fn new<I, S>(labels: I, data: Vec<f64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            data,
            dataset_overrides: None,
            options: None,
        }
    }

    #[must_use]
    pub fn with_dataset_overrides(mut self, overrides: Dataset) -> Self {
        self.dataset_overrides = Some(overrides);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: OptionRecord) -> Self {
        self.options = Some(options);
        self
    }

    /// Doughnut chart labelled `Distribution`.
    #[must_use]
    pub fn pie(&self) -> ChartConfiguration {
        self.build(ChartKind::Doughnut, Dataset::new().with_label("Distribution"))
    }

    #[must_use]
    pub fn bar(&self) -> ChartConfiguration {
        self.build(ChartKind::Bar, Dataset::new().with_label("Values"))
    }

    /// Line chart labelled `Trend`, smoothed and filled unless overridden.
    #[must_use]
    pub fn line(&self) -> ChartConfiguration {
        let base = Dataset::new()
            .with_label("Trend")
            .with_field("tension", 0.35)
            .with_field("fill", true);
        self.build(ChartKind::Line, base)
    }

    #[must_use]
    pub fn radar(&self) -> ChartConfiguration {
        self.build(ChartKind::Radar, Dataset::new().with_label("Performance"))
    }

    fn build(&self, kind: ChartKind, base: Dataset) -> ChartConfiguration {
        let base = base.with_data(self.data.clone());
        let dataset = match &self.dataset_overrides {
            Some(overrides) => Dataset::from_fields(merge_records(
                base.fields(),
                [overrides.fields()],
            )),
            None => base,
        };

        let mut config = ChartConfiguration::new(kind)
            .with_labels(self.labels.iter().cloned())
            .with_dataset(dataset);
        config.options = self.options.clone();
        config
    }
}

/// The four single-series charts shown by the gallery tool, keyed by name.
#[must_use]
pub fn demo_charts() -> Vec<(&'static str, ChartConfiguration)> {
    const MONTHS: [&str; 7] = [
        "January", "February", "March", "April", "May", "June", "July",
    ];

    let pie = SingleSeriesChart::new(
        ["Download", "In-Store", "Mail-Order"],
        vec![300.0, 500.0, 100.0],
    )
    .with_dataset_overrides(Dataset::new().with_field("hoverOffset", 12))
    .with_options(record_from_json_value(json!({
        "cutout": "58%",
        "plugins": { "legend": { "position": "bottom" } }
    })));

    let bar = SingleSeriesChart::new(MONTHS, vec![65.0, 59.0, 80.0, 81.0, 56.0, 55.0, 40.0])
        .with_dataset_overrides(Dataset::new().with_field("borderRadius", 12))
        .with_options(record_from_json_value(json!({
            "scales": { "y": { "beginAtZero": true, "ticks": { "stepSize": 20 } } },
            "plugins": { "legend": { "display": false } }
        })));

    let line = SingleSeriesChart::new(MONTHS, vec![65.0, 59.0, 80.0, 81.0, 56.0, 55.0, 40.0])
        .with_dataset_overrides(
            Dataset::new()
                .with_label("Velocity")
                .with_field("borderDash", vec![4.0, 6.0]),
        )
        .with_options(record_from_json_value(json!({
            "plugins": { "legend": { "display": true, "position": "bottom" } }
        })));

    let radar = SingleSeriesChart::new(
        [
            "Eating", "Drinking", "Sleeping", "Designing", "Coding", "Cycling", "Running",
        ],
        vec![65.0, 59.0, 90.0, 81.0, 56.0, 55.0, 40.0],
    )
    .with_dataset_overrides(Dataset::new().with_label("Team A").with_field("pointRadius", 4))
    .with_options(record_from_json_value(json!({
        "plugins": { "legend": { "display": true, "position": "top" } }
    })));

    vec![
        ("pie", pie.pie()),
        ("bar", bar.bar()),
        ("line", line.line()),
        ("radar", radar.radar()),
    ]
}
