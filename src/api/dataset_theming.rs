use crate::core::dataset::{
    BACKGROUND_COLOR_FIELD, BORDER_COLOR_FIELD, POINT_BACKGROUND_COLOR_FIELD,
    POINT_BORDER_COLOR_FIELD,
};
use crate::core::{
    ChartKind, Dataset, OptionRecord, OptionValue, POINT_BORDER_COLOR, Theme, apply_opacity,
    merge_records,
};

/// Styles the dataset at ordinal `index` of a `kind` chart with `theme`.
///
/// Theme dataset defaults sit under the caller's fields; colors are only
/// filled in where the merged dataset leaves them unset. `label_count` is the
/// configuration's label count, used to size per-segment colors when the
/// dataset's own data length is unknown.
#[must_use]
pub fn theme_dataset(
    dataset: &Dataset,
    index: usize,
    theme: &Theme,
    kind: ChartKind,
    label_count: Option<usize>,
) -> Dataset {
    let empty = OptionRecord::new();
    let layers = theme
        .dataset_defaults_for(kind)
        .into_iter()
        .chain([dataset.fields()]);
    let mut themed = Dataset::from_fields(merge_records(&empty, layers));

    let Some(base_color) = theme.palette_color(index) else {
        return themed;
    };
    let opacity = theme.effective_background_opacity();

    if !is_set(themed.border_color()) {
        let border = theme.border_color.as_deref().unwrap_or(base_color);
        themed.set_field(BORDER_COLOR_FIELD, border);
    }

    if !is_set(themed.background_color()) {
        if kind.is_segmented() {
            let segments = themed
                .data_len()
                .or(label_count)
                .unwrap_or_else(|| kind.fallback_segment_count());
            themed.set_field(
                BACKGROUND_COLOR_FIELD,
                segment_colors(&theme.palette, index, segments, opacity),
            );
        } else {
            themed.set_field(BACKGROUND_COLOR_FIELD, apply_opacity(base_color, opacity));
        }
    }

    if kind.is_line_like() && !themed.has_field(POINT_BACKGROUND_COLOR_FIELD) {
        let point_fill = themed.border_color().cloned().unwrap_or_default();
        themed.set_field(POINT_BACKGROUND_COLOR_FIELD, point_fill);
        if !themed.has_field(POINT_BORDER_COLOR_FIELD) {
            themed.set_field(POINT_BORDER_COLOR_FIELD, POINT_BORDER_COLOR);
        }
    }

    themed
}

/// Per-point colors: point `j` of dataset `dataset_index` takes
/// `palette[(j + dataset_index) % palette.len()]`.
fn segment_colors(
    palette: &[String],
    dataset_index: usize,
    segments: usize,
    opacity: f64,
) -> Vec<String> {
    (0..segments)
        .map(|point_index| {
            apply_opacity(
                &palette[(point_index + dataset_index) % palette.len()],
                opacity,
            )
        })
        .collect()
}

fn is_set(value: Option<&OptionValue>) -> bool {
    value.is_some_and(OptionValue::is_truthy)
}
