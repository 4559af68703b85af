pub mod chart_kind;
pub mod color;
pub mod config;
pub mod dataset;
pub mod merge;
pub mod presets;
pub mod theme;
pub mod value;

pub use chart_kind::ChartKind;
pub use color::{
    DEFAULT_BACKGROUND_OPACITY, POINT_BORDER_COLOR, RgbColor, apply_opacity, clamp_opacity,
};
pub use config::ChartConfiguration;
pub use dataset::Dataset;
pub use merge::{merge_option_sets, merge_record_into, merge_records, merge_values};
pub use theme::{DEFAULT_THEME_NAME, Theme};
pub use value::{
    OptionRecord, OptionValue, option_record, record_from_json, record_from_json_value,
    record_pointer, record_to_json,
};
