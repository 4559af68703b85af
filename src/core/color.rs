/// Fill opacity used when a theme does not set `backgroundOpacity`.
pub const DEFAULT_BACKGROUND_OPACITY: f64 = 0.45;

/// Stroke applied to line/radar point markers when the caller sets none.
pub const POINT_BORDER_COLOR: &str = "#ffffff";

/// 8-bit RGB color parsed from a `#RRGGBB` triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#RRGGBB` (case-insensitive). Any other shape yields `None`.
    #[must_use]
    pub fn parse_hex_triplet(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats as `rgba(r, g, b, a)` with `alpha` clamped into `[0, 1]`.
    #[must_use]
    pub fn to_rgba_string(self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.red,
            self.green,
            self.blue,
            clamp_opacity(alpha)
        )
    }
}

/// Clamps into `[0, 1]`; NaN and negative zero map to `0`.
#[must_use]
pub fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() || opacity <= 0.0 {
        return 0.0;
    }
    opacity.min(1.0)
}

/// Converts a `#RRGGBB` color into a translucent `rgba(...)` string.
///
/// Named colors, `rgb()/rgba()/hsl()` strings and short hex forms are returned
/// unchanged.
#[must_use]
pub fn apply_opacity(color: &str, opacity: f64) -> String {
    match RgbColor::parse_hex_triplet(color) {
        Some(rgb) => rgb.to_rgba_string(opacity),
        None => color.to_owned(),
    }
}
