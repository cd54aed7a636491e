use serde::{Deserialize, Serialize};

use pcbplace::io::svg::SvgDrawOptions;
use pcbplace::util::SearchConfig;

/// Configuration for a placement run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct PlacerConfig {
    /// Time budget and grid resolution of the search
    #[serde(default)]
    pub search: SearchConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
