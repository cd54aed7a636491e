use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry::primitives::{Edge, Point, Rect};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Print the identity of each component at its center
    #[serde(default = "default_true")]
    pub labels: bool,
    ///Draw dashed lines for every line-of-sight constraint
    #[serde(default = "default_true")]
    pub sight_lines: bool,
    ///Mark the center of mass and the board center
    #[serde(default = "default_true")]
    pub center_of_mass: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            labels: true,
            sight_lines: true,
            center_of_mass: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f64,
    pub board_fill: Color,
    /// Fill colors of the components, cycled by component id
    pub component_fills: [Color; 6],
    pub component_opacity: f64,
    pub label_color: Color,
    pub keepout_fill: Color,
    pub keepout_opacity: f64,
    pub marker_color: Color,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::PRIMARY
    }
}

impl SvgTheme {
    pub const PRIMARY: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        board_fill: Color(0xFF, 0xFF, 0xFF),
        component_fills: [
            Color(0xFF, 0x00, 0x00), // RED
            Color(0x80, 0x00, 0x80), // PURPLE
            Color(0x00, 0x80, 0x00), // GREEN
            Color(0x00, 0x00, 0xFF), // BLUE
            Color(0xFF, 0xA5, 0x00), // ORANGE
            Color(0x00, 0x80, 0x80), // TEAL
        ],
        component_opacity: 0.7,
        label_color: Color(0xFF, 0xFF, 0xFF),
        keepout_fill: Color(0xFF, 0x00, 0x00),
        keepout_opacity: 0.2,
        marker_color: Color(0x00, 0x00, 0x00),
    };

    pub const GRAY: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.5,
        board_fill: Color(0xD3, 0xD3, 0xD3),
        component_fills: [Color(0x7A, 0x7A, 0x7A); 6],
        component_opacity: 0.9,
        label_color: Color(0xFF, 0xFF, 0xFF),
        keepout_fill: Color(0x63, 0x63, 0x63),
        keepout_opacity: 0.3,
        marker_color: Color(0x00, 0x00, 0x00),
    };

    pub fn component_fill(&self, comp_id: usize) -> Color {
        self.component_fills[comp_id % self.component_fills.len()]
    }
}

pub fn change_brightness(color: Color, fraction: f64) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f64 * fraction) as u8;
    let g = (g as f64 * fraction) as u8;
    let b = (b as f64 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s}, expected #RRGGBB"
        );
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("invalid color: {s}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point(Point(x, y): Point, fill: Option<&str>, rad: Option<f64>) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}

pub fn edge_data(edge: Edge) -> Data {
    Data::new()
        .move_to((edge.start.0, edge.start.1))
        .line_to((edge.end.0, edge.end.1))
}

pub fn aa_rect_data(rect: Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}
