use crate::geometry::primitives::Rect;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use svg::node::element::Path;
use svg::node::element::path::Data;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgSheetTheme,
    ///Width of the output canvas
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f32,
    ///Height of the output canvas
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f32,
    ///Print the id and dimensions (in cm) inside every piece
    #[serde(default = "default_true")]
    pub piece_labels: bool,
    ///Outline the usable area within the margin
    #[serde(default = "default_true")]
    pub usable_area: bool,
}

fn default_canvas_width() -> f32 {
    800.0
}

fn default_canvas_height() -> f32 {
    400.0
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgSheetTheme::default(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            piece_labels: true,
            usable_area: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgSheetTheme {
    pub stroke_width: f32,
    pub font_size: f32,
    pub sheet_fill: Color,
    pub piece_fill: Color,
    pub overflow_fill: Color,
    pub text_color: Color,
    pub usable_area_stroke: Color,
}

impl Default for SvgSheetTheme {
    fn default() -> Self {
        SvgSheetTheme::BLUEPRINT
    }
}

impl SvgSheetTheme {
    pub const BLUEPRINT: SvgSheetTheme = SvgSheetTheme {
        stroke_width: 1.0,
        font_size: 10.0,
        sheet_fill: Color(0xFF, 0xFF, 0xFF),
        piece_fill: Color(0xE0, 0xE0, 0xE0),
        overflow_fill: Color(0xFF, 0x6B, 0x6B),
        text_color: Color(0x33, 0x33, 0x33),
        usable_area_stroke: Color(0x00, 0x00, 0xFF),
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> anyhow::Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        anyhow::ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s}, expected #RRGGBB"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn rect_data(rect: &Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_conversion() {
        let color = Color::try_from("#FFC879").unwrap();
        assert_eq!(color, Color(0xFF, 0xC8, 0x79));
        assert_eq!(color.to_string(), "#FFC879");
        assert!(Color::try_from("#FFC8").is_err());
        assert!(Color::try_from("zzzzzz").is_err());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: SvgDrawOptions = serde_json::from_str(r#"{"canvas_width": 1000.0}"#).unwrap();
        assert_eq!(options.canvas_width, 1000.0);
        assert_eq!(options.canvas_height, 400.0);
        assert!(options.piece_labels);
        assert_eq!(options.theme, SvgSheetTheme::BLUEPRINT);
    }
}
