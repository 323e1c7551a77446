use cutsheet::io::import::MaterialFilter;
use cutsheet::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration for the FFD packer binary
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FFDConfig {
    /// Components whose material does not match the filter are not nested.
    /// If `null`, every component is nested.
    #[serde(default = "default_material_filter")]
    pub material_filter: Option<MaterialFilter>,
    /// Write a cutting diagram for every sheet
    #[serde(default = "default_true")]
    pub write_svg: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_material_filter() -> Option<MaterialFilter> {
    Some(MaterialFilter::default())
}

fn default_true() -> bool {
    true
}

impl Default for FFDConfig {
    fn default() -> Self {
        Self {
            material_filter: default_material_filter(),
            write_svg: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: FFDConfig = serde_json::from_str(r#"{"write_svg": false}"#).unwrap();
        assert!(!config.write_svg);
        assert_eq!(config.material_filter, Some(MaterialFilter::default()));

        let unfiltered: FFDConfig = serde_json::from_str(r#"{"material_filter": null}"#).unwrap();
        assert_eq!(unfiltered.material_filter, None);
        assert_eq!(unfiltered.svg_draw_options, SvgDrawOptions::default());
    }
}
