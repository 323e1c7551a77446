use crate::geometry::primitives::{Point, Rect};
use indexmap::IndexMap;
use thiserror::Error;

/// Reasons a stock sheet configuration is rejected. Fatal for a packing run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sheet dimensions must be finite and positive, got {width} x {height}")]
    InvalidSheetDimensions { width: f32, height: f32 },
    #[error("margin must be finite and non-negative, got {0}")]
    InvalidMargin(f32),
    #[error("spacing must be finite and non-negative, got {0}")]
    InvalidSpacing(f32),
    #[error("margin {margin} leaves no usable area on a {width} x {height} sheet")]
    NoUsableArea { width: f32, height: f32, margin: f32 },
}

/// A fixed-size stock sheet pieces are cut from.
/// Only constructible through [`StockSheet::try_new`], so every instance has a non-empty usable area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StockSheet {
    width: f32,
    height: f32,
    margin: f32,
    spacing: f32,
}

impl StockSheet {
    /// * `width`, `height` - physical dimensions of the sheet
    /// * `margin` - unusable border along every edge of the sheet
    /// * `spacing` - minimum gap required between two placed pieces
    pub fn try_new(width: f32, height: f32, margin: f32, spacing: f32) -> Result<Self, ConfigError> {
        let positive = |d: f32| d.is_finite() && d > 0.0;
        let non_negative = |d: f32| d.is_finite() && d >= 0.0;

        if !positive(width) || !positive(height) {
            return Err(ConfigError::InvalidSheetDimensions { width, height });
        }
        if !non_negative(margin) {
            return Err(ConfigError::InvalidMargin(margin));
        }
        if !non_negative(spacing) {
            return Err(ConfigError::InvalidSpacing(spacing));
        }
        if 2.0 * margin >= f32::min(width, height) {
            return Err(ConfigError::NoUsableArea {
                width,
                height,
                margin,
            });
        }
        Ok(StockSheet {
            width,
            height,
            margin,
            spacing,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// The region `[margin, width - margin] x [margin, height - margin]` pieces must be placed in.
    pub fn usable_rect(&self) -> Rect {
        Rect {
            x_min: self.margin,
            y_min: self.margin,
            x_max: self.width - self.margin,
            y_max: self.height - self.margin,
        }
    }

    /// Top-left corner of the usable region, the first anchor point on every sheet.
    pub fn origin(&self) -> Point {
        Point(self.margin, self.margin)
    }

    pub fn usable_area(&self) -> f32 {
        self.usable_rect().area()
    }

    /// Whether a `width x height` footprint fits within the usable region of an empty sheet.
    pub fn fits_empty(&self, width: f32, height: f32) -> bool {
        let usable = self.usable_rect();
        width <= usable.width() && height <= usable.height()
    }
}

impl Default for StockSheet {
    /// A 2440 x 1220 mm board with a 20 mm margin and 20 mm spacing between pieces.
    fn default() -> Self {
        StockSheet {
            width: 2440.0,
            height: 1220.0,
            margin: 20.0,
            spacing: 20.0,
        }
    }
}

/// Chooses the [`StockSheet`] to use per material, e.g. different board sizes for wood panels and acrylic sheets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetCatalog {
    /// Used for every material without an override
    pub default: StockSheet,
    /// Material specific stock sheets, keyed by material
    pub overrides: IndexMap<String, StockSheet>,
}

impl SheetCatalog {
    pub fn new(default: StockSheet) -> Self {
        SheetCatalog {
            default,
            overrides: IndexMap::new(),
        }
    }

    pub fn with_override(mut self, material: impl Into<String>, stock: StockSheet) -> Self {
        self.overrides.insert(material.into(), stock);
        self
    }

    pub fn stock_for(&self, material: &str) -> &StockSheet {
        self.overrides.get(material).unwrap_or(&self.default)
    }
}
