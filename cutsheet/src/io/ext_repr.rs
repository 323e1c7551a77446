use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// External representation of a [`PieceRequest`](crate::entities::PieceRequest).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPiece {
    /// Unique identifier of the piece
    pub id: String,
    /// Material the piece is cut from
    pub material: String,
    pub width: f32,
    pub height: f32,
}

/// External representation of a [`StockSheet`](crate::entities::StockSheet).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtStockSheet {
    pub width: f32,
    pub height: f32,
    /// Unusable border along every edge
    #[serde(default = "default_margin")]
    pub margin: f32,
    /// Minimum gap between placed pieces
    #[serde(default = "default_spacing")]
    pub spacing: f32,
}

fn default_margin() -> f32 {
    20.0
}

fn default_spacing() -> f32 {
    20.0
}

impl Default for ExtStockSheet {
    fn default() -> Self {
        ExtStockSheet {
            width: 2440.0,
            height: 1220.0,
            margin: default_margin(),
            spacing: default_spacing(),
        }
    }
}

/// External representation of a [`SheetCatalog`](crate::entities::SheetCatalog).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExtSheetCatalog {
    /// Stock used for every material without an override
    #[serde(default)]
    pub default: ExtStockSheet,
    /// Material specific stock, keyed by material
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub overrides: IndexMap<String, ExtStockSheet>,
}

/// Linear unit in which component dimensions are expressed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtUnit {
    Mm,
    #[default]
    Cm,
    M,
}

impl ExtUnit {
    /// Factor to convert a length in this unit into millimetres
    pub fn to_mm(self) -> f32 {
        match self {
            ExtUnit::Mm => 1.0,
            ExtUnit::Cm => 10.0,
            ExtUnit::M => 1000.0,
        }
    }
}

/// Dimensions of a manufactured component.
/// Only the 2D profile (`length` x `height`) is relevant for nesting.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExtDimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default)]
    pub unit: ExtUnit,
}

/// A component of a product to be fabricated, as produced by upstream tooling.
/// Converted into a piece request by the [`Importer`](crate::io::import::Importer).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtComponent {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Material type, e.g. "MDF 15mm"
    pub material: String,
    pub dimensions: ExtDimensions,
}

/// A packing instance: the stock sheets plus the pieces and/or components to nest.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExtInstance {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sheets: ExtSheetCatalog,
    #[serde(default)]
    pub pieces: Vec<ExtPiece>,
    #[serde(default)]
    pub components: Vec<ExtComponent>,
}

/// External representation of a [`PlacedPiece`](crate::entities::PlacedPiece).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedPiece {
    pub id: String,
    pub x: f32,
    pub y: f32,
    /// Effective width as placed
    pub width: f32,
    /// Effective height as placed
    pub height: f32,
    pub rotated: bool,
    pub overflow: bool,
}

/// External representation of a [`Sheet`](crate::entities::Sheet).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheet {
    /// 1-based index within its material
    pub index: usize,
    /// Name under which the cutting diagram of this sheet is stored
    pub file_stem: String,
    /// Percentage of the usable area covered by pieces
    pub efficiency: f32,
    pub placed_pieces: Vec<ExtPlacedPiece>,
}

/// External representation of a [`MaterialLayout`](crate::entities::MaterialLayout).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtMaterialLayout {
    pub material: String,
    pub stock: ExtStockSheet,
    /// Percentage of the usable area of all sheets covered by pieces
    pub efficiency: f32,
    pub sheets: Vec<ExtSheet>,
}

/// External representation of a [`Diagnostic`](crate::entities::Diagnostic).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtDiagnostic {
    pub piece_id: String,
    pub reason: String,
    pub message: String,
}

/// External representation of a [`PackingResult`](crate::entities::PackingResult).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    pub n_sheets: usize,
    pub n_placed: usize,
    pub layouts: Vec<ExtMaterialLayout>,
    #[serde(default)]
    pub diagnostics: Vec<ExtDiagnostic>,
}
