use crate::entities::sheet::round_pct;
use crate::entities::{Diagnostic, PlacedPiece, Sheet, StockSheet};
use indexmap::IndexMap;

/// All sheets used for a single material, in the order they were opened.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialLayout {
    pub material: String,
    /// Stock the sheets of this material were cut from
    pub stock: StockSheet,
    pub sheets: Vec<Sheet>,
}

impl MaterialLayout {
    pub fn n_placed(&self) -> usize {
        self.sheets.iter().map(|s| s.len()).sum()
    }

    pub fn placed_pieces(&self) -> impl Iterator<Item = &PlacedPiece> {
        self.sheets.iter().flat_map(|s| s.placed_pieces())
    }

    /// Placed area over the usable area of all sheets of this material, in `[0, 1]`.
    pub fn usage(&self) -> f32 {
        if self.sheets.is_empty() {
            return 0.0;
        }
        let placed_area: f32 = self.sheets.iter().map(|s| s.placed_area(&self.stock)).sum();
        let usable_area = self.stock.usable_area() * self.sheets.len() as f32;
        (placed_area / usable_area).clamp(0.0, 1.0)
    }

    /// [`MaterialLayout::usage`] as a percentage rounded to two decimals.
    pub fn efficiency_pct(&self) -> f32 {
        round_pct(self.usage())
    }
}

/// Outcome of a packing run: sheets per material plus the per-piece diagnostics.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PackingResult {
    /// Keyed by material, in order of first occurrence in the input
    pub layouts: IndexMap<String, MaterialLayout>,
    /// Excluded and overflowing pieces
    pub diagnostics: Vec<Diagnostic>,
}

impl PackingResult {
    pub fn sheets(&self, material: &str) -> Option<&[Sheet]> {
        self.layouts.get(material).map(|l| l.sheets.as_slice())
    }

    pub fn n_sheets(&self) -> usize {
        self.layouts.values().map(|l| l.sheets.len()).sum()
    }

    pub fn n_placed(&self) -> usize {
        self.layouts.values().map(|l| l.n_placed()).sum()
    }

    /// Diagnostics of pieces that were left out of the packing
    pub fn exclusions(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_exclusion())
    }

    /// Diagnostics of pieces that were force-placed on a dedicated sheet
    pub fn overflows(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_exclusion())
    }
}
