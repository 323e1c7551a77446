use crate::entities::{Diagnostic, MaterialLayout, PackingResult, PlacedPiece, Sheet, StockSheet};
use crate::io::ext_repr::{
    ExtDiagnostic, ExtMaterialLayout, ExtPlacedPiece, ExtSheet, ExtSolution, ExtStockSheet,
};

/// Name under which the cutting diagram of a sheet is stored:
/// `layout_{material}_sheet_{index}` with every non-alphanumeric character of the material replaced by `_`.
pub fn sheet_file_stem(material: &str, index: usize) -> String {
    let material: String = material
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("layout_{material}_sheet_{index}")
}

pub fn export_stock_sheet(stock: &StockSheet) -> ExtStockSheet {
    ExtStockSheet {
        width: stock.width(),
        height: stock.height(),
        margin: stock.margin(),
        spacing: stock.spacing(),
    }
}

pub fn export_placed_piece(pp: &PlacedPiece) -> ExtPlacedPiece {
    ExtPlacedPiece {
        id: pp.id.clone(),
        x: pp.x,
        y: pp.y,
        width: pp.width,
        height: pp.height,
        rotated: pp.rotated,
        overflow: pp.overflow,
    }
}

pub fn export_sheet(sheet: &Sheet, material: &str, stock: &StockSheet) -> ExtSheet {
    ExtSheet {
        index: sheet.index,
        file_stem: sheet_file_stem(material, sheet.index),
        efficiency: sheet.efficiency_pct(stock),
        placed_pieces: sheet.placed_pieces().iter().map(export_placed_piece).collect(),
    }
}

pub fn export_material_layout(layout: &MaterialLayout) -> ExtMaterialLayout {
    ExtMaterialLayout {
        material: layout.material.clone(),
        stock: export_stock_sheet(&layout.stock),
        efficiency: layout.efficiency_pct(),
        sheets: layout
            .sheets
            .iter()
            .map(|s| export_sheet(s, &layout.material, &layout.stock))
            .collect(),
    }
}

pub fn export_diagnostic(diagnostic: &Diagnostic) -> ExtDiagnostic {
    ExtDiagnostic {
        piece_id: diagnostic.piece_id.clone(),
        reason: diagnostic.reason().to_string(),
        message: diagnostic.to_string(),
    }
}

/// Exports a packing result out of the library
pub fn export(result: &PackingResult) -> ExtSolution {
    ExtSolution {
        n_sheets: result.n_sheets(),
        n_placed: result.n_placed(),
        layouts: result.layouts.values().map(export_material_layout).collect(),
        diagnostics: result.diagnostics.iter().map(export_diagnostic).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("MDF", 1, "layout_MDF_sheet_1"; "plain")]
    #[test_case("MDF 15mm", 2, "layout_MDF_15mm_sheet_2"; "space")]
    #[test_case("Acrílico 3/8\"", 1, "layout_Acr_lico_3_8__sheet_1"; "accents and symbols")]
    fn file_stems_are_sanitised(material: &str, index: usize, expected: &str) {
        assert_eq!(sheet_file_stem(material, index), expected);
    }
}
