use crate::entities::{ConfigError, PieceRequest, SheetCatalog, StockSheet};
use crate::io::ext_repr::{ExtComponent, ExtInstance, ExtPiece, ExtSheetCatalog, ExtStockSheet};
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Decides which component materials are sheet goods that can be nested.
/// Matching is a case-insensitive substring search on the material name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MaterialFilter {
    pub keywords: Vec<String>,
}

impl MaterialFilter {
    pub fn accepts(&self, material: &str) -> bool {
        let material = material.to_lowercase();
        self.keywords
            .iter()
            .any(|k| material.contains(&k.to_lowercase()))
    }
}

impl Default for MaterialFilter {
    fn default() -> Self {
        let keywords = ["mdf", "madera", "triplay", "acrilico", "melamina", "plywood"];
        MaterialFilter {
            keywords: keywords.map(String::from).to_vec(),
        }
    }
}

/// Converts external representations of pieces, components and stock sheets into internal ones.
#[derive(Clone, Debug, Default)]
pub struct Importer {
    /// Components whose material is rejected by the filter are not nested.
    /// Without a filter every component is converted.
    pub material_filter: Option<MaterialFilter>,
}

impl Importer {
    pub fn new(material_filter: Option<MaterialFilter>) -> Importer {
        Importer { material_filter }
    }

    pub fn import_piece(&self, ext_piece: &ExtPiece) -> PieceRequest {
        PieceRequest::new(
            &ext_piece.id,
            &ext_piece.material,
            ext_piece.width,
            ext_piece.height,
        )
    }

    /// Converts a component into a piece request in millimetres, using its `length` as width.
    /// Returns `None` if the component's material is not a sheet good.
    /// Missing dimensions become `0`, so the piece is reported as invalid instead of silently vanishing.
    pub fn import_component(&self, ext_comp: &ExtComponent) -> Option<PieceRequest> {
        if let Some(filter) = &self.material_filter {
            if !filter.accepts(&ext_comp.material) {
                debug!(
                    "component {} ({}) is not made of a sheet material, skipping",
                    ext_comp.id, ext_comp.material
                );
                return None;
            }
        }
        let dims = &ext_comp.dimensions;
        let to_mm = dims.unit.to_mm();
        if dims.length.is_none() || dims.height.is_none() {
            warn!(
                "component {} ({}) is missing its length or height",
                ext_comp.id, ext_comp.name
            );
        }
        Some(PieceRequest::new(
            &ext_comp.id,
            &ext_comp.material,
            dims.length.unwrap_or(0.0) * to_mm,
            dims.height.unwrap_or(0.0) * to_mm,
        ))
    }

    /// Imports all pieces and components of an instance (pieces first) together with its sheet catalog.
    /// Fails if any stock sheet configuration is invalid.
    pub fn import_instance(&self, ext_instance: &ExtInstance) -> Result<(Vec<PieceRequest>, SheetCatalog)> {
        let catalog = import_sheet_catalog(&ext_instance.sheets)?;

        let pieces = ext_instance
            .pieces
            .iter()
            .map(|p| self.import_piece(p))
            .chain(
                ext_instance
                    .components
                    .iter()
                    .filter_map(|c| self.import_component(c)),
            )
            .collect();

        Ok((pieces, catalog))
    }
}

pub fn import_stock_sheet(ext_stock: &ExtStockSheet) -> Result<StockSheet, ConfigError> {
    StockSheet::try_new(
        ext_stock.width,
        ext_stock.height,
        ext_stock.margin,
        ext_stock.spacing,
    )
}

pub fn import_sheet_catalog(ext_catalog: &ExtSheetCatalog) -> Result<SheetCatalog> {
    let default = import_stock_sheet(&ext_catalog.default).context("invalid default stock sheet")?;
    ext_catalog
        .overrides
        .iter()
        .try_fold(
            SheetCatalog::new(default),
            |catalog, (material, ext_stock)| -> Result<SheetCatalog> {
                let stock = import_stock_sheet(ext_stock)
                    .with_context(|| format!("invalid stock sheet for material {material}"))?;
                Ok(catalog.with_override(material, stock))
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::{ExtDimensions, ExtUnit};
    use test_case::test_case;

    fn component(material: &str, length: Option<f32>, height: Option<f32>, unit: ExtUnit) -> ExtComponent {
        ExtComponent {
            id: "c1".into(),
            name: "panel".into(),
            material: material.into(),
            dimensions: ExtDimensions {
                length,
                height,
                unit,
            },
        }
    }

    #[test_case(ExtUnit::Mm, 1200.0; "millimetres")]
    #[test_case(ExtUnit::Cm, 12000.0; "centimetres")]
    #[test_case(ExtUnit::M, 1_200_000.0; "metres")]
    fn component_dimensions_are_converted_to_mm(unit: ExtUnit, expected_width: f32) {
        let importer = Importer::default();
        let piece = importer
            .import_component(&component("MDF 15mm", Some(1200.0), Some(60.0), unit))
            .unwrap();
        assert_eq!(piece.width, expected_width);
        assert_eq!(piece.height, 60.0 * unit.to_mm());
        assert_eq!(piece.material, "MDF 15mm");
    }

    #[test]
    fn non_sheet_materials_are_filtered() {
        let importer = Importer::new(Some(MaterialFilter::default()));
        let accepts = |material: &str| {
            importer
                .import_component(&component(material, Some(1.0), Some(1.0), ExtUnit::Cm))
                .is_some()
        };
        assert!(!accepts("Acero inoxidable"));
        assert!(accepts("Triplay de pino"));
        assert!(accepts("ACRILICO blanco"));
    }

    #[test]
    fn missing_dimension_yields_invalid_piece() {
        let importer = Importer::default();
        let piece = importer
            .import_component(&component("MDF", Some(50.0), None, ExtUnit::Cm))
            .unwrap();
        assert!(!piece.has_valid_dimensions());
    }

    #[test]
    fn invalid_override_fails_catalog_import() {
        let mut ext_catalog = ExtSheetCatalog::default();
        ext_catalog.overrides.insert(
            "Acrylic".into(),
            ExtStockSheet {
                width: 100.0,
                height: 100.0,
                margin: 60.0,
                spacing: 0.0,
            },
        );
        assert!(import_sheet_catalog(&ext_catalog).is_err());
        assert!(import_sheet_catalog(&ExtSheetCatalog::default()).is_ok());
    }
}
