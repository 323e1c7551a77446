use std::cmp::Reverse;

use crate::opt::search::search_position;
use cutsheet::entities::{Diagnostic, DiagnosticKind, Orientation, PieceRequest, PlacedPiece, Sheet, StockSheet};
use itertools::Itertools;
use log::{debug, trace, warn};
use ordered_float::OrderedFloat;

/// First-Fit-Decreasing packer for the pieces of a single material.
///
/// Pieces are processed in decreasing order of their longest side. Each piece goes onto the first
/// sheet (in creation order) that can accommodate it, trying its original orientation before the
/// rotated one. A new sheet is opened when no existing sheet accepts the piece.
pub struct FFDPacker {
    pub stock: StockSheet,
}

impl FFDPacker {
    pub fn new(stock: StockSheet) -> Self {
        Self { stock }
    }

    /// Packs all `pieces` of `material`. Every piece ends up on exactly one of the returned sheets.
    ///
    /// A piece that fits on an empty sheet in neither orientation is force-placed, unrotated, at the
    /// origin of a new dedicated sheet and reported as [`DiagnosticKind::Overflow`].
    pub fn pack(&self, material: &str, pieces: &[&PieceRequest]) -> (Vec<Sheet>, Vec<Diagnostic>) {
        let mut sheets: Vec<Sheet> = vec![];
        let mut diagnostics = vec![];

        //stable: pieces with equal longest sides keep their input order
        let placement_order = pieces
            .iter()
            .copied()
            .sorted_by_key(|p| Reverse(OrderedFloat(p.longest_side())));

        for piece in placement_order {
            let existing = sheets
                .iter()
                .enumerate()
                .find_map(|(i, sheet)| self.search_sheet(sheet, piece).map(|pp| (i, pp)));

            match existing {
                Some((i, pp)) => {
                    log_placement(material, &sheets[i], &pp);
                    sheets[i].place(pp, &self.stock);
                }
                None => {
                    let mut sheet = Sheet::new(sheets.len() + 1);
                    match self.search_sheet(&sheet, piece) {
                        Some(pp) => {
                            log_placement(material, &sheet, &pp);
                            sheet.place(pp, &self.stock);
                        }
                        None => {
                            debug_assert!(
                                !self.stock.fits_empty(piece.width, piece.height)
                                    && !self.stock.fits_empty(piece.height, piece.width)
                            );
                            warn!(
                                "[FFD] piece {} ({} x {}) does not fit on a {} x {} sheet of {}, forcing it onto dedicated sheet {}",
                                piece.id,
                                piece.width,
                                piece.height,
                                self.stock.width(),
                                self.stock.height(),
                                material,
                                sheet.index
                            );
                            let pp = PlacedPiece::new_overflowing(piece, self.stock.origin());
                            sheet = Sheet::new_dedicated(sheet.index, pp);
                            diagnostics.push(Diagnostic::new(
                                &piece.id,
                                DiagnosticKind::Overflow {
                                    material: material.to_string(),
                                    sheet_index: sheet.index,
                                },
                            ));
                        }
                    }
                    sheets.push(sheet);
                }
            }
        }

        debug!(
            "[FFD] {}: {} pieces on {} sheets, usage: [{}]",
            material,
            pieces.len(),
            sheets.len(),
            sheets
                .iter()
                .map(|s| format!("{:.2}%", s.efficiency_pct(&self.stock)))
                .join(", ")
        );

        (sheets, diagnostics)
    }

    /// Searches a single sheet for a valid placement of `piece`, unrotated first.
    /// Dedicated overflow sheets never accept another piece.
    fn search_sheet(&self, sheet: &Sheet, piece: &PieceRequest) -> Option<PlacedPiece> {
        if sheet.is_dedicated() {
            return None;
        }
        Orientation::ALL.into_iter().find_map(|orientation| {
            let (width, height) = piece.footprint(orientation);
            search_position(sheet, &self.stock, width, height)
                .map(|corner| PlacedPiece::new(piece, corner, orientation))
        })
    }
}

fn log_placement(material: &str, sheet: &Sheet, pp: &PlacedPiece) {
    trace!(
        "[FFD] placing piece {} at ({}, {}){} on sheet {} of {}",
        pp.id,
        pp.x,
        pp.y,
        if pp.rotated { " rotated" } else { "" },
        sheet.index,
        material
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutsheet::util::assertions;

    #[test]
    fn larger_pieces_are_placed_first() {
        let small = PieceRequest::new("small", "MDF", 100.0, 100.0);
        let large = PieceRequest::new("large", "MDF", 500.0, 100.0);
        let (sheets, diagnostics) = FFDPacker::new(StockSheet::default()).pack("MDF", &[&small, &large]);

        assert!(diagnostics.is_empty());
        assert_eq!(sheets.len(), 1);
        let ids: Vec<_> = sheets[0].placed_pieces().iter().map(|pp| pp.id.as_str()).collect();
        assert_eq!(ids, ["large", "small"]);
    }

    #[test]
    fn piece_is_rotated_when_only_rotation_fits() {
        let stock = StockSheet::try_new(1000.0, 2000.0, 0.0, 0.0).unwrap();
        let piece = PieceRequest::new("a", "MDF", 1500.0, 800.0);
        let (sheets, diagnostics) = FFDPacker::new(stock).pack("MDF", &[&piece]);

        assert!(diagnostics.is_empty());
        let pp = &sheets[0].placed_pieces()[0];
        assert!(pp.rotated);
        assert_eq!((pp.width, pp.height), (800.0, 1500.0));
    }

    #[test]
    fn rotation_is_tried_on_existing_sheets_before_opening_a_new_one() {
        let stock = StockSheet::try_new(1000.0, 600.0, 0.0, 0.0).unwrap();
        let first = PieceRequest::new("first", "MDF", 1000.0, 400.0);
        let second = PieceRequest::new("second", "MDF", 200.0, 999.0);
        let (sheets, _) = FFDPacker::new(stock).pack("MDF", &[&first, &second]);

        assert_eq!(sheets.len(), 1);
        assert!(sheets[0].placed_pieces()[1].rotated);
    }

    #[test]
    fn each_sheet_is_tried_in_both_orientations_before_the_next() {
        //the last piece only fits sheet 1 rotated, but would fit sheet 2 unrotated
        let stock = StockSheet::try_new(1000.0, 1000.0, 0.0, 0.0).unwrap();
        let a = PieceRequest::new("a", "MDF", 700.0, 1000.0);
        let b = PieceRequest::new("b", "MDF", 690.0, 990.0);
        let c = PieceRequest::new("c", "MDF", 305.0, 200.0);
        let (sheets, diagnostics) = FFDPacker::new(stock).pack("MDF", &[&a, &b, &c]);

        assert!(diagnostics.is_empty());
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[1].len(), 1);
        let pp = &sheets[0].placed_pieces()[1];
        assert_eq!(pp.id, "c");
        assert!(pp.rotated);
        assert_eq!((pp.x, pp.y), (700.0, 0.0));
        assert_eq!((pp.width, pp.height), (200.0, 305.0));
    }

    #[test]
    fn overflowing_piece_gets_a_dedicated_sheet() {
        let stock = StockSheet::default();
        let huge = PieceRequest::new("huge", "MDF", 3000.0, 500.0);
        let small = PieceRequest::new("small", "MDF", 100.0, 100.0);
        let (sheets, diagnostics) = FFDPacker::new(stock).pack("MDF", &[&huge, &small]);

        assert_eq!(sheets.len(), 2);
        assert!(sheets[0].is_dedicated());
        assert_eq!(sheets[0].len(), 1);
        assert_eq!(sheets[1].placed_pieces()[0].id, "small");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].kind,
            DiagnosticKind::Overflow {
                material: "MDF".into(),
                sheet_index: 1
            }
        );
        assert!(sheets.iter().all(|s| assertions::sheet_is_valid(s, &stock)));
    }
}
