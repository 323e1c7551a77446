use std::collections::{HashMap, HashSet};

use crate::entities::{PackingResult, PieceRequest, PlacedPiece, Sheet, StockSheet};
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// Checks whether `piece` can be added to `sheet`:
/// inside the usable region (unless overflowing) and at least `spacing` away from every placed piece.
pub fn placement_is_valid(sheet: &Sheet, piece: &PlacedPiece, stock: &StockSheet) -> bool {
    if !piece.overflow && !stock.usable_rect().almost_contains(&piece.bbox()) {
        error!("piece {} lies outside the usable area: {:?}", piece.id, piece.bbox());
        return false;
    }
    match sheet
        .placed_pieces()
        .iter()
        .find(|pp| too_close(pp, piece, stock.spacing()))
    {
        Some(other) => {
            error!(
                "piece {} violates the spacing with piece {} on sheet {}",
                piece.id, other.id, sheet.index
            );
            false
        }
        None => true,
    }
}

/// Checks the no-overlap and containment invariants for every piece on a sheet.
pub fn sheet_is_valid(sheet: &Sheet, stock: &StockSheet) -> bool {
    let pieces = sheet.placed_pieces();

    if sheet.is_dedicated() && pieces.len() != 1 {
        error!("dedicated sheet {} holds {} pieces", sheet.index, pieces.len());
        return false;
    }

    let outside = pieces
        .iter()
        .filter(|pp| !pp.overflow)
        .find(|pp| !stock.usable_rect().almost_contains(&pp.bbox()));
    if let Some(pp) = outside {
        error!("piece {} lies outside the usable area of sheet {}", pp.id, sheet.index);
        return false;
    }

    let conflict = pieces
        .iter()
        .tuple_combinations()
        .find(|(a, b)| too_close(a, b, stock.spacing()));
    if let Some((a, b)) = conflict {
        error!("pieces {} and {} overlap on sheet {}", a.id, b.id, sheet.index);
        return false;
    }
    true
}

/// Checks that every valid request appears exactly once in its own material group,
/// every sheet is valid and every excluded request is reported exactly once.
pub fn result_matches_requests(requests: &[PieceRequest], result: &PackingResult) -> bool {
    let excluded = result.exclusions().map(|d| d.piece_id.as_str()).counts();
    let overflowing = result.overflows().map(|d| d.piece_id.as_str()).counts();

    let mut placed: HashMap<&str, (&str, usize)> = HashMap::new();
    for (material, layout) in result.layouts.iter() {
        assert_eq!(material, &layout.material);
        for sheet in layout.sheets.iter() {
            if !sheet_is_valid(sheet, &layout.stock) {
                return false;
            }
            for pp in sheet.placed_pieces() {
                let entry = placed.entry(pp.id.as_str()).or_insert((material.as_str(), 0));
                entry.1 += 1;
                if pp.overflow != overflowing.contains_key(pp.id.as_str()) {
                    error!("overflow flag of piece {} does not match the diagnostics", pp.id);
                    return false;
                }
            }
        }
    }

    let mut n_expected_placed = 0;
    let mut matched = HashSet::new();
    for request in requests {
        let should_be_placed =
            request.has_valid_dimensions() && matched.insert(request.id.as_str());
        match (should_be_placed, placed.get(request.id.as_str())) {
            (true, Some((material, count))) => {
                if *material != request.material || *count != 1 {
                    error!(
                        "piece {} placed {count} times in material {material}, expected once in {}",
                        request.id, request.material
                    );
                    return false;
                }
                n_expected_placed += 1;
            }
            (true, None) => {
                error!("piece {} was not placed", request.id);
                return false;
            }
            (false, _) => {
                if !excluded.contains_key(request.id.as_str()) {
                    error!("piece {} is neither placed nor excluded", request.id);
                    return false;
                }
            }
        }
    }

    let n_excluded_requests = requests.len() - n_expected_placed;
    let n_exclusions = excluded.values().sum::<usize>();
    if n_exclusions != n_excluded_requests || placed.len() != n_expected_placed {
        error!(
            "{n_exclusions} exclusions reported for {n_excluded_requests} excluded requests, {} ids placed",
            placed.len()
        );
        return false;
    }
    true
}

fn too_close(a: &PlacedPiece, b: &PlacedPiece, spacing: f32) -> bool {
    a.bbox().inflate(spacing).significantly_overlaps(&b.bbox())
}
