use std::iter;

use cutsheet::entities::{PlacedPiece, Sheet, StockSheet};
use cutsheet::geometry::geo_traits::Contains;
use cutsheet::geometry::primitives::{Point, Rect};
use itertools::Itertools;
use ordered_float::OrderedFloat;

/// All anchor points at which the top-left corner of a new piece is attempted, ordered by `(y, x)`.
///
/// The origin of the usable area, plus for every placed piece the points to its right, below it and
/// diagonally below-right of it, each `spacing` away from the piece.
pub fn candidate_points(placed: &[PlacedPiece], stock: &StockSheet) -> Vec<Point> {
    let spacing = stock.spacing();
    let anchors = placed.iter().flat_map(|pp| {
        let bbox = pp.bbox();
        [
            Point(bbox.x_max + spacing, bbox.y_min),
            Point(bbox.x_min, bbox.y_max + spacing),
            Point(bbox.x_max + spacing, bbox.y_max + spacing),
        ]
    });

    iter::once(stock.origin())
        .chain(anchors)
        .sorted_by_key(|p| (OrderedFloat(p.y()), OrderedFloat(p.x())))
        .collect()
}

/// Searches the sheet for the first anchor point at which a `width x height` footprint lies within
/// the usable area and keeps at least `spacing` from every placed piece.
pub fn search_position(sheet: &Sheet, stock: &StockSheet, width: f32, height: f32) -> Option<Point> {
    let usable = stock.usable_rect();
    candidate_points(sheet.placed_pieces(), stock)
        .into_iter()
        .find(|corner| {
            let footprint = Rect {
                x_min: corner.x(),
                y_min: corner.y(),
                x_max: corner.x() + width,
                y_max: corner.y() + height,
            };
            usable.contains(&footprint) && !sheet.collides_with_placed(&footprint, stock.spacing())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutsheet::entities::{Orientation, PieceRequest};

    fn place(sheet: &mut Sheet, stock: &StockSheet, id: &str, w: f32, h: f32) {
        let piece = PieceRequest::new(id, "MDF", w, h);
        let corner = search_position(sheet, stock, w, h).unwrap();
        sheet.place(PlacedPiece::new(&piece, corner, Orientation::Original), stock);
    }

    #[test]
    fn empty_sheet_only_offers_origin() {
        let stock = StockSheet::default();
        assert_eq!(candidate_points(&[], &stock), vec![Point(20.0, 20.0)]);
    }

    #[test]
    fn candidates_are_sorted_top_to_bottom_then_left_to_right() {
        let stock = StockSheet::default();
        let mut sheet = Sheet::new(1);
        place(&mut sheet, &stock, "a", 1000.0, 500.0);

        let candidates = candidate_points(sheet.placed_pieces(), &stock);
        assert_eq!(
            candidates,
            vec![
                Point(20.0, 20.0),
                Point(1040.0, 20.0),
                Point(20.0, 540.0),
                Point(1040.0, 540.0)
            ]
        );
    }

    #[test]
    fn second_piece_is_placed_right_of_the_first() {
        let stock = StockSheet::default();
        let mut sheet = Sheet::new(1);
        place(&mut sheet, &stock, "a", 1000.0, 500.0);
        place(&mut sheet, &stock, "b", 1000.0, 500.0);

        assert_eq!(sheet.placed_pieces()[1].x, 1040.0);
        assert_eq!(sheet.placed_pieces()[1].y, 20.0);
    }

    #[test]
    fn no_position_when_usable_area_is_exceeded() {
        let stock = StockSheet::default();
        let sheet = Sheet::new(1);
        assert!(search_position(&sheet, &stock, 2400.0, 1180.0).is_some());
        assert!(search_position(&sheet, &stock, 2401.0, 100.0).is_none());
    }
}
