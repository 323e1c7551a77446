use crate::entities::{Orientation, PieceRequest};
use crate::geometry::primitives::{Point, Rect};

/// A [`PieceRequest`] that has been placed on a sheet.
/// Created fresh from the request, the request itself is never modified.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPiece {
    /// Id of the originating request
    pub id: String,
    /// Left edge, in sheet coordinates (margin already included)
    pub x: f32,
    /// Top edge, in sheet coordinates (margin already included)
    pub y: f32,
    /// Effective width as placed
    pub width: f32,
    /// Effective height as placed
    pub height: f32,
    /// Placed with width and height swapped
    pub rotated: bool,
    /// Force-placed even though it does not fit within the usable area of the sheet
    pub overflow: bool,
}

impl PlacedPiece {
    pub fn new(request: &PieceRequest, corner: Point, orientation: Orientation) -> Self {
        let (width, height) = request.footprint(orientation);
        PlacedPiece {
            id: request.id.clone(),
            x: corner.x(),
            y: corner.y(),
            width,
            height,
            rotated: orientation.is_rotated(),
            overflow: false,
        }
    }

    /// Degraded placement of a piece that fits on no sheet, in its original orientation.
    pub fn new_overflowing(request: &PieceRequest, corner: Point) -> Self {
        PlacedPiece {
            overflow: true,
            ..PlacedPiece::new(request, corner, Orientation::Original)
        }
    }

    /// The axis-aligned footprint of the piece on the sheet.
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width,
            y_max: self.y + self.height,
        }
    }
}
