use crate::entities::{PlacedPiece, StockSheet};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
use crate::util::assertions;

/// One physical stock sheet of a material group and the pieces placed on it, in placement order.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    /// 1-based position of the sheet within its material group
    pub index: usize,
    placed_pieces: Vec<PlacedPiece>,
    dedicated: bool,
}

impl Sheet {
    pub fn new(index: usize) -> Self {
        debug_assert!(index >= 1);
        Sheet {
            index,
            placed_pieces: vec![],
            dedicated: false,
        }
    }

    /// Opens a sheet reserved for a single overflowing piece.
    /// No other piece will be placed on it.
    pub fn new_dedicated(index: usize, piece: PlacedPiece) -> Self {
        debug_assert!(piece.overflow);
        Sheet {
            index,
            placed_pieces: vec![piece],
            dedicated: true,
        }
    }

    pub fn placed_pieces(&self) -> &[PlacedPiece] {
        &self.placed_pieces
    }

    pub fn len(&self) -> usize {
        self.placed_pieces.len()
    }

    /// Whether this sheet was opened for an overflowing piece
    pub fn is_dedicated(&self) -> bool {
        self.dedicated
    }

    pub fn has_overflow(&self) -> bool {
        self.placed_pieces.iter().any(|pp| pp.overflow)
    }

    /// Checks whether `rect` would violate the minimum `spacing` with any piece already on the sheet.
    pub fn collides_with_placed(&self, rect: &Rect, spacing: f32) -> bool {
        self.placed_pieces
            .iter()
            .any(|pp| pp.bbox().inflate(spacing).collides_with(rect))
    }

    /// Adds a piece to the sheet. The caller is responsible for having checked the placement is valid.
    pub fn place(&mut self, piece: PlacedPiece, stock: &StockSheet) {
        debug_assert!(!self.dedicated, "no pieces can be added to a dedicated overflow sheet");
        debug_assert!(
            assertions::placement_is_valid(self, &piece, stock),
            "invalid placement of piece {} on sheet {}",
            piece.id,
            self.index
        );
        self.placed_pieces.push(piece);
    }

    /// Total area of the placed pieces that lies within the usable region of the sheet.
    pub fn placed_area(&self, stock: &StockSheet) -> f32 {
        let usable = stock.usable_rect();
        self.placed_pieces
            .iter()
            .filter_map(|pp| Rect::intersection(pp.bbox(), usable))
            .map(|r| r.area())
            .sum()
    }

    /// Fraction of the usable area of the sheet covered by pieces, in `[0, 1]`.
    /// Derived on demand, never stored.
    pub fn usage(&self, stock: &StockSheet) -> f32 {
        (self.placed_area(stock) / stock.usable_area()).clamp(0.0, 1.0)
    }

    /// [`Sheet::usage`] as a percentage rounded to two decimals, for display.
    pub fn efficiency_pct(&self, stock: &StockSheet) -> f32 {
        round_pct(self.usage(stock))
    }
}

/// Converts a fraction into a percentage rounded to two decimals.
pub(crate) fn round_pct(fraction: f32) -> f32 {
    (fraction * 100.0 * 100.0).round() / 100.0
}
