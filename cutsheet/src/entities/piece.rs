/// A rectangular piece to be cut out of a stock sheet of a certain material.
/// Dimensions are expressed in a fixed linear unit (millimetres by convention).
#[derive(Clone, Debug, PartialEq)]
pub struct PieceRequest {
    /// Identifier, unique within a packing run
    pub id: String,
    /// Grouping key, pieces of different materials are never packed together
    pub material: String,
    pub width: f32,
    pub height: f32,
}

impl PieceRequest {
    pub fn new(id: impl Into<String>, material: impl Into<String>, width: f32, height: f32) -> Self {
        PieceRequest {
            id: id.into(),
            material: material.into(),
            width,
            height,
        }
    }

    /// A piece can only be packed if both dimensions are finite and strictly positive.
    pub fn has_valid_dimensions(&self) -> bool {
        [self.width, self.height]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
    }

    /// Length of the longest side, the key pieces are sorted on before packing.
    pub fn longest_side(&self) -> f32 {
        f32::max(self.width, self.height)
    }

    /// Footprint (width, height) of the piece in the given orientation.
    pub fn footprint(&self, orientation: Orientation) -> (f32, f32) {
        match orientation {
            Orientation::Original => (self.width, self.height),
            Orientation::Rotated => (self.height, self.width),
        }
    }
}

/// The two orientations a piece can be placed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// As requested
    Original,
    /// Rotated by 90°: width and height swapped
    Rotated,
}

impl Orientation {
    /// Order in which orientations are attempted on a sheet.
    pub const ALL: [Orientation; 2] = [Orientation::Original, Orientation::Rotated];

    pub fn is_rotated(self) -> bool {
        self == Orientation::Rotated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_validity() {
        assert!(PieceRequest::new("a", "MDF", 10.0, 5.0).has_valid_dimensions());
        assert!(!PieceRequest::new("b", "MDF", -5.0, 100.0).has_valid_dimensions());
        assert!(!PieceRequest::new("c", "MDF", 10.0, 0.0).has_valid_dimensions());
        assert!(!PieceRequest::new("d", "MDF", f32::NAN, 10.0).has_valid_dimensions());
        assert!(!PieceRequest::new("e", "MDF", f32::INFINITY, 10.0).has_valid_dimensions());
    }

    #[test]
    fn rotated_footprint_swaps_dimensions() {
        let piece = PieceRequest::new("a", "MDF", 300.0, 100.0);
        assert_eq!(piece.footprint(Orientation::Original), (300.0, 100.0));
        assert_eq!(piece.footprint(Orientation::Rotated), (100.0, 300.0));
        assert_eq!(piece.longest_side(), 300.0);
    }
}
