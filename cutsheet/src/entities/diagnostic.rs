use std::fmt::{Display, Formatter};

/// A per-piece condition reported alongside a packing result.
/// None of these abort a packing run.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub piece_id: String,
    pub kind: DiagnosticKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DiagnosticKind {
    /// Width or height not finite and positive, the piece was excluded from packing
    InvalidDimension { width: f32, height: f32 },
    /// Another piece earlier in the input already used this id, the piece was excluded from packing
    DuplicateId,
    /// The piece does not fit on an empty sheet in any orientation.
    /// It was force-placed at the origin of a dedicated sheet and overflows its boundary.
    Overflow { material: String, sheet_index: usize },
}

impl Diagnostic {
    pub fn new(piece_id: impl Into<String>, kind: DiagnosticKind) -> Self {
        Diagnostic {
            piece_id: piece_id.into(),
            kind,
        }
    }

    /// Short machine-friendly description of the condition
    pub fn reason(&self) -> &'static str {
        match self.kind {
            DiagnosticKind::InvalidDimension { .. } => "invalid dimension",
            DiagnosticKind::DuplicateId => "duplicate id",
            DiagnosticKind::Overflow { .. } => "overflow",
        }
    }

    /// Whether the piece was left out of the packing entirely
    pub fn is_exclusion(&self) -> bool {
        !matches!(self.kind, DiagnosticKind::Overflow { .. })
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DiagnosticKind::InvalidDimension { width, height } => write!(
                f,
                "piece {}: invalid dimension ({width} x {height})",
                self.piece_id
            ),
            DiagnosticKind::DuplicateId => write!(f, "piece {}: duplicate id", self.piece_id),
            DiagnosticKind::Overflow {
                material,
                sheet_index,
            } => write!(
                f,
                "piece {}: overflows sheet {sheet_index} of {material}",
                self.piece_id
            ),
        }
    }
}
