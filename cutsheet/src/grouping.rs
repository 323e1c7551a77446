use std::collections::HashSet;

use crate::entities::{Diagnostic, DiagnosticKind, PieceRequest};
use indexmap::IndexMap;
use log::warn;

/// Piece requests partitioned per material, borrowed from the input.
#[derive(Clone, Debug, Default)]
pub struct Grouping<'a> {
    /// Material groups in order of first occurrence, pieces in input order
    pub groups: IndexMap<&'a str, Vec<&'a PieceRequest>>,
    /// Pieces that will not be packed, in input order
    pub exclusions: Vec<Diagnostic>,
}

impl Grouping<'_> {
    pub fn n_grouped(&self) -> usize {
        self.groups.values().map(|g| g.len()).sum()
    }
}

/// Partitions `pieces` by material.
///
/// Pieces without a finite, positive width and height are excluded and reported as
/// [`DiagnosticKind::InvalidDimension`]. A valid piece reusing the id of an earlier valid piece
/// is excluded and reported as [`DiagnosticKind::DuplicateId`].
/// No sorting happens here: pieces keep their input order within a group.
pub fn group_by_material(pieces: &[PieceRequest]) -> Grouping<'_> {
    let mut grouping = Grouping::default();
    let mut seen_ids = HashSet::new();

    for piece in pieces {
        if !piece.has_valid_dimensions() {
            warn!(
                "excluding piece {} ({}): invalid dimensions {} x {}",
                piece.id, piece.material, piece.width, piece.height
            );
            grouping.exclusions.push(Diagnostic::new(
                &piece.id,
                DiagnosticKind::InvalidDimension {
                    width: piece.width,
                    height: piece.height,
                },
            ));
            continue;
        }
        if !seen_ids.insert(piece.id.as_str()) {
            warn!("excluding piece {} ({}): duplicate id", piece.id, piece.material);
            grouping
                .exclusions
                .push(Diagnostic::new(&piece.id, DiagnosticKind::DuplicateId));
            continue;
        }
        grouping
            .groups
            .entry(piece.material.as_str())
            .or_default()
            .push(piece);
    }

    grouping
}
