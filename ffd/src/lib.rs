use std::sync::LazyLock;
use std::time::Instant;

use cutsheet::entities::{Diagnostic, MaterialLayout, PackingResult, PieceRequest, SheetCatalog, StockSheet};
use cutsheet::grouping::{Grouping, group_by_material};
use cutsheet::util::assertions;
use log::info;
use rayon::prelude::*;
use thousands::Separable;

pub mod config;
pub mod io;
pub mod opt;

pub use opt::ffd_packer::FFDPacker;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Packs `pieces` onto sheets of `stock`, one independent sheet sequence per material.
pub fn pack(pieces: &[PieceRequest], stock: &StockSheet) -> PackingResult {
    pack_with_catalog(pieces, &SheetCatalog::new(*stock))
}

/// Packs `pieces` per material, each material using the stock sheet the `catalog` assigns to it.
///
/// Material groups are packed in parallel, but results are collected in group order:
/// the outcome is identical to a sequential run.
/// Diagnostics list the excluded pieces in input order, followed by the overflowing pieces per material.
pub fn pack_with_catalog(pieces: &[PieceRequest], catalog: &SheetCatalog) -> PackingResult {
    let start = Instant::now();
    let Grouping { groups, exclusions } = group_by_material(pieces);
    let groups = groups.into_iter().collect::<Vec<_>>();

    let packed = groups
        .par_iter()
        .map(|(material, group)| {
            let stock = *catalog.stock_for(material);
            let (sheets, diagnostics) = FFDPacker::new(stock).pack(material, group);
            let layout = MaterialLayout {
                material: material.to_string(),
                stock,
                sheets,
            };
            (layout, diagnostics)
        })
        .collect::<Vec<(MaterialLayout, Vec<Diagnostic>)>>();

    let mut result = PackingResult {
        diagnostics: exclusions,
        ..PackingResult::default()
    };
    for (layout, diagnostics) in packed {
        result.diagnostics.extend(diagnostics);
        result.layouts.insert(layout.material.clone(), layout);
    }

    info!(
        "[FFD] packed {} of {} pieces on {} sheets ({} materials) in {:.3}ms",
        result.n_placed().separate_with_commas(),
        pieces.len().separate_with_commas(),
        result.n_sheets(),
        result.layouts.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    debug_assert!(assertions::result_matches_requests(pieces, &result));

    result
}
