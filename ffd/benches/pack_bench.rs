use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use cutsheet::entities::{PieceRequest, StockSheet};
use ffd::FFDPacker;

criterion_main!(benches);
criterion_group!(benches, pack_single_material_bench, pack_materials_bench);

const N_PIECES: [usize; 4] = [50, 200, 500, 1000];

fn create_pieces(n: usize, n_materials: usize) -> Vec<PieceRequest> {
    (0..n)
        .map(|i| {
            let width = 80.0 + ((i * 137) % 700) as f32;
            let height = 40.0 + ((i * 71) % 450) as f32;
            let material = format!("material_{}", i % n_materials);
            PieceRequest::new(format!("p{i}"), material, width, height)
        })
        .collect()
}

/// Benchmark the FFD packer on a single material group of increasing size
fn pack_single_material_bench(c: &mut Criterion) {
    let stock = StockSheet::default();
    let mut group = c.benchmark_group("ffd_pack_single_material");
    for n in N_PIECES {
        let pieces = create_pieces(n, 1);
        let refs = pieces.iter().collect::<Vec<_>>();
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| FFDPacker::new(stock).pack("material_0", black_box(&refs)))
        });
    }
    group.finish();
}

/// Benchmark the full packing pipeline (grouping + parallel packing) over several materials
fn pack_materials_bench(c: &mut Criterion) {
    let stock = StockSheet::default();
    let mut group = c.benchmark_group("ffd_pack_materials");
    for n in N_PIECES {
        let pieces = create_pieces(n, 4);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| ffd::pack(black_box(&pieces), &stock))
        });
    }
    group.finish();
}
