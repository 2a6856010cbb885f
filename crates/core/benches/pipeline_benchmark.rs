//! Benchmarks des heuristiques du pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plasmid_core::{find_ori, find_orfs, parse_markers, Assembler, DesignEntry, OrfScan};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

fn random_genome(len: usize, seed: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| ['A', 'C', 'G', 'T'][rng.gen_range(0..4)])
        .collect()
}

fn benchmark_ori(c: &mut Criterion) {
    let genomes = vec![
        ("3kb", random_genome(3_000, 1)),   // taille d'un pUC19
        ("50kb", random_genome(50_000, 2)),
    ];

    let mut group = c.benchmark_group("ORI Detection");
    group.measurement_time(Duration::from_secs(10));

    for (name, genome) in &genomes {
        group.bench_function(format!("gc_skew_{}", name), |b| {
            b.iter(|| find_ori(black_box(genome), 500));
        });
    }

    group.finish();
}

fn benchmark_orfs(c: &mut Criterion) {
    let genome = random_genome(50_000, 3);

    let mut group = c.benchmark_group("ORF Search");
    group.bench_function("every_start", |b| {
        b.iter(|| find_orfs(black_box(&genome), OrfScan::EveryStart));
    });
    group.bench_function("non_overlapping", |b| {
        b.iter(|| find_orfs(black_box(&genome), OrfScan::NonOverlapping));
    });
    group.finish();
}

fn benchmark_assembly(c: &mut Criterion) {
    let genome = random_genome(3_000, 4);
    let markers = parse_markers("EcoRI\tGAATTC\nBamHI\tGGATCC\nHindIII\tAAGCTT\n").unwrap();
    let design = vec![
        DesignEntry::new("mcs1", "Ampicillin"),
        DesignEntry::new("mcs2", "Blue_White_Selection"),
        DesignEntry::new("mcs3", "BamHI"),
        DesignEntry::new("mcs4", "HindIII"),
    ];
    let assembler = Assembler::default();

    c.bench_function("assemble_3kb", |b| {
        b.iter(|| assembler.assemble(black_box(&genome), &design, &markers));
    });
}

criterion_group!(benches, benchmark_ori, benchmark_orfs, benchmark_assembly);
criterion_main!(benches);
