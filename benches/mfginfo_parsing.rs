// ABOUTME: Benchmarks for manufacturing-info parsing performance
// ABOUTME: Measures tokenizing, full registration and derived MAC reads using Criterion

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mfginfo_layout::{
    CellTable, DeviceTreeNode, Layout, LayoutConfig, MemoryStorage, PropertyValue, Tokenizer,
    derive_mac,
};
use std::fs;

fn load_test_image() -> Vec<u8> {
    fs::read("test-data/mfginfo.bin").expect("Failed to load test image")
}

fn container() -> DeviceTreeNode {
    DeviceTreeNode::new("nvmem-layout").with_property(
        "compatible",
        PropertyValue::String("adtran,mfginfo".to_string()),
    )
}

fn bench_tokenizer(c: &mut Criterion) {
    let data = load_test_image();
    let config = LayoutConfig::default();

    c.bench_function("tokenize", |b| {
        b.iter(|| Tokenizer::new(&data, &config).count())
    });
}

fn bench_add_cells(c: &mut Criterion) {
    let data = load_test_image();
    let storage = MemoryStorage::new(&data);
    let node = container();
    let layout = Layout::probe(&node, LayoutConfig::default()).expect("compatible container");

    c.bench_function("add_cells", |b| {
        b.iter(|| {
            let mut table = CellTable::new();
            layout.add_cells(&storage, &mut table).unwrap()
        })
    });
}

fn bench_mac_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_mac");

    for index in [0, 7, 15] {
        group.bench_with_input(BenchmarkId::from_parameter(index), &index, |b, &index| {
            b.iter(|| derive_mac(b"00:a0:c8:12:34:50", index).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenizer,
    bench_add_cells,
    bench_mac_derivation
);
criterion_main!(benches);
