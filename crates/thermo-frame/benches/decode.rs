//! Frame decode benchmarks
//!
//! One decode runs per BLE notification, so this is the codec hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use thermo_frame::SensorFrameDecoder;

fn bench_decode(c: &mut Criterion) {
    // 37.05 C, no timestamp
    let plain = [0x00u8, 0x79, 0x0E, 0x00, 0xFE];

    // 99.20 F with full timestamp block
    let timestamped = [
        0x03u8, 0xC0, 0x26, 0x00, 0xFE, 0xE9, 0x07, 0x0B, 0x03, 0x0E, 0x1E, 0x05,
    ];

    // Off-body sentinel
    let off_body = [0x00u8, 0xFF, 0xFF, 0x7F, 0xFE];

    c.bench_function("decode_plain", |b| {
        b.iter(|| SensorFrameDecoder::decode(black_box(&plain)))
    });

    c.bench_function("decode_timestamped", |b| {
        b.iter(|| SensorFrameDecoder::decode(black_box(&timestamped)))
    });

    c.bench_function("decode_off_body", |b| {
        b.iter(|| SensorFrameDecoder::decode(black_box(&off_body)))
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
