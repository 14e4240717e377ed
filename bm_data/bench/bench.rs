use bm_data::{Data, FixedBytes};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const WIDE_HEX: &str = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("from_hex 256 bits", |b| {
        b.iter(|| Data::<FixedBytes<32>>::from_hex(black_box(WIDE_HEX)))
    });
    c.bench_function("from_bytes 32 bytes", |b| {
        let bytes = [0xa5u8; 32];
        b.iter(|| Data::<FixedBytes<32>>::from_bytes(black_box(&bytes)))
    });
}

fn bench_arith(c: &mut Criterion) {
    let x = Data::<FixedBytes<32>>::from_hex(WIDE_HEX).unwrap();
    let y: Data = Data::from(0xffff_ffffu32);
    let mut out = Data::<FixedBytes<32>>::new();
    c.bench_function("add 256 bits", |b| {
        b.iter(|| out.add(black_box(&x), black_box(&y)))
    });
    c.bench_function("bit_xor 256 bits", |b| {
        b.iter(|| out.bit_xor(black_box(&x), black_box(&y)))
    });
}

criterion_group!(benches, bench_parse, bench_arith);
criterion_main!(benches);
