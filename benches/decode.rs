use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lzma2rust::{lzma2_decode, FinishMode};
use xz2::stream::{Action, Filters, LzmaOptions, Stream};

const PROP: u8 = 0x18;

fn xz2_raw_decode(compressed: &[u8], out_len: usize) -> Vec<u8> {
    let mut opts = LzmaOptions::new_preset(6).unwrap();
    opts.dict_size(1 << 24);
    let mut filters = Filters::new();
    filters.lzma2(&opts);
    let mut stream = Stream::new_raw_decoder(&filters).unwrap();
    let mut out = Vec::with_capacity(out_len);
    loop {
        let consumed = stream.total_in() as usize;
        out.reserve(1 << 16);
        let status = stream
            .process_vec(&compressed[consumed..], &mut out, Action::Finish)
            .unwrap();
        if status == xz2::stream::Status::StreamEnd {
            return out;
        }
    }
}

fn bench_decode(c: &mut Criterion) {
    let small = include_bytes!("../test_files/zero_1024.lzma2");
    let big = include_bytes!("../test_files/lcg_r2_256k.lzma2");

    let mut group = c.benchmark_group("decode");

    group.throughput(Throughput::Bytes(1024));
    group.bench_function("zero_1024", |b| {
        let mut dst = vec![0u8; 1024];
        b.iter(|| {
            let res = lzma2_decode(&mut dst, small, PROP, FinishMode::End).unwrap();
            black_box(res.output_produced());
        });
    });

    group.throughput(Throughput::Bytes(256 * 1024));
    group.bench_function("lcg_r2_256k", |b| {
        let mut dst = vec![0u8; 256 * 1024];
        b.iter(|| {
            let res = lzma2_decode(&mut dst, big, PROP, FinishMode::End).unwrap();
            black_box(res.output_produced());
        });
    });

    group.throughput(Throughput::Bytes(256 * 1024));
    group.bench_function("lcg_r2_256k_native", |b| {
        b.iter(|| {
            black_box(xz2_raw_decode(big, 256 * 1024));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
