use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linear84::{encode, Codebook, Codeword, InfoWord, CODEBOOK};

fn bench_encode(c: &mut Criterion) {
    let words: Vec<InfoWord> = InfoWord::all().collect();
    c.bench_function("encode all information words", |b| {
        b.iter(|| {
            for &info in &words {
                black_box(encode(black_box(info)));
            }
        })
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build codebook", |b| b.iter(|| black_box(Codebook::build())));
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.bench_function("single received word", |b| {
        let received = Codeword::from_bits(0xFF);
        b.iter(|| black_box(CODEBOOK.decode(black_box(received))))
    });

    group.bench_function("every received word", |b| {
        b.iter(|| {
            for bits in 0..=u8::MAX {
                black_box(CODEBOOK.decode(Codeword::from_bits(bits)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_build, bench_decode);
criterion_main!(benches);
