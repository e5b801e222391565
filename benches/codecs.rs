use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wirecode::{ExchangeId, WordList, code, qr};

fn bench_code_encode(c: &mut Criterion) {
    let words = WordList::builtin();
    let id = ExchangeId::from_bytes([0, 1, 2, 3, 4, 5, 6]);
    c.bench_function("code_encode", |b| {
        b.iter(|| code::encode(black_box(&id), black_box(words)))
    });
}

fn bench_code_decode(c: &mut Criterion) {
    let words = WordList::builtin();
    c.bench_function("code_decode", |b| {
        b.iter(|| code::decode(black_box("ember-laser-081g81864"), black_box(words)))
    });
}

fn bench_qr_encode(c: &mut Criterion) {
    c.bench_function("qr_encode_20_chars", |b| {
        b.iter(|| qr::encode(black_box("EMBER-LASER-081G8186")))
    });
}

fn bench_qr_to_svg(c: &mut Criterion) {
    c.bench_function("qr_to_svg_scale6", |b| {
        b.iter(|| qr::to_svg(black_box("EMBER-LASER-081G8186"), black_box(6)))
    });
}

criterion_group!(
    benches,
    bench_code_encode,
    bench_code_decode,
    bench_qr_encode,
    bench_qr_to_svg
);
criterion_main!(benches);
