//! Benchmark of the full tokenization pipeline over a representative text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ordskil_core::{split_into_sentences, tokenize, TokenizerOptions};

const SAMPLE: &str = "Málinu var vísað til stjórnskipunar- og eftirlitsnefndar \
skv. 3. gr. XVII. kafla laga nr. 10/2007 þann 3. janúar 2010. \
Ég á 10.000 kr. í vasanum, €100 og $40. Hitinn í dag var 32°C en á morgun \
verður hann 33° C. Skrifað var undir friðarsamninga í nóvember 1918. \
Hann keypti 64kWst rafbíl o.s.frv. Sjá nánar á www.visir.is eða í síma 699 2422.\n";

fn bench_tokenize(c: &mut Criterion) {
    let options = TokenizerOptions::default();
    let text = SAMPLE.repeat(64);

    c.bench_function("tokenize", |b| {
        b.iter(|| {
            let n = tokenize(black_box(&text), &options).unwrap().count();
            black_box(n)
        })
    });

    c.bench_function("split_into_sentences", |b| {
        b.iter(|| {
            let n = split_into_sentences(black_box(&text), &options).unwrap().count();
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
