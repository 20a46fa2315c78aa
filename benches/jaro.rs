//! Jaro / Jaro-Winkler throughput over a mix of census name pairs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fuzzyjaro::{jaro_similarity, jaro_similarity_bytes, jaro_winkler_similarity};

const PAIRS: &[(&str, &str)] = &[
    ("SHACKLEFORD", "SHACKELFORD"),
    ("CUNNIGHAM", "DUNNINGHAM"),
    ("NICHLESON", "NICHULSON"),
    ("JONES", "JOHNSON"),
    ("MASSEY", "MASSIE"),
    ("HARDIN", "MARTINEZ"),
    ("ITMAN", "SMITH"),
    ("MICHAEL", "MICHELLE"),
    ("BROOK HLLW", "BROOK HALLOW"),
    ("FITZRUREITER", "FITZENREITER"),
];

const UNICODE_PAIRS: &[(&str, &str)] = &[
    ("M\u{00fc}ller", "Mueller"),
    ("Jos\u{00e9} Garc\u{00ed}a", "Jose Garcia"),
    ("\u{0160}koda", "Skoda"),
];

fn bench_jaro(c: &mut Criterion) {
    let mut group = c.benchmark_group("jaro");

    group.bench_function("ascii", |b| {
        b.iter(|| {
            for &(x, y) in PAIRS {
                black_box(jaro_similarity(black_box(x), black_box(y)));
            }
        })
    });

    group.bench_function("bytes", |b| {
        b.iter(|| {
            for &(x, y) in PAIRS {
                black_box(jaro_similarity_bytes(black_box(x.as_bytes()), black_box(y.as_bytes())));
            }
        })
    });

    group.bench_function("unicode", |b| {
        b.iter(|| {
            for &(x, y) in UNICODE_PAIRS {
                black_box(jaro_similarity(black_box(x), black_box(y)));
            }
        })
    });

    group.finish();
}

fn bench_jaro_winkler(c: &mut Criterion) {
    c.bench_function("jaro_winkler/ascii", |b| {
        b.iter(|| {
            for &(x, y) in PAIRS {
                black_box(jaro_winkler_similarity(black_box(x), black_box(y)));
            }
        })
    });
}

criterion_group!(benches, bench_jaro, bench_jaro_winkler);
criterion_main!(benches);
