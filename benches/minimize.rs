use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dfa_minimize::{prelude::*, random::generate_random_dfa};

lazy_static::lazy_static! {
    static ref DATA: Vec<Automaton> = data();
}

const SIZES: [usize; 3] = [16, 64, 256];

fn data() -> Vec<Automaton> {
    let mut rng = fastrand::Rng::with_seed(42);
    SIZES
        .iter()
        .map(|&size| generate_random_dfa(&mut rng, 3, size, 0.9).unwrap())
        .collect()
}

fn bench_minimize(c: &mut Criterion) {
    for dfa in DATA.iter() {
        c.bench_function(&format!("refine {}", dfa.size()), |b| {
            b.iter(|| refine(black_box(dfa)))
        });
        c.bench_function(&format!("minimize {}", dfa.size()), |b| {
            b.iter(|| black_box(dfa).minimize())
        });
    }
}

criterion_group!(benches, bench_minimize);
criterion_main!(benches);
