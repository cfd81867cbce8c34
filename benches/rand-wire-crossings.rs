use criterion::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use wire_crossings::{CrossingVerifier, WireLayer};

const BBOX: f64 = 1024.;

fn random_layer(rng: &mut impl Rng, num_wires: usize, max_len: f64) -> WireLayer {
    let mut layer = WireLayer::new();
    for i in 0..num_wires {
        let x = rng.gen_range(0.0..BBOX);
        let y = rng.gen_range(0.0..BBOX);
        let len = rng.gen_range(1.0..max_len);
        let name = format!("w{}", i);
        if rng.gen_bool(0.5) {
            layer.add_wire(&name, x, y, x + len, y).unwrap();
        } else {
            layer.add_wire(&name, x, y, x, y + len).unwrap();
        }
    }
    layer
}

fn short_wires(c: &mut Criterion) {
    const NUM_WIRES: usize = 1024;

    let mut rng = StdRng::seed_from_u64(42);
    let layer = random_layer(&mut rng, NUM_WIRES, BBOX / 5.);

    c.bench_function("Sweep - short random wires", |b| {
        b.iter(|| {
            let mut verifier = CrossingVerifier::new(&layer);
            black_box(verifier.count_crossings().unwrap());
        })
    });
    c.bench_function("Brute-Force - short random wires", |b| {
        b.iter(|| {
            let wires: Vec<_> = layer.wires().collect();
            let mut count = 0usize;
            for (i, w1) in wires.iter().enumerate() {
                for w2 in &wires[i + 1..] {
                    if w1.intersects(w2) {
                        count += 1;
                    }
                }
            }
            black_box(count);
        })
    });
}

fn long_wires(c: &mut Criterion) {
    const NUM_WIRES: usize = 1024;

    let mut rng = StdRng::seed_from_u64(42);
    let layer = random_layer(&mut rng, NUM_WIRES, BBOX);

    c.bench_function("Sweep - long random wires", |b| {
        b.iter(|| {
            let mut verifier = CrossingVerifier::new(&layer);
            black_box(verifier.count_crossings().unwrap());
        })
    });
}

criterion_group!(random, short_wires, long_wires);
criterion_main!(random);
