use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use triplets::transformers::{MarkupArtifacts, Normalizer, Transform};
use triplets::triplets::{find_all_triplets, Generate, Nsp, SentenceSlot, Sop, TripletFinder};

const NB_SENTENCES: usize = 10_000;

fn document() -> Vec<SentenceSlot> {
    let mut rng = StdRng::seed_from_u64(0);
    let lengths = Normal::new(60.0, 25.0).unwrap();
    (0..NB_SENTENCES)
        .map(|_| {
            if rng.gen_bool(0.05) {
                SentenceSlot::Gap
            } else {
                let l: f64 = lengths.sample(&mut rng);
                SentenceSlot::from("ж".repeat(l.max(1.0) as usize))
            }
        })
        .collect()
}

pub fn collect(c: &mut Criterion) {
    let doc = document();
    let finder = TripletFinder::default();
    c.bench_function("find_all_triplets", |b| {
        b.iter(|| find_all_triplets(&finder, black_box(&doc)))
    });
}

pub fn generate(c: &mut Criterion) {
    let doc = document();
    let sop = Sop::default();
    let nsp = Nsp::default();
    c.bench_function("sop", |b| b.iter(|| sop.generate(black_box(doc.clone()))));
    c.bench_function("nsp", |b| b.iter(|| nsp.generate(black_box(doc.clone()))));
}

pub fn normalize(c: &mut Criterion) {
    let n = Normalizer::sentence(MarkupArtifacts::default());
    let sentence = "<p>Бұл&nbsp;сөйлем [12] https://example.com сілтемесі бар 😀 мәтін.Келесі</p>";
    c.bench_function("normalize_sentence", |b| {
        b.iter(|| n.transform_own(black_box(sentence.to_string())))
    });
}

criterion_group!(benches, collect, generate, normalize);
criterion_main!(benches);
