// Criterion benchmarks for tilawa-engine.
//
// Run:
//   cargo bench -p tilawa-engine

use criterion::{Criterion, criterion_group, criterion_main};
use tilawa_engine::{Verifier, VerifyOptions, normalize, variants};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Al-Fatiha in Quranic orthography, one string per ayah.
const FATIHA: [&str; 7] = [
    "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ",
    "ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ",
    "ٱلرَّحْمَٰنِ ٱلرَّحِيمِ",
    "مَٰلِكِ يَوْمِ ٱلدِّينِ",
    "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
    "ٱهْدِنَا ٱلصِّرَٰطَ ٱلْمُسْتَقِيمَ",
    "صِرَٰطَ ٱلَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ ٱلْمَغْضُوبِ عَلَيْهِمْ وَلَا ٱلضَّآلِّينَ",
];

/// A plausible recognizer transcript of Al-Fatiha: no diacritics, a skipped
/// word and a couple of misheard ones.
const FATIHA_TRANSCRIPT: &str = "بسم الله الرحمن الرحيم الحمد لله رب العالمين \
     الرحمن الرحيم مالك يوم الدين اياك نعبد واياك نستعين اهدنا الصراط المستقين \
     صراط الذين انعمت عليهم غير المغضوب عليهم ولا الضالين";

fn fatiha_words() -> Vec<&'static str> {
    FATIHA.iter().flat_map(|a| a.split_whitespace()).collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Normalize every ayah of Al-Fatiha.
fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_fatiha", |b| {
        b.iter(|| {
            for ayah in &FATIHA {
                std::hint::black_box(normalize(ayah));
            }
        });
    });
}

/// Generate variants for every normalized word of Al-Fatiha.
fn bench_variants(c: &mut Criterion) {
    let words: Vec<String> = fatiha_words().into_iter().map(normalize).collect();

    c.bench_function("variants_fatiha_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(variants(word));
            }
        });
    });
}

/// Verify a single ayah.
fn bench_verify_ayah(c: &mut Criterion) {
    let verifier = Verifier::new();
    let expected: Vec<&str> = FATIHA[0].split_whitespace().collect();

    c.bench_function("verify_bismillah", |b| {
        b.iter(|| std::hint::black_box(verifier.verify(&expected, "بسم الله الرحمن الرحيم")));
    });
}

/// Verify the whole surah against a noisy transcript.
fn bench_verify_surah(c: &mut Criterion) {
    let verifier = Verifier::new();
    let expected = fatiha_words();

    c.bench_function("verify_fatiha", |b| {
        b.iter(|| std::hint::black_box(verifier.verify(&expected, FATIHA_TRANSCRIPT)));
    });

    let traced = Verifier::with_options(VerifyOptions {
        collect_trace: true,
    });
    c.bench_function("verify_fatiha_traced", |b| {
        b.iter(|| std::hint::black_box(traced.verify(&expected, FATIHA_TRANSCRIPT)));
    });
}

/// Verify a long passage (Al-Fatiha repeated) to exercise the O(n*m) table.
fn bench_verify_long_passage(c: &mut Criterion) {
    let verifier = Verifier::new();
    let expected: Vec<&str> = std::iter::repeat_n(fatiha_words(), 8).flatten().collect();
    let transcript = vec![FATIHA_TRANSCRIPT; 8].join(" ");

    c.bench_function("verify_fatiha_x8", |b| {
        b.iter(|| std::hint::black_box(verifier.verify(&expected, &transcript)));
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_variants,
    bench_verify_ayah,
    bench_verify_surah,
    bench_verify_long_passage,
);
criterion_main!(benches);
