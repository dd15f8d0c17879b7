use criterion::{criterion_group, criterion_main, Criterion};
use bananagrams_solver::{Dictionary, LetterInventory, LetterSet};

const WORDFILE: &str = "wordlists/words.txt";

fn bench_words_formable(c: &mut Criterion, name: &str, letters: &str, required: &str) {
    let dictionary = Dictionary::from_file(WORDFILE).unwrap();
    let hand: LetterInventory = letters.chars().collect();
    let required = LetterSet::from(required);
    c.bench_function(&format!("dictionary.words_formable.{}", name), |b| {
        b.iter(|| dictionary.words_formable(&hand, required))
    });
}

fn bench_from_file(c: &mut Criterion) {
    c.bench_function("dictionary.from_file", |b| {
        b.iter(|| Dictionary::from_file(WORDFILE).unwrap())
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_words_formable(c, "1", "STOATER", "");
    bench_words_formable(c, "2", "STOATER", "T");
    bench_words_formable(c, "3", "BANANAGRAMS", "");
    bench_from_file(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_main!(benches);
