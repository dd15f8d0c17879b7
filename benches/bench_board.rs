use criterion::{criterion_group, criterion_main, Criterion};
use std::convert::TryFrom;
use bananagrams_solver::{Board, Dictionary, LetterInventory, Search, Solver, Weights, WordRef};

const WORDFILE: &str = "wordlists/words.txt";

/// A small crossword to search from.
fn board(dictionary: &Dictionary) -> Board {
    let mut board = Board::new(dictionary);
    board.add_first_word("STOAT").unwrap();
    board.add_word("TAME", &WordRef::new("STOAT", 1), 1, 0).unwrap();
    board
}

fn bench_legal_moves(c: &mut Criterion, name: &str, letters: &str) {
    let dictionary = Dictionary::from_file(WORDFILE).unwrap();
    let board = board(&dictionary);
    let hand = LetterInventory::try_from(letters).unwrap();
    c.bench_function(&format!("board.legal_moves.{}", name), |b| {
        b.iter(|| board.legal_moves(&hand))
    });
}

fn bench_find_move(c: &mut Criterion, name: &str, letters: &str, depth: usize) {
    let dictionary = Dictionary::from_file(WORDFILE).unwrap();
    let board = board(&dictionary);
    let hand = LetterInventory::try_from(letters).unwrap();
    let search = Search::new(depth, Weights::default());
    c.bench_function(&format!("search.find_move.{}", name), |b| {
        b.iter(|| search.find_move(&board, &hand).unwrap())
    });
}

fn bench_build(c: &mut Criterion, name: &str, letters: &str) {
    let dictionary = Dictionary::from_file(WORDFILE).unwrap();
    let solver = Solver::new(&dictionary);
    let hand = LetterInventory::try_from(letters).unwrap();
    c.bench_function(&format!("solver.build.{}", name), |b| {
        b.iter(|| solver.build(hand.clone()).unwrap())
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_legal_moves(c, "1", "r e d");
    bench_legal_moves(c, "2", "p l a n e t s");
    bench_find_move(c, "1", "r e d", 1);
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_find_move(c, "2", "p l a n e t s", 1);
    bench_find_move(c, "3", "r e d", 2);
    bench_build(c, "1", "b a n a n a g r a m s");
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
