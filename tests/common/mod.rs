#![allow(dead_code)]

use flashdeck::catalog::{Card, Catalog, ColorTag};
use flashdeck::session::StudySession;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn make_catalog() -> Catalog {
    Catalog::with_builtin_decks()
}

pub fn seeded_session(seed: u64) -> StudySession<StdRng> {
    StudySession::with_rng(StdRng::seed_from_u64(seed))
}

pub fn make_cards(words: &[&str]) -> Vec<Card> {
    words
        .iter()
        .map(|word| Card::new(*word, format!("definition of {}", word), ""))
        .collect()
}

/// Catalog holding one custom deck of `n` cards named "w0".."w{n-1}".
pub fn catalog_with_custom(name: &str, n: usize) -> Catalog {
    let mut catalog = make_catalog();
    let words: Vec<String> = (0..n).map(|i| format!("w{}", i)).collect();
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    catalog
        .add_deck(name, "Custom", ColorTag::Orange, make_cards(&refs))
        .unwrap();
    catalog
}
