//! Behaviour of the study session facade against a real catalog.

mod common;

use std::collections::HashSet;

use common::*;
use flashdeck::catalog::{Catalog, ColorTag, Deck, DeckMap};
use flashdeck::session::{Outcome, SessionError, StudyMode, View};

fn words_of(session: &flashdeck::session::StudySession<rand::rngs::StdRng>) -> Vec<String> {
    session
        .state()
        .run()
        .map(|run| run.cards.iter().map(|c| c.word().to_string()).collect())
        .unwrap_or_default()
}

// -- start_study ---------------------------------------------------------------

#[test]
fn starts_in_home() {
    let session = seeded_session(0);
    assert_eq!(session.view(), View::Home);
    assert_eq!(session.deck_name(), None);
    assert_eq!(session.position(), 0);
    assert!(session.current_card().is_none());
}

#[test]
fn start_study_resets_everything() {
    let catalog = make_catalog();
    let mut session = seeded_session(0);
    session
        .start_study(&catalog, "Advanced Vocabulary", StudyMode::Review)
        .unwrap();

    assert_eq!(session.view(), View::Study);
    assert_eq!(session.deck_name(), Some("Advanced Vocabulary"));
    assert_eq!(session.mode(), Some(StudyMode::Review));
    assert_eq!(session.position(), 1);
    assert_eq!(session.total_cards(), 5);
    assert!(!session.is_flipped());
    assert_eq!(session.score().total(), 0);
    assert_eq!(session.current_card().map(|c| c.word()), Some("Eloquent"));
}

#[test]
fn unknown_deck_is_not_found_and_state_unchanged() {
    let catalog = make_catalog();
    let mut session = seeded_session(0);
    session
        .start_study(&catalog, "Grammar Terms", StudyMode::Quiz)
        .unwrap();
    session.flip();
    let before = session.state().clone();

    let err = session
        .start_study(&catalog, "Nope", StudyMode::Review)
        .unwrap_err();
    assert_eq!(
        err,
        SessionError::DeckNotFound {
            name: "Nope".into()
        }
    );
    assert_eq!(session.state(), &before);
}

#[test]
fn empty_deck_cannot_be_studied() {
    let mut decks = DeckMap::new();
    decks.insert(
        "Blank".to_string(),
        Deck::new("Nothing", ColorTag::Blue, Vec::new()),
    );
    decks.insert(
        "Words".to_string(),
        Deck::new("Some", ColorTag::Green, make_cards(&["a", "b"])),
    );
    let catalog = Catalog::new(decks);
    let mut session = seeded_session(0);

    let err = session
        .start_study(&catalog, "Blank", StudyMode::Review)
        .unwrap_err();
    assert_eq!(
        err,
        SessionError::EmptyDeck {
            name: "Blank".into()
        }
    );
    assert_eq!(session.view(), View::Home);

    // A run in progress survives a failed start.
    session.start_study(&catalog, "Words", StudyMode::Quiz).unwrap();
    session.go_next(None);
    let before = session.state().clone();
    assert!(session
        .start_study(&catalog, "Blank", StudyMode::Shuffle)
        .is_err());
    assert_eq!(session.state(), &before);
    assert_eq!(session.position(), 2);
}

// -- navigation ----------------------------------------------------------------

#[test]
fn review_visits_each_position_once() {
    let catalog = catalog_with_custom("Seven", 7);
    let mut session = seeded_session(0);
    session
        .start_study(&catalog, "Seven", StudyMode::Review)
        .unwrap();

    let mut seen = Vec::new();
    while session.view() == View::Study {
        seen.push(session.position());
        session.go_next(None);
    }
    assert_eq!(seen, (1..=7).collect::<Vec<_>>());
    assert_eq!(session.view(), View::Results);
}

#[test]
fn is_last_card_only_on_final_position() {
    let catalog = catalog_with_custom("Two", 2);
    let mut session = seeded_session(0);
    session.start_study(&catalog, "Two", StudyMode::Review).unwrap();
    assert!(!session.is_last_card());
    session.go_next(None);
    assert!(session.is_last_card());
}

#[test]
fn go_prev_at_start_is_noop() {
    let catalog = make_catalog();
    let mut session = seeded_session(0);
    session
        .start_study(&catalog, "Literary Devices", StudyMode::Review)
        .unwrap();
    let before = session.state().clone();
    session.go_prev();
    assert_eq!(session.state(), &before);
}

#[test]
fn go_home_is_idempotent() {
    let catalog = make_catalog();
    let mut session = seeded_session(0);
    session
        .start_study(&catalog, "Literary Devices", StudyMode::Quiz)
        .unwrap();
    session.go_home();
    let once = session.state().clone();
    session.go_home();
    assert_eq!(session.state(), &once);
    assert_eq!(session.view(), View::Home);
    assert_eq!(session.deck_name(), None);
}

#[test]
fn transitions_outside_study_are_ignored() {
    let mut session = seeded_session(0);
    session.flip();
    session.go_next(Some(Outcome::Correct));
    session.go_prev();
    assert_eq!(session.view(), View::Home);
    assert_eq!(session.score().total(), 0);
}

// -- shuffle -------------------------------------------------------------------

#[test]
fn shuffle_is_a_permutation_of_the_deck() {
    let catalog = make_catalog();
    let deck_words: HashSet<String> = catalog
        .get("Advanced Vocabulary")
        .unwrap()
        .cards
        .iter()
        .map(|c| c.word().to_string())
        .collect();

    let mut session = seeded_session(42);
    session
        .start_study(&catalog, "Advanced Vocabulary", StudyMode::Shuffle)
        .unwrap();
    let shuffled = words_of(&session);
    assert_eq!(shuffled.len(), deck_words.len());
    assert_eq!(shuffled.into_iter().collect::<HashSet<_>>(), deck_words);
}

#[test]
fn shuffle_orders_vary_across_starts() {
    let catalog = catalog_with_custom("Big", 10);
    let mut session = seeded_session(7);
    let mut orders = HashSet::new();
    for _ in 0..20 {
        session.start_study(&catalog, "Big", StudyMode::Shuffle).unwrap();
        orders.insert(words_of(&session));
    }
    assert!(orders.len() > 1, "20 shuffles of 10 cards all matched");
}

#[test]
fn review_keeps_deck_order() {
    let catalog = catalog_with_custom("Big", 10);
    let mut session = seeded_session(7);
    session.start_study(&catalog, "Big", StudyMode::Review).unwrap();
    let expected: Vec<String> = (0..10).map(|i| format!("w{}", i)).collect();
    assert_eq!(words_of(&session), expected);
}

#[test]
fn restart_reshuffles_and_resets() {
    let catalog = catalog_with_custom("Big", 10);
    let mut session = seeded_session(3);
    session.start_study(&catalog, "Big", StudyMode::Shuffle).unwrap();
    let first = words_of(&session);
    session.go_next(None);
    session.flip();

    let mut orders = HashSet::from([first]);
    for _ in 0..10 {
        session.restart(&catalog).unwrap();
        assert_eq!(session.position(), 1);
        assert!(!session.is_flipped());
        assert_eq!(session.mode(), Some(StudyMode::Shuffle));
        orders.insert(words_of(&session));
    }
    assert!(orders.len() > 1);
}

#[test]
fn restart_at_home_does_nothing() {
    let catalog = make_catalog();
    let mut session = seeded_session(0);
    session.restart(&catalog).unwrap();
    assert_eq!(session.view(), View::Home);
}

#[test]
fn restart_of_deleted_deck_fails() {
    let mut catalog = catalog_with_custom("Temp", 2);
    let mut session = seeded_session(0);
    session.start_study(&catalog, "Temp", StudyMode::Review).unwrap();
    catalog.delete_deck("Temp");
    assert_eq!(
        session.restart(&catalog),
        Err(SessionError::DeckNotFound {
            name: "Temp".into()
        })
    );
}

// -- snapshot ------------------------------------------------------------------

#[test]
fn session_keeps_its_snapshot_after_deck_deleted() {
    let mut catalog = catalog_with_custom("Temp", 3);
    let mut session = seeded_session(0);
    session.start_study(&catalog, "Temp", StudyMode::Review).unwrap();
    catalog.delete_deck("Temp");

    assert_eq!(session.total_cards(), 3);
    session.go_next(None);
    assert_eq!(session.current_card().map(|c| c.word()), Some("w1"));
}

// -- quiz scoring --------------------------------------------------------------

#[test]
fn quiz_score_counts_outcome_calls_only() {
    let catalog = catalog_with_custom("Six", 6);
    let mut session = seeded_session(0);
    session.start_study(&catalog, "Six", StudyMode::Quiz).unwrap();

    let plan = [
        Some(Outcome::Correct),
        None,
        Some(Outcome::Incorrect),
        Some(Outcome::Correct),
        None,
        Some(Outcome::Correct),
    ];
    for outcome in plan {
        session.flip();
        session.go_next(outcome);
    }

    let score = session.score();
    assert_eq!(session.view(), View::Results);
    assert_eq!(score.correct, 3);
    assert_eq!(score.incorrect, 1);
    assert_eq!(score.total(), 4);
    assert_eq!(score.rounded_percentage(), 75);
}

#[test]
fn quiz_without_grades_scores_zero_percent() {
    let catalog = make_catalog();
    let mut session = seeded_session(0);
    session
        .start_study(&catalog, "Literary Devices", StudyMode::Quiz)
        .unwrap();
    for _ in 0..5 {
        session.go_next(None);
    }
    assert_eq!(session.view(), View::Results);
    assert_eq!(session.score().rounded_percentage(), 0);
}

#[test]
fn grammar_terms_quiz_all_correct() {
    let catalog = make_catalog();
    let mut session = seeded_session(0);
    session
        .start_study(&catalog, "Grammar Terms", StudyMode::Quiz)
        .unwrap();

    for _ in 0..5 {
        session.flip();
        assert!(session.is_flipped());
        session.go_next(Some(Outcome::Correct));
    }

    assert_eq!(session.view(), View::Results);
    assert_eq!(session.score().correct, 5);
    assert_eq!(session.score().incorrect, 0);
    assert_eq!(session.score().rounded_percentage(), 100);
}
