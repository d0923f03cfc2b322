use flashdeck::catalog::{ColorTag, MAX_DRAFT_CARDS};
use flashdeck::mvi::Reducer;
use flashdeck::ui::author::{AuthorDialogState, AuthorField, AuthorIntent, AuthorReducer};

fn open() -> AuthorDialogState {
    AuthorReducer::reduce(AuthorDialogState::Hidden, AuthorIntent::Open)
}

fn apply(state: AuthorDialogState, intents: Vec<AuthorIntent>) -> AuthorDialogState {
    intents.into_iter().fold(state, AuthorReducer::reduce)
}

fn type_text(state: AuthorDialogState, text: &str) -> AuthorDialogState {
    apply(
        state,
        text.chars().map(|ch| AuthorIntent::Insert { ch }).collect(),
    )
}

fn error_of(state: &AuthorDialogState) -> Option<&str> {
    match state {
        AuthorDialogState::Visible { error, .. } => error.as_deref(),
        AuthorDialogState::Hidden => None,
    }
}

#[test]
fn open_shows_blank_draft_focused_on_name() {
    let state = open();
    assert!(state.is_visible());
    assert_eq!(state.focused_field(), Some(AuthorField::Name));
    assert_eq!(state.draft().map(|d| d.cards.len()), Some(3));
}

#[test]
fn close_hides_dialog() {
    let state = AuthorReducer::reduce(open(), AuthorIntent::Close);
    assert_eq!(state, AuthorDialogState::Hidden);
}

#[test]
fn intents_on_hidden_dialog_are_ignored() {
    for intent in [
        AuthorIntent::FocusNext,
        AuthorIntent::Insert { ch: 'a' },
        AuthorIntent::AddCard,
        AuthorIntent::Rejected {
            message: "nope".into(),
        },
    ] {
        let state = AuthorReducer::reduce(AuthorDialogState::Hidden, intent);
        assert_eq!(state, AuthorDialogState::Hidden);
    }
}

#[test]
fn typing_fills_focused_field() {
    let state = type_text(open(), "Bio");
    let state = AuthorReducer::reduce(state, AuthorIntent::FocusNext);
    let state = type_text(state, "Science");
    let state = AuthorReducer::reduce(state, AuthorIntent::Backspace);

    let draft = state.draft().unwrap();
    assert_eq!(draft.name, "Bio");
    assert_eq!(draft.category, "Scienc");
}

#[test]
fn typing_on_color_field_is_ignored() {
    let state = apply(open(), vec![AuthorIntent::FocusNext, AuthorIntent::FocusNext]);
    assert_eq!(state.focused_field(), Some(AuthorField::Color));
    let state = type_text(state, "red");
    let draft = state.draft().unwrap();
    assert!(draft.name.is_empty());
    assert_eq!(draft.color, ColorTag::Blue);
}

#[test]
fn cycle_color_only_on_color_field() {
    let state = AuthorReducer::reduce(open(), AuthorIntent::CycleColor { forward: true });
    assert_eq!(state.draft().unwrap().color, ColorTag::Blue);

    let state = apply(
        open(),
        vec![
            AuthorIntent::FocusNext,
            AuthorIntent::FocusNext,
            AuthorIntent::CycleColor { forward: true },
        ],
    );
    assert_eq!(state.draft().unwrap().color, ColorTag::Purple);

    let state = AuthorReducer::reduce(state, AuthorIntent::CycleColor { forward: false });
    let state = AuthorReducer::reduce(state, AuthorIntent::CycleColor { forward: false });
    assert_eq!(state.draft().unwrap().color, ColorTag::Pink);
}

#[test]
fn focus_wraps_around() {
    let state = AuthorReducer::reduce(open(), AuthorIntent::FocusPrev);
    assert_eq!(state.focused_field(), Some(AuthorField::Example(2)));
    let state = AuthorReducer::reduce(state, AuthorIntent::FocusNext);
    assert_eq!(state.focused_field(), Some(AuthorField::Name));
}

#[test]
fn add_card_focuses_new_row_and_caps() {
    let state = AuthorReducer::reduce(open(), AuthorIntent::AddCard);
    assert_eq!(state.draft().unwrap().cards.len(), 4);
    assert_eq!(state.focused_field(), Some(AuthorField::Word(3)));

    let state = apply(state, vec![AuthorIntent::AddCard; MAX_DRAFT_CARDS]);
    assert_eq!(state.draft().unwrap().cards.len(), MAX_DRAFT_CARDS);
}

#[test]
fn remove_card_keeps_one_row_and_clamps_focus() {
    let state = AuthorReducer::reduce(open(), AuthorIntent::FocusPrev);
    let state = AuthorReducer::reduce(state, AuthorIntent::RemoveCard);
    assert_eq!(state.draft().unwrap().cards.len(), 2);
    assert_eq!(state.focused_field(), Some(AuthorField::Example(1)));

    let state = apply(state, vec![AuthorIntent::RemoveCard; 5]);
    assert_eq!(state.draft().unwrap().cards.len(), 1);
}

#[test]
fn rejection_shows_error_until_next_edit() {
    let state = AuthorReducer::reduce(
        open(),
        AuthorIntent::Rejected {
            message: "Please provide a deck name and at least one complete card.".into(),
        },
    );
    assert!(error_of(&state).is_some());
    assert!(state.is_visible());

    let state = type_text(state, "x");
    assert_eq!(error_of(&state), None);
}
