use crate::catalog::{CardDraft, DeckDraft, MAX_DRAFT_CARDS};
use crate::mvi::Reducer;
use crate::ui::author::intent::AuthorIntent;
use crate::ui::author::state::{AuthorDialogState, AuthorField};

pub struct AuthorReducer;

impl Reducer for AuthorReducer {
    type State = AuthorDialogState;
    type Intent = AuthorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthorIntent::Open => AuthorDialogState::Visible {
                draft: DeckDraft::default(),
                focused: 0,
                error: None,
            },
            AuthorIntent::Close => AuthorDialogState::Hidden,
            AuthorIntent::FocusNext => match state {
                AuthorDialogState::Visible { draft, focused, error } => {
                    let count = AuthorField::count(draft.cards.len());
                    let focused = if focused + 1 >= count { 0 } else { focused + 1 };
                    AuthorDialogState::Visible { draft, focused, error }
                }
                other => other,
            },
            AuthorIntent::FocusPrev => match state {
                AuthorDialogState::Visible { draft, focused, error } => {
                    let count = AuthorField::count(draft.cards.len());
                    let focused = if focused == 0 {
                        count.saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    AuthorDialogState::Visible { draft, focused, error }
                }
                other => other,
            },
            AuthorIntent::Insert { ch } => match state {
                AuthorDialogState::Visible {
                    mut draft, focused, ..
                } => {
                    if let Some(text) = AuthorField::from_index(focused).text_mut(&mut draft) {
                        text.push(ch);
                    }
                    AuthorDialogState::Visible {
                        draft,
                        focused,
                        error: None,
                    }
                }
                other => other,
            },
            AuthorIntent::Backspace => match state {
                AuthorDialogState::Visible {
                    mut draft, focused, ..
                } => {
                    if let Some(text) = AuthorField::from_index(focused).text_mut(&mut draft) {
                        text.pop();
                    }
                    AuthorDialogState::Visible {
                        draft,
                        focused,
                        error: None,
                    }
                }
                other => other,
            },
            AuthorIntent::CycleColor { forward } => match state {
                AuthorDialogState::Visible {
                    mut draft,
                    focused,
                    error,
                } if AuthorField::from_index(focused) == AuthorField::Color => {
                    draft.color = if forward {
                        draft.color.next()
                    } else {
                        draft.color.prev()
                    };
                    AuthorDialogState::Visible {
                        draft,
                        focused,
                        error,
                    }
                }
                other => other,
            },
            AuthorIntent::AddCard => match state {
                AuthorDialogState::Visible {
                    mut draft,
                    focused,
                    error,
                } => {
                    if draft.cards.len() >= MAX_DRAFT_CARDS {
                        return AuthorDialogState::Visible {
                            draft,
                            focused,
                            error,
                        };
                    }
                    draft.cards.push(CardDraft::default());
                    let focused = AuthorField::Word(draft.cards.len() - 1).index();
                    AuthorDialogState::Visible {
                        draft,
                        focused,
                        error: None,
                    }
                }
                other => other,
            },
            AuthorIntent::RemoveCard => match state {
                AuthorDialogState::Visible {
                    mut draft,
                    focused,
                    error,
                } => {
                    if draft.cards.len() > 1 {
                        draft.cards.pop();
                    }
                    let last = AuthorField::count(draft.cards.len()) - 1;
                    AuthorDialogState::Visible {
                        draft,
                        focused: focused.min(last),
                        error,
                    }
                }
                other => other,
            },
            AuthorIntent::Rejected { message } => match state {
                AuthorDialogState::Visible { draft, focused, .. } => AuthorDialogState::Visible {
                    draft,
                    focused,
                    error: Some(message),
                },
                other => other,
            },
        }
    }
}
