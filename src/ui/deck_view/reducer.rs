use crate::mvi::Reducer;
use crate::ui::deck_view::intent::DeckViewIntent;
use crate::ui::deck_view::state::DeckViewState;

pub struct DeckViewReducer;

impl Reducer for DeckViewReducer {
    type State = DeckViewState;
    type Intent = DeckViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeckViewIntent::Open { deck_name } => DeckViewState::Visible {
                deck_name,
                scroll: 0,
            },
            DeckViewIntent::Close => DeckViewState::Hidden,
            DeckViewIntent::Switch { deck_name } => match state {
                DeckViewState::Visible { .. } => DeckViewState::Visible {
                    deck_name,
                    scroll: 0,
                },
                DeckViewState::Hidden => DeckViewState::Hidden,
            },
            DeckViewIntent::ScrollDown { last } => match state {
                DeckViewState::Visible { deck_name, scroll } => DeckViewState::Visible {
                    deck_name,
                    scroll: (scroll + 1).min(last),
                },
                DeckViewState::Hidden => DeckViewState::Hidden,
            },
            DeckViewIntent::ScrollUp => match state {
                DeckViewState::Visible { deck_name, scroll } => DeckViewState::Visible {
                    deck_name,
                    scroll: scroll.saturating_sub(1),
                },
                DeckViewState::Hidden => DeckViewState::Hidden,
            },
        }
    }
}
