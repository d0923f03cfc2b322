use crate::mvi::Reducer;
use crate::session::intent::SessionIntent;
use crate::session::state::{SessionState, StudyRun};

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::Start {
                deck_name,
                mode,
                cards,
            } => {
                if cards.is_empty() {
                    return state;
                }
                SessionState::Study(StudyRun::new(deck_name, mode, cards))
            }
            SessionIntent::Flip => match state {
                SessionState::Study(mut run) => {
                    run.flipped = !run.flipped;
                    SessionState::Study(run)
                }
                other => other,
            },
            SessionIntent::Next { outcome } => match state {
                SessionState::Study(mut run) => {
                    if let Some(outcome) = outcome {
                        run.score.record(outcome);
                    }
                    if run.is_last_card() {
                        SessionState::Results(run)
                    } else {
                        run.position += 1;
                        run.flipped = false;
                        SessionState::Study(run)
                    }
                }
                other => other,
            },
            SessionIntent::Prev => match state {
                SessionState::Study(mut run) if run.position > 0 => {
                    run.position -= 1;
                    run.flipped = false;
                    SessionState::Study(run)
                }
                other => other,
            },
            SessionIntent::Home => SessionState::Home,
        }
    }
}
