use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::{Outcome, StudyMode, View};
use crate::ui::app::App;
use crate::ui::author::AuthorIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    if app.author_dialog().is_visible() {
        handle_author_key(app, key);
        return;
    }
    if app.deck_view().is_visible() {
        handle_deck_view_key(app, key);
        return;
    }

    match app.view() {
        View::Home => handle_home_key(app, key),
        View::Study => handle_study_key(app, key),
        View::Results => handle_results_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Enter => app.start_selected(None),
        KeyCode::Char('r') => app.start_selected(Some(StudyMode::Review)),
        KeyCode::Char('q') => app.start_selected(Some(StudyMode::Quiz)),
        KeyCode::Char('s') => app.start_selected(Some(StudyMode::Shuffle)),
        KeyCode::Char('n') => app.open_author_dialog(),
        KeyCode::Char('e') => app.open_deck_view(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_study_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('f') => app.flip(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => app.next_card(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_card(),
        KeyCode::Char('y') => app.grade(Outcome::Correct),
        KeyCode::Char('x') => app.grade(Outcome::Incorrect),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => app.restart(),
        KeyCode::Esc | KeyCode::Backspace => app.go_home(),
        _ => {}
    }
}

fn handle_deck_view_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('e') | KeyCode::Char('q') => app.close_deck_view(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_deck_view(true),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_deck_view(false),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.cycle_deck_view(true),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.cycle_deck_view(false),
        KeyCode::Char('d') => app.delete_viewed_deck(),
        _ => {}
    }
}

fn handle_author_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => app.save_author_dialog(),
            KeyCode::Char('n') => app.dispatch_author(AuthorIntent::AddCard),
            KeyCode::Char('d') => app.dispatch_author(AuthorIntent::RemoveCard),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.close_author_dialog(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
            app.dispatch_author(AuthorIntent::FocusNext)
        }
        KeyCode::BackTab | KeyCode::Up => app.dispatch_author(AuthorIntent::FocusPrev),
        KeyCode::Left => app.dispatch_author(AuthorIntent::CycleColor { forward: false }),
        KeyCode::Right => app.dispatch_author(AuthorIntent::CycleColor { forward: true }),
        KeyCode::Backspace => app.dispatch_author(AuthorIntent::Backspace),
        KeyCode::Char(ch) => app.dispatch_author(AuthorIntent::Insert { ch }),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::session::StudySession;
    use crossterm::event::KeyEventState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_app() -> App {
        App::with_session(
            Catalog::with_builtin_decks(),
            StudyMode::Review,
            StudySession::with_rng(StdRng::seed_from_u64(3)),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn quiz_round_through_keys() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert_eq!(app.session().deck_name(), Some("Grammar Terms"));

        for _ in 0..5 {
            handle_key(&mut app, press(KeyCode::Char(' ')));
            handle_key(&mut app, press(KeyCode::Char('y')));
        }
        assert_eq!(app.view(), View::Results);
        assert_eq!(app.session().score().rounded_percentage(), 100);

        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.view(), View::Study);
        assert_eq!(app.session().score().total(), 0);

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.view(), View::Home);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut key = press(KeyCode::Esc);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }

    #[test]
    fn typing_in_dialog_does_not_trigger_home_keys() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('n')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        handle_key(&mut app, press(KeyCode::Char('d')));
        assert_eq!(app.view(), View::Home);
        assert_eq!(app.author_dialog().draft().map(|d| d.name.as_str()), Some("qd"));

        handle_key(&mut app, ctrl('n'));
        assert_eq!(app.author_dialog().draft().map(|d| d.cards.len()), Some(4));

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.author_dialog().is_visible());
    }

    #[test]
    fn deck_view_takes_keys_until_closed() {
        let mut app = make_app();
        app.open_author_dialog();
        for ch in "Mine".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        for _ in 0..3 {
            handle_key(&mut app, press(KeyCode::Tab));
        }
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Tab));
        handle_key(&mut app, press(KeyCode::Char('b')));
        handle_key(&mut app, ctrl('s'));
        assert!(app.catalog().is_custom("Mine"));

        handle_key(&mut app, press(KeyCode::Char('e')));
        assert_eq!(app.deck_view().deck_name(), Some("Mine"));
        // 'q' closes the panel instead of starting a quiz.
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.deck_view().is_visible());
        assert_eq!(app.view(), View::Home);

        handle_key(&mut app, press(KeyCode::Char('e')));
        handle_key(&mut app, press(KeyCode::Char('d')));
        assert!(!app.catalog().contains("Mine"));
        assert!(!app.deck_view().is_visible());
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('n')));
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit());
    }
}
