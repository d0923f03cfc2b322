use crate::catalog::Catalog;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tracing::info;

pub fn run(catalog: Catalog, config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new(catalog, config.study.default_mode);
    let events = EventHandler::new(tick_rate);
    info!(decks = app.catalog().len(), "Terminal front-end started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next()? {
            AppEvent::Key(key) => handle_key(&mut app, key),
            AppEvent::Redraw => {}
        }
    }

    drop(guard);
    info!("Terminal front-end stopped");
    Ok(())
}
