use crate::session::{StudyMode, View};
use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for whatever currently has input focus.
    pub fn hints(app: &App) -> &'static str {
        if app.author_dialog().is_visible() {
            return " Fill in the form │ Ctrl+S: Save │ Esc: Cancel";
        }
        if app.deck_view().is_visible() {
            return " ↑↓: Scroll │ ←→: Other deck │ D: Delete deck │ Esc: Close";
        }
        let session = app.session();
        match session.view() {
            View::Home => {
                " ↑↓: Select │ Enter: Study │ R: Review │ Q: Quiz │ S: Shuffle │ N: New │ E: Custom decks │ D: Delete │ Esc: Quit"
            }
            View::Study if session.mode() == Some(StudyMode::Quiz) && session.is_flipped() => {
                " Y: Correct │ X: Incorrect │ ←: Previous │ Space: Flip │ Esc: Back to decks"
            }
            View::Study if session.is_last_card() => {
                " Space: Flip │ ←: Previous │ →: Finish │ Esc: Back to decks"
            }
            View::Study => " Space: Flip │ ←: Previous │ →: Next │ Esc: Back to decks",
            View::Results => " Enter: Study again │ Esc: Back to decks",
        }
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(app);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
