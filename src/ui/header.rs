use crate::session::{StudySession, View};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, session: &StudySession) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "📚 flashdeck",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ];

        match (session.view(), session.deck_name(), session.mode()) {
            (View::Home, _, _) | (_, None, _) | (_, _, None) => {
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled("Choose your deck", text_style));
            }
            (view, Some(deck), Some(mode)) => {
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(deck.to_string(), text_style));
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(mode.label(), text_style));
                spans.push(Span::styled("  │  ", separator_style));
                let progress = if view == View::Results {
                    "Complete".to_string()
                } else {
                    format!("Card {} / {}", session.position(), session.total_cards())
                };
                spans.push(Span::styled(progress, text_style));
            }
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
