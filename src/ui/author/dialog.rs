use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::author::state::{AuthorDialogState, AuthorField};
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    deck_color, ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR,
};

const LABEL_WIDTH: usize = 12;
const CURSOR: &str = "▏";

pub fn render_author_dialog(frame: &mut Frame, area: Rect, state: &AuthorDialogState) {
    let AuthorDialogState::Visible {
        draft,
        focused,
        error,
    } = state
    else {
        return;
    };
    let focused = AuthorField::from_index(*focused);

    let mut lines: Vec<Line> = Vec::new();
    let mut focused_line = 0;

    let mut push_field = |lines: &mut Vec<Line<'static>>, field: AuthorField, label: &str, value: Vec<Span<'static>>| {
        let is_focused = field == focused;
        if is_focused {
            focused_line = lines.len();
        }
        let mut spans = vec![Span::styled(
            format!(" {:<width$}", label, width = LABEL_WIDTH),
            Style::default().fg(MUTED_TEXT),
        )];
        spans.extend(value);
        let mut line = Line::from(spans);
        if is_focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    };

    let text = |value: &str, field: AuthorField| -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled(
            value.to_string(),
            Style::default().fg(HEADER_TEXT),
        )];
        if field == focused {
            spans.push(Span::styled(CURSOR, Style::default().fg(ACCENT)));
        }
        spans
    };

    push_field(&mut lines, AuthorField::Name, "Deck name", text(&draft.name, AuthorField::Name));
    push_field(
        &mut lines,
        AuthorField::Category,
        "Category",
        text(&draft.category, AuthorField::Category),
    );
    push_field(
        &mut lines,
        AuthorField::Color,
        "Color",
        vec![
            Span::raw("◀ "),
            Span::styled(
                draft.color.as_str(),
                Style::default()
                    .fg(deck_color(draft.color))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ▶"),
        ],
    );

    for (row, card) in draft.cards.iter().enumerate() {
        lines.push(Line::from(""));
        let marker = if card.is_complete() { "✓" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(" Card {} {}", row + 1, marker),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        push_field(
            &mut lines,
            AuthorField::Word(row),
            "  Word",
            text(&card.word, AuthorField::Word(row)),
        );
        push_field(
            &mut lines,
            AuthorField::Definition(row),
            "  Definition",
            text(&card.definition, AuthorField::Definition(row)),
        );
        push_field(
            &mut lines,
            AuthorField::Example(row),
            "  Example",
            text(&card.example, AuthorField::Example(row)),
        );
    }

    let popup = centered_rect(70, 80, area);
    // Borders plus the error and hint rows at the bottom.
    let reserved = 2 + 3;
    let visible_rows = (popup.height as usize).saturating_sub(reserved).max(1);
    let scroll = (focused_line + 1).saturating_sub(visible_rows);

    let mut body: Vec<Line> = lines.into_iter().skip(scroll).take(visible_rows).collect();
    while body.len() < visible_rows {
        body.push(Line::from(""));
    }
    body.push(Line::from(""));
    body.push(match error {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(STATUS_ERROR),
        )),
        None => Line::from(""),
    });
    body.push(Line::from(Span::styled(
        " Tab/↑↓: Move  ←→: Color  Ctrl+N: Add card  Ctrl+D: Remove card  Ctrl+S: Save  Esc: Cancel",
        Style::default().fg(MUTED_TEXT),
    )));

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" New Deck ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(body).block(block), popup);
}
