use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::Catalog;
use crate::ui::deck_view::state::DeckViewState;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{deck_color, ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

pub fn render_deck_view(frame: &mut Frame, area: Rect, state: &DeckViewState, catalog: &Catalog) {
    let DeckViewState::Visible { deck_name, scroll } = state else {
        return;
    };
    let Some(deck) = catalog.get(deck_name) else {
        return;
    };

    let custom: Vec<&str> = catalog.custom_decks().map(|(name, _)| name).collect();
    let position = custom
        .iter()
        .position(|name| *name == deck_name.as_str())
        .map_or(0, |index| index + 1);
    let label = Style::default().fg(MUTED_TEXT);

    let mut lines = vec![
        Line::from(Span::styled(
            deck_name.clone(),
            Style::default()
                .fg(deck_color(deck.color))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Category: ", label),
            Span::styled(deck.category.clone(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("Cards: ", label),
            Span::styled(deck.len().to_string(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(Span::styled(
            format!("Custom deck {} of {}", position, custom.len()),
            label,
        )),
        Line::from(""),
    ];

    for (index, card) in deck.cards.iter().enumerate().skip(*scroll) {
        lines.push(Line::from(Span::styled(
            format!("Card {}: {}", index + 1, card.word()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled("  Definition: ", label),
            Span::styled(card.definition().to_string(), Style::default().fg(HEADER_TEXT)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  Example: ", label),
            Span::styled(
                card.example().to_string(),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let popup = centered_rect(70, 80, area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" Custom Decks ", Style::default().fg(ACCENT)))
        .title_bottom(Span::styled(
            " ↑↓: Scroll  ←→: Other deck  D: Delete  Esc: Close ",
            label,
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup,
    );
}
