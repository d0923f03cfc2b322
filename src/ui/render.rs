use crate::catalog::Card;
use crate::session::{StudyMode, StudySession, View};
use crate::ui::app::{App, NoticeLevel};
use crate::ui::author::render_author_dialog;
use crate::ui::deck_view::render_deck_view;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_status};
use crate::ui::theme::{
    deck_color, ACCENT, ACTIVE_HIGHLIGHT, CUSTOM_BADGE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let (content, status) = split_status(body);

    frame.render_widget(Header::new().widget(app.session()), header);
    frame.render_widget(Clear, body);
    match app.view() {
        View::Home => draw_home(frame, app, content),
        View::Study => draw_study(frame, app, content),
        View::Results => draw_results(frame, app.session(), content),
    }
    if let Some(notice) = app.notice() {
        let color = match notice.level {
            NoticeLevel::Info => STATUS_OK,
            NoticeLevel::Error => STATUS_ERROR,
        };
        frame.render_widget(
            Paragraph::new(format!(" {}", notice.message)).style(Style::default().fg(color)),
            status,
        );
    }
    frame.render_widget(Footer::new().widget(app, footer), footer);

    render_deck_view(frame, body, app.deck_view(), app.catalog());
    render_author_dialog(frame, body, app.author_dialog());
}

fn draw_home(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let catalog = app.catalog();
    let items: Vec<ListItem> = catalog
        .list_decks()
        .into_iter()
        .map(|(name, deck)| {
            let mut title = vec![Span::styled(
                name.to_string(),
                Style::default()
                    .fg(deck_color(deck.color))
                    .add_modifier(Modifier::BOLD),
            )];
            if catalog.is_custom(name) {
                title.push(Span::styled("  ★ CUSTOM", Style::default().fg(CUSTOM_BADGE)));
            }
            let details = Line::from(Span::styled(
                format!("  {} · {} cards", deck.category, deck.len()),
                Style::default().fg(MUTED_TEXT),
            ));
            ListItem::new(vec![Line::from(title), details, Line::from("")])
        })
        .collect();

    let title = format!(" Choose your deck (Enter: {}) ", app.default_mode().label());
    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !catalog.is_empty() {
        state.select(Some(app.selection()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_study(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = app.session();
    let Some(card) = session.current_card() else {
        return;
    };
    let color = session
        .deck_name()
        .and_then(|name| app.catalog().get(name))
        .map(|deck| deck_color(deck.color))
        .unwrap_or(ACCENT);

    let mut lines = Vec::new();
    if session.mode() == Some(StudyMode::Quiz) {
        let score = session.score();
        lines.push(Line::from(vec![
            Span::styled(
                format!("✓ Correct: {}", score.correct),
                Style::default().fg(STATUS_OK),
            ),
            Span::raw("    "),
            Span::styled(
                format!("✗ Incorrect: {}", score.incorrect),
                Style::default().fg(STATUS_ERROR),
            ),
        ]));
        lines.push(Line::from(""));
    }
    lines.extend(card_lines(card, session.is_flipped()));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let padding = area.height.saturating_sub(lines.len() as u16 + 2) / 2;
    let mut padded = vec![Line::from(""); padding as usize];
    padded.extend(lines);

    frame.render_widget(
        Paragraph::new(padded)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn card_lines(card: &Card, flipped: bool) -> Vec<Line<'static>> {
    let label = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD);
    if !flipped {
        return vec![
            Line::from(Span::styled("WORD", label)),
            Line::from(""),
            Line::from(Span::styled(
                card.word().to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Space to reveal the definition",
                Style::default().fg(MUTED_TEXT),
            )),
        ];
    }
    vec![
        Line::from(Span::styled("DEFINITION", label)),
        Line::from(""),
        Line::from(Span::styled(
            card.definition().to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled("EXAMPLE", label)),
        Line::from(Span::styled(
            card.example().to_string(),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::ITALIC),
        )),
    ]
}

fn draw_results(frame: &mut Frame<'_>, session: &StudySession, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "🏆 Deck Complete!",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if session.mode() == Some(StudyMode::Quiz) {
        let score = session.score();
        lines.push(metric_line("Correct", score.correct.to_string(), STATUS_OK));
        lines.push(metric_line("Incorrect", score.incorrect.to_string(), STATUS_ERROR));
        lines.push(metric_line(
            "Score",
            format!("{}%", score.rounded_percentage()),
            HEADER_TEXT,
        ));
    } else {
        lines.push(Line::from(Span::styled(
            format!("You went through all {} cards.", session.total_cards()),
            Style::default().fg(HEADER_TEXT),
        )));
    }

    let padding = area.height.saturating_sub(lines.len() as u16 + 2) / 2;
    let mut padded = vec![Line::from(""); padding as usize];
    padded.extend(lines);

    frame.render_widget(
        Paragraph::new(padded).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn metric_line(label: &'static str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:>10}  ", label),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}
