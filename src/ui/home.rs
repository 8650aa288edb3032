//! Landing page.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::{ACCENT, BODY_TEXT, MUTED_TEXT, PANEL_BORDER};

const FEATURES: [(&str, &str); 3] = [
    (
        "Discover",
        "Browse the highest rated movies and search the catalogue by title.",
    ),
    (
        "Read Reviews",
        "See what other viewers thought, with ratings and helpfulness votes.",
    ),
    (
        "Share Yours",
        "Sign in to rate movies and post reviews of your own.",
    ),
];

pub fn render(frame: &mut Frame, area: Rect, signed_in: bool) {
    let [hero_area, features_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .areas(area);

    let cta = if signed_in {
        "d: Go to Dashboard"
    } else {
        "r: Get Started   l: Log In"
    };
    let hero = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to CineDeck",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your terminal companion for finding something good to watch.",
            Style::default().fg(BODY_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(cta, Style::default().fg(MUTED_TEXT))),
    ];
    frame.render_widget(
        Paragraph::new(hero).alignment(Alignment::Center),
        hero_area,
    );

    let columns: [Rect; 3] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas(features_area);
    for ((title, body), column) in FEATURES.iter().zip(columns) {
        let card = Paragraph::new(Line::from(Span::styled(*body, Style::default().fg(BODY_TEXT))))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(format!(" {title} "), Style::default().fg(ACCENT)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(PANEL_BORDER)),
            );
        frame.render_widget(card, column);
    }
}
