use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use serde_json::Value;

use crate::api::{AdminDashboard, DashboardView, Movie, UserDashboard};
use crate::ui::dashboard::state::DashboardState;
use crate::ui::remote::Remote;
use crate::ui::theme::{
    ACCENT, BODY_TEXT, HIGHLIGHT_BG, MUTED_TEXT, PANEL_BORDER, RATING, STATUS_ERROR,
};

/// Entries listed per transaction/penalty card.
const CARD_PREVIEW: usize = 3;
const SUMMARY_HEIGHT: u16 = 10;

pub fn render(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let search_height = if state.is_searching() { 1 } else { 0 };
    let [summary, search, movies] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SUMMARY_HEIGHT),
            Constraint::Length(search_height),
            Constraint::Min(3),
        ])
        .areas(area);

    render_summary(frame, summary, &state.dashboard);
    if let Some(input) = &state.search_input {
        let line = Line::from(vec![
            Span::styled(" Search title: ", Style::default().fg(ACCENT)),
            Span::styled(format!("{input}_"), Style::default().fg(BODY_TEXT)),
        ]);
        frame.render_widget(Paragraph::new(line), search);
    }
    render_movies(frame, movies, state);
}

fn render_summary(frame: &mut Frame, area: Rect, dashboard: &Remote<DashboardView>) {
    match dashboard {
        Remote::Loading => {
            frame.render_widget(panel("Dashboard", vec![muted("Loading...")]), area);
        }
        Remote::Failed(message) => {
            let lines = vec![
                Line::from(Span::styled(message.clone(), Style::default().fg(STATUS_ERROR))),
                Line::from(""),
                muted("Enter: Back to Login"),
            ];
            frame.render_widget(panel("Dashboard", lines), area);
        }
        Remote::Loaded(DashboardView::User(user)) => render_user(frame, area, user),
        Remote::Loaded(DashboardView::Admin(admin)) => render_admin(frame, area, admin),
    }
}

fn render_user(frame: &mut Frame, area: Rect, user: &UserDashboard) {
    let [heading, cards] = split_heading(area);
    let heading_lines = vec![
        Line::from(Span::styled(
            format!("Welcome, {}!", user.username),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        muted(&format!("Role: {}", user.role)),
    ];
    frame.render_widget(Paragraph::new(heading_lines), heading);

    let [profile, transactions, penalties] = three_columns(cards);
    frame.render_widget(
        panel(
            "Profile Summary",
            vec![stat("Username", &user.username), stat("Role", &user.role)],
        ),
        profile,
    );
    frame.render_widget(
        panel(
            "Transactions",
            preview_lines(&user.transactions, "total", "No transactions yet"),
        ),
        transactions,
    );
    frame.render_widget(
        panel(
            "Penalties",
            preview_lines(&user.penalties, "active", "No penalties"),
        ),
        penalties,
    );
}

fn render_admin(frame: &mut Frame, area: Rect, admin: &AdminDashboard) {
    let [heading, cards] = split_heading(area);
    let heading_lines = vec![
        Line::from(Span::styled(
            "Admin Dashboard",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        muted("System Overview"),
    ];
    frame.render_widget(Paragraph::new(heading_lines), heading);

    let [info, stats, actions] = three_columns(cards);
    frame.render_widget(
        panel("User Information", vec![stat("User ID", &admin.user_id)]),
        info,
    );
    frame.render_widget(
        panel(
            "System Statistics",
            vec![
                stat("Total Users", &admin.system_stats.total_users.to_string()),
                stat(
                    "Active Penalties",
                    &admin.system_stats.active_penalties.to_string(),
                ),
            ],
        ),
        stats,
    );
    frame.render_widget(
        panel(
            "Quick Actions",
            vec![
                muted("Manage Users"),
                muted("View Reports"),
                muted("System Settings"),
            ],
        ),
        actions,
    );
}

fn render_movies(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let title = match &state.active_query {
        Some(query) => format!("Results for \"{query}\""),
        None => "Featured Movies".to_string(),
    };

    let lines = match &state.movies {
        Remote::Loading => vec![muted("Loading movies...")],
        Remote::Failed(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        ))],
        Remote::Loaded(movies) if movies.is_empty() => vec![muted("No movies found")],
        Remote::Loaded(movies) => movies
            .iter()
            .enumerate()
            .map(|(idx, movie)| movie_row(movie, idx == state.selected))
            .collect(),
    };

    frame.render_widget(panel(&title, lines), area);
}

fn movie_row(movie: &Movie, selected: bool) -> Line<'static> {
    let meta = &movie.metadata;
    let line = Line::from(vec![
        Span::styled(
            if selected { "> " } else { "  " },
            Style::default().fg(ACCENT),
        ),
        Span::styled(meta.title.clone(), Style::default().fg(BODY_TEXT)),
        Span::raw("  "),
        Span::styled(format!("★ {:.1}/10", meta.rating), Style::default().fg(RATING)),
        Span::raw("  "),
        Span::styled(meta.genres.join(", "), Style::default().fg(MUTED_TEXT)),
    ]);
    if selected {
        line.style(Style::default().bg(HIGHLIGHT_BG))
    } else {
        line
    }
}

fn preview_lines(entries: &[Value], noun: &str, empty: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        format!("{} {noun}", entries.len()),
        Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
    ))];
    if entries.is_empty() {
        lines.push(muted(empty));
    } else {
        lines.extend(
            entries
                .iter()
                .take(CARD_PREVIEW)
                .map(|entry| muted(&format!("- {entry}"))),
        );
    }
    lines
}

fn split_heading(area: Rect) -> [Rect; 2] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .areas(area)
}

fn three_columns(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas(area)
}

fn panel<'a>(title: &str, lines: Vec<Line<'a>>) -> Paragraph<'a> {
    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(format!(" {title} "), Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PANEL_BORDER)),
    )
}

fn stat(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(MUTED_TEXT)),
        Span::styled(value.to_string(), Style::default().fg(BODY_TEXT)),
    ])
}

fn muted(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(MUTED_TEXT)))
}
