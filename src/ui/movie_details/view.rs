use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::{Movie, Review};
use crate::ui::movie_details::state::MovieDetailsState;
use crate::ui::remote::Remote;
use crate::ui::theme::{ACCENT, BODY_TEXT, MUTED_TEXT, PANEL_BORDER, RATING, STATUS_ERROR};

pub fn render(frame: &mut Frame, area: Rect, state: &MovieDetailsState) {
    let [movie_area, reviews_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(area);

    let movie_lines = match &state.movie {
        Remote::Loading => vec![muted("Loading movie details...".to_string())],
        Remote::Failed(message) => vec![
            Line::from(Span::styled(message.clone(), Style::default().fg(STATUS_ERROR))),
            Line::from(""),
            muted("b: Back to Dashboard".to_string()),
        ],
        Remote::Loaded(movie) => movie_lines(movie),
    };
    let title = state
        .movie
        .loaded()
        .map(|movie| movie.metadata.title.clone())
        .unwrap_or_else(|| state.movie_id.clone());
    frame.render_widget(
        Paragraph::new(movie_lines)
            .wrap(Wrap { trim: true })
            .block(panel(title)),
        movie_area,
    );

    let (reviews_title, review_lines) = match &state.reviews {
        Remote::Loading => ("Reviews".to_string(), vec![muted("Loading reviews...".to_string())]),
        Remote::Failed(message) => (
            "Reviews".to_string(),
            vec![muted(format!("Reviews unavailable: {message}"))],
        ),
        Remote::Loaded(reviews) if reviews.is_empty() => (
            "Reviews (0)".to_string(),
            vec![muted(
                "No reviews yet. Be the first to review this movie!".to_string(),
            )],
        ),
        Remote::Loaded(reviews) => (
            format!("Reviews ({})", reviews.len()),
            reviews.iter().flat_map(review_lines).collect(),
        ),
    };
    frame.render_widget(
        Paragraph::new(review_lines)
            .wrap(Wrap { trim: true })
            .scroll((state.scroll, 0))
            .block(panel(reviews_title)),
        reviews_area,
    );
}

fn movie_lines(movie: &Movie) -> Vec<Line<'static>> {
    let meta = &movie.metadata;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("★ {:.1}/10", meta.rating), Style::default().fg(RATING)),
            Span::styled(
                format!("  ({} ratings)", meta.total_rating_count),
                Style::default().fg(MUTED_TEXT),
            ),
        ]),
        Line::from(""),
        info("Released", meta.date_published.clone()),
        info("Duration", format!("{} minutes", meta.duration)),
        info("Genres", meta.genres.join(", ")),
        info("Directors", meta.directors.join(", ")),
        info("Main Cast", meta.cast.join(", ")),
    ];
    if !meta.creators.is_empty() {
        lines.push(info("Writers", meta.creators.join(", ")));
    }
    if !meta.meta_score.is_empty() {
        lines.push(info("Metascore", meta.meta_score.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        meta.description.clone(),
        Style::default().fg(BODY_TEXT),
    )));
    lines
}

fn review_lines(review: &Review) -> Vec<Line<'static>> {
    let rating = review
        .rating
        .map(|r| format!("★ {r}/10"))
        .unwrap_or_else(|| "unrated".to_string());
    vec![
        Line::from(vec![
            Span::styled(
                review.user.clone(),
                Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}  ", review.date), Style::default().fg(MUTED_TEXT)),
            Span::styled(rating, Style::default().fg(RATING)),
        ]),
        Line::from(Span::styled(
            review.title.clone(),
            Style::default().fg(ACCENT),
        )),
        Line::from(Span::styled(review.review.clone(), Style::default().fg(BODY_TEXT))),
        muted(format!(
            "{} of {} found this helpful",
            review.usefulness_vote.unwrap_or(0),
            review.total_votes.unwrap_or(0)
        )),
        Line::from(""),
    ]
}

fn info(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(MUTED_TEXT)),
        Span::styled(value, Style::default().fg(BODY_TEXT)),
    ])
}

fn muted(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT)))
}

fn panel(title: String) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {title} "), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER))
}
