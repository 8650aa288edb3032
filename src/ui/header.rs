use crate::ui::route::Route;
use crate::ui::theme::{
    ACCENT, BODY_TEXT, GLOBAL_BORDER, HEADER_SEPARATOR, MUTED_TEXT, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    route: &'a Route,
    signed_in: bool,
    notice: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(route: &'a Route, signed_in: bool, notice: Option<&'a str>) -> Self {
        Self {
            route,
            signed_in,
            notice,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(BODY_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (session_icon, session_text, session_style) = if self.signed_in {
            ("●", "Signed in", Style::default().fg(STATUS_OK))
        } else {
            ("○", "Guest", Style::default().fg(MUTED_TEXT))
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "CineDeck",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.title(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(session_icon, session_style),
            Span::styled(format!(" {session_text}"), text_style),
        ];
        if let Some(notice) = self.notice {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(notice.to_string(), Style::default().fg(ACCENT)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
