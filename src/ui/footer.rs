use crate::ui::route::Route;
use crate::ui::theme::{BODY_TEXT, GLOBAL_BORDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    route: &'a Route,
}

impl<'a> Footer<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }

    pub fn hints(&self) -> &'static str {
        match self.route {
            Route::Home => " l: Login │ r: Register │ d: Dashboard │ q: Quit",
            Route::Login | Route::Register => {
                " Tab: Next field │ ←/→: Change choice │ Enter: Submit │ Esc: Back │ Ctrl+Q: Quit"
            }
            Route::WriteReview { .. } => {
                " Tab: Next field │ ←/→: Rating │ Enter: Post │ Esc: Cancel │ Ctrl+Q: Quit"
            }
            Route::Dashboard => {
                " ↑/↓: Select │ Enter: Open │ /: Search │ l: Logout │ Esc: Home │ Ctrl+Q: Quit"
            }
            Route::MovieDetails { .. } => {
                " ↑/↓: Scroll reviews │ w: Write review │ b: Back │ Ctrl+Q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints contain box-drawing glyphs.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(BODY_TEXT).add_modifier(Modifier::DIM);

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
