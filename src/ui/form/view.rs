use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::form::state::{FieldKind, FormState, FormStatus};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, BODY_TEXT, MUTED_TEXT, PANEL_BORDER, STATUS_ERROR};

const FORM_WIDTH: u16 = 56;

pub fn render(frame: &mut Frame, area: Rect, title: &str, state: &FormState) {
    let mut lines = Vec::new();

    for (idx, field) in state.fields.iter().enumerate() {
        let focused = idx == state.focused;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(field.label, label_style),
        ]));

        let value = match field.kind {
            FieldKind::Choice(_) => format!("< {} >", field.display_value()),
            FieldKind::Text | FieldKind::Secret => field.display_value(),
        };
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(value, Style::default().fg(BODY_TEXT)),
        ]));
        lines.push(Line::from(""));
    }

    match &state.status {
        FormStatus::Editing => {}
        FormStatus::Submitting => {
            lines.push(Line::from(Span::styled("Submitting...", Style::default().fg(MUTED_TEXT))));
        }
        FormStatus::Failed(message) => {
            lines.push(Line::from(Span::styled(message.clone(), Style::default().fg(STATUS_ERROR))));
        }
    }

    let height = (lines.len() as u16).saturating_add(2);
    let rect = centered_rect_by_size(area, FORM_WIDTH, height);
    let block = Block::default()
        .title(Span::styled(format!(" {title} "), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), rect);
}
