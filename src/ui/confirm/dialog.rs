use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DANGER, POPUP_BORDER, TEXT};

use super::state::ConfirmDialogState;

const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 7;

pub fn render_confirm_dialog(frame: &mut Frame, state: &ConfirmDialogState, area: Rect) {
    let ConfirmDialogState::Visible { confirm_selected } = *state else {
        return;
    };

    let area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(" Clear list ", Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let button = |label: &'static str, selected: bool, color: Color| {
        let mut style = Style::default().fg(color);
        if selected {
            style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }
        Span::styled(label, style)
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to delete all items?",
            Style::default().fg(TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            button(" Cancel ", !confirm_selected, TEXT),
            Span::raw("    "),
            button(" Delete all ", confirm_selected, DANGER),
        ]),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(widget, area);
}
