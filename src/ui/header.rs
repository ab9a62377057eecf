use crate::ui::theme::{ACCENT, BANNER_BG, BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "🌴 Far Away 💼";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(ACCENT)
            .bg(BANNER_BG)
            .add_modifier(Modifier::BOLD);
        Paragraph::new(Line::from(Span::styled(TITLE, title_style)))
            .alignment(Alignment::Center)
            .style(Style::default().bg(BANNER_BG))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(BORDER)),
            )
    }
}
