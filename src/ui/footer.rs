use crate::store::Stats;
use crate::ui::theme::{BORDER, MUTED, PACKED, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stats sentence on the left, version on the right.
pub struct Footer {
    stats: Stats,
}

impl Footer {
    pub fn new(stats: Stats) -> Self {
        Self { stats }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let summary = format!(" {}", self.stats.summary());
        let version = format!("v{} ", VERSION);

        // Pad by chars, not bytes.
        let summary_width = summary.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(summary_width)
            .saturating_sub(version_width);

        let summary_style = if self.stats.is_complete() {
            Style::default().fg(PACKED).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT).add_modifier(Modifier::ITALIC)
        };
        let version_style = Style::default().fg(MUTED).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(summary, summary_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(version, version_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
