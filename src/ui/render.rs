use crate::store::Item;
use crate::ui::app::{App, Focus};
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BORDER, DANGER, FOCUS_BORDER, MUTED, PACKED, TEXT,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const FORM_TITLE: &str = " What do you need for your trip? ";
const LIST_HINTS: &str =
    " Space: pack │ d: remove │ s/1-3: sort │ c: clear │ Tab: form │ q: quit ";
const FORM_HINTS: &str = " ↑/↓: quantity │ Enter: add │ Tab: list │ Esc: quit ";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);

    frame.render_widget(Header::new().widget(), regions.header);
    draw_form(frame, app, regions.form);
    draw_list(frame, app, regions.list);
    let footer = Footer::new(app.store().stats());
    frame.render_widget(footer.widget(regions.footer), regions.footer);

    render_confirm_dialog(frame, app.confirm_dialog(), area);
}

fn pane_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Form;
    let form = app.form();

    let mut block = pane_block(FORM_TITLE, focused);
    if let Some(notice) = app.notice() {
        block = block.title_bottom(Span::styled(
            format!(" {notice} "),
            Style::default().fg(DANGER),
        ));
    } else if focused {
        block = block.title_bottom(Span::styled(FORM_HINTS, Style::default().fg(MUTED)));
    }

    let quantity = format!(" Qty {:>2} ▴▾ ", form.quantity);
    let prompt = " Item: ";
    let description_style = if form.description.is_empty() {
        Style::default().fg(MUTED)
    } else {
        Style::default().fg(TEXT)
    };
    let description = if form.description.is_empty() && !focused {
        "Item...".to_string()
    } else {
        form.description.clone()
    };

    let typed =
        quantity.chars().count() + prompt.chars().count() + form.description.chars().count();
    // Past u16::MAX the cursor is off-screen anyway.
    let cursor_x = u16::try_from(typed)
        .ok()
        .and_then(|offset| area.x.checked_add(1)?.checked_add(offset));

    let line = Line::from(vec![
        Span::styled(quantity, Style::default().fg(TEXT).bg(ACTIVE_HIGHLIGHT)),
        Span::styled(prompt, Style::default().fg(MUTED)),
        Span::styled(description, description_style),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    let inner_right = area.x + area.width.saturating_sub(2);
    let dialog_open = app.confirm_dialog().is_visible();
    if let Some(cursor_x) = cursor_x {
        if focused && !dialog_open && area.height >= 3 && cursor_x <= inner_right {
            frame.set_cursor_position((cursor_x, area.y + 1));
        }
    }
}

fn draw_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let focused = app.focus() == Focus::List;
    let title = app.sort_mode().label();

    let sort_title = Line::from(Span::styled(
        format!(" {title} (s) "),
        Style::default().fg(MUTED),
    ))
    .right_aligned();
    let mut block = pane_block(" Packing list ", focused).title(sort_title);
    if focused {
        block = block.title_bottom(Span::styled(LIST_HINTS, Style::default().fg(MUTED)));
    }

    let items = app.visible_items();
    if items.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            " Nothing on the list yet. Type an item above and press Enter.",
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let rows: Vec<ListItem> = items.into_iter().map(list_row).collect();
    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("› ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.list_view().selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn list_row(item: &Item) -> ListItem<'static> {
    let (checkbox, checkbox_style, label_style) = if item.packed {
        (
            "[x] ",
            Style::default().fg(PACKED),
            Style::default().fg(MUTED).add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default().fg(TEXT), Style::default().fg(TEXT))
    };
    ListItem::new(Line::from(vec![
        Span::styled(checkbox, checkbox_style),
        Span::styled(item.label(), label_style),
    ]))
}
