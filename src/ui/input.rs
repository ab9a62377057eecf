use crate::store::SortMode;
use crate::ui::app::{App, Focus};
use crate::ui::confirm::ConfirmIntent;
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press: global shortcuts, then the dialog if it is open,
/// then whichever pane has focus.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.confirm_dialog().is_visible() {
        handle_dialog_key(app, key);
        return;
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Form => handle_form_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            app.dispatch_confirm(ConfirmIntent::ToggleButton);
        }
        KeyCode::Enter => app.activate_dialog_button(),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'y') => app.answer_clear(true),
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'n') => app.answer_clear(false),
        KeyCode::Esc => app.answer_clear(false),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Up => app.dispatch_form(FormIntent::IncreaseQuantity),
        KeyCode::Down => app.dispatch_form(FormIntent::DecreaseQuantity),
        KeyCode::Esc => app.request_quit(),
        KeyCode::Char(ch) if !has_command_modifier(key) => {
            app.dispatch_form(FormIntent::Insert(ch));
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('1') => app.set_sort(SortMode::Input),
        KeyCode::Char('2') => app.set_sort(SortMode::Description),
        KeyCode::Char('3') => app.set_sort(SortMode::Packed),
        KeyCode::Char('c') => app.request_clear(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn typing_q_in_form_does_not_quit() {
        let mut app = App::default();
        type_text(&mut app, "quilt");
        assert!(!app.should_quit());
        assert_eq!(app.form().description, "quilt");
    }

    #[test]
    fn ctrl_q_quits_everywhere() {
        let mut app = App::default();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn form_then_list_round_trip() {
        let mut app = App::default();
        type_text(&mut app, "Passport");
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Socks");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::List);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.sort_mode(), SortMode::Description);

        let stats = app.store().stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.packed, 1);
        assert_eq!(stats.percentage, Some(50));
        assert_eq!(app.store().items()[0].quantity, 2);
    }

    #[test]
    fn dialog_swallows_list_keys() {
        let mut app = App::default();
        type_text(&mut app, "Map");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('c'));
        assert!(app.confirm_dialog().is_visible());

        // 'd' would remove the selected item outside the dialog.
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.store().len(), 1);

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.confirm_dialog().is_visible());
        assert_eq!(app.store().len(), 1);

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.store().is_empty());
    }

    #[test]
    fn number_keys_pick_sort_directly() {
        let mut app = App::default();
        type_text(&mut app, "Map");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Compass");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.list_view().selected, 1);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.sort_mode(), SortMode::Packed);
        assert_eq!(app.list_view().selected, 0);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.sort_mode(), SortMode::Description);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.sort_mode(), SortMode::Input);
    }

    #[test]
    fn digits_in_form_are_text() {
        let mut app = App::default();
        type_text(&mut app, "2 towels");
        assert_eq!(app.form().description, "2 towels");
        assert_eq!(app.sort_mode(), SortMode::Input);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::default();
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.form().description, "");
    }
}
