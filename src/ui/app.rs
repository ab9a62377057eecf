use crate::config::Config;
use crate::store::{Item, ItemId, ItemListStore, SortMode};
use crate::ui::confirm::{ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::list::{ListViewIntent, ListViewReducer, ListViewState};
use crate::ui::mvi::Reducer;
use tracing::debug;

/// Which pane receives plain key presses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Form,
    List,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    store: ItemListStore,
    form: FormState,
    list_view: ListViewState,
    confirm: ConfirmDialogState,
    confirm_clear: bool,
    /// Why the last submit was refused, shown under the form.
    notice: Option<String>,
    /// Ticks left before the notice disappears.
    notice_ticks: u32,
    notice_lifetime: u32,
}

/// How long a rejection notice stays under the form.
const NOTICE_MS: u64 = 3_000;

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Form,
            store: ItemListStore::new(),
            form: FormState::new(config.defaults.quantity, config.form.max_quantity),
            list_view: ListViewState::new(config.defaults.sort),
            confirm: ConfirmDialogState::Hidden,
            confirm_clear: config.ui.confirm_clear,
            notice: None,
            notice_ticks: 0,
            notice_lifetime: notice_lifetime(config.ui.tick_rate_ms),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::List,
            Focus::List => Focus::Form,
        };
    }

    pub fn store(&self) -> &ItemListStore {
        &self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn list_view(&self) -> &ListViewState {
        &self.list_view
    }

    pub fn confirm_dialog(&self) -> &ConfirmDialogState {
        &self.confirm
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn sort_mode(&self) -> SortMode {
        self.list_view.sort_mode
    }

    /// Items in the order they are drawn.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.store.view(self.list_view.sort_mode)
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.visible_items()
            .get(self.list_view.selected)
            .map(|item| item.id)
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn dispatch_list(&mut self, intent: ListViewIntent) {
        dispatch_mvi!(self, list_view, ListViewReducer, intent);
    }

    pub fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self, confirm, ConfirmReducer, intent);
    }

    /// Hand the form contents to the store.
    ///
    /// On success the form resets; on rejection it keeps its contents and
    /// the reason is kept as a notice.
    pub fn submit_form(&mut self) {
        match self.store.add(&self.form.description, self.form.quantity) {
            Ok(_) => {
                self.notice = None;
                self.dispatch_form(FormIntent::Reset);
            }
            Err(err) => {
                self.notice = Some(err.to_string());
                self.notice_ticks = self.notice_lifetime;
            }
        }
    }

    /// Periodic tick: ages the rejection notice.
    pub fn on_tick(&mut self) {
        if self.notice.is_none() {
            return;
        }
        self.notice_ticks = self.notice_ticks.saturating_sub(1);
        if self.notice_ticks == 0 {
            self.notice = None;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.store.len();
        self.dispatch_list(ListViewIntent::SelectNext { len });
    }

    pub fn select_prev(&mut self) {
        let len = self.store.len();
        self.dispatch_list(ListViewIntent::SelectPrev { len });
    }

    pub fn cycle_sort(&mut self) {
        self.dispatch_list(ListViewIntent::CycleSort);
        debug!(sort = %self.list_view.sort_mode, "Sort mode changed");
    }

    pub fn set_sort(&mut self, sort_mode: SortMode) {
        self.dispatch_list(ListViewIntent::SetSort(sort_mode));
        debug!(sort = %sort_mode, "Sort mode chosen");
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle(id);
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.remove(id);
            let len = self.store.len();
            self.dispatch_list(ListViewIntent::Clamp { len });
        }
    }

    /// Start clearing the list, asking first when configured to.
    pub fn request_clear(&mut self) {
        if self.confirm_clear {
            self.dispatch_confirm(ConfirmIntent::Open);
        } else {
            self.clear_all();
        }
    }

    /// Close the dialog; clear only when the user said yes.
    pub fn answer_clear(&mut self, confirmed: bool) {
        self.dispatch_confirm(ConfirmIntent::Close);
        if confirmed {
            self.clear_all();
        } else {
            debug!("Clear cancelled");
        }
    }

    /// Enter on the dialog: answer with whichever button is highlighted.
    pub fn activate_dialog_button(&mut self) {
        let confirmed = self.confirm.confirm_selected();
        self.answer_clear(confirmed);
    }

    fn clear_all(&mut self) {
        self.store.clear();
        self.dispatch_list(ListViewIntent::Clamp { len: 0 });
    }
}

fn notice_lifetime(tick_rate_ms: u64) -> u32 {
    let ticks = NOTICE_MS / tick_rate_ms.max(1);
    u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
}
