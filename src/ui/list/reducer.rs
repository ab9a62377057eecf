use crate::ui::list::intent::ListViewIntent;
use crate::ui::list::state::ListViewState;
use crate::ui::mvi::Reducer;

pub struct ListViewReducer;

impl Reducer for ListViewReducer {
    type State = ListViewState;
    type Intent = ListViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Rows move under the cursor when the order changes, so start over.
            ListViewIntent::CycleSort => ListViewState {
                sort_mode: state.sort_mode.next(),
                selected: 0,
            },
            ListViewIntent::SetSort(sort_mode) => ListViewState {
                sort_mode,
                selected: 0,
            },
            ListViewIntent::SelectNext { len } => {
                let selected = if len == 0 || state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
                ListViewState { selected, ..state }
            }
            ListViewIntent::SelectPrev { len } => {
                let selected = if len == 0 {
                    0
                } else if state.selected == 0 || state.selected >= len {
                    len - 1
                } else {
                    state.selected - 1
                };
                ListViewState { selected, ..state }
            }
            ListViewIntent::Clamp { len } => ListViewState {
                selected: state.selected.min(len.saturating_sub(1)),
                ..state
            },
        }
    }
}
