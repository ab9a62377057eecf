use crate::ui::confirm::intent::ConfirmIntent;
use crate::ui::confirm::state::ConfirmDialogState;
use crate::ui::mvi::Reducer;

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Open => ConfirmDialogState::Visible {
                confirm_selected: false,
            },
            ConfirmIntent::Close => ConfirmDialogState::Hidden,
            ConfirmIntent::ToggleButton => match state {
                ConfirmDialogState::Visible { confirm_selected } => ConfirmDialogState::Visible {
                    confirm_selected: !confirm_selected,
                },
                ConfirmDialogState::Hidden => ConfirmDialogState::Hidden,
            },
        }
    }
}
