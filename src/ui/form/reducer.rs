use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::FormState;
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Insert(ch) => {
                if !ch.is_control() {
                    state.description.push(ch);
                }
                state
            }
            FormIntent::Backspace => {
                state.description.pop();
                state
            }
            FormIntent::IncreaseQuantity => {
                state.quantity = if state.quantity >= state.max_quantity {
                    1
                } else {
                    state.quantity + 1
                };
                state
            }
            FormIntent::DecreaseQuantity => {
                state.quantity = if state.quantity <= 1 {
                    state.max_quantity
                } else {
                    state.quantity - 1
                };
                state
            }
            FormIntent::Reset => FormState {
                description: String::new(),
                quantity: state.default_quantity,
                ..state
            },
        }
    }
}
