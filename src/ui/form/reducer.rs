use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::{FieldKind, FormState, FormStatus};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        // Fields are frozen while a request is in flight.
        if state.is_submitting() && !matches!(intent, FormIntent::Settled { .. }) {
            return state;
        }

        match intent {
            FormIntent::Input(ch) => {
                if let Some(field) = state.fields.get_mut(state.focused) {
                    if !matches!(field.kind, FieldKind::Choice(_)) && !ch.is_control() {
                        field.value.push(ch);
                    }
                }
                state
            }
            FormIntent::Backspace => {
                if let Some(field) = state.fields.get_mut(state.focused) {
                    if !matches!(field.kind, FieldKind::Choice(_)) {
                        field.value.pop();
                    }
                }
                state
            }
            FormIntent::NextField => {
                if !state.fields.is_empty() {
                    state.focused = (state.focused + 1) % state.fields.len();
                }
                state
            }
            FormIntent::PrevField => {
                state.focused = if state.focused == 0 {
                    state.fields.len().saturating_sub(1)
                } else {
                    state.focused - 1
                };
                state
            }
            FormIntent::CycleChoice { forward } => {
                if let Some(field) = state.fields.get_mut(state.focused) {
                    if let FieldKind::Choice(choices) = field.kind {
                        let current = choices.iter().position(|c| *c == field.value).unwrap_or(0);
                        let next = if forward {
                            (current + 1) % choices.len()
                        } else {
                            (current + choices.len() - 1) % choices.len()
                        };
                        field.value = choices[next].to_string();
                    }
                }
                state
            }
            FormIntent::Submit => {
                state.status = match state.first_missing() {
                    Some(field) => FormStatus::Failed(format!("{} is required", field.label)),
                    None => FormStatus::Submitting,
                };
                state
            }
            FormIntent::Settled { error } => {
                if !state.is_submitting() {
                    return state;
                }
                state.status = match error {
                    Some(message) => FormStatus::Failed(message),
                    None => FormStatus::Editing,
                };
                state
            }
        }
    }
}
