use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    Input(char),
    Backspace,
    NextField,
    PrevField,
    /// Step the focused choice field forward or back.
    CycleChoice { forward: bool },
    /// Check presence of every field; move to `Submitting` if all are filled.
    Submit,
    /// The request behind a submit finished. `None` means success.
    Settled { error: Option<String> },
}

impl Intent for FormIntent {}
