use crate::api::{LoginForm, Registration, ReviewDraft, Role};
use crate::ui::mvi::UiState;

const ROLE_CHOICES: &[&str] = &["user", "moderator", "admin"];
const RATING_CHOICES: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Rendered masked.
    Secret,
    /// One of a fixed set of values, cycled with Left/Right.
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    fn text(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            kind: FieldKind::Text,
        }
    }

    fn secret(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            kind: FieldKind::Secret,
        }
    }

    fn choice(label: &'static str, choices: &'static [&'static str], initial: &str) -> Self {
        Self {
            label,
            value: initial.to_string(),
            kind: FieldKind::Choice(choices),
        }
    }

    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Secret => "*".repeat(self.value.chars().count()),
            FieldKind::Text | FieldKind::Choice(_) => self.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Failed(String),
}

/// Shared state for the login, registration and review forms.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focused: usize,
    pub status: FormStatus,
}

impl UiState for FormState {}

impl FormState {
    pub fn login() -> Self {
        Self::with_fields(vec![FormField::text("Username"), FormField::secret("Password")])
    }

    pub fn register() -> Self {
        Self::with_fields(vec![
            FormField::text("Username"),
            FormField::text("Email"),
            FormField::secret("Password"),
            FormField::choice("Role", ROLE_CHOICES, "user"),
        ])
    }

    pub fn review() -> Self {
        Self::with_fields(vec![
            FormField::text("Title"),
            FormField::text("Review"),
            FormField::choice("Rating", RATING_CHOICES, "5"),
        ])
    }

    fn with_fields(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            focused: 0,
            status: FormStatus::Editing,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Trimmed value of the field labelled `label`, or "" if there is none.
    pub fn value(&self, label: &str) -> &str {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.trim())
            .unwrap_or("")
    }

    /// The first field left blank, if any.
    pub fn first_missing(&self) -> Option<&FormField> {
        self.fields.iter().find(|field| field.value.trim().is_empty())
    }

    /// Password keeps its surrounding whitespace; only presence is checked.
    pub fn to_login(&self) -> LoginForm {
        LoginForm {
            username: self.value("Username").to_string(),
            password: self.raw_value("Password").to_string(),
        }
    }

    pub fn to_registration(&self) -> Registration {
        Registration {
            username: self.value("Username").to_string(),
            email: self.value("Email").to_string(),
            password: self.raw_value("Password").to_string(),
            role: Role::parse(self.value("Role")).unwrap_or_default(),
        }
    }

    pub fn to_review_draft(&self) -> ReviewDraft {
        ReviewDraft {
            review_title: self.value("Title").to_string(),
            review_text: self.value("Review").to_string(),
            rating: self.value("Rating").parse().unwrap_or(5),
        }
    }

    fn raw_value(&self, label: &str) -> &str {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }
}
