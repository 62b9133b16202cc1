use std::fmt;

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";

pub const MSG_MISSING_FIELDS: &str = "Please fill out all fields.";
pub const MSG_PREPARED: &str = "Thanks! Your message has been prepared (no backend).";

/// Trimmed contact form values, read once per submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Missing fields read as empty.
    pub fn from_fields(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> Self {
        let clean = |value: Option<&str>| value.unwrap_or("").trim().to_string();
        Self {
            name: clean(name),
            email: clean(email),
            message: clean(message),
        }
    }

    pub fn validate(self) -> Result<Self, ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        Ok(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactError {
    MissingFields,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingFields => f.write_str(MSG_MISSING_FIELDS),
        }
    }
}

impl std::error::Error for ContactError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Danger,
    Dim,
}

impl StatusTone {
    pub fn css_color(self) -> &'static str {
        match self {
            StatusTone::Danger => "var(--danger)",
            StatusTone::Dim => "var(--fg-dim)",
        }
    }
}

/// What the status line shows after a submit, and whether the form clears.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub text: String,
    pub tone: StatusTone,
    pub reset_form: bool,
}

impl FormStatus {
    pub fn for_submission(draft: ContactDraft) -> Self {
        match draft.validate() {
            Ok(_) => Self {
                text: MSG_PREPARED.to_string(),
                tone: StatusTone::Dim,
                reset_form: true,
            },
            Err(err) => Self {
                text: err.to_string(),
                tone: StatusTone::Danger,
                reset_form: false,
            },
        }
    }
}
