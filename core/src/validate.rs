//! Client-side checks run before a create or edit request is sent.

use thiserror::Error;

use crate::locale::Text;

/// Minimum length, in characters after trimming, of title and description.
pub const MIN_TEXT_LEN: usize = 3;

/// Form field a validation failure points at, so the UI can focus it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
}

/// Which form is being validated; only the wording differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must be at least 3 characters")]
    TitleTooShort,
    #[error("description must be at least 3 characters")]
    DescriptionTooShort,
}

impl ValidationError {
    pub fn field(self) -> Field {
        match self {
            ValidationError::TitleTooShort => Field::Title,
            ValidationError::DescriptionTooShort => Field::Description,
        }
    }

    pub fn text(self, form: FormKind) -> Text {
        match (self, form) {
            (ValidationError::TitleTooShort, FormKind::Create) => Text::TitleTooShort,
            (ValidationError::DescriptionTooShort, FormKind::Create) => Text::DescriptionTooShort,
            (ValidationError::TitleTooShort, FormKind::Edit) => Text::EditTitleTooShort,
            (ValidationError::DescriptionTooShort, FormKind::Edit) => Text::EditDescriptionTooShort,
        }
    }
}

/// Title and description as typed into a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn trimmed(&self) -> Self {
        Self::new(self.title.trim(), self.description.trim())
    }

    /// Trim both fields and require each to reach [`MIN_TEXT_LEN`].
    /// The title is checked first.
    pub fn validate(&self) -> Result<Self, ValidationError> {
        let draft = self.trimmed();
        if draft.title.chars().count() < MIN_TEXT_LEN {
            return Err(ValidationError::TitleTooShort);
        }
        if draft.description.chars().count() < MIN_TEXT_LEN {
            return Err(ValidationError::DescriptionTooShort);
        }
        Ok(draft)
    }
}
