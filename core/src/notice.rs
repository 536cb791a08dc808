//! Transient status messages shown after an operation settles.

use crate::locale::{Locale, Text};

/// Default lifetime of a notice before the UI clears it.
pub const NOTICE_TTL_MS: u32 = 2_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: Text,
}

impl Notice {
    pub fn success(text: Text) -> Self {
        Self {
            kind: NoticeKind::Success,
            text,
        }
    }

    pub fn failure(text: Text) -> Self {
        Self {
            kind: NoticeKind::Failure,
            text,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }

    pub fn render(&self, locale: Locale) -> &'static str {
        locale.text(self.text)
    }
}
