//! Type definitions for the application state.

use crate::error::ErrorCategory;

/// Severity of the status-bar notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line message shown in the status bar until the next notice replaces
/// it or it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Tick at which the notice was raised
    pub raised_at: u64,
}

impl Notice {
    pub fn info(text: impl Into<String>, raised_at: u64) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
            raised_at,
        }
    }

    pub fn error(text: impl Into<String>, raised_at: u64) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            raised_at,
        }
    }

    /// Error notice with the category's recovery hint appended.
    pub fn from_failure(message: String, category: ErrorCategory, raised_at: u64) -> Self {
        Self::error(format!("{} ({})", message, category.recovery_hint()), raised_at)
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
