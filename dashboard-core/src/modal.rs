use std::fmt;

/// Окно с заголовком. Закрытое окно представлено как `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal<C> {
    title: String,
    content: C,
}

impl<C> Modal<C> {
    pub fn new(title: impl Into<String>, content: C) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }

    /// Строит окно только если оно открыто; иначе содержимое не создаётся.
    pub fn when_open(
        is_open: bool,
        title: impl Into<String>,
        content: impl FnOnce() -> C,
    ) -> Option<Self> {
        is_open.then(|| Self::new(title, content()))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn into_content(self) -> C {
        self.content
    }
}

/// Оформление кнопки подтверждения, на поведение не влияет.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Danger,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const PROCESSING_LABEL: &str = "Processing...";

/// Подтверждение разрушительного действия. Диалог не знает, что именно
/// подтверждает: действие передаёт вызывающий код.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    title: String,
    message: String,
    confirm_text: String,
    cancel_text: String,
    severity: Severity,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_text: "Confirm".to_string(),
            cancel_text: "Cancel".to_string(),
            severity: Severity::default(),
        }
    }

    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    pub fn with_cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cancel_text(&self) -> &str {
        &self.cancel_text
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn confirm_label(&self, is_loading: bool) -> &str {
        if is_loading {
            PROCESSING_LABEL
        } else {
            &self.confirm_text
        }
    }

    pub fn buttons_enabled(&self, is_loading: bool) -> bool {
        !is_loading
    }

    /// Выполняет действие вызывающего ровно один раз.
    pub fn confirm<R>(&self, on_confirm: impl FnOnce() -> R) -> R {
        on_confirm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_modal_renders_nothing() {
        let mut built = false;
        let modal = Modal::when_open(false, "Edit User", || {
            built = true;
        });
        assert!(modal.is_none());
        assert!(!built);
    }

    #[test]
    fn open_modal_carries_title_and_content() {
        let modal = Modal::when_open(true, "Add New Post", || 42).expect("modal is open");
        assert_eq!(modal.title(), "Add New Post");
        assert_eq!(*modal.content(), 42);
    }

    #[test]
    fn dialog_defaults() {
        let dialog = ConfirmDialog::new("Sure?", "Really");
        assert_eq!(dialog.confirm_label(false), "Confirm");
        assert_eq!(dialog.cancel_text(), "Cancel");
        assert_eq!(dialog.severity(), Severity::Danger);
    }

    #[test]
    fn loading_dialog_disables_buttons_and_relabels_confirm() {
        let dialog = ConfirmDialog::new("Delete Post", "Gone for good")
            .with_confirm_text("Delete")
            .with_severity(Severity::Warning);

        assert_eq!(dialog.confirm_label(false), "Delete");
        assert_eq!(dialog.confirm_label(true), "Processing...");
        assert!(dialog.buttons_enabled(false));
        assert!(!dialog.buttons_enabled(true));
    }

    #[test]
    fn confirm_runs_callback_once() {
        let dialog = ConfirmDialog::new("t", "m");
        let mut calls = 0;
        let value = dialog.confirm(|| {
            calls += 1;
            "done"
        });
        assert_eq!(calls, 1);
        assert_eq!(value, "done");
    }
}
