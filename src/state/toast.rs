#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Info,
    Error,
}

/// One transient notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Queue of visible toasts, provided via context and rendered by the
/// `ToastHost` component, which also schedules auto-dismissal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            variant,
        });
        id
    }

    pub fn info(&mut self, title: &str, description: &str) -> u64 {
        self.push(title, description, ToastVariant::Info)
    }

    pub fn error(&mut self, title: &str, description: &str) -> u64 {
        self.push(title, description, ToastVariant::Error)
    }

    /// Remove a toast by id; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
