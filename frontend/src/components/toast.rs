//! Toast notifications.

use std::{fmt, sync::Arc};

use ammonia::clean_text;
use parking_lot::Mutex;

use crate::dom::{Container, TOAST_CONTAINER_ID};

/// Severity of a toast, shown as its heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral notice.
    #[default]
    Info,
    /// Completed action.
    Success,
    /// Something needs attention.
    Warning,
    /// Failed action.
    Error,
}

impl ToastKind {
    /// Heading shown in the toast header.
    pub fn label(self) -> &'static str {
        match self {
            ToastKind::Info => "Info",
            ToastKind::Success => "Success",
            ToastKind::Warning => "Warning",
            ToastKind::Error => "Error",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
struct Toast {
    id: String,
    markup: String,
}

#[derive(Debug, Default)]
struct StackState {
    next_id: u64,
    toasts: Vec<Toast>,
}

/// Toast notifications rendered into their own container, newest last.
#[derive(Debug, Clone)]
pub struct ToastStack {
    container: Container,
    state: Arc<Mutex<StackState>>,
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new(Container::new(TOAST_CONTAINER_ID))
    }
}

impl ToastStack {
    /// Empty stack rendering into `container`.
    pub fn new(container: Container) -> Self {
        Self {
            container,
            state: Arc::new(Mutex::new(StackState::default())),
        }
    }

    /// Element holding the toast markup.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Append a toast and return its element id.
    pub fn show(&self, message: &str, kind: ToastKind) -> String {
        let mut state = self.state.lock();
        state.next_id += 1;
        let id = format!("toast-{}", state.next_id);
        let markup = format!(
            r#"<div id="{id}" class="toast" role="alert" aria-live="assertive" aria-atomic="true"><div class="toast-header"><strong class="me-auto">{kind}</strong><button type="button" class="btn-close" data-bs-dismiss="toast" aria-label="Close"></button></div><div class="toast-body">{message}</div></div>"#,
            message = clean_text(message),
        );
        self.container.append_html(&markup);
        state.toasts.push(Toast {
            id: id.clone(),
            markup,
        });
        id
    }

    /// Remove one toast. Returns false when the id is unknown.
    pub fn dismiss(&self, id: &str) -> bool {
        let mut state = self.state.lock();
        let before = state.toasts.len();
        state.toasts.retain(|toast| toast.id != id);
        if state.toasts.len() == before {
            return false;
        }
        let html: String = state.toasts.iter().map(|toast| toast.markup.as_str()).collect();
        self.container.set_inner_html(html);
        true
    }

    /// Number of visible toasts.
    pub fn len(&self) -> usize {
        self.state.lock().toasts.len()
    }

    /// No toast is visible.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of the visible toasts, oldest first.
    pub fn ids(&self) -> Vec<String> {
        self.state
            .lock()
            .toasts
            .iter()
            .map(|toast| toast.id.clone())
            .collect()
    }
}
