//! In-memory page elements.

use std::sync::Arc;

use tokio::sync::watch;

/// Element id of the live-search results container on the hosting page.
pub const RESULTS_CONTAINER_ID: &str = "searchResults";

/// Element id of the toast container.
pub const TOAST_CONTAINER_ID: &str = "toastContainer";

/// Handle to an element whose inner HTML the client replaces.
///
/// Clones share the same content. Every change is published to
/// [`Container::subscribe`] receivers; writes that leave the content
/// unchanged are not.
#[derive(Debug, Clone)]
pub struct Container {
    id: Arc<str>,
    html: Arc<watch::Sender<String>>,
}

impl Container {
    /// Empty container with the given element id.
    pub fn new(id: &str) -> Self {
        let (html, _) = watch::channel(String::new());
        Self {
            id: Arc::from(id),
            html: Arc::new(html),
        }
    }

    /// Element id, as used in `querySelector("#id")`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current markup.
    pub fn inner_html(&self) -> String {
        self.html.borrow().clone()
    }

    /// Replace the markup.
    pub fn set_inner_html(&self, html: impl Into<String>) {
        let html = html.into();
        self.html.send_if_modified(|current| {
            if *current == html {
                return false;
            }
            *current = html;
            true
        });
    }

    /// Append markup after the current content.
    pub fn append_html(&self, html: &str) {
        if html.is_empty() {
            return;
        }
        self.html.send_modify(|current| current.push_str(html));
    }

    /// Remove all markup.
    pub fn clear(&self) {
        self.set_inner_html(String::new());
    }

    /// True when the container holds nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.html.borrow().trim().is_empty()
    }

    /// Receiver notified whenever the markup changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.html.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_content() {
        let container = Container::new(RESULTS_CONTAINER_ID);
        let alias = container.clone();
        alias.set_inner_html("<p>hi</p>");
        assert_eq!(container.inner_html(), "<p>hi</p>");
        assert_eq!(container.id(), "searchResults");
        container.clear();
        assert!(alias.is_empty());
    }

    #[test]
    fn unchanged_writes_do_not_notify() {
        let container = Container::new("box");
        let mut rx = container.subscribe();
        container.set_inner_html("a");
        assert!(rx.has_changed().unwrap_or(false));
        rx.borrow_and_update();
        container.set_inner_html("a");
        assert!(!rx.has_changed().unwrap_or(true));
        container.append_html("b");
        assert_eq!(*rx.borrow_and_update(), "ab");
    }
}
