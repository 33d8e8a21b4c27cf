//! Loading indicator.

use crate::dom::Container;

/// Busy state shown in a container while a request is in flight.
pub trait LoadingIndicator: Send + Sync {
    /// Put the busy markup into `container`.
    fn show(&self, container: &Container);
    /// Remove the busy markup, leaving `container` empty.
    fn hide(&self, container: &Container);
}

/// Bootstrap spinner size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    /// `spinner-border-sm`.
    Small,
    /// Bootstrap default size.
    #[default]
    Medium,
}

impl SpinnerSize {
    fn class(self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-border spinner-border-sm",
            SpinnerSize::Medium => "spinner-border",
        }
    }
}

/// Centered Bootstrap spinner with a screen-reader label.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinnerIndicator {
    /// Spinner size.
    pub size: SpinnerSize,
}

impl SpinnerIndicator {
    /// Markup written into the container by [`LoadingIndicator::show`].
    pub fn markup(&self) -> String {
        format!(
            r#"<div class="text-center"><div class="{}" role="status"><span class="visually-hidden">Loading...</span></div></div>"#,
            self.size.class()
        )
    }
}

impl LoadingIndicator for SpinnerIndicator {
    fn show(&self, container: &Container) {
        container.set_inner_html(self.markup());
    }

    fn hide(&self, container: &Container) {
        container.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_hide_leaves_container_empty() {
        let container = Container::new("searchResults");
        let spinner = SpinnerIndicator::default();

        spinner.show(&container);
        assert_eq!(
            container.inner_html(),
            r#"<div class="text-center"><div class="spinner-border" role="status"><span class="visually-hidden">Loading...</span></div></div>"#
        );

        spinner.hide(&container);
        assert!(container.is_empty());
    }

    #[test]
    fn small_spinner_uses_compact_class() {
        let spinner = SpinnerIndicator {
            size: SpinnerSize::Small,
        };
        assert!(spinner.markup().contains("spinner-border spinner-border-sm"));
    }
}
