//! Markup producers for the search UI.

pub mod loading_spinner;
pub mod search_results;
pub mod toast;

pub use loading_spinner::{LoadingIndicator, SpinnerIndicator, SpinnerSize};
pub use search_results::{render_post_card, render_results, render_search_error};
pub use toast::{ToastKind, ToastStack};
