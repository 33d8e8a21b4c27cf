//! Debounced live search for the blog.
//!
//! [`LiveSearchClient`] watches one search input, waits for typing to
//! settle, queries `/api/v1/search` and renders result cards into a
//! [`Container`]. The HTTP transport and the loading indicator are injected
//! through [`HttpJsonClient`] and [`LoadingIndicator`].

pub mod api;
pub mod components;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod forms;
pub mod live_search;

pub use api::{search_posts, search_url, ApiError, HttpJsonClient, ReqwestJsonClient};
pub use components::{LoadingIndicator, SpinnerIndicator, ToastKind, ToastStack};
pub use config::{FailureMode, ResponseOrdering, SearchConfig};
pub use debounce::Debouncer;
pub use dom::Container;
pub use forms::{validate_search_submission, FormError};
pub use live_search::LiveSearchClient;
