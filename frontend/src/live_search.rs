//! The search-as-you-type client.

use std::sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    Arc,
};

use tokio::sync::Notify;
use tracing::{debug, error, info};

use crate::{
    api::{search_posts, ApiError, HttpJsonClient, ReqwestJsonClient},
    components::{
        render_results, render_search_error, search_results::SEARCH_FAILED_MESSAGE,
        LoadingIndicator, SpinnerIndicator, ToastKind, ToastStack,
    },
    config::{FailureMode, ResponseOrdering, SearchConfig},
    debounce::Debouncer,
    dom::{Container, RESULTS_CONTAINER_ID},
    forms::{validate_search_submission, FormError},
};

/// Debounced search-as-you-type bound to one input and one results
/// container.
///
/// Every evaluation takes a ticket from a monotonically increasing counter.
/// Under [`ResponseOrdering::LatestRequestWins`] a response is rendered only
/// if its ticket is still the newest, so a slow early request cannot
/// overwrite fresher results (or repopulate a container cleared by a short
/// query).
pub struct LiveSearchClient<H, L> {
    inner: Arc<Inner<H, L>>,
    debouncer: Debouncer<String>,
}

struct Inner<H, L> {
    config: SearchConfig,
    http: H,
    loading: L,
    results: Container,
    toasts: ToastStack,
    latest_ticket: AtomicU64,
    in_flight: AtomicUsize,
    idle: Notify,
}

impl LiveSearchClient<ReqwestJsonClient, SpinnerIndicator> {
    /// Client over `reqwest` with the spinner indicator and a fresh
    /// `#searchResults` container.
    pub fn with_defaults(config: SearchConfig) -> Result<Self, ApiError> {
        Ok(Self::new(
            config,
            ReqwestJsonClient::new()?,
            SpinnerIndicator::default(),
            Container::new(RESULTS_CONTAINER_ID),
        ))
    }
}

impl<H, L> LiveSearchClient<H, L>
where
    H: HttpJsonClient + 'static,
    L: LoadingIndicator + 'static,
{
    /// Client rendering into `results`, with its own toast stack.
    pub fn new(config: SearchConfig, http: H, loading: L, results: Container) -> Self {
        let inner = Arc::new(Inner {
            config,
            http,
            loading,
            results,
            toasts: ToastStack::default(),
            latest_ticket: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            idle: Notify::new(),
        });

        let debouncer = {
            let delay = inner.config.debounce;
            let inner = Arc::clone(&inner);
            Debouncer::new(delay, move |raw: String| {
                if let Some(request) = Inner::begin(&inner, &raw) {
                    tokio::spawn(request.run(raw));
                }
            })
        };

        Self { inner, debouncer }
    }

    /// Input event handler: restart the settle timer with the new value.
    pub fn on_input(&self, raw_value: &str) {
        self.debouncer.trigger(raw_value.to_string());
    }

    /// Evaluate a value immediately, bypassing the debounce. Resolves once
    /// the request (if any) has settled.
    ///
    /// Cancel safe: dropping the future abandons the request and, if it was
    /// still the latest, removes the loading indicator.
    pub async fn search_now(&self, raw_value: &str) {
        self.debouncer.cancel();
        if let Some(request) = Inner::begin(&self.inner, raw_value) {
            request.run(raw_value.to_string()).await;
        }
    }

    /// Search form submit handler. Blank submissions are refused.
    pub async fn submit(&self, raw_value: &str) -> Result<(), FormError> {
        let value = validate_search_submission(raw_value)?;
        self.search_now(value).await;
        Ok(())
    }

    /// Drop a scheduled evaluation that has not fired yet.
    pub fn cancel_pending(&self) -> bool {
        self.debouncer.cancel()
    }

    /// A keystroke is waiting for its settle delay.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Number of dispatched searches that have not completed.
    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.load(Ordering::SeqCst)
    }

    /// Wait until no keystroke is pending and no search is in flight.
    pub async fn settled(&self) {
        loop {
            let idle = self.inner.idle.notified();
            if self.debouncer.is_pending() {
                tokio::time::sleep(self.debouncer.delay()).await;
                continue;
            }
            if self.in_flight() == 0 {
                return;
            }
            idle.await;
        }
    }

    /// Container the result cards are rendered into.
    pub fn results(&self) -> &Container {
        &self.inner.results
    }

    /// Toasts pushed under [`FailureMode::Toast`].
    pub fn toasts(&self) -> &ToastStack {
        &self.inner.toasts
    }

    /// Settings the client was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.inner.config
    }
}

impl<H, L> Inner<H, L>
where
    H: HttpJsonClient,
    L: LoadingIndicator,
{
    /// Synchronous half of an evaluation. Returns the request to dispatch,
    /// or `None` when the query is too short.
    fn begin(this: &Arc<Self>, raw: &str) -> Option<InFlight<H, L>> {
        let ticket = this.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;

        if raw.trim().chars().count() < this.config.min_query_chars {
            debug!(ticket, "query below minimum length, clearing results");
            this.loading.hide(&this.results);
            return None;
        }

        this.loading.show(&this.results);
        this.in_flight.fetch_add(1, Ordering::SeqCst);
        Some(InFlight {
            inner: Arc::clone(this),
            ticket,
            finished: false,
        })
    }

    async fn dispatch(&self, ticket: u64, raw: String) {
        info!(query = %raw, ticket, "dispatching search");
        let outcome = search_posts(&self.http, &self.config, &raw).await;

        if let Err(err) = &outcome {
            error!(query = %raw, ticket, error = %err, "Search failed");
        }

        if self.is_superseded(ticket) {
            debug!(query = %raw, ticket, "discarding response to superseded search");
            return;
        }

        match outcome {
            Ok(response) => {
                debug!(ticket, posts = response.posts.len(), "rendering search results");
                let html = render_results(&response, self.config.locale);
                self.loading.hide(&self.results);
                self.results.set_inner_html(html);
            },
            Err(_) => {
                self.loading.hide(&self.results);
                self.present_failure();
            },
        }
    }

    fn is_superseded(&self, ticket: u64) -> bool {
        match self.config.ordering {
            ResponseOrdering::LatestRequestWins => {
                self.latest_ticket.load(Ordering::SeqCst) != ticket
            },
            ResponseOrdering::LastResponseWins => false,
        }
    }

    fn present_failure(&self) {
        match self.config.failure_mode {
            FailureMode::Silent => {},
            FailureMode::Inline => self.results.set_inner_html(render_search_error()),
            FailureMode::Toast => {
                self.toasts.show(SEARCH_FAILED_MESSAGE, ToastKind::Error);
            },
        }
    }
}

/// One dispatched search. Dropping it, finished or not, releases its slot in
/// the in-flight count.
struct InFlight<H, L>
where
    H: HttpJsonClient,
    L: LoadingIndicator,
{
    inner: Arc<Inner<H, L>>,
    ticket: u64,
    finished: bool,
}

impl<H, L> InFlight<H, L>
where
    H: HttpJsonClient,
    L: LoadingIndicator,
{
    async fn run(mut self, raw: String) {
        self.inner.dispatch(self.ticket, raw).await;
        self.finished = true;
    }
}

impl<H, L> Drop for InFlight<H, L>
where
    H: HttpJsonClient,
    L: LoadingIndicator,
{
    fn drop(&mut self) {
        let inner = &self.inner;
        if !self.finished && inner.latest_ticket.load(Ordering::SeqCst) == self.ticket {
            debug!(ticket = self.ticket, "search abandoned, removing loading indicator");
            inner.loading.hide(&inner.results);
        }
        if inner.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            inner.idle.notify_waiters();
        }
    }
}
