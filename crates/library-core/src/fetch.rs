//! Fetch Coordinator
//!
//! Every request takes the next sequence number. A result is applied only if
//! its number is still the highest issued; anything older is dropped
//! untouched, whether it succeeded or failed.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{LibraryError, LibraryResult};
use crate::models::Item;
use crate::resolver::ClientResolver;
use crate::view_state::StateHandle;

/// Waits out the debounce interval on the host's event loop
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

pub struct FetchCoordinator<S: StateHandle> {
    state: S,
    resolver: ClientResolver,
    timer: Rc<dyn Timer>,
    debounce: Duration,
    latest_seq: Cell<u64>,
}

impl<S: StateHandle> FetchCoordinator<S> {
    pub fn new(state: S, resolver: ClientResolver, timer: Rc<dyn Timer>, debounce: Duration) -> Self {
        Self {
            state,
            resolver,
            timer,
            debounce,
            latest_seq: Cell::new(0),
        }
    }

    /// Highest sequence number issued so far
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq.get()
    }

    pub fn resolver(&self) -> &ClientResolver {
        &self.resolver
    }

    fn issue(&self) -> u64 {
        let seq = self.latest_seq.get() + 1;
        self.latest_seq.set(seq);
        seq
    }

    fn ensure_current(&self, seq: u64) -> LibraryResult<()> {
        let current = self.latest_seq.get();
        if seq == current {
            Ok(())
        } else {
            Err(LibraryError::StaleResponse { seq, current })
        }
    }

    /// Fetch right away (mount, retries, after a save)
    pub async fn fetch(&self, keyword: Option<String>) -> LibraryResult<Vec<Item>> {
        let seq = self.issue();
        self.run(seq, keyword).await
    }

    /// Fetch after the quiet interval, unless a newer request shows up first
    pub async fn fetch_debounced(&self, keyword: Option<String>) -> LibraryResult<Vec<Item>> {
        let seq = self.issue();
        self.timer.sleep(self.debounce).await;
        if let Err(stale) = self.ensure_current(seq) {
            log::debug!("search {:?} superseded before it was sent", keyword);
            return Err(stale);
        }
        self.run(seq, keyword).await
    }

    async fn run(&self, seq: u64, keyword: Option<String>) -> LibraryResult<Vec<Item>> {
        self.state.update(|s| s.begin_loading());
        log::debug!("fetch #{} keyword={:?}", seq, keyword);

        let client = self.resolver.resolve_client().await;
        let result = client.list_items(keyword.as_deref()).await;

        if let Err(stale) = self.ensure_current(seq) {
            log::debug!("dropping result of fetch #{}: {}", seq, stale);
            return Err(stale);
        }

        match result {
            Ok(items) => {
                log::debug!("fetch #{} returned {} items", seq, items.len());
                let applied = items.clone();
                self.state.update(move |s| s.apply_items(applied));
                Ok(items)
            }
            Err(e) => {
                log::warn!("fetch #{} failed: {}", seq, e);
                let message = e.user_message();
                self.state.update(move |s| s.apply_error(message));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::{GraphQlRequest, HttpResponse, Transport};
    use crate::models::{FetchStatus, ViewState};
    use crate::resolver::NoSession;
    use std::cell::RefCell;

    struct TokioTimer;

    #[async_trait(?Send)]
    impl Timer for TokioTimer {
        async fn sleep(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    /// Answers every request with one book titled after the keyword
    #[derive(Default)]
    struct EchoTransport {
        keywords: RefCell<Vec<Option<String>>>,
    }

    #[async_trait(?Send)]
    impl Transport for EchoTransport {
        async fn post(&self, _: &str, _: Option<&str>, request: &GraphQlRequest) -> LibraryResult<HttpResponse> {
            let keyword = request.variables.get("keyword").and_then(|k| k.as_str()).map(str::to_string);
            self.keywords.borrow_mut().push(keyword.clone());
            let title = keyword.unwrap_or_else(|| "all".into());
            let body = serde_json::json!({
                "data": {"myBooks": [{"id": "1", "title": title, "content": "", "tags": [], "createdAt": "2024-01-01T00:00:00Z"}]}
            });
            Ok(HttpResponse::ok(body.to_string()))
        }
    }

    fn coordinator(transport: Rc<EchoTransport>) -> (Rc<RefCell<ViewState>>, FetchCoordinator<Rc<RefCell<ViewState>>>) {
        let state = Rc::new(RefCell::new(ViewState::new()));
        let resolver = ClientResolver::new("e", Rc::new(NoSession), transport);
        let fetcher = FetchCoordinator::new(state.clone(), resolver, Rc::new(TokioTimer), Duration::from_millis(300));
        (state, fetcher)
    }

    #[tokio::test]
    async fn test_fetch_applies_items() {
        let transport = Rc::new(EchoTransport::default());
        let (state, fetcher) = coordinator(transport.clone());
        let items = fetcher.fetch(None).await.unwrap();
        assert_eq!(items[0].title, "all");
        assert_eq!(state.borrow().status, FetchStatus::Idle);
        assert_eq!(state.borrow().items, items);
        assert_eq!(fetcher.latest_seq(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_debounce_never_sends() {
        let transport = Rc::new(EchoTransport::default());
        let (state, fetcher) = coordinator(transport.clone());

        let first = fetcher.fetch_debounced(Some("React".into()));
        let second = async {
            tokio::time::sleep(Duration::from_millis(120)).await;
            fetcher.fetch_debounced(Some("React H".into())).await
        };
        let (first, second) = tokio::join!(first, second);

        assert!(first.unwrap_err().is_stale());
        assert_eq!(second.unwrap()[0].title, "React H");
        assert_eq!(*transport.keywords.borrow(), vec![Some("React H".to_string())]);
        assert_eq!(state.borrow().items[0].title, "React H");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_debounce_leaves_state_untouched() {
        let transport = Rc::new(EchoTransport::default());
        let (state, fetcher) = coordinator(transport.clone());

        let pending = fetcher.fetch_debounced(Some("a".into()));
        let immediate = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            fetcher.fetch(None).await
        };
        let (pending, immediate) = tokio::join!(pending, immediate);

        assert!(pending.unwrap_err().is_stale());
        assert!(immediate.is_ok());
        assert_eq!(transport.keywords.borrow().len(), 1);
        assert_eq!(state.borrow().items[0].title, "all");
    }
}
