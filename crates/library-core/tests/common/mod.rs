//! Shared fakes for controller integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use library_core::{
    FetchStatus, GraphQlRequest, HttpResponse, LibraryConfig, LibraryController, LibraryError, LibraryResult,
    StateHandle, Timer, TokenProvider, Transport, ViewState,
};
use tokio::sync::oneshot;

pub struct TokioTimer;

#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// View state that also records every status it passes through
#[derive(Clone, Default)]
pub struct RecordingState {
    pub inner: Rc<RefCell<ViewState>>,
    pub statuses: Rc<RefCell<Vec<FetchStatus>>>,
}

impl RecordingState {
    pub fn new() -> Self {
        let state = Self::default();
        state.statuses.borrow_mut().push(FetchStatus::Idle);
        state
    }

    pub fn statuses(&self) -> Vec<FetchStatus> {
        self.statuses.borrow().clone()
    }
}

impl StateHandle for RecordingState {
    fn update(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.inner.borrow_mut());
        let status = self.inner.borrow().status;
        let mut statuses = self.statuses.borrow_mut();
        if statuses.last() != Some(&status) {
            statuses.push(status);
        }
    }

    fn with<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        Some(f(&self.inner.borrow()))
    }
}

/// View state the host can tear down while requests are still in flight
#[derive(Clone)]
pub struct DisposableState(Rc<RefCell<Option<ViewState>>>);

impl DisposableState {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Some(ViewState::new()))))
    }

    pub fn dispose(&self) {
        self.0.borrow_mut().take();
    }
}

impl StateHandle for DisposableState {
    fn update(&self, f: impl FnOnce(&mut ViewState)) {
        if let Some(state) = self.0.borrow_mut().as_mut() {
            f(state);
        }
    }

    fn with<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        self.0.borrow().as_ref().map(f)
    }
}

pub enum Tokens {
    Session(&'static str),
    NoSession,
    Rejects,
}

#[async_trait(?Send)]
impl TokenProvider for Tokens {
    async fn id_token(&self) -> LibraryResult<Option<String>> {
        match self {
            Tokens::Session(token) => Ok(Some(token.to_string())),
            Tokens::NoSession => Ok(None),
            Tokens::Rejects => Err(LibraryError::AuthUnavailable("auth/user-token-expired".into())),
        }
    }
}

/// A request the fake service received
#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub operation: &'static str,
    pub keyword: Option<String>,
    pub bearer: Option<String>,
}

pub enum Reply {
    Now(LibraryResult<HttpResponse>),
    /// Held until the test releases it
    Gated(oneshot::Receiver<LibraryResult<HttpResponse>>),
}

/// Scripted data service: replies are consumed in request order; once the
/// script runs out every request gets an empty list
#[derive(Default)]
pub struct FakeService {
    pub seen: RefCell<Vec<Seen>>,
    script: RefCell<VecDeque<Reply>>,
}

impl FakeService {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reply(&self, reply: Reply) {
        self.script.borrow_mut().push_back(reply);
    }

    pub fn reply_books(&self, titles: &[&str]) {
        self.reply(Reply::Now(Ok(HttpResponse::ok(books_body(titles)))));
    }

    /// Queue a gated reply and return its release handle
    pub fn gate(&self) -> oneshot::Sender<LibraryResult<HttpResponse>> {
        let (tx, rx) = oneshot::channel();
        self.reply(Reply::Gated(rx));
        tx
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeService {
    async fn post(&self, _endpoint: &str, bearer: Option<&str>, request: &GraphQlRequest) -> LibraryResult<HttpResponse> {
        self.seen.borrow_mut().push(Seen {
            operation: request.operation_name,
            keyword: request.variables.get("keyword").and_then(|k| k.as_str()).map(str::to_string),
            bearer: bearer.map(str::to_string),
        });
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Reply::Now(result)) => result,
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(LibraryError::NetworkFailure("gate dropped".into()))),
            None => Ok(HttpResponse::ok(books_body(&[]))),
        }
    }
}

pub fn books_body(titles: &[&str]) -> String {
    let books: Vec<_> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            serde_json::json!({
                "id": format!("{}", i + 1),
                "title": title,
                "content": format!("About {}", title),
                "tags": ["test"],
                "createdAt": "2024-01-01T00:00:00Z"
            })
        })
        .collect();
    serde_json::json!({ "data": { "myBooks": books } }).to_string()
}

pub fn titles(state: &ViewState) -> Vec<String> {
    state.items.iter().map(|i| i.title.clone()).collect()
}

pub fn controller(tokens: Tokens, service: &Rc<FakeService>) -> (RecordingState, LibraryController<RecordingState>) {
    let state = RecordingState::new();
    let controller = controller_on(state.clone(), tokens, service);
    (state, controller)
}

pub fn controller_on<S: StateHandle>(state: S, tokens: Tokens, service: &Rc<FakeService>) -> LibraryController<S> {
    let config = LibraryConfig {
        api_url: "http://library.test".into(),
        ..LibraryConfig::default()
    };
    LibraryController::new(&config, state, Rc::new(tokens), service.clone(), Rc::new(TokioTimer))
}
