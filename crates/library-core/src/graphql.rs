//! GraphQL Data Access
//!
//! A `Client` is an immutable value: endpoint, optional bearer token and the
//! injected transport. Every resolution may hand out a fresh one.

use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, LibraryResult};
use crate::models::Item;

// ========================
// Operations
// ========================

pub const LIST_ITEMS_OPERATION: &str = "MyBooks";
pub const LIST_ITEMS_QUERY: &str = "query MyBooks($keyword: String) { myBooks(keyword: $keyword) { id title content tags createdAt } }";

pub const SAVE_ITEM_OPERATION: &str = "SaveBook";
pub const SAVE_ITEM_MUTATION: &str = "mutation SaveBook($input: SaveBookInput!) { saveBook(input: $input) { id title content tags createdAt } }";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub operation_name: &'static str,
    pub variables: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlErrorEntry {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Serialize)]
struct ListItemsVars<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListItemsData {
    my_books: Vec<Item>,
}

#[derive(Serialize)]
struct SaveItemInput<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct SaveItemVars<'a> {
    input: SaveItemInput<'a>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SaveItemData {
    save_book: Item,
}

// ========================
// Transport
// ========================

/// Raw HTTP outcome; status interpretation is the client's job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// POSTs a GraphQL request body. Errors only for transport-level failures.
#[async_trait(?Send)]
pub trait Transport {
    async fn post(&self, endpoint: &str, bearer: Option<&str>, request: &GraphQlRequest) -> LibraryResult<HttpResponse>;
}

// ========================
// Client
// ========================

#[derive(Clone)]
pub struct Client {
    endpoint: String,
    bearer: Option<String>,
    transport: Rc<dyn Transport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Client {
    pub fn anonymous(endpoint: impl Into<String>, transport: Rc<dyn Transport>) -> Self {
        Self { endpoint: endpoint.into(), bearer: None, transport }
    }

    pub fn authenticated(endpoint: impl Into<String>, token: impl Into<String>, transport: Rc<dyn Transport>) -> Self {
        Self { endpoint: endpoint.into(), bearer: Some(token.into()), transport }
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer.is_some()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one operation and decode its `data`
    pub async fn execute<T: DeserializeOwned>(&self, request: &GraphQlRequest) -> LibraryResult<T> {
        let response = self
            .transport
            .post(&self.endpoint, self.bearer.as_deref(), request)
            .await?;
        decode_response(request.operation_name, response)
    }

    /// List the caller's items, optionally filtered server-side
    pub async fn list_items(&self, keyword: Option<&str>) -> LibraryResult<Vec<Item>> {
        let request = list_items_request(keyword)?;
        let data: ListItemsData = self.execute(&request).await?;
        Ok(data.my_books)
    }

    pub async fn save_item(&self, content: &str) -> LibraryResult<Item> {
        let variables = serde_json::to_value(SaveItemVars { input: SaveItemInput { content } })
            .map_err(|e| LibraryError::InvalidInput(e.to_string()))?;
        let request = GraphQlRequest {
            query: SAVE_ITEM_MUTATION,
            operation_name: SAVE_ITEM_OPERATION,
            variables,
        };
        let data: SaveItemData = self.execute(&request).await?;
        Ok(data.save_book)
    }
}

pub fn list_items_request(keyword: Option<&str>) -> LibraryResult<GraphQlRequest> {
    let variables = serde_json::to_value(ListItemsVars { keyword })
        .map_err(|e| LibraryError::InvalidInput(e.to_string()))?;
    Ok(GraphQlRequest {
        query: LIST_ITEMS_QUERY,
        operation_name: LIST_ITEMS_OPERATION,
        variables,
    })
}

/// Map an HTTP outcome onto data or the error taxonomy.
/// A GraphQL error payload wins over any partial `data`.
fn decode_response<T: DeserializeOwned>(operation: &str, response: HttpResponse) -> LibraryResult<T> {
    let parsed = serde_json::from_str::<GraphQlResponse<T>>(&response.body);

    if !response.is_success() {
        // Servers often explain a 4xx/5xx in the errors array
        if let Ok(GraphQlResponse { errors: Some(errors), .. }) = &parsed {
            if let Some(first) = errors.first() {
                return Err(LibraryError::service(first.message.clone()));
            }
        }
        return Err(LibraryError::NetworkFailure(format!("{} returned HTTP {}", operation, response.status)));
    }

    let parsed = parsed.map_err(|e| {
        log::warn!("{} response could not be decoded: {}", operation, e);
        LibraryError::ServiceError { message: None }
    })?;

    if let Some(errors) = parsed.errors.filter(|errors| !errors.is_empty()) {
        let message = errors
            .iter()
            .map(|e| e.message.trim())
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(LibraryError::service(message));
    }

    parsed.data.ok_or(LibraryError::ServiceError { message: None })
}
