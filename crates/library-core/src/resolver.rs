//! Client Resolver
//!
//! Picks an authenticated client when the token provider cooperates and an
//! anonymous one otherwise. Resolution itself never fails.

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::LibraryResult;
use crate::graphql::{Client, Transport};

/// Source of bearer tokens for the signed-in user.
///
/// `Ok(None)` means there is no session; `Err` covers expired tokens and
/// provider failures. Both lead to an anonymous client.
#[async_trait(?Send)]
pub trait TokenProvider {
    async fn id_token(&self) -> LibraryResult<Option<String>>;
}

/// Provider for hosts without any sign-in
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

#[async_trait(?Send)]
impl TokenProvider for NoSession {
    async fn id_token(&self) -> LibraryResult<Option<String>> {
        Ok(None)
    }
}

#[derive(Clone)]
pub struct ClientResolver {
    endpoint: String,
    tokens: Rc<dyn TokenProvider>,
    transport: Rc<dyn Transport>,
}

impl ClientResolver {
    pub fn new(endpoint: impl Into<String>, tokens: Rc<dyn TokenProvider>, transport: Rc<dyn Transport>) -> Self {
        Self { endpoint: endpoint.into(), tokens, transport }
    }

    pub async fn resolve_client(&self) -> Client {
        match self.tokens.id_token().await {
            Ok(Some(token)) if !token.trim().is_empty() => {
                Client::authenticated(self.endpoint.clone(), token, self.transport.clone())
            }
            Ok(_) => {
                log::debug!("no session, using anonymous client");
                Client::anonymous(self.endpoint.clone(), self.transport.clone())
            }
            Err(e) => {
                log::debug!("{}, using anonymous client", e);
                Client::anonymous(self.endpoint.clone(), self.transport.clone())
            }
        }
    }
}
