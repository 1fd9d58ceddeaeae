//! Identity token lookup through the host page's auth bootstrap.

use async_trait::async_trait;
use library_core::{LibraryError, LibraryResult, TokenProvider};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Resolves to the signed-in user's ID token, or null/undefined without a session
    #[wasm_bindgen(catch, js_namespace = ["window", "__SHELF_AUTH__"], js_name = getIdToken)]
    async fn get_id_token() -> Result<JsValue, JsValue>;
}

/// Token provider backed by `window.__SHELF_AUTH__.getIdToken()`
pub struct HostTokens;

#[async_trait(?Send)]
impl TokenProvider for HostTokens {
    async fn id_token(&self) -> LibraryResult<Option<String>> {
        let value = get_id_token()
            .await
            .map_err(|err| LibraryError::AuthUnavailable(describe(&err)))?;
        serde_wasm_bindgen::from_value(value).map_err(|err| LibraryError::AuthUnavailable(err.to_string()))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}
