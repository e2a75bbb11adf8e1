/*
[INPUT]:  Account identifiers and query parameters
[OUTPUT]: Account data (listing, details, sandbox creation)
[POS]:    HTTP layer - accounts endpoints
[UPDATE]: When adding new account endpoints or changing parameters
*/

use crate::http::client::versioned;
use crate::http::{OandaClient, Result};
use reqwest::Method;
use serde_json::Value;

impl OandaClient {
    /// Create an account. Valid only in the sandbox environment.
    ///
    /// POST v1/accounts
    pub async fn create_account(&self, params: &[(&str, &str)]) -> Result<Value> {
        self.request(Method::POST, &versioned(&["accounts"]), params)
            .await
    }

    /// Get accounts for a user
    ///
    /// GET v1/accounts
    pub async fn get_accounts(&self, params: &[(&str, &str)]) -> Result<Value> {
        self.request(Method::GET, &versioned(&["accounts"]), params)
            .await
    }

    /// Get account information
    ///
    /// GET v1/accounts/{account_id}
    pub async fn get_account(&self, account_id: &str, params: &[(&str, &str)]) -> Result<Value> {
        self.request(Method::GET, &versioned(&["accounts", account_id]), params)
            .await
    }
}
