/*
[INPUT]:  Account identifier, instrument symbol, and query parameters
[OUTPUT]: Position data (listing, per-instrument detail, closure)
[POS]:    HTTP layer - positions endpoints
[UPDATE]: When adding new position endpoints or changing parameters
*/

use crate::http::client::versioned;
use crate::http::{OandaClient, Result};
use reqwest::Method;
use serde_json::Value;

impl OandaClient {
    /// Get a list of all open positions
    ///
    /// GET v1/accounts/{account_id}/positions
    pub async fn get_positions(&self, account_id: &str, params: &[(&str, &str)]) -> Result<Value> {
        self.request(
            Method::GET,
            &versioned(&["accounts", account_id, "positions"]),
            params,
        )
        .await
    }

    /// Get the position for an instrument
    ///
    /// GET v1/accounts/{account_id}/positions/{instrument}
    pub async fn get_position(
        &self,
        account_id: &str,
        instrument: &str,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(
            Method::GET,
            &versioned(&["accounts", account_id, "positions", instrument]),
            params,
        )
        .await
    }

    /// Close an existing position
    ///
    /// DELETE v1/accounts/{account_id}/positions/{instrument}
    pub async fn close_position(
        &self,
        account_id: &str,
        instrument: &str,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(
            Method::DELETE,
            &versioned(&["accounts", account_id, "positions", instrument]),
            params,
        )
        .await
    }
}
