/*
[INPUT]:  Account/trade identifiers and trade parameters
[OUTPUT]: Trade data (listing, details, modification, closure)
[POS]:    HTTP layer - trades endpoints
[UPDATE]: When adding new trade endpoints or changing parameters
*/

use crate::http::client::versioned;
use crate::http::{OandaClient, Result};
use reqwest::Method;
use serde_json::Value;

impl OandaClient {
    /// Get a list of open trades
    ///
    /// GET v1/accounts/{account_id}/trades
    pub async fn get_trades(&self, account_id: &str, params: &[(&str, &str)]) -> Result<Value> {
        self.request(
            Method::GET,
            &versioned(&["accounts", account_id, "trades"]),
            params,
        )
        .await
    }

    /// Get information on a specific trade
    ///
    /// GET v1/accounts/{account_id}/trades/{trade_id}
    pub async fn get_trade(
        &self,
        account_id: &str,
        trade_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(
            Method::GET,
            &versioned(&["accounts", account_id, "trades", trade_id]),
            params,
        )
        .await
    }

    /// Modify an existing trade
    ///
    /// PATCH v1/accounts/{account_id}/trades/{trade_id}
    pub async fn modify_trade(
        &self,
        account_id: &str,
        trade_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(
            Method::PATCH,
            &versioned(&["accounts", account_id, "trades", trade_id]),
            params,
        )
        .await
    }

    /// Close an open trade
    ///
    /// DELETE v1/accounts/{account_id}/trades/{trade_id}
    pub async fn close_trade(
        &self,
        account_id: &str,
        trade_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(
            Method::DELETE,
            &versioned(&["accounts", account_id, "trades", trade_id]),
            params,
        )
        .await
    }
}
