/*
[INPUT]:  Account/transaction identifiers and query parameters
[OUTPUT]: Transaction history data
[POS]:    HTTP layer - transactions endpoints
[UPDATE]: When adding new transaction endpoints or changing parameters
*/

use crate::http::client::versioned;
use crate::http::{OandaClient, Result};
use reqwest::Method;
use serde_json::Value;

impl OandaClient {
    /// Get transaction history for an account
    ///
    /// GET v1/accounts/{account_id}/transactions
    pub async fn get_transaction_history(
        &self,
        account_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(
            Method::GET,
            &versioned(&["accounts", account_id, "transactions"]),
            params,
        )
        .await
    }

    /// Get information for a transaction
    ///
    /// GET v1/accounts/{account_id}/transactions/{transaction_id}
    pub async fn get_transaction(&self, account_id: &str, transaction_id: &str) -> Result<Value> {
        self.request(
            Method::GET,
            &versioned(&["accounts", account_id, "transactions", transaction_id]),
            &[],
        )
        .await
    }
}
