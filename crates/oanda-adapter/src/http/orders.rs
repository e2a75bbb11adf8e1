/*
[INPUT]:  Account/order identifiers and order parameters
[OUTPUT]: Order data (listing, creation, modification, closure)
[POS]:    HTTP layer - orders endpoints
[UPDATE]: When adding new order endpoints or changing parameters
*/

use crate::http::client::versioned;
use crate::http::{OandaClient, Result};
use reqwest::Method;
use serde_json::Value;

impl OandaClient {
    /// Get orders for an account
    ///
    /// GET v1/accounts/{account_id}/orders
    pub async fn get_orders(&self, account_id: &str, params: &[(&str, &str)]) -> Result<Value> {
        self.request(
            Method::GET,
            &versioned(&["accounts", account_id, "orders"]),
            params,
        )
        .await
    }

    /// Create a new order
    ///
    /// POST v1/accounts/{account_id}/orders
    pub async fn create_order(&self, account_id: &str, params: &[(&str, &str)]) -> Result<Value> {
        self.request(
            Method::POST,
            &versioned(&["accounts", account_id, "orders"]),
            params,
        )
        .await
    }

    /// Get information for an order
    ///
    /// GET v1/accounts/{account_id}/orders/{order_id}
    pub async fn get_order(
        &self,
        account_id: &str,
        order_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(
            Method::GET,
            &versioned(&["accounts", account_id, "orders", order_id]),
            params,
        )
        .await
    }

    /// Modify an existing order
    ///
    /// PATCH v1/accounts/{account_id}/orders/{order_id}
    pub async fn modify_order(
        &self,
        account_id: &str,
        order_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(
            Method::PATCH,
            &versioned(&["accounts", account_id, "orders", order_id]),
            params,
        )
        .await
    }

    /// Close an order
    ///
    /// DELETE v1/accounts/{account_id}/orders/{order_id}
    pub async fn close_order(
        &self,
        account_id: &str,
        order_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(
            Method::DELETE,
            &versioned(&["accounts", account_id, "orders", order_id]),
            params,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, OandaClient};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_order_body_not_query() {
        let server = MockServer::start().await;
        let mock_response = json!({
            "instrument": "EUR_USD",
            "price": 1.3,
            "tradeOpened": {"id": 175517237, "units": 100, "side": "buy"}
        });

        let _mock = Mock::given(method("POST"))
            .and(path("/v1/accounts/12345/orders"))
            .and(body_string_contains("instrument=EUR_USD"))
            .and(body_string_contains("units=100"))
            .and(body_string_contains("side=buy"))
            .and(body_string_contains("type=market"))
            .and(query_param_is_missing("instrument"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client = OandaClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let response = client
            .create_order(
                "12345",
                &[
                    ("instrument", "EUR_USD"),
                    ("units", "100"),
                    ("side", "buy"),
                    ("type", "market"),
                ],
            )
            .await
            .expect("create_order failed");

        assert_eq!(response, mock_response);
    }

    #[tokio::test]
    async fn test_modify_order_uses_patch() {
        let server = MockServer::start().await;
        let mock_response = json!({"id": 175517237, "units": 100, "stopLoss": 1.25});

        let _mock = Mock::given(method("PATCH"))
            .and(path("/v1/accounts/12345/orders/175517237"))
            .and(body_string_contains("stopLoss=1.25"))
            .and(query_param_is_missing("stopLoss"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client = OandaClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let response = client
            .modify_order("12345", "175517237", &[("stopLoss", "1.25")])
            .await
            .expect("modify_order failed");

        assert_eq!(response, mock_response);
    }

    #[tokio::test]
    async fn test_close_order_uses_delete() {
        let server = MockServer::start().await;
        let mock_response = json!({"id": 175517237, "instrument": "EUR_USD"});

        let _mock = Mock::given(method("DELETE"))
            .and(path("/v1/accounts/12345/orders/175517237"))
            .and(body_string_contains("diagnostics=true"))
            .and(query_param_is_missing("diagnostics"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client = OandaClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let response = client
            .close_order("12345", "175517237", &[("diagnostics", "true")])
            .await
            .expect("close_order failed");

        assert_eq!(response, mock_response);
    }
}
