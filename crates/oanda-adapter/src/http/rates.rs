/*
[INPUT]:  Account identifier and query parameters
[OUTPUT]: Market data (instrument lists, prices, candles)
[POS]:    HTTP layer - rates endpoints
[UPDATE]: When adding new rates endpoints or changing parameters
*/

use crate::http::client::versioned;
use crate::http::{OandaClient, Result};
use reqwest::Method;
use serde_json::Value;

impl OandaClient {
    /// Get the instrument list available to an account
    ///
    /// GET v1/instruments?accountId={account_id}
    pub async fn get_instruments(
        &self,
        account_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        let mut query: Vec<(&str, &str)> = vec![("accountId", account_id)];
        query.extend_from_slice(params);
        self.request(Method::GET, &versioned(&["instruments"]), &query)
            .await
    }

    /// Get current prices
    ///
    /// GET v1/prices?instruments={instruments}
    pub async fn get_prices(&self, params: &[(&str, &str)]) -> Result<Value> {
        self.request(Method::GET, &versioned(&["prices"]), params)
            .await
    }

    /// Retrieve instrument history as candles
    ///
    /// GET v1/candles?instrument={instrument}&granularity={granularity}
    pub async fn get_history(&self, params: &[(&str, &str)]) -> Result<Value> {
        self.request(Method::GET, &versioned(&["candles"]), params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, OandaClient};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_instruments_forwards_account_id() {
        let server = MockServer::start().await;
        let mock_response = json!({
            "instruments": [
                {"instrument": "EUR_USD", "displayName": "EUR/USD", "pip": "0.0001"}
            ]
        });

        let _mock = Mock::given(method("GET"))
            .and(path("/v1/instruments"))
            .and(query_param("accountId", "12345"))
            .and(query_param("fields", "pip"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client = OandaClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let response = client
            .get_instruments("12345", &[("fields", "pip")])
            .await
            .expect("get_instruments failed");

        assert_eq!(response, mock_response);
    }

    #[tokio::test]
    async fn test_get_prices() {
        let server = MockServer::start().await;
        let mock_response = json!({
            "prices": [
                {"instrument": "EUR_USD", "bid": 1.3, "ask": 1.3001, "time": "2013-06-21T17:49:02Z"}
            ]
        });

        let _mock = Mock::given(method("GET"))
            .and(path("/v1/prices"))
            .and(query_param("instruments", "EUR_USD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client = OandaClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let response = client
            .get_prices(&[("instruments", "EUR_USD")])
            .await
            .expect("get_prices failed");

        assert_eq!(response, mock_response);
    }

    #[tokio::test]
    async fn test_get_history() {
        let server = MockServer::start().await;
        let mock_response = json!({
            "instrument": "EUR_USD",
            "granularity": "S5",
            "candles": [
                {"time": "2013-06-21T17:41:00Z", "openMid": 1.3, "closeMid": 1.3001}
            ]
        });

        let _mock = Mock::given(method("GET"))
            .and(path("/v1/candles"))
            .and(query_param("instrument", "EUR_USD"))
            .and(query_param("granularity", "S5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&mock_response))
            .expect(1)
            .mount(&server)
            .await;

        let client = OandaClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let response = client
            .get_history(&[("instrument", "EUR_USD"), ("granularity", "S5")])
            .await
            .expect("get_history failed");

        assert_eq!(response, mock_response);
    }
}
