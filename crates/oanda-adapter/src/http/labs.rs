/*
[INPUT]:  Analytics query parameters (instrument, period)
[OUTPUT]: Forex Labs analytics data (calendar, ratios, spreads, COT, order book)
[POS]:    HTTP layer - labs endpoints, outside the versioned prefix
[UPDATE]: When adding new labs endpoints or changing parameters
*/

use crate::http::{OandaClient, Result};
use reqwest::Method;
use serde_json::Value;

// Labs endpoints carry their own `labs/v1` sub-path and bypass the
// `v1` prefix used by the core API.

impl OandaClient {
    /// Return up to 1 year of economic calendar info
    ///
    /// GET labs/v1/calendar
    pub async fn get_eco_calendar(&self, params: &[(&str, &str)]) -> Result<Value> {
        self.request(Method::GET, "labs/v1/calendar", params).await
    }

    /// Return up to 1 year of historical position ratios
    ///
    /// GET labs/v1/historical_position_ratios
    pub async fn get_historical_position_ratios(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        self.request(Method::GET, "labs/v1/historical_position_ratios", params)
            .await
    }

    /// Return up to 1 year of spread information
    ///
    /// GET labs/v1/spreads
    pub async fn get_historical_spreads(&self, params: &[(&str, &str)]) -> Result<Value> {
        self.request(Method::GET, "labs/v1/spreads", params).await
    }

    /// Return up to 4 years of Commitments of Traders data from the CFTC
    ///
    /// GET labs/v1/commitments_of_traders
    pub async fn get_commitments_of_traders(&self, params: &[(&str, &str)]) -> Result<Value> {
        self.request(Method::GET, "labs/v1/commitments_of_traders", params)
            .await
    }

    /// Return up to 1 year of order book data
    ///
    /// GET labs/v1/orderbook_data
    pub async fn get_orderbook(&self, params: &[(&str, &str)]) -> Result<Value> {
        self.request(Method::GET, "labs/v1/orderbook_data", params)
            .await
    }
}
