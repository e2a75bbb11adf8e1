/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses as parsed JSON values
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod accounts;
pub mod client;
pub mod error;
pub mod labs;
pub mod orders;
pub mod positions;
pub mod rates;
pub mod trades;
pub mod transactions;

pub use client::{ClientConfig, OandaClient};
pub use error::{OandaError, Result};
