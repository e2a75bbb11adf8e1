/*
[INPUT]:  Deployment environment selection
[OUTPUT]: Fixed base URLs for REST and streaming endpoints
[POS]:    Data layer - environment definitions
[UPDATE]: When OANDA deployment URLs change
*/

use serde::{Deserialize, Serialize};

/// Deployment environment for the REST API.
///
/// Each environment maps to a fixed base URL. `Sandbox` requires no access
/// token; `Practice` and `Live` expect one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Sandbox,
    #[default]
    Practice,
    Live,
}

impl Environment {
    /// Base URL for REST requests in this environment
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Sandbox => "http://api-sandbox.oanda.com",
            Environment::Practice => "https://api-fxpractice.oanda.com",
            Environment::Live => "https://api-fxtrade.oanda.com",
        }
    }
}

/// Deployment environment for the rates stream.
///
/// The sandbox has no streaming endpoint, so only practice and live exist
/// here. The URL includes the full `/v1/prices` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamEnvironment {
    #[default]
    Practice,
    Live,
}

impl StreamEnvironment {
    /// Full URL of the price stream in this environment
    pub fn stream_url(self) -> &'static str {
        match self {
            StreamEnvironment::Practice => "https://stream-fxpractice.oanda.com/v1/prices",
            StreamEnvironment::Live => "https://stream-fxtrade.oanda.com/v1/prices",
        }
    }
}
