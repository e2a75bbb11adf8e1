/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public OANDA adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod stream;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    OandaClient,
    OandaError,
    Result,
};

// Re-export environments
pub use types::{Environment, StreamEnvironment};

// Re-export commonly used types from stream
pub use stream::{
    OandaStreamer,
    StreamHandle,
    StreamHandler,
    StreamParams,
};
