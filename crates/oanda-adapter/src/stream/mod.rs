/*
[INPUT]:  Streaming endpoint configuration and event handlers
[OUTPUT]: Long-lived price stream consumption
[POS]:    Stream layer - chunked HTTP rates streaming
[UPDATE]: When changing connection lifecycle or event dispatch
*/

pub mod client;
pub mod handler;

pub use client::{OandaStreamer, StreamHandle, StreamParams};
pub use handler::StreamHandler;
