/*
[INPUT]:  Parsed stream events and raw error bodies
[OUTPUT]: Application-defined event handling
[POS]:    Stream layer - listener interface supplied by the embedding application
[UPDATE]: When the event dispatch contract changes
*/

use serde_json::Value;

/// Listener interface for stream events.
///
/// The stream never interprets event payloads beyond the heartbeat filter;
/// everything else is the handler's business.
pub trait StreamHandler {
    /// Called for each decoded event that survives the heartbeat filter
    fn on_event(&mut self, event: Value);

    /// Called with the raw response body when the stream endpoint answers
    /// with a non-200 status. The receive loop keeps running afterwards;
    /// see [`OandaStreamer::start`](crate::stream::OandaStreamer::start).
    fn on_error(&mut self, body: &[u8]) {
        let _ = body;
    }
}
