/*
[INPUT]:  Stream environment, access token, account/instrument parameters
[OUTPUT]: Line-framed JSON price events dispatched to a handler
[POS]:    Stream layer - connection lifecycle and line framing loop
[UPDATE]: When changing connection lifecycle or framing behavior
*/

use crate::http::client::build_http_client;
use crate::http::{ClientConfig, OandaError, Result};
use crate::stream::StreamHandler;
use crate::types::StreamEnvironment;
use futures_util::StreamExt;
use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Parameters for a stream session.
///
/// An account id and at least one instrument are required; anything in
/// `extra` is forwarded verbatim as additional query parameters.
#[derive(Debug, Clone)]
pub struct StreamParams {
    pub account_id: String,
    pub instruments: Vec<String>,
    pub ignore_heartbeat: bool,
    pub extra: Vec<(String, String)>,
}

impl StreamParams {
    /// Stream parameters with heartbeats suppressed (the default)
    pub fn new(
        account_id: impl Into<String>,
        instruments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            instruments: instruments.into_iter().map(Into::into).collect(),
            ignore_heartbeat: true,
            extra: Vec::new(),
        }
    }

    /// Deliver heartbeat events to the handler instead of suppressing them
    pub fn with_heartbeats(mut self) -> Self {
        self.ignore_heartbeat = false;
        self
    }

    /// Forward an additional query parameter verbatim
    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    fn validate(&self) -> Result<()> {
        if self.account_id.is_empty() {
            return Err(OandaError::Config("stream requires an account id".into()));
        }
        if self.instruments.is_empty() {
            return Err(OandaError::Config(
                "stream requires at least one instrument".into(),
            ));
        }
        Ok(())
    }

    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("accountId".to_string(), self.account_id.clone()),
            ("instruments".to_string(), self.instruments.join(",")),
        ];
        query.extend(self.extra.iter().cloned());
        query
    }
}

/// Cloneable handle for disconnecting a running stream from another task
#[derive(Debug, Clone)]
pub struct StreamHandle {
    connected: Arc<AtomicBool>,
}

impl StreamHandle {
    /// Request disconnection; honored at the next line/chunk boundary
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    /// Whether the stream still considers itself connected
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

/// Streaming client for the OANDA rates stream.
///
/// [`start`](OandaStreamer::start) runs its receive loop on the caller's own
/// task and does not return until disconnected or a transport failure
/// propagates. Disconnection from outside goes through a [`StreamHandle`];
/// it takes effect at the next check point rather than aborting an in-flight
/// read, so the latency bound is one chunk/line.
#[derive(Debug)]
pub struct OandaStreamer {
    http_client: Client,
    stream_url: Url,
    connected: Arc<AtomicBool>,
}

impl OandaStreamer {
    /// Create a new streamer for an environment with default configuration
    pub fn new(environment: StreamEnvironment) -> Result<Self> {
        Self::with_config(environment, ClientConfig::default())
    }

    /// Create a new streamer for an environment with custom configuration
    pub fn with_config(environment: StreamEnvironment, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, environment.stream_url())
    }

    /// Create a new streamer against an explicit stream URL
    ///
    /// Intended for pointing the streamer at a mock server in tests.
    pub fn with_config_and_base_url(config: ClientConfig, stream_url: &str) -> Result<Self> {
        let http_client = build_http_client(&config)?;
        Ok(Self {
            http_client,
            stream_url: Url::parse(stream_url)?,
            connected: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Handle for disconnecting this streamer from another task or thread
    pub fn handle(&self) -> StreamHandle {
        StreamHandle {
            connected: self.connected.clone(),
        }
    }

    /// Request disconnection; honored at the next line/chunk boundary
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    /// Whether the receive loop still considers itself connected
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Start the stream and block the current task until disconnected.
    ///
    /// Each complete non-empty line of the response body is decoded as a
    /// JSON event. Heartbeat events (any object with a `heartbeat` key) are
    /// suppressed unless the params request otherwise; every surviving event
    /// goes to `handler.on_event`.
    ///
    /// A non-200 response is reported through `handler.on_error` with the
    /// raw body and does not terminate the loop: the stream re-requests
    /// immediately, with no backoff, until disconnected. Production callers
    /// wanting an upper bound on consecutive failures must wrap this call
    /// externally; the loop itself provides no guard.
    ///
    /// Transport failures and malformed (non-JSON) lines are fatal to the
    /// session and propagate as errors. Neither clears the connected flag,
    /// so `is_connected` still reports true after such an exit; a later
    /// `start` call reuses the streamer either way.
    pub async fn start<H: StreamHandler>(
        &self,
        params: &StreamParams,
        handler: &mut H,
    ) -> Result<()> {
        params.validate()?;
        let query = params.to_query();

        self.connected.store(true, Ordering::SeqCst);
        info!(
            account_id = %params.account_id,
            instruments = params.instruments.len(),
            "price stream starting"
        );

        while self.is_connected() {
            let response = self
                .http_client
                .get(self.stream_url.clone())
                .query(&query)
                .send()
                .await?;

            let status = response.status();
            if status != StatusCode::OK {
                let body = response.bytes().await?;
                warn!(%status, bytes = body.len(), "stream returned non-200 response");
                handler.on_error(&body);
                continue;
            }

            debug!("stream connected, receiving");
            self.receive(response, params.ignore_heartbeat, handler)
                .await?;
        }

        info!("price stream stopped");
        Ok(())
    }

    /// Consume one response body, dispatching complete lines as they arrive.
    ///
    /// The connected flag is re-checked before every line and between
    /// chunks; remote EOF returns normally so the outer loop can re-request.
    async fn receive<H: StreamHandler>(
        &self,
        response: Response,
        ignore_heartbeat: bool,
        handler: &mut H,
    ) -> Result<()> {
        let mut body = response.bytes_stream();
        let mut buf: Vec<u8> = Vec::new();

        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            buf.extend_from_slice(&chunk);

            while let Some(pos) = buf.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buf.drain(..=pos).collect();
                if !self.is_connected() {
                    return Ok(());
                }
                self.dispatch_line(&line[..pos], ignore_heartbeat, handler)?;
            }

            if !self.is_connected() {
                return Ok(());
            }
        }

        // Trailing unterminated line at remote EOF
        if self.is_connected() && !buf.is_empty() {
            let line = std::mem::take(&mut buf);
            self.dispatch_line(&line, ignore_heartbeat, handler)?;
        }

        Ok(())
    }

    fn dispatch_line<H: StreamHandler>(
        &self,
        line: &[u8],
        ignore_heartbeat: bool,
        handler: &mut H,
    ) -> Result<()> {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() {
            return Ok(());
        }

        let text = std::str::from_utf8(line)
            .map_err(|_| OandaError::InvalidResponse("stream line is not valid UTF-8".into()))?;
        // A malformed line means protocol desync; fail the session rather
        // than skip it.
        let event: Value = serde_json::from_str(text)?;

        if ignore_heartbeat && event.get("heartbeat").is_some() {
            debug!("heartbeat suppressed");
            return Ok(());
        }

        handler.on_event(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_params_query_shape() {
        let params = StreamParams::new("12345", ["EUR_USD", "USD_JPY"])
            .with_extra("sessionId", "abc123");
        let query = params.to_query();

        assert_eq!(
            query,
            vec![
                ("accountId".to_string(), "12345".to_string()),
                ("instruments".to_string(), "EUR_USD,USD_JPY".to_string()),
                ("sessionId".to_string(), "abc123".to_string()),
            ]
        );
        assert!(params.ignore_heartbeat);
    }

    #[test]
    fn stream_params_require_account_and_instruments() {
        let no_account = StreamParams::new("", ["EUR_USD"]);
        assert!(matches!(
            no_account.validate(),
            Err(OandaError::Config(_))
        ));

        let no_instruments = StreamParams::new("12345", Vec::<String>::new());
        assert!(matches!(
            no_instruments.validate(),
            Err(OandaError::Config(_))
        ));

        let valid = StreamParams::new("12345", ["EUR_USD"]);
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn with_heartbeats_clears_suppression() {
        let params = StreamParams::new("12345", ["EUR_USD"]).with_heartbeats();
        assert!(!params.ignore_heartbeat);
    }

    #[test]
    fn handle_disconnect_clears_flag() {
        let streamer = OandaStreamer::with_config_and_base_url(
            ClientConfig::default(),
            "http://127.0.0.1:9/v1/prices",
        )
        .expect("streamer init");

        let handle = streamer.handle();
        streamer.connected.store(true, Ordering::SeqCst);
        assert!(handle.is_connected());

        handle.disconnect();
        assert!(!streamer.is_connected());
    }
}
