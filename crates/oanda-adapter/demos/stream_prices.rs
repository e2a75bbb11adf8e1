/*
[INPUT]:  OANDA_ACCESS_TOKEN and OANDA_ACCOUNT_ID environment variables
[OUTPUT]: Live EUR_USD ticks printed to stdout until Ctrl-C
[POS]:    Demos - streaming client usage
[UPDATE]: When the streaming client surface changes
*/

use oanda_adapter::{
    ClientConfig, OandaStreamer, StreamEnvironment, StreamHandler, StreamParams,
};
use serde_json::Value;

struct PrintHandler {
    count: usize,
}

impl StreamHandler for PrintHandler {
    fn on_event(&mut self, event: Value) {
        self.count += 1;
        println!("tick {}: {}", self.count, event);
    }

    fn on_error(&mut self, body: &[u8]) {
        eprintln!("stream error: {}", String::from_utf8_lossy(body));
    }
}

/// Demo: stream EUR_USD prices until Ctrl-C
#[tokio::main]
async fn main() {
    println!("=== OANDA Price Stream Demo ===\n");

    let token = match std::env::var("OANDA_ACCESS_TOKEN") {
        Ok(token) => token,
        Err(_) => {
            eprintln!("Set OANDA_ACCESS_TOKEN to run this demo");
            return;
        }
    };
    let account_id = match std::env::var("OANDA_ACCOUNT_ID") {
        Ok(id) => id,
        Err(_) => {
            eprintln!("Set OANDA_ACCOUNT_ID to run this demo");
            return;
        }
    };

    let streamer = match OandaStreamer::with_config(
        StreamEnvironment::Practice,
        ClientConfig::with_access_token(token),
    ) {
        Ok(streamer) => streamer,
        Err(e) => {
            eprintln!("Failed to create streamer: {}", e);
            return;
        }
    };
    println!("✓ Streamer created (practice environment)\n");

    let handle = streamer.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\ndisconnecting...");
            handle.disconnect();
        }
    });

    let params = StreamParams::new(account_id, ["EUR_USD"]);
    let mut handler = PrintHandler { count: 0 };

    match streamer.start(&params, &mut handler).await {
        Ok(()) => println!("✓ Stream disconnected after {} ticks", handler.count),
        Err(e) => eprintln!("✗ Stream failed: {}", e),
    }
}
