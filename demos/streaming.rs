//! Example: streaming chat through the SolsArch gateway
//!
//! The response is printed delta by delta as the gateway produces it.
//!
//! ## Usage
//!
//! Point the client at a gateway and provide a session token:
//! ```bash
//! export SOLSARCH_GATEWAY_URL=https://gateway.solsarch.io/v1
//! export SOLSARCH_ACCESS_TOKEN=...
//! ```
//!
//! Run the example:
//! ```bash
//! cargo run --example streaming
//! ```

use futures::StreamExt;
use solsarch_gateway::{ChatMessage, ChatRequest, GatewayClientBuilder, GatewayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env()?;
    let client = GatewayClientBuilder::new().with_config(config).build()?;

    let request = ChatRequest::streaming(vec![ChatMessage::user(
        "Sketch a cost-efficient architecture for a bursty image-processing API. \
         Keep it under 200 words.",
    )]);

    println!("Streaming response from the gateway...\n");

    let mut stream = client.chat().create_stream(request).await?;

    while let Some(delta) = stream.next().await {
        match delta {
            Ok(text) => {
                print!("{}", text);
                use std::io::Write;
                std::io::stdout().flush()?;
            }
            Err(e) => {
                eprintln!("\nError processing stream: {}", e);
                return Err(e.into());
            }
        }
    }

    println!("\n\nStreaming complete!");

    Ok(())
}
