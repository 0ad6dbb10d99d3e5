//! # alertdesk - weather and token price tools over MCP
//!
//! A small MCP server that lets an LLM-driven agent query the National Weather
//! Service and a local token price notification service.
//!
//! ## Tools
//! - `get-alerts`: active alerts for a two-letter US state code
//! - `get-forecast`: multi-period forecast for a coordinate
//! - `register-notification`: create a price alert for a session
//! - `get-user-notifications`: list a session's price alerts
//! - `get-latest-token-price`: current token price snapshot
//!
//! ## Architecture
//!
//! 1. **Providers** act as factories for the upstream HTTP clients.
//! 2. **Clients** (`api`) perform the outbound calls and decode the replies.
//!    Weather failures degrade to `None`; notification failures are returned
//!    as [`ClientError`].
//! 3. **Format** renders everything into a single text block per tool call.
//! 4. **[`AlertDesk`]** registers the tools with `rmcp` and wires the above together.
//!
//! ## Example
//! ```no_run
//! use alertdesk::{AlertDesk, ServerConfig};
//! use rmcp::{transport::stdio, ServiceExt};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = AlertDesk::new(&ServerConfig::default())?;
//!     server.serve(stdio()).await?.waiting().await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod format;
pub mod http;
pub mod mcp;
pub mod options;
pub mod providers;
pub mod tools;

pub use client::ClientError;
pub use mcp::AlertDesk;
pub use options::{ServerConfig, TransportOptions};
pub use providers::{NationalWeatherService, NotificationService, Provider};

// Re-export rmcp for convenience
pub use rmcp;
