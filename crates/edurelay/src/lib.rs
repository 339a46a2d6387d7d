// edurelay - MCP stdio server
//
// JSON-RPC 2.0 dispatch over newline-delimited stdin/stdout, implementing
// the MCP tool-invocation subset (initialize / tools/list / tools/call) on
// top of the educore content generator.
//
// # Example
//
// ```ignore
// use std::sync::Arc;
// use educore::ContentGenerator;
// use edurelay::mcp::McpServer;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let server = McpServer::new(Arc::new(ContentGenerator::new()));
//     server.serve_stdio().await
// }
// ```

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod cli;
pub mod mcp;

pub use mcp::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpServer};

/// Server version advertised in the initialize handshake
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
