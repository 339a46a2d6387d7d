// MCP (Model Context Protocol) JSON-RPC dispatch
//
// Pure Rust implementation of the MCP line protocol: one JSON object per
// line on stdin, one JSON object per line on stdout, strictly sequential.

pub mod handlers;
pub mod protocol;
pub mod server;

pub use protocol::{error_codes, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use server::McpServer;
