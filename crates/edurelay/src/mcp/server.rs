// MCP Server
//
// Sequential line-protocol dispatcher: read one line, decode it as a
// JSON-RPC request, resolve it to a response, write one line back. A
// malformed request never terminates the loop; end of input is the only
// shutdown path.

use super::handlers::{default_handlers, ToolHandler};
use super::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use anyhow::Context;
use educore::ContentGenerator;
use serde::Deserialize;
use serde_json::Value;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// MCP protocol version advertised in the initialize handshake
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name advertised in the initialize handshake
pub const SERVER_NAME: &str = "educhain";

/// MCP Server
///
/// Holds the process-lifetime singletons: the content generator and the
/// immutable tool handler set. Constructed explicitly at startup and passed
/// around, so tests can build isolated instances.
pub struct McpServer {
    /// Shared content generator
    generator: Arc<ContentGenerator>,
    /// Registered tool handlers, in advertisement order
    handlers: Vec<ToolHandler>,
}

impl McpServer {
    /// Create a new MCP server with the default tool set
    pub fn new(generator: Arc<ContentGenerator>) -> Self {
        info!("MCP server initialized");
        Self {
            generator,
            handlers: default_handlers(),
        }
    }

    /// Run the dispatch loop over stdin/stdout
    ///
    /// Blocks until stdin is closed, then returns Ok. Diagnostics go to
    /// stderr via tracing; stdout carries only response lines.
    pub async fn serve_stdio(&self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock()).await
    }

    /// Run the dispatch loop over arbitrary streams
    ///
    /// One read-decode-dispatch-write cycle at a time: responses are
    /// emitted in request order, so pipelined clients can rely on both
    /// ordering and id correlation.
    pub async fn serve<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> anyhow::Result<()> {
        let mut line = String::new();

        loop {
            line.clear();
            let bytes = reader
                .read_line(&mut line)
                .context("Failed to read request line")?;
            if bytes == 0 {
                // End of input is the only graceful-shutdown path
                info!("Input stream closed, shutting down");
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let value: Value = match serde_json::from_str(trimmed) {
                Ok(v) => v,
                Err(e) => {
                    // No request id is recoverable from non-JSON input,
                    // so no response line is emitted for it. The drop is
                    // logged rather than silent.
                    warn!("Dropping unparseable request line: {}", e);
                    continue;
                }
            };

            let response = match JsonRpcRequest::deserialize(&value) {
                Ok(request) => self.handle_request(request).await,
                Err(e) => {
                    // Valid JSON that is not a request envelope still has a
                    // recoverable id, so it gets an error response.
                    warn!("Rejecting invalid request envelope: {}", e);
                    let id = value.get("id").cloned().unwrap_or(Value::Null);
                    JsonRpcResponse::error(id, JsonRpcError::invalid_request(e.to_string()))
                }
            };
            let json =
                serde_json::to_string(&response).context("Failed to serialize response")?;

            writeln!(writer, "{}", json).context("Failed to write response line")?;
            writer.flush().context("Failed to flush response")?;
        }

        Ok(())
    }

    /// Resolve one decoded request to a response envelope
    ///
    /// This is the top-level error boundary: every failure below it comes
    /// back as a typed `JsonRpcError` and is converted into an error
    /// envelope carrying the request's id.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone();
        debug!(method = %request.method, "received request");

        if let Err(e) = request.validate() {
            warn!("Invalid JSON-RPC request: {}", e);
            return JsonRpcResponse::error(id, e);
        }

        let result = match request.method.as_str() {
            "initialize" => Ok(self.initialize_result()),
            "tools/list" => Ok(self.tools_json()),
            "tools/call" => self.handle_tool_call(&request).await,
            method => Err(JsonRpcError::unknown_method(method)),
        };

        JsonRpcResponse::from_result(id, result)
    }

    /// Static capability descriptor returned by `initialize`
    fn initialize_result(&self) -> Value {
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": crate::VERSION
            }
        })
    }

    /// Tool descriptor set returned by `tools/list`
    pub fn tools_json(&self) -> Value {
        let tools: Vec<_> = self
            .handlers
            .iter()
            .map(|handler| {
                serde_json::json!({
                    "name": handler.name(),
                    "description": handler.description(),
                    "inputSchema": handler.argument_schema()
                })
            })
            .collect();

        serde_json::json!({ "tools": tools })
    }

    /// Resolve a `tools/call` request against the registry and execute it
    async fn handle_tool_call(&self, request: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
        let call = request.extract_tool_call()?;
        debug!(tool = %call.name, "tool call");

        let handler = self
            .handlers
            .iter()
            .find(|h| h.name() == call.name)
            .ok_or_else(|| JsonRpcError::unknown_tool(&call.name))?;

        let value = handler.execute(&self.generator, call.arguments).await?;

        // Wrap the JSON-encoded result in the MCP content block format
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| JsonRpcError::internal_error(format!("Serialization error: {}", e)))?;

        Ok(serde_json::json!({
            "content": [
                {
                    "type": "text",
                    "text": text
                }
            ]
        }))
    }
}
