pub mod protocol;

use anyhow::Result;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, info};

use crate::tools::catalog::tool_definitions;
use crate::tools::ToolRouter;
use protocol::{
    JsonRpcRequest, JsonRpcResponse, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND,
    PARSE_ERROR,
};

const PROTOCOL_VERSION: &str = "2025-06-18";
const SERVER_NAME: &str = "openproject-mcp";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line-delimited JSON-RPC front end for the tool router.
pub struct McpServer {
    router: ToolRouter,
}

impl McpServer {
    pub fn new(router: ToolRouter) -> Self {
        Self { router }
    }

    fn handle_initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": { "name": SERVER_NAME, "version": SERVER_VERSION },
        })
    }

    fn handle_tools_list(&self) -> Value {
        json!({ "tools": tool_definitions() })
    }

    async fn handle_tools_call(&self, id: Value, params: &Value) -> JsonRpcResponse {
        let name = params.get("name").and_then(Value::as_str).unwrap_or("");
        if name.is_empty() {
            return JsonRpcResponse::failure(id, INVALID_PARAMS, "Missing tool name");
        }
        let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);
        debug!(tool = name, "tools/call");

        let text = self.router.invoke(name, arguments).await;
        JsonRpcResponse::success(
            id,
            json!({ "content": [ { "type": "text", "text": text } ] }),
        )
    }

    /// Handles one input line. Notifications produce no response.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let parsed: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(_) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    PARSE_ERROR,
                    "Parse error",
                ))
            }
        };
        let request: JsonRpcRequest = match serde_json::from_value(parsed) {
            Ok(request) => request,
            Err(_) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    INVALID_REQUEST,
                    "Invalid request",
                ))
            }
        };

        let Some(id) = request.id else {
            debug!(method = %request.method, "notification");
            return None;
        };

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.handle_initialize()),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, self.handle_tools_list()),
            "tools/call" => self.handle_tools_call(id, &request.params).await,
            m if m.starts_with("notifications/") => JsonRpcResponse::success(id, json!({})),
            _ => JsonRpcResponse::failure(id, METHOD_NOT_FOUND, "Method not found"),
        };
        Some(response)
    }

    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut writer = BufWriter::new(writer);

        while let Some(line) = lines.next_line().await? {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(trimmed).await {
                let payload = serde_json::to_string(&response)?;
                writer.write_all(payload.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }

        Ok(())
    }

    pub async fn run_stdio(&self) -> Result<()> {
        info!("Serving MCP over stdio");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }
}
