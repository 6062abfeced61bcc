// MCP server: JSON-RPC framing, method routing and tool dispatch

use crate::error::{McpError, McpResult};
use crate::protocol::*;
use crate::tools::ToolRegistry;
use anyhow::{Context, Result};
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};
use bytes::BytesMut;
use std::io;
use tokio_util::codec::{Decoder, FramedRead, FramedWrite, LinesCodec, LinesCodecError};
use tracing::{debug, info, warn};

pub const SERVER_NAME: &str = "supavec";

/// Longest request line accepted before the line is discarded.
pub const MAX_LINE_LENGTH: usize = 4 * 1024 * 1024;

/// A line that could not be framed as a request.
#[derive(Debug)]
enum BadLine {
    TooLong,
    NotUtf8,
}

/// `LinesCodec` that reports oversized or non-UTF-8 lines as items.
///
/// `FramedRead` ends the stream after any decoder error, so line-level
/// failures are turned into values and only I/O errors stay errors.
struct RequestLines {
    inner: LinesCodec,
}

impl RequestLines {
    fn new(max_length: usize) -> Self {
        Self {
            inner: LinesCodec::new_with_max_length(max_length),
        }
    }
}

impl Decoder for RequestLines {
    type Item = Result<String, BadLine>;
    type Error = io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> io::Result<Option<Self::Item>> {
        recover_line(self.inner.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> io::Result<Option<Self::Item>> {
        recover_line(self.inner.decode_eof(buf))
    }
}

fn recover_line(
    decoded: Result<Option<String>, LinesCodecError>,
) -> io::Result<Option<Result<String, BadLine>>> {
    match decoded {
        Ok(line) => Ok(line.map(Ok)),
        Err(LinesCodecError::MaxLineLengthExceeded) => Ok(Some(Err(BadLine::TooLong))),
        // LinesCodec has already consumed the offending line.
        Err(LinesCodecError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
            Ok(Some(Err(BadLine::NotUtf8)))
        }
        Err(LinesCodecError::Io(e)) => Err(e),
    }
}

/// MCP server over newline-delimited JSON-RPC.
///
/// Holds nothing mutable: each call depends only on the request and the
/// tools registered at construction.
pub struct McpServer {
    registry: ToolRegistry,
    max_line_length: usize,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            max_line_length: MAX_LINE_LENGTH,
        }
    }

    /// Override the request line limit (default [`MAX_LINE_LENGTH`]).
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Serve on process stdin/stdout until stdin closes.
    pub async fn start(&self) -> Result<()> {
        info!(tools = self.registry.len(), "MCP server listening on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await?;
        info!("MCP server stopped");
        Ok(())
    }

    /// Serve one session: one request per line in, one response per line out.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = FramedRead::new(reader, RequestLines::new(self.max_line_length));
        let mut out = FramedWrite::new(writer, LinesCodec::new());

        while let Some(line) = lines.next().await {
            let response = match line.context("Failed to read request")? {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_message(&line).await,
                Err(BadLine::NotUtf8) => {
                    warn!("Request line is not valid UTF-8");
                    Some(JsonRpcResponse::error(
                        Value::Null,
                        JsonRpcError::parse_error("Request is not valid UTF-8"),
                    ))
                }
                Err(BadLine::TooLong) => {
                    warn!(limit = self.max_line_length, "Request line too long, discarding");
                    Some(JsonRpcResponse::error(
                        Value::Null,
                        JsonRpcError::invalid_request(format!(
                            "Request exceeds {} bytes",
                            self.max_line_length
                        )),
                    ))
                }
            };

            if let Some(response) = response {
                let json = serde_json::to_string(&response)?;
                out.send(json).await.context("Failed to write response")?;
            }
        }

        Ok(())
    }

    /// Handle one raw message. Notifications produce no response.
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();

        // MCP has no batch requests
        if line.starts_with('[') {
            warn!("Batch requests are not supported");
            return Some(JsonRpcResponse::error(
                Value::Null,
                JsonRpcError::invalid_request("Batch requests are not supported"),
            ));
        }

        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Invalid JSON");
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    JsonRpcError::parse_error(e.to_string()),
                ));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        // A null id would otherwise read as a notification and go unanswered
        if value.get("id").is_some_and(Value::is_null) {
            warn!("Request id is null");
            return Some(JsonRpcResponse::error(
                Value::Null,
                JsonRpcError::invalid_request("Request id must not be null"),
            ));
        }

        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Invalid JSON-RPC request");
                return Some(JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_request(format!("Invalid Request: {}", e)),
                ));
            }
        };

        self.handle_request(request).await
    }

    /// Route a decoded request to its handler.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, "Processing request");

        let Some(id) = request.id else {
            debug!(method = %request.method, "Received notification, ignoring");
            return None;
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request("Invalid JSON-RPC version"),
            ));
        }

        let result = match request.method.as_str() {
            METHOD_INITIALIZE => self.handle_initialize(request.params),
            METHOD_PING => Ok(serde_json::json!({})),
            METHOD_TOOLS_LIST => serde_json::to_value(self.list_tools()).map_err(McpError::from),
            METHOD_TOOLS_CALL => self.handle_tools_call(request.params).await,
            other => {
                return Some(JsonRpcResponse::error(
                    id,
                    JsonRpcError::method_not_found(other),
                ))
            }
        };

        Some(match result {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => {
                warn!(error = %e, "Request failed");
                JsonRpcResponse::error(id, e.to_jsonrpc_error())
            }
        })
    }

    /// The tool catalogue, identical on every call.
    pub fn list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: self.registry.list_schemas(),
        }
    }

    /// Dispatch a tool call. Only unknown tools and bad arguments are errors.
    pub async fn call_tool(&self, params: CallToolParams) -> McpResult<CallToolResult> {
        let tool = self
            .registry
            .get(&params.name)
            .ok_or_else(|| McpError::ToolNotFound(params.name.clone()))?;

        info!(tool = %params.name, "Calling tool");
        tool.execute(params.arguments).await.map_err(McpError::from)
    }

    fn handle_initialize(&self, params: Option<Value>) -> McpResult<Value> {
        let requested = match params {
            Some(params) => {
                let params: InitializeParams = serde_json::from_value(params)
                    .map_err(|e| McpError::InvalidArguments(e.to_string()))?;
                if let Some(client) = &params.client_info {
                    info!(client = %client.name, version = %client.version, "Client connected");
                }
                Some(params.protocol_version)
            }
            None => None,
        };

        let protocol_version = requested
            .filter(|v| SUPPORTED_PROTOCOL_VERSIONS.contains(&v.as_str()))
            .unwrap_or_else(|| LATEST_PROTOCOL_VERSION.to_string());

        let result = InitializeResult {
            protocol_version,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(serde_json::to_value(result)?)
    }

    async fn handle_tools_call(&self, params: Option<Value>) -> McpResult<Value> {
        let params = params.ok_or_else(|| {
            McpError::InvalidArguments("Missing params for tools/call".to_string())
        })?;
        let params: CallToolParams = serde_json::from_value(params)
            .map_err(|e| McpError::InvalidArguments(e.to_string()))?;

        let result = self.call_tool(params).await?;
        Ok(serde_json::to_value(result)?)
    }
}
