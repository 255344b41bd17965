//! MCP server over newline-delimited JSON-RPC
//!
//! Reads one request per line and writes one response per line. Runs over
//! stdin/stdout in production and over any reader/writer pair in tests.

mod handlers;

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool, PROTOCOL_VERSION,
};

pub use handlers::*;

pub struct McpServer<R = BufReader<io::Stdin>, W = BufWriter<io::Stdout>> {
    server_info: ServerInfo,
    tools: BTreeMap<String, Box<dyn Tool>>,
    reader: R,
    writer: W,
}

impl McpServer {
    /// A stdio server with default server info
    pub fn new() -> Self {
        Self::with_info(ServerInfo::default())
    }

    /// A stdio server
    pub fn with_info(info: ServerInfo) -> Self {
        Self::with_io(info, BufReader::new(io::stdin()), BufWriter::new(io::stdout()))
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> McpServer<R, W> {
    pub fn with_io(info: ServerInfo, reader: R, writer: W) -> Self {
        Self {
            server_info: info,
            tools: BTreeMap::new(),
            reader,
            writer,
        }
    }

    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.name();
        self.tools.insert(name, tool);
        self
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Tool names in listing order
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Serve until the reader is exhausted
    pub fn run(&mut self) -> io::Result<()> {
        info!(
            name = %self.server_info.name,
            tools = self.tools.len(),
            "MCP server listening on stdio"
        );
        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                self.handle_request(trimmed)?;
            }
            line.clear();
        }
        info!("Input closed, MCP server stopping");
        Ok(())
    }

    /// Writer half, for inspecting output in tests
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn handle_request(&mut self, request_str: &str) -> io::Result<()> {
        let request: JsonRpcRequest = match serde_json::from_str(request_str) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "Unparsable request");
                return self.send(&JsonRpcError::parse_error(e.to_string()));
            }
        };

        if !request.is_valid() {
            return self.send(&JsonRpcError::invalid_request(
                request.id.unwrap_or(Value::Null),
                "jsonrpc must be '2.0'",
            ));
        }

        debug!(method = %request.method, "Request");
        let id = request.id.clone().unwrap_or(Value::Null);

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "notifications/initialized" => Ok(()),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => self.send(&JsonRpcResponse::new(id, json!({}))),
            _ if request.is_notification() => Ok(()),
            other => self.send(&JsonRpcError::method_not_found(id, other)),
        }
    }

    fn handle_initialize(&mut self, id: Value) -> io::Result<()> {
        let result = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        });
        self.send(&JsonRpcResponse::new(id, result))
    }

    fn handle_tools_list(&mut self, id: Value) -> io::Result<()> {
        let tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        self.send(&JsonRpcResponse::new(id, json!({ "tools": tools })))
    }

    fn handle_tool_call(&mut self, id: Value, params: Option<Value>) -> io::Result<()> {
        let Some(params) = params else {
            return self.send(&JsonRpcError::invalid_params(
                id,
                "Missing parameters",
                json!({}),
            ));
        };
        let Some(tool_name) = extract_tool_name(&params) else {
            return self.send(&JsonRpcError::invalid_params(
                id,
                "Missing tool name",
                json!({}),
            ));
        };

        let Some(tool) = self.tools.get(tool_name) else {
            return self.send(&JsonRpcError::invalid_params(
                id,
                "Unknown tool",
                json!({ "tool": tool_name }),
            ));
        };

        let outcome = tool.execute(extract_arguments(&params));
        match outcome {
            Ok(result) => self.send(&JsonRpcResponse::new(id, result)),
            Err(e) => {
                warn!(tool = tool_name, error = %e, "Tool failed");
                let response = JsonRpcError::tool_failed(id, e.code(), e.to_string());
                self.send(&response)
            }
        }
    }

    fn send<T: Serialize>(&mut self, message: &T) -> io::Result<()> {
        let json = serde_json::to_string(message)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LexiconError, LexiconResult};
    use std::io::Cursor;

    struct Echo;

    impl Tool for Echo {
        fn definition(&self) -> McpTool {
            McpTool::new("echo", "Echo the arguments", json!({"type": "object"}))
        }

        fn execute(&self, params: Value) -> LexiconResult<Value> {
            if params.get("fail").is_some() {
                return Err(LexiconError::InvalidArgument("asked to fail".to_string()));
            }
            Ok(text_response(params.to_string()))
        }
    }

    fn run(input: &str) -> Vec<Value> {
        let mut server = McpServer::with_io(
            ServerInfo::new("test", "0.0.1"),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );
        server.register_tool(Box::new(Echo));
        server.run().unwrap();
        String::from_utf8(server.into_writer())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_handshake_and_listing() {
        let out = run(concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#,
            "\n"
        ));
        assert_eq!(out.len(), 3);
        assert_eq!(out[0]["result"]["serverInfo"]["name"], "test");
        assert_eq!(out[0]["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(out[1]["result"]["tools"][0]["name"], "echo");
        assert_eq!(out[2]["id"], 3);
    }

    #[test]
    fn test_error_codes() {
        let out = run(concat!(
            "not json\n",
            r#"{"jsonrpc":"1.0","id":1,"method":"ping"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"nope"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"ghost"}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"echo","arguments":{"fail":true}}}"#,
            "\n"
        ));
        let codes: Vec<i64> = out
            .iter()
            .map(|r| r["error"]["code"].as_i64().unwrap())
            .collect();
        assert_eq!(codes, vec![-32700, -32600, -32601, -32602, -32603]);
        assert_eq!(out[4]["error"]["data"]["code"], "BAD_REQUEST");
    }

    #[test]
    fn test_tool_call() {
        let out = run(concat!(
            r#"{"jsonrpc":"2.0","id":"a","method":"tools/call","params":{"name":"echo","arguments":{"x":1}}}"#,
            "\n"
        ));
        assert_eq!(out[0]["id"], "a");
        assert_eq!(out[0]["result"]["content"][0]["text"], r#"{"x":1}"#);
    }
}
