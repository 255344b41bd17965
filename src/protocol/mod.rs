//! Protocol types for MCP over JSON-RPC

mod jsonrpc;
mod mcp;

pub use jsonrpc::{codes, ErrorObject, JsonRpcError, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
pub use mcp::{McpTool, ServerInfo, Tool, PROTOCOL_VERSION};
