//! MCP tool definitions and the tool trait

use serde::Serialize;
use serde_json::Value;

use crate::error::LexiconResult;

/// Protocol revision announced during `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// A tool as listed by `tools/list`
#[derive(Serialize, Debug, Clone)]
pub struct McpTool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl McpTool {
    pub fn new(name: &str, description: &str, input_schema: Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// Name and version reported in the `initialize` handshake
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self::new("lexicon", crate::VERSION)
    }
}

/// A callable MCP tool
pub trait Tool: Send + Sync {
    /// Definition returned by `tools/list`
    fn definition(&self) -> McpTool;

    /// Run the tool on the `arguments` object of a `tools/call`
    fn execute(&self, params: Value) -> LexiconResult<Value>;

    fn name(&self) -> String {
        self.definition().name
    }
}
