// MCP (Model Context Protocol) server exposing Microsoft Clarity as tools

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
pub use tools::{clarity_tools, Tool, ToolRegistry};
