//! AUTO.RIA MCP Server library.
//!
//! Provides the [`server::RiaMcpServer`] MCP server handler and tool
//! parameter/response types. Used by the `ria-mcp` binary and available
//! for integration testing.

pub mod server;
pub mod tools;
