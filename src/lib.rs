/// Output shaping utilities: timestamps, line ranges and text truncation
pub mod formatter;

/// GitHub REST client and response shapes
pub mod github;

/// MCP tool implementations exposing library functionality through the protocol
pub mod tools;

/// Transport layer implementations for MCP server modes (stdio, SSE)
pub mod transport;

/// Tool options and result records
pub mod types;
