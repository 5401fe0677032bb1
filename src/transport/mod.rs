//! Ways of serving the GitHub Explorer tools over MCP
//!
//! `stdio` is for MCP clients that spawn the server as a subprocess; `sse_server`
//! serves any number of clients over HTTP with Server-Sent Events.

/// HTTP transport with Server-Sent Events, one tool service per connection
pub mod sse_server;

/// Subprocess transport over standard input and output
pub mod stdio;
