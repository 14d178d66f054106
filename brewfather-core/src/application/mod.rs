//! MCP-facing application layer: tool dispatch, text rendering and transports

pub mod format;
pub mod handler;
pub mod inventory;
pub mod stdio;
pub mod tooling;
