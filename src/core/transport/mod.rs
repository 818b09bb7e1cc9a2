//! Transport layer for the MCP server.
//!
//! Standard input/output is the only transport: the server is meant to be
//! spawned by an MCP client that owns both ends of the pipe. The transport
//! handles the connection lifecycle and delegates message processing to the
//! MCP server handler.

mod error;
mod service;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use service::TransportService;
