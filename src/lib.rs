//! Slack DM MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes two
//! Slack Web API operations as tools: sending a direct message to a workspace
//! user and listing the workspace's members.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **slack**: The Slack Web API client and wire types
//!   - **tools**: MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use slack_dm_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
