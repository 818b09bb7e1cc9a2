//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the MCP
//! server: the Slack Web API client and the tools exposed over MCP.

pub mod slack;
pub mod tools;
