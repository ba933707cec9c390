//! MCP (Model Context Protocol) server implementation for Tailsmith
//!
//! Exposes the generation and optimization tools over MCP so AI assistants
//! can call them directly. Every tool follows the same dual-path contract:
//! try a completion when a credential is configured, fall back to the
//! deterministic rule engine when it is not or when the reply is unusable.
//!
//! Start the server with `tailsmith serve`.

pub mod registry;
mod server;
pub mod tools;

pub use server::{run_server, TailsmithServer};
