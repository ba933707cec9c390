//! Tailsmith - Tailwind-style UI tooling over the Model Context Protocol
//!
//! This library provides functionality to:
//! - Generate component and layout markup from templates or an LLM
//! - Optimize utility-class lists and convert plain CSS to utilities
//! - Build color themes, design reports, and improvement suggestions
//!
//! Every tool runs a dual-path contract: an LLM completion when a
//! credential is configured, and a deterministic rule engine otherwise.

pub mod analyze;
pub mod classes;
pub mod cli;
pub mod completions;
pub mod component;
pub mod convert;
pub mod extract;
pub mod layout;
pub mod mcp;
pub mod optimize;
pub mod preview;
pub mod suggest;
pub mod theme;
