//! MCP tool implementations.
//!
//! This module contains all tools exposed by the hashstash server.

pub mod content;
pub mod hash;
pub mod health;

pub use content::{RetrieveContentParams, StoreContentParams};
pub use hash::HashJsonParams;
