//! Async client for the Tangle node HTTP API
//!
//! A node exposes one RPC-style command per operation (`getNodeInfo`,
//! `findTransactions`, `attachToTangle`, ...) over a single HTTP POST
//! endpoint. This crate provides the typed request/response shapes, the
//! [`NodeApi`] trait describing the full command surface, and a
//! [`NodeClient`] implementation backed by reqwest.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod models;

// Re-exports for convenience
pub use client::{NodeApi, NodeClient};
pub use endpoint::NodeEndpoint;
pub use error::ApiError;
