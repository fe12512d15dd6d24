//! wirerpc-http — HTTP JSON-RPC provider backed by `reqwest`.
//!
//! # Overview
//!
//! The provider runs a fixed pipeline per call: serialize the typed request,
//! validate the endpoint URL, POST the body on a Tokio worker, classify the
//! exchange, and decode a 2xx body into the caller's expected result type.
//! Every call terminates in exactly one [`Outcome`](wirerpc_core::Outcome),
//! delivered through a single completion channel whatever path it took.

pub mod client;
pub mod transport;

pub use client::HttpProvider;
pub use transport::{ReqwestTransport, TransportConfig};
