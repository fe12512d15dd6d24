//! wirerpc-core — foundation types for WireRPC.
//!
//! # Overview
//!
//! WireRPC is a minimal, method-agnostic client transport for JSON-RPC-style
//! calls over HTTP. Higher-level protocol clients define the actual RPC
//! catalog; this core defines:
//!
//! - [`RpcRequest`] / [`RpcResponse`] — generic typed wire envelopes
//! - [`Outcome`] / [`Status`] — the uniform result surfaced to every caller
//! - [`HttpTransport`] — the injectable transport seam
//! - [`TransportError`] — transport-level failure type

pub mod outcome;
pub mod request;
pub mod transport;

pub use outcome::{Outcome, Status};
pub use request::{RpcError, RpcId, RpcRequest, RpcResponse};
pub use transport::{HttpTransport, RawResponse, TransportError, JSON_HEADERS};
