//! The uniform call outcome surfaced to every caller.

use crate::request::RpcResponse;

/// Terminal classification of a single RPC exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Exchange succeeded end-to-end and the body decoded to the expected type.
    Ok,
    /// Local pre-flight failure: the request could not be serialized, or the
    /// configured endpoint is not a valid URL. The network was never reached.
    RequestFailed,
    /// Transport-level failure, non-2xx HTTP status, or an undecodable 2xx
    /// body. The HTTP provider collapses all three into this status.
    ServerError,
    /// Finer-grained variant for transports that report connection failures
    /// distinctly. Not produced by the HTTP provider.
    ConnectionFailed,
    /// Finer-grained variant for transports that report decode failures
    /// distinctly. Not produced by the HTTP provider.
    DecodingFailed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::RequestFailed => write!(f, "request failed"),
            Self::ServerError => write!(f, "server error"),
            Self::ConnectionFailed => write!(f, "connection failed"),
            Self::DecodingFailed => write!(f, "decoding failed"),
        }
    }
}

/// Result of a single RPC call: a decoded envelope or a bare failure status.
///
/// A payload is present exactly when the call succeeded — failure variants
/// carry nothing. Constructed once, at the terminal point of the pipeline,
/// and delivered to the caller exactly once.
#[derive(Debug, Clone)]
pub enum Outcome<R> {
    Ok(RpcResponse<R>),
    RequestFailed,
    ServerError,
    ConnectionFailed,
    DecodingFailed,
}

impl<R> Outcome<R> {
    /// The status tag of this outcome.
    pub fn status(&self) -> Status {
        match self {
            Self::Ok(_) => Status::Ok,
            Self::RequestFailed => Status::RequestFailed,
            Self::ServerError => Status::ServerError,
            Self::ConnectionFailed => Status::ConnectionFailed,
            Self::DecodingFailed => Status::DecodingFailed,
        }
    }

    /// Returns `true` if the call succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// The decoded envelope, if the call succeeded.
    pub fn response(&self) -> Option<&RpcResponse<R>> {
        match self {
            Self::Ok(resp) => Some(resp),
            _ => None,
        }
    }

    /// Consume the outcome, yielding the decoded envelope on success.
    pub fn into_response(self) -> Option<RpcResponse<R>> {
        match self {
            Self::Ok(resp) => Some(resp),
            _ => None,
        }
    }
}
