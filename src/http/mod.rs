//! HTTP plumbing
//!
//! Provides the transport seam and the rate gate the reaper funnels every
//! request through.
//!
//! # Features
//!
//! - **Transport trait**: injectable request executor, reqwest by default
//! - **Rate gate**: minimum interval between dispatches, no burst allowance

mod rate_limit;
mod transport;

pub use rate_limit::RateGate;
pub use transport::{Request, ReqwestTransport, Response, Transport};
