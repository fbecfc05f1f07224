//! Client module - catalog gateway transports.
//!
//! [`HttpClient`] is the seam every repository talks through.
//! [`NetworkHttpClient`] goes over the network; [`OneshotHttpClient`]
//! calls an in-process axum router (requires the "in-process" feature).

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

// Re-export main types
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
