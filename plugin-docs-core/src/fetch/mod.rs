//! Remote metadata fetching
//!
//! [`Fetcher`] resolves companion manifests and repository info for a
//! plugin. It talks to the network through an [`HttpTransport`] so tests can
//! script responses without a server.

mod fetcher;
mod transport;

pub use fetcher::Fetcher;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
