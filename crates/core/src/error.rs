use thiserror::Error;

/// Failure taxonomy for the front-end.
///
/// Every failure is caught at the call site, logged, and rendered as an
/// inline message; nothing here is allowed to terminate a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A REST call failed: transport error or non-2xx status.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The live-channel handshake failed or the channel rejected a send.
    #[error("connection failure: {0}")]
    ConnectionFailure(String),
}
