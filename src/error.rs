use thiserror::Error;

/// Boxed error produced by an [`SnsApi`](crate::client::SnsApi)
/// implementation, carried through [`SnsError::Publish`] unchanged.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`SnsAdapter::publish`](crate::SnsAdapter::publish).
#[derive(Debug, Error)]
pub enum SnsError {
    /// The topic ARN or the message body was empty. Raised before any
    /// network call is made.
    #[error("Topic ARN and message must be provided")]
    MissingArguments,

    /// The underlying client failed. The source error is propagated to the
    /// caller unchanged; retry policy belongs entirely to the caller.
    #[error(transparent)]
    Publish(#[from] BoxError),
}
