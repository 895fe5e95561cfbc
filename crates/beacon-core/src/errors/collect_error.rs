/// Type-erased error produced by an HTTP client implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures surfaced by the request sender.
///
/// A received HTTP response is never an error, whatever its status.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// The outbound request could not be built. Nothing was sent.
    #[error("failed to construct collect request: {reason}")]
    Construction { reason: String },

    /// The HTTP client failed before a response arrived.
    #[error("failed to send collect request: {source}")]
    Transport {
        #[source]
        source: BoxError,
    },
}

impl CollectError {
    pub fn construction(reason: impl Into<String>) -> Self {
        Self::Construction {
            reason: reason.into(),
        }
    }

    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport {
            source: source.into(),
        }
    }

    /// True when the request never left the process.
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Construction { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
