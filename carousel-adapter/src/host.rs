use alloc::string::String;

/// Failures reported by host side effects.
///
/// None of these reach carousel state: prefetch failures are dropped and a failed link open only
/// turns the click into [`crate::Response::Ignored`].
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no browsing context is available")]
    NoWindow,
    #[error("image prefetch failed for {url}")]
    Prefetch { url: String },
    #[error("could not open {url}")]
    OpenLink { url: String },
    /// For host implementations whose failure fits none of the above (e.g. a native shell that
    /// could not spawn a browser).
    #[error("{0}")]
    Other(String),
}

/// Warms the image cache. Fire-and-forget.
pub trait ImagePrefetcher {
    fn prefetch(&mut self, url: &str) -> Result<(), HostError>;
}

/// Opens a URL in a new top-level browsing context (`target="_blank"`).
pub trait LinkOpener {
    fn open_in_new_context(&mut self, url: &str) -> Result<(), HostError>;
}

/// A prefetcher for hosts without an image cache (TUIs, tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPrefetcher;

impl ImagePrefetcher for NoopPrefetcher {
    fn prefetch(&mut self, _url: &str) -> Result<(), HostError> {
        Ok(())
    }
}
