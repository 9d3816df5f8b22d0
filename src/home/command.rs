//! Side effects returned by the update function and run by the provider.

/// Output commands from the update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write the preview page path to durable storage.
    PersistPreviewPage { path: String },
}
