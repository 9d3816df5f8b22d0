//! Durable client-side key/value storage.
//!
//! Values are plain strings under string keys, in the spirit of browser
//! `localStorage`. The home provider reads once at mount and writes every
//! time the preview page path changes.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::Result;

/// Key under which the last preview page path is persisted.
pub const PREVIEW_PAGE_KEY: &str = "dev-home-iframePage";

pub trait ClientStorage {
    /// Returns `Ok(None)` when the key has never been written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}
