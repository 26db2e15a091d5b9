//! Vitrine Storage Library
//!
//! On-disk file storage for uploaded images. The `Storage` trait is the seam
//! the api crate works against; `LocalStorage` is the filesystem
//! implementation.
//!
//! # Layout and naming
//!
//! Files live at `<root>/<category>/<generated-filename>` where the generated
//! filename is `<millis-timestamp>-<sanitized-stem><original-extension>`. The
//! matching public storage key is `uploads/<category>/<filename>`. Filenames
//! must not contain path separators or `..`. Naming and URL composition are
//! centralized in the `naming` module so storage and handlers stay consistent.

pub mod local;
pub mod naming;
pub mod traits;

pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
