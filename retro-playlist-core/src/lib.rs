//! Data model and pure path helpers shared by the playlist codecs and tools.
//!
//! Nothing in this crate touches the filesystem: every function takes
//! strings or entry slices and returns new values.

pub mod entry;
pub mod error;
pub mod infer;
pub mod path;
pub mod util;

pub use entry::{DETECT, GameEntry, PlaylistMeta};
pub use error::EntryError;
pub use infer::infer_meta;
