//! List operations shared by frontends: batch rewrites, editing, folder
//! scans, thumbnail maintenance, export preparation and settings.

pub mod edit;
pub mod error;
pub mod export;
pub mod rewrite;
pub mod scanner;
pub mod settings;
pub mod thumbnail;

pub use edit::{Direction, EntryEdit};
pub use error::{EditError, RewriteError, ScanError, ThumbnailError};
pub use export::{prepare_lpl_export, resolve_export_meta};
pub use rewrite::{BatchRewrite, RewriteSummary, apply_batch_rewrite};
pub use scanner::{FolderScan, scan_rom_folder};
pub use settings::Settings;
pub use thumbnail::{ThumbnailIndex, ThumbnailKeys};
