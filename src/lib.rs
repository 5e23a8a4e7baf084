pub mod config;
pub mod engine;
pub mod error;
pub mod files;
pub mod hunk;
pub mod range;
pub mod serialization;

pub use config::DiffOptions;
pub use engine::{diff, diff_lines, format_patch_header, Diff, DEFAULT_CONTEXT_LINES};
pub use error::DiffError;
pub use files::{diff_files, read_lines};
pub use hunk::Hunk;
pub use range::Range;
pub use serialization::ToPatch;
