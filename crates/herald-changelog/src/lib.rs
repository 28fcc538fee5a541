//! Herald Changelog - Changelog entry generation
//!
//! This crate turns raw commit records into changelog entries ready for a
//! template renderer: classification, note extraction, tag message injection,
//! link rewriting, reference deduplication, body reformatting, and the
//! grouping and sort policy applied to the surviving entries.

pub mod context;
pub mod generator;
pub mod grouping;
pub mod input;
pub mod options;
pub mod rewrite;
pub mod transform;
pub mod types;

pub use context::RenderContext;
pub use generator::{ChangelogGenerator, RenderBundle};
pub use grouping::{Changelog, CommitGroup, CommitSortField, NoteGroup, NoteSortField, SortPolicy};
pub use options::{TemplatePreset, Templates, WriterOptions};
pub use transform::{CommitTransformer, NoTagMessages, TagMessageResolver};
pub use types::{ChangelogEntry, Note, RawCommit, Reference};
