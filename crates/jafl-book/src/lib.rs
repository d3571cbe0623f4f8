//! Book pipeline for the JAFL converter.
//!
//! # Scope
//!
//! This crate provides:
//! - **Archive Extraction** - one zip archive per book, unpacked next to it
//! - **File Ordering** - introduction first, numbered sections last
//! - **Conversion** - each markup file parsed and rendered with its book's
//!   [`RenderContext`](jafl_render::RenderContext)
//! - **Assembly** - rules, maps, sheets and codewords around the books,
//!   written out as a single HTML document

pub mod archive;
pub mod assemble;
pub mod convert;
pub mod error;
pub mod options;
pub mod order;

pub use archive::{book_dir, ensure_extracted, extract_archive, find_archives};
pub use assemble::{build, run};
pub use convert::{convert_book, convert_file};
pub use error::BookError;
pub use options::BuildOptions;
pub use order::{FileOrder, compare_file_names, sort_file_names};
