//! Common utilities for the JAFL converter.
//!
//! This crate provides shared infrastructure used by all converter components:
//! - **Warning System** - colored, deduplicated terminal output for odd input
//! - **Text Helpers** - word capitalization and anchor-friendly slugs

pub mod text;
pub mod warning;

pub use text::{capitalize, linkify};
pub use warning::{clear_warnings, is_verbose, note_verbose, set_verbose, warn_once};
