//! Tag transformation engine for JAFL gamebook markup.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tag Kinds** - the closed set of tag names with a rendering rule
//! - **Rendering Rules** - one pure function per tag family, turning a
//!   closed [`Element`](jafl_dom::Element) into an HTML fragment
//! - **Render Context** - the book being converted, its navigation menu and
//!   the starting professions, shared read-only by every rule
//! - **Professions** - the `Adventurers.xml` loader and stat block tables
//! - **Group Payloads** - re-parsing of `<group>` content with quick-xml
//!
//! [`RenderContext`] implements [`ElementRenderer`](jafl_markup::ElementRenderer),
//! so it plugs straight into the markup parser:
//!
//! ```
//! use jafl_markup::parse_document;
//! use jafl_render::RenderContext;
//!
//! let ctx = RenderContext::new("1");
//! let doc = parse_document(r#"<section name="7">Roll <random dice="2"/>.</section>"#, &ctx).unwrap();
//! assert!(doc.output.contains("roll 2 dice"));
//! ```

pub mod books;
pub mod context;
pub mod error;
pub mod group;
pub mod professions;
pub mod rules;
pub mod tag;
pub mod templates;

pub use books::{BOOK_COUNT, Menu, region, title};
pub use context::RenderContext;
pub use error::{AdventurersError, RenderError};
pub use group::{GroupPayload, GroupTarget, extract_group};
pub use professions::{Equipment, Profession, ProfessionTable};
pub use rules::render_element;
pub use tag::TagKind;
