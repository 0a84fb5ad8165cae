//! `menugen-nav`.
//!
//! Core logic for turning a manifest of document paths into a navigation
//! menu: a best-effort label formatter for filesystem slugs, and a
//! hierarchy builder that groups records into headings and links by their
//! shared folder prefixes.
//!
//! The crate is pure with respect to presentation. [`build_menu`] returns
//! a sequence of [`RenderInstruction`]s; rendering them into HTML (or
//! anything else) is the consumer's job.
//!
//! # Example
//!
//! ```
//! use menugen_nav::{MenuOptions, PathRecord, build_menu};
//!
//! let records = vec![PathRecord {
//!   file:   "html/unidad5/guia1.html".to_string(),
//!   pretty: None,
//! }];
//! let instructions = build_menu(&records, &MenuOptions::default());
//! assert_eq!(instructions.len(), 2); // heading + link
//! ```

pub mod error;
pub mod hierarchy;
pub mod label;
pub mod manifest;

pub use error::MenuError;
pub use hierarchy::{MenuOptions, RenderInstruction, build_menu};
pub use label::format_label;
pub use manifest::PathRecord;
