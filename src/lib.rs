//! # toctree
//!
//! Schema conversion for Jupyter Book table-of-contents trees.
//!
//! Jupyter Book shipped two incompatible `toc.yml` layouts. The legacy v1
//! layout stores every link in a single `url` field, with an `external`
//! flag telling book-local paths apart from outside links, plus decorative
//! `search`/`divider` flags. The v2 layout drops those flags and splits the
//! link into `file` (book-local) and `url` (external). This crate converts
//! a parsed TOC tree between the two through a canonical in-memory form:
//!
//! - [`normalize`] — version-specific tree → canonical [`Section`] tree
//! - [`project`] — canonical tree → version-specific tree
//!
//! Both operations are pure and total: they allocate a fresh output tree,
//! never touch their input, preserve sibling order, and never fail — absent
//! fields stay absent, malformed input degrades field-by-field. Reading and
//! writing the TOC document itself is the caller's job; `Section` carries
//! the serde contract (`file`, `url`, `sections`, ...) that readers and
//! writers rely on.
//!
//! ## Quick Start
//!
//! ```
//! use toctree::{Section, Version, normalize, project};
//!
//! // A leaf entry as parsed from a v1 toc document. v1 keeps every link
//! // in `url`, which deserializes into the `external_link` slot.
//! let v1 = Section::new()
//!     .with_title("Intro")
//!     .with_external_link("intro.md")
//!     .with_external(false)
//!     .with_header(true);
//!
//! let canonical = normalize(Version::V1, &v1);
//! assert_eq!(canonical.internal_target.as_deref(), Some("intro.md"));
//!
//! let v2 = project(Version::V2, &canonical);
//! assert_eq!(v2.internal_target.as_deref(), Some("intro.md"));
//! assert_eq!(v2.external_link, None);
//! ```

pub mod convert;
pub mod error;
pub mod model;

pub use convert::{normalize, project};
pub use error::{Error, Result};
pub use model::{Section, Version};
