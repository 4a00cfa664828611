//! Core data model for TOC processing.
//!
//! This module contains:
//! - The canonical `Section` tree (union of both on-disk layouts)
//! - The `Version` tag identifying which layout a tree conforms to

mod section;
mod version;

pub use section::Section;
pub use version::Version;
