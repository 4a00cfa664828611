//! Error types for toctree operations.

use thiserror::Error;

/// Errors that can occur while handling TOC documents.
///
/// The conversion operations themselves are total and never fail; the only
/// fallible surface is parsing a version tag out of book metadata.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported TOC version: {0}")]
    UnsupportedVersion(String),
}

pub type Result<T> = std::result::Result<T, Error>;
