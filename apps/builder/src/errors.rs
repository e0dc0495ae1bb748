#![allow(dead_code)]

use thiserror::Error;

/// Application-level error type.
///
/// Render and navigation paths never return errors — missing page elements
/// are a best-effort skip (see `page`). This type covers configuration and
/// driver failures only.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Unknown template style: {0}")]
    UnknownStyle(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
