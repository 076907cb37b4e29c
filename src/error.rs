//! Error types for linch-hwpx-rs

use crate::model::ObjectType;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The token stream was used out of order (close without open,
    /// attribute after child content, unclosed elements at the end).
    #[error("Structural error: {0}")]
    Structural(String),

    /// The registry has no writer for the requested type tag.
    #[error("No writer registered for object type '{0:?}'")]
    UnknownWriter(ObjectType),

    /// A writer was handed a node of the wrong type tag.
    #[error("Writer for '{expected:?}' received a '{found:?}' node")]
    TypeMismatch {
        expected: ObjectType,
        found: ObjectType,
    },

    /// Ordered child list and a typed accessor disagree about membership.
    #[error("Consistency violation: {0}")]
    Consistency(String),

    #[error("Invalid attribute value: {0}")]
    InvalidAttributeValue(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
