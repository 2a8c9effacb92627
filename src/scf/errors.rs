//! Custom error types for container decoding

use std::fmt;
use std::io;

/// Container decoding error types
#[derive(Debug)]
pub enum ScfError {
    /// I/O error
    IoError(io::Error),
    /// Fewer bytes available than a header or declared length requires
    TruncatedInput {
        /// Absolute offset where the read was attempted
        offset: usize,
        /// Bytes the read needed
        needed: usize,
        /// Bytes that were actually left
        available: usize,
        /// Tag type of the enclosing record, when known
        tag_type: Option<u8>,
    },
    /// A record tag with no sub-parser mapped to it
    UnknownTagType {
        tag_type: u8,
        offset: usize,
    },
    /// A draw command pointing past the textures parsed so far
    InvalidTextureReference {
        index: usize,
        available: usize,
        offset: usize,
        tag_type: Option<u8>,
    },
    /// The tag table configuration could not be loaded
    InvalidTagTable(String),
    /// Image buffer construction or encoding failed
    ImageError(String),
    /// Generic error with message
    GenericError(String),
}

impl ScfError {
    /// Attach the tag type of the record being decoded, if not already set
    pub fn in_record(self, record_tag: u8) -> Self {
        match self {
            ScfError::TruncatedInput { offset, needed, available, tag_type: None } => {
                ScfError::TruncatedInput { offset, needed, available, tag_type: Some(record_tag) }
            }
            ScfError::InvalidTextureReference { index, available, offset, tag_type: None } => {
                ScfError::InvalidTextureReference { index, available, offset, tag_type: Some(record_tag) }
            }
            other => other,
        }
    }

    /// Shift a relative offset into the absolute offset space of the stream
    pub fn rebase(self, base: usize) -> Self {
        match self {
            ScfError::TruncatedInput { offset, needed, available, tag_type } => {
                ScfError::TruncatedInput { offset: offset + base, needed, available, tag_type }
            }
            ScfError::InvalidTextureReference { index, available, offset, tag_type } => {
                ScfError::InvalidTextureReference { index, available, offset: offset + base, tag_type }
            }
            ScfError::UnknownTagType { tag_type, offset } => {
                ScfError::UnknownTagType { tag_type, offset: offset + base }
            }
            other => other,
        }
    }

    /// Whether this error is a structural failure that aborts the decode
    pub fn is_structural(&self) -> bool {
        matches!(self,
            ScfError::TruncatedInput { .. }
            | ScfError::UnknownTagType { .. }
            | ScfError::InvalidTextureReference { .. })
    }
}

fn describe_tag(tag_type: &Option<u8>) -> String {
    match tag_type {
        Some(tag) => format!(" (record tag {})", tag),
        None => String::new(),
    }
}

impl fmt::Display for ScfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScfError::IoError(e) => write!(f, "I/O error: {}", e),
            ScfError::TruncatedInput { offset, needed, available, tag_type } => write!(
                f,
                "Truncated input at offset {:#x}: needed {} bytes, {} available{}",
                offset, needed, available, describe_tag(tag_type)
            ),
            ScfError::UnknownTagType { tag_type, offset } => {
                write!(f, "Unknown tag type {} at offset {:#x}", tag_type, offset)
            }
            ScfError::InvalidTextureReference { index, available, offset, tag_type } => write!(
                f,
                "Texture index {} at offset {:#x} is out of range ({} textures parsed){}",
                index, offset, available, describe_tag(tag_type)
            ),
            ScfError::InvalidTagTable(msg) => write!(f, "Invalid tag table: {}", msg),
            ScfError::ImageError(msg) => write!(f, "Image error: {}", msg),
            ScfError::GenericError(msg) => write!(f, "SC error: {}", msg),
        }
    }
}

impl std::error::Error for ScfError {}

impl From<io::Error> for ScfError {
    fn from(error: io::Error) -> Self {
        ScfError::IoError(error)
    }
}

impl From<image::ImageError> for ScfError {
    fn from(error: image::ImageError) -> Self {
        ScfError::ImageError(error.to_string())
    }
}

impl From<String> for ScfError {
    fn from(msg: String) -> Self {
        ScfError::GenericError(msg)
    }
}

/// Result type for container operations
pub type ScfResult<T> = Result<T, ScfError>;
