//! Diagnostics and errors for tag parsing.

use thiserror::Error;

/// A recoverable markup problem noticed while parsing.
///
/// Offsets are byte indices into the input passed to the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagDiagnostic {
    /// Opening marker with no matching closer; kept as literal text.
    #[error("unpaired tag <{name}> at byte {offset}")]
    UnpairedTag { name: String, offset: usize },

    /// Tag content left unparsed because nesting exceeded the limit.
    #[error("tag <{name}> at byte {offset} nests deeper than {limit} levels")]
    DepthLimit {
        name: String,
        offset: usize,
        limit: usize,
    },
}

impl TagDiagnostic {
    /// Byte offset of the opening marker this diagnostic refers to.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnpairedTag { offset, .. } | Self::DepthLimit { offset, .. } => *offset,
        }
    }
}

/// Strict parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The input parsed only with fallbacks applied.
    #[error("malformed markup: {}", summarize(.0))]
    Malformed(Vec<TagDiagnostic>),
}

impl TagError {
    /// The diagnostics that caused the failure, in input order.
    pub fn diagnostics(&self) -> &[TagDiagnostic] {
        match self {
            Self::Malformed(diagnostics) => diagnostics,
        }
    }
}

fn summarize(diagnostics: &[TagDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
