//! Diagnostics and errors for interpolation.
//!
//! Interpolation is lenient: malformed markup, unknown slots and unusable
//! placeholder keys are recovered from locally. Each recovery is recorded
//! as a [`Diagnostic`], which strict callers can turn into an
//! [`InterpolationError`].

use slotted_tags::TagDiagnostic;
use thiserror::Error;

use crate::values::ValuesError;

/// A recoverable problem noticed while interpolating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Markup fallback applied by the tag parser.
    #[error(transparent)]
    Tag(#[from] TagDiagnostic),

    /// Tag present in the template but absent from the slot map.
    #[error("no slot named <{name}>")]
    UnknownSlot { name: String },

    /// Placeholder key that does not form a valid pattern; it was skipped.
    #[error("placeholder key `{key}` is not a valid pattern")]
    InvalidKey { key: String },
}

/// Error type for strict interpolation and value loading.
#[derive(Debug, Error)]
pub enum InterpolationError {
    /// Strict mode rejected a template that needed fallbacks.
    #[error("template needed {} fallback(s): {}", .0.len(), summarize(.0))]
    Diagnostics(Vec<Diagnostic>),

    /// Placeholder values could not be loaded.
    #[error(transparent)]
    Values(#[from] ValuesError),
}

impl InterpolationError {
    /// Diagnostics behind a strict-mode failure; empty for other errors.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            InterpolationError::Diagnostics(diagnostics) => diagnostics,
            InterpolationError::Values(_) => &[],
        }
    }
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_diagnostic_is_transparent() {
        let diag: Diagnostic = TagDiagnostic::UnpairedTag {
            name: "b".to_string(),
            offset: 4,
        }
        .into();
        assert_eq!(diag.to_string(), "unpaired tag <b> at byte 4");
    }

    #[test]
    fn test_error_display_counts_fallbacks() {
        let err = InterpolationError::Diagnostics(vec![
            Diagnostic::UnknownSlot {
                name: "fancy".to_string(),
            },
            Diagnostic::InvalidKey {
                key: "a(".to_string(),
            },
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("template needed 2 fallback(s)"));
        assert!(msg.contains("no slot named <fancy>"));
        assert_eq!(err.diagnostics().len(), 2);
    }

    #[test]
    fn test_from_values_error() {
        let err: InterpolationError = ValuesError::NotAnObject("null").into();
        assert!(matches!(err, InterpolationError::Values(_)));
        assert!(err.diagnostics().is_empty());
    }
}
