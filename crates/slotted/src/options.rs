//! Interpolation configuration.
//!
//! [`Options`] deserializes from any serde format, so it can live in an
//! application's config file. Missing fields take their defaults.

use serde::{Deserialize, Serialize};
use slotted_tags::DEFAULT_MAX_DEPTH;

/// What to put in place of a tag that has no entry in the slot map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSlot {
    /// An empty renderable; the tag and its content render as nothing.
    #[default]
    Drop,

    /// An empty renderable holding the formatted content, so the content
    /// shows without the tag.
    Unwrap,
}

/// Options shared by the parser and formatter stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Nesting limit for the tag parser; `None` disables it.
    pub max_depth: Option<usize>,
    pub unknown_slot: UnknownSlot,
    /// Make [`Interpolator::run_checked`](crate::Interpolator::run_checked)
    /// fail when any fallback was applied.
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            unknown_slot: UnknownSlot::Drop,
            strict: false,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_depth(mut self, limit: Option<usize>) -> Self {
        self.max_depth = limit;
        self
    }

    pub fn unknown_slot(mut self, behavior: UnknownSlot) -> Self {
        self.unknown_slot = behavior;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
