//! # Slotted - Values and Component Slots for Template Strings
//!
//! `slotted` fills a template string such as a translated UI message:
//!
//! - `{{key}}` placeholders receive scalar [`Values`]
//! - `<name>...</name>` tags become slots filled by caller-supplied
//!   [`Renderable`]s, whose children are the tag's formatted content
//!
//! The output is an ordered sequence of [`Fragment`]s: literal text
//! interleaved with renderables, ready for a rendering layer to lay out.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use console::Style;
//! use slotted::text::{Element, TextMode};
//! use slotted::{interpolate, Values};
//!
//! let mut slots = HashMap::new();
//! slots.insert("b".to_string(), Element::styled(Style::new().bold()));
//!
//! let values = Values::new().with("name", "Ada").with("count", 3);
//! let output = interpolate(
//!     "Hello <b>{{name}}</b>, you have {{count}} messages",
//!     Some(&values),
//!     Some(&slots),
//! );
//!
//! assert_eq!(
//!     output.render_text(TextMode::Plain),
//!     "Hello Ada, you have 3 messages"
//! );
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! template ──substitute──▶ string ──parse──▶ ParseNode tree ──format──▶ fragments
//!            (Values)                       (slotted-tags)            (Slots)
//! ```
//!
//! Substitution runs on the raw string first, so values may contain markup
//! that the parser then discovers. Each stage is also usable on its own:
//! [`substitute`], [`parse`](slotted_tags::parse), [`format`] and
//! [`format_text`].
//!
//! ## Leniency
//!
//! Nothing in the pipeline fails on bad input:
//!
//! - unpaired tags are kept as literal text
//! - tags missing from the slot map render as an empty renderable
//! - placeholders without a value are left in place
//!
//! Every such recovery is reported as a [`Diagnostic`] by the
//! `*_with_diagnostics` entry points. With [`Options::strict`],
//! [`Interpolator::run_checked`] turns them into an [`InterpolationError`].
//!
//! ## Rendering
//!
//! The [`Renderable`] trait is the only thing the pipeline needs from a
//! rendering layer. The [`text`] module implements it for terminal output
//! using `console` styles.

mod error;
mod format;
mod interpolate;
mod options;
mod render;
mod substitute;
pub mod text;
mod values;

pub use error::{Diagnostic, InterpolationError};
pub use format::{format, format_text, Formatter, Slots};
pub use interpolate::{interpolate, Interpolated, Interpolator};
pub use options::{Options, UnknownSlot};
pub use render::{Fragment, Renderable, SlotKey};
pub use substitute::substitute;
pub use values::{Scalar, Values, ValuesError};

// Tag-tree parser
pub use slotted_tags::{
    parse, to_markup, ParseNode, Parsed, Parser, Tag, TagDiagnostic, TagError, DEFAULT_MAX_DEPTH,
};
