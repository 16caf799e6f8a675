//! The substitute → parse → format pipeline.
//!
//! Values are substituted into the raw template before tags are parsed, so a
//! value may itself contain markup that then becomes a slot.

use slotted_tags::Parser;
use tracing::trace;

use crate::error::{Diagnostic, InterpolationError};
use crate::format::{Formatter, Slots};
use crate::options::Options;
use crate::render::{Fragment, Renderable};
use crate::substitute::substitute_reporting;
use crate::text::{render, Element, TextMode};
use crate::values::Values;

/// Pipeline output: a plain string when no slot map was given, otherwise
/// the formatted fragment sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolated<R> {
    Text(String),
    Fragments(Vec<Fragment<R>>),
}

impl<R> Interpolated<R> {
    /// The string, for output produced without a slot map.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Interpolated::Text(text) => Some(text),
            Interpolated::Fragments(_) => None,
        }
    }

    /// The output as fragments; a plain string becomes one text fragment.
    pub fn into_fragments(self) -> Vec<Fragment<R>> {
        match self {
            Interpolated::Text(text) => vec![Fragment::Text(text)],
            Interpolated::Fragments(fragments) => fragments,
        }
    }
}

impl Interpolated<Element> {
    /// Renders the output as text.
    pub fn render_text(&self, mode: TextMode) -> String {
        match self {
            Interpolated::Text(text) => text.clone(),
            Interpolated::Fragments(fragments) => render(fragments, mode),
        }
    }
}

/// Runs [`Interpolator::run`] with default options.
pub fn interpolate<R: Renderable>(
    text: &str,
    values: Option<&Values>,
    slots: Option<&Slots<R>>,
) -> Interpolated<R> {
    Interpolator::new().run(text, values, slots)
}

/// Composes placeholder substitution, tag parsing and formatting.
///
/// - neither `values` nor `slots`: the text, verbatim
/// - only `values`: the substituted string
/// - `slots`: substituted (when `values` is given), parsed and formatted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interpolator {
    options: Options,
}

impl Interpolator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn run<R: Renderable>(
        &self,
        text: &str,
        values: Option<&Values>,
        slots: Option<&Slots<R>>,
    ) -> Interpolated<R> {
        self.run_with_diagnostics(text, values, slots).0
    }

    /// Like [`run`](Self::run), also returning every fallback applied.
    pub fn run_with_diagnostics<R: Renderable>(
        &self,
        text: &str,
        values: Option<&Values>,
        slots: Option<&Slots<R>>,
    ) -> (Interpolated<R>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();

        let substituted = match values {
            Some(values) => substitute_reporting(text, values, &mut diagnostics),
            None => text.to_string(),
        };

        let Some(slots) = slots else {
            return (Interpolated::Text(substituted), diagnostics);
        };

        let parsed = Parser::new()
            .max_depth(self.options.max_depth)
            .parse_with_diagnostics(&substituted);
        diagnostics.extend(parsed.diagnostics.into_iter().map(Diagnostic::from));

        let (fragments, unknown) = Formatter::new(slots)
            .unknown_slot(self.options.unknown_slot)
            .format_with_diagnostics(&parsed.nodes);
        diagnostics.extend(unknown);

        trace!(
            fragments = fragments.len(),
            diagnostics = diagnostics.len(),
            "interpolated template"
        );
        (Interpolated::Fragments(fragments), diagnostics)
    }

    /// Like [`run`](Self::run), but in strict mode any fallback is an error.
    ///
    /// Without [`Options::strict`] this never fails.
    pub fn run_checked<R: Renderable>(
        &self,
        text: &str,
        values: Option<&Values>,
        slots: Option<&Slots<R>>,
    ) -> Result<Interpolated<R>, InterpolationError> {
        let (output, diagnostics) = self.run_with_diagnostics(text, values, slots);
        if self.options.strict && !diagnostics.is_empty() {
            return Err(InterpolationError::Diagnostics(diagnostics));
        }
        Ok(output)
    }
}
