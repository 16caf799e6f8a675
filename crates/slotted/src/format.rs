//! Resolving a parse tree against a slot map.

use std::collections::HashMap;

use slotted_tags::{is_blank, ParseNode, Parser};
use tracing::debug;

use crate::error::Diagnostic;
use crate::options::UnknownSlot;
use crate::render::{Fragment, Renderable, SlotKey};

/// Map from tag name to the renderable that fills that slot.
pub type Slots<R> = HashMap<String, R>;

/// Formats a parse tree with default options.
pub fn format<R: Renderable>(nodes: &[ParseNode<'_>], slots: &Slots<R>) -> Vec<Fragment<R>> {
    Formatter::new(slots).format(nodes)
}

/// Parses `text` with the default [`Parser`] and formats the result.
pub fn format_text<R: Renderable>(text: &str, slots: &Slots<R>) -> Vec<Fragment<R>> {
    format(&Parser::new().parse(text), slots)
}

/// Walks parse nodes and splices slot renderables between text fragments.
///
/// For every node the leading text is emitted as a fragment, even when it
/// is empty. A tag node then resolves its name in the slot map:
///
/// - found: the renderable is copied with a [`SlotKey`] and children set to
///   the formatted content, or to its own default children when the content
///   is blank (`<icon></icon>`)
/// - missing: an empty renderable, per [`UnknownSlot`]
#[derive(Debug)]
pub struct Formatter<'s, R> {
    slots: &'s Slots<R>,
    unknown_slot: UnknownSlot,
}

impl<'s, R: Renderable> Formatter<'s, R> {
    pub fn new(slots: &'s Slots<R>) -> Self {
        Self {
            slots,
            unknown_slot: UnknownSlot::default(),
        }
    }

    /// Sets the behavior for tags missing from the slot map.
    pub fn unknown_slot(mut self, behavior: UnknownSlot) -> Self {
        self.unknown_slot = behavior;
        self
    }

    pub fn format(&self, nodes: &[ParseNode<'_>]) -> Vec<Fragment<R>> {
        self.format_with_diagnostics(nodes).0
    }

    /// Formats `nodes`, also reporting each unknown slot encountered.
    pub fn format_with_diagnostics(
        &self,
        nodes: &[ParseNode<'_>],
    ) -> (Vec<Fragment<R>>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let fragments = self.format_level(nodes, &mut diagnostics);
        (fragments, diagnostics)
    }

    fn format_level(
        &self,
        nodes: &[ParseNode<'_>],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<Fragment<R>> {
        let mut out = Vec::with_capacity(nodes.len() * 2);

        for (index, node) in nodes.iter().enumerate() {
            out.push(Fragment::Text(node.text.to_string()));

            let Some(tag) = &node.tag else {
                continue;
            };

            let key = SlotKey::new(index, tag.name, node.text);
            let element = match self.slots.get(tag.name) {
                Some(slot) => {
                    let children = if is_blank(&tag.children) {
                        slot.default_children()
                    } else {
                        self.format_level(&tag.children, diagnostics)
                    };
                    slot.with_children(key, children)
                }
                None => {
                    debug!(tag = tag.name, "no slot for tag");
                    diagnostics.push(Diagnostic::UnknownSlot {
                        name: tag.name.to_string(),
                    });
                    let children = match self.unknown_slot {
                        UnknownSlot::Drop => {
                            self.report_unknown(&tag.children, diagnostics);
                            Vec::new()
                        }
                        UnknownSlot::Unwrap => self.format_level(&tag.children, diagnostics),
                    };
                    R::empty().with_children(key, children)
                }
            };
            out.push(Fragment::Element(element));
        }

        out
    }

    /// Reports unknown slots inside content that is dropped unformatted.
    fn report_unknown(&self, nodes: &[ParseNode<'_>], diagnostics: &mut Vec<Diagnostic>) {
        for tag in nodes.iter().filter_map(|node| node.tag.as_ref()) {
            if !self.slots.contains_key(tag.name) {
                debug!(tag = tag.name, "no slot for tag");
                diagnostics.push(Diagnostic::UnknownSlot {
                    name: tag.name.to_string(),
                });
            }
            self.report_unknown(&tag.children, diagnostics);
        }
    }
}
