//! Angle-bracket tag-tree parser.
//!
//! This crate turns `<tag>content</tag>` markup into an ordered tree that
//! interleaves literal text with named tags. Tags nest, including tags that
//! share a name with an enclosing tag (`<i>a<i>b</i>c</i>`): each opener is
//! paired with its *matching* closer, not the first closer of that name.
//!
//! # Example
//!
//! ```rust
//! use slotted_tags::parse;
//!
//! let nodes = parse("Hi <b>there</b>!");
//!
//! assert_eq!(nodes[0].text, "Hi ");
//! assert_eq!(nodes[0].tag_name(), "b");
//! assert_eq!(nodes[0].children()[0].text, "there");
//! assert_eq!(nodes[1].text, "!");
//! ```
//!
//! # Markup Rules
//!
//! - An opening marker is `<`, one or more characters that are neither `/`
//!   nor `>`, then `>`. The name is the inner text with surrounding
//!   whitespace trimmed, so `< b >` opens `b`.
//! - A closing marker is `</name>`, again tolerating whitespace around the
//!   name. Names compare literally and case-sensitively.
//! - There are no attributes, no self-closing tags and no entity decoding.
//!
//! # Lenient Fallback
//!
//! Parsing never fails. An opener without a matching closer is kept as
//! literal text and scanning resumes right after it. Use
//! [`Parser::parse_with_diagnostics`] or [`Parser::parse_strict`] to find out
//! when that happened.
//!
//! Every byte of the input ends up in exactly one place in the tree, so
//! [`to_markup`] always reproduces the input.

mod error;
mod node;
mod scanner;

pub use error::{TagDiagnostic, TagError};
pub use node::{is_blank, to_markup, ParseNode, Tag};

use std::collections::HashMap;

use tracing::{debug, trace};

/// Default nesting limit used by [`Parser::new`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parses `input` with the default [`Parser`].
pub fn parse(input: &str) -> Vec<ParseNode<'_>> {
    Parser::new().parse(input)
}

/// A parse result together with the fallbacks applied to produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<'a> {
    pub nodes: Vec<ParseNode<'a>>,
    pub diagnostics: Vec<TagDiagnostic>,
}

impl<'a> Parsed<'a> {
    /// Returns the nodes, or an error if any fallback was applied.
    pub fn into_result(self) -> Result<Vec<ParseNode<'a>>, TagError> {
        if self.diagnostics.is_empty() {
            Ok(self.nodes)
        } else {
            Err(TagError::Malformed(self.diagnostics))
        }
    }
}

/// Tag-tree parser.
///
/// The parser holds no state between calls; it only carries options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_depth: Option<usize>,
}

impl Parser {
    /// Creates a parser with the [`DEFAULT_MAX_DEPTH`] nesting limit.
    pub fn new() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// Sets the nesting limit.
    ///
    /// Tags at nesting level `limit` (top-level tags are level 1) keep their
    /// content as a single literal child instead of being parsed further.
    /// `None` removes the limit, leaving recursion bounded only by the
    /// nesting present in the input.
    pub fn max_depth(mut self, limit: Option<usize>) -> Self {
        self.max_depth = limit;
        self
    }

    /// Parses `input` into an ordered sequence of nodes.
    ///
    /// The result always has at least one node; its last node is a literal
    /// holding whatever follows the last top-level tag (possibly empty).
    pub fn parse<'a>(&self, input: &'a str) -> Vec<ParseNode<'a>> {
        self.parse_with_diagnostics(input).nodes
    }

    /// Parses `input`, also reporting every fallback that was applied.
    pub fn parse_with_diagnostics<'a>(&self, input: &'a str) -> Parsed<'a> {
        let mut diagnostics = Vec::new();
        let nodes = self.parse_level(input, 0, 1, &mut diagnostics);
        trace!(
            len = input.len(),
            nodes = nodes.len(),
            diagnostics = diagnostics.len(),
            "parsed tag tree"
        );
        Parsed { nodes, diagnostics }
    }

    /// Parses `input`, failing if the markup needed any fallback.
    pub fn parse_strict<'a>(&self, input: &'a str) -> Result<Vec<ParseNode<'a>>, TagError> {
        self.parse_with_diagnostics(input).into_result()
    }

    /// Parses one nesting level. Siblings are scanned in a loop; only tag
    /// content recurses.
    ///
    /// `base` is the offset of `src` within the original input and `level`
    /// the nesting level of tags found directly in `src`.
    fn parse_level<'a>(
        &self,
        src: &'a str,
        base: usize,
        level: usize,
        diagnostics: &mut Vec<TagDiagnostic>,
    ) -> Vec<ParseNode<'a>> {
        let mut nodes = Vec::new();
        let mut closers: HashMap<&'a str, scanner::CloseIndex> = HashMap::new();
        // Start of the pending literal text. Unpaired openers do not move it,
        // so their markup merges into the next node's text.
        let mut text_start = 0;
        let mut cursor = 0;

        while let Some(open) = scanner::find_open(src, cursor) {
            let matched = closers
                .entry(open.name)
                .or_insert_with(|| scanner::CloseIndex::build(src, open.name))
                .matching_close(open.end);
            let Some((close_start, close_end)) = matched else {
                debug!(
                    tag = open.name,
                    offset = base + open.start,
                    "unpaired tag kept as text"
                );
                diagnostics.push(TagDiagnostic::UnpairedTag {
                    name: open.name.to_string(),
                    offset: base + open.start,
                });
                cursor = open.end;
                continue;
            };

            let content = &src[open.end..close_start];
            let children = match self.max_depth {
                Some(limit) if level >= limit => {
                    if scanner::find_open(content, 0).is_some() {
                        debug!(
                            tag = open.name,
                            offset = base + open.start,
                            limit,
                            "nesting limit reached, content kept as text"
                        );
                        diagnostics.push(TagDiagnostic::DepthLimit {
                            name: open.name.to_string(),
                            offset: base + open.start,
                            limit,
                        });
                    }
                    vec![ParseNode::literal(content)]
                }
                _ => self.parse_level(content, base + open.end, level + 1, diagnostics),
            };

            nodes.push(ParseNode::tagged(
                &src[text_start..open.start],
                Tag {
                    name: open.name,
                    open: &src[open.start..open.end],
                    close: &src[close_start..close_end],
                    children,
                },
            ));

            text_start = close_end;
            cursor = text_start;
        }

        nodes.push(ParseNode::literal(&src[text_start..]));
        nodes
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
