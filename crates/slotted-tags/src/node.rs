//! The parse tree.

/// One element of a parsed sequence: the literal text that precedes a tag
/// at this nesting level, plus the tag itself when there is one.
///
/// A node without a tag is a pure literal carrier. All slices borrow from
/// the parsed input, so the tree is a lossless partition of it (see
/// [`to_markup`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode<'a> {
    /// Literal text before the tag's opening marker.
    pub text: &'a str,
    /// The matched tag, if any.
    pub tag: Option<Tag<'a>>,
}

/// A matched `<name>...</name>` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Tag name with surrounding whitespace trimmed.
    pub name: &'a str,
    /// Raw opening marker as written, e.g. `< b >`.
    pub open: &'a str,
    /// Raw closing marker as written, e.g. `</b>`.
    pub close: &'a str,
    /// Parsed content between the markers. Never empty: empty content
    /// parses to a single blank literal.
    pub children: Vec<ParseNode<'a>>,
}

impl<'a> ParseNode<'a> {
    /// Creates a literal-text node.
    pub fn literal(text: &'a str) -> Self {
        Self { text, tag: None }
    }

    /// Creates a node for a matched tag preceded by `text`.
    pub fn tagged(text: &'a str, tag: Tag<'a>) -> Self {
        Self {
            text,
            tag: Some(tag),
        }
    }

    /// The tag name, or `""` for a literal node.
    pub fn tag_name(&self) -> &'a str {
        self.tag.as_ref().map_or("", |tag| tag.name)
    }

    /// The nested content, or an empty slice for a literal node.
    pub fn children(&self) -> &[ParseNode<'a>] {
        match &self.tag {
            Some(tag) => &tag.children,
            None => &[],
        }
    }

    /// True for a literal node with no text.
    pub fn is_blank(&self) -> bool {
        self.tag.is_none() && self.text.is_empty()
    }

    /// Appends this node's source text (leading text, markers, content).
    pub fn write_markup(&self, out: &mut String) {
        out.push_str(self.text);
        if let Some(tag) = &self.tag {
            out.push_str(tag.open);
            for child in &tag.children {
                child.write_markup(out);
            }
            out.push_str(tag.close);
        }
    }
}

/// Reassembles the source text a sequence was parsed from.
///
/// ```rust
/// use slotted_tags::{parse, to_markup};
///
/// let input = "a<i>b<i>c</i>d</i>e";
/// assert_eq!(to_markup(&parse(input)), input);
/// ```
pub fn to_markup(nodes: &[ParseNode<'_>]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.write_markup(&mut out);
    }
    out
}

/// True when a sequence carries no text and no tags.
pub fn is_blank(nodes: &[ParseNode<'_>]) -> bool {
    nodes.iter().all(ParseNode::is_blank)
}
