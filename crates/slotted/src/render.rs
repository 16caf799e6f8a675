//! The renderable abstraction consumed by the formatter.

use std::fmt;

/// One item of formatted output: literal text or a resolved renderable.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment<R> {
    Text(String),
    Element(R),
}

impl<R> Fragment<R> {
    /// The literal text, if this is a text fragment.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Fragment::Text(text) => Some(text),
            Fragment::Element(_) => None,
        }
    }

    /// The renderable, if this is an element fragment.
    pub fn as_element(&self) -> Option<&R> {
        match self {
            Fragment::Text(_) => None,
            Fragment::Element(element) => Some(element),
        }
    }
}

/// Identity key assigned to each renderable placed into a slot.
///
/// Keys derive from the slot's index among its siblings, its tag name and
/// the literal text before it, so formatting identical input twice yields
/// identical keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey(String);

impl SlotKey {
    pub fn new(index: usize, name: &str, leading: &str) -> Self {
        SlotKey(format!("{}:{}:{}", index, name, leading))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A unit the rendering layer places into a named slot.
///
/// The formatter never inspects a renderable. It only derives keyed copies
/// with new children, or asks for the children the renderable already has.
///
/// # Example
///
/// ```rust
/// use slotted::{Fragment, Renderable, SlotKey};
///
/// #[derive(Debug, Clone, Default)]
/// struct Link {
///     href: String,
///     key: Option<SlotKey>,
///     children: Vec<Fragment<Link>>,
/// }
///
/// impl Renderable for Link {
///     fn empty() -> Self {
///         Link::default()
///     }
///
///     fn default_children(&self) -> Vec<Fragment<Self>> {
///         self.children.clone()
///     }
///
///     fn with_children(&self, key: SlotKey, children: Vec<Fragment<Self>>) -> Self {
///         Link { href: self.href.clone(), key: Some(key), children }
///     }
/// }
/// ```
pub trait Renderable: Sized {
    /// A renderable that renders as nothing, used for unknown slots.
    fn empty() -> Self;

    /// Children to show when the template gives the slot no content.
    fn default_children(&self) -> Vec<Fragment<Self>>;

    /// A copy of `self` with a fresh identity key and replaced children.
    fn with_children(&self, key: SlotKey, children: Vec<Fragment<Self>>) -> Self;
}
