//! Text rendering of formatted output.
//!
//! [`Element`] is a [`Renderable`] for terminals and plain text. A slot is an
//! element with an optional [`console::Style`]; rendering walks the output
//! tree and applies the style of every enclosing element to each text run.
//!
//! ```rust
//! use std::collections::HashMap;
//! use console::Style;
//! use slotted::format_text;
//! use slotted::text::{render, Element, TextMode};
//!
//! let mut slots = HashMap::new();
//! slots.insert("b".to_string(), Element::styled(Style::new().bold()));
//! slots.insert("dot".to_string(), Element::new().with_default_text("•"));
//!
//! let out = format_text("<dot></dot> <b>Ready</b>", &slots);
//! assert_eq!(render(&out, TextMode::Plain), "• Ready");
//! ```

use console::Style;

use crate::render::{Fragment, Renderable, SlotKey};

/// How to treat element styles when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Apply ANSI escape codes from each element's style.
    Styled,

    /// Ignore styles, outputting only the text.
    Plain,
}

/// A text renderable: an optional style wrapped around child fragments.
#[derive(Debug, Clone, Default)]
pub struct Element {
    key: Option<SlotKey>,
    style: Option<Style>,
    children: Vec<Fragment<Element>>,
}

impl Element {
    /// An unstyled element with no default children.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styled(style: Style) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    /// Sets the text shown when the template gives the slot no content.
    pub fn with_default_text(self, text: impl Into<String>) -> Self {
        self.with_default_children(vec![Fragment::Text(text.into())])
    }

    /// Sets the children shown when the template gives the slot no content.
    pub fn with_default_children(mut self, children: Vec<Fragment<Element>>) -> Self {
        self.children = children;
        self
    }

    /// Identity key, present once the element has been placed in a slot.
    pub fn key(&self) -> Option<&SlotKey> {
        self.key.as_ref()
    }

    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    pub fn children(&self) -> &[Fragment<Element>] {
        &self.children
    }

    /// The element's text without styling.
    pub fn plain_text(&self) -> String {
        render(&self.children, TextMode::Plain)
    }
}

impl Renderable for Element {
    fn empty() -> Self {
        Self::new()
    }

    fn default_children(&self) -> Vec<Fragment<Self>> {
        self.children.clone()
    }

    fn with_children(&self, key: SlotKey, children: Vec<Fragment<Self>>) -> Self {
        Self {
            key: Some(key),
            style: self.style.clone(),
            children,
        }
    }
}

/// Renders fragments to a string.
pub fn render(fragments: &[Fragment<Element>], mode: TextMode) -> String {
    let mut out = String::new();
    let mut styles = Vec::new();
    render_into(&mut out, fragments, mode, &mut styles);
    out
}

fn render_into<'e>(
    out: &mut String,
    fragments: &'e [Fragment<Element>],
    mode: TextMode,
    styles: &mut Vec<&'e Style>,
) {
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => match mode {
                TextMode::Plain => out.push_str(text),
                TextMode::Styled => append_styled(out, text, styles),
            },
            Fragment::Element(element) => {
                let pushed = match &element.style {
                    Some(style) => {
                        styles.push(style);
                        true
                    }
                    None => false,
                };
                render_into(out, &element.children, mode, styles);
                if pushed {
                    styles.pop();
                }
            }
        }
    }
}

fn append_styled(out: &mut String, text: &str, styles: &[&Style]) {
    if text.is_empty() {
        return;
    }

    if styles.is_empty() {
        out.push_str(text);
        return;
    }

    // Outer styles first, so inner styles end up outermost in the codes.
    let mut current = text.to_string();
    for style in styles {
        current = style.apply_to(current).to_string();
    }
    out.push_str(&current);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{format_text, Slots};

    fn bold() -> Style {
        Style::new().bold().force_styling(true)
    }

    fn red() -> Style {
        Style::new().red().force_styling(true)
    }

    fn test_slots() -> Slots<Element> {
        let mut slots = Slots::new();
        slots.insert("bold".to_string(), Element::styled(bold()));
        slots.insert("red".to_string(), Element::styled(red()));
        slots.insert("span".to_string(), Element::new());
        slots
    }

    mod plain_mode {
        use super::*;

        #[test]
        fn plain_text_unchanged() {
            let out = format_text("hello world", &test_slots());
            assert_eq!(render(&out, TextMode::Plain), "hello world");
        }

        #[test]
        fn tags_stripped() {
            let out = format_text("before <bold>middle</bold> after", &test_slots());
            assert_eq!(render(&out, TextMode::Plain), "before middle after");
        }

        #[test]
        fn nested_tags_stripped() {
            let out = format_text("<bold><red>hi</red>!</bold>", &test_slots());
            assert_eq!(render(&out, TextMode::Plain), "hi!");
        }

        #[test]
        fn unknown_tags_render_nothing() {
            let out = format_text("<bold>x</bold><fancy>y</fancy>", &test_slots());
            assert_eq!(render(&out, TextMode::Plain), "x");
        }

        #[test]
        fn unpaired_tags_render_literally() {
            let out = format_text("<bold>never closed", &test_slots());
            assert_eq!(render(&out, TextMode::Plain), "<bold>never closed");
        }

        #[test]
        fn default_text_shows_for_empty_slot() {
            let mut slots = test_slots();
            slots.insert("star".to_string(), Element::new().with_default_text("*"));
            let out = format_text("<star></star> and <star>x</star>", &slots);
            assert_eq!(render(&out, TextMode::Plain), "* and x");
        }
    }

    mod styled_mode {
        use super::*;

        #[test]
        fn unstyled_text_has_no_codes() {
            let out = format_text("plain <span>span</span>", &test_slots());
            assert_eq!(render(&out, TextMode::Styled), "plain span");
        }

        #[test]
        fn known_tag_applies_style() {
            let out = format_text("<bold>hello</bold>", &test_slots());
            let expected = bold().apply_to("hello").to_string();
            assert_eq!(render(&out, TextMode::Styled), expected);
            assert!(expected.contains("\x1b[1m"));
        }

        #[test]
        fn nested_styles_stack() {
            let out = format_text("<bold><red>hi</red></bold>", &test_slots());
            let expected = red()
                .apply_to(bold().apply_to("hi").to_string())
                .to_string();
            assert_eq!(render(&out, TextMode::Styled), expected);
        }

        #[test]
        fn style_ends_with_element() {
            let out = format_text("<red>a</red>b", &test_slots());
            let expected = format!("{}b", red().apply_to("a"));
            assert_eq!(render(&out, TextMode::Styled), expected);
        }
    }

    #[test]
    fn test_with_children_keeps_style_and_sets_key() {
        let element = Element::styled(bold()).with_default_text("x");
        let placed = element.with_children(
            SlotKey::new(0, "b", ""),
            vec![Fragment::Text("y".to_string())],
        );
        assert_eq!(placed.key(), Some(&SlotKey::new(0, "b", "")));
        assert!(placed.style().is_some());
        assert_eq!(placed.plain_text(), "y");
        assert_eq!(element.plain_text(), "x");
    }
}
