//! `{{key}}` placeholder substitution.
//!
//! Each key becomes the pattern `{{` ws* key ws* `}}`. The delimiters are
//! escaped; the key is embedded as written, so keys containing regex syntax
//! match more than their literal text (`a.b` also matches `{{axb}}`). Keys
//! that do not compile are skipped.
//!
//! Keys are applied one after another in [`Values`] order, each over the
//! output of the previous one. A value containing `{{other}}` is therefore
//! replaced again if `other` comes later.
//!
//! ```rust
//! use slotted::{substitute, Values};
//!
//! let values = Values::new().with("name", "Ada").with("count", 3);
//! assert_eq!(
//!     substitute("{{ name }} has {{count}} items", &values),
//!     "Ada has 3 items"
//! );
//! ```

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::error::Diagnostic;
use crate::values::Values;

const PREFIX: &str = "{{";
const SUFFIX: &str = "}}";

/// Replaces every `{{key}}` placeholder for each key in `values`.
///
/// Returns `text` unchanged when it or `values` is empty. Placeholders whose
/// key is not in `values` are left as they are.
pub fn substitute(text: &str, values: &Values) -> String {
    substitute_reporting(text, values, &mut Vec::new())
}

pub(crate) fn substitute_reporting(
    text: &str,
    values: &Values,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    if text.is_empty() || values.is_empty() {
        return text.to_string();
    }

    values
        .iter()
        .fold(text.to_string(), |acc, (key, value)| match placeholder(key) {
            Ok(pattern) => pattern
                .replace_all(&acc, NoExpand(&value.to_string()))
                .into_owned(),
            Err(err) => {
                debug!(key, error = %err, "skipping placeholder key");
                diagnostics.push(Diagnostic::InvalidKey {
                    key: key.to_string(),
                });
                acc
            }
        })
}

fn placeholder(key: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?m){}\s*{}\s*{}",
        regex::escape(PREFIX),
        key,
        regex::escape(SUFFIX)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let values = Values::new().with("name", "Ada");
        assert_eq!(substitute("Hello {{name}}", &values), "Hello Ada");
    }

    #[test]
    fn test_whitespace_inside_braces() {
        let values = Values::new().with("name", "Ada");
        assert_eq!(substitute("{{ name }}|{{name  }}|{{\tname}}", &values), "Ada|Ada|Ada");
    }

    #[test]
    fn test_every_occurrence_across_lines() {
        let values = Values::new().with("x", 1);
        assert_eq!(substitute("{{x}}\n{{x}}\nend {{ x }}", &values), "1\n1\nend 1");
    }

    #[test]
    fn test_numbers_use_string_form() {
        let values = Values::new().with("count", 42).with("price", 19.99);
        assert_eq!(
            substitute("Count: {{count}}, Price: {{price}}", &values),
            "Count: 42, Price: 19.99"
        );
    }

    #[test]
    fn test_missing_key_left_untouched() {
        let values = Values::new().with("name", "Ada");
        assert_eq!(substitute("Hi {{other}}", &values), "Hi {{other}}");
    }

    #[test]
    fn test_key_must_match_whole_identifier() {
        let values = Values::new().with("name", "Ada");
        assert_eq!(substitute("{{names}} {{ name}}", &values), "{{names}} Ada");
    }

    #[test]
    fn test_empty_inputs_are_identity() {
        assert_eq!(substitute("", &Values::new().with("a", 1)), "");
        assert_eq!(substitute("{{a}}", &Values::new()), "{{a}}");
    }

    #[test]
    fn test_dollar_in_value_is_literal() {
        let values = Values::new().with("price", "$1 $0");
        assert_eq!(substitute("cost: {{price}}", &values), "cost: $1 $0");
    }

    #[test]
    fn test_later_keys_rescan_earlier_output() {
        let values = Values::new().with("a", "{{b}}").with("b", "B");
        assert_eq!(substitute("{{a}}", &values), "B");
    }

    #[test]
    fn test_earlier_keys_do_not_rescan_later_output() {
        let values = Values::new().with("b", "B").with("a", "{{b}}");
        assert_eq!(substitute("{{a}}", &values), "{{b}}");
    }

    #[test]
    fn test_key_is_used_as_pattern() {
        let values = Values::new().with("a.b", "hit");
        assert_eq!(substitute("{{a.b}} {{axb}}", &values), "hit hit");
    }

    #[test]
    fn test_invalid_key_is_skipped_and_reported() {
        let values = Values::new().with("a(", "x").with("b", "y");
        let mut diagnostics = Vec::new();
        let out = substitute_reporting("{{a(}} {{b}}", &values, &mut diagnostics);
        assert_eq!(out, "{{a(}} y");
        assert_eq!(
            diagnostics,
            vec![Diagnostic::InvalidKey {
                key: "a(".to_string()
            }]
        );
    }
}
