//! Cursor-based scanning for `<name>` / `</name>` markers.
//!
//! All markers start with ASCII `<`, so every index handed out here is a
//! valid char boundary of the scanned string.

use std::collections::HashMap;

/// An opening marker found in the source: `<` + inner text + `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenMarker<'a> {
    /// Byte index of the `<`.
    pub start: usize,
    /// Byte index just past the `>`.
    pub end: usize,
    /// Inner text with surrounding whitespace trimmed.
    pub name: &'a str,
}

/// Finds the first opening marker at or after `from`.
///
/// The inner text is one or more characters that are neither `/` nor `>`.
/// Markers whose inner text is only whitespace carry no name and are skipped.
pub(crate) fn find_open(src: &str, from: usize) -> Option<OpenMarker<'_>> {
    let bytes = src.as_bytes();
    let mut pos = from;

    while let Some(rel) = src[pos..].find('<') {
        let start = pos + rel;
        let inner_start = start + 1;

        match src[inner_start..].find(['/', '>']) {
            Some(len) if len > 0 && bytes[inner_start + len] == b'>' => {
                let name = src[inner_start..inner_start + len].trim();
                if !name.is_empty() {
                    return Some(OpenMarker {
                        start,
                        end: inner_start + len + 1,
                        name,
                    });
                }
            }
            // No '/' or '>' left anywhere, so no later '<' can open a tag either.
            None => return None,
            _ => {}
        }

        pos = inner_start;
    }

    None
}

/// Finds the first `</name>` at or after `from`, returning its byte range.
pub(crate) fn find_close(src: &str, from: usize, name: &str) -> Option<(usize, usize)> {
    let mut pos = from;
    while let Some(rel) = src[pos..].find('<') {
        let start = pos + rel;
        if let Some(end) = close_at(src, start, name) {
            return Some((start, end));
        }
        pos = start + 1;
    }
    None
}

/// Closer lookup for one tag name over one source string.
///
/// Same-name openers never overlap each other or a same-name closer, so the
/// markers can be collected once and every opener's match found by binary
/// search instead of rescanning the rest of the source.
///
/// For the closer at index `i`, its balance is the number of openers that
/// start before it, minus `i`. An opener ending at `e` is closed by the
/// first closer at or after `e` whose balance equals the number of openers
/// starting before `e`, minus the number of closers before `e`. Balance drops
/// by at most one from closer to closer, so that first closer is also the
/// first one where the nesting depth reaches zero.
#[derive(Debug, Clone, Default)]
pub(crate) struct CloseIndex {
    opens: Vec<usize>,
    closes: Vec<(usize, usize)>,
    by_balance: HashMap<isize, Vec<usize>>,
}

impl CloseIndex {
    pub(crate) fn build(src: &str, name: &str) -> Self {
        let mut opens = Vec::new();
        let mut pos = 0;
        while let Some(rel) = src[pos..].find('<') {
            let start = pos + rel;
            match open_at(src, start, name) {
                Some(end) => {
                    opens.push(start);
                    pos = end;
                }
                None => pos = start + 1,
            }
        }

        let mut closes = Vec::new();
        let mut pos = 0;
        while let Some(range) = find_close(src, pos, name) {
            closes.push(range);
            pos = range.1;
        }

        let mut by_balance: HashMap<isize, Vec<usize>> = HashMap::new();
        let mut preceding = 0;
        for (i, &(start, _)) in closes.iter().enumerate() {
            while preceding < opens.len() && opens[preceding] < start {
                preceding += 1;
            }
            by_balance
                .entry(preceding as isize - i as isize)
                .or_default()
                .push(i);
        }

        Self {
            opens,
            closes,
            by_balance,
        }
    }

    /// The closer matching an opener whose markup ends at `open_end`, as a
    /// byte range of the indexed source. `None` means the opener is unpaired.
    pub(crate) fn matching_close(&self, open_end: usize) -> Option<(usize, usize)> {
        let first = self.closes.partition_point(|&(start, _)| start < open_end);
        let opened = self.opens.partition_point(|&start| start < open_end);
        let target = opened as isize - first as isize;

        let candidates = self.by_balance.get(&target)?;
        let at = candidates.partition_point(|&i| i < first);
        candidates.get(at).map(|&i| self.closes[i])
    }
}

/// Matches `<` ws* name ws* `>` at `start`, returning the end index.
fn open_at(src: &str, start: usize, name: &str) -> Option<usize> {
    let rest = src[start..].strip_prefix('<')?;
    marker_tail(src, rest, name)
}

/// Matches `</` ws* name ws* `>` at `start`, returning the end index.
fn close_at(src: &str, start: usize, name: &str) -> Option<usize> {
    let rest = src[start..].strip_prefix("</")?;
    marker_tail(src, rest, name)
}

fn marker_tail(src: &str, rest: &str, name: &str) -> Option<usize> {
    let rest = rest.trim_start().strip_prefix(name)?;
    let rest = rest.trim_start().strip_prefix('>')?;
    Some(src.len() - rest.len())
}
