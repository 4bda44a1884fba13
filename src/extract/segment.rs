//! Segment output types.
//!
//! [`TextSegment`] is one unit of [`parse`](crate::parse) output: a run
//! of plain text, or a match annotated with the owning rule's payload.

use std::collections::BTreeMap;
use std::fmt;

use crate::pattern::{CallbackFn, LONG_PRESS, PRESS};

/// A rule callback closed over one concrete match.
///
/// Holds the matched text and its absolute byte offset in the original
/// input; [`invoke`](Self::invoke) calls the rule's function with both.
/// The engine never invokes callbacks itself.
#[derive(Clone)]
pub struct BoundCallback {
    func: CallbackFn,
    text: String,
    index: usize,
}

impl BoundCallback {
    pub(crate) fn new(func: CallbackFn, text: &str, index: usize) -> Self {
        Self {
            func,
            text: text.to_string(),
            index,
        }
    }

    /// Calls the underlying function with the bound match values.
    pub fn invoke(&self) {
        (self.func)(&self.text, self.index)
    }

    /// The raw matched text this callback was bound to (before any
    /// display transform).
    pub fn matched_text(&self) -> &str {
        &self.text
    }

    /// Absolute byte offset of the match start in the original input.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Debug for BoundCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundCallback")
            .field("text", &self.text)
            .field("index", &self.index)
            .finish()
    }
}

/// Match annotation carried by a matched [`TextSegment`].
#[derive(Debug, Clone)]
pub struct SegmentMatch {
    pub(crate) start: usize,
    pub(crate) raw: String,
    pub(crate) metadata: BTreeMap<String, String>,
    pub(crate) callbacks: BTreeMap<String, BoundCallback>,
}

impl SegmentMatch {
    /// Absolute byte offset of the match start in the original input.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The raw matched substring, before any display transform.
    pub fn matched_text(&self) -> &str {
        &self.raw
    }

    /// All passthrough metadata copied from the owning rule.
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Looks up one metadata entry.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// All bound callbacks, keyed by slot name.
    pub fn callbacks(&self) -> &BTreeMap<String, BoundCallback> {
        &self.callbacks
    }

    /// Looks up one bound callback by slot name.
    pub fn callback(&self, name: &str) -> Option<&BoundCallback> {
        self.callbacks.get(name)
    }

    /// The conventional press callback, if the rule bound one.
    pub fn on_press(&self) -> Option<&BoundCallback> {
        self.callback(PRESS)
    }

    /// The conventional long-press callback, if the rule bound one.
    pub fn on_long_press(&self) -> Option<&BoundCallback> {
        self.callback(LONG_PRESS)
    }
}

/// One unit of segmentation output.
///
/// Segments appear in original left-to-right order. Concatenating
/// [`text`](Self::text) of all segments reproduces the original input
/// exactly, unless a rule rewrote its matches with a display transform
/// (the raw substring is then still available via
/// [`SegmentMatch::matched_text`]).
#[derive(Debug, Clone)]
pub struct TextSegment {
    pub(crate) text: String,
    pub(crate) matched: Option<SegmentMatch>,
}

impl TextSegment {
    /// The display text for this segment.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when some rule claimed this segment.
    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }

    /// Match annotation, present only on matched segments.
    pub fn match_info(&self) -> Option<&SegmentMatch> {
        self.matched.as_ref()
    }

    /// Consumes the segment, returning its display text.
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_plain_segment_has_no_match() {
        let seg = TextSegment {
            text: "hello".to_string(),
            matched: None,
        };
        assert_eq!(seg.text(), "hello");
        assert!(!seg.is_match());
        assert!(seg.match_info().is_none());
    }

    #[test]
    fn test_bound_callback_invokes_with_bound_values() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&hits);
        let cb = BoundCallback::new(
            Arc::new(move |text: &str, index: usize| {
                assert_eq!(text, "bar");
                assert_eq!(index, 4);
                counted.fetch_add(1, Ordering::SeqCst);
            }),
            "bar",
            4,
        );

        assert_eq!(cb.matched_text(), "bar");
        assert_eq!(cb.index(), 4);
        cb.invoke();
        cb.invoke();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
