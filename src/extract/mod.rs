//! The segmentation engine.
//!
//! [`parse`] runs an ordered rule table over an input string and
//! produces the ordered segment sequence. Each rule pass subdivides the
//! pieces no earlier rule has claimed; a claimed piece is never
//! rescanned, so the first rule in list order wins any overlap.

pub mod segment;

pub use segment::{BoundCallback, SegmentMatch, TextSegment};

use crate::pattern::PatternRule;

/// A working piece during scanning: a slice of the original input (or
/// its transformed display text once matched) plus the absolute byte
/// offset where it starts.
struct Piece {
    text: String,
    start: usize,
    matched: Option<SegmentMatch>,
}

impl Piece {
    fn plain(text: &str, start: usize) -> Self {
        Self {
            text: text.to_string(),
            start,
            matched: None,
        }
    }
}

/// Splits `text` into segments according to `rules`.
///
/// Rules apply in list order; a range claimed by an earlier rule is
/// never re-split by a later one. With no rules (or no rule matching
/// anywhere) the whole input comes back as a single plain segment.
/// Empty segments are dropped, so an empty input yields an empty
/// sequence.
///
/// This is a pure function: no state survives the call, and sharing
/// rules across concurrent calls is safe. A panic in a rule's
/// `render_text` propagates to the caller.
///
/// # Examples
///
/// ```
/// use parsed_text::{parse, PatternRule};
///
/// # fn main() -> Result<(), parsed_text::RuleError> {
/// let rules = vec![PatternRule::literal("bar")?];
/// let segments = parse("foo bar baz", &rules);
/// let texts: Vec<_> = segments.iter().map(|s| s.text()).collect();
/// assert_eq!(texts, ["foo ", "bar", " baz"]);
/// assert!(segments[1].is_match());
/// # Ok(())
/// # }
/// ```
pub fn parse(text: &str, rules: &[PatternRule]) -> Vec<TextSegment> {
    let mut pieces = vec![Piece::plain(text, 0)];

    for rule in rules {
        let mut claimed = 0usize;
        let mut next = Vec::with_capacity(pieces.len());
        for piece in pieces {
            if piece.matched.is_some() {
                next.push(piece);
            } else {
                scan_piece(&mut next, piece, rule, &mut claimed);
            }
        }
        pieces = next;
    }

    pieces
        .into_iter()
        .filter(|p| !p.text.is_empty())
        .map(|p| TextSegment {
            text: p.text,
            matched: p.matched,
        })
        .collect()
}

/// Scans one unmatched piece with one rule, appending the resulting
/// sub-pieces to `out` in left-to-right order.
///
/// The scan cursor is local to this call; the rule's pattern carries no
/// state between scans. Zero-width matches claim nothing: the cursor
/// steps over one character so the scan always terminates.
fn scan_piece(out: &mut Vec<Piece>, piece: Piece, rule: &PatternRule, claimed: &mut usize) {
    let text = piece.text;
    let base = piece.start;
    // `cursor` marks the start of text not yet emitted; `search_from`
    // is where the next pattern search begins. They only diverge while
    // stepping over zero-width matches.
    let mut cursor = 0;
    let mut search_from = 0;

    while search_from < text.len() {
        if rule.max_matches.is_some_and(|limit| *claimed >= limit) {
            break;
        }
        let Some((range, groups)) = rule.matcher.find(&text[search_from..]) else {
            break;
        };
        let (start, end) = (search_from + range.start, search_from + range.end);

        if start == end {
            let step = text[start..].chars().next().map_or(1, char::len_utf8);
            search_from = start + step;
            continue;
        }

        out.push(Piece::plain(&text[cursor..start], base + cursor));
        out.push(annotate(rule, &text[start..end], &groups, base + start));
        *claimed += 1;
        cursor = end;
        search_from = end;
    }

    out.push(Piece::plain(&text[cursor..], base + cursor));
}

/// Stamps one matched occurrence with the rule's payload.
fn annotate(rule: &PatternRule, matched: &str, groups: &[Option<String>], start: usize) -> Piece {
    let display = match &rule.render_text {
        Some(render) => render(matched, groups),
        None => matched.to_string(),
    };

    let callbacks = rule
        .callbacks
        .iter()
        .map(|(name, func)| {
            (
                name.clone(),
                BoundCallback::new(func.clone(), matched, start),
            )
        })
        .collect();

    Piece {
        text: display,
        start,
        matched: Some(SegmentMatch {
            start,
            raw: matched.to_string(),
            metadata: rule.metadata.clone(),
            callbacks,
        }),
    }
}
