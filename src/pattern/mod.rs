//! Pattern rules: what to match and what a match carries.
//!
//! A [`PatternRule`] pairs a matcher (a literal substring, a regex, or a
//! built-in named pattern) with the payload stamped onto each match: an
//! optional display transform, deferred callbacks, and passthrough
//! metadata. Rules are validated when built, so a rule table either
//! fails before scanning starts or is fully usable.

pub mod builtin;

pub use builtin::BuiltinPattern;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use regex::Regex;

use crate::error::{RuleError, RuleResult};

/// Display transform applied to a match: `(matched_text, capture_groups)`
/// to the text shown for the segment. Group 0 is the whole match.
pub type RenderTextFn = Arc<dyn Fn(&str, &[Option<String>]) -> String + Send + Sync>;

/// Deferred callback bound to a match: `(matched_text, byte_offset)`,
/// where the offset is absolute within the original input.
pub type CallbackFn = Arc<dyn Fn(&str, usize) + Send + Sync>;

/// Callback slot name used by [`RuleBuilder::on_press`].
pub const PRESS: &str = "press";

/// Callback slot name used by [`RuleBuilder::on_long_press`].
pub const LONG_PRESS: &str = "long_press";

/// How a rule locates occurrences in text.
#[derive(Clone)]
pub(crate) enum Matcher {
    /// Exact substring, first occurrence per scan step.
    Literal(String),
    /// Compiled regex, leftmost occurrence per scan step.
    Regex(Regex),
}

impl Matcher {
    /// Finds the first occurrence in `haystack`.
    ///
    /// Returns the byte range of the match and its capture groups,
    /// group 0 being the whole match. A literal contributes a single
    /// group 0. Each call searches from the start of `haystack`; no
    /// state is carried between calls.
    pub(crate) fn find(&self, haystack: &str) -> Option<(Range<usize>, Vec<Option<String>>)> {
        match self {
            Self::Literal(needle) => {
                let start = haystack.find(needle.as_str())?;
                let range = start..start + needle.len();
                Some((range, vec![Some(needle.clone())]))
            }
            Self::Regex(re) => {
                let caps = re.captures(haystack)?;
                let whole = caps.get(0).expect("capture group 0 always present");
                let groups = caps
                    .iter()
                    .map(|g| g.map(|m| m.as_str().to_string()))
                    .collect();
                Some((whole.range(), groups))
            }
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Regex(re) => f.debug_tuple("Regex").field(&re.as_str()).finish(),
        }
    }
}

/// One matching directive in a rule table.
///
/// Built via [`PatternRule::builder`] or the shorthand constructors.
/// Rules are cheap to clone (the pattern and closures are shared) and
/// safe to reuse across concurrent [`parse`](crate::parse) calls:
/// matching carries no internal scan state.
#[derive(Clone)]
pub struct PatternRule {
    pub(crate) matcher: Matcher,
    pub(crate) render_text: Option<RenderTextFn>,
    pub(crate) callbacks: BTreeMap<String, CallbackFn>,
    pub(crate) metadata: BTreeMap<String, String>,
    pub(crate) max_matches: Option<usize>,
}

impl PatternRule {
    /// Starts building a rule.
    pub fn builder() -> RuleBuilder {
        RuleBuilder::default()
    }

    /// A bare rule matching an exact substring.
    pub fn literal(needle: impl Into<String>) -> RuleResult<Self> {
        Self::builder().literal(needle).build()
    }

    /// A bare rule matching a regex pattern.
    ///
    /// Encode case-insensitivity in the pattern itself (`(?i)...`).
    pub fn regex(pattern: impl AsRef<str>) -> RuleResult<Self> {
        Self::builder().regex(pattern.as_ref()).build()
    }

    /// A bare rule for a built-in named pattern.
    pub fn builtin(kind: BuiltinPattern) -> Self {
        Self {
            matcher: Matcher::Regex(kind.regex().clone()),
            render_text: None,
            callbacks: BTreeMap::new(),
            metadata: BTreeMap::new(),
            max_matches: None,
        }
    }

    /// A bare rule for a built-in pattern given its symbolic name.
    ///
    /// Fails with [`RuleError::UnknownType`] for names outside the
    /// registry.
    pub fn named(name: &str) -> RuleResult<Self> {
        Ok(Self::builtin(name.parse()?))
    }
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("matcher", &self.matcher)
            .field("render_text", &self.render_text.is_some())
            .field("callbacks", &self.callbacks.keys().collect::<Vec<_>>())
            .field("metadata", &self.metadata)
            .field("max_matches", &self.max_matches)
            .finish()
    }
}

/// Source declared on a builder; resolved and validated at build time.
#[derive(Debug, Clone)]
enum RuleSource {
    Literal(String),
    Regex(String),
    Builtin(BuiltinPattern),
    Named(String),
}

/// Builder for [`PatternRule`].
///
/// Exactly one pattern source must be declared; everything else is
/// optional. All validation happens in [`build`](Self::build), before
/// any scanning.
#[derive(Default)]
pub struct RuleBuilder {
    source: Option<RuleSource>,
    render_text: Option<RenderTextFn>,
    callbacks: BTreeMap<String, CallbackFn>,
    metadata: BTreeMap<String, String>,
    max_matches: Option<usize>,
}

impl RuleBuilder {
    /// Match an exact substring.
    pub fn literal(mut self, needle: impl Into<String>) -> Self {
        self.source = Some(RuleSource::Literal(needle.into()));
        self
    }

    /// Match a regex pattern.
    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.source = Some(RuleSource::Regex(pattern.into()));
        self
    }

    /// Match a built-in named pattern.
    pub fn builtin(mut self, kind: BuiltinPattern) -> Self {
        self.source = Some(RuleSource::Builtin(kind));
        self
    }

    /// Match a built-in pattern given its symbolic name; resolution is
    /// deferred to [`build`](Self::build).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.source = Some(RuleSource::Named(name.into()));
        self
    }

    /// Override the display text of each match.
    pub fn render_text<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &[Option<String>]) -> String + Send + Sync + 'static,
    {
        self.render_text = Some(Arc::new(f));
        self
    }

    /// Bind a callback under an arbitrary slot name.
    pub fn callback<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str, usize) + Send + Sync + 'static,
    {
        self.callbacks.insert(name.into(), Arc::new(f));
        self
    }

    /// Bind a callback under the conventional [`PRESS`] slot.
    pub fn on_press<F>(self, f: F) -> Self
    where
        F: Fn(&str, usize) + Send + Sync + 'static,
    {
        self.callback(PRESS, f)
    }

    /// Bind a callback under the conventional [`LONG_PRESS`] slot.
    pub fn on_long_press<F>(self, f: F) -> Self
    where
        F: Fn(&str, usize) + Send + Sync + 'static,
    {
        self.callback(LONG_PRESS, f)
    }

    /// Attach a passthrough metadata entry, copied verbatim onto every
    /// segment this rule matches.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Cap how many occurrences this rule may claim per parse call.
    /// Occurrences beyond the cap are left as plain text.
    pub fn max_matches(mut self, limit: usize) -> Self {
        self.max_matches = Some(limit);
        self
    }

    /// Validates and builds the rule.
    pub fn build(self) -> RuleResult<PatternRule> {
        let matcher = match self.source {
            None => return Err(RuleError::MissingPattern),
            Some(RuleSource::Literal(needle)) => {
                if needle.is_empty() {
                    return Err(RuleError::EmptyLiteral);
                }
                Matcher::Literal(needle)
            }
            Some(RuleSource::Regex(pattern)) => {
                let re = Regex::new(&pattern)
                    .map_err(|e| RuleError::invalid_regex(&pattern, e))?;
                Matcher::Regex(re)
            }
            Some(RuleSource::Builtin(kind)) => Matcher::Regex(kind.regex().clone()),
            Some(RuleSource::Named(name)) => {
                let kind: BuiltinPattern = name.parse()?;
                Matcher::Regex(kind.regex().clone())
            }
        };

        Ok(PatternRule {
            matcher,
            render_text: self.render_text,
            callbacks: self.callbacks,
            metadata: self.metadata,
            max_matches: self.max_matches,
        })
    }
}
