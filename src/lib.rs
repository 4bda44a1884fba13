//! Pattern-based text segmentation with match metadata and deferred
//! callbacks.
//!
//! This library splits a string into an ordered sequence of segments:
//! plain runs of text, and matches annotated with a display transform,
//! bound callbacks, and passthrough metadata. Rule order is a priority
//! order, so the first rule to claim a range keeps it. Rendering the
//! segments is the caller's job; the engine only produces the sequence.
//!
//! # Features
//!
//! - **Ordered rule tables**: earlier rules pre-empt later ones
//! - **Built-in patterns**: `url`, `phone`, `email` via a closed registry
//! - **Literal and regex rules**: exact substrings or full regex syntax
//! - **Display transforms**: rewrite what a match shows without losing
//!   the raw substring
//! - **Deferred callbacks**: bound to the matched text and its absolute
//!   offset, invoked only by the caller
//!
//! # Architecture
//!
//! - [`pattern`]: rule model and the built-in pattern registry
//! - [`extract`]: the scanning engine and segment output types
//! - [`error`]: rule-construction errors
//!
//! # Quick Start
//!
//! ```
//! use parsed_text::{parse, BuiltinPattern, PatternRule};
//!
//! # fn main() -> Result<(), parsed_text::RuleError> {
//! let rules = vec![
//!     PatternRule::builtin(BuiltinPattern::Url),
//!     PatternRule::literal("bar")?,
//! ];
//!
//! let segments = parse("see http://foo.bar for bar info", &rules);
//! let texts: Vec<_> = segments.iter().map(|s| s.text()).collect();
//! assert_eq!(texts, ["see ", "http://foo.bar", " for ", "bar", " info"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Callbacks and transforms
//!
//! ```
//! use parsed_text::{parse, PatternRule};
//!
//! # fn main() -> Result<(), parsed_text::RuleError> {
//! let rules = vec![PatternRule::builder()
//!     .regex(r"\[(@[^:]+):([^\]]+)\]")
//!     .render_text(|_, groups| groups[1].clone().unwrap_or_default())
//!     .on_press(|text, index| println!("pressed {text} at byte {index}"))
//!     .meta("kind", "mention")
//!     .build()?];
//!
//! let segments = parse("Mention [@michel:561316513]", &rules);
//! let mention = segments[1].match_info().unwrap();
//! assert_eq!(segments[1].text(), "@michel");
//! assert_eq!(mention.matched_text(), "[@michel:561316513]");
//! assert_eq!(mention.meta("kind"), Some("mention"));
//! mention.on_press().unwrap().invoke();
//! # Ok(())
//! # }
//! ```

// Public API
pub mod error;
pub mod extract;
pub mod pattern;

// Re-exports for convenient access
pub use error::{RuleError, RuleResult};
pub use extract::{parse, BoundCallback, SegmentMatch, TextSegment};
pub use pattern::{BuiltinPattern, CallbackFn, PatternRule, RenderTextFn, RuleBuilder};
