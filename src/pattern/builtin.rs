//! Built-in named patterns.
//!
//! A small closed registry of patterns callers can request by symbol
//! instead of supplying a regex: URLs, phone numbers, and email
//! addresses. The registry is static and stateless; resolution happens
//! once, when a rule is built.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RuleError;

/// One of the built-in pattern symbols.
///
/// The set is closed: unknown names fail with
/// [`RuleError::UnknownType`] at rule-construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinPattern {
    /// `http://`, `https://`, and `www.` URLs. Case-insensitive.
    Url,
    /// Phone numbers with optional country code, parentheses, and
    /// dash/dot/space separators.
    Phone,
    /// Email addresses, loosely: `something@host.tld`.
    Email,
}

impl BuiltinPattern {
    /// All registry entries, in registry order.
    pub const ALL: [BuiltinPattern; 3] = [Self::Url, Self::Phone, Self::Email];

    /// The symbolic name callers use to request this pattern.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Returns the canonical compiled regex for this symbol.
    pub fn regex(&self) -> &'static Regex {
        match self {
            Self::Url => {
                static PATTERN: Lazy<Regex> = Lazy::new(|| {
                    Regex::new(
                        r"(?i)(https?://|www\.)[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-z0-9-]{2,20}\b([-a-zA-Z0-9@:%_+.~#?&/=]*[-a-zA-Z0-9@:%_+~#?&/=])*",
                    )
                    .expect("valid url regex")
                });
                &PATTERN
            }
            Self::Phone => {
                static PATTERN: Lazy<Regex> = Lazy::new(|| {
                    Regex::new(r"[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,7}")
                        .expect("valid phone regex")
                });
                &PATTERN
            }
            Self::Email => {
                static PATTERN: Lazy<Regex> =
                    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));
                &PATTERN
            }
        }
    }
}

impl fmt::Display for BuiltinPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinPattern {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| RuleError::UnknownType {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for builtin in BuiltinPattern::ALL {
            assert_eq!(builtin.name().parse::<BuiltinPattern>(), Ok(builtin));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(
            "hashtag".parse::<BuiltinPattern>(),
            Err(RuleError::UnknownType {
                name: "hashtag".to_string()
            })
        );
    }

    #[test]
    fn test_url_matching() {
        let re = BuiltinPattern::Url.regex();
        assert_eq!(
            re.find("go to https://website.bz today").unwrap().as_str(),
            "https://website.bz"
        );
        assert_eq!(
            re.find("see WWW.Example.COM now").unwrap().as_str(),
            "WWW.Example.COM"
        );
        // Path segments stay attached
        assert_eq!(
            re.find("link: https://t.co/hashKey!").unwrap().as_str(),
            "https://t.co/hashKey"
        );
        assert!(re.find("no links here").is_none());
    }

    #[test]
    fn test_url_excludes_trailing_dot() {
        let re = BuiltinPattern::Url.regex();
        assert_eq!(
            re.find("visit https://website.bz. Thanks").unwrap().as_str(),
            "https://website.bz"
        );
    }

    #[test]
    fn test_phone_matching() {
        let re = BuiltinPattern::Phone.regex();
        assert_eq!(
            re.find("call (555) 234-5678 now").unwrap().as_str(),
            "(555) 234-5678"
        );
        assert_eq!(
            re.find("or 555.987.6543 works").unwrap().as_str(),
            "555.987.6543"
        );
        assert!(re.find("not a number").is_none());
    }

    #[test]
    fn test_email_matching() {
        let re = BuiltinPattern::Email.regex();
        assert_eq!(
            re.find("mail foo@bar.com today").unwrap().as_str(),
            "foo@bar.com"
        );
        assert!(re.find("foo at bar dot com").is_none());
    }
}
