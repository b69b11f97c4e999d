//! # Regex Wrapper

use core::ops::Range;
use std::sync::Arc;

use crate::errors::{TKError, TKResult};

/// Common shared handle for a compiled [`RegexWrapper`].
pub type RegexWrapperHandle = Arc<RegexWrapper>;

/// An engine-tagged, uncompiled regex pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegexWrapperPattern {
    /// Compile with the `regex` engine.
    Basic(String),

    /// Compile with the `fancy-regex` engine (lookaround, backreferences).
    Fancy(String),

    /// Try the `regex` engine; fall back to `fancy-regex`.
    Adaptive(String),
}

impl From<&str> for RegexWrapperPattern {
    fn from(pattern: &str) -> Self {
        RegexWrapperPattern::Adaptive(pattern.to_string())
    }
}

impl From<String> for RegexWrapperPattern {
    fn from(pattern: String) -> Self {
        RegexWrapperPattern::Adaptive(pattern)
    }
}

impl From<&String> for RegexWrapperPattern {
    fn from(pattern: &String) -> Self {
        RegexWrapperPattern::Adaptive(pattern.clone())
    }
}

impl RegexWrapperPattern {
    /// The pattern source.
    pub fn as_str(&self) -> &str {
        match self {
            RegexWrapperPattern::Basic(pattern) => pattern,
            RegexWrapperPattern::Fancy(pattern) => pattern,
            RegexWrapperPattern::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the pattern.
    ///
    /// ## Returns
    /// The compiled [`RegexWrapper`], or a [`TKError::PatternCompilation`].
    pub fn compile(&self) -> TKResult<RegexWrapper> {
        match self {
            RegexWrapperPattern::Basic(pattern) => ::regex::Regex::new(pattern)
                .map(RegexWrapper::Basic)
                .map_err(|err| TKError::pattern(pattern, err)),
            RegexWrapperPattern::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::Fancy)
                .map_err(|err| TKError::pattern(pattern, err)),
            RegexWrapperPattern::Adaptive(pattern) => match ::regex::Regex::new(pattern) {
                Ok(regex) => Ok(RegexWrapper::Basic(regex)),
                Err(basic_err) => {
                    log::debug!("falling back to fancy-regex for {pattern:?}: {basic_err}");
                    fancy_regex::Regex::new(pattern)
                        .map(RegexWrapper::Fancy)
                        .map_err(|err| TKError::pattern(pattern, err))
                }
            },
        }
    }
}

/// A compiled regex over one of the supported engines.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// A `regex` engine regex.
    Basic(::regex::Regex),

    /// A `fancy-regex` engine regex.
    Fancy(fancy_regex::Regex),
}

impl PartialEq for RegexWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.is_fancy() == other.is_fancy() && self.as_str() == other.as_str()
    }
}

impl From<::regex::Regex> for RegexWrapper {
    fn from(regex: ::regex::Regex) -> Self {
        RegexWrapper::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        RegexWrapper::Fancy(regex)
    }
}

impl RegexWrapper {
    /// The pattern source.
    pub fn as_str(&self) -> &str {
        match self {
            RegexWrapper::Basic(regex) => regex.as_str(),
            RegexWrapper::Fancy(regex) => regex.as_str(),
        }
    }

    /// Is this a `fancy-regex` regex?
    pub fn is_fancy(&self) -> bool {
        matches!(self, RegexWrapper::Fancy(_))
    }

    /// Find the leftmost match starting at or after `offset`.
    ///
    /// Surrounding text is visible to anchors and lookaround.
    ///
    /// `fancy-regex` can fail at match time (backtrack limit);
    /// that is logged and reported as no further match.
    ///
    /// ## Returns
    /// The byte range of the match, relative to `text`.
    pub fn find_at(
        &self,
        text: &str,
        offset: usize,
    ) -> Option<Range<usize>> {
        match self {
            RegexWrapper::Basic(regex) => regex.find_at(text, offset).map(|m| m.range()),
            RegexWrapper::Fancy(regex) => match regex.find_from_pos(text, offset) {
                Ok(m) => m.map(|m| m.start()..m.end()),
                Err(err) => {
                    log::warn!(
                        "pattern {:?} failed at byte offset {offset}: {err}",
                        regex.as_str()
                    );
                    None
                }
            },
        }
    }
}
