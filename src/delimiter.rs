use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RenderError;

/// A pair of tokens surrounding a piece of math inside plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct DelimiterPair {
    pub left: Cow<'static, str>,
    pub right: Cow<'static, str>,
    /// Whether the math should be rendered as a block rather than inline
    pub display: bool,
}
impl DelimiterPair {
    pub fn new(
        left: impl Into<Cow<'static, str>>,
        right: impl Into<Cow<'static, str>>,
        display: bool,
    ) -> DelimiterPair {
        DelimiterPair {
            left: left.into(),
            right: right.into(),
            display,
        }
    }

    pub const fn new_static(left: &'static str, right: &'static str, display: bool) -> Self {
        DelimiterPair {
            left: Cow::Borrowed(left),
            right: Cow::Borrowed(right),
            display,
        }
    }

    /// Whether this pair is an AMS environment like `\begin{equation}...\end{equation}`.  
    /// The markers of such a pair are part of the math source.
    pub fn is_ams_environment(&self) -> bool {
        self.left.starts_with("\\begin{")
    }
}

/// The delimiters used when none are configured.  
/// `$$` must come before `$` so that it is not shadowed by it.
pub const DEFAULT_DELIMITERS: [DelimiterPair; 9] = [
    DelimiterPair::new_static("$$", "$$", true),
    DelimiterPair::new_static("$", "$", false),
    DelimiterPair::new_static("\\(", "\\)", false),
    // Render AMS environments even if outside of `$$...$$`
    DelimiterPair::new_static("\\begin{equation}", "\\end{equation}", true),
    DelimiterPair::new_static("\\begin{align}", "\\end{align}", true),
    DelimiterPair::new_static("\\begin{alignat}", "\\end{alignat}", true),
    DelimiterPair::new_static("\\begin{gather}", "\\end{gather}", true),
    DelimiterPair::new_static("\\begin{CD}", "\\end{CD}", true),
    DelimiterPair::new_static("\\[", "\\]", true),
];

static DEFAULT: Lazy<Delimiters> = Lazy::new(|| {
    Delimiters::new(DEFAULT_DELIMITERS.to_vec()).expect("default delimiters are valid")
});

/// An ordered list of delimiter pairs along with the pattern that finds the next left token.
#[derive(Debug, Clone)]
pub struct Delimiters {
    pairs: Vec<DelimiterPair>,
    left_regex: Regex,
}
impl Delimiters {
    pub fn new(pairs: Vec<DelimiterPair>) -> Result<Delimiters, RenderError> {
        if pairs.is_empty() {
            return Err(RenderError::NoDelimiters);
        }

        if let Some(pair) = pairs
            .iter()
            .find(|pair| pair.left.is_empty() || pair.right.is_empty())
        {
            return Err(RenderError::EmptyDelimiter {
                left: pair.left.to_string(),
                right: pair.right.to_string(),
            });
        }

        // The regex engine prefers the earliest alternative at a given position, so list order
        // is kept
        let alternation = pairs
            .iter()
            .map(|pair| regex::escape(&pair.left))
            .collect::<Vec<String>>()
            .join("|");
        let left_regex = Regex::new(&format!("(?:{})", alternation))?;

        Ok(Delimiters { pairs, left_regex })
    }

    pub fn pairs(&self) -> &[DelimiterPair] {
        &self.pairs
    }

    /// Find the start of the next left token at or after `start`.
    pub(crate) fn find_left(&self, text: &str, start: usize) -> Option<usize> {
        self.left_regex.find_at(text, start).map(|m| m.start())
    }

    /// The first pair, in list order, whose left token begins `text`.
    pub(crate) fn pair_starting(&self, text: &str) -> Option<&DelimiterPair> {
        self.pairs.iter().find(|pair| text.starts_with(&*pair.left))
    }
}
impl Default for Delimiters {
    fn default() -> Self {
        DEFAULT.clone()
    }
}
