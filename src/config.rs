use std::collections::{HashMap, HashSet};

use crate::{
    delimiter::{DelimiterPair, Delimiters, DEFAULT_DELIMITERS},
    dom::Element,
    error::RenderError,
};

/// Macro definitions handed to the typesetter, keyed by control sequence (ex: `\RR`)
pub type MacroMap = HashMap<String, String>;

/// Elements with these tags are not looked into when no ignored tags are configured.
pub const DEFAULT_IGNORED_TAGS: [&str; 7] = [
    "script", "noscript", "style", "textarea", "pre", "code", "option",
];

/// Options given by the caller of [`crate::render_math_in_element`].  
/// Every field that is `None` falls back to its default when resolved.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RenderOptions {
    /// Pairs are tried in order, so longer left tokens should come before their prefixes.  
    /// Defaults to [`DEFAULT_DELIMITERS`]
    pub delimiters: Option<Vec<DelimiterPair>>,
    /// Tag names, compared case-insensitively. Defaults to [`DEFAULT_IGNORED_TAGS`]
    pub ignored_tags: Option<Vec<String>>,
    /// Defaults to none
    pub ignored_classes: Option<Vec<String>>,
    pub macros: Option<MacroMap>,
}
impl RenderOptions {
    pub fn with_delimiters(mut self, delimiters: Vec<DelimiterPair>) -> RenderOptions {
        self.delimiters = Some(delimiters);
        self
    }

    pub fn with_ignored_tags(
        mut self,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> RenderOptions {
        self.ignored_tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_ignored_classes(
        mut self,
        classes: impl IntoIterator<Item = impl Into<String>>,
    ) -> RenderOptions {
        self.ignored_classes = Some(classes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_macro(mut self, name: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.macros
            .get_or_insert_with(MacroMap::new)
            .insert(name.into(), replacement.into());
        self
    }

    /// Fill in every unset option with its default.
    pub fn resolve(&self) -> Result<RenderConfig, RenderError> {
        let delimiters = match &self.delimiters {
            Some(delimiters) => Delimiters::new(delimiters.clone())?,
            None => Delimiters::default(),
        };

        let ignored_tags: HashSet<String> = match &self.ignored_tags {
            Some(tags) => tags.iter().map(|tag| tag.to_ascii_lowercase()).collect(),
            None => DEFAULT_IGNORED_TAGS.iter().map(|tag| tag.to_string()).collect(),
        };

        let ignored_classes: HashSet<String> = self
            .ignored_classes
            .as_ref()
            .map(|classes| classes.iter().cloned().collect())
            .unwrap_or_default();

        Ok(RenderConfig {
            delimiters,
            ignored_tags,
            ignored_classes,
            macros: self.macros.clone().unwrap_or_default(),
        })
    }
}

/// The configuration used for one render, built from [`RenderOptions`].  
/// It is only read while rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub delimiters: Delimiters,
    /// Lowercased
    pub ignored_tags: HashSet<String>,
    pub ignored_classes: HashSet<String>,
    pub macros: MacroMap,
}
impl RenderConfig {
    pub fn from_options(options: &RenderOptions) -> Result<RenderConfig, RenderError> {
        options.resolve()
    }

    /// Whether the element and everything inside of it should be left alone
    pub fn is_ignored(&self, elem: &Element) -> bool {
        self.ignored_tags.contains(&elem.tag.to_ascii_lowercase())
            || elem
                .classes
                .iter()
                .any(|class| self.ignored_classes.contains(class))
    }
}
impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            delimiters: Delimiters::default(),
            ignored_tags: DEFAULT_IGNORED_TAGS.iter().map(|tag| tag.to_string()).collect(),
            ignored_classes: HashSet::new(),
            macros: MacroMap::new(),
        }
    }
}
