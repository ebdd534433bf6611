use thiserror::Error;

use crate::typeset::TypesetError;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The root handed to the entry point was not an element
    #[error("no element provided to render")]
    InvalidRoot,
    #[error("at least one delimiter pair is required")]
    NoDelimiters,
    /// An empty token would match at every position
    #[error("delimiter pair has an empty token (left: {left:?}, right: {right:?})")]
    EmptyDelimiter { left: String, right: String },
    #[error("failed to build delimiter pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// A typesetting failure that is not a syntax error
    #[error("typesetting failed: {0}")]
    Typeset(#[source] TypesetError),
}
