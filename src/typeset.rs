//! The boundary to the engine that turns math source into markup.

use std::error::Error;

use thiserror::Error;

use crate::{config::MacroMap, dom::Node};

/// Options passed along with each piece of math.
#[derive(Debug, Clone, Copy)]
pub struct TypesetOptions<'a> {
    /// Set from the delimiter that surrounded the math
    pub display_mode: bool,
    pub macros: &'a MacroMap,
}

#[derive(Debug, Error)]
pub enum TypesetError {
    /// The math could not be parsed. The caller shows the original text instead.
    #[error("math syntax error: {0}")]
    Syntax(String),
    #[error(transparent)]
    Fatal(Box<dyn Error + Send + Sync>),
}
impl TypesetError {
    pub fn fatal(err: impl Into<Box<dyn Error + Send + Sync>>) -> TypesetError {
        TypesetError::Fatal(err.into())
    }
}

/// Something which can render math source.  
/// The returned nodes are placed inside of a `span` element.
pub trait Typesetter {
    fn typeset(&self, source: &str, opts: &TypesetOptions<'_>) -> Result<Vec<Node>, TypesetError>;
}
impl<F> Typesetter for F
where
    F: Fn(&str, &TypesetOptions<'_>) -> Result<Vec<Node>, TypesetError>,
{
    fn typeset(&self, source: &str, opts: &TypesetOptions<'_>) -> Result<Vec<Node>, TypesetError> {
        self(source, opts)
    }
}

#[cfg(feature = "mathml")]
pub use mathml::MathmlTypesetter;

#[cfg(feature = "mathml")]
mod mathml {
    use std::borrow::Cow;

    use latex2mathml::{latex_to_mathml, DisplayStyle};
    use once_cell::sync::Lazy;
    use regex::{Captures, Regex};

    use super::{TypesetError, TypesetOptions, Typesetter};
    use crate::{config::MacroMap, dom::Node};

    static CONTROL_SEQUENCE_REGEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\\(?:[a-zA-Z@]+|.)").unwrap());

    /// Typesets math into MathML.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct MathmlTypesetter;
    impl MathmlTypesetter {
        pub fn new() -> MathmlTypesetter {
            MathmlTypesetter
        }
    }
    impl Typesetter for MathmlTypesetter {
        fn typeset(
            &self,
            source: &str,
            opts: &TypesetOptions<'_>,
        ) -> Result<Vec<Node>, TypesetError> {
            let style = if opts.display_mode {
                DisplayStyle::Block
            } else {
                DisplayStyle::Inline
            };

            let source = expand_macros(source, opts.macros);
            let mathml = latex_to_mathml(&source, style)
                .map_err(|err| TypesetError::Syntax(err.to_string()))?;

            Ok(vec![Node::Markup(mathml)])
        }
    }

    /// Replace each control sequence that has an entry in `macros` with its replacement.  
    /// Replacements are not themselves expanded.
    pub(crate) fn expand_macros<'a>(source: &'a str, macros: &MacroMap) -> Cow<'a, str> {
        if macros.is_empty() {
            return Cow::Borrowed(source);
        }

        CONTROL_SEQUENCE_REGEX.replace_all(source, |caps: &Captures| {
            let name = &caps[0];
            match macros.get(name) {
                Some(replacement) => replacement.clone(),
                None => name.to_string(),
            }
        })
    }

    #[cfg(test)]
    mod tests {
        use super::{expand_macros, MathmlTypesetter};
        use crate::{
            config::MacroMap,
            dom::Node,
            typeset::{TypesetError, TypesetOptions, Typesetter},
        };

        #[test]
        fn test_expand_macros() {
            let mut macros = MacroMap::new();
            macros.insert("\\RR".to_string(), "\\mathbb{R}".to_string());

            assert_eq!(expand_macros("x \\in \\RR", &macros), "x \\in \\mathbb{R}");
            // Only whole control sequence names are replaced
            assert_eq!(expand_macros("\\RRR", &macros), "\\RRR");
            assert_eq!(expand_macros("\\RR", &MacroMap::new()), "\\RR");
        }

        #[test]
        fn test_typeset() {
            let macros = MacroMap::new();
            let opts = TypesetOptions {
                display_mode: true,
                macros: &macros,
            };

            let nodes = MathmlTypesetter.typeset("x^2", &opts).unwrap();
            assert_eq!(nodes.len(), 1);
            let Node::Markup(markup) = &nodes[0] else {
                panic!("expected markup, got {:?}", nodes[0]);
            };
            assert!(markup.contains("<math"));
            assert!(markup.contains("block"));

            assert!(matches!(
                MathmlTypesetter.typeset("\\begin{nosuchenv}x\\end{nosuchenv}", &opts),
                Err(TypesetError::Syntax(_))
            ));
        }
    }
}
