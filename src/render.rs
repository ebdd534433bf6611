//! Rewriting text nodes of a tree so that the math inside of them is typeset.

use tracing::{debug, trace};

use crate::{
    config::{RenderConfig, RenderOptions},
    dom::{Element, Node},
    error::RenderError,
    split::{split_at_delimiters, Segment},
    typeset::{TypesetError, TypesetOptions, Typesetter},
};

/// Render all of the math found in the text of `root`.  
/// The options are resolved before the tree is touched, so an invalid root or configuration
/// leaves it unchanged.
pub fn render_math_in_element<T: Typesetter + ?Sized>(
    root: &mut Node,
    options: &RenderOptions,
    typesetter: &T,
) -> Result<(), RenderError> {
    let Node::Element(elem) = root else {
        return Err(RenderError::InvalidRoot);
    };

    let conf = options.resolve()?;

    render_elem(elem, &conf, typesetter)
}

/// Split `text` and typeset the math in it.  
/// Returns `None` if there was no math, meaning that the text does not need replacing.
pub fn render_math_in_text<T: Typesetter + ?Sized>(
    text: &str,
    conf: &RenderConfig,
    typesetter: &T,
) -> Result<Option<Vec<Node>>, RenderError> {
    let data = split_at_delimiters(text, &conf.delimiters);
    if !data.iter().any(Segment::is_math) {
        return Ok(None);
    }

    let mut fragment = Vec::with_capacity(data.len());
    for segment in data {
        match segment {
            Segment::Text(text) => fragment.push(Node::text(text)),
            Segment::Math {
                source,
                raw,
                display,
            } => {
                let opts = TypesetOptions {
                    display_mode: display,
                    macros: &conf.macros,
                };

                match typesetter.typeset(source, &opts) {
                    Ok(children) => {
                        let mut span = Element::new("span");
                        span.children = children;
                        fragment.push(Node::Element(span));
                    }
                    Err(TypesetError::Syntax(msg)) => {
                        debug!(raw, %msg, "math failed to typeset, keeping it as text");
                        fragment.push(Node::text(raw));
                    }
                    Err(err) => return Err(RenderError::Typeset(err)),
                }
            }
        }
    }

    Ok(Some(fragment))
}

/// Render the math in the children of `elem`, descending into every element that is not ignored.
pub fn render_elem<T: Typesetter + ?Sized>(
    elem: &mut Element,
    conf: &RenderConfig,
    typesetter: &T,
) -> Result<(), RenderError> {
    let mut i = 0;
    while i < elem.children.len() {
        match &mut elem.children[i] {
            Node::Text(text) => {
                // Delimiters may be split across adjacent text nodes, so their text is handled as
                // a whole
                let mut text_concat = text.clone();
                let siblings = elem.children[i + 1..]
                    .iter()
                    .map_while(Node::as_text)
                    .inspect(|sibling| text_concat.push_str(sibling))
                    .count();

                match render_math_in_text(&text_concat, conf, typesetter)? {
                    Some(fragment) => {
                        trace!(nodes = siblings + 1, inserted = fragment.len(), "rewrote text");
                        let inserted = fragment.len();
                        elem.children.splice(i..=i + siblings, fragment);
                        i += inserted;
                    }
                    // If the concatenated text does not contain math then the siblings don't
                    None => i += siblings + 1,
                }
            }
            Node::Element(child) => {
                if conf.is_ignored(child) {
                    trace!(tag = %child.tag, "skipping ignored element");
                } else {
                    render_elem(child, conf, typesetter)?;
                }
                i += 1;
            }
            Node::Comment(_) | Node::Markup(_) => i += 1,
        }
    }

    Ok(())
}
