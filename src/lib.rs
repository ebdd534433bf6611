//! Finds math written between delimiters like `$...$` or `\[...\]` in the text of a document
//! tree, and replaces it with typeset math.
//!
//! ```
//! use mathscan::{
//!     dom::{Element, Node, VirtualNode},
//!     render_math_in_element,
//!     typeset::{TypesetError, TypesetOptions},
//!     RenderOptions,
//! };
//!
//! fn typeset(source: &str, _opts: &TypesetOptions<'_>) -> Result<Vec<Node>, TypesetError> {
//!     Ok(vec![Node::text(source.to_uppercase())])
//! }
//!
//! let mut root = Node::from(Element::new("p").with_text("where $x$ is"));
//! render_math_in_element(&mut root, &RenderOptions::default(), &typeset).unwrap();
//! assert_eq!(root.to_markup(), "<p>where <span>X</span> is</p>");
//! ```

pub mod config;
pub mod delimiter;
pub mod dom;
pub mod error;
pub mod render;
pub mod split;
pub mod typeset;
mod util;

pub use config::{MacroMap, RenderConfig, RenderOptions};
pub use delimiter::{DelimiterPair, Delimiters};
pub use error::RenderError;
pub use render::{render_elem, render_math_in_element, render_math_in_text};
pub use split::{split_at_delimiters, Segment};
