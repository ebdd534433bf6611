//! A small document tree that math is rendered into.

use std::collections::HashMap;

use crate::util;

pub type ClassList = Vec<String>;

pub type Attributes = HashMap<String, String>;

/// Returns the value that should go in `class="{}"`
pub(crate) fn class_attr(classes: &ClassList) -> Option<String> {
    let classes = classes
        .iter()
        .filter(|c| !c.is_empty())
        .map(|class| util::escape(class.as_str()))
        .collect::<Vec<_>>();

    if classes.is_empty() {
        None
    } else {
        Some(classes.join(" "))
    }
}

pub trait VirtualNode {
    fn to_markup(&self) -> String;
}
impl<T: VirtualNode + ?Sized> VirtualNode for Box<T> {
    fn to_markup(&self) -> String {
        (**self).to_markup()
    }
}
impl<T: VirtualNode> VirtualNode for [T] {
    fn to_markup(&self) -> String {
        self.iter().map(VirtualNode::to_markup).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
    Comment(String),
    /// Markup that was already rendered, such as the output of a typesetter.  
    /// It is emitted as-is and never looked into.
    Markup(String),
}
impl Node {
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(elem) => Some(elem),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(elem) => Some(elem),
            _ => None,
        }
    }

    /// The concatenated text of this node and its descendants.  
    /// Comments and pre-rendered markup contribute nothing.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text_content(&mut out);
        out
    }

    fn push_text_content(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(elem) => {
                for child in &elem.children {
                    child.push_text_content(out);
                }
            }
            Node::Comment(_) | Node::Markup(_) => {}
        }
    }
}
impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(elem)
    }
}
impl VirtualNode for Node {
    fn to_markup(&self) -> String {
        match self {
            Node::Text(text) => util::escape(text).into_owned(),
            Node::Element(elem) => elem.to_markup(),
            Node::Comment(comment) => format!("<!--{}-->", comment),
            Node::Markup(markup) => markup.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// The tag name, as it was given
    pub tag: String,
    pub classes: ClassList,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}
impl Element {
    pub fn new(tag: impl Into<String>) -> Element {
        Element {
            tag: tag.into(),
            ..Element::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Element {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Element {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Element {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Element {
        self.with_child(Node::Text(text.into()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|x| x == class)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}
impl VirtualNode for Element {
    fn to_markup(&self) -> String {
        let mut markup = format!("<{}", self.tag);

        if let Some(classes) = class_attr(&self.classes) {
            markup.push_str(&format!(" class=\"{}\"", classes));
        }

        // Sorted so that output does not depend on hashing
        let mut attributes = self.attributes.iter().collect::<Vec<_>>();
        attributes.sort();
        for (name, value) in attributes {
            markup.push_str(&format!(" {}=\"{}\"", name, util::escape(value)));
        }

        markup.push('>');
        markup.push_str(&self.children.to_markup());
        markup.push_str(&format!("</{}>", self.tag));

        markup
    }
}
