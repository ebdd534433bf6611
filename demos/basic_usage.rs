//! Basic usage of mathscan: render the math in a small document.
//!
//! Run with: `cargo run --example basic_usage`

use mathscan::{
    dom::{Element, Node, VirtualNode},
    render_math_in_element,
    typeset::{TypesetError, TypesetOptions},
    DelimiterPair, RenderOptions,
};

fn main() {
    println!("=== mathscan Usage Examples ===\n");

    example_custom_typesetter();

    #[cfg(feature = "mathml")]
    example_mathml();
}

fn document() -> Node {
    Element::new("article")
        .with_child(Element::new("h1").with_text("Circles"))
        .with_child(
            Element::new("p")
                .with_text("The area of a circle is $\\pi r^2$, and its circumference is ")
                .with_text("\\(2 \\pi r\\)."),
        )
        .with_child(Element::new("p").with_text("$$\\frac{C}{d} = \\pi$$"))
        .with_child(Element::new("pre").with_text("$not rendered$"))
        .with_child(Element::new("p").with_text("A broken formula stays as text: $\\frac{1}$"))
        .into()
}

/// Any function with the right signature can typeset
fn bracket(source: &str, opts: &TypesetOptions<'_>) -> Result<Vec<Node>, TypesetError> {
    if source.contains("\\frac{1}") && !source.contains("}{") {
        return Err(TypesetError::Syntax("missing argument".to_string()));
    }

    let text = if opts.display_mode {
        format!("[[ {} ]]", source)
    } else {
        format!("[{}]", source)
    };
    Ok(vec![Node::text(text)])
}

fn example_custom_typesetter() {
    println!("--- Example 1: Custom typesetter ---");

    let mut doc = document();
    match render_math_in_element(&mut doc, &RenderOptions::default(), &bracket) {
        Ok(()) => println!("{}\n", doc.to_markup()),
        Err(err) => println!("Error: {}\n", err),
    }

    let options = RenderOptions::default()
        .with_delimiters(vec![DelimiterPair::new("@@", "@@", false)])
        .with_ignored_classes(["verbatim"]);
    let mut doc: Node = Element::new("p")
        .with_text("Custom @@x@@ delimiters, $y$ is left alone")
        .into();
    match render_math_in_element(&mut doc, &options, &bracket) {
        Ok(()) => println!("{}\n", doc.to_markup()),
        Err(err) => println!("Error: {}\n", err),
    }
}

#[cfg(feature = "mathml")]
fn example_mathml() {
    use mathscan::typeset::MathmlTypesetter;

    println!("--- Example 2: MathML ---");

    let mut doc = document();
    match render_math_in_element(&mut doc, &RenderOptions::default(), &MathmlTypesetter) {
        Ok(()) => println!("{}\n", doc.to_markup()),
        Err(err) => println!("Error: {}\n", err),
    }
}
