use mathscan::{split_at_delimiters, DelimiterPair, Delimiters, Segment};

fn delims(pairs: &[(&'static str, &'static str, bool)]) -> Delimiters {
    Delimiters::new(
        pairs
            .iter()
            .map(|&(left, right, display)| DelimiterPair::new(left, right, display))
            .collect(),
    )
    .unwrap()
}

// Helper to check that the segments put back together give the input
fn assert_reconstructs(text: &str, delimiters: &Delimiters) {
    let segments = split_at_delimiters(text, delimiters);
    let joined = segments.iter().map(Segment::literal).collect::<String>();
    assert_eq!(joined, text, "segments {:?} do not reconstruct input", segments);
    assert!(
        segments.iter().all(|seg| !seg.literal().is_empty()),
        "empty segment in {:?}",
        segments
    );
}

fn math(source: &str, raw: &str, display: bool) -> (String, String, bool) {
    (source.to_string(), raw.to_string(), display)
}

fn only_math(segments: &[Segment<'_>]) -> Vec<(String, String, bool)> {
    segments
        .iter()
        .filter_map(|seg| match *seg {
            Segment::Math {
                source,
                raw,
                display,
            } => Some(math(source, raw, display)),
            Segment::Text(_) => None,
        })
        .collect()
}

#[test]
fn reconstructs_input() {
    let defaults = Delimiters::default();
    for text in [
        "",
        "plain text",
        "a $x$ b",
        "$$x$$ then \\(y\\) then \\[z\\]",
        "unterminated $x and more",
        "$a{$}b$ tail",
        "\\begin{align}a&=b\\end{align} done",
        "price: $5, or $$6",
        "héllo $ü$ wörld",
        "\\\\(not math",
    ] {
        assert_reconstructs(text, &defaults);
    }
}

#[test]
fn no_delimiters_is_single_text() {
    let segments = split_at_delimiters("nothing to see", &Delimiters::default());
    assert_eq!(segments, vec![Segment::Text("nothing to see")]);
}

#[test]
fn double_dollar_wins_over_single() {
    let delimiters = delims(&[("$$", "$$", true), ("$", "$", false)]);
    let segments = split_at_delimiters("$$x$$", &delimiters);
    assert_eq!(
        segments,
        vec![Segment::Math {
            source: "x",
            raw: "$$x$$",
            display: true
        }]
    );
}

#[test]
fn list_order_decides_ties() {
    // With `$` listed first, `$$` is read as an empty inline formula
    let delimiters = delims(&[("$", "$", false), ("$$", "$$", true)]);
    let segments = split_at_delimiters("$$x$$", &delimiters);
    assert_eq!(
        only_math(&segments),
        vec![math("", "$$", false), math("", "$$", false)]
    );
    assert_eq!(segments[1], Segment::Text("x"));
}

#[test]
fn braces_hide_delimiters() {
    let delimiters = delims(&[("$", "$", false)]);
    let segments = split_at_delimiters("$a{$}b$", &delimiters);
    assert_eq!(only_math(&segments), vec![math("a{$}b", "$a{$}b$", false)]);
    assert_eq!(segments.len(), 1);
}

#[test]
fn nested_braces() {
    let delimiters = delims(&[("$", "$", false)]);
    let segments = split_at_delimiters("$\\frac{a}{b_{$}}$ x", &delimiters);
    assert_eq!(
        only_math(&segments),
        vec![math("\\frac{a}{b_{$}}", "$\\frac{a}{b_{$}}$", false)]
    );
}

#[test]
fn escaped_delimiter() {
    let delimiters = delims(&[("$", "$", false)]);
    let segments = split_at_delimiters("$a\\$b$", &delimiters);
    assert_eq!(only_math(&segments), vec![math("a\\$b", "$a\\$b$", false)]);
}

#[test]
fn escaped_brace_is_not_counted() {
    let delimiters = delims(&[("$", "$", false)]);
    let segments = split_at_delimiters("$\\{x$ y", &delimiters);
    assert_eq!(only_math(&segments), vec![math("\\{x", "$\\{x$", false)]);
    assert_eq!(segments[1], Segment::Text(" y"));
}

#[test]
fn unterminated_is_text() {
    let delimiters = delims(&[("$", "$", false)]);
    assert_eq!(
        split_at_delimiters("$abc", &delimiters),
        vec![Segment::Text("$abc")]
    );
}

#[test]
fn unterminated_stops_scan() {
    // The `{` opened by the first `$` hides every later delimiter
    let delimiters = delims(&[("$", "$", false)]);
    let segments = split_at_delimiters("a ${ $b$", &delimiters);
    assert_eq!(
        segments,
        vec![Segment::Text("a "), Segment::Text("${ $b$")]
    );
}

#[test]
fn ams_environment_keeps_markers() {
    let text = "\\begin{equation}x=1\\end{equation}";
    let segments = split_at_delimiters(text, &Delimiters::default());
    assert_eq!(
        segments,
        vec![Segment::Math {
            source: text,
            raw: text,
            display: true
        }]
    );
}

#[test]
fn default_delimiters() {
    let segments = split_at_delimiters(
        "inline \\(a\\), $b$, display \\[c\\] and $$d$$",
        &Delimiters::default(),
    );
    assert_eq!(
        only_math(&segments),
        vec![
            math("a", "\\(a\\)", false),
            math("b", "$b$", false),
            math("c", "\\[c\\]", true),
            math("d", "$$d$$", true),
        ]
    );
}

#[test]
fn multi_character_right_token() {
    let delimiters = delims(&[("\\(", "\\)", false)]);
    let segments = split_at_delimiters("\\(f(x)\\)", &delimiters);
    assert_eq!(only_math(&segments), vec![math("f(x)", "\\(f(x)\\)", false)]);
}
