//! Splitting text into plain text and math pieces.

use crate::delimiter::Delimiters;

/// A piece of text produced by [`split_at_delimiters`].  
/// Concatenating the [`Segment::literal`] of every segment gives back the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Math {
        /// The math to typeset. The delimiters are stripped, unless they are an AMS environment
        source: &'a str,
        /// The math including its delimiters
        raw: &'a str,
        display: bool,
    },
}
impl<'a> Segment<'a> {
    pub fn is_math(&self) -> bool {
        matches!(self, Segment::Math { .. })
    }

    /// The text as it appeared in the input
    pub fn literal(&self) -> &'a str {
        match self {
            Segment::Text(text) => text,
            Segment::Math { raw, .. } => raw,
        }
    }
}

/// Find the index of `delimiter` in `text`, searching from `start`.  
/// Delimiters nested inside braces are not matched, and a backslash skips whatever character
/// follows it.
pub fn find_end_of_math(delimiter: &str, text: &str, start: usize) -> Option<usize> {
    let mut brace_level: i32 = 0;
    let mut chars = text[start..]
        .char_indices()
        .map(|(index, ch)| (start + index, ch));

    while let Some((index, ch)) = chars.next() {
        if brace_level <= 0 && text[index..].starts_with(delimiter) {
            return Some(index);
        }

        match ch {
            '\\' => {
                chars.next();
            }
            '{' => brace_level += 1,
            '}' => brace_level -= 1,
            _ => {}
        }
    }

    None
}

/// Split `text` into segments of plain text and math.  
/// An unterminated left delimiter stops the scan, and the rest of the text is kept as plain text.
/// Empty text segments are never produced.
pub fn split_at_delimiters<'a>(text: &'a str, delimiters: &Delimiters) -> Vec<Segment<'a>> {
    let mut data = Vec::new();
    let mut pos = 0;

    while let Some(index) = delimiters.find_left(text, pos) {
        if index > pos {
            data.push(Segment::Text(&text[pos..index]));
        }
        pos = index;

        let rest = &text[pos..];
        // The pattern only matches left tokens, so there is always a pair here
        let Some(delimiter) = delimiters.pair_starting(rest) else {
            break;
        };

        let Some(end) = find_end_of_math(&delimiter.right, rest, delimiter.left.len()) else {
            break;
        };

        let raw = &rest[..end + delimiter.right.len()];
        let source = if delimiter.is_ams_environment() {
            raw
        } else {
            &rest[delimiter.left.len()..end]
        };
        data.push(Segment::Math {
            source,
            raw,
            display: delimiter.display,
        });

        pos += raw.len();
    }

    if pos < text.len() {
        data.push(Segment::Text(&text[pos..]));
    }

    data
}

#[cfg(test)]
mod tests {
    use super::{find_end_of_math, split_at_delimiters, Segment};
    use crate::delimiter::{DelimiterPair, Delimiters};

    fn dollars() -> Delimiters {
        Delimiters::new(vec![DelimiterPair::new("$", "$", false)]).unwrap()
    }

    #[test]
    fn test_find_end_of_math() {
        assert_eq!(find_end_of_math("$", "$abc$", 1), Some(4));
        assert_eq!(find_end_of_math("$", "$abc", 1), None);
        assert_eq!(find_end_of_math("$", "${$}$", 1), Some(4));
        // Unbalanced closing braces still allow a match
        assert_eq!(find_end_of_math("$", "$}}$", 1), Some(3));
        assert_eq!(find_end_of_math("\\)", "\\(a\\)", 2), Some(3));
    }

    #[test]
    fn test_escape_skips_any_character() {
        // The backslash consumes the following backslash, so the `$` is a real delimiter
        assert_eq!(find_end_of_math("$", "$a\\\\$", 1), Some(4));
        // Multi-byte characters are skipped whole
        assert_eq!(find_end_of_math("$", "$\\é$", 1), Some(4));
    }

    #[test]
    fn test_no_delimiters() {
        let segments = split_at_delimiters("just some text", &dollars());
        assert_eq!(segments, vec![Segment::Text("just some text")]);

        assert!(split_at_delimiters("", &dollars()).is_empty());
    }

    #[test]
    fn test_text_around_math() {
        let segments = split_at_delimiters("a $x$ b $y$", &dollars());
        assert_eq!(
            segments,
            vec![
                Segment::Text("a "),
                Segment::Math {
                    source: "x",
                    raw: "$x$",
                    display: false
                },
                Segment::Text(" b "),
                Segment::Math {
                    source: "y",
                    raw: "$y$",
                    display: false
                },
            ]
        );
    }

    #[test]
    fn test_unterminated_after_math() {
        let segments = split_at_delimiters("$x$ costs $5", &dollars());
        assert_eq!(
            segments,
            vec![
                Segment::Math {
                    source: "x",
                    raw: "$x$",
                    display: false
                },
                Segment::Text(" costs "),
                Segment::Text("$5"),
            ]
        );
    }

    #[test]
    fn test_adjacent_math() {
        let segments = split_at_delimiters("$a$$b$", &dollars());
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(Segment::is_math));
    }
}
