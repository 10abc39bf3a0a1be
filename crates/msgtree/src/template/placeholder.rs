//! Placeholder parser using winnow.
//!
//! Recognizes `{identifier}` where identifier matches `[A-Za-z0-9_]+`.
//! Anything else, including a `{` that does not open a placeholder, is
//! literal text. There is no escape syntax.

use std::collections::BTreeSet;

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

use crate::types::Params;

/// A piece of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),

    /// The name inside a `{name}` placeholder.
    Placeholder(&'a str),
}

/// Split message text into literal and placeholder segments.
///
/// Placeholders are matched left to right without overlap, so `{{name}}`
/// yields a literal `{`, the placeholder `name`, and a literal `}`.
pub fn parse_segments(text: &str) -> Vec<Segment<'_>> {
    let mut remaining = text;
    match segments(&mut remaining) {
        Ok(parsed) if remaining.is_empty() => parsed,
        // Unreachable: every character matches some alternative.
        _ => vec![Segment::Literal(text)],
    }
}

/// Replace every placeholder that has a non-null value in `params`.
///
/// Placeholders without a value are kept verbatim. Substituted values are
/// not scanned again.
pub fn substitute(text: &str, params: Option<&Params>) -> String {
    if !text.contains('{') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for segment in parse_segments(text) {
        match segment {
            Segment::Literal(literal) => out.push_str(literal),
            Segment::Placeholder(name) => {
                match params
                    .and_then(|params| params.get(name))
                    .filter(|value| !value.is_null())
                {
                    Some(value) => out.push_str(&value.to_string()),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
            }
        }
    }
    out
}

/// The distinct placeholder names used in `text`.
pub fn placeholder_names(text: &str) -> BTreeSet<&str> {
    parse_segments(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

fn segments<'i>(input: &mut &'i str) -> ModalResult<Vec<Segment<'i>>> {
    repeat(0.., segment).parse_next(input)
}

fn segment<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    alt((placeholder, literal_run, lone_brace)).parse_next(input)
}

/// Parse a placeholder: {identifier}
fn placeholder<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    delimited('{', take_while(1.., is_word_char), '}')
        .map(Segment::Placeholder)
        .parse_next(input)
}

/// Parse a run of text up to the next `{`.
fn literal_run<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    take_till(1.., '{').map(Segment::Literal).parse_next(input)
}

/// Parse a `{` that does not open a placeholder.
fn lone_brace<'i>(input: &mut &'i str) -> ModalResult<Segment<'i>> {
    "{".map(Segment::Literal).parse_next(input)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn plain_text_is_one_literal() {
        assert_eq!(parse_segments("Hello"), vec![Segment::Literal("Hello")]);
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(parse_segments("").is_empty());
    }

    #[test]
    fn placeholder_between_literals() {
        assert_eq!(
            parse_segments("Welcome, {name}!"),
            vec![
                Segment::Literal("Welcome, "),
                Segment::Placeholder("name"),
                Segment::Literal("!"),
            ]
        );
    }

    #[test]
    fn doubled_braces_wrap_a_placeholder() {
        assert_eq!(
            parse_segments("{{name}}"),
            vec![
                Segment::Literal("{"),
                Segment::Placeholder("name"),
                Segment::Literal("}"),
            ]
        );
    }

    #[test]
    fn non_word_content_is_literal() {
        assert_eq!(
            parse_segments("{a b}"),
            vec![Segment::Literal("{"), Segment::Literal("a b}")]
        );
        assert_eq!(
            parse_segments("{}"),
            vec![Segment::Literal("{"), Segment::Literal("}")]
        );
    }

    #[test]
    fn non_ascii_identifier_is_literal() {
        assert_eq!(
            parse_segments("{名前}"),
            vec![Segment::Literal("{"), Segment::Literal("名前}")]
        );
    }

    #[test]
    fn trailing_open_brace() {
        assert_eq!(
            parse_segments("50% {"),
            vec![Segment::Literal("50% "), Segment::Literal("{")]
        );
    }

    #[test]
    fn substitute_replaces_known_params() {
        let p = params! { "name" => "dragonish", "n" => 3 };
        assert_eq!(
            substitute("{name} has {n} items", Some(&p)),
            "dragonish has 3 items"
        );
    }

    #[test]
    fn substitute_keeps_unknown_and_null_params() {
        let p = params! { "gone" => None::<String> };
        assert_eq!(
            substitute("{gone} and {absent}", Some(&p)),
            "{gone} and {absent}"
        );
        assert_eq!(substitute("{gone}", None), "{gone}");
    }

    #[test]
    fn substitute_does_not_rescan_values() {
        let p = params! { "a" => "{b}", "b" => "x" };
        assert_eq!(substitute("{a}", Some(&p)), "{b}");
    }

    #[test]
    fn substitute_repeated_placeholder() {
        let p = params! { "x" => 1 };
        assert_eq!(substitute("{x}{x}{x}", Some(&p)), "111");
    }

    #[test]
    fn placeholder_names_are_distinct() {
        let names: Vec<&str> = placeholder_names("{b} {a} {b} {c d}").into_iter().collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
