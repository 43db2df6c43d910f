use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unmatched `{0}` delimiter")]
    UnbalancedDelimiter(&'static str),
}

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Tokenize a run of inline text into spans.
///
/// A fixed pipeline of passes, each rewriting only the spans still classified
/// as plain: `**` bold, `_` italic, backtick code, then image extraction, then
/// link extraction. Images go before links because a link pattern is a strict
/// substring of an image pattern; delimiters go before brackets so bracket
/// contents are never re-split once classified.
pub fn tokenize(text: &str) -> Result<Vec<Span>, ParseError> {
    let mut spans = vec![Span::Plain(text.to_string())];
    spans = split_delimiter(spans, "**", Span::Bold)?;
    spans = split_delimiter(spans, "_", Span::Italic)?;
    spans = split_delimiter(spans, "`", Span::Code)?;
    spans = split_images(spans);
    spans = split_links(spans);
    Ok(spans)
}

/// Split every plain span on `delimiter`, alternating plain/`make` across the
/// parts. An even part count means one side of the delimiter is left open.
fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    make: fn(String) -> Span,
) -> Result<Vec<Span>, ParseError> {
    let mut out = Vec::new();

    for span in spans {
        let Span::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnbalancedDelimiter(delimiter));
        }

        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Span::Plain(part.to_string()));
            } else {
                out.push(make(part.to_string()));
            }
        }
    }

    Ok(out)
}

fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_pattern(spans, &IMAGE_RE, false, |alt, url| Span::Image { alt, url })
}

fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_pattern(spans, &LINK_RE, true, |text, url| Span::Link { text, url })
}

/// Split every plain span on occurrences of a `[..](..)` pattern, emitting the
/// surrounding literal text as plain spans. With `skip_after_bang` a match
/// directly preceded by `!` is left alone, so image syntax is never
/// half-matched as a link.
fn split_pattern(
    spans: Vec<Span>,
    re: &Regex,
    skip_after_bang: bool,
    make: fn(String, String) -> Span,
) -> Vec<Span> {
    let mut out = Vec::new();

    for span in spans {
        let Span::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let mut last = 0;
        for caps in re.captures_iter(&text) {
            let m = caps.get(0).expect("whole-pattern group");
            if skip_after_bang && m.start() > 0 && text.as_bytes()[m.start() - 1] == b'!' {
                continue;
            }

            if m.start() > last {
                out.push(Span::Plain(text[last..m.start()].to_string()));
            }
            out.push(make(caps[1].to_string(), caps[2].to_string()));
            last = m.end();
        }

        if last == 0 {
            out.push(Span::Plain(text));
        } else if last < text.len() {
            out.push(Span::Plain(text[last..].to_string()));
        }
    }

    out
}
