use crate::html::HtmlNode;

/// One classified run of inline text. Link and Image are the only kinds that
/// carry a destination URL. Spans are produced by the tokenizer and consumed
/// once by [`to_node`]; they are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

/// Map a span to its leaf element.
pub fn to_node(span: &Span) -> HtmlNode {
    match span {
        Span::Plain(text) => HtmlNode::text(text.clone()),
        Span::Bold(text) => HtmlNode::leaf("b", text.clone()),
        Span::Italic(text) => HtmlNode::leaf("i", text.clone()),
        Span::Code(text) => HtmlNode::leaf("code", text.clone()),
        Span::Link { text, url } => HtmlNode::leaf_with_attrs(
            "a",
            text.clone(),
            vec![("href".to_string(), url.clone())],
        ),
        Span::Image { alt, url } => HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), url.clone()),
                ("alt".to_string(), alt.clone()),
            ],
        ),
    }
}
