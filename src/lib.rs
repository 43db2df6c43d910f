mod block;
mod config;
mod html;
mod inline;
mod parser;
mod span;
pub mod site;

pub use block::{BlockType, classify, split_blocks};
pub use config::Config;
pub use html::{HtmlNode, RenderError};
pub use inline::{ParseError, tokenize};
pub use site::SiteError;
pub use span::Span;

/// Parse a markdown document into its element tree.
pub fn parse(markdown: &str) -> Result<HtmlNode, ParseError> {
    parser::parse(markdown)
}

/// Convert a markdown document straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, SiteError> {
    Ok(parse(markdown)?.render()?)
}
