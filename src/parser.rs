use crate::block::{BlockType, classify, split_blocks};
use crate::html::HtmlNode;
use crate::inline::{ParseError, tokenize};
use crate::span;

/// Parse a whole document into its element tree.
///
/// Blocks are split on blank-line boundaries, classified, built in order, and
/// wrapped in a single top-level `div`. An empty document yields a `div` with
/// no children; the non-empty-children invariant is only enforced when the
/// tree is rendered.
pub fn parse(markdown: &str) -> Result<HtmlNode, ParseError> {
    let mut children = Vec::new();
    for block in split_blocks(markdown) {
        children.push(block_to_node(block)?);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Tokenize inline text and map each span to a leaf element.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(tokenize(text)?.iter().map(span::to_node).collect())
}

fn block_to_node(block: &str) -> Result<HtmlNode, ParseError> {
    match classify(block) {
        BlockType::Paragraph => {
            let text = block.lines().collect::<Vec<_>>().join(" ");
            Ok(HtmlNode::parent("p", inline_children(&text)?))
        }
        BlockType::Heading { level } => {
            let text = block[level as usize + 1..].trim();
            Ok(HtmlNode::parent(format!("h{level}"), inline_children(text)?))
        }
        BlockType::Code => {
            // Drop the fence lines and keep the body verbatim: code never goes
            // through the inline tokenizer.
            let lines: Vec<&str> = block.lines().collect();
            let mut body = lines[1..lines.len() - 1].join("\n");
            body.push('\n');
            let code = HtmlNode::parent("code", vec![HtmlNode::text(body)]);
            Ok(HtmlNode::parent("pre", vec![code]))
        }
        BlockType::Quote => {
            let text = block
                .lines()
                .map(|line| {
                    let line = line.strip_prefix('>').unwrap_or(line);
                    line.strip_prefix(' ').unwrap_or(line)
                })
                .collect::<Vec<_>>()
                .join(" ");
            Ok(HtmlNode::parent("blockquote", inline_children(&text)?))
        }
        BlockType::UnorderedList => {
            let items = block
                .lines()
                .map(|line| list_item(&line[2..]))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(HtmlNode::parent("ul", items))
        }
        BlockType::OrderedList => {
            let items = block
                .lines()
                .map(|line| {
                    // Classification guarantees the numeric prefix.
                    let text = line.find(". ").map_or(line, |dot| &line[dot + 2..]);
                    list_item(text)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(HtmlNode::parent("ol", items))
        }
    }
}

fn list_item(text: &str) -> Result<HtmlNode, ParseError> {
    Ok(HtmlNode::parent("li", inline_children(text)?))
}
