use thiserror::Error;

/// Structural violations of the element tree, detected at render time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("parent node has an empty tag")]
    MissingTag,
    #[error("parent node <{0}> has no children")]
    EmptyChildren(String),
}

/// A node in the HTML element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A childless node holding literal text, optionally wrapped in a tag.
    /// With no tag the value renders as raw text.
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Vec<(String, String)>,
    },
    /// A composite node rendering as its tag wrapping its children's renders,
    /// in order. Children are owned; the tree is built bottom-up and never
    /// mutated after attachment.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// A raw-text leaf with no surrounding tag.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        }
    }

    /// Serialize the tree to an HTML string.
    ///
    /// Fails if a parent has an empty tag or no children; both invariants are
    /// checked here rather than at construction so trees can be assembled
    /// incrementally and validated once.
    pub fn render(&self) -> Result<String, RenderError> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => match tag {
                None => Ok(value.clone()),
                Some(tag) => Ok(format!(
                    "<{tag}{attrs}>{value}</{tag}>",
                    attrs = render_attrs(attrs)
                )),
            },
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if tag.is_empty() {
                    return Err(RenderError::MissingTag);
                }
                if children.is_empty() {
                    return Err(RenderError::EmptyChildren(tag.clone()));
                }

                let mut out = format!("<{tag}{}>", render_attrs(attrs));
                for child in children {
                    out.push_str(&child.render()?);
                }
                out.push_str(&format!("</{tag}>"));
                Ok(out)
            }
        }
    }
}

/// Render attributes as ` key="value"` pairs in insertion order.
fn render_attrs(attrs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in attrs {
        out.push_str(&format!(" {key}=\"{value}\""));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_with_tag() {
        let node = HtmlNode::leaf("p", "Hello, world!");
        assert_eq!(node.render().unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn leaf_without_tag_is_raw_text() {
        let node = HtmlNode::text("just text");
        assert_eq!(node.render().unwrap(), "just text");
    }

    #[test]
    fn leaf_with_attrs() {
        let node = HtmlNode::leaf_with_attrs(
            "a",
            "Click",
            vec![("href".to_string(), "https://example.com".to_string())],
        );
        assert_eq!(
            node.render().unwrap(),
            "<a href=\"https://example.com\">Click</a>"
        );
    }

    #[test]
    fn attrs_render_in_insertion_order() {
        let node = HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), "x.png".to_string()),
                ("alt".to_string(), "an image".to_string()),
            ],
        );
        assert_eq!(node.render().unwrap(), "<img src=\"x.png\" alt=\"an image\"></img>");
    }

    #[test]
    fn parent_with_children() {
        let node = HtmlNode::parent("div", vec![HtmlNode::leaf("span", "child")]);
        assert_eq!(node.render().unwrap(), "<div><span>child</span></div>");
    }

    #[test]
    fn parent_with_grandchildren() {
        let node = HtmlNode::parent(
            "div",
            vec![HtmlNode::parent("span", vec![HtmlNode::leaf("b", "grandchild")])],
        );
        assert_eq!(
            node.render().unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn parent_mixed_children() {
        let node = HtmlNode::parent(
            "p",
            vec![
                HtmlNode::text("first"),
                HtmlNode::leaf("i", "second"),
                HtmlNode::text("third"),
            ],
        );
        assert_eq!(node.render().unwrap(), "<p>first<i>second</i>third</p>");
    }

    #[test]
    fn parent_without_children_fails() {
        let node = HtmlNode::parent("div", vec![]);
        assert_eq!(
            node.render(),
            Err(RenderError::EmptyChildren("div".to_string()))
        );
    }

    #[test]
    fn parent_without_tag_fails() {
        let node = HtmlNode::parent("", vec![HtmlNode::leaf("span", "child")]);
        assert_eq!(node.render(), Err(RenderError::MissingTag));
    }

    #[test]
    fn render_is_deterministic() {
        let node = HtmlNode::parent(
            "div",
            vec![HtmlNode::leaf_with_attrs(
                "p",
                "text",
                vec![("class".to_string(), "cls".to_string())],
            )],
        );
        assert_eq!(node.render().unwrap(), node.render().unwrap());
        assert_eq!(node.render().unwrap(), "<div><p class=\"cls\">text</p></div>");
    }
}
