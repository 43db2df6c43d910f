/// Structural classification of one block of raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Paragraph,
    Heading { level: u8 },
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into blocks on blank-line boundaries, trimming surrounding
/// whitespace from each and dropping blocks that end up empty.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(|block| block.trim_matches([' ', '\n']))
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a single block. The block is assumed pre-trimmed with no blank
/// line inside. Rules are checked in priority order; the first match wins.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading { level };
    }

    if block.starts_with("```\n") && block.ends_with("```") {
        return BlockType::Code;
    }

    // A block-initial marker commits the block to that kind: if a later line
    // breaks the pattern the whole block falls back to paragraph.
    if block.starts_with('>') {
        if block.lines().all(|line| line.starts_with('>')) {
            return BlockType::Quote;
        }
        return BlockType::Paragraph;
    }

    if block.starts_with("- ") {
        if block.lines().all(|line| line.starts_with("- ")) {
            return BlockType::UnorderedList;
        }
        return BlockType::Paragraph;
    }

    if block.starts_with("1. ") {
        for (i, line) in block.lines().enumerate() {
            let expected = format!("{}. ", i + 1);
            if !line.starts_with(&expected) {
                return BlockType::Paragraph;
            }
        }
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Leading `#` run of length 1..=6 followed by a space, or nothing.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block.as_bytes().get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}
