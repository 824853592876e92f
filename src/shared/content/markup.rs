//! Block outline of the lightweight markup used in post and review bodies.
//!
//! Only block structure is recognised. Inline emphasis, inline code and links
//! stay in the block text for the renderer to deal with.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s+").expect("fail to create a regex for numbered list items")
});

const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentBlock {
    Heading { level: u8, text: String },
    BulletItem { text: String },
    NumberedItem { text: String },
    Paragraph { text: String },
    Code {
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        code: String,
    },
}

/// Splits `content` into blocks. Blank lines only separate blocks.
///
/// A fence without a closing fence is not a code block; its opening line is
/// kept as a paragraph and the following lines are parsed normally.
pub fn parse_blocks(content: &str) -> Vec<ContentBlock> {
    let lines: Vec<&str> = content.lines().collect();
    let mut blocks = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index].trim();

        if let Some(info) = line.strip_prefix(FENCE) {
            let closing = lines[index + 1..]
                .iter()
                .position(|l| l.trim().starts_with(FENCE))
                .map(|offset| index + 1 + offset);

            if let Some(end) = closing {
                let language = Some(info.trim())
                    .filter(|lang| !lang.is_empty())
                    .map(str::to_string);

                blocks.push(ContentBlock::Code {
                    language,
                    code: lines[index + 1..end].join("\n"),
                });
                index = end + 1;
                continue;
            }
        }

        if let Some(block) = parse_line(line) {
            blocks.push(block);
        }
        index += 1;
    }

    blocks
}

fn parse_line(line: &str) -> Option<ContentBlock> {
    if line.is_empty() {
        return None;
    }

    if let Some(text) = line.strip_prefix("### ") {
        return Some(ContentBlock::Heading {
            level: 3,
            text: text.to_string(),
        });
    }

    if let Some(text) = line.strip_prefix("## ") {
        return Some(ContentBlock::Heading {
            level: 2,
            text: text.to_string(),
        });
    }

    if let Some(text) = line.strip_prefix("- ") {
        return Some(ContentBlock::BulletItem {
            text: text.to_string(),
        });
    }

    if let Some(found) = NUMBERED_ITEM.find(line) {
        return Some(ContentBlock::NumberedItem {
            text: line[found.end()..].to_string(),
        });
    }

    Some(ContentBlock::Paragraph {
        text: line.to_string(),
    })
}
