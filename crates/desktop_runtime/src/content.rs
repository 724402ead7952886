//! Structured page content and the prefix truncation behind the typewriter effect.
//!
//! Characters are Unicode scalar values. Both passes walk the tree depth-first, pre-order,
//! left to right, so the characters revealed first are always the ones that come first in
//! document order.

use serde::{Deserialize, Serialize};

/// Semantic role of a [`ContentNode::Group`]; the host maps roles to markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum StyleTag {
    Section,
    Title,
    Subtitle,
    Heading,
    Paragraph,
    List,
    ListItem,
    Link { href: String },
    Emphasis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentNode {
    /// Zero-width placeholder.
    Empty,
    Text(String),
    Group {
        style: Option<StyleTag>,
        children: Vec<ContentNode>,
    },
}

impl ContentNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Numeric leaf, revealed as its decimal rendering.
    pub fn number(value: impl std::fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    pub fn group(children: Vec<ContentNode>) -> Self {
        Self::Group {
            style: None,
            children,
        }
    }

    pub fn styled(style: StyleTag, children: Vec<ContentNode>) -> Self {
        Self::Group {
            style: Some(style),
            children,
        }
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::styled(
            StyleTag::Link { href: href.into() },
            vec![Self::text(label)],
        )
    }

    /// Total leaf characters in the tree.
    pub fn char_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Text(text) => text.chars().count(),
            Self::Group { children, .. } => children.iter().map(Self::char_count).sum(),
        }
    }

    /// Leaf text concatenated in reveal order.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text(text) => out.push_str(text),
            Self::Group { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// Returns `content` truncated so that at most `budget` leaf characters remain.
///
/// At or above the tree's total the input comes back unchanged, including zero-width nodes
/// that trail the last character.
pub fn reveal(content: &ContentNode, budget: usize) -> ContentNode {
    if budget >= content.char_count() {
        return content.clone();
    }
    reveal_prefix(content, budget)
}

/// Truncates `content` to its first `budget` characters without counting the whole tree.
///
/// Only the revealed prefix is walked. Callers that already know the tree's total should use
/// this below the total and the original tree at or above it, as [`reveal`] does.
pub fn reveal_prefix(content: &ContentNode, budget: usize) -> ContentNode {
    let mut remaining = budget;
    truncate(content, &mut remaining).unwrap_or(ContentNode::Empty)
}

/// Truncating walk used by [`reveal_prefix`]; `None` means the node is omitted entirely.
fn truncate(node: &ContentNode, remaining: &mut usize) -> Option<ContentNode> {
    if *remaining == 0 {
        return None;
    }
    match node {
        ContentNode::Empty => Some(ContentNode::Empty),
        ContentNode::Text(text) => Some(ContentNode::Text(take_chars(text, remaining))),
        ContentNode::Group { style, children } => {
            let mut kept = Vec::new();
            for child in children {
                if *remaining == 0 {
                    break;
                }
                if let Some(child) = truncate(child, remaining) {
                    kept.push(child);
                }
            }
            Some(ContentNode::Group {
                style: style.clone(),
                children: kept,
            })
        }
    }
}

fn take_chars(text: &str, remaining: &mut usize) -> String {
    match text.char_indices().nth(*remaining) {
        Some((byte_end, _)) => {
            *remaining = 0;
            text[..byte_end].to_string()
        }
        None => {
            *remaining -= text.chars().count();
            text.to_string()
        }
    }
}
