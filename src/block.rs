use serde::Serialize;

/// Inline spans within a paragraph or list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text { text: String },
    Bold { text: String },
    Link { label: String, url: String },
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Inline::Bold { text: text.into() }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Inline::Link {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Visible text of the span, without markup.
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text { text } | Inline::Bold { text } => text,
            Inline::Link { label, .. } => label,
        }
    }
}

/// A single list item, optionally owning a deeper list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub content: Vec<Inline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<Box<List>>,
}

/// A list (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

impl List {
    /// Number of items, counting nested lists.
    pub fn count_items(&self) -> usize {
        self.items
            .iter()
            .map(|item| 1 + item.nested.as_ref().map_or(0, |nested| nested.count_items()))
            .sum()
    }
}

/// Block-level elements of a structured message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph { content: Vec<Inline> },
    List(List),
}

/// The structured form of one text blob, in input line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Text content without markup, one line per paragraph or list item.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Paragraph { content } => lines.push(inline_text(content)),
                Block::List(list) => list_lines(list, &mut lines),
            }
        }
        lines.join("\n")
    }
}

fn inline_text(content: &[Inline]) -> String {
    content.iter().map(Inline::as_str).collect()
}

fn list_lines(list: &List, lines: &mut Vec<String>) {
    for item in &list.items {
        lines.push(inline_text(&item.content));
        if let Some(nested) = &item.nested {
            list_lines(nested, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str, nested: Option<List>) -> ListItem {
        ListItem {
            content: vec![Inline::text(text)],
            nested: nested.map(Box::new),
        }
    }

    #[test]
    fn plain_text_walks_nested_lists() {
        let inner = List {
            ordered: false,
            items: vec![item("b", None)],
        };
        let doc = Document {
            blocks: vec![
                Block::Paragraph {
                    content: vec![Inline::text("see "), Inline::link("x", "http://x")],
                },
                Block::List(List {
                    ordered: false,
                    items: vec![item("a", Some(inner)), item("c", None)],
                }),
            ],
        };
        assert_eq!(doc.plain_text(), "see x\na\nb\nc");
    }

    #[test]
    fn count_items_includes_nested() {
        let list = List {
            ordered: false,
            items: vec![
                item(
                    "a",
                    Some(List {
                        ordered: false,
                        items: vec![item("b", None), item("c", None)],
                    }),
                ),
                item("d", None),
            ],
        };
        assert_eq!(list.count_items(), 4);
    }

    #[test]
    fn serializes_with_type_tags() {
        let doc = Document {
            blocks: vec![Block::Paragraph {
                content: vec![Inline::bold("hi")],
            }],
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "blocks": [
                    {"type": "paragraph", "content": [{"type": "bold", "text": "hi"}]}
                ]
            })
        );
    }
}
