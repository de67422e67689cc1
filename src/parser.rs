use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::block::{Block, Document, List, ListItem};
use crate::inline::parse_inline;

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)([*+-]|[0-9]+\.)\s+(.*)$").expect("valid list item pattern")
});

/// How list items with differing markers are grouped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListMode {
    /// Indentation is the only nesting signal; every list is unordered.
    #[default]
    Indentation,
    /// A marker change at the same indent starts a new list, and numeric
    /// markers produce ordered lists.
    MarkerSensitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    Bullet,
    Numeric,
}

enum Line<'a> {
    Blank,
    Text(&'a str),
    Item {
        indent: usize,
        marker: MarkerKind,
        text: &'a str,
    },
}

fn classify(line: &str) -> Line<'_> {
    if let Some(caps) = LIST_ITEM.captures(line) {
        let indent = caps.get(1).map_or(0, |m| m.as_str().chars().count());
        let marker = match caps.get(2).map(|m| m.as_str()) {
            Some("*" | "-" | "+") => MarkerKind::Bullet,
            _ => MarkerKind::Numeric,
        };
        let text = caps.get(3).map_or("", |m| m.as_str());
        return Line::Item {
            indent,
            marker,
            text,
        };
    }
    if line.trim().is_empty() {
        Line::Blank
    } else {
        Line::Text(line)
    }
}

/// Structure text into paragraphs and nested lists.
pub fn structure(content: &str) -> Document {
    structure_with(content, ListMode::default())
}

/// Structure text with an explicit list grouping mode.
pub fn structure_with(content: &str, mode: ListMode) -> Document {
    let mut state = ParseState::new(mode);
    for line in content.lines() {
        state.process_line(classify(line.trim_end_matches('\r')));
    }
    state.finish()
}

struct ListBuilder {
    indent: usize,
    marker: MarkerKind,
    items: Vec<ListItem>,
}

impl ListBuilder {
    fn build(self, mode: ListMode) -> List {
        List {
            ordered: mode == ListMode::MarkerSensitive && self.marker == MarkerKind::Numeric,
            items: self.items,
        }
    }
}

struct ParseState {
    mode: ListMode,
    blocks: Vec<Block>,
    // Open lists, innermost last
    list_stack: Vec<ListBuilder>,
}

impl ParseState {
    fn new(mode: ListMode) -> Self {
        Self {
            mode,
            blocks: Vec::new(),
            list_stack: Vec::new(),
        }
    }

    fn process_line(&mut self, line: Line<'_>) {
        match line {
            Line::Item {
                indent,
                marker,
                text,
            } => {
                self.close_deeper_than(indent);

                let needs_frame = match self.list_stack.last() {
                    None => true,
                    Some(top) if indent > top.indent => true,
                    Some(top) => self.mode == ListMode::MarkerSensitive && top.marker != marker,
                };
                if needs_frame {
                    // A marker change at the same indent replaces the open frame
                    if self
                        .list_stack
                        .last()
                        .is_some_and(|top| top.indent == indent)
                    {
                        self.close_top();
                    }
                    self.list_stack.push(ListBuilder {
                        indent,
                        marker,
                        items: Vec::new(),
                    });
                }

                if let Some(top) = self.list_stack.last_mut() {
                    top.items.push(ListItem {
                        content: parse_inline(text),
                        nested: None,
                    });
                }
            }
            Line::Blank => self.close_all(),
            Line::Text(text) => {
                self.close_all();
                self.blocks.push(Block::Paragraph {
                    content: parse_inline(text),
                });
            }
        }
    }

    fn close_deeper_than(&mut self, indent: usize) {
        while self.list_stack.last().is_some_and(|top| top.indent > indent) {
            self.close_top();
        }
    }

    fn close_all(&mut self) {
        while !self.list_stack.is_empty() {
            self.close_top();
        }
    }

    /// Finalize the innermost frame into its parent's last item, or into the
    /// document when no parent is open.
    fn close_top(&mut self) {
        let Some(builder) = self.list_stack.pop() else {
            return;
        };
        let list = builder.build(self.mode);

        let Some(parent) = self.list_stack.last_mut() else {
            self.blocks.push(Block::List(list));
            return;
        };
        let Some(last_item) = parent.items.last_mut() else {
            return;
        };
        match last_item.nested.as_mut() {
            Some(existing) => existing.items.extend(list.items),
            None => last_item.nested = Some(Box::new(list)),
        }
    }

    fn finish(mut self) -> Document {
        self.close_all();
        Document {
            blocks: self.blocks,
        }
    }
}
