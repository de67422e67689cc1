use crate::block::{Block, Document, Inline, List};

/// Lists with at most this many items (nested included) are kept on one page.
const UNBREAKABLE_LIST_ITEMS: usize = 5;

/// Convert a document to Typst markup
pub fn render_typst(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        emit_block(block, &mut out);
    }
    out
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Paragraph { content } => {
            inlines_to_typst(content, out);
            out.push('\n');
            out.push('\n');
        }
        Block::List(list) => {
            if list.count_items() <= UNBREAKABLE_LIST_ITEMS {
                out.push_str("#block(breakable: false)[\n");
                list_to_typst(list, 0, out);
                out.push_str("]\n\n");
            } else {
                list_to_typst(list, 0, out);
                out.push('\n');
            }
        }
    }
}

fn inlines_to_typst(spans: &[Inline], out: &mut String) {
    for span in spans {
        match span {
            Inline::Text { text } => escape_markup(text, out),
            Inline::Bold { text } => {
                out.push('*');
                escape_markup(text, out);
                out.push('*');
            }
            Inline::Link { label, url } => {
                out.push_str("#link(\"");
                for ch in url.chars() {
                    if matches!(ch, '"' | '\\') {
                        out.push('\\');
                    }
                    out.push(ch);
                }
                out.push_str("\")[");
                escape_markup(label, out);
                out.push(']');
            }
        }
    }
}

/// Escape everything Typst would read as markup, including comment
/// openers (`//`, `/*`), line-start syntax (`=`, `-`, `+`, `/`) and text
/// shorthands (`~`, `--`, `...`).
fn escape_markup(text: &str, out: &mut String) {
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '/' | '~' | '='
            | '-' | '+' => {
                out.push('\\');
                out.push(ch);
            }
            '.' if chars.peek() == Some(&'.') => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}

fn list_to_typst(list: &List, depth: usize, out: &mut String) {
    let prefix = if list.ordered { "+" } else { "-" };
    let indent = "  ".repeat(depth);

    for item in &list.items {
        out.push_str(&indent);
        out.push_str(prefix);
        out.push(' ');
        inlines_to_typst(&item.content, out);
        out.push('\n');

        if let Some(nested) = &item.nested {
            list_to_typst(nested, depth + 1, out);
        }
    }
}
