use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::block::{Block, Document, Inline, List};
use crate::config::Config;

/// Render a document as an HTML fragment.
pub fn render_html(doc: &Document, config: &Config) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        emit_block(block, config, &mut out);
    }
    out
}

fn emit_block(block: &Block, config: &Config, out: &mut String) {
    match block {
        Block::Paragraph { content } => {
            out.push_str("<p");
            push_attr(out, "class", &config.classes.paragraph);
            out.push('>');
            inlines_to_html(content, config, out);
            out.push_str("</p>\n");
        }
        Block::List(list) => list_to_html(list, config, out),
    }
}

fn list_to_html(list: &List, config: &Config, out: &mut String) {
    let tag = if list.ordered { "ol" } else { "ul" };
    out.push('<');
    out.push_str(tag);
    push_attr(out, "class", &config.classes.list);
    out.push_str(">\n");

    for item in &list.items {
        out.push_str("<li>");
        inlines_to_html(&item.content, config, out);
        if let Some(nested) = &item.nested {
            out.push('\n');
            list_to_html(nested, config, out);
        }
        out.push_str("</li>\n");
    }

    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn inlines_to_html(spans: &[Inline], config: &Config, out: &mut String) {
    for span in spans {
        match span {
            Inline::Text { text } => out.push_str(&encode_text(text)),
            Inline::Bold { text } => {
                out.push_str("<strong>");
                out.push_str(&encode_text(text));
                out.push_str("</strong>");
            }
            Inline::Link { label, url } if !is_safe_url(url) => {
                log::debug!("dropping link with disallowed scheme: {url}");
                out.push_str(&encode_text(label));
            }
            Inline::Link { label, url } => {
                out.push_str("<a");
                push_attr(out, "href", url);
                push_attr(out, "target", &config.links.target);
                push_attr(out, "rel", &config.links.rel);
                push_attr(out, "class", &config.links.class);
                out.push('>');
                out.push_str(&encode_text(label));
                out.push_str("</a>");
            }
        }
    }
}

/// Schemes a rendered link may use. Scheme-less URLs are relative and allowed.
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Whether `url` is relative or uses an allowed scheme. Browsers ignore
/// whitespace and control characters inside a scheme, so those are skipped.
fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let scheme_end = cleaned.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(end) if cleaned[end..].starts_with(':') => {
            let scheme = &cleaned[..end];
            ALLOWED_SCHEMES
                .iter()
                .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
        }
        _ => true,
    }
}

/// Append ` name="value"`, skipping empty optional attributes. `href` is
/// always written.
fn push_attr(out: &mut String, name: &str, value: &str) {
    if value.is_empty() && name != "href" {
        return;
    }
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}
